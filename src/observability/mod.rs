//! Observability subsystem.
//!
//! # Design Decisions
//! - Structured logging via the tracing crate
//! - Log level configurable through `RUST_LOG`
//! - Per-request logging handled by tower-http's TraceLayer; handlers add
//!   domain events (check-ins, approvals, storage failures)

pub mod logging;

pub use logging::init_logging;
