//! kas-server: a spreadsheet-backed check-in/approval backend.
//!
//! # Architecture Overview
//!
//! ```text
//!                  ┌──────────────────────────────────────────────┐
//!                  │                  KAS SERVER                  │
//!                  │                                              │
//!   HTTP request   │  ┌─────────┐   ┌──────────┐   ┌──────────┐  │
//!   ───────────────┼─▶│  http   │──▶│ sanitize │──▶│ handlers │  │
//!                  │  │ server  │   └──────────┘   └────┬─────┘  │
//!                  │  └─────────┘                       │        │
//!                  │                                    ▼        │
//!                  │                              ┌──────────┐   │
//!   HTTP response  │                              │  store   │   │
//!   ◀──────────────┼──────────────────────────────│  (xlsx)  │   │
//!                  │                              └────┬─────┘   │
//!                  │                                   │         │
//!                  │  ┌────────────────────────┐       ▼         │
//!                  │  │ Cross-Cutting Concerns │  data/berita/   │
//!                  │  │ config · observability │  saved .xlsx    │
//!                  │  │ lifecycle              │  files          │
//!                  │  └────────────────────────┘                 │
//!                  └──────────────────────────────────────────────┘
//! ```
//!
//! Every request materializes its collection fresh from disk, mutates it
//! in memory, and (for writes) overwrites the whole file. The file is the
//! single source of truth; there is no cache and no locking, so two
//! concurrent writers race and the last write wins.

pub mod config;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod store;

pub use config::AppConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
pub use store::Record;
