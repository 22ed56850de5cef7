//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup:  load config → validate → bind listener → serve
//! Shutdown: Ctrl+C or Shutdown::trigger → stop accepting → drain → exit
//! ```

pub mod shutdown;

pub use shutdown::Shutdown;
