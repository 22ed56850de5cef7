//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware, security headers)
//!     → sanitize.rs (declared string fields cleaned per endpoint)
//!     → handlers.rs (read store → mutate → write store)
//!     → error.rs (failures mapped to {"error": ...} + status)
//! ```

pub mod error;
pub mod handlers;
pub mod sanitize;
pub mod server;

pub use error::ApiError;
pub use server::{AppState, HttpServer};
