//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML, optional)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → AppConfig (validated, immutable)
//!     → shared via Arc to the HTTP server and handlers
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; there is no global mutable state
//! - All fields have defaults matching the original deployment, so the
//!   server runs with no config file at all
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, ConfigError};
pub use schema::{AppConfig, ListenerConfig, StorageConfig, TimeoutConfig};
