//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate the bind address parses as a socket address
//! - Reject empty storage paths
//!
//! # Design Decisions
//! - Returns all validation errors, not just the first
//! - Validation is a pure function: AppConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::net::SocketAddr;

use crate::config::schema::AppConfig;

/// A single semantic problem found in a configuration.
#[derive(Debug, PartialEq, Eq)]
pub enum ValidationError {
    InvalidBindAddress(String),
    EmptyStoragePath(&'static str),
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::InvalidBindAddress(addr) => {
                write!(f, "invalid bind address: {}", addr)
            }
            ValidationError::EmptyStoragePath(field) => {
                write!(f, "storage path must not be empty: {}", field)
            }
        }
    }
}

/// Check semantic constraints on a deserialized configuration.
pub fn validate_config(config: &AppConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.listener.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::InvalidBindAddress(
            config.listener.bind_address.clone(),
        ));
    }

    let paths = [
        ("storage.users_path", &config.storage.users_path),
        ("storage.news_path", &config.storage.news_path),
        ("storage.dashboard_path", &config.storage.dashboard_path),
    ];
    for (field, path) in paths {
        if path.as_os_str().is_empty() {
            errors.push(ValidationError::EmptyStoragePath(field));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
