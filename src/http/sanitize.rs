//! Request body sanitization.
//!
//! # Design Decisions
//! - Sanitization is per-endpoint and schema-driven: each request struct
//!   declares which of its fields are text, and only those are cleaned
//! - The transform matches the original service: strip newlines first,
//!   then trim surrounding whitespace

/// Remove all newline characters, then trim leading/trailing whitespace.
pub fn sanitize_text(input: &str) -> String {
    input.replace('\n', "").trim().to_string()
}

/// Implemented by request bodies whose string fields need cleaning before
/// the handler acts on them.
pub trait Sanitize: Sized {
    /// Consume the body and return it with declared string fields cleaned.
    fn sanitized(self) -> Self;
}
