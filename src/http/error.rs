//! Error-to-response mapping at the handler boundary.
//!
//! Every failure becomes a JSON body `{"error": <message>}` with a status
//! in {400, 404, 500}. Nothing is retried; storage details are logged but
//! not exposed to clients.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

use crate::store::StoreError;

/// Failures a handler can surface to the client.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Record store read or write failed. The message is the
    /// client-facing text; the source carries the storage detail.
    #[error("{message}")]
    Storage {
        message: &'static str,
        #[source]
        source: StoreError,
    },

    /// Request body missing or not matching the declared schema.
    #[error("Invalid input")]
    Validation,

    /// Approval target not present in the dashboard collection.
    #[error("User not found")]
    NotFound,
}

impl ApiError {
    /// Wrap a storage failure with the message the client should see.
    pub fn storage(message: &'static str, source: StoreError) -> Self {
        Self::Storage { message, source }
    }

    fn status(&self) -> StatusCode {
        match self {
            ApiError::Storage { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::Validation => StatusCode::BAD_REQUEST,
            ApiError::NotFound => StatusCode::NOT_FOUND,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let ApiError::Storage { message, ref source } = self {
            tracing::error!(error = %source, "{message}");
        }
        let status = self.status();
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}
