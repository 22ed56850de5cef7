//! The five request handlers.
//!
//! # Responsibilities
//! - Fetch handlers: materialize a collection and return it as JSON
//! - Check-in: append a Pending record to the dashboard collection
//! - Approve: resolve a Pending record and persist the outcome
//!
//! # Design Decisions
//! - Each write is a full read-modify-write of the backing file; there is
//!   no locking, so concurrent writers race and the last write wins
//! - Approval writes the mutated dashboard collection to the users file,
//!   preserving the original service's behavior exactly

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Deserializer, Serialize};

use crate::http::error::ApiError;
use crate::http::sanitize::{sanitize_text, Sanitize};
use crate::http::server::AppState;
use crate::store::{self, Record};

/// Envelope for the users and news collections.
#[derive(Debug, Serialize)]
pub struct CollectionResponse {
    pub success: bool,
    pub data: Vec<Record>,
}

/// Confirmation body for the write operations.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Body of `POST /checkin`.
#[derive(Debug, Deserialize)]
pub struct CheckInRequest {
    pub name: String,

    /// Amount paid. The original service coerced this field through a
    /// string, so both `50` and `"50"` are accepted on the wire.
    #[serde(deserialize_with = "number_or_text")]
    pub kas: f64,
}

impl Sanitize for CheckInRequest {
    fn sanitized(mut self) -> Self {
        self.name = sanitize_text(&self.name);
        self
    }
}

/// Body of `POST /approve`.
#[derive(Debug, Deserialize)]
pub struct ApproveRequest {
    pub name: String,
    pub approve: bool,
}

impl Sanitize for ApproveRequest {
    fn sanitized(mut self) -> Self {
        self.name = sanitize_text(&self.name);
        self
    }
}

/// Accept a JSON number or a numeric string.
fn number_or_text<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(f64),
        Text(String),
    }

    match Raw::deserialize(deserializer)? {
        Raw::Number(n) => Ok(n),
        Raw::Text(s) => s
            .trim()
            .parse()
            .map_err(|_| serde::de::Error::custom("expected a numeric amount")),
    }
}

/// `GET /data`
pub async fn fetch_users(
    State(state): State<AppState>,
) -> Result<Json<CollectionResponse>, ApiError> {
    let data = store::read_records(&state.config.storage.users_path)
        .map_err(|e| ApiError::storage("Failed to read user data file", e))?;
    Ok(Json(CollectionResponse { success: true, data }))
}

/// `GET /berita`
pub async fn fetch_news(
    State(state): State<AppState>,
) -> Result<Json<CollectionResponse>, ApiError> {
    let data = store::read_records(&state.config.storage.news_path)
        .map_err(|e| ApiError::storage("Failed to read news data file", e))?;
    Ok(Json(CollectionResponse { success: true, data }))
}

/// `GET /dashboard`
///
/// Unlike the other fetches, the response is the bare record array.
pub async fn fetch_dashboard(
    State(state): State<AppState>,
) -> Result<Json<Vec<Record>>, ApiError> {
    let data = store::read_records(&state.config.storage.dashboard_path)
        .map_err(|e| ApiError::storage("Failed to load dashboard data", e))?;
    Ok(Json(data))
}

/// `POST /checkin`
///
/// Appends unconditionally; an existing record with the same name is not
/// deduplicated.
pub async fn check_in(
    State(state): State<AppState>,
    body: Result<Json<CheckInRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(request) = body.map_err(|rejection| {
        tracing::warn!(error = %rejection, "Rejected check-in body");
        ApiError::Validation
    })?;
    let request = request.sanitized();

    let path = &state.config.storage.dashboard_path;
    let mut records = store::read_records(path)
        .map_err(|e| ApiError::storage("Failed to load data", e))?;

    tracing::debug!(name = %request.name, kas = request.kas, "Check-in");
    records.push(Record::pending(request.name, request.kas));

    store::write_records(path, &records)
        .map_err(|e| ApiError::storage("Failed to save check-in", e))?;

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse {
            message: "Check-in request sent!".to_string(),
        }),
    ))
}

/// `POST /approve`
///
/// Mutates the first dashboard record matching the name (exact,
/// case-sensitive), then writes the whole collection to the users file.
pub async fn approve(
    State(state): State<AppState>,
    body: Result<Json<ApproveRequest>, JsonRejection>,
) -> Result<Json<MessageResponse>, ApiError> {
    let Json(request) = body.map_err(|rejection| {
        tracing::warn!(error = %rejection, "Rejected approval body");
        ApiError::Validation
    })?;
    let request = request.sanitized();

    let mut records = store::read_records(&state.config.storage.dashboard_path)
        .map_err(|e| ApiError::storage("Failed to load data", e))?;

    let record = records
        .iter_mut()
        .find(|r| r.name == request.name)
        .ok_or(ApiError::NotFound)?;

    if request.approve {
        record.status = Record::APPROVED.to_string();
        record.amount += 1.0;
    } else {
        record.status = Record::REJECTED.to_string();
    }

    tracing::debug!(name = %request.name, approve = request.approve, "Approval decided");

    store::write_records(&state.config.storage.users_path, &records)
        .map_err(|e| ApiError::storage("Failed to save approval", e))?;

    let verdict = if request.approve { "approved" } else { "rejected" };
    Ok(Json(MessageResponse {
        message: format!("User {verdict}"),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kas_accepts_number_or_string() {
        let a: CheckInRequest = serde_json::from_str(r#"{"name":"Alice","kas":50}"#).unwrap();
        assert_eq!(a.kas, 50.0);

        let b: CheckInRequest = serde_json::from_str(r#"{"name":"Alice","kas":"50"}"#).unwrap();
        assert_eq!(b.kas, 50.0);

        assert!(serde_json::from_str::<CheckInRequest>(r#"{"name":"Alice","kas":"lots"}"#).is_err());
    }

    #[test]
    fn test_check_in_body_sanitized() {
        let request: CheckInRequest =
            serde_json::from_str(r#"{"name":" Al\nice ","kas":1}"#).unwrap();
        assert_eq!(request.sanitized().name, "Alice");
    }
}
