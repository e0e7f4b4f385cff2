//! Typed failures for the REST layer.
//!
//! Nothing here is fatal: every variant is surfaced to the calling view,
//! which owns user-facing messaging. The transport layer resolves exactly
//! one class on its own (a first 401, via refresh); everything else
//! propagates unchanged.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use thiserror::Error;

/// Failure taxonomy for every outbound request.
///
/// `Clone` because refresh failures fan out to every request waiting on
/// the shared refresh future.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ApiError {
    /// Transport-level failure; the request may never have reached the
    /// backend. Views suggest a retry.
    #[error("network error: {0}")]
    Network(String),
    /// Terminal 401: unauthenticated and no refresh was possible.
    #[error("unauthorized: {0}")]
    Unauthorized(String),
    /// The refresh call itself failed; the session is gone.
    #[error("session expired: {0}")]
    SessionExpired(String),
    /// Authenticated but not allowed to touch this resource. Never clears
    /// the session.
    #[error("forbidden: {0}")]
    Forbidden(String),
    /// Any other non-2xx, message extracted from the backend body.
    #[error("{message}")]
    Api { status: u16, message: String },
    /// A 2xx body this client could not parse.
    #[error("invalid response body: {0}")]
    Decode(String),
    /// The session was closed while the request was in flight.
    #[error("request cancelled by logout")]
    Cancelled,
}

/// Pull the human-readable message out of a backend error body.
///
/// Validation failures arrive as `{"message": "..."}`; some middleware
/// errors use `{"error": "..."}` instead. Plain-text bodies pass through
/// and an empty body falls back to the status code.
#[must_use]
pub fn extract_message(status: u16, body: &str) -> String {
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(body) {
        if let Some(message) = value.get("message").and_then(|m| m.as_str()) {
            return message.to_owned();
        }
        if let Some(error) = value.get("error").and_then(|m| m.as_str()) {
            return error.to_owned();
        }
    }
    let trimmed = body.trim();
    if trimmed.is_empty() {
        format!("request failed with status {status}")
    } else {
        trimmed.to_owned()
    }
}
