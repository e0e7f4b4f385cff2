//! `/api/rescue-requests` endpoints: the citizen-facing surface.

use crate::net::error::ApiError;
use crate::net::http::ApiClient;
use crate::net::types::{CreateRequestResponse, CreateRescueRequest, TrackedRequest};

/// Submit a rescue request. Anonymous submissions are allowed; the
/// response carries the tracking code for later lookups.
///
/// # Errors
///
/// `Api` with the validation message on rejected input.
pub async fn create_request(
    api: &ApiClient,
    request: &CreateRescueRequest,
) -> Result<CreateRequestResponse, ApiError> {
    api.post("/api/rescue-requests", request).await?.into_json()
}

/// Look up a request by tracking code.
///
/// # Errors
///
/// `Api` when the code is unknown.
pub async fn track(api: &ApiClient, code: &str) -> Result<TrackedRequest, ApiError> {
    api.get(&format!("/api/rescue-requests/track?code={code}"))
        .await?
        .into_json()
}

/// Confirm a completed rescue and leave feedback.
///
/// # Errors
///
/// `Api` when the request is not in a confirmable state.
pub async fn confirm_completion(
    api: &ApiClient,
    request_id: uuid::Uuid,
    tracking_code: &str,
    feedback: &str,
    rating: u8,
) -> Result<(), ApiError> {
    api.post(
        &format!("/api/rescue-requests/{request_id}/confirm"),
        &serde_json::json!({
            "trackingCode": tracking_code,
            "feedback": feedback,
            "rating": rating,
        }),
    )
    .await?
    .into_unit()
}
