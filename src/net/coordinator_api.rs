//! `/api/coordinator` endpoints: request validation and dispatch.

use uuid::Uuid;

use crate::net::error::ApiError;
use crate::net::http::ApiClient;
use crate::net::types::{AssignTask, RequestDetail, RequestStatus, RequestSummary, VerifyRequest};

/// List rescue requests, optionally narrowed to one status.
///
/// # Errors
///
/// `Forbidden` for non-coordinator sessions; transport errors otherwise.
pub async fn list_requests(
    api: &ApiClient,
    status: Option<RequestStatus>,
) -> Result<Vec<RequestSummary>, ApiError> {
    let url = match status {
        Some(status) => format!("/api/coordinator/requests?status={}", status.as_str()),
        None => "/api/coordinator/requests".to_owned(),
    };
    api.get(&url).await?.into_json()
}

/// Full detail for one request.
///
/// # Errors
///
/// `Api` when the id is unknown.
pub async fn request_detail(api: &ApiClient, request_id: Uuid) -> Result<RequestDetail, ApiError> {
    api.get(&format!("/api/coordinator/requests/{request_id}"))
        .await?
        .into_json()
}

/// Validate a pending request (PENDING to VERIFIED), optionally adjusting
/// its emergency level.
///
/// # Errors
///
/// `Api` when the request left the PENDING state meanwhile.
pub async fn verify_request(
    api: &ApiClient,
    request_id: Uuid,
    body: &VerifyRequest,
) -> Result<(), ApiError> {
    api.post(&format!("/api/coordinator/requests/{request_id}/verify"), body)
        .await?
        .into_unit()
}

/// Assign a team plus optional vehicle and supplies (VERIFIED to
/// IN_PROGRESS).
///
/// # Errors
///
/// `Api` when resources are unavailable or the request moved on.
pub async fn assign_task(api: &ApiClient, request_id: Uuid, body: &AssignTask) -> Result<(), ApiError> {
    api.post(&format!("/api/coordinator/requests/{request_id}/assign"), body)
        .await?
        .into_unit()
}

/// Cancel a request with a reason (spam, duplicate, no longer needed).
///
/// # Errors
///
/// `Api` when the request cannot be cancelled anymore.
pub async fn cancel_request(api: &ApiClient, request_id: Uuid, reason: &str) -> Result<(), ApiError> {
    api.post(
        &format!("/api/coordinator/requests/{request_id}/cancel"),
        &serde_json::json!({ "reason": reason }),
    )
    .await?
    .into_unit()
}
