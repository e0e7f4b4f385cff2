//! `/api/mission` endpoints: field reporting by rescue teams.

use uuid::Uuid;

use crate::net::error::ApiError;
use crate::net::http::ApiClient;
use crate::net::types::UpdateProgress;

/// Report mission progress (MOVING, ARRIVED, RESCUING, COMPLETED) with a
/// note the coordinator and the citizen both see.
///
/// # Errors
///
/// `Forbidden` outside rescue-team sessions, `Api` on an invalid
/// transition.
pub async fn update_progress(
    api: &ApiClient,
    request_id: Uuid,
    body: &UpdateProgress,
) -> Result<(), ApiError> {
    api.put(&format!("/api/mission/requests/{request_id}/progress"), body)
        .await?
        .into_unit()
}
