//! `/api/admin/rescue-teams` endpoints.

use crate::net::error::ApiError;
use crate::net::http::ApiClient;
use crate::net::types::{RescueTeam, RescueTeamPayload, TeamStatus};

/// All rescue teams.
///
/// # Errors
///
/// `Forbidden` outside manager/admin sessions.
pub async fn list_teams(api: &ApiClient) -> Result<Vec<RescueTeam>, ApiError> {
    api.get("/api/admin/rescue-teams").await?.into_json()
}

/// Teams currently free to take an assignment.
///
/// # Errors
///
/// Same as [`list_teams`].
pub async fn available_teams(api: &ApiClient) -> Result<Vec<RescueTeam>, ApiError> {
    api.get(&format!("/api/admin/rescue-teams?status={}", TeamStatus::Available.as_str()))
        .await?
        .into_json()
}

/// Create a team.
///
/// # Errors
///
/// `Api` with the validation message on rejected input.
pub async fn create_team(api: &ApiClient, payload: &RescueTeamPayload) -> Result<RescueTeam, ApiError> {
    api.post("/api/admin/rescue-teams", payload).await?.into_json()
}

/// Update a team's roster or details.
///
/// # Errors
///
/// `Api` when the team is unknown or the roster is invalid.
pub async fn update_team(
    api: &ApiClient,
    team_id: i64,
    payload: &RescueTeamPayload,
) -> Result<RescueTeam, ApiError> {
    api.put(&format!("/api/admin/rescue-teams/{team_id}"), payload)
        .await?
        .into_json()
}

/// Delete a team.
///
/// # Errors
///
/// `Api` when the team is on an active mission.
pub async fn delete_team(api: &ApiClient, team_id: i64) -> Result<(), ApiError> {
    api.delete(&format!("/api/admin/rescue-teams/{team_id}")).await?.into_unit()
}
