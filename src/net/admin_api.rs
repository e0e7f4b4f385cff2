//! `/api/admin/users` endpoints.

use crate::net::error::ApiError;
use crate::net::http::ApiClient;
use crate::net::types::UserSummary;

/// All registered users with their role and team membership.
///
/// # Errors
///
/// `Forbidden` outside admin sessions.
pub async fn list_users(api: &ApiClient) -> Result<Vec<UserSummary>, ApiError> {
    api.get("/api/admin/users").await?.into_json()
}
