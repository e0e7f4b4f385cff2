//! `/api/manager/supplies` endpoints.

use crate::net::error::ApiError;
use crate::net::http::ApiClient;
use crate::net::types::{Supply, SupplyPayload};

/// All supply stock lines.
///
/// # Errors
///
/// `Forbidden` outside manager/admin sessions.
pub async fn list_supplies(api: &ApiClient) -> Result<Vec<Supply>, ApiError> {
    api.get("/api/manager/supplies").await?.into_json()
}

/// Supplies with stock on hand.
///
/// # Errors
///
/// Same as [`list_supplies`].
pub async fn available_supplies(api: &ApiClient) -> Result<Vec<Supply>, ApiError> {
    api.get("/api/manager/supplies?available=true").await?.into_json()
}

/// Add a stock line.
///
/// # Errors
///
/// `Api` with the validation message on rejected input.
pub async fn create_supply(api: &ApiClient, payload: &SupplyPayload) -> Result<Supply, ApiError> {
    api.post("/api/manager/supplies", payload).await?.into_json()
}

/// Update a stock line.
///
/// # Errors
///
/// `Api` when the supply is unknown.
pub async fn update_supply(
    api: &ApiClient,
    supply_id: i64,
    payload: &SupplyPayload,
) -> Result<Supply, ApiError> {
    api.put(&format!("/api/manager/supplies/{supply_id}"), payload)
        .await?
        .into_json()
}

/// Remove a stock line.
///
/// # Errors
///
/// `Api` when the supply is reserved by an assignment.
pub async fn delete_supply(api: &ApiClient, supply_id: i64) -> Result<(), ApiError> {
    api.delete(&format!("/api/manager/supplies/{supply_id}")).await?.into_unit()
}
