//! `/api/manager/vehicles` endpoints.

use crate::net::error::ApiError;
use crate::net::http::ApiClient;
use crate::net::types::{Vehicle, VehiclePayload, VehicleStatus};

/// All vehicles with their current assignment, if any.
///
/// # Errors
///
/// `Forbidden` outside manager/admin sessions.
pub async fn list_vehicles(api: &ApiClient) -> Result<Vec<Vehicle>, ApiError> {
    api.get("/api/manager/vehicles").await?.into_json()
}

/// Vehicles free for assignment.
///
/// # Errors
///
/// Same as [`list_vehicles`].
pub async fn available_vehicles(api: &ApiClient) -> Result<Vec<Vehicle>, ApiError> {
    api.get(&format!("/api/manager/vehicles?status={}", VehicleStatus::Available.as_str()))
        .await?
        .into_json()
}

/// Register a vehicle.
///
/// # Errors
///
/// `Api` with the validation message on rejected input.
pub async fn create_vehicle(api: &ApiClient, payload: &VehiclePayload) -> Result<Vehicle, ApiError> {
    api.post("/api/manager/vehicles", payload).await?.into_json()
}

/// Update a vehicle, including forcing its status (e.g. MAINTENANCE).
///
/// # Errors
///
/// `Api` when the vehicle is unknown.
pub async fn update_vehicle(
    api: &ApiClient,
    vehicle_id: i64,
    payload: &VehiclePayload,
) -> Result<Vehicle, ApiError> {
    api.put(&format!("/api/manager/vehicles/{vehicle_id}"), payload)
        .await?
        .into_json()
}

/// Remove a vehicle from the fleet.
///
/// # Errors
///
/// `Api` when the vehicle is in use.
pub async fn delete_vehicle(api: &ApiClient, vehicle_id: i64) -> Result<(), ApiError> {
    api.delete(&format!("/api/manager/vehicles/{vehicle_id}")).await?.into_unit()
}
