//! Wire types shared with the FloodCoord REST backend.
//!
//! Field names mirror the backend's camelCase JSON; enum codes are the
//! backend's SCREAMING_SNAKE values. Display labels and badge classes
//! live here, on the enums, so list views, selects, and badges never
//! drift apart.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// =============================================================
// Auth
// =============================================================

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Token pair from login and refresh. Refresh responses may omit the
/// rotated refresh token; the stored one then stays valid.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenPairResponse {
    pub access_token: String,
    #[serde(default)]
    pub refresh_token: Option<String>,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub full_name: String,
    pub email: String,
    pub phone_number: String,
    pub password: String,
    pub confirm_password: String,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResetPasswordRequest {
    pub token: String,
    pub new_password: String,
}

// =============================================================
// Status enums with their single display tables
// =============================================================

/// Lifecycle of a rescue request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RequestStatus {
    Pending,
    Verified,
    InProgress,
    Moving,
    Arrived,
    Rescuing,
    Completed,
    Cancelled,
}

impl RequestStatus {
    pub const ALL: [Self; 8] = [
        Self::Pending,
        Self::Verified,
        Self::InProgress,
        Self::Moving,
        Self::Arrived,
        Self::Rescuing,
        Self::Completed,
        Self::Cancelled,
    ];

    /// Statuses a rescue team reports while on a mission.
    pub const MISSION_PROGRESS: [Self; 4] = [Self::Moving, Self::Arrived, Self::Rescuing, Self::Completed];

    /// Parse a wire code, e.g. from a select element.
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|status| status.as_str() == code)
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "PENDING",
            Self::Verified => "VERIFIED",
            Self::InProgress => "IN_PROGRESS",
            Self::Moving => "MOVING",
            Self::Arrived => "ARRIVED",
            Self::Rescuing => "RESCUING",
            Self::Completed => "COMPLETED",
            Self::Cancelled => "CANCELLED",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Verified => "Validated",
            Self::InProgress => "In Progress",
            Self::Moving => "Moving",
            Self::Arrived => "Arrived",
            Self::Rescuing => "Rescuing",
            Self::Completed => "Completed",
            Self::Cancelled => "Cancelled",
        }
    }

    #[must_use]
    pub fn badge_class(self) -> &'static str {
        match self {
            Self::Pending => "badge badge--gray",
            Self::Verified => "badge badge--cyan",
            Self::InProgress => "badge badge--blue",
            Self::Moving => "badge badge--purple",
            Self::Arrived => "badge badge--indigo",
            Self::Rescuing => "badge badge--yellow",
            Self::Completed => "badge badge--green",
            Self::Cancelled => "badge badge--red",
        }
    }

    /// An active mission in any of its on-the-ground phases.
    #[must_use]
    pub fn is_in_progress(self) -> bool {
        matches!(self, Self::InProgress | Self::Moving | Self::Arrived | Self::Rescuing)
    }
}

/// Urgency assigned to a rescue request. `Normal` is a legacy alias the
/// backend still emits; it displays as Medium.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EmergencyLevel {
    Critical,
    High,
    Medium,
    Normal,
    Low,
}

impl EmergencyLevel {
    /// Levels offered in forms; `Normal` is read-only legacy.
    pub const SELECTABLE: [Self; 4] = [Self::Critical, Self::High, Self::Medium, Self::Low];

    /// Parse a wire code, e.g. from a select element.
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "CRITICAL" => Some(Self::Critical),
            "HIGH" => Some(Self::High),
            "MEDIUM" => Some(Self::Medium),
            "NORMAL" => Some(Self::Normal),
            "LOW" => Some(Self::Low),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Critical => "CRITICAL",
            Self::High => "HIGH",
            Self::Medium => "MEDIUM",
            Self::Normal => "NORMAL",
            Self::Low => "LOW",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Critical => "Critical",
            Self::High => "High",
            Self::Medium | Self::Normal => "Medium",
            Self::Low => "Low",
        }
    }

    #[must_use]
    pub fn badge_class(self) -> &'static str {
        match self {
            Self::Critical => "badge badge--red",
            Self::High => "badge badge--orange",
            Self::Medium | Self::Normal => "badge badge--green",
            Self::Low => "badge badge--gray",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TeamStatus {
    Available,
    Busy,
    OffDuty,
}

impl TeamStatus {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Available => "AVAILABLE",
            Self::Busy => "BUSY",
            Self::OffDuty => "OFF_DUTY",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Available => "Available",
            Self::Busy => "Busy",
            Self::OffDuty => "Off Duty",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VehicleStatus {
    Available,
    InUse,
    Maintenance,
    Unavailable,
}

impl VehicleStatus {
    pub const ALL: [Self; 4] = [Self::Available, Self::InUse, Self::Maintenance, Self::Unavailable];

    /// Parse a wire code, e.g. from a select element.
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|status| status.as_str() == code)
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Available => "AVAILABLE",
            Self::InUse => "IN_USE",
            Self::Maintenance => "MAINTENANCE",
            Self::Unavailable => "UNAVAILABLE",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Available => "Available",
            Self::InUse => "In Use",
            Self::Maintenance => "Maintenance",
            Self::Unavailable => "Unavailable",
        }
    }

    #[must_use]
    pub fn badge_class(self) -> &'static str {
        match self {
            Self::Available => "badge badge--green",
            Self::InUse => "badge badge--blue",
            Self::Maintenance => "badge badge--yellow",
            Self::Unavailable => "badge badge--red",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SupplyType {
    FoodWater,
    Medical,
    Equipment,
    Other,
}

impl SupplyType {
    pub const ALL: [Self; 4] = [Self::FoodWater, Self::Medical, Self::Equipment, Self::Other];

    /// Parse a wire code, e.g. from a select element.
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.as_str() == code)
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::FoodWater => "FOOD_WATER",
            Self::Medical => "MEDICAL",
            Self::Equipment => "EQUIPMENT",
            Self::Other => "OTHER",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::FoodWater => "Food & Water",
            Self::Medical => "Medical",
            Self::Equipment => "Equipment",
            Self::Other => "Other",
        }
    }
}

// =============================================================
// Rescue requests
// =============================================================

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestLocation {
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default)]
    pub address_text: Option<String>,
    #[serde(default)]
    pub flood_depth: Option<f32>,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateRescueRequest {
    pub title: String,
    pub description: String,
    pub emergency_level: EmergencyLevel,
    pub people_count: u32,
    pub contact_name: String,
    pub contact_phone: String,
    pub location: RequestLocation,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateRequestResponse {
    pub request_id: Uuid,
    pub tracking_code: String,
}

/// Citizen-facing view of a request, looked up by tracking code.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackedRequest {
    pub id: Uuid,
    pub tracking_code: String,
    pub status: RequestStatus,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub assigned_team_name: Option<String>,
    #[serde(default)]
    pub assigned_team_phone: Option<String>,
    #[serde(default)]
    pub coordinator_note: Option<String>,
    #[serde(default)]
    pub created_at: Option<NaiveDateTime>,
    #[serde(default)]
    pub completed_at: Option<NaiveDateTime>,
}

/// Coordinator queue row.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestSummary {
    pub request_id: Uuid,
    pub title: String,
    pub emergency_level: EmergencyLevel,
    pub status: RequestStatus,
    pub people_count: u32,
    #[serde(default)]
    pub created_at: Option<NaiveDateTime>,
    #[serde(default)]
    pub contact_name: Option<String>,
    #[serde(default)]
    pub contact_phone: Option<String>,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaItem {
    pub media_id: Uuid,
    #[serde(default)]
    pub media_type: Option<String>,
    pub media_url: String,
    #[serde(default)]
    pub uploaded_at: Option<NaiveDateTime>,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestDetail {
    pub request_id: Uuid,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub emergency_level: EmergencyLevel,
    pub status: RequestStatus,
    pub people_count: u32,
    #[serde(default)]
    pub created_at: Option<NaiveDateTime>,
    #[serde(default)]
    pub citizen_name: Option<String>,
    #[serde(default)]
    pub location: Option<RequestLocation>,
    #[serde(default)]
    pub media: Vec<MediaItem>,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VerifyRequest {
    pub emergency_level: EmergencyLevel,
    pub note: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignSupply {
    pub supply_id: i64,
    pub quantity: u32,
}

/// Multi-resource assignment: team required, vehicle and supplies
/// optional, plus instructions for the team.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignTask {
    pub rescue_team_id: i64,
    pub vehicle_id: Option<i64>,
    pub supplies: Vec<AssignSupply>,
    pub note: String,
    pub emergency_level: EmergencyLevel,
}

/// Mission progress report from the field.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProgress {
    pub status: RequestStatus,
    pub note: String,
}

// =============================================================
// Inventories
// =============================================================

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSummary {
    pub id: i64,
    pub email: String,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub phone_number: Option<String>,
    #[serde(default)]
    pub status: Option<bool>,
    #[serde(default)]
    pub role_name: Option<String>,
    #[serde(default)]
    pub team_id: Option<i64>,
    #[serde(default)]
    pub team_name: Option<String>,
    #[serde(default)]
    pub is_team_leader: Option<bool>,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RescueTeam {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub is_active: Option<bool>,
    #[serde(default)]
    pub leader_id: Option<i64>,
    #[serde(default)]
    pub leader_name: Option<String>,
    #[serde(default)]
    pub members: Vec<UserSummary>,
}

/// Create/update payload for a rescue team.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RescueTeamPayload {
    pub name: String,
    pub description: String,
    pub leader_id: Option<i64>,
    pub member_ids: Vec<i64>,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vehicle {
    pub id: i64,
    pub name: String,
    #[serde(rename = "type")]
    pub vehicle_type: String,
    #[serde(default)]
    pub license_plate: Option<String>,
    #[serde(default)]
    pub capacity: Option<u32>,
    pub status: VehicleStatus,
    #[serde(default)]
    pub current_team_id: Option<i64>,
    #[serde(default)]
    pub current_team_name: Option<String>,
}

/// Create/update payload for a vehicle. The manager can set the status
/// directly, e.g. to park a boat in `MAINTENANCE`.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VehiclePayload {
    pub name: String,
    #[serde(rename = "type")]
    pub vehicle_type: String,
    pub license_plate: String,
    pub capacity: Option<u32>,
    pub status: VehicleStatus,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Supply {
    pub id: i64,
    pub name: String,
    #[serde(rename = "type")]
    pub supply_type: SupplyType,
    pub quantity: u32,
    #[serde(default)]
    pub unit: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub imported_date: Option<NaiveDateTime>,
    #[serde(default)]
    pub exported_date: Option<NaiveDateTime>,
    #[serde(default)]
    pub expiry_date: Option<NaiveDateTime>,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SupplyPayload {
    pub name: String,
    #[serde(rename = "type")]
    pub supply_type: SupplyType,
    pub quantity: u32,
    pub unit: String,
    pub description: String,
}
