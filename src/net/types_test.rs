use super::*;
use serde_json::json;

#[test]
fn request_summary_deserializes_the_backend_shape() {
    let summary: RequestSummary = serde_json::from_value(json!({
        "requestId": "6f9619ff-8b86-d011-b42d-00c04fc964ff",
        "title": "Family on a rooftop",
        "emergencyLevel": "HIGH",
        "status": "IN_PROGRESS",
        "peopleCount": 4,
        "createdAt": "2025-03-04T17:32:00",
        "contactName": "Nguyen Van A",
        "contactPhone": "0912345678"
    }))
    .expect("summary");

    assert_eq!(summary.emergency_level, EmergencyLevel::High);
    assert_eq!(summary.status, RequestStatus::InProgress);
    assert_eq!(summary.people_count, 4);
    assert!(summary.created_at.is_some());
}

#[test]
fn token_pair_response_allows_missing_rotation() {
    let pair: TokenPairResponse =
        serde_json::from_value(json!({"accessToken": "a-1"})).expect("pair");
    assert_eq!(pair.access_token, "a-1");
    assert!(pair.refresh_token.is_none());
}

#[test]
fn vehicle_type_field_uses_the_reserved_word() {
    let vehicle: Vehicle = serde_json::from_value(json!({
        "id": 3,
        "name": "Rescue Boat 1",
        "type": "BOAT",
        "licensePlate": "59A-123.45",
        "capacity": 8,
        "status": "IN_USE",
        "currentTeamId": 2,
        "currentTeamName": "Alpha"
    }))
    .expect("vehicle");

    assert_eq!(vehicle.vehicle_type, "BOAT");
    assert_eq!(vehicle.status, VehicleStatus::InUse);

    let payload = serde_json::to_value(VehiclePayload {
        name: "Rescue Boat 1".to_owned(),
        vehicle_type: "BOAT".to_owned(),
        license_plate: "59A-123.45".to_owned(),
        capacity: Some(8),
        status: VehicleStatus::Maintenance,
    })
    .expect("payload");
    assert_eq!(payload["type"], json!("BOAT"));
    assert_eq!(payload["status"], json!("MAINTENANCE"));
}

#[test]
fn assign_task_serializes_camel_case() {
    let value = serde_json::to_value(AssignTask {
        rescue_team_id: 5,
        vehicle_id: None,
        supplies: vec![AssignSupply { supply_id: 9, quantity: 3 }],
        note: "Take the shallow route".to_owned(),
        emergency_level: EmergencyLevel::Critical,
    })
    .expect("assign task");

    assert_eq!(value["rescueTeamId"], json!(5));
    assert_eq!(value["vehicleId"], json!(null));
    assert_eq!(value["supplies"][0]["supplyId"], json!(9));
    assert_eq!(value["emergencyLevel"], json!("CRITICAL"));
}

#[test]
fn supply_type_round_trips_the_wire_code() {
    assert_eq!(
        serde_json::from_str::<SupplyType>(r#""FOOD_WATER""#).expect("type"),
        SupplyType::FoodWater
    );
    assert_eq!(serde_json::to_string(&SupplyType::FoodWater).expect("json"), r#""FOOD_WATER""#);
    assert_eq!(SupplyType::FoodWater.as_str(), "FOOD_WATER");
}

#[test]
fn status_labels_come_from_the_single_table() {
    assert_eq!(RequestStatus::Verified.label(), "Validated");
    assert_eq!(RequestStatus::InProgress.label(), "In Progress");
    assert_eq!(TeamStatus::OffDuty.label(), "Off Duty");
    assert_eq!(VehicleStatus::InUse.label(), "In Use");
}

#[test]
fn legacy_normal_level_displays_as_medium() {
    assert_eq!(EmergencyLevel::Normal.label(), "Medium");
    assert_eq!(EmergencyLevel::Normal.badge_class(), EmergencyLevel::Medium.badge_class());
    assert!(!EmergencyLevel::SELECTABLE.contains(&EmergencyLevel::Normal));
}

#[test]
fn in_progress_covers_every_field_phase() {
    for status in [
        RequestStatus::InProgress,
        RequestStatus::Moving,
        RequestStatus::Arrived,
        RequestStatus::Rescuing,
    ] {
        assert!(status.is_in_progress(), "{status:?}");
    }
    assert!(!RequestStatus::Pending.is_in_progress());
    assert!(!RequestStatus::Completed.is_in_progress());
}
