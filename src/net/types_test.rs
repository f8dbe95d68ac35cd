use super::*;

// =============================================================
// Helpers
// =============================================================

fn make_user() -> User {
    User {
        id: "u-1".to_owned(),
        name: "Alice".to_owned(),
        email: "alice@example.com".to_owned(),
        age: 31,
        mobile_number: "+30123456789".to_owned(),
        job_type: None,
        gender: Gender::Female,
        role: Role::Viewer,
        hotel_id: None,
        is_active: true,
        created_at: "2024-01-01T00:00:00Z".to_owned(),
        last_login: None,
    }
}

fn make_room() -> Room {
    Room {
        id: "r-1".to_owned(),
        room_number: "101".to_owned(),
        hotel_id: "h-1".to_owned(),
        price_per_night: 120.0,
        description: Some("Sea view".to_owned()),
        kind: RoomType::Double,
        max_occupancy: 2,
        is_available: true,
        created_at: "2024-01-01T00:00:00Z".to_owned(),
    }
}

// =============================================================
// Enum encodings
// =============================================================

#[test]
fn role_serializes_to_snake_case() {
    assert_eq!(serde_json::to_string(&Role::Viewer).unwrap(), "\"viewer\"");
    assert_eq!(serde_json::to_string(&Role::AdminHotel).unwrap(), "\"admin_hotel\"");
    assert_eq!(serde_json::to_string(&Role::SuperAdmin).unwrap(), "\"super_admin\"");
}

#[test]
fn role_deserializes_from_snake_case() {
    assert_eq!(serde_json::from_str::<Role>("\"admin_hotel\"").unwrap(), Role::AdminHotel);
}

#[test]
fn reservation_type_round_trips() {
    for (variant, wire) in [
        (ReservationType::RoomOnly, "\"room_only\""),
        (ReservationType::BedBreakfast, "\"bed_breakfast\""),
        (ReservationType::AllInclusive, "\"all_inclusive\""),
    ] {
        assert_eq!(serde_json::to_string(&variant).unwrap(), wire);
        assert_eq!(serde_json::from_str::<ReservationType>(wire).unwrap(), variant);
    }
}

#[test]
fn reservation_type_defaults_to_room_only() {
    assert_eq!(ReservationType::default(), ReservationType::RoomOnly);
}

#[test]
fn reservation_status_uses_snake_case() {
    assert_eq!(serde_json::to_string(&ReservationStatus::CheckedIn).unwrap(), "\"checked_in\"");
    assert_eq!(
        serde_json::from_str::<ReservationStatus>("\"cancelled\"").unwrap(),
        ReservationStatus::Cancelled
    );
}

// =============================================================
// Struct field mapping
// =============================================================

#[test]
fn room_kind_maps_to_wire_field_type() {
    let json = serde_json::to_value(make_room()).unwrap();
    assert_eq!(json["type"], "double");
    assert!(json.get("kind").is_none());
}

#[test]
fn room_deserializes_from_backend_shape() {
    let raw = r#"{
        "id": "r-9",
        "room_number": "902",
        "hotel_id": "h-2",
        "price_per_night": 85.5,
        "description": null,
        "type": "single",
        "max_occupancy": 1,
        "is_available": false,
        "created_at": "2024-03-04T12:00:00Z"
    }"#;
    let room: Room = serde_json::from_str(raw).unwrap();
    assert_eq!(room.kind, RoomType::Single);
    assert_eq!(room.price_per_night, 85.5);
    assert!(!room.is_available);
}

#[test]
fn user_round_trips_through_json() {
    let user = make_user();
    let raw = serde_json::to_string(&user).unwrap();
    assert_eq!(serde_json::from_str::<User>(&raw).unwrap(), user);
}

#[test]
fn hotel_gallery_defaults_to_empty_when_absent() {
    let raw = r#"{
        "id": "h-1",
        "name": "Seaside",
        "tax_number": "TX1",
        "contact_email": "desk@seaside.example",
        "contact_phone": "+301",
        "address": "1 Beach Rd",
        "city": "Athens",
        "country": "Greece",
        "working_hours_start": "08:00",
        "working_hours_end": "22:00",
        "has_gym": false,
        "has_spa": true,
        "has_wifi": true,
        "has_parking": false,
        "swimming_pools_count": 1,
        "max_reservations_capacity": 40,
        "is_active": true,
        "created_at": "2024-01-01T00:00:00Z"
    }"#;
    let hotel: Hotel = serde_json::from_str(raw).unwrap();
    assert!(hotel.gallery.is_empty());
}

#[test]
fn register_request_omits_absent_optionals() {
    let req = RegisterRequest {
        name: "Bob".to_owned(),
        email: "bob@example.com".to_owned(),
        password: "secret".to_owned(),
        age: 40,
        mobile_number: "+302".to_owned(),
        job_type: None,
        gender: Gender::Male,
        role: None,
    };
    let json = serde_json::to_value(&req).unwrap();
    assert!(json.get("job_type").is_none());
    assert!(json.get("role").is_none());
}

#[test]
fn update_payloads_serialize_only_set_fields() {
    let update = HotelUpdate { is_active: Some(false), ..HotelUpdate::default() };
    assert_eq!(serde_json::to_value(&update).unwrap(), serde_json::json!({"is_active": false}));

    let update = RoomUpdate { kind: Some(RoomType::Suite), ..RoomUpdate::default() };
    assert_eq!(serde_json::to_value(&update).unwrap(), serde_json::json!({"type": "suite"}));
}

#[test]
fn reservation_create_serializes_backend_field_names() {
    let create = ReservationCreate {
        hotel_id: "h-1".to_owned(),
        room_id: "r-1".to_owned(),
        visitor_id: "u-1".to_owned(),
        start_date: "2024-01-01".to_owned(),
        end_date: "2024-01-03".to_owned(),
        kind: ReservationType::BedBreakfast,
        status: ReservationStatus::Confirmed,
        total_price: 480.0,
    };
    let json = serde_json::to_value(&create).unwrap();
    assert_eq!(json["type"], "bed_breakfast");
    assert_eq!(json["status"], "confirmed");
    assert_eq!(json["total_price"], 480.0);
}
