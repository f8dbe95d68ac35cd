use super::*;
use crate::net::types::RoomType;

fn make_room(id: &str, price: f64, available: bool) -> Room {
    Room {
        id: id.to_owned(),
        room_number: id.to_owned(),
        hotel_id: "h-1".to_owned(),
        price_per_night: price,
        description: None,
        kind: RoomType::Double,
        max_occupancy: 2,
        is_available: available,
        created_at: "2024-01-01T00:00:00Z".to_owned(),
    }
}

#[test]
fn paths_embed_identifiers() {
    assert_eq!(rooms_by_hotel_path("h-7"), "/rooms/hotel/h-7");
    assert_eq!(room_path("r-7"), "/rooms/r-7");
}

#[test]
fn cheapest_price_ignores_unavailable_rooms() {
    let rooms =
        [make_room("a", 60.0, false), make_room("b", 90.0, true), make_room("c", 75.0, true)];
    assert_eq!(cheapest_available_price(&rooms), Some(75.0));
}

#[test]
fn cheapest_price_is_none_when_nothing_bookable() {
    assert_eq!(cheapest_available_price(&[]), None);
    let rooms = [make_room("a", 60.0, false)];
    assert_eq!(cheapest_available_price(&rooms), None);
}
