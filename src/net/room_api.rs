//! Room endpoints: per-hotel listings for the booking flow plus admin CRUD.

#[cfg(test)]
#[path = "room_api_test.rs"]
mod room_api_test;

use serde_json::json;

use super::api::{self, ApiRequest};
use super::error::ApiError;
use super::types::{Room, RoomCreate, RoomUpdate};

fn rooms_by_hotel_path(hotel_id: &str) -> String {
    format!("/rooms/hotel/{hotel_id}")
}

fn room_path(room_id: &str) -> String {
    format!("/rooms/{room_id}")
}

/// Cheapest nightly price across a hotel's available rooms, if any.
pub fn cheapest_available_price(rooms: &[Room]) -> Option<f64> {
    rooms
        .iter()
        .filter(|room| room.is_available)
        .map(|room| room.price_per_night)
        .min_by(|a, b| a.total_cmp(b))
}

/// All rooms belonging to a hotel.
pub async fn rooms_by_hotel(hotel_id: &str) -> Result<Vec<Room>, ApiError> {
    api::fetch_json(ApiRequest::get(rooms_by_hotel_path(hotel_id))).await
}

/// Cheapest available room price for a hotel, `None` when nothing is
/// bookable. Derived client-side from the hotel's room list.
pub async fn cheapest_room_price(hotel_id: &str) -> Result<Option<f64>, ApiError> {
    let rooms = rooms_by_hotel(hotel_id).await?;
    Ok(cheapest_available_price(&rooms))
}

/// Create a room (hotel admin only).
pub async fn create_room(data: &RoomCreate) -> Result<Room, ApiError> {
    let body = serde_json::to_value(data).map_err(|e| ApiError::Decode(e.to_string()))?;
    api::fetch_json(ApiRequest::post("/rooms/", body)).await
}

/// Apply a partial update (hotel admin only).
pub async fn update_room(room_id: &str, data: &RoomUpdate) -> Result<Room, ApiError> {
    let body = serde_json::to_value(data).map_err(|e| ApiError::Decode(e.to_string()))?;
    api::fetch_json(ApiRequest::put(room_path(room_id), body)).await
}

/// Delete a room (hotel admin only).
pub async fn delete_room(room_id: &str) -> Result<(), ApiError> {
    api::execute(ApiRequest::delete(room_path(room_id))).await
}

/// Flip a room's availability flag (hotel admin only).
pub async fn set_room_available(room_id: &str, is_available: bool) -> Result<Room, ApiError> {
    api::fetch_json(ApiRequest::put(room_path(room_id), json!({ "is_available": is_available })))
        .await
}
