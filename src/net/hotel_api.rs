//! Hotel endpoints: public browsing plus admin CRUD.

#[cfg(test)]
#[path = "hotel_api_test.rs"]
mod hotel_api_test;

use serde_json::json;

use super::api::{self, ApiRequest};
use super::error::ApiError;
use super::types::{Hotel, HotelCreate, HotelUpdate};

fn hotels_path(skip: Option<u32>, limit: Option<u32>, active_only: bool) -> String {
    let mut query = Vec::new();
    if let Some(skip) = skip {
        query.push(format!("skip={skip}"));
    }
    if let Some(limit) = limit {
        query.push(format!("limit={limit}"));
    }
    if active_only {
        query.push("active_only=true".to_owned());
    }
    if query.is_empty() { "/hotels/".to_owned() } else { format!("/hotels/?{}", query.join("&")) }
}

fn hotel_path(hotel_id: &str) -> String {
    format!("/hotels/{hotel_id}")
}

/// List hotels. Public access; admins pass `active_only=false` to see
/// deactivated properties too.
pub async fn list_hotels(
    skip: Option<u32>,
    limit: Option<u32>,
    active_only: bool,
) -> Result<Vec<Hotel>, ApiError> {
    api::fetch_json(ApiRequest::get(hotels_path(skip, limit, active_only))).await
}

/// Create a hotel (super-admin only).
pub async fn create_hotel(data: &HotelCreate) -> Result<Hotel, ApiError> {
    let body = serde_json::to_value(data).map_err(|e| ApiError::Decode(e.to_string()))?;
    api::fetch_json(ApiRequest::post("/hotels/", body)).await
}

/// Apply a partial update (admin only).
pub async fn update_hotel(hotel_id: &str, data: &HotelUpdate) -> Result<Hotel, ApiError> {
    let body = serde_json::to_value(data).map_err(|e| ApiError::Decode(e.to_string()))?;
    api::fetch_json(ApiRequest::put(hotel_path(hotel_id), body)).await
}

/// Delete a hotel (super-admin only).
pub async fn delete_hotel(hotel_id: &str) -> Result<(), ApiError> {
    api::execute(ApiRequest::delete(hotel_path(hotel_id))).await
}

/// Activate or deactivate a hotel (super-admin only).
pub async fn set_hotel_active(hotel_id: &str, is_active: bool) -> Result<Hotel, ApiError> {
    api::fetch_json(ApiRequest::put(hotel_path(hotel_id), json!({ "is_active": is_active }))).await
}
