//! Shared wire-schema DTOs for the client/backend boundary.
//!
//! DESIGN
//! ======
//! These types mirror the backend's JSON schema field for field so serde
//! round-trips stay lossless. Enums use snake_case string encodings to match
//! the backend's string enums.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// User role controlling dashboard access.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Regular guest: can browse hotels and book rooms.
    Viewer,
    /// Manages a single hotel's rooms and reservations.
    AdminHotel,
    /// Full platform administration.
    SuperAdmin,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    Male,
    Female,
}

/// An authenticated user as returned by `/api/auth/me`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Unique user identifier (UUID string).
    pub id: String,
    pub name: String,
    pub email: String,
    pub age: u32,
    pub mobile_number: String,
    pub job_type: Option<String>,
    pub gender: Gender,
    pub role: Role,
    /// Hotel affiliation; set for `AdminHotel` users.
    pub hotel_id: Option<String>,
    pub is_active: bool,
    /// ISO 8601 creation timestamp.
    pub created_at: String,
    pub last_login: Option<String>,
}

/// Token pair issued by `/api/auth/login` and `/api/auth/refresh`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AuthTokens {
    /// Short-lived credential sent as a bearer header on each request.
    pub access_token: String,
    /// Longer-lived credential exchanged for a new token pair.
    pub refresh_token: String,
    pub token_type: String,
    /// Access-token lifetime in seconds.
    pub expires_in: u64,
}

/// Payload for `POST /api/users/` (account creation).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub age: u32,
    pub mobile_number: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_type: Option<String>,
    pub gender: Gender,
    /// Registration never grants `SuperAdmin`; the backend rejects it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
}

/// A hotel as returned by the hotels endpoints.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Hotel {
    pub id: String,
    pub name: String,
    pub tax_number: String,
    pub contact_email: String,
    pub contact_phone: String,
    pub address: String,
    pub city: String,
    pub country: String,
    /// Front-desk opening time, `HH:MM`.
    pub working_hours_start: String,
    /// Front-desk closing time, `HH:MM`.
    pub working_hours_end: String,
    /// Image URLs for the hotel gallery.
    #[serde(default)]
    pub gallery: Vec<String>,
    pub has_gym: bool,
    pub has_spa: bool,
    pub has_wifi: bool,
    pub has_parking: bool,
    pub swimming_pools_count: u32,
    pub max_reservations_capacity: u32,
    pub is_active: bool,
    pub created_at: String,
}

/// Payload for `POST /api/hotels/`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HotelCreate {
    pub name: String,
    pub tax_number: String,
    pub contact_email: String,
    pub contact_phone: String,
    pub address: String,
    pub city: String,
    pub country: String,
    pub working_hours_start: String,
    pub working_hours_end: String,
    #[serde(default)]
    pub gallery: Vec<String>,
    pub has_gym: bool,
    pub has_spa: bool,
    pub has_wifi: bool,
    pub has_parking: bool,
    pub swimming_pools_count: u32,
    pub max_reservations_capacity: u32,
    pub is_active: bool,
}

/// Partial payload for `PUT /api/hotels/{id}`; absent fields are unchanged.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct HotelUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub working_hours_start: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub working_hours_end: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

/// Room category.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoomType {
    Single,
    Double,
    Suite,
    Family,
}

/// A bookable room within a hotel.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Room {
    pub id: String,
    pub room_number: String,
    pub hotel_id: String,
    pub price_per_night: f64,
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub kind: RoomType,
    /// Hard guest limit; the booking flow refuses parties above it.
    pub max_occupancy: u32,
    pub is_available: bool,
    pub created_at: String,
}

/// Payload for `POST /api/rooms/`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RoomCreate {
    pub room_number: String,
    pub hotel_id: String,
    pub price_per_night: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub kind: RoomType,
    pub max_occupancy: u32,
    pub is_available: bool,
}

/// Partial payload for `PUT /api/rooms/{id}`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RoomUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub room_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_per_night: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<RoomType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_occupancy: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_available: Option<bool>,
}

/// Board type selected at booking time; scales the nightly price.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReservationType {
    #[default]
    RoomOnly,
    BedBreakfast,
    AllInclusive,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReservationStatus {
    Pending,
    Confirmed,
    CheckedIn,
    CheckedOut,
    Cancelled,
}

/// Payload for `POST /api/reservations/`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ReservationCreate {
    pub hotel_id: String,
    pub room_id: String,
    pub visitor_id: String,
    /// Check-in date, `YYYY-MM-DD`.
    pub start_date: String,
    /// Check-out date, `YYYY-MM-DD`.
    pub end_date: String,
    #[serde(rename = "type")]
    pub kind: ReservationType,
    pub status: ReservationStatus,
    pub total_price: f64,
}

/// A persisted reservation as returned by the backend.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Reservation {
    pub id: String,
    pub hotel_id: String,
    pub room_id: String,
    pub visitor_id: String,
    pub start_date: String,
    pub end_date: String,
    #[serde(rename = "type")]
    pub kind: ReservationType,
    pub status: ReservationStatus,
    pub total_price: f64,
    pub created_at: String,
    pub updated_at: String,
}
