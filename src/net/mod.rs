//! Networking modules for the REST client layer.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` owns the authorized transport and token-refresh interception;
//! `auth_api`, `hotel_api`, `room_api`, and `reservation_api` wrap the
//! individual backend endpoints; `types` defines the shared wire schema.

pub mod api;
pub mod auth_api;
pub mod error;
pub mod hotel_api;
pub mod reservation_api;
pub mod room_api;
#[cfg(any(test, feature = "hydrate"))]
pub mod single_flight;
pub mod types;
