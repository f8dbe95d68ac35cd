//! Reservation endpoints and the placeholder payment gateway.

#[cfg(test)]
#[path = "reservation_api_test.rs"]
mod reservation_api_test;

use super::api::{self, ApiRequest};
use super::error::ApiError;
use super::types::{Reservation, ReservationCreate};

/// Simulated gateway latency before a payment "clears".
#[cfg(feature = "hydrate")]
const PAYMENT_DELAY_MS: u64 = 1500;

fn user_reservations_path(user_id: &str) -> String {
    format!("/reservations/user/{user_id}")
}

fn reservation_path(reservation_id: &str) -> String {
    format!("/reservations/{reservation_id}")
}

/// Build the placeholder transaction id: `txn_<millis>_<suffix>`.
fn transaction_id(now_ms: f64, entropy: f64) -> String {
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let millis = now_ms.max(0.0) as u64;
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let suffix = (entropy.clamp(0.0, 1.0) * 1e9) as u64;
    format!("txn_{millis}_{suffix:09}")
}

/// Outcome of the placeholder payment gateway.
#[derive(Clone, Debug, PartialEq)]
pub struct PaymentResult {
    pub success: bool,
    pub transaction_id: String,
}

/// Placeholder payment processing: always authorizes after a simulated
/// delay. Real gateway integration is a backend concern; the booking flow
/// only needs the success/transaction-id shape.
pub async fn process_payment(amount: f64) -> PaymentResult {
    let _ = amount;
    #[cfg(feature = "hydrate")]
    {
        gloo_timers::future::sleep(std::time::Duration::from_millis(PAYMENT_DELAY_MS)).await;
        PaymentResult {
            success: true,
            transaction_id: transaction_id(js_sys::Date::now(), js_sys::Math::random()),
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        PaymentResult { success: true, transaction_id: transaction_id(0.0, 0.0) }
    }
}

/// Create a reservation. The backend rejects overlapping bookings, so this
/// can fail even after a "successful" payment.
pub async fn create_reservation(data: &ReservationCreate) -> Result<Reservation, ApiError> {
    let body = serde_json::to_value(data).map_err(|e| ApiError::Decode(e.to_string()))?;
    api::fetch_json(ApiRequest::post("/reservations/", body)).await
}

/// All reservations made by a user.
pub async fn user_reservations(user_id: &str) -> Result<Vec<Reservation>, ApiError> {
    api::fetch_json(ApiRequest::get(user_reservations_path(user_id))).await
}

/// Reservations for a hotel (hotel admin view).
pub async fn hotel_reservations(hotel_id: &str) -> Result<Vec<Reservation>, ApiError> {
    api::fetch_json(ApiRequest::get(format!("/reservations/hotel/{hotel_id}"))).await
}

/// Cancel a reservation.
pub async fn cancel_reservation(reservation_id: &str) -> Result<(), ApiError> {
    api::execute(ApiRequest::delete(reservation_path(reservation_id))).await
}
