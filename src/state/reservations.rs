//! Reservation list state for the viewer and hotel-admin views.

#[cfg(test)]
#[path = "reservations_test.rs"]
mod reservations_test;

use crate::net::types::{Reservation, ReservationStatus};

/// Shared reservation list state.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ReservationsState {
    pub items: Vec<Reservation>,
    pub loading: bool,
    pub error: Option<String>,
}

impl ReservationsState {
    /// Apply a completed cancellation: the entry flips to cancelled locally
    /// without waiting for a refetch.
    pub fn mark_cancelled(&mut self, reservation_id: &str) {
        if let Some(item) = self.items.iter_mut().find(|r| r.id == reservation_id) {
            item.status = ReservationStatus::Cancelled;
        }
    }

    /// Whether a reservation may still be cancelled by the guest.
    pub fn cancellable(reservation: &Reservation) -> bool {
        matches!(reservation.status, ReservationStatus::Pending | ReservationStatus::Confirmed)
    }
}
