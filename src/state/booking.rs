//! Booking wizard state machine.
//!
//! DESIGN
//! ======
//! The wizard is a tagged union: each step variant carries exactly the data
//! that is valid at that step, so "payment without a selected room" or
//! "confirmation without a reservation id" cannot be represented. Transitions
//! are pure methods; guard failures set a user-visible error and leave the
//! step unchanged. Network effects (room loading, payment, reservation
//! creation) live in the booking modal component, which feeds results back in
//! through `set_rooms` / `submit_succeeded` / `submit_failed`.

#[cfg(test)]
#[path = "booking_test.rs"]
mod booking_test;

use crate::net::types::{
    ReservationCreate, ReservationStatus, ReservationType, Room,
};
use crate::util::dates;

/// Form data collected on the details step and carried through the flow.
#[derive(Clone, Debug, PartialEq)]
pub struct BookingDetails {
    pub hotel_id: String,
    /// `YYYY-MM-DD`.
    pub check_in: String,
    /// `YYYY-MM-DD`.
    pub check_out: String,
    pub guests: u32,
    pub reservation_type: ReservationType,
    pub special_requests: String,
}

impl BookingDetails {
    pub fn for_hotel(hotel_id: impl Into<String>) -> Self {
        Self {
            hotel_id: hotel_id.into(),
            check_in: String::new(),
            check_out: String::new(),
            guests: 1,
            reservation_type: ReservationType::RoomOnly,
            special_requests: String::new(),
        }
    }

    /// Nights implied by the current dates; `None` while dates are unset or
    /// unparseable.
    pub fn nights(&self) -> Option<i64> {
        dates::nights_between(&self.check_in, &self.check_out)
    }
}

/// Wizard steps with step-specific payloads. Strictly linear; back-navigation
/// exists only from `Rooms` and `Payment`.
#[derive(Clone, Debug, PartialEq)]
pub enum BookingStep {
    Details,
    Rooms {
        rooms: Vec<Room>,
        loading_rooms: bool,
        selected: Option<Room>,
    },
    Payment {
        room: Room,
    },
    Confirmation {
        reservation_id: String,
    },
}

/// The whole wizard: current step, shared form data, and async-action flags.
#[derive(Clone, Debug, PartialEq)]
pub struct BookingWizard {
    pub form: BookingDetails,
    pub step: BookingStep,
    pub submitting: bool,
    pub error: Option<String>,
}

/// Price multiplier for a board type.
pub fn reservation_multiplier(kind: ReservationType) -> f64 {
    match kind {
        ReservationType::RoomOnly => 1.0,
        ReservationType::BedBreakfast => 1.2,
        ReservationType::AllInclusive => 1.8,
    }
}

/// Total stay price: `nights × nightly price × board multiplier × guests`,
/// rounded to whole currency units.
pub fn total_price(nights: i64, price_per_night: f64, kind: ReservationType, guests: u32) -> f64 {
    #[allow(clippy::cast_precision_loss)]
    let raw = nights as f64 * price_per_night * reservation_multiplier(kind) * f64::from(guests);
    raw.round()
}

impl BookingWizard {
    /// Fresh wizard at the details step for a hotel.
    pub fn open(hotel_id: impl Into<String>) -> Self {
        Self {
            form: BookingDetails::for_hotel(hotel_id),
            step: BookingStep::Details,
            submitting: false,
            error: None,
        }
    }

    /// Details → Rooms. Requires both dates, at least one guest, and at
    /// least one night.
    pub fn advance_to_rooms(&mut self) {
        self.error = None;
        if !matches!(self.step, BookingStep::Details) {
            return;
        }
        if self.form.check_in.is_empty() || self.form.check_out.is_empty() || self.form.guests == 0
        {
            self.error = Some("Please fill in all required fields".to_owned());
            return;
        }
        match self.form.nights() {
            Some(n) if n >= 1 => {
                self.step = BookingStep::Rooms { rooms: Vec::new(), loading_rooms: true, selected: None };
            }
            _ => self.error = Some("Check-out must be after check-in".to_owned()),
        }
    }

    /// Rooms → Payment. Requires a selected room big enough for the party.
    pub fn advance_to_payment(&mut self) {
        self.error = None;
        let BookingStep::Rooms { selected, .. } = &self.step else {
            return;
        };
        let Some(room) = selected.clone() else {
            self.error = Some("Please select a room".to_owned());
            return;
        };
        if room.max_occupancy < self.form.guests {
            self.error = Some(format!(
                "This room sleeps at most {} guests",
                room.max_occupancy
            ));
            return;
        }
        self.step = BookingStep::Payment { room };
    }

    /// Back-navigation: Payment → Rooms (rooms refetch, selection kept) and
    /// Rooms → Details. Anywhere else this is a no-op.
    pub fn back(&mut self) {
        self.error = None;
        match &self.step {
            BookingStep::Rooms { .. } => self.step = BookingStep::Details,
            BookingStep::Payment { room } => {
                self.step = BookingStep::Rooms {
                    rooms: Vec::new(),
                    loading_rooms: true,
                    selected: Some(room.clone()),
                };
            }
            BookingStep::Details | BookingStep::Confirmation { .. } => {}
        }
    }

    /// Room list arrived for the rooms step.
    pub fn set_rooms(&mut self, loaded: Vec<Room>) {
        if let BookingStep::Rooms { rooms, loading_rooms, selected } = &mut self.step {
            // A previously selected room that vanished from the list is
            // dropped so a stale choice cannot reach payment.
            if let Some(current) = selected {
                if !loaded.iter().any(|r| r.id == current.id) {
                    *selected = None;
                }
            }
            *rooms = loaded;
            *loading_rooms = false;
        }
    }

    pub fn select_room(&mut self, room: Room) {
        if let BookingStep::Rooms { selected, .. } = &mut self.step {
            *selected = Some(room);
            self.error = None;
        }
    }

    /// Nights for the current form; zero when dates are not yet valid.
    pub fn nights(&self) -> i64 {
        self.form.nights().unwrap_or(0)
    }

    /// Total for the room priced on this step, if the flow has one.
    pub fn current_total(&self) -> Option<f64> {
        let room = match &self.step {
            BookingStep::Rooms { selected, .. } => selected.as_ref()?,
            BookingStep::Payment { room } => room,
            _ => return None,
        };
        Some(total_price(
            self.nights(),
            room.price_per_night,
            self.form.reservation_type,
            self.form.guests,
        ))
    }

    /// Whether the payment step may submit right now.
    pub fn can_submit(&self) -> bool {
        matches!(self.step, BookingStep::Payment { .. }) && !self.submitting && self.nights() >= 1
    }

    /// Start submission: flips the submitting flag and yields the
    /// reservation payload. `None` when the wizard is not in a submittable
    /// state.
    pub fn begin_submit(&mut self, visitor_id: &str) -> Option<ReservationCreate> {
        if !self.can_submit() {
            return None;
        }
        let BookingStep::Payment { room } = &self.step else {
            return None;
        };
        self.submitting = true;
        self.error = None;
        Some(ReservationCreate {
            hotel_id: self.form.hotel_id.clone(),
            room_id: room.id.clone(),
            visitor_id: visitor_id.to_owned(),
            start_date: self.form.check_in.clone(),
            end_date: self.form.check_out.clone(),
            kind: self.form.reservation_type,
            status: ReservationStatus::Confirmed,
            total_price: total_price(
                self.nights(),
                room.price_per_night,
                self.form.reservation_type,
                self.form.guests,
            ),
        })
    }

    /// Submission failed: stay on payment, clear the submitting flag, show
    /// the message. No reservation id is ever recorded on this path.
    pub fn submit_failed(&mut self, message: String) {
        self.submitting = false;
        self.error = Some(message);
    }

    /// Submission succeeded: record the id and advance to confirmation.
    pub fn submit_succeeded(&mut self, reservation_id: String) {
        if matches!(self.step, BookingStep::Payment { .. }) {
            self.submitting = false;
            self.error = None;
            self.step = BookingStep::Confirmation { reservation_id };
        }
    }
}
