use super::*;
use crate::net::types::RoomType;

// =============================================================
// Helpers
// =============================================================

fn make_room(id: &str, price: f64, max_occupancy: u32) -> Room {
    Room {
        id: id.to_owned(),
        room_number: format!("no-{id}"),
        hotel_id: "h-1".to_owned(),
        price_per_night: price,
        description: None,
        kind: RoomType::Double,
        max_occupancy,
        is_available: true,
        created_at: "2024-01-01T00:00:00Z".to_owned(),
    }
}

/// Wizard advanced to the rooms step with a two-night stay for two guests.
fn wizard_at_rooms() -> BookingWizard {
    let mut wizard = BookingWizard::open("h-1");
    wizard.form.check_in = "2024-01-01".to_owned();
    wizard.form.check_out = "2024-01-03".to_owned();
    wizard.form.guests = 2;
    wizard.advance_to_rooms();
    assert!(matches!(wizard.step, BookingStep::Rooms { .. }));
    wizard
}

fn wizard_at_payment(room: Room) -> BookingWizard {
    let mut wizard = wizard_at_rooms();
    wizard.set_rooms(vec![room.clone()]);
    wizard.select_room(room);
    wizard.advance_to_payment();
    assert!(matches!(wizard.step, BookingStep::Payment { .. }));
    wizard
}

// =============================================================
// Details step guards
// =============================================================

#[test]
fn open_starts_fresh_at_details() {
    let wizard = BookingWizard::open("h-9");
    assert_eq!(wizard.step, BookingStep::Details);
    assert_eq!(wizard.form.hotel_id, "h-9");
    assert_eq!(wizard.form.guests, 1);
    assert_eq!(wizard.form.reservation_type, ReservationType::RoomOnly);
    assert!(!wizard.submitting);
    assert_eq!(wizard.error, None);
}

#[test]
fn details_requires_both_dates() {
    let mut wizard = BookingWizard::open("h-1");
    wizard.advance_to_rooms();
    assert_eq!(wizard.step, BookingStep::Details);
    assert_eq!(wizard.error.as_deref(), Some("Please fill in all required fields"));
}

#[test]
fn details_rejects_zero_night_stays() {
    let mut wizard = BookingWizard::open("h-1");
    wizard.form.check_in = "2024-01-01".to_owned();
    wizard.form.check_out = "2024-01-01".to_owned();
    wizard.advance_to_rooms();
    assert_eq!(wizard.step, BookingStep::Details);
    assert_eq!(wizard.error.as_deref(), Some("Check-out must be after check-in"));
}

#[test]
fn details_advances_with_valid_stay() {
    let wizard = wizard_at_rooms();
    let BookingStep::Rooms { rooms, loading_rooms, selected } = wizard.step else {
        panic!("expected rooms step");
    };
    assert!(rooms.is_empty());
    assert!(loading_rooms);
    assert_eq!(selected, None);
}

// =============================================================
// Rooms step guards
// =============================================================

#[test]
fn rooms_requires_a_selection() {
    let mut wizard = wizard_at_rooms();
    wizard.set_rooms(vec![make_room("r-1", 100.0, 2)]);
    wizard.advance_to_payment();
    assert!(matches!(wizard.step, BookingStep::Rooms { .. }));
    assert_eq!(wizard.error.as_deref(), Some("Please select a room"));
}

#[test]
fn undersized_room_blocks_payment_with_visible_error() {
    let mut wizard = wizard_at_rooms();
    wizard.form.guests = 3;
    let small = make_room("r-1", 100.0, 2);
    wizard.set_rooms(vec![small.clone()]);
    wizard.select_room(small);
    wizard.advance_to_payment();
    assert!(matches!(wizard.step, BookingStep::Rooms { .. }));
    assert_eq!(wizard.error.as_deref(), Some("This room sleeps at most 2 guests"));
}

#[test]
fn set_rooms_drops_a_selection_that_disappeared() {
    let mut wizard = wizard_at_rooms();
    wizard.set_rooms(vec![make_room("gone", 50.0, 2)]);
    wizard.select_room(make_room("gone", 50.0, 2));
    wizard.set_rooms(vec![make_room("r-2", 80.0, 2)]);
    let BookingStep::Rooms { selected, .. } = &wizard.step else {
        panic!("expected rooms step");
    };
    assert_eq!(*selected, None);
}

// =============================================================
// Back navigation
// =============================================================

#[test]
fn back_from_rooms_returns_to_details_keeping_form() {
    let mut wizard = wizard_at_rooms();
    wizard.back();
    assert_eq!(wizard.step, BookingStep::Details);
    assert_eq!(wizard.form.check_in, "2024-01-01");
}

#[test]
fn back_from_payment_reenters_rooms_with_selection_kept() {
    let room = make_room("r-1", 100.0, 2);
    let mut wizard = wizard_at_payment(room.clone());
    wizard.back();
    let BookingStep::Rooms { loading_rooms, selected, .. } = &wizard.step else {
        panic!("expected rooms step");
    };
    assert!(loading_rooms);
    assert_eq!(selected.as_ref().map(|r| r.id.as_str()), Some("r-1"));
}

#[test]
fn back_is_a_noop_on_details_and_confirmation() {
    let mut wizard = BookingWizard::open("h-1");
    wizard.back();
    assert_eq!(wizard.step, BookingStep::Details);

    let mut wizard = wizard_at_payment(make_room("r-1", 100.0, 2));
    wizard.submit_succeeded("res-1".to_owned());
    wizard.back();
    assert!(matches!(wizard.step, BookingStep::Confirmation { .. }));
}

// =============================================================
// Price computation
// =============================================================

#[test]
fn multipliers_match_board_types() {
    assert_eq!(reservation_multiplier(ReservationType::RoomOnly), 1.0);
    assert_eq!(reservation_multiplier(ReservationType::BedBreakfast), 1.2);
    assert_eq!(reservation_multiplier(ReservationType::AllInclusive), 1.8);
}

#[test]
fn bed_breakfast_two_nights_two_guests() {
    // 2 nights × 100 × 1.2 × 2 guests = 480.
    assert_eq!(total_price(2, 100.0, ReservationType::BedBreakfast, 2), 480.0);
}

#[test]
fn total_rounds_to_whole_units() {
    // 3 × 99.99 × 1.8 × 1 = 539.946 → 540.
    assert_eq!(total_price(3, 99.99, ReservationType::AllInclusive, 1), 540.0);
}

#[test]
fn current_total_uses_selected_room() {
    let mut wizard = wizard_at_rooms();
    wizard.form.reservation_type = ReservationType::BedBreakfast;
    let room = make_room("r-1", 100.0, 2);
    wizard.set_rooms(vec![room.clone()]);
    wizard.select_room(room);
    assert_eq!(wizard.current_total(), Some(480.0));
}

#[test]
fn current_total_absent_before_any_room_exists() {
    assert_eq!(BookingWizard::open("h-1").current_total(), None);
}

// =============================================================
// Submission
// =============================================================

#[test]
fn begin_submit_builds_confirmed_reservation_payload() {
    let mut wizard = wizard_at_payment(make_room("r-1", 100.0, 2));
    wizard.form.reservation_type = ReservationType::BedBreakfast;
    let payload = wizard.begin_submit("u-1").expect("payload");
    assert!(wizard.submitting);
    assert_eq!(payload.hotel_id, "h-1");
    assert_eq!(payload.room_id, "r-1");
    assert_eq!(payload.visitor_id, "u-1");
    assert_eq!(payload.start_date, "2024-01-01");
    assert_eq!(payload.end_date, "2024-01-03");
    assert_eq!(payload.status, ReservationStatus::Confirmed);
    assert_eq!(payload.total_price, 480.0);
}

#[test]
fn begin_submit_refuses_outside_payment_step() {
    let mut wizard = wizard_at_rooms();
    assert_eq!(wizard.begin_submit("u-1"), None);
    assert!(!wizard.submitting);
}

#[test]
fn begin_submit_refuses_while_already_submitting() {
    let mut wizard = wizard_at_payment(make_room("r-1", 100.0, 2));
    assert!(wizard.begin_submit("u-1").is_some());
    assert_eq!(wizard.begin_submit("u-1"), None);
}

#[test]
fn failed_submission_stays_on_payment_without_reservation_id() {
    let mut wizard = wizard_at_payment(make_room("r-1", 100.0, 2));
    wizard.begin_submit("u-1").expect("payload");
    wizard.submit_failed("The room may no longer be available".to_owned());
    assert!(matches!(wizard.step, BookingStep::Payment { .. }));
    assert!(!wizard.submitting);
    assert_eq!(wizard.error.as_deref(), Some("The room may no longer be available"));
}

#[test]
fn successful_submission_reaches_confirmation_with_id() {
    let mut wizard = wizard_at_payment(make_room("r-1", 100.0, 2));
    wizard.begin_submit("u-1").expect("payload");
    wizard.submit_succeeded("res-42".to_owned());
    assert_eq!(wizard.step, BookingStep::Confirmation { reservation_id: "res-42".to_owned() });
    assert!(!wizard.submitting);
    assert_eq!(wizard.error, None);
}

#[test]
fn reopening_after_confirmation_starts_fresh() {
    let mut wizard = wizard_at_payment(make_room("r-1", 100.0, 2));
    wizard.submit_succeeded("res-42".to_owned());
    // Closing the modal drops the wizard; reopening constructs a new one.
    let wizard = BookingWizard::open("h-1");
    assert_eq!(wizard.step, BookingStep::Details);
    assert_eq!(wizard.error, None);
}
