//! Four-step booking wizard modal: details → rooms → payment → confirmation.
//!
//! SYSTEM CONTEXT
//! ==============
//! All transition rules, guards, and price math live in
//! [`crate::state::booking`]; this component owns the wizard signal, loads
//! rooms when the rooms step is entered, and runs the payment + reservation
//! submission sequence. The wizard signal is created per mount, so closing
//! the modal discards every trace of the flow and reopening starts fresh.

use leptos::prelude::*;

use crate::net::types::{Hotel, ReservationType, Room};
use crate::state::booking::{BookingStep, BookingWizard};
use crate::state::session::Session;

fn reservation_type_from_value(value: &str) -> ReservationType {
    match value {
        "bed_breakfast" => ReservationType::BedBreakfast,
        "all_inclusive" => ReservationType::AllInclusive,
        _ => ReservationType::RoomOnly,
    }
}

/// The booking wizard modal for one hotel.
#[component]
pub fn BookingModal(hotel: Hotel, on_close: Callback<()>) -> impl IntoView {
    let session = expect_context::<Session>();
    let wizard = RwSignal::new(BookingWizard::open(hotel.id.clone()));

    // Fetch the hotel's rooms whenever the rooms step enters its loading
    // state. `set_rooms` no-ops if the user has meanwhile left the step, so
    // late results cannot corrupt another step.
    #[cfg(feature = "hydrate")]
    {
        let fetch_pending = RwSignal::new(false);
        let hotel_id = hotel.id.clone();
        Effect::new(move || {
            let wants_rooms = wizard
                .with(|w| matches!(w.step, BookingStep::Rooms { loading_rooms: true, .. }));
            if !wants_rooms || fetch_pending.get_untracked() {
                return;
            }
            fetch_pending.set(true);
            let hotel_id = hotel_id.clone();
            leptos::task::spawn_local(async move {
                let loaded = match crate::net::room_api::rooms_by_hotel(&hotel_id).await {
                    Ok(rooms) => rooms,
                    Err(err) => {
                        leptos::logging::warn!("room load failed: {err}");
                        Vec::new()
                    }
                };
                wizard.update(|w| w.set_rooms(loaded));
                fetch_pending.set(false);
            });
        });
    }

    let on_next = move |_| {
        let step_now = wizard.with_untracked(|w| w.step.clone());
        match step_now {
            BookingStep::Details => wizard.update(BookingWizard::advance_to_rooms),
            BookingStep::Rooms { .. } => wizard.update(BookingWizard::advance_to_payment),
            BookingStep::Payment { .. } => {
                #[cfg(feature = "hydrate")]
                submit_booking(session, wizard);
            }
            BookingStep::Confirmation { .. } => on_close.run(()),
        }
    };

    let on_back = move |_| wizard.update(BookingWizard::back);

    let step_title = move || {
        wizard.with(|w| match w.step {
            BookingStep::Details => "Booking Details",
            BookingStep::Rooms { .. } => "Select Room",
            BookingStep::Payment { .. } => "Payment Information",
            BookingStep::Confirmation { .. } => "Booking Confirmed!",
        })
    };

    let next_label = move || {
        wizard.with(|w| match w.step {
            BookingStep::Details | BookingStep::Rooms { .. } => "Continue",
            BookingStep::Payment { .. } => {
                if w.submitting { "Processing..." } else { "Pay & Book" }
            }
            BookingStep::Confirmation { .. } => "Done",
        })
    };

    let can_go_back = move || {
        wizard.with(|w| matches!(w.step, BookingStep::Rooms { .. } | BookingStep::Payment { .. }))
    };

    let hotel_line = format!("{} - {}, {}", hotel.name, hotel.city, hotel.country);

    view! {
        <div class="modal-backdrop">
            <div class="booking-modal">
                <header class="booking-modal__header">
                    <div>
                        <h2 class="booking-modal__title">{step_title}</h2>
                        <p class="booking-modal__subtitle">{hotel_line}</p>
                    </div>
                    <button
                        class="booking-modal__close"
                        on:click=move |_| on_close.run(())
                        aria-label="Close"
                    >
                        "✕"
                    </button>
                </header>

                <Show when=move || wizard.with(|w| w.error.is_some())>
                    <p class="booking-modal__error">
                        {move || wizard.with(|w| w.error.clone().unwrap_or_default())}
                    </p>
                </Show>

                <div class="booking-modal__body">
                    {move || {
                        wizard
                            .with(|w| match &w.step {
                                BookingStep::Details => {
                                    view! { <DetailsStep wizard=wizard/> }.into_any()
                                }
                                BookingStep::Rooms { rooms, loading_rooms, selected } => {
                                    view! {
                                        <RoomsStep
                                            wizard=wizard
                                            rooms=rooms.clone()
                                            loading=*loading_rooms
                                            selected_id=selected.as_ref().map(|r| r.id.clone())
                                        />
                                    }
                                        .into_any()
                                }
                                BookingStep::Payment { room } => {
                                    view! { <PaymentStep wizard=wizard room=room.clone()/> }
                                        .into_any()
                                }
                                BookingStep::Confirmation { reservation_id } => {
                                    view! {
                                        <ConfirmationStep reservation_id=reservation_id.clone()/>
                                    }
                                        .into_any()
                                }
                            })
                    }}
                </div>

                <footer class="booking-modal__footer">
                    <Show when=can_go_back>
                        <button
                            class="btn booking-modal__back"
                            on:click=on_back
                            disabled=move || wizard.with(|w| w.submitting)
                        >
                            "Back"
                        </button>
                    </Show>
                    <button
                        class="btn booking-modal__next"
                        on:click=on_next
                        disabled=move || wizard.with(|w| w.submitting)
                    >
                        {next_label}
                    </button>
                </footer>
            </div>
        </div>
    }
}

/// Run the payment + reservation sequence for the payment step.
///
/// Any failure surfaces as a wizard error and clears the submitting flag;
/// the step only advances when the reservation id is in hand.
#[cfg(feature = "hydrate")]
fn submit_booking(session: Session, wizard: RwSignal<BookingWizard>) {
    let Some(user_id) = session.state.with_untracked(|s| s.user.as_ref().map(|u| u.id.clone()))
    else {
        wizard.update(|w| w.submit_failed("Please sign in to book".to_owned()));
        return;
    };
    let Some(payload) = wizard.try_update(|w| w.begin_submit(&user_id)).flatten() else {
        return;
    };
    leptos::task::spawn_local(async move {
        let payment = crate::net::reservation_api::process_payment(payload.total_price).await;
        if !payment.success {
            wizard.update(|w| w.submit_failed("Payment processing failed".to_owned()));
            return;
        }
        match crate::net::reservation_api::create_reservation(&payload).await {
            Ok(reservation) => wizard.update(|w| w.submit_succeeded(reservation.id)),
            Err(err) => wizard.update(|w| {
                w.submit_failed(format!(
                    "Failed to create reservation. The room may no longer be available. ({err})"
                ));
            }),
        }
    });
}

#[component]
fn DetailsStep(wizard: RwSignal<BookingWizard>) -> impl IntoView {
    view! {
        <div class="booking-step booking-step--details">
            <label class="booking-field">
                "Check-in Date *"
                <input
                    type="date"
                    prop:value=move || wizard.with(|w| w.form.check_in.clone())
                    on:input=move |ev| {
                        wizard.update(|w| w.form.check_in = event_target_value(&ev));
                    }
                />
            </label>
            <label class="booking-field">
                "Check-out Date *"
                <input
                    type="date"
                    prop:value=move || wizard.with(|w| w.form.check_out.clone())
                    on:input=move |ev| {
                        wizard.update(|w| w.form.check_out = event_target_value(&ev));
                    }
                />
            </label>
            <label class="booking-field">
                "Guests *"
                <input
                    type="number"
                    min="1"
                    prop:value=move || wizard.with(|w| w.form.guests.to_string())
                    on:input=move |ev| {
                        let guests = event_target_value(&ev).parse().unwrap_or(1);
                        wizard.update(|w| w.form.guests = guests);
                    }
                />
            </label>
            <label class="booking-field">
                "Board"
                <select on:change=move |ev| {
                    let kind = reservation_type_from_value(&event_target_value(&ev));
                    wizard.update(|w| w.form.reservation_type = kind);
                }>
                    <option value="room_only">"Room only"</option>
                    <option value="bed_breakfast">"Bed & breakfast (+20%)"</option>
                    <option value="all_inclusive">"All inclusive (+80%)"</option>
                </select>
            </label>
            <label class="booking-field">
                "Special requests"
                <textarea
                    prop:value=move || wizard.with(|w| w.form.special_requests.clone())
                    on:input=move |ev| {
                        wizard.update(|w| w.form.special_requests = event_target_value(&ev));
                    }
                ></textarea>
            </label>
        </div>
    }
}

#[component]
fn RoomsStep(
    wizard: RwSignal<BookingWizard>,
    rooms: Vec<Room>,
    loading: bool,
    selected_id: Option<String>,
) -> impl IntoView {
    view! {
        <div class="booking-step booking-step--rooms">
            <Show when=move || loading>
                <p>"Loading rooms..."</p>
            </Show>
            <Show when={
                let empty = rooms.is_empty();
                move || !loading && empty
            }>
                <p>"No rooms available for these dates."</p>
            </Show>
            <ul class="booking-room-list">
                {rooms
                    .iter()
                    .map(|room| {
                        let is_selected = selected_id.as_deref() == Some(room.id.as_str());
                        let pick = room.clone();
                        view! {
                            <li>
                                <button
                                    class="booking-room"
                                    class:booking-room--selected=is_selected
                                    on:click=move |_| {
                                        wizard.update(|w| w.select_room(pick.clone()));
                                    }
                                >
                                    <span class="booking-room__number">
                                        {format!("Room {}", room.room_number)}
                                    </span>
                                    <span class="booking-room__occupancy">
                                        {format!("sleeps {}", room.max_occupancy)}
                                    </span>
                                    <span class="booking-room__price">
                                        {format!("{:.0} / night", room.price_per_night)}
                                    </span>
                                </button>
                            </li>
                        }
                    })
                    .collect::<Vec<_>>()}
            </ul>
        </div>
    }
}

#[component]
fn PaymentStep(wizard: RwSignal<BookingWizard>, room: Room) -> impl IntoView {
    let summary = move || {
        wizard.with(|w| {
            format!(
                "{} night(s), {} guest(s), total {:.0}",
                w.nights(),
                w.form.guests,
                w.current_total().unwrap_or(0.0)
            )
        })
    };
    view! {
        <div class="booking-step booking-step--payment">
            <p class="booking-payment__room">{format!("Room {}", room.room_number)}</p>
            <p class="booking-payment__summary">{summary}</p>
            // Placeholder gateway: card fields are decorative, payment always
            // clears after a simulated delay.
            <label class="booking-field">
                "Card number"
                <input type="text" placeholder="4532 0151 1283 0366" disabled=true/>
            </label>
            <p class="booking-payment__note">
                "Demo environment: no real charge will be made."
            </p>
        </div>
    }
}

#[component]
fn ConfirmationStep(reservation_id: String) -> impl IntoView {
    view! {
        <div class="booking-step booking-step--confirmation">
            <p>"Your booking is confirmed."</p>
            <p class="booking-confirmation__id">{format!("Reservation #{reservation_id}")}</p>
        </div>
    }
}
