//! Hotel-admin dashboard: rooms and reservations for the admin's own hotel.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::net::types::{Room, RoomCreate, RoomType, RoomUpdate};
use crate::state::reservations::ReservationsState;
use crate::state::session::Session;
use crate::util;

fn room_type_from_value(value: &str) -> RoomType {
    match value {
        "double" => RoomType::Double,
        "suite" => RoomType::Suite,
        "family" => RoomType::Family,
        _ => RoomType::Single,
    }
}

#[component]
pub fn HotelAdminPage() -> impl IntoView {
    let session = expect_context::<Session>();
    let navigate = use_navigate();

    util::auth::install_unauth_redirect(session, navigate.clone());
    util::auth::install_role_redirect(session, "admin", navigate);

    let hotel_id = Memo::new(move |_| {
        session.state.with(|s| s.user.as_ref().and_then(|u| u.hotel_id.clone()))
    });

    let rooms = RwSignal::new(Vec::<Room>::new());
    let rooms_loading = RwSignal::new(false);
    let reservations = RwSignal::new(ReservationsState::default());
    let status = RwSignal::new(None::<String>);

    #[cfg(feature = "hydrate")]
    {
        let loaded = RwSignal::new(false);
        Effect::new(move || {
            let Some(id) = hotel_id.get() else {
                return;
            };
            if loaded.get_untracked() {
                return;
            }
            loaded.set(true);
            rooms_loading.set(true);
            reservations.update(|s| s.loading = true);
            leptos::task::spawn_local(async move {
                match crate::net::room_api::rooms_by_hotel(&id).await {
                    Ok(items) => rooms.set(items),
                    Err(err) => status.set(Some(format!("Failed to load rooms: {err}"))),
                }
                rooms_loading.set(false);
                match crate::net::reservation_api::hotel_reservations(&id).await {
                    Ok(items) => reservations.update(|s| {
                        s.items = items;
                        s.loading = false;
                    }),
                    Err(err) => reservations.update(|s| {
                        s.loading = false;
                        s.error = Some(err.to_string());
                    }),
                }
            });
        });
    }

    // Room form state; `editing_room` holds the room id while editing an
    // existing room, `None` while creating.
    let show_form = RwSignal::new(false);
    let editing_room = RwSignal::new(None::<String>);
    let form_number = RwSignal::new(String::new());
    let form_price = RwSignal::new(String::new());
    let form_occupancy = RwSignal::new(String::new());
    let form_kind = RwSignal::new(RoomType::Single);

    let open_create_room = move |_| {
        editing_room.set(None);
        form_number.set(String::new());
        form_price.set(String::new());
        form_occupancy.set(String::new());
        form_kind.set(RoomType::Single);
        show_form.set(true);
    };

    let open_edit_room = move |room: &Room| {
        editing_room.set(Some(room.id.clone()));
        form_number.set(room.room_number.clone());
        form_price.set(room.price_per_night.to_string());
        form_occupancy.set(room.max_occupancy.to_string());
        form_kind.set(room.kind);
        show_form.set(true);
    };

    let on_save_room = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(id) = hotel_id.get_untracked() else {
            return;
        };
        let (Ok(price), Ok(occupancy)) = (
            form_price.get_untracked().trim().parse::<f64>(),
            form_occupancy.get_untracked().trim().parse::<u32>(),
        ) else {
            status.set(Some("Enter a valid price and occupancy.".to_owned()));
            return;
        };
        let room_number = form_number.get_untracked().trim().to_owned();
        if room_number.is_empty() {
            status.set(Some("Room number is required.".to_owned()));
            return;
        }

        if let Some(room_id) = editing_room.get_untracked() {
            let payload = RoomUpdate {
                room_number: Some(room_number),
                price_per_night: Some(price),
                description: None,
                kind: Some(form_kind.get_untracked()),
                max_occupancy: Some(occupancy),
                is_available: None,
            };
            #[cfg(feature = "hydrate")]
            leptos::task::spawn_local(async move {
                match crate::net::room_api::update_room(&room_id, &payload).await {
                    Ok(updated) => {
                        rooms.update(|items| {
                            if let Some(slot) = items.iter_mut().find(|r| r.id == updated.id) {
                                *slot = updated;
                            }
                        });
                        show_form.set(false);
                        status.set(None);
                    }
                    Err(err) => status.set(Some(format!("Failed to update room: {err}"))),
                }
            });
            #[cfg(not(feature = "hydrate"))]
            let _ = (room_id, payload);
        } else {
            let payload = RoomCreate {
                room_number,
                hotel_id: id,
                price_per_night: price,
                description: None,
                kind: form_kind.get_untracked(),
                max_occupancy: occupancy,
                is_available: true,
            };
            #[cfg(feature = "hydrate")]
            leptos::task::spawn_local(async move {
                match crate::net::room_api::create_room(&payload).await {
                    Ok(room) => {
                        rooms.update(|items| items.push(room));
                        show_form.set(false);
                        status.set(None);
                    }
                    Err(err) => status.set(Some(format!("Failed to create room: {err}"))),
                }
            });
            #[cfg(not(feature = "hydrate"))]
            let _ = payload;
        }
    };

    let on_toggle_available = move |room: Room| {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::room_api::set_room_available(&room.id, !room.is_available).await {
                Ok(updated) => rooms.update(|items| {
                    if let Some(slot) = items.iter_mut().find(|r| r.id == updated.id) {
                        *slot = updated;
                    }
                }),
                Err(err) => status.set(Some(format!("Failed to update room: {err}"))),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = room;
    };

    let on_delete_room = move |room_id: String| {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::room_api::delete_room(&room_id).await {
                Ok(()) => rooms.update(|items| items.retain(|r| r.id != room_id)),
                Err(err) => status.set(Some(format!("Failed to delete room: {err}"))),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = room_id;
    };

    view! {
        <div class="hotel-admin">
            <header class="admin__header">
                <h1>"My Hotel"</h1>
                <a class="admin__back" href="/">
                    "Back to dashboard"
                </a>
            </header>

            <Show when=move || hotel_id.get().is_none()>
                <p class="admin__status admin__status--error">
                    "Your account is not linked to a hotel."
                </p>
            </Show>
            <Show when=move || status.get().is_some()>
                <p class="admin__status admin__status--error">
                    {move || status.get().unwrap_or_default()}
                </p>
            </Show>

            <section class="hotel-admin__rooms">
                <div class="hotel-admin__section-header">
                    <h2>"Rooms"</h2>
                    <button class="admin__action" on:click=open_create_room>
                        "Add Room"
                    </button>
                </div>

                <Show when=move || show_form.get()>
                    <form class="room-form" on:submit=on_save_room>
                        <input
                            type="text"
                            placeholder="Room number"
                            prop:value=move || form_number.get()
                            on:input=move |ev| form_number.set(event_target_value(&ev))
                        />
                        <input
                            type="number"
                            min="0"
                            step="0.01"
                            placeholder="Price per night"
                            prop:value=move || form_price.get()
                            on:input=move |ev| form_price.set(event_target_value(&ev))
                        />
                        <input
                            type="number"
                            min="1"
                            placeholder="Max occupancy"
                            prop:value=move || form_occupancy.get()
                            on:input=move |ev| form_occupancy.set(event_target_value(&ev))
                        />
                        <select
                            prop:value=move || {
                                match form_kind.get() {
                                    RoomType::Single => "single",
                                    RoomType::Double => "double",
                                    RoomType::Suite => "suite",
                                    RoomType::Family => "family",
                                }
                            }
                            on:change=move |ev| {
                                form_kind.set(room_type_from_value(&event_target_value(&ev)));
                            }
                        >
                            <option value="single">"Single"</option>
                            <option value="double">"Double"</option>
                            <option value="suite">"Suite"</option>
                            <option value="family">"Family"</option>
                        </select>
                        <button class="admin__action" type="submit">
                            {move || {
                                if editing_room.get().is_some() { "Save" } else { "Create" }
                            }}
                        </button>
                        <button type="button" on:click=move |_| show_form.set(false)>
                            "Cancel"
                        </button>
                    </form>
                </Show>

                <Show when=move || rooms_loading.get()>
                    <p class="admin__status">"Loading rooms..."</p>
                </Show>
                <ul class="hotel-admin__room-list">
                    {move || {
                        rooms
                            .get()
                            .into_iter()
                            .map(|room| {
                                let toggle_target = room.clone();
                                let delete_id = room.id.clone();
                                view! {
                                    <li class="room-row">
                                        <span>{format!("Room {}", room.room_number)}</span>
                                        <span>{format!("{:.0} / night", room.price_per_night)}</span>
                                        <span>{format!("sleeps {}", room.max_occupancy)}</span>
                                        <button
                                            class="admin__action"
                                            on:click={
                                                let target = room.clone();
                                                move |_| open_edit_room(&target)
                                            }
                                        >
                                            "Edit"
                                        </button>
                                        <button
                                            class="admin__action"
                                            on:click={
                                                let target = toggle_target.clone();
                                                move |_| on_toggle_available(target.clone())
                                            }
                                        >
                                            {if room.is_available {
                                                "Mark unavailable"
                                            } else {
                                                "Mark available"
                                            }}
                                        </button>
                                        <button
                                            class="admin__action admin__action--danger"
                                            on:click={
                                                let id = delete_id.clone();
                                                move |_| on_delete_room(id.clone())
                                            }
                                        >
                                            "Delete"
                                        </button>
                                    </li>
                                }
                            })
                            .collect::<Vec<_>>()
                    }}
                </ul>
            </section>

            <section class="hotel-admin__reservations">
                <h2>"Reservations"</h2>
                <Show when=move || reservations.with(|s| s.loading)>
                    <p class="admin__status">"Loading reservations..."</p>
                </Show>
                <Show when=move || reservations.with(|s| s.error.is_some())>
                    <p class="admin__status admin__status--error">
                        {move || reservations.with(|s| s.error.clone().unwrap_or_default())}
                    </p>
                </Show>
                <ul class="hotel-admin__reservation-list">
                    {move || {
                        reservations
                            .with(|s| s.items.clone())
                            .into_iter()
                            .map(|reservation| {
                                view! {
                                    <li class="reservation-row">
                                        <span>
                                            {format!(
                                                "{} to {}",
                                                reservation.start_date,
                                                reservation.end_date,
                                            )}
                                        </span>
                                        <span>{format!("{:?}", reservation.status)}</span>
                                        <span>{format!("{:.0}", reservation.total_price)}</span>
                                    </li>
                                }
                            })
                            .collect::<Vec<_>>()
                    }}
                </ul>
            </section>
        </div>
    }
}
