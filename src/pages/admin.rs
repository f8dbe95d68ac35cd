//! Super-admin dashboard: manage the hotel inventory platform-wide.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::net::types::Hotel;
use crate::state::hotels::{HotelForm, HotelsState};
use crate::state::session::Session;
use crate::util;

#[component]
pub fn AdminPage() -> impl IntoView {
    let session = expect_context::<Session>();
    let navigate = use_navigate();

    util::auth::install_unauth_redirect(session, navigate.clone());
    util::auth::install_role_redirect(session, "super_admin", navigate);

    let hotels = RwSignal::new(HotelsState::default());
    let confirm_delete = RwSignal::new(None::<Hotel>);

    // Create/edit dialog: `editing` holds the hotel id while editing, `None`
    // while creating.
    let show_form = RwSignal::new(false);
    let form = RwSignal::new(HotelForm::default());
    let editing = RwSignal::new(None::<String>);
    let form_error = RwSignal::new(None::<String>);

    #[cfg(feature = "hydrate")]
    {
        let loaded = RwSignal::new(false);
        Effect::new(move || {
            let allowed = session.state.with(|s| !s.is_loading && s.can_access("super_admin"));
            if !allowed || loaded.get_untracked() {
                return;
            }
            loaded.set(true);
            hotels.update(|s| s.loading = true);
            leptos::task::spawn_local(async move {
                // Admins see deactivated properties too.
                match crate::net::hotel_api::list_hotels(None, None, false).await {
                    Ok(items) => hotels.update(|s| {
                        s.items = items;
                        s.loading = false;
                        s.error = None;
                    }),
                    Err(err) => hotels.update(|s| {
                        s.loading = false;
                        s.error = Some(err.to_string());
                    }),
                }
            });
        });
    }

    let on_toggle_active = move |hotel: Hotel| {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::hotel_api::set_hotel_active(&hotel.id, !hotel.is_active).await {
                Ok(updated) => hotels.update(|s| {
                    if let Some(slot) = s.items.iter_mut().find(|h| h.id == updated.id) {
                        *slot = updated;
                    }
                }),
                Err(err) => hotels.update(|s| s.error = Some(err.to_string())),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = hotel;
    };

    let open_create = move |_| {
        form.set(HotelForm::default());
        editing.set(None);
        form_error.set(None);
        show_form.set(true);
    };

    let open_edit = move |hotel: &Hotel| {
        form.set(HotelForm::from_hotel(hotel));
        editing.set(Some(hotel.id.clone()));
        form_error.set(None);
        show_form.set(true);
    };

    let on_save = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        match editing.get_untracked() {
            Some(hotel_id) => {
                let payload = match form.with_untracked(HotelForm::update_payload) {
                    Ok(payload) => payload,
                    Err(message) => {
                        form_error.set(Some(message));
                        return;
                    }
                };
                #[cfg(feature = "hydrate")]
                leptos::task::spawn_local(async move {
                    match crate::net::hotel_api::update_hotel(&hotel_id, &payload).await {
                        Ok(updated) => {
                            hotels.update(|s| {
                                if let Some(slot) = s.items.iter_mut().find(|h| h.id == updated.id)
                                {
                                    *slot = updated;
                                }
                            });
                            show_form.set(false);
                        }
                        Err(err) => form_error.set(Some(err.to_string())),
                    }
                });
                #[cfg(not(feature = "hydrate"))]
                let _ = (hotel_id, payload);
            }
            None => {
                let payload = match form.with_untracked(HotelForm::create_payload) {
                    Ok(payload) => payload,
                    Err(message) => {
                        form_error.set(Some(message));
                        return;
                    }
                };
                #[cfg(feature = "hydrate")]
                leptos::task::spawn_local(async move {
                    match crate::net::hotel_api::create_hotel(&payload).await {
                        Ok(created) => {
                            hotels.update(|s| s.items.push(created));
                            show_form.set(false);
                        }
                        Err(err) => form_error.set(Some(err.to_string())),
                    }
                });
                #[cfg(not(feature = "hydrate"))]
                let _ = payload;
            }
        }
    };

    let on_confirm_delete = move |_| {
        let Some(hotel) = confirm_delete.get_untracked() else {
            return;
        };
        confirm_delete.set(None);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::hotel_api::delete_hotel(&hotel.id).await {
                Ok(()) => hotels.update(|s| s.items.retain(|h| h.id != hotel.id)),
                Err(err) => hotels.update(|s| s.error = Some(err.to_string())),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = hotel;
    };

    view! {
        <div class="admin">
            <header class="admin__header">
                <h1>"Hotel Administration"</h1>
                <div class="admin__header-actions">
                    <button class="admin__action" on:click=open_create>
                        "New Hotel"
                    </button>
                    <a class="admin__back" href="/">
                        "Back to dashboard"
                    </a>
                </div>
            </header>

            <Show when=move || hotels.with(|s| s.loading)>
                <p class="admin__status">"Loading hotels..."</p>
            </Show>
            <Show when=move || hotels.with(|s| s.error.is_some())>
                <p class="admin__status admin__status--error">
                    {move || hotels.with(|s| s.error.clone().unwrap_or_default())}
                </p>
            </Show>

            <table class="admin__table">
                <thead>
                    <tr>
                        <th>"Name"</th>
                        <th>"City"</th>
                        <th>"Country"</th>
                        <th>"Status"</th>
                        <th>"Actions"</th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        hotels
                            .with(|s| s.items.clone())
                            .into_iter()
                            .map(|hotel| {
                                let toggle_target = hotel.clone();
                                let delete_target = hotel.clone();
                                view! {
                                    <tr class="admin__row">
                                        <td>{hotel.name.clone()}</td>
                                        <td>{hotel.city.clone()}</td>
                                        <td>{hotel.country.clone()}</td>
                                        <td>
                                            {if hotel.is_active { "Active" } else { "Inactive" }}
                                        </td>
                                        <td>
                                            <button
                                                class="admin__action"
                                                on:click={
                                                    let target = hotel.clone();
                                                    move |_| open_edit(&target)
                                                }
                                            >
                                                "Edit"
                                            </button>
                                            <button
                                                class="admin__action"
                                                on:click={
                                                    let target = toggle_target.clone();
                                                    move |_| on_toggle_active(target.clone())
                                                }
                                            >
                                                {if hotel.is_active {
                                                    "Deactivate"
                                                } else {
                                                    "Activate"
                                                }}
                                            </button>
                                            <button
                                                class="admin__action admin__action--danger"
                                                on:click={
                                                    let target = delete_target.clone();
                                                    move |_| confirm_delete.set(Some(target.clone()))
                                                }
                                            >
                                                "Delete"
                                            </button>
                                        </td>
                                    </tr>
                                }
                            })
                            .collect::<Vec<_>>()
                    }}
                </tbody>
            </table>

            <Show when=move || confirm_delete.get().is_some()>
                <div class="modal-backdrop">
                    <div class="confirm-dialog">
                        <p>
                            {move || {
                                confirm_delete
                                    .get()
                                    .map(|h| format!("Delete \"{}\"? This cannot be undone.", h.name))
                                    .unwrap_or_default()
                            }}
                        </p>
                        <div class="confirm-dialog__actions">
                            <button on:click=move |_| confirm_delete.set(None)>"Keep"</button>
                            <button class="admin__action--danger" on:click=on_confirm_delete>
                                "Delete"
                            </button>
                        </div>
                    </div>
                </div>
            </Show>

            <Show when=move || show_form.get()>
                <div class="modal-backdrop">
                    <form class="hotel-form" on:submit=on_save>
                        <h2>
                            {move || {
                                if editing.get().is_some() { "Edit Hotel" } else { "New Hotel" }
                            }}
                        </h2>
                        <Show when=move || form_error.get().is_some()>
                            <p class="admin__status admin__status--error">
                                {move || form_error.get().unwrap_or_default()}
                            </p>
                        </Show>
                        <input
                            type="text"
                            placeholder="Name *"
                            prop:value=move || form.with(|f| f.name.clone())
                            on:input=move |ev| form.update(|f| f.name = event_target_value(&ev))
                        />
                        <input
                            type="text"
                            placeholder="Tax number *"
                            prop:value=move || form.with(|f| f.tax_number.clone())
                            on:input=move |ev| {
                                form.update(|f| f.tax_number = event_target_value(&ev));
                            }
                            disabled=move || editing.get().is_some()
                        />
                        <input
                            type="email"
                            placeholder="Contact email *"
                            prop:value=move || form.with(|f| f.contact_email.clone())
                            on:input=move |ev| {
                                form.update(|f| f.contact_email = event_target_value(&ev));
                            }
                        />
                        <input
                            type="tel"
                            placeholder="Contact phone"
                            prop:value=move || form.with(|f| f.contact_phone.clone())
                            on:input=move |ev| {
                                form.update(|f| f.contact_phone = event_target_value(&ev));
                            }
                        />
                        <input
                            type="text"
                            placeholder="Address"
                            prop:value=move || form.with(|f| f.address.clone())
                            on:input=move |ev| form.update(|f| f.address = event_target_value(&ev))
                        />
                        <input
                            type="text"
                            placeholder="City *"
                            prop:value=move || form.with(|f| f.city.clone())
                            on:input=move |ev| form.update(|f| f.city = event_target_value(&ev))
                        />
                        <input
                            type="text"
                            placeholder="Country *"
                            prop:value=move || form.with(|f| f.country.clone())
                            on:input=move |ev| form.update(|f| f.country = event_target_value(&ev))
                        />
                        <div class="hotel-form__hours">
                            <input
                                type="time"
                                prop:value=move || form.with(|f| f.working_hours_start.clone())
                                on:input=move |ev| {
                                    form.update(|f| f.working_hours_start = event_target_value(&ev));
                                }
                            />
                            <input
                                type="time"
                                prop:value=move || form.with(|f| f.working_hours_end.clone())
                                on:input=move |ev| {
                                    form.update(|f| f.working_hours_end = event_target_value(&ev));
                                }
                            />
                        </div>
                        // Amenities and capacity are create-only; the update
                        // endpoint does not accept them.
                        <Show when=move || editing.get().is_none()>
                            <div class="hotel-form__amenities">
                                <label>
                                    <input
                                        type="checkbox"
                                        prop:checked=move || form.with(|f| f.has_wifi)
                                        on:change=move |ev| {
                                            form.update(|f| f.has_wifi = event_target_checked(&ev));
                                        }
                                    />
                                    "WiFi"
                                </label>
                                <label>
                                    <input
                                        type="checkbox"
                                        prop:checked=move || form.with(|f| f.has_parking)
                                        on:change=move |ev| {
                                            form.update(|f| {
                                                f.has_parking = event_target_checked(&ev);
                                            });
                                        }
                                    />
                                    "Parking"
                                </label>
                                <label>
                                    <input
                                        type="checkbox"
                                        prop:checked=move || form.with(|f| f.has_gym)
                                        on:change=move |ev| {
                                            form.update(|f| f.has_gym = event_target_checked(&ev));
                                        }
                                    />
                                    "Gym"
                                </label>
                                <label>
                                    <input
                                        type="checkbox"
                                        prop:checked=move || form.with(|f| f.has_spa)
                                        on:change=move |ev| {
                                            form.update(|f| f.has_spa = event_target_checked(&ev));
                                        }
                                    />
                                    "Spa"
                                </label>
                            </div>
                            <input
                                type="number"
                                min="0"
                                placeholder="Swimming pools"
                                prop:value=move || form.with(|f| f.swimming_pools_count.clone())
                                on:input=move |ev| {
                                    form.update(|f| {
                                        f.swimming_pools_count = event_target_value(&ev);
                                    });
                                }
                            />
                            <input
                                type="number"
                                min="0"
                                placeholder="Reservation capacity"
                                prop:value=move || {
                                    form.with(|f| f.max_reservations_capacity.clone())
                                }
                                on:input=move |ev| {
                                    form.update(|f| {
                                        f.max_reservations_capacity = event_target_value(&ev);
                                    });
                                }
                            />
                        </Show>
                        <div class="confirm-dialog__actions">
                            <button type="button" on:click=move |_| show_form.set(false)>
                                "Cancel"
                            </button>
                            <button class="admin__action" type="submit">
                                {move || {
                                    if editing.get().is_some() { "Save" } else { "Create" }
                                }}
                            </button>
                        </div>
                    </form>
                </div>
            </Show>
        </div>
    }
}
