//! Viewer dashboard: browse hotels, book rooms, manage reservations.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the authenticated landing route for guests. Hotels load once per
//! visit; cheapest-price badges fill in through the shared price cache, which
//! only refetches entries older than its TTL. The reservations tab fetches on
//! first activation.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::booking_modal::BookingModal;
use crate::components::hotel_card::HotelCard;
use crate::net::types::{Hotel, Reservation};
use crate::state::hotels::{self, HotelsState, SearchFilters};
use crate::state::prices::PriceCache;
use crate::state::reservations::ReservationsState;
use crate::state::session::Session;
use crate::state::ui::{UiState, ViewerTab};
use crate::util;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let session = expect_context::<Session>();
    let ui = expect_context::<RwSignal<UiState>>();
    let prices = expect_context::<RwSignal<PriceCache>>();
    let navigate = use_navigate();

    util::auth::install_unauth_redirect(session, navigate);

    let hotels = RwSignal::new(HotelsState::default());
    let filters = RwSignal::new(SearchFilters::default());
    let reservations = RwSignal::new(ReservationsState::default());
    let reservations_requested = RwSignal::new(false);
    let booking_hotel = RwSignal::new(None::<Hotel>);

    // Load the hotel list once the session has settled.
    #[cfg(feature = "hydrate")]
    {
        let loaded = RwSignal::new(false);
        Effect::new(move || {
            let ready = session.state.with(|s| !s.is_loading && s.is_authenticated);
            if !ready || loaded.get_untracked() {
                return;
            }
            loaded.set(true);
            hotels.update(|s| s.loading = true);
            leptos::task::spawn_local(async move {
                match crate::net::hotel_api::list_hotels(None, None, true).await {
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

        // Keep price badges warm for whatever the current filters show.
        Effect::new(move || {
            let visible = hotels.with(|s| filters.with(|f| hotels::filter_hotels(&s.items, f)));
            if !visible.is_empty() {
                crate::state::prices::refresh_prices(prices, visible);
            }
        });

        // Reservations load lazily, on first tab activation.
        Effect::new(move || {
            let wants = ui.with(|u| u.active_tab == ViewerTab::Reservations);
            if !wants || reservations_requested.get_untracked() {
                return;
            }
            let Some(user_id) =
                session.state.with_untracked(|s| s.user.as_ref().map(|u| u.id.clone()))
            else {
                return;
            };
            reservations_requested.set(true);
            reservations.update(|s| s.loading = true);
            leptos::task::spawn_local(async move {
                match crate::net::reservation_api::user_reservations(&user_id).await {
                    Ok(items) => reservations.update(|s| {
                        s.items = items;
                        s.loading = false;
                        s.error = None;
                    }),
                    Err(err) => reservations.update(|s| {
                        s.loading = false;
                        s.error = Some(err.to_string());
                    }),
                }
            });
        });
    }

    let filtered = Memo::new(move |_| {
        hotels.with(|s| filters.with(|f| hotels::filter_hotels(&s.items, f)))
    });
    let cities = Memo::new(move |_| hotels.with(|s| hotels::distinct_cities(&s.items)));
    let countries = Memo::new(move |_| hotels.with(|s| hotels::distinct_countries(&s.items)));

    let on_book = Callback::new(move |hotel: Hotel| booking_hotel.set(Some(hotel)));
    let on_close_booking = Callback::new(move |()| booking_hotel.set(None));

    let on_logout = move |_| {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            session.logout().await;
        });
    };

    let on_toggle_dark = move |_| {
        ui.update(|u| {
            u.dark_mode = util::dark_mode::toggle(u.dark_mode);
        });
    };

    let user_name = move || {
        session
            .state
            .with(|s| s.user.as_ref().map(|u| u.name.clone()).unwrap_or_default())
    };
    let is_admin = move || session.state.with(crate::state::auth::AuthState::is_admin);
    let admin_href = move || {
        if session.state.with(crate::state::auth::AuthState::is_super_admin) {
            "/admin"
        } else {
            "/hotel-admin"
        }
    };

    view! {
        <div class="dashboard">
            <header class="dashboard__header">
                <h1 class="dashboard__brand">"StayHub"</h1>
                <nav class="dashboard__tabs">
                    <button
                        class="dashboard__tab"
                        class:dashboard__tab--active=move || {
                            ui.with(|u| u.active_tab == ViewerTab::Browse)
                        }
                        on:click=move |_| ui.update(|u| u.active_tab = ViewerTab::Browse)
                    >
                        "Browse Hotels"
                    </button>
                    <button
                        class="dashboard__tab"
                        class:dashboard__tab--active=move || {
                            ui.with(|u| u.active_tab == ViewerTab::Reservations)
                        }
                        on:click=move |_| ui.update(|u| u.active_tab = ViewerTab::Reservations)
                    >
                        "My Reservations"
                    </button>
                </nav>
                <div class="dashboard__actions">
                    <Show when=is_admin>
                        <a class="dashboard__admin-link" href=admin_href>
                            "Admin"
                        </a>
                    </Show>
                    <button class="dashboard__dark-toggle" on:click=on_toggle_dark>
                        {move || if ui.with(|u| u.dark_mode) { "Light" } else { "Dark" }}
                    </button>
                    <span class="dashboard__user">{user_name}</span>
                    <button class="dashboard__logout" on:click=on_logout>
                        "Sign Out"
                    </button>
                </div>
            </header>

            <Show
                when=move || ui.with(|u| u.active_tab == ViewerTab::Browse)
                fallback=move || {
                    view! { <ReservationsTab reservations=reservations/> }
                }
            >
                <section class="dashboard__browse">
                    <div class="search-bar">
                        <input
                            class="search-bar__input"
                            type="search"
                            placeholder="Search hotels by name, city, or country"
                            prop:value=move || filters.with(|f| f.term.clone())
                            on:input=move |ev| {
                                filters.update(|f| f.term = event_target_value(&ev));
                            }
                        />
                        <button
                            class="search-bar__toggle"
                            on:click=move |_| filters.update(|f| f.show_filters = !f.show_filters)
                        >
                            "Filters"
                        </button>
                    </div>

                    <Show when=move || filters.with(|f| f.show_filters)>
                        <div class="search-filters">
                            <select on:change=move |ev| {
                                filters.update(|f| f.city = event_target_value(&ev));
                            }>
                                <option value="">"All cities"</option>
                                {move || {
                                    cities
                                        .get()
                                        .into_iter()
                                        .map(|city| {
                                            view! {
                                                <option value=city.clone()>{city.clone()}</option>
                                            }
                                        })
                                        .collect::<Vec<_>>()
                                }}
                            </select>
                            <select on:change=move |ev| {
                                filters.update(|f| f.country = event_target_value(&ev));
                            }>
                                <option value="">"All countries"</option>
                                {move || {
                                    countries
                                        .get()
                                        .into_iter()
                                        .map(|country| {
                                            view! {
                                                <option value=country.clone()>
                                                    {country.clone()}
                                                </option>
                                            }
                                        })
                                        .collect::<Vec<_>>()
                                }}
                            </select>
                            <button
                                class="search-filters__clear"
                                on:click=move |_| filters.set(SearchFilters::default())
                            >
                                "Clear"
                            </button>
                        </div>
                    </Show>

                    <Show when=move || hotels.with(|s| s.loading)>
                        <p class="dashboard__status">"Loading hotels..."</p>
                    </Show>
                    <Show when=move || hotels.with(|s| s.error.is_some())>
                        <p class="dashboard__status dashboard__status--error">
                            {move || hotels.with(|s| s.error.clone().unwrap_or_default())}
                        </p>
                    </Show>
                    <Show when=move || {
                        hotels.with(|s| !s.loading && s.error.is_none())
                            && filtered.with(Vec::is_empty)
                    }>
                        <p class="dashboard__status">"No hotels match your search."</p>
                    </Show>

                    <div class="hotel-grid">
                        {move || {
                            filtered
                                .get()
                                .into_iter()
                                .map(|hotel| {
                                    view! {
                                        <HotelCard hotel=hotel prices=prices on_book=on_book/>
                                    }
                                })
                                .collect::<Vec<_>>()
                        }}
                    </div>
                </section>
            </Show>

            {move || {
                booking_hotel
                    .get()
                    .map(|hotel| view! { <BookingModal hotel=hotel on_close=on_close_booking/> })
            }}
        </div>
    }
}

#[component]
fn ReservationsTab(reservations: RwSignal<ReservationsState>) -> impl IntoView {
    let on_cancel = move |reservation: Reservation| {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::reservation_api::cancel_reservation(&reservation.id).await {
                Ok(()) => reservations.update(|s| s.mark_cancelled(&reservation.id)),
                Err(err) => reservations.update(|s| s.error = Some(err.to_string())),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = reservation;
    };

    view! {
        <section class="reservations">
            <h2 class="reservations__title">"My Reservations"</h2>
            <Show when=move || reservations.with(|s| s.loading)>
                <p class="dashboard__status">"Loading reservations..."</p>
            </Show>
            <Show when=move || reservations.with(|s| s.error.is_some())>
                <p class="dashboard__status dashboard__status--error">
                    {move || reservations.with(|s| s.error.clone().unwrap_or_default())}
                </p>
            </Show>
            <Show when=move || reservations.with(|s| !s.loading && s.items.is_empty())>
                <p class="dashboard__status">"No reservations yet."</p>
            </Show>
            <ul class="reservations__list">
                {move || {
                    reservations
                        .with(|s| s.items.clone())
                        .into_iter()
                        .map(|reservation| {
                            let cancellable = ReservationsState::cancellable(&reservation);
                            let cancel_target = reservation.clone();
                            view! {
                                <li class="reservation-row">
                                    <span class="reservation-row__dates">
                                        {format!(
                                            "{} → {}",
                                            reservation.start_date,
                                            reservation.end_date,
                                        )}
                                    </span>
                                    <span class="reservation-row__status">
                                        {format!("{:?}", reservation.status)}
                                    </span>
                                    <span class="reservation-row__total">
                                        {format!("{:.0}", reservation.total_price)}
                                    </span>
                                    <Show when=move || cancellable>
                                        <button
                                            class="reservation-row__cancel"
                                            on:click={
                                                let target = cancel_target.clone();
                                                move |_| on_cancel(target.clone())
                                            }
                                        >
                                            "Cancel"
                                        </button>
                                    </Show>
                                </li>
                            }
                        })
                        .collect::<Vec<_>>()
                }}
            </ul>
        </section>
    }
}
