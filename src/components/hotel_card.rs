//! Hotel card for the viewer dashboard grid.
//!
//! DESIGN
//! ======
//! Cards render immediately from list data; the cheapest-price badge fills in
//! asynchronously from the shared price cache so one slow hotel never blocks
//! the grid.

use leptos::prelude::*;

use crate::net::types::Hotel;
use crate::state::prices::PriceCache;

/// A hotel summary card with amenities, price badge, and a book action.
#[component]
pub fn HotelCard(
    hotel: Hotel,
    prices: RwSignal<PriceCache>,
    on_book: Callback<Hotel>,
) -> impl IntoView {
    let hotel_id = hotel.id.clone();
    let price_entry = Memo::new(move |_| prices.with(|c| c.entry(&hotel_id)));

    let amenities = [
        (hotel.has_wifi, "WiFi"),
        (hotel.has_parking, "Parking"),
        (hotel.has_gym, "Gym"),
        (hotel.has_spa, "Spa"),
    ]
    .into_iter()
    .filter_map(|(present, label)| present.then_some(label))
    .collect::<Vec<_>>()
    .join(" · ");

    let book_hotel = hotel.clone();
    let on_book_click = move |_| on_book.run(book_hotel.clone());

    view! {
        <div class="hotel-card">
            <div class="hotel-card__header">
                <h3 class="hotel-card__name">{hotel.name.clone()}</h3>
                <span class="hotel-card__location">
                    {format!("{}, {}", hotel.city, hotel.country)}
                </span>
            </div>
            <p class="hotel-card__address">{hotel.address.clone()}</p>
            <p class="hotel-card__amenities">{amenities}</p>
            <div class="hotel-card__footer">
                <span class="hotel-card__price">
                    {move || {
                        let entry = price_entry.get();
                        if entry.loading {
                            "…".to_owned()
                        } else {
                            entry
                                .price
                                .map_or_else(
                                    || "No rooms available".to_owned(),
                                    |p| format!("from {p:.0} / night"),
                                )
                        }
                    }}
                </span>
                <button class="btn hotel-card__book" on:click=on_book_click>
                    "Book"
                </button>
            </div>
        </div>
    }
}
