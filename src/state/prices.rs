//! Per-hotel cheapest-price cache for hotel list views.
//!
//! DESIGN
//! ======
//! Hotel cards render immediately and fill in their price asynchronously.
//! Each hotel's price is cached for five minutes; stale or missing entries
//! are refetched in small concurrent batches with a pause in between to
//! bound backend load. The cache core is pure (injected clock) so the
//! staleness and batching rules are testable on the host.

#[cfg(test)]
#[path = "prices_test.rs"]
mod prices_test;

use std::collections::HashMap;

use crate::net::types::Hotel;

/// How long a fetched price stays fresh, in milliseconds.
pub const PRICE_CACHE_TTL_MS: f64 = 5.0 * 60.0 * 1000.0;
/// Hotels fetched concurrently per batch.
pub const FETCH_BATCH_SIZE: usize = 5;
/// Pause between batches, in milliseconds.
pub const BATCH_PAUSE_MS: u64 = 100;

/// Cached price state for one hotel.
#[derive(Clone, Debug, PartialEq)]
pub struct PriceEntry {
    /// Cheapest available nightly price; `None` when the hotel has no
    /// bookable rooms (or the fetch failed).
    pub price: Option<f64>,
    pub loading: bool,
    /// Completion time in milliseconds since the epoch.
    pub fetched_at: Option<f64>,
}

impl PriceEntry {
    fn pending() -> Self {
        Self { price: None, loading: true, fetched_at: None }
    }
}

/// Price cache keyed by hotel id.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PriceCache {
    entries: HashMap<String, PriceEntry>,
}

impl PriceCache {
    /// Entry for a hotel; hotels never seen yet read as loading so the UI
    /// shows a placeholder.
    pub fn entry(&self, hotel_id: &str) -> PriceEntry {
        self.entries.get(hotel_id).cloned().unwrap_or_else(PriceEntry::pending)
    }

    /// Whether a hotel's price must be (re)fetched at time `now`.
    pub fn needs_fetch(&self, hotel_id: &str, now: f64) -> bool {
        match self.entries.get(hotel_id) {
            None => true,
            Some(entry) => match entry.fetched_at {
                None => true,
                Some(at) => entry.loading || now - at > PRICE_CACHE_TTL_MS,
            },
        }
    }

    /// Ids from `hotels` that need fetching, in list order.
    pub fn stale_ids(&self, hotels: &[Hotel], now: f64) -> Vec<String> {
        hotels
            .iter()
            .filter(|h| self.needs_fetch(&h.id, now))
            .map(|h| h.id.clone())
            .collect()
    }

    /// Flag a hotel as being fetched, keeping any previous price visible.
    pub fn mark_loading(&mut self, hotel_id: &str) {
        self.entries
            .entry(hotel_id.to_owned())
            .and_modify(|e| e.loading = true)
            .or_insert_with(PriceEntry::pending);
    }

    /// Record a fetch outcome at time `now`. Failures record `None` with a
    /// fresh timestamp so a broken hotel is not hammered every render.
    pub fn record(&mut self, hotel_id: &str, price: Option<f64>, now: f64) {
        self.entries.insert(
            hotel_id.to_owned(),
            PriceEntry { price, loading: false, fetched_at: Some(now) },
        );
    }

    /// Whether any hotel is still resolving.
    pub fn any_loading(&self) -> bool {
        self.entries.values().any(|e| e.loading)
    }
}

/// Fetch stale prices for `hotels` into `cache`, batched and paced.
#[cfg(feature = "hydrate")]
pub fn refresh_prices(cache: leptos::prelude::RwSignal<PriceCache>, hotels: Vec<Hotel>) {
    use leptos::prelude::*;

    leptos::task::spawn_local(async move {
        let now = js_sys::Date::now();
        let stale = cache.with_untracked(|c| c.stale_ids(&hotels, now));
        if stale.is_empty() {
            return;
        }
        cache.update(|c| {
            for id in &stale {
                c.mark_loading(id);
            }
        });
        for (index, batch) in stale.chunks(FETCH_BATCH_SIZE).enumerate() {
            if index > 0 {
                gloo_timers::future::sleep(std::time::Duration::from_millis(BATCH_PAUSE_MS)).await;
            }
            let results = futures::future::join_all(batch.iter().map(|id| async move {
                let price = match crate::net::room_api::cheapest_room_price(id).await {
                    Ok(price) => price,
                    Err(err) => {
                        leptos::logging::warn!("price fetch failed for hotel {id}: {err}");
                        None
                    }
                };
                (id.clone(), price)
            }))
            .await;
            let done = js_sys::Date::now();
            cache.update(|c| {
                for (id, price) in results {
                    c.record(&id, price, done);
                }
            });
        }
    });
}
