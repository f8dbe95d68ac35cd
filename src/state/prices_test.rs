use super::*;

fn make_hotel(id: &str) -> Hotel {
    Hotel {
        id: id.to_owned(),
        name: format!("Hotel {id}"),
        tax_number: "TX".to_owned(),
        contact_email: "desk@example.com".to_owned(),
        contact_phone: "+30".to_owned(),
        address: "1 Main St".to_owned(),
        city: "Athens".to_owned(),
        country: "Greece".to_owned(),
        working_hours_start: "08:00".to_owned(),
        working_hours_end: "22:00".to_owned(),
        gallery: Vec::new(),
        has_gym: false,
        has_spa: false,
        has_wifi: true,
        has_parking: false,
        swimming_pools_count: 0,
        max_reservations_capacity: 10,
        is_active: true,
        created_at: "2024-01-01T00:00:00Z".to_owned(),
    }
}

// =============================================================
// Freshness window
// =============================================================

#[test]
fn unseen_hotel_needs_fetch_and_reads_as_loading() {
    let cache = PriceCache::default();
    assert!(cache.needs_fetch("h-1", 0.0));
    let entry = cache.entry("h-1");
    assert!(entry.loading);
    assert_eq!(entry.price, None);
}

#[test]
fn recorded_price_is_fresh_within_the_window() {
    let mut cache = PriceCache::default();
    cache.record("h-1", Some(75.0), 1_000.0);
    // The window edge itself is still fresh.
    assert!(!cache.needs_fetch("h-1", 1_000.0 + PRICE_CACHE_TTL_MS));
}

#[test]
fn recorded_price_expires_after_the_window() {
    let mut cache = PriceCache::default();
    cache.record("h-1", Some(75.0), 1_000.0);
    assert!(cache.needs_fetch("h-1", 1_000.0 + PRICE_CACHE_TTL_MS + 1.0));
}

#[test]
fn failed_fetch_is_also_cached_for_the_window() {
    let mut cache = PriceCache::default();
    cache.record("h-1", None, 1_000.0);
    assert!(!cache.needs_fetch("h-1", 2_000.0));
    assert_eq!(cache.entry("h-1").price, None);
    assert!(!cache.entry("h-1").loading);
}

#[test]
fn mark_loading_keeps_previous_price_for_display() {
    let mut cache = PriceCache::default();
    cache.record("h-1", Some(75.0), 1_000.0);
    cache.mark_loading("h-1");
    let entry = cache.entry("h-1");
    assert!(entry.loading);
    assert_eq!(entry.price, Some(75.0));
    assert!(cache.any_loading());
}

// =============================================================
// Batch planning
// =============================================================

#[test]
fn stale_ids_preserve_list_order_and_skip_fresh_entries() {
    let hotels: Vec<Hotel> = ["a", "b", "c", "d"].iter().map(|id| make_hotel(id)).collect();
    let mut cache = PriceCache::default();
    cache.record("b", Some(50.0), 10_000.0);

    let stale = cache.stale_ids(&hotels, 10_500.0);
    assert_eq!(stale, vec!["a", "c", "d"]);
}

#[test]
fn batches_are_capped_at_five() {
    let ids: Vec<String> = (0..12).map(|i| format!("h-{i}")).collect();
    let chunks: Vec<usize> = ids.chunks(FETCH_BATCH_SIZE).map(<[String]>::len).collect();
    assert_eq!(chunks, vec![5, 5, 2]);
}
