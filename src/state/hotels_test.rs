use super::*;

fn make_hotel(name: &str, city: &str, country: &str) -> Hotel {
    Hotel {
        id: name.to_lowercase().replace(' ', "-"),
        name: name.to_owned(),
        tax_number: "TX".to_owned(),
        contact_email: "desk@example.com".to_owned(),
        contact_phone: "+30".to_owned(),
        address: format!("1 {name} St"),
        city: city.to_owned(),
        country: country.to_owned(),
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

fn sample() -> Vec<Hotel> {
    vec![
        make_hotel("Acropolis View", "Athens", "Greece"),
        make_hotel("Seaside Resort", "Chania", "Greece"),
        make_hotel("Alpine Lodge", "Innsbruck", "Austria"),
    ]
}

#[test]
fn empty_filters_match_everything() {
    let hotels = sample();
    assert_eq!(filter_hotels(&hotels, &SearchFilters::default()).len(), 3);
}

#[test]
fn term_matches_name_city_country_and_address_case_insensitively() {
    let hotels = sample();
    let by_name = SearchFilters { term: "acropolis".to_owned(), ..SearchFilters::default() };
    assert_eq!(filter_hotels(&hotels, &by_name).len(), 1);

    let by_city = SearchFilters { term: "CHANIA".to_owned(), ..SearchFilters::default() };
    assert_eq!(filter_hotels(&hotels, &by_city)[0].name, "Seaside Resort");

    let by_country = SearchFilters { term: "austria".to_owned(), ..SearchFilters::default() };
    assert_eq!(filter_hotels(&hotels, &by_country)[0].name, "Alpine Lodge");

    let by_address = SearchFilters { term: "alpine lodge st".to_owned(), ..SearchFilters::default() };
    assert_eq!(filter_hotels(&hotels, &by_address).len(), 1);
}

#[test]
fn city_and_country_filters_compose_with_the_term() {
    let hotels = sample();
    let filters = SearchFilters {
        term: "resort".to_owned(),
        country: "greece".to_owned(),
        ..SearchFilters::default()
    };
    assert_eq!(filter_hotels(&hotels, &filters).len(), 1);

    let mismatched = SearchFilters {
        term: "resort".to_owned(),
        country: "austria".to_owned(),
        ..SearchFilters::default()
    };
    assert!(filter_hotels(&hotels, &mismatched).is_empty());
}

#[test]
fn distinct_options_preserve_first_seen_order() {
    let mut hotels = sample();
    hotels.push(make_hotel("Parthenon Inn", "Athens", "Greece"));
    assert_eq!(distinct_cities(&hotels), vec!["Athens", "Chania", "Innsbruck"]);
    assert_eq!(distinct_countries(&hotels), vec!["Greece", "Austria"]);
}

// =============================================================
// Hotel create/edit form
// =============================================================

fn filled_form() -> HotelForm {
    HotelForm {
        name: "Harbor House".to_owned(),
        tax_number: "TX-9".to_owned(),
        contact_email: "front@harbor.example".to_owned(),
        contact_phone: "+30 210".to_owned(),
        address: "2 Pier Rd".to_owned(),
        city: "Piraeus".to_owned(),
        country: "Greece".to_owned(),
        working_hours_start: "07:00".to_owned(),
        working_hours_end: "23:00".to_owned(),
        has_wifi: true,
        swimming_pools_count: "1".to_owned(),
        max_reservations_capacity: "40".to_owned(),
        ..HotelForm::default()
    }
}

#[test]
fn create_payload_requires_the_identity_fields() {
    for blank in ["name", "tax_number", "contact_email", "city", "country"] {
        let mut form = filled_form();
        match blank {
            "name" => form.name.clear(),
            "tax_number" => form.tax_number.clear(),
            "contact_email" => form.contact_email.clear(),
            "city" => form.city.clear(),
            _ => form.country.clear(),
        }
        assert!(form.create_payload().is_err(), "{blank} should be required");
    }
}

#[test]
fn create_payload_parses_counts_and_defaults_empty_to_zero() {
    let mut form = filled_form();
    let payload = form.create_payload().unwrap();
    assert_eq!(payload.swimming_pools_count, 1);
    assert_eq!(payload.max_reservations_capacity, 40);
    assert!(payload.is_active);

    form.swimming_pools_count = String::new();
    assert_eq!(form.create_payload().unwrap().swimming_pools_count, 0);

    form.swimming_pools_count = "two".to_owned();
    assert!(form.create_payload().is_err());
}

#[test]
fn from_hotel_round_trips_into_an_update_payload() {
    let hotel = make_hotel("Acropolis View", "Athens", "Greece");
    let form = HotelForm::from_hotel(&hotel);
    let payload = form.update_payload().unwrap();
    assert_eq!(payload.name.as_deref(), Some("Acropolis View"));
    assert_eq!(payload.city.as_deref(), Some("Athens"));
    assert_eq!(payload.working_hours_end.as_deref(), Some("22:00"));
    // Activation has its own action on the admin page.
    assert_eq!(payload.is_active, None);
}

#[test]
fn update_payload_still_requires_a_name() {
    let mut form = filled_form();
    form.name = "   ".to_owned();
    assert!(form.update_payload().is_err());
}
