use super::*;

// =============================================================
// Stored-value encoding
// =============================================================

#[test]
fn theme_strings_round_trip() {
    assert_eq!(parse_theme(encode_theme(true)), Some(true));
    assert_eq!(parse_theme(encode_theme(false)), Some(false));
}

#[test]
fn unknown_stored_value_means_no_choice() {
    // A garbage value falls back to the system preference.
    assert_eq!(parse_theme("blue"), None);
    assert_eq!(parse_theme(""), None);
}

// =============================================================
// Toggle
// =============================================================

#[test]
fn toggle_flips_the_flag() {
    assert!(toggle(false));
    assert!(!toggle(true));
}

#[test]
fn read_preference_defaults_light_outside_browser() {
    // Non-hydrate builds have no window and no storage.
    assert!(!read_preference());
}
