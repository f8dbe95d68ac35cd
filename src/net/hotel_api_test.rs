use super::*;

#[test]
fn hotels_path_without_params_is_bare_collection() {
    assert_eq!(hotels_path(None, None, false), "/hotels/");
}

#[test]
fn hotels_path_joins_query_params() {
    assert_eq!(hotels_path(Some(20), Some(10), false), "/hotels/?skip=20&limit=10");
    assert_eq!(hotels_path(None, None, true), "/hotels/?active_only=true");
    assert_eq!(hotels_path(Some(0), Some(50), true), "/hotels/?skip=0&limit=50&active_only=true");
}

#[test]
fn hotel_path_embeds_id() {
    assert_eq!(hotel_path("h-42"), "/hotels/h-42");
}
