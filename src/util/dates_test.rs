use super::*;

// =============================================================
// parse_ymd
// =============================================================

#[test]
fn parse_ymd_accepts_plain_dates() {
    assert_eq!(parse_ymd("2024-01-03"), Some((2024, 1, 3)));
    assert_eq!(parse_ymd("1999-12-31"), Some((1999, 12, 31)));
}

#[test]
fn parse_ymd_rejects_garbage() {
    assert_eq!(parse_ymd(""), None);
    assert_eq!(parse_ymd("2024-01"), None);
    assert_eq!(parse_ymd("2024-01-03-extra"), None);
    assert_eq!(parse_ymd("2024-13-01"), None);
    assert_eq!(parse_ymd("2024-00-01"), None);
    assert_eq!(parse_ymd("2024-01-32"), None);
    assert_eq!(parse_ymd("not-a-date"), None);
}

// =============================================================
// days_from_civil
// =============================================================

#[test]
fn days_from_civil_epoch_is_zero() {
    assert_eq!(days_from_civil(1970, 1, 1), 0);
}

#[test]
fn days_from_civil_handles_leap_years() {
    // 2024 is a leap year: Feb 29 exists between these two.
    let feb28 = days_from_civil(2024, 2, 28);
    let mar01 = days_from_civil(2024, 3, 1);
    assert_eq!(mar01 - feb28, 2);
}

// =============================================================
// nights_between
// =============================================================

#[test]
fn nights_between_two_day_stay() {
    assert_eq!(nights_between("2024-01-01", "2024-01-03"), Some(2));
}

#[test]
fn nights_between_single_night() {
    assert_eq!(nights_between("2024-06-15", "2024-06-16"), Some(1));
}

#[test]
fn nights_between_same_day_is_zero() {
    assert_eq!(nights_between("2024-06-15", "2024-06-15"), Some(0));
}

#[test]
fn nights_between_inverted_range_is_negative() {
    assert_eq!(nights_between("2024-06-16", "2024-06-15"), Some(-1));
}

#[test]
fn nights_between_crosses_month_and_year_boundaries() {
    assert_eq!(nights_between("2023-12-30", "2024-01-02"), Some(3));
}

#[test]
fn nights_between_unparseable_input_is_none() {
    assert_eq!(nights_between("", "2024-01-03"), None);
    assert_eq!(nights_between("2024-01-01", "soon"), None);
}
