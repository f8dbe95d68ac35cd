//! Calendar-date parsing and night counting for the booking flow.
//!
//! DESIGN
//! ======
//! Check-in/check-out values travel as `YYYY-MM-DD` strings end to end (the
//! backend stores dates, not instants), so stay lengths reduce to whole-day
//! arithmetic on civil dates. No timezone handling is needed or wanted here.

#[cfg(test)]
#[path = "dates_test.rs"]
mod dates_test;

/// Parse a `YYYY-MM-DD` string into `(year, month, day)`.
///
/// Rejects anything with extra segments or out-of-range month/day fields.
/// Day validity is only checked against 1..=31; the backend is the authority
/// on real calendar validity.
pub fn parse_ymd(value: &str) -> Option<(i32, u32, u32)> {
    let mut parts = value.split('-');
    let year: i32 = parts.next()?.parse().ok()?;
    let month: u32 = parts.next()?.parse().ok()?;
    let day: u32 = parts.next()?.parse().ok()?;
    if parts.next().is_some() {
        return None;
    }
    if !(1..=12).contains(&month) || !(1..=31).contains(&day) {
        return None;
    }
    Some((year, month, day))
}

/// Days since 1970-01-01 for a proleptic-Gregorian civil date.
pub fn days_from_civil(year: i32, month: u32, day: u32) -> i64 {
    let y = i64::from(year) - i64::from(month <= 2);
    let era = if y >= 0 { y } else { y - 399 } / 400;
    let yoe = y - era * 400;
    let mp = i64::from((month + 9) % 12);
    let doy = (153 * mp + 2) / 5 + i64::from(day) - 1;
    let doe = yoe * 365 + yoe / 4 - yoe / 100 + doy;
    era * 146_097 + doe - 719_468
}

/// Number of nights between two `YYYY-MM-DD` dates.
///
/// Returns `None` when either date fails to parse. The result can be zero or
/// negative for same-day or inverted ranges; callers gate on `>= 1`.
pub fn nights_between(check_in: &str, check_out: &str) -> Option<i64> {
    let (y1, m1, d1) = parse_ymd(check_in)?;
    let (y2, m2, d2) = parse_ymd(check_out)?;
    Some(days_from_civil(y2, m2, d2) - days_from_civil(y1, m1, d1))
}
