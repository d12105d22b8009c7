//! Julian Date arithmetic for civil calendar dates.
//!
//! Dates are read on the proleptic Gregorian calendar for every year, so a
//! date before the 1582 reform maps the same way a JavaScript `Date` or an
//! ISO-8601 timestamp would map it.
//!
//! Source: Meeus, "Astronomical Algorithms" (2nd ed), Chapter 7.

/// Julian Date of the J2000.0 epoch (2000-Jan-01 12:00).
pub const J2000_JD: f64 = 2_451_545.0;

/// Days in a Julian century.
pub const DAYS_PER_JULIAN_CENTURY: f64 = 36_525.0;

/// Convert a proleptic Gregorian calendar date to a Julian Date.
///
/// `day_frac` is the day of month plus the fraction of the day elapsed, so
/// 1.5 is noon on the first. Values outside the month (negative fractions,
/// day 0) fall through the arithmetic into the neighbouring day.
pub fn calendar_to_jd(year: i32, month: u32, day_frac: f64) -> f64 {
    let (y, m) = if month <= 2 {
        (year as f64 - 1.0, month as f64 + 12.0)
    } else {
        (year as f64, month as f64)
    };
    let a = (y / 100.0).floor();
    let b = 2.0 - a + (a / 4.0).floor();
    (365.25 * (y + 4716.0)).floor() + (30.6001 * (m + 1.0)).floor() + day_frac + b - 1524.5
}

/// Julian centuries elapsed since J2000.0.
pub fn jd_to_centuries(jd: f64) -> f64 {
    (jd - J2000_JD) / DAYS_PER_JULIAN_CENTURY
}
