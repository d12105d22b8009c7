//! Greenwich Mean Sidereal Time and Local Sidereal Time.
//!
//! Sidereal time drives the ascendant: the right ascension of the
//! midheaven equals the local sidereal time.
//!
//! All functions take UT Julian Dates.
//!
//! Sources:
//! - ERA: IERS Conventions 2010, Eq. 5.15. Public domain.
//! - GMST polynomial: Capitaine et al. 2003, Table 2. Public domain.

use std::f64::consts::{PI, TAU};

use crate::julian::{J2000_JD, jd_to_centuries};

/// Arcseconds to radians: 1″ = π / (180 × 3600).
const ARCSEC_TO_RAD: f64 = PI / (180.0 * 3600.0);

/// Sidereal hours in one full rotation.
pub const HOURS_PER_ROTATION: f64 = 24.0;

/// Earth Rotation Angle at a given UT Julian Date.
///
/// θ = 2π × (0.7790572732640 + 1.00273781191135448 × Du)
/// where Du = JD_UT − 2451545.0.
///
/// Returns radians in [0, 2π).
pub fn earth_rotation_angle_rad(jd_ut: f64) -> f64 {
    let du = jd_ut - J2000_JD;
    let theta = TAU * (0.779_057_273_264_0 + 1.002_737_811_911_354_6 * du);
    theta.rem_euclid(TAU)
}

/// Greenwich Mean Sidereal Time at a given UT Julian Date, in radians [0, 2π).
///
/// GMST = ERA + polynomial(T), where T = Julian centuries from J2000.0.
pub fn gmst_rad(jd_ut: f64) -> f64 {
    let era = earth_rotation_angle_rad(jd_ut);
    let t = jd_to_centuries(jd_ut);
    let t2 = t * t;
    let t3 = t2 * t;
    let t4 = t3 * t;
    let t5 = t4 * t;

    let poly_arcsec = 0.014506 + 4612.156534 * t + 1.3915817 * t2
        - 0.00000044 * t3
        - 0.000029956 * t4
        - 0.0000000368 * t5;

    (era + poly_arcsec * ARCSEC_TO_RAD).rem_euclid(TAU)
}

/// Greenwich Mean Sidereal Time in hours [0, 24).
pub fn gmst_hours(jd_ut: f64) -> f64 {
    (gmst_rad(jd_ut) * HOURS_PER_ROTATION / TAU).rem_euclid(HOURS_PER_ROTATION)
}

/// Local Sidereal Time in hours from Greenwich sidereal time and an east
/// longitude in degrees.
///
/// LST = GST + longitude / 15, reduced into [0, 24). The GST input may be
/// any real value.
pub fn local_sidereal_time_hours(gst_hours: f64, longitude_east_deg: f64) -> f64 {
    (gst_hours + longitude_east_deg / 15.0).rem_euclid(HOURS_PER_ROTATION)
}
