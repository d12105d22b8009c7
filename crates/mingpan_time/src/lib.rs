//! Calendar and sidereal-time primitives for chart derivation.
//!
//! This crate provides:
//! - `CivilTime`, a zone-less wall-clock instant
//! - Calendar to Julian Date conversion (proleptic Gregorian)
//! - Greenwich Mean and Local Sidereal Time in hours

pub mod civil;
pub mod julian;
pub mod sidereal;

pub use civil::CivilTime;
pub use julian::{DAYS_PER_JULIAN_CENTURY, J2000_JD, calendar_to_jd, jd_to_centuries};
pub use sidereal::{
    HOURS_PER_ROTATION, earth_rotation_angle_rad, gmst_hours, gmst_rad, local_sidereal_time_hours,
};
