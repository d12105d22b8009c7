//! Zone-less civil date/time used to address ephemeris queries.

use std::fmt::{Display, Formatter};

use crate::julian::calendar_to_jd;

/// Wall-clock calendar fields with no timezone attached.
///
/// `hour` is signed: shifting a local time by a fixed offset (for example
/// `hour - 8` to approximate UT) may leave it negative, and Julian Date
/// conversion rolls such an hour back into the previous day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CivilTime {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: i32,
    pub minute: u32,
}

impl CivilTime {
    pub fn new(year: i32, month: u32, day: u32, hour: i32, minute: u32) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
        }
    }

    /// Same date fields with `delta` added to the hour. No day rollover is
    /// applied to the fields themselves.
    pub fn shift_hours(self, delta: i32) -> Self {
        Self {
            hour: self.hour.saturating_add(delta),
            ..self
        }
    }

    /// Fractional day of month (day + elapsed fraction of the day).
    pub fn day_fraction(&self) -> f64 {
        self.day as f64 + self.hour as f64 / 24.0 + self.minute as f64 / 1440.0
    }

    /// Julian Date of this instant on the proleptic Gregorian calendar.
    pub fn to_jd(&self) -> f64 {
        calendar_to_jd(self.year, self.month, self.day_fraction())
    }
}

impl Display for CivilTime {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02}T{:02}:{:02}",
            self.year, self.month, self.day, self.hour, self.minute
        )
    }
}
