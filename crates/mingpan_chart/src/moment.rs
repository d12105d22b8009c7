//! Birth moment as entered by the user.

use mingpan_time::CivilTime;

/// Local wall-clock birth date and time, with no timezone attached.
///
/// Fields are taken as given; range checking belongs to whoever collects
/// them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BirthMoment {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
}

impl BirthMoment {
    pub fn new(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
        }
    }

    /// The wall-clock fields as a civil instant, unshifted.
    pub fn local_instant(&self) -> CivilTime {
        CivilTime::new(
            self.year,
            self.month,
            self.day,
            self.hour.min(i32::MAX as u32) as i32,
            self.minute,
        )
    }

    /// Approximate UT instant: the hour minus `utc_offset_hours`, date
    /// fields unchanged. A negative hour falls into the previous day only
    /// through Julian Date arithmetic.
    pub fn approximate_ut_instant(&self, utc_offset_hours: i32) -> CivilTime {
        self.local_instant().shift_hours(-utc_offset_hours)
    }
}
