//! Ephemeris capability consumed by the chart classifiers.
//!
//! The chart core needs exactly three numbers for a birth moment: the
//! ecliptic longitude of the Sun and of the Moon, and Greenwich sidereal
//! time. [`EphemerisProvider`] is the seam through which any ephemeris
//! library can supply them; [`AnalyticEphemeris`] is the bundled adapter
//! built on closed-form series.

pub mod analytic;
pub mod error;

use mingpan_time::CivilTime;

pub use analytic::{AnalyticEphemeris, moon_longitude_deg, sun_apparent_longitude_deg};
pub use error::{EphemerisQuery, EphemerisUnavailable};

/// Source of the positions needed to classify a chart.
///
/// Queries are synchronous and deterministic for a given instant.
/// Implementations are [`Send`] + [`Sync`] so one provider can be shared
/// across threads classifying different charts.
pub trait EphemerisProvider: Send + Sync {
    /// Geocentric ecliptic longitude of the Sun, in degrees. Need not be
    /// reduced into [0, 360).
    fn sun_longitude_deg(&self, instant: &CivilTime) -> Result<f64, EphemerisUnavailable>;

    /// Geocentric ecliptic longitude of the Moon, in degrees. Need not be
    /// reduced into [0, 360).
    fn moon_longitude_deg(&self, instant: &CivilTime) -> Result<f64, EphemerisUnavailable>;

    /// Greenwich sidereal time at a UT instant, in hours (any range).
    fn sidereal_time_hours(&self, instant_ut: &CivilTime) -> Result<f64, EphemerisUnavailable>;

    /// Gather a full sample: Sun and Moon at `instant`, sidereal time at
    /// `instant_ut`.
    ///
    /// Fails on the first query that fails, or on the first non-finite
    /// value, so a sample is either complete or absent.
    fn sample(
        &self,
        instant: &CivilTime,
        instant_ut: &CivilTime,
    ) -> Result<EphemerisSample, EphemerisUnavailable> {
        let sun = finite(EphemerisQuery::SunLongitude, self.sun_longitude_deg(instant)?)?;
        let moon = finite(EphemerisQuery::MoonLongitude, self.moon_longitude_deg(instant)?)?;
        let gst = finite(EphemerisQuery::SiderealTime, self.sidereal_time_hours(instant_ut)?)?;
        Ok(EphemerisSample {
            sun_ecliptic_longitude_deg: sun,
            moon_ecliptic_longitude_deg: moon,
            greenwich_sidereal_time_hours: gst,
        })
    }
}

/// Raw provider output for one birth moment. Values are not normalized.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EphemerisSample {
    pub sun_ecliptic_longitude_deg: f64,
    pub moon_ecliptic_longitude_deg: f64,
    pub greenwich_sidereal_time_hours: f64,
}

fn finite(query: EphemerisQuery, value: f64) -> Result<f64, EphemerisUnavailable> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(EphemerisUnavailable::new(query, format!("non-finite value {value}")))
    }
}
