//! Sun, Moon and Ascendant sign classification.
//!
//! Sun and Moon signs come straight from ecliptic longitude. The Ascendant
//! is estimated from Local Sidereal Time alone: the right ascension of the
//! midheaven (RAMC) is LST × 15°, the Ascendant is taken as RAMC + 90°, and
//! dividing by 30° per sign gives `lst / 2 + 3`. Latitude and obliquity are
//! ignored, so this is a sign-level estimate rather than a house cusp.
//!
//! Two approximations apply to the instants queried:
//! - Sun and Moon are queried at the local wall-clock time as if it were UT.
//! - Sidereal time is queried at the wall-clock hour minus a fixed offset.

use mingpan_ephem::{EphemerisProvider, EphemerisSample, EphemerisUnavailable};
use mingpan_time::local_sidereal_time_hours;
use tracing::{debug, warn};

use crate::config::AstroConfig;
use crate::moment::BirthMoment;
use crate::zodiac::{ZodiacSign, sign_index};

/// Sun, Moon and rising signs of a birth moment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AstroResult {
    pub sun: ZodiacSign,
    pub moon: ZodiacSign,
    pub rising: ZodiacSign,
}

/// Ascendant sign index from Local Sidereal Time in hours (any real value).
///
/// `floor((lst / 2 + 3) mod 12)`; periodic in `lst` with period 24.
pub fn rising_index(lst_hours: f64) -> u8 {
    let idx = (lst_hours / 2.0 + 3.0).rem_euclid(12.0).floor() as u8;
    idx.min(11)
}

/// Classify an already gathered ephemeris sample.
pub fn classify_sample(sample: &EphemerisSample, config: &AstroConfig) -> AstroResult {
    let lst = local_sidereal_time_hours(
        sample.greenwich_sidereal_time_hours,
        config.observer.longitude_deg,
    );
    debug!(
        sun = sample.sun_ecliptic_longitude_deg,
        moon = sample.moon_ecliptic_longitude_deg,
        gst = sample.greenwich_sidereal_time_hours,
        lst,
        "astro sample"
    );
    AstroResult {
        sun: ZodiacSign::from_index(sign_index(sample.sun_ecliptic_longitude_deg)),
        moon: ZodiacSign::from_index(sign_index(sample.moon_ecliptic_longitude_deg)),
        rising: ZodiacSign::from_index(rising_index(lst)),
    }
}

/// Classify a birth moment with the default observer (Taipei, UTC+8).
pub fn classify_astro_positions<P>(
    moment: &BirthMoment,
    provider: &P,
) -> Result<AstroResult, EphemerisUnavailable>
where
    P: EphemerisProvider + ?Sized,
{
    classify_astro_positions_with(moment, provider, &AstroConfig::default())
}

/// Classify a birth moment with an explicit observer and UT offset.
///
/// A provider failure is returned as-is; nothing is retried and no partial
/// result is produced.
pub fn classify_astro_positions_with<P>(
    moment: &BirthMoment,
    provider: &P,
    config: &AstroConfig,
) -> Result<AstroResult, EphemerisUnavailable>
where
    P: EphemerisProvider + ?Sized,
{
    let local = moment.local_instant();
    let ut = moment.approximate_ut_instant(config.utc_offset_hours);
    let sample = provider.sample(&local, &ut).inspect_err(|e| {
        warn!(%local, %ut, error = %e, "ephemeris query failed");
    })?;
    Ok(classify_sample(&sample, config))
}
