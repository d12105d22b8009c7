//! Closed-form Sun and Moon longitudes and mean sidereal time.
//!
//! Sun: low-precision solar theory, Meeus "Astronomical Algorithms"
//! (2nd ed), Chapter 25 (apparent longitude, ~0.01 deg).
//! Moon: periodic terms of Meeus Chapter 47, Table 47.A (longitude only,
//! geometric, ~0.003 deg).
//! Sidereal time: GMST from `mingpan_time`.
//!
//! Instants are taken as UT and used as dynamical time directly; the
//! difference (ΔT, about a minute) is far below a sign boundary's concern.

use mingpan_time::{CivilTime, gmst_hours, jd_to_centuries};

use crate::EphemerisProvider;
use crate::error::EphemerisUnavailable;

/// Reduce an angle into [0, 360).
///
/// A tiny negative input rounds up to exactly 360.0 under `rem_euclid`;
/// that case folds back to 0.0.
fn normalize_deg(deg: f64) -> f64 {
    let r = deg.rem_euclid(360.0);
    if r >= 360.0 { 0.0 } else { r }
}

fn sin_deg(deg: f64) -> f64 {
    deg.to_radians().sin()
}

/// Apparent geocentric ecliptic longitude of the Sun in degrees [0, 360).
///
/// `t` = Julian centuries since J2000.0.
pub fn sun_apparent_longitude_deg(t: f64) -> f64 {
    let l0 = 280.46646 + 36_000.76983 * t + 0.000_303_2 * t * t;
    let m = 357.52911 + 35_999.05029 * t - 0.000_153_7 * t * t;
    let c = (1.914_602 - 0.004_817 * t - 0.000_014 * t * t) * sin_deg(m)
        + (0.019_993 - 0.000_101 * t) * sin_deg(2.0 * m)
        + 0.000_289 * sin_deg(3.0 * m);
    let true_lon = l0 + c;
    let omega = 125.04 - 1934.136 * t;
    normalize_deg(true_lon - 0.005_69 - 0.004_78 * sin_deg(omega))
}

/// Multipliers of (D, M, M', F) and the longitude coefficient in 1e-6 deg.
const MOON_LONGITUDE_TERMS: [(i8, i8, i8, i8, i32); 59] = [
    (0, 0, 1, 0, 6_288_774),
    (2, 0, -1, 0, 1_274_027),
    (2, 0, 0, 0, 658_314),
    (0, 0, 2, 0, 213_618),
    (0, 1, 0, 0, -185_116),
    (0, 0, 0, 2, -114_332),
    (2, 0, -2, 0, 58_793),
    (2, -1, -1, 0, 57_066),
    (2, 0, 1, 0, 53_322),
    (2, -1, 0, 0, 45_758),
    (0, 1, -1, 0, -40_923),
    (1, 0, 0, 0, -34_720),
    (0, 1, 1, 0, -30_383),
    (2, 0, 0, -2, 15_327),
    (0, 0, 1, 2, -12_528),
    (0, 0, 1, -2, 10_980),
    (4, 0, -1, 0, 10_675),
    (0, 0, 3, 0, 10_034),
    (4, 0, -2, 0, 8_548),
    (2, 1, -1, 0, -7_888),
    (2, 1, 0, 0, -6_766),
    (1, 0, -1, 0, -5_163),
    (1, 1, 0, 0, 4_987),
    (2, -1, 1, 0, 4_036),
    (2, 0, 2, 0, 3_994),
    (4, 0, 0, 0, 3_861),
    (2, 0, -3, 0, 3_665),
    (0, 1, -2, 0, -2_689),
    (2, 0, -1, 2, -2_602),
    (2, -1, -2, 0, 2_390),
    (1, 0, 1, 0, -2_348),
    (2, -2, 0, 0, 2_236),
    (0, 1, 2, 0, -2_120),
    (0, 2, 0, 0, -2_069),
    (2, -2, -1, 0, 2_048),
    (2, 0, 1, -2, -1_773),
    (2, 0, 0, 2, -1_595),
    (4, -1, -1, 0, 1_215),
    (0, 0, 2, 2, -1_110),
    (3, 0, -1, 0, -892),
    (2, 1, 1, 0, -810),
    (4, -1, -2, 0, 759),
    (0, 2, -1, 0, -713),
    (2, 2, -1, 0, -700),
    (2, 1, -2, 0, 691),
    (2, -1, 0, -2, 596),
    (4, 0, 1, 0, 549),
    (0, 0, 4, 0, 537),
    (4, -1, 0, 0, 520),
    (1, 0, -2, 0, -487),
    (2, 1, 0, -2, -399),
    (0, 0, 2, -2, -381),
    (1, 1, 1, 0, 351),
    (3, 0, -2, 0, -340),
    (4, 0, -3, 0, 330),
    (2, -1, 2, 0, 327),
    (0, 2, 1, 0, -323),
    (1, 1, -1, 0, 299),
    (2, 0, 3, 0, 294),
];

/// Geometric geocentric ecliptic longitude of the Moon in degrees [0, 360).
///
/// `t` = Julian centuries since J2000.0.
pub fn moon_longitude_deg(t: f64) -> f64 {
    let t2 = t * t;
    let t3 = t2 * t;
    let t4 = t3 * t;

    // Mean longitude, elongation, solar and lunar anomaly, argument of latitude.
    let lp = 218.316_447_7 + 481_267.881_234_21 * t - 0.001_578_6 * t2 + t3 / 538_841.0
        - t4 / 65_194_000.0;
    let d = 297.850_192_1 + 445_267.111_403_4 * t - 0.001_881_9 * t2 + t3 / 545_868.0
        - t4 / 113_065_000.0;
    let m = 357.529_109_2 + 35_999.050_290_9 * t - 0.000_153_6 * t2 + t3 / 24_490_000.0;
    let mp = 134.963_396_4 + 477_198.867_505_5 * t + 0.008_741_4 * t2 + t3 / 69_699.0
        - t4 / 14_712_000.0;
    let f = 93.272_095_0 + 483_202.017_523_3 * t - 0.003_653_9 * t2 - t3 / 3_526_000.0
        + t4 / 863_310_000.0;

    // Eccentricity of Earth's orbit, applied once per power of M.
    let e = 1.0 - 0.002_516 * t - 0.000_007_4 * t2;

    let mut sum = 0.0;
    for &(cd, cm, cmp, cf, coeff) in &MOON_LONGITUDE_TERMS {
        let arg = cd as f64 * d + cm as f64 * m + cmp as f64 * mp + cf as f64 * f;
        let scale = match cm.abs() {
            1 => e,
            2 => e * e,
            _ => 1.0,
        };
        sum += coeff as f64 * scale * sin_deg(arg);
    }

    // Venus, Jupiter and flattening terms.
    let a1 = 119.75 + 131.849 * t;
    let a2 = 53.09 + 479_264.290 * t;
    sum += 3958.0 * sin_deg(a1) + 1962.0 * sin_deg(lp - f) + 318.0 * sin_deg(a2);

    normalize_deg(lp + sum / 1_000_000.0)
}

/// Ephemeris adapter backed by the closed-form series in this module.
///
/// Always succeeds for finite instants.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AnalyticEphemeris;

impl AnalyticEphemeris {
    pub fn new() -> Self {
        Self
    }
}

impl EphemerisProvider for AnalyticEphemeris {
    fn sun_longitude_deg(&self, instant: &CivilTime) -> Result<f64, EphemerisUnavailable> {
        Ok(sun_apparent_longitude_deg(jd_to_centuries(instant.to_jd())))
    }

    fn moon_longitude_deg(&self, instant: &CivilTime) -> Result<f64, EphemerisUnavailable> {
        Ok(moon_longitude_deg(jd_to_centuries(instant.to_jd())))
    }

    fn sidereal_time_hours(&self, instant_ut: &CivilTime) -> Result<f64, EphemerisUnavailable> {
        Ok(gmst_hours(instant_ut.to_jd()))
    }
}
