//! Chart configuration: sexagenary epoch and cutover, observer location,
//! and the local-to-UT hour offset.
//!
//! Every field has a default, so a TOML file only needs to name what it
//! overrides:
//!
//! ```toml
//! [astro.observer]
//! latitude_deg = 39.9042
//! longitude_deg = 116.4074
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ChartError;

/// Default sexagenary epoch: 1924 is a Jia-Zi year (stem 0, branch 0).
pub const DEFAULT_EPOCH_YEAR: i32 = 1924;
/// Default Start of Spring cutover month (February).
pub const DEFAULT_CUTOVER_MONTH: u32 = 2;
/// Default Start of Spring cutover day (4th).
pub const DEFAULT_CUTOVER_DAY: u32 = 4;
/// Default observer latitude (Taipei), degrees north.
pub const DEFAULT_LATITUDE_DEG: f64 = 25.0330;
/// Default observer longitude (Taipei), degrees east.
pub const DEFAULT_LONGITUDE_DEG: f64 = 121.5654;
/// Default local-to-UT offset in hours (UTC+8).
pub const DEFAULT_UTC_OFFSET_HOURS: i32 = 8;

/// Fixed calendar date at which the sexagenary year turns over.
///
/// A fixed Feb 4 approximates the Start of Spring solar term, whose true
/// date moves by about a day from year to year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolarTermCutover {
    pub month: u32,
    pub day: u32,
}

impl Default for SolarTermCutover {
    fn default() -> Self {
        Self {
            month: DEFAULT_CUTOVER_MONTH,
            day: DEFAULT_CUTOVER_DAY,
        }
    }
}

impl SolarTermCutover {
    /// Whether (month, day) falls before the cutover within its year.
    ///
    /// Only months 1 up to the cutover month count; an out-of-range month
    /// such as 0 never moves the year back.
    pub fn is_before(&self, month: u32, day: u32) -> bool {
        (1..self.month).contains(&month) || (month == self.month && day < self.day)
    }
}

/// Settings for the sexagenary classifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SexagenaryConfig {
    /// Year whose stem and branch are both index 0.
    pub epoch_year: i32,
    pub cutover: SolarTermCutover,
}

impl Default for SexagenaryConfig {
    fn default() -> Self {
        Self {
            epoch_year: DEFAULT_EPOCH_YEAR,
            cutover: SolarTermCutover::default(),
        }
    }
}

/// Geographic observer location.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeoLocation {
    /// Latitude in degrees, north positive. Range: [-90, 90].
    pub latitude_deg: f64,
    /// Longitude in degrees, east positive. Range: [-180, 180].
    pub longitude_deg: f64,
}

impl GeoLocation {
    pub fn new(latitude_deg: f64, longitude_deg: f64) -> Self {
        Self {
            latitude_deg,
            longitude_deg,
        }
    }
}

impl Default for GeoLocation {
    fn default() -> Self {
        Self::new(DEFAULT_LATITUDE_DEG, DEFAULT_LONGITUDE_DEG)
    }
}

/// Settings for the astro position classifier.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AstroConfig {
    /// Hours to subtract from local wall-clock time to approximate UT.
    pub utc_offset_hours: i32,
    pub observer: GeoLocation,
}

impl Default for AstroConfig {
    fn default() -> Self {
        Self {
            utc_offset_hours: DEFAULT_UTC_OFFSET_HOURS,
            observer: GeoLocation::default(),
        }
    }
}

/// Complete chart configuration.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    pub sexagenary: SexagenaryConfig,
    pub astro: AstroConfig,
}

impl ChartConfig {
    /// Parse a TOML document and validate it.
    pub fn from_toml_str(text: &str) -> Result<Self, ChartError> {
        let config: Self = toml::from_str(text).map_err(|e| ChartError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML file.
    pub fn load(path: &Path) -> Result<Self, ChartError> {
        let text = std::fs::read_to_string(path).map_err(|e| ChartError::Io {
            path: path.to_path_buf(),
            kind: e.kind(),
            message: e.to_string(),
        })?;
        Self::from_toml_str(&text)
    }

    /// Serialize to a TOML document.
    pub fn to_toml_string(&self) -> Result<String, ChartError> {
        toml::to_string(self).map_err(|e| ChartError::Parse(e.to_string()))
    }

    pub fn validate(&self) -> Result<(), ChartError> {
        let cutover = &self.sexagenary.cutover;
        if !(1..=12).contains(&cutover.month) {
            return Err(ChartError::InvalidConfig(
                "sexagenary.cutover.month must be in 1..=12",
            ));
        }
        if !(1..=31).contains(&cutover.day) {
            return Err(ChartError::InvalidConfig(
                "sexagenary.cutover.day must be in 1..=31",
            ));
        }
        let observer = &self.astro.observer;
        if !(-90.0..=90.0).contains(&observer.latitude_deg) {
            return Err(ChartError::InvalidConfig(
                "astro.observer.latitude_deg must be in [-90, 90]",
            ));
        }
        if !(-180.0..=180.0).contains(&observer.longitude_deg) {
            return Err(ChartError::InvalidConfig(
                "astro.observer.longitude_deg must be in [-180, 180]",
            ));
        }
        if !(-12..=14).contains(&self.astro.utc_offset_hours) {
            return Err(ChartError::InvalidConfig(
                "astro.utc_offset_hours must be in -12..=14",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_reference_constants() {
        let c = ChartConfig::default();
        assert_eq!(c.sexagenary.epoch_year, 1924);
        assert_eq!(c.sexagenary.cutover, SolarTermCutover { month: 2, day: 4 });
        assert_eq!(c.astro.observer.latitude_deg, 25.0330);
        assert_eq!(c.astro.observer.longitude_deg, 121.5654);
        assert_eq!(c.astro.utc_offset_hours, 8);
        assert!(c.validate().is_ok());
    }

    #[test]
    fn cutover_before() {
        let c = SolarTermCutover::default();
        assert!(c.is_before(1, 31));
        assert!(c.is_before(2, 3));
        assert!(!c.is_before(2, 4));
        assert!(!c.is_before(12, 1));
    }

    #[test]
    fn cutover_ignores_month_zero() {
        let c = SolarTermCutover::default();
        assert!(!c.is_before(0, 15));
        assert!(!c.is_before(0, 1));
        assert!(!c.is_before(13, 1));
    }

    #[test]
    fn load_missing_file_keeps_path_and_kind() {
        let path = std::env::temp_dir().join("mingpan-config-does-not-exist.toml");
        let err = ChartConfig::load(&path).unwrap_err();
        match err {
            ChartError::Io { path: p, kind, .. } => {
                assert_eq!(p, path);
                assert_eq!(kind, std::io::ErrorKind::NotFound);
            }
            other => panic!("expected Io, got {other:?}"),
        }
    }

    #[test]
    fn empty_toml_is_default() {
        assert_eq!(ChartConfig::from_toml_str("").unwrap(), ChartConfig::default());
    }

    #[test]
    fn partial_override() {
        let text = "[astro]\nutc_offset_hours = 9\n\n[astro.observer]\nlongitude_deg = 139.6917\n";
        let c = ChartConfig::from_toml_str(text).unwrap();
        assert_eq!(c.astro.utc_offset_hours, 9);
        assert_eq!(c.astro.observer.longitude_deg, 139.6917);
        assert_eq!(c.astro.observer.latitude_deg, DEFAULT_LATITUDE_DEG);
        assert_eq!(c.sexagenary, SexagenaryConfig::default());
    }

    #[test]
    fn rejects_bad_latitude() {
        let err = ChartConfig::from_toml_str("[astro.observer]\nlatitude_deg = 91.0\n").unwrap_err();
        assert!(matches!(err, ChartError::InvalidConfig(_)));
    }

    #[test]
    fn rejects_bad_cutover_month() {
        let err = ChartConfig::from_toml_str("[sexagenary.cutover]\nmonth = 13\n").unwrap_err();
        assert!(matches!(err, ChartError::InvalidConfig(_)));
    }

    #[test]
    fn rejects_malformed_toml() {
        let err = ChartConfig::from_toml_str("[astro\n").unwrap_err();
        assert!(matches!(err, ChartError::Parse(_)));
    }

    #[test]
    fn toml_roundtrip_preserves_overrides() {
        let mut c = ChartConfig::default();
        c.sexagenary.epoch_year = 1984;
        let text = c.to_toml_string().unwrap();
        assert_eq!(ChartConfig::from_toml_str(&text).unwrap(), c);
    }
}
