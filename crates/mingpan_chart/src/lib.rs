//! Birth-chart derivation built on the ephemeris capability.
//!
//! This crate provides:
//! - Sexagenary year pillar (stem, branch, zodiac animal) from a civil date
//! - Sun, Moon and rising sign classification from an ephemeris provider
//! - Structured readings and a narrator seam for interpretive text
//!
//! Both classifiers are pure functions over `static` tables and may be
//! called concurrently.

pub mod astro;
pub mod config;
pub mod error;
pub mod moment;
pub mod reading;
pub mod sexagenary;
pub mod zodiac;

pub use astro::{
    AstroResult, classify_astro_positions, classify_astro_positions_with, classify_sample,
    rising_index,
};
pub use config::{AstroConfig, ChartConfig, GeoLocation, SexagenaryConfig, SolarTermCutover};
pub use error::ChartError;
pub use moment::BirthMoment;
pub use reading::{
    FALLBACK_NARRATION, NarrationError, Narrator, Reading, ReadingDetails, ReadingMode,
    astro_reading, bazi_reading, narrate_or_fallback,
};
pub use sexagenary::{
    ALL_ANIMALS, ALL_BRANCHES, ALL_STEMS, EarthlyBranch, Element, HeavenlyStem, SexagenaryResult,
    ZodiacAnimal, branch_index, classify_sexagenary, classify_sexagenary_with, cycle_index,
    stem_index,
};
pub use zodiac::{
    ALL_SIGNS, SignInfo, ZodiacSign, normalize_360, sign_from_longitude, sign_index,
};

pub use mingpan_ephem::{AnalyticEphemeris, EphemerisProvider, EphemerisSample, EphemerisUnavailable};
