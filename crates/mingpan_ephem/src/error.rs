//! Ephemeris failure type.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Which provider query a failure came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EphemerisQuery {
    SunLongitude,
    MoonLongitude,
    SiderealTime,
}

impl EphemerisQuery {
    pub const fn name(self) -> &'static str {
        match self {
            Self::SunLongitude => "sun longitude",
            Self::MoonLongitude => "moon longitude",
            Self::SiderealTime => "sidereal time",
        }
    }
}

impl Display for EphemerisQuery {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// The provider could not produce a value for the requested instant.
///
/// This is the only failure the chart core surfaces; it is passed to the
/// caller unchanged and never retried.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EphemerisUnavailable {
    pub query: EphemerisQuery,
    pub reason: String,
}

impl EphemerisUnavailable {
    pub fn new(query: EphemerisQuery, reason: impl Into<String>) -> Self {
        Self {
            query,
            reason: reason.into(),
        }
    }
}

impl Display for EphemerisUnavailable {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "ephemeris unavailable ({}): {}", self.query, self.reason)
    }
}

impl Error for EphemerisUnavailable {}
