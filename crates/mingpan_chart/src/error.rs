//! Error types for chart configuration and composition.

use std::error::Error;
use std::fmt::{Display, Formatter};
use std::io::ErrorKind;
use std::path::PathBuf;

use mingpan_ephem::EphemerisUnavailable;

/// Errors from loading configuration or from a provider-backed chart.
///
/// The classifiers themselves only fail with [`EphemerisUnavailable`]; this
/// type exists for callers that also load configuration.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum ChartError {
    /// The ephemeris provider failed.
    Ephemeris(EphemerisUnavailable),
    /// Configuration file could not be read.
    Io {
        path: PathBuf,
        kind: ErrorKind,
        message: String,
    },
    /// Configuration text is not valid TOML for [`crate::ChartConfig`].
    Parse(String),
    /// Configuration parsed but a value is out of range.
    InvalidConfig(&'static str),
}

impl Display for ChartError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Ephemeris(e) => write!(f, "{e}"),
            Self::Io { path, message, .. } => {
                write!(f, "I/O error reading {}: {message}", path.display())
            }
            Self::Parse(msg) => write!(f, "config parse error: {msg}"),
            Self::InvalidConfig(msg) => write!(f, "invalid config: {msg}"),
        }
    }
}

impl Error for ChartError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Ephemeris(e) => Some(e),
            _ => None,
        }
    }
}

impl From<EphemerisUnavailable> for ChartError {
    fn from(e: EphemerisUnavailable) -> Self {
        Self::Ephemeris(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mingpan_ephem::EphemerisQuery;

    #[test]
    fn io_display_names_path() {
        let e = ChartError::Io {
            path: PathBuf::from("chart.toml"),
            kind: ErrorKind::PermissionDenied,
            message: "permission denied".into(),
        };
        assert_eq!(e.to_string(), "I/O error reading chart.toml: permission denied");
        assert!(e.source().is_none());
    }

    #[test]
    fn ephemeris_error_is_source() {
        let e: ChartError = EphemerisUnavailable::new(EphemerisQuery::SiderealTime, "down").into();
        assert!(e.source().is_some());
    }
}
