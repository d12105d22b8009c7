//! Reading payloads built from classifier results, and the seam to a
//! narrative service that turns them into prose.

use std::error::Error;
use std::fmt::{Display, Formatter};

use serde::Serialize;
use tracing::warn;

use crate::astro::AstroResult;
use crate::sexagenary::SexagenaryResult;

/// Text returned by [`narrate_or_fallback`] when the narrator fails.
pub const FALLBACK_NARRATION: &str = "抱歉，目前無法連結宇宙意志，請稍後再試。";

/// Which classifier a reading came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReadingMode {
    Bazi,
    Astro,
}

impl ReadingMode {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Bazi => "bazi",
            Self::Astro => "astro",
        }
    }
}

/// Mode-specific structured fields of a reading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ReadingDetails {
    Bazi {
        /// Stem and branch characters, e.g. "甲子".
        main: String,
        element: String,
    },
    Astro {
        sun: String,
        moon: String,
        rising: String,
    },
}

/// Structured result handed to a narrator or printed directly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Reading {
    #[serde(rename = "type")]
    pub mode: ReadingMode,
    pub title: String,
    pub summary: String,
    pub details: ReadingDetails,
}

pub fn bazi_reading(result: &SexagenaryResult) -> Reading {
    let stem = result.stem.character();
    let element = result.element().label();
    Reading {
        mode: ReadingMode::Bazi,
        title: "八字命盤核心分析".to_string(),
        summary: format!(
            "日主元神為「{stem}{element}」，生肖屬{}。",
            result.animal.label()
        ),
        details: ReadingDetails::Bazi {
            main: result.to_string(),
            element: element.to_string(),
        },
    }
}

pub fn astro_reading(result: &AstroResult) -> Reading {
    let sun = result.sun.label();
    let moon = result.moon.label();
    let rising = result.rising.label();
    Reading {
        mode: ReadingMode::Astro,
        title: "星盤性格與運勢概覽".to_string(),
        summary: format!("太陽：{sun} | 上升：{rising} | 月亮：{moon}"),
        details: ReadingDetails::Astro {
            sun: sun.to_string(),
            moon: moon.to_string(),
            rising: rising.to_string(),
        },
    }
}

/// Narrative service failure.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum NarrationError {
    /// The service could not be reached.
    Unreachable(String),
    /// The service answered with something unusable.
    InvalidResponse(String),
}

impl Display for NarrationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unreachable(msg) => write!(f, "narrator unreachable: {msg}"),
            Self::InvalidResponse(msg) => write!(f, "narrator returned invalid response: {msg}"),
        }
    }
}

impl Error for NarrationError {}

/// Turns a structured reading into interpretive prose.
pub trait Narrator {
    fn narrate(&self, reading: &Reading) -> Result<String, NarrationError>;
}

/// Narrate a reading, substituting [`FALLBACK_NARRATION`] on failure.
pub fn narrate_or_fallback<N>(narrator: &N, reading: &Reading) -> String
where
    N: Narrator + ?Sized,
{
    match narrator.narrate(reading) {
        Ok(text) => text,
        Err(e) => {
            warn!(mode = reading.mode.name(), error = %e, "narration failed");
            FALLBACK_NARRATION.to_string()
        }
    }
}
