//! Tropical zodiac signs and longitude classification.
//!
//! The ecliptic is divided into 12 equal signs of 30 degrees each, starting
//! with Aries at 0 degrees (the March equinox point).

/// The 12 zodiac signs starting from Aries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ZodiacSign {
    Aries,
    Taurus,
    Gemini,
    Cancer,
    Leo,
    Virgo,
    Libra,
    Scorpio,
    Sagittarius,
    Capricorn,
    Aquarius,
    Pisces,
}

/// All 12 signs in order (0 = Aries, 11 = Pisces).
pub const ALL_SIGNS: [ZodiacSign; 12] = [
    ZodiacSign::Aries,
    ZodiacSign::Taurus,
    ZodiacSign::Gemini,
    ZodiacSign::Cancer,
    ZodiacSign::Leo,
    ZodiacSign::Virgo,
    ZodiacSign::Libra,
    ZodiacSign::Scorpio,
    ZodiacSign::Sagittarius,
    ZodiacSign::Capricorn,
    ZodiacSign::Aquarius,
    ZodiacSign::Pisces,
];

impl ZodiacSign {
    /// English name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Aries => "Aries",
            Self::Taurus => "Taurus",
            Self::Gemini => "Gemini",
            Self::Cancer => "Cancer",
            Self::Leo => "Leo",
            Self::Virgo => "Virgo",
            Self::Libra => "Libra",
            Self::Scorpio => "Scorpio",
            Self::Sagittarius => "Sagittarius",
            Self::Capricorn => "Capricorn",
            Self::Aquarius => "Aquarius",
            Self::Pisces => "Pisces",
        }
    }

    /// Traditional Chinese label used in readings.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Aries => "牡羊座",
            Self::Taurus => "金牛座",
            Self::Gemini => "雙子座",
            Self::Cancer => "巨蟹座",
            Self::Leo => "獅子座",
            Self::Virgo => "處女座",
            Self::Libra => "天秤座",
            Self::Scorpio => "天蠍座",
            Self::Sagittarius => "射手座",
            Self::Capricorn => "摩羯座",
            Self::Aquarius => "水瓶座",
            Self::Pisces => "雙魚座",
        }
    }

    /// 0-based index (Aries=0 .. Pisces=11).
    pub const fn index(self) -> u8 {
        match self {
            Self::Aries => 0,
            Self::Taurus => 1,
            Self::Gemini => 2,
            Self::Cancer => 3,
            Self::Leo => 4,
            Self::Virgo => 5,
            Self::Libra => 6,
            Self::Scorpio => 7,
            Self::Sagittarius => 8,
            Self::Capricorn => 9,
            Self::Aquarius => 10,
            Self::Pisces => 11,
        }
    }

    /// Sign for an index; wraps modulo 12.
    pub const fn from_index(index: u8) -> Self {
        ALL_SIGNS[(index % 12) as usize]
    }

    /// All 12 signs in order.
    pub const fn all() -> &'static [ZodiacSign; 12] {
        &ALL_SIGNS
    }
}

/// Sign position of an ecliptic longitude.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SignInfo {
    pub sign: ZodiacSign,
    /// 0-based sign index (0 = Aries).
    pub sign_index: u8,
    /// Decimal degrees within the sign, [0.0, 30.0) apart from the 360.0
    /// rounding edge.
    pub degrees_in_sign: f64,
}

/// Reduce an angle in degrees into [0, 360].
///
/// The upper bound is reachable: a tiny negative input rounds to 360.0.
pub fn normalize_360(deg: f64) -> f64 {
    deg.rem_euclid(360.0)
}

/// Sign index of an already reduced longitude, clamped to 11.
fn reduced_sign_index(lon: f64) -> u8 {
    ((lon / 30.0).floor() as u8).min(11)
}

/// Sign index of an ecliptic longitude in degrees (any real value).
///
/// `floor(normalize_360(lon) / 30)`, clamped to 11 for the floating-point
/// edge where a tiny negative input normalizes to exactly 360.0.
pub fn sign_index(longitude_deg: f64) -> u8 {
    reduced_sign_index(normalize_360(longitude_deg))
}

/// Full sign position for an ecliptic longitude in degrees.
pub fn sign_from_longitude(longitude_deg: f64) -> SignInfo {
    let lon = normalize_360(longitude_deg);
    let sign_index = reduced_sign_index(lon);
    SignInfo {
        sign: ALL_SIGNS[sign_index as usize],
        sign_index,
        degrees_in_sign: lon - sign_index as f64 * 30.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_signs_count() {
        assert_eq!(ALL_SIGNS.len(), 12);
    }

    #[test]
    fn sign_indices_sequential() {
        for (i, s) in ALL_SIGNS.iter().enumerate() {
            assert_eq!(s.index() as usize, i);
            assert_eq!(ZodiacSign::from_index(i as u8), *s);
        }
    }

    #[test]
    fn from_index_wraps() {
        assert_eq!(ZodiacSign::from_index(12), ZodiacSign::Aries);
        assert_eq!(ZodiacSign::from_index(23), ZodiacSign::Pisces);
    }

    #[test]
    fn sign_names_nonempty() {
        for s in ALL_SIGNS {
            assert!(!s.name().is_empty());
            assert!(s.label().ends_with('座'));
        }
    }

    #[test]
    fn boundaries() {
        assert_eq!(sign_index(0.0), 0);
        assert_eq!(sign_index(29.999), 0);
        assert_eq!(sign_index(30.0), 1);
        assert_eq!(sign_index(359.999), 11);
    }

    #[test]
    fn tiny_negative_stays_in_pisces() {
        assert_eq!(sign_index(-1e-15), 11);
        assert_eq!(sign_index(-0.5), 11);
    }

    #[test]
    fn periodic_in_full_turns() {
        for &lon in &[0.0, 12.5, 135.0, 271.3, 359.5] {
            for k in -3..=3 {
                let shifted = lon + 360.0 * k as f64;
                assert_eq!(sign_index(shifted), sign_index(lon), "lon={lon} k={k}");
            }
        }
    }

    #[test]
    fn sign_info_leo() {
        let info = sign_from_longitude(135.0);
        assert_eq!(info.sign, ZodiacSign::Leo);
        assert_eq!(info.sign_index, 4);
        assert!((info.degrees_in_sign - 15.0).abs() < 1e-10);
    }

    #[test]
    fn normalize_wraps_both_ways() {
        assert_eq!(normalize_360(0.0), 0.0);
        assert_eq!(normalize_360(360.0), 0.0);
        assert!((normalize_360(-10.0) - 350.0).abs() < 1e-12);
        assert!((normalize_360(730.0) - 10.0).abs() < 1e-10);
    }

    #[test]
    fn sign_info_rounding_edge_is_pisces() {
        assert_eq!(sign_from_longitude(-1e-15).sign, ZodiacSign::Pisces);
    }

    #[test]
    fn sign_info_negative_input() {
        let info = sign_from_longitude(-10.0);
        assert_eq!(info.sign, ZodiacSign::Pisces);
        assert!((info.degrees_in_sign - 20.0).abs() < 1e-10);
    }
}
