//! Sun/Moon/Rising classification against a fixed stub and the analytic
//! ephemeris.

use std::sync::Mutex;

use mingpan_chart::{
    AnalyticEphemeris, AstroConfig, BirthMoment, EphemerisProvider, EphemerisUnavailable,
    GeoLocation, ZodiacSign, classify_astro_positions, classify_astro_positions_with,
};
use mingpan_ephem::EphemerisQuery;
use mingpan_time::CivilTime;

/// Returns fixed values and records the instants it was asked about.
struct Stub {
    sun: f64,
    moon: f64,
    gst: f64,
    seen: Mutex<Vec<CivilTime>>,
}

impl Stub {
    fn new(sun: f64, moon: f64, gst: f64) -> Self {
        Self {
            sun,
            moon,
            gst,
            seen: Mutex::new(Vec::new()),
        }
    }
}

impl EphemerisProvider for Stub {
    fn sun_longitude_deg(&self, instant: &CivilTime) -> Result<f64, EphemerisUnavailable> {
        self.seen.lock().unwrap().push(*instant);
        Ok(self.sun)
    }

    fn moon_longitude_deg(&self, instant: &CivilTime) -> Result<f64, EphemerisUnavailable> {
        self.seen.lock().unwrap().push(*instant);
        Ok(self.moon)
    }

    fn sidereal_time_hours(&self, instant_ut: &CivilTime) -> Result<f64, EphemerisUnavailable> {
        self.seen.lock().unwrap().push(*instant_ut);
        Ok(self.gst)
    }
}

/// Fails the one query named, answers the others with 0.
struct FailOn(EphemerisQuery);

impl FailOn {
    fn answer(&self, query: EphemerisQuery) -> Result<f64, EphemerisUnavailable> {
        if query == self.0 {
            Err(EphemerisUnavailable::new(query, "outside table range"))
        } else {
            Ok(0.0)
        }
    }
}

impl EphemerisProvider for FailOn {
    fn sun_longitude_deg(&self, _: &CivilTime) -> Result<f64, EphemerisUnavailable> {
        self.answer(EphemerisQuery::SunLongitude)
    }

    fn moon_longitude_deg(&self, _: &CivilTime) -> Result<f64, EphemerisUnavailable> {
        self.answer(EphemerisQuery::MoonLongitude)
    }

    fn sidereal_time_hours(&self, _: &CivilTime) -> Result<f64, EphemerisUnavailable> {
        self.answer(EphemerisQuery::SiderealTime)
    }
}

#[test]
fn stub_default_observer() {
    let stub = Stub::new(135.0, 10.0, 6.0);
    let r = classify_astro_positions(&BirthMoment::new(2024, 8, 15, 12, 0), &stub).unwrap();
    assert_eq!(r.sun, ZodiacSign::Leo);
    assert_eq!(r.moon, ZodiacSign::Aries);
    assert_eq!(r.rising, ZodiacSign::Aquarius);
}

#[test]
fn queries_use_local_and_shifted_instants() {
    let stub = Stub::new(0.0, 0.0, 0.0);
    classify_astro_positions(&BirthMoment::new(1990, 7, 1, 3, 15), &stub).unwrap();
    let seen = stub.seen.lock().unwrap();
    assert_eq!(seen.len(), 3);
    assert_eq!(seen[0], CivilTime::new(1990, 7, 1, 3, 15));
    assert_eq!(seen[1], CivilTime::new(1990, 7, 1, 3, 15));
    assert_eq!(seen[2], CivilTime::new(1990, 7, 1, -5, 15));
}

#[test]
fn observer_longitude_moves_rising() {
    let stub = Stub::new(0.0, 0.0, 0.0);
    let moment = BirthMoment::new(2000, 1, 1, 0, 0);
    let greenwich = AstroConfig {
        utc_offset_hours: 0,
        observer: GeoLocation::new(51.48, 0.0),
    };
    let r = classify_astro_positions_with(&moment, &stub, &greenwich).unwrap();
    assert_eq!(r.rising, ZodiacSign::Cancer);

    // +30° east is +2h of sidereal time, one sign later.
    let east = AstroConfig {
        observer: GeoLocation::new(51.48, 30.0),
        ..greenwich
    };
    let r = classify_astro_positions_with(&moment, &stub, &east).unwrap();
    assert_eq!(r.rising, ZodiacSign::Leo);
}

#[test]
fn provider_failure_propagates_unchanged() {
    let moment = BirthMoment::new(1990, 7, 1, 12, 0);
    for query in [
        EphemerisQuery::SunLongitude,
        EphemerisQuery::MoonLongitude,
        EphemerisQuery::SiderealTime,
    ] {
        let err = classify_astro_positions(&moment, &FailOn(query)).unwrap_err();
        assert_eq!(err, EphemerisUnavailable::new(query, "outside table range"));
    }
}

#[test]
fn nan_from_provider_is_unavailable() {
    let stub = Stub::new(f64::NAN, 0.0, 0.0);
    let err = classify_astro_positions(&BirthMoment::new(1990, 7, 1, 12, 0), &stub).unwrap_err();
    assert_eq!(err.query, EphemerisQuery::SunLongitude);
}

#[test]
fn works_through_trait_object() {
    let provider: Box<dyn EphemerisProvider> = Box::new(Stub::new(135.0, 10.0, 6.0));
    let r = classify_astro_positions(&BirthMoment::new(1990, 7, 1, 12, 0), provider.as_ref());
    assert_eq!(r.unwrap().sun, ZodiacSign::Leo);
}

#[test]
fn analytic_mid_august_2024() {
    // Sun ≈ 143.2°, Moon ≈ 266.7°, LST ≈ 9.71 h at Taipei.
    let moment = BirthMoment::new(2024, 8, 15, 12, 0);
    let r = classify_astro_positions(&moment, &AnalyticEphemeris::new()).unwrap();
    assert_eq!(r.sun, ZodiacSign::Leo);
    assert_eq!(r.moon, ZodiacSign::Sagittarius);
    assert_eq!(r.rising, ZodiacSign::Scorpio);
}

#[test]
fn analytic_is_deterministic() {
    let moment = BirthMoment::new(1987, 11, 23, 6, 40);
    let eph = AnalyticEphemeris::new();
    let a = classify_astro_positions(&moment, &eph).unwrap();
    let b = classify_astro_positions(&moment, &eph).unwrap();
    assert_eq!(a, b);
}
