//! VSOP87 Ephemeris Provider
//!
//! Adapts the `vsop87` crate to the `planetary-mechanics` precision
//! ephemeris contract. The VSOP87A series yields heliocentric ecliptic
//! rectangular coordinates in AU against the J2000 frame, which is
//! exactly the shape the position service consumes.

use chrono::{Datelike, NaiveDate};
use vsop87::vsop87a;

use planetary_mechanics::julian;
use planetary_mechanics::provider::{EphemerisError, HelioVector, PrecisionEphemeris};
use planetary_mechanics::{Planet, J2000_JD};

/// Calendar years the VSOP87 series is rated for.
const VALID_YEARS: std::ops::RangeInclusive<i32> = -2000..=6000;

/// Earth's series magnitude at J2000 must land within this band for the
/// startup self-check to pass.
const SELF_CHECK_TOLERANCE_AU: f64 = 0.05;

/// Precision provider backed by the VSOP87A analytic series.
///
/// Construct through [`probe`](Self::probe) at startup and share the
/// instance for the process lifetime, so availability is resolved
/// exactly once rather than per request.
#[derive(Debug, Clone, Copy)]
pub struct Vsop87Ephemeris {
    _resolved: (),
}

impl Vsop87Ephemeris {
    pub const LIBRARY: &'static str = "vsop87";

    /// Startup self-check: evaluate the Earth series at J2000 and verify
    /// the result is physically sane before declaring the provider live.
    pub fn probe() -> Result<Self, EphemerisError> {
        let provider = Self { _resolved: () };
        let magnitude = provider
            .heliocentric_vector(Planet::Earth, J2000_JD)?
            .magnitude();

        if (magnitude - 1.0).abs() > SELF_CHECK_TOLERANCE_AU {
            return Err(EphemerisError::Computation(format!(
                "vsop87 self-check failed: Earth at J2000 came back at {magnitude} AU"
            )));
        }

        tracing::debug!(earth_au = magnitude, "vsop87 self-check passed");
        Ok(provider)
    }
}

impl PrecisionEphemeris for Vsop87Ephemeris {
    fn library(&self) -> &'static str {
        Self::LIBRARY
    }

    fn epoch(&self, date: NaiveDate) -> Result<f64, EphemerisError> {
        if !VALID_YEARS.contains(&date.year()) {
            return Err(EphemerisError::UnsupportedEpoch(format!(
                "{date} is outside the vsop87 validity window ({}..={})",
                VALID_YEARS.start(),
                VALID_YEARS.end()
            )));
        }
        Ok(julian::julian_day_number(date) as f64)
    }

    fn heliocentric_vector(
        &self,
        planet: Planet,
        epoch: f64,
    ) -> Result<HelioVector, EphemerisError> {
        let coordinates = match planet {
            Planet::Mercury => vsop87a::mercury(epoch),
            Planet::Venus => vsop87a::venus(epoch),
            Planet::Earth => vsop87a::earth(epoch),
            Planet::Mars => vsop87a::mars(epoch),
            Planet::Jupiter => vsop87a::jupiter(epoch),
            Planet::Saturn => vsop87a::saturn(epoch),
            Planet::Uranus => vsop87a::uranus(epoch),
            Planet::Neptune => vsop87a::neptune(epoch),
        };

        let vector = HelioVector {
            x: coordinates.x,
            y: coordinates.y,
            z: coordinates.z,
        };

        if !(vector.x.is_finite() && vector.y.is_finite() && vector.z.is_finite()) {
            return Err(EphemerisError::Computation(format!(
                "vsop87 returned non-finite coordinates for {planet} at jd {epoch}"
            )));
        }

        Ok(vector)
    }
}
