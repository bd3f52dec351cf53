//! Analytic heliocentric positions from the static element table.
//!
//! Single-plane model: the table's inclinations are ignored and `y` is
//! always zero, so output lives in the ecliptic plane. Each planet is
//! computed independently and a failure is recorded as an error entry
//! without touching its siblings.

use crate::elements::{OrbitalElementTable, OrbitalElements};
use crate::{kepler, Planet, PlanetPosition, PlanetaryError, PositionSet};
use crate::{AU_KM, J2000_JD, METHOD_APPROXIMATE};

/// Heliocentric positions of all eight planets at the given Julian day.
pub fn heliocentric_set(jd: f64, table: &OrbitalElementTable) -> PositionSet {
    PositionSet::from_fn(|planet| {
        match planet_position(planet, table.get(planet), jd) {
            Ok(position) => position,
            Err(err) => {
                tracing::warn!(%planet, jd, error = %err, "approximate model failed");
                PlanetPosition::error(err.to_string())
            }
        }
    })
}

/// One planet's in-plane position at `jd`.
fn planet_position(
    planet: Planet,
    elements: &OrbitalElements,
    jd: f64,
) -> crate::Result<PlanetPosition> {
    let t = jd - J2000_JD;

    // Mean longitude advanced by the mean motion, then the mean anomaly
    // against the perihelion. Degrees until the trig; not normalized.
    let mean_longitude = elements.mean_longitude + elements.mean_motion * t;
    let mean_anomaly = (mean_longitude - elements.argument_of_perihelion).to_radians();

    let solution = kepler::solve(mean_anomaly, elements.eccentricity);

    // r = a(1 - e*cos E), then the ecliptic longitude folds the
    // perihelion argument back in.
    let radius = elements.semi_major_axis
        * (1.0 - elements.eccentricity * solution.eccentric_anomaly.cos());
    let longitude =
        (elements.argument_of_perihelion + solution.true_anomaly.to_degrees()).to_radians();

    let position = PlanetPosition {
        x: radius * longitude.cos() * AU_KM,
        y: 0.0,
        z: radius * longitude.sin() * AU_KM,
        distance: radius * AU_KM,
        method: METHOD_APPROXIMATE.to_string(),
        error: None,
    };

    if !(position.x.is_finite() && position.z.is_finite() && position.distance.is_finite()) {
        return Err(PlanetaryError::NonFinite { planet, jd });
    }

    Ok(position)
}
