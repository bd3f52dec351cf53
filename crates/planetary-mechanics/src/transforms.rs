//! Heliocentric to geocentric frame transform.

use crate::{Planet, PlanetPosition, PlanetaryError, PositionSet, Result};

/// Re-express a heliocentric set relative to Earth.
///
/// Earth itself is pinned to the origin with its provenance preserved.
/// Error entries pass through unchanged. Every other planet subtracts
/// Earth's heliocentric vector and gets its distance recomputed from
/// the relative coordinates.
///
/// Fails only when the Earth entry itself is an error: without the
/// reference vector no other planet can be placed.
pub fn geocentric_set(heliocentric: &PositionSet) -> Result<PositionSet> {
    let earth = &heliocentric.earth;
    if earth.is_error() {
        return Err(PlanetaryError::EarthReference(
            earth
                .error
                .clone()
                .unwrap_or_else(|| "unspecified failure".to_string()),
        ));
    }

    Ok(PositionSet::from_fn(|planet| {
        let position = heliocentric.get(planet);
        if planet == Planet::Earth {
            PlanetPosition {
                x: 0.0,
                y: 0.0,
                z: 0.0,
                distance: 0.0,
                method: position.method.clone(),
                error: None,
            }
        } else if position.is_error() {
            position.clone()
        } else {
            let x = position.x - earth.x;
            let y = position.y - earth.y;
            let z = position.z - earth.z;
            PlanetPosition {
                x,
                y,
                z,
                distance: (x * x + y * y + z * z).sqrt(),
                method: position.method.clone(),
                error: None,
            }
        }
    }))
}
