//! Position service: path selection, fallback and response assembly.

use std::sync::Arc;

use chrono::NaiveDate;
use tracing::warn;

use crate::elements::OrbitalElementTable;
use crate::provider::PrecisionEphemeris;
use crate::{approximate, julian, transforms};
use crate::{PlanetPosition, PositionResult, PositionSet, Result, AU_KM, METHOD_APPROXIMATE};

/// Computes planet positions for calendar dates.
///
/// Holds the static element table and the precision provider resolved
/// at startup. Stateless per request, so one instance is shared across
/// the process.
pub struct PositionService {
    elements: OrbitalElementTable,
    provider: Option<Arc<dyn PrecisionEphemeris>>,
}

impl PositionService {
    /// Service over the standard element table. Passing `None` pins
    /// every request to the approximate path.
    pub fn new(provider: Option<Arc<dyn PrecisionEphemeris>>) -> Self {
        Self {
            elements: OrbitalElementTable::standard(),
            provider,
        }
    }

    /// Library name of the resolved precision provider, if any.
    pub fn precision_library(&self) -> Option<&'static str> {
        self.provider.as_ref().map(|provider| provider.library())
    }

    /// Heliocentric and geocentric positions of all eight planets on `date`.
    ///
    /// Per-planet precision failures become error entries inside an
    /// otherwise successful result. Provider-level failures switch the
    /// whole request to the approximate path. The only hard error is an
    /// unusable Earth reference out of the approximate model, which
    /// leaves nothing to anchor the geocentric frame on.
    pub fn compute(&self, date: NaiveDate) -> Result<PositionResult> {
        let (heliocentric, library) = self.heliocentric_for(date);
        let positions = transforms::geocentric_set(&heliocentric)?;

        Ok(PositionResult {
            date,
            positions,
            heliocentric_positions: heliocentric,
            success: true,
            library,
        })
    }

    /// Heliocentric set plus the provenance of the path that produced it.
    fn heliocentric_for(&self, date: NaiveDate) -> (PositionSet, String) {
        if let Some(provider) = &self.provider {
            if let Some(set) = precision_set(provider.as_ref(), date) {
                return (set, provider.library().to_string());
            }
        }

        let jd = julian::julian_day_number(date) as f64;
        (
            approximate::heliocentric_set(jd, &self.elements),
            METHOD_APPROXIMATE.to_string(),
        )
    }
}

/// Full heliocentric set from the precision provider, or `None` when the
/// request must fall back to the approximate model.
fn precision_set(provider: &dyn PrecisionEphemeris, date: NaiveDate) -> Option<PositionSet> {
    let epoch = match provider.epoch(date) {
        Ok(epoch) => epoch,
        Err(err) => {
            warn!(%date, error = %err, "precision ephemeris rejected the date, falling back");
            return None;
        }
    };

    let set = PositionSet::from_fn(|planet| {
        match provider.heliocentric_vector(planet, epoch) {
            Ok(vector) => PlanetPosition::from_km(
                provider.library(),
                vector.x * AU_KM,
                vector.y * AU_KM,
                vector.z * AU_KM,
            ),
            Err(err) => {
                warn!(%planet, %date, error = %err, "precision ephemeris failed for one planet");
                PlanetPosition::error(err.to_string())
            }
        }
    });

    // An error Earth would poison the geocentric frame for every other
    // planet, so treat it like a batch failure.
    if set.earth.is_error() {
        warn!(%date, "precision ephemeris lost the Earth reference, falling back");
        return None;
    }

    Some(set)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::{EphemerisError, HelioVector};
    use crate::Planet;

    /// Provider double with scriptable failures.
    struct ScriptedEphemeris {
        fail_planet: Option<Planet>,
        reject_epoch: bool,
    }

    impl ScriptedEphemeris {
        fn healthy() -> Self {
            Self {
                fail_planet: None,
                reject_epoch: false,
            }
        }

        fn failing(planet: Planet) -> Self {
            Self {
                fail_planet: Some(planet),
                reject_epoch: false,
            }
        }
    }

    impl PrecisionEphemeris for ScriptedEphemeris {
        fn library(&self) -> &'static str {
            "scripted"
        }

        fn epoch(&self, date: NaiveDate) -> std::result::Result<f64, EphemerisError> {
            if self.reject_epoch {
                return Err(EphemerisError::UnsupportedEpoch(date.to_string()));
            }
            Ok(julian::julian_day_number(date) as f64)
        }

        fn heliocentric_vector(
            &self,
            planet: Planet,
            _epoch: f64,
        ) -> std::result::Result<HelioVector, EphemerisError> {
            if self.fail_planet == Some(planet) {
                return Err(EphemerisError::Computation(format!(
                    "scripted failure for {planet}"
                )));
            }
            // Distinct stable vectors so the transform output is checkable.
            let k = Planet::ALL.into_iter().position(|p| p == planet).unwrap() as f64 + 1.0;
            Ok(HelioVector {
                x: k,
                y: 0.5 * k,
                z: -k,
            })
        }
    }

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn no_provider_means_approximate_provenance() {
        let service = PositionService::new(None);
        let result = service.compute(date(2005, 11, 1)).unwrap();
        assert_eq!(result.library, METHOD_APPROXIMATE);
        assert!(result.success);
        for (_, entry) in result.heliocentric_positions.iter() {
            assert_eq!(entry.method, METHOD_APPROXIMATE);
        }
        for (_, entry) in result.positions.iter() {
            assert_eq!(entry.method, METHOD_APPROXIMATE);
        }
    }

    #[test]
    fn precision_provenance_when_the_provider_is_healthy() {
        let service = PositionService::new(Some(Arc::new(ScriptedEphemeris::healthy())));
        let result = service.compute(date(2005, 11, 1)).unwrap();
        assert_eq!(result.library, "scripted");
        for (_, entry) in result.heliocentric_positions.iter() {
            assert_eq!(entry.method, "scripted");
            assert!(!entry.is_error());
        }
    }

    #[test]
    fn provider_vectors_are_scaled_from_au_to_km() {
        let service = PositionService::new(Some(Arc::new(ScriptedEphemeris::healthy())));
        let result = service.compute(date(2005, 11, 1)).unwrap();
        let mercury = result.heliocentric_positions.get(Planet::Mercury);
        assert!((mercury.x - AU_KM).abs() < 1e-6);
        assert!((mercury.y - 0.5 * AU_KM).abs() < 1e-6);
        assert!((mercury.z + AU_KM).abs() < 1e-6);
    }

    #[test]
    fn one_failed_planet_does_not_sink_the_batch() {
        let service = PositionService::new(Some(Arc::new(ScriptedEphemeris::failing(
            Planet::Mars,
        ))));
        let result = service.compute(date(2005, 11, 1)).unwrap();

        assert!(result.success);
        assert_eq!(result.library, "scripted");

        let mars = result.heliocentric_positions.get(Planet::Mars);
        assert!(mars.is_error());
        assert_eq!(mars.method, "error");
        assert_eq!(mars.distance, 0.0);

        // The error entry survives the geocentric transform untouched.
        assert_eq!(result.positions.get(Planet::Mars), mars);

        for (planet, entry) in result.heliocentric_positions.iter() {
            if planet != Planet::Mars {
                assert!(!entry.is_error(), "{planet} was dragged down");
                assert_eq!(entry.method, "scripted");
                assert!(entry.distance > 0.0);
            }
        }
    }

    #[test]
    fn epoch_rejection_falls_back_to_approximate() {
        let provider = ScriptedEphemeris {
            fail_planet: None,
            reject_epoch: true,
        };
        let service = PositionService::new(Some(Arc::new(provider)));
        let result = service.compute(date(2005, 11, 1)).unwrap();

        assert_eq!(result.library, METHOD_APPROXIMATE);
        assert!(result.success);
        for (_, entry) in result.heliocentric_positions.iter() {
            assert!(!entry.is_error());
        }
    }

    #[test]
    fn losing_earth_falls_back_to_approximate() {
        let service = PositionService::new(Some(Arc::new(ScriptedEphemeris::failing(
            Planet::Earth,
        ))));
        let result = service.compute(date(2005, 11, 1)).unwrap();

        // The batch degrades instead of serving seven geocentric errors.
        assert_eq!(result.library, METHOD_APPROXIMATE);
        assert!(!result.heliocentric_positions.earth.is_error());
    }

    #[test]
    fn geocentric_earth_is_always_the_origin() {
        let providers: [Option<Arc<dyn PrecisionEphemeris>>; 2] =
            [None, Some(Arc::new(ScriptedEphemeris::healthy()))];
        for provider in providers {
            let service = PositionService::new(provider);
            let result = service.compute(date(2005, 11, 1)).unwrap();
            let earth = result.positions.get(Planet::Earth);
            assert_eq!((earth.x, earth.y, earth.z, earth.distance), (0.0, 0.0, 0.0, 0.0));
        }
    }

    #[test]
    fn computation_is_idempotent() {
        let service = PositionService::new(Some(Arc::new(ScriptedEphemeris::healthy())));
        let first = service.compute(date(2005, 11, 1)).unwrap();
        let second = service.compute(date(2005, 11, 1)).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn reference_scenario_2005_11_01() {
        let service = PositionService::new(None);
        let result = service.compute(date(2005, 11, 1)).unwrap();

        let earth = result.heliocentric_positions.get(Planet::Earth);
        assert!(
            (earth.distance - AU_KM).abs() < 0.02 * AU_KM,
            "earth at {} km",
            earth.distance
        );

        let neptune = result.heliocentric_positions.get(Planet::Neptune);
        assert!(neptune.distance >= 10.0 * earth.distance);

        assert_eq!(result.date, date(2005, 11, 1));
        assert!(result.success);
    }
}
