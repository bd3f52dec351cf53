//! Planetary Mechanics Library
//!
//! Heliocentric and geocentric positions of the eight major planets for
//! the Orrery solar-system viewer. A precision ephemeris provider is
//! consumed through the [`provider::PrecisionEphemeris`] trait when one
//! is available; otherwise positions come from an analytic Keplerian
//! model driven by a static J2000 element table.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub mod approximate;
pub mod elements;
pub mod julian;
pub mod kepler;
pub mod provider;
pub mod service;
pub mod transforms;

pub use elements::{OrbitalElementTable, OrbitalElements};
pub use provider::{EphemerisError, HelioVector, PrecisionEphemeris};
pub use service::PositionService;

/// Astronomical unit in kilometres.
pub const AU_KM: f64 = 149_597_870.7;

/// Julian day of the J2000.0 element epoch (2000-01-01 12:00 TT).
pub const J2000_JD: f64 = 2_451_545.0;

/// Provenance tag for positions produced by the analytic fallback model.
pub const METHOD_APPROXIMATE: &str = "approximate";

/// Provenance tag for entries whose computation failed.
pub const METHOD_ERROR: &str = "error";

// ============================================================
// Errors
// ============================================================

#[derive(Error, Debug)]
pub enum PlanetaryError {
    #[error("non-finite coordinates for {planet} at jd {jd}")]
    NonFinite { planet: Planet, jd: f64 },

    #[error("Earth reference position unavailable: {0}")]
    EarthReference(String),
}

pub type Result<T> = std::result::Result<T, PlanetaryError>;

// ============================================================
// Planets
// ============================================================

/// The eight major planets. Earth doubles as the geocentric reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Planet {
    Mercury,
    Venus,
    Earth,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
}

impl Planet {
    /// All planets in Sun-outward order.
    pub const ALL: [Planet; 8] = [
        Planet::Mercury,
        Planet::Venus,
        Planet::Earth,
        Planet::Mars,
        Planet::Jupiter,
        Planet::Saturn,
        Planet::Uranus,
        Planet::Neptune,
    ];

    /// Lowercase name, matching the wire keys of the positions API.
    pub fn name(&self) -> &'static str {
        match self {
            Planet::Mercury => "mercury",
            Planet::Venus => "venus",
            Planet::Earth => "earth",
            Planet::Mars => "mars",
            Planet::Jupiter => "jupiter",
            Planet::Saturn => "saturn",
            Planet::Uranus => "uranus",
            Planet::Neptune => "neptune",
        }
    }
}

impl std::fmt::Display for Planet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

// ============================================================
// Positions
// ============================================================

/// Cartesian position of one planet in kilometres.
///
/// Error entries carry the failure message with every numeric field
/// zeroed; for non-error entries `distance` is the coordinate norm.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanetPosition {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub distance: f64,
    pub method: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl PlanetPosition {
    /// Position from Cartesian components in km, distance from the norm.
    pub fn from_km(method: impl Into<String>, x: f64, y: f64, z: f64) -> Self {
        Self {
            x,
            y,
            z,
            distance: (x * x + y * y + z * z).sqrt(),
            method: method.into(),
            error: None,
        }
    }

    /// Error entry for a planet whose computation failed.
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            z: 0.0,
            distance: 0.0,
            method: METHOD_ERROR.to_string(),
            error: Some(message.into()),
        }
    }

    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }
}

/// Positions for all eight planets.
///
/// One field per planet, so a set can never be missing an entry or
/// carry a stray key, and adding a planet forces every constructor
/// through the compiler.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PositionSet {
    pub mercury: PlanetPosition,
    pub venus: PlanetPosition,
    pub earth: PlanetPosition,
    pub mars: PlanetPosition,
    pub jupiter: PlanetPosition,
    pub saturn: PlanetPosition,
    pub uranus: PlanetPosition,
    pub neptune: PlanetPosition,
}

impl PositionSet {
    /// Build a set by evaluating `f` once per planet, Sun-outward.
    pub fn from_fn(mut f: impl FnMut(Planet) -> PlanetPosition) -> Self {
        Self {
            mercury: f(Planet::Mercury),
            venus: f(Planet::Venus),
            earth: f(Planet::Earth),
            mars: f(Planet::Mars),
            jupiter: f(Planet::Jupiter),
            saturn: f(Planet::Saturn),
            uranus: f(Planet::Uranus),
            neptune: f(Planet::Neptune),
        }
    }

    pub fn get(&self, planet: Planet) -> &PlanetPosition {
        match planet {
            Planet::Mercury => &self.mercury,
            Planet::Venus => &self.venus,
            Planet::Earth => &self.earth,
            Planet::Mars => &self.mars,
            Planet::Jupiter => &self.jupiter,
            Planet::Saturn => &self.saturn,
            Planet::Uranus => &self.uranus,
            Planet::Neptune => &self.neptune,
        }
    }

    /// Iterate entries in Sun-outward order.
    pub fn iter(&self) -> impl Iterator<Item = (Planet, &PlanetPosition)> {
        Planet::ALL.into_iter().map(move |planet| (planet, self.get(planet)))
    }
}

/// Combined response for one request date.
///
/// Field names follow the positions API consumed by the visualization
/// client, so `heliocentric_positions` goes camelCase on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PositionResult {
    pub date: NaiveDate,
    /// Geocentric set, Earth pinned to the origin.
    pub positions: PositionSet,
    pub heliocentric_positions: PositionSet,
    pub success: bool,
    /// Provenance of the heliocentric set: a precision provider's
    /// library name, or `"approximate"`.
    pub library: String,
}
