//! Static J2000 mean orbital elements for the eight major planets.
//!
//! These are the classic low-precision elements that drive the analytic
//! fallback model. The table is built once at startup and never mutated.

use serde::{Deserialize, Serialize};

use crate::Planet;

/// Keplerian mean elements at the J2000 epoch.
///
/// Angles are in degrees, the semi-major axis in AU, mean motion in
/// degrees per day. `inclination` is carried for completeness; the
/// planar fallback model does not use it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OrbitalElements {
    /// Semi-major axis `a` (AU).
    pub semi_major_axis: f64,
    /// Eccentricity `e` (0 <= e < 1).
    pub eccentricity: f64,
    /// Inclination to the ecliptic `i` (degrees).
    pub inclination: f64,
    /// Mean longitude at epoch `L` (degrees).
    pub mean_longitude: f64,
    /// Argument of perihelion `w` (degrees).
    pub argument_of_perihelion: f64,
    /// Mean motion `n` (degrees per day).
    pub mean_motion: f64,
}

/// Read-only per-planet element table.
#[derive(Debug, Clone)]
pub struct OrbitalElementTable {
    mercury: OrbitalElements,
    venus: OrbitalElements,
    earth: OrbitalElements,
    mars: OrbitalElements,
    jupiter: OrbitalElements,
    saturn: OrbitalElements,
    uranus: OrbitalElements,
    neptune: OrbitalElements,
}

impl OrbitalElementTable {
    /// The standard low-precision J2000 table.
    pub fn standard() -> Self {
        Self {
            mercury: OrbitalElements {
                semi_major_axis: 0.387098,
                eccentricity: 0.205630,
                inclination: 7.005,
                mean_longitude: 252.251,
                argument_of_perihelion: 77.456,
                mean_motion: 4.092317,
            },
            venus: OrbitalElements {
                semi_major_axis: 0.723332,
                eccentricity: 0.006772,
                inclination: 3.395,
                mean_longitude: 181.980,
                argument_of_perihelion: 131.533,
                mean_motion: 1.602136,
            },
            earth: OrbitalElements {
                semi_major_axis: 1.000000,
                eccentricity: 0.016709,
                inclination: 0.000,
                mean_longitude: 100.464,
                argument_of_perihelion: 102.937,
                mean_motion: 0.985608,
            },
            mars: OrbitalElements {
                semi_major_axis: 1.523662,
                eccentricity: 0.093412,
                inclination: 1.850,
                mean_longitude: 355.433,
                argument_of_perihelion: 336.041,
                mean_motion: 0.524039,
            },
            jupiter: OrbitalElements {
                semi_major_axis: 5.204267,
                eccentricity: 0.048775,
                inclination: 1.303,
                mean_longitude: 34.351,
                argument_of_perihelion: 14.331,
                mean_motion: 0.083056,
            },
            saturn: OrbitalElements {
                semi_major_axis: 9.537070,
                eccentricity: 0.053362,
                inclination: 2.484,
                mean_longitude: 50.078,
                argument_of_perihelion: 92.432,
                mean_motion: 0.033371,
            },
            uranus: OrbitalElements {
                semi_major_axis: 19.191264,
                eccentricity: 0.047220,
                inclination: 0.773,
                mean_longitude: 314.200,
                argument_of_perihelion: 172.884,
                mean_motion: 0.011698,
            },
            neptune: OrbitalElements {
                semi_major_axis: 30.068963,
                eccentricity: 0.008586,
                inclination: 1.770,
                mean_longitude: 304.880,
                argument_of_perihelion: 46.727,
                mean_motion: 0.005965,
            },
        }
    }

    pub fn get(&self, planet: Planet) -> &OrbitalElements {
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
}
