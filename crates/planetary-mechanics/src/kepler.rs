//! Fixed-cost solver for Kepler's equation `M = E - e*sin(E)`.

/// Refinement passes applied after seeding.
const FIXED_POINT_ITERATIONS: usize = 3;

/// Anomalies solved from one mean anomaly.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KeplerSolution {
    /// Eccentric anomaly `E` (radians).
    pub eccentric_anomaly: f64,
    /// True anomaly (radians, principal value).
    pub true_anomaly: f64,
}

/// Solve for the eccentric and true anomaly of an elliptical orbit
/// (`0 <= e < 1`).
///
/// Seeds with `E = M + e*sin(M)` and applies exactly three fixed-point
/// passes `E = M + e*sin(E)`. Cost is bounded and deterministic; there
/// is no convergence check, so high eccentricities keep a small
/// residual. At Mercury's `e = 0.2056`, the worst of the planets, the
/// residual stays below 1e-3 rad.
pub fn solve(mean_anomaly: f64, eccentricity: f64) -> KeplerSolution {
    let m = mean_anomaly;
    let e = eccentricity;

    let mut eccentric_anomaly = m + e * m.sin();
    for _ in 0..FIXED_POINT_ITERATIONS {
        eccentric_anomaly = m + e * eccentric_anomaly.sin();
    }

    // nu = 2*atan2(sqrt(1+e)*sin(E/2), sqrt(1-e)*cos(E/2)), singularity-free
    // for e < 1.
    let half = eccentric_anomaly / 2.0;
    let true_anomaly =
        2.0 * ((1.0 + e).sqrt() * half.sin()).atan2((1.0 - e).sqrt() * half.cos());

    KeplerSolution {
        eccentric_anomaly,
        true_anomaly,
    }
}
