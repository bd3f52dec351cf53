//! Contract for precision ephemeris providers.
//!
//! The core consumes this capability without implementing it: an
//! adapter crate wraps a real ephemeris library in the trait below,
//! and the gateway resolves availability once at startup.

use chrono::NaiveDate;
use thiserror::Error;

use crate::Planet;

#[derive(Error, Debug)]
pub enum EphemerisError {
    /// The provider cannot represent the requested instant. Treated as
    /// a batch failure: the whole request degrades to the fallback
    /// model.
    #[error("unsupported epoch: {0}")]
    UnsupportedEpoch(String),

    /// One body's computation failed. Confined to that planet's entry.
    #[error("{0}")]
    Computation(String),
}

/// Heliocentric ecliptic Cartesian vector in AU.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HelioVector {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl HelioVector {
    /// Euclidean norm in AU.
    pub fn magnitude(&self) -> f64 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }
}

/// High-precision heliocentric ephemeris.
///
/// Implementations must be cheap to call once per planet per request.
/// A failure from [`heliocentric_vector`](Self::heliocentric_vector) is
/// isolated to that planet; a failure from [`epoch`](Self::epoch) fails
/// the batch.
pub trait PrecisionEphemeris: Send + Sync {
    /// Short library name recorded as result provenance.
    fn library(&self) -> &'static str;

    /// The provider's time argument (a Julian day) for a calendar date.
    fn epoch(&self, date: NaiveDate) -> std::result::Result<f64, EphemerisError>;

    /// Heliocentric ecliptic position of `planet` at `epoch`, in AU.
    fn heliocentric_vector(
        &self,
        planet: Planet,
        epoch: f64,
    ) -> std::result::Result<HelioVector, EphemerisError>;
}
