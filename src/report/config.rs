//! Reporter configuration.

use crate::mesh_error::QualityError;
use serde::{Deserialize, Serialize};

/// Normalisation constant `2·sqrt(3)`: scales the raw quality of an
/// equilateral triangle to 1.
pub const ALPHAD: f64 = 3.464_101_615_137_754_4;

/// Scaled quality below which an element is considered bad.
pub const BADKAL: f64 = 0.2;

/// Verbosity from which the histogram is printed.
pub const HISTOGRAM_VERBOSITY: i32 = 5;

/// Settings of a quality scan.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QualityConfig {
    /// Factor applied to every raw quality value.
    pub alphad: f64,
    /// Scaled quality under which the mesh is flagged as having bad elements.
    pub badkal: f64,
    /// Report verbosity; the sign is ignored.
    pub verbosity: i32,
}

impl Default for QualityConfig {
    fn default() -> Self {
        Self {
            alphad: ALPHAD,
            badkal: BADKAL,
            verbosity: 1,
        }
    }
}

impl QualityConfig {
    /// Check that `alphad` is finite and positive and `badkal` lies in `[0, 1]`.
    pub fn validate(&self) -> Result<(), QualityError> {
        if !self.alphad.is_finite() || self.alphad <= 0.0 {
            let msg = format!("alphad must be finite and positive, got {}", self.alphad);
            return Err(QualityError::InvalidConfig(msg));
        }
        if !(0.0..=1.0).contains(&self.badkal) {
            let msg = format!("badkal must lie in [0, 1], got {}", self.badkal);
            return Err(QualityError::InvalidConfig(msg));
        }
        Ok(())
    }

    /// Whether the histogram section is printed.
    #[inline]
    pub fn prints_histogram(&self) -> bool {
        self.verbosity.unsigned_abs() >= HISTOGRAM_VERBOSITY as u32
    }
}
