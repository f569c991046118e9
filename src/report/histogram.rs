//! Five-band quality histogram over `[0, 1]`.

use serde::{Deserialize, Serialize};

/// Number of bands.
pub const BANDS: usize = 5;

/// Width of each band.
pub const BAND_WIDTH: f64 = 1.0 / BANDS as f64;

/// Element counts per quality band `[0, 0.2)`, `[0.2, 0.4)`, … `[0.8, 1]`.
///
/// Values at or above 1 land in the last band, negative values in the first.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Histogram {
    bins: [usize; BANDS],
}

impl Histogram {
    /// Band index of quality `q`: `min(4, floor(5 q))`.
    #[inline]
    pub fn band(q: f64) -> usize {
        ((BANDS as f64 * q) as i64).clamp(0, BANDS as i64 - 1) as usize
    }

    #[inline]
    pub fn add(&mut self, q: f64) {
        self.bins[Self::band(q)] += 1;
    }

    /// Count in band `i`.
    #[inline]
    pub fn count(&self, i: usize) -> usize {
        self.bins[i]
    }

    /// Lower and upper quality bound of band `i`.
    #[inline]
    pub fn bounds(i: usize) -> (f64, f64) {
        let lo = i as f64 / BANDS as f64;
        (lo, lo + BAND_WIDTH)
    }

    pub fn total(&self) -> usize {
        self.bins.iter().sum()
    }

    pub fn as_array(&self) -> &[usize; BANDS] {
        &self.bins
    }
}
