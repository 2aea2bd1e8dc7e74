use std::fmt;

use rustfft::{num_complex::Complex64, FftPlanner};
use serde::{Deserialize, Serialize};

use crate::{CurveVizError, Point, Result};

/// Default minimum radius below which a component is dropped, in the
/// curve's coordinate units.
pub const DEFAULT_SIGNIFICANCE_THRESHOLD: f64 = 0.01;

/// One rotating-vector component of a decomposed curve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Epicycle {
    /// Signed rotation rate in cycles per full parameter sweep.
    pub frequency: i64,
    /// Contribution magnitude. Always above the significance threshold in a
    /// decomposed set.
    pub radius: f64,
    /// Starting angle in radians.
    pub phase: f64,
}

/// The filtered, ordered component set for one source curve.
///
/// Components are ranked by ascending absolute frequency: the low
/// frequencies carry the broad strokes of the curve and are summed first,
/// the high frequencies add fine detail on top. The set is immutable after
/// creation; it only ever changes by full replacement.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EpicycleSet {
    components: Vec<Epicycle>,
}

impl EpicycleSet {
    pub fn components(&self) -> &[Epicycle] {
        &self.components
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Epicycle> {
        self.components.iter()
    }

    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }
}

impl From<Vec<Epicycle>> for EpicycleSet {
    fn from(components: Vec<Epicycle>) -> Self {
        Self { components }
    }
}

impl<'a> IntoIterator for &'a EpicycleSet {
    type Item = &'a Epicycle;
    type IntoIter = std::slice::Iter<'a, Epicycle>;

    fn into_iter(self) -> Self::IntoIter {
        self.components.iter()
    }
}

/// Fourier decomposition engine.
///
/// Holds a reusable FFT planner so that repeated decompositions of
/// same-length curves share their transform plan. The API is synchronous so
/// it can be driven by tests and by the command line front end.
pub struct Decomposer {
    significance_threshold: f64,
    planner: FftPlanner<f64>,
}

impl Decomposer {
    /// Creates an engine using the default significance threshold.
    pub fn new() -> Self {
        Self::with_threshold(DEFAULT_SIGNIFICANCE_THRESHOLD)
    }

    /// Creates an engine that keeps components whose radius exceeds
    /// `significance_threshold`.
    pub fn with_threshold(significance_threshold: f64) -> Self {
        Self {
            significance_threshold,
            planner: FftPlanner::new(),
        }
    }

    /// Returns the configured significance threshold.
    pub fn significance_threshold(&self) -> f64 {
        self.significance_threshold
    }

    /// Decomposes a sampled curve into its ranked epicycle set.
    ///
    /// Each point is treated as the complex sample `x + iy` and the forward
    /// DFT over all `n` samples yields one candidate component per
    /// frequency bin. Bin `k` maps to signed frequency `k` for `k <= n/2`
    /// and `k - n` above that. A bin's radius is `|F_k| / n` and its phase
    /// is `arg(F_k)`; bins at or below the significance threshold are
    /// discarded permanently.
    pub fn decompose(&mut self, points: &[Point]) -> Result<EpicycleSet> {
        if points.len() < 2 {
            return Err(CurveVizError::InsufficientData(points.len()));
        }

        let n = points.len();
        let mut buffer: Vec<Complex64> = points.iter().map(|point| point.to_complex()).collect();
        let fft = self.planner.plan_fft_forward(n);
        fft.process(&mut buffer);

        let inv_n = 1.0 / n as f64;
        let mut components = Vec::new();
        for (bin, &value) in buffer.iter().enumerate() {
            let (radius, phase) = (value * inv_n).to_polar();
            if radius > self.significance_threshold {
                components.push(Epicycle {
                    frequency: signed_frequency(bin, n),
                    radius,
                    phase,
                });
            }
        }

        // Stable sort: at equal magnitude the positive frequency sits at a
        // lower bin index and keeps its earlier position.
        components.sort_by_key(|component| component.frequency.abs());

        Ok(EpicycleSet { components })
    }
}

impl Default for Decomposer {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Decomposer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Decomposer")
            .field("significance_threshold", &self.significance_threshold)
            .finish()
    }
}

/// Maps bin `k` of an `n`-point transform to its signed frequency.
fn signed_frequency(bin: usize, n: usize) -> i64 {
    if bin <= n / 2 {
        bin as i64
    } else {
        bin as i64 - n as i64
    }
}
