//! Reconstruction of a curve from its epicycle set.
//!
//! Both entry points fold the set in rank order with a running complex
//! accumulator. [`positions_at`] is the time-driven form used by playback;
//! [`static_chain`] is the one-shot form behind the tabular export.

use rustfft::num_complex::Complex64;
use serde::{Deserialize, Serialize};

use crate::{EpicycleSet, Point};

/// Computes the cumulative rotating-vector chain at parameter time `t`.
///
/// Element `k` of the result is the position after summing components
/// `0..=k`; the last element is the reconstructed curve point at `t`. The
/// intermediate elements are the chain vertices a renderer draws the
/// rotating-vector skeleton through.
pub fn positions_at(set: &EpicycleSet, t: f64) -> Vec<Point> {
    let mut accumulator = Complex64::new(0.0, 0.0);
    let mut positions = Vec::with_capacity(set.len());
    for epicycle in set {
        let angle = epicycle.frequency as f64 * t + epicycle.phase;
        accumulator += Complex64::from_polar(epicycle.radius, angle);
        positions.push(Point::from_complex(accumulator));
    }
    positions
}

/// One row of the per-component coordinate table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChainRecord {
    /// 1-based rank of the component within the set.
    pub index: usize,
    pub frequency: i64,
    /// Frequency delta against the previous component; 0 is used as the
    /// predecessor of the first record.
    pub relative_frequency: i64,
    pub radius: f64,
    pub phase_degrees: f64,
    pub center_x: f64,
    pub center_y: f64,
}

/// Folds the set once, independent of time, into per-component center
/// coordinates.
///
/// Each component contributes at its own phase angle, so the centers equal
/// [`positions_at`] evaluated at `t = 0`. The relative frequency column is
/// derived purely for tabular presentation and plays no part in animation.
pub fn static_chain(set: &EpicycleSet) -> Vec<ChainRecord> {
    let mut records = Vec::with_capacity(set.len());
    let mut center = Complex64::new(0.0, 0.0);
    let mut previous_frequency = 0;
    for (index, epicycle) in set.iter().enumerate() {
        center += Complex64::from_polar(epicycle.radius, epicycle.phase);
        records.push(ChainRecord {
            index: index + 1,
            frequency: epicycle.frequency,
            relative_frequency: epicycle.frequency - previous_frequency,
            radius: epicycle.radius,
            phase_degrees: epicycle.phase.to_degrees(),
            center_x: center.re,
            center_y: center.im,
        });
        previous_frequency = epicycle.frequency;
    }
    records
}
