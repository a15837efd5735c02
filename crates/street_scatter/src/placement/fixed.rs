//! Evenly spaced placement starting from one segment end.
use rand::RngCore;

use crate::placement::{corrected_spacing, LinearPlacement};

/// Fixed-spacing placement.
///
/// Produces `floor(length / spacing)` offsets, phase-shifted by
/// `cycle_offset` (a fraction of the spacing).
#[derive(Debug, Clone)]
pub struct FixedPlacement {
    /// Center-to-center distance between items, in meters.
    pub spacing: f32,
    /// Starting phase as a fraction of `spacing`, typically in [0, 1].
    pub cycle_offset: f32,
}

impl FixedPlacement {
    pub fn new(spacing: f32, cycle_offset: f32) -> Self {
        Self {
            spacing,
            cycle_offset,
        }
    }
}

impl LinearPlacement for FixedPlacement {
    fn offsets(&self, length: f32, _rng: &mut dyn RngCore) -> Vec<f32> {
        fixed_offsets(length, self.spacing, self.cycle_offset)
    }
}

/// Computes the fixed-mode offsets for a segment of the given length.
///
/// Returns an empty list when the segment is shorter than one spacing step.
pub fn fixed_offsets(length: f32, spacing: f32, cycle_offset: f32) -> Vec<f32> {
    if length <= 0.0 {
        return Vec::new();
    }

    let corrected = corrected_spacing(spacing);
    let count = (length / corrected).floor() as usize;

    (0..count)
        .map(|i| length / 2.0 - (i as f32 + cycle_offset) * corrected)
        .collect()
}
