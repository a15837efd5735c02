//! Seeded random placement on a fixed grid of candidate slots.
//!
//! Candidates are laid out at `spacing` intervals so that no two selected
//! offsets can be closer than the spacing; the seeded shuffle makes the
//! selected subset and its order fully reproducible.
use rand::RngCore;

use crate::placement::{corrected_spacing, rand_index, LinearPlacement};

/// Random placement over grid-aligned candidate slots.
#[derive(Debug, Clone)]
pub struct RandomPlacement {
    /// Minimum center-to-center distance between items, in meters.
    pub spacing: f32,
    /// Target number of items.
    pub count: usize,
}

impl RandomPlacement {
    pub fn new(spacing: f32, count: usize) -> Self {
        Self { spacing, count }
    }
}

impl LinearPlacement for RandomPlacement {
    fn offsets(&self, length: f32, rng: &mut dyn RngCore) -> Vec<f32> {
        random_offsets(length, self.spacing, self.count, rng)
    }
}

/// All candidate slots covering `[-length/2 + s/2, length/2 - s/2]` at
/// corrected-spacing intervals.
pub fn grid_slots(length: f32, spacing: f32) -> Vec<f32> {
    let corrected = corrected_spacing(spacing);
    let start = -length / 2.0 + corrected / 2.0;
    let end = length / 2.0 - corrected / 2.0;
    if end < start {
        return Vec::new();
    }

    let count = ((end - start) / corrected).floor() as usize + 1;
    (0..count)
        .map(|i| start + i as f32 * corrected)
        .collect()
}

/// Selects up to `count` grid slots in seeded-shuffle order.
pub fn random_offsets(length: f32, spacing: f32, count: usize, rng: &mut dyn RngCore) -> Vec<f32> {
    let mut slots = grid_slots(length, spacing);

    // Fisher-Yates over the candidate slots, driven by the seeded stream.
    for i in (1..slots.len()).rev() {
        let j = rand_index(rng, i + 1);
        slots.swap(i, j);
    }

    slots.truncate(count.min(slots.len()));
    slots
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::SeededRandom;

    #[test]
    fn deterministic_for_a_fixed_seed() {
        let a = random_offsets(29.2, 7.3, 4, &mut SeededRandom::new(42));
        let b = random_offsets(29.2, 7.3, 4, &mut SeededRandom::new(42));
        assert_eq!(a, b);
    }

    #[test]
    fn returns_at_most_count_and_at_most_slot_count() {
        let slots = grid_slots(29.2, 7.3);
        assert_eq!(slots.len(), 4);

        let few = random_offsets(29.2, 7.3, 2, &mut SeededRandom::new(1));
        assert_eq!(few.len(), 2);

        let many = random_offsets(29.2, 7.3, 100, &mut SeededRandom::new(1));
        assert_eq!(many.len(), slots.len());
    }

    #[test]
    fn selected_offsets_are_grid_aligned_and_in_bounds() {
        let offsets = random_offsets(29.2, 7.3, 4, &mut SeededRandom::new(42));
        assert_eq!(offsets.len(), 4);
        let start = -29.2 / 2.0 + 7.3 / 2.0;
        for offset in &offsets {
            assert!(offset.abs() <= 29.2 / 2.0 - 7.3 / 2.0 + 1e-4);
            let steps = (offset - start) / 7.3;
            assert!((steps - steps.round()).abs() < 1e-4, "offset {offset} off grid");
        }
    }

    #[test]
    fn no_two_offsets_closer_than_spacing() {
        let mut offsets = random_offsets(120.0, 7.3, 12, &mut SeededRandom::new(7));
        offsets.sort_by(|a, b| a.partial_cmp(b).unwrap());
        for pair in offsets.windows(2) {
            assert!(pair[1] - pair[0] >= 7.3 - 1e-4);
        }
    }

    #[test]
    fn spacing_is_clamped_to_minimum() {
        let mut offsets = random_offsets(10.0, 0.1, 100, &mut SeededRandom::new(3));
        offsets.sort_by(|a, b| a.partial_cmp(b).unwrap());
        for pair in offsets.windows(2) {
            assert!(pair[1] - pair[0] >= 1.0 - 1e-4);
        }
    }

    #[test]
    fn degenerate_length_yields_nothing() {
        assert!(grid_slots(0.5, 15.0).is_empty());
        assert!(random_offsets(0.5, 15.0, 4, &mut SeededRandom::new(5)).is_empty());
    }
}
