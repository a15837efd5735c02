//! Placement strategies producing 1-D offsets along a segment's length.
//!
//! This module defines the trait and concrete strategies used by generator
//! controllers to convert a segment length into an ordered list of signed
//! offsets, in meters from the segment center (positive toward one end,
//! consistently).
use rand::RngCore;

pub mod fit;
pub mod fixed;
pub mod random;
pub mod single;

pub use fit::{fit_spans, FitSpan};
pub use fixed::FixedPlacement;
pub use random::RandomPlacement;
pub use single::SinglePlacement;

/// Trait for linear placement strategies.
pub trait LinearPlacement: Send + Sync {
    fn offsets(&self, length: f32, rng: &mut dyn RngCore) -> Vec<f32>;
}

/// Minimum effective center-to-center spacing, in meters.
///
/// A spacing below this would let item counts blow up on long segments, so
/// every spacing-driven mode clamps to it.
pub const MIN_SPACING: f32 = 1.0;

pub(crate) fn corrected_spacing(spacing: f32) -> f32 {
    spacing.max(MIN_SPACING)
}

/// Generate a random float in the range [0, 1).
///
/// Only the top 24 bits are normalized; every step is exactly representable
/// in f32, so the result can never round up to 1.
#[inline]
pub(crate) fn rand01(rng: &mut dyn RngCore) -> f32 {
    (rng.next_u32() >> 8) as f32 * (1.0 / (1 << 24) as f32)
}

/// Uniform index in `0..len`, strictly below `len`.
#[inline]
pub(crate) fn rand_index(rng: &mut dyn RngCore, len: usize) -> usize {
    debug_assert!(len > 0, "len must be > 0");
    let scaled = rand01(rng) * len as f32;
    (scaled as usize).min(len - 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    pub(crate) struct FixedRng {
        pub value: u32,
    }

    impl RngCore for FixedRng {
        fn next_u32(&mut self) -> u32 {
            self.value
        }

        fn next_u64(&mut self) -> u64 {
            self.value as u64
        }

        fn fill_bytes(&mut self, dest: &mut [u8]) {
            let bytes = self.value.to_le_bytes();
            for (i, b) in dest.iter_mut().enumerate() {
                *b = bytes[i % 4];
            }
        }
    }

    #[test]
    fn corrected_spacing_clamps_below_one() {
        assert_eq!(corrected_spacing(0.0), 1.0);
        assert_eq!(corrected_spacing(0.5), 1.0);
        assert_eq!(corrected_spacing(7.3), 7.3);
    }

    #[test]
    fn rand01_stays_below_one() {
        let mut rng = FixedRng { value: u32::MAX };
        assert!(rand01(&mut rng) < 1.0);
        let mut rng = FixedRng { value: 0 };
        assert_eq!(rand01(&mut rng), 0.0);
    }

    #[test]
    fn rand_index_is_exclusive_of_len() {
        let mut rng = FixedRng { value: u32::MAX };
        assert_eq!(rand_index(&mut rng, 3), 2);
        let mut rng = FixedRng { value: 0 };
        assert_eq!(rand_index(&mut rng, 3), 0);
    }
}
