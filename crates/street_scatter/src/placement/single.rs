//! Single-item placement with start/middle/end justification.
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use rand::RngCore;

use crate::placement::LinearPlacement;

/// Where a single item sits along the segment length.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Justify {
    Start,
    #[default]
    Middle,
    End,
}

/// Placement of exactly one item.
#[derive(Debug, Clone)]
pub struct SinglePlacement {
    pub justify: Justify,
    /// Inset from the justified segment end, in meters.
    pub padding: f32,
}

impl SinglePlacement {
    pub fn new(justify: Justify, padding: f32) -> Self {
        Self { justify, padding }
    }
}

impl LinearPlacement for SinglePlacement {
    fn offsets(&self, length: f32, _rng: &mut dyn RngCore) -> Vec<f32> {
        vec![single_offset(length, self.justify, self.padding)]
    }
}

/// Computes the offset of a single justified item.
pub fn single_offset(length: f32, justify: Justify, padding: f32) -> f32 {
    match justify {
        Justify::Start => length / 2.0 - padding,
        Justify::End => -length / 2.0 + padding,
        Justify::Middle => 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn justify_values_match_contract() {
        assert_eq!(single_offset(100.0, Justify::Start, 10.0), 40.0);
        assert_eq!(single_offset(100.0, Justify::End, 10.0), -40.0);
        assert_eq!(single_offset(100.0, Justify::Middle, 10.0), 0.0);
    }

    #[test]
    fn middle_is_the_default() {
        assert_eq!(Justify::default(), Justify::Middle);
    }
}
