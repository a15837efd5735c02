//! Segment parameters and the controller that keeps generated content in
//! sync with them.
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

pub mod controller;

pub use controller::SegmentController;

use crate::config::TypeId;
use crate::error::{Error, Result};

pub type SegmentId = u64;

/// Variant name meaning "no overrides": whatever generator configuration is
/// currently set on the segment is preserved verbatim.
pub const CUSTOM_VARIANT: &str = "custom";

/// Travel direction along the segment, which biases item rotation.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Direction {
    #[default]
    None,
    Inbound,
    Outbound,
}

/// Which street edge the segment sits on; drives facing and justification
/// for building segments.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Side {
    Left,
    #[default]
    Right,
}

/// Live parameters of one street segment.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[non_exhaustive]
#[derive(Clone, Debug, PartialEq)]
pub struct SegmentParams {
    pub id: SegmentId,
    pub type_id: TypeId,
    pub variant: String,
    /// Width in meters; must be positive.
    pub width: f32,
    /// Length in meters; must be non-negative.
    pub length: f32,
    /// Elevation level index (host-side geometry only).
    pub level: i32,
    pub direction: Direction,
    pub side: Side,
}

impl SegmentParams {
    pub fn new(id: SegmentId, type_id: impl Into<TypeId>) -> Self {
        Self {
            id,
            type_id: type_id.into(),
            variant: CUSTOM_VARIANT.to_owned(),
            width: 3.0,
            length: 0.0,
            level: 0,
            direction: Direction::None,
            side: Side::Right,
        }
    }

    pub fn with_variant(mut self, variant: impl Into<String>) -> Self {
        self.variant = variant.into();
        self
    }

    pub fn with_dimensions(mut self, width: f32, length: f32) -> Self {
        self.width = width;
        self.length = length;
        self
    }

    pub fn with_direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    pub fn with_side(mut self, side: Side) -> Self {
        self.side = side;
        self
    }

    pub fn with_level(mut self, level: i32) -> Self {
        self.level = level;
        self
    }

    /// Whether the segment uses the custom variant.
    pub fn is_custom_variant(&self) -> bool {
        self.variant == CUSTOM_VARIANT
    }

    /// Validates the dimensional invariants.
    pub fn validate(&self) -> Result<()> {
        if !(self.width > 0.0) {
            return Err(Error::InvalidConfig(format!(
                "segment width must be > 0, got {}",
                self.width
            )));
        }
        if !(self.length >= 0.0) {
            return Err(Error::InvalidConfig(format!(
                "segment length must be >= 0, got {}",
                self.length
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_params_default_to_custom_variant() {
        let params = SegmentParams::new(1, "drive-lane");
        assert!(params.is_custom_variant());
        assert_eq!(params.direction, Direction::None);
        assert_eq!(params.side, Side::Right);
    }

    #[test]
    fn validate_rejects_bad_dimensions() {
        let params = SegmentParams::new(1, "drive-lane").with_dimensions(0.0, 10.0);
        assert!(params.validate().is_err());

        let params = SegmentParams::new(1, "drive-lane").with_dimensions(3.0, -1.0);
        assert!(params.validate().is_err());

        let params = SegmentParams::new(1, "drive-lane").with_dimensions(3.0, 0.0);
        assert!(params.validate().is_ok());
    }

    #[test]
    fn validate_rejects_nan_width() {
        let params = SegmentParams::new(1, "drive-lane").with_dimensions(f32::NAN, 10.0);
        assert!(params.validate().is_err());
    }
}
