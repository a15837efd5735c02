//! Declarative generator configuration for segment types and variants.
//!
//! Configuration flows one way: a [`crate::config::registry::TypeRegistry`]
//! supplies per-type templates, the [`crate::config::resolver::ConfigResolver`]
//! turns a segment's type and variant into concrete [`GeneratorConfig`] values,
//! and generator controllers consume those values together with the live
//! segment parameters. Configs are immutable; an update replaces the whole
//! value.
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

pub mod registry;
pub mod resolver;

pub use registry::{Footprint, TypeRegistry, TypeTemplate, VariantOverride};
pub use resolver::{ConfigResolver, Resolution, SurfaceStyle};

use crate::placement::single::Justify;
use crate::segment::Side;

pub type TypeId = String;

/// The category of generated content a configuration drives.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GeneratorKind {
    Clones,
    Stencil,
    Pedestrians,
    Striping,
    Rail,
}

impl GeneratorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            GeneratorKind::Clones => "clones",
            GeneratorKind::Stencil => "stencil",
            GeneratorKind::Pedestrians => "pedestrians",
            GeneratorKind::Striping => "striping",
            GeneratorKind::Rail => "rail",
        }
    }
}

impl std::fmt::Display for GeneratorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Placement algorithm used by a clones generator.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CloneMode {
    #[default]
    Fixed,
    Random,
    Single,
    /// Pack model footprints end to end (building frontages).
    Fit,
}

/// Which segment edge fit-mode content is flush against.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum JustifyWidth {
    Left,
    #[default]
    Center,
    Right,
}

/// Pedestrian crowd density, as items per meter of segment length.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Density {
    Empty,
    Sparse,
    #[default]
    Normal,
    Dense,
}

impl Density {
    pub fn factor(&self) -> f32 {
        match self {
            Density::Empty => 0.0,
            Density::Sparse => 0.03,
            Density::Normal => 0.125,
            Density::Dense => 0.25,
        }
    }
}

/// Lane striping style. Maps to a host-side material id; `None` draws nothing.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StripingStyle {
    #[default]
    None,
    SolidStripe,
    DashedStripe,
    ShortDashedStripe,
    ShortDashedStripeYellow,
    SolidDoubleYellow,
    SolidDashed,
    SolidDashedYellow,
    SolidDashedYellowMirror,
}

impl StripingStyle {
    /// Host-side model/material id for this style, or `None` for no stripe.
    pub fn model_id(&self) -> Option<&'static str> {
        match self {
            StripingStyle::None => None,
            StripingStyle::SolidStripe => Some("striping-solid-stripe"),
            StripingStyle::DashedStripe => Some("striping-dashed-stripe"),
            StripingStyle::ShortDashedStripe => Some("striping-short-dashed-stripe"),
            StripingStyle::ShortDashedStripeYellow => Some("striping-short-dashed-stripe-yellow"),
            StripingStyle::SolidDoubleYellow => Some("striping-solid-doubleyellow"),
            StripingStyle::SolidDashed => Some("striping-solid-dashed"),
            StripingStyle::SolidDashedYellow => Some("striping-solid-dashed-yellow"),
            StripingStyle::SolidDashedYellowMirror => Some("striping-solid-dashed-yellow-mirror"),
        }
    }
}

/// Configuration for a clones generator (vehicles, cyclists, buildings).
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[non_exhaustive]
#[derive(Clone, Debug, PartialEq)]
pub struct ClonesConfig {
    pub mode: CloneMode,
    /// Candidate content identifiers; must be non-empty to generate anything.
    pub models: Vec<String>,
    /// Minimum center-to-center distance target, in meters.
    pub spacing: f32,
    /// Target item count (random mode).
    pub count: usize,
    /// Starting phase as a fraction of spacing (fixed mode).
    pub cycle_offset: f32,
    /// Justification of the sole item (single mode).
    pub justify: Justify,
    /// Inset from the justified end (single mode), in meters.
    pub padding: f32,
    /// Which edge fit-mode items are flush against; derived from the segment
    /// side when unset.
    pub justify_width: Option<JustifyWidth>,
    /// Per-model footprints for fit mode, parallel to `models`.
    pub footprints: Vec<Footprint>,
    /// Y rotation bias in degrees.
    pub facing: f32,
    /// Rotate each item by a seeded random amount instead of `facing`.
    pub random_facing: bool,
    /// Seed for all randomness; [`crate::rng::SEED_UNSET`] means not yet assigned.
    pub seed: u32,
    pub position_x: f32,
    pub position_y: f32,
}

impl Default for ClonesConfig {
    fn default() -> Self {
        Self {
            mode: CloneMode::Fixed,
            models: Vec::new(),
            spacing: 15.0,
            count: 1,
            cycle_offset: 0.5,
            justify: Justify::Middle,
            padding: 4.0,
            justify_width: None,
            footprints: Vec::new(),
            facing: 0.0,
            random_facing: false,
            seed: 0,
            position_x: 0.0,
            position_y: 0.0,
        }
    }
}

impl ClonesConfig {
    pub fn new(mode: CloneMode, models: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            mode,
            models: models.into_iter().map(Into::into).collect(),
            ..Default::default()
        }
    }

    pub fn with_spacing(mut self, spacing: f32) -> Self {
        self.spacing = spacing;
        self
    }

    pub fn with_count(mut self, count: usize) -> Self {
        self.count = count;
        self
    }

    pub fn with_cycle_offset(mut self, cycle_offset: f32) -> Self {
        self.cycle_offset = cycle_offset;
        self
    }

    pub fn with_seed(mut self, seed: u32) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_facing(mut self, facing: f32) -> Self {
        self.facing = facing;
        self
    }

    pub fn with_random_facing(mut self, random_facing: bool) -> Self {
        self.random_facing = random_facing;
        self
    }

    /// Whether this configuration draws from the seeded random stream.
    pub fn consumes_randomness(&self) -> bool {
        self.mode == CloneMode::Random || self.random_facing || self.models.len() > 1
    }
}

/// Configuration for pavement stencils (arrows, lettering, parking tees).
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[non_exhaustive]
#[derive(Clone, Debug, PartialEq)]
pub struct StencilConfig {
    /// Stencil group laid out around each grid offset; non-empty to generate.
    pub models: Vec<String>,
    pub spacing: f32,
    pub cycle_offset: f32,
    /// Distance between stencils within one group, in meters.
    pub padding: f32,
    pub facing: f32,
    pub random_facing: bool,
    pub seed: u32,
    pub position_x: f32,
    pub position_y: f32,
}

impl Default for StencilConfig {
    fn default() -> Self {
        Self {
            models: Vec::new(),
            spacing: 15.0,
            cycle_offset: 0.5,
            padding: 0.0,
            facing: 0.0,
            random_facing: false,
            seed: 0,
            position_x: 0.0,
            position_y: 0.05,
        }
    }
}

impl StencilConfig {
    pub fn new(models: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            models: models.into_iter().map(Into::into).collect(),
            ..Default::default()
        }
    }

    pub fn with_spacing(mut self, spacing: f32) -> Self {
        self.spacing = spacing;
        self
    }

    pub fn with_cycle_offset(mut self, cycle_offset: f32) -> Self {
        self.cycle_offset = cycle_offset;
        self
    }

    pub fn with_padding(mut self, padding: f32) -> Self {
        self.padding = padding;
        self
    }

    pub fn consumes_randomness(&self) -> bool {
        self.random_facing
    }
}

/// Configuration for generated pedestrians.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[non_exhaustive]
#[derive(Clone, Debug, PartialEq)]
pub struct PedestriansConfig {
    pub density: Density,
    pub seed: u32,
    pub position_y: f32,
}

impl Default for PedestriansConfig {
    fn default() -> Self {
        Self {
            density: Density::Normal,
            seed: 0,
            position_y: 0.0,
        }
    }
}

impl PedestriansConfig {
    pub fn new(density: Density) -> Self {
        Self {
            density,
            ..Default::default()
        }
    }

    pub fn with_seed(mut self, seed: u32) -> Self {
        self.seed = seed;
        self
    }

    pub fn consumes_randomness(&self) -> bool {
        self.density != Density::Empty
    }
}

/// Configuration for lane striping.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[non_exhaustive]
#[derive(Clone, Debug, PartialEq)]
pub struct StripingConfig {
    pub striping: StripingStyle,
    /// Which segment edge the stripe runs along.
    pub side: Side,
    pub facing: f32,
    pub position_y: f32,
}

impl Default for StripingConfig {
    fn default() -> Self {
        Self {
            striping: StripingStyle::None,
            side: Side::Left,
            facing: 0.0,
            position_y: 0.05,
        }
    }
}

impl StripingConfig {
    pub fn new(striping: StripingStyle) -> Self {
        Self {
            striping,
            ..Default::default()
        }
    }

    pub fn with_side(mut self, side: Side) -> Self {
        self.side = side;
        self
    }
}

/// Configuration for rail track.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[non_exhaustive]
#[derive(Clone, Debug, PartialEq)]
pub struct RailConfig {
    /// Distance between rails, in millimeters (1435 standard, 1067 narrow).
    pub gauge_mm: u32,
}

impl Default for RailConfig {
    fn default() -> Self {
        Self { gauge_mm: 1435 }
    }
}

impl RailConfig {
    pub fn new(gauge_mm: u32) -> Self {
        Self { gauge_mm }
    }
}

/// One generator attached to a segment, with its full configuration.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub enum GeneratorConfig {
    Clones(ClonesConfig),
    Stencil(StencilConfig),
    Pedestrians(PedestriansConfig),
    Striping(StripingConfig),
    Rail(RailConfig),
}

impl GeneratorConfig {
    pub fn kind(&self) -> GeneratorKind {
        match self {
            GeneratorConfig::Clones(_) => GeneratorKind::Clones,
            GeneratorConfig::Stencil(_) => GeneratorKind::Stencil,
            GeneratorConfig::Pedestrians(_) => GeneratorKind::Pedestrians,
            GeneratorConfig::Striping(_) => GeneratorKind::Striping,
            GeneratorConfig::Rail(_) => GeneratorKind::Rail,
        }
    }

    /// Current seed if this configuration draws from the seeded stream.
    pub fn required_seed(&self) -> Option<u32> {
        match self {
            GeneratorConfig::Clones(c) if c.consumes_randomness() => Some(c.seed),
            GeneratorConfig::Stencil(c) if c.consumes_randomness() => Some(c.seed),
            GeneratorConfig::Pedestrians(c) if c.consumes_randomness() => Some(c.seed),
            _ => None,
        }
    }

    /// Replaces the seed, returning the updated value.
    pub fn with_seed(mut self, seed: u32) -> Self {
        match &mut self {
            GeneratorConfig::Clones(c) => c.seed = seed,
            GeneratorConfig::Stencil(c) => c.seed = seed,
            GeneratorConfig::Pedestrians(c) => c.seed = seed,
            GeneratorConfig::Striping(_) | GeneratorConfig::Rail(_) => {}
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn density_factors_match_contract() {
        assert_eq!(Density::Empty.factor(), 0.0);
        assert_eq!(Density::Sparse.factor(), 0.03);
        assert_eq!(Density::Normal.factor(), 0.125);
        assert_eq!(Density::Dense.factor(), 0.25);
    }

    #[test]
    fn striping_none_has_no_model() {
        assert!(StripingStyle::None.model_id().is_none());
        assert_eq!(
            StripingStyle::SolidStripe.model_id(),
            Some("striping-solid-stripe")
        );
    }

    #[test]
    fn clones_randomness_depends_on_mode_and_models() {
        let fixed_single_model = ClonesConfig::new(CloneMode::Fixed, ["tree"]);
        assert!(!fixed_single_model.consumes_randomness());

        let random = ClonesConfig::new(CloneMode::Random, ["sedan-rig"]);
        assert!(random.consumes_randomness());

        let multi_model = ClonesConfig::new(CloneMode::Fixed, ["a", "b"]);
        assert!(multi_model.consumes_randomness());

        let spun = ClonesConfig::new(CloneMode::Fixed, ["tree"]).with_random_facing(true);
        assert!(spun.consumes_randomness());
    }

    #[test]
    fn required_seed_reports_only_random_consumers() {
        let rail = GeneratorConfig::Rail(RailConfig::default());
        assert_eq!(rail.required_seed(), None);

        let clones =
            GeneratorConfig::Clones(ClonesConfig::new(CloneMode::Random, ["bus"]).with_seed(9));
        assert_eq!(clones.required_seed(), Some(9));
    }

    #[test]
    fn with_seed_replaces_the_value() {
        let config = GeneratorConfig::Pedestrians(PedestriansConfig::default());
        let config = config.with_seed(77);
        assert_eq!(config.required_seed(), Some(77));
    }
}
