#![forbid(unsafe_code)]
//! street_scatter: deterministic procedural population of street segments.
//!
//! Modules:
//! - rng: seeded Mulberry32 stream and seed generation
//! - placement: 1-D offset strategies (fixed grid, seeded random, single, fit)
//! - config: type/variant templates, registry, and resolution
//! - generator: per-kind blueprint functions and the slot lifecycle
//! - segment: segment parameters and the owning controller
//! - host: the abstract scene host boundary
//! - events: observation sinks for resolution and regeneration
//!
//! For examples and docs, see README and docs.rs.
pub mod config;
pub mod error;
pub mod events;
pub mod generator;
pub mod host;
pub mod placement;
pub mod rng;
pub mod segment;

/// Convenient re-exports for common types. Import with `use street_scatter::prelude::*;`.
pub mod prelude {
    pub use crate::config::{
        CloneMode, ClonesConfig, ConfigResolver, Density, Footprint, GeneratorConfig,
        GeneratorKind, JustifyWidth, PedestriansConfig, RailConfig, Resolution, StencilConfig,
        StripingConfig, StripingStyle, SurfaceStyle, TypeRegistry, TypeTemplate, VariantOverride,
    };
    pub use crate::error::{Error, Result};
    pub use crate::events::{EventSink, FnSink, SegmentEvent, VecSink};
    pub use crate::generator::{blueprints, GeneratorSlot, GeneratorState, PlacedItem};
    pub use crate::host::{ItemHandle, ItemRequest, MemoryHost, SegmentHost};
    pub use crate::placement::single::Justify;
    pub use crate::placement::{
        fit_spans, FitSpan, FixedPlacement, LinearPlacement, RandomPlacement, SinglePlacement,
        MIN_SPACING,
    };
    pub use crate::rng::{generate_seed, SeededRandom, MAX_GENERATED_SEED, SEED_UNSET};
    pub use crate::segment::{
        Direction, SegmentController, SegmentId, SegmentParams, Side, CUSTOM_VARIANT,
    };
}
