//! Generator controllers owning the regenerate lifecycle per content kind.
//!
//! A [`GeneratorSlot`] binds one [`GeneratorConfig`] to the items it has
//! created on the host. Regeneration is wholesale: every pass destroys the
//! previous items before creating the new set, so repeated passes with the
//! same inputs always converge to the same content. The per-kind modules
//! contain the pure blueprint functions that turn a configuration plus live
//! segment parameters into creation requests.
use rand::RngCore;
use tracing::warn;

use crate::config::{GeneratorConfig, GeneratorKind};
use crate::events::{EventSink, SegmentEvent};
use crate::host::{ItemHandle, ItemRequest, SegmentHost};
use crate::rng::{generate_seed, SEED_UNSET};
use crate::segment::SegmentParams;

pub mod clones;
pub mod pedestrians;
pub mod rail;
pub mod stencil;
pub mod striping;

/// Lifecycle state of a generator controller.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum GeneratorState {
    /// No placed items; entered on creation and after removal.
    #[default]
    Idle,
    /// Randomness is required but no seed is assigned; a fresh seed has been
    /// sent to the persistence layer and the controller halts until it is
    /// applied.
    AwaitingSeed,
    /// A full, consistent item set matching the current inputs exists.
    Populated,
}

/// One concrete generated entity tracked by its controller.
#[derive(Clone, Debug, PartialEq)]
pub struct PlacedItem {
    /// Host handle for the created entity.
    pub handle: ItemHandle,
    /// Content identifier chosen for this slot.
    pub model: String,
    /// Signed distance along the segment length axis from its center.
    pub offset: f32,
    /// Y rotation in degrees.
    pub rotation_y: f32,
}

/// A generator attached to a segment: configuration plus the items it owns.
///
/// Items are owned exclusively; nothing else may create or destroy them.
#[derive(Debug)]
pub struct GeneratorSlot {
    index: usize,
    config: GeneratorConfig,
    state: GeneratorState,
    items: Vec<PlacedItem>,
}

impl GeneratorSlot {
    pub fn new(index: usize, config: GeneratorConfig) -> Self {
        Self {
            index,
            config,
            state: GeneratorState::Idle,
            items: Vec::new(),
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn kind(&self) -> GeneratorKind {
        self.config.kind()
    }

    pub fn state(&self) -> GeneratorState {
        self.state
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    pub fn items(&self) -> &[PlacedItem] {
        &self.items
    }

    /// Replaces the configuration value; takes effect on the next update.
    pub fn set_config(&mut self, config: GeneratorConfig) {
        self.config = config;
    }

    /// Stores a persisted seed, completing the awaiting-seed flow on the
    /// next update.
    pub fn apply_seed(&mut self, seed: u32) {
        self.config = self.config.clone().with_seed(seed);
    }

    /// Regenerates the item set from the current configuration and segment
    /// parameters.
    ///
    /// If randomness is required and the seed is still unset, no content is
    /// produced: one fresh seed is sent through [`SegmentHost::persist_seed`]
    /// and the slot enters [`GeneratorState::AwaitingSeed`]. Host failures on
    /// individual items are reported as warnings and skipped; the slot stays
    /// consistent and the next update retries from scratch.
    pub fn update(
        &mut self,
        params: &SegmentParams,
        host: &mut dyn SegmentHost,
        seed_source: &mut dyn RngCore,
        sink: &mut dyn EventSink,
    ) {
        if self.config.required_seed() == Some(SEED_UNSET) {
            let seed = generate_seed(seed_source);
            host.persist_seed(params.id, self.index, seed);
            sink.send(SegmentEvent::SeedRequested {
                segment: params.id,
                generator_index: self.index,
                seed,
            });
            self.state = GeneratorState::AwaitingSeed;
            return;
        }

        self.remove(host);

        let kind = self.kind();
        for request in blueprints(&self.config, params) {
            match host.create_item(&request) {
                Ok(handle) => self.items.push(PlacedItem {
                    handle,
                    model: request.model,
                    offset: request.position.z,
                    rotation_y: request.rotation_y,
                }),
                Err(e) => {
                    warn!("Host failed to create {} item: {e}.", kind);
                    sink.send(SegmentEvent::Warning {
                        context: format!("segment:{} generator:{}", params.id, self.index),
                        message: format!("failed to create {kind} item: {e}"),
                    });
                }
            }
        }

        self.state = GeneratorState::Populated;
        sink.send(SegmentEvent::GeneratorUpdated {
            segment: params.id,
            kind,
            item_count: self.items.len(),
        });
    }

    /// Destroys every tracked item and returns to idle. Safe to call
    /// repeatedly.
    pub fn remove(&mut self, host: &mut dyn SegmentHost) {
        for item in self.items.drain(..) {
            if let Err(e) = host.destroy_item(item.handle) {
                warn!("Host failed to destroy item {:?}: {e}.", item.handle);
            }
        }
        self.state = GeneratorState::Idle;
    }

    /// Forgets the tracked items without destroying the host entities,
    /// handing them over to independent editing.
    pub fn detach(&mut self) -> Vec<PlacedItem> {
        self.state = GeneratorState::Idle;
        std::mem::take(&mut self.items)
    }
}

/// Computes the creation requests for one configuration against the live
/// segment parameters. Pure; all randomness comes from the config's seed.
pub fn blueprints(config: &GeneratorConfig, params: &SegmentParams) -> Vec<ItemRequest> {
    match config {
        GeneratorConfig::Clones(c) => clones::blueprints(c, params),
        GeneratorConfig::Stencil(c) => stencil::blueprints(c, params),
        GeneratorConfig::Pedestrians(c) => pedestrians::blueprints(c, params),
        GeneratorConfig::Striping(c) => striping::blueprints(c, params),
        GeneratorConfig::Rail(c) => rail::blueprints(c, params),
    }
}
