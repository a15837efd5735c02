//! The segment controller: owns the generator slots of one segment and keeps
//! them consistent with its live parameters.
use rand::RngCore;
use tracing::info;

use crate::config::{ConfigResolver, GeneratorConfig, Resolution, SurfaceStyle};
use crate::error::{Error, Result};
use crate::events::{EventSink, SegmentEvent};
use crate::generator::{GeneratorSlot, PlacedItem};
use crate::host::SegmentHost;
use crate::segment::{Direction, SegmentParams, Side};

/// Pending work, coalesced across parameter changes.
///
/// Resolving implies updating, so a queued `Resolve` absorbs any number of
/// `UpdateAll` requests and vice versa a `Resolve` is never downgraded.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Refresh {
    UpdateAll,
    Resolve,
}

/// Drives one segment: resolves its type and variant into generator slots and
/// regenerates their content when parameters change.
///
/// Parameter setters only record what became stale; nothing touches the host
/// until [`SegmentController::sync`] runs. Any number of changes between two
/// syncs collapse into at most one resolution and one regeneration pass.
pub struct SegmentController {
    params: SegmentParams,
    resolver: ConfigResolver,
    slots: Vec<GeneratorSlot>,
    surface: SurfaceStyle,
    pending: Option<Refresh>,
}

impl SegmentController {
    /// Creates a controller over the stock street vocabulary.
    ///
    /// The first [`SegmentController::sync`] resolves the initial type and
    /// variant.
    pub fn new(params: SegmentParams) -> Self {
        Self::with_resolver(params, ConfigResolver::builtin())
    }

    pub fn with_resolver(params: SegmentParams, resolver: ConfigResolver) -> Self {
        Self {
            params,
            resolver,
            slots: Vec::new(),
            surface: SurfaceStyle::default(),
            pending: Some(Refresh::Resolve),
        }
    }

    pub fn params(&self) -> &SegmentParams {
        &self.params
    }

    pub fn generators(&self) -> &[GeneratorSlot] {
        &self.slots
    }

    /// Surface styling from the last resolution.
    pub fn surface(&self) -> &SurfaceStyle {
        &self.surface
    }

    /// Whether a sync would currently do any work.
    pub fn is_dirty(&self) -> bool {
        self.pending.is_some()
    }

    pub fn set_type(&mut self, type_id: impl Into<String>) {
        self.params.type_id = type_id.into();
        self.queue(Refresh::Resolve);
    }

    pub fn set_variant(&mut self, variant: impl Into<String>) {
        self.params.variant = variant.into();
        self.queue(Refresh::Resolve);
    }

    pub fn set_width(&mut self, width: f32) {
        self.params.width = width;
        self.queue(Refresh::UpdateAll);
    }

    pub fn set_length(&mut self, length: f32) {
        self.params.length = length;
        self.queue(Refresh::UpdateAll);
    }

    pub fn set_direction(&mut self, direction: Direction) {
        self.params.direction = direction;
        self.queue(Refresh::UpdateAll);
    }

    pub fn set_side(&mut self, side: Side) {
        self.params.side = side;
        // Building facing and justification are derived from the side during
        // resolution; no other type places anything side-dependent.
        if self.params.type_id == "building" {
            self.queue(Refresh::Resolve);
        }
    }

    /// Level only moves host-side geometry; placement is unaffected.
    pub fn set_level(&mut self, level: i32) {
        self.params.level = level;
    }

    /// Replaces one generator's configuration in place (custom-variant
    /// editing). Fails if the index does not name an attached generator.
    pub fn set_generator_config(&mut self, index: usize, config: GeneratorConfig) -> Result<()> {
        let slot = self.slot_mut(index)?;
        slot.set_config(config);
        self.queue(Refresh::UpdateAll);
        Ok(())
    }

    /// Applies all pending parameter changes to the host.
    ///
    /// `seed_source` draws fresh seeds for generators still carrying the
    /// unset sentinel. Safe to call when nothing is pending; it then does no
    /// host work at all.
    pub fn sync(
        &mut self,
        host: &mut dyn SegmentHost,
        seed_source: &mut dyn RngCore,
        sink: &mut dyn EventSink,
    ) -> Result<()> {
        if self.pending.is_none() {
            return Ok(());
        }
        self.params.validate()?;
        let Some(refresh) = self.pending.take() else {
            return Ok(());
        };

        if refresh == Refresh::Resolve {
            self.resolve(host, sink);
        }
        for slot in &mut self.slots {
            slot.update(&self.params, host, seed_source, sink);
        }
        Ok(())
    }

    /// Completes the awaiting-seed flow for one generator with a seed the
    /// persistence layer wrote back.
    pub fn apply_persisted_seed(
        &mut self,
        index: usize,
        seed: u32,
        host: &mut dyn SegmentHost,
        seed_source: &mut dyn RngCore,
        sink: &mut dyn EventSink,
    ) -> Result<()> {
        self.params.validate()?;
        let params = self.params.clone();
        let slot = match self.slots.get_mut(index) {
            Some(slot) => slot,
            None => return Err(unknown_generator(index)),
        };
        slot.apply_seed(seed);
        slot.update(&params, host, seed_source, sink);
        Ok(())
    }

    /// Destroys every generated item. Generator slots and their
    /// configurations stay attached; the next sync regenerates.
    pub fn remove(&mut self, host: &mut dyn SegmentHost) {
        for slot in &mut self.slots {
            slot.remove(host);
        }
        self.queue(Refresh::UpdateAll);
    }

    /// Releases every generated item to independent editing and returns them.
    ///
    /// The host entities stay alive; the controller forgets them and will not
    /// regenerate until new parameter changes arrive.
    pub fn detach_all(&mut self, sink: &mut dyn EventSink) -> Vec<PlacedItem> {
        let mut detached = Vec::new();
        for slot in &mut self.slots {
            let items = slot.detach();
            if !items.is_empty() {
                sink.send(SegmentEvent::ItemsDetached {
                    segment: self.params.id,
                    kind: slot.kind(),
                    item_count: items.len(),
                });
            }
            detached.extend(items);
        }
        self.pending = None;
        detached
    }

    fn queue(&mut self, refresh: Refresh) {
        self.pending = Some(match self.pending {
            Some(Refresh::Resolve) => Refresh::Resolve,
            _ => refresh,
        });
    }

    fn resolve(&mut self, host: &mut dyn SegmentHost, sink: &mut dyn EventSink) {
        match self.resolver.resolve(&self.params) {
            Resolution::Preserve => {
                info!(
                    "Segment {} keeps its custom generator set ({} generators).",
                    self.params.id,
                    self.slots.len()
                );
            }
            Resolution::Replace {
                generators,
                surface,
            } => {
                for slot in &mut self.slots {
                    slot.remove(host);
                }
                self.surface = surface;
                self.slots = generators
                    .into_iter()
                    .enumerate()
                    .map(|(index, config)| GeneratorSlot::new(index, config))
                    .collect();
                sink.send(SegmentEvent::Resolved {
                    segment: self.params.id,
                    generator_count: self.slots.len(),
                });
            }
        }
    }

    fn slot_mut(&mut self, index: usize) -> Result<&mut GeneratorSlot> {
        self.slots.get_mut(index).ok_or_else(|| unknown_generator(index))
    }
}

fn unknown_generator(index: usize) -> Error {
    Error::InvalidConfig(format!("no generator at index {index}"))
}
