//! Abstract contract to the rendering/scene host.
//!
//! The core never renders anything: it computes what should exist and where,
//! and issues create/destroy requests through [`SegmentHost`]. What a handle
//! actually refers to (scene node, ECS entity, DOM element) is the host's
//! business.
use std::collections::BTreeMap;

use mint::Vector3;

use crate::config::GeneratorKind;
use crate::error::Result;
use crate::segment::SegmentId;

/// Opaque handle to a host-side entity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ItemHandle(pub u64);

/// Creation request for one generated item.
#[non_exhaustive]
#[derive(Clone, Debug, PartialEq)]
pub struct ItemRequest {
    /// Which generator kind produced this item.
    pub kind: GeneratorKind,
    /// Content identifier for the host to instantiate.
    pub model: String,
    /// Position relative to the segment center: x across the width, y up,
    /// z along the length.
    pub position: Vector3<f32>,
    /// Y rotation in degrees.
    pub rotation_y: f32,
    /// Human-readable label for host-side layer listings.
    pub layer_name: String,
}

impl ItemRequest {
    pub fn new(
        kind: GeneratorKind,
        model: impl Into<String>,
        position: impl Into<Vector3<f32>>,
    ) -> Self {
        let model = model.into();
        Self {
            layer_name: model.clone(),
            kind,
            model,
            position: position.into(),
            rotation_y: 0.0,
        }
    }

    pub fn with_rotation_y(mut self, rotation_y: f32) -> Self {
        self.rotation_y = rotation_y;
        self
    }

    pub fn with_layer_name(mut self, layer_name: impl Into<String>) -> Self {
        self.layer_name = layer_name.into();
        self
    }
}

/// The external rendering/scene host and seed-persistence layer.
pub trait SegmentHost {
    /// Instantiates one item; returns the handle the host minted for it.
    fn create_item(&mut self, request: &ItemRequest) -> Result<ItemHandle>;

    /// Destroys a previously created item.
    fn destroy_item(&mut self, handle: ItemHandle) -> Result<()>;

    /// Persists a freshly generated seed for the given generator slot.
    ///
    /// The persistence layer is expected to write the seed into the segment's
    /// configuration and notify the controller, which completes the
    /// awaiting-seed flow.
    fn persist_seed(&mut self, segment: SegmentId, generator_index: usize, seed: u32);
}

/// In-memory host for tests and headless use.
///
/// Mints sequential handles, keeps every live item, and records persisted
/// seeds in arrival order.
#[derive(Debug, Default)]
pub struct MemoryHost {
    next_handle: u64,
    items: BTreeMap<ItemHandle, ItemRequest>,
    persisted_seeds: Vec<(SegmentId, usize, u32)>,
}

impl MemoryHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn items(&self) -> impl Iterator<Item = (&ItemHandle, &ItemRequest)> {
        self.items.iter()
    }

    pub fn get(&self, handle: ItemHandle) -> Option<&ItemRequest> {
        self.items.get(&handle)
    }

    pub fn persisted_seeds(&self) -> &[(SegmentId, usize, u32)] {
        &self.persisted_seeds
    }
}

impl SegmentHost for MemoryHost {
    fn create_item(&mut self, request: &ItemRequest) -> Result<ItemHandle> {
        self.next_handle += 1;
        let handle = ItemHandle(self.next_handle);
        self.items.insert(handle, request.clone());
        Ok(handle)
    }

    fn destroy_item(&mut self, handle: ItemHandle) -> Result<()> {
        self.items
            .remove(&handle)
            .map(|_| ())
            .ok_or_else(|| crate::error::Error::Host(format!("no item with handle {handle:?}")))
    }

    fn persist_seed(&mut self, segment: SegmentId, generator_index: usize, seed: u32) {
        self.persisted_seeds.push((segment, generator_index, seed));
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec3;

    use super::*;

    #[test]
    fn memory_host_mints_unique_handles() {
        let mut host = MemoryHost::new();
        let request = ItemRequest::new(GeneratorKind::Clones, "sedan-rig", Vec3::new(0.0, 0.0, 1.0));
        let a = host.create_item(&request).unwrap();
        let b = host.create_item(&request).unwrap();
        assert_ne!(a, b);
        assert_eq!(host.len(), 2);
    }

    #[test]
    fn destroying_twice_reports_host_error() {
        let mut host = MemoryHost::new();
        let request = ItemRequest::new(GeneratorKind::Rail, "rail", Vec3::new(0.7, 0.0, 0.0));
        let handle = host.create_item(&request).unwrap();
        assert!(host.destroy_item(handle).is_ok());
        assert!(host.destroy_item(handle).is_err());
    }

    #[test]
    fn request_builder_sets_label_and_rotation() {
        let request = ItemRequest::new(GeneratorKind::Clones, "bus", Vec3::new(0.0, 0.0, 5.0))
            .with_rotation_y(180.0);
        assert_eq!(request.rotation_y, 180.0);
        assert!(request.layer_name.contains("bus"));
    }
}
