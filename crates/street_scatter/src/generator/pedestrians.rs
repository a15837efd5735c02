//! Blueprint generation for sidewalk pedestrians.
use glam::Vec3;

use crate::config::{GeneratorKind, PedestriansConfig};
use crate::host::ItemRequest;
use crate::placement::rand_index;
use crate::rng::SeededRandom;
use crate::segment::{Direction, SegmentParams};

/// Spacing of the candidate slot grid along the segment, in meters.
const SLOT_STEP: f32 = 1.5;
/// Fraction of the half-width pedestrians may wander across.
const WIDTH_USE: f32 = 0.37;
/// Number of distinct character models, named `char1..char16`.
const CHARACTER_COUNT: usize = 16;

pub(crate) fn blueprints(config: &PedestriansConfig, params: &SegmentParams) -> Vec<ItemRequest> {
    let count = (config.density.factor() * params.length).floor() as usize;
    if count == 0 {
        return Vec::new();
    }

    let mut rng = SeededRandom::new(config.seed);

    let mut slots: Vec<f32> = Vec::new();
    let mut z = -params.length / 2.0;
    while z <= params.length / 2.0 {
        slots.push(z);
        z += SLOT_STEP;
    }
    for i in (1..slots.len()).rev() {
        slots.swap(i, rand_index(&mut rng, i + 1));
    }

    let mut requests = Vec::with_capacity(count.min(slots.len()));
    for _ in 0..count {
        let Some(z) = slots.pop() else {
            break;
        };
        let x = (rng.next_f32() * 2.0 - 1.0) * WIDTH_USE * params.width;
        let model = format!("char{}", rng.index(CHARACTER_COUNT) + 1);
        let rotation = match params.direction {
            Direction::Outbound => 180.0,
            Direction::Inbound => 0.0,
            Direction::None => {
                if rng.next_f32() < 0.5 {
                    0.0
                } else {
                    180.0
                }
            }
        };
        requests.push(
            ItemRequest::new(
                GeneratorKind::Pedestrians,
                model,
                Vec3::new(x, config.position_y, z),
            )
            .with_rotation_y(rotation)
            .with_layer_name("Generated Pedestrian"),
        );
    }

    requests
}
