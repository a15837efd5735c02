//! Blueprint generation for pavement stencils (arrows, lettering, tees).
use glam::Vec3;

use crate::config::{GeneratorKind, StencilConfig};
use crate::host::ItemRequest;
use crate::placement::fixed::fixed_offsets;
use crate::rng::SeededRandom;
use crate::segment::{Direction, SegmentParams};

pub(crate) fn blueprints(config: &StencilConfig, params: &SegmentParams) -> Vec<ItemRequest> {
    if !config.models.iter().any(|m| !m.trim().is_empty()) {
        return Vec::new();
    }

    let mut rng = SeededRandom::new(config.seed);
    let group_len = config.models.len();
    let mut requests = Vec::new();

    for group_offset in fixed_offsets(params.length, config.spacing, config.cycle_offset) {
        let rotation = if config.random_facing {
            rng.next_f32() * 360.0
        } else {
            match params.direction {
                Direction::Outbound => 180.0 - config.facing,
                Direction::Inbound | Direction::None => config.facing,
            }
        };

        // A group reads along the travel direction; when flipped it is laid
        // out back to front so the reading order survives the rotation.
        let flipped = rotation == 180.0;

        for (i, model) in config.models.iter().enumerate() {
            let slot = if flipped { group_len - 1 - i } else { i };
            let z = group_offset + (slot as f32 - (group_len as f32 - 1.0) / 2.0) * config.padding;
            requests.push(
                ItemRequest::new(
                    GeneratorKind::Stencil,
                    model.clone(),
                    Vec3::new(config.position_x, config.position_y, z),
                )
                .with_rotation_y(rotation)
                .with_layer_name(format!("Cloned Stencil \u{2022} {model}")),
            );
        }
    }

    requests
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(length: f32) -> SegmentParams {
        SegmentParams::new(1, "bus-lane").with_dimensions(3.0, length)
    }

    #[test]
    fn empty_models_generate_nothing() {
        let config = StencilConfig::new(Vec::<String>::new());
        assert!(blueprints(&config, &params(60.0)).is_empty());
    }

    #[test]
    fn one_group_per_grid_slot() {
        let config = StencilConfig::new(["stencil-bus", "stencil-only"])
            .with_spacing(30.0)
            .with_padding(3.0);
        let items = blueprints(&config, &params(60.0));
        // floor(60 / 30) = 2 groups of 2 stencils each.
        assert_eq!(items.len(), 4);
    }

    #[test]
    fn group_members_spread_by_padding() {
        let config = StencilConfig::new(["a", "b"])
            .with_spacing(100.0)
            .with_padding(4.0);
        let items = blueprints(&config, &params(100.0));
        assert_eq!(items.len(), 2);
        assert!((items[1].position.z - items[0].position.z - 4.0).abs() < 1e-5);
    }

    #[test]
    fn outbound_direction_flips_reading_order() {
        let config = StencilConfig::new(["a", "b"])
            .with_spacing(100.0)
            .with_padding(4.0);

        let mut p = params(100.0);
        p.direction = Direction::Outbound;
        let items = blueprints(&config, &p);
        assert_eq!(items.len(), 2);
        assert!(items.iter().all(|i| i.rotation_y == 180.0));
        // "a" now sits at the far slot, so reading along the flipped
        // direction still gives a then b.
        let a = items.iter().find(|i| i.model == "a").unwrap();
        let b = items.iter().find(|i| i.model == "b").unwrap();
        assert!(a.position.z > b.position.z);
    }

    #[test]
    fn stencils_sit_just_above_the_surface() {
        let config = StencilConfig::new(["stencil-only"]).with_spacing(50.0);
        let items = blueprints(&config, &params(100.0));
        assert!(items.iter().all(|i| i.position.y == 0.05));
    }
}
