//! Blueprint generation for lane striping.
use glam::Vec3;

use crate::config::{GeneratorKind, StripingConfig, StripingStyle};
use crate::host::ItemRequest;
use crate::segment::{SegmentParams, Side};

pub(crate) fn blueprints(config: &StripingConfig, params: &SegmentParams) -> Vec<ItemRequest> {
    let Some(model) = config.striping.model_id() else {
        return Vec::new();
    };
    if params.length <= 0.0 {
        return Vec::new();
    }

    let x = match config.side {
        Side::Left => -params.width / 2.0,
        Side::Right => params.width / 2.0,
    };

    vec![
        ItemRequest::new(
            GeneratorKind::Striping,
            model,
            Vec3::new(x, config.position_y, 0.0),
        )
        .with_rotation_y(config.facing)
        .with_layer_name(format!("Cloned Striping \u{2022} {model}")),
    ]
}
