//! Blueprint generation for cloned models (vehicles, cyclists, buildings).
use glam::Vec3;

use crate::config::{CloneMode, ClonesConfig, GeneratorKind, JustifyWidth};
use crate::host::ItemRequest;
use crate::placement::fit::fit_spans;
use crate::placement::fixed::fixed_offsets;
use crate::placement::random::random_offsets;
use crate::placement::single::single_offset;
use crate::rng::SeededRandom;
use crate::segment::{Direction, SegmentParams};

pub(crate) fn blueprints(config: &ClonesConfig, params: &SegmentParams) -> Vec<ItemRequest> {
    if !config.models.iter().any(|m| !m.trim().is_empty()) {
        return Vec::new();
    }

    let mut rng = SeededRandom::new(config.seed);

    match config.mode {
        CloneMode::Fixed => fixed_offsets(params.length, config.spacing, config.cycle_offset)
            .into_iter()
            .map(|offset| request_at(config, params, &mut rng, offset))
            .collect(),
        CloneMode::Random => {
            random_offsets(params.length, config.spacing, config.count, &mut rng)
                .into_iter()
                .map(|offset| request_at(config, params, &mut rng, offset))
                .collect()
        }
        CloneMode::Single => {
            let offset = single_offset(params.length, config.justify, config.padding);
            vec![request_at(config, params, &mut rng, offset)]
        }
        CloneMode::Fit => fit_blueprints(config, params, &mut rng),
    }
}

fn request_at(
    config: &ClonesConfig,
    params: &SegmentParams,
    rng: &mut SeededRandom,
    offset: f32,
) -> ItemRequest {
    let model = pick_model(config, rng).to_owned();
    let rotation = rotation_y(config, params.direction, rng);
    let layer_name = format!("Cloned Model \u{2022} {model}");
    ItemRequest::new(
        GeneratorKind::Clones,
        model,
        Vec3::new(config.position_x, config.position_y, offset),
    )
    .with_rotation_y(rotation)
    .with_layer_name(layer_name)
}

fn fit_blueprints(
    config: &ClonesConfig,
    params: &SegmentParams,
    rng: &mut SeededRandom,
) -> Vec<ItemRequest> {
    let spans: Vec<f32> = if config.footprints.len() == config.models.len() {
        config.footprints.iter().map(|f| f.span).collect()
    } else {
        config
            .models
            .iter()
            .map(|_| crate::config::Footprint::default().span)
            .collect()
    };

    fit_spans(params.length, config.spacing, &spans)
        .into_iter()
        .map(|span| {
            let model = config.models[span.model_index].clone();
            let depth = config
                .footprints
                .get(span.model_index)
                .map(|f| f.depth)
                .unwrap_or_default();
            let position_x = match config.justify_width.unwrap_or_default() {
                JustifyWidth::Left => config.position_x - params.width / 2.0 + depth / 2.0,
                JustifyWidth::Right => config.position_x + params.width / 2.0 - depth / 2.0,
                JustifyWidth::Center => config.position_x,
            };
            let rotation = rotation_y(config, params.direction, rng);
            let layer_name = format!("Cloned Model \u{2022} {model}");
            ItemRequest::new(
                GeneratorKind::Clones,
                model,
                Vec3::new(position_x, config.position_y, span.offset),
            )
            .with_rotation_y(rotation)
            .with_layer_name(layer_name)
        })
        .collect()
}

fn pick_model<'a>(config: &'a ClonesConfig, rng: &mut SeededRandom) -> &'a str {
    if config.models.len() > 1 {
        &config.models[rng.index(config.models.len())]
    } else {
        config.models.first().map(String::as_str).unwrap_or("")
    }
}

fn rotation_y(config: &ClonesConfig, direction: Direction, rng: &mut SeededRandom) -> f32 {
    if config.random_facing {
        return rng.next_f32() * 360.0;
    }
    match direction {
        Direction::Inbound | Direction::None => config.facing,
        Direction::Outbound => 180.0 - config.facing,
    }
}
