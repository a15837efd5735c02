//! Blueprint generation for rail track.
use glam::Vec3;

use crate::config::{GeneratorKind, RailConfig};
use crate::host::ItemRequest;
use crate::segment::SegmentParams;

const RAIL_MODEL: &str = "rail";

pub(crate) fn blueprints(config: &RailConfig, params: &SegmentParams) -> Vec<ItemRequest> {
    if params.length <= 0.0 {
        return Vec::new();
    }

    // Gauge is the inner distance between rails; each rail sits half of it
    // from the segment center line.
    let half_gauge = config.gauge_mm as f32 / 2.0 / 1000.0;

    [-half_gauge, half_gauge]
        .into_iter()
        .map(|x| {
            ItemRequest::new(GeneratorKind::Rail, RAIL_MODEL, Vec3::new(x, 0.0, 0.0))
                .with_layer_name("Rail")
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_gauge_places_two_rails() {
        let params = SegmentParams::new(1, "rail").with_dimensions(3.0, 60.0);
        let items = blueprints(&RailConfig::default(), &params);
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].position.x, -0.7175);
        assert_eq!(items[1].position.x, 0.7175);
        assert!(items.iter().all(|i| i.model == "rail"));
    }

    #[test]
    fn narrow_gauge_moves_the_rails_inward() {
        let params = SegmentParams::new(1, "rail").with_dimensions(3.0, 60.0);
        let items = blueprints(&RailConfig::new(1067), &params);
        assert_eq!(items[1].position.x, 0.5335);
    }

    #[test]
    fn zero_length_places_nothing() {
        let params = SegmentParams::new(1, "rail").with_dimensions(3.0, 0.0);
        assert!(blueprints(&RailConfig::default(), &params).is_empty());
    }
}
