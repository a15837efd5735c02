//! Fit placement packing model footprints end to end along the segment.
//!
//! Used for content with per-model extents (building frontages): models are
//! cycled in order and advanced by their own span plus the configured gap,
//! starting from the positive segment end. An item that would overhang the
//! far end is dropped.

/// One packed span: which model to place and where its center lands.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FitSpan {
    /// Index into the cycled model list.
    pub model_index: usize,
    /// Center offset from segment center, in meters.
    pub offset: f32,
}

/// Packs the given model spans along a segment of `length` meters.
///
/// `spans` holds each model's extent along the length axis; `spacing` is the
/// gap inserted between consecutive items.
pub fn fit_spans(length: f32, spacing: f32, spans: &[f32]) -> Vec<FitSpan> {
    if spans.is_empty() || length <= 0.0 {
        return Vec::new();
    }

    let half = length / 2.0;
    let mut out = Vec::new();
    let mut cursor = half;
    let mut index = 0usize;

    while cursor > -half {
        let model_index = index % spans.len();
        let span = spans[model_index].max(0.0);
        if cursor - span < -half {
            break;
        }

        out.push(FitSpan {
            model_index,
            offset: cursor - span / 2.0,
        });

        let advance = span + spacing.max(0.0);
        if advance <= 0.0 {
            break;
        }
        cursor -= advance;
        index += 1;
    }

    out
}
