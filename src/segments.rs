//! Per-segment statistics over the profile.
//!
//! Each segment is summarised twice:
//!
//! - its repaired half-open window of the background-corrected profile gives
//!   the maximum, mean and population standard deviation ([`WindowStats`]);
//!   an empty window is a valid, recorded outcome and yields zeros;
//! - its closed anchor span of the raw profile gives the mean of the
//!   brightest samples at the configured threshold, which feeds the
//!   membrane / cytoplasm intensity ratios.

use crate::geometry::{SegmentLayout, SegmentWindow};
use crate::stats::{top_percent_mean, WindowStats};
use log::{debug, warn};
use serde::Serialize;

/// Statistics of one segment between two consecutive anchors.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SegmentStats {
    /// 0-based segment index along the polyline.
    pub index: usize,
    pub window: SegmentWindow,
    pub span: SegmentWindow,
    pub max: f64,
    pub mean: f64,
    pub stddev: f64,
    /// Mean of the top-`threshold` % raw samples of the span.
    pub top_mean: f64,
}

impl SegmentStats {
    pub fn is_empty(&self) -> bool {
        self.window.is_empty()
    }
}

/// Compute [`SegmentStats`] for every segment of `layout`, in order.
pub fn segment_stats(
    raw: &[f64],
    corrected: &[f64],
    layout: &SegmentLayout,
    threshold_percent: f64,
) -> Vec<SegmentStats> {
    layout
        .windows
        .iter()
        .zip(&layout.spans)
        .enumerate()
        .map(|(index, (window, span))| {
            let values = window.slice(corrected);
            if values.is_empty() {
                warn!(
                    "segment {} has an empty window [{}, {}) after repair; statistics set to zero",
                    index + 1,
                    window.start,
                    window.end
                );
            }
            let w = WindowStats::from_values(values);
            let top_mean = top_percent_mean(span.slice(raw), threshold_percent);
            debug!(
                "segment {}: {} samples, max={:.3} mean={:.3} sd={:.3} raw top{}%={:.3}",
                index + 1,
                w.count,
                w.max,
                w.mean,
                w.stddev,
                threshold_percent,
                top_mean
            );
            SegmentStats {
                index,
                window: *window,
                span: *span,
                max: w.max,
                mean: w.mean,
                stddev: w.stddev,
                top_mean,
            }
        })
        .collect()
}

/// Mean of each span's top-`percent` % raw samples, averaged over the
/// non-empty spans. `0` when every span is empty.
pub fn threshold_membrane_mean(raw: &[f64], spans: &[SegmentWindow], percent: f64) -> f64 {
    let means: Vec<f64> = spans
        .iter()
        .map(|w| w.slice(raw))
        .filter(|v| !v.is_empty())
        .map(|v| top_percent_mean(v, percent))
        .collect();
    if means.is_empty() {
        0.0
    } else {
        means.iter().sum::<f64>() / means.len() as f64
    }
}
