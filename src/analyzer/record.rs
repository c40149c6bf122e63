use crate::segments::SegmentStats;
use crate::stats::Summary;
use crate::types::BackgroundMeasurement;
use serde::Serialize;

/// Raw membrane intensity of a cell at one top-percentage threshold.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ThresholdMean {
    pub percent: f64,
    pub membrane_mean: f64,
    /// `membrane_mean / background`, `0` for a non-positive background.
    pub ratio: f64,
}

/// Finalised result for one analysed cell.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CellRecord {
    pub background: BackgroundMeasurement,
    pub profile_len: usize,
    /// Samples clamped to zero by the background subtraction.
    pub clamped_samples: usize,
    pub segments: Vec<SegmentStats>,
    /// Mean / sample stddev / SEM of the segment maxima.
    pub membrane: Summary,
    /// Raw top-`threshold_percent` membrane mean over the background.
    pub ratio: f64,
    pub threshold_means: Vec<ThresholdMean>,
}

impl CellRecord {
    pub fn segment_count(&self) -> usize {
        self.segments.len()
    }

    pub fn segment_maxima(&self) -> Vec<f64> {
        self.segments.iter().map(|s| s.max).collect()
    }

    pub fn empty_segments(&self) -> usize {
        self.segments.iter().filter(|s| s.is_empty()).count()
    }
}

/// Ratio of a membrane value to the background, `0` when the background is
/// not positive.
pub fn background_ratio(value: f64, background: f64) -> f64 {
    if background > 0.0 {
        value / background
    } else {
        0.0
    }
}
