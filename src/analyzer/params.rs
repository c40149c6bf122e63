//! Parameters configuring the per-cell analysis.
//!
//! Defaults reproduce the interactive tool: a polyline needs at least three
//! anchors, segment top-means use the brightest 50 % of samples, and the
//! threshold sensitivity table covers 10 % to 60 % in steps of ten.

use crate::error::{AnalysisError, Result};
use serde::Deserialize;

/// Knobs of [`super::MembraneAnalyzer`].
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct AnalysisParams {
    /// Percentage (1..=100) of brightest samples averaged per segment.
    pub threshold_percent: f64,
    /// Additional thresholds evaluated for the sensitivity table.
    pub comparison_thresholds: Vec<f64>,
    /// Minimum number of polyline anchors accepted for a cell. Values below
    /// 3 are raised to 3.
    pub min_anchors: usize,
}

impl Default for AnalysisParams {
    fn default() -> Self {
        Self {
            threshold_percent: 50.0,
            comparison_thresholds: vec![10.0, 20.0, 30.0, 40.0, 50.0, 60.0],
            min_anchors: 3,
        }
    }
}

impl AnalysisParams {
    /// Reject thresholds outside `1..=100`.
    pub fn validate(&self) -> Result<()> {
        std::iter::once(self.threshold_percent)
            .chain(self.comparison_thresholds.iter().copied())
            .try_for_each(check_threshold)
    }
}

fn check_threshold(percent: f64) -> Result<()> {
    if (1.0..=100.0).contains(&percent) {
        Ok(())
    } else {
        Err(AnalysisError::InvalidThreshold(percent))
    }
}
