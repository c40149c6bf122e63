//! Per-cell pipeline: validation, arc-length windows, background subtraction,
//! segment statistics and the reduction of segment maxima to one cell record.
//!
//! The analyzer is pure: identical `(polyline, profile, background)` inputs
//! always produce bit-identical [`CellRecord`]s.

pub mod params;
pub mod record;

pub use params::AnalysisParams;
pub use record::{background_ratio, CellRecord, ThresholdMean};

use crate::background::subtract_background;
use crate::error::{AnalysisError, Result};
use crate::geometry::polyline_layout;
use crate::segments::{segment_stats, threshold_membrane_mean};
use crate::stats::Summary;
use crate::types::{BackgroundMeasurement, Polyline};
use log::{debug, info, warn};

/// Turns one cell's host measurements into a [`CellRecord`].
#[derive(Clone, Debug, Default)]
pub struct MembraneAnalyzer {
    params: AnalysisParams,
}

impl MembraneAnalyzer {
    pub fn new(params: AnalysisParams) -> Self {
        Self { params }
    }

    /// Analyse one cell.
    ///
    /// Fails when the polyline has fewer than `min_anchors` (never below 3)
    /// anchors or zero length, the profile is empty, the background is not
    /// finite, or a threshold is out of range. Empty segment windows and
    /// clamped samples are not errors.
    pub fn analyze(
        &self,
        polyline: &Polyline,
        profile: &[f64],
        background: BackgroundMeasurement,
    ) -> Result<CellRecord> {
        self.params.validate()?;
        let required = self.params.min_anchors.max(3);
        if polyline.anchor_count() < required {
            return Err(AnalysisError::TooFewAnchors {
                found: polyline.anchor_count(),
                required,
            });
        }
        if profile.is_empty() {
            return Err(AnalysisError::EmptyProfile);
        }
        background.validate()?;

        let layout = polyline_layout(polyline, profile.len())?;
        debug!(
            "{} anchors, profile of {} samples -> breakpoints {:?}",
            polyline.anchor_count(),
            profile.len(),
            layout.breakpoints
        );

        let corrected = subtract_background(profile, background.mean);
        if corrected.fully_clamped() {
            warn!(
                "background {:.3} exceeds every profile sample; corrected profile is all zero",
                background.mean
            );
        } else if corrected.clamped > 0 {
            debug!(
                "{} of {} samples clamped below background {:.3}",
                corrected.clamped,
                corrected.len(),
                background.mean
            );
        }

        let segments = segment_stats(
            profile,
            &corrected.values,
            &layout,
            self.params.threshold_percent,
        );
        let maxima: Vec<f64> = segments.iter().map(|s| s.max).collect();
        // At least one segment exists once the anchor check passed.
        let membrane = Summary::from_values(&maxima).unwrap_or_default();

        let threshold_means = self
            .params
            .comparison_thresholds
            .iter()
            .map(|&percent| {
                let membrane_mean = threshold_membrane_mean(profile, &layout.spans, percent);
                ThresholdMean {
                    percent,
                    membrane_mean,
                    ratio: background_ratio(membrane_mean, background.mean),
                }
            })
            .collect();

        let raw_membrane =
            threshold_membrane_mean(profile, &layout.spans, self.params.threshold_percent);

        info!(
            "cell analysed: {} segments, membrane mean={:.3} sd={:.3} sem={:.3}, background={:.3}",
            segments.len(),
            membrane.mean,
            membrane.stddev,
            membrane.sem,
            background.mean
        );

        Ok(CellRecord {
            background,
            profile_len: profile.len(),
            clamped_samples: corrected.clamped,
            ratio: background_ratio(raw_membrane, background.mean),
            segments,
            membrane,
            threshold_means,
        })
    }
}

/// Analyse one cell with default parameters.
pub fn analyze_cell(
    polyline: &Polyline,
    profile: &[f64],
    background: BackgroundMeasurement,
) -> Result<CellRecord> {
    MembraneAnalyzer::default().analyze(polyline, profile, background)
}
