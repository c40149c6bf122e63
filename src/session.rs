//! Accumulation of cell records for one image and the cross-cell summary.
//!
//! A [`Session`] owns the ordered cell records of a run. Cells are appended
//! one at a time by the caller's control loop; [`Session::finalize`] reduces
//! them to a [`SessionSummary`]:
//!
//! - membrane: statistics of the per-cell membrane means,
//! - cytoplasm: statistics of the per-cell background means,
//! - ratio: statistics of the per-cell membrane / background ratios,
//! - one [`ThresholdSummary`] per comparison threshold, over the cells that
//!   were evaluated at that percentage.
//!
//! All of them use the unbiased stddev and `SEM = stddev / sqrt(cell_count)`.

use crate::analyzer::{CellRecord, ThresholdMean};
use crate::error::{AnalysisError, Result};
use crate::metadata::Metadata;
use crate::stats::Summary;
use log::info;
use serde::Serialize;

/// Cells analysed for one image, in acquisition order.
#[derive(Clone, Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub image_name: String,
    pub metadata: Metadata,
    cells: Vec<CellRecord>,
    total_segments: usize,
}

/// Membrane mean and ratio statistics across cells at one threshold.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ThresholdSummary {
    pub percent: f64,
    pub membrane: Summary,
    pub ratio: Summary,
}

/// Grand statistics of a finalised session.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionSummary {
    pub image_name: String,
    pub cell_count: usize,
    pub total_segments: usize,
    pub membrane: Summary,
    pub cytoplasm: Summary,
    pub ratio: Summary,
    pub thresholds: Vec<ThresholdSummary>,
}

impl Session {
    pub fn new(image_name: impl Into<String>) -> Self {
        Self {
            image_name: image_name.into(),
            ..Default::default()
        }
    }

    pub fn with_metadata(mut self, metadata: Metadata) -> Self {
        self.metadata = metadata;
        self
    }

    /// Append a finished cell and return its 1-based id.
    pub fn push(&mut self, cell: CellRecord) -> usize {
        self.total_segments += cell.segment_count();
        self.cells.push(cell);
        let id = self.cells.len();
        info!(
            "cell {:02} stored ({} segments, {} total)",
            id,
            self.cells[id - 1].segment_count(),
            self.total_segments
        );
        id
    }

    pub fn cells(&self) -> &[CellRecord] {
        &self.cells
    }

    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    pub fn total_segments(&self) -> usize {
        self.total_segments
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Reduce all cells to session statistics. Fails for an empty session.
    pub fn finalize(&self) -> Result<SessionSummary> {
        let membrane = self.summarize(|c| c.membrane.mean)?;
        let cytoplasm = self.summarize(|c| c.background.mean)?;
        let ratio = self.summarize(|c| c.ratio)?;

        let thresholds = self
            .threshold_percents()
            .into_iter()
            .map(|percent| ThresholdSummary {
                percent,
                membrane: self.threshold_summary(percent, |m| m.membrane_mean),
                ratio: self.threshold_summary(percent, |m| m.ratio),
            })
            .collect();

        info!(
            "session '{}' finalised: {} cells, {} segments, membrane {:.3} +/- {:.3} (SEM), cytoplasm {:.3} +/- {:.3} (SEM)",
            self.image_name,
            self.cells.len(),
            self.total_segments,
            membrane.mean,
            membrane.sem,
            cytoplasm.mean,
            cytoplasm.sem
        );

        Ok(SessionSummary {
            image_name: self.image_name.clone(),
            cell_count: self.cells.len(),
            total_segments: self.total_segments,
            membrane,
            cytoplasm,
            ratio,
            thresholds,
        })
    }

    /// Distinct threshold percentages across all cells, first-seen order.
    fn threshold_percents(&self) -> Vec<f64> {
        let mut percents: Vec<f64> = Vec::new();
        for t in self.cells.iter().flat_map(|c| &c.threshold_means) {
            if !percents.contains(&t.percent) {
                percents.push(t.percent);
            }
        }
        percents
    }

    fn threshold_summary(&self, percent: f64, value: impl Fn(&ThresholdMean) -> f64) -> Summary {
        let values: Vec<f64> = self
            .cells
            .iter()
            .filter_map(|c| c.threshold_means.iter().find(|t| t.percent == percent))
            .map(value)
            .collect();
        Summary::from_values(&values).unwrap_or_default()
    }

    fn summarize(&self, value: impl Fn(&CellRecord) -> f64) -> Result<Summary> {
        let values: Vec<f64> = self.cells.iter().map(value).collect();
        Summary::from_values(&values).ok_or(AnalysisError::EmptySession)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::BackgroundMeasurement;

    fn cell(mean: f64, background: f64, segments: usize) -> CellRecord {
        CellRecord {
            background: BackgroundMeasurement::new(background, 0.0),
            profile_len: 0,
            clamped_samples: 0,
            segments: (0..segments)
                .map(|index| crate::segments::SegmentStats {
                    index,
                    window: crate::geometry::SegmentWindow { start: 0, end: 0 },
                    span: crate::geometry::SegmentWindow { start: 0, end: 0 },
                    max: mean,
                    mean: 0.0,
                    stddev: 0.0,
                    top_mean: 0.0,
                })
                .collect(),
            membrane: Summary::from_values(&[mean]).unwrap(),
            ratio: mean / background,
            threshold_means: vec![ThresholdMean {
                percent: 50.0,
                membrane_mean: mean,
                ratio: mean / background,
            }],
        }
    }

    #[test]
    fn empty_session_cannot_be_finalized() {
        assert_eq!(
            Session::new("img").finalize().unwrap_err(),
            AnalysisError::EmptySession
        );
    }

    #[test]
    fn two_cells_give_expected_summary() {
        let mut s = Session::new("img");
        assert_eq!(s.push(cell(4.0, 2.0, 2)), 1);
        assert_eq!(s.push(cell(6.0, 2.0, 3)), 2);
        assert_eq!(s.total_segments(), 5);
        assert_eq!(
            s.total_segments(),
            s.cells().iter().map(CellRecord::segment_count).sum::<usize>()
        );

        let sum = s.finalize().unwrap();
        assert_eq!(sum.cell_count, 2);
        assert_eq!(sum.membrane.mean, 5.0);
        assert!((sum.membrane.stddev - 2f64.sqrt()).abs() < 1e-12);
        assert!((sum.membrane.sem - 1.0).abs() < 1e-12);
        assert_eq!(sum.cytoplasm.mean, 2.0);
        assert_eq!(sum.cytoplasm.stddev, 0.0);
        assert_eq!(sum.ratio.mean, 2.5);
        assert_eq!(sum.thresholds.len(), 1);
        assert_eq!(sum.thresholds[0].membrane.mean, 5.0);
    }

    fn evaluated_at(mut c: CellRecord, percents: &[f64]) -> CellRecord {
        c.threshold_means = percents
            .iter()
            .map(|&percent| ThresholdMean {
                percent,
                membrane_mean: c.membrane.mean + percent,
                ratio: percent / 100.0,
            })
            .collect();
        c
    }

    #[test]
    fn thresholds_are_matched_by_percent() {
        let mut s = Session::new("img");
        s.push(evaluated_at(cell(4.0, 2.0, 2), &[10.0, 50.0]));
        s.push(evaluated_at(cell(6.0, 2.0, 2), &[50.0]));
        s.push(evaluated_at(cell(8.0, 2.0, 2), &[50.0, 30.0]));

        let sum = s.finalize().unwrap();
        let percents: Vec<f64> = sum.thresholds.iter().map(|t| t.percent).collect();
        assert_eq!(percents, vec![10.0, 50.0, 30.0]);

        // 50 % appears in every cell at a different position.
        let at50 = &sum.thresholds[1];
        assert_eq!(at50.membrane.n, 3);
        assert_eq!(at50.membrane.mean, 56.0);
        assert_eq!(at50.ratio.mean, 0.5);

        assert_eq!(sum.thresholds[0].membrane.n, 1);
        assert_eq!(sum.thresholds[0].membrane.mean, 14.0);
        assert_eq!(sum.thresholds[2].membrane.n, 1);
        assert_eq!(sum.thresholds[2].membrane.mean, 38.0);
    }

    #[test]
    fn single_cell_has_zero_spread() {
        let mut s = Session::new("img");
        s.push(cell(3.0, 1.0, 2));
        let sum = s.finalize().unwrap();
        assert_eq!(sum.membrane.stddev, 0.0);
        assert_eq!(sum.membrane.sem, 0.0);
    }
}
