use crate::error::{AnalysisError, Result};
use nalgebra::Point2;
use serde::{Deserialize, Serialize};

/// Ordered anchor points of a polyline selection.
#[derive(Clone, Debug, PartialEq)]
pub struct Polyline {
    anchors: Vec<Point2<f64>>,
}

impl Polyline {
    /// Wrap already-built anchor points. Every coordinate must be finite.
    pub fn new(anchors: Vec<Point2<f64>>) -> Result<Self> {
        if let Some(index) = anchors
            .iter()
            .position(|p| !(p.x.is_finite() && p.y.is_finite()))
        {
            return Err(AnalysisError::NonFiniteAnchor { index });
        }
        Ok(Self { anchors })
    }

    /// Build from `[x, y]` pairs as delivered by a host selection.
    pub fn from_coords(coords: &[[f64; 2]]) -> Result<Self> {
        Self::new(coords.iter().map(|&[x, y]| Point2::new(x, y)).collect())
    }

    pub fn anchors(&self) -> &[Point2<f64>] {
        &self.anchors
    }

    pub fn anchor_count(&self) -> usize {
        self.anchors.len()
    }

    /// Number of straight pieces between consecutive anchors.
    pub fn segment_count(&self) -> usize {
        self.anchors.len().saturating_sub(1)
    }
}

/// Cytoplasm background measured in a separate region of the cell.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct BackgroundMeasurement {
    pub mean: f64,
    pub stddev: f64,
}

impl BackgroundMeasurement {
    pub fn new(mean: f64, stddev: f64) -> Self {
        Self { mean, stddev }
    }

    /// A failed or missing measurement shows up as a non-finite value.
    pub fn validate(&self) -> Result<()> {
        if self.mean.is_finite() && self.stddev.is_finite() {
            Ok(())
        } else {
            Err(AnalysisError::InvalidBackground {
                mean: self.mean,
                stddev: self.stddev,
            })
        }
    }
}
