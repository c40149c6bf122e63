//! Validation failures raised by the analysis pipeline.
//!
//! Degenerate-but-valid outcomes (an empty segment window, a profile clamped
//! entirely to zero) are not errors; they surface as zero-valued statistics
//! and are counted on the [`crate::CellRecord`].

use thiserror::Error;

/// Input rejected before any statistics were computed.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AnalysisError {
    #[error("polyline needs at least {required} anchor points, got {found}")]
    TooFewAnchors { found: usize, required: usize },
    #[error("polyline has zero total arc length")]
    DegeneratePolyline,
    #[error("anchor {index} has a non-finite coordinate")]
    NonFiniteAnchor { index: usize },
    #[error("intensity profile is empty")]
    EmptyProfile,
    #[error("background measurement is missing or invalid (mean={mean}, stddev={stddev})")]
    InvalidBackground { mean: f64, stddev: f64 },
    #[error("threshold {0}% is outside 1..=100")]
    InvalidThreshold(f64),
    #[error("session contains no cells")]
    EmptySession,
}

pub type Result<T> = std::result::Result<T, AnalysisError>;
