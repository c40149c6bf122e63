#![doc = include_str!("../README.md")]

// Public modules (stable-ish surface)
pub mod analyzer;
pub mod error;
pub mod export;
pub mod session;
pub mod types;

// Building blocks of the per-cell pipeline, usable on their own.
pub mod background;
pub mod geometry;
pub mod segments;
pub mod stats;

// Host-facing helpers for the batch tool.
pub mod config;
pub mod io;
pub mod metadata;

// --- High-level re-exports -------------------------------------------------

pub use crate::analyzer::{analyze_cell, AnalysisParams, CellRecord, MembraneAnalyzer};
pub use crate::error::AnalysisError;
pub use crate::export::{build_export_table, ExportTable};
pub use crate::session::{Session, SessionSummary};
pub use crate::types::{BackgroundMeasurement, Polyline};

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
pub mod prelude {
    pub use crate::{
        AnalysisParams, BackgroundMeasurement, CellRecord, ExportTable, MembraneAnalyzer,
        Polyline, Session, SessionSummary,
    };
}
