//! I/O helpers for session input and JSON reports.
//!
//! - `load_session_input`: read the per-cell host measurements of one image.
//! - `SessionInput::analyze`: run every cell through an analyzer.
//! - `write_json_file`: pretty-print a serializable value to disk.
use crate::analyzer::MembraneAnalyzer;
use crate::error::Result as AnalysisResult;
use crate::metadata::{collect_metadata, Metadata};
use crate::session::Session;
use crate::types::{BackgroundMeasurement, Polyline};
use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// Measurements the host delivered for one cell.
#[derive(Clone, Debug, Deserialize)]
pub struct CellInput {
    pub background: BackgroundMeasurement,
    pub anchors: Vec<[f64; 2]>,
    pub profile: Vec<f64>,
}

impl CellInput {
    pub fn polyline(&self) -> AnalysisResult<Polyline> {
        Polyline::from_coords(&self.anchors)
    }
}

/// All cells recorded for one image, in acquisition order.
#[derive(Clone, Debug, Deserialize)]
pub struct SessionInput {
    pub image_name: String,
    #[serde(default)]
    pub image_height: Option<u32>,
    /// Raw image properties; only microscope fields are kept.
    #[serde(default)]
    pub properties: BTreeMap<String, String>,
    pub cells: Vec<CellInput>,
}

impl SessionInput {
    pub fn metadata(&self) -> Metadata {
        collect_metadata(
            self.image_height,
            self.properties
                .iter()
                .map(|(k, v)| (k.as_str(), v.as_str())),
        )
    }

    /// Empty session carrying this input's image name and metadata.
    pub fn new_session(&self) -> Session {
        Session::new(self.image_name.clone()).with_metadata(self.metadata())
    }

    /// Analyse cells in order. Invalid cells are logged and skipped and do
    /// not consume a cell id.
    pub fn analyze(&self, analyzer: &MembraneAnalyzer) -> Session {
        let mut session = self.new_session();
        for (i, cell) in self.cells.iter().enumerate() {
            let record = cell
                .polyline()
                .and_then(|poly| analyzer.analyze(&poly, &cell.profile, cell.background));
            match record {
                Ok(record) => {
                    let id = session.push(record);
                    info!("input cell {} stored as cell {:02}", i + 1, id);
                }
                Err(err) => warn!("input cell {} skipped: {err}", i + 1),
            }
        }
        session
    }
}

/// Read and parse a session input JSON file.
pub fn load_session_input(path: &Path) -> Result<SessionInput, String> {
    let data = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read input {}: {e}", path.display()))?;
    serde_json::from_str(&data)
        .map_err(|e| format!("Failed to parse input {}: {e}", path.display()))
}

/// Serialize a value as pretty JSON to `path`, creating parent directories.
pub fn write_json_file<T: Serialize>(path: &Path, value: &T) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| format!("Failed to serialize JSON for {}: {e}", path.display()))?;
    fs::write(path, json).map_err(|e| format!("Failed to write JSON {}: {e}", path.display()))
}

pub(crate) fn ensure_parent_dir(path: &Path) -> Result<(), String> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create {}: {e}", parent.display()))?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_minimal_session_input() {
        let json = r#"{
            "image_name": "cell_03.czi",
            "image_height": 512,
            "properties": { "DisplaySetting|Channel|DyeName #1": "mCherry" },
            "cells": [
                {
                    "background": { "mean": 5.0, "stddev": 0.4 },
                    "anchors": [[0, 0], [3, 0], [3, 4]],
                    "profile": [10, 10, 10, 50, 10, 10, 10, 10]
                }
            ]
        }"#;
        let input: SessionInput = serde_json::from_str(json).unwrap();
        assert_eq!(input.cells.len(), 1);
        assert_eq!(input.cells[0].polyline().unwrap().anchor_count(), 3);
        let session = input.new_session();
        assert_eq!(session.image_name, "cell_03.czi");
        assert_eq!(session.metadata["DyeName"], "mCherry");
        assert_eq!(session.metadata["Image_Height"], "512");
    }

    #[test]
    fn invalid_cells_are_skipped_without_consuming_ids() {
        let _ = env_logger::builder().is_test(true).try_init();
        let json = r#"{
            "image_name": "mixed.tif",
            "cells": [
                {
                    "background": { "mean": 5.0, "stddev": 0.0 },
                    "anchors": [[0, 0], [3, 0], [3, 4]],
                    "profile": [10, 10, 10, 50, 10, 10, 10, 10]
                },
                {
                    "background": { "mean": 5.0, "stddev": 0.0 },
                    "anchors": [[0, 0], [3, 0]],
                    "profile": [10, 10, 10, 50]
                },
                {
                    "background": { "mean": 5.0, "stddev": 0.0 },
                    "anchors": [[0, 0], [3, 0], [3, 4]],
                    "profile": []
                },
                {
                    "background": { "mean": 2.0, "stddev": 0.0 },
                    "anchors": [[0, 0], [1, 0], [2, 0], [3, 0]],
                    "profile": [4, 4, 9, 4, 4, 9, 4, 4, 9, 4]
                }
            ]
        }"#;
        let input: SessionInput = serde_json::from_str(json).unwrap();
        let session = input.analyze(&MembraneAnalyzer::default());

        assert_eq!(session.cell_count(), 2);
        assert_eq!(session.cells()[0].segment_count(), 2);
        assert_eq!(session.cells()[1].segment_count(), 3);
        assert_eq!(session.cells()[1].background.mean, 2.0);
        assert_eq!(session.total_segments(), 5);

        let table = crate::export::ExportTable::from_session(&session).unwrap();
        let ids: Vec<usize> = table.cells.iter().map(|c| c.cell_id).collect();
        assert_eq!(ids, vec![1, 2]);
        assert_eq!(table.summary[1].value, "2");
        assert_eq!(table.summary[2].value, "5");
    }
}
