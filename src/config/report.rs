use crate::analyzer::AnalysisParams;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Clone, Debug, Deserialize)]
pub struct OutputConfig {
    pub table_csv: PathBuf,
    #[serde(default)]
    pub threshold_csv: Option<PathBuf>,
    #[serde(default)]
    pub report_json: Option<PathBuf>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct ReportConfig {
    #[serde(rename = "input")]
    pub input: PathBuf,
    #[serde(default)]
    pub analysis: AnalysisParams,
    pub output: OutputConfig,
}

pub fn load_config(path: &Path) -> Result<ReportConfig, String> {
    let data = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
    parse_config(&data).map_err(|e| format!("Failed to parse config {}: {e}", path.display()))
}

pub fn parse_config(data: &str) -> Result<ReportConfig, serde_json::Error> {
    serde_json::from_str(data)
}
