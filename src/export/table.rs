//! Labeled export rows built from a finalised session.
//!
//! Column and parameter labels are consumed verbatim by downstream tools and
//! must not change.

use crate::analyzer::CellRecord;
use crate::error::Result;
use crate::session::{Session, SessionSummary};
use serde::Serialize;

pub const SUMMARY_HEADER: [&str; 2] = ["Parameter", "Wert"];

pub const CELL_HEADER: [&str; 7] = [
    "Zell_ID",
    "Segmentanzahl",
    "Kernmembran_Mittelwert",
    "Kernmembran_StdDev",
    "Kernmembran_SEM",
    "Cytoplasma_Hintergrund",
    "Einzelne_Segment_Maxima",
];

pub const THRESHOLD_HEADER: [&str; 5] = [
    "Schwelle_Prozent",
    "Kernmembran_Mittelwert",
    "Kernmembran_SEM",
    "Verhaeltnis_Mittelwert",
    "Verhaeltnis_SEM",
];

/// One `(Parameter, Wert)` pair of the summary block.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SummaryRow {
    pub parameter: &'static str,
    pub value: String,
}

/// One row of the per-cell block.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CellRow {
    pub cell_id: usize,
    pub segment_count: usize,
    pub membrane_mean: f64,
    pub membrane_stddev: f64,
    pub membrane_sem: f64,
    pub background: f64,
    pub segment_maxima: Vec<f64>,
}

impl CellRow {
    pub fn from_record(cell_id: usize, cell: &CellRecord) -> Self {
        Self {
            cell_id,
            segment_count: cell.segment_count(),
            membrane_mean: cell.membrane.mean,
            membrane_stddev: cell.membrane.stddev,
            membrane_sem: cell.membrane.sem,
            background: cell.background.mean,
            segment_maxima: cell.segment_maxima(),
        }
    }

    /// Serialised fields in [`CELL_HEADER`] order.
    pub fn fields(&self) -> [String; 7] {
        [
            self.cell_id.to_string(),
            self.segment_count.to_string(),
            fixed6(self.membrane_mean),
            fixed6(self.membrane_stddev),
            fixed6(self.membrane_sem),
            fixed6(self.background),
            join_maxima(&self.segment_maxima),
        ]
    }
}

/// Threshold sensitivity row.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ThresholdRow {
    pub percent: f64,
    pub membrane_mean: f64,
    pub membrane_sem: f64,
    pub ratio_mean: f64,
    pub ratio_sem: f64,
}

impl ThresholdRow {
    pub fn fields(&self) -> [String; 5] {
        [
            format!("{}", self.percent),
            fixed6(self.membrane_mean),
            fixed6(self.membrane_sem),
            fixed6(self.ratio_mean),
            fixed6(self.ratio_sem),
        ]
    }
}

/// Everything written to the result table, in output order.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ExportTable {
    pub summary: Vec<SummaryRow>,
    pub cells: Vec<CellRow>,
    pub thresholds: Vec<ThresholdRow>,
}

impl ExportTable {
    /// Finalise `session` and build its table.
    pub fn from_session(session: &Session) -> Result<Self> {
        let summary = session.finalize()?;
        Ok(build_export_table(session, &summary))
    }
}

/// Summary block first, then one row per cell in insertion order.
pub fn build_export_table(session: &Session, summary: &SessionSummary) -> ExportTable {
    let row = |parameter, value| SummaryRow { parameter, value };
    let summary_rows = vec![
        row("Bildname", summary.image_name.clone()),
        row("Anzahl_Zellen", summary.cell_count.to_string()),
        row("Anzahl_Segmente_Gesamt", summary.total_segments.to_string()),
        row("Kernmembran_Gesamt_Mittelwert", fixed6(summary.membrane.mean)),
        row("Kernmembran_Gesamt_StdDev", fixed6(summary.membrane.stddev)),
        row("Kernmembran_Gesamt_SEM", fixed6(summary.membrane.sem)),
        row("Cytoplasma_Gesamt_Mittelwert", fixed6(summary.cytoplasm.mean)),
        row("Cytoplasma_Gesamt_StdDev", fixed6(summary.cytoplasm.stddev)),
        row("Cytoplasma_Gesamt_SEM", fixed6(summary.cytoplasm.sem)),
    ];

    let cells = session
        .cells()
        .iter()
        .enumerate()
        .map(|(i, cell)| CellRow::from_record(i + 1, cell))
        .collect();

    let thresholds = summary
        .thresholds
        .iter()
        .map(|t| ThresholdRow {
            percent: t.percent,
            membrane_mean: t.membrane.mean,
            membrane_sem: t.membrane.sem,
            ratio_mean: t.ratio.mean,
            ratio_sem: t.ratio.sem,
        })
        .collect();

    ExportTable {
        summary: summary_rows,
        cells,
        thresholds,
    }
}

fn fixed6(v: f64) -> String {
    format!("{v:.6}")
}

/// Segment maxima as `a;b;c`, three decimals each.
pub fn join_maxima(values: &[f64]) -> String {
    values
        .iter()
        .map(|v| format!("{v:.3}"))
        .collect::<Vec<_>>()
        .join(";")
}
