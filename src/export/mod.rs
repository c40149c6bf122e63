pub mod table;
pub mod writer;

pub use self::table::{
    build_export_table, join_maxima, CellRow, ExportTable, SummaryRow, ThresholdRow, CELL_HEADER,
    SUMMARY_HEADER, THRESHOLD_HEADER,
};
pub use self::writer::{write_table, write_table_file, write_thresholds, write_thresholds_file};
