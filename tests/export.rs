mod common;

use common::synthetic_cell::{background, right_angle_polyline, spike_profile};
use membrane_profile::export::{
    write_table, write_table_file, write_thresholds, ExportTable, CELL_HEADER, THRESHOLD_HEADER,
};
use membrane_profile::{MembraneAnalyzer, Session};

fn reference_session() -> Session {
    let _ = env_logger::builder().is_test(true).try_init();
    let mut session = Session::new("img.czi");
    let cell = MembraneAnalyzer::default()
        .analyze(&right_angle_polyline(), &spike_profile(), background(5.0))
        .expect("reference cell is valid");
    session.push(cell);
    session
}

fn render(table: &ExportTable) -> String {
    let mut buf = Vec::new();
    write_table(table, &mut buf).expect("writing to memory");
    String::from_utf8(buf).unwrap().replace("\r\n", "\n")
}

#[test]
fn table_has_summary_then_cells() {
    let session = reference_session();
    let table = ExportTable::from_session(&session).unwrap();

    let labels: Vec<&str> = table.summary.iter().map(|r| r.parameter).collect();
    assert_eq!(labels[0], "Bildname");
    assert_eq!(labels.len(), 9);
    assert_eq!(table.summary[0].value, "img.czi");
    assert_eq!(table.summary[1].value, "1");
    assert_eq!(table.summary[2].value, "2");

    assert_eq!(table.cells.len(), 1);
    assert_eq!(table.cells[0].cell_id, 1);
    assert_eq!(table.cells[0].segment_maxima, vec![5.0, 45.0]);
}

#[test]
fn csv_layout_matches_reference() {
    let session = reference_session();
    let table = ExportTable::from_session(&session).unwrap();
    let text = render(&table);

    let expected = "\
Parameter,Wert
Bildname,img.czi
Anzahl_Zellen,1
Anzahl_Segmente_Gesamt,2
Kernmembran_Gesamt_Mittelwert,25.000000
Kernmembran_Gesamt_StdDev,0.000000
Kernmembran_Gesamt_SEM,0.000000
Cytoplasma_Gesamt_Mittelwert,5.000000
Cytoplasma_Gesamt_StdDev,0.000000
Cytoplasma_Gesamt_SEM,0.000000

Zell_ID,Segmentanzahl,Kernmembran_Mittelwert,Kernmembran_StdDev,Kernmembran_SEM,Cytoplasma_Hintergrund,Einzelne_Segment_Maxima
1,2,25.000000,28.284271,20.000000,5.000000,5.000;45.000
";
    assert_eq!(text, expected);
    assert_eq!(CELL_HEADER.join(","), expected.lines().nth(11).unwrap());
}

#[test]
fn cell_rows_keep_insertion_order() {
    let mut session = reference_session();
    let analyzer = MembraneAnalyzer::default();
    for bg in [1.0, 9.0] {
        let cell = analyzer
            .analyze(&right_angle_polyline(), &spike_profile(), background(bg))
            .unwrap();
        session.push(cell);
    }
    let table = ExportTable::from_session(&session).unwrap();
    let ids: Vec<usize> = table.cells.iter().map(|c| c.cell_id).collect();
    assert_eq!(ids, vec![1, 2, 3]);
    let bgs: Vec<f64> = table.cells.iter().map(|c| c.background).collect();
    assert_eq!(bgs, vec![5.0, 1.0, 9.0]);
}

#[test]
fn threshold_table_has_one_row_per_threshold() {
    let session = reference_session();
    let table = ExportTable::from_session(&session).unwrap();
    let mut buf = Vec::new();
    write_thresholds(&table, &mut buf).unwrap();
    let text = String::from_utf8(buf).unwrap().replace("\r\n", "\n");
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines[0], THRESHOLD_HEADER.join(","));
    assert_eq!(lines.len(), 7);
    // 50 %: raw span top-means 30 and 70/3 -> 80/3, ratio over background 5.
    assert_eq!(lines[5], "50,26.666667,0.000000,5.333333,0.000000");
}

#[test]
fn empty_session_cannot_be_exported() {
    assert!(ExportTable::from_session(&Session::new("img")).is_err());
}

#[test]
fn table_file_is_created_with_parent_dirs() {
    let session = reference_session();
    let table = ExportTable::from_session(&session).unwrap();
    let dir = std::env::temp_dir().join(format!("membrane_profile_export_{}", std::process::id()));
    let path = dir.join("nested").join("results.csv");
    write_table_file(&table, &path).unwrap();
    let text = std::fs::read_to_string(&path).unwrap().replace("\r\n", "\n");
    assert_eq!(text, render(&table));
    let _ = std::fs::remove_dir_all(&dir);
}
