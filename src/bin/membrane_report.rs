use membrane_profile::config::report;
use membrane_profile::export::{build_export_table, write_table_file, write_thresholds_file};
use membrane_profile::io::{load_session_input, write_json_file};
use membrane_profile::{MembraneAnalyzer, Session, SessionSummary};
use serde::Serialize;
use std::env;
use std::path::Path;

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let config_path = env::args().nth(1).ok_or_else(usage)?;
    let config = report::load_config(Path::new(&config_path))?;
    config
        .analysis
        .validate()
        .map_err(|e| format!("Invalid analysis parameters: {e}"))?;

    let input = load_session_input(&config.input)?;
    let analyzer = MembraneAnalyzer::new(config.analysis.clone());
    let session = input.analyze(&analyzer);
    let summary = session
        .finalize()
        .map_err(|e| format!("Cannot finalize session for {}: {e}", input.image_name))?;

    print_text_summary(&summary);

    let table = build_export_table(&session, &summary);
    write_table_file(&table, &config.output.table_csv)?;
    println!("Result table written to {}", config.output.table_csv.display());

    if let Some(path) = &config.output.threshold_csv {
        write_thresholds_file(&table, path)?;
        println!("Threshold comparison written to {}", path.display());
    }

    if let Some(path) = &config.output.report_json {
        write_json_file(path, &SessionReport { session: &session, summary: &summary })?;
        println!("JSON report written to {}", path.display());
    }

    Ok(())
}

fn print_text_summary(summary: &SessionSummary) {
    println!("Session summary");
    println!("  image: {}", summary.image_name);
    println!("  cells: {}", summary.cell_count);
    println!("  segments: {}", summary.total_segments);
    println!(
        "  membrane: {:.3} +/- {:.3} (sd {:.3})",
        summary.membrane.mean, summary.membrane.sem, summary.membrane.stddev
    );
    println!(
        "  cytoplasm: {:.3} +/- {:.3} (sd {:.3})",
        summary.cytoplasm.mean, summary.cytoplasm.sem, summary.cytoplasm.stddev
    );
    println!(
        "  membrane/cytoplasm: {:.3} +/- {:.3}",
        summary.ratio.mean, summary.ratio.sem
    );
}

fn usage() -> String {
    "Usage: membrane_report <config.json>".to_string()
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SessionReport<'a> {
    session: &'a Session,
    summary: &'a SessionSummary,
}
