use membrane_profile::prelude::*;

fn main() {
    // Demo stub: one synthetic cell with a bright spot on the second segment
    let polyline = Polyline::from_coords(&[[0.0, 0.0], [3.0, 0.0], [3.0, 4.0]])
        .expect("finite demo anchors");
    let profile = [10.0, 10.0, 10.0, 50.0, 10.0, 10.0, 10.0, 10.0];
    let background = BackgroundMeasurement::new(5.0, 0.5);

    let analyzer = MembraneAnalyzer::new(AnalysisParams::default());
    let mut session = Session::new("demo");
    match analyzer.analyze(&polyline, &profile, background) {
        Ok(cell) => {
            session.push(cell);
        }
        Err(err) => {
            eprintln!("Error: {err}");
            std::process::exit(1);
        }
    }
    match session.finalize() {
        Ok(summary) => println!(
            "cells={} segments={} membrane_mean={:.3} sem={:.3}",
            summary.cell_count, summary.total_segments, summary.membrane.mean, summary.membrane.sem
        ),
        Err(err) => {
            eprintln!("Error: {err}");
            std::process::exit(1);
        }
    }
}
