#![allow(dead_code)]

use membrane_profile::{BackgroundMeasurement, Polyline};

/// Right-angle polyline (0,0) -> (3,0) -> (3,4), arc lengths 3 and 4.
pub fn right_angle_polyline() -> Polyline {
    Polyline::from_coords(&[[0.0, 0.0], [3.0, 0.0], [3.0, 4.0]]).expect("finite anchors")
}

/// Eight-sample profile with a single bright pixel at index 3.
pub fn spike_profile() -> Vec<f64> {
    vec![10.0, 10.0, 10.0, 50.0, 10.0, 10.0, 10.0, 10.0]
}

/// Straight polyline along x with `segments` equal pieces of `piece` length.
pub fn straight_polyline(segments: usize, piece: f64) -> Polyline {
    let coords: Vec<[f64; 2]> = (0..=segments).map(|i| [i as f64 * piece, 0.0]).collect();
    Polyline::from_coords(&coords).expect("finite anchors")
}

/// Flat profile of `len` samples with one bright sample in the middle of each
/// of `segments` equal pieces.
pub fn peaked_profile(len: usize, level: f64, peaks: &[f64]) -> Vec<f64> {
    assert!(len > 2 * peaks.len(), "profile too short for {} peaks", peaks.len());
    let mut p = vec![level; len];
    let step = (len - 1) as f64 / peaks.len() as f64;
    for (s, &peak) in peaks.iter().enumerate() {
        let centre = ((s as f64 + 0.5) * step).floor() as usize;
        p[centre] = peak;
    }
    p
}

pub fn background(mean: f64) -> BackgroundMeasurement {
    BackgroundMeasurement::new(mean, 0.0)
}
