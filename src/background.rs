//! Background subtraction with zero clamping.

use serde::Serialize;

/// Profile after subtracting the cytoplasm background.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CorrectedProfile {
    pub values: Vec<f64>,
    /// Samples strictly below the background, now clamped to `0`.
    pub clamped: usize,
}

impl CorrectedProfile {
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// True when the background swallowed the whole (non-empty) profile.
    pub fn fully_clamped(&self) -> bool {
        !self.values.is_empty() && self.clamped == self.values.len()
    }
}

/// `max(raw[i] - background, 0)` for every sample.
///
/// Any finite background is accepted; a negative one clamps nothing and one
/// above the profile maximum clamps everything.
pub fn subtract_background(raw: &[f64], background: f64) -> CorrectedProfile {
    let mut clamped = 0usize;
    let values = raw
        .iter()
        .map(|&v| {
            if v < background {
                clamped += 1;
                0.0
            } else {
                v - background
            }
        })
        .collect();
    CorrectedProfile { values, clamped }
}
