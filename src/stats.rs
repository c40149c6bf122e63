//! Descriptive statistics shared by the segment, cell and session stages.
//!
//! Two spread conventions coexist and must not be mixed up:
//!
//! - [`WindowStats`] normalises by the sample count (population form). It is
//!   used for the samples inside one segment window.
//! - [`Summary`] uses the unbiased `n - 1` estimator and reports the SEM as
//!   `stddev / sqrt(n)`. It is used when reducing per-segment maxima to a cell
//!   and per-cell values to a session. With a single value both spread and
//!   SEM are `0`.

use serde::Serialize;

/// Max, mean and population stddev of one profile window.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct WindowStats {
    pub count: usize,
    pub max: f64,
    pub mean: f64,
    pub stddev: f64,
}

impl WindowStats {
    /// Empty input yields all zeros.
    pub fn from_values(values: &[f64]) -> Self {
        if values.is_empty() {
            return Self::default();
        }
        let n = values.len() as f64;
        let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let mean = values.iter().sum::<f64>() / n;
        let var = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n;
        Self {
            count: values.len(),
            max,
            mean,
            stddev: var.sqrt(),
        }
    }
}

/// Mean, unbiased sample stddev and standard error of the mean.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct Summary {
    pub n: usize,
    pub mean: f64,
    pub stddev: f64,
    pub sem: f64,
}

impl Summary {
    /// `None` for an empty slice; callers decide whether that is an error.
    pub fn from_values(values: &[f64]) -> Option<Self> {
        if values.is_empty() {
            return None;
        }
        let n = values.len();
        let mean = values.iter().sum::<f64>() / n as f64;
        let stddev = sample_stddev(values, mean);
        Some(Self {
            n,
            mean,
            stddev,
            sem: stddev / (n as f64).sqrt(),
        })
    }
}

/// Unbiased standard deviation around `mean`; `0` for fewer than two values.
pub fn sample_stddev(values: &[f64], mean: f64) -> f64 {
    if values.len() <= 1 {
        return 0.0;
    }
    let ss = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>();
    (ss / (values.len() - 1) as f64).sqrt()
}

/// Mean of the brightest `percent` % of `values`.
///
/// Values are sorted ascending and the mean is taken over
/// `sorted[floor(len * (1 - percent / 100))..]`. `percent` is expected in
/// `1..=100`, which keeps at least one value. Empty input yields `0`.
pub fn top_percent_mean(values: &[f64], percent: f64) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);
    let cut = (sorted.len() as f64 * (1.0 - percent / 100.0)).floor() as usize;
    let top = &sorted[cut.min(sorted.len() - 1)..];
    top.iter().sum::<f64>() / top.len() as f64
}
