//! Arc-length mapping from polyline anchors to profile indices.
//!
//! The host samples the profile at roughly uniform spacing along the drawn
//! polyline, so an anchor's position in the profile is proportional to its
//! cumulative arc length:
//!
//! - `cum[i]` is the summed Euclidean length of the pieces before anchor `i`;
//! - `idx[i] = round(cum[i] / T * (L - 1))`, clamped to `L - 1`, where `T` is
//!   the total length and `L` the profile length.
//!
//! Segment `s` then covers the half-open window `[idx[s], idx[s + 1])`.
//! Rounding can collapse short pieces into empty windows; those are widened
//! by one sample on each side (bounded by `0` and `L - 1`). The repair is
//! best-effort: a window can remain empty (e.g. for `L == 1`), in which case
//! the segment statistics are all zero.
//!
//! The threshold means read the raw profile over the closed anchor span
//! `[idx[s], idx[s + 1]]` instead, so neighbouring spans share their anchor
//! sample ([`anchor_spans`]).

use crate::error::{AnalysisError, Result};
use crate::types::Polyline;
use nalgebra::distance;
use serde::Serialize;

/// Half-open index range `[start, end)` of one segment in the profile.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct SegmentWindow {
    pub start: usize,
    pub end: usize,
}

impl SegmentWindow {
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    /// Slice of `profile` covered by this window, empty when out of range.
    pub fn slice<'a>(&self, profile: &'a [f64]) -> &'a [f64] {
        let end = self.end.min(profile.len());
        if self.start >= end {
            &[]
        } else {
            &profile[self.start..end]
        }
    }
}

/// Running arc length at every anchor; the first entry is `0`.
pub fn cumulative_arc_length(polyline: &Polyline) -> Vec<f64> {
    let anchors = polyline.anchors();
    let mut cum = Vec::with_capacity(anchors.len());
    let mut total = 0.0;
    for (i, p) in anchors.iter().enumerate() {
        if i > 0 {
            total += distance(&anchors[i - 1], p);
        }
        cum.push(total);
    }
    cum
}

/// Profile index of every anchor for a profile of `profile_len` samples.
///
/// Fails for fewer than two anchors, an empty profile, or a polyline whose
/// total length is zero.
pub fn index_breakpoints(polyline: &Polyline, profile_len: usize) -> Result<Vec<usize>> {
    if polyline.anchor_count() < 2 {
        return Err(AnalysisError::TooFewAnchors {
            found: polyline.anchor_count(),
            required: 2,
        });
    }
    if profile_len == 0 {
        return Err(AnalysisError::EmptyProfile);
    }
    let cum = cumulative_arc_length(polyline);
    let total = cum.last().copied().unwrap_or(0.0);
    if total <= 0.0 || !total.is_finite() {
        return Err(AnalysisError::DegeneratePolyline);
    }

    let last = profile_len - 1;
    let scale = last as f64;
    Ok(cum
        .iter()
        .map(|&d| ((d / total * scale).round() as usize).min(last))
        .collect())
}

/// Turn anchor breakpoints into one window per segment, repairing collapsed
/// windows by widening them one sample in each direction.
pub fn segment_windows(breakpoints: &[usize], profile_len: usize) -> Vec<SegmentWindow> {
    let last = profile_len.saturating_sub(1);
    breakpoints
        .windows(2)
        .map(|pair| {
            let (mut start, mut end) = (pair[0], pair[1]);
            if start >= end {
                start = start.saturating_sub(1);
                end = (end + 1).min(last);
            }
            SegmentWindow { start, end }
        })
        .collect()
}

/// Anchor-to-anchor spans including both end anchors, `[idx[s], idx[s + 1]]`,
/// stored half-open. Used by the raw-intensity threshold means; no repair is
/// applied since monotonic breakpoints always leave at least one sample.
pub fn anchor_spans(breakpoints: &[usize], profile_len: usize) -> Vec<SegmentWindow> {
    breakpoints
        .windows(2)
        .map(|pair| SegmentWindow {
            start: pair[0],
            end: (pair[1] + 1).min(profile_len),
        })
        .collect()
}

/// Both window flavours of one polyline over one profile.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SegmentLayout {
    pub breakpoints: Vec<usize>,
    /// Repaired half-open windows for the corrected-profile statistics.
    pub windows: Vec<SegmentWindow>,
    /// Inclusive anchor spans for the raw-profile threshold means.
    pub spans: Vec<SegmentWindow>,
}

impl SegmentLayout {
    pub fn segment_count(&self) -> usize {
        self.windows.len()
    }
}

/// Breakpoints followed by window and span construction.
pub fn polyline_layout(polyline: &Polyline, profile_len: usize) -> Result<SegmentLayout> {
    let breakpoints = index_breakpoints(polyline, profile_len)?;
    let windows = segment_windows(&breakpoints, profile_len);
    let spans = anchor_spans(&breakpoints, profile_len);
    Ok(SegmentLayout {
        breakpoints,
        windows,
        spans,
    })
}
