//! Flow-duration-curve segmentation and segment bias.
//!
//! The FDC is formed by sorting flows in descending order of the observed
//! value; the simulated series follows the same permutation so segment sums
//! compare the same timesteps. Segments: top 2% (high flow), next 68% up to
//! the 70th-percentile cut (mid-section), remaining ~30% (low flow).

use crate::constants::{FDC_HIGH_FRACTION, FDC_MID_FRACTION};

/// Index cuts delimiting the three FDC segments of a length-`n` curve:
/// `[0, high)`, `[high, mid)`, `[mid, n)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SegmentCuts {
    pub high: usize,
    pub mid: usize,
}

/// Compute the segment cuts for a series of length `n`.
pub fn segment_cuts(n: usize) -> SegmentCuts {
    SegmentCuts {
        high: (FDC_HIGH_FRACTION * n as f64).ceil() as usize,
        mid: (FDC_MID_FRACTION * n as f64).ceil() as usize,
    }
}

/// Sort both series by descending observed value.
///
/// A single stable permutation is derived from `observed` and applied to
/// both slices, so position `i` of each output still refers to the same
/// timestep.
pub fn sort_descending_by_observed(observed: &[f64], simulated: &[f64]) -> (Vec<f64>, Vec<f64>) {
    let mut idx: Vec<usize> = (0..observed.len()).collect();
    idx.sort_by(|&a, &b| observed[b].total_cmp(&observed[a]));
    let o_sorted = idx.iter().map(|&i| observed[i]).collect();
    let s_sorted = idx.iter().map(|&i| simulated[i]).collect();
    (o_sorted, s_sorted)
}

/// Signed percentage bias of a segment: `100 (Σsim − Σobs) / Σobs`.
///
/// Positive = over-estimation. Returns `-inf` when the observed segment
/// volume is below `eps` (percentage bias is undefined against ~zero
/// observed flow).
pub fn percent_bias(observed: &[f64], simulated: &[f64], eps: f64) -> f64 {
    let sum_obs: f64 = observed.iter().sum();
    if sum_obs < eps {
        return f64::NEG_INFINITY;
    }
    let sum_sim: f64 = simulated.iter().sum();
    100.0 * (sum_sim - sum_obs) / sum_obs
}
