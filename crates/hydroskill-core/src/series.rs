//! Discharge series preconditions and physical-bounds handling.
//!
//! The two series must be index-aligned (same timesteps, position for
//! position). Discharge cannot be negative, so negative simulated flows are
//! treated as unphysical model output and clipped to zero rather than
//! rejected; observed flows are used as given.

use crate::error::InvalidInputError;

/// Validate that the series pair is non-empty and index-aligned.
pub fn check_aligned(observed: &[f64], simulated: &[f64]) -> Result<(), InvalidInputError> {
    if observed.len() != simulated.len() {
        return Err(InvalidInputError::LengthMismatch {
            observed: observed.len(),
            simulated: simulated.len(),
        });
    }
    if observed.is_empty() {
        return Err(InvalidInputError::EmptySeries);
    }
    Ok(())
}

/// Copy of `simulated` with every negative entry replaced by exactly 0.0.
///
/// All downstream metrics consume this clipped copy, never the raw series.
pub fn clip_negative(simulated: &[f64]) -> Vec<f64> {
    simulated.iter().map(|&q| q.max(0.0)).collect()
}
