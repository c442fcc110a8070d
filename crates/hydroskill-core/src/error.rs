//! Error types for metric computation.
//!
//! Only precondition violations are errors. Numeric degeneracies (zero
//! variance, mean, or segment volume) are not: they yield `-inf` for the
//! affected metric and leave the other scores intact.

use thiserror::Error;

/// Precondition failure on the input series pair. Caller error, raised
/// before any metric is computed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidInputError {
    /// Observed and simulated series must be index-aligned.
    #[error("observed and simulated series must be the same length (got {observed} and {simulated})")]
    LengthMismatch { observed: usize, simulated: usize },

    /// Metrics over zero timesteps are meaningless; rejecting empty input
    /// here is what keeps the outputs NaN-free.
    #[error("discharge series must not be empty")]
    EmptySeries,
}
