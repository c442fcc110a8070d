/// Numerical constants shared across the metric suite.
///
/// Centralises all fixed values so the segment definitions and tolerance
/// live in one place.

// -- Numerical safeguards --

/// Default tolerance guarding divisions and logarithms against
/// zero/near-zero denominators.
pub const DEFAULT_EPS: f64 = 1e-6;

// -- Flow-duration-curve segment fractions --

/// Fraction of the descending-sorted curve counted as high flow (top 2%).
pub const FDC_HIGH_FRACTION: f64 = 0.02;

/// Cumulative fraction where the mid-section ends (70th-percentile cut);
/// everything past it is the low-flow segment.
pub const FDC_MID_FRACTION: f64 = 0.70;
