//! hydroskill-core — hydrological model skill metrics in Rust.
//!
//! Compares a simulated discharge series against an observed one and scores
//! the fit with a standard suite of hydrological performance metrics:
//! Nash-Sutcliffe Efficiency, Kling-Gupta Efficiency, log-space NSE, and
//! flow-duration-curve segment biases (high/mid/low flow).
//!
//! The main entry point is [`calculate_all_metrics`], which validates the
//! series pair, clips negative simulated flows to zero, and returns all six
//! scores in one [`MetricSet`]. Degenerate inputs (zero observed variance,
//! mean, or segment volume) poison the affected metric with `-inf` rather
//! than failing the whole call, so batch scoring over many basins never
//! aborts on a single pathological series.
pub mod constants;
pub mod error;
pub mod fdc;
pub mod metrics;
pub mod series;
pub mod stats;

pub use constants::DEFAULT_EPS;
pub use error::InvalidInputError;
pub use metrics::{calculate_all_metrics, calculate_all_metrics_with_eps, MetricSet};
