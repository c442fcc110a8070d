//! Hydrological skill metrics for streamflow simulations.
//!
//! All metrics take observed and simulated slices and return a scalar score.
//! Numeric degeneracies (zero observed variance, mean, or segment volume)
//! yield `f64::NEG_INFINITY` for that score instead of an error, so batch
//! evaluation over many basins never aborts on one pathological series.
//! Outputs are never NaN for valid inputs.
//!
//! The individual metric functions score their inputs as given;
//! [`calculate_all_metrics`] additionally enforces the series preconditions
//! and clips negative simulated flows to zero before scoring.

use crate::constants::DEFAULT_EPS;
use crate::error::InvalidInputError;
use crate::fdc;
use crate::series;
use crate::stats;

/// The full suite of skill scores for one observed/simulated pair.
///
/// Any field may be `-inf`, marking that metric as undefined for the given
/// input (degenerate variance, mean, or segment volume). The sentinel is
/// kept in-band deliberately: downstream aggregation treats a degenerate
/// score as maximally bad and must filter infinities itself.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MetricSet {
    /// Nash-Sutcliffe Efficiency. (-inf, 1], 1 = perfect.
    pub nse: f64,
    /// Kling-Gupta Efficiency. (-inf, 1], 1 = perfect.
    pub kge: f64,
    /// NSE on log-transformed flows, emphasising low-flow fit.
    pub lnse: f64,
    /// High-flow bias: top 2% of the flow-duration curve [%].
    pub fhv: f64,
    /// Mid-section bias: central 68% of the curve [%].
    pub fms: f64,
    /// Low-flow bias: bottom ~30% of the curve [%].
    pub flv: f64,
}

impl MetricSet {
    /// Scores in positional order `(nse, kge, lnse, fhv, fms, flv)`.
    pub fn to_tuple(&self) -> (f64, f64, f64, f64, f64, f64) {
        (self.nse, self.kge, self.lnse, self.fhv, self.fms, self.flv)
    }
}

/// Compute all six skill scores with the default tolerance.
///
/// Validates that the pair is non-empty and index-aligned, clips negative
/// simulated flows to zero, and scores the clipped series.
pub fn calculate_all_metrics(
    observed: &[f64],
    simulated: &[f64],
) -> Result<MetricSet, InvalidInputError> {
    calculate_all_metrics_with_eps(observed, simulated, DEFAULT_EPS)
}

/// [`calculate_all_metrics`] with an explicit tolerance for division and
/// logarithm guards.
pub fn calculate_all_metrics_with_eps(
    observed: &[f64],
    simulated: &[f64],
    eps: f64,
) -> Result<MetricSet, InvalidInputError> {
    series::check_aligned(observed, simulated)?;
    let sim_clip = series::clip_negative(simulated);

    let (o_sorted, s_sorted) = fdc::sort_descending_by_observed(observed, &sim_clip);
    let cuts = fdc::segment_cuts(observed.len());

    Ok(MetricSet {
        nse: nse(observed, &sim_clip, eps),
        kge: kge(observed, &sim_clip, eps),
        lnse: log_nse(observed, &sim_clip, eps),
        fhv: fdc::percent_bias(&o_sorted[..cuts.high], &s_sorted[..cuts.high], eps),
        fms: fdc::percent_bias(
            &o_sorted[cuts.high..cuts.mid],
            &s_sorted[cuts.high..cuts.mid],
            eps,
        ),
        flv: fdc::percent_bias(&o_sorted[cuts.mid..], &s_sorted[cuts.mid..], eps),
    })
}

/// Nash-Sutcliffe Efficiency. Range: (-inf, 1], 1 = perfect.
///
/// `-inf` when the observed series has ~zero variance (nothing to explain).
pub fn nse(observed: &[f64], simulated: &[f64], eps: f64) -> f64 {
    let mean_obs = stats::mean(observed);
    let numerator: f64 = observed
        .iter()
        .zip(simulated)
        .map(|(o, s)| (o - s).powi(2))
        .sum();
    let denominator: f64 = observed.iter().map(|o| (o - mean_obs).powi(2)).sum();
    if denominator < eps {
        return f64::NEG_INFINITY;
    }
    1.0 - numerator / denominator
}

/// Kling-Gupta Efficiency. Range: (-inf, 1], 1 = perfect.
///
/// Combines correlation `r`, bias ratio `beta`, and variability ratio
/// `gamma`. `-inf` when the observed mean or standard deviation is ~zero,
/// leaving `beta` or `gamma` undefined.
pub fn kge(observed: &[f64], simulated: &[f64], eps: f64) -> f64 {
    let mean_o = stats::mean(observed);
    let mean_s = stats::mean(simulated);
    let std_o = stats::std_dev(observed);
    let std_s = stats::std_dev(simulated);

    let beta = if mean_o > eps {
        mean_s / mean_o
    } else {
        f64::NEG_INFINITY
    };
    let gamma = if std_o > eps {
        std_s / std_o
    } else {
        f64::NEG_INFINITY
    };
    if beta.is_infinite() || gamma.is_infinite() {
        return f64::NEG_INFINITY;
    }

    let r = stats::pearson(observed, simulated, eps);
    1.0 - ((r - 1.0).powi(2) + (beta - 1.0).powi(2) + (gamma - 1.0).powi(2)).sqrt()
}

/// NSE on `ln(q + eps)`-transformed flows.
///
/// The additive `eps` avoids `ln(0)` and compresses high-flow influence, so
/// the score emphasises low-flow fit.
pub fn log_nse(observed: &[f64], simulated: &[f64], eps: f64) -> f64 {
    let log_obs: Vec<f64> = observed.iter().map(|o| (o + eps).ln()).collect();
    let log_sim: Vec<f64> = simulated.iter().map(|s| (s + eps).ln()).collect();
    nse(&log_obs, &log_sim, eps)
}

/// Whole-series percent bias. Optimal = 0, positive = overestimation.
/// `-inf` when the observed volume is below `eps`.
pub fn pbias(observed: &[f64], simulated: &[f64], eps: f64) -> f64 {
    fdc::percent_bias(observed, simulated, eps)
}

/// Root Mean Square Error. Range: [0, inf), 0 = perfect.
pub fn rmse(observed: &[f64], simulated: &[f64]) -> f64 {
    let n = observed.len() as f64;
    let mse: f64 = observed
        .iter()
        .zip(simulated)
        .map(|(o, s)| (o - s).powi(2))
        .sum::<f64>()
        / n;
    mse.sqrt()
}

/// Mean Absolute Error. Range: [0, inf), 0 = perfect.
pub fn mae(observed: &[f64], simulated: &[f64]) -> f64 {
    let n = observed.len() as f64;
    observed
        .iter()
        .zip(simulated)
        .map(|(o, s)| (o - s).abs())
        .sum::<f64>()
        / n
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::InvalidInputError;
    use approx::assert_relative_eq;

    const EPS: f64 = 1e-6;

    // --- NSE ---

    #[test]
    fn nse_perfect_match() {
        let obs = [1.0, 2.0, 3.0, 4.0, 5.0];
        assert_relative_eq!(nse(&obs, &obs, EPS), 1.0);
    }

    #[test]
    fn nse_mean_simulation_gives_zero() {
        let obs = [1.0, 2.0, 3.0, 4.0, 5.0];
        let sim = [3.0; 5];
        assert_relative_eq!(nse(&obs, &sim, EPS), 0.0, epsilon = 1e-10);
    }

    #[test]
    fn nse_constant_observed_returns_neg_inf() {
        let obs = [5.0; 5];
        let sim = [1.0, 2.0, 3.0, 4.0, 5.0];
        assert_eq!(nse(&obs, &sim, EPS), f64::NEG_INFINITY);
    }

    #[test]
    fn nse_known_value() {
        // num = 0.11, den = 10 -> 1 - 0.011
        let obs = [1.0, 2.0, 3.0, 4.0, 5.0];
        let sim = [1.1, 2.2, 2.8, 4.1, 4.9];
        assert_relative_eq!(nse(&obs, &sim, EPS), 0.989, epsilon = 1e-10);
    }

    // --- KGE ---

    #[test]
    fn kge_perfect_match() {
        let obs = [1.0, 2.0, 3.0, 4.0, 5.0];
        assert_relative_eq!(kge(&obs, &obs, EPS), 1.0, epsilon = 1e-10);
    }

    #[test]
    fn kge_doubled_simulation_known_value() {
        // r = 1, beta = 2, gamma = 2 -> 1 - sqrt(2)
        let obs = [1.0, 2.0, 3.0, 4.0, 5.0];
        let sim = [2.0, 4.0, 6.0, 8.0, 10.0];
        assert_relative_eq!(kge(&obs, &sim, EPS), 1.0 - 2.0_f64.sqrt(), epsilon = 1e-10);
    }

    #[test]
    fn kge_bias_reduces_score() {
        let obs = [1.0, 2.0, 3.0, 4.0, 5.0];
        let sim = [2.0, 3.0, 4.0, 5.0, 6.0];
        assert!(kge(&obs, &sim, EPS) < 1.0);
    }

    #[test]
    fn kge_zero_variance_observed_returns_neg_inf() {
        let obs = [3.0; 5];
        let sim = [1.0, 2.0, 3.0, 4.0, 5.0];
        assert_eq!(kge(&obs, &sim, EPS), f64::NEG_INFINITY);
    }

    #[test]
    fn kge_constant_simulation_stays_finite() {
        // std_sim = 0 must not produce NaN: r falls back to 0, gamma to 0.
        let obs = [1.0, 2.0, 3.0, 4.0, 5.0];
        let sim = [3.0; 5];
        let score = kge(&obs, &sim, EPS);
        assert!(score.is_finite());
        assert_relative_eq!(score, 1.0 - 2.0_f64.sqrt(), epsilon = 1e-10);
    }

    #[test]
    fn kge_inexact_constant_simulation_stays_finite() {
        // 4.2 has no exact binary representation; its residual variance
        // must still trip the correlation guard, not leak into r.
        let obs = [1.0, 2.0, 3.0, 4.0, 5.0];
        let sim = [4.2; 5];
        assert!(kge(&obs, &sim, EPS).is_finite());
    }

    // --- Log NSE ---

    #[test]
    fn log_nse_perfect_match() {
        let obs = [1.0, 2.0, 3.0, 4.0, 5.0];
        assert_relative_eq!(log_nse(&obs, &obs, EPS), 1.0, epsilon = 1e-10);
    }

    #[test]
    fn log_nse_handles_zero_flows() {
        let obs = [0.0, 1.0, 2.0, 3.0, 4.0];
        let result = log_nse(&obs, &obs, EPS);
        assert!(result.is_finite());
        assert_relative_eq!(result, 1.0, epsilon = 1e-10);
    }

    #[test]
    fn log_nse_constant_observed_returns_neg_inf() {
        let obs = [1.0; 5];
        let sim = [1.0, 2.0, 3.0, 4.0, 5.0];
        assert_eq!(log_nse(&obs, &sim, EPS), f64::NEG_INFINITY);
    }

    // --- PBIAS / RMSE / MAE ---

    #[test]
    fn pbias_known_value() {
        let obs = [10.0, 20.0, 30.0];
        let sim = [12.0, 22.0, 28.0];
        assert_relative_eq!(pbias(&obs, &sim, EPS), 100.0 * 2.0 / 60.0, epsilon = 1e-10);
    }

    #[test]
    fn pbias_zero_observed_returns_neg_inf() {
        assert_eq!(pbias(&[0.0; 3], &[1.0; 3], EPS), f64::NEG_INFINITY);
    }

    #[test]
    fn rmse_constant_error() {
        let obs = [1.0, 2.0, 3.0, 4.0, 5.0];
        let sim = [2.0, 3.0, 4.0, 5.0, 6.0];
        assert_relative_eq!(rmse(&obs, &sim), 1.0, epsilon = 1e-10);
    }

    #[test]
    fn mae_symmetric_error() {
        let obs = [2.0, 2.0];
        let sim = [1.0, 3.0];
        assert_relative_eq!(mae(&obs, &sim), 1.0, epsilon = 1e-10);
    }

    // --- Full suite ---

    #[test]
    fn suite_perfect_fit() {
        let obs = [10.0, 20.0, 30.0, 40.0, 50.0];
        let m = calculate_all_metrics(&obs, &obs).unwrap();
        assert_relative_eq!(m.nse, 1.0);
        assert_relative_eq!(m.kge, 1.0, epsilon = 1e-10);
        assert_relative_eq!(m.lnse, 1.0, epsilon = 1e-10);
        assert_relative_eq!(m.fhv, 0.0);
        assert_relative_eq!(m.fms, 0.0);
        assert_relative_eq!(m.flv, 0.0);
    }

    #[test]
    fn suite_clipped_negative_simulation() {
        let obs = [10.0, 20.0, 30.0, 40.0, 50.0];
        let sim = [-5.0, 20.0, 30.0, 40.0, 50.0];
        let m = calculate_all_metrics(&obs, &sim).unwrap();
        assert!(m.nse < 1.0);
        assert!(m.kge < 1.0);
        assert!(m.lnse < 1.0);
        // The smallest observed flow sorts last, so the missing volume lands
        // entirely in the low-flow segment: sim 0 vs obs 10.
        assert_relative_eq!(m.flv, -100.0, epsilon = 1e-10);
        assert_relative_eq!(m.fhv, 0.0);
        assert_relative_eq!(m.fms, 0.0);
    }

    #[test]
    fn suite_clipping_ignores_negative_magnitude() {
        let obs = [10.0, 20.0, 30.0, 40.0, 50.0];
        let a = calculate_all_metrics(&obs, &[-5.0, 20.0, 30.0, 40.0, 50.0]).unwrap();
        let b = calculate_all_metrics(&obs, &[-999.0, 20.0, 30.0, 40.0, 50.0]).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn suite_all_zero_observed_poisons_every_degenerate_metric() {
        let obs = [0.0, 0.0, 0.0];
        let sim = [1.0, 2.0, 3.0];
        let m = calculate_all_metrics(&obs, &sim).unwrap();
        assert_eq!(m.nse, f64::NEG_INFINITY);
        assert_eq!(m.kge, f64::NEG_INFINITY);
        assert_eq!(m.lnse, f64::NEG_INFINITY);
        assert_eq!(m.fhv, f64::NEG_INFINITY);
        assert_eq!(m.fms, f64::NEG_INFINITY);
        assert_eq!(m.flv, f64::NEG_INFINITY);
    }

    #[test]
    fn suite_never_produces_nan() {
        let cases: [(&[f64], &[f64]); 4] = [
            (&[0.0, 0.0, 0.0], &[1.0, 2.0, 3.0]),
            (&[5.0, 5.0, 5.0], &[1.0, 2.0, 3.0]),
            (&[1.0, 2.0, 3.0], &[0.0, 0.0, 0.0]),
            (&[1.0, 2.0, 3.0], &[-1.0, -2.0, -3.0]),
        ];
        for (obs, sim) in cases {
            let m = calculate_all_metrics(obs, sim).unwrap();
            let (nse, kge, lnse, fhv, fms, flv) = m.to_tuple();
            for v in [nse, kge, lnse, fhv, fms, flv] {
                assert!(!v.is_nan(), "NaN for obs {:?} / sim {:?}", obs, sim);
            }
        }
    }

    #[test]
    fn suite_length_mismatch_is_an_error() {
        let err = calculate_all_metrics(&[1.0, 2.0], &[1.0]).unwrap_err();
        assert!(matches!(err, InvalidInputError::LengthMismatch { .. }));
    }

    #[test]
    fn suite_empty_input_is_an_error() {
        assert_eq!(
            calculate_all_metrics(&[], &[]).unwrap_err(),
            InvalidInputError::EmptySeries
        );
    }

    #[test]
    fn tuple_order_is_positional_contract() {
        let m = MetricSet {
            nse: 1.0,
            kge: 2.0,
            lnse: 3.0,
            fhv: 4.0,
            fms: 5.0,
            flv: 6.0,
        };
        assert_eq!(m.to_tuple(), (1.0, 2.0, 3.0, 4.0, 5.0, 6.0));
    }
}
