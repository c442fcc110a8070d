use numpy::PyReadonlyArray1;
use pyo3::prelude::*;

use crate::convert::{aligned_pair, invalid_input_to_py};
use hydroskill_core::metrics;

/// Full metric suite: returns `(nse, kge, lnse, fhv, fms, flv)`.
///
/// Negative simulated flows are clipped to zero before scoring; any entry
/// may be `-inf` when that metric is undefined for the given series.
#[pyfunction]
#[pyo3(signature = (observed, simulated, eps=hydroskill_core::DEFAULT_EPS))]
fn rust_calculate_all_metrics(
    observed: PyReadonlyArray1<'_, f64>,
    simulated: PyReadonlyArray1<'_, f64>,
    eps: f64,
) -> PyResult<(f64, f64, f64, f64, f64, f64)> {
    let (obs, sim) = aligned_pair(&observed, &simulated)?;
    let m = metrics::calculate_all_metrics_with_eps(obs, sim, eps).map_err(invalid_input_to_py)?;
    Ok(m.to_tuple())
}

#[pyfunction]
#[pyo3(signature = (observed, simulated, eps=hydroskill_core::DEFAULT_EPS))]
fn rust_nse(
    observed: PyReadonlyArray1<'_, f64>,
    simulated: PyReadonlyArray1<'_, f64>,
    eps: f64,
) -> PyResult<f64> {
    let (obs, sim) = aligned_pair(&observed, &simulated)?;
    Ok(metrics::nse(obs, sim, eps))
}

#[pyfunction]
#[pyo3(signature = (observed, simulated, eps=hydroskill_core::DEFAULT_EPS))]
fn rust_kge(
    observed: PyReadonlyArray1<'_, f64>,
    simulated: PyReadonlyArray1<'_, f64>,
    eps: f64,
) -> PyResult<f64> {
    let (obs, sim) = aligned_pair(&observed, &simulated)?;
    Ok(metrics::kge(obs, sim, eps))
}

#[pyfunction]
#[pyo3(signature = (observed, simulated, eps=hydroskill_core::DEFAULT_EPS))]
fn rust_log_nse(
    observed: PyReadonlyArray1<'_, f64>,
    simulated: PyReadonlyArray1<'_, f64>,
    eps: f64,
) -> PyResult<f64> {
    let (obs, sim) = aligned_pair(&observed, &simulated)?;
    Ok(metrics::log_nse(obs, sim, eps))
}

#[pyfunction]
#[pyo3(signature = (observed, simulated, eps=hydroskill_core::DEFAULT_EPS))]
fn rust_pbias(
    observed: PyReadonlyArray1<'_, f64>,
    simulated: PyReadonlyArray1<'_, f64>,
    eps: f64,
) -> PyResult<f64> {
    let (obs, sim) = aligned_pair(&observed, &simulated)?;
    Ok(metrics::pbias(obs, sim, eps))
}

#[pyfunction]
fn rust_rmse(
    observed: PyReadonlyArray1<'_, f64>,
    simulated: PyReadonlyArray1<'_, f64>,
) -> PyResult<f64> {
    let (obs, sim) = aligned_pair(&observed, &simulated)?;
    Ok(metrics::rmse(obs, sim))
}

#[pyfunction]
fn rust_mae(
    observed: PyReadonlyArray1<'_, f64>,
    simulated: PyReadonlyArray1<'_, f64>,
) -> PyResult<f64> {
    let (obs, sim) = aligned_pair(&observed, &simulated)?;
    Ok(metrics::mae(obs, sim))
}

pub fn register(parent: &Bound<'_, PyModule>) -> PyResult<()> {
    let py = parent.py();
    let m = PyModule::new(py, "metrics")?;
    m.add_function(wrap_pyfunction!(rust_calculate_all_metrics, &m)?)?;
    m.add_function(wrap_pyfunction!(rust_nse, &m)?)?;
    m.add_function(wrap_pyfunction!(rust_kge, &m)?)?;
    m.add_function(wrap_pyfunction!(rust_log_nse, &m)?)?;
    m.add_function(wrap_pyfunction!(rust_pbias, &m)?)?;
    m.add_function(wrap_pyfunction!(rust_rmse, &m)?)?;
    m.add_function(wrap_pyfunction!(rust_mae, &m)?)?;
    parent.add_submodule(&m)?;
    // Register in sys.modules so `from hydroskill._core.metrics import ...` works
    py.import("sys")?
        .getattr("modules")?
        .set_item("hydroskill._core.metrics", &m)?;
    Ok(())
}
