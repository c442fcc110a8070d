use hydroskill_core::InvalidInputError;
use numpy::PyReadonlyArray1;
use pyo3::prelude::*;

/// Validate that a numpy array is C-contiguous and return its slice.
pub fn contiguous_slice<'py>(arr: &'py PyReadonlyArray1<'py, f64>) -> PyResult<&'py [f64]> {
    arr.as_slice()
        .map_err(|_| pyo3::exceptions::PyValueError::new_err("array must be C-contiguous"))
}

/// Extract an (observed, simulated) slice pair from two numpy arrays.
///
/// Only C-contiguity is validated here. The full-suite entry point
/// enforces the length and non-emptiness preconditions in the core; the
/// per-metric wrappers score the slices as given.
pub fn aligned_pair<'py>(
    observed: &'py PyReadonlyArray1<'py, f64>,
    simulated: &'py PyReadonlyArray1<'py, f64>,
) -> PyResult<(&'py [f64], &'py [f64])> {
    Ok((contiguous_slice(observed)?, contiguous_slice(simulated)?))
}

/// Map a core precondition failure to a Python ValueError.
pub fn invalid_input_to_py(err: InvalidInputError) -> PyErr {
    pyo3::exceptions::PyValueError::new_err(err.to_string())
}
