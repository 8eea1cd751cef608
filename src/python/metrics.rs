use numpy::PyReadonlyArray1;
use pyo3::prelude::*;
use pyo3_stub_gen::derive::gen_stub_pyfunction;

use crate::metrics;

pub fn make_module(py: Python<'_>) -> PyResult<Bound<'_, PyModule>> {
    let m = PyModule::new(py, "metrics")?;
    m.add_function(wrap_pyfunction!(calculate_rmse, &m)?)?;
    m.add_function(wrap_pyfunction!(calculate_mean_bias, &m)?)?;
    m.add_function(wrap_pyfunction!(calculate_volume_ratio, &m)?)?;
    m.add_function(wrap_pyfunction!(calculate_nse, &m)?)?;
    Ok(m)
}

#[gen_stub_pyfunction(module = "met_rs.metrics")]
#[pyfunction]
fn calculate_rmse<'py>(
    reference: PyReadonlyArray1<'py, f64>,
    candidate: PyReadonlyArray1<'py, f64>,
) -> PyResult<f64> {
    Ok(metrics::calculate_rmse(
        reference.as_array(),
        candidate.as_array(),
    )?)
}

#[gen_stub_pyfunction(module = "met_rs.metrics")]
#[pyfunction]
fn calculate_mean_bias<'py>(
    reference: PyReadonlyArray1<'py, f64>,
    candidate: PyReadonlyArray1<'py, f64>,
) -> PyResult<f64> {
    Ok(metrics::calculate_mean_bias(
        reference.as_array(),
        candidate.as_array(),
    )?)
}

#[gen_stub_pyfunction(module = "met_rs.metrics")]
#[pyfunction]
fn calculate_volume_ratio<'py>(
    reference: PyReadonlyArray1<'py, f64>,
    candidate: PyReadonlyArray1<'py, f64>,
) -> PyResult<f64> {
    Ok(metrics::calculate_volume_ratio(
        reference.as_array(),
        candidate.as_array(),
    )?)
}

#[gen_stub_pyfunction(module = "met_rs.metrics")]
#[pyfunction]
fn calculate_nse<'py>(
    reference: PyReadonlyArray1<'py, f64>,
    candidate: PyReadonlyArray1<'py, f64>,
) -> PyResult<f64> {
    Ok(metrics::calculate_nse(
        reference.as_array(),
        candidate.as_array(),
    )?)
}
