use numpy::{IntoPyArray, PyArray1, PyReadonlyArray1};
use pyo3::prelude::*;
use pyo3_stub_gen::derive::gen_stub_pyfunction;

use super::check_lengths;
use crate::estimate::{bounded_effective_precipitation_series, effective_precipitation_series};
use crate::units::Inches;

pub fn make_module(py: Python<'_>) -> PyResult<Bound<'_, PyModule>> {
    let m = PyModule::new(py, "precipitation")?;
    m.add_function(wrap_pyfunction!(effective_precipitation, &m)?)?;
    Ok(m)
}

/// Effective precipitation (mm) from daily precipitation and reference ET (mm).
/// `management_depth` is the net irrigation depth in inches. With `bounded`,
/// each day is limited to `[0, min(P, ET)]`.
#[gen_stub_pyfunction(module = "met_rs.precipitation")]
#[pyfunction]
#[pyo3(signature = (precipitation, reference_et, management_depth=3.0, bounded=false))]
fn effective_precipitation<'py>(
    py: Python<'py>,
    precipitation: PyReadonlyArray1<'py, f64>,
    reference_et: PyReadonlyArray1<'py, f64>,
    management_depth: f64,
    bounded: bool,
) -> PyResult<Bound<'py, PyArray1<f64>>> {
    let precipitation = precipitation.as_array();
    let reference_et = reference_et.as_array();
    check_lengths(
        &["precipitation", "reference_et"],
        &[precipitation.len(), reference_et.len()],
    )?;
    let depth = Inches(management_depth);
    let eff = if bounded {
        bounded_effective_precipitation_series(precipitation, reference_et, depth)
    } else {
        effective_precipitation_series(precipitation, reference_et, depth)
    };
    Ok(eff.into_pyarray(py))
}
