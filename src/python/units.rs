use numpy::{IntoPyArray, PyArray1, PyReadonlyArray1};
use pyo3::prelude::*;
use pyo3_stub_gen::derive::gen_stub_pyfunction;

use crate::units;

pub fn make_module(py: Python<'_>) -> PyResult<Bound<'_, PyModule>> {
    let m = PyModule::new(py, "units")?;
    m.add_function(wrap_pyfunction!(inches_to_mm, &m)?)?;
    m.add_function(wrap_pyfunction!(mm_to_inches, &m)?)?;
    m.add_function(wrap_pyfunction!(fahrenheit_to_celsius, &m)?)?;
    m.add_function(wrap_pyfunction!(celsius_to_kelvin, &m)?)?;
    m.add_function(wrap_pyfunction!(mph_to_m_per_s, &m)?)?;
    m.add_function(wrap_pyfunction!(feet_to_m, &m)?)?;
    m.add_function(wrap_pyfunction!(langleys_to_mj_per_m2, &m)?)?;
    m.add_function(wrap_pyfunction!(w_per_m2_to_mj_per_m2_day, &m)?)?;
    Ok(m)
}

fn convert<'py>(
    py: Python<'py>,
    values: PyReadonlyArray1<'py, f64>,
    f: fn(f64) -> f64,
) -> Bound<'py, PyArray1<f64>> {
    values.as_array().mapv(f).into_pyarray(py)
}

#[gen_stub_pyfunction(module = "met_rs.units")]
#[pyfunction]
fn inches_to_mm<'py>(
    py: Python<'py>,
    values: PyReadonlyArray1<'py, f64>,
) -> Bound<'py, PyArray1<f64>> {
    convert(py, values, units::inches_to_mm)
}

#[gen_stub_pyfunction(module = "met_rs.units")]
#[pyfunction]
fn mm_to_inches<'py>(
    py: Python<'py>,
    values: PyReadonlyArray1<'py, f64>,
) -> Bound<'py, PyArray1<f64>> {
    convert(py, values, units::mm_to_inches)
}

#[gen_stub_pyfunction(module = "met_rs.units")]
#[pyfunction]
fn fahrenheit_to_celsius<'py>(
    py: Python<'py>,
    values: PyReadonlyArray1<'py, f64>,
) -> Bound<'py, PyArray1<f64>> {
    convert(py, values, units::fahrenheit_to_celsius)
}

#[gen_stub_pyfunction(module = "met_rs.units")]
#[pyfunction]
fn celsius_to_kelvin<'py>(
    py: Python<'py>,
    values: PyReadonlyArray1<'py, f64>,
) -> Bound<'py, PyArray1<f64>> {
    convert(py, values, units::celsius_to_kelvin)
}

#[gen_stub_pyfunction(module = "met_rs.units")]
#[pyfunction]
fn mph_to_m_per_s<'py>(
    py: Python<'py>,
    values: PyReadonlyArray1<'py, f64>,
) -> Bound<'py, PyArray1<f64>> {
    convert(py, values, units::mph_to_m_per_s)
}

#[gen_stub_pyfunction(module = "met_rs.units")]
#[pyfunction]
fn feet_to_m<'py>(
    py: Python<'py>,
    values: PyReadonlyArray1<'py, f64>,
) -> Bound<'py, PyArray1<f64>> {
    convert(py, values, units::feet_to_m)
}

#[gen_stub_pyfunction(module = "met_rs.units")]
#[pyfunction]
fn langleys_to_mj_per_m2<'py>(
    py: Python<'py>,
    values: PyReadonlyArray1<'py, f64>,
) -> Bound<'py, PyArray1<f64>> {
    convert(py, values, units::langleys_to_mj_per_m2)
}

#[gen_stub_pyfunction(module = "met_rs.units")]
#[pyfunction]
fn w_per_m2_to_mj_per_m2_day<'py>(
    py: Python<'py>,
    values: PyReadonlyArray1<'py, f64>,
) -> Bound<'py, PyArray1<f64>> {
    convert(py, values, units::w_per_m2_to_mj_per_m2_day)
}
