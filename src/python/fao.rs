use ndarray::Zip;
use numpy::{IntoPyArray, PyArray1, PyReadonlyArray1};
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use pyo3_stub_gen::derive::gen_stub_pyfunction;

use super::check_lengths;
use crate::data::{DailySeries, Site, GRASS_ALBEDO};
use crate::estimate::estimate_series;
use crate::fao::{astronomy, radiation, reference_et, ReferenceSurface};

pub fn make_module(py: Python<'_>) -> PyResult<Bound<'_, PyModule>> {
    let m = PyModule::new(py, "fao")?;
    m.add_function(wrap_pyfunction!(extraterrestrial_radiation, &m)?)?;
    m.add_function(wrap_pyfunction!(net_radiation, &m)?)?;
    m.add_function(wrap_pyfunction!(penman_monteith_et0, &m)?)?;
    m.add_function(wrap_pyfunction!(hargreaves_et0, &m)?)?;
    m.add_function(wrap_pyfunction!(daily_reference_et, &m)?)?;
    Ok(m)
}

/// Extraterrestrial radiation (MJ m-2 day-1) for a latitude in radians.
#[gen_stub_pyfunction(module = "met_rs.fao")]
#[pyfunction]
fn extraterrestrial_radiation<'py>(
    py: Python<'py>,
    latitude: f64,
    day_of_year: PyReadonlyArray1<'py, f64>,
) -> Bound<'py, PyArray1<f64>> {
    day_of_year
        .as_array()
        .mapv(|doy| astronomy::extraterrestrial_radiation_for_day(latitude, doy))
        .into_pyarray(py)
}

/// Net radiation (MJ m-2 day-1) from temperatures in Kelvin alone.
#[gen_stub_pyfunction(module = "met_rs.fao")]
#[pyfunction]
#[pyo3(signature = (t_min, t_max, day_of_year, elevation, latitude, albedo=GRASS_ALBEDO))]
fn net_radiation<'py>(
    py: Python<'py>,
    t_min: PyReadonlyArray1<'py, f64>,
    t_max: PyReadonlyArray1<'py, f64>,
    day_of_year: PyReadonlyArray1<'py, f64>,
    elevation: f64,
    latitude: f64,
    albedo: f64,
) -> PyResult<Bound<'py, PyArray1<f64>>> {
    let site = Site::new(latitude, elevation, albedo)?;
    let (t_min, t_max, day_of_year) = (t_min.as_array(), t_max.as_array(), day_of_year.as_array());
    check_lengths(
        &["t_min", "t_max", "day_of_year"],
        &[t_min.len(), t_max.len(), day_of_year.len()],
    )?;
    Ok(Zip::from(&t_min)
        .and(&t_max)
        .and(&day_of_year)
        .map_collect(|&tn, &tx, &doy| {
            radiation::net_radiation(
                tn,
                tx,
                doy,
                site.elevation(),
                site.latitude(),
                site.albedo(),
            )
        })
        .into_pyarray(py))
}

/// Daily Penman-Monteith reference ET (mm day-1), temperatures in Celsius.
#[gen_stub_pyfunction(module = "met_rs.fao")]
#[pyfunction]
#[pyo3(signature = (
    net_radiation, t_min, t_max, wind_speed_2m, actual_vapor_pressure, elevation, surface="grass"
))]
#[allow(clippy::too_many_arguments)]
fn penman_monteith_et0<'py>(
    py: Python<'py>,
    net_radiation: PyReadonlyArray1<'py, f64>,
    t_min: PyReadonlyArray1<'py, f64>,
    t_max: PyReadonlyArray1<'py, f64>,
    wind_speed_2m: PyReadonlyArray1<'py, f64>,
    actual_vapor_pressure: PyReadonlyArray1<'py, f64>,
    elevation: f64,
    surface: &str,
) -> PyResult<Bound<'py, PyArray1<f64>>> {
    let surface: ReferenceSurface = surface.parse()?;
    let rn = net_radiation.as_array();
    let (t_min, t_max) = (t_min.as_array(), t_max.as_array());
    let (u2, ea) = (wind_speed_2m.as_array(), actual_vapor_pressure.as_array());
    check_lengths(
        &["net_radiation", "t_min", "t_max", "wind_speed_2m", "actual_vapor_pressure"],
        &[rn.len(), t_min.len(), t_max.len(), u2.len(), ea.len()],
    )?;
    Ok(Zip::from(&rn)
        .and(&t_min)
        .and(&t_max)
        .and(&u2)
        .and(&ea)
        .map_collect(|&rn, &tn, &tx, &u2, &ea| {
            reference_et::penman_monteith_et0(surface, rn, tn, tx, u2, ea, elevation)
        })
        .into_pyarray(py))
}

/// Hargreaves reference ET (mm day-1).
#[gen_stub_pyfunction(module = "met_rs.fao")]
#[pyfunction]
fn hargreaves_et0<'py>(
    py: Python<'py>,
    t_min: PyReadonlyArray1<'py, f64>,
    t_max: PyReadonlyArray1<'py, f64>,
    extraterrestrial_radiation: PyReadonlyArray1<'py, f64>,
) -> PyResult<Bound<'py, PyArray1<f64>>> {
    let (t_min, t_max) = (t_min.as_array(), t_max.as_array());
    let ra = extraterrestrial_radiation.as_array();
    check_lengths(
        &["t_min", "t_max", "extraterrestrial_radiation"],
        &[t_min.len(), t_max.len(), ra.len()],
    )?;
    Ok(Zip::from(&t_min)
        .and(&t_max)
        .and(&ra)
        .map_collect(|&tn, &tx, &ra| reference_et::hargreaves_et0(tn, tx, ra))
        .into_pyarray(py))
}

type ReferenceEtArrays<'py> = (
    Bound<'py, PyArray1<f64>>,
    Bound<'py, PyArray1<f64>>,
    Bound<'py, PyArray1<f64>>,
);

/// Full daily pipeline for one site. Temperatures in Celsius, latitude in
/// decimal degrees. Returns `(penman_monteith, hargreaves, net_radiation)`.
#[gen_stub_pyfunction(module = "met_rs.fao")]
#[pyfunction]
#[pyo3(signature = (
    day_of_year, t_min, t_max, wind_speed, latitude, elevation,
    wind_height=2.0, solar_radiation=None, actual_vapor_pressure=None, surface="grass"
))]
#[allow(clippy::too_many_arguments)]
fn daily_reference_et<'py>(
    py: Python<'py>,
    day_of_year: PyReadonlyArray1<'py, i64>,
    t_min: PyReadonlyArray1<'py, f64>,
    t_max: PyReadonlyArray1<'py, f64>,
    wind_speed: PyReadonlyArray1<'py, f64>,
    latitude: f64,
    elevation: f64,
    wind_height: f64,
    solar_radiation: Option<PyReadonlyArray1<'py, f64>>,
    actual_vapor_pressure: Option<PyReadonlyArray1<'py, f64>>,
    surface: &str,
) -> PyResult<ReferenceEtArrays<'py>> {
    let surface: ReferenceSurface = surface.parse()?;
    let site = Site::from_degrees(latitude, elevation)?;
    let day_of_year = day_of_year
        .as_array()
        .iter()
        .map(|&d| {
            u16::try_from(d)
                .map_err(|_| PyValueError::new_err(format!("invalid day of year {d}")))
        })
        .collect::<PyResult<Vec<u16>>>()?;
    let wind_speed = wind_speed.as_array().to_vec();
    let n = wind_speed.len();

    let mut series = DailySeries::new(
        day_of_year,
        t_min.as_array().to_vec(),
        t_max.as_array().to_vec(),
        vec![0.; n],
        wind_speed,
    )?
    .with_wind_height(wind_height);
    if let Some(rs) = solar_radiation {
        series = series.with_solar_radiation(rs.as_array().to_vec())?;
    }
    if let Some(ea) = actual_vapor_pressure {
        series = series.with_actual_vapor_pressure(ea.as_array().to_vec())?;
    }

    let estimates = estimate_series(&site, &series, surface);
    let penman_monteith: Vec<f64> = estimates.iter().map(|e| e.penman_monteith).collect();
    let hargreaves: Vec<f64> = estimates.iter().map(|e| e.hargreaves).collect();
    let net: Vec<f64> = estimates.iter().map(|e| e.radiation.net).collect();
    Ok((
        PyArray1::from_vec(py, penman_monteith),
        PyArray1::from_vec(py, hargreaves),
        PyArray1::from_vec(py, net),
    ))
}
