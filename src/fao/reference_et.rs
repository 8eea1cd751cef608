//! Daily reference evapotranspiration (mm day-1).
#![allow(clippy::too_many_arguments)]

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::psychrometrics::{
    atmospheric_pressure, daily_mean_temperature, mean_saturation_vapor_pressure,
    psychrometric_constant, slope_saturation_vapor_pressure,
};
use super::ENERGY_TO_EVAPORATION;
use crate::data::Error;

/// Reference crop of the ASCE-EWRI standardized Penman-Monteith equation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReferenceSurface {
    /// Short, clipped grass (ETos), identical to FAO-56 ET0.
    #[default]
    Grass,
    /// Tall alfalfa (ETrs).
    Alfalfa,
}

impl ReferenceSurface {
    /// Numerator constant (K mm s3 Mg-1 day-1) for daily steps.
    pub fn numerator_constant(self) -> f64 {
        match self {
            ReferenceSurface::Grass => 900.,
            ReferenceSurface::Alfalfa => 1600.,
        }
    }

    /// Denominator constant (s m-1) for daily steps.
    pub fn denominator_constant(self) -> f64 {
        match self {
            ReferenceSurface::Grass => 0.34,
            ReferenceSurface::Alfalfa => 0.38,
        }
    }
}

impl FromStr for ReferenceSurface {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        match s.to_lowercase().as_str() {
            "grass" | "eto" | "etos" => Ok(ReferenceSurface::Grass),
            "alfalfa" | "etr" | "etrs" => Ok(ReferenceSurface::Alfalfa),
            _ => Err(Error::UnknownSurface(s.to_string())),
        }
    }
}

/// Radiation (MJ m-2 day-1) to equivalent evaporation (mm day-1).
#[inline]
pub fn energy_to_evaporation(energy: f64) -> f64 {
    energy * ENERGY_TO_EVAPORATION
}

/// Penman-Monteith from its component terms (FAO-56 eq. 6 for grass).
///
/// `vapor_pressure_deficit`, `slope` and `psychrometric` are kPa, kPa degC-1,
/// kPa degC-1; `wind_speed_2m` is m s-1.
pub fn penman_monteith_from_terms(
    surface: ReferenceSurface,
    net_radiation: f64,
    soil_heat_flux: f64,
    t_mean: f64,
    wind_speed_2m: f64,
    vapor_pressure_deficit: f64,
    slope: f64,
    psychrometric: f64,
) -> f64 {
    let radiation_term = ENERGY_TO_EVAPORATION * slope * (net_radiation - soil_heat_flux);
    let aerodynamic_term = psychrometric * surface.numerator_constant() / (t_mean + 273.)
        * wind_speed_2m
        * vapor_pressure_deficit;
    (radiation_term + aerodynamic_term)
        / (slope + psychrometric * (1. + surface.denominator_constant() * wind_speed_2m))
}

/// Daily Penman-Monteith reference ET. Soil heat flux is neglected at the
/// daily step. Temperatures in Celsius, elevation in metres.
pub fn penman_monteith_et0(
    surface: ReferenceSurface,
    net_radiation: f64,
    t_min: f64,
    t_max: f64,
    wind_speed_2m: f64,
    actual_vapor_pressure: f64,
    elevation: f64,
) -> f64 {
    let t_mean = daily_mean_temperature(t_min, t_max);
    let deficit = mean_saturation_vapor_pressure(t_min, t_max) - actual_vapor_pressure;
    penman_monteith_from_terms(
        surface,
        net_radiation,
        0.,
        t_mean,
        wind_speed_2m,
        deficit,
        slope_saturation_vapor_pressure(t_mean),
        psychrometric_constant(atmospheric_pressure(elevation)),
    )
}

/// Hargreaves reference ET, FAO-56 eq. 52. Only temperature and
/// extraterrestrial radiation are needed.
pub fn hargreaves_et0(t_min: f64, t_max: f64, extraterrestrial_radiation: f64) -> f64 {
    let t_mean = daily_mean_temperature(t_min, t_max);
    0.0023
        * (t_mean + 17.8)
        * (t_max - t_min).sqrt()
        * energy_to_evaporation(extraterrestrial_radiation)
}
