//! Vapour pressure, pressure and density of air (FAO-56 chapter 3).
//!
//! Temperatures are Celsius unless a parameter name ends in `_k`.

use crate::units::kelvin_to_celsius;

/// Actual vapour pressure (kPa) from the daily minimum temperature in Kelvin.
///
/// Assumes the dewpoint is close to tmin, which overestimates humidity in
/// arid and semi-arid climates. No correction is applied here.
#[inline]
pub fn actual_vapor_pressure_from_tmin(t_min_k: f64) -> f64 {
    let t_min = kelvin_to_celsius(t_min_k);
    0.611 * (17.27 * t_min / (t_min + 237.3)).exp()
}

/// Saturation vapour pressure (kPa), FAO-56 eq. 11.
#[inline]
pub fn saturation_vapor_pressure(temperature: f64) -> f64 {
    0.6108 * (17.27 * temperature / (temperature + 237.3)).exp()
}

/// Mean saturation vapour pressure of a day (kPa), FAO-56 eq. 12.
#[inline]
pub fn mean_saturation_vapor_pressure(t_min: f64, t_max: f64) -> f64 {
    (saturation_vapor_pressure(t_min) + saturation_vapor_pressure(t_max)) / 2.
}

/// Slope of the saturation vapour pressure curve (kPa degC-1), FAO-56 eq. 13.
#[inline]
pub fn slope_saturation_vapor_pressure(temperature: f64) -> f64 {
    4098. * saturation_vapor_pressure(temperature) / (temperature + 237.3).powi(2)
}

/// Actual vapour pressure (kPa) when the dewpoint is measured, FAO-56 eq. 14.
#[inline]
pub fn actual_vapor_pressure_from_dewpoint(dewpoint: f64) -> f64 {
    saturation_vapor_pressure(dewpoint)
}

/// Dewpoint temperature (degC) from actual vapour pressure in kPa.
#[inline]
pub fn dewpoint_from_vapor_pressure(actual_vapor_pressure: f64) -> f64 {
    let ln_e = actual_vapor_pressure.ln();
    (ln_e + 0.4926) / (0.0708 - 0.00421 * ln_e)
}

/// Atmospheric pressure (kPa) for a 20 degC standard atmosphere, FAO-56 eq. 7.
#[inline]
pub fn atmospheric_pressure(elevation: f64) -> f64 {
    101.3 * ((293. - 0.0065 * elevation) / 293.).powf(5.26)
}

/// Psychrometric constant (kPa degC-1), FAO-56 eq. 8.
#[inline]
pub fn psychrometric_constant(atmospheric_pressure: f64) -> f64 {
    0.000665 * atmospheric_pressure
}

/// Latent heat of vaporization (MJ kg-1).
#[inline]
pub fn latent_heat_of_vaporization(temperature: f64) -> f64 {
    2.501 - 0.002361 * temperature
}

#[inline]
pub fn daily_mean_temperature(t_min: f64, t_max: f64) -> f64 {
    (t_max + t_min) / 2.
}

/// Mean air density (kg m-3) from the virtual temperature, FAO-56 Annex 3.
#[inline]
pub fn air_density(t_max: f64, t_min: f64, elevation: f64) -> f64 {
    let virtual_temperature = 1.01 * (daily_mean_temperature(t_min, t_max) + 273.);
    3.486 * atmospheric_pressure(elevation) / virtual_temperature
}

/// Wind speed at 2 m from a measurement at `height` m, FAO-56 eq. 47.
#[inline]
pub fn wind_speed_at_2m(wind_speed: f64, height: f64) -> f64 {
    wind_speed * 4.87 / (67.8 * height - 5.42).ln()
}
