//! Daily radiation balance at the surface (FAO-56 eqs. 37-40, 50).
//!
//! All fluxes are MJ m-2 day-1. The longwave terms take absolute temperatures
//! in Kelvin; the Hargreaves estimate only uses the diurnal range, so either
//! scale works there. Unphysical inputs such as `t_max < t_min` yield NaN,
//! which callers must treat as "estimate unavailable".
#![allow(clippy::too_many_arguments)]

use serde::Serialize;

use super::astronomy::{
    extraterrestrial_radiation, inverse_earth_sun_distance, solar_declination, sunset_hour_angle,
};
use super::psychrometrics::actual_vapor_pressure_from_tmin;
use super::STEFAN_BOLTZMANN;

/// Hargreaves radiation adjustment coefficient (degC^-0.5), interior sites.
pub const K_RS_INTERIOR: f64 = 0.16;
/// Hargreaves radiation adjustment coefficient (degC^-0.5), coastal sites.
pub const K_RS_COASTAL: f64 = 0.19;

fn extraterrestrial(day_of_year: f64, latitude: f64) -> f64 {
    let declination = solar_declination(day_of_year);
    extraterrestrial_radiation(
        latitude,
        declination,
        sunset_hour_angle(latitude, declination),
        inverse_earth_sun_distance(day_of_year),
    )
}

/// Clear-sky solar radiation, FAO-56 eq. 37.
#[inline]
pub fn clear_sky_radiation(elevation: f64, extraterrestrial_radiation: f64) -> f64 {
    (0.00002 * elevation + 0.75) * extraterrestrial_radiation
}

/// Solar radiation from the diurnal temperature range (Hargreaves, FAO-56 eq. 50),
/// capped at the clear-sky value.
#[inline]
pub fn estimated_solar_radiation(
    extraterrestrial_radiation: f64,
    clear_sky_radiation: f64,
    t_min: f64,
    t_max: f64,
    coastal: bool,
) -> f64 {
    let adj = if coastal { K_RS_COASTAL } else { K_RS_INTERIOR };
    let solar = adj * (t_max - t_min).sqrt() * extraterrestrial_radiation;
    // f64::min drops a NaN operand, the estimate must stay NaN instead
    if solar.is_nan() {
        solar
    } else {
        solar.min(clear_sky_radiation)
    }
}

/// Net outgoing longwave radiation, FAO-56 eq. 39.
///
/// Uses the mean of T^4 rather than the fourth power of the mean temperature.
#[inline]
pub fn net_outgoing_longwave(
    t_min_k: f64,
    t_max_k: f64,
    solar_radiation: f64,
    clear_sky_radiation: f64,
    actual_vapor_pressure: f64,
) -> f64 {
    let blackbody = STEFAN_BOLTZMANN * (t_max_k.powi(4) + t_min_k.powi(4)) / 2.;
    let humidity = 0.34 - 0.14 * actual_vapor_pressure.sqrt();
    let cloudiness = 1.35 * (solar_radiation / clear_sky_radiation) - 0.35;
    blackbody * humidity * cloudiness
}

/// Net longwave radiation with vapour pressure and solar radiation both
/// estimated from temperature (interior site).
pub fn net_longwave_radiation(
    t_min_k: f64,
    t_max_k: f64,
    day_of_year: f64,
    elevation: f64,
    latitude: f64,
) -> f64 {
    let avp = actual_vapor_pressure_from_tmin(t_min_k);
    let ra = extraterrestrial(day_of_year, latitude);
    let rso = clear_sky_radiation(elevation, ra);
    let rs = estimated_solar_radiation(ra, rso, t_min_k, t_max_k, false);
    net_outgoing_longwave(t_min_k, t_max_k, rs, rso, avp)
}

/// Net shortwave radiation of a surface receiving clear-sky radiation.
pub fn net_shortwave_radiation(
    elevation: f64,
    albedo: f64,
    day_of_year: f64,
    latitude: f64,
) -> f64 {
    let ra = extraterrestrial(day_of_year, latitude);
    (1. - albedo) * clear_sky_radiation(elevation, ra)
}

/// Net shortwave radiation from measured solar radiation, FAO-56 eq. 38.
#[inline]
pub fn net_shortwave_from_solar(solar_radiation: f64, albedo: f64) -> f64 {
    (1. - albedo) * solar_radiation
}

/// Net radiation, FAO-56 eq. 40.
pub fn net_radiation(
    t_min_k: f64,
    t_max_k: f64,
    day_of_year: f64,
    elevation: f64,
    latitude: f64,
    albedo: f64,
) -> f64 {
    net_shortwave_radiation(elevation, albedo, day_of_year, latitude)
        - net_longwave_radiation(t_min_k, t_max_k, day_of_year, elevation, latitude)
}

/// Every term of one day's radiation balance.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RadiationEstimate {
    pub extraterrestrial: f64,
    pub clear_sky: f64,
    pub solar: f64,
    pub net_shortwave: f64,
    pub net_longwave: f64,
    pub net: f64,
}

impl RadiationEstimate {
    /// Balance with solar radiation estimated from temperature. Vapour pressure
    /// comes from tmin unless measured; with `None` this matches
    /// [`net_radiation`] for interior sites.
    pub fn from_temperature(
        t_min_k: f64,
        t_max_k: f64,
        day_of_year: f64,
        elevation: f64,
        latitude: f64,
        albedo: f64,
        coastal: bool,
        actual_vapor_pressure: Option<f64>,
    ) -> Self {
        let extraterrestrial = extraterrestrial(day_of_year, latitude);
        let clear_sky = clear_sky_radiation(elevation, extraterrestrial);
        let solar =
            estimated_solar_radiation(extraterrestrial, clear_sky, t_min_k, t_max_k, coastal);
        let net_shortwave = (1. - albedo) * clear_sky;
        let avp = actual_vapor_pressure.unwrap_or_else(|| actual_vapor_pressure_from_tmin(t_min_k));
        let net_longwave = net_outgoing_longwave(t_min_k, t_max_k, solar, clear_sky, avp);
        RadiationEstimate {
            extraterrestrial,
            clear_sky,
            solar,
            net_shortwave,
            net_longwave,
            net: net_shortwave - net_longwave,
        }
    }

    /// Balance from measured solar radiation and, when available, measured
    /// vapour pressure. Rs/Rso is capped at 1.
    pub fn from_measured(
        t_min_k: f64,
        t_max_k: f64,
        day_of_year: f64,
        elevation: f64,
        latitude: f64,
        albedo: f64,
        solar: f64,
        actual_vapor_pressure: Option<f64>,
    ) -> Self {
        let extraterrestrial = extraterrestrial(day_of_year, latitude);
        let clear_sky = clear_sky_radiation(elevation, extraterrestrial);
        let avp = actual_vapor_pressure.unwrap_or_else(|| actual_vapor_pressure_from_tmin(t_min_k));
        let relative_solar = if solar > clear_sky { clear_sky } else { solar };
        let net_shortwave = net_shortwave_from_solar(solar, albedo);
        let net_longwave =
            net_outgoing_longwave(t_min_k, t_max_k, relative_solar, clear_sky, avp);
        RadiationEstimate {
            extraterrestrial,
            clear_sky,
            solar,
            net_shortwave,
            net_longwave,
            net: net_shortwave - net_longwave,
        }
    }

    pub fn is_available(&self) -> bool {
        self.net.is_finite()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::celsius_to_kelvin;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    const LAT: f64 = 0.81;

    #[test]
    fn clear_sky_scales_with_elevation() {
        assert_relative_eq!(clear_sky_radiation(0., 40.), 30.);
        assert_relative_eq!(clear_sky_radiation(1000., 40.), 30.8, epsilon = 1e-12);
    }

    #[test]
    fn hargreaves_capped_by_clear_sky() {
        // a 40 degree range would give 0.16 * 6.32 * 40 = 40.5 > 30
        let rs = estimated_solar_radiation(40., 30., 0., 40., false);
        assert_eq!(rs, 30.);
        let rs = estimated_solar_radiation(40., 30., 10., 19., false);
        assert_abs_diff_eq!(rs, 0.16 * 3. * 40., epsilon = 1e-12);
    }

    #[test]
    fn coastal_coefficient_is_larger() {
        let interior = estimated_solar_radiation(30., 100., 10., 20., false);
        let coastal = estimated_solar_radiation(30., 100., 10., 20., true);
        assert_relative_eq!(coastal / interior, 0.19 / 0.16, epsilon = 1e-12);
    }

    #[test]
    fn inverted_temperatures_are_unavailable() {
        assert!(estimated_solar_radiation(30., 25., 20., 10., false).is_nan());
        let rn = net_radiation(
            celsius_to_kelvin(25.),
            celsius_to_kelvin(10.),
            172.,
            1000.,
            LAT,
            0.23,
        );
        assert!(rn.is_nan());
    }

    #[test]
    fn fao56_example_11_longwave() {
        // Tmax 25.1, Tmin 19.1, ea 2.1, Rs/Rso = 14.5/18.8
        let rnl = net_outgoing_longwave(
            celsius_to_kelvin(19.1),
            celsius_to_kelvin(25.1),
            14.5,
            18.8,
            2.1,
        );
        assert_abs_diff_eq!(rnl, 3.5, epsilon = 0.1);
    }

    #[test]
    fn summer_solstice_net_gain() {
        let rn = net_radiation(
            celsius_to_kelvin(10.),
            celsius_to_kelvin(25.),
            172.,
            1000.,
            LAT,
            0.23,
        );
        assert!(rn > 0., "got {rn}");
        assert_abs_diff_eq!(rn, 20.0, epsilon = 0.5);
    }

    #[test]
    fn estimate_from_temperature_matches_composed_functions() {
        let (tmin, tmax) = (celsius_to_kelvin(4.), celsius_to_kelvin(18.));
        let est =
            RadiationEstimate::from_temperature(tmin, tmax, 120., 1500., LAT, 0.23, false, None);
        assert_relative_eq!(
            est.net,
            net_radiation(tmin, tmax, 120., 1500., LAT, 0.23),
            epsilon = 1e-12
        );
        assert_relative_eq!(
            est.net_longwave,
            net_longwave_radiation(tmin, tmax, 120., 1500., LAT),
            epsilon = 1e-12
        );
        assert!(est.solar <= est.clear_sky);
        assert!(est.is_available());
    }

    #[test]
    fn measured_vapor_pressure_drives_temperature_only_longwave() {
        let (tmin, tmax) = (celsius_to_kelvin(8.), celsius_to_kelvin(24.));
        let balance = |ea| {
            RadiationEstimate::from_temperature(tmin, tmax, 180., 900., LAT, 0.23, false, Some(ea))
        };
        let (dry, humid) = (balance(0.5), balance(1.7));
        assert!(dry.net_longwave > humid.net_longwave);
        assert_eq!(dry.solar, humid.solar);
        assert_relative_eq!(
            humid.net_longwave,
            net_outgoing_longwave(tmin, tmax, humid.solar, humid.clear_sky, 1.7),
            epsilon = 1e-12
        );
    }

    #[test]
    fn measured_solar_above_clear_sky_caps_cloudiness() {
        let (tmin, tmax) = (celsius_to_kelvin(12.), celsius_to_kelvin(28.));
        let capped =
            RadiationEstimate::from_measured(tmin, tmax, 200., 800., LAT, 0.23, 1e3, Some(1.2));
        let at_clear_sky = RadiationEstimate::from_measured(
            tmin,
            tmax,
            200.,
            800.,
            LAT,
            0.23,
            capped.clear_sky,
            Some(1.2),
        );
        assert_relative_eq!(capped.net_longwave, at_clear_sky.net_longwave);
        assert_relative_eq!(capped.net_shortwave, 0.77 * 1e3, epsilon = 1e-9);
    }

    #[test]
    fn polar_night_has_no_shortwave() {
        let rns = net_shortwave_radiation(0., 0.23, 355., 1.45);
        assert_abs_diff_eq!(rns, 0.);
    }
}
