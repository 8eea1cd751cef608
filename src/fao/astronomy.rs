//! Solar geometry as a function of day of year and latitude (FAO-56 eqs. 21-25).

use std::f64::consts::PI;

use super::SOLAR_CONSTANT;

/// Solar declination (rad), FAO-56 eq. 24.
#[inline]
pub fn solar_declination(day_of_year: f64) -> f64 {
    0.409 * (2. * PI / 365. * day_of_year - 1.39).sin()
}

/// Inverse relative distance Earth-Sun (dimensionless), FAO-56 eq. 23.
#[inline]
pub fn inverse_earth_sun_distance(day_of_year: f64) -> f64 {
    1. + 0.033 * (2. * PI / 365. * day_of_year).cos()
}

/// Sunset hour angle (rad), FAO-56 eq. 25.
///
/// The arccos argument is clamped to [-1, 1]: beyond it the sun never sets
/// (polar day, returns pi) or never rises (polar night, returns 0).
#[inline]
pub fn sunset_hour_angle(latitude: f64, solar_declination: f64) -> f64 {
    (-latitude.tan() * solar_declination.tan())
        .clamp(-1., 1.)
        .acos()
}

/// Daily extraterrestrial radiation (MJ m-2 day-1), FAO-56 eq. 21.
///
/// The equation has limited validity in winter poleward of 55 degrees.
#[inline]
pub fn extraterrestrial_radiation(
    latitude: f64,
    solar_declination: f64,
    sunset_hour_angle: f64,
    inverse_earth_sun_distance: f64,
) -> f64 {
    24. * 60. / PI
        * SOLAR_CONSTANT
        * inverse_earth_sun_distance
        * (sunset_hour_angle * latitude.sin() * solar_declination.sin()
            + latitude.cos() * solar_declination.cos() * sunset_hour_angle.sin())
}

/// Extraterrestrial radiation for a latitude (rad) and day of year.
pub fn extraterrestrial_radiation_for_day(latitude: f64, day_of_year: f64) -> f64 {
    let declination = solar_declination(day_of_year);
    let omega = sunset_hour_angle(latitude, declination);
    extraterrestrial_radiation(
        latitude,
        declination,
        omega,
        inverse_earth_sun_distance(day_of_year),
    )
}

/// Maximum possible duration of sunshine (h), FAO-56 eq. 34.
#[inline]
pub fn daylight_hours(sunset_hour_angle: f64) -> f64 {
    24. / PI * sunset_hour_angle
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::degrees_to_radians;
    use approx::assert_abs_diff_eq;

    #[test]
    fn declination_near_solstices() {
        assert_abs_diff_eq!(solar_declination(172.), 0.409, epsilon = 1e-3);
        assert_abs_diff_eq!(solar_declination(355.), -0.409, epsilon = 2e-3);
    }

    #[test]
    fn fao56_example_8() {
        // 20 S, 3 September
        let latitude = degrees_to_radians(-20.);
        let doy = 246.;
        assert_abs_diff_eq!(inverse_earth_sun_distance(doy), 0.985, epsilon = 1e-3);
        assert_abs_diff_eq!(solar_declination(doy), 0.120, epsilon = 1e-3);
        let omega = sunset_hour_angle(latitude, solar_declination(doy));
        assert_abs_diff_eq!(omega, 1.527, epsilon = 1e-3);
        assert_abs_diff_eq!(
            extraterrestrial_radiation_for_day(latitude, doy),
            32.2,
            epsilon = 0.1
        );
    }

    #[test]
    fn equator_has_twelve_hour_days() {
        let omega = sunset_hour_angle(0., solar_declination(80.));
        assert_abs_diff_eq!(daylight_hours(omega), 12., epsilon = 1e-9);
    }

    #[test]
    fn polar_day_and_night_are_clamped() {
        let arctic = degrees_to_radians(80.);
        let summer = sunset_hour_angle(arctic, solar_declination(172.));
        let winter = sunset_hour_angle(arctic, solar_declination(355.));
        assert_abs_diff_eq!(summer, PI);
        assert_abs_diff_eq!(winter, 0.);
        assert_abs_diff_eq!(
            extraterrestrial_radiation(arctic, solar_declination(355.), winter, 1.03),
            0.
        );
    }

    #[test]
    fn nan_day_propagates() {
        assert!(solar_declination(f64::NAN).is_nan());
    }
}
