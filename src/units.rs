//! Unit conversions applied at the ingestion boundary.
//!
//! Everything past the provider adapters works in Celsius (Kelvin where the
//! radiation equations ask for it), millimetres, metres per second, metres and
//! MJ m-2 day-1. Each conversion is applied once, when a record is normalized.

use serde::{Deserialize, Serialize};
use std::f64::consts::PI;
use std::fmt;
use std::ops::Deref;

pub const MM_PER_INCH: f64 = 25.4;
pub const M_PER_FOOT: f64 = 0.3048;
pub const M_PER_MILE: f64 = 1609.34;
pub const M_S_PER_MPH: f64 = 0.44704;
pub const KELVIN_OFFSET: f64 = 273.15;

/// One langley is one thermochemical calorie per square centimetre.
pub const J_M2_PER_LANGLEY: f64 = 41_840.0;
/// Langleys in one MJ m-2 (1e6 / 41 840).
pub const LANGLEYS_PER_MJ_M2: f64 = 23.900574;
pub const SECONDS_PER_DAY: f64 = 86_400.0;

#[inline]
pub fn inches_to_mm(inches: f64) -> f64 {
    inches * MM_PER_INCH
}

#[inline]
pub fn mm_to_inches(mm: f64) -> f64 {
    mm / MM_PER_INCH
}

#[inline]
pub fn fahrenheit_to_celsius(fahrenheit: f64) -> f64 {
    (fahrenheit - 32.) * 5. / 9.
}

#[inline]
pub fn celsius_to_fahrenheit(celsius: f64) -> f64 {
    celsius * 9. / 5. + 32.
}

#[inline]
pub fn celsius_to_kelvin(celsius: f64) -> f64 {
    celsius + KELVIN_OFFSET
}

#[inline]
pub fn kelvin_to_celsius(kelvin: f64) -> f64 {
    kelvin - KELVIN_OFFSET
}

#[inline]
pub fn mph_to_m_per_s(mph: f64) -> f64 {
    mph * M_S_PER_MPH
}

#[inline]
pub fn m_per_s_to_mph(m_per_s: f64) -> f64 {
    m_per_s / M_S_PER_MPH
}

#[inline]
pub fn miles_to_m(miles: f64) -> f64 {
    miles * M_PER_MILE
}

#[inline]
pub fn m_to_miles(m: f64) -> f64 {
    m / M_PER_MILE
}

#[inline]
pub fn feet_to_m(feet: f64) -> f64 {
    feet * M_PER_FOOT
}

#[inline]
pub fn degrees_to_radians(degrees: f64) -> f64 {
    degrees * PI / 180.
}

#[inline]
pub fn radians_to_degrees(radians: f64) -> f64 {
    radians * 180. / PI
}

/// Daily radiation total in langleys to MJ m-2.
#[inline]
pub fn langleys_to_mj_per_m2(langleys: f64) -> f64 {
    langleys / LANGLEYS_PER_MJ_M2
}

#[inline]
pub fn mj_per_m2_to_langleys(mj_per_m2: f64) -> f64 {
    mj_per_m2 * LANGLEYS_PER_MJ_M2
}

/// Langleys per day to a mean flux density in W m-2.
#[inline]
pub fn langleys_per_day_to_w_per_m2(langleys: f64) -> f64 {
    langleys * J_M2_PER_LANGLEY / SECONDS_PER_DAY
}

#[inline]
pub fn w_per_m2_to_langleys_per_day(w_per_m2: f64) -> f64 {
    w_per_m2 * SECONDS_PER_DAY / J_M2_PER_LANGLEY
}

/// Mean daily flux density in W m-2 to a daily total in MJ m-2 day-1.
#[inline]
pub fn w_per_m2_to_mj_per_m2_day(w_per_m2: f64) -> f64 {
    w_per_m2 * SECONDS_PER_DAY / 1e6
}

#[inline]
pub fn mj_per_m2_day_to_w_per_m2(mj_per_m2: f64) -> f64 {
    mj_per_m2 * 1e6 / SECONDS_PER_DAY
}

#[inline]
pub fn hpa_to_kpa(hpa: f64) -> f64 {
    hpa / 10.
}

/// A single column conversion from a provider's native unit to the canonical
/// one. Adapters hold these by value, there is no shared lookup table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Conversion {
    Identity,
    InchesToMillimeters,
    FahrenheitToCelsius,
    KelvinToCelsius,
    MphToMetersPerSecond,
    MilesToMeters,
    FeetToMeters,
    LangleysToMegajoules,
    WattsToMegajoulesPerDay,
    HectopascalsToKilopascals,
}

impl Conversion {
    #[inline]
    pub fn apply(self, value: f64) -> f64 {
        match self {
            Conversion::Identity => value,
            Conversion::InchesToMillimeters => inches_to_mm(value),
            Conversion::FahrenheitToCelsius => fahrenheit_to_celsius(value),
            Conversion::KelvinToCelsius => kelvin_to_celsius(value),
            Conversion::MphToMetersPerSecond => mph_to_m_per_s(value),
            Conversion::MilesToMeters => miles_to_m(value),
            Conversion::FeetToMeters => feet_to_m(value),
            Conversion::LangleysToMegajoules => langleys_to_mj_per_m2(value),
            Conversion::WattsToMegajoulesPerDay => w_per_m2_to_mj_per_m2_day(value),
            Conversion::HectopascalsToKilopascals => hpa_to_kpa(value),
        }
    }
}

/// Water depth in inches.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[repr(transparent)]
pub struct Inches(pub f64);

/// Water depth in millimetres.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[repr(transparent)]
pub struct Millimeters(pub f64);

impl Deref for Inches {
    type Target = f64;
    #[inline]
    fn deref(&self) -> &f64 {
        &self.0
    }
}

impl Deref for Millimeters {
    type Target = f64;
    #[inline]
    fn deref(&self) -> &f64 {
        &self.0
    }
}

impl From<Millimeters> for Inches {
    #[inline]
    fn from(mm: Millimeters) -> Self {
        Inches(mm_to_inches(mm.0))
    }
}

impl From<Inches> for Millimeters {
    #[inline]
    fn from(inches: Inches) -> Self {
        Millimeters(inches_to_mm(inches.0))
    }
}

impl fmt::Display for Inches {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} in", self.0)
    }
}

impl fmt::Display for Millimeters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} mm", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    // -- scalar conversions --

    #[test]
    fn freezing_and_boiling_points() {
        assert_relative_eq!(fahrenheit_to_celsius(32.0), 0.0);
        assert_relative_eq!(fahrenheit_to_celsius(212.0), 100.0);
        assert_relative_eq!(celsius_to_fahrenheit(-40.0), -40.0);
    }

    #[test]
    fn one_inch_is_25_4_mm() {
        assert_relative_eq!(inches_to_mm(1.0), 25.4);
        assert_relative_eq!(mm_to_inches(50.8), 2.0);
    }

    #[test]
    fn wind_and_distance() {
        assert_relative_eq!(mph_to_m_per_s(10.0), 4.4704, epsilon = 1e-12);
        assert_relative_eq!(miles_to_m(2.0), 3218.68);
        assert_relative_eq!(feet_to_m(1000.0), 304.8, epsilon = 1e-12);
    }

    #[test]
    fn kelvin_offset() {
        assert_relative_eq!(celsius_to_kelvin(10.0), 283.15, epsilon = 1e-12);
        assert_relative_eq!(kelvin_to_celsius(298.15), 25.0, epsilon = 1e-12);
    }

    #[test]
    fn degrees_radians() {
        assert_relative_eq!(degrees_to_radians(180.0), PI, epsilon = 1e-12);
        assert_relative_eq!(radians_to_degrees(PI / 2.0), 90.0, epsilon = 1e-12);
    }

    // -- radiation --

    #[test]
    fn langley_factor_matches_calorie_definition() {
        assert_relative_eq!(
            LANGLEYS_PER_MJ_M2,
            1e6 / J_M2_PER_LANGLEY,
            max_relative = 1e-7
        );
        assert_relative_eq!(langleys_to_mj_per_m2(500.0), 20.92, epsilon = 1e-3);
    }

    #[test]
    fn langleys_per_day_as_flux() {
        // 500 ly/day is a clear summer day, about 242 W m-2 around the clock
        assert_relative_eq!(langleys_per_day_to_w_per_m2(500.0), 242.13, epsilon = 1e-2);
        assert_relative_eq!(
            w_per_m2_to_langleys_per_day(langleys_per_day_to_w_per_m2(321.0)),
            321.0,
            epsilon = 1e-9
        );
    }

    #[test]
    fn langley_paths_agree() {
        let ly = 612.0;
        let via_flux = w_per_m2_to_mj_per_m2_day(langleys_per_day_to_w_per_m2(ly));
        assert_relative_eq!(via_flux, langleys_to_mj_per_m2(ly), max_relative = 1e-7);
    }

    #[test]
    fn watts_to_daily_megajoules() {
        assert_relative_eq!(w_per_m2_to_mj_per_m2_day(100.0), 8.64);
        assert_relative_eq!(mj_per_m2_day_to_w_per_m2(8.64), 100.0, epsilon = 1e-12);
    }

    // -- Conversion descriptor --

    #[test]
    fn conversion_apply_dispatches() {
        assert_relative_eq!(Conversion::InchesToMillimeters.apply(2.0), 50.8);
        assert_relative_eq!(Conversion::FahrenheitToCelsius.apply(50.0), 10.0);
        assert_relative_eq!(Conversion::KelvinToCelsius.apply(273.15), 0.0);
        assert_relative_eq!(Conversion::HectopascalsToKilopascals.apply(12.0), 1.2);
        assert_relative_eq!(Conversion::Identity.apply(7.5), 7.5);
    }

    // -- typed depths --

    #[test]
    fn typed_depths_convert_through_from() {
        let inches: Inches = Millimeters(76.2).into();
        assert_relative_eq!(*inches, 3.0, epsilon = 1e-12);
        let mm = Millimeters::from(Inches(0.5));
        assert_relative_eq!(mm.0, 12.7);
        assert_eq!(format!("{}", Inches(3.0)), "3 in");
    }
}
