//! FAO-56 reference evapotranspiration equations (Allen et al., 1998).

pub mod astronomy;
pub mod psychrometrics;
pub mod radiation;
pub mod reference_et;

/// Solar constant (MJ m-2 min-1).
pub const SOLAR_CONSTANT: f64 = 0.0820;

/// Stefan-Boltzmann constant (MJ K-4 m-2 day-1).
pub const STEFAN_BOLTZMANN: f64 = 4.903e-9;

/// Inverse latent heat of vaporization at 20 degC (kg MJ-1).
pub const ENERGY_TO_EVAPORATION: f64 = 0.408;

pub use astronomy::{
    extraterrestrial_radiation, inverse_earth_sun_distance, solar_declination, sunset_hour_angle,
};
pub use psychrometrics::{actual_vapor_pressure_from_tmin, air_density, atmospheric_pressure};
pub use radiation::{
    clear_sky_radiation, estimated_solar_radiation, net_longwave_radiation, net_radiation,
    net_shortwave_radiation, RadiationEstimate,
};
pub use reference_et::{hargreaves_et0, penman_monteith_et0, ReferenceSurface};
