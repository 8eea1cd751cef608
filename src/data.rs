use crate::units::degrees_to_radians;
use serde::{Deserialize, Serialize};
use std::f64::consts::FRAC_PI_2;
use thiserror::Error;

/// Albedo of the FAO-56 hypothetical grass reference crop.
pub const GRASS_ALBEDO: f64 = 0.23;

/// Height of standard agrometeorological wind measurements (m).
pub const STANDARD_WIND_HEIGHT: f64 = 2.0;

#[derive(Error, Debug)]
pub enum Error {
    #[error(
        "day_of_year, t_min, t_max, precipitation and wind_speed must have the same length \
         (got {0}, {1}, {2}, {3} and {4})"
    )]
    LengthMismatch(usize, usize, usize, usize, usize),
    #[error("optional column '{0}' has length {1}, expected {2}")]
    OptionalLengthMismatch(&'static str, usize, usize),
    #[error("latitude must be within [-pi/2, pi/2] radians (got {0})")]
    LatitudeOutOfRange(f64),
    #[error("albedo must be within [0, 1] (got {0})")]
    AlbedoOutOfRange(f64),
    #[error("day of year must be within [1, 366] (got {0})")]
    DayOfYearOutOfRange(u16),
    #[error("Unknown site '{0}'")]
    UnknownSite(String),
    #[error("Unknown reference surface '{0}', expected 'grass' or 'alfalfa'")]
    UnknownSurface(String),
}

#[cfg(feature = "python")]
impl From<Error> for pyo3::PyErr {
    fn from(err: Error) -> pyo3::PyErr {
        pyo3::exceptions::PyValueError::new_err(err.to_string())
    }
}

/// A location for which radiation and ET are computed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "SiteConfig", into = "SiteConfig")]
pub struct Site {
    latitude: f64,
    elevation: f64,
    albedo: f64,
    coastal: bool,
}

impl Site {
    /// Latitude in radians (north positive), elevation in metres.
    pub fn new(latitude: f64, elevation: f64, albedo: f64) -> Result<Self, Error> {
        if !(latitude.abs() <= FRAC_PI_2) {
            return Err(Error::LatitudeOutOfRange(latitude));
        }
        if !(0.0..=1.0).contains(&albedo) {
            return Err(Error::AlbedoOutOfRange(albedo));
        }
        Ok(Site {
            latitude,
            elevation,
            albedo,
            coastal: false,
        })
    }

    /// Grass reference site from decimal degrees, the way site locators report it.
    pub fn from_degrees(latitude: f64, elevation: f64) -> Result<Self, Error> {
        Site::new(degrees_to_radians(latitude), elevation, GRASS_ALBEDO)
    }

    pub fn with_coastal(mut self, coastal: bool) -> Self {
        self.coastal = coastal;
        self
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    pub fn elevation(&self) -> f64 {
        self.elevation
    }

    pub fn albedo(&self) -> f64 {
        self.albedo
    }

    pub fn coastal(&self) -> bool {
        self.coastal
    }
}

/// Serialized form of [`Site`], latitude in decimal degrees.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    pub latitude: f64,
    pub elevation: f64,
    #[serde(default = "default_albedo")]
    pub albedo: f64,
    #[serde(default)]
    pub coastal: bool,
}

fn default_albedo() -> f64 {
    GRASS_ALBEDO
}

impl TryFrom<SiteConfig> for Site {
    type Error = Error;

    fn try_from(config: SiteConfig) -> Result<Self, Error> {
        Ok(Site::new(
            degrees_to_radians(config.latitude),
            config.elevation,
            config.albedo,
        )?
        .with_coastal(config.coastal))
    }
}

impl From<Site> for SiteConfig {
    fn from(site: Site) -> Self {
        SiteConfig {
            latitude: site.latitude.to_degrees(),
            elevation: site.elevation,
            albedo: site.albedo,
            coastal: site.coastal,
        }
    }
}

/// One day of canonical-unit weather: temperatures in Celsius, depths in mm,
/// wind in m s-1 at `wind_height` metres, radiation in MJ m-2 day-1,
/// vapour pressure in kPa.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DayObservation {
    pub day_of_year: u16,
    pub t_min: f64,
    pub t_max: f64,
    pub precipitation: f64,
    pub wind_speed: f64,
    #[serde(default = "default_wind_height")]
    pub wind_height: f64,
    #[serde(default)]
    pub solar_radiation: Option<f64>,
    #[serde(default)]
    pub actual_vapor_pressure: Option<f64>,
    #[serde(default)]
    pub reference_et: Option<f64>,
}

fn default_wind_height() -> f64 {
    STANDARD_WIND_HEIGHT
}

impl DayObservation {
    pub fn new(day_of_year: u16, t_min: f64, t_max: f64) -> Result<Self, Error> {
        if !(1..=366).contains(&day_of_year) {
            return Err(Error::DayOfYearOutOfRange(day_of_year));
        }
        Ok(DayObservation {
            day_of_year,
            t_min,
            t_max,
            precipitation: 0.0,
            wind_speed: f64::NAN,
            wind_height: STANDARD_WIND_HEIGHT,
            solar_radiation: None,
            actual_vapor_pressure: None,
            reference_et: None,
        })
    }

    pub fn with_precipitation(mut self, precipitation: f64) -> Self {
        self.precipitation = precipitation;
        self
    }

    pub fn with_wind(mut self, wind_speed: f64, wind_height: f64) -> Self {
        self.wind_speed = wind_speed;
        self.wind_height = wind_height;
        self
    }

    pub fn with_solar_radiation(mut self, solar_radiation: f64) -> Self {
        self.solar_radiation = Some(solar_radiation);
        self
    }

    pub fn with_actual_vapor_pressure(mut self, actual_vapor_pressure: f64) -> Self {
        self.actual_vapor_pressure = Some(actual_vapor_pressure);
        self
    }

    pub fn with_reference_et(mut self, reference_et: f64) -> Self {
        self.reference_et = Some(reference_et);
        self
    }
}

/// Column-oriented daily series for one site, validated for equal lengths.
/// Wind height is per row, records from different providers may mix heights.
#[derive(Debug, Clone)]
pub struct DailySeries {
    pub day_of_year: Vec<u16>,
    pub t_min: Vec<f64>,
    pub t_max: Vec<f64>,
    pub precipitation: Vec<f64>,
    pub wind_speed: Vec<f64>,
    pub wind_height: Vec<f64>,
    pub solar_radiation: Option<Vec<f64>>,
    pub actual_vapor_pressure: Option<Vec<f64>>,
}

impl DailySeries {
    pub fn new(
        day_of_year: Vec<u16>,
        t_min: Vec<f64>,
        t_max: Vec<f64>,
        precipitation: Vec<f64>,
        wind_speed: Vec<f64>,
    ) -> Result<Self, Error> {
        let n = day_of_year.len();
        if t_min.len() != n
            || t_max.len() != n
            || precipitation.len() != n
            || wind_speed.len() != n
        {
            return Err(Error::LengthMismatch(
                n,
                t_min.len(),
                t_max.len(),
                precipitation.len(),
                wind_speed.len(),
            ));
        }
        if let Some(&doy) = day_of_year.iter().find(|d| !(1..=366).contains(*d)) {
            return Err(Error::DayOfYearOutOfRange(doy));
        }

        Ok(DailySeries {
            day_of_year,
            t_min,
            t_max,
            precipitation,
            wind_speed,
            wind_height: vec![STANDARD_WIND_HEIGHT; n],
            solar_radiation: None,
            actual_vapor_pressure: None,
        })
    }

    /// Build from row records; optional columns are kept only when every row has them.
    pub fn from_observations(observations: &[DayObservation]) -> Result<Self, Error> {
        let mut series = DailySeries::new(
            observations.iter().map(|o| o.day_of_year).collect(),
            observations.iter().map(|o| o.t_min).collect(),
            observations.iter().map(|o| o.t_max).collect(),
            observations.iter().map(|o| o.precipitation).collect(),
            observations.iter().map(|o| o.wind_speed).collect(),
        )?;
        series.wind_height = observations.iter().map(|o| o.wind_height).collect();
        series.solar_radiation = observations.iter().map(|o| o.solar_radiation).collect();
        series.actual_vapor_pressure = observations
            .iter()
            .map(|o| o.actual_vapor_pressure)
            .collect();
        Ok(series)
    }

    /// Same anemometer height for every day.
    pub fn with_wind_height(mut self, wind_height: f64) -> Self {
        self.wind_height = vec![wind_height; self.len()];
        self
    }

    pub fn with_solar_radiation(mut self, solar_radiation: Vec<f64>) -> Result<Self, Error> {
        self.check_optional("solar_radiation", solar_radiation.len())?;
        self.solar_radiation = Some(solar_radiation);
        Ok(self)
    }

    pub fn with_actual_vapor_pressure(
        mut self,
        actual_vapor_pressure: Vec<f64>,
    ) -> Result<Self, Error> {
        self.check_optional("actual_vapor_pressure", actual_vapor_pressure.len())?;
        self.actual_vapor_pressure = Some(actual_vapor_pressure);
        Ok(self)
    }

    fn check_optional(&self, name: &'static str, len: usize) -> Result<(), Error> {
        if len != self.len() {
            Err(Error::OptionalLengthMismatch(name, len, self.len()))
        } else {
            Ok(())
        }
    }

    pub fn len(&self) -> usize {
        self.day_of_year.len()
    }

    pub fn is_empty(&self) -> bool {
        self.day_of_year.is_empty()
    }

    /// Row view of day `i`.
    pub fn observation(&self, i: usize) -> DayObservation {
        DayObservation {
            day_of_year: self.day_of_year[i],
            t_min: self.t_min[i],
            t_max: self.t_max[i],
            precipitation: self.precipitation[i],
            wind_speed: self.wind_speed[i],
            wind_height: self.wind_height[i],
            solar_radiation: self.solar_radiation.as_ref().map(|v| v[i]),
            actual_vapor_pressure: self.actual_vapor_pressure.as_ref().map(|v| v[i]),
            reference_et: None,
        }
    }
}
