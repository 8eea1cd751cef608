//! Provider records and their adapters to [`DayObservation`].
//!
//! Each agency reports in its own units. A record keeps the native values and
//! `normalize` applies that provider's [`ProviderUnits`] exactly once.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::data::{DayObservation, Error, Site};
use crate::fao::psychrometrics::{
    actual_vapor_pressure_from_dewpoint, atmospheric_pressure, mean_saturation_vapor_pressure,
};
use crate::units::Conversion;

/// Native units of one provider's columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProviderUnits {
    pub temperature: Conversion,
    pub depth: Conversion,
    pub radiation: Conversion,
    pub wind: Conversion,
}

pub const AGRIMET_UNITS: ProviderUnits = ProviderUnits {
    temperature: Conversion::FahrenheitToCelsius,
    depth: Conversion::InchesToMillimeters,
    radiation: Conversion::LangleysToMegajoules,
    wind: Conversion::MphToMetersPerSecond,
};

pub const GRIDMET_UNITS: ProviderUnits = ProviderUnits {
    temperature: Conversion::KelvinToCelsius,
    depth: Conversion::Identity,
    radiation: Conversion::WattsToMegajoulesPerDay,
    wind: Conversion::Identity,
};

pub const MESONET_UNITS: ProviderUnits = ProviderUnits {
    temperature: Conversion::Identity,
    depth: Conversion::Identity,
    radiation: Conversion::WattsToMegajoulesPerDay,
    wind: Conversion::Identity,
};

pub const EDDY_FLUX_UNITS: ProviderUnits = ProviderUnits {
    temperature: Conversion::Identity,
    depth: Conversion::Identity,
    radiation: Conversion::WattsToMegajoulesPerDay,
    wind: Conversion::Identity,
};

/// gridMET wind is interpolated to 10 m.
pub const GRIDMET_WIND_HEIGHT: f64 = 10.0;

/// AgriMet daily record (imperial units).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AgrimetRecord {
    pub day_of_year: u16,
    /// MN, degF
    pub t_min: f64,
    /// MX, degF
    pub t_max: f64,
    /// PP, in
    pub precipitation: f64,
    /// SR, langleys
    pub solar_radiation: Option<f64>,
    /// UA, mph at 2 m
    pub wind_speed: f64,
    /// YM, degF
    pub dewpoint: Option<f64>,
    /// ETrs, in
    pub reference_et: Option<f64>,
}

/// gridMET cell value (metric, temperatures in Kelvin).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridmetRecord {
    pub day_of_year: u16,
    /// tmmn, K
    pub t_min: f64,
    /// tmmx, K
    pub t_max: f64,
    /// pr, mm
    pub precipitation: f64,
    /// srad, W m-2
    pub solar_radiation: f64,
    /// vs, m s-1 at 10 m
    pub wind_speed: f64,
    /// sph, kg kg-1
    pub specific_humidity: Option<f64>,
    /// etr, mm
    pub reference_et: Option<f64>,
}

/// State mesonet station, daily aggregates of logger values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MesonetRecord {
    pub day_of_year: u16,
    /// degC
    pub t_min: f64,
    /// degC
    pub t_max: f64,
    /// mm
    pub precipitation: f64,
    /// mean W m-2
    pub solar_radiation: f64,
    /// m s-1
    pub wind_speed: f64,
    /// anemometer height, m
    pub wind_height: f64,
    /// kPa
    pub vapor_pressure: f64,
}

/// Eddy-covariance tower, FLUXNET-style daily variables.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EddyFluxRecord {
    pub day_of_year: u16,
    /// TA min, degC
    pub t_min: f64,
    /// TA max, degC
    pub t_max: f64,
    /// P, mm
    pub precipitation: f64,
    /// SW_IN, W m-2
    pub shortwave_in: f64,
    /// WS, m s-1
    pub wind_speed: f64,
    /// measurement height, m
    pub wind_height: f64,
    /// VPD, hPa
    pub vapor_pressure_deficit: f64,
}

/// One day from any supported provider.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "provider", rename_all = "snake_case")]
pub enum Observation {
    Agrimet(AgrimetRecord),
    Gridmet(GridmetRecord),
    Mesonet(MesonetRecord),
    EddyFlux(EddyFluxRecord),
}

impl Observation {
    pub fn units(&self) -> ProviderUnits {
        match self {
            Observation::Agrimet(_) => AGRIMET_UNITS,
            Observation::Gridmet(_) => GRIDMET_UNITS,
            Observation::Mesonet(_) => MESONET_UNITS,
            Observation::EddyFlux(_) => EDDY_FLUX_UNITS,
        }
    }

    /// Convert to canonical units. `site` supplies the elevation needed to turn
    /// specific humidity into vapour pressure.
    pub fn normalize(&self, site: &Site) -> Result<DayObservation, Error> {
        let units = self.units();
        let observation = match *self {
            Observation::Agrimet(r) => {
                let mut obs = DayObservation::new(
                    r.day_of_year,
                    units.temperature.apply(r.t_min),
                    units.temperature.apply(r.t_max),
                )?
                .with_precipitation(units.depth.apply(r.precipitation))
                .with_wind(units.wind.apply(r.wind_speed), 2.0);
                obs.solar_radiation = r.solar_radiation.map(|sr| units.radiation.apply(sr));
                obs.actual_vapor_pressure = r.dewpoint.map(|td| {
                    actual_vapor_pressure_from_dewpoint(units.temperature.apply(td))
                });
                obs.reference_et = r.reference_et.map(|et| units.depth.apply(et));
                obs
            }
            Observation::Gridmet(r) => {
                let mut obs = DayObservation::new(
                    r.day_of_year,
                    units.temperature.apply(r.t_min),
                    units.temperature.apply(r.t_max),
                )?
                .with_precipitation(units.depth.apply(r.precipitation))
                .with_wind(units.wind.apply(r.wind_speed), GRIDMET_WIND_HEIGHT)
                .with_solar_radiation(units.radiation.apply(r.solar_radiation));
                obs.actual_vapor_pressure = r.specific_humidity.map(|q| {
                    vapor_pressure_from_specific_humidity(q, atmospheric_pressure(site.elevation()))
                });
                obs.reference_et = r.reference_et.map(|et| units.depth.apply(et));
                obs
            }
            Observation::Mesonet(r) => DayObservation::new(
                r.day_of_year,
                units.temperature.apply(r.t_min),
                units.temperature.apply(r.t_max),
            )?
            .with_precipitation(units.depth.apply(r.precipitation))
            .with_wind(units.wind.apply(r.wind_speed), r.wind_height)
            .with_solar_radiation(units.radiation.apply(r.solar_radiation))
            .with_actual_vapor_pressure(r.vapor_pressure),
            Observation::EddyFlux(r) => {
                let t_min = units.temperature.apply(r.t_min);
                let t_max = units.temperature.apply(r.t_max);
                let deficit = Conversion::HectopascalsToKilopascals.apply(r.vapor_pressure_deficit);
                let ea = mean_saturation_vapor_pressure(t_min, t_max) - deficit;
                // f64::max drops NaN, a gap in the deficit record must stay missing
                let ea = if ea.is_nan() { ea } else { ea.max(0.) };
                DayObservation::new(r.day_of_year, t_min, t_max)?
                    .with_precipitation(units.depth.apply(r.precipitation))
                    .with_wind(units.wind.apply(r.wind_speed), r.wind_height)
                    .with_solar_radiation(units.radiation.apply(r.shortwave_in))
                    .with_actual_vapor_pressure(ea)
            }
        };
        trace!(day_of_year = observation.day_of_year, ?units, "normalized observation");
        Ok(observation)
    }
}

/// Actual vapour pressure (kPa) from specific humidity (kg kg-1) and pressure (kPa).
#[inline]
pub fn vapor_pressure_from_specific_humidity(specific_humidity: f64, pressure: f64) -> f64 {
    specific_humidity * pressure / (0.622 + 0.378 * specific_humidity)
}

/// Capability to resolve a station or cell key to a site.
pub trait SiteResolver {
    fn resolve(&self, key: &str) -> Result<Site, Error>;
}

/// Immutable station table, typically deserialized from a config file.
/// Keys are case-insensitive.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(from = "HashMap<String, Site>", into = "HashMap<String, Site>")]
pub struct SiteTable {
    sites: HashMap<String, Site>,
}

impl SiteTable {
    pub fn new(sites: HashMap<String, Site>) -> Self {
        sites.into_iter().collect()
    }

    pub fn len(&self) -> usize {
        self.sites.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sites.is_empty()
    }
}

impl FromIterator<(String, Site)> for SiteTable {
    fn from_iter<I: IntoIterator<Item = (String, Site)>>(iter: I) -> Self {
        SiteTable {
            sites: iter
                .into_iter()
                .map(|(key, site)| (key.to_lowercase(), site))
                .collect(),
        }
    }
}

impl From<HashMap<String, Site>> for SiteTable {
    fn from(sites: HashMap<String, Site>) -> Self {
        sites.into_iter().collect()
    }
}

impl From<SiteTable> for HashMap<String, Site> {
    fn from(table: SiteTable) -> Self {
        table.sites
    }
}

impl SiteResolver for SiteTable {
    fn resolve(&self, key: &str) -> Result<Site, Error> {
        self.sites
            .get(&key.to_lowercase())
            .copied()
            .ok_or_else(|| Error::UnknownSite(key.to_string()))
    }
}

/// Resolve the site for `key`, then normalize every record against it.
pub fn normalize_records<R: SiteResolver + ?Sized>(
    resolver: &R,
    key: &str,
    records: &[Observation],
) -> Result<(Site, Vec<DayObservation>), Error> {
    let site = resolver.resolve(key)?;
    let observations = records
        .iter()
        .map(|r| r.normalize(&site))
        .collect::<Result<Vec<_>, _>>()?;
    Ok((site, observations))
}
