//! Daily reference ET for a site from normalized observations.

use ndarray::{Array1, ArrayView1, Zip};
use serde::Serialize;
use tracing::{debug, warn};

use crate::data::{DailySeries, DayObservation, Site};
use crate::fao::psychrometrics::{actual_vapor_pressure_from_tmin, wind_speed_at_2m};
use crate::fao::radiation::RadiationEstimate;
use crate::fao::reference_et::{hargreaves_et0, penman_monteith_et0, ReferenceSurface};
use crate::precipitation::{bounded_effective_precipitation, effective_precipitation};
use crate::units::{celsius_to_kelvin, Inches, Millimeters};

/// Every derived quantity for one day. Unavailable terms are NaN.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DailyEstimate {
    pub day_of_year: u16,
    pub radiation: RadiationEstimate,
    /// Standardized Penman-Monteith (mm day-1), NaN without wind.
    pub penman_monteith: f64,
    /// Hargreaves (mm day-1), temperature only.
    pub hargreaves: f64,
}

impl DailyEstimate {
    /// Penman-Monteith when it could be computed, Hargreaves otherwise.
    pub fn reference_et(&self) -> f64 {
        if self.penman_monteith.is_finite() {
            self.penman_monteith
        } else {
            self.hargreaves
        }
    }
}

pub fn estimate_day(
    site: &Site,
    observation: &DayObservation,
    surface: ReferenceSurface,
) -> DailyEstimate {
    let doy = f64::from(observation.day_of_year);
    let t_min_k = celsius_to_kelvin(observation.t_min);
    let t_max_k = celsius_to_kelvin(observation.t_max);

    let radiation = match observation.solar_radiation {
        Some(solar) if solar.is_finite() => RadiationEstimate::from_measured(
            t_min_k,
            t_max_k,
            doy,
            site.elevation(),
            site.latitude(),
            site.albedo(),
            solar,
            observation.actual_vapor_pressure,
        ),
        _ => {
            debug!(
                day_of_year = observation.day_of_year,
                "no measured solar radiation, estimating from temperature"
            );
            RadiationEstimate::from_temperature(
                t_min_k,
                t_max_k,
                doy,
                site.elevation(),
                site.latitude(),
                site.albedo(),
                site.coastal(),
                observation.actual_vapor_pressure,
            )
        }
    };

    let ea = observation
        .actual_vapor_pressure
        .unwrap_or_else(|| actual_vapor_pressure_from_tmin(t_min_k));
    let u2 = wind_speed_at_2m(observation.wind_speed, observation.wind_height);

    let penman_monteith = penman_monteith_et0(
        surface,
        radiation.net,
        observation.t_min,
        observation.t_max,
        u2,
        ea,
        site.elevation(),
    );
    let hargreaves = hargreaves_et0(
        observation.t_min,
        observation.t_max,
        radiation.extraterrestrial,
    );

    if !radiation.is_available() {
        warn!(
            day_of_year = observation.day_of_year,
            t_min = observation.t_min,
            t_max = observation.t_max,
            "radiation balance unavailable"
        );
    }

    DailyEstimate {
        day_of_year: observation.day_of_year,
        radiation,
        penman_monteith,
        hargreaves,
    }
}

pub fn estimate_series(
    site: &Site,
    series: &DailySeries,
    surface: ReferenceSurface,
) -> Vec<DailyEstimate> {
    debug!(days = series.len(), ?surface, "estimating reference ET");
    (0..series.len())
        .map(|i| estimate_day(site, &series.observation(i), surface))
        .collect()
}

fn precipitation_series(
    precipitation: ArrayView1<f64>,
    reference_et: ArrayView1<f64>,
    management_depth: Inches,
    curve: fn(Millimeters, Millimeters, Inches) -> Millimeters,
) -> Array1<f64> {
    Zip::from(&precipitation)
        .and(&reference_et)
        .map_collect(|&p, &et| curve(Millimeters(p), Millimeters(et), management_depth).0)
}

/// Element-wise effective precipitation (mm) for precipitation and reference ET in mm.
pub fn effective_precipitation_series(
    precipitation: ArrayView1<f64>,
    reference_et: ArrayView1<f64>,
    management_depth: Inches,
) -> Array1<f64> {
    precipitation_series(
        precipitation,
        reference_et,
        management_depth,
        effective_precipitation,
    )
}

/// As [`effective_precipitation_series`], each day limited to `[0, min(P, ET)]`.
pub fn bounded_effective_precipitation_series(
    precipitation: ArrayView1<f64>,
    reference_et: ArrayView1<f64>,
    management_depth: Inches,
) -> Array1<f64> {
    precipitation_series(
        precipitation,
        reference_et,
        management_depth,
        bounded_effective_precipitation,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::observation::{EddyFluxRecord, Observation};
    use crate::precipitation::DEFAULT_MANAGEMENT_DEPTH;
    use approx::assert_abs_diff_eq;
    use ndarray::array;

    fn brussels() -> Site {
        Site::from_degrees(50.8, 100.).unwrap()
    }

    fn july_6() -> DayObservation {
        DayObservation::new(187, 12.3, 21.5)
            .unwrap()
            .with_wind(2.078, 2.)
            .with_solar_radiation(22.07)
            .with_actual_vapor_pressure(1.409)
    }

    #[test]
    fn measured_radiation_day() {
        let est = estimate_day(&brussels(), &july_6(), ReferenceSurface::Grass);
        assert_abs_diff_eq!(est.radiation.extraterrestrial, 41.09, epsilon = 0.1);
        assert_abs_diff_eq!(est.radiation.net, 13.28, epsilon = 0.2);
        assert_abs_diff_eq!(est.penman_monteith, 3.9, epsilon = 0.15);
        assert_eq!(est.reference_et(), est.penman_monteith);
    }

    #[test]
    fn temperature_only_day_falls_back_to_hargreaves() {
        let obs = DayObservation::new(187, 12.3, 21.5).unwrap();
        let est = estimate_day(&brussels(), &obs, ReferenceSurface::Grass);
        assert!(est.radiation.is_available());
        assert!(est.penman_monteith.is_nan());
        assert!(est.hargreaves > 0.);
        assert_eq!(est.reference_et(), est.hargreaves);
    }

    #[test]
    fn inverted_temperatures_are_unavailable() {
        let obs = DayObservation::new(187, 25., 10.).unwrap().with_wind(2., 2.);
        let est = estimate_day(&brussels(), &obs, ReferenceSurface::Grass);
        assert!(!est.radiation.is_available());
        assert!(est.penman_monteith.is_nan());
        assert!(est.hargreaves.is_nan());
    }

    #[test]
    fn wind_is_adjusted_to_two_metres() {
        let site = brussels();
        let at_two = estimate_day(&site, &july_6(), ReferenceSurface::Grass);
        let at_ten = estimate_day(
            &site,
            &july_6().with_wind(2.078 / 0.748, 10.),
            ReferenceSurface::Grass,
        );
        assert_abs_diff_eq!(at_two.penman_monteith, at_ten.penman_monteith, epsilon = 0.01);
    }

    #[test]
    fn series_matches_rows() {
        let rows = vec![july_6(), july_6().with_wind(3., 2.)];
        let series = DailySeries::from_observations(&rows).unwrap();
        let estimates = estimate_series(&brussels(), &series, ReferenceSurface::Alfalfa);
        assert_eq!(estimates.len(), 2);
        for (row, est) in rows.iter().zip(&estimates) {
            assert_eq!(*est, estimate_day(&brussels(), row, ReferenceSurface::Alfalfa));
        }
    }

    #[test]
    fn series_keeps_per_row_wind_height() {
        let rows = vec![
            july_6(),
            july_6().with_wind(3.2, 10.),
            july_6().with_wind(2.5, 3.),
        ];
        let series = DailySeries::from_observations(&rows).unwrap();
        let estimates = estimate_series(&brussels(), &series, ReferenceSurface::Grass);
        for (row, est) in rows.iter().zip(&estimates) {
            let day = estimate_day(&brussels(), row, ReferenceSurface::Grass);
            assert_eq!(est.penman_monteith, day.penman_monteith);
        }
    }

    #[test]
    fn measured_vapor_pressure_reaches_longwave_without_solar() {
        let base = DayObservation::new(187, 12.3, 21.5).unwrap().with_wind(2., 2.);
        let with_ea = |ea| {
            estimate_day(
                &brussels(),
                &base.with_actual_vapor_pressure(ea),
                ReferenceSurface::Grass,
            )
        };
        let (dry, humid) = (with_ea(0.5), with_ea(1.7));
        assert!(dry.radiation.net_longwave > humid.radiation.net_longwave);
        assert!(dry.radiation.net < humid.radiation.net);
    }

    #[test]
    fn missing_flux_tower_deficit_leaves_et_unavailable() {
        let record = Observation::EddyFlux(EddyFluxRecord {
            day_of_year: 190,
            t_min: 14.,
            t_max: 31.,
            precipitation: 0.,
            shortwave_in: 290.,
            wind_speed: 2.4,
            wind_height: 4.,
            vapor_pressure_deficit: f64::NAN,
        });
        let obs = record.normalize(&brussels()).unwrap();
        let est = estimate_day(&brussels(), &obs, ReferenceSurface::Grass);
        assert!(est.penman_monteith.is_nan());
    }

    #[test]
    fn effective_precipitation_elementwise() {
        let (precipitation, reference_et) = (array![50., 0.5, f64::NAN], array![150., 100., 100.]);
        let eff = effective_precipitation_series(
            precipitation.view(),
            reference_et.view(),
            DEFAULT_MANAGEMENT_DEPTH,
        );
        assert_abs_diff_eq!(eff[0], 42.45, epsilon = 0.05);
        assert!(eff[1] < 0.);
        assert!(eff[2].is_nan());

        let bounded = bounded_effective_precipitation_series(
            precipitation.view(),
            reference_et.view(),
            DEFAULT_MANAGEMENT_DEPTH,
        );
        assert_eq!(bounded[0], eff[0]);
        assert_eq!(bounded[1], 0.);
        assert!(bounded[2].is_nan());
    }
}
