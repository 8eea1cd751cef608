use approx::assert_abs_diff_eq;
use met_rs::estimate::{bounded_effective_precipitation_series, effective_precipitation_series};
use met_rs::observation::normalize_records;
use met_rs::precipitation::DEFAULT_MANAGEMENT_DEPTH;
use met_rs::{estimate_series, DailySeries, Observation, ReferenceSurface, SiteTable};
use ndarray::Array1;

const SITES: &str = r#"{
    "covm": {"latitude": 46.33, "elevation": 1100.0},
    "bfam": {"latitude": 45.69, "elevation": 1400.0, "albedo": 0.23}
}"#;

const AGRIMET_WEEK: &str = r#"[
    {"provider": "agrimet", "day_of_year": 190, "t_min": 50.0, "t_max": 86.0, "precipitation": 0.0,
     "solar_radiation": 680.0, "wind_speed": 4.5, "dewpoint": 42.0, "reference_et": 0.33},
    {"provider": "agrimet", "day_of_year": 191, "t_min": 52.0, "t_max": 88.0, "precipitation": 0.0,
     "solar_radiation": 690.0, "wind_speed": 5.0, "dewpoint": 43.0, "reference_et": 0.35},
    {"provider": "agrimet", "day_of_year": 192, "t_min": 55.0, "t_max": 75.0, "precipitation": 0.6,
     "solar_radiation": 420.0, "wind_speed": 8.0, "dewpoint": 50.0, "reference_et": 0.22}
]"#;

#[test]
fn agrimet_records_to_alfalfa_et() {
    let sites: SiteTable = serde_json::from_str(SITES).unwrap();
    let records: Vec<Observation> = serde_json::from_str(AGRIMET_WEEK).unwrap();
    let (site, days) = normalize_records(&sites, "COVM", &records).unwrap();

    let series = DailySeries::from_observations(&days).unwrap();
    assert!(series.solar_radiation.is_some());
    let estimates = estimate_series(&site, &series, ReferenceSurface::Alfalfa);

    for (day, est) in days.iter().zip(&estimates) {
        assert!(est.radiation.is_available());
        let reported = day.reference_et.unwrap();
        assert!(est.penman_monteith > 0.);
        // same equation the agency runs, within a loose band for rounding of reported inputs
        assert_abs_diff_eq!(est.penman_monteith, reported, epsilon = 0.35 * reported);
    }
    assert!(estimates[2].penman_monteith < estimates[1].penman_monteith);
}

#[test]
fn effective_precipitation_from_normalized_days() {
    let sites: SiteTable = serde_json::from_str(SITES).unwrap();
    let records: Vec<Observation> = serde_json::from_str(AGRIMET_WEEK).unwrap();
    let (_, days) = normalize_records(&sites, "covm", &records).unwrap();

    let precipitation: Array1<f64> = days.iter().map(|d| d.precipitation).collect();
    let reference_et: Array1<f64> = days.iter().filter_map(|d| d.reference_et).collect();
    let eff = bounded_effective_precipitation_series(
        precipitation.view(),
        reference_et.view(),
        DEFAULT_MANAGEMENT_DEPTH,
    );
    assert_eq!(eff[0], 0.);
    assert!(eff[2] > 0. && eff[2] <= precipitation[2]);

    let raw = effective_precipitation_series(
        precipitation.view(),
        reference_et.view(),
        DEFAULT_MANAGEMENT_DEPTH,
    );
    assert!(raw[0] < 0.);
    assert!(raw[2] >= eff[2]);
}

#[test]
fn unknown_station_is_an_error() {
    let sites: SiteTable = serde_json::from_str(SITES).unwrap();
    let err = normalize_records(&sites, "hrmt", &[]).unwrap_err();
    assert_eq!(err.to_string(), "Unknown site 'hrmt'");
}
