//! Daily reference evapotranspiration and surface radiation balance (FAO-56),
//! NEH effective precipitation and the unit conversions needed to feed them
//! from agency weather records.

pub mod data;
pub mod estimate;
pub mod fao;
pub mod metrics;
pub mod observation;
pub mod precipitation;
pub mod units;

#[cfg(feature = "python")]
mod python;

pub use data::{DailySeries, DayObservation, Error, Site};
pub use estimate::{estimate_day, estimate_series, DailyEstimate};
pub use fao::ReferenceSurface;
pub use observation::{Observation, SiteResolver, SiteTable};

#[cfg(feature = "python")]
use pyo3::prelude::*;

#[cfg(feature = "python")]
#[pymodule]
fn met_rs(m: &Bound<'_, PyModule>) -> PyResult<()> {
    python::register(m)
}

#[cfg(feature = "python")]
pyo3_stub_gen::define_stub_info_gatherer!(stub_info);
