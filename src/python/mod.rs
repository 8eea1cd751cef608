//! Python extension module. Every function takes and returns numpy arrays.

mod fao;
mod metrics;
mod precipitation;
mod units;

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

pub const MODULE_NAME: &str = "met_rs";

/// Attach `child` to `parent` and expose it as `prefix.child` in sys.modules.
pub fn register_submodule(
    py: Python<'_>,
    parent: &Bound<'_, PyModule>,
    child: &Bound<'_, PyModule>,
    prefix: &str,
) -> PyResult<()> {
    parent.add_submodule(child)?;
    let full_name = format!("{}.{}", prefix, child.name()?);
    py.import("sys")?
        .getattr("modules")?
        .set_item(full_name, child)?;
    Ok(())
}

/// numpy inputs that are zipped together must have the same length.
pub fn check_lengths(names: &[&str], lengths: &[usize]) -> PyResult<()> {
    match lengths.first() {
        Some(&n) if lengths.iter().any(|&len| len != n) => Err(PyValueError::new_err(format!(
            "{} must have the same length (got {:?})",
            names.join(", "),
            lengths
        ))),
        _ => Ok(()),
    }
}

pub fn register(m: &Bound<'_, PyModule>) -> PyResult<()> {
    let py = m.py();
    register_submodule(py, m, &fao::make_module(py)?, MODULE_NAME)?;
    register_submodule(py, m, &units::make_module(py)?, MODULE_NAME)?;
    register_submodule(py, m, &precipitation::make_module(py)?, MODULE_NAME)?;
    register_submodule(py, m, &metrics::make_module(py)?, MODULE_NAME)?;
    m.add("__version__", env!("CARGO_PKG_VERSION"))?;
    Ok(())
}
