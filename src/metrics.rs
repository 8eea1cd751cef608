//! Agreement between two daily series of the same quantity, e.g. station ET
//! against gridded ET. Days where either side is NaN are skipped, which is how
//! gaps in agency records show up after normalization.

use ndarray::ArrayView1;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum MetricsError {
    #[error("reference and candidate must have the same length (got {0} and {1})")]
    LengthMismatch(usize, usize),
    #[error("no day where both series have a value")]
    NoOverlap,
}

#[cfg(feature = "python")]
impl From<MetricsError> for pyo3::PyErr {
    fn from(err: MetricsError) -> pyo3::PyErr {
        pyo3::exceptions::PyValueError::new_err(err.to_string())
    }
}

fn paired<'a>(
    reference: ArrayView1<'a, f64>,
    candidate: ArrayView1<'a, f64>,
) -> Result<Vec<(f64, f64)>, MetricsError> {
    if reference.len() != candidate.len() {
        return Err(MetricsError::LengthMismatch(
            reference.len(),
            candidate.len(),
        ));
    }
    let pairs: Vec<(f64, f64)> = reference
        .iter()
        .zip(candidate)
        .filter(|(r, c)| !r.is_nan() && !c.is_nan())
        .map(|(&r, &c)| (r, c))
        .collect();
    if pairs.is_empty() {
        Err(MetricsError::NoOverlap)
    } else {
        Ok(pairs)
    }
}

pub fn calculate_rmse(
    reference: ArrayView1<f64>,
    candidate: ArrayView1<f64>,
) -> Result<f64, MetricsError> {
    let pairs = paired(reference, candidate)?;
    let sum: f64 = pairs.iter().map(|(r, c)| (c - r).powi(2)).sum();
    Ok((sum / pairs.len() as f64).sqrt())
}

/// Mean of `candidate - reference`.
pub fn calculate_mean_bias(
    reference: ArrayView1<f64>,
    candidate: ArrayView1<f64>,
) -> Result<f64, MetricsError> {
    let pairs = paired(reference, candidate)?;
    let sum: f64 = pairs.iter().map(|(r, c)| c - r).sum();
    Ok(sum / pairs.len() as f64)
}

/// Ratio of season totals, `sum(candidate) / sum(reference)`.
pub fn calculate_volume_ratio(
    reference: ArrayView1<f64>,
    candidate: ArrayView1<f64>,
) -> Result<f64, MetricsError> {
    let pairs = paired(reference, candidate)?;
    let (reference_total, candidate_total) = pairs
        .iter()
        .fold((0.0, 0.0), |(rt, ct), (r, c)| (rt + r, ct + c));
    Ok(candidate_total / reference_total)
}

pub fn calculate_nse(
    reference: ArrayView1<f64>,
    candidate: ArrayView1<f64>,
) -> Result<f64, MetricsError> {
    let pairs = paired(reference, candidate)?;
    let mean: f64 = pairs.iter().map(|(r, _)| r).sum::<f64>() / pairs.len() as f64;
    let (numerator, denominator) = pairs.iter().fold((0.0, 0.0), |(num, den), (r, c)| {
        (num + (r - c).powi(2), den + (r - mean).powi(2))
    });
    Ok(1.0 - numerator / denominator)
}
