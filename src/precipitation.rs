//! Effective precipitation, USDA National Engineering Handbook (Part 623, ch. 2).
//!
//! The curve's coefficients are a fit in inches. The inch-typed functions are
//! the curve itself; [`effective_precipitation`] converts from and back to
//! millimetres so callers never feed millimetres into the fit. The fit is
//! returned as is; [`bounded_effective_precipitation`] additionally applies the
//! handbook limits.

use crate::units::{Inches, Millimeters};

/// Net irrigation application depth the NEH tables are built around.
pub const DEFAULT_MANAGEMENT_DEPTH: Inches = Inches(3.0);

/// Storage factor for a net irrigation depth `D` (in).
#[inline]
pub fn management_depth_factor(depth: Inches) -> f64 {
    let d = depth.0;
    0.531747 + 0.295164 * d - 0.057697 * d.powi(2) + 0.003804 * d.powi(3)
}

/// The raw NEH curve. Negative precipitation yields NaN; light rain yields a
/// negative depth.
#[inline]
pub fn neh_curve(precipitation: Inches, reference_et: Inches, management_depth: Inches) -> Inches {
    let sf = management_depth_factor(management_depth);
    Inches(
        sf * ((0.70917 * precipitation.0).powf(0.82416) - 0.11556)
            * 10f64.powf(0.02426 * reference_et.0),
    )
}

/// The NEH curve limited to `[0, min(P, ET)]`.
pub fn bounded_neh_curve(
    precipitation: Inches,
    reference_et: Inches,
    management_depth: Inches,
) -> Inches {
    let raw = neh_curve(precipitation, reference_et, management_depth).0;
    if raw.is_nan() {
        return Inches(raw);
    }
    Inches(raw.max(0.).min(precipitation.0).min(reference_et.0))
}

/// Effective precipitation for precipitation and reference ET in millimetres.
pub fn effective_precipitation(
    precipitation: Millimeters,
    reference_et: Millimeters,
    management_depth: Inches,
) -> Millimeters {
    neh_curve(precipitation.into(), reference_et.into(), management_depth).into()
}

/// [`effective_precipitation`] limited to `[0, min(P, ET)]`.
pub fn bounded_effective_precipitation(
    precipitation: Millimeters,
    reference_et: Millimeters,
    management_depth: Inches,
) -> Millimeters {
    bounded_neh_curve(precipitation.into(), reference_et.into(), management_depth).into()
}
