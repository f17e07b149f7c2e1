//! Uncertainty propagation through fitted models.
//!
//! ## Purpose
//!
//! This module folds x-uncertainty into y-uncertainty, per data point,
//! using a fitted model as the transfer function. The linear variant uses
//! the fitted slope directly; the nonlinear variant propagates through an
//! arbitrary model via uncertain-value arithmetic.
//!
//! ## Design notes
//!
//! * **First-derivative propagation**: An x-error `σ_x` contributes
//!   `|df/dx| σ_x` of y-error, combined in quadrature with the existing
//!   y-error (independent errors).
//! * **Per-point results**: Output is one combined uncertainty per input
//!   point, parallel to the inputs.
//!
//! ## Invariants
//!
//! * All four input slices must have the same length.
//! * Combined uncertainties are non-negative.
//!
//! ## Non-goals
//!
//! * This module does not propagate fitted-parameter uncertainty into the
//!   per-point result; only input uncertainty is folded through the model.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::algorithms::curve_fit::{curve_fit, CurveFitOptions, FitModel};
use crate::algorithms::linear::simple_least_squares;
use crate::math::descriptive::quadrature_sum;
use crate::math::linalg::LinalgScalar;
use crate::primitives::errors::FitError;
use crate::primitives::uncertain::{from_per_point_errors, split};
use crate::primitives::validator::Validator;

// ============================================================================
// Linear Propagation
// ============================================================================

/// Combine x- and y-uncertainties through a fitted straight line.
///
/// Fits `y = m·x + c` by [`simple_least_squares`], then combines each
/// point's uncertainties in quadrature:
///
/// ```text
/// σ_i = sqrt( y_err_i² + (m · x_err_i)² )
/// ```
pub fn combine_linear_uncertainties<T: Float>(
    x: &[T],
    y: &[T],
    x_err: &[T],
    y_err: &[T],
) -> Result<Vec<T>, FitError> {
    Validator::validate_paired(x, y, 2)?;
    validate_error_lengths(x.len(), x_err, y_err)?;

    let fit = simple_least_squares(x, y)?;

    y_err
        .iter()
        .zip(x_err.iter())
        .map(|(&ye, &xe)| quadrature_sum(&[ye, fit.slope * xe]))
        .collect()
}

// ============================================================================
// Nonlinear Propagation
// ============================================================================

/// Combine x- and y-uncertainties through a fitted nonlinear model.
///
/// Fits `model` to `(x, y)` by [`curve_fit`] starting from
/// `initial_params`, evaluates the model over the uncertain x-values
/// (propagating each `σ_x` through the model's local derivative), and sums
/// the propagated uncertainty with the existing y-uncertainty in
/// quadrature. Returns the combined uncertainty per point.
pub fn combine_nonlinear_uncertainties<T, M>(
    x: &[T],
    y: &[T],
    x_err: &[T],
    y_err: &[T],
    model: &M,
    initial_params: &[T],
    options: &CurveFitOptions<T>,
) -> Result<Vec<T>, FitError>
where
    T: LinalgScalar,
    M: FitModel<T>,
{
    Validator::validate_paired(x, y, 2)?;
    validate_error_lengths(x.len(), x_err, y_err)?;

    let fit = curve_fit(model, x, y, initial_params, options)?;

    let x_uncertain = from_per_point_errors(x, x_err)?;
    let y_uncertain = from_per_point_errors(y, y_err)?;

    let combined: Vec<_> = x_uncertain
        .iter()
        .zip(y_uncertain.iter())
        .map(|(&xu, &yu)| model.eval_uncertain(xu, &fit.params) + yu)
        .collect();

    let (_, combined_err) = split(&combined);
    Ok(combined_err)
}

// ============================================================================
// Internal Helpers
// ============================================================================

/// Check that both error slices match the data length and are finite.
fn validate_error_lengths<T: Float>(n: usize, x_err: &[T], y_err: &[T]) -> Result<(), FitError> {
    if x_err.len() != n {
        return Err(FitError::MismatchedInputs {
            x_len: n,
            y_len: x_err.len(),
        });
    }
    if y_err.len() != n {
        return Err(FitError::MismatchedInputs {
            x_len: n,
            y_len: y_err.len(),
        });
    }
    Validator::validate_finite(x_err, "x_err")?;
    Validator::validate_finite(y_err, "y_err")
}
