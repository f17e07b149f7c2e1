//! Descriptive statistics for measurement series.
//!
//! ## Purpose
//!
//! This module provides the basic statistical reductions used when
//! processing lab measurements: mean, covariance, variance, standard
//! deviation, quadrature summation, and the correlation coefficient.
//!
//! ## Design notes
//!
//! * **Sample statistics**: Covariance and variance apply Bessel's
//!   correction (N − 1 denominator).
//! * **Two-pass accumulation**: Means are computed first, then deviations
//!   are accumulated, avoiding the cancellation-prone `E[X²] − E[X]²` form.
//! * **Guarded edge cases**: Mismatched lengths, empty input, and constant
//!   series are hard errors rather than NaN.
//!
//! ## Invariants
//!
//! * `variance(x) == std_dev(x)^2` for any valid input.
//! * `covariance(x, x) == variance(x)` for any valid input.
//! * `quadrature_sum` is non-negative.
//!
//! ## Non-goals
//!
//! * This module does not provide weighted or robust variants.
//! * This module does not skip non-finite values; they are rejected.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::FitError;
use crate::primitives::validator::Validator;

// ============================================================================
// Means and Moments
// ============================================================================

/// Arithmetic mean of a measurement series.
pub fn mean<T: Float>(x: &[T]) -> Result<T, FitError> {
    Validator::validate_sample(x, 1)?;

    let sum = x.iter().fold(T::zero(), |acc, &v| acc + v);
    Ok(sum / T::from(x.len()).unwrap())
}

/// Sample covariance of a paired series, with Bessel's correction.
///
/// # Formula
///
/// ```text
/// cov(x, y) = Σ (x_i − x̄)(y_i − ȳ) / (N − 1)
/// ```
///
/// Fails with [`FitError::MismatchedInputs`] when the lengths differ.
pub fn covariance<T: Float>(x: &[T], y: &[T]) -> Result<T, FitError> {
    Validator::validate_paired(x, y, 2)?;

    let x_mean = mean(x)?;
    let y_mean = mean(y)?;

    let sum = x
        .iter()
        .zip(y.iter())
        .fold(T::zero(), |acc, (&xi, &yi)| {
            acc + (xi - x_mean) * (yi - y_mean)
        });

    Ok(sum / T::from(x.len() - 1).unwrap())
}

/// Sample variance, with Bessel's correction (N − 1 denominator).
pub fn variance<T: Float>(x: &[T]) -> Result<T, FitError> {
    Validator::validate_sample(x, 2)?;

    let x_mean = mean(x)?;
    let sum = x.iter().fold(T::zero(), |acc, &xi| {
        let d = xi - x_mean;
        acc + d * d
    });

    Ok(sum / T::from(x.len() - 1).unwrap())
}

/// Sample standard deviation, `sqrt(variance(x))`.
pub fn std_dev<T: Float>(x: &[T]) -> Result<T, FitError> {
    Ok(variance(x)?.sqrt())
}

// ============================================================================
// Uncertainty Combination
// ============================================================================

/// Quadrature (root-sum-of-squares) summation.
///
/// Combines independent uncertainties:
///
/// ```text
/// q = sqrt(Σ x_i²)
/// ```
pub fn quadrature_sum<T: Float>(x: &[T]) -> Result<T, FitError> {
    Validator::validate_sample(x, 1)?;

    let sum = x.iter().fold(T::zero(), |acc, &v| acc + v * v);
    Ok(sum.sqrt())
}

// ============================================================================
// Correlation
// ============================================================================

/// Pearson correlation coefficient of a paired series.
///
/// Covariance normalized by the product of the standard deviations. A
/// constant series has no defined correlation and fails with
/// [`FitError::ConstantInput`].
pub fn correlation_coefficient<T: Float>(x: &[T], y: &[T]) -> Result<T, FitError> {
    Validator::validate_paired(x, y, 2)?;

    let sigma_xy = covariance(x, y)?;
    let sigma_x = std_dev(x)?;
    let sigma_y = std_dev(y)?;

    if sigma_x == T::zero() || sigma_y == T::zero() {
        return Err(FitError::ConstantInput);
    }

    Ok(sigma_xy / (sigma_x * sigma_y))
}
