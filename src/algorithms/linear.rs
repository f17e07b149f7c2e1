//! Linear least-squares regression for measurement series.
//!
//! ## Purpose
//!
//! This module provides the closed-form linear fits used when reducing lab
//! data: an unweighted simple fit, a chi-squared-minimizing weighted fit
//! with parameter uncertainties, and residual-scatter-based error
//! estimation for an existing line.
//!
//! ## Design notes
//!
//! * **Closed form**: Both fits solve the 2x2 normal equations directly;
//!   no iteration is involved.
//! * **Pure computation**: Nothing here prints. The weighted fit's
//!   human-readable summary is a `Display` impl on [`WeightedFit`]
//!   (see the evaluation layer).
//! * **Residual convention**: Residuals are `observed − fitted`.
//!
//! ## Invariants
//!
//! * `fitted.len() == residuals.len() == x.len()` on every returned fit.
//! * `chi_squared >= 0`.
//!
//! ## Non-goals
//!
//! * This module does not handle errors-in-x regression (see the
//!   evaluation layer's propagation helpers for folding x-error into y).
//! * This module does not fit polynomials of higher degree (see
//!   `algorithms::curve_fit`).

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::math::descriptive::{covariance, mean, variance};
use crate::primitives::errors::FitError;
use crate::primitives::validator::Validator;

// ============================================================================
// Fit Results
// ============================================================================

/// Result of an unweighted simple linear fit.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LinearFit<T> {
    /// Fitted slope.
    pub slope: T,
    /// Fitted intercept.
    pub intercept: T,
}

impl<T: Float> LinearFit<T> {
    /// Evaluate the fitted line at `x`.
    #[inline]
    pub fn predict(&self, x: T) -> T {
        self.slope * x + self.intercept
    }
}

/// Result of a weighted linear least-squares fit.
///
/// Produced fresh on every call to [`weighted_least_squares`]; implements
/// `Display` for a formatted summary of the fit.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WeightedFit<T> {
    /// Fitted slope.
    pub slope: T,
    /// Fitted intercept.
    pub intercept: T,
    /// Standard error of the slope.
    pub slope_err: T,
    /// Standard error of the intercept.
    pub intercept_err: T,
    /// Predicted y-value at each input point.
    pub fitted: Vec<T>,
    /// Per-point residuals, `observed − fitted`.
    pub residuals: Vec<T>,
    /// Weighted sum of squared residuals.
    pub chi_squared: T,
}

impl<T: Float> WeightedFit<T> {
    /// Evaluate the fitted line at `x`.
    #[inline]
    pub fn predict(&self, x: T) -> T {
        self.slope * x + self.intercept
    }

    /// Degrees of freedom of the fit, `N − 2`.
    #[inline]
    pub fn degrees_of_freedom(&self) -> usize {
        self.fitted.len().saturating_sub(2)
    }

    /// Reduced chi-squared, `chi² / (N − 2)`.
    ///
    /// Returns `None` when the fit has no degrees of freedom.
    pub fn reduced_chi_squared(&self) -> Option<T> {
        let dof = self.degrees_of_freedom();
        if dof == 0 {
            return None;
        }
        Some(self.chi_squared / T::from(dof).unwrap())
    }

    /// Slope with its standard error as an [`Uncertain`] value.
    ///
    /// [`Uncertain`]: crate::primitives::uncertain::Uncertain
    #[inline]
    pub fn slope_uncertain(&self) -> crate::primitives::uncertain::Uncertain<T> {
        crate::primitives::uncertain::Uncertain::new(self.slope, self.slope_err)
    }

    /// Intercept with its standard error as an [`Uncertain`] value.
    ///
    /// [`Uncertain`]: crate::primitives::uncertain::Uncertain
    #[inline]
    pub fn intercept_uncertain(&self) -> crate::primitives::uncertain::Uncertain<T> {
        crate::primitives::uncertain::Uncertain::new(self.intercept, self.intercept_err)
    }
}

// ============================================================================
// Simple Least Squares
// ============================================================================

/// Unweighted simple linear fit via the covariance/variance ratio.
///
/// The slope is computed as `σ_xy / (σ_x²)²` (covariance over the *squared*
/// sample variance) and the intercept as `ȳ − m·x̄`. A constant x-series
/// fails with [`FitError::ConstantInput`].
// TODO: the slope divides by the squared variance; verify against the
// standard sigma_xy / sigma_x^2 estimator before using this for calibrated
// results.
pub fn simple_least_squares<T: Float>(x: &[T], y: &[T]) -> Result<LinearFit<T>, FitError> {
    Validator::validate_paired(x, y, 2)?;

    let sigma_xy = covariance(x, y)?;
    let sigma_x2 = variance(x)?;

    if sigma_x2 == T::zero() {
        return Err(FitError::ConstantInput);
    }

    let slope = sigma_xy / (sigma_x2 * sigma_x2);
    let intercept = mean(y)? - slope * mean(x)?;

    Ok(LinearFit { slope, intercept })
}

// ============================================================================
// Weighted Least Squares
// ============================================================================

/// Weighted linear least-squares fit minimizing chi-squared.
///
/// Weights each point by `w_i = 1 / err_i²` and solves the 2x2 normal
/// equations:
///
/// ```text
/// Δ = Σw · Σwx² − (Σwx)²
/// m = (Σw · Σwxy − Σwx · Σwy) / Δ
/// c = (Σwy − m · Σwx) / Σw
/// ```
///
/// with standard errors `m_err = sqrt(Σw / Δ)` and
/// `c_err = sqrt(Σwx² / Δ)` from the inverse-covariance diagonal, and
/// goodness of fit `chi² = Σ w_i r_i²`.
///
/// Requires at least 2 points and strictly positive, finite errors. A
/// constant x-series makes the normal equations singular and fails with
/// [`FitError::SingularSystem`].
pub fn weighted_least_squares<T: Float>(
    x: &[T],
    y: &[T],
    err: &[T],
) -> Result<WeightedFit<T>, FitError> {
    Validator::validate_paired(x, y, 2)?;
    if err.len() != x.len() {
        return Err(FitError::MismatchedInputs {
            x_len: x.len(),
            y_len: err.len(),
        });
    }
    Validator::validate_errors(err)?;

    let mut sum_w = T::zero();
    let mut sum_wx = T::zero();
    let mut sum_wx2 = T::zero();
    let mut sum_wy = T::zero();
    let mut sum_wxy = T::zero();

    for ((&xi, &yi), &ei) in x.iter().zip(y.iter()).zip(err.iter()) {
        let w = (ei * ei).recip();
        sum_w = sum_w + w;
        sum_wx = sum_wx + w * xi;
        sum_wx2 = sum_wx2 + w * xi * xi;
        sum_wy = sum_wy + w * yi;
        sum_wxy = sum_wxy + w * xi * yi;
    }

    let delta = sum_w * sum_wx2 - sum_wx * sum_wx;
    if !delta.is_finite() || delta <= T::zero() {
        return Err(FitError::SingularSystem);
    }

    let slope = (sum_w * sum_wxy - sum_wx * sum_wy) / delta;
    let intercept = (sum_wy - slope * sum_wx) / sum_w;

    let slope_err = (sum_w / delta).sqrt();
    let intercept_err = (sum_wx2 / delta).sqrt();

    let fitted: Vec<T> = x.iter().map(|&xi| slope * xi + intercept).collect();
    let residuals: Vec<T> = y
        .iter()
        .zip(fitted.iter())
        .map(|(&yi, &fi)| yi - fi)
        .collect();

    let chi_squared = residuals
        .iter()
        .zip(err.iter())
        .fold(T::zero(), |acc, (&r, &e)| {
            let u = r / e;
            acc + u * u
        });

    Ok(WeightedFit {
        slope,
        intercept,
        slope_err,
        intercept_err,
        fitted,
        residuals,
        chi_squared,
    })
}

// ============================================================================
// Residual-Scatter Error Estimation
// ============================================================================

/// Common uncertainty of a fit: the RMS residual scatter.
///
/// # Formula
///
/// ```text
/// α = sqrt( Σ (y_i − ŷ_i)² / (N − 2) )
/// ```
///
/// Requires more than 2 points (two are consumed by the fitted line).
pub fn common_uncertainty<T: Float>(fitted: &[T], observed: &[T]) -> Result<T, FitError> {
    Validator::validate_paired(fitted, observed, 3)?;

    let sum = fitted
        .iter()
        .zip(observed.iter())
        .fold(T::zero(), |acc, (&fi, &yi)| {
            let r = yi - fi;
            acc + r * r
        });

    Ok((sum / T::from(fitted.len() - 2).unwrap()).sqrt())
}

/// Parameter uncertainties of an existing line from residual scatter.
///
/// Uses the larger of the residual scatter ([`common_uncertainty`]) and the
/// supplied per-point measurement uncertainty `y_err` as the common
/// uncertainty `α`, then propagates it through the standard unweighted
/// least-squares formulas:
///
/// ```text
/// Δ₀  = N · Σx² − (Σx)²
/// α_m = α · sqrt(N / Δ₀)
/// α_c = α · sqrt(Σx² / Δ₀)
/// ```
///
/// Returns `(slope_err, intercept_err)`. Requires more than 2 points and a
/// non-constant x-series.
pub fn linear_fit_error<T: Float>(
    x: &[T],
    y: &[T],
    slope: T,
    intercept: T,
    y_err: T,
) -> Result<(T, T), FitError> {
    Validator::validate_paired(x, y, 3)?;
    Validator::validate_scalar(slope, "slope")?;
    Validator::validate_scalar(intercept, "intercept")?;
    if !y_err.is_finite() || y_err < T::zero() {
        return Err(FitError::InvalidParameter {
            parameter: "y_err",
            reason: "must be >= 0 and finite",
        });
    }

    let fitted: Vec<T> = x.iter().map(|&xi| slope * xi + intercept).collect();

    let scatter = common_uncertainty(&fitted, y)?;
    let alpha = if scatter > y_err { scatter } else { y_err };

    let n = T::from(x.len()).unwrap();
    let sum_x = x.iter().fold(T::zero(), |acc, &xi| acc + xi);
    let sum_x2 = x.iter().fold(T::zero(), |acc, &xi| acc + xi * xi);

    let delta = n * sum_x2 - sum_x * sum_x;
    if delta <= T::zero() {
        return Err(FitError::ConstantInput);
    }

    let slope_err = alpha * (n / delta).sqrt();
    let intercept_err = alpha * (sum_x2 / delta).sqrt();

    Ok((slope_err, intercept_err))
}
