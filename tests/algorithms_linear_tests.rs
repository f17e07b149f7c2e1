//! Tests for linear least-squares regression.
//!
//! ## Test Organization
//!
//! 1. **Weighted Fit** - hand-checked chi-squared-minimizing fits
//! 2. **Simple Fit** - the closed-form unweighted fit
//! 3. **Residual-Scatter Errors** - common uncertainty and propagation
//! 4. **Edge Cases** - degenerate and invalid inputs

use approx::assert_relative_eq;

use labfit_rs::prelude::*;

// ============================================================================
// Weighted Fit
// ============================================================================

/// Uniform errors reduce the weighted fit to ordinary least squares.
///
/// x = [1, 2, 3], y = [2, 4, 6], err = [1, 1, 1]:
/// the data lie exactly on y = 2x, so slope = 2, intercept = 0, chi² = 0.
#[test]
fn test_uniform_errors_reduce_to_ols() {
    let x = [1.0, 2.0, 3.0];
    let y = [2.0, 4.0, 6.0];
    let err = [1.0, 1.0, 1.0];

    let fit = weighted_least_squares(&x, &y, &err).unwrap();
    assert_relative_eq!(fit.slope, 2.0, epsilon = 1e-12);
    assert_relative_eq!(fit.intercept, 0.0, epsilon = 1e-12);
    assert_relative_eq!(fit.chi_squared, 0.0, epsilon = 1e-12);

    // Standard errors from the normal-equations determinant:
    // Σw = 3, Σwx = 6, Σwx² = 14, Δ = 3·14 − 36 = 6
    // m_err = sqrt(3/6), c_err = sqrt(14/6)
    assert_relative_eq!(fit.slope_err, (0.5_f64).sqrt(), epsilon = 1e-12);
    assert_relative_eq!(fit.intercept_err, (14.0_f64 / 6.0).sqrt(), epsilon = 1e-12);
}

/// Full scenario with measurement errors.
///
/// x = [1, 2, 3, 4], y = [2.1, 3.9, 6.2, 7.8], err = 0.1 everywhere:
/// w = 100, Σw = 400, Σwx = 1000, Σwx² = 3000, Σwy = 2000, Σwxy = 5970
/// Δ = 400·3000 − 1000² = 200000
/// m = (400·5970 − 1000·2000) / Δ = 1.94
/// c = (2000 − 1.94·1000) / 400 = 0.15
/// m_err = sqrt(400/200000) ≈ 0.04472, c_err = sqrt(3000/200000) ≈ 0.12247
/// residuals (y − ŷ) = [0.01, −0.13, 0.23, −0.11] → chi² = 0.082/0.01 = 8.2
#[test]
fn test_weighted_fit_scenario() {
    let x = [1.0, 2.0, 3.0, 4.0];
    let y = [2.1, 3.9, 6.2, 7.8];
    let err = [0.1, 0.1, 0.1, 0.1];

    let fit = weighted_least_squares(&x, &y, &err).unwrap();

    assert_relative_eq!(fit.slope, 1.94, epsilon = 1e-9);
    assert_relative_eq!(fit.intercept, 0.15, epsilon = 1e-9);
    assert_relative_eq!(fit.slope_err, 0.002_f64.sqrt(), epsilon = 1e-9);
    assert_relative_eq!(fit.intercept_err, 0.015_f64.sqrt(), epsilon = 1e-9);
    assert_relative_eq!(fit.chi_squared, 8.2, epsilon = 1e-9);

    // Predicted values and residuals are parallel to the input
    assert_eq!(fit.fitted.len(), 4);
    assert_eq!(fit.residuals.len(), 4);
    assert_relative_eq!(fit.fitted[0], 2.09, epsilon = 1e-9);
    assert_relative_eq!(fit.residuals[2], 0.23, epsilon = 1e-9);

    // Goodness-of-fit accessors
    assert_eq!(fit.degrees_of_freedom(), 2);
    assert_relative_eq!(fit.reduced_chi_squared().unwrap(), 4.1, epsilon = 1e-9);
}

/// Tighter errors on a subset of points pull the line toward them.
#[test]
fn test_weights_pull_fit() {
    let x = [1.0, 2.0, 3.0, 4.0];
    let y = [2.0, 4.0, 6.0, 12.0]; // last point off the y = 2x line

    // Trusting the outlier makes the slope larger than trusting the line.
    let trust_line = weighted_least_squares(&x, &y, &[0.1, 0.1, 0.1, 10.0]).unwrap();
    let trust_outlier = weighted_least_squares(&x, &y, &[10.0, 10.0, 10.0, 0.1]).unwrap();
    assert!(trust_line.slope < trust_outlier.slope);
    assert_relative_eq!(trust_line.slope, 2.0, epsilon = 1e-2);
}

/// The uncertain-value accessors carry the fitted errors.
#[test]
fn test_uncertain_accessors() {
    let x = [1.0, 2.0, 3.0];
    let y = [2.0, 4.0, 6.0];
    let err = [1.0, 1.0, 1.0];

    let fit = weighted_least_squares(&x, &y, &err).unwrap();
    let m = fit.slope_uncertain();
    assert_relative_eq!(m.nominal, fit.slope);
    assert_relative_eq!(m.std_dev, fit.slope_err);
}

// ============================================================================
// Simple Fit
// ============================================================================

/// Unit-variance x gives the familiar slope.
///
/// x = [1, 2, 3], y = [2, 4, 6]: cov = 2, var = 1, slope = 2/1² = 2.
#[test]
fn test_simple_fit_unit_variance() {
    let x = [1.0, 2.0, 3.0];
    let y = [2.0, 4.0, 6.0];

    let fit = simple_least_squares(&x, &y).unwrap();
    assert_relative_eq!(fit.slope, 2.0, epsilon = 1e-12);
    assert_relative_eq!(fit.intercept, 0.0, epsilon = 1e-12);
    assert_relative_eq!(fit.predict(4.0), 8.0, epsilon = 1e-12);
}

/// The slope divides by the squared variance, not the variance.
///
/// x = [1, 3, 5], y = [1, 3, 5]: cov = 4, var = 4, so the slope comes out
/// as 4/4² = 0.25 rather than the textbook cov/var = 1. This pins the
/// non-standard estimator; see the TODO at the computation site.
#[test]
fn test_simple_fit_squared_variance_slope() {
    let x = [1.0, 3.0, 5.0];
    let y = [1.0, 3.0, 5.0];

    let fit = simple_least_squares(&x, &y).unwrap();
    assert_relative_eq!(fit.slope, 0.25, epsilon = 1e-12);
    // intercept = ȳ − m·x̄ = 3 − 0.25·3 = 2.25
    assert_relative_eq!(fit.intercept, 2.25, epsilon = 1e-12);
}

// ============================================================================
// Residual-Scatter Errors
// ============================================================================

/// Common uncertainty is the RMS residual with N−2 in the denominator.
///
/// fitted = [1, 2, 3, 4], observed = [1.1, 1.9, 3.2, 3.8]
/// residuals = [0.1, −0.1, 0.2, −0.2], Σr² = 0.1
/// α = sqrt(0.1 / 2) ≈ 0.22361
#[test]
fn test_common_uncertainty_hand_checked() {
    let fitted = [1.0, 2.0, 3.0, 4.0];
    let observed = [1.1, 1.9, 3.2, 3.8];
    let alpha = common_uncertainty(&fitted, &observed).unwrap();
    assert_relative_eq!(alpha, 0.05_f64.sqrt(), epsilon = 1e-9);
}

/// Fewer than three points cannot estimate residual scatter.
#[test]
fn test_common_uncertainty_too_few_points() {
    let err = common_uncertainty(&[1.0, 2.0], &[1.1, 1.9]).unwrap_err();
    assert_eq!(err, FitError::TooFewPoints { got: 2, min: 3 });
}

/// Scatter-based parameter errors for a known line.
///
/// x = [1, 2, 3, 4], y = [2.1, 3.9, 6.2, 7.8] around y = 1.94x + 0.15:
/// Σr² = 0.082, α = sqrt(0.041) ≈ 0.20248
/// Δ₀ = 4·30 − 100 = 20
/// α_m = α·sqrt(4/20), α_c = α·sqrt(30/20)
#[test]
fn test_linear_fit_error_scatter_dominates() {
    let x = [1.0, 2.0, 3.0, 4.0];
    let y = [2.1, 3.9, 6.2, 7.8];

    let (m_err, c_err) = linear_fit_error(&x, &y, 1.94, 0.15, 0.0).unwrap();

    let alpha = (0.082_f64 / 2.0).sqrt();
    assert_relative_eq!(m_err, alpha * 0.2_f64.sqrt(), epsilon = 1e-9);
    assert_relative_eq!(c_err, alpha * 1.5_f64.sqrt(), epsilon = 1e-9);
}

/// A supplied measurement uncertainty larger than the scatter wins.
#[test]
fn test_linear_fit_error_measurement_dominates() {
    let x = [1.0, 2.0, 3.0, 4.0];
    let y = [2.1, 3.9, 6.2, 7.8];

    let (m_err, _) = linear_fit_error(&x, &y, 1.94, 0.15, 1.0).unwrap();
    assert_relative_eq!(m_err, 0.2_f64.sqrt(), epsilon = 1e-9);
}

// ============================================================================
// Edge Cases
// ============================================================================

/// Error slice length must match the data.
#[test]
fn test_weighted_fit_error_length_mismatch() {
    let err = weighted_least_squares(&[1.0, 2.0, 3.0], &[2.0, 4.0, 6.0], &[0.1, 0.1]).unwrap_err();
    assert_eq!(err, FitError::MismatchedInputs { x_len: 3, y_len: 2 });
}

/// Zero and negative measurement errors are rejected (weights are 1/err²).
#[test]
fn test_weighted_fit_invalid_errors() {
    let x = [1.0, 2.0, 3.0];
    let y = [2.0, 4.0, 6.0];

    let err = weighted_least_squares(&x, &y, &[0.1, 0.0, 0.1]).unwrap_err();
    assert_eq!(
        err,
        FitError::InvalidParameter {
            parameter: "err",
            reason: "measurement errors must be > 0",
        }
    );

    assert!(weighted_least_squares(&x, &y, &[0.1, -0.1, 0.1]).is_err());
}

/// A constant x-series makes the normal equations singular.
#[test]
fn test_weighted_fit_constant_x() {
    let err =
        weighted_least_squares(&[2.0, 2.0, 2.0], &[1.0, 2.0, 3.0], &[0.1, 0.1, 0.1]).unwrap_err();
    assert_eq!(err, FitError::SingularSystem);
}

/// The simple fit rejects a constant x-series explicitly.
#[test]
fn test_simple_fit_constant_x() {
    let err = simple_least_squares(&[2.0, 2.0, 2.0], &[1.0, 2.0, 3.0]).unwrap_err();
    assert_eq!(err, FitError::ConstantInput);
}
