//! # labfit: statistics and curve fitting for physics lab measurements
//!
//! A small collection of helpers for reducing lab data: descriptive
//! statistics, weighted and unweighted linear least-squares regression with
//! propagated uncertainty, a generic nonlinear curve fitter, and an
//! uncertain-value type with first-order error propagation.
//!
//! **What it provides:**
//! - Descriptive statistics: covariance, variance, standard deviation,
//!   quadrature summation, correlation coefficient
//! - Linear regression: simple closed-form fit and a
//!   chi-squared-minimizing weighted fit with parameter standard errors
//! - Nonlinear fitting: Levenberg–Marquardt least squares for arbitrary
//!   models, with a parameter covariance matrix
//! - Uncertainty propagation: `value ± σ` arithmetic and helpers that fold
//!   x-uncertainty into y-uncertainty through a fitted model
//!
//! Every function is a pure computation on in-memory slices: no state, no
//! I/O. Fit summaries are rendered through `Display` impls, so printing is
//! always the caller's decision.
//!
//! ## Quick Start
//!
//! ```rust
//! use labfit_rs::prelude::*;
//!
//! let x: [f64; 4] = [1.0, 2.0, 3.0, 4.0];
//! let y = [2.1, 3.9, 6.2, 7.8];
//! let err = [0.1, 0.1, 0.1, 0.1];
//!
//! // Chi-squared-minimizing weighted linear fit
//! let fit = weighted_least_squares(&x, &y, &err)?;
//!
//! assert!((fit.slope - 1.94).abs() < 1e-12);
//! assert!((fit.intercept - 0.15).abs() < 1e-12);
//!
//! // Render the formatted summary (nothing is printed implicitly)
//! println!("{}", fit);
//! # Result::<(), FitError>::Ok(())
//! ```
//!
//! ```text
//! Weighted least-squares fit:
//!   Data points: 4
//!   slope     = 1.94000 ± 0.04472
//!   intercept = 0.15000 ± 0.12247
//!   chi²      = 8.20000 (2 degrees of freedom)
//!   Equation: y = (1.94000 ± 0.04472)*x + (0.15000 ± 0.12247)
//! ```
//!
//! ## Descriptive Statistics
//!
//! ```rust
//! use labfit_rs::prelude::*;
//!
//! let x: [f64; 5] = [1.0, 2.0, 3.0, 4.0, 5.0];
//! let y = [2.0, 4.1, 5.9, 8.2, 9.8];
//!
//! let v = variance(&x)?;
//! let s = std_dev(&x)?;
//! let r = correlation_coefficient(&x, &y)?;
//!
//! assert!((v - s * s).abs() < 1e-12);
//! assert!(r > 0.99 && r <= 1.0);
//! # Result::<(), FitError>::Ok(())
//! ```
//!
//! ## Nonlinear Fitting
//!
//! Any `Fn(T, &[T]) -> T` is a model; plain functions work directly:
//!
//! ```rust
//! use labfit_rs::prelude::*;
//!
//! fn parabola(x: f64, p: &[f64]) -> f64 {
//!     p[0] + p[1] * x + p[2] * x * x
//! }
//!
//! let x: Vec<f64> = (0..10).map(|i| i as f64).collect();
//! let y: Vec<f64> = x.iter().map(|&xi| 1.0 + 2.0 * xi + 0.5 * xi * xi).collect();
//!
//! let fit = curve_fit(&parabola, &x, &y, &[0.0, 1.0, 1.0], &CurveFitOptions::default())?;
//!
//! assert!((fit.params[2] - 0.5).abs() < 1e-6);
//! # Result::<(), FitError>::Ok(())
//! ```
//!
//! ## Uncertain Values
//!
//! Measurements carry their standard deviation; arithmetic propagates
//! independent errors by the first-order rules:
//!
//! ```rust
//! use labfit_rs::prelude::*;
//!
//! let a: Uncertain<f64> = Uncertain::new(10.0, 0.3);
//! let b = Uncertain::new(4.0, 0.4);
//!
//! let sum = a + b;
//! assert!((sum.std_dev - 0.5).abs() < 1e-12); // sqrt(0.09 + 0.16)
//!
//! // Build and take apart uncertain series
//! let series = uncertain::from_uniform_error(&[1.0, 2.0, 3.0], 0.1);
//! let (nominal, sigma) = uncertain::split(&series);
//! assert_eq!(nominal, vec![1.0, 2.0, 3.0]);
//! assert_eq!(sigma, vec![0.1, 0.1, 0.1]);
//! ```
//!
//! ## Error Handling
//!
//! Every fallible operation returns `Result<_, FitError>`. Length
//! mismatches, empty inputs, non-finite values, constant series, and
//! degenerate systems are typed errors rather than NaN:
//!
//! ```rust
//! use labfit_rs::prelude::*;
//!
//! let err = covariance(&[1.0, 2.0, 3.0], &[4.0, 5.0]).unwrap_err();
//! assert_eq!(
//!     err,
//!     FitError::MismatchedInputs { x_len: 3, y_len: 2 }
//! );
//! ```
//!
//! ## no_std
//!
//! The crate supports `no_std` environments (with `alloc`). Disable default
//! features to remove the standard library dependency:
//!
//! ```toml
//! [dependencies]
//! labfit-rs = { version = "0.1", default-features = false }
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(missing_docs)]

#[cfg(not(feature = "std"))]
#[macro_use]
extern crate alloc;

// ============================================================================
// Internal Modules
// ============================================================================

// Layer 1: Primitives - error type, validation, uncertain values.
//
// Contains the crate-wide `FitError`, the fail-fast input `Validator`,
// and the `Uncertain` value type with propagated arithmetic.
pub mod primitives;

// Layer 2: Math - pure mathematical functions.
//
// Contains descriptive statistics (covariance, variance, correlation,
// quadrature summation) and the nalgebra-backed linear algebra bridge.
pub mod math;

// Layer 3: Algorithms - the fitting routines.
//
// Contains closed-form linear regression (simple and weighted) and the
// Levenberg–Marquardt nonlinear solver.
pub mod algorithms;

// Layer 4: Evaluation - post-processing.
//
// Contains uncertainty propagation through fitted models and the
// `Display`-based fit reports.
pub mod evaluation;

// ============================================================================
// Prelude
// ============================================================================

/// Standard prelude.
///
/// This module is intended to be wildcard-imported for convenient access
/// to the most commonly used items:
///
/// ```
/// use labfit_rs::prelude::*;
/// ```
pub mod prelude {
    pub use crate::algorithms::curve_fit::{curve_fit, CurveFit, CurveFitOptions, FitModel};
    pub use crate::algorithms::linear::{
        common_uncertainty, linear_fit_error, simple_least_squares, weighted_least_squares,
        LinearFit, WeightedFit,
    };
    pub use crate::evaluation::propagation::{
        combine_linear_uncertainties, combine_nonlinear_uncertainties,
    };
    pub use crate::math::descriptive::{
        correlation_coefficient, covariance, mean, quadrature_sum, std_dev, variance,
    };
    pub use crate::math::linalg::LinalgScalar;
    pub use crate::primitives::errors::FitError;
    pub use crate::primitives::uncertain;
    pub use crate::primitives::uncertain::Uncertain;
    pub use crate::primitives::validator::Validator;
}
