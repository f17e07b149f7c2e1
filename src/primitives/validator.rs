//! Input validation for measurement data and solver configuration.
//!
//! ## Purpose
//!
//! This module provides the validation functions shared by the statistics
//! and fitting routines. It checks requirements such as matching lengths,
//! finite values, and parameter bounds.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered.
//! * **Efficiency**: Checks are ordered from cheap to expensive.
//! * **Generics**: Validation is generic over `Float` types.
//!
//! ## Invariants
//!
//! * All validated inputs satisfy their respective mathematical constraints.
//! * Validation logic is deterministic and side-effect free.
//!
//! ## Non-goals
//!
//! * This module does not sort, transform, or filter input data.
//! * This module does not provide automatic correction of invalid inputs.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::format;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::FitError;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for measurement data and fit configuration.
///
/// Provides static methods returning `Result<(), FitError>` that fail fast
/// upon identifying the first violation.
pub struct Validator;

impl Validator {
    // ========================================================================
    // Data Validation
    // ========================================================================

    /// Validate a single measurement series.
    ///
    /// Checks that the slice is non-empty, has at least `min_points`
    /// elements, and contains only finite values.
    pub fn validate_sample<T: Float>(x: &[T], min_points: usize) -> Result<(), FitError> {
        if x.is_empty() {
            return Err(FitError::EmptyInput);
        }

        if x.len() < min_points {
            return Err(FitError::TooFewPoints {
                got: x.len(),
                min: min_points,
            });
        }

        Self::validate_finite(x, "x")
    }

    /// Validate a paired (x, y) measurement series.
    ///
    /// Checks, in order: non-empty inputs, matching lengths, minimum point
    /// count, and finiteness of every value.
    pub fn validate_paired<T: Float>(x: &[T], y: &[T], min_points: usize) -> Result<(), FitError> {
        if x.is_empty() || y.is_empty() {
            return Err(FitError::EmptyInput);
        }

        if x.len() != y.len() {
            return Err(FitError::MismatchedInputs {
                x_len: x.len(),
                y_len: y.len(),
            });
        }

        if x.len() < min_points {
            return Err(FitError::TooFewPoints {
                got: x.len(),
                min: min_points,
            });
        }

        Self::validate_finite(x, "x")?;
        Self::validate_finite(y, "y")
    }

    /// Validate a slice of measurement uncertainties used as fit weights.
    ///
    /// Weights are formed as `1 / err^2`, so every entry must be finite and
    /// strictly positive.
    pub fn validate_errors<T: Float>(err: &[T]) -> Result<(), FitError> {
        for (i, &val) in err.iter().enumerate() {
            if !val.is_finite() {
                return Err(FitError::InvalidNumericValue(format!(
                    "err[{}]={}",
                    i,
                    val.to_f64().unwrap_or(f64::NAN)
                )));
            }
            if val <= T::zero() {
                return Err(FitError::InvalidParameter {
                    parameter: "err",
                    reason: "measurement errors must be > 0",
                });
            }
        }
        Ok(())
    }

    /// Validate that every value in a slice is finite.
    pub fn validate_finite<T: Float>(vals: &[T], name: &str) -> Result<(), FitError> {
        for (i, &val) in vals.iter().enumerate() {
            if !val.is_finite() {
                return Err(FitError::InvalidNumericValue(format!(
                    "{}[{}]={}",
                    name,
                    i,
                    val.to_f64().unwrap_or(f64::NAN)
                )));
            }
        }
        Ok(())
    }

    /// Validate a single scalar for finiteness.
    pub fn validate_scalar<T: Float>(val: T, name: &str) -> Result<(), FitError> {
        if !val.is_finite() {
            return Err(FitError::InvalidNumericValue(format!(
                "{}={}",
                name,
                val.to_f64().unwrap_or(f64::NAN)
            )));
        }
        Ok(())
    }

    // ========================================================================
    // Parameter Validation
    // ========================================================================

    /// Validate a convergence tolerance.
    pub fn validate_tolerance<T: Float>(tol: T) -> Result<(), FitError> {
        if !tol.is_finite() || tol <= T::zero() {
            return Err(FitError::InvalidParameter {
                parameter: "tolerance",
                reason: "must be > 0 and finite",
            });
        }
        Ok(())
    }

    /// Validate an iteration budget.
    ///
    /// # Notes
    ///
    /// * Capped at 10000 iterations to bound runaway fits.
    pub fn validate_max_iterations(iterations: usize) -> Result<(), FitError> {
        const MAX_ITERATIONS: usize = 10_000;
        if iterations == 0 || iterations > MAX_ITERATIONS {
            return Err(FitError::InvalidParameter {
                parameter: "max_iterations",
                reason: "must be in [1, 10000]",
            });
        }
        Ok(())
    }
}
