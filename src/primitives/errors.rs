//! Error types for measurement statistics and fitting.
//!
//! ## Purpose
//!
//! This module defines the single error type returned by every fallible
//! operation in the crate. All validation and solver failures are mapped
//! onto one of its variants.
//!
//! ## Design notes
//!
//! * **Typed failures**: Each class of invalid input gets its own variant
//!   so callers can match on the failure instead of parsing strings.
//! * **Fail-fast**: Errors are produced before any computation begins
//!   wherever possible.
//!
//! ## Non-goals
//!
//! * This module does not attempt recovery or retries; every error is
//!   surfaced directly to the caller.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::String;

// External dependencies
use core::fmt;

// ============================================================================
// FitError
// ============================================================================

/// Errors produced by statistics, regression, and curve-fitting routines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FitError {
    /// One or more input slices were empty.
    EmptyInput,

    /// Paired input slices had different lengths.
    MismatchedInputs {
        /// Length of the first (x) slice.
        x_len: usize,
        /// Length of the second (y) slice.
        y_len: usize,
    },

    /// Fewer data points than the operation requires.
    TooFewPoints {
        /// Number of points supplied.
        got: usize,
        /// Minimum number of points required.
        min: usize,
    },

    /// A non-finite (NaN or infinite) value was found in the input.
    InvalidNumericValue(String),

    /// A sample had zero variance where a nonzero spread is required.
    ConstantInput,

    /// The normal equations could not be solved (degenerate design).
    SingularSystem,

    /// The iterative fit exhausted its iteration budget.
    DidNotConverge {
        /// Number of iterations performed before giving up.
        iterations: usize,
    },

    /// A configuration parameter was outside its valid range.
    InvalidParameter {
        /// Name of the offending parameter.
        parameter: &'static str,
        /// Constraint that was violated.
        reason: &'static str,
    },
}

impl fmt::Display for FitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyInput => write!(f, "Input arrays are empty"),
            Self::MismatchedInputs { x_len, y_len } => {
                write!(f, "Length mismatch: x has {} points, y has {}", x_len, y_len)
            }
            Self::TooFewPoints { got, min } => {
                write!(f, "Too few points: got {}, need at least {}", got, min)
            }
            Self::InvalidNumericValue(detail) => {
                write!(f, "Invalid numeric value: {}", detail)
            }
            Self::ConstantInput => {
                write!(f, "Constant input: sample has zero variance")
            }
            Self::SingularSystem => {
                write!(f, "Singular system: normal equations could not be solved")
            }
            Self::DidNotConverge { iterations } => {
                write!(f, "Fit did not converge within {} iterations", iterations)
            }
            Self::InvalidParameter { parameter, reason } => {
                write!(f, "Invalid parameter '{}': {}", parameter, reason)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for FitError {}
