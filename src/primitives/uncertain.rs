//! Uncertain values: a measurement paired with its standard deviation.
//!
//! ## Purpose
//!
//! This module provides [`Uncertain`], a value type carrying a nominal
//! measurement and its standard deviation, with arithmetic operators that
//! propagate independent errors through first-order (linear) rules.
//!
//! ## Design notes
//!
//! * **Explicit propagation**: Each operator states its propagation rule;
//!   sums combine absolute errors in quadrature, products and quotients
//!   combine via the exact first-order partial derivatives.
//! * **Independence**: All rules assume the operands' errors are
//!   uncorrelated. Correlated inputs will be over- or under-estimated.
//! * **Function application**: `apply` propagates through an arbitrary
//!   differentiable function given its derivative.
//!
//! ## Invariants
//!
//! * `std_dev` is always non-negative; constructors take its absolute value.
//!
//! ## Non-goals
//!
//! * This module does not track correlations between values.
//! * This module does not provide higher-order (nonlinear) propagation.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::ops::{Add, Div, Mul, Neg, Sub};
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::FitError;

// ============================================================================
// Uncertain Value Type
// ============================================================================

/// A measured quantity with an associated standard deviation.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Uncertain<T> {
    /// Central (nominal) value of the measurement.
    pub nominal: T,
    /// Standard deviation of the measurement. Always non-negative.
    pub std_dev: T,
}

impl<T: Float> Uncertain<T> {
    /// Create an uncertain value from a nominal value and standard deviation.
    ///
    /// The standard deviation is stored as its absolute value.
    #[inline]
    pub fn new(nominal: T, std_dev: T) -> Self {
        Self {
            nominal,
            std_dev: std_dev.abs(),
        }
    }

    /// Create an exact value (zero standard deviation).
    #[inline]
    pub fn exact(nominal: T) -> Self {
        Self {
            nominal,
            std_dev: T::zero(),
        }
    }

    /// Relative error `std_dev / |nominal|`.
    ///
    /// Returns infinity when the nominal value is zero and the standard
    /// deviation is not.
    #[inline]
    pub fn relative_error(&self) -> T {
        self.std_dev / self.nominal.abs()
    }

    /// Propagate through a differentiable function.
    ///
    /// # Formula
    ///
    /// First-order rule:
    /// ```text
    /// f(x ± σ) = f(x) ± |f'(x)| σ
    /// ```
    #[inline]
    pub fn apply(&self, f: impl Fn(T) -> T, dfdx: impl Fn(T) -> T) -> Self {
        Self::new(f(self.nominal), dfdx(self.nominal).abs() * self.std_dev)
    }
}

// ============================================================================
// Arithmetic Operators
// ============================================================================

// Sums and differences combine absolute errors in quadrature.
impl<T: Float> Add for Uncertain<T> {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.nominal + rhs.nominal, self.std_dev.hypot(rhs.std_dev))
    }
}

impl<T: Float> Sub for Uncertain<T> {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.nominal - rhs.nominal, self.std_dev.hypot(rhs.std_dev))
    }
}

// Products and quotients use the exact first-order partials rather than the
// relative-error shortcut, which would divide by zero at a zero nominal.
impl<T: Float> Mul for Uncertain<T> {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        let sigma = (rhs.nominal * self.std_dev).hypot(self.nominal * rhs.std_dev);
        Self::new(self.nominal * rhs.nominal, sigma)
    }
}

impl<T: Float> Div for Uncertain<T> {
    type Output = Self;

    #[inline]
    fn div(self, rhs: Self) -> Self {
        let value = self.nominal / rhs.nominal;
        let sigma = (self.std_dev / rhs.nominal).hypot(value * rhs.std_dev / rhs.nominal);
        Self::new(value, sigma)
    }
}

impl<T: Float> Neg for Uncertain<T> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self {
            nominal: -self.nominal,
            std_dev: self.std_dev,
        }
    }
}

// Scalar variants: an exact scalar shifts or scales the distribution.
impl<T: Float> Add<T> for Uncertain<T> {
    type Output = Self;

    #[inline]
    fn add(self, rhs: T) -> Self {
        Self {
            nominal: self.nominal + rhs,
            std_dev: self.std_dev,
        }
    }
}

impl<T: Float> Sub<T> for Uncertain<T> {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: T) -> Self {
        Self {
            nominal: self.nominal - rhs,
            std_dev: self.std_dev,
        }
    }
}

impl<T: Float> Mul<T> for Uncertain<T> {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: T) -> Self {
        Self::new(self.nominal * rhs, self.std_dev * rhs)
    }
}

impl<T: Float> Div<T> for Uncertain<T> {
    type Output = Self;

    #[inline]
    fn div(self, rhs: T) -> Self {
        Self::new(self.nominal / rhs, self.std_dev / rhs)
    }
}

// ============================================================================
// Slice Constructors and Accessors
// ============================================================================

/// Build uncertain values from a series with one uncertainty for all points.
pub fn from_uniform_error<T: Float>(values: &[T], err: T) -> Vec<Uncertain<T>> {
    values.iter().map(|&v| Uncertain::new(v, err)).collect()
}

/// Build uncertain values from a series with a per-point uncertainty.
///
/// Fails with [`FitError::MismatchedInputs`] when the two slices differ in
/// length.
pub fn from_per_point_errors<T: Float>(
    values: &[T],
    errs: &[T],
) -> Result<Vec<Uncertain<T>>, FitError> {
    if values.len() != errs.len() {
        return Err(FitError::MismatchedInputs {
            x_len: values.len(),
            y_len: errs.len(),
        });
    }

    Ok(values
        .iter()
        .zip(errs.iter())
        .map(|(&v, &e)| Uncertain::new(v, e))
        .collect())
}

/// Split uncertain values back into parallel (nominal, standard deviation)
/// vectors. Inverse of the constructors above.
pub fn split<T: Float>(values: &[Uncertain<T>]) -> (Vec<T>, Vec<T>) {
    let nominal = values.iter().map(|u| u.nominal).collect();
    let std_dev = values.iter().map(|u| u.std_dev).collect();
    (nominal, std_dev)
}
