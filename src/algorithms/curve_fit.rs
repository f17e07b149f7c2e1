//! Nonlinear least-squares curve fitting (Levenberg–Marquardt).
//!
//! ## Purpose
//!
//! This module fits an arbitrary model `f(x, params)` to a paired
//! measurement series by minimizing the sum of squared residuals, and
//! reports the fitted parameters together with their covariance matrix.
//!
//! ## Design notes
//!
//! * **Damped normal equations**: Each step solves
//!   `(JᵀJ + λ·diag(JᵀJ)) δ = Jᵀr`, interpolating between Gauss–Newton
//!   (small λ) and gradient descent (large λ).
//! * **Numerical Jacobian**: Partial derivatives use central differences
//!   with a step scaled to each parameter's magnitude.
//! * **Convergence**: The fit stops when an accepted step improves the sum
//!   of squares by less than `tolerance` relative to its magnitude.
//! * **Covariance**: `(JᵀJ)⁻¹` at the solution, scaled by the reduced
//!   chi-squared `SSE / (N − k)` when degrees of freedom remain.
//!
//! ## Invariants
//!
//! * The reported sum of squares never increases across accepted steps.
//! * `covariance` is a row-major k×k matrix, k = number of parameters.
//!
//! ## Non-goals
//!
//! * This module does not support parameter bounds or constraints.
//! * This module does not weight residuals; scale y beforehand if needed.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::math::linalg::LinalgScalar;
use crate::primitives::errors::FitError;
use crate::primitives::uncertain::Uncertain;
use crate::primitives::validator::Validator;

// ============================================================================
// Fit Model
// ============================================================================

/// A model function `f(x, params)` that can be fitted to data.
///
/// Implemented automatically for any `Fn(T, &[T]) -> T`, so plain functions
/// and closures work directly:
///
/// ```
/// use labfit_rs::prelude::*;
///
/// fn line(x: f64, p: &[f64]) -> f64 {
///     p[0] * x + p[1]
/// }
///
/// let x = [0.0, 1.0, 2.0, 3.0];
/// let y = [1.0, 3.0, 5.0, 7.0];
/// let fit = curve_fit(&line, &x, &y, &[1.0, 0.0], &CurveFitOptions::default())?;
/// assert!((fit.params[0] - 2.0).abs() < 1e-6);
/// # Result::<(), FitError>::Ok(())
/// ```
pub trait FitModel<T: Float> {
    /// Evaluate the model at `x` with the given parameters.
    fn eval(&self, x: T, params: &[T]) -> T;

    /// Evaluate the model at an uncertain `x`, propagating its uncertainty.
    ///
    /// The default implementation applies the first-order rule
    /// `σ_f = |∂f/∂x| σ_x`, estimating the derivative with a central
    /// difference at the nominal value. Override when the model's
    /// derivative is available in closed form.
    fn eval_uncertain(&self, x: Uncertain<T>, params: &[T]) -> Uncertain<T> {
        let h = T::from(1e-6).unwrap() * (x.nominal.abs() + T::one());
        let dfdx = (self.eval(x.nominal + h, params) - self.eval(x.nominal - h, params))
            / (h + h);
        x.apply(|v| self.eval(v, params), |_| dfdx)
    }
}

impl<T: Float, F: Fn(T, &[T]) -> T> FitModel<T> for F {
    #[inline]
    fn eval(&self, x: T, params: &[T]) -> T {
        self(x, params)
    }
}

// ============================================================================
// Options
// ============================================================================

/// Configuration for [`curve_fit`]. All fields have sensible defaults.
#[derive(Debug, Clone)]
pub struct CurveFitOptions<T> {
    /// Iteration budget for the solver (default: 100).
    pub max_iterations: usize,
    /// Relative improvement in the sum of squares below which the fit is
    /// considered converged (default: 1e-10).
    pub tolerance: T,
    /// Initial damping factor λ (default: 1e-3).
    pub initial_damping: T,
    /// Relative step for numerical differentiation (default: 1e-6).
    pub derivative_step: T,
}

impl<T: Float> Default for CurveFitOptions<T> {
    fn default() -> Self {
        Self {
            max_iterations: 100,
            tolerance: T::from(1e-10).unwrap(),
            initial_damping: T::from(1e-3).unwrap(),
            derivative_step: T::from(1e-6).unwrap(),
        }
    }
}

// ============================================================================
// Fit Result
// ============================================================================

/// Result of a nonlinear least-squares fit.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CurveFit<T> {
    /// Fitted parameter values.
    pub params: Vec<T>,
    /// Parameter covariance matrix, row-major k×k.
    pub covariance: Vec<T>,
    /// Sum of squared residuals at the solution (unit weights).
    pub chi_squared: T,
    /// Degrees of freedom, `N − k`.
    pub degrees_of_freedom: usize,
    /// Number of solver iterations performed.
    pub iterations: usize,
}

impl<T: Float> CurveFit<T> {
    /// Standard error of each parameter: square root of the covariance
    /// diagonal.
    pub fn param_errors(&self) -> Vec<T> {
        let k = self.params.len();
        (0..k)
            .map(|i| self.covariance[i * k + i].max(T::zero()).sqrt())
            .collect()
    }

    /// Reduced chi-squared, `chi² / (N − k)`.
    ///
    /// Returns `None` when the fit has no degrees of freedom.
    pub fn reduced_chi_squared(&self) -> Option<T> {
        if self.degrees_of_freedom == 0 {
            return None;
        }
        Some(self.chi_squared / T::from(self.degrees_of_freedom).unwrap())
    }
}

// ============================================================================
// Levenberg–Marquardt Solver
// ============================================================================

/// Fit `model` to the paired series `(x, y)` by nonlinear least squares.
///
/// Starts from `initial_params` and iterates Levenberg–Marquardt steps
/// until the relative improvement in the sum of squares drops below
/// `options.tolerance`.
///
/// # Errors
///
/// * [`FitError::SingularSystem`] when the damped normal equations cannot
///   be solved even at maximum damping (degenerate model or data).
/// * [`FitError::DidNotConverge`] when the iteration budget is exhausted.
pub fn curve_fit<T, M>(
    model: &M,
    x: &[T],
    y: &[T],
    initial_params: &[T],
    options: &CurveFitOptions<T>,
) -> Result<CurveFit<T>, FitError>
where
    T: LinalgScalar,
    M: FitModel<T>,
{
    Validator::validate_paired(x, y, 1)?;
    if initial_params.is_empty() {
        return Err(FitError::EmptyInput);
    }
    Validator::validate_finite(initial_params, "initial_params")?;
    Validator::validate_tolerance(options.tolerance)?;
    Validator::validate_max_iterations(options.max_iterations)?;
    Validator::validate_tolerance(options.initial_damping)?;
    Validator::validate_tolerance(options.derivative_step)?;

    let n = x.len();
    let k = initial_params.len();
    if n < k {
        return Err(FitError::TooFewPoints { got: n, min: k });
    }

    let ten = T::from(10.0).unwrap();
    let lambda_floor = T::from(1e-12).unwrap();
    let lambda_ceiling = T::from(1e12).unwrap();

    let mut params = initial_params.to_vec();
    let mut sse = sum_squared_residuals(model, x, y, &params);
    let mut lambda = options.initial_damping;
    let mut iterations = 0;
    let mut converged = false;

    for iter in 1..=options.max_iterations {
        iterations = iter;

        let (jtj, jtr) = normal_equations(model, x, y, &params, options.derivative_step);

        // Damp the diagonal (Marquardt scaling).
        let mut damped = jtj.clone();
        for d in 0..k {
            damped[d * k + d] = jtj[d * k + d] * (T::one() + lambda);
        }

        let delta = match T::solve_symmetric(&damped, &jtr, k) {
            Some(delta) => delta,
            None => {
                lambda = lambda * ten;
                if lambda > lambda_ceiling {
                    return Err(FitError::SingularSystem);
                }
                continue;
            }
        };

        let trial: Vec<T> = params
            .iter()
            .zip(delta.iter())
            .map(|(&p, &d)| p + d)
            .collect();
        let trial_sse = sum_squared_residuals(model, x, y, &trial);

        if trial_sse.is_finite() && trial_sse <= sse {
            // Accepted step: relax the damping and check convergence.
            let improvement = sse - trial_sse;
            params = trial;
            sse = trial_sse;
            lambda = (lambda / ten).max(lambda_floor);

            if improvement <= options.tolerance * sse.max(T::one()) {
                converged = true;
                break;
            }
        } else {
            // Rejected step: move toward gradient descent.
            lambda = lambda * ten;
            if lambda > lambda_ceiling {
                return Err(FitError::SingularSystem);
            }
        }
    }

    if !converged {
        return Err(FitError::DidNotConverge { iterations });
    }

    // Covariance from the undamped normal matrix at the solution, scaled by
    // the reduced chi-squared when degrees of freedom remain.
    let (jtj, _) = normal_equations(model, x, y, &params, options.derivative_step);
    let mut covariance = T::invert_symmetric(&jtj, k).ok_or(FitError::SingularSystem)?;

    let dof = n - k;
    if dof > 0 {
        let scale = sse / T::from(dof).unwrap();
        for v in covariance.iter_mut() {
            *v = *v * scale;
        }
    }

    Ok(CurveFit {
        params,
        covariance,
        chi_squared: sse,
        degrees_of_freedom: dof,
        iterations,
    })
}

// ============================================================================
// Internal Helpers
// ============================================================================

/// Sum of squared residuals `Σ (y_i − f(x_i, params))²`.
fn sum_squared_residuals<T: Float, M: FitModel<T>>(
    model: &M,
    x: &[T],
    y: &[T],
    params: &[T],
) -> T {
    x.iter().zip(y.iter()).fold(T::zero(), |acc, (&xi, &yi)| {
        let r = yi - model.eval(xi, params);
        acc + r * r
    })
}

/// Accumulate the normal equations `JᵀJ` (row-major k×k) and `Jᵀr`.
///
/// Jacobian entries are central differences with a per-parameter step
/// `h_j = step · (|p_j| + 1)`.
fn normal_equations<T: Float, M: FitModel<T>>(
    model: &M,
    x: &[T],
    y: &[T],
    params: &[T],
    step: T,
) -> (Vec<T>, Vec<T>) {
    let k = params.len();
    let mut jtj = vec![T::zero(); k * k];
    let mut jtr = vec![T::zero(); k];
    let mut row = vec![T::zero(); k];
    let mut scratch = params.to_vec();

    for (&xi, &yi) in x.iter().zip(y.iter()) {
        let r = yi - model.eval(xi, params);

        for j in 0..k {
            let h = step * (params[j].abs() + T::one());
            scratch[j] = params[j] + h;
            let forward = model.eval(xi, &scratch);
            scratch[j] = params[j] - h;
            let backward = model.eval(xi, &scratch);
            scratch[j] = params[j];
            row[j] = (forward - backward) / (h + h);
        }

        for a in 0..k {
            jtr[a] = jtr[a] + row[a] * r;
            for b in 0..k {
                jtj[a * k + b] = jtj[a * k + b] + row[a] * row[b];
            }
        }
    }

    (jtj, jtr)
}
