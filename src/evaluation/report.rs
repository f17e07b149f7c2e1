//! Formatted summaries for fit results.
//!
//! ## Purpose
//!
//! This module renders human-readable summaries of fit results. Rendering
//! is deliberately separated from computation: the fitting functions return
//! plain data, and callers opt into a report by formatting the result.
//!
//! ## Design notes
//!
//! * **Display, not print**: Everything here is a `core::fmt::Display`
//!   impl; the crate itself never writes to stdout.
//! * **Aligned columns**: Values are rendered at fixed precision so stacked
//!   lines line up in terminal output.

// External dependencies
use core::fmt;
use num_traits::Float;

// Internal dependencies
use crate::algorithms::curve_fit::CurveFit;
use crate::algorithms::linear::{LinearFit, WeightedFit};
use crate::primitives::uncertain::Uncertain;

// ============================================================================
// Uncertain Values
// ============================================================================

impl<T: Float + fmt::Display> fmt::Display for Uncertain<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.5} ± {:.5}", self.nominal, self.std_dev)
    }
}

// ============================================================================
// Linear Fits
// ============================================================================

impl<T: Float + fmt::Display> fmt::Display for LinearFit<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "y = {:.5}*x + {:.5}",
            self.slope, self.intercept
        )
    }
}

impl<T: Float + fmt::Display> fmt::Display for WeightedFit<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Weighted least-squares fit:")?;
        writeln!(f, "  Data points: {}", self.fitted.len())?;
        writeln!(
            f,
            "  slope     = {:.5} ± {:.5}",
            self.slope, self.slope_err
        )?;
        writeln!(
            f,
            "  intercept = {:.5} ± {:.5}",
            self.intercept, self.intercept_err
        )?;
        writeln!(
            f,
            "  chi²      = {:.5} ({} degrees of freedom)",
            self.chi_squared,
            self.degrees_of_freedom()
        )?;
        write!(
            f,
            "  Equation: y = ({:.5} ± {:.5})*x + ({:.5} ± {:.5})",
            self.slope, self.slope_err, self.intercept, self.intercept_err
        )
    }
}

// ============================================================================
// Nonlinear Fits
// ============================================================================

impl<T: Float + fmt::Display> fmt::Display for CurveFit<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Nonlinear least-squares fit:")?;
        let errors = self.param_errors();
        for (i, (&p, &e)) in self.params.iter().zip(errors.iter()).enumerate() {
            writeln!(f, "  p[{}] = {:.5} ± {:.5}", i, p, e)?;
        }
        writeln!(
            f,
            "  chi² = {:.5} ({} degrees of freedom)",
            self.chi_squared, self.degrees_of_freedom
        )?;
        write!(f, "  Converged after {} iterations", self.iterations)
    }
}
