//! Linear algebra backend for the curve fitter.
//!
//! ## Purpose
//!
//! This module provides a trait-based abstraction over the dense linear
//! algebra needed by the nonlinear solver, standardizing on the nalgebra
//! backend.
//!
//! ## Design notes
//!
//! * Uses QR decomposition (Householder reflections) instead of Cholesky for
//!   better numerical stability with ill-conditioned systems.
//! * Fallback to SVD / pseudo-inverse for rank-deficient matrices.
//! * Generic over `LinalgScalar` types (f32 and f64) which delegate to
//!   nalgebra.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// ============================================================================
// LinalgScalar Trait
// ============================================================================

/// Helper trait to bridge generic `Float` types to the nalgebra backend.
pub trait LinalgScalar: Float + 'static {
    /// Solve the symmetric system `A * delta = b` where `A` is `n x n`.
    fn solve_symmetric(a: &[Self], b: &[Self], n: usize) -> Option<Vec<Self>>;
    /// Invert the symmetric `n x n` matrix `A`.
    fn invert_symmetric(a: &[Self], n: usize) -> Option<Vec<Self>>;
}

impl LinalgScalar for f64 {
    #[inline]
    fn solve_symmetric(a: &[Self], b: &[Self], n: usize) -> Option<Vec<Self>> {
        nalgebra_backend::solve_system_f64(a, b, n)
    }
    #[inline]
    fn invert_symmetric(a: &[Self], n: usize) -> Option<Vec<Self>> {
        nalgebra_backend::invert_matrix_f64(a, n)
    }
}

impl LinalgScalar for f32 {
    #[inline]
    fn solve_symmetric(a: &[Self], b: &[Self], n: usize) -> Option<Vec<Self>> {
        nalgebra_backend::solve_system_f32(a, b, n)
    }
    #[inline]
    fn invert_symmetric(a: &[Self], n: usize) -> Option<Vec<Self>> {
        nalgebra_backend::invert_matrix_f32(a, n)
    }
}

// ============================================================================
// Nalgebra Backend Implementation
// ============================================================================

/// Nalgebra-based linear algebra operations.
pub mod nalgebra_backend {
    use super::*;
    use nalgebra::{DMatrix, DVector};

    /// Solve `A * delta = b` using f64 precision.
    pub fn solve_system_f64(a: &[f64], b: &[f64], n: usize) -> Option<Vec<f64>> {
        let matrix = DMatrix::from_column_slice(n, n, a);
        let rhs = DVector::from_column_slice(b);

        let qr = matrix.clone().qr();
        if let Some(solution) = qr.solve(&rhs) {
            return Some(solution.as_slice().to_vec());
        }

        matrix
            .svd(true, true)
            .solve(&rhs, f64::EPSILON * 100.0)
            .ok()
            .map(|s: DVector<f64>| s.as_slice().to_vec())
    }

    /// Invert the matrix `A` using f64 precision.
    pub fn invert_matrix_f64(a: &[f64], n: usize) -> Option<Vec<f64>> {
        let matrix = DMatrix::from_column_slice(n, n, a);
        let qr = matrix.clone().qr();
        let identity = DMatrix::identity(n, n);

        if let Some(inv) = qr.solve(&identity) {
            return Some(inv.as_slice().to_vec());
        }

        matrix
            .pseudo_inverse(f64::EPSILON * 100.0)
            .ok()
            .map(|inv: DMatrix<f64>| inv.as_slice().to_vec())
    }

    /// Solve `A * delta = b` using f32 precision.
    pub fn solve_system_f32(a: &[f32], b: &[f32], n: usize) -> Option<Vec<f32>> {
        let matrix = DMatrix::from_column_slice(n, n, a);
        let rhs = DVector::from_column_slice(b);

        let qr = matrix.clone().qr();
        if let Some(solution) = qr.solve(&rhs) {
            return Some(solution.as_slice().to_vec());
        }

        matrix
            .svd(true, true)
            .solve(&rhs, f32::EPSILON * 100.0)
            .ok()
            .map(|s: DVector<f32>| s.as_slice().to_vec())
    }

    /// Invert the matrix `A` using f32 precision.
    pub fn invert_matrix_f32(a: &[f32], n: usize) -> Option<Vec<f32>> {
        let matrix = DMatrix::from_column_slice(n, n, a);
        let qr = matrix.clone().qr();
        let identity = DMatrix::identity(n, n);

        if let Some(inv) = qr.solve(&identity) {
            return Some(inv.as_slice().to_vec());
        }

        matrix
            .pseudo_inverse(f32::EPSILON * 100.0)
            .ok()
            .map(|inv: DMatrix<f32>| inv.as_slice().to_vec())
    }
}
