//! Layer 3: Algorithms
//!
//! # Purpose
//!
//! This layer provides the fitting algorithms:
//! - Closed-form linear regression (simple and weighted)
//! - Iterative nonlinear least squares (Levenberg–Marquardt)
//!
//! # Architecture
//!
//! ```text
//! Layer 4: Evaluation
//!   ↓
//! Layer 3: Algorithms ← You are here
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Nonlinear least-squares curve fitting.
pub mod curve_fit;

/// Linear least-squares regression.
pub mod linear;
