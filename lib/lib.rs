#![allow(dead_code, non_snake_case)]

//! Provides functions and higher-level constructs for the iterative solution
//! of square linear systems by relaxation sweeps and for convergence-driven
//! numerical quadrature.
//!
//! Provides implementations for the following numerical routines:
//! - Linear systems:
//!     - Gauss-Seidel sweeps (immediate substitution within each sweep)
//!     - Successive over-relaxation (SOR)
//! - Quadrature:
//!     - Composite trapezoidal and Simpson 1/3 rules
//!     - Recursive adaptive Simpson (per-bisection tolerance halving,
//!       optional depth limit)
//!     - Romberg extrapolation (triangular table of Richardson-extrapolated
//!       trapezoidal estimates)
//!
//! The two families are independent and share no state; every routine takes
//! all of its input as parameters and returns a fresh value, so concurrent
//! independent calls are safe.
//!
//! Note the deliberate asymmetry in failure policy between the families: the
//! linear solvers fail hard with [`error::SolveError::NoConverge`] when the
//! sweep budget runs out, while [`quad::romberg`] silently returns its best
//! estimate when the refinement budget runs out.

pub mod error;
pub mod linsolve;
pub mod quad;
pub mod utils;

pub(crate) const DEF_EPSILON: f64 = 1e-6;
pub(crate) const DEF_MAXITERS: usize = 1000;
pub(crate) const DEF_MAXDEPTH: usize = 64;

pub type Arr1<S> = ndarray::ArrayBase<S, ndarray::Ix1>;
pub type Arr2<S> = ndarray::ArrayBase<S, ndarray::Ix2>;
