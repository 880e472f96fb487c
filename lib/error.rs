//! Collection of all error types.
//!
//! All errors derive [`thiserror::Error`], making them composable when allowed
//! and compatible with application code using [`anyhow`][anyhow].
//!
//! [anyhow]: https://crates.io/crates/anyhow

use ndarray as nd;
use ndarray_linalg::error::LinalgError;
use thiserror::Error;

/// Returned when an operation requiring equal-length arrays encounters arrays
/// with unequal length.
#[derive(Debug, Error)]
#[error("encountered arrays with incompatible lengths; got {0} and {1}")]
pub struct LengthError(pub usize, pub usize);

impl LengthError {
    pub(crate) fn check<S, A, T, B>(
        a: &nd::ArrayBase<S, nd::Ix1>,
        b: &nd::ArrayBase<T, nd::Ix1>,
    ) -> Result<(), Self>
    where
        S: nd::Data<Elem = A>,
        T: nd::Data<Elem = B>,
    {
        let na = a.len();
        let nb = b.len();
        (na == nb).then_some(()).ok_or(Self(na, nb))
    }
}

/// Returned from iterative linear solver functions.
#[derive(Debug, Error)]
pub enum SolveError {
    /// Returned when a coefficient matrix is not square.
    #[error("coefficient matrix must be square; got {0}x{1}")]
    NonSquare(usize, usize),

    /// Returned when a coefficient matrix carries a zero or near-zero
    /// diagonal entry, which every sweep divides by.
    #[error("zero or near-zero diagonal entry {1:e} at row {0}")]
    ZeroPivot(usize, f64),

    /// Returned when a relaxation factor lies outside the open interval
    /// (1, 2).
    #[error("relaxation factor must lie strictly between 1 and 2; got {0}")]
    BadOmega(f64),

    /// Returned when a non-positive `epsilon` value is encountered.
    #[error("epsilon values must be greater than 0; got {0}")]
    BadEpsilon(f64),

    /// Returned when a non-positive `maxiters` value is encountered.
    #[error("maxiters must be greater than 0; got {0}")]
    BadMaxiters(usize),

    /// Returned when the sweep budget is exhausted before the convergence
    /// criterion is met. Carries the last computed iterate for inspection.
    #[error("failed to converge within {maxiters} sweeps")]
    NoConverge {
        /// The exhausted sweep budget.
        maxiters: usize,
        /// The last iterate computed before giving up.
        last: nd::Array1<f64>,
    },

    /// [`LengthError`]
    #[error("array length error: {0}")]
    Length(#[from] LengthError),

    /// [`LinalgError`]
    #[error("linalg error: {0}")]
    Linalg(#[from] LinalgError),
}

impl SolveError {
    pub(crate) fn check_square<S>(A: &nd::ArrayBase<S, nd::Ix2>)
        -> Result<(), Self>
    where S: nd::Data<Elem = f64>
    {
        let (nr, nc) = A.dim();
        (nr == nc).then_some(()).ok_or(Self::NonSquare(nr, nc))
    }

    pub(crate) fn check_diag<S>(A: &nd::ArrayBase<S, nd::Ix2>)
        -> Result<(), Self>
    where S: nd::Data<Elem = f64>
    {
        match A.diag().iter().enumerate()
            .find(|(_, aii)| aii.abs() < f64::EPSILON)
        {
            Some((i, aii)) => Err(Self::ZeroPivot(i, *aii)),
            None => Ok(()),
        }
    }

    pub(crate) fn check_omega(omega: f64) -> Result<(), Self> {
        (1.0 < omega && omega < 2.0).then_some(())
            .ok_or(Self::BadOmega(omega))
    }

    pub(crate) fn check_epsilon(epsilon: f64) -> Result<(), Self> {
        (epsilon > 0.0).then_some(()).ok_or(Self::BadEpsilon(epsilon))
    }

    pub(crate) fn check_maxiters(maxiters: usize) -> Result<(), Self> {
        (maxiters != 0).then_some(()).ok_or(Self::BadMaxiters(maxiters))
    }
}
