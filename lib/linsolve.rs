//! Functions to solve square linear systems `A·x = b` iteratively by
//! relaxation sweeps.
//!
//! Both methods update the solution vector one component at a time within a
//! sweep, using the components already updated in the current sweep for
//! columns below the diagonal and the previous sweep's components for columns
//! above it. Convergence is measured by the infinity norm of the difference
//! between successive sweeps; exhausting the sweep budget is a hard error
//! carrying the last iterate.
//!
//! Convergence is guaranteed for strictly diagonally dominant coefficient
//! matrices; that property is the caller's responsibility and is not checked
//! here.
//!
//! ```
//! use ndarray as nd;
//! use sweepquad::linsolve::{ Method, solve };
//!
//! let A: nd::Array2<f64>
//!     = nd::array![[5.0, -2.0, 1.0], [1.0, 5.0, -3.0], [2.0, 1.0, -5.0]];
//! let b: nd::Array1<f64> = nd::array![4.0, 2.0, -11.0];
//! let sol = solve(&A, &b, Method::GaussSeidel, 1e-5, 5000, None).unwrap();
//! let r = A.dot(&sol.x) - &b;
//! assert!(r.iter().all(|rk| rk.abs() < 1e-4));
//! ```

use ndarray as nd;
use ndarray_linalg::Solve;
use crate::{
    Arr1,
    Arr2,
    error::{ LengthError, SolveError },
    utils::inf_norm_diff,
    DEF_EPSILON,
    DEF_MAXITERS,
};

pub type SolveResult<T> = Result<T, SolveError>;

/// Solving method selector and parameters.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Method {
    /// Plain Gauss-Seidel sweeps.
    GaussSeidel,
    /// Successive over-relaxation: each component is a blend of its previous
    /// value and the Gauss-Seidel candidate, weighted by `omega`.
    Sor {
        /// Relaxation factor; must lie strictly between 1 and 2.
        omega: f64,
    },
}

impl Method {
    /// Return `true` if `self` is `GaussSeidel`.
    pub fn is_gauss_seidel(&self) -> bool {
        matches!(self, Self::GaussSeidel)
    }

    /// Return `true` if `self` is `Sor`.
    pub fn is_sor(&self) -> bool {
        matches!(self, Self::Sor { .. })
    }

    fn validate(&self) -> SolveResult<()> {
        match self {
            Self::GaussSeidel => Ok(()),
            Self::Sor { omega } => SolveError::check_omega(*omega),
        }
    }
}

/// A converged solution to a linear system.
///
/// This struct is usually only returned by a solver function; you probably
/// won't ever instantiate it yourself.
#[derive(Clone, Debug)]
pub struct Solution {
    /// Solution vector.
    pub x: nd::Array1<f64>,
    /// Number of sweeps performed, counting the one that met the convergence
    /// criterion.
    pub sweeps: usize,
}

/// Solve `A·x = b` iteratively for a given [method][Method].
///
/// The iteration starts from `x0`, defaulting to the zero vector, and runs
/// until the infinity norm of the difference between successive sweeps drops
/// strictly below `epsilon`, up to at most `maxiters` sweeps. All
/// preconditions (square matrix, matching lengths, nonzero diagonal,
/// `epsilon > 0`, `maxiters > 0`, and the relaxation factor range for SOR)
/// are checked before the first sweep; see [`SolveError`] for the individual
/// error kinds.
pub fn solve<S, T>(
    A: &Arr2<S>,
    b: &Arr1<T>,
    method: Method,
    epsilon: f64,
    maxiters: usize,
    x0: Option<nd::Array1<f64>>,
) -> SolveResult<Solution>
where
    S: nd::Data<Elem = f64>,
    T: nd::Data<Elem = f64>,
{
    SolveError::check_square(A)?;
    LengthError::check(&A.diag(), b)?;
    SolveError::check_diag(A)?;
    SolveError::check_epsilon(epsilon)?;
    SolveError::check_maxiters(maxiters)?;
    method.validate()?;

    let n = b.len();
    let mut x: nd::Array1<f64> = match x0 {
        Some(x0) => {
            LengthError::check(&x0, b)?;
            x0
        },
        None => nd::Array1::zeros(n),
    };
    let mut x_new: nd::Array1<f64> = x.clone();
    for k in 0..maxiters {
        for i in 0..n {
            // columns below the diagonal see this sweep's values, columns
            // above it see the previous sweep's
            let sum1 = A.slice(nd::s![i, ..i]).dot(&x_new.slice(nd::s![..i]));
            let sum2 = A.slice(nd::s![i, i + 1..])
                .dot(&x.slice(nd::s![i + 1..]));
            let aii = A[[i, i]];
            x_new[i] = match method {
                Method::GaussSeidel => (b[i] - sum1 - sum2) / aii,
                Method::Sor { omega } => {
                    (1.0 - omega) * x[i]
                        + (omega / aii) * (b[i] - sum1 - sum2)
                },
            };
        }
        if inf_norm_diff(&x_new, &x) < epsilon {
            return Ok(Solution { x: x_new, sweeps: k + 1 });
        }
        x.assign(&x_new);
    }
    Err(SolveError::NoConverge { maxiters, last: x_new })
}

/// Solve `A·x = b` by plain Gauss-Seidel sweeps.
///
/// See [`solve`] for parameter semantics.
pub fn gauss_seidel<S, T>(
    A: &Arr2<S>,
    b: &Arr1<T>,
    epsilon: f64,
    maxiters: usize,
    x0: Option<nd::Array1<f64>>,
) -> SolveResult<Solution>
where
    S: nd::Data<Elem = f64>,
    T: nd::Data<Elem = f64>,
{
    solve(A, b, Method::GaussSeidel, epsilon, maxiters, x0)
}

/// Solve `A·x = b` by successive over-relaxation with factor `omega`.
///
/// See [`solve`] for parameter semantics. Returns
/// [`SolveError::BadOmega`] unless `1 < omega < 2` strictly.
pub fn sor<S, T>(
    A: &Arr2<S>,
    b: &Arr1<T>,
    omega: f64,
    epsilon: f64,
    maxiters: usize,
    x0: Option<nd::Array1<f64>>,
) -> SolveResult<Solution>
where
    S: nd::Data<Elem = f64>,
    T: nd::Data<Elem = f64>,
{
    solve(A, b, Method::Sor { omega }, epsilon, maxiters, x0)
}

/// Simple record pairing a coefficient matrix with a right-hand side.
///
/// Arrays borrowed from this type are guaranteed to have compatible shapes.
#[derive(Clone, Debug)]
pub struct System {
    // coefficient matrix
    A: nd::Array2<f64>,
    // right-hand side
    b: nd::Array1<f64>,
    // system dimension
    n: usize,
}

impl System {
    /// Create a new `System` from bare coefficient and right-hand side
    /// arrays, checking shapes.
    pub fn new(A: nd::Array2<f64>, b: nd::Array1<f64>) -> SolveResult<Self> {
        SolveError::check_square(&A)?;
        LengthError::check(&A.diag(), &b)?;
        let n = b.len();
        Ok(Self { A, b, n })
    }

    /// Get a reference to the coefficient matrix.
    pub fn get_A(&self) -> &nd::Array2<f64> { &self.A }

    /// Get a reference to the right-hand side.
    pub fn get_b(&self) -> &nd::Array1<f64> { &self.b }

    /// Get the dimension of the system.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize { self.n }

    /// Thin interface to [`solve`], starting from the zero vector.
    ///
    /// `epsilon` defaults to `1e-6` and `maxiters` to `1000`.
    pub fn solve(
        &self,
        method: Method,
        epsilon: Option<f64>,
        maxiters: Option<usize>,
    ) -> SolveResult<Solution>
    {
        solve(
            &self.A,
            &self.b,
            method,
            epsilon.unwrap_or(DEF_EPSILON),
            maxiters.unwrap_or(DEF_MAXITERS),
            None,
        )
    }

    /// Solve the system directly via LU factorization, for use as a
    /// reference solution.
    pub fn direct(&self) -> SolveResult<nd::Array1<f64>> {
        let x = self.A.solve(&self.b)?;
        Ok(x)
    }
}
