//! Functions to estimate definite integrals of scalar functions via
//! convergence-driven quadrature.
//!
//! Two refinement strategies are provided on top of the basic composite
//! rules: recursive [adaptive Simpson][adaptive_simpson] integration, which
//! bisects intervals until a local error criterion is met, and
//! [Romberg][romberg] extrapolation, which Richardson-extrapolates a
//! triangular table of successively refined trapezoidal estimates.
//!
//! Unlike the solvers in [`linsolve`][crate::linsolve], nothing here returns
//! an error on non-convergence: when a refinement budget runs out, the best
//! estimate computed so far is returned as-is.
//!
//! The integrand is treated as a black box and may be called many times;
//! it should be cheap and deterministic.

use ndarray as nd;
use crate::{ utils::trapz, DEF_MAXDEPTH };

/// Integrate over `[a, b]` using the composite trapezoidal rule with `n`
/// sub-intervals.
///
/// *Panics if `n` is 0*.
pub fn trapezoid<F>(f: F, a: f64, b: f64, n: usize) -> f64
where F: FnMut(f64) -> f64
{
    assert!(n > 0);
    let x: nd::Array1<f64> = nd::Array1::linspace(a, b, n + 1);
    let y: nd::Array1<f64> = x.mapv(f);
    trapz(&y, (b - a) / n as f64)
}

/// Integrate over `[a, b]` using the composite Simpson 1/3 rule with `n`
/// sub-intervals.
///
/// An odd `n` is rounded up to the next even count.
///
/// *Panics if `n` is 0*.
pub fn simpson_composite<F>(mut f: F, a: f64, b: f64, n: usize) -> f64
where F: FnMut(f64) -> f64
{
    assert!(n > 0);
    let n = if n % 2 == 1 { n + 1 } else { n };
    let x: nd::Array1<f64> = nd::Array1::linspace(a, b, n + 1);
    let h = (b - a) / n as f64;
    let odd: f64 = x.iter().skip(1).step_by(2).map(|&xk| f(xk)).sum();
    let even: f64
        = x.iter().skip(2).step_by(2).take(n / 2 - 1).map(|&xk| f(xk)).sum();
    (h / 3.0) * (f(x[0]) + 4.0 * odd + 2.0 * even + f(x[n]))
}

// one-shot midpoint Simpson estimate
fn simpson_step<F>(f: &mut F, a: f64, b: f64) -> f64
where F: FnMut(f64) -> f64
{
    let c = (a + b) / 2.0;
    (b - a) / 6.0 * (f(a) + 4.0 * f(c) + f(b))
}

/// Compute the one-shot Simpson estimate over `[a, b]` via the midpoint
/// rule.
pub fn simpson<F>(mut f: F, a: f64, b: f64) -> f64
where F: FnMut(f64) -> f64
{
    simpson_step(&mut f, a, b)
}

fn adaptive_step<F>(f: &mut F, a: f64, b: f64, epsilon: f64, depth: usize)
    -> f64
where F: FnMut(f64) -> f64
{
    let c = (a + b) / 2.0;
    let whole = simpson_step(f, a, b);
    let left = simpson_step(f, a, c);
    let right = simpson_step(f, c, b);
    let err = left + right - whole;
    if err.abs() < epsilon || depth == 0 {
        left + right + err
    } else {
        adaptive_step(f, a, c, epsilon / 2.0, depth - 1)
            + adaptive_step(f, c, b, epsilon / 2.0, depth - 1)
    }
}

/// Integrate over `[a, b]` using recursive adaptive Simpson bisection.
///
/// Each interval is accepted once the composite two-halves estimate agrees
/// with the one-shot estimate to within the local tolerance, in which case
/// the Richardson correction term is folded into the returned value. On
/// bisection the tolerance is halved once, and each half receives that same
/// halved budget.
///
/// The recursion depth is capped at `maxdepth` (default: `64`); at the cap
/// the current corrected estimate is accepted regardless of the local error,
/// so this function never fails. An integrand that is singular inside the
/// interval produces non-finite estimates that never satisfy the error
/// criterion, so evaluation near a singularity terminates only through the
/// depth cap and the result is generally meaningless.
pub fn adaptive_simpson<F>(
    mut f: F,
    a: f64,
    b: f64,
    epsilon: f64,
    maxdepth: Option<usize>,
) -> f64
where F: FnMut(f64) -> f64
{
    adaptive_step(&mut f, a, b, epsilon, maxdepth.unwrap_or(DEF_MAXDEPTH))
}

/// Integrate over `[a, b]` using Romberg extrapolation over at most
/// `maxiters` refinement levels.
///
/// Level `i` holds the composite trapezoidal estimate over `2^i`
/// sub-intervals in the first column of a triangular table; successive
/// columns Richardson-extrapolate pairs of entries from the previous column.
/// Once two successive diagonal entries agree to within `epsilon`, the
/// latest one is returned early.
///
/// This function never fails: if the tolerance is not met within the
/// refinement budget, the last diagonal entry is returned as a best-effort
/// estimate. `maxiters = 1` yields the single-interval trapezoidal estimate,
/// as does `maxiters = 0` (the coarsest estimate available).
pub fn romberg<F>(mut f: F, a: f64, b: f64, maxiters: usize, epsilon: f64)
    -> f64
where F: FnMut(f64) -> f64
{
    if maxiters == 0 {
        return trapezoid(&mut f, a, b, 1);
    }
    let mut R: nd::Array2<f64> = nd::Array2::zeros((maxiters, maxiters));
    for i in 0..maxiters {
        R[[i, 0]] = trapezoid(&mut f, a, b, 2_usize.pow(i as u32));
        for j in 1..=i {
            let p = 4.0_f64.powi(j as i32);
            R[[i, j]] = (p * R[[i, j - 1]] - R[[i - 1, j - 1]]) / (p - 1.0);
        }
        if i > 0 && (R[[i, i]] - R[[i - 1, i - 1]]).abs() < epsilon {
            return R[[i, i]];
        }
    }
    R[[maxiters - 1, maxiters - 1]]
}
