//! Convergence and precondition tests for the iterative linear solvers.
//!
//! Reference solutions come from the direct LU solve so the iterative
//! results can be checked against an independent method.

use ndarray as nd;
use sweepquad::error::SolveError;
use sweepquad::linsolve::{ self, Method, System };
use sweepquad::utils::{ inf_norm, inf_norm_diff };

fn dominant_3x3() -> System {
    let a: nd::Array2<f64> = nd::array![
        [5.0, -2.0,  1.0],
        [1.0,  5.0, -3.0],
        [2.0,  1.0, -5.0],
    ];
    let b: nd::Array1<f64> = nd::array![4.0, 2.0, -11.0];
    System::new(a, b).unwrap()
}

fn tridiagonal_5x5() -> System {
    let a: nd::Array2<f64> = nd::array![
        [1.0, 1.0, 0.0, 0.0, 0.0],
        [1.0, 2.0, 1.0, 0.0, 0.0],
        [0.0, 1.0, 3.0, 1.0, 0.0],
        [0.0, 0.0, 1.0, 4.0, 1.0],
        [0.0, 0.0, 0.0, 1.0, 5.0],
    ];
    let b: nd::Array1<f64> = nd::array![2.0, 4.0, 5.0, 6.0, 6.0];
    System::new(a, b).unwrap()
}

#[test]
fn gauss_seidel_matches_direct_solve() {
    let sys = dominant_3x3();
    let sol = sys.solve(Method::GaussSeidel, Some(1e-5), Some(5000)).unwrap();
    let reference = sys.direct().unwrap();
    let diff = inf_norm_diff(&sol.x, &reference);
    println!("gauss-seidel converged in {} sweeps, diff = {:e}", sol.sweeps, diff);
    assert!(diff < 1e-4, "diff {} exceeds tolerance", diff);
    let residual = inf_norm(&(sys.get_A().dot(&sol.x) - sys.get_b()));
    assert!(residual < 1e-4, "residual {} exceeds tolerance", residual);
}

#[test]
fn sor_matches_direct_solve() {
    let sys = tridiagonal_5x5();
    let sol = sys.solve(Method::Sor { omega: 1.5 }, Some(1e-6), Some(10000))
        .unwrap();
    let reference = sys.direct().unwrap();
    // the exact solution is all ones
    let diff = inf_norm_diff(&sol.x, &reference);
    println!("sor converged in {} sweeps, diff = {:e}", sol.sweeps, diff);
    assert!(diff < 1e-5, "diff {} exceeds tolerance", diff);
    assert!(sol.x.iter().all(|xk| (xk - 1.0).abs() < 1e-4));
}

#[test]
fn sor_accelerates_gauss_seidel() {
    let sys = tridiagonal_5x5();
    let sol_sor = sys.solve(Method::Sor { omega: 1.5 }, Some(1e-6), Some(10000))
        .unwrap();
    let sol_gs = sys.solve(Method::GaussSeidel, Some(1e-6), Some(10000))
        .unwrap();
    println!("sweeps: sor = {}, gs = {}", sol_sor.sweeps, sol_gs.sweeps);
    assert!(
        sol_sor.sweeps <= sol_gs.sweeps,
        "sor took {} sweeps, gauss-seidel only {}",
        sol_sor.sweeps,
        sol_gs.sweeps,
    );
}

#[test]
fn initial_guess_converges_to_same_solution() {
    let sys = dominant_3x3();
    let from_zero = sys.solve(Method::GaussSeidel, Some(1e-8), Some(5000))
        .unwrap();
    let from_ones = linsolve::gauss_seidel(
        sys.get_A(),
        sys.get_b(),
        1e-8,
        5000,
        Some(nd::Array1::ones(3)),
    ).unwrap();
    assert!(inf_norm_diff(&from_zero.x, &from_ones.x) < 1e-6);
}

#[test]
fn zero_diagonal_entry_fails_deterministically() {
    let a: nd::Array2<f64> = nd::array![[0.0, 1.0], [1.0, 1.0]];
    let b: nd::Array1<f64> = nd::array![1.0, 2.0];
    let res = linsolve::gauss_seidel(&a, &b, 1e-6, 100, None);
    assert!(matches!(res, Err(SolveError::ZeroPivot(0, _))));
}

#[test]
fn non_square_matrix_fails_fast() {
    let a: nd::Array2<f64> = nd::array![[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]];
    let b: nd::Array1<f64> = nd::array![1.0, 2.0];
    let res = linsolve::gauss_seidel(&a, &b, 1e-6, 100, None);
    assert!(matches!(res, Err(SolveError::NonSquare(2, 3))));
}

#[test]
fn mismatched_lengths_fail_fast() {
    let a: nd::Array2<f64> = nd::array![[4.0, 1.0], [1.0, 4.0]];
    let b: nd::Array1<f64> = nd::array![1.0, 2.0, 3.0];
    let res = linsolve::gauss_seidel(&a, &b, 1e-6, 100, None);
    assert!(matches!(res, Err(SolveError::Length(_))));

    let b: nd::Array1<f64> = nd::array![1.0, 2.0];
    let res = linsolve::gauss_seidel(
        &a, &b, 1e-6, 100, Some(nd::Array1::zeros(5)));
    assert!(matches!(res, Err(SolveError::Length(_))));
}

#[test]
fn relaxation_factor_bounds_are_strict() {
    let sys = tridiagonal_5x5();
    for omega in [0.5, 1.0, 2.0, 2.5] {
        let res = sys.solve(Method::Sor { omega }, None, None);
        assert!(
            matches!(res, Err(SolveError::BadOmega(w)) if w == omega),
            "omega = {} was not rejected",
            omega,
        );
    }
    assert!(Method::Sor { omega: 1.5 }.is_sor());
    assert!(Method::GaussSeidel.is_gauss_seidel());
}

#[test]
fn zero_sweep_budget_fails_gracefully() {
    let sys = dominant_3x3();
    let res = sys.solve(Method::GaussSeidel, Some(1e-6), Some(0));
    assert!(matches!(res, Err(SolveError::BadMaxiters(0))));
    let res = sys.solve(Method::GaussSeidel, Some(0.0), Some(100));
    assert!(matches!(res, Err(SolveError::BadEpsilon(_))));
}

#[test]
fn nonconvergence_reports_last_iterate() {
    // not diagonally dominant; gauss-seidel diverges on this system
    let a: nd::Array2<f64> = nd::array![[1.0, 2.0], [3.0, 1.0]];
    let b: nd::Array1<f64> = nd::array![1.0, 1.0];
    let res = linsolve::gauss_seidel(&a, &b, 1e-10, 10, None);
    match res {
        Err(SolveError::NoConverge { maxiters, last }) => {
            assert_eq!(maxiters, 10);
            assert_eq!(last.len(), 2);
            assert!(last.iter().all(|xk| xk.is_finite()));
        },
        other => panic!("expected NoConverge, got {:?}", other),
    }
}

#[test]
fn repeated_calls_are_bit_identical() {
    let sys = tridiagonal_5x5();
    let first = sys.solve(Method::Sor { omega: 1.5 }, Some(1e-6), Some(10000))
        .unwrap();
    let second = sys.solve(Method::Sor { omega: 1.5 }, Some(1e-6), Some(10000))
        .unwrap();
    assert_eq!(first.sweeps, second.sweeps);
    assert!(
        first.x.iter().zip(&second.x)
            .all(|(a, b)| a.to_bits() == b.to_bits())
    );
}
