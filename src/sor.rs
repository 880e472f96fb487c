use ndarray as nd;
use sweepquad::linsolve::{ Method, System };

// solve a tridiagonal system by successive over-relaxation and compare the
// sweep count against plain Gauss-Seidel

fn main() -> anyhow::Result<()> {
    let a: nd::Array2<f64> = nd::array![
        [1.0, 1.0, 0.0, 0.0, 0.0],
        [1.0, 2.0, 1.0, 0.0, 0.0],
        [0.0, 1.0, 3.0, 1.0, 0.0],
        [0.0, 0.0, 1.0, 4.0, 1.0],
        [0.0, 0.0, 0.0, 1.0, 5.0],
    ];
    let b: nd::Array1<f64> = nd::array![2.0, 4.0, 5.0, 6.0, 6.0];
    let sys = System::new(a, b)?;

    let sol_sor = sys.solve(Method::Sor { omega: 1.5 }, Some(1e-6), Some(10000))?;
    println!("x_sor = {:.6} ({} sweeps)", sol_sor.x, sol_sor.sweeps);

    let sol_gs = sys.solve(Method::GaussSeidel, Some(1e-6), Some(10000))?;
    println!("x_gs = {:.6} ({} sweeps)", sol_gs.x, sol_gs.sweeps);

    println!("reference solution: {:.6}", sys.direct()?);
    Ok(())
}
