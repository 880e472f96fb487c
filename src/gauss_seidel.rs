use ndarray as nd;
use sweepquad::linsolve::{ Method, System };

// solve two diagonally dominant systems by Gauss-Seidel sweeps and compare
// against direct LU solutions

fn main() -> anyhow::Result<()> {
    let a: nd::Array2<f64> = nd::array![
        [5.0, -2.0,  1.0],
        [1.0,  5.0, -3.0],
        [2.0,  1.0, -5.0],
    ];
    let b: nd::Array1<f64> = nd::array![4.0, 2.0, -11.0];
    let sys = System::new(a, b)?;
    let sol = sys.solve(Method::GaussSeidel, Some(1e-5), Some(5000))?;
    println!("x_itr = {:.6} ({} sweeps)", sol.x, sol.sweeps);
    println!("reference solution: {:.6}", sys.direct()?);

    let a: nd::Array2<f64> = nd::array![
        [ 7.0,  2.0,  1.0, -2.0],
        [ 9.0, 15.0,  3.0, -2.0],
        [-2.0, -2.0, 11.0,  5.0],
        [ 1.0,  3.0,  2.0, 13.0],
    ];
    let b: nd::Array1<f64> = nd::array![4.0, 7.0, -1.0, 0.0];
    let sys = System::new(a, b)?;
    let sol = sys.solve(Method::GaussSeidel, Some(1e-5), Some(5000))?;
    println!("x_itr = {:.6} ({} sweeps)", sol.x, sol.sweeps);
    println!("reference solution: {:.6}", sys.direct()?);
    Ok(())
}
