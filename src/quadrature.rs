use sweepquad::quad;

// estimate ∫₀¹ 4/(1+x²) dx = π with the composite rules, then
// ∫₀¹ ln(1+x)/(1+x²) dx with the convergence-driven pair

fn main() {
    let f = |x: f64| 4.0 / (1.0 + x * x);
    let (a, b) = (0.0, 1.0);
    println!("result (composite trapezoidal) = {}", quad::trapezoid(f, a, b, 16));
    println!("result (composite simpson) = {}", quad::simpson_composite(f, a, b, 16));

    let g = |x: f64| (1.0 + x).ln() / (1.0 + x * x);
    let adaptive = quad::adaptive_simpson(g, a, b, 1e-7, None);
    println!("result (adaptive simpson) = {adaptive}");
    let romberg = quad::romberg(g, a, b, 10, 1e-7);
    println!("result (romberg) = {romberg}");
}
