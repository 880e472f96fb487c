//! Miscellaneous tools.

use ndarray::{ self as nd, Ix1 };
use num_traits::Float;

/// Calculate the infinity norm (maximum absolute component) of a vector.
///
/// Returns zero for an empty array.
pub fn inf_norm<S, A>(v: &nd::ArrayBase<S, Ix1>) -> A
where
    S: nd::Data<Elem = A>,
    A: Float,
{
    v.iter().map(|vk| vk.abs()).fold(A::zero(), A::max)
}

/// Calculate the infinity norm of the difference of two equal-length vectors.
///
/// *Panics if the arrays have unequal lengths*.
pub fn inf_norm_diff<S, T, A>(
    a: &nd::ArrayBase<S, Ix1>,
    b: &nd::ArrayBase<T, Ix1>,
) -> A
where
    S: nd::Data<Elem = A>,
    T: nd::Data<Elem = A>,
    A: Float,
{
    assert_eq!(a.len(), b.len());
    a.iter().zip(b)
        .map(|(ak, bk)| (*ak - *bk).abs())
        .fold(A::zero(), A::max)
}

/// Integrate an evenly sampled function using the trapezoidal rule.
///
/// *Panics if `y` has length less than 2*.
pub fn trapz<S, A>(y: &nd::ArrayBase<S, Ix1>, dx: A) -> A
where
    S: nd::Data<Elem = A>,
    A: Float,
{
    let n: usize = y.len();
    let two = A::one() + A::one();
    let inner = y.slice(nd::s![1..n - 1]).iter()
        .fold(A::zero(), |acc, yk| acc + *yk);
    (dx / two) * (y[0] + two * inner + y[n - 1])
}
