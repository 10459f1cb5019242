//! # Traits
//!
//! The simplex method in this crate works over floating point numbers. Rounding errors are dealt
//! with by comparing against a tolerance rather than against zero, so the algorithms only need
//! the operations that all primitive floats provide.
use std::fmt::{Debug, Display};
use std::iter::Sum;
use std::ops::{AddAssign, DivAssign, MulAssign, SubAssign};

use num_traits::{Float, NumCast};

/// Number type used in all computations.
///
/// Automatically implemented for all types satisfying the trait's bounds, notably `f64` and `f32`.
pub trait Scalar:
    Float +
    AddAssign +
    SubAssign +
    MulAssign +
    DivAssign +
    Sum +
    Debug +
    Display +
    'static
{
}
impl<T> Scalar for T
where
    T: Float + AddAssign + SubAssign + MulAssign + DivAssign + Sum + Debug + Display + 'static,
{
}

/// Default relative tolerance used when comparing against zero.
///
/// This is `1e-9`, unless that is within a hundred machine epsilons, as for `f32`.
pub fn default_tolerance<F: Scalar>() -> F {
    let minimum = <F as NumCast>::from(100).map_or_else(F::epsilon, |factor| factor * F::epsilon());
    <F as NumCast>::from(1e-9).map_or(minimum, |tolerance| tolerance.max(minimum))
}

/// Largest absolute value in a slice, zero for an empty slice.
pub fn max_abs<F: Scalar>(values: &[F]) -> F {
    values.iter().fold(F::zero(), |max, value| max.max(value.abs()))
}
