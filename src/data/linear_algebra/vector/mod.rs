//! # Vector types for linear programs
//!
//! Dense vectors and a few operations on slices of numbers. Everything in this crate is dense, so
//! plain slices are used wherever a vector doesn't need to own its data.
pub use dense::Dense as DenseVector;

use crate::data::number_types::traits::Scalar;

mod dense;

/// Inner product of two slices of equal length.
pub fn inner_product<F: Scalar>(left: &[F], right: &[F]) -> F {
    debug_assert_eq!(left.len(), right.len());

    left.iter().zip(right).map(|(&l, &r)| l * r).sum()
}

/// Add a multiple of one slice to another, `target += factor * source`.
pub fn add_multiple<F: Scalar>(target: &mut [F], factor: F, source: &[F]) {
    debug_assert_eq!(target.len(), source.len());

    for (t, &s) in target.iter_mut().zip(source) {
        *t += factor * s;
    }
}
