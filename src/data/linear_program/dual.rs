//! # Dual linear program
//!
//! The dual of `min c^T x` subject to `A x = b`, `x >= 0` is `max b^T y` subject to
//! `A^T y <= c`. Substituting `y` by `-y`, it reads `min b^T y` subject to `A^T y + c >= 0`; the
//! free variable `y` is split as `y = y1 - y2` and one slack `s` is introduced per inequality,
//! giving the standard form
//!
//! ```text
//! min b^T y1 - b^T y2 subject to A^T y1 - A^T y2 - s = -c, y1, y2, s >= 0.
//! ```
//!
//! The optimal value of this problem is the negation of the optimal value of the primal.
use crate::data::linear_algebra::matrix::DenseMatrix;
use crate::data::linear_algebra::vector::DenseVector;
use crate::data::linear_program::standard_form::StandardForm;
use crate::data::number_types::traits::Scalar;

/// Construct the standard form dual of a standard form primal.
///
/// Variables are ordered `(y1_0, ..., y1_{m-1}, y2_0, ..., y2_{m-1}, s_0, ..., s_{n-1})`.
pub fn primal_to_dual<F: Scalar>(primal: &StandardForm<F>) -> StandardForm<F> {
    let nr_rows = primal.constraints().nr_rows();
    let nr_columns = primal.constraints().nr_columns();
    let b = primal.b();

    let cost = b.iter().copied()
        .chain(b.iter().map(|&v| -v))
        .chain((0..nr_columns).map(|_| F::zero()))
        .collect();

    let transposed = primal.constraints().transpose();
    let constraints = transposed.rows().enumerate()
        .map(|(j, row)| {
            let mut dual_row = Vec::with_capacity(2 * nr_rows + nr_columns);
            dual_row.extend(row.iter().copied());
            dual_row.extend(row.iter().map(|&v| -v));
            dual_row.extend((0..nr_columns).map(|k| if k == j { -F::one() } else { F::zero() }));
            dual_row
        })
        .collect();

    let dual_b = primal.cost().iter().map(|&v| -v).collect();

    StandardForm::from_parts(
        DenseVector::new(cost),
        DenseMatrix::from_rows(constraints, 2 * nr_rows + nr_columns),
        DenseVector::new(dual_b),
    )
}
