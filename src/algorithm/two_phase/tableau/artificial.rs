//! # Artificial variables
//!
//! The auxiliary problem of the first phase. Rows with a negative constraint value are negated,
//! after which an identity matrix of artificial variables forms a basic feasible solution:
//!
//! ```text
//! minimize   1^T a
//! subject to D A x + a = D b
//!            x, a >= 0
//! ```
//!
//! where `D` is the diagonal matrix that negates the rows with `b_i < 0`. Artificial variables
//! have the highest column indices.
use num_traits::{Float, One, Zero};

use crate::algorithm::two_phase::matrix_provider::MatrixProvider;

/// View on a problem adding one artificial variable per row.
#[derive(Debug, PartialEq)]
pub struct Artificial<'provider, MP> {
    provider: &'provider MP,
    /// Whether a row is negated, indexed by row.
    negated_rows: Vec<bool>,
}

impl<'provider, MP: MatrixProvider> Artificial<'provider, MP> {
    /// Create the auxiliary problem.
    pub fn new(provider: &'provider MP) -> Self {
        let negated_rows = provider.constraint_values().into_iter()
            .map(|value| value < MP::F::zero())
            .collect();

        Self { provider, negated_rows }
    }

    /// Number of artificial variables, one for each row.
    pub fn nr_artificial_variables(&self) -> usize {
        self.provider.nr_rows()
    }

    /// Whether a column belongs to an artificial variable.
    pub fn is_artificial(&self, j: usize) -> bool {
        debug_assert!(j < self.nr_columns());

        j >= self.provider.nr_columns()
    }

    /// Column indices of the artificial variables.
    pub fn artificial_indices(&self) -> impl Iterator<Item = usize> {
        self.provider.nr_columns()..self.nr_columns()
    }
}

impl<'provider, MP: MatrixProvider> MatrixProvider for Artificial<'provider, MP> {
    type F = MP::F;

    fn column(&self, j: usize) -> Vec<Self::F> {
        debug_assert!(j < self.nr_columns());

        let n = self.provider.nr_columns();
        if j < n {
            let mut column = self.provider.column(j);
            for (value, &negated) in column.iter_mut().zip(&self.negated_rows) {
                if negated {
                    *value = -*value;
                }
            }
            column
        } else {
            let mut column = vec![MP::F::zero(); self.nr_rows()];
            column[j - n] = MP::F::one();
            column
        }
    }

    fn cost_value(&self, j: usize) -> Self::F {
        debug_assert!(j < self.nr_columns());

        if self.is_artificial(j) { MP::F::one() } else { MP::F::zero() }
    }

    fn constraint_values(&self) -> Vec<Self::F> {
        self.provider.constraint_values().into_iter().map(|value| value.abs()).collect()
    }

    fn nr_rows(&self) -> usize {
        self.provider.nr_rows()
    }

    fn nr_columns(&self) -> usize {
        self.provider.nr_columns() + self.nr_artificial_variables()
    }
}
