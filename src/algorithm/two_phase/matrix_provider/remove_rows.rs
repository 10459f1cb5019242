//! # Removing rows from a matrix provider without modifying it
//!
//! The Simplex method needs a constraint matrix with full row rank, otherwise a basis of as many
//! columns as there are rows can't be invertible. This module determines which rows are linearly
//! dependent on the rows before them, and provides a wrapper around any matrix provider that
//! removes those rows.
use std::collections::HashSet;

use index_utils::remove_indices;

use crate::algorithm::two_phase::matrix_provider::MatrixProvider;
use crate::data::linear_algebra::echelon::{Echelon, Insertion};
use crate::data::linear_algebra::matrix::DenseMatrix;

/// A matrix either has full row rank, or is rank deficient.
///
/// In case it is rank deficient, a sorted, deduplicated list of (row)indices is provided that,
/// when removed, makes the matrix full rank.
#[derive(Debug, Eq, PartialEq)]
pub enum Rank {
    /// The matrix is full rank, no rows need to be removed.
    Full,
    /// The `Vec<usize>` is sorted and contains no duplicate values.
    Deficient(Vec<usize>),
}

/// A constraint row that is a linear combination of earlier rows, while its constraint value isn't
/// the same combination of their constraint values. No solution satisfies all equalities.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct InconsistentRow(pub usize);

/// Determine which rows to remove to make the constraint matrix full row rank.
///
/// Rows are considered in order; a row is kept when it is linearly independent of the rows kept
/// before it. The rows kept are those that row reduction of the transposed matrix selects as
/// pivots.
///
/// # Arguments
///
/// * `provider`: Problem to analyze.
/// * `tolerance`: Used to decide whether a row residual is zero.
///
/// # Return value
///
/// The rank, or the first row that makes the equality constraints inconsistent.
pub fn rank<MP: MatrixProvider>(provider: &MP, tolerance: MP::F) -> Result<Rank, InconsistentRow> {
    let columns = (0..provider.nr_columns()).map(|j| provider.column(j)).collect::<Vec<_>>();
    let matrix = DenseMatrix::from_columns(&columns, provider.nr_rows());
    let b = provider.constraint_values();

    let mut echelon = Echelon::new(provider.nr_columns(), tolerance);
    let mut rows_to_remove = Vec::new();
    for (i, row) in matrix.rows().enumerate() {
        match echelon.insert_with_value(row.clone(), b[i]) {
            Insertion::Independent => {},
            Insertion::Dependent => rows_to_remove.push(i),
            Insertion::Inconsistent => return Err(InconsistentRow(i)),
        }
    }

    Ok(if rows_to_remove.is_empty() {
        Rank::Full
    } else {
        Rank::Deficient(rows_to_remove)
    })
}

/// Wraps a `MatrixProvider` deleting some of its constraint rows.
///
/// Used for deleting redundant constraints before searching for a basic feasible solution.
#[derive(PartialEq, Debug)]
pub struct RemoveRows<'provider, MP> {
    provider: &'provider MP,
    /// List of rows that this method removes.
    ///
    /// Sorted at all times.
    rows_to_skip: Vec<usize>,
}

impl<'provider, MP: MatrixProvider> RemoveRows<'provider, MP> {
    /// Create a new `RemoveRows` instance.
    ///
    /// # Arguments
    ///
    /// * `provider`: Reference to an instance implementing the `MatrixProvider` trait. Rows from
    /// this provider will be removed.
    /// * `rows_to_skip`: A **sorted** list of rows that are skipped.
    pub fn new(provider: &'provider MP, rows_to_skip: Vec<usize>) -> Self {
        debug_assert!(rows_to_skip.is_sorted());
        debug_assert_eq!(rows_to_skip.iter().collect::<HashSet<_>>().len(), rows_to_skip.len());
        debug_assert!(rows_to_skip.iter().all(|&i| i < provider.nr_rows()));

        Self { provider, rows_to_skip }
    }

    /// Remove the rows needed to make the constraint matrix full row rank.
    ///
    /// # Return value
    ///
    /// A view on the provider without the redundant rows, which skips no rows at all if the
    /// matrix already has full row rank. An `InconsistentRow` if no solution satisfies the
    /// equality constraints.
    pub fn normalize(provider: &'provider MP, tolerance: MP::F) -> Result<Self, InconsistentRow> {
        Ok(match rank(provider, tolerance)? {
            Rank::Full => Self::new(provider, Vec::new()),
            Rank::Deficient(rows_to_skip) => Self::new(provider, rows_to_skip),
        })
    }

    /// Rows of the underlying provider that are removed, sorted.
    pub fn rows_to_skip(&self) -> &[usize] {
        &self.rows_to_skip
    }

    /// How many constraints were removed.
    pub fn nr_constraints_deleted(&self) -> usize {
        self.rows_to_skip.len()
    }
}

impl<'provider, MP: MatrixProvider> MatrixProvider for RemoveRows<'provider, MP> {
    type F = MP::F;

    fn column(&self, j: usize) -> Vec<Self::F> {
        debug_assert!(j < self.nr_columns());

        let mut column = self.provider.column(j);
        remove_indices(&mut column, &self.rows_to_skip);
        column
    }

    fn cost_value(&self, j: usize) -> Self::F {
        self.provider.cost_value(j)
    }

    fn constraint_values(&self) -> Vec<Self::F> {
        let mut b = self.provider.constraint_values();
        remove_indices(&mut b, &self.rows_to_skip);
        b
    }

    fn nr_rows(&self) -> usize {
        self.provider.nr_rows() - self.rows_to_skip.len()
    }

    fn nr_columns(&self) -> usize {
        self.provider.nr_columns()
    }
}
