//! # Matrix implementations
//!
//! A dense, row major matrix. The linear programs this crate targets are small and dense, so a
//! `Vec<Vec<F>>` is all that is needed.
use std::slice::Iter;

use crate::data::linear_algebra::vector::{add_multiple, inner_product};
use crate::data::number_types::traits::{max_abs, Scalar};

/// Uses a `Vec<Vec<F>>` as underlying data structure. Dimensions are fixed at creation.
#[derive(Clone, Debug, PartialEq)]
pub struct DenseMatrix<F> {
    data: Vec<Vec<F>>,
    nr_rows: usize,
    nr_columns: usize,
}

impl<F: Scalar> DenseMatrix<F> {
    /// Create a `DenseMatrix` from rows.
    ///
    /// # Arguments
    ///
    /// * `rows`: Row values, each of length `nr_columns`.
    /// * `nr_columns`: Number of columns, needed explicitly when there are no rows.
    pub fn from_rows(rows: Vec<Vec<F>>, nr_columns: usize) -> Self {
        debug_assert!(rows.iter().all(|row| row.len() == nr_columns));

        Self { nr_rows: rows.len(), data: rows, nr_columns }
    }

    /// Create a `DenseMatrix` from columns.
    ///
    /// # Arguments
    ///
    /// * `columns`: Column values, each of length `nr_rows`.
    /// * `nr_rows`: Number of rows, needed explicitly when there are no columns.
    pub fn from_columns(columns: &[Vec<F>], nr_rows: usize) -> Self {
        debug_assert!(columns.iter().all(|column| column.len() == nr_rows));

        let data = (0..nr_rows)
            .map(|i| columns.iter().map(|column| column[i]).collect())
            .collect();
        Self { data, nr_rows, nr_columns: columns.len() }
    }

    /// Create a dense matrix of zero's of dimension `nr_rows` x `nr_columns`.
    pub fn zeros(nr_rows: usize, nr_columns: usize) -> Self {
        Self { data: vec![vec![F::zero(); nr_columns]; nr_rows], nr_rows, nr_columns }
    }

    /// Create a dense square identity matrix of size `len`.
    pub fn identity(len: usize) -> Self {
        let mut matrix = Self::zeros(len, len);
        for i in 0..len {
            matrix.data[i][i] = F::one();
        }
        matrix
    }

    /// Set the value at coordinate (`i`, `j`).
    pub fn set(&mut self, i: usize, j: usize, value: F) {
        debug_assert!(i < self.nr_rows);
        debug_assert!(j < self.nr_columns);

        self.data[i][j] = value;
    }

    /// Get all values in row `i` of this matrix.
    pub fn row(&self, i: usize) -> &[F] {
        debug_assert!(i < self.nr_rows);

        &self.data[i]
    }

    /// Iterate over the rows of this matrix.
    pub fn rows(&self) -> Iter<'_, Vec<F>> {
        self.data.iter()
    }

    /// Get all values in column `j` of this matrix.
    pub fn column(&self, j: usize) -> Vec<F> {
        debug_assert!(j < self.nr_columns);

        self.data.iter().map(|row| row[j]).collect()
    }

    /// The transpose of this matrix.
    pub fn transpose(&self) -> Self {
        let data = (0..self.nr_columns).map(|j| self.column(j)).collect();
        Self { data, nr_rows: self.nr_columns, nr_columns: self.nr_rows }
    }

    /// Multiply with a column vector from the right, `M x`.
    pub fn multiply_column(&self, x: &[F]) -> Vec<F> {
        debug_assert_eq!(x.len(), self.nr_columns);

        self.data.iter().map(|row| inner_product(row, x)).collect()
    }

    /// Magnitude of the terms in the product with a column vector, `|M| |x|`.
    ///
    /// Rounding errors in `M x` are small relative to these values.
    pub fn multiply_column_magnitude(&self, x: &[F]) -> Vec<F> {
        debug_assert_eq!(x.len(), self.nr_columns);

        self.data.iter()
            .map(|row| row.iter().zip(x).map(|(&m, &v)| (m * v).abs()).sum())
            .collect()
    }

    /// Multiply with a row vector from the left, `y^T M`.
    pub fn multiply_row(&self, y: &[F]) -> Vec<F> {
        debug_assert_eq!(y.len(), self.nr_rows);

        let mut result = vec![F::zero(); self.nr_columns];
        for (row, &factor) in self.data.iter().zip(y) {
            if !factor.is_zero() {
                add_multiple(&mut result, factor, row);
            }
        }
        result
    }

    /// Compute the inverse of this square matrix using Gauss-Jordan elimination with partial
    /// pivoting.
    ///
    /// # Arguments
    ///
    /// * `tolerance`: Pivots not larger than this, relative to the largest absolute value in the
    /// column of the original matrix, are considered zero.
    ///
    /// # Return value
    ///
    /// `None` if the matrix is (numerically) singular.
    pub fn inverse(&self, tolerance: F) -> Option<Self> {
        debug_assert_eq!(self.nr_rows, self.nr_columns);

        let n = self.nr_rows;
        let column_scales = (0..n).map(|j| max_abs(&self.column(j))).collect::<Vec<_>>();
        let mut work = self.data.clone();
        let mut inverse = Self::identity(n).data;

        for k in 0..n {
            // Largest absolute value in column k, first one on ties
            let pivot_row = (k..n).fold(k, |best, i| {
                if work[i][k].abs() > work[best][k].abs() { i } else { best }
            });
            let pivot = work[pivot_row][k];
            if pivot.abs() <= tolerance * column_scales[k] {
                return None;
            }
            work.swap(k, pivot_row);
            inverse.swap(k, pivot_row);

            for value in work[k].iter_mut() {
                *value /= pivot;
            }
            for value in inverse[k].iter_mut() {
                *value /= pivot;
            }

            for i in (0..n).filter(|&i| i != k) {
                let factor = work[i][k];
                if factor.is_zero() {
                    continue;
                }
                let (pivot_work, pivot_inverse) = (work[k].clone(), inverse[k].clone());
                add_multiple(&mut work[i], -factor, &pivot_work);
                add_multiple(&mut inverse[i], -factor, &pivot_inverse);
            }
        }

        Some(Self { data: inverse, nr_rows: n, nr_columns: n })
    }

    /// Number of rows.
    pub fn nr_rows(&self) -> usize {
        self.nr_rows
    }

    /// Number of columns.
    pub fn nr_columns(&self) -> usize {
        self.nr_columns
    }
}
