//! # Basis
//!
//! The set of columns that make up the current basic solution, and the inverse of the matrix they
//! form. The inverse is recomputed from the original columns when needed rather than updated, so
//! that rounding errors don't accumulate over the iterations.
use crate::algorithm::two_phase::matrix_provider::MatrixProvider;
use crate::data::linear_algebra::matrix::DenseMatrix;
use crate::data::number_types::traits::Scalar;
use crate::error::SolveError;

/// Column indices of the variables in the basis.
///
/// The indices are kept sorted, such that the position of a variable in the basis (and hence the
/// row of the basis inverse it corresponds to) follows its column index.
#[derive(Eq, PartialEq, Clone, Debug)]
pub struct Basis {
    /// Sorted, without duplicates.
    indices: Vec<usize>,
    /// Whether a column is in the basis, indexed by column.
    members: Vec<bool>,
}

impl Basis {
    /// Create a new basis.
    ///
    /// # Arguments
    ///
    /// * `indices`: Column indices, no duplicates. Need not be sorted.
    /// * `nr_columns`: Total number of columns in the problem, all indices should be smaller.
    pub fn new(mut indices: Vec<usize>, nr_columns: usize) -> Self {
        debug_assert!(indices.iter().all(|&j| j < nr_columns));

        indices.sort_unstable();
        debug_assert!(indices.windows(2).all(|w| w[0] < w[1]));

        let mut members = vec![false; nr_columns];
        for &j in &indices {
            members[j] = true;
        }

        Self { indices, members }
    }

    /// Sorted column indices.
    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    /// Number of variables in the basis, equal to the number of rows.
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    /// Whether the basis is empty, which happens only when there are no constraints.
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Whether a column is in the basis.
    pub fn contains(&self, j: usize) -> bool {
        debug_assert!(j < self.members.len());

        self.members[j]
    }

    /// Replace a basis variable.
    ///
    /// # Arguments
    ///
    /// * `position`: Position in the basis of the variable that leaves.
    /// * `entering`: Column index of the variable that enters, not yet in the basis.
    ///
    /// # Return value
    ///
    /// The column index of the variable that left.
    pub fn swap(&mut self, position: usize, entering: usize) -> usize {
        debug_assert!(position < self.indices.len());
        debug_assert!(!self.contains(entering));

        let leaving = self.indices[position];
        self.indices[position] = entering;
        self.indices.sort_unstable();
        self.members[leaving] = false;
        self.members[entering] = true;

        leaving
    }

    /// Invert the matrix formed by the basis columns.
    ///
    /// # Arguments
    ///
    /// * `provider`: Problem the column indices refer to.
    /// * `tolerance`: Pivots not larger than this value, relative to the largest value in their
    /// column, are considered zero.
    ///
    /// # Return value
    ///
    /// A `SolveError::SingularBasis` if the columns are (numerically) linearly dependent.
    pub fn factorize<MP: MatrixProvider>(
        &self,
        provider: &MP,
        tolerance: MP::F,
    ) -> Result<BasisInverse<MP::F>, SolveError> {
        debug_assert_eq!(self.indices.len(), provider.nr_rows());

        let columns = self.indices.iter().map(|&j| provider.column(j)).collect::<Vec<_>>();
        DenseMatrix::from_columns(&columns, provider.nr_rows())
            .inverse(tolerance)
            .map(|matrix| BasisInverse { matrix })
            .ok_or_else(|| SolveError::SingularBasis { basis: self.indices.clone() })
    }

    /// Give up the basis, returning the sorted column indices.
    pub fn into_indices(self) -> Vec<usize> {
        self.indices
    }
}

/// The inverse `B^-1` of a basis matrix `B`.
#[derive(Clone, Debug, PartialEq)]
pub struct BasisInverse<F> {
    matrix: DenseMatrix<F>,
}

impl<F: Scalar> BasisInverse<F> {
    /// Solve `B x = rhs`.
    pub fn solve(&self, rhs: &[F]) -> Vec<F> {
        self.matrix.multiply_column(rhs)
    }

    /// Magnitude of the terms summed in `solve`, `|B^-1| |rhs|`, one value per basis position.
    pub fn solve_magnitude(&self, rhs: &[F]) -> Vec<F> {
        self.matrix.multiply_column_magnitude(rhs)
    }

    /// Solve `y^T B = rhs^T`.
    pub fn solve_transposed(&self, rhs: &[F]) -> Vec<F> {
        self.matrix.multiply_row(rhs)
    }
}
