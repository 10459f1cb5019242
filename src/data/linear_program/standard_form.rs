//! # Standard form
//!
//! A linear program in standard form, `min c^T x` subject to `A x = b` and `x >= 0`. This is the
//! only form the algorithms in this crate accept; other problems are transformed into it first.
use crate::algorithm::two_phase::matrix_provider::MatrixProvider;
use crate::data::linear_algebra::matrix::DenseMatrix;
use crate::data::linear_algebra::vector::{DenseVector, inner_product};
use crate::data::number_types::traits::{max_abs, Scalar};
use crate::error::ValidationError;

/// A validated, immutable linear program in standard form.
#[derive(Debug, Clone, PartialEq)]
pub struct StandardForm<F> {
    cost: DenseVector<F>,
    constraints: DenseMatrix<F>,
    b: DenseVector<F>,
}

impl<F: Scalar> StandardForm<F> {
    /// Create a new linear program after checking the dimensions and values of the input.
    ///
    /// # Arguments
    ///
    /// * `cost`: Cost vector `c`, one value per variable.
    /// * `constraints`: Rows of the constraint matrix `A`, each with one value per variable.
    /// * `b`: Constraint values, one per row.
    ///
    /// # Return value
    ///
    /// A `ValidationError` if the number of rows and constraint values differ, if a row doesn't
    /// have one coefficient per variable, or if a value is not finite.
    pub fn new(
        cost: Vec<F>,
        constraints: Vec<Vec<F>>,
        b: Vec<F>,
    ) -> Result<Self, ValidationError> {
        if constraints.len() != b.len() {
            return Err(ValidationError::ConstraintValueCount {
                nr_rows: constraints.len(),
                nr_constraint_values: b.len(),
            });
        }
        let nr_columns = cost.len();
        if let Some((row, values)) = constraints.iter().enumerate()
            .find(|(_, values)| values.len() != nr_columns) {
            return Err(ValidationError::RowLength { row, expected: nr_columns, actual: values.len() });
        }

        if let Some(j) = cost.iter().position(|v| !v.is_finite()) {
            return Err(ValidationError::NotFinite { location: format!("cost of variable {}", j) });
        }
        for (i, row) in constraints.iter().enumerate() {
            if let Some(j) = row.iter().position(|v| !v.is_finite()) {
                return Err(ValidationError::NotFinite { location: format!("coefficient ({}, {})", i, j) });
            }
        }
        if let Some(i) = b.iter().position(|v| !v.is_finite()) {
            return Err(ValidationError::NotFinite { location: format!("constraint value {}", i) });
        }

        Ok(Self {
            cost: DenseVector::new(cost),
            constraints: DenseMatrix::from_rows(constraints, nr_columns),
            b: DenseVector::new(b),
        })
    }

    /// Assemble a linear program from parts that are consistent by construction.
    pub(crate) fn from_parts(cost: DenseVector<F>, constraints: DenseMatrix<F>, b: DenseVector<F>) -> Self {
        debug_assert_eq!(cost.len(), constraints.nr_columns());
        debug_assert_eq!(b.len(), constraints.nr_rows());

        Self { cost, constraints, b }
    }

    /// Cost vector `c`.
    pub fn cost(&self) -> &DenseVector<F> {
        &self.cost
    }

    /// Constraint matrix `A`.
    pub fn constraints(&self) -> &DenseMatrix<F> {
        &self.constraints
    }

    /// Constraint values `b`.
    pub fn b(&self) -> &DenseVector<F> {
        &self.b
    }

    /// Objective function value `c^T x` of a solution.
    pub fn objective_value(&self, x: &[F]) -> F {
        inner_product(&self.cost, x)
    }

    /// Largest absolute violation of the equality constraints, `||A x - b||_inf`.
    pub fn residual(&self, x: &[F]) -> F {
        let ax = self.constraints.multiply_column(x);
        let difference = ax.iter().zip(self.b.iter()).map(|(&l, &r)| l - r).collect::<Vec<_>>();
        max_abs(&difference)
    }

    /// Whether a solution satisfies all constraints, up to a tolerance.
    pub fn is_feasible(&self, x: &[F], tolerance: F) -> bool {
        x.len() == self.nr_columns()
            && x.iter().all(|&v| v >= -tolerance)
            && self.residual(x) <= tolerance
    }
}

impl<F: Scalar> MatrixProvider for StandardForm<F> {
    type F = F;

    fn column(&self, j: usize) -> Vec<F> {
        debug_assert!(j < self.nr_columns());

        self.constraints.column(j)
    }

    fn cost_value(&self, j: usize) -> F {
        debug_assert!(j < self.nr_columns());

        self.cost[j]
    }

    fn constraint_values(&self) -> Vec<F> {
        self.b.data.clone()
    }

    fn nr_rows(&self) -> usize {
        self.constraints.nr_rows()
    }

    fn nr_columns(&self) -> usize {
        self.cost.len()
    }
}
