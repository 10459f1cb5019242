//! # Data structures for Simplex
//!
//! Contains the simplex tableau and logic for elementary operations which can be performed upon
//! it. The tableau holds a reference to the problem and the current basis; everything derived
//! from the basis is recomputed each iteration in a `BasicSolution`.
use num_traits::{Float, One, Zero};

use crate::algorithm::two_phase::matrix_provider::MatrixProvider;
use crate::algorithm::two_phase::tableau::basis::{Basis, BasisInverse};
use crate::data::linear_algebra::vector::{DenseVector, inner_product};
use crate::data::number_types::traits::max_abs;
use crate::error::SolveError;

pub mod artificial;
pub mod basis;

/// The most high-level data structure that is used by the Simplex algorithm: the Simplex tableau.
///
/// It holds only a reference to the (immutable) problem it solves, but owns the data structures
/// that describe the current solution basis.
#[derive(Debug)]
pub struct Tableau<'provider, MP: MatrixProvider> {
    provider: &'provider MP,
    /// Changes with every basis change.
    basis: Basis,
    /// Constraint values of the problem, retrieved once.
    constraint_values: Vec<MP::F>,
    tolerance: MP::F,
}

/// Everything that follows from the basis matrix in a single iteration.
///
/// Computed from scratch for every basis and discarded after the basis changes.
#[derive(Debug, Clone, PartialEq)]
pub struct BasicSolution<F> {
    inverse: BasisInverse<F>,
    /// Values of the basic variables, `B^-1 b`, by basis position.
    values: Vec<F>,
    /// Simplex multipliers `y^T = c_B^T B^-1`.
    duals: Vec<F>,
}

impl<F> BasicSolution<F> {
    /// Values of the basic variables, by basis position.
    pub fn values(&self) -> &[F] {
        &self.values
    }

    /// Simplex multipliers, one for each row.
    pub fn duals(&self) -> &[F] {
        &self.duals
    }
}

/// How the basis changes in a single iteration.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PivotDecision<F> {
    /// Column index of the variable entering the basis.
    pub entering: usize,
    /// Position in the basis of the variable leaving the basis.
    pub leaving_position: usize,
    /// Column index of the variable leaving the basis.
    pub leaving: usize,
    /// Value of the entering variable after the pivot.
    pub ratio: F,
}

impl<'provider, MP: MatrixProvider> Tableau<'provider, MP> {
    /// Create a new tableau.
    ///
    /// # Arguments
    ///
    /// * `provider`: Problem to solve.
    /// * `basis_indices`: One column index per row, describing a basic feasible solution.
    /// * `tolerance`: Values not larger than this in absolute value are considered zero.
    pub fn new(provider: &'provider MP, basis_indices: Vec<usize>, tolerance: MP::F) -> Self {
        debug_assert_eq!(basis_indices.len(), provider.nr_rows());

        Self {
            provider,
            basis: Basis::new(basis_indices, provider.nr_columns()),
            constraint_values: provider.constraint_values(),
            tolerance,
        }
    }

    /// Invert the basis and compute the primal and dual values.
    ///
    /// # Return value
    ///
    /// A `SolveError::SingularBasis` if the basis matrix can't be inverted.
    pub fn basic_solution(&self) -> Result<BasicSolution<MP::F>, SolveError> {
        let inverse = self.basis.factorize(self.provider, self.tolerance)?;
        let values = inverse.solve(&self.constraint_values);
        let basis_costs = self.basis.indices().iter()
            .map(|&j| self.provider.cost_value(j))
            .collect::<Vec<_>>();
        let duals = inverse.solve_transposed(&basis_costs);

        Ok(BasicSolution { inverse, values, duals })
    }

    /// Calculates the relative cost of a column.
    ///
    /// # Arguments
    ///
    /// * `j`: Index of column to calculate the relative cost for, in range `0` through
    /// `self.nr_columns()`.
    /// * `solution`: Values derived from the current basis.
    ///
    /// # Return value
    ///
    /// The relative cost `c_j - y^T A_j`.
    ///
    /// # Note
    ///
    /// That column will typically not be a basis column. Although the method could be valid for
    /// those inputs as well, this should never be calculated, as the relative cost always equals
    /// zero in that situation.
    pub fn relative_cost(&self, j: usize, solution: &BasicSolution<MP::F>) -> MP::F {
        debug_assert!(j < self.nr_columns());

        self.provider.cost_value(j) - inner_product(&solution.duals, &self.provider.column(j))
    }

    /// The relative cost of a column, if it is negative by more than rounding errors explain.
    ///
    /// The relative cost is compared to the size of the terms it is computed from,
    /// `|c_j| + |y|^T |A_j|`, such that scaling the problem doesn't change the outcome.
    ///
    /// # Return value
    ///
    /// The relative cost `c_j - y^T A_j`, or `None` if entering the column doesn't decrease the
    /// objective.
    pub fn profitable_relative_cost(&self, j: usize, solution: &BasicSolution<MP::F>) -> Option<MP::F> {
        debug_assert!(j < self.nr_columns());

        let column = self.provider.column(j);
        let cost = self.provider.cost_value(j);
        let relative_cost = cost - inner_product(&solution.duals, &column);
        let magnitude = solution.duals.iter().zip(&column)
            .fold(cost.abs(), |total, (&y, &a)| total + (y * a).abs());

        (relative_cost < -self.tolerance * magnitude).then_some(relative_cost)
    }

    /// Column of original problem with respect to the current basis, `B^-1 A_j`.
    ///
    /// # Arguments
    ///
    /// * `j`: Column index of the variable, in range `0` until `self.nr_columns()`.
    ///
    /// # Return value
    ///
    /// Dense column of size `self.nr_rows()`. The change of the basic variables when variable `j`
    /// increases by one is the negation of this column.
    pub fn generate_column(&self, j: usize, solution: &BasicSolution<MP::F>) -> Vec<MP::F> {
        debug_assert!(j < self.nr_columns());

        solution.inverse.solve(&self.provider.column(j))
    }

    /// Determine the row to pivot on.
    ///
    /// Determine the row to pivot on, given the column. This is the row with the positive but
    /// minimal value in the quotient of the basic variable value and the column value. On ties,
    /// the lowest basis position is chosen.
    ///
    /// A column value only counts as positive when it is large relative to the terms it is
    /// computed from, `|B^-1| |A_j|`.
    ///
    /// # Arguments
    ///
    /// * `j`: Column index of the entering variable.
    /// * `solution`: Values derived from the current basis.
    ///
    /// # Return value
    ///
    /// Basis position and ratio of the pivot, or `None` if no entry in the column is positive, in
    /// which case the problem is unbounded.
    pub fn select_primal_pivot_row(
        &self,
        j: usize,
        solution: &BasicSolution<MP::F>,
    ) -> Option<(usize, MP::F)> {
        let column = self.generate_column(j, solution);
        let magnitude = solution.inverse.solve_magnitude(&self.provider.column(j));

        let mut min_index = None;
        let mut min_ratio = None;
        for (i, ((&alpha, &scale), &value)) in column.iter().zip(&magnitude).zip(&solution.values).enumerate() {
            if alpha > self.tolerance * scale {
                // Slightly negative values are rounding errors
                let ratio = value.max(MP::F::zero()) / alpha;
                if min_ratio.is_none_or(|min| ratio < min) {
                    min_index = Some(i);
                    min_ratio = Some(ratio);
                }
            }
        }

        min_index.zip(min_ratio)
    }

    /// Brings a column into the basis.
    ///
    /// # Arguments
    ///
    /// * `pivot_column_index`: Column index of the entering variable, not in the basis.
    /// * `pivot_row_index`: Basis position of the leaving variable.
    ///
    /// # Return value
    ///
    /// Column index of the leaving variable.
    pub fn bring_into_basis(&mut self, pivot_column_index: usize, pivot_row_index: usize) -> usize {
        debug_assert!(pivot_column_index < self.nr_columns());
        debug_assert!(pivot_row_index < self.nr_rows());

        self.basis.swap(pivot_row_index, pivot_column_index)
    }

    /// Whether a column is in the basis.
    pub fn is_in_basis(&self, j: usize) -> bool {
        self.basis.contains(j)
    }

    /// Sorted column indices of the basic variables.
    pub fn basis_indices(&self) -> &[usize] {
        self.basis.indices()
    }

    /// Objective function value of the current basic solution, `c_B^T x_B`.
    pub fn objective_function_value(&self, solution: &BasicSolution<MP::F>) -> MP::F {
        let basis_costs = self.basis.indices().iter()
            .map(|&j| self.provider.cost_value(j))
            .collect::<Vec<_>>();
        inner_product(&basis_costs, &solution.values)
    }

    /// Size of the terms that the objective function value is computed from,
    /// `|c_B|^T |B^-1| |b|`.
    ///
    /// Rounding errors in `objective_function_value` are small relative to this value.
    pub fn objective_function_magnitude(&self, solution: &BasicSolution<MP::F>) -> MP::F {
        let magnitude = solution.inverse.solve_magnitude(&self.constraint_values);
        self.basis.indices().iter().zip(&magnitude)
            .map(|(&j, &m)| self.provider.cost_value(j).abs() * m)
            .sum()
    }

    /// Whether a basic variable has value zero, relative to the largest constraint value.
    pub fn is_degenerate(&self, solution: &BasicSolution<MP::F>) -> bool {
        let scale = max_abs(&self.constraint_values);
        solution.values.iter().any(|value| value.abs() <= self.tolerance * scale)
    }

    /// Values of all variables in the current basic solution.
    pub fn current_bfs(&self, solution: &BasicSolution<MP::F>) -> DenseVector<MP::F> {
        DenseVector::scatter(self.basis.indices(), &solution.values, self.nr_columns())
    }

    /// Give up the tableau, keeping only the basis.
    pub fn into_basis(self) -> Basis {
        self.basis
    }

    /// Number of constraints, equal to the number of basic variables.
    pub fn nr_rows(&self) -> usize {
        self.provider.nr_rows()
    }

    /// Number of variables.
    pub fn nr_columns(&self) -> usize {
        self.provider.nr_columns()
    }
}

/// Check whether the tableau currently has a valid basic feasible solution.
///
/// Only used for debug purposes.
pub fn is_in_basic_feasible_solution_state<MP: MatrixProvider>(
    tableau: &Tableau<MP>,
    solution: &BasicSolution<MP::F>,
) -> bool {
    let indices = tableau.basis_indices();
    let scale = MP::F::one().max(max_abs(&tableau.constraint_values));

    indices.len() == tableau.nr_rows()
        && indices.windows(2).all(|w| w[0] < w[1])
        && (0..tableau.nr_columns()).filter(|&j| tableau.is_in_basis(j)).count() == indices.len()
        && solution.values.iter().all(|&value| value >= -tableau.tolerance * scale)
}
