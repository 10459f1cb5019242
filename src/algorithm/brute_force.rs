//! # Brute force
//!
//! Solving a linear program by trying every basis. The number of bases grows exponentially with
//! the size of the problem, so this is only useful for small problems, for example to verify the
//! results of the Simplex method.
use itertools::Itertools;
use log::debug;

use crate::algorithm::{LinearProgramSolver, OptimizationResult};
use crate::algorithm::two_phase::matrix_provider::MatrixProvider;
use crate::algorithm::two_phase::matrix_provider::remove_rows::RemoveRows;
use crate::algorithm::two_phase::tableau::basis::Basis;
use crate::data::linear_algebra::vector::{DenseVector, inner_product};
use crate::data::linear_program::standard_form::StandardForm;
use crate::data::number_types::traits::{default_tolerance, Scalar};
use crate::error::SolveError;

/// Enumerates all combinations of as many columns as there are (linearly independent) rows.
///
/// Every invertible combination with nonnegative basic values is a vertex of the feasible region.
/// The vertex with the lowest objective value is returned, the first one in lexicographic order
/// of the column indices on ties.
///
/// Unboundedness can't be detected; the best vertex is returned instead.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct BruteForce<F> {
    tolerance: F,
}

impl<F: Scalar> BruteForce<F> {
    /// Create a new instance.
    ///
    /// # Arguments
    ///
    /// * `tolerance`: Used to detect singular bases, negative basic values and dependent rows.
    pub fn new(tolerance: F) -> Self {
        Self { tolerance }
    }
}

impl<F: Scalar> Default for BruteForce<F> {
    fn default() -> Self {
        Self::new(default_tolerance())
    }
}

impl<F: Scalar> LinearProgramSolver<F> for BruteForce<F> {
    fn solve(&mut self, problem: &StandardForm<F>) -> Result<OptimizationResult<F>, SolveError> {
        let normalized = match RemoveRows::normalize(problem, self.tolerance) {
            Ok(normalized) => normalized,
            Err(_) => return Ok(OptimizationResult::Infeasible),
        };
        let b = normalized.constraint_values();

        let mut best: Option<(F, Vec<usize>, Vec<F>)> = None;
        let mut nr_combinations = 0;
        for indices in (0..normalized.nr_columns()).combinations(normalized.nr_rows()) {
            nr_combinations += 1;

            let basis = Basis::new(indices, normalized.nr_columns());
            let inverse = match basis.factorize(&normalized, self.tolerance) {
                Ok(inverse) => inverse,
                Err(_) => continue,
            };
            let values = inverse.solve(&b);
            let magnitude = inverse.solve_magnitude(&b);
            if values.iter().zip(&magnitude).any(|(&value, &scale)| value < -self.tolerance * scale) {
                continue;
            }

            let costs = basis.indices().iter().map(|&j| normalized.cost_value(j)).collect::<Vec<_>>();
            let objective = inner_product(&costs, &values);
            if best.as_ref().is_none_or(|(best_objective, _, _)| objective < *best_objective) {
                best = Some((objective, basis.into_indices(), values));
            }
        }
        debug!("Brute force tried {} combinations", nr_combinations);

        Ok(match best {
            Some((_, indices, values)) => {
                let values = values.into_iter().map(|value| value.max(F::zero())).collect::<Vec<_>>();
                OptimizationResult::FiniteOptimum(DenseVector::scatter(&indices, &values, normalized.nr_columns()))
            },
            None => OptimizationResult::Infeasible,
        })
    }
}
