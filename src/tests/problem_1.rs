//! Two constraints with slack variables.
//!
//! ```text
//! minimize   -x0 - x1
//! subject to  x0 + 2 x1 + x2      = 4
//!            3 x0 +  x1      + x3 = 6
//! ```
//!
//! The optimum is at `x0 = 8 / 5`, `x1 = 6 / 5` with value `-14 / 5`.
use approx::assert_abs_diff_eq;

use crate::algorithm::OptimizationResult;
use crate::algorithm::two_phase::{Budget, SimplexEngine};
use crate::algorithm::two_phase::matrix_provider::remove_rows::RemoveRows;
use crate::algorithm::two_phase::phase_one::{self, FeasibilityResult};
use crate::algorithm::two_phase::phase_two;
use crate::algorithm::two_phase::strategy::pivot_rule::FirstProfitable;
use crate::data::linear_program::standard_form::StandardForm;

/// Optimal objective function value.
pub const OPTIMAL_VALUE: f64 = -14f64 / 5f64;

/// The problem.
pub fn create() -> StandardForm<f64> {
    StandardForm::new(
        vec![-1f64, -1f64, 0f64, 0f64],
        vec![
            vec![1f64, 2f64, 1f64, 0f64],
            vec![3f64, 1f64, 0f64, 1f64],
        ],
        vec![4f64, 6f64],
    ).unwrap()
}

/// A problem for which the slack basis is degenerate, and where both ratios tie at zero.
pub fn create_degenerate() -> StandardForm<f64> {
    StandardForm::new(
        vec![-1f64, -1f64, 0f64, 0f64],
        vec![
            vec![1f64, -1f64, 1f64, 0f64],
            vec![1f64, -1f64, 0f64, 1f64],
        ],
        vec![0f64, 0f64],
    ).unwrap()
}

#[test]
fn conversion_pipeline() {
    let problem = create();

    // Normalization
    let normalized = RemoveRows::normalize(&problem, 1e-9).unwrap();
    assert_eq!(normalized.nr_constraints_deleted(), 0);

    // Phase one
    let mut budget = Budget::new(None);
    let basis = match phase_one::primal::<_, FirstProfitable, _>(&normalized, 1e-9, &mut budget, &mut ()) {
        Ok(FeasibilityResult::Feasible(basis)) => basis,
        other => panic!("{:?}", other),
    };
    assert_eq!(basis.len(), 2);

    // Phase two
    match phase_two::primal::<_, FirstProfitable, _>(&normalized, basis, 1e-9, &mut budget, &mut ()) {
        Ok(OptimizationResult::FiniteOptimum(x)) => {
            assert_abs_diff_eq!(x[0], 8f64 / 5f64, epsilon = 1e-9);
            assert_abs_diff_eq!(x[1], 6f64 / 5f64, epsilon = 1e-9);
            assert_abs_diff_eq!(problem.objective_value(&x), OPTIMAL_VALUE, epsilon = 1e-9);
        },
        other => panic!("{:?}", other),
    }
}

#[test]
fn degenerate() {
    // Unbounded along x0 = x1 at objective -2 x0
    assert_eq!(SimplexEngine::default().solve(&create_degenerate()), Ok(OptimizationResult::Unbounded));
}
