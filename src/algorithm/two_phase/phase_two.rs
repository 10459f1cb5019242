//! # Phase two: optimizing
//!
//! Starting from a basic feasible solution, moves from basis to basis until the relative costs of
//! all variables are nonnegative.
use crate::algorithm::OptimizationResult;
use crate::algorithm::two_phase::{Budget, PhaseResult, primal as simplex};
use crate::algorithm::two_phase::matrix_provider::MatrixProvider;
use crate::algorithm::two_phase::observer::{Observer, Phase};
use crate::algorithm::two_phase::strategy::pivot_rule::PivotRule;
use crate::algorithm::two_phase::tableau::Tableau;
use crate::error::SolveError;

/// Reduces the cost of the basic feasible solution to the minimum.
///
/// # Arguments
///
/// * `provider`: Problem to optimize, its constraint matrix should have full row rank.
/// * `basis`: Column indices of a basic feasible solution, one for each row.
/// * `tolerance`: Used for all comparisons against zero.
/// * `budget`: Basis changes that may still be made.
/// * `observer`: Receives a notification for each step.
///
/// # Return value
///
/// An `OptimizationResult` indicating whether or not the problem has a finite optimum. It cannot be
/// infeasible, as a feasible solution is needed to start using this method.
pub(crate) fn primal<MP, PR, O>(
    provider: &MP,
    basis: Vec<usize>,
    tolerance: MP::F,
    budget: &mut Budget,
    observer: &mut O,
) -> Result<OptimizationResult<MP::F>, SolveError>
where
    MP: MatrixProvider,
    PR: PivotRule,
    O: Observer<MP::F>,
{
    let mut tableau = Tableau::new(provider, basis, tolerance);

    Ok(match simplex::<_, PR, _>(&mut tableau, Phase::Two, budget, observer)? {
        PhaseResult::Optimal(solution) => OptimizationResult::FiniteOptimum(tableau.current_bfs(&solution)),
        PhaseResult::Unbounded => OptimizationResult::Unbounded,
    })
}
