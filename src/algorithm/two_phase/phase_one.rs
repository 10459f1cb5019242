//! # Phase one: finding a basic feasible solution
//!
//! An auxiliary problem with an artificial variable for every row is solved, starting from the
//! basis of all artificial variables. If the artificial cost can be reduced to zero, the basis
//! found is a basic feasible solution of the original problem, possibly after replacing the
//! artificial variables that are still in the basis at level zero.
use crate::algorithm::two_phase::{Budget, PhaseResult, primal as simplex};
use crate::algorithm::two_phase::matrix_provider::MatrixProvider;
use crate::algorithm::two_phase::observer::{Observer, Phase};
use crate::algorithm::two_phase::strategy::pivot_rule::PivotRule;
use crate::algorithm::two_phase::tableau::artificial::Artificial;
use crate::algorithm::two_phase::tableau::basis::Basis;
use crate::algorithm::two_phase::tableau::Tableau;
use crate::data::linear_algebra::echelon::Echelon;
use crate::error::SolveError;

/// LP's can be either feasible (allowing at least one solution) or infeasible (allowing no
/// solutions).
#[derive(Debug, Eq, PartialEq)]
pub enum FeasibilityResult {
    /// Sorted column indices of a basic feasible solution, one for each row. None of them are
    /// artificial.
    Feasible(Vec<usize>),
    /// The problem is not feasible.
    Infeasible,
}

/// Reduces the artificial cost of the basic feasible solution to zero, if possible. In doing so, a
/// basic feasible solution to the standard form linear program is found.
///
/// # Arguments
///
/// * `provider`: Problem to find a basic feasible solution for. Its constraint matrix should have
/// full row rank.
/// * `tolerance`: Used for all comparisons against zero.
/// * `budget`: Basis changes that may still be made.
/// * `observer`: Receives a notification for each step.
///
/// # Return value
///
/// Whether the problem is feasible, and if so, a basis.
pub(crate) fn primal<MP, PR, O>(
    provider: &MP,
    tolerance: MP::F,
    budget: &mut Budget,
    observer: &mut O,
) -> Result<FeasibilityResult, SolveError>
where
    MP: MatrixProvider,
    PR: PivotRule,
    O: Observer<MP::F>,
{
    let artificial = Artificial::new(provider);
    let mut tableau = Tableau::new(&artificial, artificial.artificial_indices().collect(), tolerance);

    match simplex::<_, PR, _>(&mut tableau, Phase::One, budget, observer)? {
        PhaseResult::Optimal(solution) => {
            // Zero up to rounding errors, which scale with the problem
            let magnitude = tableau.objective_function_magnitude(&solution);
            if tableau.objective_function_value(&solution) > tolerance * magnitude {
                return Ok(FeasibilityResult::Infeasible);
            }

            let has_artificial_in_basis = tableau.basis_indices().iter()
                .any(|&j| artificial.is_artificial(j));
            let basis = tableau.into_basis();
            if has_artificial_in_basis {
                replace_artificial_basis_variables(provider, basis, tolerance)
                    .map(FeasibilityResult::Feasible)
            } else {
                Ok(FeasibilityResult::Feasible(basis.into_indices()))
            }
        },
        PhaseResult::Unbounded => Err(SolveError::UnboundedAuxiliary),
    }
}

/// Replaces the artificial variables that are still in the basis after the artificial cost was
/// reduced to zero.
///
/// All artificial variables in the basis have value zero. The nonzero values of the solution hence
/// belong to the other basis columns, which are kept. They are completed to a basis with the
/// lowest indexed columns of the original problem that keep the basis columns linearly
/// independent. The unique solution for that basis is the same solution, so it is feasible.
///
/// # Arguments
///
/// * `provider`: Original problem, without artificial variables.
/// * `basis`: Basis of the auxiliary problem.
/// * `tolerance`: Used to decide whether a column is linearly dependent on the others.
///
/// # Return value
///
/// Sorted column indices of the basis, or a `SolveError::DegenerateBasis` if not enough linearly
/// independent columns could be found. The latter can't happen if the constraint matrix has full
/// row rank.
fn replace_artificial_basis_variables<MP: MatrixProvider>(
    provider: &MP,
    basis: Basis,
    tolerance: MP::F,
) -> Result<Vec<usize>, SolveError> {
    let needed = provider.nr_rows();
    let nr_columns = provider.nr_columns();
    let mut echelon = Echelon::new(needed, tolerance);
    let mut indices = Vec::with_capacity(needed);

    for &j in basis.indices().iter().filter(|&&j| j < nr_columns) {
        let independent = echelon.insert(provider.column(j));
        debug_assert!(independent);
        indices.push(j);
    }
    for j in (0..nr_columns).filter(|&j| !basis.contains(j)) {
        if indices.len() == needed {
            break;
        }
        if echelon.insert(provider.column(j)) {
            indices.push(j);
        }
    }

    if indices.len() < needed {
        Err(SolveError::DegenerateBasis { found: indices.len(), needed })
    } else {
        indices.sort_unstable();
        Ok(indices)
    }
}
