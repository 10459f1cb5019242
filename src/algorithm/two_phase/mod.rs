//! # The Simplex algorithm
//!
//! This module contains all data structures and logic specific to the simplex algorithm. The
//! algorithm is implemented as described in chapters 2 and 4 of Combinatorial Optimization, a book
//! by Christos H. Papadimitriou and Kenneth Steiglitz.
//!
//! Solving happens in three steps. Linearly dependent constraints are removed first, such that the
//! constraint matrix has full row rank. The first phase then finds a basic feasible solution using
//! artificial variables, from which the second phase moves to an optimal solution.
use crate::algorithm::{LinearProgramSolver, OptimizationResult};
use crate::algorithm::two_phase::matrix_provider::MatrixProvider;
use crate::algorithm::two_phase::matrix_provider::remove_rows::{InconsistentRow, RemoveRows};
use crate::algorithm::two_phase::observer::{Logger, Observer, Phase};
use crate::algorithm::two_phase::phase_one::FeasibilityResult;
use crate::algorithm::two_phase::strategy::pivot_rule::{FirstProfitable, PivotRule};
use crate::algorithm::two_phase::tableau::{BasicSolution, is_in_basic_feasible_solution_state, PivotDecision, Tableau};
use crate::data::linear_program::standard_form::StandardForm;
use crate::data::number_types::traits::{default_tolerance, Scalar};
use crate::error::SolveError;

pub mod matrix_provider;
pub mod observer;
pub mod phase_one;
pub mod phase_two;
pub mod strategy;
pub mod tableau;

/// Settings of the `SimplexEngine`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct SolverConfig<F> {
    /// Values not larger than this in absolute value are considered zero.
    ///
    /// Used for reduced costs, in the ratio test, to detect singular bases, to decide whether the
    /// first phase reached zero cost and to detect linearly dependent rows.
    pub tolerance: F,
    /// Maximum number of basis changes over both phases, unlimited if `None`.
    pub iteration_limit: Option<usize>,
}

impl<F: Scalar> Default for SolverConfig<F> {
    fn default() -> Self {
        Self {
            tolerance: default_tolerance(),
            iteration_limit: None,
        }
    }
}

impl<F> SolverConfig<F> {
    /// Use a different tolerance.
    #[must_use]
    pub fn with_tolerance(mut self, tolerance: F) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Limit the number of basis changes.
    #[must_use]
    pub fn with_iteration_limit(mut self, iteration_limit: usize) -> Self {
        self.iteration_limit = Some(iteration_limit);
        self
    }
}

/// Counts the basis changes of a single solve against the iteration limit.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub(crate) struct Budget {
    limit: Option<usize>,
    iterations: usize,
}

impl Budget {
    pub(crate) fn new(limit: Option<usize>) -> Self {
        Self { limit, iterations: 0 }
    }

    /// Account for a basis change.
    ///
    /// # Return value
    ///
    /// A `SolveError::NonConvergence` if the limit was already reached.
    pub(crate) fn spend(&mut self) -> Result<(), SolveError> {
        match self.limit {
            Some(limit) if self.iterations >= limit => {
                Err(SolveError::NonConvergence { iterations: self.iterations })
            },
            _ => {
                self.iterations += 1;
                Ok(())
            },
        }
    }

    /// Number of basis changes so far.
    #[cfg(test)]
    pub(crate) fn iterations(&self) -> usize {
        self.iterations
    }
}

/// How the pivoting loop ended.
#[derive(Debug, PartialEq)]
pub(crate) enum PhaseResult<F> {
    /// No variable has a negative relative cost in this basic feasible solution.
    Optimal(BasicSolution<F>),
    /// The objective can be decreased without limit.
    Unbounded,
}

/// Reduces the cost of the basic feasible solution to the minimum.
///
/// This loop is shared by both phases. While calling this method, the tableau should have a
/// valid basis, and all basic variables should be nonnegative (primary feasibility).
///
/// # Arguments
///
/// * `tableau`: Tableau with a basic feasible solution, changed in place.
/// * `phase`: Phase that this loop is run in, used only to notify the observer.
/// * `budget`: Basis changes that may still be made.
/// * `observer`: Receives a notification for each step.
///
/// # Return value
///
/// The optimal basic solution, or an indication that the problem is unbounded.
pub(crate) fn primal<MP, PR, O>(
    tableau: &mut Tableau<MP>,
    phase: Phase,
    budget: &mut Budget,
    observer: &mut O,
) -> Result<PhaseResult<MP::F>, SolveError>
where
    MP: MatrixProvider,
    PR: PivotRule,
    O: Observer<MP::F>,
{
    let mut rule = PR::new();
    let mut iteration = 0;
    loop {
        let solution = tableau.basic_solution()?;
        debug_assert!(is_in_basic_feasible_solution_state(tableau, &solution));

        observer.iteration_started(phase, iteration, tableau.objective_function_value(&solution));
        if tableau.is_degenerate(&solution) {
            observer.degenerate_solution(phase);
        }

        match rule.select_primal_pivot_column(tableau, &solution) {
            Some((column_index, _cost)) => {
                match tableau.select_primal_pivot_row(column_index, &solution) {
                    Some((row_index, ratio)) => {
                        budget.spend()?;
                        let leaving = tableau.bring_into_basis(column_index, row_index);
                        observer.pivot(phase, &PivotDecision {
                            entering: column_index,
                            leaving_position: row_index,
                            leaving,
                            ratio,
                        });
                    },
                    None => break Ok(PhaseResult::Unbounded),
                }
            },
            None => break Ok(PhaseResult::Optimal(solution)),
        }

        iteration += 1;
    }
}

/// Solves linear programs in standard form with the two phase primal Simplex method.
///
/// The engine holds no state between solves other than what the observer records.
///
/// # Example
///
/// ```
/// use dense_simplex::algorithm::OptimizationResult;
/// use dense_simplex::algorithm::two_phase::{SimplexEngine, SolverConfig};
/// use dense_simplex::algorithm::two_phase::observer::Statistics;
/// use dense_simplex::data::linear_program::standard_form::StandardForm;
///
/// let problem = StandardForm::new(
///     vec![1f64, 1f64, 0f64],
///     vec![vec![1f64, 2f64, -1f64]],
///     vec![2f64],
/// ).unwrap();
///
/// let mut engine = SimplexEngine::with_observer(SolverConfig::default(), Statistics::default());
/// assert!(matches!(engine.solve(&problem), Ok(OptimizationResult::FiniteOptimum(_))));
/// assert!(engine.observer().total_pivots() > 0);
/// ```
#[derive(Debug, Clone)]
pub struct SimplexEngine<F, O = Logger> {
    config: SolverConfig<F>,
    observer: O,
}

impl<F: Scalar> SimplexEngine<F, Logger> {
    /// Create an engine that logs its progress.
    pub fn new(config: SolverConfig<F>) -> Self {
        Self::with_observer(config, Logger)
    }
}

impl<F: Scalar> Default for SimplexEngine<F, Logger> {
    fn default() -> Self {
        Self::new(SolverConfig::default())
    }
}

impl<F: Scalar, O: Observer<F>> SimplexEngine<F, O> {
    /// Create an engine that notifies a custom observer of its progress.
    pub fn with_observer(config: SolverConfig<F>, observer: O) -> Self {
        Self { config, observer }
    }

    /// The observer receiving the notifications.
    pub fn observer(&self) -> &O {
        &self.observer
    }

    /// Give up the engine, keeping the observer.
    pub fn into_observer(self) -> O {
        self.observer
    }

    /// Solve a linear program using the `FirstProfitable` pivot rule.
    ///
    /// # Return value
    ///
    /// Whether the problem is infeasible, unbounded or has a finite optimum, in which case an
    /// optimal basic feasible solution is included. An error is returned if an internal invariant
    /// is violated or the iteration limit is exceeded.
    pub fn solve(&mut self, problem: &StandardForm<F>) -> Result<OptimizationResult<F>, SolveError> {
        self.solve_with_rule::<FirstProfitable>(problem)
    }

    /// Solve a linear program using a specific pivot rule, in both phases.
    pub fn solve_with_rule<PR: PivotRule>(
        &mut self,
        problem: &StandardForm<F>,
    ) -> Result<OptimizationResult<F>, SolveError> {
        let tolerance = self.config.tolerance;
        let mut budget = Budget::new(self.config.iteration_limit);

        let normalized = match RemoveRows::normalize(problem, tolerance) {
            Ok(normalized) => normalized,
            Err(InconsistentRow(row)) => {
                self.observer.inconsistent_row(row);
                self.observer.infeasible();
                return Ok(OptimizationResult::Infeasible);
            },
        };
        if normalized.nr_constraints_deleted() > 0 {
            self.observer.rows_removed(normalized.rows_to_skip());
        }

        let basis = match phase_one::primal::<_, PR, _>(&normalized, tolerance, &mut budget, &mut self.observer)? {
            FeasibilityResult::Feasible(basis) => basis,
            FeasibilityResult::Infeasible => {
                self.observer.infeasible();
                return Ok(OptimizationResult::Infeasible);
            },
        };
        self.observer.feasible_basis_found(&basis);

        let result = phase_two::primal::<_, PR, _>(&normalized, basis, tolerance, &mut budget, &mut self.observer)?;
        match &result {
            OptimizationResult::FiniteOptimum(x) => self.observer.optimal(problem.objective_value(x)),
            OptimizationResult::Unbounded => self.observer.unbounded(),
            OptimizationResult::Infeasible => self.observer.infeasible(),
        }

        Ok(result)
    }
}

impl<F: Scalar, O: Observer<F>> LinearProgramSolver<F> for SimplexEngine<F, O> {
    fn solve(&mut self, problem: &StandardForm<F>) -> Result<OptimizationResult<F>, SolveError> {
        self.solve_with_rule::<FirstProfitable>(problem)
    }
}
