//! # Algorithms
use crate::data::linear_algebra::vector::DenseVector;
use crate::data::linear_program::standard_form::StandardForm;
use crate::error::SolveError;

pub mod brute_force;
pub mod two_phase;

/// A method for solving linear programs in standard form.
///
/// All backends share the same contract: they take `(c, A, b)` and determine whether the problem
/// is infeasible, unbounded or has a finite optimum.
pub trait LinearProgramSolver<F> {
    /// Solve a linear program.
    ///
    /// # Return value
    ///
    /// Whether the problem is feasible, and if so, a solution if the problem is bounded. An error
    /// is returned only when the solve could not be completed.
    fn solve(&mut self, problem: &StandardForm<F>) -> Result<OptimizationResult<F>, SolveError>;
}

/// A linear program is either infeasible, unbounded or has a finite optimum.
///
/// This is determined as the result of an algorithm
#[allow(missing_docs)]
#[derive(PartialEq, Debug, Clone)]
pub enum OptimizationResult<F> {
    Infeasible,
    FiniteOptimum(DenseVector<F>),
    Unbounded,
}
