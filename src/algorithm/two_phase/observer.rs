//! # Observing the progress of the algorithm
//!
//! The engine doesn't print anything. Instead, it notifies an `Observer` of every step it takes;
//! all methods have an empty default implementation, such that an observer only needs to
//! implement the events it cares about.
use std::fmt;

use enum_map::{Enum, EnumMap};
use log::{debug, info};

use crate::algorithm::two_phase::tableau::PivotDecision;
use crate::data::number_types::traits::Scalar;

/// The two phases of the two phase method.
#[derive(Enum, Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Phase {
    /// Finding a basic feasible solution using artificial variables.
    One,
    /// Optimizing the original objective starting from a basic feasible solution.
    Two,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Phase::One => f.write_str("phase one"),
            Phase::Two => f.write_str("phase two"),
        }
    }
}

/// Receives notifications while a problem is being solved.
pub trait Observer<F> {
    /// Linearly dependent constraint rows were removed before solving.
    ///
    /// # Arguments
    ///
    /// * `rows`: Sorted indices of the removed rows in the original problem.
    fn rows_removed(&mut self, _rows: &[usize]) {}

    /// A constraint row is linearly dependent on earlier rows, but its constraint value is not,
    /// so no solution exists.
    fn inconsistent_row(&mut self, _row: usize) {}

    /// A new iteration starts.
    ///
    /// # Arguments
    ///
    /// * `phase`: Phase the iteration belongs to.
    /// * `iteration`: Number of the iteration within the phase, starting at zero.
    /// * `objective`: Objective function value of the current basic solution.
    fn iteration_started(&mut self, _phase: Phase, _iteration: usize, _objective: F) {}

    /// The current basic feasible solution has a basic variable with value zero.
    fn degenerate_solution(&mut self, _phase: Phase) {}

    /// The basis changed.
    fn pivot(&mut self, _phase: Phase, _decision: &PivotDecision<F>) {}

    /// The first phase found a basic feasible solution.
    ///
    /// # Arguments
    ///
    /// * `basis`: Sorted column indices of the basic variables.
    fn feasible_basis_found(&mut self, _basis: &[usize]) {}

    /// An optimal solution was found.
    fn optimal(&mut self, _objective: F) {}

    /// The problem was found to be infeasible.
    fn infeasible(&mut self) {}

    /// The problem was found to be unbounded.
    fn unbounded(&mut self) {}
}

/// Ignores all notifications.
impl<F> Observer<F> for () {}

/// Forwards notifications to both observers.
impl<F: Copy, A: Observer<F>, B: Observer<F>> Observer<F> for (A, B) {
    fn rows_removed(&mut self, rows: &[usize]) {
        self.0.rows_removed(rows);
        self.1.rows_removed(rows);
    }

    fn inconsistent_row(&mut self, row: usize) {
        self.0.inconsistent_row(row);
        self.1.inconsistent_row(row);
    }

    fn iteration_started(&mut self, phase: Phase, iteration: usize, objective: F) {
        self.0.iteration_started(phase, iteration, objective);
        self.1.iteration_started(phase, iteration, objective);
    }

    fn degenerate_solution(&mut self, phase: Phase) {
        self.0.degenerate_solution(phase);
        self.1.degenerate_solution(phase);
    }

    fn pivot(&mut self, phase: Phase, decision: &PivotDecision<F>) {
        self.0.pivot(phase, decision);
        self.1.pivot(phase, decision);
    }

    fn feasible_basis_found(&mut self, basis: &[usize]) {
        self.0.feasible_basis_found(basis);
        self.1.feasible_basis_found(basis);
    }

    fn optimal(&mut self, objective: F) {
        self.0.optimal(objective);
        self.1.optimal(objective);
    }

    fn infeasible(&mut self) {
        self.0.infeasible();
        self.1.infeasible();
    }

    fn unbounded(&mut self) {
        self.0.unbounded();
        self.1.unbounded();
    }
}

/// Writes all notifications to the `log` facade.
///
/// Per iteration events are logged at the debug level, outcomes at the info level.
#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct Logger;

impl<F: Scalar> Observer<F> for Logger {
    fn rows_removed(&mut self, rows: &[usize]) {
        info!("Removed {} linearly dependent constraint(s): {:?}", rows.len(), rows);
    }

    fn inconsistent_row(&mut self, row: usize) {
        info!("Constraint {} contradicts the constraints before it", row);
    }

    fn iteration_started(&mut self, phase: Phase, iteration: usize, objective: F) {
        debug!("{}, iteration {}: objective value {}", phase, iteration, objective);
    }

    fn degenerate_solution(&mut self, phase: Phase) {
        debug!("{}: degenerate basic feasible solution", phase);
    }

    fn pivot(&mut self, phase: Phase, decision: &PivotDecision<F>) {
        debug!(
            "{}: variable {} enters at position {}, variable {} leaves, ratio {}",
            phase, decision.entering, decision.leaving_position, decision.leaving, decision.ratio,
        );
    }

    fn feasible_basis_found(&mut self, basis: &[usize]) {
        info!("Basic feasible solution found with basis {:?}", basis);
    }

    fn optimal(&mut self, objective: F) {
        info!("Optimal solution found with objective value {}", objective);
    }

    fn infeasible(&mut self) {
        info!("Problem is infeasible");
    }

    fn unbounded(&mut self) {
        info!("Problem is unbounded");
    }
}

/// Counts what happened, per phase.
#[derive(Debug, Default, Clone, Eq, PartialEq)]
pub struct Statistics {
    /// Number of iterations started.
    pub iterations: EnumMap<Phase, usize>,
    /// Number of basis changes.
    pub pivots: EnumMap<Phase, usize>,
    /// Number of basis changes that didn't change the solution.
    pub degenerate_pivots: EnumMap<Phase, usize>,
    /// Number of iterations that started at a degenerate basic feasible solution.
    pub degenerate_solutions: EnumMap<Phase, usize>,
    /// Number of constraints removed before solving.
    pub rows_removed: usize,
}

impl Statistics {
    /// Total number of basis changes over both phases.
    pub fn total_pivots(&self) -> usize {
        self.pivots.values().sum()
    }
}

impl<F: Scalar> Observer<F> for Statistics {
    fn rows_removed(&mut self, rows: &[usize]) {
        self.rows_removed += rows.len();
    }

    fn iteration_started(&mut self, phase: Phase, _iteration: usize, _objective: F) {
        self.iterations[phase] += 1;
    }

    fn degenerate_solution(&mut self, phase: Phase) {
        self.degenerate_solutions[phase] += 1;
    }

    fn pivot(&mut self, phase: Phase, decision: &PivotDecision<F>) {
        self.pivots[phase] += 1;
        if decision.ratio.is_zero() {
            self.degenerate_pivots[phase] += 1;
        }
    }
}
