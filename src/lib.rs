//! # A dense linear program solver
//!
//! Linear programs in standard form, that is
//!
//! ```text
//! minimize c^T x subject to A x = b, x >= 0,
//! ```
//!
//! are solved using the primal Simplex Method with the two phase method for finding an initial
//! basic feasible solution, as described in the book Combinatorial Optimization by Christos H.
//! Papadimitriou and Kenneth Steiglitz.
//!
//! ```
//! use dense_simplex::algorithm::OptimizationResult;
//!
//! // minimize -x0 - x1 subject to x0 + 2 x1 + x2 = 4, 3 x0 + x1 + x3 = 6
//! let result = dense_simplex::solve(
//!     vec![-1f64, -1f64, 0f64, 0f64],
//!     vec![
//!         vec![1f64, 2f64, 1f64, 0f64],
//!         vec![3f64, 1f64, 0f64, 1f64],
//!     ],
//!     vec![4f64, 6f64],
//! ).unwrap();
//! assert!(matches!(result, OptimizationResult::FiniteOptimum(_)));
//! ```
#![warn(missing_docs)]

use crate::algorithm::OptimizationResult;
use crate::algorithm::two_phase::SimplexEngine;
use crate::data::linear_program::standard_form::StandardForm;
use crate::data::number_types::traits::Scalar;
use crate::error::SolveError;

pub mod algorithm;
pub mod data;
pub mod error;

#[cfg(test)]
mod tests;

/// Solve a linear program in standard form with the default engine configuration.
///
/// # Arguments
///
/// * `cost`: Cost vector `c` of length `n`.
/// * `constraints`: Rows of the constraint matrix `A`, `m` rows of length `n` each.
/// * `b`: Constraint values of length `m`.
///
/// # Return value
///
/// Whether the problem is infeasible, unbounded or has a finite optimum (and if so, an optimal
/// solution), or an error if the input is malformed or an internal invariant was violated.
pub fn solve<F: Scalar>(
    cost: Vec<F>,
    constraints: Vec<Vec<F>>,
    b: Vec<F>,
) -> Result<OptimizationResult<F>, SolveError> {
    let problem = StandardForm::new(cost, constraints, b)?;
    SimplexEngine::default().solve(&problem)
}
