//! # Representing linear programs for rapid read access
//!
//! The Simplex method algorithms work on a tableau. We store a basis that describes the current
//! solution together with the original matrix data, which is accessed through the
//! `MatrixProvider` trait. This module contains structures that can provide a matrix.
use crate::data::number_types::traits::Scalar;

pub mod remove_rows;

/// Abstract interface for a matrix, cost vector and constraint vector.
///
/// This is the data of the problem; nothing in data structures implementing this trait determines
/// a basis. Implementors of this trait are read-only, with basis changes, the basis of the
/// `Tableau` changes instead.
///
/// Note that this trait doesn't have to be implemented by a matrix data structure per se; it can
/// also be implemented by a view on another provider, that hides some of its rows or adds
/// columns.
pub trait MatrixProvider {
    /// Number type of the values in the matrix.
    type F: Scalar;

    /// Column of the problem.
    ///
    /// # Arguments
    ///
    /// * `j`: Column index.
    ///
    /// # Return value
    ///
    /// A dense column of length `self.nr_rows()`.
    fn column(&self, j: usize) -> Vec<Self::F>;

    /// Cost of a variable.
    ///
    /// # Arguments
    ///
    /// * `j`: Column index.
    fn cost_value(&self, j: usize) -> Self::F;

    /// Constraint values, often called `b` in mathematical notation.
    ///
    /// # Return value
    ///
    /// A dense vector of length `self.nr_rows()`.
    fn constraint_values(&self) -> Vec<Self::F>;

    /// The number of constraints in the problem.
    fn nr_rows(&self) -> usize;

    /// The number of variables in the problem.
    fn nr_columns(&self) -> usize;
}
