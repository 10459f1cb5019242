//! # Incremental echelon form
//!
//! Determining whether a vector is linearly independent of a set of vectors, one vector at a time.
//! Each accepted vector is reduced against all vectors accepted before it and stored normalized
//! on its pivot, such that testing a new vector costs a single elimination pass instead of a full
//! rank computation.
use crate::data::linear_algebra::vector::add_multiple;
use crate::data::number_types::traits::{max_abs, Scalar};

/// Vectors accepted so far, in reduced and normalized form.
#[derive(Debug, Clone, PartialEq)]
pub struct Echelon<F> {
    /// (pivot index, reduced vector with a one at the pivot index, reduced value).
    rows: Vec<(usize, Vec<F>, F)>,
    len: usize,
    tolerance: F,
}

/// Outcome of adding a vector to an `Echelon`.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Insertion {
    /// The vector was linearly independent and has been added.
    Independent,
    /// The vector and its value are a linear combination of the vectors (and values) already
    /// present.
    Dependent,
    /// The vector is a linear combination of the vectors already present, but its value isn't the
    /// same combination of their values.
    Inconsistent,
}

impl<F: Scalar> Echelon<F> {
    /// Create an empty echelon form.
    ///
    /// # Arguments
    ///
    /// * `len`: Length of the vectors that will be inserted.
    /// * `tolerance`: Residuals, relative to the largest value involved in reducing the vector,
    /// that are not larger than this value are considered zero. No absolute threshold is used, so
    /// the outcome doesn't change when all vectors and values are scaled by the same factor.
    pub fn new(len: usize, tolerance: F) -> Self {
        Self { rows: Vec::new(), len, tolerance }
    }

    /// Add a vector if it is linearly independent of the vectors present.
    ///
    /// # Return value
    ///
    /// Whether the vector was added.
    pub fn insert(&mut self, vector: Vec<F>) -> bool {
        self.insert_with_value(vector, F::zero()) == Insertion::Independent
    }

    /// Add a vector together with a value (a right-hand side) that undergoes the same elimination.
    pub fn insert_with_value(&mut self, mut vector: Vec<F>, mut value: F) -> Insertion {
        debug_assert_eq!(vector.len(), self.len);

        // Residuals are compared to the largest value that took part in the elimination
        let mut vector_scale = max_abs(&vector);
        let mut value_scale = value.abs();

        for (pivot, row, row_value) in &self.rows {
            let factor = vector[*pivot];
            if !factor.is_zero() {
                vector_scale = vector_scale.max(factor.abs() * max_abs(row));
                value_scale = value_scale.max((factor * *row_value).abs());
                add_multiple(&mut vector, -factor, row);
                value -= factor * *row_value;
            }
        }

        // Largest remaining absolute value, first one on ties
        let pivot = (0..self.len).fold(None, |best: Option<usize>, j| match best {
            Some(b) if vector[b].abs() >= vector[j].abs() => Some(b),
            _ => Some(j),
        });

        match pivot {
            Some(pivot) if vector[pivot].abs() > self.tolerance * vector_scale => {
                let pivot_value = vector[pivot];
                for v in vector.iter_mut() {
                    *v /= pivot_value;
                }
                self.rows.push((pivot, vector, value / pivot_value));
                Insertion::Independent
            },
            _ => if value.abs() > self.tolerance * value_scale {
                Insertion::Inconsistent
            } else {
                Insertion::Dependent
            },
        }
    }

    /// Number of linearly independent vectors present, the rank.
    pub fn rank(&self) -> usize {
        self.rows.len()
    }
}
