//! # Dense vector
//!
//! Wrapping a `Vec` such that it has a fixed size.
use std::fmt;
use std::fmt::Display;
use std::ops::{Deref, Index, IndexMut};

use itertools::Itertools;

use crate::data::number_types::traits::Scalar;

/// Uses a `Vec` as underlying data a structure. Length is fixed at creation.
#[derive(Debug, Clone, PartialEq)]
pub struct Dense<F> {
    #[allow(missing_docs)]
    pub data: Vec<F>,
}

impl<F> Dense<F> {
    /// Wrap existing values.
    pub fn new(data: Vec<F>) -> Self {
        Self { data }
    }

    /// Create a vector with all values being equal to a given value.
    ///
    /// # Arguments
    ///
    /// * `value`: The value which all elements of this vector are equal to.
    /// * `len`: Length of the vector, number of elements.
    pub fn constant(value: F, len: usize) -> Self
    where
        F: Clone,
    {
        Self { data: vec![value; len] }
    }

    /// Unwrap the values.
    pub fn into_inner(self) -> Vec<F> {
        self.data
    }
}

impl<F: Scalar> Dense<F> {
    /// A vector of zeros.
    pub fn zeros(len: usize) -> Self {
        Self::constant(F::zero(), len)
    }

    /// Create a vector of length `len` that is zero everywhere, except at the given indices.
    ///
    /// # Arguments
    ///
    /// * `indices`: Indices of values that are set, in the same order as `values`.
    /// * `values`: Values to scatter into the vector.
    /// * `len`: Length of the resulting vector.
    pub fn scatter(indices: &[usize], values: &[F], len: usize) -> Self {
        debug_assert_eq!(indices.len(), values.len());
        debug_assert!(indices.iter().all(|&i| i < len));

        let mut vector = Self::zeros(len);
        for (&i, &value) in indices.iter().zip(values) {
            vector.data[i] = value;
        }
        vector
    }
}

impl<F> Deref for Dense<F> {
    type Target = [F];

    fn deref(&self) -> &Self::Target {
        &self.data
    }
}

impl<F> Index<usize> for Dense<F> {
    type Output = F;

    fn index(&self, index: usize) -> &Self::Output {
        debug_assert!(index < self.data.len());

        &self.data[index]
    }
}

impl<F> IndexMut<usize> for Dense<F> {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        debug_assert!(index < self.data.len());

        &mut self.data[index]
    }
}

impl<F> From<Vec<F>> for Dense<F> {
    fn from(data: Vec<F>) -> Self {
        Self::new(data)
    }
}

impl<F: Display> Display for Dense<F> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "[{}]", self.data.iter().join(", "))
    }
}
