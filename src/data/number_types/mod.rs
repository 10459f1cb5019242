//! # Number types
//!
//! The algorithms are generic over the number type they compute with, such that both `f64` and
//! `f32` can be used. This module defines the requirements on those types.
pub mod traits;
