//! # Strategies
//!
//! Decisions made during the Simplex method that don't influence its correctness, only the path
//! it takes through the bases.
pub mod pivot_rule;
