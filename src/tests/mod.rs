//! # Integration tests that require a look inside the crate.
//!
//! Every problem module provides its data through `create` functions, together with the bases
//! that the algorithm is expected to visit.
pub mod problem_1;
