//! # Representing linear programs
//!
//! This module contains the standard form representation of linear programs, which the algorithms
//! solve, and transformations that produce linear programs in that form.
pub mod dual;
pub mod network;
pub mod standard_form;
