//! # Network representation
//!
//! Solving network problems as linear programs.
pub mod max_flow;
