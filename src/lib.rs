//! Book Assign - optimal book-to-reader assignment
//!
//! This library provides the assignment engine: cost-matrix construction from
//! preference scores and a Kuhn-Munkres (Hungarian) solver that pairs every
//! member of the smaller side with exactly one partner at minimum total cost.

pub mod config;
pub mod core;
pub mod models;
pub mod services;

// Re-export commonly used types
pub use crate::core::{build_cost_matrix, solve, AssignError, Assigner, CostMatrixBuilder, HungarianSolver, SolverSettings};
pub use crate::models::{Assignment, AssignmentReport, Matrix, ScoreRange, ScoreTable, ScoringPolicy};
