// Core algorithm exports
pub mod assigner;
pub mod cost;
pub mod error;
pub mod hungarian;

pub use assigner::Assigner;
pub use cost::{build_cost_matrix, randomize_scores, CostMatrixBuilder};
pub use error::AssignError;
pub use hungarian::{solve, HungarianSolver, SolverSettings};
