// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{Assignment, Matrix, ScoreRange, ScoreTable, ScoringPolicy};
pub use requests::ScoreSource;
pub use responses::{AssignedItem, AssignmentReport};
