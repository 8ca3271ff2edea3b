// Service exports
pub mod loader;
pub mod output;

pub use loader::{LoaderError, ScoreTableLoader};
pub use output::{render_assignments, render_debug, render_json};
