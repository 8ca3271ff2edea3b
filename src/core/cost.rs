use rand::{Rng, RngCore};

use crate::core::error::AssignError;
use crate::models::{Matrix, ScoreRange, ScoringPolicy};

/// Turns raw preference scores into a cost matrix for the solver
///
/// Under `Standard`, cost = max(scores) - score so the best-liked item is the
/// cheapest. If every score is equal all costs are 0 and any complete
/// assignment is optimal.
///
/// Under `Inverted`, costs are the scores themselves. When a random source is
/// given the input is discarded and each cell is redrawn uniformly from the
/// builder's score range first.
#[derive(Debug, Clone, Copy, Default)]
pub struct CostMatrixBuilder {
    score_range: ScoreRange,
}

impl CostMatrixBuilder {
    pub fn new(score_range: ScoreRange) -> Self {
        Self { score_range }
    }

    pub fn score_range(&self) -> ScoreRange {
        self.score_range
    }

    pub fn build(
        &self,
        scores: &Matrix,
        policy: ScoringPolicy,
        random_source: Option<&mut dyn RngCore>,
    ) -> Result<Matrix, AssignError> {
        if let Some((row, col, value)) = scores.find_non_finite() {
            return Err(AssignError::InvalidValue { row, col, value });
        }

        let cost = match policy {
            ScoringPolicy::Standard => {
                let max = scores.max();
                scores.map(|score| max - score)
            }
            ScoringPolicy::Inverted => match random_source {
                Some(rng) => randomize_scores(scores.rows(), scores.cols(), self.score_range, rng)?,
                None => scores.clone(),
            },
        };

        // max - score can overflow even when every score is finite
        if let Some((row, col, value)) = cost.find_non_finite() {
            return Err(AssignError::InvalidValue { row, col, value });
        }

        tracing::debug!(
            "Built {}x{} cost matrix with {} policy",
            cost.rows(),
            cost.cols(),
            policy
        );

        Ok(cost)
    }
}

/// Build a cost matrix using the default 0..=10 randomization range
pub fn build_cost_matrix(
    scores: &Matrix,
    policy: ScoringPolicy,
    random_source: Option<&mut dyn RngCore>,
) -> Result<Matrix, AssignError> {
    CostMatrixBuilder::default().build(scores, policy, random_source)
}

/// Draw a fresh score matrix with one uniform integer per cell
///
/// Fails with `InvalidRange` when `range.min > range.max`.
pub fn randomize_scores<R: Rng + ?Sized>(
    rows: usize,
    cols: usize,
    range: ScoreRange,
    rng: &mut R,
) -> Result<Matrix, AssignError> {
    if range.min > range.max {
        return Err(AssignError::InvalidRange {
            min: range.min,
            max: range.max,
        });
    }

    Matrix::from_fn(rows, cols, |_, _| rng.random_range(range.min..=range.max) as f64)
}
