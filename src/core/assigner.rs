use rand::RngCore;

use crate::core::{
    cost::CostMatrixBuilder,
    error::AssignError,
    hungarian::HungarianSolver,
};
use crate::models::{AssignedItem, AssignmentReport, Matrix, ScoreTable, ScoringPolicy};

/// Main assignment orchestrator
///
/// # Pipeline Stages
/// 1. Cost matrix construction under the configured scoring policy
/// 2. Optimal assignment on the cost matrix
/// 3. Mapping index pairs back to labels and raw scores
#[derive(Debug, Clone, Copy, Default)]
pub struct Assigner {
    policy: ScoringPolicy,
    builder: CostMatrixBuilder,
    solver: HungarianSolver,
}

impl Assigner {
    pub fn new(policy: ScoringPolicy, builder: CostMatrixBuilder, solver: HungarianSolver) -> Self {
        Self {
            policy,
            builder,
            solver,
        }
    }

    pub fn with_policy(policy: ScoringPolicy) -> Self {
        Self {
            policy,
            ..Self::default()
        }
    }

    pub fn policy(&self) -> ScoringPolicy {
        self.policy
    }

    /// Scores the pairing is decided on
    ///
    /// Under `Inverted` the costs are the (possibly randomized) scores, so the
    /// cost matrix doubles as the score matrix.
    pub fn effective_scores<'a>(&self, table: &'a ScoreTable, cost: &'a Matrix) -> &'a Matrix {
        match self.policy {
            ScoringPolicy::Standard => &table.scores,
            ScoringPolicy::Inverted => cost,
        }
    }

    /// Assign items to agents
    ///
    /// # Arguments
    /// * `table` - Labeled score matrix (rows = items, columns = agents)
    /// * `random_source` - Randomizes scores under `Inverted`; ignored otherwise
    ///
    /// # Returns
    /// AssignmentReport with one entry per assigned agent (in item order),
    /// together with the cost matrix the solver ran on
    pub fn assign(
        &self,
        table: &ScoreTable,
        random_source: Option<&mut dyn RngCore>,
    ) -> Result<(AssignmentReport, Matrix), AssignError> {
        if table.items.len() < table.agents.len() {
            tracing::warn!(
                "Not enough unique items to assign to all agents ({} items, {} agents)",
                table.items.len(),
                table.agents.len()
            );
        }

        let cost = self.builder.build(&table.scores, self.policy, random_source)?;
        let assignment = self.solver.solve(&cost)?;
        let scores = self.effective_scores(table, &cost);

        let assignments: Vec<AssignedItem> = assignment
            .pairs()
            .iter()
            .map(|&(row, col)| AssignedItem {
                agent: table.agents[col].clone(),
                item: table.items[row].clone(),
                score: scores.get(row, col),
                agent_index: col,
                item_index: row,
            })
            .collect();

        let unassigned_agents = (0..table.agents.len())
            .filter(|&col| assignment.row_for_col(col).is_none())
            .map(|col| table.agents[col].clone())
            .collect();
        let unassigned_items = (0..table.items.len())
            .filter(|&row| assignment.col_for_row(row).is_none())
            .map(|row| table.items[row].clone())
            .collect();

        let report = AssignmentReport {
            run_id: uuid::Uuid::new_v4(),
            generated_at: chrono::Utc::now(),
            policy: self.policy,
            total_score: assignment.total_cost(scores),
            total_cost: assignment.total_cost(&cost),
            assignments,
            unassigned_agents,
            unassigned_items,
        };

        tracing::debug!(
            "Assigned {} of {} agents (total score {})",
            report.assignments.len(),
            table.agents.len(),
            report.total_score
        );

        Ok((report, cost))
    }
}
