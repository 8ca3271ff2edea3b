use serde::{Deserialize, Serialize};

use crate::models::domain::ScoringPolicy;

/// One agent's assigned item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssignedItem {
    pub agent: String,
    pub item: String,
    /// Raw score the pairing was chosen on
    pub score: f64,
    #[serde(rename = "agentIndex")]
    pub agent_index: usize,
    #[serde(rename = "itemIndex")]
    pub item_index: usize,
}

/// Result of one assignment run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssignmentReport {
    #[serde(rename = "runId")]
    pub run_id: uuid::Uuid,
    #[serde(rename = "generatedAt")]
    pub generated_at: chrono::DateTime<chrono::Utc>,
    pub policy: ScoringPolicy,
    /// Ordered by item row
    pub assignments: Vec<AssignedItem>,
    #[serde(rename = "totalScore")]
    pub total_score: f64,
    #[serde(rename = "totalCost")]
    pub total_cost: f64,
    #[serde(rename = "unassignedAgents")]
    pub unassigned_agents: Vec<String>,
    #[serde(rename = "unassignedItems")]
    pub unassigned_items: Vec<String>,
}

impl AssignmentReport {
    /// Look up the entry for an agent by label
    pub fn for_agent(&self, agent: &str) -> Option<&AssignedItem> {
        self.assignments.iter().find(|a| a.agent == agent)
    }
}
