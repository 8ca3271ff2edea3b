use crate::models::{AssignmentReport, Matrix, ScoreTable, ScoringPolicy};

/// Plain-text listing of who receives what
pub fn render_assignments(report: &AssignmentReport) -> String {
    let mut out = String::from("Assignments:\n");

    for entry in &report.assignments {
        out.push_str(&format!(
            "{} receives the book: {} with a score of {}\n",
            entry.agent, entry.item, entry.score
        ));
    }

    out
}

/// Report as pretty-printed JSON
pub fn render_json(report: &AssignmentReport) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(report)
}

/// Dump of the inputs the solver ran on
///
/// `scores` is the matrix the pairing was decided on, which differs from the
/// table's own scores when the inverted policy randomized them.
pub fn render_debug(table: &ScoreTable, scores: &Matrix, policy: ScoringPolicy) -> String {
    let mut out = format!("Books List ({} items):\n", table.items.len());
    for item in &table.items {
        out.push_str(&format!("{}\n", item));
    }

    out.push_str(&format!("\nPeople List ({} items):\n", table.agents.len()));
    for agent in &table.agents {
        out.push_str(&format!("{}\n", agent));
    }

    out.push_str("\nPreferences Matrix:\n");
    if policy == ScoringPolicy::Inverted {
        out.push_str(
            "Warning! Evil mode enabled:\n- Randomize preference scores\n- Don't convert scores into costs\n",
        );
    }
    out.push_str(&format!("{}\n", scores));

    out
}
