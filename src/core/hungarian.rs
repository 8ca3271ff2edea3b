//! Kuhn-Munkres (Hungarian) solver for the rectangular assignment problem.
//!
//! The cost matrix is padded with zero-cost dummy rows or columns up to an
//! `n x n` working matrix. Row and column potentials start from the row and
//! column reductions, a greedy pass seeds the matching from zero reduced-cost
//! cells, and every remaining row is inserted through a shortest alternating
//! path. Each insertion adjusts the potentials by the minimum uncovered slack
//! until it reaches a free column, which keeps the whole solve at O(n³).

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::core::error::AssignError;
use crate::models::{Assignment, Matrix};

/// Solver tuning
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct SolverSettings {
    /// Potential adjustments allowed per row insertion, as a multiple of `n`
    #[validate(range(min = 1, max = 64))]
    #[serde(default = "default_max_adjustment_factor")]
    pub max_adjustment_factor: usize,
}

impl Default for SolverSettings {
    fn default() -> Self {
        Self {
            max_adjustment_factor: default_max_adjustment_factor(),
        }
    }
}

fn default_max_adjustment_factor() -> usize { 2 }

/// Stateless minimum-cost assignment solver
#[derive(Debug, Clone, Copy, Default)]
pub struct HungarianSolver {
    settings: SolverSettings,
}

impl HungarianSolver {
    pub fn new(settings: SolverSettings) -> Self {
        Self { settings }
    }

    /// Find a minimum-cost matching of size `min(rows, cols)`
    ///
    /// The input is never modified. Ties are broken towards the lowest column
    /// index, so identical input always yields identical pairs.
    pub fn solve(&self, cost: &Matrix) -> Result<Assignment, AssignError> {
        let (rows, cols) = cost.shape();
        if rows == 0 || cols == 0 {
            return Err(AssignError::ShapeError { rows, cols });
        }

        if let Some((row, col, value)) = cost.find_non_finite() {
            return Err(AssignError::InvalidValue { row, col, value });
        }

        let mut state = WorkingState::new(cost);
        let limit = self.settings.max_adjustment_factor.max(1) * state.n;

        state.seed_tight_matching();

        for row in 0..state.n {
            if state.col_of_row[row].is_none() {
                state.insert_row(row, limit)?;
            }
        }

        let pairs: Vec<(usize, usize)> = state
            .col_of_row
            .iter()
            .enumerate()
            .take(rows)
            .filter_map(|(row, col)| col.filter(|&c| c < cols).map(|c| (row, c)))
            .collect();

        tracing::debug!(
            "Solved {}x{} assignment (padded to {}): {} pairs",
            rows,
            cols,
            state.n,
            pairs.len()
        );

        Ok(Assignment::from_sorted_pairs(pairs))
    }
}

/// Solve with default settings
pub fn solve(cost: &Matrix) -> Result<Assignment, AssignError> {
    HungarianSolver::default().solve(cost)
}

/// Cost in the padded matrix; dummy cells are free
#[inline]
fn padded(cost: &Matrix, row: usize, col: usize) -> f64 {
    if row < cost.rows() && col < cost.cols() {
        cost.get(row, col)
    } else {
        0.0
    }
}

/// Padded square problem plus dual potentials and the current matching
struct WorkingState<'a> {
    cost: &'a Matrix,
    n: usize,
    row_potential: Vec<f64>,
    col_potential: Vec<f64>,
    col_of_row: Vec<Option<usize>>,
    row_of_col: Vec<Option<usize>>,
}

impl<'a> WorkingState<'a> {
    fn new(cost: &'a Matrix) -> Self {
        let n = cost.rows().max(cost.cols());

        // Row reduction, then column reduction on what remains.
        let row_potential: Vec<f64> = (0..n)
            .map(|row| (0..n).map(|col| padded(cost, row, col)).fold(f64::INFINITY, f64::min))
            .collect();
        let col_potential: Vec<f64> = (0..n)
            .map(|col| {
                (0..n)
                    .map(|row| padded(cost, row, col) - row_potential[row])
                    .fold(f64::INFINITY, f64::min)
            })
            .collect();

        Self {
            cost,
            n,
            row_potential,
            col_potential,
            col_of_row: vec![None; n],
            row_of_col: vec![None; n],
        }
    }

    #[inline]
    fn reduced(&self, row: usize, col: usize) -> f64 {
        padded(self.cost, row, col) - self.row_potential[row] - self.col_potential[col]
    }

    /// Match rows to free columns along zero reduced-cost cells
    fn seed_tight_matching(&mut self) {
        for row in 0..self.n {
            let free_tight = (0..self.n)
                .find(|&col| self.row_of_col[col].is_none() && self.reduced(row, col) <= 0.0);

            if let Some(col) = free_tight {
                self.col_of_row[row] = Some(col);
                self.row_of_col[col] = Some(row);
            }
        }
    }

    /// Grow an alternating tree from `root` until a free column is reached,
    /// then flip the path so `root` becomes matched
    fn insert_row(&mut self, root: usize, limit: usize) -> Result<(), AssignError> {
        let n = self.n;
        let mut slack = vec![f64::INFINITY; n];
        let mut slack_row = vec![root; n];
        let mut in_tree_col = vec![false; n];
        let mut tree_rows = vec![root];
        let mut frontier = root;
        let mut adjustments = 0;

        loop {
            for col in 0..n {
                if in_tree_col[col] {
                    continue;
                }
                let r = self.reduced(frontier, col);
                if r < slack[col] {
                    slack[col] = r;
                    slack_row[col] = frontier;
                }
            }

            let (col, delta) = (0..n)
                .filter(|&c| !in_tree_col[c])
                .map(|c| (c, slack[c]))
                .fold(None, |best: Option<(usize, f64)>, (c, s)| match best {
                    Some((_, b)) if b <= s => best,
                    _ => Some((c, s)),
                })
                .ok_or(AssignError::NonConvergence { row: root, limit })?;

            if delta > 0.0 {
                adjustments += 1;
                if adjustments > limit {
                    return Err(AssignError::NonConvergence { row: root, limit });
                }

                tracing::trace!("Adjusting potentials by {} (row {})", delta, root);

                for &row in &tree_rows {
                    self.row_potential[row] += delta;
                }
                for c in 0..n {
                    if in_tree_col[c] {
                        self.col_potential[c] -= delta;
                    } else {
                        slack[c] -= delta;
                    }
                }
            }

            in_tree_col[col] = true;

            match self.row_of_col[col] {
                Some(next) => {
                    tree_rows.push(next);
                    frontier = next;
                }
                None => {
                    self.flip_path(col, &slack_row);
                    return Ok(());
                }
            }
        }
    }

    fn flip_path(&mut self, free_col: usize, slack_row: &[usize]) {
        let mut col = free_col;
        loop {
            let row = slack_row[col];
            let previous = self.col_of_row[row];
            self.col_of_row[row] = Some(col);
            self.row_of_col[col] = Some(row);

            match previous {
                Some(prev_col) => col = prev_col,
                None => break,
            }
        }
    }
}
