use serde::{Deserialize, Serialize};
use std::fmt;

use crate::core::error::AssignError;

/// Dense row-major matrix of finite scores or costs
///
/// Rows are items (books), columns are agents (people).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Matrix {
    rows: usize,
    cols: usize,
    data: Vec<f64>,
}

impl Matrix {
    /// Build a matrix from nested rows
    ///
    /// Fails with `ShapeError` when there are no rows, no columns, or the
    /// rows have different lengths.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self, AssignError> {
        let row_count = rows.len();
        let col_count = rows.first().map_or(0, |r| r.len());

        if row_count == 0 || col_count == 0 {
            return Err(AssignError::ShapeError {
                rows: row_count,
                cols: col_count,
            });
        }

        if let Some(ragged) = rows.iter().find(|r| r.len() != col_count) {
            return Err(AssignError::ShapeError {
                rows: row_count,
                cols: ragged.len(),
            });
        }

        Ok(Self {
            rows: row_count,
            cols: col_count,
            data: rows.into_iter().flatten().collect(),
        })
    }

    /// Build a matrix where every cell holds `value`
    pub fn filled(rows: usize, cols: usize, value: f64) -> Result<Self, AssignError> {
        if rows == 0 || cols == 0 {
            return Err(AssignError::ShapeError { rows, cols });
        }

        Ok(Self {
            rows,
            cols,
            data: vec![value; rows * cols],
        })
    }

    /// Build a matrix cell by cell from a generator
    pub fn from_fn<F>(rows: usize, cols: usize, mut f: F) -> Result<Self, AssignError>
    where
        F: FnMut(usize, usize) -> f64,
    {
        if rows == 0 || cols == 0 {
            return Err(AssignError::ShapeError { rows, cols });
        }

        let mut data = Vec::with_capacity(rows * cols);
        for row in 0..rows {
            for col in 0..cols {
                data.push(f(row, col));
            }
        }

        Ok(Self { rows, cols, data })
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// `(rows, cols)`
    #[inline]
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    #[inline]
    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.data[row * self.cols + col]
    }

    /// Borrow one row as a slice
    pub fn row(&self, row: usize) -> &[f64] {
        let start = row * self.cols;
        &self.data[start..start + self.cols]
    }

    /// Largest value over all cells
    pub fn max(&self) -> f64 {
        self.data.iter().copied().fold(f64::NEG_INFINITY, f64::max)
    }

    /// First cell holding a non-finite value, as `(row, col, value)`
    pub fn find_non_finite(&self) -> Option<(usize, usize, f64)> {
        self.data
            .iter()
            .position(|v| !v.is_finite())
            .map(|idx| (idx / self.cols, idx % self.cols, self.data[idx]))
    }

    /// Apply `f` to every cell, producing a new matrix of the same shape
    pub fn map<F>(&self, f: F) -> Self
    where
        F: Fn(f64) -> f64,
    {
        Self {
            rows: self.rows,
            cols: self.cols,
            data: self.data.iter().map(|&v| f(v)).collect(),
        }
    }
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.rows {
            let cells: Vec<String> = self.row(row).iter().map(|v| format!("{:>4}", v)).collect();
            writeln!(f, "[{}]", cells.join(" "))?;
        }
        Ok(())
    }
}

/// Rule converting raw preference scores into costs for minimization
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoringPolicy {
    /// cost = max(scores) - score; the solver maximizes total preference
    #[default]
    Standard,
    /// "Evil mode": cost = score, optionally with randomized scores;
    /// the solver minimizes total preference
    #[serde(alias = "evil")]
    Inverted,
}

impl fmt::Display for ScoringPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScoringPolicy::Standard => write!(f, "standard"),
            ScoringPolicy::Inverted => write!(f, "inverted"),
        }
    }
}

/// Inclusive integer range for randomized scores
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreRange {
    pub min: i64,
    pub max: i64,
}

impl Default for ScoreRange {
    fn default() -> Self {
        Self { min: 0, max: 10 }
    }
}

/// A partial bijection between rows and columns
///
/// Pairs are kept sorted by row index; no row or column appears twice.
/// Only the solver constructs one, so it is serializable but not deserializable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Assignment {
    pairs: Vec<(usize, usize)>,
}

impl Assignment {
    pub(crate) fn from_sorted_pairs(pairs: Vec<(usize, usize)>) -> Self {
        Self { pairs }
    }

    /// `(row, col)` pairs in row order
    pub fn pairs(&self) -> &[(usize, usize)] {
        &self.pairs
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn col_for_row(&self, row: usize) -> Option<usize> {
        self.pairs
            .binary_search_by_key(&row, |&(r, _)| r)
            .ok()
            .map(|idx| self.pairs[idx].1)
    }

    pub fn row_for_col(&self, col: usize) -> Option<usize> {
        self.pairs.iter().find(|&&(_, c)| c == col).map(|&(r, _)| r)
    }

    /// Sum of `matrix[row][col]` over the assigned pairs
    pub fn total_cost(&self, matrix: &Matrix) -> f64 {
        self.pairs.iter().map(|&(r, c)| matrix.get(r, c)).sum()
    }
}

/// Score matrix with item (row) and agent (column) labels
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreTable {
    pub items: Vec<String>,
    pub agents: Vec<String>,
    pub scores: Matrix,
}

impl ScoreTable {
    /// Pair labels with a score matrix; label counts must match its shape
    pub fn new(items: Vec<String>, agents: Vec<String>, scores: Matrix) -> Result<Self, AssignError> {
        if items.len() != scores.rows() || agents.len() != scores.cols() {
            return Err(AssignError::ShapeError {
                rows: items.len(),
                cols: agents.len(),
            });
        }

        Ok(Self {
            items,
            agents,
            scores,
        })
    }
}
