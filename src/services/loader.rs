use reqwest::Client;
use std::path::Path;
use std::time::Duration;
use thiserror::Error;

use crate::config::LoaderSettings;
use crate::core::AssignError;
use crate::models::{Matrix, ScoreSource, ScoreTable};

/// Cell tokens read as a missing score (treated as 0)
const MISSING_TOKENS: &[&str] = &["", "NA", "N/A", "NaN", "nan", "null", "NULL"];

/// Errors that can occur while loading a score table
#[derive(Debug, Error)]
pub enum LoaderError {
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("Remote sheet returned status {0}")]
    HttpStatus(reqwest::StatusCode),

    #[error("Invalid score {value:?} at row {row}, column {col}")]
    InvalidCell {
        row: usize,
        col: usize,
        value: String,
    },

    #[error("Missing header row")]
    MissingHeader,

    #[error(transparent)]
    Matrix(#[from] AssignError),
}

/// Reads score tables from local CSV files or remote spreadsheet exports
///
/// Layout: the header row names the agents, the first column names the items.
/// Before use the table is trimmed: leading value columns (prices), trailing
/// columns and trailing summary rows are dropped per `LoaderSettings`.
pub struct ScoreTableLoader {
    settings: LoaderSettings,
    client: Client,
}

impl ScoreTableLoader {
    pub fn new(settings: LoaderSettings) -> Result<Self, LoaderError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(settings.timeout_secs))
            .build()?;

        Ok(Self { settings, client })
    }

    /// Load a table from any supported source
    pub async fn load(&self, source: &ScoreSource) -> Result<ScoreTable, LoaderError> {
        tracing::info!("Loading score table from {}", source);

        match source {
            ScoreSource::LocalFile(path) => self.load_file(path),
            ScoreSource::RemoteSheet(id) => self.load_remote(id).await,
        }
    }

    pub fn load_file(&self, path: &Path) -> Result<ScoreTable, LoaderError> {
        let text = std::fs::read_to_string(path)?;
        self.parse(&text)
    }

    /// Export URL for a remote sheet
    pub fn remote_url(&self, sheet_id: &str) -> String {
        format!(
            "{}/d/{}/export?format=csv",
            self.settings.remote_base_url.trim_end_matches('/'),
            urlencoding::encode(sheet_id)
        )
    }

    pub async fn load_remote(&self, sheet_id: &str) -> Result<ScoreTable, LoaderError> {
        let url = self.remote_url(sheet_id);

        tracing::debug!("Fetching score sheet from: {}", url);

        let response = self.client.get(&url).send().await?;

        if !response.status().is_success() {
            return Err(LoaderError::HttpStatus(response.status()));
        }

        let text = response.text().await?;
        self.parse(&text)
    }

    /// Parse CSV text into a trimmed score table
    pub fn parse(&self, text: &str) -> Result<ScoreTable, LoaderError> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(text.as_bytes());

        let mut records = reader.records();
        let header = records.next().ok_or(LoaderError::MissingHeader)??;

        // Header cell 0 is the label column's own title.
        let width = header.len().saturating_sub(1);
        let first = self.settings.skip_leading_columns.min(width);
        let last = width.saturating_sub(self.settings.skip_trailing_columns).max(first);

        let agents: Vec<String> = (first..last)
            .map(|col| header.get(col + 1).unwrap_or("").trim().to_string())
            .collect();

        let mut body = Vec::new();
        for record in records {
            body.push(record?);
        }
        let kept_rows = body.len().saturating_sub(self.settings.skip_trailing_rows);
        body.truncate(kept_rows);

        let mut items = Vec::with_capacity(body.len());
        let mut rows = Vec::with_capacity(body.len());

        for (row_idx, record) in body.iter().enumerate() {
            items.push(record.get(0).unwrap_or("").trim().to_string());

            let row = (first..last)
                .map(|col| parse_cell(record.get(col + 1).unwrap_or(""), row_idx, col - first))
                .collect::<Result<Vec<f64>, LoaderError>>()?;
            rows.push(row);
        }

        tracing::debug!("Parsed {} items x {} agents", items.len(), agents.len());

        let scores = Matrix::from_rows(rows)?;
        Ok(ScoreTable::new(items, agents, scores)?)
    }
}

fn parse_cell(raw: &str, row: usize, col: usize) -> Result<f64, LoaderError> {
    let trimmed = raw.trim();
    if MISSING_TOKENS.contains(&trimmed) {
        return Ok(0.0);
    }

    trimmed.parse::<f64>().map_err(|_| LoaderError::InvalidCell {
        row,
        col,
        value: trimmed.to_string(),
    })
}
