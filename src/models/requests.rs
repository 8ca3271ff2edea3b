use std::path::PathBuf;

/// Where a score table is read from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScoreSource {
    /// Local CSV file
    LocalFile(PathBuf),
    /// Spreadsheet document ID, fetched through its CSV export
    RemoteSheet(String),
}

impl std::fmt::Display for ScoreSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScoreSource::LocalFile(path) => write!(f, "file {}", path.display()),
            ScoreSource::RemoteSheet(id) => write!(f, "remote sheet {}", id),
        }
    }
}
