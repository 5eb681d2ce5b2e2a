use std::path::PathBuf;

/// Result type alias using [`TableError`].
pub type Result<T> = std::result::Result<T, TableError>;

/// Errors raised while loading or saving the source tables.
/// Translation itself never fails.
#[derive(Debug, thiserror::Error)]
pub enum TableError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed table JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Snapshot encoding error: {0}")]
    Snapshot(#[from] bincode::Error),

    #[error("Could not persist snapshot: {0}")]
    Persist(#[from] tempfile::PersistError),
}

impl TableError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
