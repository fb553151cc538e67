use super::document::QuizDocument;
use super::validation::ConfigViolation;
use std::path::{Path, PathBuf};
use tracing::info;

/// Failure to obtain a usable quiz document.
#[derive(Debug, thiserror::Error)]
pub enum ConfigLoadError {
    #[error("failed to read quiz document {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid quiz document: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("quiz document rejected: {0}")]
    Invalid(#[from] ConfigViolation),
}

pub fn parse_document(raw: &str) -> Result<QuizDocument, ConfigLoadError> {
    Ok(serde_json::from_str(raw)?)
}

/// Read and parse a quiz document from disk.
pub async fn load_document(path: impl AsRef<Path>) -> Result<QuizDocument, ConfigLoadError> {
    let path = path.as_ref();
    let raw = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| ConfigLoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
    let document = parse_document(&raw)?;
    info!(
        path = %path.display(),
        questions = document.questions.len(),
        dimensions = document.dimensions.len(),
        "quiz document loaded"
    );
    Ok(document)
}
