use thiserror::Error;

use crate::domain::verdict::CheckResult;

pub mod fs;

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("malformed embedding record for regulation {0}")]
    MalformedEmbedding(String),
}

pub type RepositoryResult<T> = Result<T, RepositoryError>;

pub trait ResultReader {
    fn get_result(&self, document_id: &str) -> RepositoryResult<Option<CheckResult>>;
}

pub trait ResultWriter {
    fn save_result(&self, document_id: &str, result: &CheckResult) -> RepositoryResult<()>;
}

pub trait EmbeddingReader {
    fn get_embedding(&self, regulation_id: &str) -> RepositoryResult<Option<Vec<f32>>>;
}

pub trait EmbeddingWriter {
    fn set_embedding(&self, regulation_id: &str, embedding: &[f32]) -> RepositoryResult<()>;
}
