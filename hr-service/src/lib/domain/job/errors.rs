use thiserror::Error;

/// Error for job board operations.
#[derive(Debug, Clone, Error)]
pub enum JobError {
    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

impl From<anyhow::Error> for JobError {
    fn from(err: anyhow::Error) -> Self {
        JobError::Unexpected(err.to_string())
    }
}
