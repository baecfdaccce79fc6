use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Io error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Serde Json error: {0}")]
    SerdeJsonError(#[from] serde_json::Error),
    #[error("Corrupt store: {0}")]
    CorruptStore(String),
    #[error("Task with ID {0} not found.")]
    TaskNotFound(u32),
    #[error("Custom error: {0}")]
    CustomError(String),
    #[error("Tracing error: {0}")]
    SetGlobalDefault(#[from] tracing::subscriber::SetGlobalDefaultError),
}

pub type Result<T> = std::result::Result<T, Error>;
