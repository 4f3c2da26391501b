use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("git error")]
    Git(#[from] ufodiff_git::GitError),

    #[error("operation failed")]
    Operation(#[from] ufodiff_operations::OperationError),

    #[error("invalid comparison argument")]
    Comparison(#[from] ufodiff_core::CoreError),

    #[error("failed to serialize report")]
    Json(#[from] serde_json::Error),

    #[error("failed to write output")]
    Io(#[from] std::io::Error),

    #[error("failed to determine current directory")]
    CurrentDir(#[source] std::io::Error),
}

pub type Result<T> = std::result::Result<T, CliError>;
