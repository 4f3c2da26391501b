use thiserror::Error;

#[derive(Debug, Error)]
pub enum OperationError {
    #[error(transparent)]
    Git(#[from] ufodiff_git::GitError),

    #[error("failed to list {change} files for '{range}'")]
    ChangedPaths {
        change: ufodiff_core::ChangeType,
        range: String,
        #[source]
        source: Box<OperationError>,
    },

    #[error("failed to diff files matching '{pattern}' in '{range}'")]
    DiffQuery {
        pattern: String,
        range: String,
        #[source]
        source: Box<OperationError>,
    },
}

pub type Result<T> = std::result::Result<T, OperationError>;
