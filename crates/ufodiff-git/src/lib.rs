mod error;
mod repository;
mod types;

pub use error::GitError;
pub use repository::Repository;
pub use types::{CommitInfo, FileChange, FileStatus};

use std::path::{Path, PathBuf};

pub type Result<T> = std::result::Result<T, GitError>;

/// # Errors
///
/// Returns an error if the path is not a git repository or if HEAD is detached.
pub fn current_branch(path: &Path) -> Result<String> {
    Repository::open(path)?.current_branch()
}

/// Finds the repository root by checking `start` and up to `max_levels`
/// parent directories for a `.git` entry.
///
/// # Errors
///
/// Returns [`GitError::InvalidPath`] if `start` cannot be canonicalized and
/// [`GitError::NotARepository`] if no `.git` entry is found within range.
pub fn find_repository_root(start: &Path, max_levels: usize) -> Result<PathBuf> {
    let start = dunce::canonicalize(start).map_err(|source| GitError::InvalidPath {
        path: start.to_path_buf(),
        source,
    })?;

    start
        .ancestors()
        .take(max_levels + 1)
        .find(|dir| dir.join(".git").exists())
        .map(Path::to_path_buf)
        .ok_or(GitError::NotARepository { path: start })
}
