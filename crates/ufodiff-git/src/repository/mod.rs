mod diff;
mod log;
mod patch;
mod status;

use std::path::Path;

use crate::{GitError, Result};

pub struct Repository {
    pub(crate) inner: git2::Repository,
}

impl Repository {
    /// # Errors
    ///
    /// Returns [`GitError::NotARepository`] if the path is not inside a git repository.
    pub fn open(path: &Path) -> Result<Self> {
        let inner = git2::Repository::discover(path).map_err(|_| GitError::NotARepository {
            path: path.to_path_buf(),
        })?;

        if inner.is_bare() {
            return Err(GitError::NotARepository {
                path: path.to_path_buf(),
            });
        }

        Ok(Self { inner })
    }
}
