use std::path::Path;

use ufodiff_core::ChangeType;

use crate::Result;

/// Version-control queries the report and diff operations rely on.
///
/// Ranges use git revision syntax (`HEAD~2`, `develop..main`, a tag).
pub trait VcsProvider: Send + Sync {
    /// # Errors
    ///
    /// Returns an error if the repository cannot be opened or the range cannot be resolved.
    fn changed_paths(
        &self,
        repo_root: &Path,
        range: &str,
        change: ChangeType,
    ) -> Result<Vec<String>>;

    /// Abbreviated ids of at most `count` commits from HEAD, newest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the repository cannot be opened or history cannot be walked.
    fn commit_ids(&self, repo_root: &Path, count: usize) -> Result<Vec<String>>;

    /// # Errors
    ///
    /// Returns an error if the repository cannot be opened or HEAD is detached.
    fn current_branch(&self, repo_root: &Path) -> Result<String>;

    /// Raw unified diff for files in `range` matching the glob `pattern`.
    ///
    /// # Errors
    ///
    /// Returns an error if the repository cannot be opened or the range cannot be resolved.
    fn diff(&self, repo_root: &Path, range: &str, pattern: &str, color: bool) -> Result<String>;
}
