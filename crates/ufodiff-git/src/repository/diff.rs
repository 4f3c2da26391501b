use crate::{FileChange, FileStatus, GitError, Result};

use super::Repository;

/// The two sides of a resolved revision range.
enum RangeEnds<'r> {
    /// A single revision, compared against the working directory and index.
    Worktree(git2::Tree<'r>),
    /// `base..head` or the merge-base form of `base...head`.
    Trees(git2::Tree<'r>, git2::Tree<'r>),
}

impl Repository {
    /// Lists files added, deleted or modified within `range`.
    ///
    /// `range` follows `git diff` conventions: a single revision is compared
    /// with the working tree, `A..B` compares two trees and `A...B` compares
    /// the merge base of both with `B`. Renames are not detected, a moved file
    /// is reported as one deletion and one addition.
    ///
    /// # Errors
    ///
    /// Returns [`GitError::RefNotFound`] if the range cannot be resolved.
    pub fn changed_files(&self, range: &str) -> Result<Vec<FileChange>> {
        let mut opts = git2::DiffOptions::new();
        let diff = self.diff_range(range, &mut opts)?;

        let mut changes = Vec::new();

        for delta in diff.deltas() {
            let status = match delta.status() {
                git2::Delta::Added => FileStatus::Added,
                git2::Delta::Deleted => FileStatus::Deleted,
                git2::Delta::Modified => FileStatus::Modified,
                _ => continue,
            };

            let path = delta
                .new_file()
                .path_bytes()
                .or_else(|| delta.old_file().path_bytes())
                .map(|bytes| String::from_utf8_lossy(bytes).into_owned())
                .ok_or(GitError::MissingDeltaPath)?;

            changes.push(FileChange::new(path, status));
        }

        Ok(changes)
    }

    pub(crate) fn diff_range(
        &self,
        range: &str,
        opts: &mut git2::DiffOptions,
    ) -> Result<git2::Diff<'_>> {
        let diff = match self.resolve_range(range)? {
            RangeEnds::Worktree(base) => self
                .inner
                .diff_tree_to_workdir_with_index(Some(&base), Some(opts))?,
            RangeEnds::Trees(base, head) => {
                self.inner
                    .diff_tree_to_tree(Some(&base), Some(&head), Some(opts))?
            }
        };
        Ok(diff)
    }

    fn resolve_range(&self, range: &str) -> Result<RangeEnds<'_>> {
        let not_found = || GitError::RefNotFound {
            refspec: range.to_string(),
        };

        let spec = self.inner.revparse(range).map_err(|_| not_found())?;
        let mode = spec.mode();

        if mode.contains(git2::RevparseMode::SINGLE) {
            let base = spec.from().ok_or_else(not_found)?;
            return Ok(RangeEnds::Worktree(
                base.peel_to_tree().map_err(|_| not_found())?,
            ));
        }

        let (Some(from), Some(to)) = (spec.from(), spec.to()) else {
            return Err(not_found());
        };

        let base = if mode.contains(git2::RevparseMode::MERGE_BASE) {
            let base_id = self.inner.merge_base(from.id(), to.id())?;
            self.inner.find_commit(base_id)?.tree()?
        } else {
            from.peel_to_tree().map_err(|_| not_found())?
        };
        let head = to.peel_to_tree().map_err(|_| not_found())?;

        Ok(RangeEnds::Trees(base, head))
    }
}
