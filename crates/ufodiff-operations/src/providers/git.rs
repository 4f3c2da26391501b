use std::path::Path;

use ufodiff_core::ChangeType;
use ufodiff_git::{FileStatus, Repository};

use crate::Result;
use crate::traits::VcsProvider;

pub struct Git2Provider;

impl Git2Provider {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for Git2Provider {
    fn default() -> Self {
        Self::new()
    }
}

fn file_status(change: ChangeType) -> FileStatus {
    match change {
        ChangeType::Added => FileStatus::Added,
        ChangeType::Deleted => FileStatus::Deleted,
        ChangeType::Modified => FileStatus::Modified,
    }
}

impl VcsProvider for Git2Provider {
    fn changed_paths(
        &self,
        repo_root: &Path,
        range: &str,
        change: ChangeType,
    ) -> Result<Vec<String>> {
        let repo = Repository::open(repo_root)?;
        let status = file_status(change);

        Ok(repo
            .changed_files(range)?
            .into_iter()
            .filter(|file| file.status == status)
            .map(|file| file.path)
            .collect())
    }

    fn commit_ids(&self, repo_root: &Path, count: usize) -> Result<Vec<String>> {
        let repo = Repository::open(repo_root)?;
        Ok(repo
            .recent_commits(count)?
            .into_iter()
            .map(|commit| commit.short_sha)
            .collect())
    }

    fn current_branch(&self, repo_root: &Path) -> Result<String> {
        Ok(ufodiff_git::current_branch(repo_root)?)
    }

    fn diff(&self, repo_root: &Path, range: &str, pattern: &str, color: bool) -> Result<String> {
        let repo = Repository::open(repo_root)?;
        Ok(repo.patch(range, pattern, color)?)
    }
}
