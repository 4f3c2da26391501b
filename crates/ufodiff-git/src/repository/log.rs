use crate::{CommitInfo, Result};

use super::Repository;

impl Repository {
    /// Up to `count` commits reachable from HEAD, newest first.
    ///
    /// # Errors
    ///
    /// Returns an error if HEAD cannot be resolved or a commit cannot be read.
    pub fn recent_commits(&self, count: usize) -> Result<Vec<CommitInfo>> {
        let mut revwalk = self.inner.revwalk()?;
        revwalk.set_sorting(git2::Sort::TOPOLOGICAL | git2::Sort::TIME)?;
        revwalk.push_head()?;

        revwalk
            .take(count)
            .map(|oid| -> Result<CommitInfo> {
                let commit = self.inner.find_commit(oid?)?;
                let short_id = commit.as_object().short_id()?;

                Ok(CommitInfo {
                    short_sha: String::from_utf8_lossy(&short_id).into_owned(),
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::super::tests::{commit_files, setup_test_repo};

    #[test]
    fn lists_newest_first() -> anyhow::Result<()> {
        let (dir, repo) = setup_test_repo()?;
        let first = commit_files(&dir, &repo, &[("a.txt", Some("a"))], "First")?;
        let second = commit_files(&dir, &repo, &[("b.txt", Some("b"))], "Second")?;

        let commits = repo.recent_commits(2)?;

        assert_eq!(commits.len(), 2);
        assert!(second.to_string().starts_with(&commits[0].short_sha));
        assert!(first.to_string().starts_with(&commits[1].short_sha));
        Ok(())
    }

    #[test]
    fn short_sha_is_prefix_of_head() -> anyhow::Result<()> {
        let (_dir, repo) = setup_test_repo()?;
        let head = repo.inner.head()?.peel_to_commit()?.id().to_string();

        let commits = repo.recent_commits(1)?;

        let commit = &commits[0];
        assert!(commit.short_sha.len() >= 7);
        assert!(head.starts_with(&commit.short_sha));
        Ok(())
    }

    #[test]
    fn count_larger_than_history_returns_all_commits() -> anyhow::Result<()> {
        let (dir, repo) = setup_test_repo()?;
        commit_files(&dir, &repo, &[("a.txt", Some("a"))], "Second")?;

        let commits = repo.recent_commits(10)?;

        assert_eq!(commits.len(), 2);
        Ok(())
    }
}
