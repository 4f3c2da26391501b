use std::collections::HashMap;
use std::path::Path;
use std::sync::Mutex;

use ufodiff_core::ChangeType;
use ufodiff_git::GitError;

use crate::Result;
use crate::traits::VcsProvider;

/// A query issued against [`MockVcsProvider`], in call order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VcsQuery {
    ChangedPaths { range: String, change: ChangeType },
    CommitIds { count: usize },
    CurrentBranch,
    Diff { range: String, pattern: String, color: bool },
}

pub struct MockVcsProvider {
    changed: HashMap<ChangeType, Vec<String>>,
    commits: Vec<String>,
    branch: Option<String>,
    diffs: HashMap<String, String>,
    failing_range: Option<String>,
    failing_pattern: Option<String>,
    queries: Mutex<Vec<VcsQuery>>,
}

impl MockVcsProvider {
    #[must_use]
    pub fn new() -> Self {
        Self {
            changed: HashMap::new(),
            commits: Vec::new(),
            branch: Some("main".to_string()),
            diffs: HashMap::new(),
            failing_range: None,
            failing_pattern: None,
            queries: Mutex::new(Vec::new()),
        }
    }

    #[must_use]
    pub fn with_changed(mut self, change: ChangeType, paths: &[&str]) -> Self {
        self.changed
            .insert(change, paths.iter().map(ToString::to_string).collect());
        self
    }

    #[must_use]
    pub fn with_commits(mut self, ids: &[&str]) -> Self {
        self.commits = ids.iter().map(ToString::to_string).collect();
        self
    }

    #[must_use]
    pub fn with_branch(mut self, branch: &str) -> Self {
        self.branch = Some(branch.to_string());
        self
    }

    #[must_use]
    pub fn detached(mut self) -> Self {
        self.branch = None;
        self
    }

    #[must_use]
    pub fn with_diff(mut self, pattern: &str, raw: &str) -> Self {
        self.diffs.insert(pattern.to_string(), raw.to_string());
        self
    }

    /// Every query for `range` fails as an unresolvable revision.
    #[must_use]
    pub fn failing_range(mut self, range: &str) -> Self {
        self.failing_range = Some(range.to_string());
        self
    }

    #[must_use]
    pub fn failing_pattern(mut self, pattern: &str) -> Self {
        self.failing_pattern = Some(pattern.to_string());
        self
    }

    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    #[must_use]
    pub fn queries(&self) -> Vec<VcsQuery> {
        self.queries.lock().expect("lock poisoned").clone()
    }

    fn record(&self, query: VcsQuery) {
        self.queries.lock().expect("lock poisoned").push(query);
    }

    fn check_range(&self, range: &str) -> Result<()> {
        if self.failing_range.as_deref() == Some(range) {
            return Err(GitError::RefNotFound {
                refspec: range.to_string(),
            }
            .into());
        }
        Ok(())
    }
}

impl Default for MockVcsProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl VcsProvider for MockVcsProvider {
    fn changed_paths(
        &self,
        _repo_root: &Path,
        range: &str,
        change: ChangeType,
    ) -> Result<Vec<String>> {
        self.record(VcsQuery::ChangedPaths {
            range: range.to_string(),
            change,
        });
        self.check_range(range)?;
        Ok(self.changed.get(&change).cloned().unwrap_or_default())
    }

    fn commit_ids(&self, _repo_root: &Path, count: usize) -> Result<Vec<String>> {
        self.record(VcsQuery::CommitIds { count });
        Ok(self.commits.iter().take(count).cloned().collect())
    }

    fn current_branch(&self, _repo_root: &Path) -> Result<String> {
        self.record(VcsQuery::CurrentBranch);
        self.branch.clone().ok_or_else(|| GitError::DetachedHead.into())
    }

    fn diff(&self, _repo_root: &Path, range: &str, pattern: &str, color: bool) -> Result<String> {
        self.record(VcsQuery::Diff {
            range: range.to_string(),
            pattern: pattern.to_string(),
            color,
        });
        self.check_range(range)?;
        if self.failing_pattern.as_deref() == Some(pattern) {
            return Err(GitError::MissingDeltaPath.into());
        }
        Ok(self.diffs.get(pattern).cloned().unwrap_or_default())
    }
}
