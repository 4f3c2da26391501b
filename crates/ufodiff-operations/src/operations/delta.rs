use std::path::Path;

use tracing::debug;
use ufodiff_core::{ChangeReport, ChangeType, ComparisonBasis, ComparisonMode, ScopeFilter, ufo};

use crate::traits::VcsProvider;
use crate::{OperationError, Result};

pub struct DeltaInput {
    pub mode: ComparisonMode,
    pub scope: ScopeFilter,
}

/// Builds a [`ChangeReport`] of UFO source files changed in a commit range
/// or between two branches.
pub struct DeltaOperation<V> {
    vcs: V,
}

impl<V> DeltaOperation<V>
where
    V: VcsProvider,
{
    #[must_use]
    pub fn new(vcs: V) -> Self {
        Self { vcs }
    }

    /// # Errors
    ///
    /// Returns an error if any version-control query fails, for example when
    /// the commit count exceeds the repository history or the branch does
    /// not exist. No partial report is produced.
    pub fn execute(&self, repo_root: &Path, input: &DeltaInput) -> Result<ChangeReport> {
        let (range, mut basis) = match &input.mode {
            ComparisonMode::CommitRange { .. } => (
                input.mode.revision_range(""),
                ComparisonBasis::Commits(Vec::new()),
            ),
            ComparisonMode::BranchCompare { branch } => {
                let current = self.vcs.current_branch(repo_root)?;
                (
                    input.mode.revision_range(&current),
                    ComparisonBasis::branches(branch.as_str(), current),
                )
            }
        };
        debug!(mode = %input.mode, %range, "building change report");

        let mut categories = Vec::with_capacity(ChangeType::ALL.len());
        for change in ChangeType::ALL {
            let paths = self
                .vcs
                .changed_paths(repo_root, &range, change)
                .map_err(|source| OperationError::ChangedPaths {
                    change,
                    range: range.clone(),
                    source: Box::new(source),
                })?;
            categories.push((change, select_paths(paths, &input.scope, change)));
        }

        if let (ComparisonMode::CommitRange { count }, ComparisonBasis::Commits(ids)) =
            (&input.mode, &mut basis)
        {
            *ids = self.vcs.commit_ids(repo_root, count.get())?;
        }

        Ok(categories
            .into_iter()
            .fold(ChangeReport::new(basis), |report, (change, paths)| {
                report.with_paths(change, paths)
            }))
    }
}

/// Keeps UFO source paths that fall within the scope filter.
fn select_paths(paths: Vec<String>, scope: &ScopeFilter, change: ChangeType) -> Vec<String> {
    let reported = paths.len();
    let selected: Vec<String> = paths
        .into_iter()
        .filter(|path| ufo::is_spec_file(path) && scope.matches(path))
        .collect();

    debug!(%change, reported, selected = selected.len(), "filtered changed paths");
    selected
}
