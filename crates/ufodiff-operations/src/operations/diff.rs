use std::iter::FusedIterator;
use std::path::PathBuf;
use std::vec;

use tracing::debug;
use ufodiff_core::{LINE_ENDING, ufo};

use crate::cleanup::clean_diff;
use crate::traits::VcsProvider;
use crate::{OperationError, Result};

/// A diff comparison expression resolved into a revision range.
///
/// `commits:N` becomes `HEAD~N` and `branch:NAME` becomes
/// `NAME..<current branch>`. Anything else is handed to the version-control
/// backend as written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiffRange {
    expression: String,
    is_branch: bool,
}

impl DiffRange {
    #[must_use]
    pub fn resolve(expr: &str, current_branch: &str) -> Self {
        if let Some(count) = expr.strip_prefix("commits:") {
            return Self {
                expression: format!("HEAD~{count}"),
                is_branch: false,
            };
        }
        if let Some(branch) = expr.strip_prefix("branch:") {
            return Self {
                expression: format!("{branch}..{current_branch}"),
                is_branch: true,
            };
        }
        Self {
            expression: expr.to_string(),
            is_branch: false,
        }
    }

    #[must_use]
    pub fn expression(&self) -> &str {
        &self.expression
    }

    #[must_use]
    pub fn is_branch(&self) -> bool {
        self.is_branch
    }
}

/// Produces cleaned diff text for UFO source files, one block per file
/// pattern.
pub struct DiffOperation<V> {
    vcs: V,
    repo_root: PathBuf,
    color: bool,
    current_branch: String,
}

impl<V> DiffOperation<V>
where
    V: VcsProvider,
{
    /// # Errors
    ///
    /// Returns an error if the current branch cannot be determined.
    pub fn new(vcs: V, repo_root: PathBuf, color: bool) -> Result<Self> {
        let current_branch = vcs.current_branch(&repo_root)?;
        debug!(%current_branch, color, "prepared diff operation");

        Ok(Self {
            vcs,
            repo_root,
            color,
            current_branch,
        })
    }

    /// Starts a lazy diff over every UFO file pattern. No version-control
    /// query runs until the stream is polled.
    #[must_use]
    pub fn stream(&self, expr: &str) -> DiffStream<'_, V> {
        let range = DiffRange::resolve(expr, &self.current_branch);
        debug!(range = range.expression(), "streaming diff");

        DiffStream {
            operation: self,
            range,
            patterns: ufo::diff_glob_patterns().into_iter(),
        }
    }
}

/// Yields one cleaned diff block per UFO file pattern with changes.
///
/// Patterns without changes are skipped. The first failed query is yielded
/// as an error and ends the stream.
pub struct DiffStream<'a, V> {
    operation: &'a DiffOperation<V>,
    range: DiffRange,
    patterns: vec::IntoIter<String>,
}

impl<V> Iterator for DiffStream<'_, V>
where
    V: VcsProvider,
{
    type Item = Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(pattern) = self.patterns.next() {
            let raw = match self.operation.vcs.diff(
                &self.operation.repo_root,
                self.range.expression(),
                &pattern,
                self.operation.color,
            ) {
                Ok(raw) => raw,
                Err(source) => {
                    self.patterns = Vec::new().into_iter();
                    return Some(Err(OperationError::DiffQuery {
                        pattern,
                        range: self.range.expression().to_string(),
                        source: Box::new(source),
                    }));
                }
            };

            let cleaned = clean_diff(&raw);
            if cleaned.len() <= 1 {
                continue;
            }

            debug!(%pattern, bytes = cleaned.len(), "diff block ready");
            if self.range.is_branch() {
                return Some(Ok(format!(
                    "branch {}{LINE_ENDING}{cleaned}",
                    self.range.expression()
                )));
            }
            return Some(Ok(cleaned));
        }
        None
    }
}

impl<V> FusedIterator for DiffStream<'_, V> where V: VcsProvider {}
