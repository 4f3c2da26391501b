use std::fmt;
use std::num::NonZeroUsize;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::CoreError;

const COMMITS_PREFIX: &str = "commits:";
const BRANCH_PREFIX: &str = "branch:";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChangeType {
    Added,
    Deleted,
    Modified,
}

impl ChangeType {
    /// Report order: added, deleted, modified.
    pub const ALL: [Self; 3] = [Self::Added, Self::Deleted, Self::Modified];

    /// Single-letter status code as git prints it.
    #[must_use]
    pub fn code(self) -> char {
        match self {
            Self::Added => 'A',
            Self::Deleted => 'D',
            Self::Modified => 'M',
        }
    }
}

impl fmt::Display for ChangeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Added => "added",
            Self::Deleted => "deleted",
            Self::Modified => "modified",
        };
        write!(f, "{s}")
    }
}

/// What the working state is compared against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ComparisonMode {
    /// `HEAD` vs. `HEAD~count`.
    CommitRange { count: NonZeroUsize },
    /// The checked-out branch vs. `branch`.
    BranchCompare { branch: String },
}

impl ComparisonMode {
    /// The revision range this comparison covers, given the checked-out
    /// branch.
    #[must_use]
    pub fn revision_range(&self, current_branch: &str) -> String {
        match self {
            Self::CommitRange { count } => format!("HEAD~{count}"),
            Self::BranchCompare { branch } => format!("{branch}..{current_branch}"),
        }
    }
}

impl FromStr for ComparisonMode {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some(count) = s.strip_prefix(COMMITS_PREFIX) {
            let count = count
                .parse::<NonZeroUsize>()
                .map_err(|_| CoreError::InvalidCommitCount {
                    input: s.to_string(),
                })?;
            return Ok(Self::CommitRange { count });
        }

        if let Some(branch) = s.strip_prefix(BRANCH_PREFIX) {
            if branch.is_empty() {
                return Err(CoreError::MissingBranchName {
                    input: s.to_string(),
                });
            }
            return Ok(Self::BranchCompare {
                branch: branch.to_string(),
            });
        }

        Err(CoreError::UnknownComparison {
            input: s.to_string(),
        })
    }
}

impl fmt::Display for ComparisonMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CommitRange { count } => write!(f, "{COMMITS_PREFIX}{count}"),
            Self::BranchCompare { branch } => write!(f, "{BRANCH_PREFIX}{branch}"),
        }
    }
}

/// Substrings that narrow a report to particular UFO containers.
///
/// Matching is plain substring containment anywhere in the path, so
/// `Reg` matches both `Regular.ufo` and `Regulator.ufo`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScopeFilter {
    entries: Vec<String>,
}

impl ScopeFilter {
    #[must_use]
    pub fn new(entries: Vec<String>) -> Self {
        Self { entries }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn matches(&self, path: &str) -> bool {
        self.is_empty() || self.entries.iter().any(|entry| path.contains(entry.as_str()))
    }
}

impl FromIterator<String> for ScopeFilter {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComparisonBasis {
    /// Abbreviated commit ids in range, newest first.
    Commits(Vec<String>),
    /// `[comparison branch, current branch]`.
    Branches([String; 2]),
}

impl ComparisonBasis {
    #[must_use]
    pub fn branches(compare: impl Into<String>, current: impl Into<String>) -> Self {
        Self::Branches([compare.into(), current.into()])
    }
}

/// UFO source files changed between two revisions.
///
/// Each category keeps the order in which git reported the paths.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeReport {
    #[serde(flatten)]
    pub basis: ComparisonBasis,
    pub added: Vec<String>,
    pub deleted: Vec<String>,
    pub modified: Vec<String>,
}

impl ChangeReport {
    #[must_use]
    pub fn new(basis: ComparisonBasis) -> Self {
        Self {
            basis,
            added: Vec::new(),
            deleted: Vec::new(),
            modified: Vec::new(),
        }
    }

    #[must_use]
    pub fn paths(&self, change: ChangeType) -> &[String] {
        match change {
            ChangeType::Added => &self.added,
            ChangeType::Deleted => &self.deleted,
            ChangeType::Modified => &self.modified,
        }
    }

    pub(crate) fn paths_mut(&mut self, change: ChangeType) -> &mut Vec<String> {
        match change {
            ChangeType::Added => &mut self.added,
            ChangeType::Deleted => &mut self.deleted,
            ChangeType::Modified => &mut self.modified,
        }
    }

    #[must_use]
    pub fn with_paths(mut self, change: ChangeType, paths: Vec<String>) -> Self {
        *self.paths_mut(change) = paths;
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    Text,
    Json,
    Markdown,
}

impl fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Text => "text",
            Self::Json => "json",
            Self::Markdown => "markdown",
        };
        write!(f, "{s}")
    }
}
