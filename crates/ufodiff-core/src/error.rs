use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("invalid commit count in '{input}': expected a positive integer after 'commits:'")]
    InvalidCommitCount { input: String },

    #[error("missing branch name in '{input}': expected 'branch:<name>'")]
    MissingBranchName { input: String },

    #[error("unrecognized comparison '{input}': expected 'commits:<N>' or 'branch:<name>'")]
    UnknownComparison { input: String },
}

pub type Result<T> = std::result::Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::CoreError;

    #[test]
    fn invalid_commit_count_includes_input() {
        let err = CoreError::InvalidCommitCount {
            input: "commits:x".to_string(),
        };

        assert!(err.to_string().contains("commits:x"));
    }

    #[test]
    fn unknown_comparison_mentions_both_forms() {
        let err = CoreError::UnknownComparison {
            input: "HEAD~1".to_string(),
        };

        let msg = err.to_string();

        assert!(msg.contains("commits:<N>"));
        assert!(msg.contains("branch:<name>"));
    }
}
