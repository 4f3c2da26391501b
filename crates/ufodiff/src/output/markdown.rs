use ufodiff_core::{ChangeReport, ChangeType, ComparisonBasis, LINE_ENDING};

use super::ReportFormatter;
use crate::error::Result;

const PROJECT_URL: &str = env!("CARGO_PKG_REPOSITORY");

pub(crate) struct MarkdownFormatter<'a> {
    version: &'a str,
}

impl<'a> MarkdownFormatter<'a> {
    pub(crate) fn new(version: &'a str) -> Self {
        Self { version }
    }

    fn format_basis(output: &mut String, basis: &ComparisonBasis) {
        match basis {
            ComparisonBasis::Commits(ids) if !ids.is_empty() => {
                Self::push_heading(output, "Commit history SHA1 for this analysis:");
                for id in ids {
                    output.push_str(&format!("- `{id}`{LINE_ENDING}"));
                }
                output.push_str(LINE_ENDING);
            }
            ComparisonBasis::Commits(_) => {}
            ComparisonBasis::Branches(names) => {
                Self::push_heading(output, "Branches under analysis:");
                for name in names {
                    output.push_str(&format!("- {name}{LINE_ENDING}"));
                }
                output.push_str(LINE_ENDING);
            }
        }
    }

    fn push_heading(output: &mut String, title: &str) {
        output.push_str(&format!("{LINE_ENDING}## {title}{LINE_ENDING}"));
    }

    fn format_section(output: &mut String, change: ChangeType, paths: &[String]) {
        let title = match change {
            ChangeType::Added => "Added Files",
            ChangeType::Deleted => "Deleted Files",
            ChangeType::Modified => "Modified Files",
        };
        output.push_str(&format!("## {title}{LINE_ENDING}"));

        if paths.is_empty() {
            output.push_str(&format!("- None{LINE_ENDING}"));
        }
        for path in paths {
            output.push_str(&format!("- {path}{LINE_ENDING}"));
        }
    }
}

impl ReportFormatter for MarkdownFormatter<'_> {
    fn format_report(&self, report: &ChangeReport) -> Result<String> {
        let mut output = String::new();
        Self::format_basis(&mut output, &report.basis);

        let sections: Vec<String> = ChangeType::ALL
            .into_iter()
            .map(|change| {
                let mut section = String::new();
                Self::format_section(&mut section, change, report.paths(change));
                section
            })
            .collect();
        output.push_str(&sections.join(&LINE_ENDING.repeat(2)));

        output.push_str(&format!(
            "{LINE_ENDING}{LINE_ENDING}---{LINE_ENDING}[ufodiff]({PROJECT_URL}) v{}",
            self.version
        ));
        Ok(output)
    }
}
