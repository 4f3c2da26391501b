use ufodiff_core::{ChangeReport, ChangeType, ComparisonBasis, LINE_ENDING};

use super::ReportFormatter;
use crate::error::Result;

pub(crate) struct PlainTextFormatter;

impl PlainTextFormatter {
    fn format_basis(output: &mut String, basis: &ComparisonBasis) {
        let (title, entries) = match basis {
            ComparisonBasis::Commits(ids) => {
                ("Commit history SHA1 for this analysis:", ids.as_slice())
            }
            ComparisonBasis::Branches(names) => ("Branches under analysis:", names.as_slice()),
        };
        if entries.is_empty() {
            return;
        }

        output.push_str(LINE_ENDING);
        output.push_str(title);
        output.push_str(LINE_ENDING);
        for entry in entries {
            output.push(' ');
            output.push_str(entry);
            output.push_str(LINE_ENDING);
        }
        output.push_str(LINE_ENDING);
    }

    fn format_paths(output: &mut String, report: &ChangeReport) {
        for change in ChangeType::ALL {
            for path in report.paths(change) {
                output.push_str(&format!("[{}]:{path}{LINE_ENDING}", change.code()));
            }
        }
    }
}

impl ReportFormatter for PlainTextFormatter {
    fn format_report(&self, report: &ChangeReport) -> Result<String> {
        let mut output = String::new();
        Self::format_basis(&mut output, &report.basis);
        Self::format_paths(&mut output, report);
        Ok(output)
    }
}
