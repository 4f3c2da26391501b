use ufodiff_core::ChangeReport;

use super::ReportFormatter;
use crate::error::Result;

/// Compact JSON with keys `commits` or `branches`, then `added`, `deleted`
/// and `modified`.
pub(crate) struct JsonFormatter;

impl ReportFormatter for JsonFormatter {
    fn format_report(&self, report: &ChangeReport) -> Result<String> {
        Ok(serde_json::to_string(report)?)
    }
}
