use ufodiff_core::ChangeReport;

use crate::error::Result;

pub(crate) trait ReportFormatter {
    fn format_report(&self, report: &ChangeReport) -> Result<String>;
}
