mod formatter;
mod json;
mod markdown;
mod plain;

use ufodiff_core::{ChangeReport, ReportFormat};

pub(crate) use formatter::ReportFormatter;
pub(crate) use json::JsonFormatter;
pub(crate) use markdown::MarkdownFormatter;
pub(crate) use plain::PlainTextFormatter;

use crate::error::Result;

pub(crate) fn render(report: &ChangeReport, format: ReportFormat) -> Result<String> {
    match format {
        ReportFormat::Text => PlainTextFormatter.format_report(report),
        ReportFormat::Json => JsonFormatter.format_report(report),
        ReportFormat::Markdown => MarkdownFormatter::new(crate::VERSION).format_report(report),
    }
}
