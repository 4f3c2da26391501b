mod delta;
mod diff;

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use clap::{Args, Subcommand, ValueEnum};
use tracing::debug;
use ufodiff_core::{ReportFormat, ufo};

use crate::environment::{self, ColorChoice};
use crate::error::Result;

/// Parent directories searched for the repository root.
const MAX_PARENT_LEVELS: usize = 3;

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Report added, deleted and modified UFO files as plain text
    Delta(DeltaArgs),
    /// Report added, deleted and modified UFO files as JSON
    Deltajson(DeltaArgs),
    /// Report added, deleted and modified UFO files as Markdown
    Deltamd(DeltaArgs),
    /// Show cleaned diffs of UFO files, colored
    Diff(DiffArgs),
    /// Show cleaned diffs of UFO files without color
    Diffnc(DiffArgs),
}

#[derive(Clone, Copy, ValueEnum)]
pub(crate) enum ReportScope {
    /// Every UFO source file
    All,
}

#[derive(Args)]
pub(crate) struct DeltaArgs {
    /// Which UFO files to report on
    #[arg(value_enum)]
    pub scope: ReportScope,

    /// `commits:N` for the last N commits or `branch:NAME` to compare with a branch
    #[arg(value_name = "COMPARISON")]
    pub comparison: String,

    /// Limit the report to these UFO sources
    #[arg(value_name = "UFO", value_parser = parse_ufo_path)]
    pub ufo: Vec<String>,
}

#[derive(Args)]
pub(crate) struct DiffArgs {
    /// `commits:N`, `branch:NAME` or any git revision range
    #[arg(value_name = "RANGE")]
    pub range: String,
}

fn parse_ufo_path(value: &str) -> std::result::Result<String, String> {
    if value
        .trim_end_matches(['/', '\\'])
        .ends_with(ufo::UFO_EXTENSION)
    {
        Ok(value.to_string())
    } else {
        Err(format!("'{value}' is not a UFO source (expected a '{}' path)", ufo::UFO_EXTENSION))
    }
}

impl Commands {
    pub(crate) fn execute(self, start_path: &Path) -> Result<()> {
        match self {
            Self::Delta(args) => delta::run(start_path, args, ReportFormat::Text),
            Self::Deltajson(args) => delta::run(start_path, args, ReportFormat::Json),
            Self::Deltamd(args) => delta::run(start_path, args, ReportFormat::Markdown),
            Self::Diff(args) => {
                let color = environment::diff_color();
                if let ColorChoice::Never { env_var } = &color {
                    debug!(%env_var, "color disabled by environment");
                }
                diff::run(start_path, args, color.enabled())
            }
            Self::Diffnc(args) => diff::run(start_path, args, false),
        }
    }
}

fn repository_root(start_path: &Path) -> Result<PathBuf> {
    Ok(ufodiff_git::find_repository_root(
        start_path,
        MAX_PARENT_LEVELS,
    )?)
}

/// Writes to stdout, treating a closed pipe as the reader being done.
fn write_stdout(out: &mut impl Write, text: &str) -> Result<()> {
    match out.write_all(text.as_bytes()).and_then(|()| out.flush()) {
        Err(e) if e.kind() == io::ErrorKind::BrokenPipe => Ok(()),
        result => Ok(result?),
    }
}
