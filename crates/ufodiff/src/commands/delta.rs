use std::io;
use std::path::Path;

use tracing::debug;
use ufodiff_core::{ComparisonMode, ReportFormat, ScopeFilter};
use ufodiff_operations::operations::{DeltaInput, DeltaOperation};
use ufodiff_operations::providers::Git2Provider;

use super::{DeltaArgs, ReportScope, repository_root, write_stdout};
use crate::error::Result;
use crate::output;

pub(crate) fn run(start_path: &Path, args: DeltaArgs, format: ReportFormat) -> Result<()> {
    let mode: ComparisonMode = args.comparison.parse()?;
    let scope: ScopeFilter = args.ufo.into_iter().collect();
    let repo_root = repository_root(start_path)?;

    match args.scope {
        ReportScope::All => {
            debug!(%format, root = %repo_root.display(), "delta over all UFO files");
        }
    }

    let operation = DeltaOperation::new(Git2Provider::new());
    let report = operation.execute(&repo_root, &DeltaInput { mode, scope })?;

    let rendered = output::render(&report, format)?;
    write_stdout(&mut io::stdout().lock(), &rendered)
}
