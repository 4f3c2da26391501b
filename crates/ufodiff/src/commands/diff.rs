use std::io;
use std::path::Path;

use ufodiff_operations::operations::DiffOperation;
use ufodiff_operations::providers::Git2Provider;

use super::{DiffArgs, repository_root, write_stdout};
use crate::error::Result;

pub(crate) fn run(start_path: &Path, args: DiffArgs, color: bool) -> Result<()> {
    let repo_root = repository_root(start_path)?;
    let operation = DiffOperation::new(Git2Provider::new(), repo_root, color)?;

    let mut stdout = io::stdout().lock();
    for block in operation.stream(&args.range) {
        write_stdout(&mut stdout, &block?)?;
    }
    Ok(())
}
