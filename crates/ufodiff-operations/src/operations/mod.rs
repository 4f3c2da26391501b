mod delta;
mod diff;

pub use delta::{DeltaInput, DeltaOperation};
pub use diff::{DiffOperation, DiffRange, DiffStream};
