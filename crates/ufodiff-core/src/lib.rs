pub mod error;
pub mod types;
pub mod ufo;

pub use error::*;
pub use types::*;

/// Line terminator used in rendered reports and cleaned diffs.
pub const LINE_ENDING: &str = if cfg!(windows) { "\r\n" } else { "\n" };
