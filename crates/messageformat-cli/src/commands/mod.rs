//! CLI command implementations.

mod check;
mod format;

pub use check::{run_check, CheckArgs};
pub use format::{run_format, FormatArgs};
