//! Exit codes for the CLI

/// Changelog written, or nothing to write
pub const SUCCESS: u8 = 0;

/// Any aborted run
pub const ERROR: u8 = 1;
