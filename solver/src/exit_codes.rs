//! Stable exit codes for the puzzle binaries.

/// Both answers were printed.
pub const OK: i32 = 0;
/// Bad usage, an unreadable input file or malformed input.
pub const INVALID: i32 = 1;
