//! Stable exit codes for seqkit CLI commands.

/// Command succeeded (or a yes/no query answered yes).
pub const OK: i32 = 0;
/// Invalid input, config, or any other error.
pub const INVALID: i32 = 1;
/// A yes/no query answered no (`palindrome` false, `extract` found no match).
pub const NEGATIVE: i32 = 2;
