//! Small toolkit of deterministic sequence algorithms.
//!
//! The crate keeps a strict separation:
//!
//! - **[`core`]**: Pure algorithms over strings and integer slices (longest
//!   run, reversal, palindrome, Fibonacci, maximum, factorial, version-pair
//!   extraction). No I/O, fully testable in isolation.
//! - **[`io`]**: Side-effecting helpers (config files, OS randomness for keys).
//!
//! [`cli`] wires both into the `seqkit` binary's subcommands.

pub mod cli;
pub mod core;
pub mod exit_codes;
pub mod io;
pub mod logging;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use crate::core::error::{Result, SeqError};
pub use crate::core::extract::{VersionPair, extract_version_pair};
pub use crate::core::factorial::{FACTORIAL_MAX_N, factorial};
pub use crate::core::fibonacci::{FIB_MAX_N, fibonacci_iterative, fibonacci_recursive};
pub use crate::core::maximum::array_max;
pub use crate::core::palindrome::{PalindromeObserver, Silent, is_palindrome, is_palindrome_with};
pub use crate::core::reverse::reverse;
pub use crate::core::runs::{Run, longest_run, longest_run_char};
pub use crate::io::keygen::{generate_key, generate_key_from, generate_key_with_len};
