//! Deterministic, pure sequence algorithms.
//!
//! Core modules must be free of I/O side effects. Every function takes its
//! input by reference, owns only stack-local working state, and returns a
//! value or a [`SeqError`](error::SeqError).

pub mod error;
pub mod extract;
pub mod factorial;
pub mod fibonacci;
pub mod maximum;
pub mod palindrome;
pub mod reverse;
pub mod runs;
