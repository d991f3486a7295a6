//! Longest run of consecutive equal characters.

use crate::core::error::{Result, SeqError};

/// A maximal block of consecutive equal characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Run {
    pub ch: char,
    /// Number of characters in the run.
    pub len: usize,
    /// Character (not byte) index where the run starts.
    pub start: usize,
}

/// Return the character of the longest run in `s`.
///
/// Ties go to the run that reached the maximum length first.
pub fn longest_run_char(s: &str) -> Result<char> {
    longest_run(s).map(|run| run.ch)
}

/// Return the longest run in `s` with its length and start index.
///
/// Single left-to-right scan; a run only replaces the best one when its length
/// is strictly greater, so the leftmost of equally long runs wins.
pub fn longest_run(s: &str) -> Result<Run> {
    let mut chars = s.chars();
    let first = chars.next().ok_or_else(|| SeqError::empty("longest_run"))?;

    let mut best = Run {
        ch: first,
        len: 1,
        start: 0,
    };
    let mut current = Run {
        ch: first,
        len: 1,
        start: 0,
    };

    for (idx, ch) in chars.enumerate() {
        if ch == current.ch {
            current.len += 1;
            if current.len > best.len {
                best = current;
            }
        } else {
            current = Run {
                ch,
                len: 1,
                start: idx + 1,
            };
        }
    }

    Ok(best)
}
