//! Palindrome check with an optional diagnostic observer.
//!
//! The boolean result is the whole contract. Reporting (e.g. logging a
//! "not a palindrome" line) goes through [`PalindromeObserver`] so callers can
//! opt in without changing the result.

/// Receives diagnostics while a palindrome check runs.
///
/// Offsets are byte offsets into the checked string.
pub trait PalindromeObserver {
    /// Called once at the first mismatching pair.
    fn mismatch(&mut self, _front: usize, _back: usize, _left: char, _right: char) {}

    /// Called once with the final verdict.
    fn verdict(&mut self, _is_palindrome: bool) {}
}

/// Observer that ignores every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct Silent;

impl PalindromeObserver for Silent {}

/// Return true if `s` reads the same forwards and backwards.
///
/// The empty string and single characters are palindromes.
pub fn is_palindrome(s: &str) -> bool {
    is_palindrome_with(s, &mut Silent)
}

/// Two-pointer palindrome check that reports to `observer`.
pub fn is_palindrome_with<O>(s: &str, observer: &mut O) -> bool
where
    O: PalindromeObserver + ?Sized,
{
    let mut chars = s.char_indices();
    while let (Some((front, left)), Some((back, right))) = (chars.next(), chars.next_back()) {
        if left != right {
            observer.mismatch(front, back, left, right);
            observer.verdict(false);
            return false;
        }
    }
    observer.verdict(true);
    true
}
