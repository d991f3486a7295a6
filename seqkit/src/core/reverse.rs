//! Character sequence reversal.

use crate::core::error::{Result, SeqError};

/// Return a new string with the characters of `s` in opposite order.
pub fn reverse(s: &str) -> Result<String> {
    if s.is_empty() {
        return Err(SeqError::empty("reverse"));
    }
    Ok(s.chars().rev().collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{random_texts, seeded_rng};

    #[test]
    fn reverses_word() {
        assert_eq!(reverse("nigeria").as_deref(), Ok("airegin"));
    }

    #[test]
    fn reverses_multibyte_characters() {
        assert_eq!(reverse("añb").as_deref(), Ok("bña"));
    }

    #[test]
    fn reverse_is_an_involution() {
        let mut rng = seeded_rng(7);
        for text in random_texts(&mut rng, 200, 1..24) {
            let twice = reverse(&reverse(&text).expect("once")).expect("twice");
            assert_eq!(twice, text);
        }
    }

    #[test]
    fn empty_input_is_invalid_argument() {
        assert!(reverse("").expect_err("empty").is_invalid_argument());
    }
}
