//! Test-only helpers for generating deterministic input sequences.

use std::ops::Range;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

/// Small alphabet so generated text contains runs and palindromes often.
/// Includes a multibyte character to exercise char-vs-byte handling.
const ALPHABET: [char; 4] = ['a', 'b', 'c', 'é'];

/// Create a deterministic RNG for property-style tests.
pub fn seeded_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Generate one string whose character count is drawn from `len`.
pub fn random_text(rng: &mut StdRng, len: Range<usize>) -> String {
    let count = rng.gen_range(len);
    (0..count).map(|_| random_char(rng)).collect()
}

/// Generate `count` strings with character counts drawn from `len`.
pub fn random_texts(rng: &mut StdRng, count: usize, len: Range<usize>) -> Vec<String> {
    (0..count).map(|_| random_text(rng, len.clone())).collect()
}

/// Generate a palindrome whose character count is drawn from `len`.
pub fn random_palindrome(rng: &mut StdRng, len: Range<usize>) -> String {
    let count = rng.gen_range(len);
    let half: Vec<char> = (0..count / 2).map(|_| random_char(rng)).collect();
    let mut out: String = half.iter().collect();
    if count % 2 == 1 {
        out.push(random_char(rng));
    }
    out.extend(half.iter().rev());
    out
}

/// Generate a vector of integers whose length is drawn from `len`.
pub fn random_values(rng: &mut StdRng, len: Range<usize>) -> Vec<i64> {
    let count = rng.gen_range(len);
    (0..count).map(|_| rng.gen_range(-1_000..1_000)).collect()
}

fn random_char(rng: &mut StdRng) -> char {
    *ALPHABET.choose(rng).unwrap_or(&'a')
}
