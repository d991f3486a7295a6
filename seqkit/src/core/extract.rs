//! Extraction of trailing `_<major>_<minor>` version numbers from identifiers.

use std::sync::LazyLock;

use regex::Regex;

use crate::core::error::{Result, SeqError};

static VERSION_SUFFIX_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(.+?)_([0-9]+)_([0-9]+)$").unwrap());

/// Two numbers captured from an identifier such as `id_version_12_2`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VersionPair {
    pub major: u32,
    pub minor: u32,
}

/// Extract the trailing number pair from `input`.
///
/// Returns `Ok(None)` when `input` does not end in `_<digits>_<digits>` after a
/// non-empty stem.
pub fn extract_version_pair(input: &str) -> Result<Option<VersionPair>> {
    let Some(caps) = VERSION_SUFFIX_RE.captures(input) else {
        return Ok(None);
    };
    Ok(Some(VersionPair {
        major: parse_number(&caps[2])?,
        minor: parse_number(&caps[3])?,
    }))
}

fn parse_number(digits: &str) -> Result<u32> {
    digits.parse().map_err(|err| SeqError::InvalidArgument {
        operation: "extract_version_pair",
        reason: format!("number '{digits}' out of range: {err}"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_trailing_pair() {
        assert_eq!(
            extract_version_pair("id_version_12_2"),
            Ok(Some(VersionPair {
                major: 12,
                minor: 2,
            }))
        );
    }

    #[test]
    fn uses_last_two_numbers() {
        assert_eq!(
            extract_version_pair("a_1_2_3"),
            Ok(Some(VersionPair { major: 2, minor: 3 }))
        );
    }

    #[test]
    fn no_match_returns_none() {
        assert_eq!(extract_version_pair("id_version"), Ok(None));
        assert_eq!(extract_version_pair("_1_2"), Ok(None));
        assert_eq!(extract_version_pair("id_1_2x"), Ok(None));
        assert_eq!(extract_version_pair(""), Ok(None));
    }

    #[test]
    fn oversized_number_is_invalid_argument() {
        let err = extract_version_pair("id_99999999999_1").expect_err("too large");
        assert!(err.is_invalid_argument());
    }
}
