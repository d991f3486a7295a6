//! CLI command implementations.
//!
//! Each command returns a [`CommandOutcome`]; `main` prints its text and exits
//! with [`CommandOutcome::exit_code`].

use std::path::Path;

use anyhow::{Context, Result, bail};
use tracing::debug;

use crate::core::extract::extract_version_pair;
use crate::core::factorial::factorial;
use crate::core::fibonacci::{fibonacci_iterative, fibonacci_recursive};
use crate::core::maximum::array_max;
use crate::core::palindrome::is_palindrome_with;
use crate::core::reverse::reverse;
use crate::core::runs::longest_run;
use crate::exit_codes;
use crate::io::config::{SeqkitConfig, write_config};
use crate::io::keygen::generate_key_with_len;
use crate::logging::TracingObserver;

/// Structured outcome of a single command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutcome {
    /// Command produced a value (or answered a query with yes).
    Value(String),
    /// Query answered no; the text is still printed.
    Negative(String),
}

impl CommandOutcome {
    pub fn text(&self) -> &str {
        match self {
            CommandOutcome::Value(text) | CommandOutcome::Negative(text) => text,
        }
    }

    pub fn exit_code(&self) -> i32 {
        match self {
            CommandOutcome::Value(_) => exit_codes::OK,
            CommandOutcome::Negative(_) => exit_codes::NEGATIVE,
        }
    }
}

/// Write a default config to `path` unless one exists and `force` is unset.
pub fn init_cmd(path: &Path, force: bool) -> Result<CommandOutcome> {
    if !force && path.exists() {
        debug!(path = %path.display(), "config exists, keeping it");
        return Ok(CommandOutcome::Value(format!("kept {}", path.display())));
    }
    write_config(path, &SeqkitConfig::default())
        .with_context(|| format!("write {}", path.display()))?;
    Ok(CommandOutcome::Value(format!("wrote {}", path.display())))
}

/// Print the character of the longest run, optionally with its length.
pub fn longest_run_cmd(text: &str, with_length: bool) -> Result<CommandOutcome> {
    let run = longest_run(text).context("longest run")?;
    debug!(ch = %run.ch, len = run.len, start = run.start, "longest run found");
    let line = if with_length {
        format!("{} {}", run.ch, run.len)
    } else {
        run.ch.to_string()
    };
    Ok(CommandOutcome::Value(line))
}

pub fn reverse_cmd(text: &str) -> Result<CommandOutcome> {
    let reversed = reverse(text).context("reverse")?;
    Ok(CommandOutcome::Value(reversed))
}

/// Answer whether `text` is a palindrome; "no" maps to a negative outcome.
pub fn palindrome_cmd(text: &str) -> Result<CommandOutcome> {
    if is_palindrome_with(text, &mut TracingObserver) {
        Ok(CommandOutcome::Value("true".to_string()))
    } else {
        Ok(CommandOutcome::Negative("false".to_string()))
    }
}

/// Compute `F(n)`; the recursive variant is capped by config.
pub fn fib_cmd(n: u32, recursive: bool, cfg: &SeqkitConfig) -> Result<CommandOutcome> {
    let value = if recursive {
        if n > cfg.recursive_fib_limit {
            bail!(
                "n={} exceeds recursive_fib_limit={}; drop --recursive or raise the limit",
                n,
                cfg.recursive_fib_limit
            );
        }
        fibonacci_recursive(n).context("recursive fibonacci")?
    } else {
        fibonacci_iterative(n).context("iterative fibonacci")?
    };
    debug!(n, recursive, value, "fibonacci computed");
    Ok(CommandOutcome::Value(value.to_string()))
}

pub fn max_cmd(values: &[i64]) -> Result<CommandOutcome> {
    let max = array_max(values).context("array max")?;
    Ok(CommandOutcome::Value(max.to_string()))
}

pub fn factorial_cmd(n: i64) -> Result<CommandOutcome> {
    let value = factorial(n).context("factorial")?;
    Ok(CommandOutcome::Value(value.to_string()))
}

/// Generate a hex key of `bytes` bytes, or the configured default.
pub fn key_cmd(bytes: Option<usize>, cfg: &SeqkitConfig) -> Result<CommandOutcome> {
    let byte_len = bytes.unwrap_or(cfg.key_bytes_default);
    debug!(byte_len, "generating key");
    let key = generate_key_with_len(byte_len).context("generate key")?;
    Ok(CommandOutcome::Value(key))
}

/// Print the trailing version pair as `<major> <minor>`.
pub fn extract_cmd(text: &str) -> Result<CommandOutcome> {
    match extract_version_pair(text).context("extract version pair")? {
        Some(pair) => Ok(CommandOutcome::Value(format!(
            "{} {}",
            pair.major, pair.minor
        ))),
        None => Ok(CommandOutcome::Negative(String::new())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_writes_default_and_respects_existing_file() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join(crate::io::config::CONFIG_FILE);
        init_cmd(&path, false).expect("init");
        let loaded = crate::io::config::load_config(&path).expect("load");
        assert_eq!(loaded, SeqkitConfig::default());

        std::fs::write(&path, "key_bytes_default = 8\n").expect("edit");
        let outcome = init_cmd(&path, false).expect("init again");
        assert!(outcome.text().starts_with("kept"));
        assert_eq!(
            std::fs::read_to_string(&path).expect("read"),
            "key_bytes_default = 8\n"
        );

        init_cmd(&path, true).expect("init force");
        let loaded = crate::io::config::load_config(&path).expect("load");
        assert_eq!(loaded, SeqkitConfig::default());
    }

    #[test]
    fn key_past_maximum_surfaces_invalid_argument() {
        let cfg = SeqkitConfig::default();
        let err = key_cmd(Some(usize::MAX), &cfg).expect_err("too large");
        let seq_err = err
            .downcast_ref::<crate::core::error::SeqError>()
            .expect("seq error");
        assert!(seq_err.is_invalid_argument());
    }

    #[test]
    fn longest_run_with_length() {
        let outcome = longest_run_cmd("aabbbaaaa", true).expect("run");
        assert_eq!(outcome, CommandOutcome::Value("a 4".to_string()));
    }

    #[test]
    fn palindrome_negative_maps_to_exit_code() {
        let outcome = palindrome_cmd("nigeria").expect("palindrome");
        assert_eq!(outcome.text(), "false");
        assert_eq!(outcome.exit_code(), exit_codes::NEGATIVE);
    }

    #[test]
    fn recursive_fib_respects_configured_limit() {
        let cfg = SeqkitConfig {
            recursive_fib_limit: 10,
            ..SeqkitConfig::default()
        };
        assert_eq!(
            fib_cmd(10, true, &cfg).expect("fib"),
            CommandOutcome::Value("55".to_string())
        );
        let err = fib_cmd(11, true, &cfg).expect_err("limit");
        assert!(err.to_string().contains("recursive_fib_limit"));
    }

    #[test]
    fn iterative_fib_ignores_recursive_limit() {
        let cfg = SeqkitConfig {
            recursive_fib_limit: 10,
            ..SeqkitConfig::default()
        };
        assert_eq!(
            fib_cmd(50, false, &cfg).expect("fib"),
            CommandOutcome::Value("12586269025".to_string())
        );
    }

    #[test]
    fn empty_max_surfaces_invalid_argument() {
        let err = max_cmd(&[]).expect_err("empty");
        let seq_err = err
            .downcast_ref::<crate::core::error::SeqError>()
            .expect("seq error");
        assert!(seq_err.is_invalid_argument());
    }

    #[test]
    fn key_uses_configured_default_length() {
        let cfg = SeqkitConfig {
            key_bytes_default: 6,
            ..SeqkitConfig::default()
        };
        let outcome = key_cmd(None, &cfg).expect("key");
        assert_eq!(outcome.text().len(), 12);
        let outcome = key_cmd(Some(2), &cfg).expect("key");
        assert_eq!(outcome.text().len(), 4);
    }

    #[test]
    fn extract_without_match_is_negative() {
        let outcome = extract_cmd("plain").expect("extract");
        assert_eq!(outcome.exit_code(), exit_codes::NEGATIVE);
        assert_eq!(
            extract_cmd("id_version_12_2").expect("extract"),
            CommandOutcome::Value("12 2".to_string())
        );
    }
}
