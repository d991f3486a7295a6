//! Toolkit configuration stored in `seqkit.toml`.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};

use crate::core::fibonacci::FIB_MAX_N;
use crate::io::keygen::{DEFAULT_KEY_BYTES, MAX_KEY_BYTES};

/// Default config file name, resolved against the working directory.
pub const CONFIG_FILE: &str = "seqkit.toml";

/// Toolkit configuration (TOML).
///
/// Missing fields default to the values in [`SeqkitConfig::default`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct SeqkitConfig {
    /// Largest `n` accepted by `seqkit fib --recursive`.
    pub recursive_fib_limit: u32,

    /// Number of random bytes in a key when `--bytes` is not given.
    pub key_bytes_default: usize,
}

impl Default for SeqkitConfig {
    fn default() -> Self {
        Self {
            recursive_fib_limit: 35,
            key_bytes_default: DEFAULT_KEY_BYTES,
        }
    }
}

impl SeqkitConfig {
    pub fn validate(&self) -> Result<()> {
        if self.recursive_fib_limit > FIB_MAX_N {
            return Err(anyhow!("recursive_fib_limit must be <= {}", FIB_MAX_N));
        }
        if self.key_bytes_default == 0 {
            return Err(anyhow!("key_bytes_default must be > 0"));
        }
        if self.key_bytes_default > MAX_KEY_BYTES {
            return Err(anyhow!("key_bytes_default must be <= {}", MAX_KEY_BYTES));
        }
        Ok(())
    }
}

/// Load config from a TOML file.
///
/// If the file is missing, returns `SeqkitConfig::default()`.
pub fn load_config(path: &Path) -> Result<SeqkitConfig> {
    if !path.exists() {
        let cfg = SeqkitConfig::default();
        cfg.validate()?;
        return Ok(cfg);
    }
    let contents = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: SeqkitConfig =
        toml::from_str(&contents).with_context(|| format!("parse {}", path.display()))?;
    cfg.validate()
        .with_context(|| format!("validate {}", path.display()))?;
    Ok(cfg)
}

/// Atomically write config to disk (temp file + rename).
pub fn write_config(path: &Path, cfg: &SeqkitConfig) -> Result<()> {
    cfg.validate()?;
    let mut buf = toml::to_string_pretty(cfg).context("serialize config toml")?;
    buf.push('\n');
    write_atomic(path, &buf)
}

fn write_atomic(path: &Path, contents: &str) -> Result<()> {
    let parent = path
        .parent()
        .with_context(|| format!("config path missing parent {}", path.display()))?;
    if !parent.as_os_str().is_empty() {
        fs::create_dir_all(parent)
            .with_context(|| format!("create directory {}", parent.display()))?;
    }
    let tmp_path = path.with_extension("toml.tmp");
    fs::write(&tmp_path, contents)
        .with_context(|| format!("write temp config {}", tmp_path.display()))?;
    fs::rename(&tmp_path, path).with_context(|| format!("replace config {}", path.display()))?;
    Ok(())
}
