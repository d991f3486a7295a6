//! Random hexadecimal key generation.

use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};

use crate::core::error::{Result, SeqError};

/// Bytes in a default key (8 hex characters, e.g. `60fe4ec6`).
pub const DEFAULT_KEY_BYTES: usize = 4;

/// Largest accepted key size in bytes.
pub const MAX_KEY_BYTES: usize = 4096;

/// Generate an 8-character lowercase hex key from the OS CSPRNG.
pub fn generate_key() -> String {
    hex_from(&mut OsRng, DEFAULT_KEY_BYTES)
}

/// Generate a key of `byte_len` random bytes (`2 * byte_len` hex characters).
pub fn generate_key_with_len(byte_len: usize) -> Result<String> {
    generate_key_from(&mut OsRng, byte_len)
}

/// Generate a key from a caller-provided cryptographic RNG.
pub fn generate_key_from<R>(rng: &mut R, byte_len: usize) -> Result<String>
where
    R: RngCore + CryptoRng,
{
    if byte_len == 0 {
        return Err(SeqError::InvalidArgument {
            operation: "generate_key",
            reason: "byte length must be positive".to_string(),
        });
    }
    if byte_len > MAX_KEY_BYTES {
        return Err(SeqError::InvalidArgument {
            operation: "generate_key",
            reason: format!("byte length {byte_len} exceeds maximum {MAX_KEY_BYTES}"),
        });
    }
    Ok(hex_from(rng, byte_len))
}

fn hex_from<R: RngCore + CryptoRng>(rng: &mut R, byte_len: usize) -> String {
    let mut bytes = vec![0u8; byte_len];
    rng.fill_bytes(&mut bytes);
    hex::encode(bytes)
}
