//! Side-effecting helpers: configuration files and OS randomness.

pub mod config;
pub mod keygen;
