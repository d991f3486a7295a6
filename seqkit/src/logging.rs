//! Tracing setup and the tracing-backed palindrome observer.
//!
//! Diagnostics go to stderr via `RUST_LOG`. Command results go to stdout and
//! are unaffected by the log level.

use tracing::{debug, info};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::core::palindrome::PalindromeObserver;

/// Initialize tracing subscriber for diagnostic logging.
///
/// Reads `RUST_LOG` env var. Defaults to `warn` if unset.
/// Output: stderr, compact format.
///
/// # Example
/// ```bash
/// RUST_LOG=seqkit=debug seqkit palindrome racecar
/// ```
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .init();
}

/// Palindrome observer that reports through `tracing`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingObserver;

impl PalindromeObserver for TracingObserver {
    fn mismatch(&mut self, front: usize, back: usize, left: char, right: char) {
        debug!(front, back, %left, %right, "palindrome mismatch");
    }

    fn verdict(&mut self, is_palindrome: bool) {
        if is_palindrome {
            info!("a palindrome");
        } else {
            info!("not a palindrome");
        }
    }
}
