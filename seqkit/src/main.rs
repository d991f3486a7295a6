//! `seqkit` command-line entry point.
//!
//! Thin wrapper: parse arguments, load config, run one command from
//! [`seqkit::cli`], print its result, and exit with a stable code.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use seqkit::cli::{self, CommandOutcome};
use seqkit::exit_codes;
use seqkit::io::config::{CONFIG_FILE, load_config};
use seqkit::logging;

#[derive(Parser)]
#[command(name = "seqkit", version, about = "Deterministic sequence algorithms")]
struct Cli {
    /// Path to the TOML config file.
    #[arg(long, global = true, default_value = CONFIG_FILE)]
    config: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Write a default config file if missing.
    Init {
        /// Overwrite an existing config file.
        #[arg(short, long)]
        force: bool,
    },
    /// Print the character of the longest run of equal characters.
    LongestRun {
        text: String,
        /// Also print the run length.
        #[arg(long)]
        with_length: bool,
    },
    /// Print the text reversed.
    Reverse { text: String },
    /// Print whether the text is a palindrome (exit 2 when it is not).
    Palindrome { text: String },
    /// Print the n-th Fibonacci number.
    Fib {
        n: u32,
        /// Use the naive recursive variant (bounded by `recursive_fib_limit`).
        #[arg(long)]
        recursive: bool,
    },
    /// Print the largest of the given integers.
    Max {
        #[arg(allow_negative_numbers = true)]
        values: Vec<i64>,
    },
    /// Print n factorial.
    Factorial {
        #[arg(allow_negative_numbers = true)]
        n: i64,
    },
    /// Print a random lowercase hex key.
    Key {
        /// Number of random bytes (defaults to `key_bytes_default`).
        #[arg(long)]
        bytes: Option<usize>,
    },
    /// Print the trailing `_<major>_<minor>` numbers of an identifier (exit 2 when absent).
    Extract { text: String },
}

fn main() {
    logging::init();
    let code = match run() {
        Ok(outcome) => {
            if !outcome.text().is_empty() {
                println!("{}", outcome.text());
            }
            outcome.exit_code()
        }
        Err(err) => {
            eprintln!("{:#}", err);
            exit_codes::INVALID
        }
    };
    std::process::exit(code);
}

fn run() -> Result<CommandOutcome> {
    let cli = Cli::parse();
    let config_path = cli.config;
    match cli.command {
        Command::Init { force } => cli::init_cmd(&config_path, force),
        Command::LongestRun { text, with_length } => cli::longest_run_cmd(&text, with_length),
        Command::Reverse { text } => cli::reverse_cmd(&text),
        Command::Palindrome { text } => cli::palindrome_cmd(&text),
        Command::Fib { n, recursive } => cli::fib_cmd(n, recursive, &load_config(&config_path)?),
        Command::Max { values } => cli::max_cmd(&values),
        Command::Factorial { n } => cli::factorial_cmd(n),
        Command::Key { bytes } => cli::key_cmd(bytes, &load_config(&config_path)?),
        Command::Extract { text } => cli::extract_cmd(&text),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_init_force() {
        let cli = Cli::parse_from(["seqkit", "init", "--force"]);
        assert!(matches!(cli.command, Command::Init { force: true }));
    }

    #[test]
    fn parse_fib_recursive() {
        let cli = Cli::parse_from(["seqkit", "fib", "20", "--recursive"]);
        assert!(matches!(
            cli.command,
            Command::Fib {
                n: 20,
                recursive: true
            }
        ));
    }

    #[test]
    fn parse_max_accepts_negative_values() {
        let cli = Cli::parse_from(["seqkit", "max", "-3", "7", "-1"]);
        match cli.command {
            Command::Max { values } => assert_eq!(values, vec![-3, 7, -1]),
            _ => panic!("expected max command"),
        }
    }

    #[test]
    fn parse_global_config_after_subcommand() {
        let cli = Cli::parse_from(["seqkit", "key", "--config", "alt.toml"]);
        assert_eq!(cli.config, PathBuf::from("alt.toml"));
        assert!(matches!(cli.command, Command::Key { bytes: None }));
    }
}
