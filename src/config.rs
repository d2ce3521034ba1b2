//! Command-line surface and logging setup

use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;

use clap::{Args, Parser, Subcommand};
use thiserror::Error;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::automaton::Algorithm;
use crate::session::{DEFAULT_ARRAY_LEN, MAX_ARRAY_LEN};

/// Environment variable holding a tracing filter directive
pub const LOG_ENV: &str = "STEPSORT_LOG";

#[derive(Debug, Parser)]
#[command(name = "stepsort")]
#[command(about = "Guess how a sorting algorithm changes an array, one step at a time", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Start the interactive process of exploring sorting algorithms
    Start(StartArgs),

    /// List the supported algorithms
    List,
}

#[derive(Debug, Clone, Args)]
pub struct StartArgs {
    /// Algorithm to practise; the menu is shown when omitted
    #[arg(short, long, value_enum)]
    pub algorithm: Option<Algorithm>,

    /// Number of elements in the generated array
    #[arg(short = 'n', long, default_value_t = DEFAULT_ARRAY_LEN)]
    pub length: usize,

    /// Seed for the array generator
    #[arg(long)]
    pub seed: Option<u64>,

    /// Use line prompts on stdin/stdout instead of the full-screen UI
    #[arg(long)]
    pub plain: bool,

    /// Append logs to this file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("array length must be between 1 and {max}, got {got}")]
    InvalidLength { got: usize, max: usize },

    #[error("failed to open log file {path}: {source}")]
    LogFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl StartArgs {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.length == 0 || self.length > MAX_ARRAY_LEN {
            return Err(ConfigError::InvalidLength {
                got: self.length,
                max: MAX_ARRAY_LEN,
            });
        }
        Ok(())
    }
}

fn default_filter(verbose: u8) -> EnvFilter {
    let level = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(level))
}

/// Install the global subscriber.
///
/// With a log file, everything goes there. Without one, the full-screen UI gets
/// no fmt layer at all so log lines never land on top of the frame; plain mode
/// logs to stderr instead.
pub fn init_logging(verbose: u8, log_file: Option<&PathBuf>, plain: bool) -> Result<(), ConfigError> {
    let filter = default_filter(verbose);

    if let Some(path) = log_file {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|source| ConfigError::LogFile {
                path: path.clone(),
                source,
            })?;

        tracing_subscriber::registry()
            .with(fmt::layer().with_ansi(false).with_writer(Mutex::new(file)))
            .with(filter)
            .init();
        tracing::info!(path = %path.display(), "logging initialized");
    } else if plain {
        tracing_subscriber::registry()
            .with(fmt::layer().with_writer(std::io::stderr))
            .with(filter)
            .init();
    } else {
        tracing_subscriber::registry().with(filter).init();
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_start_defaults() {
        let cli = Cli::try_parse_from(["stepsort", "start"]).unwrap();
        let Command::Start(args) = cli.command else {
            panic!("expected start command");
        };
        assert_eq!(args.algorithm, None);
        assert_eq!(args.length, DEFAULT_ARRAY_LEN);
        assert!(!args.plain);
        assert!(args.validate().is_ok());
    }

    #[test]
    fn test_parse_start_options() {
        let cli = Cli::try_parse_from([
            "stepsort", "-vv", "start", "-a", "quick", "-n", "7", "--seed", "3", "--plain",
        ])
        .unwrap();
        assert_eq!(cli.verbose, 2);
        let Command::Start(args) = cli.command else {
            panic!("expected start command");
        };
        assert_eq!(args.algorithm, Some(Algorithm::Quick));
        assert_eq!(args.length, 7);
        assert_eq!(args.seed, Some(3));
        assert!(args.plain);
    }

    #[test]
    fn test_rejects_unknown_algorithm() {
        assert!(Cli::try_parse_from(["stepsort", "start", "-a", "radix"]).is_err());
    }

    #[test]
    fn test_validate_length() {
        let cli = Cli::try_parse_from(["stepsort", "start", "-n", "0"]).unwrap();
        let Command::Start(args) = cli.command else {
            panic!("expected start command");
        };
        assert!(matches!(
            args.validate(),
            Err(ConfigError::InvalidLength { got: 0, .. })
        ));
    }
}
