//! Command-line interface for the rewind terminal game.

use clap::Parser;
use std::path::PathBuf;

/// Rewind - tic-tac-toe with a time-travel move list
#[derive(Parser, Debug, Default)]
#[command(name = "rewind")]
#[command(about = "Tic-tac-toe with a time-travel move list", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// File to write logs to (overrides config)
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Log filter when RUST_LOG is unset (overrides config)
    #[arg(long)]
    pub log_filter: Option<String>,

    /// Start with the move list newest first
    #[arg(long)]
    pub reversed: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["rewind"]).expect("parses");
        assert!(cli.config.is_none());
        assert!(!cli.reversed);
    }

    #[test]
    fn test_flags() {
        let cli = Cli::try_parse_from([
            "rewind",
            "--config",
            "rewind.toml",
            "--log-file",
            "out.log",
            "--log-filter",
            "debug",
            "--reversed",
        ])
        .expect("parses");
        assert_eq!(cli.config, Some(PathBuf::from("rewind.toml")));
        assert_eq!(cli.log_file, Some(PathBuf::from("out.log")));
        assert_eq!(cli.log_filter.as_deref(), Some("debug"));
        assert!(cli.reversed);
    }
}
