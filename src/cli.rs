//! Command-line interface for noughts.

use clap::Parser;
use std::path::PathBuf;

/// Noughts and crosses for two players sharing a terminal
#[derive(Parser, Debug)]
#[command(name = "noughts")]
#[command(about = "Two-player noughts and crosses in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file (defaults are used when omitted)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Log file, overriding the config value
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_flags_required() {
        let cli = Cli::try_parse_from(["noughts"]).unwrap();
        assert!(cli.config.is_none());
        assert!(cli.log_file.is_none());
    }

    #[test]
    fn test_flags_parse() {
        let cli =
            Cli::try_parse_from(["noughts", "-c", "game.toml", "--log-file", "/tmp/n.log"]).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("game.toml")));
        assert_eq!(cli.log_file, Some(PathBuf::from("/tmp/n.log")));
    }
}
