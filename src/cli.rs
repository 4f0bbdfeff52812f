//! CLI argument parsing for astroplan

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "ap")]
#[command(author, version, about = "Astronaut daily schedule organizer", long_about = None)]
pub struct Cli {
    /// Path to config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["ap"]);
        assert!(cli.config.is_none());
        assert!(!cli.verbose);
    }

    #[test]
    fn test_flags() {
        let cli = Cli::parse_from(["ap", "--verbose", "--config", "custom.yml"]);
        assert!(cli.verbose);
        assert_eq!(cli.config.unwrap(), PathBuf::from("custom.yml"));
    }
}
