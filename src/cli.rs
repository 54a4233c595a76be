//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::Parser;
use std::path::PathBuf;

/// readme-lint - A linter for README.md files.
#[derive(Debug, Parser)]
#[command(name = "readme-lint")]
#[command(author, version, about)]
#[command(
    long_about = "readme-lint is a fast, standalone command-line tool to enforce quality and completeness standards for README.md files."
)]
pub struct Cli {
    /// Path to the README file to check
    #[arg(default_value = "./README.md")]
    pub file: PathBuf,

    /// Output format (human or json)
    #[arg(long, default_value = "human")]
    pub format: String,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn file_defaults_to_readme() {
        let cli = Cli::parse_from(["readme-lint"]);
        assert_eq!(cli.file, PathBuf::from("./README.md"));
        assert_eq!(cli.format, "human");
    }

    #[test]
    fn file_argument_overrides_default() {
        let cli = Cli::parse_from(["readme-lint", "docs/README.md"]);
        assert_eq!(cli.file, PathBuf::from("docs/README.md"));
    }

    #[test]
    fn format_flag_is_parsed() {
        let cli = Cli::parse_from(["readme-lint", "--format", "json"]);
        assert_eq!(cli.format, "json");
    }
}
