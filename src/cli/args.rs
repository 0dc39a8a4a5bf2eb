//! CLI argument parsing using clap

use crate::output::DEFAULT_OUTPUT_FILE;
use crate::rules::DEFAULT_RULES_FILE;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Format of the summary printed to stdout
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Banner plus warning count
    Human,
    /// A single JSON object
    Jsonl,
}

/// Reads lint output on stdin, drops lines matched by ignore rules and
/// writes the rest to the filtered report
#[derive(Parser, Debug)]
#[command(name = "lint-filter")]
#[command(about = "Filter Verilator lint output through regex ignore rules")]
#[command(version)]
pub struct Cli {
    /// Rules file, one regex per line
    #[arg(long, default_value = DEFAULT_RULES_FILE)]
    pub rules: PathBuf,

    /// Filtered report to write
    #[arg(long, default_value = DEFAULT_OUTPUT_FILE)]
    pub output: PathBuf,

    /// Summary format
    #[arg(short, long, default_value = "human")]
    pub format: OutputFormat,

    /// Log rule loading and classification details to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_default_args() {
        let cli = Cli::parse_from(["lint-filter"]);
        assert_eq!(cli.rules, PathBuf::from("ignore_rules.regex"));
        assert_eq!(cli.output, PathBuf::from("verilator.lint"));
        assert_eq!(cli.format, OutputFormat::Human);
        assert!(!cli.verbose);
    }

    #[test]
    fn test_custom_paths() {
        let cli = Cli::parse_from([
            "lint-filter",
            "--rules",
            "lint/ignore.regex",
            "--output",
            "build/out.lint",
        ]);
        assert_eq!(cli.rules, PathBuf::from("lint/ignore.regex"));
        assert_eq!(cli.output, PathBuf::from("build/out.lint"));
    }

    #[test]
    fn test_jsonl_format_and_verbose() {
        let cli = Cli::parse_from(["lint-filter", "-f", "jsonl", "-v"]);
        assert_eq!(cli.format, OutputFormat::Jsonl);
        assert!(cli.verbose);
    }

    #[test]
    fn test_invalid_format_rejected() {
        let result = Cli::try_parse_from(["lint-filter", "--format", "xml"]);
        assert!(result.is_err());
    }
}
