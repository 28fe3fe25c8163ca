//! Command line argument parsing for the kotogram CLI using clap.

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// kotogram - Japanese grammar pattern matcher
#[derive(Parser, Debug, Clone)]
#[command(name = "kotogram")]
#[command(about = "Find Japanese grammar patterns in morphologically analyzed text")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct KotogramArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Registry configuration file (JSON)
    #[arg(long, value_name = "CONFIG_FILE", global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl KotogramArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Match grammar rules against tokenized sentences
    Match(MatchArgs),

    /// List the loaded rules
    Rules(RulesArgs),

    /// Check that every rule file in a directory loads
    Validate(ValidateArgs),

    /// Write the built-in rules as JSON files
    Export(ExportArgs),
}

/// Arguments for matching
#[derive(Parser, Debug, Clone)]
pub struct MatchArgs {
    /// Token file; `-` reads standard input
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Rule directory (defaults to the built-in rules)
    #[arg(short, long, value_name = "RULES_DIR")]
    pub rules: Option<PathBuf>,

    /// Format of the token file
    #[arg(short = 'i', long, default_value = "json")]
    pub input_format: InputFormat,

    /// Only match the rule with this name
    #[arg(long, value_name = "NAME")]
    pub rule: Option<String>,
}

/// Arguments for listing rules
#[derive(Parser, Debug, Clone)]
pub struct RulesArgs {
    /// Rule directory (defaults to the built-in rules)
    #[arg(short, long, value_name = "RULES_DIR")]
    pub rules: Option<PathBuf>,

    /// Only list rules whose name matches this regular expression
    #[arg(long, value_name = "REGEX")]
    pub filter: Option<String>,
}

/// Arguments for validating a rule directory
#[derive(Parser, Debug, Clone)]
pub struct ValidateArgs {
    /// Rule directory
    #[arg(value_name = "RULES_DIR")]
    pub rules_dir: PathBuf,
}

/// Arguments for exporting the built-in rules
#[derive(Parser, Debug, Clone)]
pub struct ExportArgs {
    /// Destination directory
    #[arg(value_name = "OUTPUT_DIR")]
    pub output_dir: PathBuf,
}

/// Output formats
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputFormat {
    /// Human-readable format
    Human,
    /// JSON format
    Json,
}

/// Token input formats
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InputFormat {
    /// A JSON array of tokens, or an array of such arrays for several sentences
    Json,
    /// Analyzer output, one `surface<TAB>features` line per token, `EOS` between sentences
    Mecab,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_match_command() {
        let args = KotogramArgs::try_parse_from([
            "kotogram",
            "match",
            "tokens.txt",
            "--rules",
            "rules",
            "--input-format",
            "mecab",
            "--rule",
            "～おきに",
        ])
        .unwrap();

        if let Command::Match(match_args) = args.command {
            assert_eq!(match_args.input, PathBuf::from("tokens.txt"));
            assert_eq!(match_args.rules, Some(PathBuf::from("rules")));
            assert_eq!(match_args.input_format, InputFormat::Mecab);
            assert_eq!(match_args.rule.as_deref(), Some("～おきに"));
        } else {
            panic!("Expected Match command");
        }
    }

    #[test]
    fn test_match_defaults() {
        let args = KotogramArgs::try_parse_from(["kotogram", "match", "-"]).unwrap();
        if let Command::Match(match_args) = args.command {
            assert_eq!(match_args.input_format, InputFormat::Json);
            assert!(match_args.rules.is_none());
            assert!(match_args.rule.is_none());
        } else {
            panic!("Expected Match command");
        }
    }

    #[test]
    fn test_rules_command() {
        let args =
            KotogramArgs::try_parse_from(["kotogram", "rules", "--filter", "^～上"]).unwrap();
        if let Command::Rules(rules_args) = args.command {
            assert_eq!(rules_args.filter.as_deref(), Some("^～上"));
        } else {
            panic!("Expected Rules command");
        }
    }

    #[test]
    fn test_verbosity_levels() {
        // Default verbosity
        let args = KotogramArgs::try_parse_from(["kotogram", "rules"]).unwrap();
        assert_eq!(args.verbosity(), 1);

        // Verbose flag
        let args = KotogramArgs::try_parse_from(["kotogram", "-v", "rules"]).unwrap();
        assert_eq!(args.verbosity(), 1);

        // Multiple verbose flags
        let args = KotogramArgs::try_parse_from(["kotogram", "-vvv", "rules"]).unwrap();
        assert_eq!(args.verbosity(), 3);

        // Quiet flag
        let args = KotogramArgs::try_parse_from(["kotogram", "--quiet", "rules"]).unwrap();
        assert_eq!(args.verbosity(), 0);
    }

    #[test]
    fn test_output_format_and_config() {
        let args = KotogramArgs::try_parse_from([
            "kotogram",
            "--format",
            "json",
            "--pretty",
            "validate",
            "rules",
            "--config",
            "kotogram.json",
        ])
        .unwrap();
        assert_eq!(args.output_format, OutputFormat::Json);
        assert!(args.pretty);
        assert_eq!(args.config, Some(PathBuf::from("kotogram.json")));
    }
}
