//! Output formatting for CLI commands.

use std::fmt::Write as _;

use serde::{Deserialize, Serialize};

use crate::cli::args::{KotogramArgs, OutputFormat};
use crate::error::Result;
use crate::grammar::rule::GrammarRule;
use crate::grammar::span::MatchSpan;

/// Matches found in one sentence.
#[derive(Debug, Serialize)]
pub struct SentenceMatches {
    pub sentence: usize,
    pub text: String,
    pub token_count: usize,
    pub matches: Vec<MatchSpan>,
}

/// Result of the `match` command.
#[derive(Debug, Serialize)]
pub struct MatchReport {
    pub rule_count: usize,
    pub sentences: Vec<SentenceMatches>,
}

/// One rule as listed by the `rules` command.
#[derive(Debug, Serialize, Deserialize)]
pub struct RuleSummary {
    pub name: String,
    pub label: Option<String>,
    pub description: String,
    pub realizations: Vec<String>,
    pub examples: usize,
}

impl From<&GrammarRule> for RuleSummary {
    fn from(rule: &GrammarRule) -> Self {
        RuleSummary {
            name: rule.name().to_string(),
            label: rule.label(),
            description: rule.description().to_string(),
            realizations: rule.sequences().iter().map(|s| s.to_string()).collect(),
            examples: rule.examples().len(),
        }
    }
}

/// Result of the `rules` command.
#[derive(Debug, Serialize, Deserialize)]
pub struct RuleListing {
    pub source: String,
    pub total: usize,
    pub rules: Vec<RuleSummary>,
}

/// Result of the `validate` command.
#[derive(Debug, Serialize, Deserialize)]
pub struct ValidationResult {
    pub directory: String,
    pub files: usize,
    pub rules: usize,
}

/// Result of the `export` command.
#[derive(Debug, Serialize, Deserialize)]
pub struct ExportResult {
    pub directory: String,
    pub files: Vec<String>,
}

/// Human-readable rendering of a command result.
pub trait HumanReadable {
    fn to_human(&self) -> String;
}

impl HumanReadable for MatchReport {
    fn to_human(&self) -> String {
        let mut out = String::new();
        for sentence in &self.sentences {
            let _ = writeln!(out, "Sentence {}: {}", sentence.sentence + 1, sentence.text);
            if sentence.matches.is_empty() {
                let _ = writeln!(out, "  (no matches)");
            }
            for span in &sentence.matches {
                let label = span
                    .rule
                    .label()
                    .map(|l| format!(" [{l}]"))
                    .unwrap_or_default();
                let _ = writeln!(
                    out,
                    "  {}..{} {}{}: {}",
                    span.start,
                    span.end,
                    span.rule_name(),
                    label,
                    span.surface()
                );
            }
        }
        let total: usize = self.sentences.iter().map(|s| s.matches.len()).sum();
        let _ = write!(
            out,
            "{} match(es) in {} sentence(s), {} rule(s)",
            total,
            self.sentences.len(),
            self.rule_count
        );
        out
    }
}

impl HumanReadable for RuleListing {
    fn to_human(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "Rules ({}):", self.source);
        for rule in &self.rules {
            match &rule.label {
                Some(label) => {
                    let _ = writeln!(out, "  {label} {}", rule.name);
                }
                None => {
                    let _ = writeln!(out, "  {}", rule.name);
                }
            }
            for realization in &rule.realizations {
                let _ = writeln!(out, "      {realization}");
            }
        }
        let _ = write!(out, "{} of {} rule(s)", self.rules.len(), self.total);
        out
    }
}

impl HumanReadable for ValidationResult {
    fn to_human(&self) -> String {
        format!(
            "{}: {} rule(s) in {} file(s), all valid",
            self.directory, self.rules, self.files
        )
    }
}

impl HumanReadable for ExportResult {
    fn to_human(&self) -> String {
        let mut out = String::new();
        for file in &self.files {
            let _ = writeln!(out, "  {file}");
        }
        let _ = write!(out, "Wrote {} file(s) to {}", self.files.len(), self.directory);
        out
    }
}

/// Render a result in the requested format.
pub fn render_result<T>(message: &str, result: &T, args: &KotogramArgs) -> Result<String>
where
    T: Serialize + HumanReadable,
{
    match args.output_format {
        OutputFormat::Human => {
            if args.verbosity() > 1 {
                Ok(format!("{message}\n\n{}", result.to_human()))
            } else {
                Ok(result.to_human())
            }
        }
        OutputFormat::Json => {
            let json = if args.pretty {
                serde_json::to_string_pretty(result)?
            } else {
                serde_json::to_string(result)?
            };
            Ok(json)
        }
    }
}

/// Output a result in the specified format.
pub fn output_result<T>(message: &str, result: &T, args: &KotogramArgs) -> Result<()>
where
    T: Serialize + HumanReadable,
{
    let rendered = render_result(message, result, args)?;
    println!("{rendered}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn args(extra: &[&str]) -> KotogramArgs {
        let mut argv = vec!["kotogram"];
        argv.extend_from_slice(extra);
        argv.push("rules");
        KotogramArgs::try_parse_from(argv).unwrap()
    }

    fn validation() -> ValidationResult {
        ValidationResult {
            directory: "rules".to_string(),
            files: 2,
            rules: 3,
        }
    }

    #[test]
    fn test_human_output() {
        let rendered = render_result("Validated", &validation(), &args(&[])).unwrap();
        assert_eq!(rendered, "rules: 3 rule(s) in 2 file(s), all valid");

        let rendered = render_result("Validated", &validation(), &args(&["-vv"])).unwrap();
        assert!(rendered.starts_with("Validated\n\n"));
    }

    #[test]
    fn test_json_output() {
        let rendered = render_result("Validated", &validation(), &args(&["-f", "json"])).unwrap();
        assert_eq!(rendered, r#"{"directory":"rules","files":2,"rules":3}"#);

        let pretty =
            render_result("Validated", &validation(), &args(&["-f", "json", "--pretty"])).unwrap();
        assert!(pretty.contains('\n'));
    }

    #[test]
    fn test_rule_listing() {
        let rule = crate::grammar::GrammarRule::single(
            "〜だらけ",
            vec![
                crate::grammar::TokenPattern::pos(crate::morph::PartOfSpeech::Noun),
                crate::grammar::TokenPattern::value("だらけ"),
            ],
        )
        .unwrap()
        .with_category("N3")
        .with_index(52);

        let listing = RuleListing {
            source: "built-in".to_string(),
            total: 1,
            rules: vec![RuleSummary::from(&rule)],
        };
        let rendered = listing.to_human();
        assert!(rendered.contains("N3-052 〜だらけ"));
        assert!(rendered.contains("pos:名詞 value:だらけ"));
        assert!(rendered.ends_with("1 of 1 rule(s)"));
    }
}
