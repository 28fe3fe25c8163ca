//! Command implementations for the kotogram CLI.

use std::fs;
use std::io;
use std::path::Path;

use log::{debug, info};
use regex::Regex;

use crate::cli::args::*;
use crate::cli::output::*;
use crate::config::RegistryConfig;
use crate::error::{KotogramError, Result};
use crate::grammar::registry::RuleRegistry;
use crate::morph::token::MorphToken;
use crate::morph::tokenizer::FeatureLineTokenizer;
use crate::rules::{builtin_rules, loader};

/// Execute a CLI command.
pub fn execute_command(args: KotogramArgs) -> Result<()> {
    match &args.command {
        Command::Match(match_args) => {
            let report = match_input(match_args, args.config.as_deref())?;
            output_result("Grammar matches", &report, &args)
        }
        Command::Rules(rules_args) => {
            let listing = list_rules(rules_args, args.config.as_deref())?;
            output_result("Loaded rules", &listing, &args)
        }
        Command::Validate(validate_args) => {
            let result = validate_rules(&validate_args.rules_dir)?;
            output_result("Rule directory is valid", &result, &args)
        }
        Command::Export(export_args) => {
            let result = export_rules(&export_args.output_dir)?;
            output_result("Built-in rules exported", &result, &args)
        }
    }
}

/// Build a registry from `rules_dir`, or from the built-in rules when no
/// directory is given. Returns the registry and a description of its source.
pub fn build_registry(
    rules_dir: Option<&Path>,
    config_file: Option<&Path>,
) -> Result<(RuleRegistry, String)> {
    let config = match config_file {
        Some(path) => {
            debug!("Loading registry configuration from {}", path.display());
            RegistryConfig::from_file(path)?
        }
        None => RegistryConfig::default(),
    };

    let mut registry = RuleRegistry::with_config(config)?;
    let source = match rules_dir {
        Some(dir) => {
            registry.load_directory(dir)?;
            dir.display().to_string()
        }
        None => {
            registry.add_rules(builtin_rules()?)?;
            "built-in".to_string()
        }
    };
    info!("Loaded {} rule(s) from {source}", registry.len());
    Ok((registry, source))
}

/// Read the token input of the `match` command.
pub fn read_sentences(input: &Path, format: InputFormat) -> Result<Vec<Vec<MorphToken>>> {
    let content = if input == Path::new("-") {
        io::read_to_string(io::stdin())?
    } else {
        fs::read_to_string(input)?
    };
    parse_sentences(&content, format)
}

/// Parse token input into sentences.
///
/// JSON input is either an array of tokens (one sentence) or an array of
/// token arrays.
pub fn parse_sentences(content: &str, format: InputFormat) -> Result<Vec<Vec<MorphToken>>> {
    match format {
        InputFormat::Mecab => FeatureLineTokenizer::new().tokenize_sentences(content),
        InputFormat::Json => {
            let value: serde_json::Value = serde_json::from_str(content)?;
            let nested = value
                .as_array()
                .and_then(|items| items.first())
                .is_some_and(|first| first.is_array());
            if nested {
                Ok(serde_json::from_value(value)?)
            } else if value.is_array() {
                Ok(vec![serde_json::from_value(value)?])
            } else {
                Err(KotogramError::parse(
                    "Token input must be a JSON array of tokens or of token arrays",
                ))
            }
        }
    }
}

/// Run the `match` command without printing.
pub fn match_input(args: &MatchArgs, config_file: Option<&Path>) -> Result<MatchReport> {
    let (registry, _) = build_registry(args.rules.as_deref(), config_file)?;
    if let Some(name) = &args.rule {
        if registry.rule(name).is_none() {
            return Err(KotogramError::invalid_argument(format!(
                "No rule named '{name}'"
            )));
        }
    }

    let sentences = read_sentences(&args.input, args.input_format)?;
    debug!("Read {} sentence(s) from {}", sentences.len(), args.input.display());

    let results = match &args.rule {
        Some(name) => sentences
            .iter()
            .map(|tokens| registry.match_specific(name, tokens))
            .collect(),
        None => registry.match_batch(&sentences),
    };

    let sentences = sentences
        .iter()
        .zip(results)
        .enumerate()
        .map(|(i, (tokens, matches))| SentenceMatches {
            sentence: i,
            text: tokens.iter().map(|t| t.surface.as_str()).collect(),
            token_count: tokens.len(),
            matches,
        })
        .collect();

    Ok(MatchReport {
        rule_count: registry.len(),
        sentences,
    })
}

/// Run the `rules` command without printing.
pub fn list_rules(args: &RulesArgs, config_file: Option<&Path>) -> Result<RuleListing> {
    let filter = args
        .filter
        .as_deref()
        .map(Regex::new)
        .transpose()
        .map_err(|e| KotogramError::invalid_argument(format!("Invalid filter: {e}")))?;

    let (registry, source) = build_registry(args.rules.as_deref(), config_file)?;
    let rules = registry
        .rules()
        .iter()
        .filter(|rule| filter.as_ref().is_none_or(|re| re.is_match(rule.name())))
        .map(|rule| RuleSummary::from(rule.as_ref()))
        .collect();

    Ok(RuleListing {
        source,
        total: registry.len(),
        rules,
    })
}

/// Load every rule file of `dir` into one registry, so duplicate names are
/// reported as well as malformed rules.
pub fn validate_rules(dir: &Path) -> Result<ValidationResult> {
    let files = loader::rule_files(dir)?;
    let mut registry = RuleRegistry::new();
    for file in &files {
        registry.add_rules(loader::load_rule_file(file)?)?;
    }

    Ok(ValidationResult {
        directory: dir.display().to_string(),
        files: files.len(),
        rules: registry.len(),
    })
}

/// Write the built-in rules to `dir`.
pub fn export_rules(dir: &Path) -> Result<ExportResult> {
    let rules = builtin_rules()?;
    let written = loader::save_rules_to_directory(dir, &rules)?;

    Ok(ExportResult {
        directory: dir.display().to_string(),
        files: written
            .iter()
            .filter_map(|p| p.file_name())
            .map(|name| name.to_string_lossy().to_string())
            .collect(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_json_sentences() {
        let flat = r#"[{"surface": "埃", "lemma": "埃", "part_of_speech": "名詞"}]"#;
        let sentences = parse_sentences(flat, InputFormat::Json).unwrap();
        assert_eq!(sentences.len(), 1);
        assert_eq!(sentences[0][0].surface, "埃");

        let nested = r#"[[{"surface": "A", "lemma": "A", "part_of_speech": "名詞"}], []]"#;
        let sentences = parse_sentences(nested, InputFormat::Json).unwrap();
        assert_eq!(sentences.len(), 2);
        assert!(sentences[1].is_empty());

        assert!(parse_sentences(r#"{"surface": "A"}"#, InputFormat::Json).is_err());
    }

    #[test]
    fn test_parse_mecab_sentences() {
        let text = "埃\t名詞,一般,*,*,*,*,埃,ホコリ,ホコリ\nEOS\nだらけ\t名詞,接尾,一般,*,*,*,だらけ,ダラケ,ダラケ\nEOS\n";
        let sentences = parse_sentences(text, InputFormat::Mecab).unwrap();
        assert_eq!(sentences.len(), 2);
    }

    #[test]
    fn test_builtin_registry() {
        let (registry, source) = build_registry(None, None).unwrap();
        assert_eq!(source, "built-in");
        assert!(!registry.is_empty());
    }

    #[test]
    fn test_invalid_filter() {
        let args = RulesArgs {
            rules: None,
            filter: Some("(".to_string()),
        };
        assert!(matches!(
            list_rules(&args, None),
            Err(KotogramError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_filter() {
        let args = RulesArgs {
            rules: None,
            filter: Some("^～上".to_string()),
        };
        let listing = list_rules(&args, None).unwrap();
        let names: Vec<&str> = listing.rules.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["～上で（の）", "～上で(は)/上での", "～上に", "～上"]);
        assert!(listing.total > names.len());
    }
}
