//! Reading and writing rule files.
//!
//! A rule file holds one JSON rule object or an array of them. A rule
//! directory is every `*.json` file in it, read in file-name order.

use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, warn};

use crate::error::{KotogramError, Result};
use crate::grammar::rule::GrammarRule;
use crate::rules::definition::RuleDefinition;

/// Load the rules stored in one file.
pub fn load_rule_file<P: AsRef<Path>>(path: P) -> Result<Vec<GrammarRule>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|e| {
        KotogramError::other(format!("Failed to read rule file '{}': {e}", path.display()))
    })?;

    let value: serde_json::Value = serde_json::from_str(&content).map_err(|e| {
        KotogramError::parse(format!("Failed to parse rule file '{}': {e}", path.display()))
    })?;
    let definitions: Vec<RuleDefinition> = if value.is_array() {
        serde_json::from_value(value)
    } else {
        serde_json::from_value(value).map(|definition| vec![definition])
    }
    .map_err(|e| KotogramError::parse(format!("Invalid rule in '{}': {e}", path.display())))?;

    let rules = definitions
        .into_iter()
        .map(|definition| {
            GrammarRule::try_from(definition).map_err(|e| match e {
                KotogramError::Config(msg) => {
                    KotogramError::config(format!("{}: {msg}", path.display()))
                }
                other => other,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    debug!("Loaded {} rule(s) from {}", rules.len(), path.display());
    Ok(rules)
}

/// JSON files of `dir`, sorted by file name.
pub fn rule_files<P: AsRef<Path>>(dir: P) -> Result<Vec<PathBuf>> {
    let dir = dir.as_ref();
    if !dir.is_dir() {
        return Err(KotogramError::invalid_argument(format!(
            "Rule directory '{}' does not exist",
            dir.display()
        )));
    }

    let mut files = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_file() && path.extension().is_some_and(|ext| ext == "json") {
            files.push(path);
        }
    }
    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(files)
}

/// Load every rule file of `dir`.
pub fn load_rules_from_directory<P: AsRef<Path>>(dir: P) -> Result<Vec<GrammarRule>> {
    let dir = dir.as_ref();
    let files = rule_files(dir)?;
    if files.is_empty() {
        warn!("No rule files found in {}", dir.display());
    }

    let mut rules = Vec::new();
    for file in files {
        rules.extend(load_rule_file(&file)?);
    }
    debug!("Loaded {} rule(s) from directory {}", rules.len(), dir.display());
    Ok(rules)
}

/// Write each rule to `dir` as `000.json`, `001.json`, ... and return the
/// written paths. The directory is created if needed.
pub fn save_rules_to_directory<'a, P, I>(dir: P, rules: I) -> Result<Vec<PathBuf>>
where
    P: AsRef<Path>,
    I: IntoIterator<Item = &'a GrammarRule>,
{
    let dir = dir.as_ref();
    fs::create_dir_all(dir)?;

    let mut written = Vec::new();
    for (i, rule) in rules.into_iter().enumerate() {
        let path = dir.join(format!("{i:03}.json"));
        let json = serde_json::to_string_pretty(&RuleDefinition::from(rule))?;
        fs::write(&path, json)?;
        debug!("Saved rule '{}' to {}", rule.name(), path.display());
        written.push(path);
    }
    Ok(written)
}
