//! Named grammar constructions.

use serde::{Deserialize, Serialize};

use crate::error::{KotogramError, Result};
use crate::grammar::pattern::TokenPattern;
use crate::grammar::sequence::PatternSequence;

/// Classification metadata of a rule, e.g. JLPT level `N3` and entry number.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleMetadata {
    pub category: Option<String>,
    pub index: Option<u32>,
}

/// A grammar construction with one or more alternative realizations.
///
/// Realizations are tried in declaration order. Rules are read-only once
/// built and are shared between matches through `Arc`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GrammarRule {
    name: String,
    description: String,
    metadata: RuleMetadata,
    sequences: Vec<PatternSequence>,
    examples: Vec<String>,
}

impl GrammarRule {
    /// Create a rule. The name must not be blank and at least one sequence is required.
    pub fn new<S: Into<String>>(name: S, sequences: Vec<PatternSequence>) -> Result<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(KotogramError::config("Grammar rule name is empty"));
        }
        if sequences.is_empty() {
            return Err(KotogramError::config(format!(
                "Grammar rule '{name}' has no pattern sequences"
            )));
        }

        Ok(GrammarRule {
            name,
            description: String::new(),
            metadata: RuleMetadata::default(),
            sequences,
            examples: Vec::new(),
        })
    }

    /// Create a rule with a single realization.
    pub fn single<S: Into<String>>(name: S, patterns: Vec<TokenPattern>) -> Result<Self> {
        let name = name.into();
        let sequence = PatternSequence::new(patterns).map_err(|e| match e {
            KotogramError::Config(msg) => {
                KotogramError::config(format!("Grammar rule '{name}': {msg}"))
            }
            other => other,
        })?;
        Self::new(name, vec![sequence])
    }

    pub fn with_description<S: Into<String>>(mut self, description: S) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_category<S: Into<String>>(mut self, category: S) -> Self {
        self.metadata.category = Some(category.into());
        self
    }

    pub fn with_index(mut self, index: u32) -> Self {
        self.metadata.index = Some(index);
        self
    }

    /// Attach example sentences. They document the rule and are never matched against.
    pub fn with_examples<I, S>(mut self, examples: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.examples = examples.into_iter().map(Into::into).collect();
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn metadata(&self) -> &RuleMetadata {
        &self.metadata
    }

    pub fn sequences(&self) -> &[PatternSequence] {
        &self.sequences
    }

    pub fn examples(&self) -> &[String] {
        &self.examples
    }

    /// `N3-015` style identifier built from the metadata, if both parts are set.
    pub fn label(&self) -> Option<String> {
        match (&self.metadata.category, self.metadata.index) {
            (Some(category), Some(index)) => Some(format!("{category}-{index:03}")),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::morph::tags::PartOfSpeech;

    #[test]
    fn test_rule_creation() {
        let rule = GrammarRule::single(
            "〜だらけ",
            vec![
                TokenPattern::pos(PartOfSpeech::Noun),
                TokenPattern::value("だらけ"),
            ],
        )
        .unwrap()
        .with_description("名詞 + だらけ")
        .with_category("N3")
        .with_index(52)
        .with_examples(["この部屋は何年も住んでいないので、埃だらけだ。"]);

        assert_eq!(rule.name(), "〜だらけ");
        assert_eq!(rule.description(), "名詞 + だらけ");
        assert_eq!(rule.sequences().len(), 1);
        assert_eq!(rule.examples().len(), 1);
        assert_eq!(rule.metadata().category.as_deref(), Some("N3"));
        assert_eq!(rule.label().as_deref(), Some("N3-052"));
    }

    #[test]
    fn test_blank_name_rejected() {
        let sequence = PatternSequence::new(vec![TokenPattern::value("間")]).unwrap();
        let err = GrammarRule::new("  ", vec![sequence]).unwrap_err();
        assert!(err.is_config());
    }

    #[test]
    fn test_no_sequences_rejected() {
        let err = GrammarRule::new("〜間", Vec::new()).unwrap_err();
        assert!(err.is_config());
        assert!(err.to_string().contains("〜間"));
    }

    #[test]
    fn test_single_reports_rule_name() {
        let err = GrammarRule::single(
            "broken",
            vec![
                TokenPattern::star(),
                TokenPattern::value("は"),
                TokenPattern::star(),
            ],
        )
        .unwrap_err();
        assert!(err.is_config());
        assert!(err.to_string().contains("broken"));
    }

    #[test]
    fn test_label_requires_both_parts() {
        let rule = GrammarRule::single("x", vec![TokenPattern::value("x")])
            .unwrap()
            .with_category("N4");
        assert_eq!(rule.label(), None);
    }
}
