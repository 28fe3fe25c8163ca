//! Serializable rule records.
//!
//! These mirror the JSON files rules are stored in. A record describes a
//! pattern by its raw fields; turning it into a [`TokenPattern`] decides the
//! pattern's kind once, and a pattern with no constraints is read as a star
//! when required and as a placeholder when optional.

use serde::{Deserialize, Serialize};

use crate::error::{KotogramError, Result};
use crate::grammar::pattern::{PatternKind, TokenConstraint, TokenPattern};
use crate::grammar::rule::GrammarRule;
use crate::grammar::sequence::PatternSequence;
use crate::morph::tags::{InflectionForm, InflectionType, PartOfSpeech, PosDetail};

/// Explicit wildcard kind of a pattern record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WildcardKind {
    /// Exactly one token.
    One,
    /// Zero or more tokens.
    Many,
    /// Zero-width placeholder.
    Zero,
}

/// One pattern element as stored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatternDefinition {
    #[serde(default)]
    pub value: Option<String>,
    #[serde(default)]
    pub part_of_speech: Option<PartOfSpeech>,
    #[serde(default)]
    pub pos_detail: Option<PosDetail>,
    #[serde(default)]
    pub infl_type: Option<InflectionType>,
    #[serde(default)]
    pub infl_form: Option<InflectionForm>,
    #[serde(default)]
    pub alternatives: Vec<PatternDefinition>,
    #[serde(default)]
    pub optional: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wildcard: Option<WildcardKind>,
}

/// One realization as stored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SequenceDefinition {
    pub patterns: Vec<PatternDefinition>,
}

/// A whole rule as stored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleDefinition {
    pub name: String,
    pub patterns: Vec<SequenceDefinition>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub index: Option<u32>,
    #[serde(default)]
    pub examples: Vec<String>,
}

impl PatternDefinition {
    fn constraint(&self) -> TokenConstraint {
        TokenConstraint {
            value: self.value.clone(),
            part_of_speech: self.part_of_speech,
            pos_detail: self.pos_detail,
            inflection_type: self.infl_type,
            inflection_form: self.infl_form,
        }
    }

    /// Build the pattern this record describes.
    pub fn to_pattern(&self) -> Result<TokenPattern> {
        let constraint = self.constraint();

        if let Some(kind) = self.wildcard {
            if !constraint.is_empty() || !self.alternatives.is_empty() {
                return Err(KotogramError::config(format!(
                    "Wildcard pattern ({kind:?}) must not carry constraints or alternatives"
                )));
            }
            let pattern = match kind {
                WildcardKind::One => TokenPattern::any_token(),
                WildcardKind::Many => return Ok(TokenPattern::star()),
                WildcardKind::Zero => return Ok(TokenPattern::placeholder()),
            };
            return Ok(if self.optional { pattern.optional() } else { pattern });
        }

        let alternatives = self
            .alternatives
            .iter()
            .map(PatternDefinition::to_pattern)
            .collect::<Result<Vec<_>>>()?;
        Ok(TokenPattern::classify(constraint, alternatives, self.optional))
    }
}

impl From<&TokenPattern> for PatternDefinition {
    fn from(pattern: &TokenPattern) -> Self {
        let optional = pattern.is_optional();
        match pattern.kind() {
            PatternKind::Predicate {
                constraint,
                alternatives,
            } => PatternDefinition {
                value: constraint.value.clone(),
                part_of_speech: constraint.part_of_speech,
                pos_detail: constraint.pos_detail,
                infl_type: constraint.inflection_type,
                infl_form: constraint.inflection_form,
                alternatives: alternatives.iter().map(PatternDefinition::from).collect(),
                optional,
                wildcard: None,
            },
            PatternKind::AnyToken => PatternDefinition {
                optional,
                wildcard: Some(WildcardKind::One),
                ..Default::default()
            },
            // Stars and placeholders are written as empty records.
            PatternKind::Star => PatternDefinition::default(),
            PatternKind::Placeholder => PatternDefinition {
                optional: true,
                ..Default::default()
            },
        }
    }
}

impl TryFrom<&SequenceDefinition> for PatternSequence {
    type Error = KotogramError;

    fn try_from(definition: &SequenceDefinition) -> Result<Self> {
        let patterns = definition
            .patterns
            .iter()
            .map(PatternDefinition::to_pattern)
            .collect::<Result<Vec<_>>>()?;
        PatternSequence::new(patterns)
    }
}

impl From<&PatternSequence> for SequenceDefinition {
    fn from(sequence: &PatternSequence) -> Self {
        SequenceDefinition {
            patterns: sequence.iter().map(PatternDefinition::from).collect(),
        }
    }
}

impl TryFrom<RuleDefinition> for GrammarRule {
    type Error = KotogramError;

    fn try_from(definition: RuleDefinition) -> Result<Self> {
        let name = definition.name;
        let sequences = definition
            .patterns
            .iter()
            .enumerate()
            .map(|(i, sequence)| {
                PatternSequence::try_from(sequence).map_err(|e| match e {
                    KotogramError::Config(msg) => KotogramError::config(format!(
                        "Grammar rule '{name}', realization {i}: {msg}"
                    )),
                    other => other,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        let mut rule = GrammarRule::new(name, sequences)?
            .with_description(definition.description)
            .with_examples(definition.examples);
        if let Some(category) = definition.category {
            rule = rule.with_category(category);
        }
        if let Some(index) = definition.index {
            rule = rule.with_index(index);
        }
        Ok(rule)
    }
}

impl From<&GrammarRule> for RuleDefinition {
    fn from(rule: &GrammarRule) -> Self {
        RuleDefinition {
            name: rule.name().to_string(),
            patterns: rule.sequences().iter().map(SequenceDefinition::from).collect(),
            description: rule.description().to_string(),
            category: rule.metadata().category.clone(),
            index: rule.metadata().index,
            examples: rule.examples().to_vec(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_stored_rule() {
        let json = r#"{
            "name": "たとえ/たとい〜ても",
            "patterns": [{
                "patterns": [
                    {"value": "たとえ", "part_of_speech": null, "pos_detail": null,
                     "infl_type": null, "infl_form": null,
                     "alternatives": [{"value": "たとい"}], "optional": false},
                    {},
                    {"value": "て"},
                    {"value": "も"}
                ]
            }, {
                "patterns": [
                    {"value": "たとえ", "alternatives": [{"value": "たとい"}]},
                    {"part_of_speech": "動詞", "infl_form": "連用テ接続"},
                    {"value": "て"},
                    {"value": "も", "optional": true}
                ]
            }],
            "description": "たとえ/たとい + [任意の語] + て + も",
            "category": "N3",
            "index": 47,
            "examples": ["たとえ高くても、必要なものは買わなければならない。"]
        }"#;

        let definition: RuleDefinition = serde_json::from_str(json).unwrap();
        let rule = GrammarRule::try_from(definition).unwrap();

        assert_eq!(rule.name(), "たとえ/たとい〜ても");
        assert_eq!(rule.label().as_deref(), Some("N3-047"));
        let sequence = &rule.sequences()[0];
        assert_eq!(sequence.star_position(), Some(1));
        assert_eq!(sequence.to_string(), "value:たとえ/value:たとい ** value:て value:も");
        let sequence = &rule.sequences()[1];
        assert!(sequence[3].is_optional());
        assert_eq!(
            sequence.to_string(),
            "value:たとえ/value:たとい pos:動詞&form:連用テ接続 value:て value:も?"
        );
    }

    #[test]
    fn test_structural_inference() {
        let star = PatternDefinition::default().to_pattern().unwrap();
        assert!(star.is_star());

        let placeholder = PatternDefinition {
            optional: true,
            ..Default::default()
        }
        .to_pattern()
        .unwrap();
        assert!(placeholder.is_placeholder());
    }

    #[test]
    fn test_explicit_wildcards() {
        let one = PatternDefinition {
            wildcard: Some(WildcardKind::One),
            ..Default::default()
        };
        assert_eq!(one.to_pattern().unwrap(), TokenPattern::any_token());

        let zero = PatternDefinition {
            wildcard: Some(WildcardKind::Zero),
            ..Default::default()
        };
        assert!(zero.to_pattern().unwrap().is_placeholder());

        let invalid = PatternDefinition {
            value: Some("に".to_string()),
            wildcard: Some(WildcardKind::Many),
            ..Default::default()
        };
        assert!(invalid.to_pattern().unwrap_err().is_config());
    }

    #[test]
    fn test_two_stars_names_rule() {
        let definition = RuleDefinition {
            name: "broken".to_string(),
            patterns: vec![SequenceDefinition {
                patterns: vec![
                    PatternDefinition::default(),
                    PatternDefinition {
                        value: Some("は".to_string()),
                        ..Default::default()
                    },
                    PatternDefinition::default(),
                ],
            }],
            ..Default::default()
        };
        let err = GrammarRule::try_from(definition).unwrap_err();
        assert!(err.is_config());
        assert!(err.to_string().contains("'broken', realization 0"));
    }

    #[test]
    fn test_rule_without_patterns_rejected() {
        let definition = RuleDefinition {
            name: "empty".to_string(),
            ..Default::default()
        };
        assert!(GrammarRule::try_from(definition).unwrap_err().is_config());
    }

    #[test]
    fn test_definition_from_rule_preserves_kinds() {
        let rule = GrammarRule::single(
            "kinds",
            vec![
                TokenPattern::value("から"),
                TokenPattern::any_token().optional(),
                TokenPattern::placeholder(),
                TokenPattern::star(),
                TokenPattern::pos(PartOfSpeech::Noun).or(TokenPattern::value("だ")),
            ],
        )
        .unwrap()
        .with_category("N4");

        let definition = RuleDefinition::from(&rule);
        assert_eq!(definition.patterns[0].patterns[1].wildcard, Some(WildcardKind::One));
        assert_eq!(definition.patterns[0].patterns[3], PatternDefinition::default());

        let json = serde_json::to_string(&definition).unwrap();
        let restored = GrammarRule::try_from(serde_json::from_str::<RuleDefinition>(&json).unwrap()).unwrap();
        assert_eq!(restored, rule);
    }
}
