//! Single-token patterns.
//!
//! A [`TokenPattern`] is one element of a grammar construction. What kind of
//! element it is (a predicate on one token, an arbitrary single token, a
//! variable-length gap, or a zero-width placeholder) is fixed when the pattern
//! is built and stored in [`PatternKind`]; the matcher dispatches on that kind
//! instead of re-inspecting the pattern's fields for every token.
//!
//! # Examples
//!
//! ```
//! use kotogram::grammar::TokenPattern;
//! use kotogram::morph::{MorphToken, PartOfSpeech, PosDetail};
//!
//! // 形容動詞語幹 or ナイ形容詞語幹 noun
//! let stem = TokenPattern::pos(PartOfSpeech::Noun)
//!     .and_detail(PosDetail::AdjectivalNounStem)
//!     .or(TokenPattern::pos(PartOfSpeech::Noun).and_detail(PosDetail::NaiAdjectiveStem));
//!
//! let token = MorphToken::new("静か", PartOfSpeech::Noun)
//!     .with_details(&[PosDetail::AdjectivalNounStem]);
//! assert!(stem.matches(&token));
//! ```

use std::fmt;

use crate::grammar::notation::escape_value;
use crate::morph::tags::{InflectionForm, InflectionType, PartOfSpeech, PosDetail};
use crate::morph::token::MorphToken;

/// Field-level constraints on one token. Unset fields impose nothing.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct TokenConstraint {
    /// Compared against the surface form and the lemma; either may match.
    pub value: Option<String>,
    pub part_of_speech: Option<PartOfSpeech>,
    /// Matches if any of the token's three detail slots is equal.
    pub pos_detail: Option<PosDetail>,
    pub inflection_type: Option<InflectionType>,
    pub inflection_form: Option<InflectionForm>,
}

impl TokenConstraint {
    /// Whether no field is constrained.
    pub fn is_empty(&self) -> bool {
        self.value.is_none()
            && self.part_of_speech.is_none()
            && self.pos_detail.is_none()
            && self.inflection_type.is_none()
            && self.inflection_form.is_none()
    }

    /// Conjunction of every constrained field.
    pub fn matches(&self, token: &MorphToken) -> bool {
        if let Some(value) = &self.value {
            if token.surface != *value && token.lemma != *value {
                return false;
            }
        }
        if let Some(pos) = self.part_of_speech {
            if token.part_of_speech != pos {
                return false;
            }
        }
        if let Some(detail) = self.pos_detail {
            if !token.has_detail(detail) {
                return false;
            }
        }
        if let Some(infl_type) = self.inflection_type {
            if token.inflection_type != infl_type {
                return false;
            }
        }
        if let Some(form) = self.inflection_form {
            if token.inflection_form != form {
                return false;
            }
        }
        true
    }
}

/// What a pattern element does, decided once at construction.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum PatternKind {
    /// A predicate on the current token.
    ///
    /// The token matches when any alternative matches it. Otherwise it must
    /// satisfy `constraint`; an empty constraint next to alternatives does not
    /// match on its own.
    Predicate {
        constraint: TokenConstraint,
        alternatives: Vec<TokenPattern>,
    },
    /// Exactly one arbitrary token.
    AnyToken,
    /// Zero or more arbitrary tokens, resolved by the matcher.
    Star,
    /// Always satisfied, consumes nothing.
    Placeholder,
}

/// One element of a pattern sequence.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct TokenPattern {
    kind: PatternKind,
    optional: bool,
}

impl TokenPattern {
    fn predicate(constraint: TokenConstraint) -> Self {
        TokenPattern {
            kind: PatternKind::Predicate {
                constraint,
                alternatives: Vec::new(),
            },
            optional: false,
        }
    }

    /// Literal surface form or lemma.
    pub fn value<S: Into<String>>(value: S) -> Self {
        Self::predicate(TokenConstraint {
            value: Some(value.into()),
            ..Default::default()
        })
    }

    /// Part of speech.
    pub fn pos(part_of_speech: PartOfSpeech) -> Self {
        Self::predicate(TokenConstraint {
            part_of_speech: Some(part_of_speech),
            ..Default::default()
        })
    }

    /// Part-of-speech detail in any of the three slots.
    pub fn detail(detail: PosDetail) -> Self {
        Self::predicate(TokenConstraint {
            pos_detail: Some(detail),
            ..Default::default()
        })
    }

    /// Conjugation class.
    pub fn inflection_type(inflection_type: InflectionType) -> Self {
        Self::predicate(TokenConstraint {
            inflection_type: Some(inflection_type),
            ..Default::default()
        })
    }

    /// Conjugated form.
    pub fn inflection_form(form: InflectionForm) -> Self {
        Self::predicate(TokenConstraint {
            inflection_form: Some(form),
            ..Default::default()
        })
    }

    /// Exactly one token of any kind.
    pub fn any_token() -> Self {
        TokenPattern {
            kind: PatternKind::AnyToken,
            optional: false,
        }
    }

    /// Zero or more tokens of any kind.
    pub fn star() -> Self {
        TokenPattern {
            kind: PatternKind::Star,
            optional: false,
        }
    }

    /// A zero-width element that always succeeds.
    pub fn placeholder() -> Self {
        TokenPattern {
            kind: PatternKind::Placeholder,
            optional: true,
        }
    }

    /// Build a pattern from raw fields, the way rule records describe them.
    ///
    /// A record with no constraint and no alternatives is a star when it is
    /// required and a placeholder when it is optional.
    pub fn classify(
        constraint: TokenConstraint,
        alternatives: Vec<TokenPattern>,
        optional: bool,
    ) -> Self {
        let kind = if constraint.is_empty() && alternatives.is_empty() {
            if optional {
                PatternKind::Placeholder
            } else {
                PatternKind::Star
            }
        } else {
            PatternKind::Predicate {
                constraint,
                alternatives,
            }
        };
        TokenPattern { kind, optional }
    }

    /// Mark the pattern as skippable.
    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }

    /// Add an alternative; the pattern then also matches whatever `alt` matches.
    pub fn or(mut self, alt: TokenPattern) -> Self {
        match &mut self.kind {
            PatternKind::Predicate { alternatives, .. } => alternatives.push(alt),
            kind => {
                let original = TokenPattern {
                    kind: std::mem::replace(kind, PatternKind::Placeholder),
                    optional: false,
                };
                *kind = PatternKind::Predicate {
                    constraint: TokenConstraint::default(),
                    alternatives: vec![original, alt],
                };
            }
        }
        self
    }

    pub fn and_value<S: Into<String>>(self, value: S) -> Self {
        let value = value.into();
        self.constrain(|c| c.value = Some(value))
    }

    pub fn and_pos(self, part_of_speech: PartOfSpeech) -> Self {
        self.constrain(|c| c.part_of_speech = Some(part_of_speech))
    }

    pub fn and_detail(self, detail: PosDetail) -> Self {
        self.constrain(|c| c.pos_detail = Some(detail))
    }

    pub fn and_inflection_type(self, inflection_type: InflectionType) -> Self {
        self.constrain(|c| c.inflection_type = Some(inflection_type))
    }

    pub fn and_inflection_form(self, form: InflectionForm) -> Self {
        self.constrain(|c| c.inflection_form = Some(form))
    }

    // Adding a field to a wildcard turns it into a predicate.
    fn constrain(mut self, apply: impl FnOnce(&mut TokenConstraint)) -> Self {
        match &mut self.kind {
            PatternKind::Predicate { constraint, .. } => apply(constraint),
            _ => {
                let mut constraint = TokenConstraint::default();
                apply(&mut constraint);
                self.kind = PatternKind::Predicate {
                    constraint,
                    alternatives: Vec::new(),
                };
            }
        }
        self
    }

    pub fn kind(&self) -> &PatternKind {
        &self.kind
    }

    pub fn is_optional(&self) -> bool {
        self.optional
    }

    pub fn is_star(&self) -> bool {
        matches!(self.kind, PatternKind::Star)
    }

    pub fn is_placeholder(&self) -> bool {
        matches!(self.kind, PatternKind::Placeholder)
    }

    /// Check whether `token` satisfies this pattern.
    ///
    /// Wildcards and placeholders accept every token; how many tokens they
    /// consume is up to the matcher.
    pub fn matches(&self, token: &MorphToken) -> bool {
        match &self.kind {
            PatternKind::Placeholder | PatternKind::AnyToken | PatternKind::Star => true,
            PatternKind::Predicate {
                constraint,
                alternatives,
            } => {
                if alternatives.iter().any(|alt| alt.matches(token)) {
                    return true;
                }
                if constraint.is_empty() {
                    // Only reachable with alternatives present, none of which matched.
                    return false;
                }
                constraint.matches(token)
            }
        }
    }
}

impl fmt::Display for TokenPattern {
    /// Renders the compact notation understood by [`crate::grammar::notation`].
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            PatternKind::AnyToken => f.write_str("*")?,
            PatternKind::Star => return f.write_str("**"),
            PatternKind::Placeholder => return f.write_str("_"),
            PatternKind::Predicate {
                constraint,
                alternatives,
            } => {
                let mut branches = Vec::with_capacity(alternatives.len() + 1);
                if !constraint.is_empty() {
                    branches.push(render_constraint(constraint));
                }
                branches.extend(alternatives.iter().map(|alt| {
                    let mut alt = alt.clone();
                    alt.optional = false;
                    alt.to_string()
                }));
                f.write_str(&branches.join("/"))?;
            }
        }
        if self.optional {
            f.write_str("?")?;
        }
        Ok(())
    }
}

fn render_constraint(constraint: &TokenConstraint) -> String {
    let mut parts = Vec::new();
    if let Some(value) = &constraint.value {
        parts.push(format!("value:{}", escape_value(value)));
    }
    if let Some(pos) = constraint.part_of_speech {
        parts.push(format!("pos:{pos}"));
    }
    if let Some(detail) = constraint.pos_detail {
        parts.push(format!("detail:{detail}"));
    }
    if let Some(infl_type) = constraint.inflection_type {
        parts.push(format!("type:{infl_type}"));
    }
    if let Some(form) = constraint.inflection_form {
        parts.push(format!("form:{form}"));
    }
    parts.join("&")
}
