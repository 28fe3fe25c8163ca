//! Match results.

use std::ops::Range;
use std::sync::Arc;

use serde::ser::{Serialize, SerializeStruct, Serializer};

use crate::grammar::rule::GrammarRule;
use crate::morph::token::MorphToken;

/// Where a rule occurs in a sentence.
///
/// `start` is inclusive and `end` exclusive; `tokens` are the tokens in that
/// range, in order. `realization` is the index of the rule's pattern sequence
/// that produced the match.
#[derive(Clone, Debug)]
pub struct MatchSpan {
    pub rule: Arc<GrammarRule>,
    pub realization: usize,
    pub start: usize,
    pub end: usize,
    pub tokens: Vec<MorphToken>,
}

impl MatchSpan {
    pub fn rule_name(&self) -> &str {
        self.rule.name()
    }

    /// Number of matched tokens.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    /// The matched text, surfaces concatenated.
    pub fn surface(&self) -> String {
        self.tokens.iter().map(|t| t.surface.as_str()).collect()
    }

    /// Whether the two token ranges intersect.
    pub fn overlaps(&self, other: &MatchSpan) -> bool {
        self.start < other.end && self.end > other.start
    }
}

impl PartialEq for MatchSpan {
    fn eq(&self, other: &Self) -> bool {
        self.rule.name() == other.rule.name()
            && self.realization == other.realization
            && self.start == other.start
            && self.end == other.end
            && self.tokens == other.tokens
    }
}

impl Eq for MatchSpan {}

impl Serialize for MatchSpan {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("MatchSpan", 6)?;
        state.serialize_field("rule", self.rule.name())?;
        state.serialize_field("realization", &self.realization)?;
        state.serialize_field("start", &self.start)?;
        state.serialize_field("end", &self.end)?;
        state.serialize_field("surface", &self.surface())?;
        state.serialize_field("tokens", &self.tokens)?;
        state.end()
    }
}
