//! Sequence matching against a token stream.
//!
//! Patterns are matched left to right with no backtracking, except for the
//! single star a sequence may contain. A star that ends the sequence takes
//! every remaining token. Any other star is resolved lazily: the rest of the
//! sequence is tried after skipping 0, 1, 2, ... tokens and the first skip
//! that lets the rest match wins, so the star always takes the shortest gap.

use std::sync::Arc;

use log::trace;

use crate::grammar::pattern::{PatternKind, TokenPattern};
use crate::grammar::rule::GrammarRule;
use crate::grammar::sequence::PatternSequence;
use crate::grammar::span::MatchSpan;
use crate::morph::token::MorphToken;

/// A successful match of one pattern sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SequenceMatch<'t> {
    pub start: usize,
    pub end: usize,
    pub tokens: &'t [MorphToken],
}

impl SequenceMatch<'_> {
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// Matches pattern sequences and rules against sentences.
///
/// The matcher holds no per-call state; one instance can serve any number of
/// threads.
#[derive(Clone, Debug)]
pub struct Matcher {
    min_span_len: usize,
}

impl Default for Matcher {
    fn default() -> Self {
        Matcher { min_span_len: 1 }
    }
}

impl Matcher {
    /// Create a matcher that reports matches of at least one token.
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop rule matches that consume fewer than `min_span_len` tokens.
    pub fn with_min_span_len(mut self, min_span_len: usize) -> Self {
        self.min_span_len = min_span_len;
        self
    }

    pub fn min_span_len(&self) -> usize {
        self.min_span_len
    }

    /// Match `sequence` against `tokens` beginning exactly at `start`.
    ///
    /// Returns `None` when the sequence does not occur there. This is the raw
    /// algorithm: a sequence made only of optional elements may produce an
    /// empty match.
    pub fn match_sequence<'t>(
        &self,
        sequence: &PatternSequence,
        tokens: &'t [MorphToken],
        start: usize,
    ) -> Option<SequenceMatch<'t>> {
        if start > tokens.len() {
            return None;
        }
        let end = match_from(sequence.patterns(), tokens, start)?;
        Some(SequenceMatch {
            start,
            end,
            tokens: &tokens[start..end],
        })
    }

    /// Try each realization of `rule` at `start` in declaration order and
    /// return the first match long enough to report.
    pub fn match_rule(
        &self,
        rule: &Arc<GrammarRule>,
        tokens: &[MorphToken],
        start: usize,
    ) -> Option<MatchSpan> {
        rule.sequences()
            .iter()
            .enumerate()
            .find_map(|(realization, sequence)| {
                let found = self.match_sequence(sequence, tokens, start)?;
                if found.len() < self.min_span_len {
                    return None;
                }
                Some(MatchSpan {
                    rule: Arc::clone(rule),
                    realization,
                    start: found.start,
                    end: found.end,
                    tokens: found.tokens.to_vec(),
                })
            })
    }

    /// Every match of `rule`, one attempt per start offset.
    ///
    /// Matches starting at different offsets may overlap; they are returned
    /// in start order without filtering.
    pub fn find_all_matches(&self, rule: &Arc<GrammarRule>, tokens: &[MorphToken]) -> Vec<MatchSpan> {
        let matches: Vec<MatchSpan> = (0..tokens.len())
            .filter_map(|start| self.match_rule(rule, tokens, start))
            .collect();
        trace!(
            "rule '{}' matched {} time(s) in {} token(s)",
            rule.name(),
            matches.len(),
            tokens.len()
        );
        matches
    }
}

/// Match `patterns` at `pos`, returning the end of the match.
fn match_from(patterns: &[TokenPattern], tokens: &[MorphToken], mut pos: usize) -> Option<usize> {
    for (i, pattern) in patterns.iter().enumerate() {
        match pattern.kind() {
            PatternKind::Star => {
                let rest = &patterns[i + 1..];
                if rest.is_empty() {
                    return Some(tokens.len());
                }
                return (pos..=tokens.len()).find_map(|from| match_from(rest, tokens, from));
            }
            PatternKind::Placeholder => continue,
            PatternKind::AnyToken | PatternKind::Predicate { .. } => {}
        }

        match tokens.get(pos) {
            Some(token) if pattern.matches(token) => pos += 1,
            _ if pattern.is_optional() => {}
            _ => return None,
        }
    }
    Some(pos)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::morph::tags::{PartOfSpeech, PosDetail};

    fn tokens(items: &[(&str, PartOfSpeech)]) -> Vec<MorphToken> {
        items
            .iter()
            .map(|(surface, pos)| {
                let token = MorphToken::new(*surface, *pos);
                if *pos == PartOfSpeech::Noun {
                    token.with_details(&[PosDetail::General])
                } else {
                    token
                }
            })
            .collect()
    }

    fn particles(surfaces: &[&str]) -> Vec<MorphToken> {
        surfaces
            .iter()
            .map(|s| MorphToken::new(*s, PartOfSpeech::Particle))
            .collect()
    }

    fn sequence(patterns: Vec<TokenPattern>) -> PatternSequence {
        PatternSequence::new(patterns).unwrap()
    }

    fn rule(name: &str, sequences: Vec<PatternSequence>) -> Arc<GrammarRule> {
        Arc::new(GrammarRule::new(name, sequences).unwrap())
    }

    #[test]
    fn test_literal_match() {
        let matcher = Matcher::new();
        let seq = sequence(vec![TokenPattern::value("間")]);

        let input = tokens(&[("間", PartOfSpeech::Noun)]);
        let found = matcher.match_sequence(&seq, &input, 0).unwrap();
        assert_eq!((found.start, found.end), (0, 1));

        assert!(matcher
            .match_sequence(&seq, &tokens(&[("上", PartOfSpeech::Noun)]), 0)
            .is_none());
    }

    #[test]
    fn test_optional_trailing_pattern() {
        let matcher = Matcher::new();
        let seq = sequence(vec![
            TokenPattern::pos(PartOfSpeech::Noun),
            TokenPattern::value("の"),
            TokenPattern::value("間"),
            TokenPattern::value("に").optional(),
        ]);

        let without = tokens(&[
            ("講演", PartOfSpeech::Noun),
            ("の", PartOfSpeech::Particle),
            ("間", PartOfSpeech::Noun),
        ]);
        let found = matcher.match_sequence(&seq, &without, 0).unwrap();
        assert_eq!((found.start, found.end), (0, 3));

        let with = tokens(&[
            ("講演", PartOfSpeech::Noun),
            ("の", PartOfSpeech::Particle),
            ("間", PartOfSpeech::Noun),
            ("に", PartOfSpeech::Particle),
        ]);
        let found = matcher.match_sequence(&seq, &with, 0).unwrap();
        assert_eq!((found.start, found.end), (0, 4));
    }

    #[test]
    fn test_optional_middle_pattern_does_not_consume_on_mismatch() {
        let matcher = Matcher::new();
        let seq = sequence(vec![
            TokenPattern::pos(PartOfSpeech::Noun),
            TokenPattern::value("で").optional(),
            TokenPattern::value("ある"),
        ]);
        let input = tokens(&[("学生", PartOfSpeech::Noun), ("ある", PartOfSpeech::Verb)]);
        let found = matcher.match_sequence(&seq, &input, 0).unwrap();
        assert_eq!(found.len(), 2);
    }

    #[test]
    fn test_no_partial_credit() {
        let matcher = Matcher::new();
        let seq = sequence(vec![
            TokenPattern::value("の"),
            TokenPattern::value("間"),
        ]);
        assert!(matcher.match_sequence(&seq, &particles(&["の"]), 0).is_none());
        assert!(matcher.match_sequence(&seq, &particles(&["の", "上"]), 0).is_none());
    }

    #[test]
    fn test_any_token_cardinality() {
        let matcher = Matcher::new();
        let seq = sequence(vec![
            TokenPattern::value("から"),
            TokenPattern::any_token(),
            TokenPattern::value("です"),
        ]);

        let input = particles(&["から", "何か", "です"]);
        let found = matcher.match_sequence(&seq, &input, 0).unwrap();
        assert_eq!(found.len(), 3);

        assert!(matcher
            .match_sequence(&seq, &particles(&["から", "です"]), 0)
            .is_none());
        assert!(matcher
            .match_sequence(&seq, &particles(&["から", "A", "B", "です"]), 0)
            .is_none());
    }

    #[test]
    fn test_optional_any_token_at_end_of_input() {
        let matcher = Matcher::new();
        let seq = sequence(vec![TokenPattern::value("から"), TokenPattern::any_token().optional()]);
        let input = particles(&["から"]);
        let found = matcher.match_sequence(&seq, &input, 0).unwrap();
        assert_eq!(found.len(), 1);

        let required = sequence(vec![TokenPattern::value("から"), TokenPattern::any_token()]);
        assert!(matcher.match_sequence(&required, &input, 0).is_none());
    }

    #[test]
    fn test_star_zero_one_many() {
        let matcher = Matcher::new();
        let seq = sequence(vec![
            TokenPattern::value("から"),
            TokenPattern::star(),
            TokenPattern::value("です"),
        ]);

        for (input, expected) in [
            (vec!["から", "です"], 2),
            (vec!["から", "何か", "です"], 3),
            (vec!["から", "A", "B", "C", "です"], 5),
        ] {
            let input = particles(&input);
            let found = matcher.match_sequence(&seq, &input, 0).unwrap();
            assert_eq!(found.len(), expected);
            assert_eq!(found.tokens.len(), expected);
        }
    }

    #[test]
    fn test_star_at_end_consumes_everything() {
        let matcher = Matcher::new();
        let seq = sequence(vec![TokenPattern::value("から"), TokenPattern::star()]);
        let input = particles(&["から", "A", "B", "C"]);
        let found = matcher.match_sequence(&seq, &input, 0).unwrap();
        assert_eq!((found.start, found.end), (0, 4));
        assert_eq!(found.tokens[3].surface, "C");
    }

    #[test]
    fn test_star_takes_shortest_valid_gap() {
        let matcher = Matcher::new();
        let seq = sequence(vec![
            TokenPattern::value("から"),
            TokenPattern::star(),
            TokenPattern::pos(PartOfSpeech::Noun),
            TokenPattern::value("です"),
        ]);
        let input = tokens(&[
            ("から", PartOfSpeech::Particle),
            ("名詞1", PartOfSpeech::Noun),
            ("動詞", PartOfSpeech::Verb),
            ("名詞2", PartOfSpeech::Noun),
            ("です", PartOfSpeech::AuxiliaryVerb),
        ]);

        let found = matcher.match_sequence(&seq, &input, 0).unwrap();
        assert_eq!(found.len(), 5);
        let surfaces: Vec<&str> = found.tokens.iter().map(|t| t.surface.as_str()).collect();
        assert_eq!(surfaces, vec!["から", "名詞1", "動詞", "名詞2", "です"]);
    }

    #[test]
    fn test_star_is_lazy() {
        let matcher = Matcher::new();
        let seq = sequence(vec![
            TokenPattern::value("A"),
            TokenPattern::star(),
            TokenPattern::value("B"),
        ]);
        let input = particles(&["A", "x", "B", "y", "B"]);
        let found = matcher.match_sequence(&seq, &input, 0).unwrap();
        assert_eq!(found.end, 3);
    }

    #[test]
    fn test_star_fails_when_rest_cannot_complete() {
        let matcher = Matcher::new();
        let seq = sequence(vec![
            TokenPattern::value("から"),
            TokenPattern::star(),
            TokenPattern::pos(PartOfSpeech::Noun),
            TokenPattern::value("です"),
        ]);
        let input = tokens(&[
            ("から", PartOfSpeech::Particle),
            ("名詞", PartOfSpeech::Noun),
            ("動詞", PartOfSpeech::Verb),
        ]);
        assert!(matcher.match_sequence(&seq, &input, 0).is_none());
    }

    #[test]
    fn test_star_followed_by_compound_noun() {
        let matcher = Matcher::new();
        let seq = sequence(vec![
            TokenPattern::pos(PartOfSpeech::Noun),
            TokenPattern::value("から"),
            TokenPattern::star(),
            TokenPattern::pos(PartOfSpeech::Noun),
            TokenPattern::value("にかけて"),
        ]);
        let input = tokens(&[
            ("月", PartOfSpeech::Noun),
            ("から", PartOfSpeech::Particle),
            ("3", PartOfSpeech::Noun),
            ("月", PartOfSpeech::Noun),
            ("にかけて", PartOfSpeech::Particle),
        ]);
        assert_eq!(matcher.match_sequence(&seq, &input, 0).unwrap().len(), 5);
    }

    #[test]
    fn test_placeholder_is_zero_width() {
        let matcher = Matcher::new();
        let seq = sequence(vec![
            TokenPattern::value("の"),
            TokenPattern::placeholder(),
            TokenPattern::value("間"),
        ]);
        let input = particles(&["の", "間"]);
        let found = matcher.match_sequence(&seq, &input, 0).unwrap();
        assert_eq!(found.len(), 2);
    }

    #[test]
    fn test_start_offsets() {
        let matcher = Matcher::new();
        let seq = sequence(vec![TokenPattern::value("の")]);
        let input = particles(&["A", "の"]);

        assert!(matcher.match_sequence(&seq, &input, 0).is_none());
        let found = matcher.match_sequence(&seq, &input, 1).unwrap();
        assert_eq!((found.start, found.end), (1, 2));
        assert!(matcher.match_sequence(&seq, &input, 2).is_none());
        assert!(matcher.match_sequence(&seq, &input, 7).is_none());
    }

    #[test]
    fn test_empty_input() {
        let matcher = Matcher::new();
        let r = rule("r", vec![sequence(vec![TokenPattern::star()])]);
        assert!(matcher.find_all_matches(&r, &[]).is_empty());
        assert!(matcher.match_rule(&r, &[], 0).is_none());
    }

    #[test]
    fn test_match_rule_tries_realizations_in_order() {
        let matcher = Matcher::new();
        let r = rule(
            "〜間",
            vec![
                sequence(vec![TokenPattern::pos(PartOfSpeech::Verb), TokenPattern::value("間")]),
                sequence(vec![
                    TokenPattern::pos(PartOfSpeech::Noun),
                    TokenPattern::value("の"),
                    TokenPattern::value("間"),
                ]),
            ],
        );
        let input = tokens(&[
            ("夏休み", PartOfSpeech::Noun),
            ("の", PartOfSpeech::Particle),
            ("間", PartOfSpeech::Noun),
        ]);

        let found = matcher.match_rule(&r, &input, 0).unwrap();
        assert_eq!(found.realization, 1);
        assert_eq!(found.rule_name(), "〜間");
        assert_eq!(found.range(), 0..3);
    }

    #[test]
    fn test_zero_width_matches_are_not_reported() {
        let r = rule("optional", vec![sequence(vec![TokenPattern::value("に").optional()])]);
        let input = particles(&["A", "に"]);

        let matches = Matcher::new().find_all_matches(&r, &input);
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].range(), 1..2);

        let matches = Matcher::new().with_min_span_len(0).find_all_matches(&r, &input);
        assert_eq!(matches.len(), 2);
        assert!(matches[0].is_empty());
    }

    #[test]
    fn test_find_all_matches_keeps_overlaps() {
        let r = rule(
            "star",
            vec![sequence(vec![TokenPattern::pos(PartOfSpeech::Noun), TokenPattern::star()])],
        );
        let input = tokens(&[
            ("A", PartOfSpeech::Noun),
            ("B", PartOfSpeech::Noun),
            ("c", PartOfSpeech::Particle),
        ]);
        let matches = Matcher::new().find_all_matches(&r, &input);
        let ranges: Vec<_> = matches.iter().map(|m| m.range()).collect();
        assert_eq!(ranges, vec![0..3, 1..3]);
    }
}
