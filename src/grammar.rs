//! Grammar pattern matching.
//!
//! A [`GrammarRule`] names a construction and lists its realizations as
//! [`PatternSequence`]s of [`TokenPattern`]s. The [`Matcher`] finds where a
//! rule occurs in a tokenized sentence, and the [`RuleRegistry`] runs every
//! registered rule and reduces overlapping matches to a clean result.
//!
//! ```
//! use kotogram::grammar::{GrammarRule, RuleRegistry, TokenPattern};
//! use kotogram::morph::{MorphToken, PartOfSpeech};
//!
//! let mut registry = RuleRegistry::new();
//! registry
//!     .add_rule(
//!         GrammarRule::single(
//!             "〜だらけ",
//!             vec![TokenPattern::pos(PartOfSpeech::Noun), TokenPattern::value("だらけ")],
//!         )
//!         .unwrap(),
//!     )
//!     .unwrap();
//!
//! let tokens = vec![
//!     MorphToken::new("埃", PartOfSpeech::Noun),
//!     MorphToken::new("だらけ", PartOfSpeech::Noun),
//!     MorphToken::new("だ", PartOfSpeech::AuxiliaryVerb),
//! ];
//! let matches = registry.match_all(&tokens);
//! assert_eq!(matches.len(), 1);
//! assert_eq!(matches[0].range(), 0..2);
//! ```

pub mod common;
pub mod matcher;
pub mod notation;
pub mod overlap;
pub mod pattern;
pub mod registry;
pub mod rule;
pub mod sequence;
pub mod span;

pub use matcher::{Matcher, SequenceMatch};
pub use overlap::resolve_overlaps;
pub use pattern::{PatternKind, TokenConstraint, TokenPattern};
pub use registry::{RuleMatches, RuleRegistry};
pub use rule::{GrammarRule, RuleMetadata};
pub use sequence::PatternSequence;
pub use span::MatchSpan;
