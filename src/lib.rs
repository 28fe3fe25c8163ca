//! # kotogram
//!
//! Grammar pattern matching over morphologically tagged Japanese text.
//!
//! ## Features
//!
//! - Token patterns over surface, lemma, part of speech, detail and inflection
//! - Optional elements, alternation, single-token and variable-length wildcards
//! - Multi-rule matching with overlap resolution
//! - Rule files in JSON and a compact pattern notation
//! - Parallel matching of rules and sentences
//!
//! ## Example
//!
//! ```
//! use kotogram::prelude::*;
//!
//! let registry = default_registry().unwrap();
//! let tokens = vec![
//!     MorphToken::new("埃", PartOfSpeech::Noun),
//!     MorphToken::new("だらけ", PartOfSpeech::Noun),
//! ];
//! let matches = registry.match_all(&tokens);
//! assert_eq!(matches[0].rule_name(), "〜だらけ");
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod grammar;
pub mod morph;
pub mod rules;

pub mod prelude {
    pub use crate::config::{OverlapPolicy, RegistryConfig};
    pub use crate::error::{KotogramError, Result};
    pub use crate::grammar::{
        GrammarRule, MatchSpan, Matcher, PatternSequence, RuleRegistry, TokenPattern,
    };
    pub use crate::morph::{
        InflectionForm, InflectionType, MorphToken, MorphTokenizer, PartOfSpeech, PosDetail,
    };
    pub use crate::rules::{builtin_rules, default_registry};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
