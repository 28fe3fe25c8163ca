//! Morphological tokens: the input side of grammar matching.
//!
//! This module defines the word-level records the grammar engine reads and
//! the tag sets they are classified with. Producing tokens from raw text is
//! the job of an external analyzer; see [`tokenizer::MorphTokenizer`].

pub mod tags;
pub mod token;
pub mod tokenizer;

pub use tags::{InflectionForm, InflectionType, PartOfSpeech, PosDetail};
pub use token::MorphToken;
pub use tokenizer::{FeatureLineTokenizer, MorphTokenizer};
