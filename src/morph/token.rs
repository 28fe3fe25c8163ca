//! Morphological tokens consumed by the grammar matcher.
//!
//! A [`MorphToken`] is one word of a sentence as a morphological analyzer
//! reports it. The matcher only reads tokens; it never creates or edits them.
//!
//! # Examples
//!
//! ```
//! use kotogram::morph::{InflectionForm, InflectionType, MorphToken, PartOfSpeech};
//!
//! let token = MorphToken::new("読ん", PartOfSpeech::Verb)
//!     .with_lemma("読む")
//!     .with_inflection(InflectionType::GodanMa, InflectionForm::ContinuativeTa);
//!
//! assert!(token.is_verb());
//! assert_eq!(token.lemma, "読む");
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::morph::tags::{InflectionForm, InflectionType, PartOfSpeech, PosDetail};

/// A single analyzed word.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MorphToken {
    /// Surface form as it appears in the text (表層形)
    pub surface: String,

    /// Dictionary form (原形)
    #[serde(alias = "base_form")]
    pub lemma: String,

    /// Part of speech (品詞)
    pub part_of_speech: PartOfSpeech,

    /// Up to three sub-classifications (品詞細分類1-3); unused slots are `Unset`
    #[serde(default)]
    pub pos_detail: [PosDetail; 3],

    /// Conjugation class (活用型)
    #[serde(default, alias = "infl_type")]
    pub inflection_type: InflectionType,

    /// Conjugated form (活用形)
    #[serde(default, alias = "infl_form")]
    pub inflection_form: InflectionForm,

    /// Reading (読み)
    #[serde(default)]
    pub reading: String,

    /// Pronunciation (発音)
    #[serde(default)]
    pub phonetic: String,
}

impl MorphToken {
    /// Create a token whose lemma equals its surface and whose other tags are unset.
    pub fn new<S: Into<String>>(surface: S, part_of_speech: PartOfSpeech) -> Self {
        let surface = surface.into();
        MorphToken {
            lemma: surface.clone(),
            surface,
            part_of_speech,
            pos_detail: [PosDetail::Unset; 3],
            inflection_type: InflectionType::Unset,
            inflection_form: InflectionForm::Unset,
            reading: String::new(),
            phonetic: String::new(),
        }
    }

    /// Set the dictionary form.
    pub fn with_lemma<S: Into<String>>(mut self, lemma: S) -> Self {
        self.lemma = lemma.into();
        self
    }

    /// Set the sub-classification slots. Missing slots stay `Unset`.
    pub fn with_details(mut self, details: &[PosDetail]) -> Self {
        self.pos_detail = [PosDetail::Unset; 3];
        for (slot, detail) in self.pos_detail.iter_mut().zip(details) {
            *slot = *detail;
        }
        self
    }

    /// Set the conjugation class and form.
    pub fn with_inflection(mut self, inflection_type: InflectionType, form: InflectionForm) -> Self {
        self.inflection_type = inflection_type;
        self.inflection_form = form;
        self
    }

    /// Set reading and pronunciation.
    pub fn with_reading<S: Into<String>>(mut self, reading: S, phonetic: S) -> Self {
        self.reading = reading.into();
        self.phonetic = phonetic.into();
        self
    }

    /// Whether any of the three detail slots equals `detail`.
    pub fn has_detail(&self, detail: PosDetail) -> bool {
        self.pos_detail.contains(&detail)
    }

    pub fn is_noun(&self) -> bool {
        self.part_of_speech == PartOfSpeech::Noun
    }

    pub fn is_verb(&self) -> bool {
        self.part_of_speech == PartOfSpeech::Verb
    }

    pub fn is_particle(&self) -> bool {
        self.part_of_speech == PartOfSpeech::Particle
    }

    pub fn is_symbol(&self) -> bool {
        self.part_of_speech == PartOfSpeech::Symbol
    }

    pub fn is_auxiliary_verb(&self) -> bool {
        self.part_of_speech == PartOfSpeech::AuxiliaryVerb
    }
}

impl fmt::Display for MorphToken {
    /// `読ん（読む）【動詞】「ヨン・ヨン」自立・五段・マ行・連用タ接続`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.surface)?;
        if self.lemma != self.surface {
            write!(f, "（{}）", self.lemma)?;
        }
        write!(f, "【{}】", self.part_of_speech)?;
        if !self.is_symbol() {
            write!(f, "「{}・{}」", self.reading, self.phonetic)?;
        }

        let details: Vec<&str> = self
            .pos_detail
            .iter()
            .filter(|d| !d.is_unset())
            .map(|d| d.label())
            .chain(
                [self.inflection_type.label(), self.inflection_form.label()]
                    .into_iter()
                    .filter(|label| *label != "*"),
            )
            .collect();
        write!(f, "{}", details.join("・"))
    }
}
