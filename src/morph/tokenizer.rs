//! The seam between kotogram and an external morphological analyzer.
//!
//! kotogram does not analyze text itself. A [`MorphTokenizer`] hands it
//! ready-made [`MorphToken`]s; [`FeatureLineTokenizer`] is the implementation
//! used by the command line tool, which reads the line format MeCab and Janome
//! print with the IPADIC dictionary:
//!
//! ```text
//! 講演	名詞,サ変接続,*,*,*,*,講演,コウエン,コーエン
//! の	助詞,連体化,*,*,*,*,の,ノ,ノ
//! 間	名詞,副詞可能,*,*,*,*,間,アイダ,アイダ
//! EOS
//! ```

use crate::error::{KotogramError, Result};
use crate::morph::tags::{InflectionForm, InflectionType, PartOfSpeech, PosDetail};
use crate::morph::token::MorphToken;

/// Trait for sources of morphological tokens.
pub trait MorphTokenizer: Send + Sync {
    /// Turn the input into the tokens of one sentence.
    fn tokenize(&self, text: &str) -> Result<Vec<MorphToken>>;

    /// Get the name of this tokenizer (for debugging and configuration).
    fn name(&self) -> &'static str;
}

/// Reads analyzer output in the IPADIC feature line format.
#[derive(Debug, Clone, Default)]
pub struct FeatureLineTokenizer;

const SENTENCE_END: &str = "EOS";

impl FeatureLineTokenizer {
    /// Create a new feature line tokenizer.
    pub fn new() -> Self {
        FeatureLineTokenizer
    }

    /// Parse a single `surface<TAB>features` line.
    ///
    /// Returns `Ok(None)` for tokens whose surface is only whitespace; the
    /// analyzer emits those for spaces in the input and they carry no grammar.
    pub fn parse_line(&self, line: &str) -> Result<Option<MorphToken>> {
        let (surface, features) = line.split_once('\t').ok_or_else(|| {
            KotogramError::parse(format!("Missing tab separator in analyzer line: '{line}'"))
        })?;
        if surface.trim().is_empty() {
            return Ok(None);
        }

        let fields: Vec<&str> = features.split(',').collect();
        if fields.len() < 7 {
            return Err(KotogramError::parse(format!(
                "Expected at least 7 feature fields, found {} in line: '{line}'",
                fields.len()
            )));
        }

        let part_of_speech: PartOfSpeech = fields[0].parse()?;
        let pos_detail = [fields[1].parse()?, fields[2].parse()?, fields[3].parse()?];
        let inflection_type: InflectionType = fields[4].parse()?;
        let inflection_form: InflectionForm = fields[5].parse()?;

        let lemma = match fields[6] {
            "*" => surface,
            base => base,
        };
        let reading = fields.get(7).copied().unwrap_or("*");
        let phonetic = fields.get(8).copied().unwrap_or("*");

        Ok(Some(MorphToken {
            surface: surface.to_string(),
            lemma: lemma.to_string(),
            part_of_speech,
            pos_detail,
            inflection_type,
            inflection_form,
            reading: reading.to_string(),
            phonetic: phonetic.to_string(),
        }))
    }

    /// Split analyzer output into sentences at `EOS` lines.
    ///
    /// Blank lines are ignored. Trailing tokens without a closing `EOS` form
    /// the last sentence; empty sentences are dropped.
    pub fn tokenize_sentences(&self, text: &str) -> Result<Vec<Vec<MorphToken>>> {
        let mut sentences = Vec::new();
        let mut current = Vec::new();

        for (line_num, line) in text.lines().enumerate() {
            let line = line.trim_end_matches('\r');
            if line.trim().is_empty() {
                continue;
            }
            if line.trim() == SENTENCE_END {
                if !current.is_empty() {
                    sentences.push(std::mem::take(&mut current));
                }
                continue;
            }

            match self.parse_line(line) {
                Ok(Some(token)) => current.push(token),
                Ok(None) => {}
                Err(e) => {
                    return Err(KotogramError::parse(format!("line {}: {e}", line_num + 1)));
                }
            }
        }

        if !current.is_empty() {
            sentences.push(current);
        }
        Ok(sentences)
    }
}

impl MorphTokenizer for FeatureLineTokenizer {
    fn tokenize(&self, text: &str) -> Result<Vec<MorphToken>> {
        Ok(self.tokenize_sentences(text)?.into_iter().flatten().collect())
    }

    fn name(&self) -> &'static str {
        "feature_line"
    }
}
