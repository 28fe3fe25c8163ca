//! Pattern fragments shared by many rules.
//!
//! Each function returns a fresh `Vec` so rules can extend it:
//!
//! ```
//! use kotogram::grammar::{common, GrammarRule, TokenPattern};
//!
//! let mut patterns = common::noun_no();
//! patterns.push(TokenPattern::value("うちに"));
//! let rule = GrammarRule::single("名詞＋のうちに", patterns).unwrap();
//! assert_eq!(rule.sequences()[0].len(), 3);
//! ```

use crate::grammar::pattern::TokenPattern;
use crate::morph::tags::{InflectionForm, InflectionType, PartOfSpeech, PosDetail};

/// 動詞普通形 / い形容詞普通形, optionally negated with ない.
pub fn verb_or_i_adjective_plain() -> Vec<TokenPattern> {
    let i_adjective = TokenPattern::pos(PartOfSpeech::Adjective)
        .and_inflection_type(InflectionType::AdjectiveIDan)
        .or(TokenPattern::pos(PartOfSpeech::Adjective)
            .and_inflection_type(InflectionType::AdjectiveAuo));
    vec![
        TokenPattern::pos(PartOfSpeech::Verb).or(i_adjective),
        TokenPattern::value("ない").optional(),
    ]
}

// 形容動詞語幹 or ナイ形容詞語幹
fn na_adjective_stem() -> TokenPattern {
    TokenPattern::pos(PartOfSpeech::Noun)
        .and_detail(PosDetail::AdjectivalNounStem)
        .or(TokenPattern::pos(PartOfSpeech::Noun).and_detail(PosDetail::NaiAdjectiveStem))
}

/// な形容詞語幹 + な
pub fn na_adjective_stem_na() -> Vec<TokenPattern> {
    vec![na_adjective_stem(), TokenPattern::value("な")]
}

/// な形容詞語幹 + な / である
pub fn na_adjective_stem_na_or_dearu() -> Vec<TokenPattern> {
    vec![
        na_adjective_stem(),
        TokenPattern::value("な").or(TokenPattern::value("で")),
        TokenPattern::value("ある").optional(),
    ]
}

/// 名詞 + の
pub fn noun_no() -> Vec<TokenPattern> {
    vec![TokenPattern::pos(PartOfSpeech::Noun), TokenPattern::value("の")]
}

/// 名詞 + の / である
pub fn noun_no_or_dearu() -> Vec<TokenPattern> {
    vec![
        TokenPattern::pos(PartOfSpeech::Noun),
        TokenPattern::value("の").or(TokenPattern::value("で")),
        TokenPattern::value("ある").optional(),
    ]
}

/// 動詞辞書形
pub fn verb_basic() -> Vec<TokenPattern> {
    vec![TokenPattern::pos(PartOfSpeech::Verb).and_inflection_form(InflectionForm::Basic)]
}

pub fn verb_ta() -> Vec<TokenPattern> {
    vec![TokenPattern::pos(PartOfSpeech::Verb), TokenPattern::value("た")]
}

pub fn verb_nai() -> Vec<TokenPattern> {
    vec![TokenPattern::pos(PartOfSpeech::Verb), TokenPattern::value("ない")]
}

/// 動詞ます形 (the 連用形 stem)
pub fn verb_masu() -> Vec<TokenPattern> {
    vec![TokenPattern::pos(PartOfSpeech::Verb).and_inflection_form(InflectionForm::Continuative)]
}

/// 数量詞: a numeral followed by a counter.
pub fn quantifier() -> Vec<TokenPattern> {
    vec![
        TokenPattern::pos(PartOfSpeech::Noun).and_detail(PosDetail::Numeral),
        TokenPattern::pos(PartOfSpeech::Noun).and_detail(PosDetail::Counter),
    ]
}
