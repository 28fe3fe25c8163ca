//! Closed tag sets attached to morphological tokens.
//!
//! Every tag carries the IPADIC label a morphological analyzer emits for it
//! (`PartOfSpeech::Noun` is `名詞`). Labels are what the tags serialize to,
//! what [`FromStr`] accepts, and what [`fmt::Display`] prints. The detail and
//! inflection tag sets have an `Unset` member labelled `*`, which is what the
//! analyzer writes for slots that do not apply to a word.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{KotogramError, Result};

macro_rules! closed_tag {
    (
        $(#[$meta:meta])*
        pub enum $name:ident : $kind:literal {
            $( $(#[$vmeta:meta])* $variant:ident => $label:literal, )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(
                $(#[$vmeta])*
                #[serde(rename = $label)]
                $variant,
            )+
        }

        impl $name {
            /// Every member of the tag set, in declaration order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// The analyzer label for this tag.
            pub fn label(&self) -> &'static str {
                match self {
                    $($name::$variant => $label,)+
                }
            }

            /// Look a tag up by its analyzer label.
            pub fn from_label(label: &str) -> Option<Self> {
                match label {
                    $($label => Some($name::$variant),)+
                    _ => None,
                }
            }

            /// Whether this is the `*` placeholder label.
            pub fn is_unset(&self) -> bool {
                self.label() == "*"
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.label())
            }
        }

        impl FromStr for $name {
            type Err = KotogramError;

            fn from_str(s: &str) -> Result<Self> {
                Self::from_label(s.trim()).ok_or_else(|| {
                    KotogramError::parse(format!("Unknown {}: '{}'", $kind, s))
                })
            }
        }
    };
}

closed_tag! {
    /// Part of speech (品詞).
    pub enum PartOfSpeech: "part of speech" {
        Noun => "名詞",
        Verb => "動詞",
        Adjective => "形容詞",
        Adverb => "副詞",
        Particle => "助詞",
        AuxiliaryVerb => "助動詞",
        Symbol => "記号",
        Prefix => "接頭詞",
        Conjunction => "接続詞",
        Interjection => "感動詞",
        Adnominal => "連体詞",
        Filler => "フィラー",
        Other => "その他",
        Unknown => "未知語",
    }
}

closed_tag! {
    /// Part-of-speech sub-classification (品詞細分類).
    ///
    /// The analyzer fills up to three of these per token; a label such as
    /// `非自立` means the same thing whichever part of speech it qualifies,
    /// so the set is shared by all parts of speech.
    pub enum PosDetail: "part of speech detail" {
        Unset => "*",
        General => "一般",
        ProperNoun => "固有名詞",
        PersonName => "人名",
        Surname => "姓",
        GivenName => "名",
        Organization => "組織",
        Region => "地域",
        Country => "国",
        Numeral => "数",
        Counter => "助数詞",
        AdverbialNoun => "副詞可能",
        SahenConnection => "サ変接続",
        AdjectivalNounStem => "形容動詞語幹",
        NaiAdjectiveStem => "ナイ形容詞語幹",
        Suffix => "接尾",
        AuxiliaryVerbStem => "助動詞語幹",
        VerbalNonIndependent => "動詞非自立的",
        Special => "特殊",
        NonIndependent => "非自立",
        Pronoun => "代名詞",
        Adverbialization => "副詞化",
        NounConnection => "名詞接続",
        Independent => "自立",
        CaseParticle => "格助詞",
        ConjunctiveParticle => "接続助詞",
        Adnominalizer => "連体化",
        SentenceFinalParticle => "終助詞",
        ParallelParticle => "並立助詞",
        BindingParticle => "係助詞",
        AdverbialParticle => "副助詞",
        InterjectionalParticle => "間投助詞",
        AdverbialParallelFinalParticle => "副助詞／並立助詞／終助詞",
        Period => "句点",
        Comma => "読点",
        Space => "空白",
        OpeningBracket => "括弧開",
        ClosingBracket => "括弧閉",
        Alphabet => "アルファベット",
        Compound => "連語",
        Quotation => "引用",
        QuotedString => "引用文字列",
        ParticleConnection => "助詞類接続",
        AdjectiveConnection => "形容詞接続",
        VerbConnection => "動詞接続",
        NumeralConnection => "数接続",
        Contraction => "縮約",
    }
}

closed_tag! {
    /// Conjugation class (活用型).
    pub enum InflectionType: "inflection type" {
        Unset => "*",
        GodanRa => "五段・ラ行",
        GodanRaAru => "五段・ラ行アル",
        GodanRaSpecial => "五段・ラ行特殊",
        GodanKaSokuon => "五段・カ行促音便",
        GodanKaSokuonYuku => "五段・カ行促音便ユク",
        GodanKaIOnbin => "五段・カ行イ音便",
        GodanGa => "五段・ガ行",
        GodanSa => "五段・サ行",
        GodanTa => "五段・タ行",
        GodanNa => "五段・ナ行",
        GodanBa => "五段・バ行",
        GodanMa => "五段・マ行",
        GodanWaSokuon => "五段・ワ行促音便",
        GodanWaUOnbin => "五段・ワ行ウ音便",
        Ichidan => "一段",
        IchidanKureru => "一段・クレル",
        KahenKuru => "カ変・クル",
        KahenKuruKanji => "カ変・来ル",
        SahenSuru => "サ変・スル",
        SahenSuffixSuru => "サ変・−スル",
        SahenSuffixZuru => "サ変・−ズル",
        KaminiDa => "上二・ダ行",
        AdjectiveIDan => "形容詞・イ段",
        AdjectiveAuo => "形容詞・アウオ段",
        AdjectiveIi => "形容詞・イイ",
        Unchanging => "不変化型",
        SpecialTa => "特殊・タ",
        SpecialDa => "特殊・ダ",
        SpecialDesu => "特殊・デス",
        SpecialMasu => "特殊・マス",
        SpecialNai => "特殊・ナイ",
        SpecialNu => "特殊・ヌ",
        SpecialTai => "特殊・タイ",
        SpecialRashii => "特殊・ラシイ",
        SpecialJa => "特殊・ジャ",
        ClassicalNari => "文語・ナリ",
        ClassicalKi => "文語・キ",
        ClassicalBeshi => "文語・ベシ",
        ClassicalGotoshi => "文語・ゴトシ",
        ClassicalRu => "文語・ル",
        ClassicalRi => "文語・リ",
        ClassicalKeri => "文語・ケリ",
        ClassicalMu => "文語・ム",
    }
}

closed_tag! {
    /// Conjugated form (活用形).
    pub enum InflectionForm: "inflection form" {
        Unset => "*",
        Basic => "基本形",
        Irrealis => "未然形",
        IrrealisU => "未然ウ接続",
        IrrealisNu => "未然ヌ接続",
        IrrealisReru => "未然レル接続",
        IrrealisSpecial => "未然特殊",
        Continuative => "連用形",
        ContinuativeTa => "連用タ接続",
        ContinuativeTe => "連用テ接続",
        ContinuativeDe => "連用デ接続",
        ContinuativeGozai => "連用ゴザイ接続",
        ContinuativeNi => "連用ニ接続",
        Conditional => "仮定形",
        ConditionalContraction1 => "仮定縮約１",
        ConditionalContraction2 => "仮定縮約２",
        ImperativeE => "命令ｅ",
        ImperativeI => "命令ｉ",
        ImperativeRo => "命令ｒｏ",
        ImperativeYo => "命令ｙｏ",
        Attributive => "連体形",
        NounConnection => "体言接続",
        NounConnectionSpecial => "体言接続特殊",
        NounConnectionSpecial2 => "体言接続特殊２",
        EuphonicBasic => "音便基本形",
        GaruConnection => "ガル接続",
        ClassicalBasic => "文語基本形",
    }
}

impl Default for PosDetail {
    fn default() -> Self {
        PosDetail::Unset
    }
}

impl Default for InflectionType {
    fn default() -> Self {
        InflectionType::Unset
    }
}

impl Default for InflectionForm {
    fn default() -> Self {
        InflectionForm::Unset
    }
}
