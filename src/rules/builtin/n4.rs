//! JLPT N4 grammar points.

use crate::error::Result;
use crate::grammar::common;
use crate::grammar::notation::parse_sequence;
use crate::grammar::rule::GrammarRule;

use super::{N4, elements, rule, seq};

pub(super) fn rules() -> Result<Vec<GrammarRule>> {
    Ok(vec![
        rule(
            N4,
            1,
            "〜ず(に)",
            "動詞「ない形」＋ず(に)\n特殊：する→せず(に)",
            vec![
                parse_sequence("動詞/せ ず に")?,
            ],
            &[
                "昨日は忙しくて、夜10時まで何も食べずに働いた。",
                "辞書を使わずに日本語の新聞を読むことができますか。",
                "勉強せずにテストを受けた。",
            ],
        )?,
        rule(
            N4,
            2,
            "〜たがる",
            "動詞「ます形」＋たがる",
            vec![
                seq(vec![common::verb_masu(), elements("た がる")?])?,
            ],
            &[
                "うちの子どもは怖い話を聞きたがる。",
                "このアパートに住みたがっている学生が多い。",
            ],
        )?,
        rule(
            N4,
            3,
            "〜がる",
            "い形容詞語幹/な形容詞語幹＋がる",
            vec![
                parse_sequence("形容詞&形容詞・イ段/名詞&形容動詞語幹/名詞&ナイ形容詞語幹 がる")?,
                parse_sequence("怖がる&動詞/可愛がる")?,
            ],
            &[
                "急に大きな音がしたので、その子どもは怖がって泣いてしまった。",
                "猫を可愛がる女の子が多いです。",
            ],
        )?,
        rule(
            N4,
            5,
            "～ようだ",
            "動詞普通形＋ようだ/ように/ような/ようです\nい形容詞普通形＋ようだ/ように/ような/ようです\nな形容詞詞干＋な＋ようだ/ように/ような/ようです\n名詞＋の＋ようだ/ように/ような/ようです\n連体詞＋ようだ/ように/ような/ようです",
            vec![
                seq(vec![common::verb_or_i_adjective_plain(), elements("よう だ/に/な/です")?])?,
                seq(vec![common::na_adjective_stem_na(), elements("よう だ/に/な/です")?])?,
                seq(vec![common::noun_no(), elements("よう だ/に/な/です")?])?,
                parse_sequence("連体詞 よう だ/に/な/です")?,
            ],
            &[
                "母ははじめて飛行機に乗って、子どものように喜んだ。",
                "彼女の笑顔は太陽のように明るく輝いている。",
                "わたしは田中さんのような優しい人が好きです。",
                "このように操作すれば、ロボットが起動します。",
                "あの時はしかたなかったのだが、彼を怒らせるようなことを言ってしまって悪かったと思った。",
                "外は寒いようですね。",
            ],
        )?,
        rule(
            N4,
            6,
            "～らしい",
            "動詞普通形＋らしい\nい形容詞普通形＋らしい\nな形容詞語幹＋らしい\n名詞＋らしい\n各詞類「た形」＋らしい",
            vec![
                seq(vec![common::verb_or_i_adjective_plain(), elements("らしい")?])?,
                parse_sequence("名詞&形容動詞語幹/名詞&ナイ形容詞語幹 らしい")?,
                parse_sequence("名詞 らしい")?,
                seq(vec![common::verb_ta(), elements("らしい")?])?,
                parse_sequence("名詞 らしい")?,
            ],
            &[
                "二人は来年結婚するらしいです。",
                "明日はいい天気らしい。",
                "この家には誰もいないらしく、いつ行っても静かだ。",
                "学生らしくもっと勉強しなさい。",
                "日本語らしい日本語を身につけたい。",
                "今日は涼しくて、秋らしい天気です。",
            ],
        )?,
        rule(
            N4,
            7,
            "～みたいだ",
            "動詞普通形/い形容詞普通形＋みたいだ\nな形容詞語幹/名詞＋みたいだ\n各詞類「た形」＋みたいだ",
            vec![
                seq(vec![common::verb_or_i_adjective_plain(), elements("みたい だ/な/に")?])?,
                parse_sequence("名詞&形容動詞語幹/名詞&ナイ形容詞語幹/名詞 みたい だ/な/に")?,
                seq(vec![common::verb_ta(), elements("みたい だ/な/に")?])?,
            ],
            &[
                "誰か教室にいるみたいだ。電気が付いている。",
                "新しいカメラは高画質みたいだ。",
                "あの雲の形はまるで馬みたいだね。",
                "赤ちゃんはりんごみたいな顔をしている。",
                "10キロも痩せた彼女はまるで別人みたいになっている。",
                "妹は、体操の選手みたいに体が柔らかい。",
                "大きくなったら、イチローさんみたいな野球選手になりたいです。",
            ],
        )?,
    ])
}
