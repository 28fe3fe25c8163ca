//! JLPT N3 grammar points.

use crate::error::Result;
use crate::grammar::common;
use crate::grammar::notation::parse_sequence;
use crate::grammar::rule::GrammarRule;

use super::{N3, elements, rule, seq};

pub(super) fn rules() -> Result<Vec<GrammarRule>> {
    Ok(vec![
        rule(
            N3,
            1,
            "～間（に）",
            "動詞普通形/い形容詞普通形＋間（に）\nな形容詞語幹＋な＋間（に）\n名詞＋の＋間（に）",
            vec![
                seq(vec![common::verb_or_i_adjective_plain(), elements("間 に?")?])?,
                seq(vec![common::na_adjective_stem_na(), elements("間 に?")?])?,
                seq(vec![common::noun_no(), elements("間 に?")?])?,
            ],
            &[
                "赤ちゃんが寝ている間に、洗濯をしました。",
                "日本に留学している間に富士山に登りたい。",
                "この機械は新しい間、使い方が難しい。",
                "山田先生の講演の間、皆熱心に話を聞いていた。",
                "私は夏休みの間、ずっと実家にいました。",
                "便利な間にやっておきましょう。",
                "静かな間に勉強を終わらせたい。",
            ],
        )?,
        rule(
            N3,
            3,
            "～あがる",
            "動詞「ます形」＋あがる",
            vec![
                seq(vec![common::verb_masu(), elements("あがる/上がる")?])?,
            ],
            &[
                "最新の企画書が出来あがったので、どうぞご覧ください。",
                "彼氏へのマフラーが編みあがった。",
            ],
        )?,
        rule(
            N3,
            4,
            "～いい/よい",
            "動詞「ます形」＋いい/よい",
            vec![
                seq(vec![common::verb_masu(), elements("いい/よい")?])?,
            ],
            &[
                "この町は住みよいです。",
                "この薬は飲みいいです。",
                "この本はわかりよいです。",
            ],
        )?,
        rule(
            N3,
            5,
            "～一方（で）",
            "動詞普通形/い形容詞辞書形＋一方（で）\nな形容詞語幹＋な/である＋一方（で）\n名詞＋である＋一方（で）",
            vec![
                seq(vec![common::verb_or_i_adjective_plain(), elements("一方 で?")?])?,
                seq(vec![common::na_adjective_stem_na_or_dearu(), elements("一方 で?")?])?,
                seq(vec![common::noun_no_or_dearu(), elements("一方 で?")?])?,
            ],
            &[
                "彼は自分は何もしていない一方で、他人のすることによく文句を言う。",
                "田中さんは医科大学の教授である一方、小説家としても有名だ。",
                "娘ならきっと合格できるだろうと信じる一方で、ちょっと不安なところもある。",
                "この機械は新しい一方で、使い方が難しい。",
                "収入が減る一方で、教育費などの支出は増えていくのだから、節約するしかない。",
                "姉は明るい一方で、妹は無口だ。",
                "彼は真面目な一方で、冗談もよく言う。",
                "この部屋は静かな一方で、少し暗いです。",
                "彼女は有名である一方、謙虚な人です。",
                "田中さんは医科大学の教授である一方、小説家としても有名だ。",
                "この制度は学生のための一方、教員にもメリットがある。",
            ],
        )?,
        rule(
            N3,
            6,
            "～一方だ",
            "動詞辞書形＋一方だ",
            vec![
                seq(vec![common::verb_basic(), elements("一方 だ")?])?,
            ],
            &[
                "ここ数年、この町の人口は減る一方だ。",
                "わが社の業績はよくなる一方だ。",
            ],
        )?,
        rule(
            N3,
            7,
            "～上で（の）",
            "動詞「た形」＋上で（の）",
            vec![
                seq(vec![common::verb_ta(), elements("上 で の?")?])?,
            ],
            &[
                "私が皆様のご意見を伺った上で、来週ご報告いたします。",
                "それぞれの説明をよく聞いた上で、旅行のコースを選びたいと思います。",
            ],
        )?,
        rule(
            N3,
            8,
            "～上で(は)/上での",
            "名詞＋の＋上で(は)/上での\n動詞辞書形＋上で(は)/上での",
            vec![
                seq(vec![common::noun_no(), elements("上 で は?")?])?,
                seq(vec![common::verb_basic(), elements("上 で は?")?])?,
                seq(vec![common::noun_no(), elements("上 で の")?])?,
                seq(vec![common::verb_basic(), elements("上 で の")?])?,
            ],
            &[
                "仕事の上では別に問題はない。",
                "外国語を勉強する上で、単語を覚えるのはとても大事なことだ。",
                "この仕事の上での注意点を説明します。",
                "勉強する上でのコツを教えてください。",
            ],
        )?,
        rule(
            N3,
            9,
            "～上に",
            "動詞普通形/い形容詞辞書形＋上に\nな形容詞語幹＋な/である＋上に\n名詞＋の/である＋上に",
            vec![
                seq(vec![common::verb_or_i_adjective_plain(), elements("上 に")?])?,
                seq(vec![common::na_adjective_stem_na_or_dearu(), elements("上 に")?])?,
                seq(vec![common::noun_no_or_dearu(), elements("上 に")?])?,
            ],
            &[
                "そのスポーツクラブは入会金が要らない上に、わが家から近い。",
                "台風が近づいてきて、風が強い上に、雨も激しく降っている。",
                "この商品はデザインがユニークな上に、色もカラフルだ。",
                "彼は学生の上に、アルバイトもしている。",
            ],
        )?,
        rule(
            N3,
            10,
            "～ないうちに",
            "動詞「ない形」＋ない＋うちに",
            vec![
                seq(vec![common::verb_nai(), elements("うち に")?])?,
            ],
            &[
                "弟と妹がいると集中できないから、今日は二人が帰ってこないうちに、宿題をやってしまう。",
                "昨日のパーティーは、友だちと話していたら、ほとんど何も食べないうちに終わってしまって、後でおなかがすいてしまった。",
            ],
        )?,
        rule(
            N3,
            11,
            "～おかげで / ～おかげだ",
            "動詞辞書形＋おかげで/おかげだ\nい形容詞辞書形＋おかげで/おかげだ\nな形容詞語幹＋な＋おかげで/おかげだ\n名詞＋の＋おかげで/おかげだ\n各词类「た」形＋おかげで/おかげだ",
            vec![
                seq(vec![common::verb_basic(), elements("おかげ で/だ/です")?])?,
                parse_sequence("形容詞&基本形 おかげ で/だ/です")?,
                seq(vec![common::na_adjective_stem_na(), elements("おかげ で/だ/です")?])?,
                seq(vec![common::noun_no(), elements("おかげ で/だ/です")?])?,
                seq(vec![common::verb_ta(), elements("おかげ で/だ/です")?])?,
                parse_sequence("形容詞&連用タ接続 おかげ で/だ/です")?,
                parse_sequence("名詞&形容動詞語幹/名詞&ナイ形容詞語幹 だっ た おかげ で/だ/です")?,
            ],
            &[
                "母は「風邪を引かないのは、毎朝しているジョギングのおかげだ。」とよく言っている。",
                "わたしたちが優勝できたのは、応援してくれたみんなのおかげです。",
                "彼の話を信じたおかげで、ひどい目に遭った。",
                "先生の指導のおかげで、試験に合格できました。",
                "友達が手伝ってくれたおかげで、宿題が早く終わりました。",
                "毎日練習したおかげで、ピアノが上手になりました。",
                "家族の支えのおかげで、困難を乗り越えることができた。",
            ],
        )?,
        rule(
            N3,
            12,
            "～おきに",
            "数量詞＋おきに",
            vec![
                seq(vec![common::quantifier(), elements("おき に")?])?,
            ],
            &[
                "この道には5メートルおきに木が植えてある。",
                "新宿へ向かう電車は3分おきに出ている。",
            ],
        )?,
        rule(
            N3,
            13,
            "～恐れがある",
            "名詞＋の＋恐れがある\n動詞辞書形＋恐れがある",
            vec![
                seq(vec![common::noun_no(), elements("恐れ が ある")?])?,
                seq(vec![common::verb_basic(), elements("恐れ が ある")?])?,
            ],
            &[
                "今晚、大型の台風がこの地方へ近づく恐れがあります。",
                "この欠陥を直さないと、重大な事故が起こる恐れがある。",
            ],
        )?,
        rule(
            N3,
            14,
            "～がかり",
            "名詞＋がかり",
            vec![
                seq(vec![common::quantifier(), elements("がかり")?])?,
            ],
            &[
                "3年がかりの調査の結果、工場廃水に含まれている金属物質が住民に危害を及ぼしたことがわかった。",
                "その記念碑は重くて、8人がかりで運んでも動かない。",
            ],
        )?,
        rule(
            N3,
            15,
            "～がたい",
            "動詞「ます形」＋がたい",
            vec![
                seq(vec![common::verb_masu(), elements("がたい")?])?,
            ],
            &[
                "これだけ景気が悪いのに、税金を上げようとするのは、わたしたち国民には理解しがたい。",
                "どのコンピューターを買ったらよいか、なかなか一つには決めがたい。",
            ],
        )?,
        rule(
            N3,
            16,
            "～か何か",
            "動詞普通形＋か何か\n名詞＋か何か",
            vec![
                seq(vec![common::verb_or_i_adjective_plain(), elements("か 何 か")?])?,
                parse_sequence("名詞 か 何 か")?,
            ],
            &[
                "風で紙が飛んでしまうので、本か何か重いものを載せておこう。",
                "コーヒーか何か飲みませんか。",
            ],
        )?,
        rule(
            N3,
            17,
            "～から言うと/から言えば/から言って",
            "名詞＋から言うと/から言えば/から言って",
            vec![
                parse_sequence("名詞 から 言う/言え/言っ と/ば/て")?,
            ],
            &[
                "記者「ところで、社員に望むことは何でしょうか。」社長「そうですね。経営者の立場から言うと、何でも率直に言ってほしいです。」",
                "今の販売状況から言えば、今年の目標達成は厳しいだろう。",
                "実務経験から言って、田中さんがこの仕事に一番ふさわしいと思う。",
            ],
        )?,
        rule(
            N3,
            18,
            "～からすると/からすれば",
            "名詞＋からすると/からすれば",
            vec![
                parse_sequence("名詞 から する/すれ と/ば")?,
            ],
            &[
                "プロからすると、わたしの技術はまだ未熟です。",
                "あの言い方からすれば、彼はこの仕事が好きではないようだ。",
                "彼女の表情からすると、何かうれしいことがあったらしい。",
            ],
        )?,
        rule(
            N3,
            19,
            "～から～にかけて",
            "名詞＋から＋名詞＋にかけて",
            vec![
                parse_sequence("名詞 から ** 名詞 にかけて")?,
            ],
            &[
                "あの鳥が日本で見られるのは、11月から3月にかけてです。",
                "東北地方から北海道にかけて今夜は大雪になるでしょう。",
            ],
        )?,
        rule(
            N3,
            20,
            "～から見ると/から見れば/から見て",
            "名詞＋から見ると/から見れば/から見て",
            vec![
                parse_sequence("名詞 から 見る/見れ/見 と/ば/て")?,
            ],
            &[
                "平凡なわたしから見ると、彼女はあらゆる才能に恵まれているように思える。",
                "外国人のわたしから見れば、日本は住みよい国だと思う。",
                "彼の症状から見て、食中毒の可能性が高い。",
            ],
        )?,
        rule(
            N3,
            21,
            "～きる/きれる/きれない",
            "動詞「ます形」＋きる/きれる/きれない\n動詞＋きる/きれる/きれない",
            vec![
                seq(vec![common::verb_masu(), elements("きる/きれる/きれない")?])?,
                parse_sequence("動詞/動詞&連用形 きる/きれる/きれない")?,
            ],
            &[
                "こんなに長い小説は、1日では読みきれない。",
                "お小遣いを使いきってしまった。",
                "彼のことを信じきっています。",
                "今日は忙しくて、もう疲れきってしまった。",
                "この問題は複雑すぎて、私には理解しきれない。",
            ],
        )?,
        rule(
            N3,
            22,
            "～くせに",
            "動詞辞書形＋くせに\nい形容詞辞書形＋くせに\nな形容詞語幹＋な＋くせに\n名詞＋の＋くせに",
            vec![
                seq(vec![common::verb_basic(), elements("くせ に")?])?,
                parse_sequence("形容詞&基本形 くせ に")?,
                seq(vec![common::na_adjective_stem_na(), elements("くせ に")?])?,
                seq(vec![common::noun_no(), elements("くせ に")?])?,
            ],
            &[
                "姉は食事のことで文句ばかり言っているくせに、自分では何も作らない。",
                "子どものくせに、生意気だね。",
            ],
        )?,
        rule(
            N3,
            23,
            "～くらい/ぐらい",
            "動詞普通形/い形容詞普通形＋くらい/ぐらい\n動詞＋たい＋くらい/ぐらい\n名詞＋くらい/ぐらい\n名詞＋くらい/ぐらい＋は＋ない",
            vec![
                seq(vec![common::verb_or_i_adjective_plain(), elements("ぐらい/くらい")?])?,
                parse_sequence("動詞 たい ぐらい/くらい")?,
                parse_sequence("名詞 ぐらい/くらい")?,
                parse_sequence("名詞 ぐらい/くらい は ない")?,
                parse_sequence("名詞 ぐらい/くらい 名詞 は ない")?,
            ],
            &[
                "怖くて怖くて、大声で叫びたいくらいだった。",
                "今日は朝から仕事が忙しくて、食事をする時間もないくらいだ。",
                "これは新品だから、安くても5千円ぐらいはするだろう。",
                "自分のことぐらい自分でやりなさい。",
                "彼くらい努力する人はいない。",
                "戦争ぐらい残酷なものはない。",
            ],
        )?,
        rule(
            N3,
            24,
            "～こそ",
            "名詞＋こそ",
            vec![
                parse_sequence("名詞 こそ")?,
            ],
            &[
                "いいえ、こちらこそ。",
                "これこそ本場の日本料理です。",
                "今年こそ試験に合格できるよう、頑張る。",
            ],
        )?,
        rule(
            N3,
            25,
            "～こと",
            "動詞「ない形」＋こと\n動詞辞書形＋こと\n動詞普通形/い形容詞普通形＋こと\n名詞＋だ＋こと\n動詞＋た＋こと\n動詞/い形容詞/名詞＋です＋こと",
            vec![
                seq(vec![common::verb_nai(), elements("こと")?])?,
                seq(vec![common::verb_basic(), elements("こと")?])?,
                seq(vec![common::verb_or_i_adjective_plain(), elements("こと")?])?,
                parse_sequence("名詞 だ こと")?,
                parse_sequence("動詞 た こと")?,
                parse_sequence("動詞 です こと")?,
                parse_sequence("形容詞 です こと")?,
                parse_sequence("名詞 です こと")?,
            ],
            &[
                "指定の場所以外に自転車を止めないこと。",
                "勝手に実験室に入らないこと。",
                "まあ、なんてきれいな夕焼けだこと。",
                "まあ、きれいに咲いたこと。",
                "あら、素敵な洋服ですこと。",
            ],
        )?,
        rule(
            N3,
            26,
            "～ことか",
            "動詞普通形/い形容詞普通形＋ことか\nな形容詞語幹＋な＋ことか\n動詞＋た＋ことか",
            vec![
                seq(vec![common::verb_or_i_adjective_plain(), elements("こと か")?])?,
                seq(vec![common::na_adjective_stem_na(), elements("こと か")?])?,
                parse_sequence("動詞 た こと か")?,
            ],
            &[
                "自分で野菜を作ってみて、おいしい野菜を育てることがどんなに大変なことかわかりました。",
                "学生時代、奨学金がもらえてどれほど助かったことか。",
                "悪い点を注意する親が多いが、子どもにとっては、褒められたほうがどれだけうれしいことか。",
            ],
        )?,
        rule(
            N3,
            27,
            "～ことだ",
            "動詞「ない形」＋ことだ\n動詞辞書形＋ことだ",
            vec![
                seq(vec![common::verb_nai(), elements("こと だ")?])?,
                seq(vec![common::verb_basic(), elements("こと だ")?])?,
            ],
            &[
                "上手になりたければ、毎日短い時間でもいいから練習を続けることだ。",
                "健康でいたければ、早寝早起きをすることだ。",
            ],
        )?,
        rule(
            N3,
            28,
            "～ことに",
            "動詞「た形」＋ことに\nい形容詞辞書形＋ことに\nな形容詞語幹＋な＋ことに",
            vec![
                parse_sequence("動詞 た こと に")?,
                parse_sequence("形容詞 こと に")?,
                seq(vec![common::na_adjective_stem_na(), elements("こと に")?])?,
            ],
            &[
                "興味深いことに、昔のおもちゃが再び流行しているそうだ。",
                "困ったことに、相手の名前がどうしても思い出せなかった。",
                "不思議なことに、会社をやめたら、よく眠れるようになった。",
            ],
        )?,
        rule(
            N3,
            29,
            "～ことにする",
            "動詞辞書形＋ことにする\n動詞「ない形」＋ことにする",
            vec![
                seq(vec![common::verb_basic(), elements("こと に する")?])?,
                seq(vec![common::verb_nai(), elements("こと に する")?])?,
            ],
            &[
                "小学校に入学して字を書く機会が増えるだろうと思い、孫に文房具をあげることにした。",
                "アルコールはもう飲まないことにする。",
                "毎日6時に起きることにしています。",
            ],
        )?,
        rule(
            N3,
            30,
            "～ことになっている/こととなっている",
            "動詞辞書形＋ことになっている/こととなっている\n動詞「ない形」＋ことになっている/こととなっている",
            vec![
                seq(vec![common::verb_basic(), elements("こと に なっ て いる")?])?,
                seq(vec![common::verb_nai(), elements("こと に なっ て いる")?])?,
                seq(vec![common::verb_basic(), elements("こと と なっ て いる")?])?,
                seq(vec![common::verb_nai(), elements("こと と なっ て いる")?])?,
            ],
            &[
                "今日は7時東京駅で友だちと会うことになっているので、6時半に会社を出ます。",
                "この部屋には、関係者以外入ってはいけないことになっている。",
                "日本では車は左側を走ることとなっている。",
            ],
        )?,
        rule(
            N3,
            31,
            "～ことになる",
            "動詞辞書形＋ことになる\n動詞「ない形」＋ことになる\n動詞普通形＋ことになる\n名詞＋ということになる\n動詞＋ということになる",
            vec![
                seq(vec![common::verb_basic(), elements("こと に なる")?])?,
                seq(vec![common::verb_nai(), elements("こと に なる")?])?,
                seq(vec![common::verb_or_i_adjective_plain(), elements("こと に なる")?])?,
                parse_sequence("名詞 という こと に なる")?,
                seq(vec![common::verb_basic(), elements("という こと に なる")?])?,
            ],
            &[
                "新しい支店を開くことになった。",
                "来月から授業は8時から始まることになりました。",
                "家賃は一か月5万円だから、1年で60万円も払うことになる。",
                "彼女はおじの娘だから、わたしと彼女はいとこ同士ということになる。",
                "毎日8時間働くんだから、一週間40時間働くということになるね。",
            ],
        )?,
        rule(
            N3,
            32,
            "～ことはない/こともない",
            "動詞辞書形＋ことはない/こともない",
            vec![
                seq(vec![common::verb_basic(), elements("こと は ない")?])?,
                seq(vec![common::verb_basic(), elements("こと も ない")?])?,
            ],
            &[
                "君が一人で責任を感じることはない。そんなに悩んでいたら体を壊してしまうよ。",
                "その器具は確かに便利そうだが、なくても困らないのだから、わざわざ買うことはない。",
            ],
        )?,
        rule(
            N3,
            33,
            "～最中に",
            "名詞＋の＋最中に\n動詞「ている形」＋最中に",
            vec![
                parse_sequence("名詞 の 最中 に")?,
                parse_sequence("動詞 て いる 最中 に")?,
            ],
            &[
                "電話している最中に、誰かが玄関に来た。",
                "食事の最中に、お客さんが来た。",
            ],
        )?,
        rule(
            N3,
            34,
            "～さえ",
            "名詞/助詞＋さえ\n人物名詞（＋で）＋さえ",
            vec![
                parse_sequence("名詞 さえ")?,
                parse_sequence("助詞 さえ")?,
                parse_sequence("名詞 で さえ")?,
            ],
            &[
                "最初は怖くてプールに入ることさえできなかったが、今では50メートルも泳げるようになった。",
                "中学生の君にその問題が解けたとはすごいことだ。あれは大学生にさえ難しいと言われている。",
                "日本人でさえ、敬語を間違える場合がある。",
            ],
        )?,
        rule(
            N3,
            35,
            "～さえ～ば",
            "動詞「ます形」＋さえ＋すれば/しなければ\nい形容詞語幹＋く＋さえ＋あれば/なければ\nな形容詞語幹＋で＋さえ＋あれば/なければ\n名詞＋さえ＋各詞類「ば形」",
            vec![
                seq(vec![common::verb_masu(), elements("さえ すれ ば")?])?,
                seq(vec![common::verb_masu(), elements("さえ しなければ")?])?,
                parse_sequence("形容詞 く さえ あれ ば")?,
                parse_sequence("形容詞 く さえ なけれ ば")?,
                parse_sequence("名詞 で さえ あれ ば")?,
                parse_sequence("名詞 で さえ なければ")?,
                parse_sequence("名詞 さえ よけれ ば")?,
                parse_sequence("名詞 さえ よくなければ")?,
                parse_sequence("形容詞 さえ なけれ ば")?,
            ],
            &[
                "最近、自分さえよければいいという考えの人が増えている。",
                "この薬を飲みさえすれば、すぐ治るというわけではない。",
                "仕事が忙しくさえなければ、英語の勉強を続けたい。",
                "静かでさえあれば、狭くてもいい。",
            ],
        )?,
        rule(
            N3,
            36,
            "～じゃん/じゃない/じゃないの/じゃないか",
            "動詞普通形(+ん)＋じゃん/じゃない/じゃないの/じゃないか\nな形容詞語幹(+なん)＋じゃん/じゃない/じゃないの/じゃないか\nい形容詞普通形(+ん)＋じゃん/じゃない/じゃないの/じゃないか\n名詞＋じゃない/じゃないの/じゃないか\n動詞意志形＋じゃないか",
            vec![
                seq(vec![common::verb_or_i_adjective_plain(), elements("ん じゃん/じゃ/ない")?])?,
                seq(vec![common::verb_or_i_adjective_plain(), elements("ん じゃ ない の/か")?])?,
                parse_sequence("名詞 なん じゃん/じゃ/ない")?,
                parse_sequence("名詞 なん じゃ ない の/か")?,
                parse_sequence("名詞 じゃ ない の/か")?,
                parse_sequence("動詞 う/よう じゃ ない か")?,
                parse_sequence("動詞 た じゃん")?,
            ],
            &[
                "ねえ、ほら、できたじゃん。",
                "これでいいんじゃないの。",
                "本当は彼のことが好きなんじゃないの。だったら直接言えばいいじゃん。",
                "あれ、田中君じゃないか。",
                "そんなこと言い出すなんて、あいつ、ばかじゃないか。",
                "今度また一緒に遊ぼうじゃないか。",
                "皆で一緒に頑張ろうじゃないか。",
            ],
        )?,
        rule(
            N3,
            37,
            "～上",
            "名詞＋上",
            vec![
                parse_sequence("名詞 上")?,
                parse_sequence("名詞 上 の")?,
            ],
            &[
                "それは法律上では許されない行為だ。",
                "生命倫理上の問題でクローン技術に反対する意見が多い。",
            ],
        )?,
        rule(
            N3,
            38,
            "～ずとも",
            "動詞「ない形」＋ずとも",
            vec![
                parse_sequence("動詞 ず とも")?,
            ],
            &[
                "嫌なら行かずともよい。",
                "この部分は書かずともよい。",
            ],
        )?,
        rule(
            N3,
            39,
            "～(は)する/(も)する",
            "名詞＋(は)する/(も)する",
            vec![
                parse_sequence("名詞 は/も する")?,
            ],
            &[
                "そのホテルは一泊10万円もするそうだ。",
                "入社して半年もしないうちに仕事をやめた。",
                "飛行機で行くなら3時間はするでしょう。",
            ],
        )?,
        rule(
            N3,
            40,
            "～せいで/せいだ/せいか",
            "動詞普通形＋せいで/せいだ/せいか\nい形容詞普通形＋せいで/せいだ/せいか\nな形容詞語幹＋な＋せいで/せいだ/せいか\n名詞＋の＋せいで/せいだ/せいか",
            vec![
                seq(vec![common::verb_or_i_adjective_plain(), elements("せい で/だ/か")?])?,
                seq(vec![common::na_adjective_stem_na(), elements("せい で/だ/か")?])?,
                parse_sequence("名詞 の せい で/だ/か")?,
            ],
            &[
                "今年は気温が高いせいか、冬になってもなかなか雪が降らない。",
                "原料が安いせいか、この製品は値段が安い。",
                "夜眠れないのは騒音のせいだ。",
            ],
        )?,
        rule(
            N3,
            41,
            "～そうにない/そうもない",
            "動詞「ます形」+そうにない/そうもない",
            vec![
                seq(vec![common::verb_masu(), elements("そう に/も ない")?])?,
            ],
            &[
                "今のわたしの給料では、何年働いても自分の家は買えそうもない。",
                "雨はまだ止みそうにない。",
            ],
        )?,
        rule(
            N3,
            42,
            "～たきり〜ない",
            "動詞「た形」+きり~ない",
            vec![
                seq(vec![common::verb_ta(), elements("きり/っきり/ぎり")?])?,
            ],
            &[
                "彼は出かけたきり、戻ってこない。",
                "ピアノは小学生の頃習ったきりで、ほとんど忘れてしまった。",
                "彼とは3年前に一度会ったきり、その後、ずっと会っていない。",
            ],
        )?,
        rule(
            N3,
            43,
            "～だけでなく",
            "動詞普通形 + だけでなく\nい形容詞普通形 + だけでなく\nな形容詞語幹+な + だけでなく\n名詞 + の + だけでなく\n名詞 + だけでなく",
            vec![
                seq(vec![common::verb_or_i_adjective_plain(), elements("だけ で/じゃ なく")?])?,
                seq(vec![common::na_adjective_stem_na(), elements("だけ で/じゃ なく")?])?,
                parse_sequence("名詞 の だけ で/じゃ なく")?,
                parse_sequence("名詞 だけ で/じゃ なく")?,
            ],
            &[
                "新しい携帯電話は、写真が撮れるだけじゃなくて、テレビだって見られるんだよ。",
                "あの工場は、設備だけでなく周りの環境もすばらしい。",
                "彼は英語が上手なだけでなく、フランス語もぺらぺらだ。",
            ],
        )?,
        rule(
            N3,
            44,
            "～だけでは",
            "動詞普通形 + だけでは\nい形容詞普通形 + だけでは\nな形容詞語幹+な + だけでは\n名詞 + だけでは",
            vec![
                seq(vec![common::verb_or_i_adjective_plain(), elements("だけ で/じゃ は")?])?,
                seq(vec![common::na_adjective_stem_na(), elements("だけ で/じゃ は")?])?,
                parse_sequence("名詞 だけ で/じゃ は")?,
            ],
            &[
                "スポーツはただ見るだけではつまらない。",
                "行動せずに口先だけでは成功できない。",
            ],
        )?,
        rule(
            N3,
            45,
            "～たことにする",
            "動詞「た形」+ことにする",
            vec![
                parse_sequence("た こと に する/し")?,
            ],
            &[
                "その話は聞かなかったことにします。",
                "今までのことはなかったことにしましょう。",
            ],
        )?,
        rule(
            N3,
            46,
            "～たって/だって",
            "動詞「ます形」+たって\nい形容詞語幹+く+たって\nな形容詞語幹+だって\n名詞+だって\n疑問詞+だって",
            vec![
                seq(vec![common::verb_masu(), elements("たっ て")?])?,
                parse_sequence("形容詞&連用テ接続 たっ て")?,
                parse_sequence("名詞&形容動詞語幹/名詞&ナイ形容詞語幹 だって")?,
                parse_sequence("名詞 だって")?,
                parse_sequence("名詞&代名詞/名詞&副詞可能 だって")?,
            ],
            &[
                "今さら謝りたって許してもらえない。",
                "難しくたって、この仕事に挑戦したい。",
                "野菜が嫌いだって、健康のために食べるべきだ。",
                "最近は仕事が忙しくて、日曜日だって休めない。",
                "わたしの応援が力になるならいくらだって応援します。",
                "あの二人が結婚したと聞けば、誰だってびっくりするよ。",
            ],
        )?,
        rule(
            N3,
            47,
            "たとえ/たとい〜ても",
            "たとえ/たとい + 動詞「て形」+ も\nたとえ/たとい + い形容詞「て形」+ も\nたとえ/たとい + な形容詞詞幹 + でも\nたとえ/たとい + 名詞 + でも\nたとえ/たとい + [任意の語] + て + も",
            vec![
                parse_sequence("たとえ/たとい 動詞&連用テ接続 て も")?,
                parse_sequence("たとえ/たとい 形容詞&連用テ接続 て も")?,
                parse_sequence("たとえ/たとい 名詞&形容動詞語幹/名詞&ナイ形容詞語幹 でも")?,
                parse_sequence("たとえ/たとい 名詞 で も")?,
                parse_sequence("たとえ/たとい ** て も")?,
            ],
            &[
                "たとえみんなに反対されても、わたしは絶対にこの計画を実行したい。",
                "たとえ高くても、必要なものは買わなければならない。",
                "たとえ雨でも、予定通り運動会を行う。",
            ],
        )?,
        rule(
            N3,
            48,
            "〜たばかりだ",
            "動詞 + た + ばかり + だ/です",
            vec![
                parse_sequence("動詞 た ばかり だ/です/で?")?,
            ],
            &[
                "昨日、動物園に行ったら、先月生まれたばかりのライオンの赤ちゃんを見ることができました。",
                "A「遅くなってすみません。」B「いいえ、わたしも今来たばかりです。」",
                "さっき起きたばかりで、まだ眠いです。",
            ],
        )?,
        rule(
            N3,
            49,
            "〜たび(に)",
            "名詞 + の + たび(に)\n動詞辞書形 + たび(に)",
            vec![
                parse_sequence("名詞 の たび に?")?,
                seq(vec![common::verb_basic(), elements("たび に?")?])?,
            ],
            &[
                "わたしは山田さんに会うたびに素敵な人だといつも思う。",
                "この写真を見るたび、故郷のことを思い出す。",
                "木村さんは旅行のたびに、お土産を買ってきてくれる。",
            ],
        )?,
        rule(
            N3,
            50,
            "〜たまえ",
            "動詞「ます形」+ たまえ",
            vec![
                seq(vec![common::verb_masu(), elements("た ま え")?])?,
            ],
            &[
                "上田君、この方案を説明したまえ。",
                "明日は朝7時に来たまえ。",
            ],
        )?,
        rule(
            N3,
            51,
            "〜たら/ったら",
            "名詞 + たら/ったら",
            vec![
                parse_sequence("名詞 たら")?,
                parse_sequence("名詞 っ たら")?,
            ],
            &[
                "李さんったら、また遅刻した。",
                "この時間たら、どこも込んでるよ。",
            ],
        )?,
        rule(
            N3,
            52,
            "〜だらけ",
            "名詞 + だらけ",
            vec![
                parse_sequence("名詞 だらけ")?,
            ],
            &[
                "昨日からの雨がようやく止んだが、運動場はまだ濡れていた。試合を終えたサッカー選手の顔はみんな泥だらけだ。",
                "この部屋は何年も住んでいないので、埃だらけだ。",
            ],
        )?,
    ])
}
