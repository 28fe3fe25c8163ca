//! Integration tests for the CLI commands.

use std::fs;
use std::path::PathBuf;

use kotogram::cli::*;
use kotogram::error::{KotogramError, Result};
use tempfile::TempDir;

const DARAKE: &str = "\
部屋\t名詞,一般,*,*,*,*,部屋,ヘヤ,ヘヤ
は\t助詞,係助詞,*,*,*,*,は,ハ,ワ
埃\t名詞,一般,*,*,*,*,埃,ホコリ,ホコリ
だらけ\t名詞,接尾,一般,*,*,*,だらけ,ダラケ,ダラケ
だ\t助動詞,*,*,*,特殊・ダ,基本形,だ,ダ,ダ
。\t記号,句点,*,*,*,*,。,。,。
EOS
本\t名詞,一般,*,*,*,*,本,ホン,ホン
EOS
";

fn match_args(input: PathBuf) -> MatchArgs {
    MatchArgs {
        input,
        rules: None,
        input_format: InputFormat::Mecab,
        rule: None,
    }
}

#[test]
fn test_match_analyzer_output() -> Result<()> {
    let dir = TempDir::new()?;
    let input = dir.path().join("sentences.txt");
    fs::write(&input, DARAKE)?;

    let report = match_input(&match_args(input), None)?;
    assert_eq!(report.sentences.len(), 2);
    assert_eq!(report.sentences[0].text, "部屋は埃だらけだ。");
    assert_eq!(report.sentences[0].matches.len(), 1);
    assert_eq!(report.sentences[0].matches[0].surface(), "埃だらけ");
    assert!(report.sentences[1].matches.is_empty());

    let rendered = report.to_human();
    assert!(rendered.contains("2..4 〜だらけ [N3-052]: 埃だらけ"));
    assert!(rendered.ends_with("1 match(es) in 2 sentence(s), 57 rule(s)"));
    Ok(())
}

#[test]
fn test_match_specific_rule() -> Result<()> {
    let dir = TempDir::new()?;
    let input = dir.path().join("sentences.txt");
    fs::write(&input, DARAKE)?;

    let mut args = match_args(input.clone());
    args.rule = Some("～おきに".to_string());
    let report = match_input(&args, None)?;
    assert!(report.sentences.iter().all(|s| s.matches.is_empty()));

    args.rule = Some("no such rule".to_string());
    assert!(matches!(
        match_input(&args, None),
        Err(KotogramError::InvalidArgument(_))
    ));
    Ok(())
}

#[test]
fn test_match_with_rule_directory_and_config() -> Result<()> {
    let dir = TempDir::new()?;
    let rules_dir = dir.path().join("rules");
    fs::create_dir(&rules_dir)?;
    fs::write(
        rules_dir.join("000.json"),
        r#"[{"name": "noun", "patterns": [{"patterns": [{"part_of_speech": "名詞"}]}]},
            {"name": "noun pair", "patterns": [{"patterns": [{"part_of_speech": "名詞"}, {"part_of_speech": "名詞"}]}]}]"#,
    )?;
    let config = dir.path().join("config.json");
    fs::write(&config, r#"{"overlap_policy": "keep_all"}"#)?;
    let input = dir.path().join("tokens.json");
    fs::write(
        &input,
        r#"[{"surface": "埃", "lemma": "埃", "part_of_speech": "名詞"},
            {"surface": "だらけ", "lemma": "だらけ", "part_of_speech": "名詞"}]"#,
    )?;

    let args = MatchArgs {
        input,
        rules: Some(rules_dir),
        input_format: InputFormat::Json,
        rule: None,
    };

    let report = match_input(&args, Some(config.as_path()))?;
    assert_eq!(report.rule_count, 2);
    // keep_all: both single nouns and the pair
    assert_eq!(report.sentences[0].matches.len(), 3);

    let report = match_input(&args, None)?;
    assert_eq!(report.sentences[0].matches.len(), 1);
    assert_eq!(report.sentences[0].matches[0].rule_name(), "noun pair");
    Ok(())
}

#[test]
fn test_export_then_validate() -> Result<()> {
    let dir = TempDir::new()?;
    let out = dir.path().join("exported");

    let exported = export_rules(&out)?;
    assert_eq!(exported.files.len(), 57);
    assert_eq!(exported.files[0], "000.json");

    let validated = validate_rules(&out)?;
    assert_eq!(validated.files, 57);
    assert_eq!(validated.rules, 57);
    Ok(())
}

#[test]
fn test_validate_reports_bad_file() -> Result<()> {
    let dir = TempDir::new()?;
    fs::write(
        dir.path().join("000.json"),
        r#"{"name": "two stars", "patterns": [{"patterns": [{}, {"value": "は"}, {}]}]}"#,
    )?;

    let err = validate_rules(dir.path()).unwrap_err();
    assert!(err.is_config());
    assert!(err.to_string().contains("two stars"));
    Ok(())
}

#[test]
fn test_list_rules_json() -> Result<()> {
    let listing = list_rules(
        &RulesArgs {
            rules: None,
            filter: Some("だらけ".to_string()),
        },
        None,
    )?;
    let value = serde_json::to_value(&listing)?;
    assert_eq!(value["source"], "built-in");
    assert_eq!(value["rules"][0]["name"], "〜だらけ");
    assert_eq!(value["rules"][0]["label"], "N3-052");
    assert_eq!(value["rules"][0]["realizations"][0], "pos:名詞 value:だらけ");
    Ok(())
}
