use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn textmask() -> Command {
    let mut cmd = Command::cargo_bin("textmask").unwrap();
    cmd.env("NO_COLOR", "1");
    cmd
}

/// Write the default config into a temp dir so tests ignore the user's config.
fn config_file(dir: &TempDir) -> String {
    let path = dir.path().join("config.json");
    let config = textmask_core::TextmaskConfig::default();
    config.save(&path).unwrap();
    path.display().to_string()
}

#[test]
fn format_with_pattern() {
    textmask()
        .args(["format", "5551234567", "--pattern", "(###) ###-####"])
        .assert()
        .success()
        .stdout("(555) 123-4567\n");
}

#[test]
fn unformat_with_configured_field() {
    let dir = TempDir::new().unwrap();
    let config = config_file(&dir);

    textmask()
        .args(["-c", &config, "unformat", "(555) 123-4567", "--field", "phone"])
        .assert()
        .success()
        .stdout("5551234567\n");
}

#[test]
fn input_reports_caret_as_json() {
    textmask()
        .args([
            "input",
            "(55",
            "--start",
            "3",
            "--replacement",
            "5",
            "--pattern",
            "(###) ###-####",
            "--format",
            "json",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""formatted_text": "(555) ""#))
        .stdout(predicate::str::contains(r#""caret_offset": 6"#));
}

#[test]
fn caret_skips_literal_prefix() {
    textmask()
        .args(["caret", "$", "--pattern", "$###", "--format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""caret_offset": 1"#));
}

#[test]
fn number_format_and_parse() {
    textmask()
        .args(["number", "--currency", "$", "--min-fraction", "2", "format", "1234.5"])
        .assert()
        .success()
        .stdout("$1,234.50\n");

    textmask()
        .args(["number", "--currency", "$", "parse", "$1,234.50"])
        .assert()
        .success()
        .stdout("1234.50\n");
}

#[test]
fn number_parse_without_digits_fails() {
    textmask()
        .args(["number", "--currency", "$", "parse", "$"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No number could be read"));
}

#[test]
fn batch_writes_csv() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("phones.txt");
    fs::write(&input, "5551234567\n555\n").unwrap();
    let output_dir = dir.path().join("out");

    textmask()
        .args([
            "batch",
            input.to_str().unwrap(),
            "--pattern",
            "(###) ###-####",
            "--output-dir",
            output_dir.to_str().unwrap(),
        ])
        .assert()
        .success();

    let csv = fs::read_to_string(output_dir.join("phones.csv")).unwrap();
    assert_eq!(csv, "line,input,output\n1,5551234567,(555) 123-4567\n2,555,(555\n");
}

#[test]
fn input_edits_negative_amount() {
    let dir = TempDir::new().unwrap();
    let config = config_file(&dir);

    textmask()
        .args([
            "-c", &config, "input", "-$12", "-F", "amount", "--start", "0", "--length", "1",
            "--format", "json",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""formatted_text": "$12""#))
        .stdout(predicate::str::contains(r#""caret_offset": 1"#));

    textmask()
        .args(["-c", &config, "unformat", "-$7", "-F", "amount"])
        .assert()
        .success()
        .stdout("-7\n");
}

#[test]
fn input_accepts_replacement_starting_with_hyphen() {
    textmask()
        .args([
            "input",
            "(555",
            "--start",
            "4",
            "--replacement",
            "-1",
            "--pattern",
            "(###) ###-####",
            "--format",
            "json",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""formatted_text": "(555) 1""#))
        .stdout(predicate::str::contains(r#""caret_offset": 7"#));
}

#[test]
fn config_commands_follow_config_flag() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("custom.json");
    let mut config = textmask_core::TextmaskConfig::default();
    config.number = textmask_core::NumberStyle::default()
        .with_grouping_separator(Some(' '))
        .with_decimal_separator(',');
    config.save(&path).unwrap();
    let path = path.display().to_string();

    textmask()
        .args(["-c", &path, "config", "get", "number.decimal_separator"])
        .assert()
        .success()
        .stdout("\",\"\n");

    textmask()
        .args(["-c", &path, "config", "set", "fields.phone.pattern", "###-####"])
        .assert()
        .success();

    let saved = textmask_core::TextmaskConfig::from_file(Path::new(&path)).unwrap();
    assert_eq!(
        saved.fields["phone"],
        textmask_core::FieldConfig::Mask {
            pattern: "###-####".to_string(),
            placeholder: '#',
            class: textmask_core::CharClass::Digit,
        }
    );

    textmask()
        .args(["-c", &path, "config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("custom.json"));
}

#[test]
fn missing_field_selection_fails() {
    textmask()
        .args(["format", "123"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--field"));
}

#[test]
fn invalid_pattern_fails() {
    textmask()
        .args(["format", "123", "--pattern", r"##\"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("dangling escape"));
}
