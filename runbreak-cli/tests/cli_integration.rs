//! Integration tests for the runbreak CLI

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn runbreak() -> Command {
    Command::cargo_bin("runbreak").unwrap()
}

#[test]
fn test_scripts_from_text() {
    let mut cmd = runbreak();
    cmd.args(["scripts", "--text", "Hello \u{3b1}\u{3b2}\u{3b3}"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("# <text> (9 code units)"))
        .stdout(predicate::str::contains("0 6 Latin Default"))
        .stdout(predicate::str::contains("6 3 Greek Default"));
}

#[test]
fn test_breaks_from_text() {
    let mut cmd = runbreak();
    cmd.args(["breaks", "--text", "a b"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("0 U+0061 no no -"))
        .stdout(predicate::str::contains("1 U+0020 no can ws"))
        .stdout(predicate::str::contains("2 U+0062 can can -"));
}

#[test]
fn test_hard_break_in_text() {
    let mut cmd = runbreak();
    cmd.args(["breaks", "--text", "x\r\ny"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("1 U+000D no no ws"))
        .stdout(predicate::str::contains("2 U+000A no must ws"));
}

#[test]
fn test_json_output() {
    let mut cmd = runbreak();
    cmd.args(["scripts", "--text", "abc", "-f", "json"]);

    let output = cmd.assert().success().get_output().stdout.clone();
    let value: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(value[0]["source"], "<text>");
    assert_eq!(value[0]["length"], 3);
    assert_eq!(value[0]["runs"][0]["analysis"]["script"], "Latin");
}

#[test]
fn test_files_and_glob_pattern() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("a.txt"), "alpha").unwrap();
    fs::write(temp_dir.path().join("b.txt"), "\u{5d0}\u{5d1}").unwrap();

    let mut cmd = runbreak();
    cmd.arg("scripts")
        .arg("-i")
        .arg(format!("{}/*.txt", temp_dir.path().display()))
        .arg("-q");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("a.txt (5 code units)"))
        .stdout(predicate::str::contains("0 5 Latin Default"))
        .stdout(predicate::str::contains("0 2 Hebrew Default"));
}

#[test]
fn test_parallel_matches_sequential() {
    let temp_dir = TempDir::new().unwrap();
    for (name, text) in [("1.txt", "one two"), ("2.txt", "(three)"), ("3.txt", "4,5")] {
        fs::write(temp_dir.path().join(name), text).unwrap();
    }
    let pattern = format!("{}/*.txt", temp_dir.path().display());

    let sequential = runbreak()
        .args(["breaks", "-q", "-i", pattern.as_str()])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let parallel = runbreak()
        .args(["breaks", "-q", "-p", "--threads", "2", "-i", pattern.as_str()])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    assert_eq!(sequential, parallel);
}

#[test]
fn test_chunk_size_does_not_change_output() {
    let text = "Chunked (input) \u{3042}\u{3044}\u{3002} end";
    let whole = runbreak()
        .args(["breaks", "--text", text])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let chunked = runbreak()
        .args(["breaks", "--text", text, "--chunk-size", "3"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    assert_eq!(whole, chunked);
}

#[test]
fn test_chunk_size_invalid_zero() {
    let mut cmd = runbreak();
    cmd.args(["scripts", "--text", "abc", "--chunk-size", "0"]);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("chunk size must be greater than 0"));
}

#[test]
fn test_window_limit() {
    let mut cmd = runbreak();
    cmd.args(["breaks", "--text", "abcdef", "--max-window", "4"]);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("exceeds the limit of 4"));
}

#[test]
fn test_output_to_file() {
    let temp_dir = TempDir::new().unwrap();
    let output_file = temp_dir.path().join("runs.txt");

    let mut cmd = runbreak();
    cmd.args(["scripts", "--text", "abc", "-o"]).arg(&output_file);
    cmd.assert().success();

    let content = fs::read_to_string(&output_file).unwrap();
    assert!(content.contains("0 3 Latin Default"));
}

#[test]
fn test_config_file_sets_format() {
    let temp_dir = TempDir::new().unwrap();
    let config = temp_dir.path().join("runbreak.toml");
    fs::write(
        &config,
        "[output]\ndefault_format = \"json\"\npretty_json = false\n",
    )
    .unwrap();

    let mut cmd = runbreak();
    cmd.args(["scripts", "--text", "abc", "-c"]).arg(&config);

    cmd.assert()
        .success()
        .stdout(predicate::str::starts_with("[{\"source\":\"<text>\""));
}

#[test]
fn test_invalid_file() {
    let mut cmd = runbreak();
    cmd.args(["scripts", "-i", "nonexistent.txt"]);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("No files found"));
}

#[test]
fn test_input_required() {
    let mut cmd = runbreak();
    cmd.arg("breaks");

    cmd.assert().failure();
}

#[test]
fn test_list_classes() {
    let mut cmd = runbreak();
    cmd.args(["list", "classes"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("BK  MandatoryBreak"))
        .stdout(predicate::str::contains("RI  RegionalIndicator"));
}

#[test]
fn test_list_scripts_and_formats() {
    runbreak()
        .args(["list", "scripts"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Latin"))
        .stdout(predicate::str::contains("65535  Unknown"));

    runbreak()
        .args(["list", "formats"])
        .assert()
        .success()
        .stdout(predicate::str::contains("json"));
}

#[test]
fn test_generate_and_validate_config() {
    let temp_dir = TempDir::new().unwrap();
    let config = temp_dir.path().join("runbreak.toml");

    runbreak()
        .args(["generate-config", "-o"])
        .arg(&config)
        .assert()
        .success();

    runbreak()
        .args(["validate", "-c"])
        .arg(&config)
        .assert()
        .success()
        .stdout(predicate::str::contains("Configuration is valid"));

    fs::write(&config, "[analysis]\nmax_window = 0\n").unwrap();
    runbreak()
        .args(["validate", "-c"])
        .arg(&config)
        .assert()
        .failure()
        .stdout(predicate::str::contains("Configuration is invalid"));
}

#[test]
fn test_help_command() {
    let mut cmd = runbreak();
    cmd.arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("scripts"))
        .stdout(predicate::str::contains("breaks"));
}
