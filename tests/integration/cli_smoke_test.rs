//! CLI Smoke Test
//!
//! Runs the built binary in a scratch working directory and checks the exact
//! stdout contract for the report and for both error paths.

use std::process::{Command, Output};

use crate::common::{fixtures, TestSubscription};

fn run_census(subscription: &TestSubscription, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_subscription-census"))
        .args(args)
        .current_dir(subscription.dir())
        .env_remove("CENSUS_SUBSCRIPTION_FILE")
        .env_remove("CENSUS_PREVIEW_LIMIT")
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

fn stdout_of(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).unwrap()
}

#[test]
fn test_default_invocation_reads_subscription_file() {
    let subscription = TestSubscription::from_decoded("vmess://abc\n\nss://def\nplain-line\n");
    let output = run_census(&subscription, &[]);

    assert!(output.status.success());
    assert_eq!(
        stdout_of(&output),
        "Total nodes found in Base64: 3\n\
         Protocol counts:\n  vmess: 1\n  ss: 1\n  unknown: 1\n\
         \n\
         First 5 nodes:\nvmess://abc\nss://def\nplain-line\n"
    );
}

#[test]
fn test_summarise_preview_is_capped_at_five() {
    let subscription = TestSubscription::from_decoded(&fixtures::mixed_subscription());
    let output = run_census(&subscription, &["summarise"]);

    assert!(output.status.success());
    let stdout = stdout_of(&output);
    let preview: Vec<&str> = stdout
        .split("First 5 nodes:\n")
        .nth(1)
        .unwrap()
        .lines()
        .collect();
    assert_eq!(preview.len(), 5);
    assert!(stdout.starts_with("Total nodes found in Base64: 8\n"));
}

#[test]
fn test_summarise_json_output() {
    let subscription = TestSubscription::from_decoded(&fixtures::mixed_subscription());
    let output = run_census(
        &subscription,
        &["summarise", "--format", "json", "--group-by", "family"],
    );

    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_str(&stdout_of(&output)).unwrap();
    assert_eq!(value["total"], 8);
    assert_eq!(value["grouping"], "family");
    assert_eq!(value["preview"].as_array().unwrap().len(), 5);
}

#[test]
fn test_decode_lists_every_node() {
    let subscription = TestSubscription::from_decoded(&fixtures::mixed_subscription());
    let output = run_census(&subscription, &["decode"]);

    assert!(output.status.success());
    assert_eq!(stdout_of(&output).lines().count(), 8);
}

#[test]
fn test_missing_file_prints_single_error_line() {
    let subscription = TestSubscription::empty();
    let output = run_census(&subscription, &[]);

    assert!(!output.status.success());
    let stdout = stdout_of(&output);
    assert_eq!(stdout.lines().count(), 1);
    assert!(stdout.starts_with("Error: Cannot read 'subscription_base64.txt'"));
    assert!(!stdout.contains("Total nodes"));
}

#[test]
fn test_malformed_base64_prints_single_error_line() {
    let subscription = TestSubscription::from_raw("@@@ definitely not base64 @@@");
    let output = run_census(&subscription, &[]);

    assert!(!output.status.success());
    let stdout = stdout_of(&output);
    assert_eq!(stdout.lines().count(), 1);
    assert!(stdout.starts_with("Error: Base64 decode error:"));
}

#[test]
fn test_explicit_path_argument() {
    let subscription = TestSubscription::from_decoded("trojan://a\n");
    let path = subscription.path().to_str().unwrap().to_string();
    let output = run_census(&subscription, &["summarise", &path, "--preview", "1"]);

    assert!(output.status.success());
    assert_eq!(
        stdout_of(&output),
        "Total nodes found in Base64: 1\nProtocol counts:\n  trojan: 1\n\nFirst 1 nodes:\ntrojan://a\n"
    );
}

#[test]
fn test_non_toml_config_files_are_ignored() {
    let subscription = TestSubscription::from_decoded("vmess://abc\nss://def\n");
    std::fs::write(subscription.dir().join("config.json"), "[1,2,3]").unwrap();
    std::fs::write(subscription.dir().join("config.ini"), "not = [valid").unwrap();
    let output = run_census(&subscription, &[]);

    assert!(output.status.success());
    assert!(stdout_of(&output).starts_with("Total nodes found in Base64: 2\n"));
}

#[test]
fn test_config_toml_is_honoured() {
    let subscription = TestSubscription::from_decoded("vmess://abc\nss://def\n");
    std::fs::write(
        subscription.dir().join("config.toml"),
        "[report]\npreview_limit = 1\n",
    )
    .unwrap();
    let output = run_census(&subscription, &[]);

    assert!(output.status.success());
    assert!(stdout_of(&output).ends_with("First 1 nodes:\nvmess://abc\n"));
}

#[test]
fn test_broken_config_toml_prints_single_error_line() {
    let subscription = TestSubscription::from_decoded("vmess://abc\n");
    std::fs::write(subscription.dir().join("config.toml"), "[report\npreview_limit = ").unwrap();
    let output = run_census(&subscription, &[]);

    assert!(!output.status.success());
    let stdout = stdout_of(&output);
    assert_eq!(stdout.lines().count(), 1);
    assert!(stdout.starts_with("Error: Configuration error: "));
    assert!(!stdout.contains("Failed to load configuration"));
}
