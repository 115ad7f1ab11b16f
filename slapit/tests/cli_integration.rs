//! CLI integration tests for slapit
//!
//! Runs the real binary against a wiremock server standing in for the API.

use std::fs;
use std::path::PathBuf;
use std::process::Output;

use assert_cmd::assert::OutputAssertExt;
use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::json;
use tempfile::TempDir;
use wiremock::matchers::{body_string_contains, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const CREDS: &str = "\
[TWITTER_CREDS]
token = test-token
token_secret = test-token-secret
consumer_key = test-consumer-key
consumer_secret = test-consumer-secret
";

/// Helper to create a credentials file in a fresh temp dir
fn setup_creds() -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let creds_path = temp_dir.path().join("twitter_creds.ini");
    fs::write(&creds_path, CREDS).unwrap();
    (temp_dir, creds_path)
}

/// Run slapit off the async runtime so the mock server keeps serving
async fn run_slapit(creds: PathBuf, api_url: String, args: &[&str]) -> Output {
    let args: Vec<String> = args.iter().map(|s| s.to_string()).collect();

    tokio::task::spawn_blocking(move || {
        Command::cargo_bin("slapit")
            .unwrap()
            .env("SLAPIT_CREDS", creds)
            .env("SLAPIT_API_URL", api_url)
            .env("NO_COLOR", "1")
            .env_remove("RUST_LOG")
            .args(&args)
            .output()
            .unwrap()
    })
    .await
    .unwrap()
}

fn tweet_json(id: u64, name: &str, text: &str) -> serde_json::Value {
    json!({
        "id": id,
        "created_at": "Wed Oct 10 20:19:24 +0000 2018",
        "full_text": text,
        "user": { "name": name, "screen_name": name.to_lowercase() }
    })
}

#[test]
fn test_help_flag_output() {
    let mut cmd = Command::cargo_bin("slapit").unwrap();

    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("say"))
        .stdout(predicate::str::contains("get"))
        .stdout(predicate::str::contains("tell"))
        .stdout(predicate::str::contains("twitter_creds.ini"));
}

#[test]
fn test_version_flag_output() {
    let mut cmd = Command::cargo_bin("slapit").unwrap();

    cmd.arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("slapit"));
}

#[test]
fn test_missing_subcommand_is_usage_error() {
    let mut cmd = Command::cargo_bin("slapit").unwrap();

    cmd.assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn test_unknown_subcommand_is_usage_error() {
    let mut cmd = Command::cargo_bin("slapit").unwrap();

    cmd.args(["shout", "hello"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn test_say_without_words_is_usage_error() {
    let mut cmd = Command::cargo_bin("slapit").unwrap();

    cmd.arg("say").assert().failure().code(2);
}

#[test]
fn test_missing_credentials_prints_banner_and_exits_zero() {
    let temp_dir = TempDir::new().unwrap();
    let mut cmd = Command::cargo_bin("slapit").unwrap();

    cmd.env("SLAPIT_CREDS", temp_dir.path().join("nope.ini"))
        .args(["say", "hello"])
        .assert()
        .success()
        .code(0)
        .stdout(predicate::str::starts_with(
            "An error occured.  ConfigError::Failed to read credentials file",
        ));
}

#[test]
fn test_missing_section_prints_banner() {
    let temp_dir = TempDir::new().unwrap();
    let creds_path = temp_dir.path().join("twitter_creds.ini");
    fs::write(&creds_path, "[OTHER]\ntoken = x\n").unwrap();

    let mut cmd = Command::cargo_bin("slapit").unwrap();

    cmd.env("SLAPIT_CREDS", &creds_path)
        .args(["get"])
        .assert()
        .success()
        .stdout(predicate::str::diff(
            "An error occured.  ConfigError::Missing section [TWITTER_CREDS] in credentials file\n",
        ));
}

#[test]
fn test_default_credentials_location_under_home() {
    let home = TempDir::new().unwrap();
    let creds_dir = home.path().join(".twitter_api");
    fs::create_dir_all(&creds_dir).unwrap();
    fs::write(creds_dir.join("twitter_creds.ini"), "[TWITTER_CREDS]\ntoken = x\n").unwrap();

    let mut cmd = Command::cargo_bin("slapit").unwrap();

    // The file is found; the missing field proves it was read
    cmd.env("HOME", home.path())
        .env_remove("SLAPIT_CREDS")
        .args(["say", "hi"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "ConfigError::Missing required field: TWITTER_CREDS.token_secret",
        ));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_say_posts_joined_status() {
    let server = MockServer::start().await;
    let (_temp_dir, creds) = setup_creds();

    Mock::given(method("POST"))
        .and(path("/statuses/update.json"))
        .and(body_string_contains("status=hello+from+the+terminal"))
        .respond_with(ResponseTemplate::new(200).set_body_json(tweet_json(1, "Me", "hello from the terminal")))
        .expect(1)
        .mount(&server)
        .await;

    let output = run_slapit(creds, server.uri(), &["s", "hello", "from", "the", "terminal"]).await;

    output.assert().success().stdout("");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_get_prints_home_timeline() {
    let server = MockServer::start().await;
    let (_temp_dir, creds) = setup_creds();

    Mock::given(method("GET"))
        .and(path("/statuses/home_timeline.json"))
        .and(query_param("count", "5"))
        .and(query_param("tweet_mode", "extended"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            tweet_json(123456, "Jack", "The quick brown fox jumps over the lazy dog and keeps running far away"),
            tweet_json(20, "Ev", "second"),
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let output = run_slapit(creds, server.uri(), &["get"]).await;
    let stdout = String::from_utf8(output.stdout.clone()).unwrap();

    output
        .assert()
        .success()
        .stdout(predicate::str::contains("Jack    Wed Oct 10 20:19:24 +0000 2018"))
        .stdout(predicate::str::contains(
            "    The quick brown fox jumps over the lazy dog and\n    keeps running far away\n",
        ))
        .stdout(predicate::str::contains("    https://twitter.com/i/web/status/123456"))
        .stdout(predicate::str::contains("Ev    Wed Oct 10"));

    assert!(stdout.find("Jack").unwrap() < stdout.find("Ev").unwrap());
}

#[tokio::test(flavor = "multi_thread")]
async fn test_get_user_timeline_with_count() {
    let server = MockServer::start().await;
    let (_temp_dir, creds) = setup_creds();

    Mock::given(method("GET"))
        .and(path("/statuses/user_timeline.json"))
        .and(query_param("screen_name", "jack"))
        .and(query_param("count", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([tweet_json(20, "jack", "just setting up my twttr")])))
        .expect(1)
        .mount(&server)
        .await;

    let output = run_slapit(creds, server.uri(), &["g", "2", "--user", "jack"]).await;

    output
        .assert()
        .success()
        .stdout(predicate::str::contains("    just setting up my twttr"))
        .stdout(predicate::str::contains("https://twitter.com/i/web/status/20"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_tell_resolves_recipient_then_sends() {
    let server = MockServer::start().await;
    let (_temp_dir, creds) = setup_creds();

    Mock::given(method("GET"))
        .and(path("/users/show.json"))
        .and(query_param("screen_name", "jack"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "id": 12, "screen_name": "jack" })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/direct_messages/events/new.json"))
        .and(body_string_contains("\"recipient_id\":\"12\""))
        .and(body_string_contains("\"text\":\"see you at noon\""))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "event": { "id": "1" } })))
        .expect(1)
        .mount(&server)
        .await;

    let output = run_slapit(creds, server.uri(), &["tell", "jack", "see", "you", "at", "noon"]).await;

    output.assert().success().stdout("");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_tell_does_not_send_when_lookup_fails() {
    let server = MockServer::start().await;
    let (_temp_dir, creds) = setup_creds();

    Mock::given(method("GET"))
        .and(path("/users/show.json"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "errors": [{ "code": 50, "message": "User not found." }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/direct_messages/events/new.json"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let output = run_slapit(creds, server.uri(), &["t", "nobody", "hi"]).await;

    output.assert().success().code(0).stdout(predicate::str::diff(
        "An error occured.  HttpError::Twitter sent status 404 for users/show.json: User not found. (code 50)\n",
    ));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_authentication_failure_prints_banner() {
    let server = MockServer::start().await;
    let (_temp_dir, creds) = setup_creds();

    Mock::given(method("POST"))
        .and(path("/statuses/update.json"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "errors": [{ "code": 32, "message": "Could not authenticate you." }]
        })))
        .mount(&server)
        .await;

    let output = run_slapit(creds, server.uri(), &["say", "hi"]).await;

    output
        .assert()
        .success()
        .stdout(predicate::str::starts_with("An error occured.  AuthenticationError::"))
        .stdout(predicate::str::contains("Could not authenticate you."));
}
