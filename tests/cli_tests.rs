use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::json;
use serial_test::serial;
use std::fs;
use tempfile::tempdir;

const PATH: &str = "/api/chat/completions";

// Helper function to set up a test Command instance
fn set_up_command() -> Command {
    let mut cmd = Command::cargo_bin("journal-genai").unwrap();
    cmd.env_clear()
        .env("HOME", "/tmp")
        .env("LOG_FORMAT", "text")
        .env("LOG_LEVEL", "warn");
    cmd
}

fn completion_body(content: &str) -> String {
    json!({"choices": [{"message": {"role": "assistant", "content": content}}]}).to_string()
}

#[test]
#[serial]
fn test_cli_status() {
    set_up_command()
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"OK\""));
}

#[test]
#[serial]
fn test_cli_basic_health() {
    set_up_command()
        .env("PORT", "9100")
        .arg("health")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"status\": \"UP\""))
        .stdout(predicate::str::contains("\"port\": 9100"))
        .stdout(predicate::str::contains("genai-microservice"));
}

#[test]
#[serial]
fn test_cli_detailed_health_without_key() {
    set_up_command()
        .args(["health", "--detailed"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"genai-api\": \"DISABLED\""))
        .stdout(predicate::str::contains("\"genai-api-key\": \"disabled\""));
}

#[test]
#[serial]
fn test_cli_debug_hides_key() {
    set_up_command()
        .env("GENAI_API_KEY", "sk-0123456789-secret")
        .arg("debug")
        .assert()
        .success()
        .stdout(predicate::str::contains("sk-0123456..."))
        .stdout(predicate::str::contains("secret").not());
}

#[test]
#[serial]
fn test_cli_empty_batch_is_client_error() {
    set_up_command()
        .env("GENAI_API_KEY", "k")
        .args(["full", "--file", "-"])
        .write_stdin(r#"{"snippetContents": []}"#)
        .assert()
        .code(2)
        .stderr(predicate::str::contains("cannot be empty"));
}

#[test]
#[serial]
fn test_cli_missing_key_fails() {
    set_up_command()
        .args(["summary", "Went for a walk"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("GENAI_API_KEY"));
}

#[test]
#[serial]
fn test_cli_invalid_config_fails() {
    set_up_command()
        .env("GENAI_API_URL", "not-a-url")
        .arg("status")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Configuration error"));
}

#[test]
#[serial]
fn test_cli_summary_against_mock_upstream() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("POST", PATH)
        .match_header("authorization", "Bearer cli-key")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(completion_body("Journal Summary:\nI went for a walk and read a book."))
        .expect(1)
        .create();

    set_up_command()
        .env("GENAI_API_URL", format!("{}{}", server.url(), PATH))
        .env("GENAI_API_KEY", "cli-key")
        .args(["summary", "Went for a walk", "Read a book"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "\"summary\": \"I went for a walk and read a book.\"",
        ))
        .stdout(predicate::str::contains("analysis").not());

    mock.assert();
}

#[test]
#[serial]
fn test_cli_api_key_flag_overrides_env() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("POST", PATH)
        .match_header("authorization", "Bearer flag-key")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(completion_body("Journal Summary:\nI cooked dinner."))
        .expect(1)
        .create();

    set_up_command()
        .env("GENAI_API_URL", format!("{}{}", server.url(), PATH))
        .env("GENAI_API_KEY", "env-key")
        .args(["--api-key", "flag-key", "summary", "Cooked dinner"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"summary\": \"I cooked dinner.\""));

    mock.assert();
}

#[test]
#[serial]
fn test_cli_empty_api_key_flag_means_no_key() {
    set_up_command()
        .env("GENAI_API_KEY", "env-key")
        .args(["--api-key", "", "summary", "Went for a walk"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("GENAI_API_KEY"));
}

#[test]
#[serial]
fn test_cli_insights_from_request_file() {
    let mut server = mockito::Server::new();
    let _mock = server
        .mock("POST", PATH)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(completion_body(
            "Analysis:\nYou kept a steady pace.\n\nInsights:\nMood Pattern: Calm\nWellness Tip: Stretch",
        ))
        .create();

    let dir = tempdir().unwrap();
    let request = dir.path().join("request.json");
    fs::write(&request, r#"{"snippetContents": ["Quiet morning", "Long walk"]}"#).unwrap();

    set_up_command()
        .env("GENAI_API_KEY", "k")
        .arg("--api-url")
        .arg(format!("{}{}", server.url(), PATH))
        .arg("insights")
        .arg("--file")
        .arg(&request)
        .assert()
        .success()
        .stdout(predicate::str::contains("\"moodPattern\": \"Calm\""))
        .stdout(predicate::str::contains("\"suggestion\": \"\""))
        .stdout(predicate::str::contains("\"wellnessTip\": \"Stretch\""))
        .stdout(predicate::str::contains("summary").not());
}

#[test]
#[serial]
fn test_cli_upstream_failure_exit_code() {
    let mut server = mockito::Server::new();
    let _mock = server.mock("POST", PATH).with_status(502).create();

    set_up_command()
        .env("GENAI_API_URL", format!("{}{}", server.url(), PATH))
        .env("GENAI_API_KEY", "k")
        .args(["full", "Busy day"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("502"));
}
