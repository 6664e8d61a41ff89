//! Exit codes and console output of the ollama-generate binary.

use mockito::Server;
use std::net::TcpListener;
use std::process::{Command, Output};

const GENERATE_PATH: &str = "/api/generate";

fn run_cli(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_ollama-generate"))
        .args(args)
        .env_remove("OLLAMA_GENERATE_URL")
        .env_remove("OLLAMA_GENERATE_MODEL")
        .env_remove("OLLAMA_GENERATE_PROMPT")
        .env_remove("OLLAMA_GENERATE_TIMEOUT_SECS")
        .env_remove("RUST_LOG")
        .output()
        .expect("spawn ollama-generate")
}

fn closed_port_url() -> String {
    let port = {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind ephemeral port");
        listener.local_addr().expect("local addr").port()
    };
    format!("http://127.0.0.1:{}{}", port, GENERATE_PATH)
}

fn stdout_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn test_completion_printed_and_exit_zero() {
    let mut server = Server::new();
    let url = format!("{}{}", server.url(), GENERATE_PATH);
    server
        .mock("POST", GENERATE_PATH)
        .with_status(200)
        .with_body(r#"{"response": "gcd"}"#)
        .create();

    let output = run_cli(&["--url", &url]);

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout_of(&output), "\"gcd\"\n");
}

#[test]
fn test_cli_flags_reach_the_request() {
    let mut server = Server::new();
    let url = format!("{}{}", server.url(), GENERATE_PATH);
    let mock = server
        .mock("POST", GENERATE_PATH)
        .match_body(mockito::Matcher::Json(serde_json::json!({
            "model": "codellama",
            "prompt": "fn gcd(",
            "stream": false
        })))
        .with_status(200)
        .with_body(r#"{"response": "x"}"#)
        .create();

    let output = run_cli(&[
        "--url", &url, "--model", "codellama", "--prompt", "fn gcd(", "--timeout", "30",
    ]);

    mock.assert();
    assert_eq!(output.status.code(), Some(0));
}

#[test]
fn test_failure_exits_zero_without_strict() {
    let mut server = Server::new();
    let url = format!("{}{}", server.url(), GENERATE_PATH);
    server
        .mock("POST", GENERATE_PATH)
        .with_status(500)
        .with_body("internal error")
        .create();

    let output = run_cli(&["--url", &url]);

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(
        stdout_of(&output),
        "Request failed with status code: 500\ninternal error\n"
    );
}

#[test]
fn test_strict_exits_one_on_transport_failure() {
    let url = closed_port_url();

    let output = run_cli(&["--strict", "--timeout", "5", "--url", &url]);

    assert_eq!(output.status.code(), Some(1));
    assert!(stdout_of(&output).starts_with("Error during request: "));
}

#[test]
fn test_strict_missing_field_still_exits_zero() {
    let mut server = Server::new();
    let url = format!("{}{}", server.url(), GENERATE_PATH);
    server
        .mock("POST", GENERATE_PATH)
        .with_status(200)
        .with_body(r#"{"other": 1}"#)
        .create();

    let output = run_cli(&["--strict", "--url", &url]);

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout_of(&output), "response field does not exist.\n");
}

#[test]
fn test_non_numeric_timeout_exits_two() {
    let output = run_cli(&["--timeout", "soon"]);

    assert_eq!(output.status.code(), Some(2));
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("--timeout"));
}

#[test]
fn test_unknown_flag_exits_two_with_usage() {
    let output = run_cli(&["--verbose"]);

    assert_eq!(output.status.code(), Some(2));
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Unknown argument: --verbose"));
    assert!(stderr.contains("USAGE:"));
}

#[test]
fn test_invalid_endpoint_exits_two() {
    let output = run_cli(&["--url", "ftp://localhost/api/generate"]);

    assert_eq!(output.status.code(), Some(2));
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Configuration error"));
}
