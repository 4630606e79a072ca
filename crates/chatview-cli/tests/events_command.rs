mod common;

use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use common::{ApiServer, TestFixture, sample_event};
use predicates::prelude::*;
use serde_json::{Value, json};

fn fixed_list_server() -> ApiServer {
    let events = json!([
        sample_event(3, "model-three", "2024-06-03T12:00:00Z"),
        sample_event(1, "model-one", "2024-06-01T12:00:00Z"),
        sample_event(2, "model-two", "2024-06-02 12:00:00"),
    ]);
    ApiServer::spawn(Router::new().route(
        "/api/v1/events",
        get(move || {
            let events = events.clone();
            async move { Json(events) }
        }),
    ))
}

#[test]
fn test_events_renders_one_card_per_event_in_order() {
    let fixture = TestFixture::new();
    let server = fixed_list_server();

    let output = fixture
        .command()
        .args(["--api-url", &server.url("/api/v1")])
        .args(["--trace-url", "https://trace.example"])
        .args(["events", "--utc"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();

    assert!(stdout.starts_with("Chat History\n"));
    assert_eq!(stdout.matches("Stop Reason: end_turn").count(), 3);
    assert_eq!(stdout.matches("Input Tokens: 14").count(), 3);
    assert_eq!(stdout.matches("Output Tokens: 19").count(), 3);
    assert_eq!(stdout.matches("Cache Read Input Tokens: 0").count(), 3);
    assert!(stdout.contains("https://trace.example/wachines/traces/trace-3"));
    assert!(stdout.contains("2024-06-02 12:00:00 UTC"));

    let three = stdout.find("[model-three]").unwrap();
    let one = stdout.find("[model-one]").unwrap();
    let two = stdout.find("[model-two]").unwrap();
    assert!(three < one && one < two);
}

#[test]
fn test_server_error_prints_single_error_line_and_no_cards() {
    let fixture = TestFixture::new();
    let server = ApiServer::spawn(Router::new().route(
        "/api/v1/events",
        get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }),
    ));

    let output = fixture
        .command()
        .args(["--api-url", &server.url("/api/v1")])
        .arg("events")
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());

    let stderr = String::from_utf8(output.stderr).unwrap();
    let lines: Vec<&str> = stderr.lines().filter(|l| !l.trim().is_empty()).collect();
    assert_eq!(lines.len(), 1, "stderr was: {stderr}");
    assert!(lines[0].starts_with("Error: An error has occurred: Request failed with status 500"));
}

#[test]
fn test_events_json_format_wraps_content() {
    let fixture = TestFixture::new();
    let server = fixed_list_server();

    let output = fixture
        .command()
        .args(["--api-url", &server.url("/api/v1")])
        .args(["--format", "json", "events"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let value: Value = serde_json::from_slice(&output.stdout).unwrap();
    let events = value["content"]["events"].as_array().unwrap();
    let ids: Vec<i64> = events.iter().map(|e| e["id"].as_i64().unwrap()).collect();
    assert_eq!(ids, vec![3, 1, 2]);
    assert_eq!(events[0]["created_at"], "2024-06-03T12:00:00Z");
    assert_eq!(events[0]["metrics"]["output_tokens"], 19);
}

#[test]
fn test_unreachable_api_is_reported() {
    let fixture = TestFixture::new();
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    fixture
        .command()
        .args(["--api-url", &format!("http://{}/api/v1", addr)])
        .arg("events")
        .assert()
        .failure()
        .stderr(predicate::str::starts_with("Error: An error has occurred: HTTP error"));
}

#[test]
fn test_watch_requires_terminal() {
    let fixture = TestFixture::new();

    fixture
        .command()
        .arg("watch")
        .assert()
        .failure()
        .stderr(predicate::str::contains("interactive terminal"));
}
