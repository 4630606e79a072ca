mod common;

use common::TestFixture;
use predicates::prelude::*;

#[test]
fn test_config_show_defaults_without_file() {
    let fixture = TestFixture::new();

    fixture
        .command()
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("not created, using defaults"))
        .stdout(predicate::str::contains("api_url:   http://localhost:8080/api/v1"))
        .stdout(predicate::str::contains("trace_url: http://localhost:3000"))
        .stdout(predicate::str::contains("events.db"));
}

#[test]
fn test_env_and_flag_precedence() {
    let fixture = TestFixture::new();

    fixture
        .command()
        .env("CHATVIEW_API_URL", "http://from-env/api/v1")
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("api_url:   http://from-env/api/v1"));

    fixture
        .command()
        .env("CHATVIEW_API_URL", "http://from-env/api/v1")
        .args(["--api-url", "http://from-flag/api/v1", "config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("api_url:   http://from-flag/api/v1"));
}

#[test]
fn test_config_init_writes_once() {
    let fixture = TestFixture::new();

    fixture
        .command()
        .args(["config", "init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Config created"));
    assert!(fixture.config_path().exists());

    fixture
        .command()
        .args(["config", "init"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));

    fixture
        .command()
        .args(["config", "init", "--force"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Config overwritten"));
}

#[test]
fn test_file_values_are_used() {
    let fixture = TestFixture::new();
    std::fs::create_dir_all(fixture.config_path().parent().unwrap()).unwrap();
    std::fs::write(
        fixture.config_path(),
        "api_url = \"http://from-file/api/v1\"\n\n[server]\nport = 9999\n",
    )
    .unwrap();

    fixture
        .command()
        .args(["--format", "json", "config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"api_url\": \"http://from-file/api/v1\""))
        .stdout(predicate::str::contains("\"port\": 9999"));
}
