//! Common test utilities shared across integration tests.
//!
//! Note: Clippy cannot track usage across integration test files,
//! hence the `allow(dead_code)` annotation.
#![cfg(test)]
#![allow(dead_code)]

use assert_cmd::Command;
use serde_json::{Value, json};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

pub struct TestFixture {
    _temp_dir: TempDir,
    config_path: PathBuf,
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

impl TestFixture {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let config_path = temp_dir.path().join(".chatview").join("config.toml");

        Self {
            _temp_dir: temp_dir,
            config_path,
        }
    }

    pub fn config_path(&self) -> &PathBuf {
        &self.config_path
    }

    /// `chatview --config <tmp>` with a clean environment.
    #[allow(deprecated)]
    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("chatview").expect("Failed to find binary");
        cmd.arg("--config")
            .arg(&self.config_path)
            .env_remove("CHATVIEW_API_URL")
            .env_remove("CHATVIEW_TRACE_URL")
            .env_remove("CHATVIEW_PATH")
            .env_remove("RUST_LOG")
            .env("NO_COLOR", "1");
        cmd
    }

    pub fn write_file(&self, name: &str, contents: &str) -> PathBuf {
        let path = self._temp_dir.path().join(name);
        fs::write(&path, contents).expect("Failed to write file");
        path
    }
}

/// Axum app running on a private runtime for as long as this value lives.
pub struct ApiServer {
    _runtime: tokio::runtime::Runtime,
    base_url: String,
}

impl ApiServer {
    pub fn spawn(router: axum::Router) -> Self {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .enable_all()
            .build()
            .expect("Failed to build runtime");

        let listener = runtime
            .block_on(tokio::net::TcpListener::bind("127.0.0.1:0"))
            .expect("Failed to bind");
        let addr = listener.local_addr().expect("Failed to read address");
        runtime.spawn(async move {
            axum::serve(listener, router).await.expect("server failed");
        });

        Self {
            _runtime: runtime,
            base_url: format!("http://{}", addr),
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

pub fn sample_event(id: i64, model: &str, created_at: &str) -> Value {
    json!({
        "id": id,
        "dagger_trace_id": format!("trace-{}", id),
        "session_id": "msg_01",
        "messages": [{"content": "hello, can you help me??", "role": "user"}],
        "response": [{"type": "text", "text": "Of course!"}],
        "model": model,
        "stop_reason": "end_turn",
        "content": "",
        "type": "message",
        "role": "assistant",
        "cache_read_input_tokens": 0,
        "input_tokens": 14,
        "output_tokens": 19,
        "created_at": created_at
    })
}
