use anyhow::{Context, Result};
use chatview_runtime::Config;
use chatview_runtime::config::{expand_tilde, resolve_workspace_path};
use std::path::{Path, PathBuf};

use crate::types::OutputFormat;

pub const CONFIG_FILE: &str = "config.toml";

/// Resolved paths and connection overrides shared by every handler.
pub struct ExecutionContext {
    config_path: PathBuf,
    api_url: Option<String>,
    trace_url: Option<String>,
    pub format: OutputFormat,
}

impl ExecutionContext {
    /// `config_flag` wins; otherwise the file lives in the workspace data dir.
    pub fn new(
        config_flag: Option<&str>,
        api_url: Option<String>,
        trace_url: Option<String>,
        format: OutputFormat,
    ) -> Result<Self> {
        let config_path = match config_flag {
            Some(path) => expand_tilde(path),
            None => resolve_workspace_path(None)?.join(CONFIG_FILE),
        };

        Ok(Self {
            config_path,
            api_url,
            trace_url,
            format,
        })
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    /// Directory holding the config file (and, by default, the database).
    pub fn config_dir(&self) -> &Path {
        self.config_path
            .parent()
            .filter(|dir| !dir.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."))
    }

    /// File values with environment and flag overrides applied.
    pub fn config(&self) -> Result<Config> {
        let config = Config::load_from(&self.config_path).with_context(|| {
            format!("failed to load config from {}", self.config_path.display())
        })?;

        Ok(config.with_overrides(
            |key| std::env::var(key).ok(),
            self.api_url.clone(),
            self.trace_url.clone(),
        ))
    }

    pub fn db_path(&self, config: &Config, explicit: Option<&Path>) -> PathBuf {
        match explicit {
            Some(path) => path.to_path_buf(),
            None => config.db_path(self.config_dir()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chatview_runtime::ServerConfig;
    use tempfile::TempDir;

    fn context(path: &Path, api_url: Option<&str>) -> ExecutionContext {
        ExecutionContext::new(
            path.to_str(),
            api_url.map(String::from),
            None,
            OutputFormat::Plain,
        )
        .unwrap()
    }

    #[test]
    fn test_flag_overrides_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        Config {
            api_url: "http://from-file/api/v1".to_string(),
            ..Config::default()
        }
        .save_to(&path)
        .unwrap();

        let ctx = context(&path, Some("http://from-flag/api/v1"));
        assert_eq!(ctx.config().unwrap().api_url, "http://from-flag/api/v1");
    }

    #[test]
    fn test_db_path_defaults_next_to_config() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        let ctx = context(&path, None);

        let config = Config::default();
        assert_eq!(ctx.db_path(&config, None), temp_dir.path().join("events.db"));
        assert_eq!(
            ctx.db_path(&config, Some(Path::new("/tmp/x.db"))),
            PathBuf::from("/tmp/x.db")
        );

        let configured = Config {
            server: ServerConfig {
                db_path: Some(PathBuf::from("store/events.db")),
                ..ServerConfig::default()
            },
            ..Config::default()
        };
        assert_eq!(
            ctx.db_path(&configured, None),
            temp_dir.path().join("store/events.db")
        );
    }

    #[test]
    fn test_malformed_config_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        std::fs::write(&path, "api_url = [").unwrap();

        let err = context(&path, None).config().unwrap_err();
        assert!(err.to_string().contains("failed to load config"));
    }
}
