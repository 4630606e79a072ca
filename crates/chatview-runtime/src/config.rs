use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_API_URL: &str = "http://localhost:8080/api/v1";
pub const DEFAULT_TRACE_URL: &str = "http://localhost:3000";
pub const API_URL_ENV: &str = "CHATVIEW_API_URL";
pub const TRACE_URL_ENV: &str = "CHATVIEW_TRACE_URL";

/// Resolve the workspace data directory path based on priority:
/// 1. Explicit path (with tilde expansion)
/// 2. CHATVIEW_PATH environment variable (with tilde expansion)
/// 3. XDG data directory (recommended default)
/// 4. ~/.chatview (fallback for systems without XDG)
pub fn resolve_workspace_path(explicit_path: Option<&str>) -> Result<PathBuf> {
    if let Some(path) = explicit_path {
        return Ok(expand_tilde(path));
    }

    if let Ok(env_path) = std::env::var("CHATVIEW_PATH") {
        return Ok(expand_tilde(&env_path));
    }

    if let Some(data_dir) = dirs::data_dir() {
        return Ok(data_dir.join("chatview"));
    }

    if let Some(home) = std::env::var_os("HOME") {
        return Ok(PathBuf::from(home).join(".chatview"));
    }

    Err(Error::Config(
        "Could not determine workspace path: no HOME directory or XDG data directory found"
            .to_string(),
    ))
}

/// Expand tilde (~) in paths to the user's home directory
pub fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = std::env::var_os("HOME")
    {
        return PathBuf::from(home).join(stripped);
    }
    PathBuf::from(path)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    /// Defaults to `events.db` next to the config file.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub db_path: Option<PathBuf>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            db_path: None,
        }
    }
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

fn default_trace_url() -> String {
    DEFAULT_TRACE_URL.to_string()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Base URL of the events API (`/events` is appended).
    #[serde(default = "default_api_url")]
    pub api_url: String,
    /// Base URL of the external trace viewer.
    #[serde(default = "default_trace_url")]
    pub trace_url: String,
    #[serde(default)]
    pub server: ServerConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            trace_url: default_trace_url(),
            server: ServerConfig::default(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::default_path()?;
        Self::load_from(&config_path)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn default_path() -> Result<PathBuf> {
        Ok(resolve_workspace_path(None)?.join("config.toml"))
    }

    /// Layer environment and command-line overrides on top of the file values.
    ///
    /// Flags win over the environment, which wins over the file.
    pub fn with_overrides<F>(
        mut self,
        env: F,
        api_url: Option<String>,
        trace_url: Option<String>,
    ) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = api_url.or_else(|| env(API_URL_ENV)) {
            self.api_url = url;
        }
        if let Some(url) = trace_url.or_else(|| env(TRACE_URL_ENV)) {
            self.trace_url = url;
        }
        self
    }

    /// Database path for `serve`, relative to the config file's directory.
    pub fn db_path(&self, config_dir: &Path) -> PathBuf {
        match &self.server.db_path {
            Some(path) if path.is_absolute() => path.clone(),
            Some(path) => config_dir.join(path),
            None => config_dir.join("events.db"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn no_env(_: &str) -> Option<String> {
        None
    }

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.api_url, DEFAULT_API_URL);
        assert_eq!(config.trace_url, DEFAULT_TRACE_URL);
        assert_eq!(config.server.port, 8080);
    }

    #[test]
    fn test_config_save_and_load() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("config.toml");

        let config = Config {
            api_url: "https://api.example/api/v1".to_string(),
            trace_url: "https://trace.example".to_string(),
            server: ServerConfig {
                port: 9090,
                ..ServerConfig::default()
            },
        };

        config.save_to(&config_path)?;
        assert!(config_path.exists());

        let loaded = Config::load_from(&config_path)?;
        assert_eq!(loaded, config);

        Ok(())
    }

    #[test]
    fn test_partial_file_fills_defaults() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("config.toml");
        std::fs::write(&config_path, "trace_url = \"https://trace.example\"\n")?;

        let loaded = Config::load_from(&config_path)?;
        assert_eq!(loaded.trace_url, "https://trace.example");
        assert_eq!(loaded.api_url, DEFAULT_API_URL);
        assert_eq!(loaded.server, ServerConfig::default());

        Ok(())
    }

    #[test]
    fn test_malformed_file_is_config_error() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("config.toml");
        std::fs::write(&config_path, "api_url = [")?;

        let err = Config::load_from(&config_path).unwrap_err();
        assert!(matches!(err, Error::Config(_)));

        Ok(())
    }

    #[test]
    fn test_load_nonexistent_returns_default() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("nonexistent.toml");

        let config = Config::load_from(&config_path)?;
        assert_eq!(config, Config::default());

        Ok(())
    }

    #[test]
    fn test_override_precedence() {
        let env = |key: &str| match key {
            API_URL_ENV => Some("http://env-api".to_string()),
            TRACE_URL_ENV => Some("http://env-trace".to_string()),
            _ => None,
        };

        let from_env = Config::default().with_overrides(env, None, None);
        assert_eq!(from_env.api_url, "http://env-api");
        assert_eq!(from_env.trace_url, "http://env-trace");

        let from_flag =
            Config::default().with_overrides(env, Some("http://flag-api".to_string()), None);
        assert_eq!(from_flag.api_url, "http://flag-api");
        assert_eq!(from_flag.trace_url, "http://env-trace");

        let untouched = Config::default().with_overrides(no_env, None, None);
        assert_eq!(untouched, Config::default());
    }

    #[test]
    fn test_db_path_resolution() {
        let dir = Path::new("/data/chatview");
        let mut config = Config::default();
        assert_eq!(config.db_path(dir), dir.join("events.db"));

        config.server.db_path = Some(PathBuf::from("custom.db"));
        assert_eq!(config.db_path(dir), dir.join("custom.db"));

        config.server.db_path = Some(PathBuf::from("/abs/events.db"));
        assert_eq!(config.db_path(dir), PathBuf::from("/abs/events.db"));
    }
}
