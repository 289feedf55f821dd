use crate::error::NewsreelError;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Default completion provider endpoint
pub const DEFAULT_BASE_URL: &str = "https://api.euron.one/api/v1/euri";

/// Default model for news summaries
pub const DEFAULT_NEWS_MODEL: &str = "gemini-2.0-flash-001";

/// Default model for video scripts
pub const DEFAULT_SCRIPT_MODEL: &str = "gpt-4.1-mini";

/// Newsreel application configuration
#[derive(Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Completion provider API key
    #[serde(skip_serializing)]
    pub api_key: String,

    /// Completion provider base URL
    pub base_url: String,

    /// Model used to summarize news
    pub news_model: String,

    /// Model used to write video scripts
    pub script_model: String,

    /// Server bind address
    pub server_host: String,

    /// Server port
    pub server_port: u16,

    /// Log directory
    pub log_dir: PathBuf,

    /// Log level
    pub log_level: String,
}

// The API key never ends up in logs.
impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("news_model", &self.news_model)
            .field("script_model", &self.script_model)
            .field("server_host", &self.server_host)
            .field("server_port", &self.server_port)
            .field("log_dir", &self.log_dir)
            .field("log_level", &self.log_level)
            .finish()
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: DEFAULT_BASE_URL.to_string(),
            news_model: DEFAULT_NEWS_MODEL.to_string(),
            script_model: DEFAULT_SCRIPT_MODEL.to_string(),
            server_host: "127.0.0.1".to_string(),
            server_port: 8501,
            log_dir: PathBuf::from("./log"),
            log_level: "info".to_string(),
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables and .env file
    pub fn from_env() -> Result<Self, NewsreelError> {
        // Load .env file (ignore if not exists)
        let _ = dotenv::dotenv();

        // Directories are created by whoever writes to them
        Ok(Self::from_vars(|key| std::env::var(key).ok()))
    }

    /// Build configuration from an arbitrary variable lookup
    pub fn from_vars<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        Self {
            api_key: lookup("EURI_API_KEY").unwrap_or_default(),
            base_url: lookup("EURI_BASE_URL")
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or(defaults.base_url),
            news_model: lookup("NEWS_MODEL").unwrap_or(defaults.news_model),
            script_model: lookup("SCRIPT_MODEL").unwrap_or(defaults.script_model),
            server_host: lookup("SERVER_HOST").unwrap_or(defaults.server_host),
            server_port: lookup("SERVER_PORT")
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.server_port),
            log_dir: lookup("LOG_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.log_dir),
            log_level: lookup("LOG_LEVEL").unwrap_or(defaults.log_level),
        }
    }

    /// Get server bind address (host:port)
    pub fn server_bind_address(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), NewsreelError> {
        if self.api_key.trim().is_empty() {
            return Err(NewsreelError::config(
                "EURI_API_KEY is missing. Set it in the environment or a .env file",
            ));
        }

        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(NewsreelError::config(
                "Provider base URL must start with http:// or https://",
            ));
        }

        if self.news_model.trim().is_empty() || self.script_model.trim().is_empty() {
            return Err(NewsreelError::config("Model identifiers cannot be empty"));
        }

        // Validate port range
        if self.server_port == 0 {
            return Err(NewsreelError::config("Server port cannot be 0"));
        }

        Ok(())
    }
}
