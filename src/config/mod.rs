//! Configuration management.
//!
//! Layered sources, later wins:
//! 1. Built-in defaults (including the stock category keyword sets)
//! 2. TOML config file (`--config`)
//! 3. Environment variables (`OPENROUTER_API_KEY`,
//!    `MODELSCRAPOR_BASE_URL`, `MODELSCRAPOR_OUTPUT_DIR`)
//!
//! The API key is the only required value and is deliberately never
//! read from the config file, only from the environment (a `.env` file
//! is loaded by the binary before this runs).

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::catalog::ConversationShape;
use crate::categorize::CategoryConfig;
use crate::error::{Error, Result};

/// Main configuration struct.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Upstream API configuration.
    #[serde(default)]
    pub api: ApiConfig,

    /// Report output configuration.
    #[serde(default)]
    pub report: ReportConfig,

    /// Category list and keyword sets.
    #[serde(default)]
    pub categories: CategoryConfig,
}

impl Config {
    /// Load configuration from a TOML file over the defaults.
    pub fn from_file(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let content = std::fs::read_to_string(&path)
            .map_err(|e| Error::Config(format!("Failed to read config file: {e}")))?;

        Ok(toml::from_str(&content)?)
    }

    /// Overlay environment variables onto this configuration.
    pub fn apply_env(&mut self) {
        if let Ok(key) = std::env::var("OPENROUTER_API_KEY") {
            if !key.is_empty() {
                self.api.api_key = Some(key);
            }
        }
        if let Ok(base_url) = std::env::var("MODELSCRAPOR_BASE_URL") {
            self.api.base_url = base_url;
        }
        if let Ok(dir) = std::env::var("MODELSCRAPOR_OUTPUT_DIR") {
            self.report.output_dir = PathBuf::from(dir);
        }
    }

    /// Load from the optional file, then the environment.
    pub fn load(path: Option<&std::path::Path>) -> Result<Self> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        config.apply_env();
        Ok(config)
    }

    /// The API credential, or a fatal configuration error.
    ///
    /// Checked before any network activity.
    pub fn require_api_key(&self) -> Result<&str> {
        self.api
            .api_key
            .as_deref()
            .filter(|k| !k.is_empty())
            .ok_or_else(|| {
                Error::Config(
                    "OPENROUTER_API_KEY not set; add it to the environment or a .env file".into(),
                )
            })
    }
}

/// Upstream API settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// API credential. Environment-only; never serialized.
    #[serde(skip)]
    pub api_key: Option<String>,

    /// Base API URL.
    pub base_url: String,

    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: "https://openrouter.ai/api/v1".to_string(),
            timeout_secs: 30,
        }
    }
}

/// Report output settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Directory the HTML and CSS files are written to.
    pub output_dir: PathBuf,

    /// Models shown per ranking subsection.
    pub top_n: usize,

    /// Cap on the free-tier shortlist.
    pub free_cap: usize,

    /// Conversation shape for cost estimates.
    pub conversation: ConversationShape,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("."),
            top_n: 10,
            free_cap: crate::rank::DEFAULT_FREE_CAP,
            conversation: ConversationShape::default(),
        }
    }
}
