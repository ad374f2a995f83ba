//! Configuration structures and loading logic.

use crate::config::modes::DirectivePolicy;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Default config file looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "pastebin-fetch.toml";

/// Main configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub account: AccountConfig,

    #[serde(default)]
    pub endpoints: EndpointsConfig,

    #[serde(default)]
    pub options: OptionsConfig,
}

/// Pastebin developer credentials.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AccountConfig {
    /// Pastebin API developer key.
    #[serde(default)]
    pub developer_key: String,

    /// Pastebin account name.
    #[serde(default)]
    pub username: String,

    /// Pastebin account password.
    #[serde(default)]
    pub password: String,
}

/// Pastebin API endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EndpointsConfig {
    /// Login endpoint returning a user session key.
    #[serde(default = "default_login_url")]
    pub login_url: String,

    /// Post endpoint used for listing pastes.
    #[serde(default = "default_post_url")]
    pub post_url: String,

    /// Base URL raw paste content is served from.
    #[serde(default = "default_raw_base_url")]
    pub raw_base_url: String,
}

/// Fetch options configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OptionsConfig {
    /// Title of the paste to fetch.
    #[serde(default = "default_target_title")]
    pub target_title: String,

    /// Output file used when the paste carries no filename directive.
    #[serde(default = "default_output_file")]
    pub output_file: PathBuf,

    /// Directory directive-named files are written to.
    #[serde(default)]
    pub output_directory: Option<PathBuf>,

    /// Where a filename directive may appear in the paste.
    #[serde(default)]
    pub directive_policy: DirectivePolicy,

    /// HTTP request timeout in seconds.
    #[serde(default)]
    pub timeout_seconds: Option<u64>,

    /// Whether to show a spinner while talking to the API.
    #[serde(default = "default_true")]
    pub show_progress: bool,
}

impl Default for EndpointsConfig {
    fn default() -> Self {
        Self {
            login_url: default_login_url(),
            post_url: default_post_url(),
            raw_base_url: default_raw_base_url(),
        }
    }
}

impl Default for OptionsConfig {
    fn default() -> Self {
        Self {
            target_title: default_target_title(),
            output_file: default_output_file(),
            output_directory: None,
            directive_policy: DirectivePolicy::default(),
            timeout_seconds: None,
            show_progress: true,
        }
    }
}

fn default_login_url() -> String {
    "https://pastebin.com/api/api_login.php".to_string()
}

fn default_post_url() -> String {
    "https://pastebin.com/api/api_post.php".to_string()
}

fn default_raw_base_url() -> String {
    "https://pastebin.com/raw".to_string()
}

fn default_target_title() -> String {
    "GCODE".to_string()
}

fn default_output_file() -> PathBuf {
    PathBuf::from("paste.txt")
}

fn default_true() -> bool {
    true
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                Error::Config(format!(
                    "Configuration file not found: {}",
                    path.display()
                ))
            } else {
                Error::Io(e)
            }
        })?;

        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Get the effective output directory.
    pub fn output_directory(&self) -> PathBuf {
        self.options
            .output_directory
            .clone()
            .unwrap_or_else(|| PathBuf::from("."))
    }

    /// Get the HTTP request timeout, if one is configured.
    pub fn timeout(&self) -> Option<Duration> {
        self.options.timeout_seconds.map(Duration::from_secs)
    }
}
