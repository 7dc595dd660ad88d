use anyhow::{Context, Result, bail};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::util::date::{DateRange, parse_display_date};

pub const DEFAULT_API_URL: &str = "https://performance-github.onrender.com";
pub const DEFAULT_FROM: &str = "28/07/2025";
pub const DEFAULT_TO: &str = "25/08/2025";
pub const DEFAULT_PAGE_SIZE: usize = 10;
pub const DEFAULT_MESSAGE_WIDTH: usize = 50;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub dashboard: DashboardConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_api_url")]
    pub base_url: String,
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardConfig {
    #[serde(default = "default_from")]
    pub default_from: String,
    #[serde(default = "default_to")]
    pub default_to: String,
    #[serde(default = "default_page_size")]
    pub page_size: usize,
    #[serde(default)]
    pub discard_stale_responses: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    #[serde(default = "default_message_width")]
    pub message_width: usize,
}

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}
fn default_from() -> String {
    DEFAULT_FROM.to_string()
}
fn default_to() -> String {
    DEFAULT_TO.to_string()
}
fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}
fn default_message_width() -> usize {
    DEFAULT_MESSAGE_WIDTH
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_api_url(),
            timeout_secs: None,
        }
    }
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            default_from: default_from(),
            default_to: default_to(),
            page_size: default_page_size(),
            discard_stale_responses: false,
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            message_width: default_message_width(),
        }
    }
}

impl AppConfig {
    pub fn load(path: Option<&Path>) -> Result<Self> {
        if let Some(path) = path {
            return Self::read_file(path);
        }

        let mut candidates = Vec::new();

        // 1. ~/.config/teamrank/config.toml
        if let Some(home) = std::env::var_os("HOME") {
            candidates.push(PathBuf::from(home).join(".config/teamrank/config.toml"));
        }

        // 2. Platform-specific config dir
        if let Some(proj_dirs) = ProjectDirs::from("", "", "teamrank") {
            candidates.push(proj_dirs.config_dir().join("config.toml"));
        }

        for config_path in &candidates {
            if config_path.exists() {
                return Self::read_file(config_path);
            }
        }

        Ok(AppConfig::default())
    }

    fn read_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config: AppConfig =
            toml::from_str(&content).with_context(|| "Failed to parse config file")?;
        config
            .validate()
            .with_context(|| format!("Invalid config file: {}", path.display()))?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        let url = &self.api.base_url;
        if !(url.starts_with("https://") || url.starts_with("http://")) {
            bail!("api.base_url must be an http(s) URL: {}", url);
        }
        if self.dashboard.page_size == 0 {
            bail!("dashboard.page_size must be greater than zero");
        }
        parse_display_date(&self.dashboard.default_from)
            .context("dashboard.default_from is not a DD/MM/YYYY date")?;
        parse_display_date(&self.dashboard.default_to)
            .context("dashboard.default_to is not a DD/MM/YYYY date")?;
        Ok(())
    }

    pub fn default_range(&self) -> DateRange {
        DateRange::new(&self.dashboard.default_from, &self.dashboard.default_to)
    }

    pub fn log_dir(&self) -> PathBuf {
        if let Some(proj_dirs) = ProjectDirs::from("", "", "teamrank") {
            return proj_dirs.data_dir().join("logs");
        }
        PathBuf::from(".local/share/teamrank/logs")
    }
}
