//! Configuration management
//!
//! Settings live in `~/.config/reelview/config.toml`. A missing file means
//! defaults; the `TMDB_API_KEY` environment variable overrides the stored key.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

/// Environment variable that overrides `api.key`
pub const API_KEY_ENV: &str = "TMDB_API_KEY";

/// Largest accepted tiles-per-page value
pub const MAX_PAGE_SIZE: usize = 64;

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReelConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub carousel: CarouselConfig,
    #[serde(default)]
    pub tui: TuiConfig,
}

/// TMDB connection settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// TMDB v3 API key
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_image_base_url")]
    pub image_base_url: String,
    /// Language sent with search queries
    #[serde(default = "default_language")]
    pub language: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            key: None,
            base_url: default_base_url(),
            image_base_url: default_image_base_url(),
            language: default_language(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_base_url() -> String {
    "https://api.themoviedb.org/3".to_string()
}

fn default_image_base_url() -> String {
    "https://image.tmdb.org/t/p".to_string()
}

fn default_language() -> String {
    "en-US".to_string()
}

fn default_timeout_secs() -> u64 {
    15
}

/// Carousel paging and animation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CarouselConfig {
    /// Tiles per page on the Movies and TV tabs
    #[serde(default = "default_page_size")]
    pub page_size: usize,
    /// Tiles per page on the Search tab
    #[serde(default = "default_search_page_size")]
    pub search_page_size: usize,
    /// Length of a page slide, in milliseconds
    #[serde(default = "default_transition_ms")]
    pub transition_ms: u64,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
            search_page_size: default_search_page_size(),
            transition_ms: default_transition_ms(),
        }
    }
}

impl CarouselConfig {
    /// Page sizes must be in `1..=MAX_PAGE_SIZE`
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("page_size", self.page_size),
            ("search_page_size", self.search_page_size),
        ] {
            if !(1..=MAX_PAGE_SIZE).contains(&value) {
                bail!("carousel.{name} must be between 1 and {MAX_PAGE_SIZE}, got {value}");
            }
        }
        Ok(())
    }
}

fn default_page_size() -> usize {
    6
}

fn default_search_page_size() -> usize {
    8
}

fn default_transition_ms() -> u64 {
    1000
}

/// Color theme for the TUI
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TuiTheme {
    #[default]
    CatppuccinMocha,
    Dracula,
    Nord,
    Gruvbox,
}

impl std::fmt::Display for TuiTheme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::CatppuccinMocha => "catppuccin-mocha",
            Self::Dracula => "dracula",
            Self::Nord => "nord",
            Self::Gruvbox => "gruvbox",
        };
        write!(f, "{name}")
    }
}

/// TUI appearance
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TuiConfig {
    #[serde(default)]
    pub theme: TuiTheme,
}

impl ReelConfig {
    /// Directory holding the config file
    pub fn config_dir() -> Result<PathBuf> {
        project_dirs().map(|dirs| dirs.config_dir().to_path_buf())
    }

    /// Directory for the log file
    pub fn data_dir() -> Result<PathBuf> {
        project_dirs().map(|dirs| dirs.data_dir().to_path_buf())
    }

    /// Full path of the config file
    pub fn config_path() -> Result<PathBuf> {
        Self::config_dir().map(|dir| dir.join("config.toml"))
    }

    /// Check whether a config file has been written
    pub fn exists() -> bool {
        Self::config_path().map(|p| p.exists()).unwrap_or(false)
    }

    /// Load from the default location and apply environment overrides
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        let mut config = Self::load_from(&path)?;
        config.apply_env_key(std::env::var(API_KEY_ENV).ok());
        Ok(config)
    }

    /// Load from an explicit path; a missing file yields defaults
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;
        let config: Self = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config from {}", path.display()))?;
        config
            .carousel
            .validate()
            .with_context(|| format!("Invalid config in {}", path.display()))?;
        Ok(config)
    }

    /// Save to the default location
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    /// Save to an explicit path, creating parent directories
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;
        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config to {}", path.display()))
    }

    /// Replace the API key with an environment value, ignoring blanks
    pub fn apply_env_key(&mut self, value: Option<String>) {
        if let Some(key) = value.map(|v| v.trim().to_string())
            && !key.is_empty()
        {
            self.api.key = Some(key);
        }
    }

    /// The configured API key, if any
    pub fn api_key(&self) -> Option<&str> {
        self.api.key.as_deref().filter(|k| !k.trim().is_empty())
    }

    pub fn set_api_key(&mut self, key: impl Into<String>) {
        self.api.key = Some(key.into());
    }
}

fn project_dirs() -> Result<ProjectDirs> {
    ProjectDirs::from("", "", "reelview").context("Could not determine home directory")
}
