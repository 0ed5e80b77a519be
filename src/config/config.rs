use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::matcher::SearchMode;
use crate::table::DEFAULT_PAGE_SIZE;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub display: DisplayConfig,
    pub behavior: BehaviorConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Show a row-number column in rendered tables
    pub show_row_numbers: bool,

    /// Compact table borders (less padding, more data visible)
    pub compact_mode: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BehaviorConfig {
    /// Rows per page
    pub page_size: usize,

    /// Free-text search mode: "substring", "regex", "fuzzy"
    pub search_mode: String,

    /// Minimum fuzzy score for a match (fuzzy mode only)
    pub fuzzy_threshold: i64,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            show_row_numbers: false,
            compact_mode: false,
        }
    }
}

impl Default for BehaviorConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            search_mode: "substring".to_string(),
            fuzzy_threshold: 0,
        }
    }
}

impl BehaviorConfig {
    /// Parse the configured search mode, falling back to substring on an
    /// unknown value.
    pub fn resolved_search_mode(&self) -> SearchMode {
        SearchMode::parse(&self.search_mode).unwrap_or_else(|| {
            tracing::warn!(
                target: "config",
                "unknown search_mode '{}', using substring",
                self.search_mode
            );
            SearchMode::Substring
        })
    }
}

impl Config {
    /// Load config from the default location, creating a default file on
    /// first run.
    pub fn load() -> Result<Self> {
        let config_path = Self::get_config_path()?;

        if !config_path.exists() {
            let default_config = Self::default();
            default_config.save()?;
            return Ok(default_config);
        }

        Self::load_from(&config_path)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Save config to the default location.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::get_config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let contents = toml::to_string_pretty(self)?;
        fs::write(path, contents)?;
        Ok(())
    }

    /// Default config file path.
    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;

        Ok(config_dir.join("review-desk").join("config.toml"))
    }
}
