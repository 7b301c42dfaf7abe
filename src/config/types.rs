//! Configuration type definitions

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::DeckResult;

use super::loader::{self, ConfigWarning};

/// Catalog location
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct CatalogConfig {
    /// Path to the catalog file (.toml, .json, .yaml).
    ///
    /// Relative paths are resolved against the directory of the config
    /// file that set them.
    #[serde(default)]
    pub path: Option<PathBuf>,
}

/// Terminal output
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub color: ColorMode,

    #[serde(default = "default_true")]
    pub unicode: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            color: ColorMode::default(),
            unicode: true,
        }
    }
}

/// Content pane configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Items whose large category contains this marker are resource items:
    /// their links are shown instead of a prompt. Empty disables the feature.
    #[serde(default)]
    pub resource_marker: String,

    /// Shown in place of empty item content
    #[serde(default = "default_empty_content")]
    pub empty_content_placeholder: String,

    /// Shown when the selection resolves to no item
    #[serde(default = "default_empty_state")]
    pub empty_state_message: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            resource_marker: String::new(),
            empty_content_placeholder: default_empty_content(),
            empty_state_message: default_empty_state(),
        }
    }
}

impl DisplayConfig {
    /// Whether an item in `large_category` is displayed as a resource item
    pub fn is_resource_category(&self, large_category: &str) -> bool {
        !self.resource_marker.is_empty() && large_category.contains(&self.resource_marker)
    }
}

fn default_empty_content() -> String {
    "No description.".to_string()
}

fn default_empty_state() -> String {
    "Select a category to see its prompt.".to_string()
}

fn default_true() -> bool {
    true
}

/// `--color` counterpart for config files
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

/// Everything `config.toml` can set; each table falls back to its defaults.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub catalog: CatalogConfig,

    #[serde(default)]
    pub output: OutputConfig,

    #[serde(default)]
    pub display: DisplayConfig,
}

impl Config {
    /// Load one file, dropping unknown-key warnings
    pub fn load(path: &Path) -> DeckResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    pub fn load_with_warnings(path: &Path) -> DeckResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// First readable of `.promptdeck/config.toml` and the user config, then env overrides
    pub fn load_or_default(project_root: Option<&Path>) -> Self {
        loader::load_or_default(project_root)
    }

    pub fn with_env_overrides(self) -> Self {
        loader::with_env_overrides(self)
    }
}
