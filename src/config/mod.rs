//! Configuration module for Promptdeck
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (PROMPTDECK_*)
//! 3. Project config (.promptdeck/config.toml)
//! 4. User config (~/.config/promptdeck/config.toml)
//! 5. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use loader::{ConfigWarning, PROJECT_CONFIG};
pub use types::{CatalogConfig, ColorMode, Config, DisplayConfig, OutputConfig};
