//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{DeckError, DeckResult};

use super::types::{ColorMode, Config};

/// A key the config file sets that no setting reads
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub file: PathBuf,
    /// Last segment of the dotted path, e.g. `colour` for `output.colour`
    pub key: String,
    pub line: Option<usize>,
    /// Closest known key in the same table, if one is near enough
    pub suggestion: Option<String>,
}

impl ConfigWarning {
    fn new(file: &Path, content: &str, dotted: &str) -> Self {
        let (table, key) = dotted.rsplit_once('.').unwrap_or(("", dotted));
        Self {
            file: file.to_path_buf(),
            key: key.to_string(),
            line: key_line(content, key),
            suggestion: suggest_key(table, key).map(str::to_string),
        }
    }

    pub fn log(&self) {
        tracing::warn!(
            file = %self.file.display(),
            key = %self.key,
            line = self.line,
            suggestion = self.suggestion.as_deref(),
            "unknown config key"
        );
    }
}

/// Project-level config location, relative to the project root
pub const PROJECT_CONFIG: &str = ".promptdeck/config.toml";

/// Parse one config file, collecting keys nothing reads.
///
/// A relative `catalog.path` is resolved against the config file's directory.
pub fn load_with_warnings(path: &Path) -> DeckResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;

    let mut ignored = Vec::new();
    let mut config: Config =
        serde_ignored::deserialize(toml::de::Deserializer::new(&content), |key| {
            ignored.push(key.to_string());
        })
        .map_err(|e| DeckError::InvalidConfig {
            file: path.to_path_buf(),
            message: e.to_string(),
        })?;

    if let (Some(catalog), Some(dir)) = (config.catalog.path.as_mut(), path.parent()) {
        if catalog.is_relative() {
            *catalog = dir.join(&*catalog);
        }
    }

    let warnings = ignored
        .iter()
        .map(|dotted| ConfigWarning::new(path, &content, dotted))
        .collect();
    Ok((config, warnings))
}

/// Project config, then user config, then defaults
pub fn load_or_default(project_root: Option<&Path>) -> Config {
    let mut candidates: Vec<PathBuf> = Vec::new();
    if let Some(root) = project_root {
        candidates.push(root.join(PROJECT_CONFIG));
    }
    if let Some(user_config_dir) = dirs_config_dir() {
        candidates.push(user_config_dir.join("promptdeck/config.toml"));
    }

    for path in candidates {
        if !path.exists() {
            continue;
        }
        match load_with_warnings(&path) {
            Ok((config, warnings)) => {
                warnings.iter().for_each(ConfigWarning::log);
                tracing::debug!(file = %path.display(), "loaded config");
                return with_env_overrides(config);
            }
            Err(err) => {
                tracing::warn!(file = %path.display(), error = %err, "skipping unreadable config");
            }
        }
    }

    with_env_overrides(Config::default())
}

/// Apply environment variable overrides (PROMPTDECK_* prefix)
pub fn with_env_overrides(config: Config) -> Config {
    with_env_overrides_from(config, |key| std::env::var(key).ok())
}

pub(crate) fn with_env_overrides_from(
    mut config: Config,
    get_env: impl Fn(&str) -> Option<String>,
) -> Config {
    // PROMPTDECK_CATALOG
    if let Some(path) = get_env("PROMPTDECK_CATALOG").filter(|p| !p.is_empty()) {
        config.catalog.path = Some(PathBuf::from(path));
    }

    // PROMPTDECK_COLOR
    if let Some(color) = get_env("PROMPTDECK_COLOR") {
        config.output.color = match color.to_lowercase().as_str() {
            "always" => ColorMode::Always,
            "never" => ColorMode::Never,
            _ => ColorMode::Auto,
        };
    }

    // PROMPTDECK_UNICODE
    if let Some(val) = get_env("PROMPTDECK_UNICODE") {
        config.output.unicode = val.to_lowercase() != "false" && val != "0";
    }

    // PROMPTDECK_RESOURCE_MARKER
    if let Some(marker) = get_env("PROMPTDECK_RESOURCE_MARKER") {
        config.display.resource_marker = marker;
    }

    config
}

/// Get XDG config directory
fn dirs_config_dir() -> Option<PathBuf> {
    std::env::var("XDG_CONFIG_HOME")
        .ok()
        .map(PathBuf::from)
        .or_else(dirs::config_dir)
}

/// Keys each table accepts; `""` is the top level
const KNOWN_KEYS: &[(&str, &[&str])] = &[
    ("", &["catalog", "output", "display"]),
    ("catalog", &["path"]),
    ("output", &["color", "unicode"]),
    (
        "display",
        &[
            "resource_marker",
            "empty_content_placeholder",
            "empty_state_message",
        ],
    ),
];

const MAX_SUGGESTION_DISTANCE: usize = 2;

/// First line that assigns `key`, 1-based
fn key_line(content: &str, key: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| {
            line.trim_start()
                .strip_prefix(key)
                .is_some_and(|rest| rest.trim_start().starts_with('='))
        })
        .map(|index| index + 1)
}

pub(crate) fn suggest_key(table: &str, unknown: &str) -> Option<&'static str> {
    let (_, keys) = KNOWN_KEYS.iter().find(|(name, _)| *name == table)?;
    keys.iter()
        .map(|known| (*known, edit_distance(unknown, known)))
        .filter(|(_, distance)| *distance <= MAX_SUGGESTION_DISTANCE)
        .min_by_key(|(_, distance)| *distance)
        .map(|(known, _)| known)
}

/// Levenshtein distance over chars, keeping a single row
fn edit_distance(a: &str, b: &str) -> usize {
    let b: Vec<char> = b.chars().collect();
    let mut row: Vec<usize> = (0..=b.len()).collect();
    for (i, ca) in a.chars().enumerate() {
        let mut diagonal = row[0];
        row[0] = i + 1;
        for (j, &cb) in b.iter().enumerate() {
            let above = row[j + 1];
            row[j + 1] = if ca == cb {
                diagonal
            } else {
                1 + diagonal.min(above).min(row[j])
            };
            diagonal = above;
        }
    }
    row[b.len()]
}
