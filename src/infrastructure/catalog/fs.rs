//! File-backed catalog source
//!
//! Reads a whole catalog file at once. The format is chosen from the file
//! extension:
//!
//! - `.toml` - `[[items]]` tables
//! - `.json` - a top-level array, or `{ "items": [...] }`
//! - `.yaml` / `.yml` - a top-level sequence, or `items:` mapping
//!
//! Unknown keys are tolerated and logged as warnings.

use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::entities::CatalogItem;
use crate::domain::ports::{CatalogLoadError, CatalogSource};

use super::record::{CatalogTable, ItemRecord};

/// Catalog file formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogFormat {
    Toml,
    Json,
    Yaml,
}

impl CatalogFormat {
    /// Detect the format from a path's extension
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "toml" => Some(Self::Toml),
            "json" => Some(Self::Json),
            "yaml" | "yml" => Some(Self::Yaml),
            _ => None,
        }
    }
}

/// Catalog source that reads a local file
#[derive(Debug, Clone)]
pub struct FsCatalogSource {
    path: PathBuf,
}

impl FsCatalogSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn parse_error(&self, message: impl ToString) -> CatalogLoadError {
        CatalogLoadError::Parse {
            path: self.path.clone(),
            message: message.to_string(),
        }
    }
}

impl CatalogSource for FsCatalogSource {
    fn load(&self) -> Result<Vec<CatalogItem>, CatalogLoadError> {
        if !self.path.exists() {
            return Err(CatalogLoadError::NotFound {
                path: self.path.clone(),
            });
        }

        let format = CatalogFormat::from_path(&self.path).ok_or_else(|| {
            CatalogLoadError::UnsupportedFormat {
                path: self.path.clone(),
                extension: self
                    .path
                    .extension()
                    .map(|e| e.to_string_lossy().to_string())
                    .unwrap_or_default(),
            }
        })?;

        let content = fs::read_to_string(&self.path)?;
        let mut ignored: Vec<String> = Vec::new();

        let records = match format {
            CatalogFormat::Toml => parse_toml(&content, &mut ignored),
            CatalogFormat::Json => parse_json(&content, &mut ignored),
            CatalogFormat::Yaml => parse_yaml(&content, &mut ignored),
        }
        .map_err(|message| self.parse_error(message))?;

        for key in &ignored {
            tracing::warn!(path = %self.path.display(), key = %key, "ignoring unknown catalog key");
        }

        let items: Vec<CatalogItem> = records.into_iter().map(CatalogItem::from).collect();
        tracing::info!(
            path = %self.path.display(),
            items = items.len(),
            "loaded catalog"
        );
        Ok(items)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

fn parse_toml(content: &str, ignored: &mut Vec<String>) -> Result<Vec<ItemRecord>, String> {
    let deserializer = toml::de::Deserializer::new(content);
    let table: CatalogTable = serde_ignored::deserialize(deserializer, |path| {
        ignored.push(path.to_string());
    })
    .map_err(|e| e.to_string())?;
    Ok(table.items)
}

fn parse_json(content: &str, ignored: &mut Vec<String>) -> Result<Vec<ItemRecord>, String> {
    let value: serde_json::Value = serde_json::from_str(content).map_err(|e| e.to_string())?;
    let mut on_ignored = |path: serde_ignored::Path<'_>| ignored.push(path.to_string());

    if value.is_array() {
        serde_ignored::deserialize(value, &mut on_ignored).map_err(|e| e.to_string())
    } else {
        let table: CatalogTable =
            serde_ignored::deserialize(value, &mut on_ignored).map_err(|e| e.to_string())?;
        Ok(table.items)
    }
}

fn parse_yaml(content: &str, ignored: &mut Vec<String>) -> Result<Vec<ItemRecord>, String> {
    let value: serde_yaml_ng::Value =
        serde_yaml_ng::from_str(content).map_err(|e| e.to_string())?;
    let mut on_ignored = |path: serde_ignored::Path<'_>| ignored.push(path.to_string());

    if value.is_sequence() {
        serde_ignored::deserialize(value, &mut on_ignored).map_err(|e| e.to_string())
    } else {
        let table: CatalogTable =
            serde_ignored::deserialize(value, &mut on_ignored).map_err(|e| e.to_string())?;
        Ok(table.items)
    }
}
