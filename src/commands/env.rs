//! Shared command setup: config, UI context and catalog source.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use promptdeck::config::Config;
use promptdeck::domain::entities::Catalog;
use promptdeck::domain::ports::CatalogSource;
use promptdeck::infrastructure::FsCatalogSource;
use promptdeck::presentation::Cli;
use promptdeck::DeckError;

use crate::ui::context::UiContext;

pub struct CommandEnv {
    pub config: Config,
    pub ui: UiContext,
    pub source: FsCatalogSource,
}

impl CommandEnv {
    /// Resolve config and catalog location from the global flags.
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let cwd = std::env::current_dir()?;
        let root = project_root(&cwd);
        let config = load_config(cli.config.as_deref(), &root)?;
        let ui = UiContext::new(cli.json, cli.color, &config);

        let path =
            catalog_path(cli.catalog.as_deref(), &config, &cwd).ok_or(DeckError::NoCatalog)?;
        tracing::debug!(
            catalog = %path.display(),
            root = %root.display(),
            "resolved catalog"
        );

        Ok(Self {
            config,
            ui,
            source: FsCatalogSource::new(path),
        })
    }

    /// Load the catalog, logging data-contract issues as warnings.
    pub fn load_catalog(&self) -> Result<Catalog> {
        let catalog = self.source.load_catalog().map_err(DeckError::from)?;
        for issue in catalog.validate() {
            tracing::warn!(code = issue.code(), "{}", issue);
        }
        Ok(catalog)
    }

    pub fn source_name(&self) -> String {
        self.source.describe()
    }
}

fn load_config(explicit: Option<&Path>, project_root: &Path) -> Result<Config> {
    let Some(path) = explicit else {
        return Ok(Config::load_or_default(Some(project_root)));
    };

    let (config, warnings) = Config::load_with_warnings(path)
        .with_context(|| format!("loading config {}", path.display()))?;
    warnings.iter().for_each(|warning| warning.log());
    Ok(config.with_env_overrides())
}

/// Nearest ancestor holding a `.promptdeck/` directory or a `.git` entry,
/// or `cwd` itself when there is none.
fn project_root(cwd: &Path) -> PathBuf {
    let is_root = |dir: &Path| dir.join(".promptdeck").is_dir() || dir.join(".git").exists();
    cwd.ancestors()
        .find(|dir| is_root(dir))
        .unwrap_or(cwd)
        .to_path_buf()
}

/// Relative paths resolve against the working directory. Config files have
/// already anchored theirs to the file's own directory.
fn catalog_path(flag: Option<&Path>, config: &Config, cwd: &Path) -> Option<PathBuf> {
    flag.or(config.catalog.path.as_deref()).map(|path| cwd.join(path))
}
