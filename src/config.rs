use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::model::NavItem;

/// Sample menu bundled with the binary, used when no tree file is given
pub const SAMPLE_TREE: &str = include_str!("../data/tree.json");

#[derive(Debug, Deserialize)]
pub struct Config {
    /// Title of the root level
    #[serde(default = "default_root_title")]
    pub root_title: String,
    /// Path to the menu tree JSON file
    #[serde(default)]
    pub tree_path: Option<PathBuf>,
    #[serde(default)]
    pub vim_mode: bool,
    #[serde(default = "default_icon_mode")]
    pub icon_mode: String,
}

fn default_root_title() -> String {
    "Menu".to_string()
}

fn default_icon_mode() -> String {
    "emoji".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            root_title: default_root_title(),
            tree_path: None,
            vim_mode: false,
            icon_mode: default_icon_mode(),
        }
    }
}

/// Platform-specific default config location (e.g. ~/.config/drilltui/config.json)
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("drilltui").join("config.json"))
}

/// Load the config file, falling back to defaults when none exists.
///
/// An explicit `path` must exist; the default location is optional.
pub fn load_config(path: Option<&Path>) -> Result<Config> {
    let (path, required) = match path {
        Some(p) => (p.to_path_buf(), true),
        None => match default_config_path() {
            Some(p) => (p, false),
            None => return Ok(Config::default()),
        },
    };

    if !path.exists() {
        if required {
            anyhow::bail!("config file not found: {}", path.display());
        }
        return Ok(Config::default());
    }

    let contents = std::fs::read_to_string(&path)
        .with_context(|| format!("failed to read config file {}", path.display()))?;
    serde_json::from_str(&contents)
        .with_context(|| format!("failed to parse config file {}", path.display()))
}

/// Load the menu tree from `path`, or the bundled sample when absent.
pub fn load_tree(path: Option<&Path>) -> Result<Arc<[NavItem]>> {
    let items: Vec<NavItem> = match path {
        Some(path) => {
            let contents = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read tree file {}", path.display()))?;
            serde_json::from_str(&contents)
                .with_context(|| format!("failed to parse tree file {}", path.display()))?
        }
        None => serde_json::from_str(SAMPLE_TREE).context("bundled sample tree is invalid")?,
    };
    Ok(items.into())
}
