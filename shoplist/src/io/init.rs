//! Scaffolding for a fresh shopping list directory.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};

use super::config::{CONFIG_FILE_NAME, ShoplistConfig, write_config};
use super::list_store::ListStore;
use crate::list::ShoppingList;

/// Canonical paths for a list directory.
#[derive(Debug, Clone)]
pub struct ShoplistPaths {
    pub root: PathBuf,
    pub config_path: PathBuf,
    pub list_path: PathBuf,
}

impl ShoplistPaths {
    /// Paths for the default config in `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        let config_path = root.join(CONFIG_FILE_NAME);
        let list_path = ShoplistConfig::default().resolved_list_path(&config_path);
        Self {
            root,
            config_path,
            list_path,
        }
    }
}

/// Options for `init_shoplist`.
#[derive(Debug, Clone)]
pub struct InitOptions {
    /// If true, overwrite an existing config file.
    pub force: bool,
}

/// Write a default `shoplist.toml` and an empty list into `root`.
///
/// Fails if the config already exists unless `options.force` is set. An
/// existing list file is never overwritten.
pub fn init_shoplist(root: &Path, options: &InitOptions) -> Result<ShoplistPaths> {
    let paths = ShoplistPaths::new(root);
    if paths.config_path.exists() && !options.force {
        return Err(anyhow!(
            "shoplist init: {} already exists (use --force to overwrite)",
            paths.config_path.display()
        ));
    }

    let cfg = ShoplistConfig::default();
    write_config(&paths.config_path, &cfg)?;

    if !paths.list_path.exists() {
        let store = ListStore::new(&paths.list_path, cfg.on_corrupt);
        store
            .save(&ShoppingList::new())
            .with_context(|| format!("create list {}", paths.list_path.display()))?;
    }

    Ok(paths)
}
