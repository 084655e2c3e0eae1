//! Shopping list configuration stored in `shoplist.toml`.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};

/// Default config file name, looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = "shoplist.toml";

/// Shopping list configuration (TOML).
///
/// Missing fields default to values suitable for a local single-user setup.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ShoplistConfig {
    /// JSON file holding the list. Relative paths resolve against the
    /// directory containing the config file.
    pub list_path: PathBuf,

    /// What to do when the list file exists but cannot be decoded.
    pub on_corrupt: CorruptPolicy,

    pub server: ServerConfig,
}

/// Handling of a list file that does not decode into a well-formed list.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum CorruptPolicy {
    /// Surface the decode error; the server refuses to start.
    #[default]
    Fail,
    /// Move the file aside to `<file>.corrupt` and start from an empty list.
    Reset,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ServerConfig {
    /// Address to bind the HTTP server to.
    pub bind: String,
    pub port: u16,
    /// Page title and heading.
    pub title: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: "127.0.0.1".to_string(),
            port: 3000,
            title: "Shopping list".to_string(),
        }
    }
}

impl Default for ShoplistConfig {
    fn default() -> Self {
        Self {
            list_path: PathBuf::from("shopping_list.json"),
            on_corrupt: CorruptPolicy::default(),
            server: ServerConfig::default(),
        }
    }
}

impl ShoplistConfig {
    pub fn validate(&self) -> Result<()> {
        if self.list_path.as_os_str().is_empty() {
            return Err(anyhow!("list_path must not be empty"));
        }
        if self.server.bind.trim().is_empty() {
            return Err(anyhow!("server.bind must not be empty"));
        }
        if self.server.port == 0 {
            return Err(anyhow!("server.port must be > 0"));
        }
        if self.server.title.trim().is_empty() {
            return Err(anyhow!("server.title must not be blank"));
        }
        Ok(())
    }

    /// Resolve `list_path` relative to the directory of `config_path`.
    pub fn resolved_list_path(&self, config_path: &Path) -> PathBuf {
        if self.list_path.is_absolute() {
            return self.list_path.clone();
        }
        match config_path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir.join(&self.list_path),
            _ => self.list_path.clone(),
        }
    }
}

/// Load config from a TOML file.
///
/// If the file is missing, returns `ShoplistConfig::default()`.
pub fn load_config(path: &Path) -> Result<ShoplistConfig> {
    if !path.exists() {
        let cfg = ShoplistConfig::default();
        cfg.validate()?;
        return Ok(cfg);
    }
    let contents = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: ShoplistConfig =
        toml::from_str(&contents).with_context(|| format!("parse {}", path.display()))?;
    cfg.validate()?;
    Ok(cfg)
}

/// Atomically write config to disk (temp file + rename).
pub fn write_config(path: &Path, cfg: &ShoplistConfig) -> Result<()> {
    cfg.validate()?;
    let mut buf = toml::to_string_pretty(cfg).context("serialize config toml")?;
    buf.push('\n');
    write_atomic(path, &buf)
}

fn write_atomic(path: &Path, contents: &str) -> Result<()> {
    let parent = path
        .parent()
        .with_context(|| format!("config path missing parent {}", path.display()))?;
    if !parent.as_os_str().is_empty() {
        fs::create_dir_all(parent)
            .with_context(|| format!("create directory {}", parent.display()))?;
    }
    let tmp_path = path.with_extension("toml.tmp");
    fs::write(&tmp_path, contents)
        .with_context(|| format!("write temp config {}", tmp_path.display()))?;
    fs::rename(&tmp_path, path).with_context(|| format!("replace config {}", path.display()))?;
    Ok(())
}
