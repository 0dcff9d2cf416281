use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Number of worker slots when neither config nor CLI override it.
pub const DEFAULT_WORKERS: usize = 5;

/// HTTP transport settings (optional `[http]` section in config.toml).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HttpConfig {
    /// Follow `Location` redirects using libcurl's default redirect limit.
    #[serde(default = "default_follow_redirects")]
    pub follow_redirects: bool,
    /// Optional `User-Agent` header; libcurl sends none when unset.
    #[serde(default)]
    pub user_agent: Option<String>,
}

fn default_follow_redirects() -> bool {
    true
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            follow_redirects: true,
            user_agent: None,
        }
    }
}

/// Global configuration loaded from `~/.config/gocount/config.toml`.
///
/// The search pattern is fixed and intentionally absent here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GocountConfig {
    /// Maximum number of sources fetched and counted at once.
    #[serde(default = "default_workers")]
    pub workers: usize,
    #[serde(default)]
    pub http: HttpConfig,
}

fn default_workers() -> usize {
    DEFAULT_WORKERS
}

impl Default for GocountConfig {
    fn default() -> Self {
        Self {
            workers: DEFAULT_WORKERS,
            http: HttpConfig::default(),
        }
    }
}

impl GocountConfig {
    /// Worker slot count, never less than one.
    pub fn effective_workers(&self) -> usize {
        self.workers.max(1)
    }

    /// Worker slot count with an optional override (e.g. `--workers`) taking
    /// precedence; never less than one.
    pub fn workers_with_override(&self, workers: Option<usize>) -> usize {
        workers.unwrap_or(self.workers).max(1)
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("gocount")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<GocountConfig> {
    load_or_init_at(&config_path()?)
}

/// Same as [`load_or_init`] for an explicit path.
pub fn load_or_init_at(path: &Path) -> Result<GocountConfig> {
    if !path.exists() {
        let default_cfg = GocountConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, toml).with_context(|| format!("write {}", path.display()))?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    load_at(path)
}

/// Read the config at `path` without creating anything; a missing file
/// yields the defaults.
pub fn load_at(path: &Path) -> Result<GocountConfig> {
    if !path.exists() {
        return Ok(GocountConfig::default());
    }
    let data = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: GocountConfig =
        toml::from_str(&data).with_context(|| format!("parse {}", path.display()))?;
    Ok(cfg)
}

/// Config for a counting run: never fails and never writes. Any problem
/// locating or reading the file is logged and the defaults are used.
/// `path` is the outcome of [`find_config_path`]; `Ok(None)` means no file.
pub fn load_or_default(path: Result<Option<PathBuf>>) -> GocountConfig {
    match path.and_then(|p| p.map(|p| load_at(&p)).transpose()) {
        Ok(Some(cfg)) => cfg,
        Ok(None) => GocountConfig::default(),
        Err(e) => {
            tracing::warn!("config unavailable, using defaults: {:#}", e);
            GocountConfig::default()
        }
    }
}

/// Existing config file, if any. Creates nothing.
pub fn find_config_path() -> Result<Option<PathBuf>> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("gocount")?;
    Ok(xdg_dirs.find_config_file("config.toml"))
}
