use crate::types::ColorChoice;
use anyhow::{Result, anyhow, bail};
use serde::Deserialize;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

pub const CONFIG_ENV: &str = "DBDO_CONFIG";

/// Resolve the config file path based on priority:
/// 1. Explicit `--config` path (with tilde expansion)
/// 2. DBDO_CONFIG environment variable (with tilde expansion)
/// 3. `<config dir>/dbdo/config.toml`
pub fn resolve_config_path(explicit: Option<&Path>) -> Option<PathBuf> {
    resolve_config_path_with(explicit, std::env::var_os(CONFIG_ENV))
}

fn resolve_config_path_with(explicit: Option<&Path>, env: Option<OsString>) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(expand_tilde(path));
    }

    if let Some(env_path) = env.filter(|p| !p.is_empty()) {
        return Some(expand_tilde(Path::new(&env_path)));
    }

    dirs::config_dir().map(|dir| dir.join("dbdo").join("config.toml"))
}

/// Expand tilde (~) in paths to the user's home directory
fn expand_tilde(path: &Path) -> PathBuf {
    if let Ok(stripped) = path.strip_prefix("~")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(stripped);
    }
    path.to_path_buf()
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ConnectionConfig {
    pub url: Option<String>,
    pub user: Option<String>,
    pub password: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct DisplayConfig {
    pub width: Option<u16>,
    pub color: Option<ColorChoice>,
}

/// Optional defaults for flags that would otherwise be typed on every run.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub connection: ConnectionConfig,
    #[serde(default)]
    pub display: DisplayConfig,
}

impl Config {
    /// Load the config for this run. A missing default file means defaults;
    /// a missing file named with `--config` is an error.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let Some(path) = resolve_config_path(explicit) else {
            return Ok(Self::default());
        };

        if explicit.is_some() && !path.exists() {
            bail!("Config file not found: {}", path.display());
        }

        Self::load_from(&path)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .map_err(|e| anyhow!("Failed to read config file {}: {}", path.display(), e))?;
        let config = Self::parse(&content)
            .map_err(|e| anyhow!("Invalid config file {}: {}", path.display(), e))?;

        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    pub fn parse(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)?;
        if config.display.width == Some(0) {
            bail!("display.width must be at least 1");
        }
        Ok(config)
    }
}
