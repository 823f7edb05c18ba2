use anyhow::Result;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Returns the blogfolio base directory: `~/.blogfolio`, fallback `/tmp/blogfolio`.
pub fn blogfolio_dir() -> PathBuf {
    dirs::home_dir()
        .map(|h| h.join(".blogfolio"))
        .unwrap_or_else(|| PathBuf::from("/tmp/blogfolio"))
}

fn default_data_dir() -> String {
    blogfolio_dir()
        .join("storage")
        .to_string_lossy()
        .to_string()
}

fn default_log_file() -> String {
    blogfolio_dir()
        .join("blogfolio.log")
        .to_string_lossy()
        .to_string()
}

// ---------------------------------------------------------------------------
// Top-level config
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub struct BlogfolioConfig {
    /// Directory holding the persistent store and per-session stores.
    #[serde(default = "default_data_dir")]
    pub data_dir: String,
    #[serde(default)]
    pub profile: ProfileConfig,
    #[serde(default)]
    pub counter: CounterConfig,
    #[serde(default)]
    pub log: LogConfig,
}

impl Default for BlogfolioConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            profile: ProfileConfig::default(),
            counter: CounterConfig::default(),
            log: LogConfig::default(),
        }
    }
}

impl BlogfolioConfig {
    pub fn data_path(&self) -> PathBuf {
        PathBuf::from(&self.data_dir)
    }
}

/// Load config from `$BLOGFOLIO_CONFIG`, else `~/.blogfolio/client.toml`.
/// A missing file yields the defaults.
pub fn load_config() -> Result<BlogfolioConfig> {
    let path = std::env::var("BLOGFOLIO_CONFIG")
        .map(PathBuf::from)
        .unwrap_or_else(|_| blogfolio_dir().join("client.toml"));
    load_config_from(&path)
}

pub fn load_config_from(path: &Path) -> Result<BlogfolioConfig> {
    if path.exists() {
        let contents = std::fs::read_to_string(path)?;
        let config = toml::from_str(&contents)?;
        tracing::debug!("loaded config from {}", path.display());
        Ok(config)
    } else {
        Ok(BlogfolioConfig::default())
    }
}

// ---------------------------------------------------------------------------
// Sections
// ---------------------------------------------------------------------------

/// Identity shown by the terminal prompt, `whoami` and `pwd`.
#[derive(Debug, Clone, Deserialize)]
pub struct ProfileConfig {
    #[serde(default = "default_user")]
    pub user: String,
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_cwd")]
    pub cwd: String,
}

impl Default for ProfileConfig {
    fn default() -> Self {
        Self {
            user: default_user(),
            host: default_host(),
            cwd: default_cwd(),
        }
    }
}

fn default_user() -> String {
    "asnan".to_string()
}

fn default_host() -> String {
    "blogfolio".to_string()
}

fn default_cwd() -> String {
    "/home/asnan/blogfolio".to_string()
}

#[derive(Debug, Deserialize)]
pub struct CounterConfig {
    #[serde(default = "default_animation_ms")]
    pub animation_ms: u64,
}

impl Default for CounterConfig {
    fn default() -> Self {
        Self {
            animation_ms: default_animation_ms(),
        }
    }
}

fn default_animation_ms() -> u64 {
    1000
}

#[derive(Debug, Deserialize)]
pub struct LogConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_file")]
    pub file: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: default_log_file(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}
