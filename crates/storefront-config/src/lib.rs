//! Storefront settings, persisted as `settings.toml` under the user's config
//! directory. A missing file yields defaults; so does a file that no longer
//! parses (logged, then ignored) so a bad edit never blocks start-up.

use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
    time::Duration,
};
use storefront_types::Language;
use thiserror::Error;

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "Storefront";

pub const DEFAULT_LOADING_FALLBACK_MS: u64 = 300;
pub const DEFAULT_HERO_INTERVAL_SECS: u32 = 5;
pub const DEFAULT_MAX_UPLOAD_BYTES: u64 = 5 * 1024 * 1024;
pub const DEFAULT_UPLOAD_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("config could not be serialized: {0}")]
    Serialize(#[from] toml::ser::Error),
}

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UploadConfig {
    pub endpoint: String,
    pub upload_preset: String,
    pub max_bytes: u64,
    /// Whole-request limit, connect through response body.
    pub timeout_secs: u64,
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            endpoint: "https://api.cloudinary.com/v1_1/storefront/image/upload".to_string(),
            upload_preset: "storefront_unsigned".to_string(),
            max_bytes: DEFAULT_MAX_UPLOAD_BYTES,
            timeout_secs: DEFAULT_UPLOAD_TIMEOUT_SECS,
        }
    }
}

impl UploadConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorefrontConfig {
    /// `None` follows the desktop locale.
    pub language: Option<Language>,
    pub loading_fallback_ms: u64,
    /// 0 disables hero auto-advance.
    pub hero_interval_secs: u32,
    pub upload: UploadConfig,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            language: None,
            loading_fallback_ms: DEFAULT_LOADING_FALLBACK_MS,
            hero_interval_secs: DEFAULT_HERO_INTERVAL_SECS,
            upload: UploadConfig::default(),
        }
    }
}

impl StorefrontConfig {
    pub fn loading_fallback(&self) -> Duration {
        Duration::from_millis(self.loading_fallback_ms)
    }

    pub fn hero_interval(&self) -> Option<Duration> {
        (self.hero_interval_secs > 0).then(|| Duration::from_secs(self.hero_interval_secs.into()))
    }
}

pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

pub fn load() -> Result<StorefrontConfig> {
    if let Some(path) = default_config_path()
        && path.exists()
    {
        return load_from_path(&path);
    }
    Ok(StorefrontConfig::default())
}

pub fn save(config: &StorefrontConfig) -> Result<()> {
    if let Some(path) = default_config_path() {
        return save_to_path(config, &path);
    }
    Ok(())
}

pub fn load_from_path(path: &Path) -> Result<StorefrontConfig> {
    let content = fs::read_to_string(path)?;
    match toml::from_str(&content) {
        Ok(config) => Ok(config),
        Err(e) => {
            tracing::warn!("ignoring invalid config at {}: {e}", path.display());
            Ok(StorefrontConfig::default())
        }
    }
}

pub fn save_to_path(config: &StorefrontConfig, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}
