use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

/// Global configuration loaded from `~/.config/catgrab/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatgrabConfig {
    /// Number of concurrent download workers.
    pub workers: usize,
    /// Directory where product images are stored.
    pub images_dir: PathBuf,
    /// Optional whole-transfer timeout per image, in seconds. Absent by
    /// default: a hung transfer blocks its worker, matching the baseline.
    #[serde(default)]
    pub image_timeout_secs: Option<u64>,
}

impl Default for CatgrabConfig {
    fn default() -> Self {
        Self {
            workers: 4,
            images_dir: PathBuf::from("images"),
            image_timeout_secs: None,
        }
    }
}

impl CatgrabConfig {
    /// Per-image transfer timeout as a `Duration`, if configured.
    pub fn image_timeout(&self) -> Option<Duration> {
        self.image_timeout_secs.map(Duration::from_secs)
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("catgrab")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<CatgrabConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = CatgrabConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: CatgrabConfig = toml::from_str(&data)?;
    Ok(cfg)
}
