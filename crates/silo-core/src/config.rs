use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Global configuration loaded from `~/.config/silo/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiloConfig {
    /// Object-store region identifier (e.g. "us-east-1").
    pub region: String,
    /// Optional endpoint override for S3-compatible stores (e.g. MinIO).
    #[serde(default)]
    pub endpoint: Option<String>,
    /// Fixed bucket for all loads. When set, the whole request path is the
    /// object key; when unset, the first path segment names the bucket.
    #[serde(default)]
    pub root_bucket: Option<String>,
    /// Buckets requests may read from. `None` allows any bucket; membership
    /// is checked case-insensitively.
    #[serde(default)]
    pub allowed_buckets: Option<Vec<String>>,
    /// Retry budget for transient object-store errors: additional attempts
    /// after the first. 0 means exactly one attempt.
    #[serde(default)]
    pub max_retry: u32,
    /// When true, requests whose URL starts with "http" bypass the object
    /// store and go to the HTTP origin delegate.
    #[serde(default)]
    pub enable_http_origin: bool,
    /// Use path-style addressing (bucket in the path, not the host).
    /// Required by most S3-compatible endpoints.
    #[serde(default)]
    pub force_path_style: bool,
}

impl Default for SiloConfig {
    fn default() -> Self {
        Self {
            region: "us-east-1".to_string(),
            endpoint: None,
            root_bucket: None,
            allowed_buckets: None,
            max_retry: 0,
            enable_http_origin: false,
            force_path_style: false,
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("silo")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<SiloConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = SiloConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: SiloConfig = toml::from_str(&data)?;
    Ok(cfg)
}
