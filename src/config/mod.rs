pub mod client;
pub mod consts;

use serde::Deserialize;
use std::{fs, path::Path};

use crate::api::ApiVariant;

pub use client::{ClientArgs, ClientConfig};

/// Optional TOML file with deployment settings.
///
/// ```toml
/// api_url = "http://localhost:5000"
/// variant = "legacy"
/// timeout_secs = 15
/// ```
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub api_url: Option<String>,
    pub variant: Option<ApiVariant>,
    pub timeout_secs: Option<u64>,
}

/// Load configuration from a TOML file.
pub fn load_config_from_path<P: AsRef<Path>>(path: P) -> anyhow::Result<FileConfig> {
    let s = fs::read_to_string(path)?;
    let cfg: FileConfig = toml::from_str(&s)?;
    Ok(cfg)
}
