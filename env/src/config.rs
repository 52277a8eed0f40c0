//! Configuration of application

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;
use tokio::{fs::File, io::AsyncReadExt};
use tracing::info;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {1}", path = .0.display())]
    Io(PathBuf, std::io::Error),

    #[error("Invalid config file: {0}")]
    Invalid(#[from] toml::de::Error),
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GatewayConfig {
    /// API base URL, or a network name such as `devnet`.
    pub api: String,
    /// Bech32 address of the tournament hub contract.
    pub contract: String,
    pub timeout_ms: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CacheConfig {
    pub ttl_secs: u64,
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
pub struct Config {
    pub gateway: Option<GatewayConfig>,
    pub cache: Option<CacheConfig>,
}

impl Config {
    pub async fn from_path(path: &Path) -> Result<Config, ConfigError> {
        let path = PathBuf::from(shellexpand::tilde(&path.to_string_lossy()).into_owned());
        info!("Load configuration: {:?}", path);
        let mut buf = String::with_capacity(1024);
        let mut f = File::open(&path)
            .await
            .map_err(|e| ConfigError::Io(path.clone(), e))?;
        f.read_to_string(&mut buf)
            .await
            .map_err(|e| ConfigError::Io(path.clone(), e))?;
        Config::from_toml(&buf)
    }

    pub fn from_toml(s: &str) -> Result<Config, ConfigError> {
        Ok(toml::from_str(s)?)
    }
}
