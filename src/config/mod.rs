mod types;

pub use types::*;

use crate::{Error, Result};
use std::env;
use tracing::debug;

pub async fn load() -> Result<Config> {
    let config_path = env::var("CONFIG_PATH").unwrap_or_else(|_| "config.yaml".to_string());

    debug!("Loading configuration from: {}", config_path);

    let config_str = tokio::fs::read_to_string(&config_path).await?;
    parse(&config_str)
}

pub fn parse(config_str: &str) -> Result<Config> {
    let config: Config = serde_yaml::from_str(config_str)?;

    for (name, source) in [
        ("model", &config.artifacts.model),
        ("features", &config.artifacts.features),
    ] {
        if source.path.trim().is_empty() {
            return Err(Error::config(format!("artifacts.{}.path is empty", name)));
        }
        if let Some(digest) = &source.sha256 {
            if digest.len() != 64 || !digest.chars().all(|c| c.is_ascii_hexdigit()) {
                return Err(Error::config(format!(
                    "artifacts.{}.sha256 must be 64 hex characters",
                    name
                )));
            }
        }
    }

    Ok(config)
}
