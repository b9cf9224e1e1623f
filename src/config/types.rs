use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    #[serde(default)]
    pub artifacts: ArtifactsConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default)]
    pub logs: LogsConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogsConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArtifactsConfig {
    #[serde(default = "default_model_source")]
    pub model: ArtifactSource,
    #[serde(default = "default_features_source")]
    pub features: ArtifactSource,
}

/// Where an artifact lives locally, and optionally where to download it from.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ArtifactSource {
    pub path: String,
    #[serde(default)]
    pub url: Option<String>,
    /// Hex-encoded SHA-256 of the artifact bytes.
    #[serde(default)]
    pub sha256: Option<String>,
}

impl ArtifactSource {
    pub fn local(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            url: None,
            sha256: None,
        }
    }
}

impl Default for LogsConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl Default for ArtifactsConfig {
    fn default() -> Self {
        Self {
            model: default_model_source(),
            features: default_features_source(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_model_source() -> ArtifactSource {
    ArtifactSource::local("data/model.json")
}

fn default_features_source() -> ArtifactSource {
    ArtifactSource::local("data/features.json")
}
