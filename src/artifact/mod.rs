use crate::{
    Error, Result,
    config::{ArtifactSource, ArtifactsConfig},
    features::FeatureSchema,
    model::ModelArtifact,
    predictor::Predictor,
};
use sha2::{Digest, Sha256};
use std::{
    path::{Path, PathBuf},
    sync::Arc,
};
use tracing::{debug, info, warn};

/// Makes sure `source` is available at its local path.
///
/// An existing file is used as-is when no digest is configured or the digest
/// matches. Otherwise the file is downloaded from `source.url` (when set),
/// verified, and written next to its destination before being renamed into
/// place, so a failed download never leaves a partial artifact behind.
pub async fn ensure_artifact(client: &reqwest::Client, source: &ArtifactSource) -> Result<PathBuf> {
    let path = PathBuf::from(&source.path);

    if tokio::fs::try_exists(&path).await? {
        let Some(expected) = &source.sha256 else {
            debug!("Using local artifact {}", path.display());
            return Ok(path);
        };

        let bytes = tokio::fs::read(&path).await?;
        match verify_digest(&path, expected, &bytes) {
            Ok(()) => {
                debug!("Local artifact {} matches its checksum", path.display());
                return Ok(path);
            }
            Err(e) if source.url.is_some() => {
                warn!("{}; downloading a fresh copy", e);
            }
            Err(e) => return Err(e),
        }
    }

    let Some(url) = &source.url else {
        return Err(Error::artifact(format!(
            "{} not found and no download URL is configured",
            path.display()
        )));
    };

    info!("Downloading artifact from {} to {}", url, path.display());

    let response = client.get(url).send().await?;
    let status = response.status();
    if !status.is_success() {
        return Err(Error::fetch(format!("GET {} returned {}", url, status)));
    }
    let bytes = response.bytes().await?;

    if let Some(expected) = &source.sha256 {
        verify_digest(&path, expected, &bytes)?;
    }

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            tokio::fs::create_dir_all(parent).await?;
        }
    }

    let mut partial = path.clone().into_os_string();
    partial.push(".part");
    let partial = PathBuf::from(partial);

    tokio::fs::write(&partial, &bytes).await?;
    tokio::fs::rename(&partial, &path).await?;

    info!("Saved {} bytes to {}", bytes.len(), path.display());
    Ok(path)
}

/// Ensures both artifacts and builds the predictor from them.
pub async fn load_predictor(config: &ArtifactsConfig) -> Result<Predictor> {
    let client = reqwest::Client::new();

    let model_path = ensure_artifact(&client, &config.model).await?;
    let features_path = ensure_artifact(&client, &config.features).await?;

    let model = ModelArtifact::from_json(&tokio::fs::read(&model_path).await?)?;
    let schema = FeatureSchema::from_json(&tokio::fs::read(&features_path).await?).map_err(|e| {
        match e {
            Error::Serialization(e) => Error::artifact(format!("invalid feature schema: {}", e)),
            other => other,
        }
    })?;

    info!(
        "Loaded model from {} and {} feature names from {}",
        model_path.display(),
        schema.len(),
        features_path.display()
    );

    Predictor::new(Arc::new(model), schema)
}

pub fn sha256_hex(bytes: &[u8]) -> String {
    encode_hex(&Sha256::digest(bytes))
}

fn verify_digest(path: &Path, expected: &str, bytes: &[u8]) -> Result<()> {
    let actual = sha256_hex(bytes);
    if actual.eq_ignore_ascii_case(expected) {
        Ok(())
    } else {
        Err(Error::Checksum {
            path: path.display().to_string(),
            expected: expected.to_ascii_lowercase(),
            actual,
        })
    }
}

fn encode_hex(bytes: &[u8]) -> String {
    const HEX: &[u8; 16] = b"0123456789abcdef";
    let mut out = String::with_capacity(bytes.len() * 2);
    for byte in bytes {
        out.push(HEX[(byte >> 4) as usize] as char);
        out.push(HEX[(byte & 0x0f) as usize] as char);
    }
    out
}
