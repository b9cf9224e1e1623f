mod forest;
mod linear;

pub use forest::{RandomForest, Tree, TreeNode};
pub use linear::LinearModel;

use crate::{Error, Result};
use serde::{Deserialize, Serialize};

/// A trained regression model evaluated on an ordered feature vector.
pub trait Regressor: Send + Sync {
    /// Length of the vector `predict` accepts.
    fn n_features(&self) -> usize;

    fn predict(&self, features: &[f64]) -> Result<f64>;
}

/// Serialized model artifact, tagged by `type`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ModelArtifact {
    Linear(LinearModel),
    RandomForest(RandomForest),
}

impl ModelArtifact {
    pub fn from_json(bytes: &[u8]) -> Result<Self> {
        let artifact: Self = serde_json::from_slice(bytes)
            .map_err(|e| Error::artifact(format!("invalid model artifact: {}", e)))?;
        artifact.validate()?;
        Ok(artifact)
    }

    pub fn validate(&self) -> Result<()> {
        match self {
            Self::Linear(model) => model.validate(),
            Self::RandomForest(model) => model.validate(),
        }
    }
}

impl Regressor for ModelArtifact {
    fn n_features(&self) -> usize {
        match self {
            Self::Linear(model) => model.n_features(),
            Self::RandomForest(model) => model.n_features(),
        }
    }

    fn predict(&self, features: &[f64]) -> Result<f64> {
        match self {
            Self::Linear(model) => model.predict(features),
            Self::RandomForest(model) => model.predict(features),
        }
    }
}

pub(crate) fn check_input(expected: usize, features: &[f64]) -> Result<()> {
    if features.len() != expected {
        return Err(Error::prediction(format!(
            "expected {} features, got {}",
            expected,
            features.len()
        )));
    }
    if let Some(index) = features.iter().position(|v| !v.is_finite()) {
        return Err(Error::prediction(format!(
            "feature {} is not a finite number",
            index
        )));
    }
    Ok(())
}
