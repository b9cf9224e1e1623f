use super::{Regressor, check_input};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};

/// Averaging ensemble of regression trees.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RandomForest {
    pub n_features: usize,
    pub trees: Vec<Tree>,
}

/// Flat node array; node 0 is the root.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tree {
    pub nodes: Vec<TreeNode>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TreeNode {
    Leaf {
        leaf: f64,
    },
    /// Samples with `x[feature] <= threshold` continue at `left`.
    Split {
        feature: usize,
        threshold: f64,
        left: usize,
        right: usize,
    },
}

impl Tree {
    fn validate(&self, n_features: usize) -> Result<()> {
        if self.nodes.is_empty() {
            return Err(Error::artifact("tree has no nodes"));
        }
        for (index, node) in self.nodes.iter().enumerate() {
            match *node {
                TreeNode::Leaf { leaf } if !leaf.is_finite() => {
                    return Err(Error::artifact(format!("node {} has a non-finite leaf", index)));
                }
                TreeNode::Leaf { .. } => {}
                TreeNode::Split {
                    feature,
                    threshold,
                    left,
                    right,
                } => {
                    if feature >= n_features {
                        return Err(Error::artifact(format!(
                            "node {} splits on feature {} of {}",
                            index, feature, n_features
                        )));
                    }
                    if threshold.is_nan() {
                        return Err(Error::artifact(format!("node {} has a NaN threshold", index)));
                    }
                    if left >= self.nodes.len() || right >= self.nodes.len() {
                        return Err(Error::artifact(format!(
                            "node {} points outside the tree",
                            index
                        )));
                    }
                }
            }
        }
        Ok(())
    }

    pub fn predict(&self, features: &[f64]) -> Result<f64> {
        let mut index = 0;
        // A well-formed tree reaches a leaf in fewer steps than it has nodes.
        for _ in 0..self.nodes.len() {
            match self.nodes.get(index) {
                Some(TreeNode::Leaf { leaf }) => return Ok(*leaf),
                Some(TreeNode::Split {
                    feature,
                    threshold,
                    left,
                    right,
                }) => {
                    let value = features.get(*feature).copied().ok_or_else(|| {
                        Error::prediction(format!("tree reads missing feature {}", feature))
                    })?;
                    index = if value <= *threshold { *left } else { *right };
                }
                None => {
                    return Err(Error::prediction(format!("tree has no node {}", index)));
                }
            }
        }
        Err(Error::prediction("tree walk did not reach a leaf"))
    }
}

impl RandomForest {
    pub fn validate(&self) -> Result<()> {
        if self.n_features == 0 {
            return Err(Error::artifact("random forest expects zero features"));
        }
        if self.trees.is_empty() {
            return Err(Error::artifact("random forest has no trees"));
        }
        for (index, tree) in self.trees.iter().enumerate() {
            tree.validate(self.n_features)
                .map_err(|e| Error::artifact(format!("tree {}: {}", index, e)))?;
        }
        Ok(())
    }
}

impl Regressor for RandomForest {
    fn n_features(&self) -> usize {
        self.n_features
    }

    fn predict(&self, features: &[f64]) -> Result<f64> {
        check_input(self.n_features, features)?;
        if self.trees.is_empty() {
            return Err(Error::prediction("random forest has no trees"));
        }

        let mut total = 0.0;
        for tree in &self.trees {
            total += tree.predict(features)?;
        }
        Ok(total / self.trees.len() as f64)
    }
}
