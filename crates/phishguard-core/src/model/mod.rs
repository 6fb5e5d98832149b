//! Random-forest model artifact.
//!
//! The artifact is a JSON export of a fitted forest: the ordered feature names
//! it was trained on, the class codes, and the trees. It is loaded once and
//! then only read.

mod error;
mod tree;

pub use error::ModelError;
pub use tree::{Node, Tree};

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::checksum;
use crate::classifier::Predictor;

/// Default artifact filename inside the data directory.
pub const MODEL_FILENAME: &str = "phishing_forest.json";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForestModel {
    /// Input schema: column names in the order rows must be assembled.
    pub feature_names: Vec<String>,
    /// Class codes; leaf values are indexed in this order.
    pub classes: Vec<i64>,
    pub trees: Vec<Tree>,
}

impl ForestModel {
    /// Reads and validates the artifact at `path`.
    pub fn load(path: &Path) -> Result<Self, ModelError> {
        let data = read(path)?;
        Self::from_slice(path, &data)
    }

    /// Like [`ForestModel::load`], but first checks the file's SHA-256.
    pub fn load_verified(path: &Path, expected_sha256: &str) -> Result<Self, ModelError> {
        let data = read(path)?;
        let actual = checksum::sha256_bytes(&data);
        if !checksum::digests_match(&actual, expected_sha256) {
            return Err(ModelError::ChecksumMismatch {
                path: path.to_path_buf(),
                expected: expected_sha256.trim().to_lowercase(),
                actual,
            });
        }
        Self::from_slice(path, &data)
    }

    fn from_slice(path: &Path, data: &[u8]) -> Result<Self, ModelError> {
        let model: ForestModel =
            serde_json::from_slice(data).map_err(|source| ModelError::Parse {
                path: path.to_path_buf(),
                source,
            })?;
        model.validate()?;
        tracing::info!(
            path = %path.display(),
            trees = model.trees.len(),
            features = model.feature_names.len(),
            "loaded model artifact"
        );
        Ok(model)
    }

    /// Structural checks run on every load.
    pub fn validate(&self) -> Result<(), ModelError> {
        if self.feature_names.is_empty() {
            return Err(ModelError::Invalid("empty feature schema".into()));
        }
        let mut seen = HashSet::new();
        for name in &self.feature_names {
            if !seen.insert(name.as_str()) {
                return Err(ModelError::Invalid(format!("duplicate feature name {name}")));
            }
        }
        if self.classes.is_empty() {
            return Err(ModelError::Invalid("no classes".into()));
        }
        if self.trees.is_empty() {
            return Err(ModelError::Invalid("no trees".into()));
        }
        for (i, tree) in self.trees.iter().enumerate() {
            tree.validate(self.feature_names.len(), self.classes.len())
                .map_err(|e| ModelError::Invalid(format!("tree {i}: {e}")))?;
        }
        Ok(())
    }

    /// Mean class probabilities over all trees.
    ///
    /// # Panics
    ///
    /// If `row` is not exactly as wide as `feature_names`.
    pub fn predict_proba(&self, row: &[f64]) -> Vec<f64> {
        assert_eq!(
            row.len(),
            self.feature_names.len(),
            "row width must match the model's feature schema"
        );
        let mut sum = vec![0.0; self.classes.len()];
        for tree in &self.trees {
            for (acc, p) in sum.iter_mut().zip(tree.predict_proba(row)) {
                *acc += p;
            }
        }
        let n = self.trees.len() as f64;
        sum.iter_mut().for_each(|p| *p /= n);
        sum
    }
}

impl Predictor for ForestModel {
    fn feature_names(&self) -> &[String] {
        &self.feature_names
    }

    /// Class code with the highest mean probability; the first class wins ties.
    fn predict(&self, row: &[f64]) -> i64 {
        let proba = self.predict_proba(row);
        let mut best = 0;
        for (i, p) in proba.iter().enumerate() {
            if *p > proba[best] {
                best = i;
            }
        }
        self.classes[best]
    }
}

fn read(path: &Path) -> Result<Vec<u8>, ModelError> {
    fs::read(path).map_err(|source| ModelError::Io {
        path: path.to_path_buf(),
        source,
    })
}
