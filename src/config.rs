//! TOML configuration for the classifier and the offline evaluation run.
//!
//! Every field has a default, so an empty file (or no file at all) is valid:
//!
//! ```toml
//! [classifier]
//! k = 3
//!
//! [evaluation]
//! train_fraction = 0.8
//! seed = 42
//! ```

use std::fs;
use std::path::Path;

use num_traits::{AsPrimitive, Float};
use serde::{Deserialize, Serialize};

use crate::error::{DatasetError, Result};
use crate::knn::KnnClassifier;

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub classifier: KnnConfig,
    pub evaluation: EvaluationConfig,
}

impl Config {
    pub fn from_toml_str(toml_str: &str) -> std::result::Result<Self, DatasetError> {
        Ok(toml::from_str(toml_str)?)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> std::result::Result<Self, DatasetError> {
        let contents = fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }
}

/// Classifier settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KnnConfig {
    /// Number of neighbors that vote on each query.
    pub k: usize,
}

impl KnnConfig {
    pub const DEFAULT_K: usize = 3;

    /// Builds an empty classifier from these settings, validating `k`.
    pub fn build<F, L>(&self) -> Result<KnnClassifier<F, L>>
    where
        F: Float + AsPrimitive<f64>,
        L: Clone + Eq,
    {
        KnnClassifier::new(self.k)
    }
}

impl Default for KnnConfig {
    fn default() -> Self {
        Self { k: Self::DEFAULT_K }
    }
}

/// Settings for splitting a labeled dataset into training and test parts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EvaluationConfig {
    /// Share of records used for training, in `[0, 1]`.
    pub train_fraction: f64,
    /// Shuffle seed. Unseeded runs shuffle from OS entropy.
    pub seed: Option<u64>,
}

impl Default for EvaluationConfig {
    fn default() -> Self {
        Self {
            train_fraction: 0.8,
            seed: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::KnnError;

    #[test]
    fn empty_document_uses_defaults() {
        let config = Config::from_toml_str("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.classifier.k, 3);
        assert_eq!(config.evaluation.train_fraction, 0.8);
        assert_eq!(config.evaluation.seed, None);
    }

    #[test]
    fn partial_sections_fill_in_defaults() {
        let config = Config::from_toml_str("[classifier]\nk = 5\n\n[evaluation]\nseed = 7\n").unwrap();
        assert_eq!(config.classifier.k, 5);
        assert_eq!(config.evaluation.seed, Some(7));
        assert_eq!(config.evaluation.train_fraction, 0.8);
    }

    #[test]
    fn malformed_toml_is_reported() {
        let err = Config::from_toml_str("[classifier\nk = ").unwrap_err();
        assert!(matches!(err, DatasetError::Toml(_)));
    }

    #[test]
    fn build_rejects_zero_k() {
        let config = KnnConfig { k: 0 };
        let err = config.build::<f64, String>().unwrap_err();
        assert_eq!(err, KnnError::InvalidConfiguration { k: 0 });
    }

    #[test]
    fn load_reads_file_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("gesture.toml");
        std::fs::write(&path, "[classifier]\nk = 2\n").unwrap();
        let config = Config::load(&path).unwrap();
        assert_eq!(config.classifier.k, 2);
    }
}
