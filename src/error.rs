//! Error types for the classifier and the loaders around it.

use thiserror::Error;

/// Result alias for classifier operations.
pub type Result<T> = std::result::Result<T, KnnError>;

/// Validation failures reported by [`KnnClassifier`](crate::KnnClassifier).
///
/// Every variant is raised before the classifier touches its training set,
/// so a failed call never leaves a partially learned example behind.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KnnError {
    #[error("Invalid configuration: k must be at least 1, got {k}")]
    InvalidConfiguration { k: usize },

    #[error("Dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("Cannot classify with an empty training set")]
    EmptyTrainingSet,

    #[error("Invalid vector: {reason}")]
    InvalidVector { reason: String },
}

/// Errors raised while loading datasets or configuration files.
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed dataset JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Malformed configuration TOML: {0}")]
    Toml(#[from] toml::de::Error),

    #[error(transparent)]
    Knn(#[from] KnnError),

    #[error("Invalid split: train fraction must be within [0, 1], got {0}")]
    InvalidSplit(f64),
}
