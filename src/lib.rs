//! Online k-nearest-neighbors classifier for hand-gesture recognition.
//!
//! Flattened hand-landmark vectors are taught to a [`KnnClassifier`] one at a
//! time and new vectors are classified against everything learned so far, by
//! majority vote among the `k` closest examples.
//!
//! ```
//! use gesture_knn::KnnClassifier;
//!
//! let mut machine = KnnClassifier::new(3).unwrap();
//! machine.learn(vec![0.0, 0.0, 0.0], "fist".to_string()).unwrap();
//! machine.learn(vec![10.0, 10.0, 10.0], "fist".to_string()).unwrap();
//! machine.learn(vec![0.0, 0.0, 1.0], "palm".to_string()).unwrap();
//!
//! assert_eq!(machine.classify(&[0.0, 0.0, 0.4]).unwrap(), "fist");
//! ```

pub mod common_types;
pub mod config;
pub mod dataset;
pub mod error;
pub mod evaluation;
pub mod knn;
pub mod landmarks;
pub mod shared;

#[cfg(feature = "python")]
mod python;

pub use common_types::{Example, Neighbor, Prediction};
pub use config::{Config, EvaluationConfig, KnnConfig};
pub use dataset::{Dataset, PoseRecord};
pub use error::{DatasetError, KnnError, Result};
pub use evaluation::{evaluate, EvaluationReport, Scoreboard, Verdict};
pub use knn::{euclidean_distance, ClassifierState, KnnClassifier};
pub use landmarks::{flatten_hands, flatten_landmarks, Landmark};
pub use shared::SharedClassifier;
