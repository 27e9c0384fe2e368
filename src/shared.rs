//! Thread-safe handle for sharing one classifier between threads.

use std::sync::Arc;

use num_traits::{AsPrimitive, Float};
use parking_lot::RwLock;

use crate::common_types::Prediction;
use crate::error::Result;
use crate::knn::KnnClassifier;

/// Cloneable handle to a classifier behind a reader/writer lock.
///
/// `learn` takes the write lock. Queries take the read lock and may run
/// concurrently with each other.
#[derive(Debug)]
pub struct SharedClassifier<F = f64, L = String> {
    inner: Arc<RwLock<KnnClassifier<F, L>>>,
}

impl<F, L> Clone for SharedClassifier<F, L> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<F, L> SharedClassifier<F, L>
where
    F: Float + AsPrimitive<f64>,
    L: Clone + Eq,
{
    pub fn new(k: usize) -> Result<Self> {
        Ok(Self::from(KnnClassifier::new(k)?))
    }

    pub fn learn(&self, vector: Vec<F>, label: L) -> Result<()> {
        self.inner.write().learn(vector, label)
    }

    pub fn classify(&self, vector: &[F]) -> Result<L> {
        self.inner.read().classify(vector)
    }

    pub fn classify_with_votes(&self, vector: &[F]) -> Result<Prediction<L>> {
        self.inner.read().classify_with_votes(vector)
    }

    pub fn len(&self) -> usize {
        self.inner.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.read().is_empty()
    }

    /// Runs `f` with read access to the underlying classifier.
    pub fn with<R>(&self, f: impl FnOnce(&KnnClassifier<F, L>) -> R) -> R {
        f(&self.inner.read())
    }
}

impl<F, L> From<KnnClassifier<F, L>> for SharedClassifier<F, L> {
    fn from(classifier: KnnClassifier<F, L>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(classifier)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn clones_share_one_training_set() {
        let shared: SharedClassifier = SharedClassifier::new(1).unwrap();
        let other = shared.clone();
        other.learn(vec![0.0, 1.0], "wave".to_string()).unwrap();
        assert_eq!(shared.len(), 1);
        assert_eq!(shared.classify(&[0.0, 1.0]).unwrap(), "wave");
    }

    #[test]
    fn concurrent_learners_and_readers() {
        let shared: SharedClassifier = SharedClassifier::new(3).unwrap();
        shared.learn(vec![0.0, 0.0], "seed".to_string()).unwrap();

        let handles: Vec<_> = (0..4)
            .map(|t| {
                let shared = shared.clone();
                thread::spawn(move || {
                    for i in 0..25 {
                        shared
                            .learn(vec![t as f64, i as f64], format!("t{}", t))
                            .unwrap();
                        assert!(shared.classify(&[t as f64, i as f64]).is_ok());
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(shared.len(), 101);
        assert_eq!(shared.with(|knn| knn.dimensions()), Some(2));
    }
}
