//! Incremental k-nearest-neighbors classifier.
//!
//! Examples are appended one at a time with [`KnnClassifier::learn`] and
//! queries are answered by an exact brute-force scan over everything learned
//! so far, followed by a majority vote among the `k` closest examples.

pub mod heap_utils;

use num_traits::{AsPrimitive, Float};
use tracing::{debug, trace};

use crate::common_types::{Example, Neighbor, Prediction};
use crate::error::{KnnError, Result};
use heap_utils::KBestNeighbors;

/// Euclidean (L2) distance between two equally sized vectors.
///
/// Accumulates in `f64` regardless of the component type.
pub fn euclidean_distance<F>(a: &[F], b: &[F]) -> f64
where
    F: Float + AsPrimitive<f64>,
{
    debug_assert_eq!(a.len(), b.len(), "Vector dimensions must match");
    a.iter()
        .zip(b.iter())
        .map(|(&x, &y)| {
            let diff: f64 = x.as_() - y.as_();
            diff * diff
        })
        .sum::<f64>()
        .sqrt()
}

/// Lifecycle of a classifier. There is no way back from `Ready`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClassifierState {
    /// Nothing learned yet; dimensionality not fixed.
    Unset,
    /// At least one example learned; `classify` may succeed.
    Ready,
}

/// The k-nearest-neighbors classifier.
///
/// The training set only ever grows. The first learned vector fixes the
/// dimensionality every later vector must match.
#[derive(Debug, Clone)]
pub struct KnnClassifier<F = f64, L = String> {
    k: usize,
    training_data: Vec<Example<F, L>>,
}

impl<F, L> KnnClassifier<F, L>
where
    F: Float + AsPrimitive<f64>,
    L: Clone + Eq,
{
    /// Creates an empty classifier that votes among `k` neighbors.
    ///
    /// # Errors
    /// [`KnnError::InvalidConfiguration`] if `k` is 0.
    pub fn new(k: usize) -> Result<Self> {
        if k == 0 {
            return Err(KnnError::InvalidConfiguration { k });
        }
        Ok(Self {
            k,
            training_data: Vec::new(),
        })
    }

    pub fn k(&self) -> usize {
        self.k
    }

    /// Number of learned examples.
    pub fn len(&self) -> usize {
        self.training_data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.training_data.is_empty()
    }

    /// Dimensionality fixed by the first learned example, if any.
    pub fn dimensions(&self) -> Option<usize> {
        self.training_data.first().map(Example::dimensions)
    }

    pub fn state(&self) -> ClassifierState {
        if self.training_data.is_empty() {
            ClassifierState::Unset
        } else {
            ClassifierState::Ready
        }
    }

    /// Learned examples in insertion order.
    pub fn examples(&self) -> &[Example<F, L>] {
        &self.training_data
    }

    /// Distinct labels, in the order they were first learned.
    pub fn labels(&self) -> Vec<&L> {
        let mut labels: Vec<&L> = Vec::new();
        for example in &self.training_data {
            if !labels.contains(&&example.label) {
                labels.push(&example.label);
            }
        }
        labels
    }

    /// Checks a vector against the established dimensionality and rejects
    /// empty or non-finite input.
    fn validate_vector(&self, vector: &[F]) -> Result<()> {
        if let Some(expected) = self.dimensions() {
            if vector.len() != expected {
                return Err(KnnError::DimensionMismatch {
                    expected,
                    actual: vector.len(),
                });
            }
        }
        if vector.is_empty() {
            return Err(KnnError::InvalidVector {
                reason: "vector has no components".to_string(),
            });
        }
        if let Some(index) = vector.iter().position(|v| !v.is_finite()) {
            return Err(KnnError::InvalidVector {
                reason: format!("non-finite value at index {}", index),
            });
        }
        Ok(())
    }

    /// Appends an example to the training set.
    ///
    /// Duplicate vectors and labels are kept as-is; learning the same
    /// observation twice gives it two votes.
    ///
    /// # Errors
    /// [`KnnError::DimensionMismatch`] if `vector` differs in length from the
    /// examples already learned, [`KnnError::InvalidVector`] if it is empty or
    /// holds NaN/infinite values. The training set is untouched on error.
    pub fn learn(&mut self, vector: Vec<F>, label: L) -> Result<()> {
        self.validate_vector(&vector)?;
        if self.training_data.is_empty() {
            debug!(dimensions = vector.len(), k = self.k, "classifier ready");
        }
        self.training_data.push(Example::new(vector, label));
        trace!(examples = self.training_data.len(), "learned example");
        Ok(())
    }

    /// Learns a sequence of examples in order, stopping at the first failure.
    ///
    /// Examples learned before the failing one stay learned.
    pub fn learn_all<I>(&mut self, examples: I) -> Result<()>
    where
        I: IntoIterator<Item = (Vec<F>, L)>,
    {
        for (vector, label) in examples {
            self.learn(vector, label)?;
        }
        Ok(())
    }

    /// Selects the `min(k, len)` examples closest to `vector`, closest first.
    ///
    /// Equidistant examples are ordered by insertion index, so repeated
    /// queries against the same training set always select the same set.
    pub fn nearest(&self, vector: &[F]) -> Result<Vec<Neighbor<L>>> {
        if self.training_data.is_empty() {
            return Err(KnnError::EmptyTrainingSet);
        }
        self.validate_vector(vector)?;

        let effective_k = self.k.min(self.training_data.len());
        let mut best = KBestNeighbors::new(effective_k);
        for (index, example) in self.training_data.iter().enumerate() {
            let distance = euclidean_distance(vector, &example.features);
            best.add(distance, index, &example.label);
        }

        Ok(best
            .into_sorted()
            .into_iter()
            .map(|entry| Neighbor {
                index: entry.index,
                distance: entry.distance.0,
                label: entry.data.clone(),
            })
            .collect())
    }

    /// Classifies `vector` and reports how the vote went.
    ///
    /// The label with the most votes wins. Among labels with equal votes the
    /// one held by the closest neighbor wins.
    pub fn classify_with_votes(&self, vector: &[F]) -> Result<Prediction<L>> {
        let neighbors = self.nearest(vector)?;
        let votes = tally(&neighbors);

        // Votes are in closest-first order, so keeping the first maximum
        // resolves ties toward the closest neighbor.
        let mut winner: Option<&(L, usize)> = None;
        for entry in &votes {
            if winner.is_none_or(|best| entry.1 > best.1) {
                winner = Some(entry);
            }
        }
        let label = winner
            .map(|(label, _)| label.clone())
            .ok_or(KnnError::EmptyTrainingSet)?;

        trace!(neighbors = neighbors.len(), "classified query");
        Ok(Prediction {
            label,
            votes,
            neighbors,
        })
    }

    /// Classifies `vector` by majority vote among its `k` nearest examples.
    ///
    /// # Errors
    /// [`KnnError::EmptyTrainingSet`] if nothing has been learned,
    /// [`KnnError::DimensionMismatch`] or [`KnnError::InvalidVector`] for a
    /// malformed query.
    pub fn classify(&self, vector: &[F]) -> Result<L> {
        self.classify_with_votes(vector).map(|prediction| prediction.label)
    }

    /// Classifies several queries, failing on the first invalid one.
    pub fn classify_batch(&self, queries: &[Vec<F>]) -> Result<Vec<L>> {
        queries.iter().map(|query| self.classify(query)).collect()
    }
}

/// Counts votes per label, keeping labels in first-seen order.
fn tally<L: Clone + Eq>(neighbors: &[Neighbor<L>]) -> Vec<(L, usize)> {
    let mut votes: Vec<(L, usize)> = Vec::new();
    for neighbor in neighbors {
        match votes.iter_mut().find(|(label, _)| *label == neighbor.label) {
            Some((_, count)) => *count += 1,
            None => votes.push((neighbor.label.clone(), 1)),
        }
    }
    votes
}
