//! Data structures shared by the classifier, the dataset loader and the evaluator.

use serde::{Deserialize, Serialize};

/// One learned observation: a feature vector and the gesture label it was taught with.
///
/// - `F`: The feature component type (e.g., `f64`, `f32`).
/// - `L`: The type of the label (e.g., `String`, an enum).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Example<F, L> {
    pub features: Vec<F>,
    pub label: L,
}

impl<F, L> Example<F, L> {
    pub fn new(features: Vec<F>, label: L) -> Self {
        Example { features, label }
    }

    /// Dimensionality of this example's feature vector.
    pub fn dimensions(&self) -> usize {
        self.features.len()
    }
}

/// A training example selected as one of the nearest neighbors of a query.
#[derive(Debug, Clone, PartialEq)]
pub struct Neighbor<L> {
    /// Insertion index of the example in the training set.
    pub index: usize,
    /// Euclidean distance from the query.
    pub distance: f64,
    pub label: L,
}

/// Full outcome of a single classification.
#[derive(Debug, Clone, PartialEq)]
pub struct Prediction<L> {
    /// The majority label.
    pub label: L,
    /// Vote count per label, in the order each label was first met
    /// while walking the neighbors from closest to farthest.
    pub votes: Vec<(L, usize)>,
    /// The neighbors that took part in the vote, closest first.
    pub neighbors: Vec<Neighbor<L>>,
}

impl<L: PartialEq> Prediction<L> {
    /// Votes received by `label` (zero if it was not among the neighbors).
    pub fn votes_for(&self, label: &L) -> usize {
        self.votes
            .iter()
            .find(|(candidate, _)| candidate == label)
            .map_or(0, |&(_, count)| count)
    }
}
