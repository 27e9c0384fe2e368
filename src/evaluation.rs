//! Accuracy measurement against held-out poses, and the practice-game scoreboard.

use rand::Rng;
use rand::seq::SliceRandom;
use tracing::debug;

use crate::dataset::Dataset;
use crate::error::Result;
use crate::knn::KnnClassifier;

/// Outcome of classifying every record of a test set.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EvaluationReport {
    pub correct: usize,
    pub total: usize,
    /// `(predicted, actual)` per test record, in test-set order.
    pub predictions: Vec<(String, String)>,
}

impl EvaluationReport {
    /// Fraction of correct predictions, or `None` when nothing was tested.
    pub fn accuracy(&self) -> Option<f64> {
        if self.total == 0 {
            None
        } else {
            Some(self.correct as f64 / self.total as f64)
        }
    }

    pub fn accuracy_percent(&self) -> Option<f64> {
        self.accuracy().map(|fraction| fraction * 100.0)
    }
}

/// Classifies each test record and compares the prediction with its label.
pub fn evaluate(classifier: &KnnClassifier<f64, String>, test_set: &Dataset) -> Result<EvaluationReport> {
    let mut report = EvaluationReport::default();
    for record in test_set.records() {
        let predicted = classifier.classify(&record.pose)?;
        debug!(predicted = %predicted, actual = %record.label, "test prediction");
        if predicted == record.label {
            report.correct += 1;
        }
        report.total += 1;
        report.predictions.push((predicted, record.label.clone()));
    }
    Ok(report)
}

/// Result of checking a prediction against the current target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Correct,
    Incorrect,
}

/// Practice game: the player is asked for a random gesture and scores a point
/// each time the classifier recognizes it.
#[derive(Debug, Clone)]
pub struct Scoreboard {
    candidates: Vec<String>,
    target: Option<String>,
    correct: usize,
}

impl Scoreboard {
    pub fn new<I, S>(candidates: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            candidates: candidates.into_iter().map(Into::into).collect(),
            target: None,
            correct: 0,
        }
    }

    /// Picks the next gesture to ask for. Returns `None` if there are no candidates.
    pub fn next_target<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<&str> {
        self.target = self.candidates.choose(rng).cloned();
        self.target.as_deref()
    }

    pub fn target(&self) -> Option<&str> {
        self.target.as_deref()
    }

    pub fn correct(&self) -> usize {
        self.correct
    }

    /// Compares a classifier prediction with the current target.
    ///
    /// Without a target every submission is incorrect.
    pub fn submit(&mut self, prediction: &str) -> Verdict {
        match self.target.as_deref() {
            Some(target) if target == prediction => {
                self.correct += 1;
                Verdict::Correct
            }
            _ => Verdict::Incorrect,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::PoseRecord;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn trained() -> KnnClassifier<f64, String> {
        let mut classifier = KnnClassifier::new(1).unwrap();
        classifier.learn(vec![0.0, 0.0], "fist".to_string()).unwrap();
        classifier.learn(vec![1.0, 1.0], "palm".to_string()).unwrap();
        classifier
    }

    #[test]
    fn counts_correct_predictions() {
        let test_set = Dataset::new(vec![
            PoseRecord::new(vec![0.1, 0.0], "fist"),
            PoseRecord::new(vec![0.9, 0.9], "palm"),
            PoseRecord::new(vec![0.8, 1.0], "fist"),
            PoseRecord::new(vec![0.0, 0.2], "fist"),
        ]);
        let report = evaluate(&trained(), &test_set).unwrap();
        assert_eq!(report.correct, 3);
        assert_eq!(report.total, 4);
        assert_eq!(report.accuracy(), Some(0.75));
        assert_eq!(report.accuracy_percent(), Some(75.0));
        assert_eq!(report.predictions[2], ("palm".to_string(), "fist".to_string()));
    }

    #[test]
    fn empty_test_set_has_no_accuracy() {
        let report = evaluate(&trained(), &Dataset::default()).unwrap();
        assert_eq!(report.accuracy(), None);
    }

    #[test]
    fn evaluation_against_untrained_classifier_fails() {
        let empty = KnnClassifier::new(1).unwrap();
        let test_set = Dataset::new(vec![PoseRecord::new(vec![0.0], "x")]);
        assert!(evaluate(&empty, &test_set).is_err());
    }

    #[test]
    fn scoreboard_counts_only_matching_predictions() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut board = Scoreboard::new(["thumbs_up"]);
        assert_eq!(board.submit("thumbs_up"), Verdict::Incorrect);

        assert_eq!(board.next_target(&mut rng), Some("thumbs_up"));
        assert_eq!(board.submit("peace"), Verdict::Incorrect);
        assert_eq!(board.submit("thumbs_up"), Verdict::Correct);
        assert_eq!(board.correct(), 1);
    }

    #[test]
    fn scoreboard_targets_come_from_candidates() {
        let mut rng = StdRng::seed_from_u64(9);
        let mut board = Scoreboard::new(vec!["a", "b", "c"]);
        for _ in 0..20 {
            let target = board.next_target(&mut rng).unwrap().to_string();
            assert!(["a", "b", "c"].contains(&target.as_str()));
        }
        assert!(Scoreboard::new(Vec::<String>::new()).next_target(&mut rng).is_none());
    }
}
