//! Bulk import of labeled poses.
//!
//! The on-disk format is a JSON array of records:
//!
//! ```json
//! [
//!   { "pose": [0.51, 0.72, 0.0, ...], "label": "thumbs_up" },
//!   { "pose": [0.33, 0.64, -0.02, ...], "label": "peace" }
//! ]
//! ```

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::DatasetError;
use crate::knn::KnnClassifier;

/// One labeled pose as stored in a dataset file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PoseRecord {
    pub pose: Vec<f64>,
    pub label: String,
}

impl PoseRecord {
    pub fn new(pose: Vec<f64>, label: impl Into<String>) -> Self {
        Self {
            pose,
            label: label.into(),
        }
    }
}

/// An ordered collection of labeled poses.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    records: Vec<PoseRecord>,
}

impl Dataset {
    pub fn new(records: Vec<PoseRecord>) -> Self {
        Self { records }
    }

    pub fn from_json_str(json: &str) -> Result<Self, DatasetError> {
        let records: Vec<PoseRecord> = serde_json::from_str(json)?;
        Ok(Self::new(records))
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, DatasetError> {
        let records: Vec<PoseRecord> = serde_json::from_reader(reader)?;
        Ok(Self::new(records))
    }

    /// Loads a JSON dataset file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, DatasetError> {
        let path = path.as_ref();
        let file = File::open(path)?;
        let dataset = Self::from_reader(BufReader::new(file))?;
        debug!(path = %path.display(), records = dataset.len(), "loaded dataset");
        Ok(dataset)
    }

    pub fn records(&self) -> &[PoseRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Distinct labels in first-seen order.
    pub fn labels(&self) -> Vec<&str> {
        let mut labels: Vec<&str> = Vec::new();
        for record in &self.records {
            if !labels.contains(&record.label.as_str()) {
                labels.push(&record.label);
            }
        }
        labels
    }

    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.records.shuffle(rng);
    }

    /// Splits into `(train, test)`, putting the first `floor(len * train_fraction)`
    /// records in the training part.
    pub fn split(self, train_fraction: f64) -> Result<(Dataset, Dataset), DatasetError> {
        if !(0.0..=1.0).contains(&train_fraction) {
            return Err(DatasetError::InvalidSplit(train_fraction));
        }
        let train_size = ((self.records.len() as f64) * train_fraction).floor() as usize;
        let mut train = self.records;
        let test = train.split_off(train_size.min(train.len()));
        debug!(train = train.len(), test = test.len(), "split dataset");
        Ok((Dataset::new(train), Dataset::new(test)))
    }

    /// Feeds every record to `classifier.learn` in order.
    ///
    /// Stops at the first record the classifier rejects; earlier records stay learned.
    pub fn train(&self, classifier: &mut KnnClassifier<f64, String>) -> Result<(), DatasetError> {
        for record in &self.records {
            classifier.learn(record.pose.clone(), record.label.clone())?;
        }
        Ok(())
    }
}

impl From<Vec<PoseRecord>> for Dataset {
    fn from(records: Vec<PoseRecord>) -> Self {
        Self::new(records)
    }
}

impl IntoIterator for Dataset {
    type Item = PoseRecord;
    type IntoIter = std::vec::IntoIter<PoseRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.into_iter()
    }
}
