//! Python bindings, built with `--features python`.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use pyo3::types::PyDict;

use crate::error::KnnError;
use crate::knn::{euclidean_distance, KnnClassifier};

impl From<KnnError> for PyErr {
    fn from(err: KnnError) -> Self {
        PyValueError::new_err(err.to_string())
    }
}

/// Calculates the Euclidean distance between two vectors of f64.
#[pyfunction(name = "euclidean_distance")]
fn euclidean_distance_py(a: Vec<f64>, b: Vec<f64>) -> PyResult<f64> {
    if a.len() != b.len() {
        return Err(KnnError::DimensionMismatch {
            expected: a.len(),
            actual: b.len(),
        }
        .into());
    }
    Ok(euclidean_distance(&a, &b))
}

#[pyclass(name = "GestureClassifier")]
struct PyGestureClassifier {
    classifier: KnnClassifier<f64, String>,
}

#[pymethods]
impl PyGestureClassifier {
    #[new]
    #[pyo3(signature = (k = 3))]
    fn new(k: usize) -> PyResult<Self> {
        Ok(PyGestureClassifier {
            classifier: KnnClassifier::new(k)?,
        })
    }

    fn learn(&mut self, features: Vec<f64>, label: String) -> PyResult<()> {
        Ok(self.classifier.learn(features, label)?)
    }

    fn classify(&self, features: Vec<f64>) -> PyResult<String> {
        Ok(self.classifier.classify(&features)?)
    }

    /// Returns `(label, {label: votes})`.
    fn classify_with_votes<'py>(
        &self,
        py: Python<'py>,
        features: Vec<f64>,
    ) -> PyResult<(String, Bound<'py, PyDict>)> {
        let prediction = self.classifier.classify_with_votes(&features)?;
        let votes = PyDict::new_bound(py);
        for (label, count) in &prediction.votes {
            votes.set_item(label, count)?;
        }
        Ok((prediction.label, votes))
    }

    #[getter]
    fn k(&self) -> usize {
        self.classifier.k()
    }

    #[getter]
    fn dimensions(&self) -> Option<usize> {
        self.classifier.dimensions()
    }

    fn __len__(&self) -> usize {
        self.classifier.len()
    }
}

/// The Python module. Its name matches `lib.name` in `Cargo.toml`.
#[pymodule]
fn gesture_knn(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(euclidean_distance_py, m)?)?;
    m.add_class::<PyGestureClassifier>()?;
    Ok(())
}
