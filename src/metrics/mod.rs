//! Evaluation metrics for sentiment classification.
//!
//! Accuracy and per-class precision/recall as free functions over parallel
//! prediction/label slices, plus the [`Evaluation`] record that bundles the
//! five standard measures and persists them as JSON.
//!
//! A metric whose denominator is zero (precision of a never-predicted
//! class, recall of a never-present class) is a named error, never NaN and
//! never a silent 0.

use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SentirError};

/// Compute classification accuracy.
///
/// accuracy = `correct_predictions` / `total_predictions`
///
/// # Arguments
///
/// * `y_pred` - Predicted class labels
/// * `y_true` - True class labels
///
/// # Errors
///
/// Returns error if the slices have different lengths or are empty.
///
/// # Examples
///
/// ```
/// use sentir::metrics::accuracy;
///
/// let y_pred = vec![1, 0, 1, 1];
/// let y_true = vec![1, 0, 0, 1];
/// let acc = accuracy(&y_pred, &y_true).expect("non-empty parallel slices");
/// assert!((acc - 0.75).abs() < 1e-12);
/// ```
pub fn accuracy(y_pred: &[usize], y_true: &[usize]) -> Result<f64> {
    validate_lengths(y_pred, y_true)?;

    let correct = y_pred
        .iter()
        .zip(y_true.iter())
        .filter(|(p, t)| p == t)
        .count();

    Ok(correct as f64 / y_true.len() as f64)
}

/// Compute precision for one class.
///
/// precision = #(predicted `class` and correct) / #(predicted `class`)
///
/// # Arguments
///
/// * `y_pred` - Predicted class labels
/// * `y_true` - True class labels
/// * `class` - Class to score
///
/// # Errors
///
/// Returns error if the slices have different lengths or are empty, or
/// [`SentirError::UndefinedMetric`] when no document was predicted as
/// `class`.
///
/// # Examples
///
/// ```
/// use sentir::metrics::precision;
///
/// let y_pred = vec![1, 0, 1, 1];
/// let y_true = vec![1, 0, 0, 1];
/// let p = precision(&y_pred, &y_true, 1).expect("class 1 was predicted");
/// assert!((p - 2.0 / 3.0).abs() < 1e-12);
/// ```
pub fn precision(y_pred: &[usize], y_true: &[usize], class: usize) -> Result<f64> {
    validate_lengths(y_pred, y_true)?;

    let retrieved = y_pred.iter().filter(|&&p| p == class).count();
    if retrieved == 0 {
        return Err(SentirError::UndefinedMetric {
            metric: "precision".to_string(),
            class,
        });
    }

    let correct = y_pred
        .iter()
        .zip(y_true.iter())
        .filter(|&(&p, &t)| p == class && p == t)
        .count();

    Ok(correct as f64 / retrieved as f64)
}

/// Compute recall for one class.
///
/// recall = #(labeled `class` and correctly predicted) / #(labeled `class`)
///
/// # Arguments
///
/// * `y_pred` - Predicted class labels
/// * `y_true` - True class labels
/// * `class` - Class to score
///
/// # Errors
///
/// Returns error if the slices have different lengths or are empty, or
/// [`SentirError::UndefinedMetric`] when no document is truly labeled
/// `class`.
///
/// # Examples
///
/// ```
/// use sentir::metrics::recall;
///
/// let y_pred = vec![1, 0, 1, 1];
/// let y_true = vec![1, 0, 0, 1];
/// let r = recall(&y_pred, &y_true, 0).expect("class 0 is present");
/// assert!((r - 0.5).abs() < 1e-12);
/// ```
pub fn recall(y_pred: &[usize], y_true: &[usize], class: usize) -> Result<f64> {
    validate_lengths(y_pred, y_true)?;

    let relevant = y_true.iter().filter(|&&t| t == class).count();
    if relevant == 0 {
        return Err(SentirError::UndefinedMetric {
            metric: "recall".to_string(),
            class,
        });
    }

    let correct = y_pred
        .iter()
        .zip(y_true.iter())
        .filter(|&(&p, &t)| t == class && p == t)
        .count();

    Ok(correct as f64 / relevant as f64)
}

fn validate_lengths(y_pred: &[usize], y_true: &[usize]) -> Result<()> {
    if y_pred.len() != y_true.len() {
        return Err(SentirError::dimension_mismatch(
            "predictions",
            y_pred.len(),
            y_true.len(),
        ));
    }
    if y_true.is_empty() {
        return Err(SentirError::empty_input("predictions"));
    }
    Ok(())
}

/// The five standard measures of a binary sentiment run.
///
/// "pos" is class 1, "neg" is class 0. Serializes with exactly these field
/// names.
///
/// # Examples
///
/// ```
/// use sentir::metrics::Evaluation;
///
/// let y_pred = vec![1, 0, 1, 1];
/// let y_true = vec![1, 0, 0, 1];
/// let eval = Evaluation::from_predictions(&y_pred, &y_true)
///     .expect("both classes predicted and present");
///
/// assert!((eval.accuracy - 0.75).abs() < 1e-12);
/// assert!((eval.precision_pos - 2.0 / 3.0).abs() < 1e-12);
/// assert!((eval.recall_pos - 1.0).abs() < 1e-12);
/// assert!((eval.precision_neg - 1.0).abs() < 1e-12);
/// assert!((eval.recall_neg - 0.5).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Evaluation {
    /// Fraction of predictions matching the gold labels
    pub accuracy: f64,
    /// Precision for class 1
    pub precision_pos: f64,
    /// Recall for class 1
    pub recall_pos: f64,
    /// Precision for class 0
    pub precision_neg: f64,
    /// Recall for class 0
    pub recall_neg: f64,
}

impl Evaluation {
    /// Compute all five measures from parallel prediction/label slices.
    ///
    /// # Errors
    ///
    /// Returns error if the slices have different lengths or are empty, or
    /// when any of the four per-class measures is undefined.
    pub fn from_predictions(y_pred: &[usize], y_true: &[usize]) -> Result<Self> {
        Ok(Self {
            accuracy: accuracy(y_pred, y_true)?,
            precision_pos: precision(y_pred, y_true, 1)?,
            recall_pos: recall(y_pred, y_true, 1)?,
            precision_neg: precision(y_pred, y_true, 0)?,
            recall_neg: recall(y_pred, y_true, 0)?,
        })
    }

    /// Saves the measures as a JSON object with the fixed field names.
    ///
    /// # Errors
    ///
    /// Returns error if the file cannot be written.
    pub fn save_json<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let file = File::create(path)?;
        serde_json::to_writer(BufWriter::new(file), self)?;
        Ok(())
    }

    /// Loads measures written by [`save_json`](Self::save_json).
    ///
    /// # Errors
    ///
    /// Returns error if the file cannot be read or is not valid JSON.
    pub fn load_json<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path)?;
        Ok(serde_json::from_reader(BufReader::new(file))?)
    }
}

#[cfg(test)]
#[path = "metrics_tests.rs"]
mod tests;
