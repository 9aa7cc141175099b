//! Classification algorithms.
//!
//! This module implements the multinomial Naive Bayes sentiment classifier:
//! per-class log-priors, Laplace-smoothed term log-likelihoods, and
//! log-space argmax prediction over term-count vectors.
//!
//! # Example
//!
//! ```
//! use sentir::classification::MultinomialNb;
//!
//! // Tokenized training documents with binary labels (1 = positive).
//! let documents = vec![
//!     vec!["great".to_string(), "love".to_string()],
//!     vec!["love".to_string(), "great".to_string()],
//!     vec!["bad".to_string(), "hate".to_string()],
//!     vec!["hate".to_string(), "bad".to_string()],
//! ];
//! let labels = vec![1, 1, 0, 0];
//!
//! let mut model = MultinomialNb::new();
//! model.fit(&documents, &labels).expect("Valid training data");
//!
//! let test = vec![vec!["great".to_string(), "great".to_string()]];
//! let predictions = model.predict(&test).expect("Model is fitted");
//! assert_eq!(predictions, vec![1]);
//! ```

use std::collections::HashMap;
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SentirError};
use crate::text::Vocabulary;

/// Number of sentiment classes (0 = negative, 1 = positive).
pub const N_CLASSES: usize = 2;

/// Schema version written by [`MultinomialNb::save_json`].
const SCHEMA_VERSION: u32 = 1;

/// Multinomial Naive Bayes classifier for binary sentiment.
///
/// Training counts how often each vocabulary term occurs per class and
/// estimates class priors from document frequencies. Prediction accumulates
/// log-space scores, so long documents cannot underflow.
///
/// Scoring is presence-based: each vocabulary term with a non-zero count in
/// the document contributes its smoothed log-likelihood exactly once,
/// regardless of how often the term occurs. Repeated terms are not weighted
/// by their count; see [`predict_counts`](Self::predict_counts).
///
/// # Example
///
/// ```
/// use sentir::classification::MultinomialNb;
///
/// let documents = vec![
///     vec!["good".to_string()],
///     vec!["awful".to_string()],
/// ];
/// let labels = vec![1, 0];
///
/// let mut model = MultinomialNb::new();
/// model.fit(&documents, &labels).expect("Valid training data");
/// assert_eq!(model.vocabulary().map(sentir::text::Vocabulary::len), Some(2));
/// ```
#[derive(Debug, Clone)]
pub struct MultinomialNb {
    /// Ordered terms observed at fit time
    vocabulary: Option<Vocabulary>,
    /// Row-major (`n_terms` × `N_CLASSES`) term occurrence counts
    term_frequencies: Option<Vec<u64>>,
    /// Total term occurrences per class (column sums of the table)
    class_totals: Option<[u64; N_CLASSES]>,
    /// ln(class document count / total document count) per class
    class_log_priors: Option<[f64; N_CLASSES]>,
}

impl MultinomialNb {
    /// Creates a new, unfitted classifier.
    ///
    /// # Example
    ///
    /// ```
    /// use sentir::classification::MultinomialNb;
    ///
    /// let model = MultinomialNb::new();
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self {
            vocabulary: None,
            term_frequencies: None,
            class_totals: None,
            class_log_priors: None,
        }
    }

    /// Trains the classifier on tokenized, labeled documents.
    ///
    /// Builds the vocabulary from the documents, accumulates the per-class
    /// term-frequency table, derives class totals as the table's column
    /// sums, and estimates log-priors from document counts.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - `documents` is empty
    /// - `documents` and `labels` lengths differ
    /// - a label is outside the binary classes {0, 1}
    /// - a class has no documents (its log-prior would be undefined)
    pub fn fit(&mut self, documents: &[Vec<String>], labels: &[usize]) -> Result<()> {
        if documents.is_empty() {
            return Err(SentirError::empty_input("training documents"));
        }
        if labels.len() != documents.len() {
            return Err(SentirError::dimension_mismatch(
                "documents",
                documents.len(),
                labels.len(),
            ));
        }
        if let Some(&bad) = labels.iter().find(|&&label| label >= N_CLASSES) {
            return Err(format!("label {bad} is outside the binary classes 0 and 1").into());
        }

        let mut class_counts = [0usize; N_CLASSES];
        for &label in labels {
            class_counts[label] += 1;
        }
        if let Some(class) = class_counts.iter().position(|&count| count == 0) {
            return Err(SentirError::EmptyClass { class });
        }

        let vocabulary = Vocabulary::from_documents(documents);

        let mut term_frequencies = vec![0u64; vocabulary.len() * N_CLASSES];
        for (document, &label) in documents.iter().zip(labels) {
            for token in document {
                if let Some(term) = vocabulary.index_of(token) {
                    term_frequencies[term * N_CLASSES + label] += 1;
                }
            }
        }

        // Class totals are the column sums of the table, which keeps the
        // conservation law true by construction.
        let mut class_totals = [0u64; N_CLASSES];
        for term in 0..vocabulary.len() {
            for (class, total) in class_totals.iter_mut().enumerate() {
                *total += term_frequencies[term * N_CLASSES + class];
            }
        }

        let n_documents = documents.len() as f64;
        let mut class_log_priors = [0f64; N_CLASSES];
        for (class, log_prior) in class_log_priors.iter_mut().enumerate() {
            *log_prior = (class_counts[class] as f64 / n_documents).ln();
        }

        self.vocabulary = Some(vocabulary);
        self.term_frequencies = Some(term_frequencies);
        self.class_totals = Some(class_totals);
        self.class_log_priors = Some(class_log_priors);

        Ok(())
    }

    /// Predicts class labels for tokenized documents.
    ///
    /// Each document is vectorized through the fitted vocabulary (tokens
    /// outside the vocabulary contribute nothing) and scored with
    /// [`predict_counts`](Self::predict_counts).
    ///
    /// # Errors
    ///
    /// Returns error if the model is not fitted.
    pub fn predict(&self, documents: &[Vec<String>]) -> Result<Vec<usize>> {
        let vocabulary = self.vocabulary.as_ref().ok_or("Model not fitted")?;

        documents
            .iter()
            .map(|document| self.predict_counts(&vocabulary.count_vector(document)))
            .collect()
    }

    /// Predicts the class of one term-count vector.
    ///
    /// Each class score starts at the class log-prior. The scoring loop then
    /// visits every vocabulary position once and, where the document's count
    /// is non-zero, adds the Laplace-smoothed log-likelihood
    /// `ln((tf[term][class] + 1) / (class_total[class] + V))` exactly once.
    /// A count of 2 contributes no more than a count of 1; only presence
    /// matters. Ties resolve to the lowest class index.
    ///
    /// # Errors
    ///
    /// Returns error if the model is not fitted or the vector length does
    /// not match the vocabulary size.
    pub fn predict_counts(&self, counts: &[u64]) -> Result<usize> {
        let vocabulary = self.vocabulary.as_ref().ok_or("Model not fitted")?;
        let term_frequencies = self.term_frequencies.as_ref().ok_or("Model not fitted")?;
        let class_totals = self.class_totals.ok_or("Model not fitted")?;
        let class_log_priors = self.class_log_priors.ok_or("Model not fitted")?;

        let n_terms = vocabulary.len();
        if counts.len() != n_terms {
            return Err(SentirError::dimension_mismatch(
                "vocabulary terms",
                n_terms,
                counts.len(),
            ));
        }

        let mut scores = class_log_priors;
        for (term, &count) in counts.iter().enumerate() {
            if count == 0 {
                continue;
            }
            for (class, score) in scores.iter_mut().enumerate() {
                let smoothed = (term_frequencies[term * N_CLASSES + class] + 1) as f64
                    / (class_totals[class] as f64 + n_terms as f64);
                *score += smoothed.ln();
            }
        }

        let mut best = 0;
        for class in 1..N_CLASSES {
            if scores[class] > scores[best] {
                best = class;
            }
        }

        Ok(best)
    }

    /// Laplace-smoothed log-likelihood of a vocabulary term given a class.
    ///
    /// For a term never observed in the class this is
    /// `ln(1 / (class_total + V))`, never `ln(0)`.
    ///
    /// # Errors
    ///
    /// Returns error if the model is not fitted or `term` is out of range.
    pub fn log_likelihood(&self, term: usize, class: usize) -> Result<f64> {
        let vocabulary = self.vocabulary.as_ref().ok_or("Model not fitted")?;
        let term_frequencies = self.term_frequencies.as_ref().ok_or("Model not fitted")?;
        let class_totals = self.class_totals.ok_or("Model not fitted")?;

        let n_terms = vocabulary.len();
        if term >= n_terms {
            return Err(format!("term index {term} out of range (vocabulary size {n_terms})").into());
        }
        if class >= N_CLASSES {
            return Err(format!("class {class} is outside the binary classes 0 and 1").into());
        }

        let smoothed = (term_frequencies[term * N_CLASSES + class] + 1) as f64
            / (class_totals[class] as f64 + n_terms as f64);
        Ok(smoothed.ln())
    }

    /// Vocabulary observed at fit time, or `None` when unfitted.
    #[must_use]
    pub fn vocabulary(&self) -> Option<&Vocabulary> {
        self.vocabulary.as_ref()
    }

    /// Row-major (`n_terms` × `N_CLASSES`) term-frequency table.
    #[must_use]
    pub fn term_frequencies(&self) -> Option<&[u64]> {
        self.term_frequencies.as_deref()
    }

    /// Total term occurrences per class.
    #[must_use]
    pub fn class_totals(&self) -> Option<[u64; N_CLASSES]> {
        self.class_totals
    }

    /// Natural-log class priors.
    #[must_use]
    pub fn class_log_priors(&self) -> Option<[f64; N_CLASSES]> {
        self.class_log_priors
    }

    /// Saves the fitted model as a versioned JSON record.
    ///
    /// The record holds the ordered vocabulary, the token-to-index map, the
    /// term-frequency table, the class totals, and the class log-priors, so
    /// an inference-only consumer can score documents without retraining.
    ///
    /// # Errors
    ///
    /// Returns error if the model is not fitted or the file cannot be
    /// written.
    ///
    /// # Example
    ///
    /// ```
    /// use sentir::classification::MultinomialNb;
    ///
    /// let documents = vec![vec!["good".to_string()], vec!["bad".to_string()]];
    /// let mut model = MultinomialNb::new();
    /// model.fit(&documents, &[1, 0]).expect("Valid training data");
    ///
    /// model
    ///     .save_json("/tmp/doctest_sentir_model.json")
    ///     .expect("Model is fitted and path is writable");
    /// # std::fs::remove_file("/tmp/doctest_sentir_model.json").ok();
    /// ```
    pub fn save_json<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let vocabulary = self
            .vocabulary
            .as_ref()
            .ok_or("Cannot save unfitted model. Call fit() first.")?;
        let term_frequencies = self
            .term_frequencies
            .as_ref()
            .ok_or("Cannot save unfitted model. Call fit() first.")?;
        let class_totals = self
            .class_totals
            .ok_or("Cannot save unfitted model. Call fit() first.")?;
        let class_log_priors = self
            .class_log_priors
            .ok_or("Cannot save unfitted model. Call fit() first.")?;

        let record = ModelRecord {
            schema_version: SCHEMA_VERSION,
            vocabulary: vocabulary.terms().to_vec(),
            vocabulary_index: vocabulary.index().clone(),
            term_frequencies: term_frequencies.clone(),
            class_totals,
            class_log_priors,
        };

        let file = File::create(path)?;
        serde_json::to_writer(BufWriter::new(file), &record)?;
        Ok(())
    }

    /// Loads a fitted model from a JSON record written by
    /// [`save_json`](Self::save_json).
    ///
    /// The record is validated on load: schema version, table shape,
    /// index consistency with the ordered terms, and the conservation law
    /// (class totals equal to the table's column sums).
    ///
    /// # Errors
    ///
    /// Returns error if the file cannot be read, is not valid JSON, or
    /// fails validation.
    pub fn load_json<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path)?;
        let record: ModelRecord = serde_json::from_reader(BufReader::new(file))?;

        if record.schema_version != SCHEMA_VERSION {
            return Err(SentirError::FormatError {
                message: format!(
                    "unsupported schema version {}, expected {SCHEMA_VERSION}",
                    record.schema_version
                ),
            });
        }
        if record.term_frequencies.len() != record.vocabulary.len() * N_CLASSES {
            return Err(SentirError::FormatError {
                message: format!(
                    "term frequency table has {} entries, expected {}",
                    record.term_frequencies.len(),
                    record.vocabulary.len() * N_CLASSES
                ),
            });
        }

        let vocabulary = Vocabulary::from_terms(record.vocabulary)?;
        if record.vocabulary_index != *vocabulary.index() {
            return Err(SentirError::FormatError {
                message: "vocabulary index does not match term order".to_string(),
            });
        }

        let mut column_sums = [0u64; N_CLASSES];
        for term in 0..vocabulary.len() {
            for (class, sum) in column_sums.iter_mut().enumerate() {
                *sum += record.term_frequencies[term * N_CLASSES + class];
            }
        }
        if column_sums != record.class_totals {
            return Err(SentirError::FormatError {
                message: format!(
                    "class totals {:?} do not match table column sums {:?}",
                    record.class_totals, column_sums
                ),
            });
        }

        Ok(Self {
            vocabulary: Some(vocabulary),
            term_frequencies: Some(record.term_frequencies),
            class_totals: Some(record.class_totals),
            class_log_priors: Some(record.class_log_priors),
        })
    }
}

impl Default for MultinomialNb {
    fn default() -> Self {
        Self::new()
    }
}

/// On-disk model schema.
#[derive(Debug, Serialize, Deserialize)]
struct ModelRecord {
    schema_version: u32,
    vocabulary: Vec<String>,
    vocabulary_index: HashMap<String, usize>,
    term_frequencies: Vec<u64>,
    class_totals: [u64; N_CLASSES],
    class_log_priors: [f64; N_CLASSES],
}

#[cfg(test)]
mod tests;
