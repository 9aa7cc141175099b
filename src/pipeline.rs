//! End-to-end training and evaluation over labeled review corpora.
//!
//! [`SentimentPipeline`] wires the loader, sampler, tokenizer, classifier,
//! and evaluator together: load both corpora, balance each, tokenize, fit
//! on the training split, score the testing split. The fitted model and the
//! measures can optionally be persisted as JSON.

use std::path::PathBuf;

use tracing::{debug, info};

use crate::classification::MultinomialNb;
use crate::data::load_labeled_reviews;
use crate::error::Result;
use crate::metrics::Evaluation;
use crate::model_selection::undersample;
use crate::text::{ReviewTokenizer, Tokenizer, Vocabulary};

/// Configuration and entry point for a full sentiment run.
///
/// # Examples
///
/// ```no_run
/// use sentir::pipeline::SentimentPipeline;
///
/// let evaluation = SentimentPipeline::new("train.txt", "test.txt")
///     .with_random_state(42)
///     .with_model_path("model.json")
///     .run()
///     .expect("corpora exist and hold both classes");
/// println!("accuracy: {:.3}", evaluation.accuracy);
/// ```
#[derive(Debug, Clone)]
pub struct SentimentPipeline {
    train_path: PathBuf,
    test_path: PathBuf,
    random_state: Option<u64>,
    model_path: Option<PathBuf>,
    metrics_path: Option<PathBuf>,
}

impl SentimentPipeline {
    /// Create a pipeline over a training and a testing corpus.
    #[must_use]
    pub fn new(train_path: impl Into<PathBuf>, test_path: impl Into<PathBuf>) -> Self {
        Self {
            train_path: train_path.into(),
            test_path: test_path.into(),
            random_state: None,
            model_path: None,
            metrics_path: None,
        }
    }

    /// Set the random seed used when balancing both splits.
    #[must_use]
    pub const fn with_random_state(mut self, random_state: u64) -> Self {
        self.random_state = Some(random_state);
        self
    }

    /// Write the fitted model to `path` after a successful run.
    #[must_use]
    pub fn with_model_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.model_path = Some(path.into());
        self
    }

    /// Write the measures to `path` after a successful run.
    #[must_use]
    pub fn with_metrics_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.metrics_path = Some(path.into());
        self
    }

    /// Run the full pipeline and return the measures on the testing split.
    ///
    /// # Errors
    ///
    /// Returns error if either corpus cannot be loaded, either split is
    /// missing a class, fitting or prediction fails, a measure is
    /// undefined, or persistence fails.
    pub fn run(&self) -> Result<Evaluation> {
        let (train_x, train_y) = load_labeled_reviews(&self.train_path)?;
        let (test_x, test_y) = load_labeled_reviews(&self.test_path)?;
        debug!(
            "loaded {} training and {} testing reviews",
            train_x.len(),
            test_x.len()
        );

        let (train_x, train_y) = undersample(&train_x, &train_y, self.random_state)?;
        let (test_x, test_y) = undersample(&test_x, &test_y, self.random_state)?;
        debug!(
            "balanced to {} training and {} testing reviews",
            train_x.len(),
            test_x.len()
        );

        let tokenizer = ReviewTokenizer::new();
        let train_docs = tokenize_corpus(&tokenizer, &train_x)?;
        let test_docs = tokenize_corpus(&tokenizer, &test_x)?;
        debug!("tokenized training and testing reviews");

        let mut model = MultinomialNb::new();
        model.fit(&train_docs, &train_y)?;
        info!(
            "fitted model with a vocabulary of {} terms",
            model.vocabulary().map_or(0, Vocabulary::len)
        );

        let predictions = model.predict(&test_docs)?;
        debug!("predicted classes on the testing split");

        let evaluation = Evaluation::from_predictions(&predictions, &test_y)?;
        info!(
            "accuracy {:.3} over {} testing reviews",
            evaluation.accuracy,
            test_y.len()
        );

        if let Some(path) = &self.model_path {
            model.save_json(path)?;
            debug!("saved model to {}", path.display());
        }
        if let Some(path) = &self.metrics_path {
            evaluation.save_json(path)?;
            debug!("saved measures to {}", path.display());
        }

        Ok(evaluation)
    }
}

fn tokenize_corpus(tokenizer: &ReviewTokenizer, texts: &[String]) -> Result<Vec<Vec<String>>> {
    texts.iter().map(|text| tokenizer.tokenize(text)).collect()
}
