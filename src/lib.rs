//! Sentir: binary sentiment classification for product reviews in pure Rust.
//!
//! Sentir trains a multinomial Naive Bayes classifier over negation-aware
//! bag-of-words features: reviews are lowercased, stripped of markup,
//! split into words, filtered against an English stop list, and terms under
//! a negation get a marker prefix so "not good" and "good" stay apart.
//!
//! # Quick Start
//!
//! ```
//! use sentir::prelude::*;
//!
//! let documents = vec![
//!     vec!["bad".to_string(), "hate".to_string()],
//!     vec!["love".to_string(), "great".to_string()],
//! ];
//! let labels = vec![0, 1];
//!
//! let mut model = MultinomialNb::new();
//! model.fit(&documents, &labels).expect("Valid training data");
//!
//! let predictions = model
//!     .predict(&[vec!["great".to_string()]])
//!     .expect("Model is fitted");
//! assert_eq!(predictions, vec![1]);
//! ```
//!
//! # Modules
//!
//! - [`text`]: Tokenization, stop words, negation marking, vocabulary
//! - [`classification`]: Multinomial Naive Bayes classifier
//! - [`metrics`]: Accuracy, per-class precision and recall
//! - [`model_selection`]: Class-balancing undersampler
//! - [`data`]: Labeled review corpus loader
//! - [`pipeline`]: End-to-end train/evaluate runs

pub mod classification;
pub mod data;
pub mod error;
pub mod metrics;
pub mod model_selection;
pub mod pipeline;
pub mod prelude;
pub mod text;

pub use error::{Result, SentirError};
