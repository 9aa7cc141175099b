//! Convenience re-exports for common usage.
//!
//! # Usage
//!
//! ```
//! use sentir::prelude::*;
//! ```

pub use crate::classification::MultinomialNb;
pub use crate::data::load_labeled_reviews;
pub use crate::error::{Result, SentirError};
pub use crate::metrics::{accuracy, precision, recall, Evaluation};
pub use crate::model_selection::undersample;
pub use crate::pipeline::SentimentPipeline;
pub use crate::text::{ReviewTokenizer, StopWordsFilter, Tokenizer, Vocabulary};
