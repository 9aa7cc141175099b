//! Text processing for sentiment classification.
//!
//! This module provides the preprocessing front end of the classifier:
//! - [`tokenize`]: review tokenization with negation scoping
//! - [`stopwords`]: fixed English stop-word set
//! - [`vocabulary`]: ordered term index over tokenized corpora
//!
//! All tokenizers implement the [`Tokenizer`] trait and follow zero-unwrap safety.

pub mod stopwords;
pub mod tokenize;
pub mod vocabulary;

pub use stopwords::StopWordsFilter;
pub use tokenize::ReviewTokenizer;
pub use vocabulary::Vocabulary;

use crate::error::Result;

/// Trait for converting raw text into a token sequence.
///
/// # Examples
///
/// ```
/// use sentir::text::{ReviewTokenizer, Tokenizer};
///
/// let tokenizer = ReviewTokenizer::new();
/// let tokens = tokenizer.tokenize("A great movie").expect("tokenize should succeed");
/// assert_eq!(tokens, vec!["great", "movie"]);
/// ```
pub trait Tokenizer {
    /// Split `text` into tokens.
    fn tokenize(&self, text: &str) -> Result<Vec<String>>;
}
