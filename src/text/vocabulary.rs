//! Ordered vocabulary over tokenized corpora.
//!
//! The vocabulary assigns every distinct token a stable integer index in
//! lexicographic order, so two builds over the same corpus produce the same
//! term-frequency matrix layout. It also turns a tokenized document into the
//! term-count vector the classifier scores.

use std::collections::{BTreeSet, HashMap};

use crate::error::{Result, SentirError};

/// Sorted set of distinct tokens with a forward token-to-index map.
///
/// # Examples
///
/// ```
/// use sentir::text::Vocabulary;
///
/// let documents = vec![
///     vec!["great".to_string(), "love".to_string()],
///     vec!["love".to_string(), "great".to_string()],
/// ];
/// let vocabulary = Vocabulary::from_documents(&documents);
///
/// assert_eq!(vocabulary.terms(), &["great".to_string(), "love".to_string()]);
/// assert_eq!(vocabulary.index_of("love"), Some(1));
/// assert_eq!(vocabulary.index_of("bad"), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vocabulary {
    /// Distinct terms in lexicographic order; position is the term's index.
    terms: Vec<String>,
    /// Forward map from term to its position in `terms`.
    index: HashMap<String, usize>,
}

impl Vocabulary {
    /// Build a vocabulary from tokenized documents.
    ///
    /// Every observed token is retained; no frequency threshold is applied.
    /// The result is deterministic for a given corpus: terms are distinct
    /// and lexicographically ordered, and positions are the indices.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentir::text::Vocabulary;
    ///
    /// let documents = vec![vec!["b".to_string(), "a".to_string(), "b".to_string()]];
    /// let vocabulary = Vocabulary::from_documents(&documents);
    /// assert_eq!(vocabulary.terms(), &["a".to_string(), "b".to_string()]);
    /// ```
    #[must_use]
    pub fn from_documents(documents: &[Vec<String>]) -> Self {
        let mut distinct = BTreeSet::new();
        for document in documents {
            for token in document {
                distinct.insert(token.clone());
            }
        }

        let terms: Vec<String> = distinct.into_iter().collect();
        Self::from_sorted_terms(terms)
    }

    /// Rebuild a vocabulary from an already-ordered term list.
    ///
    /// Used when loading a persisted model. Errors when the list is not
    /// strictly sorted (which also catches duplicates).
    pub fn from_terms(terms: Vec<String>) -> Result<Self> {
        if let Some(w) = terms.windows(2).find(|w| w[0] >= w[1]) {
            return Err(SentirError::FormatError {
                message: format!(
                    "vocabulary terms must be strictly sorted, found {:?} before {:?}",
                    w[0], w[1]
                ),
            });
        }

        Ok(Self::from_sorted_terms(terms))
    }

    fn from_sorted_terms(terms: Vec<String>) -> Self {
        let index = terms
            .iter()
            .enumerate()
            .map(|(i, term)| (term.clone(), i))
            .collect();

        Self { terms, index }
    }

    /// Ordered terms; the position of a term is its index.
    #[must_use]
    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    /// Forward map from term to index.
    #[must_use]
    pub fn index(&self) -> &HashMap<String, usize> {
        &self.index
    }

    /// Index of `token`, or `None` when it is out of vocabulary.
    #[must_use]
    pub fn index_of(&self, token: &str) -> Option<usize> {
        self.index.get(token).copied()
    }

    /// Number of distinct terms.
    #[must_use]
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// Check if the vocabulary has no terms.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Term-count vector for a tokenized document.
    ///
    /// The vector has one entry per vocabulary term holding the token's
    /// occurrence count in the document. Out-of-vocabulary tokens are
    /// silently skipped.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentir::text::Vocabulary;
    ///
    /// let documents = vec![vec!["a".to_string(), "b".to_string()]];
    /// let vocabulary = Vocabulary::from_documents(&documents);
    ///
    /// let tokens = vec!["b".to_string(), "b".to_string(), "unseen".to_string()];
    /// assert_eq!(vocabulary.count_vector(&tokens), vec![0, 2]);
    /// ```
    #[must_use]
    pub fn count_vector(&self, tokens: &[String]) -> Vec<u64> {
        let mut counts = vec![0u64; self.terms.len()];
        for token in tokens {
            if let Some(i) = self.index_of(token) {
                counts[i] += 1;
            }
        }
        counts
    }
}

#[cfg(test)]
#[path = "vocabulary_tests.rs"]
mod tests;
