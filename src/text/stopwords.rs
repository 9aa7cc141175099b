//! Stop words filtering for text preprocessing.
//!
//! Stop words are common words (like "the", "is", "at") that carry little
//! sentiment signal on their own and are dropped before counting terms.
//!
//! This module provides:
//! - Default English stop words list (common words from NLTK/sklearn)
//! - `StopWordsFilter` for membership checks during tokenization
//! - Case-insensitive matching
//! - Customizable stop word sets
//!
//! Negation function words (not, no, none, neither) are kept in the list:
//! the tokenizer fires its negation triggers on the pre-filter token, so a
//! dropped "not" still opens a negation scope.
//!
//! # Examples
//!
//! ```
//! use sentir::text::stopwords::StopWordsFilter;
//!
//! let filter = StopWordsFilter::english();
//! assert!(filter.is_stop_word("the"));
//! assert!(!filter.is_stop_word("terrible"));
//! ```

use std::collections::HashSet;

/// Stop words filter backed by a `HashSet` for O(1) membership checks.
///
/// Matching is case-insensitive; words are stored lowercase.
///
/// # Examples
///
/// ```
/// use sentir::text::stopwords::StopWordsFilter;
///
/// // Use default English stop words
/// let filter = StopWordsFilter::english();
/// assert!(filter.is_stop_word("was"));
/// assert!(!filter.is_stop_word("awful"));
///
/// // Custom stop words
/// let custom = StopWordsFilter::new(vec!["foo", "bar"]);
/// assert!(custom.is_stop_word("foo"));
/// assert!(!custom.is_stop_word("the"));
/// ```
#[derive(Debug, Clone)]
pub struct StopWordsFilter {
    /// Set of stop words (stored in lowercase for case-insensitive matching)
    stop_words: HashSet<String>,
}

impl StopWordsFilter {
    /// Create a new stop words filter with custom stop words.
    ///
    /// # Arguments
    ///
    /// * `words` - Collection of stop words (will be converted to lowercase)
    ///
    /// # Examples
    ///
    /// ```
    /// use sentir::text::stopwords::StopWordsFilter;
    ///
    /// let filter = StopWordsFilter::new(vec!["custom", "stop", "words"]);
    /// assert!(filter.is_stop_word("CUSTOM"));
    /// ```
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let stop_words = words
            .into_iter()
            .map(|s| s.as_ref().to_lowercase())
            .collect();

        Self { stop_words }
    }

    /// Create a filter with English stop words.
    ///
    /// Uses a fixed list of 171 common English words based on the NLTK and
    /// scikit-learn stop word lists.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentir::text::stopwords::StopWordsFilter;
    ///
    /// let filter = StopWordsFilter::english();
    /// assert!(filter.is_stop_word("the"));
    /// assert!(filter.is_stop_word("is"));
    /// assert!(!filter.is_stop_word("great"));
    /// ```
    #[must_use]
    pub fn english() -> Self {
        Self::new(ENGLISH_STOP_WORDS)
    }

    /// Check if a word is a stop word (case-insensitive).
    ///
    /// # Examples
    ///
    /// ```
    /// use sentir::text::stopwords::StopWordsFilter;
    ///
    /// let filter = StopWordsFilter::english();
    /// assert!(filter.is_stop_word("the"));
    /// assert!(filter.is_stop_word("THE"));
    /// assert!(!filter.is_stop_word("sentiment"));
    /// ```
    #[must_use]
    pub fn is_stop_word(&self, word: &str) -> bool {
        self.stop_words.contains(&word.to_lowercase())
    }

    /// Get the number of stop words in the filter.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentir::text::stopwords::StopWordsFilter;
    ///
    /// let filter = StopWordsFilter::english();
    /// assert_eq!(filter.len(), 171);
    /// ```
    #[must_use]
    pub fn len(&self) -> usize {
        self.stop_words.len()
    }

    /// Check if the filter is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentir::text::stopwords::StopWordsFilter;
    ///
    /// let empty = StopWordsFilter::new(Vec::<String>::new());
    /// assert!(empty.is_empty());
    /// ```
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.stop_words.is_empty()
    }
}

impl Default for StopWordsFilter {
    fn default() -> Self {
        Self::english()
    }
}

/// Default English stop words (171 common words).
///
/// Based on NLTK and scikit-learn stop word lists. Sentiment-bearing words
/// ("like", "love", "great") and negative contractions normalized without
/// apostrophes ("dont", "isnt") are absent; they survive filtering and
/// reach the vocabulary.
///
/// # Examples
///
/// ```
/// use sentir::text::stopwords::ENGLISH_STOP_WORDS;
///
/// assert!(ENGLISH_STOP_WORDS.contains(&"the"));
/// assert!(ENGLISH_STOP_WORDS.contains(&"not"));
/// assert!(!ENGLISH_STOP_WORDS.contains(&"love"));
/// ```
pub const ENGLISH_STOP_WORDS: &[&str] = &build_stop_words();

/// Stop words grouped by function, flattened at compile time.
const STOP_WORD_CATEGORIES: &[(&str, &[&str])] = &[
    ("articles_demonstratives", &["a", "an", "the", "that", "this", "these", "those"]),
    ("pronouns", &[
        "i", "me", "my", "myself", "we", "our", "ours", "ourselves",
        "you", "your", "yours", "yourself", "yourselves",
        "he", "him", "his", "himself", "she", "her", "hers", "herself",
        "it", "its", "itself", "they", "them", "their", "theirs", "themselves",
    ]),
    ("question_words", &["what", "which", "who", "whom", "whose", "why", "when", "where", "how"]),
    ("prepositions", &[
        "about", "above", "across", "after", "against", "along", "among", "around",
        "at", "before", "behind", "below", "beneath", "beside", "between", "beyond",
        "by", "down", "during", "for", "from", "in", "inside", "into", "near",
        "of", "off", "on", "onto", "out", "outside", "over", "through", "throughout",
        "to", "toward", "under", "underneath", "until", "up", "upon",
        "with", "within", "without",
    ]),
    ("conjunctions", &[
        "and", "as", "because", "but", "if", "or", "since", "so",
        "than", "though", "unless", "while",
    ]),
    ("auxiliary_verbs", &[
        "am", "is", "are", "was", "were", "be", "been", "being",
        "have", "has", "had", "having", "do", "does", "did", "doing",
        "would", "should", "could", "ought", "can", "may", "might", "must", "will", "shall",
    ]),
    // Also negation triggers; the tokenizer checks triggers before filtering.
    ("negation", &["neither", "no", "none", "not"]),
    ("quantifiers", &[
        "all", "any", "both", "each", "every", "few", "more", "most", "much",
        "one", "other", "same", "several", "some", "such",
    ]),
    ("degree_place_time", &[
        "very", "too", "only", "own", "then", "there", "just", "now", "here",
    ]),
    ("common_verbs", &[
        "again", "also", "another", "back", "even", "ever",
        "get", "give", "go", "got", "made", "make", "say", "see", "take", "way",
    ]),
];

/// Total number of stop words across all categories.
const TOTAL_STOP_WORDS: usize = count_total_stop_words();

/// Count total stop words at compile time.
const fn count_total_stop_words() -> usize {
    let mut total = 0;
    let mut i = 0;
    while i < STOP_WORD_CATEGORIES.len() {
        total += STOP_WORD_CATEGORIES[i].1.len();
        i += 1;
    }
    total
}

/// Flatten all category words into a single array at compile time.
const fn build_stop_words() -> [&'static str; TOTAL_STOP_WORDS] {
    let mut result = [""; TOTAL_STOP_WORDS];
    let mut idx = 0;
    let mut cat = 0;
    while cat < STOP_WORD_CATEGORIES.len() {
        let words = STOP_WORD_CATEGORIES[cat].1;
        let mut w = 0;
        while w < words.len() {
            result[idx] = words[w];
            idx += 1;
            w += 1;
        }
        cat += 1;
    }
    result
}

#[cfg(test)]
#[path = "stopwords_tests.rs"]
mod tests;
