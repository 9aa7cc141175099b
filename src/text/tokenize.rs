//! Review tokenization with negation scoping.
//!
//! `ReviewTokenizer` turns raw review text into the normalized token stream
//! the classifier counts:
//! - lowercasing and apostrophe stripping (so "don't" becomes "dont")
//! - markup removal (visible text only, common character entities decoded)
//! - word-level splitting with punctuation as separate single-char tokens
//! - stop-word and non-alphanumeric filtering
//! - negation scoping: tokens between a trigger word and the next
//!   sentence-terminal punctuation are emitted with a `NEG_` prefix
//!
//! Filtering and scoping are decoupled: state transitions run on the
//! pre-filter token, so a stop-word trigger ("not") still opens a scope and
//! a dropped punctuation token still closes one.

use std::collections::HashSet;

use crate::error::Result;
use crate::text::stopwords::StopWordsFilter;
use crate::text::Tokenizer;

/// Prefix for tokens emitted inside a negation scope.
pub const NEGATION_MARKER: &str = "NEG_";

/// Words that open a negation scope, normalized without apostrophes.
///
/// # Examples
///
/// ```
/// use sentir::text::tokenize::NEGATION_TRIGGERS;
///
/// assert!(NEGATION_TRIGGERS.contains(&"not"));
/// assert!(NEGATION_TRIGGERS.contains(&"dont"));
/// ```
pub const NEGATION_TRIGGERS: &[&str] = &[
    "not", "never", "nothing", "nowhere", "noone", "none", "no", "dont", "hasnt", "hadnt", "cant",
    "couldnt", "shouldnt", "wont", "wouldnt", "doesnt", "didnt", "isnt", "arent", "aint",
];

/// Characters that close a negation scope (sentence-like boundaries).
const SCOPE_TERMINATORS: &[char] = &['.', ':', ';', '!', '?'];

/// Longest entity body considered by the markup scanner ("&#xffffff;").
const MAX_ENTITY_LEN: usize = 8;

/// Tokenizer for review text with negation scoping.
///
/// # Examples
///
/// ```
/// use sentir::text::{ReviewTokenizer, Tokenizer};
///
/// let tokenizer = ReviewTokenizer::new();
///
/// // Tokens after a negation trigger are marked until the sentence ends.
/// let tokens = tokenizer
///     .tokenize("I do not like this. It is great")
///     .expect("tokenize should succeed");
/// assert_eq!(tokens, vec!["NEG_like", "great"]);
///
/// // Markup never leaks into tokens.
/// let tokens = tokenizer
///     .tokenize("Great <br/>movie")
///     .expect("tokenize should succeed");
/// assert_eq!(tokens, vec!["great", "movie"]);
/// ```
#[derive(Debug, Clone)]
pub struct ReviewTokenizer {
    stop_words: StopWordsFilter,
    triggers: HashSet<&'static str>,
}

impl ReviewTokenizer {
    /// Create a tokenizer with the default English stop words.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentir::text::ReviewTokenizer;
    ///
    /// let tokenizer = ReviewTokenizer::new();
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self {
            stop_words: StopWordsFilter::english(),
            triggers: NEGATION_TRIGGERS.iter().copied().collect(),
        }
    }

    /// Replace the stop-word set.
    ///
    /// Negation triggers keep firing even when the new set drops them from
    /// emission.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentir::text::stopwords::StopWordsFilter;
    /// use sentir::text::{ReviewTokenizer, Tokenizer};
    ///
    /// let tokenizer =
    ///     ReviewTokenizer::new().with_stop_words(StopWordsFilter::new(Vec::<String>::new()));
    /// let tokens = tokenizer.tokenize("the movie").expect("tokenize should succeed");
    /// assert_eq!(tokens, vec!["the", "movie"]);
    /// ```
    #[must_use]
    pub fn with_stop_words(mut self, stop_words: StopWordsFilter) -> Self {
        self.stop_words = stop_words;
        self
    }
}

impl Default for ReviewTokenizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Tokenizer for ReviewTokenizer {
    fn tokenize(&self, text: &str) -> Result<Vec<String>> {
        // Markup runs before apostrophe removal; entity decoding can
        // reintroduce apostrophes ("&#39;").
        let text = strip_markup(&text.to_lowercase());
        let text = text.replace('\'', "");

        let mut tokens = Vec::new();
        let mut negated = false;

        for word in split_words(&text) {
            let opens_scope = self.triggers.contains(word.as_str());
            let closes_scope = word.contains(SCOPE_TERMINATORS);
            let emit = !self.stop_words.is_stop_word(&word)
                && word.chars().any(char::is_alphanumeric);

            if emit {
                if negated {
                    tokens.push(format!("{NEGATION_MARKER}{word}"));
                } else {
                    tokens.push(word);
                }
            }

            // Transitions run after emission: the trigger itself is never
            // negated, and a terminator ends the scope for what follows.
            if opens_scope {
                negated = true;
            } else if closes_scope {
                negated = false;
            }
        }

        Ok(tokens)
    }
}

/// Split text into words, emitting ASCII punctuation as single-char tokens.
///
/// Apostrophes have already been removed by the time this runs, so no
/// contraction handling is needed.
fn split_words(text: &str) -> Vec<String> {
    let mut words = Vec::new();
    let mut current = String::new();

    for ch in text.chars() {
        if ch.is_whitespace() {
            if !current.is_empty() {
                words.push(current.clone());
                current.clear();
            }
        } else if ch.is_ascii_punctuation() {
            // Push current word, then push punctuation as separate token
            if !current.is_empty() {
                words.push(current.clone());
                current.clear();
            }
            words.push(ch.to_string());
        } else {
            current.push(ch);
        }
    }

    if !current.is_empty() {
        words.push(current);
    }

    words
}

/// Extract the visible text of a markup fragment.
///
/// Tag content between `<` and the next `>` is dropped without inserting
/// whitespace; common character entities are decoded. A `<` not followed by
/// a letter, `/`, or `!` is literal text ("i <3 this" keeps its heart).
fn strip_markup(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(text.len());
    let mut i = 0;

    while i < chars.len() {
        match chars[i] {
            '<' if opens_tag(&chars, i) => {
                while i < chars.len() && chars[i] != '>' {
                    i += 1;
                }
                i += 1;
            }
            '&' => {
                if let Some((decoded, next)) = decode_entity(&chars, i) {
                    out.push(decoded);
                    i = next;
                } else {
                    out.push('&');
                    i += 1;
                }
            }
            c => {
                out.push(c);
                i += 1;
            }
        }
    }

    out
}

/// A `<` opens a tag only when followed by a letter, `/`, or `!`.
fn opens_tag(chars: &[char], i: usize) -> bool {
    matches!(chars.get(i + 1), Some(c) if c.is_ascii_alphabetic() || *c == '/' || *c == '!')
}

/// Decode the character entity starting at `chars[start]` (a `&`).
///
/// Returns the decoded character and the index just past the `;`, or `None`
/// when the text after `&` is not a well-formed entity.
fn decode_entity(chars: &[char], start: usize) -> Option<(char, usize)> {
    let mut end = None;
    for (offset, &c) in chars[start + 1..].iter().enumerate() {
        if offset > MAX_ENTITY_LEN {
            break;
        }
        if c == ';' {
            end = Some(start + 1 + offset);
            break;
        }
        if !c.is_ascii_alphanumeric() && c != '#' {
            break;
        }
    }

    let end = end?;
    let name: String = chars[start + 1..end].iter().collect();
    let decoded = match name.as_str() {
        "amp" => '&',
        "lt" => '<',
        "gt" => '>',
        "quot" => '"',
        "apos" => '\'',
        "nbsp" => ' ',
        _ => {
            let code = name.strip_prefix('#')?;
            let value = if let Some(hex) = code.strip_prefix('x') {
                u32::from_str_radix(hex, 16).ok()?
            } else {
                code.parse::<u32>().ok()?
            };
            char::from_u32(value)?
        }
    };

    Some((decoded, end + 1))
}

#[cfg(test)]
#[path = "tokenize_tests.rs"]
mod tests;
