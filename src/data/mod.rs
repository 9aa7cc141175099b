//! Loading labeled review corpora from disk.
//!
//! Reviews arrive in a line-oriented field format: a `review/score:` line
//! carries the star rating, a later `review/text:` line carries the body.
//! The loader maps scores onto binary sentiment classes and pairs each text
//! with the class set by the score that precedes it.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::{Result, SentirError};

/// Map a review score string onto a sentiment class.
///
/// Scores `1.0` and `2.0` are negative (class 0), `4.0` and `5.0` are
/// positive (class 1). The neutral score `3.0` maps to `None` and the
/// review is dropped.
///
/// # Errors
///
/// Returns [`SentirError::UnknownScore`] for any other score string.
///
/// # Examples
///
/// ```
/// use sentir::data::class_from_score;
///
/// assert_eq!(class_from_score("5.0").expect("known score"), Some(1));
/// assert_eq!(class_from_score("2.0").expect("known score"), Some(0));
/// assert_eq!(class_from_score("3.0").expect("known score"), None);
/// assert!(class_from_score("6.0").is_err());
/// ```
pub fn class_from_score(score: &str) -> Result<Option<usize>> {
    match score {
        "1.0" | "2.0" => Ok(Some(0)),
        "3.0" => Ok(None),
        "4.0" | "5.0" => Ok(Some(1)),
        _ => Err(SentirError::UnknownScore {
            score: score.to_string(),
        }),
    }
}

/// Load a labeled review corpus from a line-oriented field file.
///
/// Each line is split at its first `:` into a field name and a value, both
/// trimmed. A `review/score` line sets the pending class via
/// [`class_from_score`]; the next `review/text` line is appended with that
/// class and clears it. Text lines with no pending class are dropped, as is
/// every review scored `3.0`. Lines with other field names, or no colon at
/// all, are ignored.
///
/// Returns the texts and their classes as parallel vectors.
///
/// # Errors
///
/// Returns error if the file cannot be read or a score string is not one
/// of `1.0` through `5.0`.
pub fn load_labeled_reviews<P: AsRef<Path>>(path: P) -> Result<(Vec<String>, Vec<usize>)> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);

    let mut texts = Vec::new();
    let mut labels = Vec::new();
    let mut pending_class: Option<usize> = None;

    for line in reader.lines() {
        let line = line?;
        let Some((field, value)) = line.split_once(':') else {
            continue;
        };
        match field.trim() {
            "review/score" => pending_class = class_from_score(value.trim())?,
            "review/text" => {
                if let Some(class) = pending_class.take() {
                    texts.push(value.trim().to_string());
                    labels.push(class);
                }
            }
            _ => {}
        }
    }

    Ok((texts, labels))
}

#[cfg(test)]
#[path = "data_tests.rs"]
mod tests;
