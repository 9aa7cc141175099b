//! Error types for sentir operations.
//!
//! Provides rich error context for library consumers.

use std::fmt;

/// Main error type for sentir operations.
///
/// Provides detailed context about failures including parallel-slice length
/// mismatches, undefined evaluation metrics, corpus record problems, and
/// model persistence errors.
///
/// # Examples
///
/// ```
/// use sentir::error::SentirError;
///
/// let err = SentirError::DimensionMismatch {
///     expected: "documents=4".to_string(),
///     actual: "3".to_string(),
/// };
/// assert!(err.to_string().contains("dimension mismatch"));
/// ```
#[derive(Debug)]
pub enum SentirError {
    /// Parallel slices (documents/labels, predictions/labels) don't line up.
    DimensionMismatch {
        /// Expected length description
        expected: String,
        /// Actual length found
        actual: String,
    },

    /// Metric denominator is zero (no predictions or no labels for a class).
    UndefinedMetric {
        /// Metric name ("precision" or "recall")
        metric: String,
        /// Class the metric was requested for
        class: usize,
    },

    /// Corpus record carried a score outside the known mapping.
    UnknownScore {
        /// Score string as found in the record
        score: String,
    },

    /// A class has no training documents, so its log-prior is undefined.
    EmptyClass {
        /// Class with zero documents
        class: usize,
    },

    /// I/O error (file not found, permission denied, etc.).
    Io(std::io::Error),

    /// Serialization/deserialization error.
    Serialization(String),

    /// Invalid or corrupt model record.
    FormatError {
        /// Error description
        message: String,
    },

    /// Generic error with string message.
    Other(String),
}

impl fmt::Display for SentirError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SentirError::DimensionMismatch { expected, actual } => {
                write!(f, "dimension mismatch: expected {expected}, got {actual}")
            }
            SentirError::UndefinedMetric { metric, class } => {
                write!(
                    f,
                    "undefined metric: {metric} for class {class} has a zero denominator"
                )
            }
            SentirError::UnknownScore { score } => {
                write!(f, "unknown review score: {score:?}")
            }
            SentirError::EmptyClass { class } => {
                write!(f, "class {class} has no training documents")
            }
            SentirError::Io(e) => write!(f, "I/O error: {e}"),
            SentirError::Serialization(msg) => write!(f, "Serialization error: {msg}"),
            SentirError::FormatError { message } => {
                write!(f, "Invalid model format: {message}")
            }
            SentirError::Other(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for SentirError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SentirError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for SentirError {
    fn from(err: std::io::Error) -> Self {
        SentirError::Io(err)
    }
}

impl From<serde_json::Error> for SentirError {
    fn from(err: serde_json::Error) -> Self {
        SentirError::Serialization(err.to_string())
    }
}

impl From<&str> for SentirError {
    fn from(msg: &str) -> Self {
        SentirError::Other(msg.to_string())
    }
}

impl From<String> for SentirError {
    fn from(msg: String) -> Self {
        SentirError::Other(msg)
    }
}

impl SentirError {
    /// Create a dimension mismatch error with descriptive context
    #[must_use]
    pub fn dimension_mismatch(context: &str, expected: usize, actual: usize) -> Self {
        Self::DimensionMismatch {
            expected: format!("{context}={expected}"),
            actual: format!("{actual}"),
        }
    }

    /// Create an empty input error
    #[must_use]
    pub fn empty_input(context: &str) -> Self {
        Self::Other(format!("empty input: {context}"))
    }
}

#[allow(clippy::cmp_owned)]
impl PartialEq<&str> for SentirError {
    fn eq(&self, other: &&str) -> bool {
        self.to_string() == *other
    }
}

#[allow(clippy::cmp_owned)]
impl PartialEq<SentirError> for &str {
    fn eq(&self, other: &SentirError) -> bool {
        *self == other.to_string()
    }
}

/// Convenience type alias for Results.
pub type Result<T> = std::result::Result<T, SentirError>;
