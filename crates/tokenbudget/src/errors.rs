//! # Error Types

use crate::regex::ErrorWrapper;

/// Errors from tokenbudget operations.
#[derive(Debug, thiserror::Error)]
pub enum TBError {
    /// The vocabulary source could not be fetched.
    ///
    /// Transport failures are never retried internally.
    #[error("failed to fetch {location}: {message}")]
    Fetch {
        /// The source location which failed.
        location: String,
        /// The transport's error message.
        message: String,
    },

    /// Fetched content failed its content hash check.
    #[error("content hash mismatch for {location}: expected {expected}, found {found}")]
    HashMismatch {
        /// The source location.
        location: String,
        /// The expected lowercase hex SHA-256.
        expected: String,
        /// The observed lowercase hex SHA-256.
        found: String,
    },

    /// Vocabulary file content does not match its line grammar.
    #[error("parse error on line {line}: {message}")]
    Parse {
        /// The 1-based line number.
        line: usize,
        /// What was wrong with the line.
        message: String,
    },

    /// The rank table lacks single-byte entries.
    #[error("rank table is missing {missing} of 256 single-byte ranks")]
    IncompleteByteRanks {
        /// The number of byte values with no rank.
        missing: usize,
    },

    /// Vocabulary data is inconsistent.
    #[error("{0}")]
    VocabConflict(String),

    /// Token value out of range for the target type.
    #[error("token out of range")]
    TokenOutOfRange,

    /// A split pattern failed to compile, or failed while matching.
    #[error("regex error: {0}")]
    Pattern(#[from] ErrorWrapper),

    /// Cache store failure.
    #[error("cache error: {0}")]
    Cache(String),

    /// I/O error.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl TBError {
    /// Build a [`TBError::Parse`].
    pub fn parse<S: ToString>(
        line: usize,
        message: S,
    ) -> Self {
        Self::Parse {
            line,
            message: message.to_string(),
        }
    }

    /// Build a [`TBError::Fetch`].
    pub fn fetch<S: ToString>(
        location: &str,
        message: S,
    ) -> Self {
        Self::Fetch {
            location: location.to_string(),
            message: message.to_string(),
        }
    }
}

/// Result type for tokenbudget operations.
pub type TBResult<T> = core::result::Result<T, TBError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(
            TBError::parse(3, "missing rank").to_string(),
            "parse error on line 3: missing rank"
        );
        assert_eq!(
            TBError::fetch("https://x/y", "timeout").to_string(),
            "failed to fetch https://x/y: timeout"
        );
        assert_eq!(
            TBError::IncompleteByteRanks { missing: 2 }.to_string(),
            "rank table is missing 2 of 256 single-byte ranks"
        );
    }
}
