//! Error types for AI4DM quality analysis.
//!
//! The analyzers themselves absorb malformed data into their scores; the
//! analysis pipeline only fails on an empty input or an invalid
//! configuration. The I/O and serialization variants are raised by the
//! front ends that read files and write reports.

use thiserror::Error;

/// Main error type for AI4DM operations.
#[derive(Debug, Error)]
pub enum QualityError {
    /// The input text contained no non-blank lines.
    #[error("File is empty or could not be parsed: {file_name}")]
    EmptyInput {
        /// Declared name of the input
        file_name: String,
    },

    /// Configuration or validation error
    #[error("Configuration error: {message}")]
    Configuration {
        /// What was wrong
        message: String,
    },

    /// I/O operation failed
    #[error("I/O operation failed: {context}")]
    Io {
        /// What was being read or written
        context: String,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// Serialization or deserialization failed
    #[error("Serialization failed: {context}")]
    Serialization {
        /// What was being encoded
        context: String,
        /// Underlying error
        #[source]
        source: serde_json::Error,
    },
}

/// Convenience type alias for Results with QualityError
pub type Result<T> = std::result::Result<T, QualityError>;

impl QualityError {
    /// Creates an empty input error for the named source
    pub fn empty_input(file_name: impl Into<String>) -> Self {
        Self::EmptyInput {
            file_name: file_name.into(),
        }
    }

    /// Creates a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Creates an I/O error with context
    pub fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            context: context.into(),
            source,
        }
    }

    /// Creates a serialization error with context
    pub fn serialization(context: impl Into<String>, source: serde_json::Error) -> Self {
        Self::Serialization {
            context: context.into(),
            source,
        }
    }

    /// Returns true if this error reports an empty input.
    pub fn is_empty_input(&self) -> bool {
        matches!(self, Self::EmptyInput { .. })
    }
}
