//! Error types for the Folio system.
//!
//! Uses `thiserror` for ergonomic error definition with rich context.

use std::fmt;

use thiserror::Error;

/// Convenience result alias used across all Folio crates.
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for Folio operations.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional context about where the error occurred.
    pub context: Option<ErrorContext>,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            context: None,
        }
    }

    /// Adds context to this error.
    #[must_use]
    pub fn with_context(mut self, context: ErrorContext) -> Self {
        self.context = Some(context);
        self
    }

    /// Creates an invalid pattern error.
    #[must_use]
    pub fn invalid_pattern(pattern: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidPattern {
            pattern: pattern.into(),
            reason: reason.into(),
        })
    }

    /// Creates a malformed capture error.
    #[must_use]
    pub fn malformed_capture(capture: impl Into<String>, expected: &'static str) -> Self {
        Self::new(ErrorKind::MalformedCapture {
            capture: capture.into(),
            expected,
        })
    }

    /// Creates a capture arity mismatch error.
    #[must_use]
    pub fn capture_arity(expected: usize, actual: usize) -> Self {
        Self::new(ErrorKind::CaptureArity { expected, actual })
    }

    /// Creates a configuration error.
    #[must_use]
    pub fn config(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Config(message.into()))
    }

    /// Creates an internal error.
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Internal(message.into()))
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Error)]
pub enum ErrorKind {
    /// A pattern could not be compiled.
    #[error("invalid pattern \"{pattern}\": {reason}")]
    InvalidPattern {
        /// The pattern source text.
        pattern: String,
        /// Why the pattern was rejected.
        reason: String,
    },

    /// A captured value could not be interpreted by its handler.
    #[error("malformed capture \"{capture}\": expected {expected}")]
    MalformedCapture {
        /// The captured text.
        capture: String,
        /// What the handler expected (e.g. "a year").
        expected: &'static str,
    },

    /// A handler received the wrong number of captures.
    #[error("capture arity mismatch: expected {expected}, got {actual}")]
    CaptureArity {
        /// Number of captures the handler consumes.
        expected: usize,
        /// Number of captures it was given.
        actual: usize,
    },

    /// Catalog encoding or decoding failed.
    #[error("serialization error: {0}")]
    SerializationError(String),

    /// Invalid configuration or command-line option.
    #[error("configuration error: {0}")]
    Config(String),

    /// Filesystem access failed.
    #[error("I/O error: {0}")]
    IoError(String),

    /// Internal error (should not happen).
    #[error("internal error: {0}")]
    Internal(String),
}

/// Context about where an error occurred.
#[derive(Debug, Clone, Default)]
pub struct ErrorContext {
    /// The query being evaluated.
    pub query: Option<String>,
    /// Source file, if the query came from one.
    pub source: Option<String>,
    /// Line number in source.
    pub line: Option<usize>,
}

impl ErrorContext {
    /// Creates a new empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the query text.
    #[must_use]
    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = Some(query.into());
        self
    }

    /// Sets the source location.
    #[must_use]
    pub fn with_source(mut self, source: impl Into<String>, line: usize) -> Self {
        self.source = Some(source.into());
        self.line = Some(line);
        self
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(source) = &self.source {
            write!(f, "at {source}")?;
            if let Some(line) = self.line {
                write!(f, ":{line}")?;
            }
        }
        if let Some(query) = &self.query {
            if self.source.is_some() {
                write!(f, " ")?;
            }
            write!(f, "in query \"{query}\"")?;
        }
        Ok(())
    }
}
