//! Integration tests for Error types
//!
//! Tests error construction, display, context, and error kinds.

use folio_foundation::{Error, ErrorContext, ErrorKind};

// =============================================================================
// Error Construction
// =============================================================================

#[test]
fn error_invalid_pattern() {
    let err = Error::invalid_pattern("", "empty pattern");
    assert!(matches!(err.kind, ErrorKind::InvalidPattern { .. }));
    assert!(err.context.is_none());
}

#[test]
fn error_malformed_capture() {
    let err = Error::malformed_capture("MCMLXV", "a year");
    assert!(matches!(
        err.kind,
        ErrorKind::MalformedCapture { expected: "a year", .. }
    ));
    let msg = format!("{err}");
    assert!(msg.contains("MCMLXV"));
}

#[test]
fn error_capture_arity() {
    let err = Error::capture_arity(2, 0);
    let msg = format!("{err}");
    assert!(msg.contains('2'));
    assert!(msg.contains('0'));
}

#[test]
fn error_config() {
    let err = Error::config("unknown domain: songs");
    assert!(matches!(err.kind, ErrorKind::Config(_)));
    assert!(format!("{err}").contains("songs"));
}

// =============================================================================
// Error Display
// =============================================================================

#[test]
fn error_display_kinds() {
    let cases = [
        (
            Error::new(ErrorKind::SerializationError("bad marker".into())),
            "serialization error: bad marker",
        ),
        (
            Error::new(ErrorKind::IoError("disk full".into())),
            "I/O error: disk full",
        ),
        (Error::internal("oops"), "internal error: oops"),
    ];
    for (err, expected) in cases {
        assert_eq!(format!("{err}"), expected);
    }
}

#[test]
fn error_implements_std_error() {
    let err: Box<dyn std::error::Error> = Box::new(Error::internal("boxed"));
    assert!(err.to_string().contains("boxed"));
}

// =============================================================================
// Error Context
// =============================================================================

#[test]
fn context_query_only() {
    let ctx = ErrorContext::new().with_query("when was Dune released");
    assert_eq!(format!("{ctx}"), "in query \"when was Dune released\"");
}

#[test]
fn context_source_only() {
    let ctx = ErrorContext::new().with_source("batch.txt", 12);
    assert_eq!(format!("{ctx}"), "at batch.txt:12");
}

#[test]
fn context_does_not_change_message() {
    let err = Error::capture_arity(1, 2).with_context(ErrorContext::new().with_query("q"));
    assert_eq!(format!("{err}"), "capture arity mismatch: expected 1, got 2");
}
