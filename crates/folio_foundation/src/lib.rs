//! Core error and answer types for Folio.
//!
//! This crate provides:
//! - [`Answer`] - A single display value produced by a query
//! - [`Error`] - Rich error types with context

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod answer;
pub mod error;

pub use answer::{Answer, NO_ANSWERS, UNRECOGNIZED};
pub use error::{Error, ErrorContext, ErrorKind, Result};
