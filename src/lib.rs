//! Folio - Pattern-matching question answering over small catalogs
//!
//! This crate re-exports all layers of the Folio system for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 3: folio_runtime    — Session, REPL, CLI, catalog files
//! Layer 2: folio_parser     — Tokenizer, patterns, matcher, registry, dispatch
//! Layer 1: folio_storage    — Records, catalogs, bundled data
//! Layer 0: folio_foundation — Core types (Answer, Error)
//! ```

pub use folio_foundation as foundation;
pub use folio_parser as parser;
pub use folio_runtime as runtime;
pub use folio_storage as storage;
