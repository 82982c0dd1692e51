//! Integration tests for the folio_parser crate.
//!
//! Tests for the question-answering pipeline:
//! - Tokenization
//! - Pattern compilation and matching
//! - Registries and first-match-wins dispatch
//! - The standard book and movie grammars over the bundled catalogs

mod grammar_tests;
mod registry_tests;
