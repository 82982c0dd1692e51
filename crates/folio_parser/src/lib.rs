//! Wildcard pattern matching and pattern-action dispatch for Folio.
//!
//! This crate turns a question like "who wrote Dune" into an answer list by
//! matching it against an ordered grammar of wildcard patterns.
//!
//! # Architecture
//!
//! ```text
//! "what books were written between 1960 and 1970"
//!          │
//!          ▼
//! ┌─────────────────┐
//! │   TOKENIZER     │  → ["what", "books", ..., "1960", "and", "1970"]
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ DISPATCHER      │  tries each registry entry in order
//! │  └─ MATCHER     │  → Matched(["1960", "1970"]) on the second entry
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ QUERY HANDLER   │  → linear scan over the catalog
//! └─────────────────┘
//!          │
//!          ▼
//!   ["Dune", "The Left Hand of Darkness", "A Wizard of Earthsea"]
//! ```
//!
//! # Modules
//!
//! - [`tokenizer`] - Convert raw input to a token list
//! - [`pattern`] - Pattern tokens and pattern compilation
//! - [`matcher`] - The two-cursor wildcard matcher
//! - [`registry`] - Ordered pattern-action grammars
//! - [`dispatch`] - First-match-wins dispatch and answer normalization
//! - [`query`] - Query handlers over a record catalog
//! - [`stdlib`] - Standard book and movie grammars

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod dispatch;
pub mod matcher;
pub mod pattern;
pub mod query;
pub mod registry;
pub mod stdlib;
pub mod tokenizer;

// Re-export main types for convenience
pub use dispatch::{Dispatcher, Response};
pub use matcher::{MatchOutcome, match_pattern};
pub use pattern::{Pattern, PatternToken};
pub use registry::{Handler, PatternRegistry, RegistryEntry, Reply};
pub use tokenizer::QueryTokenizer;
