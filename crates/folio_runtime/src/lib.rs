//! REPL, CLI, and catalog serialization for Folio.
//!
//! This crate provides:
//! - [`Repl`] - Interactive read-eval-print loop
//! - [`Session`] - One dispatcher over the configured catalog
//! - [`SessionConfig`] - Domain, catalog source, and prompt settings
//! - Catalog serialization and deserialization

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod config;
pub mod editor;
pub mod highlight;
pub mod logging;
pub mod repl;
pub mod serialize;
pub mod session;

pub use config::{Domain, SessionConfig};
pub use logging::init_tracing;
pub use repl::Repl;
pub use serialize::CatalogFile;
pub use session::Session;
