//! Read-only record catalogs for Folio.
//!
//! This crate provides:
//! - [`Record`] - Field accessors shared by every record kind
//! - [`Book`] and [`Movie`] - The two fixed-schema record kinds
//! - [`Catalog`] - An ordered, immutable record collection
//! - [`data`] - The catalogs bundled with the binary

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod catalog;
pub mod data;
pub mod record;

pub use catalog::Catalog;
pub use record::{Book, Movie, Record};
