//! Integration tests for Layer 1: Storage
//!
//! Tests for record kinds, catalogs, and the bundled data.

mod catalog;
mod records;
