//! Integration tests for Layer 0: Foundation
//!
//! Tests for core types: Answer and Error.

mod errors;
