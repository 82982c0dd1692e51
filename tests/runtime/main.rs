//! Integration tests for Layer 3: Runtime
//!
//! Tests for sessions, catalog files, and the REPL driven by a scripted
//! editor.

mod serialize_tests;
mod session_tests;
