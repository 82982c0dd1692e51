//! Registry tests.
//!
//! Tests for building grammars and the order they keep.

use folio_foundation::{Answer, ErrorKind, Result};
use folio_parser::registry::quit;
use folio_parser::stdlib::{QUIT_COMMAND, book_registry, movie_registry};
use folio_parser::{Pattern, PatternRegistry, RegistryEntry, Reply};
use folio_storage::{Book, Catalog};

fn nothing(_: &[String], _: &Catalog<Book>) -> Result<Reply> {
    Ok(Reply::Found(Vec::new()))
}

fn patterns(registry: &PatternRegistry<Book>) -> Vec<String> {
    registry.iter().map(|e| e.pattern.to_string()).collect()
}

#[test]
fn registration_order_is_kept() {
    let mut registry = PatternRegistry::<Book>::new();
    registry
        .register("who wrote %", nothing)
        .unwrap()
        .register("who _ Dune", nothing)
        .unwrap();
    registry.push(RegistryEntry::new(Pattern::parse("bye").unwrap(), quit));

    assert_eq!(patterns(&registry), ["who wrote %", "who _ Dune", "bye"]);
}

#[test]
fn invalid_pattern_is_rejected_at_construction() {
    let err = PatternRegistry::<Book>::new()
        .with("who wrote % _", nothing)
        .unwrap_err();
    assert!(matches!(err.kind, ErrorKind::InvalidPattern { .. }));
}

#[test]
fn failed_registration_leaves_registry_unchanged() {
    let mut registry = PatternRegistry::<Book>::new();
    registry.register("who wrote %", nothing).unwrap();
    assert!(registry.register("", nothing).is_err());
    assert_eq!(registry.len(), 1);
}

#[test]
fn handlers_are_callable_from_entries() {
    let registry = PatternRegistry::<Book>::new().with("bye", quit).unwrap();
    let entry = &registry.entries()[0];
    let reply = (entry.handler)(&[], &Catalog::empty()).unwrap();
    assert_eq!(reply, Reply::Quit);
}

#[test]
fn reply_from_answers() {
    let reply = Reply::from(vec![Answer::from("Dune")]);
    assert_eq!(reply, Reply::Found(vec![Answer::Text("Dune".into())]));
}

#[test]
fn vocabulary_is_sorted_and_unique() {
    let registry = PatternRegistry::<Book>::new()
        .with("who wrote %", nothing)
        .unwrap()
        .with("who was the author of %", nothing)
        .unwrap();
    assert_eq!(
        registry.vocabulary(),
        ["author", "of", "the", "was", "who", "wrote"]
    );
}

// =============================================================================
// Standard grammars
// =============================================================================

#[test]
fn book_grammar_order() {
    let registry = book_registry().unwrap();
    assert_eq!(
        patterns(&registry),
        [
            "what books were written in _",
            "what books were written between _ and _",
            "what books were written before _",
            "what books were written after _",
            "who wrote %",
            "who was the author of %",
            "what books were written by %",
            "when was % released",
            "what genre is %",
            "what % books are there",
            QUIT_COMMAND,
        ]
    );
}

#[test]
fn movie_grammar_order() {
    let registry = movie_registry().unwrap();
    let patterns: Vec<_> = registry.iter().map(|e| e.pattern.to_string()).collect();
    assert_eq!(
        patterns,
        [
            "what movies were made in _",
            "what movies were made between _ and _",
            "what movies were made before _",
            "what movies were made after _",
            "who directed %",
            "who was the director of %",
            "what movies were directed by %",
            "who acted in %",
            "when was % made",
            "in what movies did % appear",
            QUIT_COMMAND,
        ]
    );
}
