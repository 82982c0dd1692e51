//! Integration tests for Catalog
//!
//! Tests ordering, persistence, and iteration.

use folio_storage::{Book, Catalog, Record};

fn sample() -> Catalog<Book> {
    Catalog::new(vec![
        Book::new("Dune", "Frank Herbert", "science fiction", 1965),
        Book::new("Emma", "Jane Austen", "romance", 1815),
        Book::new("Dracula", "Bram Stoker", "horror", 1897),
    ])
}

// =============================================================================
// Ordering
// =============================================================================

#[test]
fn iteration_follows_insertion_order() {
    let catalog = sample();
    let titles: Vec<_> = catalog.iter().map(Record::title).collect();
    assert_eq!(titles, ["Dune", "Emma", "Dracula"]);
}

#[test]
fn get_by_position() {
    let catalog = sample();
    assert_eq!(catalog.get(1).map(Record::title), Some("Emma"));
    assert!(catalog.get(3).is_none());
}

#[test]
fn for_loop_over_reference() {
    let catalog = sample();
    let mut years = Vec::new();
    for book in &catalog {
        years.push(book.year());
    }
    assert_eq!(years, [1965, 1815, 1897]);
}

// =============================================================================
// Construction
// =============================================================================

#[test]
fn empty_catalog() {
    let catalog = Catalog::<Book>::empty();
    assert!(catalog.is_empty());
    assert_eq!(catalog.len(), 0);
    assert_eq!(catalog, Catalog::default());
}

#[test]
fn collect_into_catalog() {
    let catalog: Catalog<Book> = sample().iter().filter(|b| b.year() > 1850).cloned().collect();
    assert_eq!(catalog.len(), 2);
}

// =============================================================================
// Persistence
// =============================================================================

#[test]
fn clones_are_equal_and_independent_of_source() {
    let original = sample();
    let copy = original.clone();
    drop(original);
    assert_eq!(copy.len(), 3);
    assert_eq!(copy.get(0).map(Record::title), Some("Dune"));
}
