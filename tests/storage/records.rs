//! Integration tests for record kinds

use folio_storage::{Book, Movie, Record};

fn creators<R: Record>(records: &[R]) -> Vec<&str> {
    records.iter().map(Record::creator).collect()
}

#[test]
fn creator_is_author_for_books() {
    let books = [Book::new("Emma", "Jane Austen", "romance", 1815)];
    assert_eq!(creators(&books), ["Jane Austen"]);
}

#[test]
fn creator_is_director_for_movies() {
    let movies = [Movie::new("Psycho", "Alfred Hitchcock", 1960, ["Janet Leigh"])];
    assert_eq!(creators(&movies), ["Alfred Hitchcock"]);
}

#[test]
fn books_have_no_names() {
    let book = Book::new("Emma", "Jane Austen", "romance", 1815);
    assert!(book.names().is_empty());
}

#[test]
fn cast_keeps_billing_order() {
    let movie = Movie::new("Fargo", "Joel Coen", 1996, ["Frances McDormand", "William H. Macy"]);
    assert_eq!(movie.names(), ["Frances McDormand", "William H. Macy"]);
}

#[test]
fn movie_with_empty_cast() {
    let movie = Movie::new("Untitled", "Nobody", 2000, Vec::<String>::new());
    assert!(movie.names().is_empty());
}
