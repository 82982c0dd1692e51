//! Standard grammar tests.
//!
//! End-to-end questions against the bundled catalogs.

use folio_foundation::{Answer, ErrorKind};
use folio_parser::stdlib::{book_registry, movie_registry};
use folio_parser::{Dispatcher, Response};
use folio_storage::{Book, Movie, data};

fn books() -> Dispatcher<Book> {
    Dispatcher::new(book_registry().unwrap(), data::books())
}

fn movies() -> Dispatcher<Movie> {
    Dispatcher::new(movie_registry().unwrap(), data::movies())
}

fn ask_books(query: &str) -> Vec<String> {
    books().ask(query).unwrap().lines()
}

fn ask_movies(query: &str) -> Vec<String> {
    movies().ask(query).unwrap().lines()
}

// =============================================================================
// Books
// =============================================================================

#[test]
fn books_by_year() {
    assert_eq!(ask_books("what books were written in 1965"), ["Dune"]);
}

#[test]
fn books_by_year_range() {
    assert_eq!(
        ask_books("what books were written between 1960 and 1970"),
        ["Dune", "The Left Hand of Darkness", "A Wizard of Earthsea"]
    );
}

#[test]
fn books_before_and_after() {
    assert_eq!(
        ask_books("what books were written before 1900"),
        ["Pride and Prejudice", "Emma", "Frankenstein", "Dracula"]
    );
    assert_eq!(
        ask_books("what books were written after 2000"),
        ["The Name of the Wind"]
    );
}

#[test]
fn author_questions() {
    assert_eq!(ask_books("who wrote The Hobbit"), ["J. R. R. Tolkien"]);
    assert_eq!(ask_books("who was the author of Neuromancer?"), ["William Gibson"]);
}

#[test]
fn books_by_author() {
    assert_eq!(
        ask_books("what books were written by Ursula K. Le Guin"),
        ["The Left Hand of Darkness", "A Wizard of Earthsea", "The Dispossessed"]
    );
}

#[test]
fn release_year_is_a_year() {
    let response = books().ask("when was Dune released").unwrap();
    assert_eq!(response, Response::Answers(vec![Answer::Year(1965)]));
}

#[test]
fn genre_questions() {
    assert_eq!(ask_books("what genre is Snow Crash"), ["cyberpunk"]);
    assert_eq!(
        ask_books("what science fiction books are there"),
        [
            "Dune",
            "Children of Dune",
            "The Left Hand of Darkness",
            "The Dispossessed",
            "Parable of the Sower",
            "Hyperion",
        ]
    );
    assert_eq!(
        ask_books("what horror books are there"),
        ["Frankenstein", "Dracula"]
    );
}

#[test]
fn book_misses() {
    assert_eq!(ask_books("who wrote Moby Dick"), ["No answers"]);
    assert_eq!(ask_books("what books were written in 1066"), ["No answers"]);
    assert_eq!(ask_books("who directed Alien"), ["I don't understand"]);
    assert_eq!(ask_books("when was Dune made"), ["I don't understand"]);
}

#[test]
fn book_year_must_be_numeric() {
    let err = books().ask("what books were written in nineteen").unwrap_err();
    assert!(matches!(err.kind, ErrorKind::MalformedCapture { .. }));
}

#[test]
fn books_bye() {
    assert!(books().ask("bye").unwrap().is_quit());
}

// =============================================================================
// Movies
// =============================================================================

#[test]
fn movies_by_year() {
    assert_eq!(
        ask_movies("what movies were made in 1993"),
        ["Jurassic Park", "Schindler's List", "Groundhog Day"]
    );
}

#[test]
fn movies_by_year_range() {
    assert_eq!(
        ask_movies("what movies were made between 1970 and 1975"),
        ["The Godfather", "The Conversation", "Jaws"]
    );
}

#[test]
fn movies_before_and_after() {
    assert_eq!(ask_movies("what movies were made before 1950"), ["Casablanca"]);
    assert_eq!(
        ask_movies("what movies were made after 2000"),
        ["Spirited Away", "Amelie"]
    );
}

#[test]
fn director_questions() {
    assert_eq!(ask_movies("who directed Alien"), ["Ridley Scott"]);
    assert_eq!(
        ask_movies("who was the director of Pulp Fiction"),
        ["Quentin Tarantino"]
    );
    assert_eq!(
        ask_movies("what movies were directed by Steven Spielberg"),
        ["Jaws", "Raiders of the Lost Ark", "Jurassic Park", "Schindler's List"]
    );
}

#[test]
fn cast_questions() {
    assert_eq!(
        ask_movies("who acted in Alien"),
        ["Sigourney Weaver", "Tom Skerritt", "John Hurt"]
    );
    assert_eq!(
        ask_movies("in what movies did Harrison Ford appear"),
        [
            "The Conversation",
            "Blade Runner",
            "Star Wars",
            "Raiders of the Lost Ark",
        ]
    );
    assert_eq!(
        ask_movies("in what movies did Steve Buscemi appear?"),
        ["Fargo", "The Big Lebowski"]
    );
}

#[test]
fn made_year_is_a_year() {
    let response = movies().ask("when was Casablanca made").unwrap();
    assert_eq!(response, Response::Answers(vec![Answer::Year(1942)]));
}

#[test]
fn movie_misses() {
    assert_eq!(ask_movies("who directed Aliens"), ["No answers"]);
    assert_eq!(ask_movies("when was Alien released"), ["I don't understand"]);
    assert_eq!(ask_movies("what genre is Alien"), ["I don't understand"]);
}

#[test]
fn movies_bye() {
    assert!(movies().ask("bye").unwrap().is_quit());
}
