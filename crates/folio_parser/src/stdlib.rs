//! Standard grammars.
//!
//! The question shapes Folio understands out of the box, one grammar per
//! record kind. Registration order is the match order.

use folio_foundation::Result;
use folio_storage::{Book, Movie};

use crate::query;
use crate::registry::{PatternRegistry, Reply, quit};

/// The sentinel command that ends a session.
pub const QUIT_COMMAND: &str = "bye";

/// The standard grammar for book catalogs.
///
/// # Errors
///
/// Returns an error only if a built-in pattern fails to compile.
pub fn book_registry() -> Result<PatternRegistry<Book>> {
    PatternRegistry::<Book>::new()
        .with("what books were written in _", |c, r| {
            query::title_by_year(c, r).map(Reply::Found)
        })?
        .with("what books were written between _ and _", |c, r| {
            query::title_by_year_range(c, r).map(Reply::Found)
        })?
        .with("what books were written before _", |c, r| {
            query::title_before_year(c, r).map(Reply::Found)
        })?
        .with("what books were written after _", |c, r| {
            query::title_after_year(c, r).map(Reply::Found)
        })?
        // Two ways to ask for the author of a book
        .with("who wrote %", |c, r| query::creator_by_title(c, r).map(Reply::Found))?
        .with("who was the author of %", |c, r| {
            query::creator_by_title(c, r).map(Reply::Found)
        })?
        .with("what books were written by %", |c, r| {
            query::title_by_creator(c, r).map(Reply::Found)
        })?
        .with("when was % released", |c, r| query::year_by_title(c, r).map(Reply::Found))?
        .with("what genre is %", |c, r| query::genre_by_title(c, r).map(Reply::Found))?
        .with("what % books are there", |c, r| {
            query::title_by_genre(c, r).map(Reply::Found)
        })?
        .with(QUIT_COMMAND, quit)
}

/// The standard grammar for movie catalogs.
///
/// # Errors
///
/// Returns an error only if a built-in pattern fails to compile.
pub fn movie_registry() -> Result<PatternRegistry<Movie>> {
    PatternRegistry::<Movie>::new()
        .with("what movies were made in _", |c, r| {
            query::title_by_year(c, r).map(Reply::Found)
        })?
        .with("what movies were made between _ and _", |c, r| {
            query::title_by_year_range(c, r).map(Reply::Found)
        })?
        .with("what movies were made before _", |c, r| {
            query::title_before_year(c, r).map(Reply::Found)
        })?
        .with("what movies were made after _", |c, r| {
            query::title_after_year(c, r).map(Reply::Found)
        })?
        // Two ways to ask for the director of a movie
        .with("who directed %", |c, r| query::creator_by_title(c, r).map(Reply::Found))?
        .with("who was the director of %", |c, r| {
            query::creator_by_title(c, r).map(Reply::Found)
        })?
        .with("what movies were directed by %", |c, r| {
            query::title_by_creator(c, r).map(Reply::Found)
        })?
        .with("who acted in %", |c, r| query::names_by_title(c, r).map(Reply::Found))?
        .with("when was % made", |c, r| query::year_by_title(c, r).map(Reply::Found))?
        .with("in what movies did % appear", |c, r| {
            query::title_by_name(c, r).map(Reply::Found)
        })?
        .with(QUIT_COMMAND, quit)
}
