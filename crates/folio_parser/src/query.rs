//! Query handlers.
//!
//! Each handler makes one pass over the catalog and returns matching values
//! in catalog order, without sorting or de-duplication. The number and
//! meaning of captures is fixed by the pattern a handler is registered with;
//! a mismatch is a grammar bug and is reported as an error rather than
//! papered over.

use folio_foundation::{Answer, Error, Result};
use folio_storage::{Book, Catalog, Record};

/// Checks that a handler received exactly `expected` captures.
fn expect_captures(captures: &[String], expected: usize) -> Result<()> {
    if captures.len() == expected {
        Ok(())
    } else {
        Err(Error::capture_arity(expected, captures.len()))
    }
}

/// Parses a captured year.
fn parse_year(capture: &str) -> Result<i32> {
    capture
        .parse()
        .map_err(|_| Error::malformed_capture(capture, "a year"))
}

/// Titles of records matching `keep`.
fn titles_where<R, F>(catalog: &Catalog<R>, keep: F) -> Vec<Answer>
where
    R: Record + Clone,
    F: Fn(&R) -> bool,
{
    catalog
        .iter()
        .filter(|&r| keep(r))
        .map(|r| Answer::from(r.title()))
        .collect()
}

/// Titles released in the captured year.
///
/// # Errors
///
/// Fails if the capture is not a year.
pub fn title_by_year<R: Record + Clone>(
    captures: &[String],
    catalog: &Catalog<R>,
) -> Result<Vec<Answer>> {
    expect_captures(captures, 1)?;
    let year = parse_year(&captures[0])?;
    Ok(titles_where(catalog, |r| r.year() == year))
}

/// Titles released between the two captured years, inclusive.
///
/// # Errors
///
/// Fails if either capture is not a year.
pub fn title_by_year_range<R: Record + Clone>(
    captures: &[String],
    catalog: &Catalog<R>,
) -> Result<Vec<Answer>> {
    expect_captures(captures, 2)?;
    let start = parse_year(&captures[0])?;
    let end = parse_year(&captures[1])?;
    Ok(titles_where(catalog, |r| (start..=end).contains(&r.year())))
}

/// Titles released strictly before the captured year.
///
/// # Errors
///
/// Fails if the capture is not a year.
pub fn title_before_year<R: Record + Clone>(
    captures: &[String],
    catalog: &Catalog<R>,
) -> Result<Vec<Answer>> {
    expect_captures(captures, 1)?;
    let year = parse_year(&captures[0])?;
    Ok(titles_where(catalog, |r| r.year() < year))
}

/// Titles released strictly after the captured year.
///
/// # Errors
///
/// Fails if the capture is not a year.
pub fn title_after_year<R: Record + Clone>(
    captures: &[String],
    catalog: &Catalog<R>,
) -> Result<Vec<Answer>> {
    expect_captures(captures, 1)?;
    let year = parse_year(&captures[0])?;
    Ok(titles_where(catalog, |r| r.year() > year))
}

/// Author or director of the captured title.
///
/// # Errors
///
/// Fails only on a capture arity mismatch.
pub fn creator_by_title<R: Record + Clone>(
    captures: &[String],
    catalog: &Catalog<R>,
) -> Result<Vec<Answer>> {
    expect_captures(captures, 1)?;
    let title = captures[0].as_str();
    Ok(catalog
        .iter()
        .filter(|r| r.title() == title)
        .map(|r| Answer::from(r.creator()))
        .collect())
}

/// Titles by the captured author or director.
///
/// # Errors
///
/// Fails only on a capture arity mismatch.
pub fn title_by_creator<R: Record + Clone>(
    captures: &[String],
    catalog: &Catalog<R>,
) -> Result<Vec<Answer>> {
    expect_captures(captures, 1)?;
    let creator = captures[0].as_str();
    Ok(titles_where(catalog, |r| r.creator() == creator))
}

/// Year of the captured title.
///
/// # Errors
///
/// Fails only on a capture arity mismatch.
pub fn year_by_title<R: Record + Clone>(
    captures: &[String],
    catalog: &Catalog<R>,
) -> Result<Vec<Answer>> {
    expect_captures(captures, 1)?;
    let title = captures[0].as_str();
    Ok(catalog
        .iter()
        .filter(|r| r.title() == title)
        .map(|r| Answer::Year(r.year()))
        .collect())
}

/// Every associated name (cast member) of the captured title.
///
/// # Errors
///
/// Fails only on a capture arity mismatch.
pub fn names_by_title<R: Record + Clone>(
    captures: &[String],
    catalog: &Catalog<R>,
) -> Result<Vec<Answer>> {
    expect_captures(captures, 1)?;
    let title = captures[0].as_str();
    Ok(catalog
        .iter()
        .filter(|r| r.title() == title)
        .flat_map(|r| r.names().iter().map(|name| Answer::from(name.as_str())))
        .collect())
}

/// Titles whose associated names include the captured name.
///
/// # Errors
///
/// Fails only on a capture arity mismatch.
pub fn title_by_name<R: Record + Clone>(
    captures: &[String],
    catalog: &Catalog<R>,
) -> Result<Vec<Answer>> {
    expect_captures(captures, 1)?;
    let name = captures[0].as_str();
    Ok(titles_where(catalog, |r| r.names().iter().any(|n| n == name)))
}

/// Genre of the captured book title.
///
/// # Errors
///
/// Fails only on a capture arity mismatch.
pub fn genre_by_title(captures: &[String], catalog: &Catalog<Book>) -> Result<Vec<Answer>> {
    expect_captures(captures, 1)?;
    let title = captures[0].as_str();
    Ok(catalog
        .iter()
        .filter(|b| b.title() == title)
        .map(|b| Answer::from(b.genre()))
        .collect())
}

/// Titles of books in the captured genre.
///
/// # Errors
///
/// Fails only on a capture arity mismatch.
pub fn title_by_genre(captures: &[String], catalog: &Catalog<Book>) -> Result<Vec<Answer>> {
    expect_captures(captures, 1)?;
    let genre = captures[0].as_str();
    Ok(titles_where(catalog, |b| b.genre() == genre))
}
