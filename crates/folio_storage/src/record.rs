//! Fixed-schema record kinds.
//!
//! Query handlers only see records through the [`Record`] trait, so the same
//! handler scans books and movies alike.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Field accessors every record kind provides.
pub trait Record {
    /// The record's title.
    fn title(&self) -> &str;

    /// The person credited with the work (author or director).
    fn creator(&self) -> &str;

    /// Year of publication or release.
    fn year(&self) -> i32;

    /// Associated names, such as cast members.
    fn names(&self) -> &[String] {
        &[]
    }
}

/// A book record.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Book {
    /// Title
    pub title: String,
    /// Author
    pub author: String,
    /// Genre
    pub genre: String,
    /// Year of publication
    pub year: i32,
}

impl Book {
    /// Creates a new book record.
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        genre: impl Into<String>,
        year: i32,
    ) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            genre: genre.into(),
            year,
        }
    }

    /// The book's genre.
    #[must_use]
    pub fn genre(&self) -> &str {
        &self.genre
    }
}

impl Record for Book {
    fn title(&self) -> &str {
        &self.title
    }

    fn creator(&self) -> &str {
        &self.author
    }

    fn year(&self) -> i32 {
        self.year
    }
}

/// A movie record.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Movie {
    /// Title
    pub title: String,
    /// Director
    pub director: String,
    /// Year of release
    pub year: i32,
    /// Cast members, in billing order
    pub cast: Vec<String>,
}

impl Movie {
    /// Creates a new movie record.
    #[must_use]
    pub fn new<I, S>(
        title: impl Into<String>,
        director: impl Into<String>,
        year: i32,
        cast: I,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            title: title.into(),
            director: director.into(),
            year,
            cast: cast.into_iter().map(Into::into).collect(),
        }
    }
}

impl Record for Movie {
    fn title(&self) -> &str {
        &self.title
    }

    fn creator(&self) -> &str {
        &self.director
    }

    fn year(&self) -> i32 {
        self.year
    }

    fn names(&self) -> &[String] {
        &self.cast
    }
}
