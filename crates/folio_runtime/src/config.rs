//! Session configuration.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use folio_foundation::Error;

/// Which kind of record a session answers questions about.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Domain {
    /// Books, asked about with the book grammar
    #[default]
    Books,
    /// Movies, asked about with the movie grammar
    Movies,
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Books => f.write_str("books"),
            Self::Movies => f.write_str("movies"),
        }
    }
}

impl FromStr for Domain {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "books" | "book" => Ok(Self::Books),
            "movies" | "movie" => Ok(Self::Movies),
            other => Err(Error::config(format!(
                "unknown domain: {other} (expected books or movies)"
            ))),
        }
    }
}

/// Configuration for a session and the REPL around it.
#[derive(Clone, Debug)]
pub struct SessionConfig {
    /// Record domain used when no catalog file is given.
    pub domain: Domain,

    /// Catalog file to load instead of the bundled catalog.
    ///
    /// The file decides the domain.
    pub catalog_path: Option<PathBuf>,

    /// Primary prompt.
    pub prompt: String,

    /// Whether to show the welcome banner.
    pub show_banner: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            domain: Domain::Books,
            catalog_path: None,
            prompt: "? ".to_string(),
            show_banner: true,
        }
    }
}

impl SessionConfig {
    /// Creates the default configuration (bundled books).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method to set the domain.
    #[must_use]
    pub fn with_domain(mut self, domain: Domain) -> Self {
        self.domain = domain;
        self
    }

    /// Builder method to load the catalog from a file.
    #[must_use]
    pub fn with_catalog_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.catalog_path = Some(path.into());
        self
    }

    /// Builder method to set the prompt.
    #[must_use]
    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    /// Builder method to show or hide the banner.
    #[must_use]
    pub fn with_banner(mut self, show: bool) -> Self {
        self.show_banner = show;
        self
    }
}
