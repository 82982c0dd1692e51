//! Session state for the REPL.
//!
//! A session owns one dispatcher: the standard grammar for its domain bound
//! to a catalog that is fixed for the session's lifetime.

use folio_foundation::{ErrorContext, Result};
use folio_parser::stdlib::{book_registry, movie_registry};
use folio_parser::{Dispatcher, Response};
use folio_storage::{Book, Movie, data};

use crate::config::{Domain, SessionConfig};
use crate::serialize::{self, CatalogFile};

/// The dispatcher for the active domain.
#[derive(Debug)]
enum Engine {
    Books(Dispatcher<Book>),
    Movies(Dispatcher<Movie>),
}

/// Session state for an interactive or batch session.
#[derive(Debug)]
pub struct Session {
    engine: Engine,
    /// Number of queries answered so far.
    queries: usize,
}

impl Session {
    /// Creates a session over the bundled catalog for `domain`.
    ///
    /// # Errors
    ///
    /// Returns an error if the standard grammar fails to compile.
    pub fn new(domain: Domain) -> Result<Self> {
        let catalog = match domain {
            Domain::Books => CatalogFile::Books(data::books()),
            Domain::Movies => CatalogFile::Movies(data::movies()),
        };
        Self::with_catalog(catalog)
    }

    /// Creates a session over the given catalog.
    ///
    /// # Errors
    ///
    /// Returns an error if the standard grammar fails to compile.
    pub fn with_catalog(catalog: CatalogFile) -> Result<Self> {
        let engine = match catalog {
            CatalogFile::Books(catalog) => {
                Engine::Books(Dispatcher::new(book_registry()?, catalog))
            }
            CatalogFile::Movies(catalog) => {
                Engine::Movies(Dispatcher::new(movie_registry()?, catalog))
            }
        };
        Ok(Self { engine, queries: 0 })
    }

    /// Creates a session as described by `config`.
    ///
    /// A configured catalog file takes precedence over the configured domain.
    ///
    /// # Errors
    ///
    /// Returns an error if the catalog file cannot be loaded.
    pub fn from_config(config: &SessionConfig) -> Result<Self> {
        match &config.catalog_path {
            Some(path) => {
                let catalog = serialize::load_from_file(path)?;
                tracing::info!(
                    path = %path.display(),
                    domain = %catalog.domain(),
                    records = catalog.len(),
                    "using catalog file"
                );
                Self::with_catalog(catalog)
            }
            None => Self::new(config.domain),
        }
    }

    /// The session's domain.
    #[must_use]
    pub const fn domain(&self) -> Domain {
        match self.engine {
            Engine::Books(_) => Domain::Books,
            Engine::Movies(_) => Domain::Movies,
        }
    }

    /// Number of records in the session's catalog.
    #[must_use]
    pub fn catalog_len(&self) -> usize {
        match &self.engine {
            Engine::Books(d) => d.catalog().len(),
            Engine::Movies(d) => d.catalog().len(),
        }
    }

    /// A copy of the session's catalog, ready to be saved.
    #[must_use]
    pub fn catalog_file(&self) -> CatalogFile {
        match &self.engine {
            Engine::Books(d) => CatalogFile::Books(d.catalog().clone()),
            Engine::Movies(d) => CatalogFile::Movies(d.catalog().clone()),
        }
    }

    /// Every literal word in the session's grammar.
    #[must_use]
    pub fn vocabulary(&self) -> Vec<String> {
        match &self.engine {
            Engine::Books(d) => d.registry().vocabulary(),
            Engine::Movies(d) => d.registry().vocabulary(),
        }
    }

    /// The number of queries answered so far.
    #[must_use]
    pub const fn query_count(&self) -> usize {
        self.queries
    }

    /// Answers one raw query.
    ///
    /// # Errors
    ///
    /// Returns the handler's error, with the query attached as context, if
    /// the matched handler fails.
    pub fn ask(&mut self, query: &str) -> Result<Response> {
        self.queries += 1;
        let response = match &self.engine {
            Engine::Books(d) => d.ask(query),
            Engine::Movies(d) => d.ask(query),
        };
        response.map_err(|e| e.with_context(ErrorContext::new().with_query(query.trim())))
    }
}
