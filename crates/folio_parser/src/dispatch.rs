//! First-match-wins dispatch.
//!
//! The dispatcher owns a grammar and the catalog its handlers scan. It runs
//! the matcher against each entry in registration order, calls the handler
//! of the first entry that matches, and normalizes the handler's reply into
//! a [`Response`].

use folio_foundation::{Answer, Result};
use folio_storage::Catalog;
use tracing::{debug, trace};

use crate::matcher::{MatchOutcome, match_pattern};
use crate::registry::{PatternRegistry, Reply};
use crate::tokenizer::QueryTokenizer;

/// Result of dispatching one query.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Response {
    /// Answers to show; never empty
    Answers(Vec<Answer>),
    /// The sentinel command was given; the caller should end the session
    Quit,
}

impl Response {
    /// Returns true for the termination signal.
    #[must_use]
    pub const fn is_quit(&self) -> bool {
        matches!(self, Self::Quit)
    }

    /// The answers rendered for display, one string per answer.
    ///
    /// Empty for [`Response::Quit`].
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        match self {
            Self::Answers(answers) => answers.iter().map(ToString::to_string).collect(),
            Self::Quit => Vec::new(),
        }
    }
}

/// Dispatches queries against a grammar and a catalog.
#[derive(Clone, Debug)]
pub struct Dispatcher<R: Clone> {
    registry: PatternRegistry<R>,
    catalog: Catalog<R>,
}

impl<R: Clone> Dispatcher<R> {
    /// Creates a dispatcher over `catalog` using `registry`.
    #[must_use]
    pub fn new(registry: PatternRegistry<R>, catalog: Catalog<R>) -> Self {
        Self { registry, catalog }
    }

    /// The grammar.
    #[must_use]
    pub const fn registry(&self) -> &PatternRegistry<R> {
        &self.registry
    }

    /// The catalog handlers scan.
    #[must_use]
    pub const fn catalog(&self) -> &Catalog<R> {
        &self.catalog
    }

    /// Tokenizes and dispatches a raw query.
    ///
    /// # Errors
    ///
    /// Returns the handler's error if a matched handler fails.
    pub fn ask(&self, query: &str) -> Result<Response> {
        self.dispatch(&QueryTokenizer::tokenize(query))
    }

    /// Dispatches an already tokenized query.
    ///
    /// - The first matching entry's handler runs; later entries are ignored.
    /// - An empty reply becomes the single answer [`Answer::NoAnswers`].
    /// - If nothing matches the result is the single answer
    ///   [`Answer::Unrecognized`].
    ///
    /// # Errors
    ///
    /// Returns the handler's error if a matched handler fails (for example a
    /// non-numeric year). The error concerns this query only.
    #[tracing::instrument(level = "debug", skip_all, fields(tokens = source.len()))]
    pub fn dispatch<S: AsRef<str>>(&self, source: &[S]) -> Result<Response> {
        for entry in &self.registry {
            let MatchOutcome::Matched(captures) = match_pattern(&entry.pattern, source) else {
                trace!(pattern = %entry.pattern, "no match");
                continue;
            };

            debug!(pattern = %entry.pattern, ?captures, "pattern matched");

            return match (entry.handler)(&captures, &self.catalog)? {
                Reply::Quit => Ok(Response::Quit),
                Reply::Found(answers) if answers.is_empty() => {
                    Ok(Response::Answers(vec![Answer::NoAnswers]))
                }
                Reply::Found(answers) => {
                    debug!(count = answers.len(), "handler found answers");
                    Ok(Response::Answers(answers))
                }
            };
        }

        debug!("no pattern matched");
        Ok(Response::Answers(vec![Answer::Unrecognized]))
    }
}
