//! Pattern-action registry.
//!
//! A registry is the grammar of supported questions: an ordered list of
//! patterns, each bound to the handler that answers it. Order matters. The
//! dispatcher stops at the first pattern that matches, so a specific pattern
//! must be registered before a general one that could also match its input.

use std::collections::BTreeSet;
use std::fmt;

use folio_foundation::{Answer, Result};
use folio_storage::Catalog;

use crate::pattern::Pattern;

/// What a handler produced.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Reply {
    /// Values found by the handler's scan, in catalog order
    Found(Vec<Answer>),
    /// The session should end
    Quit,
}

impl From<Vec<Answer>> for Reply {
    fn from(answers: Vec<Answer>) -> Self {
        Self::Found(answers)
    }
}

/// A handler: captures and catalog in, reply out.
pub type Handler<R> = fn(&[String], &Catalog<R>) -> Result<Reply>;

/// The standard sentinel handler. Ignores its arguments and ends the session.
///
/// # Errors
///
/// Never fails.
pub fn quit<R: Clone>(_captures: &[String], _catalog: &Catalog<R>) -> Result<Reply> {
    Ok(Reply::Quit)
}

/// A pattern bound to its handler.
#[derive(Clone)]
pub struct RegistryEntry<R: Clone> {
    /// The pattern to match
    pub pattern: Pattern,
    /// The handler to run on a match
    pub handler: Handler<R>,
}

impl<R: Clone> RegistryEntry<R> {
    /// Creates a new entry.
    #[must_use]
    pub fn new(pattern: Pattern, handler: Handler<R>) -> Self {
        Self { pattern, handler }
    }
}

impl<R: Clone> fmt::Debug for RegistryEntry<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegistryEntry")
            .field("pattern", &self.pattern.to_string())
            .finish_non_exhaustive()
    }
}

/// An ordered list of registry entries.
#[derive(Clone, Debug)]
pub struct PatternRegistry<R: Clone> {
    entries: Vec<RegistryEntry<R>>,
}

impl<R: Clone> PatternRegistry<R> {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Compiles `pattern` and appends it with its handler.
    ///
    /// # Errors
    ///
    /// Returns `InvalidPattern` if the pattern does not compile.
    pub fn register(&mut self, pattern: &str, handler: Handler<R>) -> Result<&mut Self> {
        let pattern = Pattern::parse(pattern)?;
        self.push(RegistryEntry::new(pattern, handler));
        Ok(self)
    }

    /// Builder form of [`PatternRegistry::register`].
    ///
    /// # Errors
    ///
    /// Returns `InvalidPattern` if the pattern does not compile.
    pub fn with(mut self, pattern: &str, handler: Handler<R>) -> Result<Self> {
        self.register(pattern, handler)?;
        Ok(self)
    }

    /// Appends an already compiled entry.
    pub fn push(&mut self, entry: RegistryEntry<R>) {
        self.entries.push(entry);
    }

    /// Entries in registration order.
    #[must_use]
    pub fn entries(&self) -> &[RegistryEntry<R>] {
        &self.entries
    }

    /// Iterates entries in registration order.
    pub fn iter(&self) -> std::slice::Iter<'_, RegistryEntry<R>> {
        self.entries.iter()
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no patterns are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Every literal word used by any pattern, sorted and de-duplicated.
    #[must_use]
    pub fn vocabulary(&self) -> Vec<String> {
        let words: BTreeSet<&str> = self
            .entries
            .iter()
            .flat_map(|entry| entry.pattern.literals())
            .collect();
        words.into_iter().map(String::from).collect()
    }
}

impl<R: Clone> Default for PatternRegistry<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, R: Clone> IntoIterator for &'a PatternRegistry<R> {
    type Item = &'a RegistryEntry<R>;
    type IntoIter = std::slice::Iter<'a, RegistryEntry<R>>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
