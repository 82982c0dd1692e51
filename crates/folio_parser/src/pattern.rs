//! Query patterns.
//!
//! A pattern is written as whitespace-separated words, where `_` stands for
//! exactly one word and `%` for any run of words (possibly none):
//!
//! ```text
//! what books were written between _ and _
//! when was % released
//! ```

use std::fmt;

use folio_foundation::{Error, Result};

/// Written form of [`PatternToken::AnyWord`].
pub const ANY_WORD: &str = "_";

/// Written form of [`PatternToken::AnyPhrase`].
pub const ANY_PHRASE: &str = "%";

/// A single element of a pattern.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum PatternToken {
    /// A literal word that must appear exactly
    Word(String),
    /// Matches exactly one word and captures it
    AnyWord,
    /// Matches zero or more words and captures them joined by spaces
    AnyPhrase,
}

impl PatternToken {
    /// Returns true for `_` and `%`.
    #[must_use]
    pub const fn is_wildcard(&self) -> bool {
        matches!(self, Self::AnyWord | Self::AnyPhrase)
    }

    /// Returns the literal word, if this is one.
    #[must_use]
    pub fn as_word(&self) -> Option<&str> {
        match self {
            Self::Word(w) => Some(w),
            _ => None,
        }
    }

    fn from_word(word: &str) -> Self {
        match word {
            ANY_WORD => Self::AnyWord,
            ANY_PHRASE => Self::AnyPhrase,
            _ => Self::Word(word.to_string()),
        }
    }
}

impl fmt::Display for PatternToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Word(w) => f.write_str(w),
            Self::AnyWord => f.write_str(ANY_WORD),
            Self::AnyPhrase => f.write_str(ANY_PHRASE),
        }
    }
}

/// An immutable sequence of pattern tokens.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Pattern {
    tokens: Vec<PatternToken>,
}

impl Pattern {
    /// Creates a pattern from tokens without validating its shape.
    ///
    /// Prefer [`Pattern::parse`], which rejects shapes the matcher cannot
    /// delimit. The matcher stays safe on such patterns, it just never
    /// matches them.
    #[must_use]
    pub fn new(tokens: Vec<PatternToken>) -> Self {
        Self { tokens }
    }

    /// Compiles a pattern from its written form.
    ///
    /// # Errors
    ///
    /// Returns `InvalidPattern` if the pattern is empty, or if a `%` is
    /// followed by another wildcard with no literal word in between.
    pub fn parse(source: &str) -> Result<Self> {
        let tokens: Vec<PatternToken> = source
            .split_whitespace()
            .map(PatternToken::from_word)
            .collect();

        if tokens.is_empty() {
            return Err(Error::invalid_pattern(source, "pattern is empty"));
        }

        for pair in tokens.windows(2) {
            if pair[0] == PatternToken::AnyPhrase && pair[1].is_wildcard() {
                return Err(Error::invalid_pattern(
                    source,
                    format!("`%` must be followed by a literal word, found `{}`", pair[1]),
                ));
            }
        }

        Ok(Self { tokens })
    }

    /// The pattern's tokens in order.
    #[must_use]
    pub fn tokens(&self) -> &[PatternToken] {
        &self.tokens
    }

    /// Number of tokens.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Returns true if the pattern has no tokens.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Number of wildcards, which is also the length of every capture list
    /// this pattern produces.
    #[must_use]
    pub fn wildcard_count(&self) -> usize {
        self.tokens.iter().filter(|t| t.is_wildcard()).count()
    }

    /// The literal words, in pattern order.
    pub fn literals(&self) -> impl Iterator<Item = &str> {
        self.tokens.iter().filter_map(PatternToken::as_word)
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, token) in self.tokens.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{token}")?;
        }
        Ok(())
    }
}
