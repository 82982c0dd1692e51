//! Answer values produced by queries.

use std::fmt;

/// Marker text shown when a query matched but found nothing.
pub const NO_ANSWERS: &str = "No answers";

/// Marker text shown when no pattern matched the query.
pub const UNRECOGNIZED: &str = "I don't understand";

/// A single value in a query's answer list.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Answer {
    /// A projected text field (title, author, genre, cast member).
    Text(String),
    /// A projected year.
    Year(i32),
    /// The query matched a pattern but its scan found nothing.
    NoAnswers,
    /// No pattern matched the query.
    Unrecognized,
}

impl Answer {
    /// Returns true for the two marker values.
    #[must_use]
    pub const fn is_marker(&self) -> bool {
        matches!(self, Self::NoAnswers | Self::Unrecognized)
    }
}

impl fmt::Display for Answer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(s) => f.write_str(s),
            Self::Year(y) => write!(f, "{y}"),
            Self::NoAnswers => f.write_str(NO_ANSWERS),
            Self::Unrecognized => f.write_str(UNRECOGNIZED),
        }
    }
}

impl From<String> for Answer {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<&str> for Answer {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<i32> for Answer {
    fn from(year: i32) -> Self {
        Self::Year(year)
    }
}
