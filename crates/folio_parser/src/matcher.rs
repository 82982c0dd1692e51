//! Wildcard pattern matching.
//!
//! Walks a pattern and a source token list with two cursors in a single
//! left-to-right pass. There is no backtracking: a `%` in the middle of a
//! pattern stops at the first source word equal to the literal after it.

use crate::pattern::{Pattern, PatternToken};

/// Result of matching one pattern against one source.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MatchOutcome {
    /// The pattern matched; one capture per wildcard, in pattern order
    Matched(Vec<String>),
    /// The pattern does not align with the source
    NoMatch,
}

impl MatchOutcome {
    /// Returns true if the pattern matched.
    #[must_use]
    pub const fn is_match(&self) -> bool {
        matches!(self, Self::Matched(_))
    }

    /// Returns the captures of a successful match.
    #[must_use]
    pub fn into_captures(self) -> Option<Vec<String>> {
        match self {
            Self::Matched(captures) => Some(captures),
            Self::NoMatch => None,
        }
    }
}

/// Matches `source` against `pattern`.
///
/// - `_` captures exactly one word.
/// - `%` as the last pattern token captures every remaining word, joined by
///   single spaces (the empty string if none remain).
/// - `%` elsewhere captures words up to, not including, the first word equal
///   to the literal that follows it. If the source runs out first, or the
///   following token is not a literal, there is no match.
#[must_use]
pub fn match_pattern<S: AsRef<str>>(pattern: &Pattern, source: &[S]) -> MatchOutcome {
    let pattern = pattern.tokens();
    let mut p = 0;
    let mut s = 0;
    let mut captures = Vec::new();

    while p < pattern.len() || s < source.len() {
        // Source left over with nothing to match it.
        let Some(token) = pattern.get(p) else {
            return MatchOutcome::NoMatch;
        };

        match token {
            PatternToken::AnyPhrase if p + 1 == pattern.len() => {
                captures.push(join_words(&source[s..]));
                return MatchOutcome::Matched(captures);
            }
            PatternToken::AnyPhrase => {
                p += 1;
                let Some(delimiter) = pattern[p].as_word() else {
                    return MatchOutcome::NoMatch;
                };

                let start = s;
                while s < source.len() && source[s].as_ref() != delimiter {
                    s += 1;
                }
                if s == source.len() {
                    return MatchOutcome::NoMatch;
                }

                captures.push(join_words(&source[start..s]).trim().to_string());
            }
            _ if s == source.len() => return MatchOutcome::NoMatch,
            PatternToken::AnyWord => {
                captures.push(source[s].as_ref().trim().to_string());
                p += 1;
                s += 1;
            }
            PatternToken::Word(word) if word == source[s].as_ref() => {
                p += 1;
                s += 1;
            }
            PatternToken::Word(_) => return MatchOutcome::NoMatch,
        }
    }

    MatchOutcome::Matched(captures)
}

fn join_words<S: AsRef<str>>(words: &[S]) -> String {
    let mut joined = String::new();
    for (i, word) in words.iter().enumerate() {
        if i > 0 {
            joined.push(' ');
        }
        joined.push_str(word.as_ref());
    }
    joined
}
