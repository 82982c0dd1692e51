//! Input tokenization.
//!
//! Converts a raw question into the word list the matcher consumes.

/// Tokenizes questions.
pub struct QueryTokenizer;

impl QueryTokenizer {
    /// Tokenizes a raw input string into words.
    ///
    /// - Splits on any whitespace
    /// - Drops a single trailing question mark
    /// - Preserves case, since titles and names are matched exactly
    #[must_use]
    pub fn tokenize(input: &str) -> Vec<String> {
        let trimmed = input.trim_end();
        let trimmed = trimmed.strip_suffix('?').unwrap_or(trimmed);

        trimmed.split_whitespace().map(str::to_string).collect()
    }
}
