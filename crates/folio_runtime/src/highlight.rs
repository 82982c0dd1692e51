//! Query highlighting for the REPL.

use std::borrow::Cow;
use std::collections::HashSet;

/// Highlighter for queries.
///
/// Grammar words are shown in green and years in magenta. Everything else
/// (titles, names, genres) is left alone.
#[derive(Debug, Default)]
pub struct QueryHighlighter {
    vocabulary: HashSet<String>,
}

impl QueryHighlighter {
    /// Creates a highlighter that knows no grammar words.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the grammar words to highlight.
    pub fn set_vocabulary(&mut self, words: impl IntoIterator<Item = String>) {
        self.vocabulary = words.into_iter().collect();
    }

    /// Highlight a line of input.
    pub fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        if line.trim().is_empty() {
            return Cow::Borrowed(line);
        }

        let mut result = String::with_capacity(line.len() * 2);
        let mut rest = line;

        while !rest.is_empty() {
            let split = rest
                .find(|c: char| !c.is_whitespace())
                .unwrap_or(rest.len());
            result.push_str(&rest[..split]);
            rest = &rest[split..];

            let end = rest.find(char::is_whitespace).unwrap_or(rest.len());
            let word = &rest[..end];
            rest = &rest[end..];

            let bare = word.strip_suffix('?').unwrap_or(word);
            let color = if bare.is_empty() {
                ""
            } else if is_year(bare) {
                "\x1b[35m" // magenta
            } else if self.vocabulary.contains(bare) {
                "\x1b[32m" // green
            } else {
                ""
            };

            if color.is_empty() {
                result.push_str(word);
            } else {
                result.push_str(color);
                result.push_str(bare);
                result.push_str("\x1b[0m");
                result.push_str(&word[bare.len()..]);
            }
        }

        Cow::Owned(result)
    }
}

fn is_year(word: &str) -> bool {
    let digits = word.strip_prefix('-').unwrap_or(word);
    !digits.is_empty() && digits.chars().all(|c| c.is_ascii_digit())
}
