//! The placeholder grammar and a tokenizer built on it.
//!
//! A placeholder is `{` followed by up to 20 characters from `[A-Za-z0-9_]`
//! followed by `}`. Anything else, including `{a-b}` or an
//! over-long name, is plain literal text.

use std::ops::Range;
use std::sync::LazyLock;

use regex::Regex;

/// The placeholder grammar. Capture group 1 is the variable name.
///
/// Every recognizer in the crate is compiled from this one pattern.
pub const PLACEHOLDER_PATTERN: &str = r"\{([A-Za-z0-9_]{0,20})\}";

#[allow(clippy::expect_used)]
pub(crate) static PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(PLACEHOLDER_PATTERN).expect("constant regex pattern is valid"));

// The same pattern anchored to the whole input
#[allow(clippy::expect_used)]
static WHOLE_PLACEHOLDER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"\A(?:{})\z", PLACEHOLDER_PATTERN))
        .expect("constant regex pattern is valid")
});

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token<'a> {
    Literal(&'a str),
    Placeholder {
        /// Name with the braces stripped. May be empty for `{}`.
        name: &'a str,
    },
}

/// Returns true if `{name}` is a placeholder under the grammar.
pub fn is_valid_name(name: &str) -> bool {
    WHOLE_PLACEHOLDER.is_match(&format!("{{{}}}", name))
}

/// Cuts `source` at every placeholder, giving `k + 1` fragments for `k`
/// placeholders. Fragments may be empty.
pub fn split_fragments(source: &str) -> Vec<&str> {
    PLACEHOLDER.split(source).collect()
}

/// Splits a prompt literal into literal runs and placeholders, left to right.
///
/// The yielded ranges are contiguous and cover the whole source, so joining
/// `&source[range]` for every token gives back the input unchanged.
#[derive(Debug)]
pub struct Scanner<'a> {
    source: &'a str,
    byte_idx: usize,
    /// Next placeholder match at or after `byte_idx`, if already found.
    pending: Option<Range<usize>>,
}

impl<'a> Scanner<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            byte_idx: 0,
            pending: None,
        }
    }

    /// Iterator over the placeholder names only, duplicates included.
    pub fn placeholders(self) -> impl Iterator<Item = &'a str> {
        self.filter_map(|(token, _)| match token {
            Token::Placeholder { name } => Some(name),
            Token::Literal(_) => None,
        })
    }

    pub fn scan_next(&mut self) -> Option<(Token<'a>, Range<usize>)> {
        if self.byte_idx >= self.source.len() {
            return None;
        }

        let start = self.byte_idx;
        let rem = &self.source.as_bytes()[start..];

        // No brace left means no placeholder left
        if self.pending.is_none() && memchr::memchr(b'{', rem).is_none() {
            self.byte_idx = self.source.len();
            return Some((Token::Literal(&self.source[start..]), start..self.source.len()));
        }

        let found = match self.pending.take() {
            Some(range) => Some(range),
            None => PLACEHOLDER
                .find_at(self.source, start)
                .map(|m| m.start()..m.end()),
        };

        match found {
            Some(range) if range.start > start => {
                // Text before the placeholder goes out first
                self.byte_idx = range.start;
                self.pending = Some(range.clone());
                Some((Token::Literal(&self.source[start..range.start]), start..range.start))
            }
            Some(range) => {
                let name = &self.source[range.start + 1..range.end - 1];
                self.byte_idx = range.end;
                Some((Token::Placeholder { name }, range))
            }
            None => {
                self.byte_idx = self.source.len();
                Some((Token::Literal(&self.source[start..]), start..self.source.len()))
            }
        }
    }
}

impl<'a> Iterator for Scanner<'a> {
    type Item = (Token<'a>, Range<usize>);

    fn next(&mut self) -> Option<Self::Item> {
        self.scan_next()
    }
}
