#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A span in the haystack.
#[derive(Debug, Clone, Copy, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Span {
    /// The start offset of the span, inclusive.
    pub start: usize,
    /// The end offset of the span, exclusive.
    pub end: usize,
}

impl Span {
    /// Create a new span.
    #[inline]
    pub fn new(start: usize, end: usize) -> Self {
        Span { start, end }
    }

    /// Check if the span is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    /// Get the length of the span.
    #[inline]
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Get the span as range.
    #[inline]
    pub fn range(self) -> std::ops::Range<usize> {
        self.start..self.end
    }
}

impl From<std::ops::Range<usize>> for Span {
    fn from(range: std::ops::Range<usize>) -> Self {
        Span::new(range.start, range.end)
    }
}

impl std::fmt::Display for Span {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

/// A match in the haystack.
///
/// * `'h` represents the lifetime of the haystack being searched.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Match<'h> {
    /// The matched text.
    text: &'h str,
    /// The underlying match span.
    span: Span,
}

impl<'h> Match<'h> {
    /// Create a new match.
    pub(crate) fn new(text: &'h str, span: Span) -> Self {
        Self { text, span }
    }

    /// Get the matched text.
    #[inline]
    pub fn as_str(&self) -> &'h str {
        self.text
    }

    /// Get the start of the match.
    #[inline]
    pub fn start(&self) -> usize {
        self.span.start
    }

    /// Get the end of the match.
    #[inline]
    pub fn end(&self) -> usize {
        self.span.end
    }

    /// Get the span of the match.
    #[inline]
    pub fn span(&self) -> Span {
        self.span
    }

    /// Get the span as range
    #[inline]
    pub fn range(&self) -> std::ops::Range<usize> {
        self.span.range()
    }

    /// Get the length of the match in bytes.
    #[inline]
    pub fn len(&self) -> usize {
        self.span.len()
    }

    /// Check if the match is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.span.is_empty()
    }
}

impl<'h> From<regex::Match<'h>> for Match<'h> {
    fn from(m: regex::Match<'h>) -> Self {
        Match::new(m.as_str(), m.range().into())
    }
}

impl<'h> From<fancy_regex::Match<'h>> for Match<'h> {
    fn from(m: fancy_regex::Match<'h>) -> Self {
        Match::new(m.as_str(), m.range().into())
    }
}

impl std::fmt::Display for Match<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "'{}' at {}", self.text.escape_default(), self.span)
    }
}
