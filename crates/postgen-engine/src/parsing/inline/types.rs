/// A byte range `[start, end)` into the inline source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Span {
    /// Inclusive start byte offset.
    pub start: usize,
    /// Exclusive end byte offset.
    pub end: usize,
}

impl Span {
    #[must_use]
    pub fn len(self) -> usize {
        self.end.saturating_sub(self.start)
    }

    #[must_use]
    pub fn is_empty(self) -> bool {
        self.len() == 0
    }

    /// Slices `s` with this span.
    pub fn slice(self, s: &str) -> &str {
        &s[self.start..self.end]
    }
}

/// A parsed inline node with byte spans into the source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InlineNode {
    /// Plain text that isn't part of any special construct.
    Text(Span),
    /// An inline link `[label](target)`.
    Link {
        /// Full span including brackets and parentheses.
        full: Span,
        /// Span of the visible label (between `[` and `]`).
        label: Span,
        /// Span of the href (between `(` and `)`).
        target: Span,
    },
}
