use super::kinds::{CodeFence, Heading, ListItem};

/// What a line would be, judged without any surrounding context.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind<'a> {
    /// A backtick fence (opens or closes a code block).
    Fence,
    Heading { level: u8, text: &'a str },
    ListItem { text: &'a str },
    /// Whitespace only.
    Blank,
    /// Anything else; paragraph material outside of code blocks.
    Text,
}

/// Classification of a single line containing only local facts.
///
/// This is phase 1 of block parsing: each line is classified independently.
/// The [`HtmlBuilder`](super::HtmlBuilder) decides what a class means given
/// its state (inside a code block every non-fence line is raw code).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineClass<'a> {
    /// The raw line, without its terminator.
    pub line: &'a str,
    pub kind: LineKind<'a>,
}

/// Classifies individual lines for the block parsing phase.
pub struct MarkdownLineClassifier;

impl MarkdownLineClassifier {
    /// Classifies a line, checking constructs in precedence order:
    /// fence, heading, list item, blank, text.
    pub fn classify<'a>(&self, line: &'a str) -> LineClass<'a> {
        let kind = if CodeFence::is_fence(line) {
            LineKind::Fence
        } else if let Some((level, text)) = Heading::parse(line) {
            LineKind::Heading { level, text }
        } else if let Some(text) = ListItem::parse(line) {
            LineKind::ListItem { text }
        } else if line.trim().is_empty() {
            LineKind::Blank
        } else {
            LineKind::Text
        };

        LineClass { line, kind }
    }
}
