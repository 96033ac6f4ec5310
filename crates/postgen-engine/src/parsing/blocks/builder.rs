use crate::parsing::inline::render_inline;

use super::{
    classify::{LineClass, LineKind},
    kinds::{CodeFence, ListItem, Paragraph},
};

/// The block currently accumulating lines. At most one is open at a time.
#[derive(Debug, Clone, Default)]
enum LeafState {
    #[default]
    None,
    Paragraph {
        lines: Vec<String>,
    },
    List,
    Fence,
}

/// Line-by-line state machine turning classified lines into HTML blocks.
///
/// Output is emitted strictly in input order; nothing looks ahead past the
/// current line. Unterminated constructs are closed by [`HtmlBuilder::finish`].
pub struct HtmlBuilder {
    leaf: LeafState,
    out: Vec<String>,
}

impl HtmlBuilder {
    pub fn new() -> Self {
        Self {
            leaf: LeafState::None,
            out: vec![],
        }
    }

    pub fn push(&mut self, c: &LineClass<'_>) {
        if c.kind == LineKind::Fence {
            self.toggle_fence();
            return;
        }

        if self.in_fence() {
            self.out.push(CodeFence::escape(c.line));
            return;
        }

        // Any non-item line ends the list before it is handled itself.
        if !matches!(c.kind, LineKind::ListItem { .. }) {
            self.close_list();
        }

        match c.kind {
            LineKind::Heading { level, text } => {
                self.flush_paragraph();
                self.out.push(format!("<h{level}>{text}</h{level}>"));
            }
            LineKind::ListItem { text } => self.push_list_item(text),
            LineKind::Blank => self.flush_paragraph(),
            LineKind::Text => self.extend_paragraph(c.line),
            LineKind::Fence => unreachable!("fences are handled above"),
        }
    }

    /// Closes whatever is still open and joins the emitted blocks.
    pub fn finish(mut self) -> String {
        // EOF flush
        self.flush_paragraph();
        self.close_list();
        if self.in_fence() {
            self.out.push(CodeFence::CLOSE_TAG.to_string());
            self.leaf = LeafState::None;
        }
        self.out.join("\n")
    }

    fn in_fence(&self) -> bool {
        matches!(self.leaf, LeafState::Fence)
    }

    fn toggle_fence(&mut self) {
        if self.in_fence() {
            self.out.push(CodeFence::CLOSE_TAG.to_string());
            self.leaf = LeafState::None;
        } else {
            self.flush_paragraph();
            self.close_list();
            self.out.push(CodeFence::OPEN_TAG.to_string());
            self.leaf = LeafState::Fence;
        }
    }

    fn push_list_item(&mut self, text: &str) {
        if !matches!(self.leaf, LeafState::List) {
            self.flush_paragraph();
            self.out.push(ListItem::OPEN_TAG.to_string());
            self.leaf = LeafState::List;
        }
        self.out.push(format!("  <li>{}</li>", render_inline(text)));
    }

    fn close_list(&mut self) {
        if matches!(self.leaf, LeafState::List) {
            self.out.push(ListItem::CLOSE_TAG.to_string());
            self.leaf = LeafState::None;
        }
    }

    fn extend_paragraph(&mut self, line: &str) {
        match &mut self.leaf {
            LeafState::Paragraph { lines } => lines.push(line.to_string()),
            _ => {
                self.leaf = LeafState::Paragraph {
                    lines: vec![line.to_string()],
                }
            }
        }
    }

    fn flush_paragraph(&mut self) {
        let prev = std::mem::take(&mut self.leaf);
        if let LeafState::Paragraph { lines } = prev {
            let text = Paragraph::join(&lines);
            self.out.push(format!("<p>{}</p>", render_inline(&text)));
        } else {
            self.leaf = prev; // put back non-paragraph leaf (e.g. list)
        }
    }
}

impl Default for HtmlBuilder {
    fn default() -> Self {
        Self::new()
    }
}
