use super::{
    cursor::Cursor,
    kinds::Link,
    types::{InlineNode, Span},
};

/// Parses inline content into a sequence of [`InlineNode`]s.
///
/// Scans left to right; each `[` is tried as the start of a link and, on
/// failure, treated as text so the scan resumes at the next byte. Matches
/// never overlap and the label/target text is not parsed again.
///
/// # Returns
/// A vector of inline nodes covering the entire input. Text between links
/// is emitted as `InlineNode::Text`.
pub fn parse_inline(s: &str) -> Vec<InlineNode> {
    let mut cur = Cursor::new(s);
    let mut out = vec![];
    let mut text_start = cur.pos();

    fn flush_text(out: &mut Vec<InlineNode>, start: usize, end: usize) {
        if end > start {
            out.push(InlineNode::Text(Span { start, end }));
        }
    }

    while !cur.eof() {
        if let Some(node) = try_parse_link(&mut cur) {
            if let InlineNode::Link { full, .. } = node {
                flush_text(&mut out, text_start, full.start);
                text_start = full.end;
            }
            out.push(node);
            continue;
        }
        cur.bump();
    }

    flush_text(&mut out, text_start, cur.pos());
    out
}

/// Renders inline content to HTML, replacing links with anchors.
pub fn render_inline(s: &str) -> String {
    let mut html = String::with_capacity(s.len());
    for node in parse_inline(s) {
        match node {
            InlineNode::Text(span) => html.push_str(span.slice(s)),
            InlineNode::Link { label, target, .. } => {
                html.push_str(&Link::to_html(label.slice(s), target.slice(s)));
            }
        }
    }
    html
}

/// Attempts to parse `[label](target)` starting at the current position.
///
/// The label runs to the first `]` and the target to the first `)`; both
/// must be non-empty. On failure the cursor position is restored.
fn try_parse_link(cur: &mut Cursor<'_>) -> Option<InlineNode> {
    if cur.peek() != Some(Link::LABEL_OPEN) {
        return None;
    }

    let saved = cur.clone();
    let start = cur.pos();
    cur.bump(); // [
    let label = delimited(cur, Link::LABEL_CLOSE);

    let target = label.and_then(|_| {
        if cur.peek() != Some(Link::TARGET_OPEN) {
            return None;
        }
        cur.bump(); // (
        delimited(cur, Link::TARGET_CLOSE)
    });

    match (label, target) {
        (Some(label), Some(target)) => Some(InlineNode::Link {
            full: Span {
                start,
                end: cur.pos(),
            },
            label,
            target,
        }),
        _ => {
            *cur = saved;
            None
        }
    }
}

/// Consumes a non-empty run up to `close` and the closing byte itself.
fn delimited(cur: &mut Cursor<'_>, close: u8) -> Option<Span> {
    let start = cur.pos();
    cur.bump_until(close);
    let end = cur.pos();
    if cur.eof() || end == start {
        return None;
    }
    cur.bump(); // close
    Some(Span { start, end })
}
