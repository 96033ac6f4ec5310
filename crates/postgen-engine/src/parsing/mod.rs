pub mod blocks;
pub mod inline;

use blocks::{HtmlBuilder, MarkdownLineClassifier};

/// Converts one Markdown document into an HTML fragment (no page wrapper).
///
/// Supports headings, paragraphs, flat unordered lists, backtick-fenced code
/// blocks and inline links. Never fails: anything unrecognized becomes
/// paragraph text. Both `\n` and `\r\n` line endings are accepted.
pub fn markdown_to_html(source: &str) -> String {
    let classifier = MarkdownLineClassifier;
    let mut builder = HtmlBuilder::new();

    for line in source.lines() {
        let lc = classifier.classify(line);
        builder.push(&lc);
    }

    builder.finish()
}
