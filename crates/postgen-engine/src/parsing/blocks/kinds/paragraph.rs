/// Paragraph block type (marker struct).
///
/// Paragraphs have no delimiters - they are the default leaf block
/// when no other block opener matches. Inline link substitution is
/// applied to paragraph content.
pub struct Paragraph;

impl Paragraph {
    /// Joins buffered source lines into the paragraph's text.
    pub fn join(lines: &[String]) -> String {
        lines.join(" ").trim().to_string()
    }
}
