/// Fenced code block with owned delimiters and escaping rules.
///
/// Only backtick fences are recognized. Anything after the backticks
/// (an info string such as `rust`) is ignored.
pub struct CodeFence;

impl CodeFence {
    pub const BACKTICKS: &'static str = "```";
    pub const OPEN_TAG: &'static str = "<pre><code>";
    pub const CLOSE_TAG: &'static str = "</code></pre>";

    /// True when the trimmed line starts with a backtick fence.
    pub fn is_fence(line: &str) -> bool {
        line.trim().starts_with(Self::BACKTICKS)
    }

    /// Escapes a raw code line for inclusion inside `<pre><code>`.
    ///
    /// Only `&` and `<` are touched; `&` goes first so `<` is not double-escaped.
    pub fn escape(line: &str) -> String {
        line.replace('&', "&amp;").replace('<', "&lt;")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detect_backtick_fence() {
        assert!(CodeFence::is_fence("```rust"));
    }

    #[test]
    fn detect_indented_fence() {
        assert!(CodeFence::is_fence("   ```"));
    }

    #[test]
    fn tildes_are_not_fences() {
        assert!(!CodeFence::is_fence("~~~"));
    }

    #[test]
    fn no_fence() {
        assert!(!CodeFence::is_fence("hello"));
        assert!(!CodeFence::is_fence("``"));
    }

    #[test]
    fn escape_ampersand_before_angle() {
        assert_eq!(CodeFence::escape("a < b && c"), "a &lt; b &amp;&amp; c");
        assert_eq!(CodeFence::escape("&lt;"), "&amp;lt;");
    }

    #[test]
    fn escape_leaves_closing_angle() {
        assert_eq!(CodeFence::escape("x > y"), "x > y");
    }
}
