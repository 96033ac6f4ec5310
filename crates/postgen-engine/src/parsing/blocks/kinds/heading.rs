/// ATX heading (`# Title` through `###### Title`).
pub struct Heading;

impl Heading {
    pub const MARKER: u8 = b'#';
    pub const MAX_LEVEL: usize = 6;

    /// Parses a heading line into `(level, text)`.
    ///
    /// The marker must start the line and be followed by at least one
    /// whitespace character. The returned text is trimmed.
    pub fn parse(line: &str) -> Option<(u8, &str)> {
        let level = line.bytes().take_while(|b| *b == Self::MARKER).count();
        if level == 0 || level > Self::MAX_LEVEL {
            return None;
        }

        // `#` is one byte, so `level` is a char boundary.
        let rest = &line[level..];
        if !rest.starts_with(char::is_whitespace) {
            return None;
        }

        Some((level as u8, rest.trim()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("# Title", 1, "Title")]
    #[case("###### Deep", 6, "Deep")]
    #[case("##   spaced out  ", 2, "spaced out")]
    #[case("#\tTabbed", 1, "Tabbed")]
    #[case("# ", 1, "")]
    fn parses_headings(#[case] line: &str, #[case] level: u8, #[case] text: &str) {
        assert_eq!(Heading::parse(line), Some((level, text)));
    }

    #[rstest]
    #[case("####### seven")]
    #[case("#NoSpace")]
    #[case("#")]
    #[case(" # indented")]
    #[case("plain text")]
    fn rejects_non_headings(#[case] line: &str) {
        assert_eq!(Heading::parse(line), None);
    }
}
