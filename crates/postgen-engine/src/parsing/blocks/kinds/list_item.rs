/// Unordered list item (`- item` or `* item`), flat lists only.
pub struct ListItem;

impl ListItem {
    pub const BULLETS: [char; 2] = ['-', '*'];
    pub const OPEN_TAG: &'static str = "<ul>";
    pub const CLOSE_TAG: &'static str = "</ul>";

    /// Returns the item text with the bullet and following whitespace removed.
    ///
    /// Leading whitespace before the bullet is allowed. The bullet needs at
    /// least one whitespace character after it plus one more character of
    /// any kind, so `"- "` is not an item while `"-  "` is an empty one.
    pub fn parse(line: &str) -> Option<&str> {
        let rest = line.trim_start().strip_prefix(Self::BULLETS)?;

        let mut chars = rest.chars();
        let separator = chars.next()?;
        if !separator.is_whitespace() || chars.next().is_none() {
            return None;
        }

        Some(rest.trim_start())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("- item", "item")]
    #[case("* star", "star")]
    #[case("   - indented", "indented")]
    #[case("-    wide gap", "wide gap")]
    #[case("-  ", "")]
    #[case("- [link](x)", "[link](x)")]
    fn parses_items(#[case] line: &str, #[case] text: &str) {
        assert_eq!(ListItem::parse(line), Some(text));
    }

    #[rstest]
    #[case("- ")]
    #[case("-")]
    #[case("-nospace")]
    #[case("---")]
    #[case("+ plus")]
    #[case("1. ordered")]
    fn rejects_non_items(#[case] line: &str) {
        assert_eq!(ListItem::parse(line), None);
    }
}
