/// Inline link type with owned delimiter constants.
pub struct Link;

impl Link {
    pub const LABEL_OPEN: u8 = b'[';
    pub const LABEL_CLOSE: u8 = b']';
    pub const TARGET_OPEN: u8 = b'(';
    pub const TARGET_CLOSE: u8 = b')';

    /// Renders the anchor element. Label and target are emitted as written.
    pub fn to_html(label: &str, target: &str) -> String {
        format!("<a href=\"{target}\">{label}</a>")
    }
}
