//! # Inline Parsing
//!
//! Cursor-based inline parsing for paragraph and list item text.
//!
//! Only inline links (`[label](target)`) are recognized; everything else is
//! passed through as text. Headings and code blocks never reach this module.
//!
//! ## Modules
//!
//! - **`types`**: `InlineNode` enum (Text, Link) and `Span`
//! - **`kinds`**: Inline-specific types with owned delimiters (Link)
//! - **`cursor`**: `Cursor` for byte-by-byte parsing with position tracking
//! - **`parser`**: `parse_inline()` / `render_inline()` entry points

pub mod cursor;
pub mod kinds;
pub mod parser;
pub mod types;

pub use parser::{parse_inline, render_inline};
pub use types::{InlineNode, Span};
