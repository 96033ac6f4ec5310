//! # Block Parsing
//!
//! Two-phase, single-pass block parsing.
//!
//! ## Parsing Phases
//!
//! 1. **Line Classification** (`classify`): Each line is classified into a `LineClass`
//!    containing local facts (fence, heading level, list item text, blank status)
//!
//! 2. **Block Construction** (`builder`): An `HtmlBuilder` holds the open leaf
//!    (paragraph, list or fence) and emits HTML blocks as they close
//!
//! ## Modules
//!
//! - **`kinds`**: Block-specific types with owned delimiters (CodeFence, Heading, ListItem, Paragraph)
//! - **`classify`**: `MarkdownLineClassifier` produces `LineClass` for each line
//! - **`builder`**: `HtmlBuilder` state machine for block construction
//!
//! ## Key Invariants
//!
//! - Lists are flat; a non-item line always closes the open list first
//! - Fenced code blocks are raw zones: no block/inline parsing inside
//! - Output order is input order; unterminated blocks close at end of input

pub mod builder;
pub mod classify;
pub mod kinds;

pub use builder::HtmlBuilder;
pub use classify::{LineClass, LineKind, MarkdownLineClassifier};
