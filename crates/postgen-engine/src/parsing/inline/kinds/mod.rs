//! # Inline Kinds
//!
//! Inline-specific types that own their syntax delimiters.
//!
//! - **`Link`**: `[label](target)`
//!
//! All delimiter constants live here, not scattered in parser code.

pub mod link;

pub use link::Link;
