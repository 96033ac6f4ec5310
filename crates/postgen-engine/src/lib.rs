pub mod convert;
pub mod io;
pub mod parsing;
pub mod site;

#[cfg(test)]
pub mod tests;

// Re-export key types for easier usage
pub use convert::Converter;
pub use io::IoError;
pub use parsing::markdown_to_html;
pub use site::{GenerateSummary, generate, generate_with};
