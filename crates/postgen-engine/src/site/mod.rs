//! # Site Generation
//!
//! Compiles every Markdown source into a standalone page and writes an index
//! of the output directory.
//!
//! The index is built from what is on disk after compiling, not from the
//! list of pages just written, so stale pages without a source still appear.
//! Missing source or output directories are treated as empty.

pub mod shell;

use crate::convert::Converter;
use crate::io::{self, IoError};
use chrono::Local;
use chrono::format::{Item, StrftimeItems};
use postgen_config::Config;
use std::path::{Path, PathBuf};

const SOURCE_EXTENSION: &str = "md";
const PAGE_EXTENSION: &str = "html";
const DEFAULT_TIMESTAMP_FORMAT: &str = "%b %Y";

/// Outcome of one [`generate`] run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateSummary {
    /// Pages written this run, in source order.
    pub compiled: Vec<PathBuf>,
    /// File names listed in the index.
    pub listed: Vec<String>,
    pub index_path: PathBuf,
}

/// Runs the full pipeline with converter detection and the current time.
pub fn generate(config: &Config) -> Result<GenerateSummary, IoError> {
    let converter = Converter::detect(&config.convert);
    let last_update = format_timestamp(&config.index.timestamp_format);
    generate_with(config, &converter, &last_update)
}

/// Runs the pipeline with an explicit converter and footer timestamp.
///
/// 1. ensure the output directory exists
/// 2. compile every source document
/// 3. re-scan the output directory
/// 4. write the index
pub fn generate_with(
    config: &Config,
    converter: &Converter,
    last_update: &str,
) -> Result<GenerateSummary, IoError> {
    io::ensure_dir(&config.output_dir)?;

    let compiled = compile_posts(config, converter)?;
    let listed = collect_posts(&config.output_dir)?;

    let link_prefix = relative_prefix(&config.output_dir, &config.index_path);
    let html = shell::render_index(&config.index, &listed, &link_prefix, last_update);
    io::write_file(&config.index_path, &html)?;

    log::info!(
        "Compiled {} post(s) with {} converter; indexed {} page(s)",
        compiled.len(),
        converter.name(),
        listed.len()
    );

    Ok(GenerateSummary {
        compiled,
        listed,
        index_path: config.index_path.clone(),
    })
}

/// Converts each `.md` file in the source directory into `<stem>.html` in the
/// output directory. Returns the written paths.
pub fn compile_posts(config: &Config, converter: &Converter) -> Result<Vec<PathBuf>, IoError> {
    let names = io::list_files_with_extension(&config.source_dir, SOURCE_EXTENSION)?;

    let mut written = Vec::with_capacity(names.len());
    for name in names {
        let source = config.source_dir.join(&name);
        let base = page_title(&name);
        let destination = config
            .output_dir
            .join(format!("{base}.{PAGE_EXTENSION}"));

        let markdown = io::read_file(&source)?;
        let body = converter.convert(&source, &markdown);
        let html = shell::render_page(&config.page, base, &body);
        io::write_file(&destination, &html)?;

        log::debug!("{} -> {}", source.display(), destination.display());
        written.push(destination);
    }

    Ok(written)
}

/// Lists every `.html` file currently in the output directory.
pub fn collect_posts(output_dir: &Path) -> Result<Vec<String>, IoError> {
    io::list_files_with_extension(output_dir, PAGE_EXTENSION)
}

/// File name without its final extension (`notes.v2.md` -> `notes.v2`).
fn page_title(file_name: &str) -> &str {
    Path::new(file_name)
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or(file_name)
}

/// `output_dir` expressed relative to the directory holding `index_path`,
/// always starting with `./`, `../` or `/`.
fn relative_prefix(output_dir: &Path, index_path: &Path) -> String {
    let index_dir = index_path.parent().unwrap_or(Path::new(""));
    let relative =
        pathdiff::diff_paths(output_dir, index_dir).unwrap_or_else(|| output_dir.to_path_buf());

    let converted = relative.to_string_lossy().replace('\\', "/");
    if converted.is_empty() {
        ".".to_string()
    } else if converted.starts_with("./")
        || converted.starts_with("../")
        || converted.starts_with('/')
        || converted == ".."
    {
        converted
    } else {
        format!("./{converted}")
    }
}

/// Formats the current local time, falling back to the default pattern when
/// `pattern` is not a valid strftime string.
fn format_timestamp(pattern: &str) -> String {
    let pattern = if StrftimeItems::new(pattern).any(|item| matches!(item, Item::Error)) {
        log::warn!("Invalid timestamp format '{pattern}'; using '{DEFAULT_TIMESTAMP_FORMAT}'");
        DEFAULT_TIMESTAMP_FORMAT
    } else {
        pattern
    };
    Local::now().format(pattern).to_string()
}
