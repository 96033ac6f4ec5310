//! Markdown conversion with an optional external tool.
//!
//! The built-in transducer ([`markdown_to_html`]) is always available. When
//! an external converter such as pandoc is installed it is preferred, and any
//! failure to run it falls back to the built-in output.

use crate::parsing::markdown_to_html;
use postgen_config::ConvertConfig;
use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus};

/// The conversion strategy selected for a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Converter {
    /// Run an external program, falling back to the transducer on failure.
    External { program: PathBuf },
    /// The built-in line transducer.
    Builtin,
}

#[derive(Debug, thiserror::Error)]
enum ExternalError {
    #[error("Failed to launch {program}: {source}")]
    Spawn {
        program: PathBuf,
        source: std::io::Error,
    },
    #[error("{program} exited with {status}: {stderr}")]
    Status {
        program: PathBuf,
        status: ExitStatus,
        stderr: String,
    },
    #[error("{program} produced non UTF-8 output")]
    Encoding { program: PathBuf },
}

impl Converter {
    /// Probes for the configured external program.
    ///
    /// Picks [`Converter::External`] only when external conversion is enabled
    /// and the program resolves on `PATH` (or as a path).
    pub fn detect(config: &ConvertConfig) -> Self {
        if !config.external {
            log::debug!("External conversion disabled; using built-in transducer");
            return Converter::Builtin;
        }

        match which::which(&config.program) {
            Ok(program) => {
                log::info!("Using external converter {}", program.display());
                Converter::External { program }
            }
            Err(err) => {
                log::debug!(
                    "External converter '{}' unavailable ({err}); using built-in transducer",
                    config.program
                );
                Converter::Builtin
            }
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Converter::External { .. } => "external",
            Converter::Builtin => "builtin",
        }
    }

    /// Converts the document at `source_path`, whose text is `markdown`.
    ///
    /// The external program reads the file itself; the transducer works on
    /// `markdown`. Never fails.
    pub fn convert(&self, source_path: &Path, markdown: &str) -> String {
        match self {
            Converter::External { program } => match run_external(program, source_path) {
                Ok(html) => html,
                Err(err) => {
                    log::debug!("{err}; falling back to built-in transducer");
                    markdown_to_html(markdown)
                }
            },
            Converter::Builtin => markdown_to_html(markdown),
        }
    }
}

fn run_external(program: &Path, source_path: &Path) -> Result<String, ExternalError> {
    let output = Command::new(program)
        .args(["-f", "markdown", "-t", "html5"])
        .arg(source_path)
        .output()
        .map_err(|source| ExternalError::Spawn {
            program: program.to_path_buf(),
            source,
        })?;

    if !output.status.success() {
        return Err(ExternalError::Status {
            program: program.to_path_buf(),
            status: output.status,
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        });
    }

    String::from_utf8(output.stdout).map_err(|_| ExternalError::Encoding {
        program: program.to_path_buf(),
    })
}
