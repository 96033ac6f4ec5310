use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to list directory {path}: {source}")]
    List {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to create directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Read a UTF-8 text file
pub fn read_file(path: &Path) -> Result<String, IoError> {
    fs::read_to_string(path).map_err(|source| IoError::Read {
        path: path.to_path_buf(),
        source,
    })
}

/// Write content to a file, creating parent directories as needed
pub fn write_file(path: &Path, content: &str) -> Result<(), IoError> {
    if let Some(parent) = path.parent() {
        ensure_dir(parent)?;
    }

    fs::write(path, content).map_err(|source| IoError::Write {
        path: path.to_path_buf(),
        source,
    })
}

/// Create a directory and its parents if missing
pub fn ensure_dir(path: &Path) -> Result<(), IoError> {
    fs::create_dir_all(path).map_err(|source| IoError::CreateDir {
        path: path.to_path_buf(),
        source,
    })
}

/// List file names in `dir` whose extension matches `extension`
/// case-insensitively, sorted by name.
///
/// A missing directory lists as empty. Subdirectories and names that are
/// not valid UTF-8 are skipped.
pub fn list_files_with_extension(dir: &Path, extension: &str) -> Result<Vec<String>, IoError> {
    if !dir.is_dir() {
        log::debug!("{} is not a directory; nothing to list", dir.display());
        return Ok(Vec::new());
    }

    let list_error = |source| IoError::List {
        path: dir.to_path_buf(),
        source,
    };
    let suffix = format!(".{}", extension.to_lowercase());

    let mut names = Vec::new();
    for entry in fs::read_dir(dir).map_err(list_error)? {
        let entry = entry.map_err(list_error)?;
        if entry.path().is_dir() {
            continue;
        }

        let Ok(name) = entry.file_name().into_string() else {
            log::warn!("Skipping non UTF-8 file name in {}", dir.display());
            continue;
        };

        if name.to_lowercase().ends_with(&suffix) {
            names.push(name);
        }
    }

    names.sort();
    Ok(names)
}
