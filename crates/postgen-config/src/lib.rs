use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// File name looked up in the site root.
pub const CONFIG_FILE_NAME: &str = "postgen.toml";

const DEFAULT_FONT_STYLESHEET: &str =
    "https://fonts.loli.net/css?family=Open+Sans:400italic,700italic,700,400&subset=latin,latin-ext";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {config_path}: {source}")]
    ConfigReadError {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {config_path}: {source}")]
    ConfigParseError {
        config_path: PathBuf,
        source: toml::de::Error,
    },
}

/// Site layout and rendering settings.
///
/// Every field has a default matching the classic `posts/md` -> `posts/html`
/// layout, so an empty or missing `postgen.toml` is a valid configuration.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Directory holding the `.md` sources.
    pub source_dir: PathBuf,
    /// Directory receiving the generated `.html` pages.
    pub output_dir: PathBuf,
    /// Location of the generated index page.
    pub index_path: PathBuf,
    pub convert: ConvertConfig,
    pub page: PageConfig,
    pub index: IndexConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source_dir: PathBuf::from("posts/md"),
            output_dir: PathBuf::from("posts/html"),
            index_path: PathBuf::from("posts/index.html"),
            convert: ConvertConfig::default(),
            page: PageConfig::default(),
            index: IndexConfig::default(),
        }
    }
}

/// Controls the external Markdown converter.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ConvertConfig {
    /// Try the external program before the built-in transducer.
    pub external: bool,
    /// Program name (looked up on `PATH`) or path to the converter.
    pub program: String,
}

impl Default for ConvertConfig {
    fn default() -> Self {
        Self {
            external: true,
            program: "pandoc".to_string(),
        }
    }
}

/// Shell around each compiled post.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    pub language: String,
    pub font_stylesheet: String,
    pub stylesheet: String,
    pub profile_href: String,
    pub posts_href: String,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            language: "en".to_string(),
            font_stylesheet: DEFAULT_FONT_STYLESHEET.to_string(),
            stylesheet: "../../assets/styles.css".to_string(),
            profile_href: "../../index.html".to_string(),
            posts_href: "../index.html".to_string(),
        }
    }
}

/// Shell around the posts index.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct IndexConfig {
    pub title: String,
    pub language: String,
    pub font_stylesheet: String,
    pub stylesheet: String,
    pub profile_href: String,
    pub posts_href: String,
    /// `chrono` strftime pattern for the "Last update" footer.
    pub timestamp_format: String,
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self {
            title: "Posts".to_string(),
            language: "en".to_string(),
            font_stylesheet: DEFAULT_FONT_STYLESHEET.to_string(),
            stylesheet: "../assets/styles.css".to_string(),
            profile_href: "../index.html".to_string(),
            posts_href: "./index.html".to_string(),
            timestamp_format: "%b %Y".to_string(),
        }
    }
}

impl Config {
    /// Loads a config file, returning `Ok(None)` when it does not exist.
    ///
    /// Directory settings have `~` and `$VAR` expanded but are otherwise
    /// left as written; see [`Config::rooted_at`].
    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>, ConfigError> {
        let config_path = config_path.as_ref();
        if !config_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(config_path).map_err(|source| {
            ConfigError::ConfigReadError {
                config_path: config_path.to_path_buf(),
                source,
            }
        })?;

        let mut config: Config =
            toml::from_str(&content).map_err(|source| ConfigError::ConfigParseError {
                config_path: config_path.to_path_buf(),
                source,
            })?;

        for path in [
            &mut config.source_dir,
            &mut config.output_dir,
            &mut config.index_path,
        ] {
            if let Some(expanded) = Self::expand_path(path) {
                *path = expanded;
            }
        }

        Ok(Some(config))
    }

    /// Loads `postgen.toml` from `site_root` (defaults when absent) and
    /// resolves every directory setting against `site_root`.
    pub fn load(site_root: &Path) -> Result<Self, ConfigError> {
        let config = Self::load_from_path(Self::config_path(site_root))?.unwrap_or_default();
        Ok(config.rooted_at(site_root))
    }

    pub fn config_path(site_root: &Path) -> PathBuf {
        site_root.join(CONFIG_FILE_NAME)
    }

    /// Joins relative directory settings onto `site_root`. Absolute paths are kept.
    pub fn rooted_at(mut self, site_root: &Path) -> Self {
        self.source_dir = site_root.join(&self.source_dir);
        self.output_dir = site_root.join(&self.output_dir);
        self.index_path = site_root.join(&self.index_path);
        self
    }

    fn expand_path(path: &Path) -> Option<PathBuf> {
        let path_str = path.to_string_lossy();
        match shellexpand::full(&path_str) {
            Ok(expanded) => Some(PathBuf::from(expanded.as_ref())),
            Err(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::env;
    use tempfile::TempDir;

    fn write_config(dir: &TempDir, content: &str) -> PathBuf {
        let path = dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_defaults_match_classic_layout() {
        let config = Config::default();
        assert_eq!(config.source_dir, PathBuf::from("posts/md"));
        assert_eq!(config.output_dir, PathBuf::from("posts/html"));
        assert_eq!(config.index_path, PathBuf::from("posts/index.html"));
        assert!(config.convert.external);
        assert_eq!(config.convert.program, "pandoc");
        assert_eq!(config.index.timestamp_format, "%b %Y");
        assert_eq!(config.page.stylesheet, "../../assets/styles.css");
        assert_eq!(config.index.stylesheet, "../assets/styles.css");
    }

    #[test]
    fn test_load_config_file_not_found() {
        let temp_dir = TempDir::new().unwrap();
        let non_existent_config = temp_dir.path().join("nonexistent.toml");

        let result = Config::load_from_path(&non_existent_config).unwrap();

        assert!(result.is_none());
    }

    #[test]
    fn test_empty_file_yields_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let path = write_config(&temp_dir, "");

        let config = Config::load_from_path(&path).unwrap().unwrap();

        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let path = write_config(
            &temp_dir,
            r#"
output_dir = "public/posts"

[convert]
external = false

[index]
title = "Writing"
"#,
        );

        let config = Config::load_from_path(&path).unwrap().unwrap();

        assert_eq!(config.output_dir, PathBuf::from("public/posts"));
        assert_eq!(config.source_dir, PathBuf::from("posts/md"));
        assert!(!config.convert.external);
        assert_eq!(config.convert.program, "pandoc");
        assert_eq!(config.index.title, "Writing");
        assert_eq!(config.index.timestamp_format, "%b %Y");
    }

    #[test]
    fn test_malformed_file_is_parse_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = write_config(&temp_dir, "source_dir = [not toml");

        let result = Config::load_from_path(&path);

        assert!(matches!(
            result,
            Err(ConfigError::ConfigParseError { config_path, .. }) if config_path == path
        ));
    }

    #[test]
    fn test_load_resolves_against_site_root() {
        let temp_dir = TempDir::new().unwrap();
        write_config(&temp_dir, "index_path = \"/srv/www/index.html\"\n");

        let config = Config::load(temp_dir.path()).unwrap();

        assert_eq!(config.source_dir, temp_dir.path().join("posts/md"));
        assert_eq!(config.output_dir, temp_dir.path().join("posts/html"));
        assert_eq!(config.index_path, PathBuf::from("/srv/www/index.html"));
    }

    #[test]
    fn test_load_without_file_uses_defaults() {
        let temp_dir = TempDir::new().unwrap();

        let config = Config::load(temp_dir.path()).unwrap();

        assert_eq!(config.index_path, temp_dir.path().join("posts/index.html"));
        assert!(config.convert.external);
    }

    #[test]
    fn test_expand_path_with_tilde() {
        let path = PathBuf::from("~/test/path");
        let expanded = Config::expand_path(&path);

        assert!(expanded.is_some());
        let expanded = expanded.unwrap();
        assert!(!expanded.to_string_lossy().starts_with('~'));
        assert!(expanded.to_string_lossy().contains("test/path"));
    }

    #[test]
    fn test_config_with_env_var_in_toml() {
        unsafe {
            env::set_var("POSTGEN_TEST_SITE", "/custom/site");
        }

        let temp_dir = TempDir::new().unwrap();
        let path = write_config(&temp_dir, "source_dir = \"$POSTGEN_TEST_SITE/md\"\n");

        let config = Config::load_from_path(&path).unwrap().unwrap();

        assert_eq!(config.source_dir, PathBuf::from("/custom/site/md"));

        unsafe {
            env::remove_var("POSTGEN_TEST_SITE");
        }
    }

    #[test]
    fn test_expand_path_with_relative_path() {
        let path = PathBuf::from("relative/path");
        let expanded = Config::expand_path(&path).unwrap();

        assert_eq!(expanded, path);
    }
}
