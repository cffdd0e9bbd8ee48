//! Site configuration for the Albums API tutorial documentation.
//!
//! [`load_config`] returns the built-in [`SiteConfig`]: navigation, sidebar,
//! footer and search settings a static-site build tool reads to render the
//! site. It is pure and never fails.
//!
//! [`Config::load`] layers an optional `albums-docs.toml` file and CLI
//! settings over the built-in metadata, and [`check_links`] verifies that
//! every declared link resolves to a Markdown document.
//!
//! ## Overlay file
//!
//! ```toml
//! [site]
//! base_path = "/albums-api/"
//! title = "Albums API"
//! search = "external"
//!
//! [footer]
//! previous = "Back"
//! next = "Forward"
//!
//! [docs]
//! source_dir = "docs"
//! ```
//!
//! String values support `${VAR}` and `${VAR:-default}` expansion.
//! Navigation and sidebar links cannot be overridden.

mod builtin;
mod expand;
mod links;
mod site;

use std::path::{Path, PathBuf};

use serde::Deserialize;

pub use builtin::{load_config, site_config};
pub use links::{BrokenLink, LinkError, check_links, resolve_target};
pub use site::{FooterLabels, LinkLocation, NavItem, SearchProvider, SidebarGroup, SiteConfig};

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "albums-docs.toml";

/// Default Markdown source directory, relative to the config directory.
const DEFAULT_SOURCE_DIR: &str = "docs";

/// CLI settings that override configuration file values.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override site base path.
    pub base_path: Option<String>,
    /// Override search provider.
    pub search: Option<SearchProvider>,
    /// Override Markdown source directory.
    pub source_dir: Option<PathBuf>,
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
    /// Environment variable error during expansion.
    #[error("Environment variable error in {field}: {message}")]
    EnvVar {
        /// Config field path (e.g., "`site.base_path`").
        field: String,
        /// Error message (e.g., "${`DOCS_BASE`} not set").
        message: String,
    },
}

/// Overlay file as parsed from TOML.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct ConfigFile {
    site: SiteSection,
    footer: FooterSection,
    docs: DocsSection,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct SiteSection {
    base_path: Option<String>,
    title: Option<String>,
    description: Option<String>,
    language: Option<String>,
    footer_message: Option<String>,
    search: Option<SearchProvider>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct FooterSection {
    previous: Option<String>,
    next: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct DocsSection {
    source_dir: Option<String>,
}

/// Resolved configuration: site settings plus where documents live.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Site settings handed to the build tool.
    pub site: SiteConfig,
    /// Markdown source directory (absolute when loaded from a file).
    pub source_dir: PathBuf,
    /// Path to the overlay file, if one was loaded.
    pub config_path: Option<PathBuf>,
}

impl Config {
    /// Load configuration with optional CLI settings.
    ///
    /// If `config_path` is provided, overlays that file. Otherwise searches
    /// for `albums-docs.toml` in the current directory and its parents, and
    /// falls back to the built-in configuration when none exists.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist, parsing or
    /// expansion fails, or the resulting settings are invalid.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) = Self::discover_config() {
            tracing::debug!(path = %discovered.display(), "Discovered config file");
            Self::load_from_file(&discovered)?
        } else {
            let cwd = std::env::current_dir().unwrap_or_default();
            Self::builtin_with_base(&cwd)
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
        }

        config.validate()?;
        Ok(config)
    }

    /// Built-in configuration with the source directory under `base`.
    fn builtin_with_base(base: &Path) -> Self {
        Self {
            site: load_config(),
            source_dir: base.join(DEFAULT_SOURCE_DIR),
            config_path: None,
        }
    }

    /// Search for config file in current directory and parents.
    fn discover_config() -> Option<PathBuf> {
        let mut current = std::env::current_dir().ok()?;
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Overlay a specific file onto the built-in configuration.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut file: ConfigFile = toml::from_str(&content)?;
        file.expand_env_vars()?;

        let config_dir = path.parent().unwrap_or(Path::new("."));
        let mut config = Self::builtin_with_base(config_dir);
        config.apply_file(file, config_dir);
        config.config_path = Some(path.to_path_buf());

        tracing::debug!(path = %path.display(), "Loaded config overlay");
        Ok(config)
    }

    fn apply_file(&mut self, file: ConfigFile, config_dir: &Path) {
        let ConfigFile { site, footer, docs } = file;
        let target = &mut self.site;

        if let Some(base_path) = site.base_path {
            target.base_path = base_path;
        }
        if let Some(title) = site.title {
            target.title = title;
        }
        if let Some(description) = site.description {
            target.description = description;
        }
        if let Some(language) = site.language {
            target.language = language;
        }
        if let Some(footer_message) = site.footer_message {
            target.footer_message = footer_message;
        }
        if let Some(search) = site.search {
            target.search_provider = search;
        }
        if let Some(previous) = footer.previous {
            target.footer_labels.previous = previous;
        }
        if let Some(next) = footer.next {
            target.footer_labels.next = next;
        }
        if let Some(source_dir) = docs.source_dir {
            self.source_dir = config_dir.join(source_dir);
        }
    }

    /// Apply CLI settings to the configuration.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(base_path) = &settings.base_path {
            self.site.base_path.clone_from(base_path);
        }
        if let Some(search) = settings.search {
            self.site.search_provider = search;
        }
        if let Some(source_dir) = &settings.source_dir {
            self.source_dir.clone_from(source_dir);
        }
    }

    /// Validate overridable site settings.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any check fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let site = &self.site;
        if !site.base_path.starts_with('/') || !site.base_path.ends_with('/') {
            return Err(ConfigError::Validation(format!(
                "site.base_path must start and end with '/', got {:?}",
                site.base_path
            )));
        }
        require_non_empty(&site.title, "site.title")?;
        require_non_empty(&site.language, "site.language")?;
        Ok(())
    }
}

impl ConfigFile {
    /// Expand environment variable references in string values.
    fn expand_env_vars(&mut self) -> Result<(), ConfigError> {
        let site = &mut self.site;
        expand::expand_opt(&mut site.base_path, "site.base_path")?;
        expand::expand_opt(&mut site.title, "site.title")?;
        expand::expand_opt(&mut site.description, "site.description")?;
        expand::expand_opt(&mut site.language, "site.language")?;
        expand::expand_opt(&mut site.footer_message, "site.footer_message")?;
        expand::expand_opt(&mut self.footer.previous, "footer.previous")?;
        expand::expand_opt(&mut self.footer.next, "footer.next")?;
        expand::expand_opt(&mut self.docs.source_dir, "docs.source_dir")?;
        Ok(())
    }
}

/// Require a string field to be non-empty.
fn require_non_empty(value: &str, field: &str) -> Result<(), ConfigError> {
    if value.trim().is_empty() {
        return Err(ConfigError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn overlay(toml: &str) -> Config {
        let file: ConfigFile = toml::from_str(toml).unwrap();
        let mut config = Config::builtin_with_base(Path::new("/project"));
        config.apply_file(file, Path::new("/project"));
        config
    }

    fn write_config(dir: &Path, content: &str) -> PathBuf {
        let path = dir.join(CONFIG_FILENAME);
        std::fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_builtin_config_is_valid() {
        let config = Config::builtin_with_base(Path::new("/project"));
        assert!(config.validate().is_ok());
        assert_eq!(config.source_dir, PathBuf::from("/project/docs"));
        assert_eq!(config.site, load_config());
    }

    #[test]
    fn test_empty_overlay_keeps_builtin() {
        let config = overlay("");
        assert_eq!(config.site, load_config());
    }

    #[test]
    fn test_overlay_site_section() {
        let config = overlay(
            r#"
[site]
base_path = "/"
title = "Albums"
language = "fr-FR"
search = "external"
"#,
        );

        assert_eq!(config.site.base_path, "/");
        assert_eq!(config.site.title, "Albums");
        assert_eq!(config.site.language, "fr-FR");
        assert_eq!(config.site.search_provider, SearchProvider::External);
        assert_eq!(config.site.description, load_config().description);
    }

    #[test]
    fn test_overlay_footer_section() {
        let config = overlay(
            r#"
[footer]
next = "Continue"
"#,
        );

        assert_eq!(config.site.footer_labels.next, "Continue");
        assert_eq!(config.site.footer_labels.previous, "Previous step");
    }

    #[test]
    fn test_overlay_keeps_navigation_and_sidebar() {
        let builtin = load_config();
        let config = overlay(
            r#"
[site]
title = "Other"
"#,
        );

        assert_eq!(config.site.navigation, builtin.navigation);
        assert_eq!(config.site.sidebar, builtin.sidebar);
    }

    #[test]
    fn test_overlay_resolves_source_dir() {
        let config = overlay(
            r#"
[docs]
source_dir = "content"
"#,
        );
        assert_eq!(config.source_dir, PathBuf::from("/project/content"));
    }

    #[test]
    fn test_unknown_field_rejected() {
        let result: Result<ConfigFile, _> = toml::from_str(
            r#"
[site]
navigation = []
"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_unknown_search_provider_rejected() {
        let result: Result<ConfigFile, _> = toml::from_str(
            r#"
[site]
search = "algolia"
"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_apply_cli_settings() {
        let mut config = overlay(
            r#"
[site]
base_path = "/from-file/"
"#,
        );
        config.apply_cli_settings(&CliSettings {
            base_path: Some("/from-cli/".to_owned()),
            search: Some(SearchProvider::External),
            source_dir: Some(PathBuf::from("/elsewhere")),
        });

        assert_eq!(config.site.base_path, "/from-cli/");
        assert_eq!(config.site.search_provider, SearchProvider::External);
        assert_eq!(config.source_dir, PathBuf::from("/elsewhere"));
    }

    #[test]
    fn test_apply_cli_settings_empty() {
        let mut config = Config::builtin_with_base(Path::new("/project"));
        config.apply_cli_settings(&CliSettings::default());
        assert_eq!(config, Config::builtin_with_base(Path::new("/project")));
    }

    #[test]
    fn test_validate_base_path_needs_slashes() {
        for bad in ["albums-api/", "/albums-api", ""] {
            let mut config = Config::builtin_with_base(Path::new("/project"));
            config.site.base_path = bad.to_owned();
            let err = config.validate().unwrap_err();
            assert!(matches!(err, ConfigError::Validation(_)));
            assert!(err.to_string().contains("base_path"));
        }
    }

    #[test]
    fn test_validate_empty_title() {
        let mut config = Config::builtin_with_base(Path::new("/project"));
        config.site.title = "  ".to_owned();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("site.title"));
    }

    #[test]
    fn test_validate_empty_language() {
        let mut config = Config::builtin_with_base(Path::new("/project"));
        config.site.language = String::new();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("site.language"));
    }

    #[test]
    fn test_load_explicit_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(
            dir.path(),
            r#"
[site]
title = "Staging docs"
"#,
        );

        let config = Config::load(Some(&path), None).unwrap();

        assert_eq!(config.site.title, "Staging docs");
        assert_eq!(config.config_path, Some(path));
        assert_eq!(config.source_dir, dir.path().join("docs"));
    }

    #[test]
    fn test_load_missing_file() {
        let err = Config::load(Some(Path::new("/nonexistent/albums-docs.toml")), None).unwrap_err();
        assert!(matches!(err, ConfigError::NotFound(_)));
    }

    #[test]
    fn test_load_invalid_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(dir.path(), "[site\ntitle = ");

        let err = Config::load(Some(&path), None).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_load_rejects_invalid_override() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(
            dir.path(),
            r#"
[site]
base_path = "no-slashes"
"#,
        );

        let err = Config::load(Some(&path), None).unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
    }

    #[test]
    fn test_load_rejects_invalid_cli_override() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(dir.path(), "");
        let settings = CliSettings {
            base_path: Some("relative/".to_owned()),
            ..Default::default()
        };

        let err = Config::load(Some(&path), Some(&settings)).unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
    }

    #[test]
    fn test_load_expands_env_vars() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::set_var("ALBUMS_DOCS_TEST_TITLE", "Preview");
        }
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(
            dir.path(),
            r#"
[site]
title = "${ALBUMS_DOCS_TEST_TITLE}"
base_path = "${ALBUMS_DOCS_TEST_BASE_UNSET:-/preview/}"
"#,
        );

        let config = Config::load(Some(&path), None).unwrap();

        assert_eq!(config.site.title, "Preview");
        assert_eq!(config.site.base_path, "/preview/");
        unsafe {
            std::env::remove_var("ALBUMS_DOCS_TEST_TITLE");
        }
    }

    #[test]
    fn test_load_reports_unset_env_var() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::remove_var("ALBUMS_DOCS_TEST_FOOTER_MISSING");
        }
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(
            dir.path(),
            r#"
[footer]
next = "${ALBUMS_DOCS_TEST_FOOTER_MISSING}"
"#,
        );

        let err = Config::load(Some(&path), None).unwrap_err();
        assert!(matches!(err, ConfigError::EnvVar { ref field, .. } if field == "footer.next"));
    }
}
