//! `albums-docs show` command implementation.

use std::io::Write;
use std::path::PathBuf;

use albums_docs_config::{CliSettings, Config, SearchProvider, SiteConfig};
use clap::{Args, ValueEnum};

use crate::error::CliError;

/// Search provider as accepted on the command line.
#[derive(Clone, Copy, Debug, ValueEnum)]
pub(crate) enum SearchArg {
    Local,
    External,
}

impl From<SearchArg> for SearchProvider {
    fn from(arg: SearchArg) -> Self {
        match arg {
            SearchArg::Local => Self::Local,
            SearchArg::External => Self::External,
        }
    }
}

/// Arguments for the show command.
#[derive(Args)]
pub(crate) struct ShowArgs {
    /// Path to configuration file (default: auto-discover albums-docs.toml).
    #[arg(short, long, env = "ALBUMS_DOCS_CONFIG")]
    config: Option<PathBuf>,

    /// Site base path (overrides config).
    #[arg(long)]
    base_path: Option<String>,

    /// Search provider (overrides config).
    #[arg(long, value_enum)]
    search: Option<SearchArg>,

    /// Print JSON on a single line.
    #[arg(long)]
    compact: bool,
}

impl ShowArgs {
    /// Execute the show command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration fails or stdout cannot be written.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let cli_settings = CliSettings {
            base_path: self.base_path,
            search: self.search.map(SearchProvider::from),
            source_dir: None,
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;
        tracing::debug!(config_path = ?config.config_path, "Resolved site configuration");

        let json = render_json(&config.site, self.compact)?;
        let mut stdout = std::io::stdout().lock();
        writeln!(stdout, "{json}")?;
        Ok(())
    }
}

/// Serialize the site configuration for the build tool.
fn render_json(site: &SiteConfig, compact: bool) -> Result<String, serde_json::Error> {
    if compact {
        serde_json::to_string(site)
    } else {
        serde_json::to_string_pretty(site)
    }
}
