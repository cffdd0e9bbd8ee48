//! `albums-docs check` command implementation.

use std::path::PathBuf;

use albums_docs_config::{BrokenLink, CliSettings, Config, check_links};
use clap::Args;

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the check command.
#[derive(Args)]
pub(crate) struct CheckArgs {
    /// Path to configuration file (default: auto-discover albums-docs.toml).
    #[arg(short, long, env = "ALBUMS_DOCS_CONFIG")]
    config: Option<PathBuf>,

    /// Markdown source directory (overrides config).
    #[arg(short, long)]
    source_dir: Option<PathBuf>,

    /// Enable verbose output.
    #[arg(short, long)]
    pub verbose: bool,
}

impl CheckArgs {
    /// Execute the check command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration fails, the source directory is
    /// missing, or any link is broken.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let cli_settings = CliSettings {
            source_dir: self.source_dir,
            ..Default::default()
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;

        output.info(&format!(
            "Source directory: {}",
            config.source_dir.display()
        ));

        let broken = check_links(&config.site, &config.source_dir)?;
        report(&output, &broken)
    }
}

/// Print broken links and turn them into the command result.
fn report(output: &Output, broken: &[BrokenLink]) -> Result<(), CliError> {
    if broken.is_empty() {
        output.success("All links resolve");
        return Ok(());
    }

    output.highlight("Broken links:");
    for link in broken {
        output.error(&format!("  {link}"));
    }
    Err(CliError::BrokenLinks {
        count: broken.len(),
    })
}
