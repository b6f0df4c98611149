//! `docext edit-link` command implementation.

use std::io::Write;
use std::path::PathBuf;

use clap::Args;
use docext_config::{CliSettings, Config};

use crate::error::CliError;

/// Arguments for the edit-link command.
#[derive(Args)]
pub(crate) struct EditLinkArgs {
    /// Page path relative to the docs root (e.g. tutorials/react.md).
    page: String,

    /// Path to configuration file (default: auto-discover docext.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Branch used in the edit link (overrides config).
    #[arg(long, env = "DOCEXT_BRANCH")]
    branch: Option<String>,
}

impl EditLinkArgs {
    /// Execute the edit-link command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration fails or has no `[edit_link]` section.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let cli_settings = CliSettings {
            branch: self.branch,
            ..CliSettings::default()
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;

        let url = config.edit_url(&self.page).ok_or_else(|| {
            CliError::Validation(
                "Edit links are not configured (add an [edit_link] section to docext.toml)"
                    .to_owned(),
            )
        })?;

        writeln!(std::io::stdout().lock(), "{url}")?;
        Ok(())
    }
}
