//! `docext render` command implementation.

use std::io::Write;
use std::path::{Path, PathBuf};

use clap::Args;
use docext_config::{CliSettings, Config};
use docext_render::PageRenderer;

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the render command.
#[derive(Args)]
pub(crate) struct RenderArgs {
    /// Markdown file to render.
    file: PathBuf,

    /// Write HTML to this file instead of stdout.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Path to configuration file (default: auto-discover docext.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Documentation source directory (overrides config).
    #[arg(short, long)]
    source_dir: Option<PathBuf>,

    /// Page path relative to the docs root (default: derived from FILE).
    #[arg(long)]
    page: Option<PathBuf>,

    /// Branch used in the edit link (overrides config).
    #[arg(long, env = "DOCEXT_BRANCH")]
    branch: Option<String>,

    /// Fail if any directive reports a warning.
    #[arg(long)]
    strict: bool,

    /// Enable verbose output.
    #[arg(short, long)]
    pub verbose: bool,
}

impl RenderArgs {
    /// Execute the render command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration fails, the page cannot be read or
    /// written, or `--strict` is set and warnings were reported.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let cli_settings = CliSettings {
            source_dir: self.source_dir,
            branch: self.branch,
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;

        let markdown = std::fs::read_to_string(&self.file).map_err(|source| CliError::Read {
            path: self.file.clone(),
            source,
        })?;

        let page = match self.page {
            Some(page) => Some(page),
            None => page_path(&self.file, &config.docs_resolved.source_dir)?,
        };
        tracing::debug!(file = %self.file.display(), page = ?page, "Rendering");

        let result = PageRenderer::from_config(&config).render(&markdown, page.as_deref());

        match &self.output {
            Some(path) => {
                std::fs::write(path, &result.html)?;
                output.rendered(&self.file, path);
            }
            None => std::io::stdout().lock().write_all(result.html.as_bytes())?,
        }

        for warning in &result.warnings {
            output.directive_warning(warning);
        }
        output.warning_summary(result.warnings.len(), self.strict);

        if self.strict && !result.warnings.is_empty() {
            return Err(CliError::Strict(result.warnings.len()));
        }
        Ok(())
    }
}

/// Path of `file` relative to `source_dir`, if it lives there.
fn page_path(file: &Path, source_dir: &Path) -> Result<Option<PathBuf>, CliError> {
    let file = std::path::absolute(file)?;
    let source_dir = std::path::absolute(source_dir)?;
    Ok(file
        .strip_prefix(&source_dir)
        .ok()
        .map(Path::to_path_buf))
}
