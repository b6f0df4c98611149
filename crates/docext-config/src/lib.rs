//! Configuration management for docext.
//!
//! Parses `docext.toml` with serde and discovers it in the current directory
//! or any parent. Settings given on the command line are applied on top via
//! [`CliSettings`].
//!
//! ```toml
//! [docs]
//! source_dir = "docs"
//!
//! [edit_link]
//! repository = "lingui/js-lingui"
//! branch = "${GITHUB_REF_NAME:-main}"
//! path = "website/docs"
//! ```
//!
//! ## Environment Variable Expansion
//!
//! `edit_link.repository`, `edit_link.branch` and `edit_link.host` support
//! `${VAR}` (error if unset) and `${VAR:-default}`.

mod expand;

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// CLI settings that override configuration file values.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override docs source directory.
    pub source_dir: Option<PathBuf>,
    /// Override the branch used in edit links.
    pub branch: Option<String>,
}

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "docext.toml";

/// Application configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Documentation paths as written in TOML.
    docs: DocsConfigRaw,
    /// "Edit on GitHub" links, disabled when the section is absent.
    pub edit_link: Option<EditLinkConfig>,

    /// Resolved docs configuration (set after loading).
    #[serde(skip)]
    pub docs_resolved: DocsConfig,
    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct DocsConfigRaw {
    source_dir: Option<String>,
}

/// Resolved documentation configuration.
#[derive(Debug, Default)]
pub struct DocsConfig {
    /// Directory holding the markdown sources.
    pub source_dir: PathBuf,
}

/// "Edit on GitHub" link configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct EditLinkConfig {
    /// Repository as `owner/name`.
    pub repository: String,
    /// Branch the edit link points at.
    #[serde(default = "default_branch")]
    pub branch: String,
    /// Docs root inside the repository.
    #[serde(default)]
    pub path: String,
    /// Forge base URL.
    #[serde(default = "default_host")]
    pub host: String,
    /// Link text.
    #[serde(default = "default_link_text")]
    pub text: String,
}

fn default_branch() -> String {
    "main".to_owned()
}

fn default_host() -> String {
    "https://github.com".to_owned()
}

fn default_link_text() -> String {
    "Edit on GitHub".to_owned()
}

impl EditLinkConfig {
    /// Minimal configuration with defaults for everything but the repository.
    #[must_use]
    pub fn new(repository: impl Into<String>) -> Self {
        Self {
            repository: repository.into(),
            branch: default_branch(),
            path: String::new(),
            host: default_host(),
            text: default_link_text(),
        }
    }

    /// Edit URL for a page, given its path relative to the docs root.
    ///
    /// ```
    /// use docext_config::EditLinkConfig;
    ///
    /// let mut config = EditLinkConfig::new("lingui/js-lingui");
    /// config.path = "website/docs/".to_owned();
    /// assert_eq!(
    ///     config.url_for("tutorials/react.md"),
    ///     "https://github.com/lingui/js-lingui/edit/main/website/docs/tutorials/react.md"
    /// );
    /// ```
    #[must_use]
    pub fn url_for(&self, page: &str) -> String {
        let host = self.host.trim_end_matches('/');
        let segments = [
            self.repository.as_str(),
            "edit",
            self.branch.as_str(),
            self.path.as_str(),
            page,
        ];

        let mut url = host.to_owned();
        for segment in segments {
            let segment = segment.trim_matches('/');
            if !segment.is_empty() {
                url.push('/');
                url.push_str(segment);
            }
        }
        url
    }

    /// Check that all fields are usable.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` naming the first bad field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        require_non_empty(&self.repository, "edit_link.repository")?;
        let valid_repo = self
            .repository
            .split_once('/')
            .is_some_and(|(owner, name)| {
                !owner.is_empty() && !name.is_empty() && !name.contains('/')
            });
        if !valid_repo {
            return Err(ConfigError::Validation(
                "edit_link.repository must look like owner/name".to_owned(),
            ));
        }
        require_non_empty(&self.branch, "edit_link.branch")?;
        require_http_url(&self.host, "edit_link.host")?;
        Ok(())
    }
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
        /// Config field path (e.g. `edit_link.branch`).
        field: String,
        /// Error message from expansion.
        message: String,
    },
}

fn require_non_empty(value: &str, field: &str) -> Result<(), ConfigError> {
    if value.trim().is_empty() {
        return Err(ConfigError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

fn require_http_url(url: &str, field: &str) -> Result<(), ConfigError> {
    if !url.starts_with("http://") && !url.starts_with("https://") {
        return Err(ConfigError::Validation(format!(
            "{field} must start with http:// or https://"
        )));
    }
    Ok(())
}

impl Config {
    /// Load configuration with optional CLI settings.
    ///
    /// Uses `config_path` if given, otherwise the nearest `docext.toml` in
    /// the current directory or its parents, otherwise defaults.
    ///
    /// # Errors
    ///
    /// Returns error if an explicit `config_path` doesn't exist, or if the
    /// file fails to parse, expand or validate.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) = std::env::current_dir()
            .ok()
            .and_then(|cwd| Self::discover_config(&cwd))
        {
            Self::load_from_file(&discovered)?
        } else {
            tracing::debug!("No {CONFIG_FILENAME} found, using defaults");
            Self::default_with_cwd()
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
        }

        Ok(config)
    }

    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(source_dir) = &settings.source_dir {
            self.docs_resolved.source_dir.clone_from(source_dir);
        }
        if let Some(branch) = &settings.branch
            && let Some(edit_link) = &mut self.edit_link
        {
            edit_link.branch.clone_from(branch);
        }
    }

    /// Search `start` and its parents for a config file.
    fn discover_config(start: &Path) -> Option<PathBuf> {
        start
            .ancestors()
            .map(|dir| dir.join(CONFIG_FILENAME))
            .find(|candidate| candidate.is_file())
    }

    fn default_with_cwd() -> Self {
        let cwd = std::env::current_dir().unwrap_or_default();
        Self::default_with_base(&cwd)
    }

    fn default_with_base(base: &Path) -> Self {
        Self {
            docs_resolved: DocsConfig {
                source_dir: base.join("docs"),
            },
            ..Self::default()
        }
    }

    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        tracing::debug!(path = %path.display(), "Loading configuration");
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;

        config.expand_env_vars()?;

        let config_dir = path.parent().unwrap_or(Path::new("."));
        config.resolve_paths(config_dir);
        config.config_path = Some(path.to_path_buf());

        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any section is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(edit_link) = &self.edit_link {
            edit_link.validate()?;
        }
        Ok(())
    }

    fn expand_env_vars(&mut self) -> Result<(), ConfigError> {
        if let Some(edit_link) = &mut self.edit_link {
            edit_link.repository =
                expand::expand_env(&edit_link.repository, "edit_link.repository")?;
            edit_link.branch = expand::expand_env(&edit_link.branch, "edit_link.branch")?;
            edit_link.host = expand::expand_env(&edit_link.host, "edit_link.host")?;
        }
        Ok(())
    }

    fn resolve_paths(&mut self, config_dir: &Path) {
        self.docs_resolved = DocsConfig {
            source_dir: config_dir.join(self.docs.source_dir.as_deref().unwrap_or("docs")),
        };
    }

    /// Edit URL for a page path relative to the docs root, if edit links are configured.
    #[must_use]
    pub fn edit_url(&self, page: &str) -> Option<String> {
        self.edit_link.as_ref().map(|edit_link| edit_link.url_for(page))
    }
}
