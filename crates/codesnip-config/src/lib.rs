//! Configuration management for codesnip.
//!
//! Parses `codesnip.toml` with serde and discovers the file in the current
//! directory or its parents. [`CliSettings`] override file values after
//! loading.
//!
//! `hosting.base_url` supports `${VAR}` and `${VAR:-default}` expansion.

mod expand;

use std::path::{Path, PathBuf};

use serde::Deserialize;

/// CLI settings that override configuration file values.
///
/// Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override hosting service base URL.
    pub base_url: Option<String>,
    /// Override expand toggle emission.
    pub expand_toggle: Option<bool>,
    /// Override line numbering.
    pub line_numbers: Option<bool>,
}

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "codesnip.toml";

/// Largest accepted `highlight.expand_width`.
const MAX_EXPAND_WIDTH: u32 = 10_000;

/// Application configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Source hosting service.
    pub hosting: HostingConfig,
    /// Built-in highlighter settings.
    pub highlight: HighlightConfig,
    /// Tag names exposed to templates.
    pub tags: TagsConfig,

    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

/// Source hosting service configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct HostingConfig {
    /// Prefix joined with link suffixes, always ending with `/` after loading.
    pub base_url: String,
}

impl Default for HostingConfig {
    fn default() -> Self {
        Self {
            base_url: "https://github.com/".to_owned(),
        }
    }
}

/// Built-in highlighter configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct HighlightConfig {
    /// Emit the expand toggle in every block.
    pub expand_toggle: bool,
    /// Width in pixels of an expanded block.
    pub expand_width: u32,
    /// Number lines in every block.
    pub line_numbers: bool,
    /// Syntax color theme, one of the themes bundled with syntect.
    pub theme: String,
}

impl Default for HighlightConfig {
    fn default() -> Self {
        Self {
            expand_toggle: true,
            expand_width: 1000,
            line_numbers: false,
            theme: "InspiredGitHub".to_owned(),
        }
    }
}

/// Tag name configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct TagsConfig {
    /// Name of the snippet block tag.
    pub snippet: String,
    /// Name of the line-range link tag.
    pub link: String,
}

impl Default for TagsConfig {
    fn default() -> Self {
        Self {
            snippet: "codesnippet".to_owned(),
            link: "code_from_github".to_owned(),
        }
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
        /// Config field path (e.g., "`hosting.base_url`").
        field: String,
        /// Error message (e.g., "${`GIT_HOST`} not set").
        message: String,
    },
}

/// Require a string field to be non-empty.
fn require_non_empty(value: &str, field: &str) -> Result<(), ConfigError> {
    if value.is_empty() {
        return Err(ConfigError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

/// Require a URL field to use http:// or https:// scheme.
fn require_http_url(url: &str, field: &str) -> Result<(), ConfigError> {
    if !url.starts_with("http://") && !url.starts_with("https://") {
        return Err(ConfigError::Validation(format!(
            "{field} must start with http:// or https://"
        )));
    }
    Ok(())
}

/// Require a tag name usable in template markup.
fn require_tag_name(name: &str, field: &str) -> Result<(), ConfigError> {
    require_non_empty(name, field)?;
    if !name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-') {
        return Err(ConfigError::Validation(format!(
            "{field} may only contain letters, digits, '_' and '-'"
        )));
    }
    Ok(())
}

/// Append the `/` separating the base URL from link suffixes.
fn with_trailing_slash(url: &str) -> String {
    if url.is_empty() || url.ends_with('/') {
        url.to_owned()
    } else {
        format!("{url}/")
    }
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file. Otherwise searches
    /// for `codesnip.toml` in the current directory and its parents, falling
    /// back to defaults.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist, parsing fails,
    /// or the final configuration is invalid.
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
            .and_then(|cwd| Self::discover_from(&cwd))
        {
            Self::load_from_file(&discovered)?
        } else {
            Self::default()
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
        }
        config.validate()?;

        Ok(config)
    }

    /// Apply CLI settings to the configuration.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(base_url) = &settings.base_url {
            self.hosting.base_url = with_trailing_slash(base_url);
        }
        if let Some(expand_toggle) = settings.expand_toggle {
            self.highlight.expand_toggle = expand_toggle;
        }
        if let Some(line_numbers) = settings.line_numbers {
            self.highlight.line_numbers = line_numbers;
        }
    }

    /// Search for the config file in `start` and its parents.
    fn discover_from(start: &Path) -> Option<PathBuf> {
        let mut current = start.to_path_buf();
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

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;

        config.hosting.base_url = with_trailing_slash(&expand::expand_env(
            &config.hosting.base_url,
            "hosting.base_url",
        )?);
        config.config_path = Some(path.to_path_buf());

        config.validate()?;

        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.validate_hosting()?;
        self.validate_highlight()?;
        self.validate_tags()?;
        Ok(())
    }

    fn validate_hosting(&self) -> Result<(), ConfigError> {
        require_non_empty(&self.hosting.base_url, "hosting.base_url")?;
        require_http_url(&self.hosting.base_url, "hosting.base_url")?;
        Ok(())
    }

    fn validate_highlight(&self) -> Result<(), ConfigError> {
        let width = self.highlight.expand_width;
        if width == 0 {
            return Err(ConfigError::Validation(
                "highlight.expand_width must be greater than 0".to_owned(),
            ));
        }
        if width > MAX_EXPAND_WIDTH {
            return Err(ConfigError::Validation(format!(
                "highlight.expand_width cannot exceed {MAX_EXPAND_WIDTH}"
            )));
        }
        require_non_empty(&self.highlight.theme, "highlight.theme")?;
        Ok(())
    }

    fn validate_tags(&self) -> Result<(), ConfigError> {
        require_tag_name(&self.tags.snippet, "tags.snippet")?;
        require_tag_name(&self.tags.link, "tags.link")?;
        if self.tags.snippet == self.tags.link {
            return Err(ConfigError::Validation(
                "tags.snippet and tags.link must differ".to_owned(),
            ));
        }
        Ok(())
    }
}
