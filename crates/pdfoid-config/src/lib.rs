//! Configuration management for the pdfoid client suite.
//!
//! Parses `pdfoid.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories.
//!
//! CLI settings can be applied during load via [`CliSettings`].
//!
//! ## Environment Variable Expansion
//!
//! String configuration values support environment variable expansion:
//!
//! - `${VAR}` - expands to the value of VAR, errors if unset
//! - `${VAR:-default}` - expands to VAR if set, otherwise uses default
//!
//! Expanded fields:
//! - `renderer.url`

mod expand;

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "pdfoid.toml";

/// Default overall HTTP request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Default wait duration for the render-readiness condition in seconds.
const DEFAULT_WAIT_SECS: u64 = 15;

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override the renderer service URL.
    pub url: Option<String>,
    /// Override the HTTP request timeout in seconds.
    pub timeout_secs: Option<u64>,
}

/// Application configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Renderer configuration (optional section).
    renderer: Option<RendererConfigRaw>,

    /// Resolved renderer configuration (set after loading).
    #[serde(skip)]
    pub renderer_resolved: RendererConfig,
    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

/// Raw renderer configuration as parsed from TOML.
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct RendererConfigRaw {
    url: Option<String>,
    timeout_secs: Option<u64>,
    wait_secs: Option<u64>,
}

/// Resolved renderer configuration.
///
/// Immutable after loading; injected into the rendering gateway rather
/// than read from ambient state so the gateway stays testable in isolation.
#[derive(Debug, Clone)]
pub struct RendererConfig {
    /// Renderer service URL. `None` disables PDF rendering entirely.
    pub url: Option<String>,
    /// Overall HTTP request timeout.
    pub timeout: Duration,
    /// How long the renderer waits for the readiness condition.
    pub wait: Duration,
}

impl Default for RendererConfig {
    fn default() -> Self {
        Self {
            url: None,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            wait: Duration::from_secs(DEFAULT_WAIT_SECS),
        }
    }
}

impl RendererConfig {
    /// Whether the rendering service is configured.
    ///
    /// Callers must check this before offering PDF output; when false,
    /// render calls fail without performing any network I/O.
    #[must_use]
    pub fn enabled(&self) -> bool {
        self.url.is_some()
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
        /// Config field path (e.g., "`renderer.url`").
        field: String,
        /// Error message (e.g., "${`PDFOID_URL`} not set").
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

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `pdfoid.toml` in current directory and parents.
    /// A missing discovered file is not an error; rendering is simply
    /// disabled until a URL is supplied.
    ///
    /// CLI settings are applied after loading and resolution, allowing CLI
    /// arguments to take precedence over config file values.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist, parsing fails,
    /// or the loaded values fail validation.
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
            Self::load_from_file(&discovered)?
        } else {
            Self::default()
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings)?;
        }

        Ok(config)
    }

    /// Apply CLI settings to the configuration.
    ///
    /// Re-validates afterwards since overrides may introduce invalid values.
    fn apply_cli_settings(&mut self, settings: &CliSettings) -> Result<(), ConfigError> {
        if let Some(url) = &settings.url {
            self.renderer_resolved.url = Some(url.clone());
        }
        if let Some(timeout_secs) = settings.timeout_secs {
            self.renderer_resolved.timeout = Duration::from_secs(timeout_secs);
        }
        self.validate()
    }

    /// Search for config file in current directory and parents.
    fn discover_config() -> Option<PathBuf> {
        let start = std::env::current_dir().ok()?;
        Self::discover_config_from(&start)
    }

    /// Search for config file in `start` and each of its parents.
    fn discover_config_from(start: &Path) -> Option<PathBuf> {
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

        // Expand environment variables before resolution
        config.expand_env_vars()?;

        config.resolve();
        config.config_path = Some(path.to_path_buf());

        // Validate configuration after loading and resolution
        config.validate()?;

        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// Checks that all fields are properly set and contain valid values.
    /// Called automatically after loading from file.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(ref url) = self.renderer_resolved.url {
            require_non_empty(url, "renderer.url")?;
            require_http_url(url, "renderer.url")?;
        }

        if self.renderer_resolved.timeout.is_zero() {
            return Err(ConfigError::Validation(
                "renderer.timeout_secs must be greater than 0".to_owned(),
            ));
        }
        if self.renderer_resolved.wait.is_zero() {
            return Err(ConfigError::Validation(
                "renderer.wait_secs must be greater than 0".to_owned(),
            ));
        }

        Ok(())
    }

    /// Expand environment variable references in configuration strings.
    fn expand_env_vars(&mut self) -> Result<(), ConfigError> {
        if let Some(ref mut renderer) = self.renderer
            && let Some(ref url) = renderer.url
        {
            renderer.url = Some(expand::expand_env(url, "renderer.url")?);
        }

        Ok(())
    }

    /// Resolve the raw `[renderer]` section into [`RendererConfig`].
    fn resolve(&mut self) {
        self.renderer_resolved = match &self.renderer {
            Some(renderer) => RendererConfig {
                url: renderer.url.clone(),
                timeout: Duration::from_secs(
                    renderer.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS),
                ),
                wait: Duration::from_secs(renderer.wait_secs.unwrap_or(DEFAULT_WAIT_SECS)),
            },
            None => RendererConfig::default(),
        };
    }
}
