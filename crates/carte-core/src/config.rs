use anyhow::Result;
use config::{Config, FileFormat};
use serde::Deserialize;

use crate::constants::{
    CONFIG_FILE_NAME, DEFAULT_FETCH_MAX_BYTES, DEFAULT_FETCH_TIMEOUT_SECS, DEFAULT_LINE_WIDTH,
    DEFAULT_LOG_LEVEL, DEFAULT_USER_AGENT, MIN_LINE_WIDTH,
};
use crate::error::{CoreError, CoreResult};

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    pub render: RenderConfig,
    pub fetch: FetchConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RenderConfig {
    /// Folding limit in octets, continuation space included.
    pub line_width: usize,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            line_width: DEFAULT_LINE_WIDTH,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct FetchConfig {
    pub timeout_secs: u64,
    pub max_bytes: u64,
    pub user_agent: String,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            timeout_secs: DEFAULT_FETCH_TIMEOUT_SECS,
            max_bytes: DEFAULT_FETCH_MAX_BYTES,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

impl Settings {
    /// ## Summary
    /// Loads configuration from environment variables and an optional `carte.toml`.
    /// Environment variables (`CARTE_RENDER__LINE_WIDTH`, ...) take precedence.
    ///
    /// ## Errors
    /// Returns an error if building the configuration, deserializing it, or
    /// validating the result fails.
    pub fn load() -> Result<Self> {
        let settings = Self::builder()?
            .add_source(config::File::with_name(CONFIG_FILE_NAME).required(false))
            .add_source(
                config::Environment::with_prefix("CARTE")
                    .prefix_separator("_")
                    .separator("__")
                    .ignore_empty(true)
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize::<Settings>()?;

        settings.validate()?;
        Ok(settings)
    }

    /// ## Summary
    /// Builds settings from an in-memory TOML document layered over the defaults.
    ///
    /// ## Errors
    /// Returns an error if the document is malformed or fails validation.
    pub fn from_toml_str(document: &str) -> Result<Self> {
        let settings = Self::builder()?
            .add_source(config::File::from_str(document, FileFormat::Toml))
            .build()?
            .try_deserialize::<Settings>()?;

        settings.validate()?;
        Ok(settings)
    }

    fn builder() -> Result<config::ConfigBuilder<config::builder::DefaultState>> {
        Ok(Config::builder()
            .set_default("render.line_width", DEFAULT_LINE_WIDTH as u64)?
            .set_default("fetch.timeout_secs", DEFAULT_FETCH_TIMEOUT_SECS)?
            .set_default("fetch.max_bytes", DEFAULT_FETCH_MAX_BYTES)?
            .set_default("fetch.user_agent", DEFAULT_USER_AGENT)?
            .set_default("logging.level", DEFAULT_LOG_LEVEL)?)
    }

    /// ## Summary
    /// Checks values the deserializer cannot constrain on its own.
    ///
    /// ## Errors
    /// Returns `CoreError::ConfigError` for a line width too small to fold into
    /// or a zero fetch timeout.
    pub fn validate(&self) -> CoreResult<()> {
        if self.render.line_width < MIN_LINE_WIDTH {
            return Err(CoreError::ConfigError(format!(
                "render.line_width must be at least {MIN_LINE_WIDTH}, got {}",
                self.render.line_width
            )));
        }
        if self.fetch.timeout_secs == 0 {
            return Err(CoreError::ConfigError(
                "fetch.timeout_secs must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}

/// ## Summary
/// Loads configuration from the environment, a `.env` file and `carte.toml`.
///
/// ## Errors
/// Returns an error if loading or deserializing the configuration fails.
pub fn load_config() -> Result<Settings> {
    dotenvy::dotenv().ok();

    Settings::load()
}
