use std::env;
use std::fs;
use std::path::Path;

use env_logger::{Builder, Env, WriteStyle};
use serde::Deserialize;

use crate::bridge::LogBridge;
use crate::error::ConfigError;

/// Environment variable overriding [`LoggingConfig::filter`] in [`LoggingConfig::from_env`].
pub const FILTER_ENV: &str = "LOG_SUPPORT_FILTER";
/// Environment variable overriding [`LoggingConfig::write_style`] in [`LoggingConfig::from_env`].
pub const STYLE_ENV: &str = "LOG_SUPPORT_STYLE";

/// Settings for the global `env_logger` backend.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `env_logger` filter directives, used when `RUST_LOG` is unset.
    pub filter: String,
    /// `auto`, `always` or `never`.
    pub write_style: String,
    pub timestamps: bool,
    /// Target for uncategorised calls made through [`LoggingConfig::bridge`].
    pub default_target: Option<String>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        LoggingConfig {
            filter: "info".to_string(),
            write_style: "auto".to_string(),
            timestamps: true,
            default_target: None,
        }
    }
}

impl LoggingConfig {
    /// Loads the configuration from a JSON file. Missing fields take defaults.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json_str = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&json_str).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Defaults, overridden by `LOG_SUPPORT_FILTER` and `LOG_SUPPORT_STYLE` when set.
    pub fn from_env() -> Self {
        let mut config = LoggingConfig::default();
        if let Ok(filter) = env::var(FILTER_ENV) {
            config.filter = filter;
        }
        if let Ok(style) = env::var(STYLE_ENV) {
            config.write_style = style;
        }
        config
    }

    pub fn parse_write_style(&self) -> Result<WriteStyle, ConfigError> {
        match self.write_style.trim().to_ascii_lowercase().as_str() {
            "auto" => Ok(WriteStyle::Auto),
            "always" => Ok(WriteStyle::Always),
            "never" => Ok(WriteStyle::Never),
            _ => Err(ConfigError::InvalidStyle(self.write_style.clone())),
        }
    }

    /// Builds the `env_logger` backend. `RUST_LOG` and `RUST_LOG_STYLE` take
    /// precedence over the configured values.
    pub fn builder(&self) -> Result<Builder, ConfigError> {
        let style = self.parse_write_style()?;
        let mut builder = Builder::new();
        builder.write_style(style);
        if !self.timestamps {
            builder.format_timestamp(None);
        }
        builder.parse_env(Env::default().default_filter_or(self.filter.as_str()));
        Ok(builder)
    }

    /// Installs the backend as the global logger.
    pub fn init(&self) -> Result<(), ConfigError> {
        self.builder()?.try_init()?;
        log::debug!(target: crate::bridge::DEFAULT_TARGET, "logging initialized with filter '{}'", self.filter);
        Ok(())
    }

    /// A bridge to the global logger using the configured default target.
    pub fn bridge(&self) -> LogBridge<'static> {
        let bridge = LogBridge::new();
        match &self.default_target {
            Some(target) => bridge.with_target(target.clone()),
            None => bridge,
        }
    }
}
