//! Configuration management using Figment
//!
//! Configuration is loaded from multiple sources with the following
//! precedence (highest to lowest):
//! 1. Environment variables (prefix: `MANILA_`)
//! 2. Current working directory: `./manila.toml`
//! 3. Default values
//!
//! The configuration is read once at startup and shared read-only from then
//! on; nothing in this crate mutates it per request.

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

use crate::{
    error::Result,
    pagination::{DEFAULT_PAGE, DEFAULT_SIZE},
    sorting::DEFAULT_SORT_DELIMITER,
};

/// Boundary configuration
///
/// # Example
///
/// ```rust
/// use manila::config::WebConfig;
///
/// let config = WebConfig::default();
/// assert_eq!(config.default_page, 1);
/// assert_eq!(config.default_size, 10);
/// assert_eq!(config.sort_delimiter, ',');
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebConfig {
    /// Page number used when a request carries none
    #[serde(default = "default_page")]
    pub default_page: u32,

    /// Page size used when a request carries none
    #[serde(default = "default_size")]
    pub default_size: u32,

    /// Delimiter between the field and direction segments of a sort spec
    #[serde(default = "default_sort_delimiter")]
    pub sort_delimiter: char,

    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for WebConfig {
    fn default() -> Self {
        Self {
            default_page: default_page(),
            default_size: default_size(),
            sort_delimiter: default_sort_delimiter(),
            log_level: default_log_level(),
        }
    }
}

impl WebConfig {
    /// Load configuration from defaults, `manila.toml` and `MANILA_`
    /// environment variables.
    ///
    /// # Errors
    ///
    /// Returns a configuration error when a source holds values that do not
    /// deserialize into the expected shape.
    pub fn load() -> Result<Self> {
        let config = Figment::from(Serialized::defaults(Self::default()))
            .merge(Toml::file("manila.toml"))
            .merge(Env::prefixed("MANILA_"))
            .extract()?;

        Ok(config)
    }
}

fn default_page() -> u32 {
    DEFAULT_PAGE
}

fn default_size() -> u32 {
    DEFAULT_SIZE
}

fn default_sort_delimiter() -> char {
    DEFAULT_SORT_DELIMITER
}

fn default_log_level() -> String {
    "info".to_string()
}
