//! Builder-style configuration loader.
//!
//! Precedence: programmatic `with_*` overrides, then environment
//! variables, then defaults. `from_env` only fills values that are still
//! unset, so callers may apply overrides before or after it.

use std::env;

use thiserror::Error;

use crate::types::{Config, PageConfig};

/// Environment variable names recognized by the loader.
const ENV_PORT: &str = "JMERGE_PORT";
const ENV_MAX_UPLOAD_BYTES: &str = "JMERGE_MAX_UPLOAD_BYTES";
const ENV_PAGE_TITLE: &str = "JMERGE_PAGE_TITLE";
const ENV_PAGE_TAGLINE: &str = "JMERGE_PAGE_TAGLINE";

/// Errors raised while loading configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// An environment variable held a value that does not parse.
    #[error("Invalid value for {var}: {value}")]
    InvalidValue { var: String, value: String },

    /// Reading a `.env` file failed for a reason other than absence.
    #[error("Failed to load .env file: {0}")]
    Dotenv(#[from] dotenvy::Error),
}

/// Builder for [`Config`].
#[derive(Debug, Default)]
pub struct ConfigLoader {
    port: Option<u16>,
    max_upload_bytes: Option<usize>,
    page_title: Option<String>,
    page_tagline: Option<String>,
}

impl ConfigLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a `.env` file into the process environment if one exists.
    ///
    /// A missing file is not an error; call this before `from_env`.
    pub fn load_dotenv(&self) -> Result<(), ConfigError> {
        match dotenvy::dotenv() {
            Ok(path) => {
                tracing::debug!(path = %path.display(), "loaded .env file");
                Ok(())
            }
            Err(err) if err.not_found() => Ok(()),
            Err(err) => Err(err.into()),
        }
    }

    /// Fill unset values from `JMERGE_*` environment variables.
    pub fn from_env(mut self) -> Result<Self, ConfigError> {
        if self.port.is_none() {
            if let Some(raw) = read_env(ENV_PORT) {
                self.port = Some(parse_env(ENV_PORT, &raw)?);
            }
        }
        if self.max_upload_bytes.is_none() {
            if let Some(raw) = read_env(ENV_MAX_UPLOAD_BYTES) {
                self.max_upload_bytes = Some(parse_env(ENV_MAX_UPLOAD_BYTES, &raw)?);
            }
        }
        if self.page_title.is_none() {
            self.page_title = read_env(ENV_PAGE_TITLE);
        }
        if self.page_tagline.is_none() {
            self.page_tagline = read_env(ENV_PAGE_TAGLINE);
        }
        Ok(self)
    }

    pub fn with_port(mut self, port: u16) -> Self {
        self.port = Some(port);
        self
    }

    pub fn with_max_upload_bytes(mut self, bytes: usize) -> Self {
        self.max_upload_bytes = Some(bytes);
        self
    }

    pub fn with_page_title(mut self, title: impl Into<String>) -> Self {
        self.page_title = Some(title.into());
        self
    }

    pub fn with_page_tagline(mut self, tagline: impl Into<String>) -> Self {
        self.page_tagline = Some(tagline.into());
        self
    }

    /// Resolve the final configuration, applying defaults for anything
    /// still unset.
    pub fn build(self) -> Config {
        let defaults = Config::default();
        let page_defaults = PageConfig::default();
        Config {
            port: self.port.unwrap_or(defaults.port),
            max_upload_bytes: self.max_upload_bytes.unwrap_or(defaults.max_upload_bytes),
            page: PageConfig {
                title: self.page_title.unwrap_or(page_defaults.title),
                tagline: self.page_tagline.unwrap_or(page_defaults.tagline),
            },
        }
    }
}

/// Read an environment variable, treating blank values as unset.
fn read_env(var: &str) -> Option<String> {
    env::var(var).ok().filter(|v| !v.trim().is_empty())
}

fn parse_env<T: std::str::FromStr>(var: &str, raw: &str) -> Result<T, ConfigError> {
    raw.trim().parse().map_err(|_| ConfigError::InvalidValue {
        var: var.to_string(),
        value: raw.to_string(),
    })
}
