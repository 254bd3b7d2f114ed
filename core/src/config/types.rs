//! Portal configuration types
//!
//! Core only accepts fully resolved, validated configuration.
//! All discovery, loading, and merging happens in CLI layer.

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use url::Url;

/// Default header title
pub const DEFAULT_TITLE: &str = "Government of Grenada";

/// Default header subtitle
pub const DEFAULT_SUBTITLE: &str = "EA Portal";

/// Header branding text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Branding {
    pub title: String,
    pub subtitle: String,
}

impl Default for Branding {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            subtitle: DEFAULT_SUBTITLE.to_string(),
        }
    }
}

/// A fully resolved portal configuration, built once at start-up
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PortalConfig {
    /// Prefix under which in-app paths are addressable
    pub ui_url_prefix: Url,
    /// Document-management system ("Repository (DMS)") endpoint
    pub dms_url: Url,
    /// Wiki endpoint
    pub wiki_url: Url,
    /// Header branding
    #[serde(default)]
    pub branding: Branding,
}

impl PortalConfig {
    /// Create a new portal config with default branding
    pub fn new(ui_url_prefix: Url, dms_url: Url, wiki_url: Url) -> Self {
        Self {
            ui_url_prefix,
            dms_url,
            wiki_url,
            branding: Branding::default(),
        }
    }

    /// Parse the three URLs and build a config
    pub fn parse(ui_url_prefix: &str, dms_url: &str, wiki_url: &str) -> Result<Self, ConfigError> {
        let config = Self::new(
            parse_url("ui_url_prefix", ui_url_prefix)?,
            parse_url("dms_url", dms_url)?,
            parse_url("wiki_url", wiki_url)?,
        );
        config.validate()?;
        Ok(config)
    }

    /// Set the header branding
    pub fn with_branding(mut self, branding: Branding) -> Self {
        self.branding = branding;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, url) in [
            ("ui_url_prefix", &self.ui_url_prefix),
            ("dms_url", &self.dms_url),
            ("wiki_url", &self.wiki_url),
        ] {
            if url.scheme() != "http" && url.scheme() != "https" {
                return Err(ConfigError::InvalidValue {
                    field: field.to_string(),
                    value: format!("{} (URL must start with http:// or https://)", url),
                });
            }
            if url.host_str().is_none() {
                return Err(ConfigError::InvalidValue {
                    field: field.to_string(),
                    value: format!("{} (URL has no host)", url),
                });
            }
        }

        if self.ui_url_prefix.query().is_some() || self.ui_url_prefix.fragment().is_some() {
            return Err(ConfigError::InvalidValue {
                field: "ui_url_prefix".to_string(),
                value: format!("{} (prefix cannot carry a query or fragment)", self.ui_url_prefix),
            });
        }

        if self.branding.title.trim().is_empty() {
            return Err(ConfigError::MissingField {
                field: "title".to_string(),
            });
        }

        Ok(())
    }
}

/// Parse a configured URL, naming the field on failure
pub fn parse_url(field: &str, value: &str) -> Result<Url, ConfigError> {
    Url::parse(value.trim()).map_err(|e| ConfigError::InvalidValue {
        field: field.to_string(),
        value: format!("{} ({})", value, e),
    })
}
