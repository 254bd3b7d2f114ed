//! Portal configuration loader for the EA Portal CLI
//!
//! Implements single-source priority loading with flag overrides:
//! 1. --config file/dir (highest priority)
//! 2. Current working directory: ./ea-portal.json or ./.ea-portal/config.json
//! 3. Git repository root: <repo_root>/.ea-portal/config.json
//! 4. XDG config: $XDG_CONFIG_HOME/ea-portal/config.json
//! 5. Environment variables only (no files)
//!
//! URL fields missing from the chosen source fall back to the deployment
//! environment (`UI_URL_PREFIX`, `DMS_URL`, `WIKI_URL`).

use anyhow::{anyhow, Context, Result};
use ea_portal_core::config::{parse_url, Branding};
use ea_portal_core::{ConfigError, PortalConfig};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Environment variable for the UI URL prefix
pub const UI_URL_PREFIX_ENV: &str = "UI_URL_PREFIX";
/// Environment variable for the DMS endpoint
pub const DMS_URL_ENV: &str = "DMS_URL";
/// Environment variable for the wiki endpoint
pub const WIKI_URL_ENV: &str = "WIKI_URL";

/// Raw configuration file format (simple single-file schema)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawConfig {
    /// Prefix in-app paths are served under (can be "env:VAR_NAME")
    pub ui_url_prefix: Option<String>,
    /// Document-management system endpoint
    pub dms_url: Option<String>,
    /// Wiki endpoint
    pub wiki_url: Option<String>,
    /// Header title override
    pub title: Option<String>,
    /// Header subtitle override
    pub subtitle: Option<String>,
}

/// CLI configuration loader
pub struct PortalConfigLoader {
    /// Override config file/directory path
    config_override: Option<PathBuf>,
    /// Flag overrides
    ui_url_prefix_override: Option<String>,
    dms_url_override: Option<String>,
    wiki_url_override: Option<String>,
}

impl PortalConfigLoader {
    /// Create a new loader
    pub fn new() -> Self {
        Self {
            config_override: None,
            ui_url_prefix_override: None,
            dms_url_override: None,
            wiki_url_override: None,
        }
    }

    /// Set config file/directory override
    pub fn with_config_override(mut self, path: PathBuf) -> Self {
        self.config_override = Some(path);
        self
    }

    /// Set UI URL prefix override
    pub fn with_ui_url_prefix_override(mut self, prefix: String) -> Self {
        self.ui_url_prefix_override = Some(prefix);
        self
    }

    /// Set DMS URL override
    pub fn with_dms_url_override(mut self, url: String) -> Self {
        self.dms_url_override = Some(url);
        self
    }

    /// Set wiki URL override
    pub fn with_wiki_url_override(mut self, url: String) -> Self {
        self.wiki_url_override = Some(url);
        self
    }

    /// Load and resolve configuration
    pub async fn load(&self) -> Result<PortalConfig> {
        // Step 1: Find and load base configuration
        let mut config = if let Some(override_path) = &self.config_override {
            let path = expand_path(override_path)?;
            self.load_from_path(&path).await.with_context(|| {
                format!(
                    "Failed to load config from override path: {}",
                    path.display()
                )
            })?
        } else {
            self.search_and_load().await?
        };

        // Step 2: Apply flag overrides
        self.apply_overrides(&mut config);

        // Step 3: Resolve to final portal config
        resolve_config(config, |name| std::env::var(name).ok())
    }

    fn apply_overrides(&self, config: &mut RawConfig) {
        if let Some(prefix) = &self.ui_url_prefix_override {
            config.ui_url_prefix = Some(prefix.clone());
        }
        if let Some(dms_url) = &self.dms_url_override {
            config.dms_url = Some(dms_url.clone());
        }
        if let Some(wiki_url) = &self.wiki_url_override {
            config.wiki_url = Some(wiki_url.clone());
        }
    }

    /// Search for config in priority order
    async fn search_and_load(&self) -> Result<RawConfig> {
        // 1. Current working directory
        if let Some(config) = self.try_load_cwd().await? {
            return Ok(config);
        }

        // 2. Git repository root
        if let Some(config) = self.try_load_git_root().await? {
            return Ok(config);
        }

        // 3. XDG config directory
        if let Some(config) = self.try_load_xdg().await? {
            return Ok(config);
        }

        // 4. Environment variables only
        debug!("No config file found, using environment only");
        Ok(RawConfig::default())
    }

    /// Try loading from current working directory
    async fn try_load_cwd(&self) -> Result<Option<RawConfig>> {
        let cwd = std::env::current_dir()?;

        // Try ./ea-portal.json first
        let portal_json = cwd.join("ea-portal.json");
        if portal_json.exists() {
            return Ok(Some(self.load_file(&portal_json).await?));
        }

        // Try ./.ea-portal/config.json
        let portal_dir_config = cwd.join(".ea-portal").join("config.json");
        if portal_dir_config.exists() {
            return Ok(Some(self.load_file(&portal_dir_config).await?));
        }

        Ok(None)
    }

    /// Try loading from git repository root
    async fn try_load_git_root(&self) -> Result<Option<RawConfig>> {
        if let Some(git_root) = find_git_root(&std::env::current_dir()?) {
            let config_path = git_root.join(".ea-portal").join("config.json");
            if config_path.exists() {
                return Ok(Some(self.load_file(&config_path).await?));
            }
        }
        Ok(None)
    }

    /// Try loading from XDG config directory
    async fn try_load_xdg(&self) -> Result<Option<RawConfig>> {
        if let Some(config_dir) = dirs::config_dir() {
            let config_path = config_dir.join("ea-portal").join("config.json");
            if config_path.exists() {
                return Ok(Some(self.load_file(&config_path).await?));
            }
        }
        Ok(None)
    }

    /// Load configuration from a specific path (file or directory)
    async fn load_from_path(&self, path: &Path) -> Result<RawConfig> {
        if path.is_file() {
            self.load_file(path).await
        } else if path.is_dir() {
            // Try config.json in the directory
            let config_file = path.join("config.json");
            if config_file.exists() {
                self.load_file(&config_file).await
            } else {
                Err(anyhow!(
                    "No config.json found in directory: {}",
                    path.display()
                ))
            }
        } else {
            Err(ConfigError::FileNotFound {
                path: path.display().to_string(),
            }
            .into())
        }
    }

    /// Load a single config file
    async fn load_file(&self, path: &Path) -> Result<RawConfig> {
        debug!(path = %path.display(), "Loading portal config");

        let content = tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }
}

impl Default for PortalConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

/// Expand `~` and `$VAR` in a user-supplied path
fn expand_path(path: &Path) -> Result<PathBuf> {
    let raw = path.to_string_lossy();
    let expanded = shellexpand::full(&raw)
        .with_context(|| format!("Failed to expand path: {}", raw))?;
    Ok(PathBuf::from(expanded.into_owned()))
}

/// Walk up from `start` to the first directory holding `.git`
fn find_git_root(start: &Path) -> Option<PathBuf> {
    start
        .ancestors()
        .find(|dir| dir.join(".git").exists())
        .map(Path::to_path_buf)
}

/// Resolve raw config to a validated [`PortalConfig`]
///
/// `env` looks up environment variables; it backs both `env:NAME` values
/// and the fallback for missing URL fields.
pub fn resolve_config(
    config: RawConfig,
    env: impl Fn(&str) -> Option<String>,
) -> Result<PortalConfig> {
    let field = |name: &str, value: Option<String>, fallback_var: &str| -> Result<String> {
        let value = match value {
            Some(value) => value,
            None => env(fallback_var).ok_or_else(|| ConfigError::MissingField {
                field: format!("{} (or ${})", name, fallback_var),
            })?,
        };

        // Resolve env: indirection
        match value.strip_prefix("env:") {
            Some(var_name) => env(var_name)
                .with_context(|| format!("Environment variable not found: {}", var_name)),
            None => Ok(value),
        }
    };

    let ui_url_prefix = field("ui_url_prefix", config.ui_url_prefix, UI_URL_PREFIX_ENV)?;
    let dms_url = field("dms_url", config.dms_url, DMS_URL_ENV)?;
    let wiki_url = field("wiki_url", config.wiki_url, WIKI_URL_ENV)?;

    let defaults = Branding::default();
    let branding = Branding {
        title: config.title.unwrap_or(defaults.title),
        subtitle: config.subtitle.unwrap_or(defaults.subtitle),
    };

    let resolved = PortalConfig::new(
        parse_url("ui_url_prefix", &ui_url_prefix)?,
        parse_url("dms_url", &dms_url)?,
        parse_url("wiki_url", &wiki_url)?,
    )
    .with_branding(branding);

    // Validate
    resolved
        .validate()
        .map_err(|e| anyhow!("Configuration validation failed: {}", e))?;

    Ok(resolved)
}
