//! Route resolution commands

use crate::config::PortalConfigLoader;
use anyhow::{Context, Result};
use ea_portal_core::{Linking, RouteRegistry};
use tracing::debug;

/// How a resolve target is interpreted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolveTarget {
    /// `/about`
    Path,
    /// `https://portal.gov.gd/about`
    Url,
    /// `AboutScreen`
    Name,
}

impl ResolveTarget {
    pub fn classify(target: &str) -> Self {
        if target.starts_with('/') {
            ResolveTarget::Path
        } else if target.contains("://") {
            ResolveTarget::Url
        } else {
            ResolveTarget::Name
        }
    }
}

/// Print the screen for a path or URL, or the path for a screen name
pub async fn resolve_command(target: String, config_loader: PortalConfigLoader) -> Result<()> {
    let registry = RouteRegistry::portal()?;
    let kind = ResolveTarget::classify(&target);
    debug!(target = %target, ?kind, "Resolving route");

    let resolved = match kind {
        ResolveTarget::Path => registry.resolve_screen(&target)?.to_string(),
        ResolveTarget::Name => registry.resolve_path(&target)?.to_string(),
        ResolveTarget::Url => {
            let config = config_loader
                .load()
                .await
                .context("Resolving a full URL needs the UI URL prefix")?;
            Linking::from_config(&config)
                .screen_for_url(&registry, &target)?
                .name
                .clone()
        }
    };

    println!("{}", resolved);
    Ok(())
}

/// Print the full URL of a screen
pub async fn href_command(screen: String, config_loader: PortalConfigLoader) -> Result<()> {
    let registry = RouteRegistry::portal()?;
    let config = config_loader.load().await?;
    let url = Linking::from_config(&config).url_for_screen(&registry, &screen)?;

    println!("{}", url);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify() {
        assert_eq!(ResolveTarget::classify("/about"), ResolveTarget::Path);
        assert_eq!(ResolveTarget::classify("/"), ResolveTarget::Path);
        assert_eq!(
            ResolveTarget::classify("https://portal.gov.gd/about"),
            ResolveTarget::Url
        );
        assert_eq!(ResolveTarget::classify("AboutScreen"), ResolveTarget::Name);
    }
}
