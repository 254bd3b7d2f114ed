//! Interactive mode command

use crate::config::PortalConfigLoader;
use crate::interactive::app::{run_portal, PortalContext};
use crate::interactive::pages::PageSet;
use anyhow::Result;
use ea_portal_core::{LinkLauncher, LinkOpener, RouteRegistry, SystemLinkOpener};
use std::sync::Arc;
use tracing::{debug, warn};

/// Start interactive mode
pub async fn interactive_command(config_loader: PortalConfigLoader) -> Result<()> {
    // Load portal configuration
    let config = config_loader.load().await?;
    debug!("Using UI URL prefix: {}", config.ui_url_prefix);

    let registry = Arc::new(RouteRegistry::portal()?);

    // A missing opener must not stop the portal; link presses then just log
    let opener: Arc<dyn LinkOpener> = match SystemLinkOpener::detect() {
        Ok(opener) => Arc::new(opener),
        Err(e) => {
            warn!(error = %e, "external links will not open");
            Arc::new(UnavailableOpener(e.to_string()))
        }
    };

    let context = PortalContext {
        registry,
        config: Arc::new(config),
        launcher: LinkLauncher::from_current(opener)?,
        pages: Arc::new(PageSet::portal()),
    };

    run_portal(context).await
}

/// Opener used when the platform has none; every request fails
struct UnavailableOpener(String);

#[async_trait::async_trait]
impl LinkOpener for UnavailableOpener {
    async fn open(&self, url: &url::Url) -> Result<(), ea_portal_core::LinkError> {
        Err(ea_portal_core::LinkError::LaunchFailed {
            url: url.to_string(),
            message: self.0.clone(),
        })
    }

    fn name(&self) -> &str {
        "unavailable"
    }
}
