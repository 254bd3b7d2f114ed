//! External link command

use crate::config::PortalConfigLoader;
use anyhow::Result;
use ea_portal_core::{LinkLauncher, SystemLinkOpener};
use std::sync::Arc;
use tracing::{error, info};

/// Open `dms`, `wiki` or a literal URL with the platform opener
///
/// Failures are logged only; the command succeeds either way.
pub async fn open_command(target: String, config_loader: PortalConfigLoader) -> Result<()> {
    let url = match target.as_str() {
        "dms" | "repository" => config_loader.load().await?.dms_url.to_string(),
        "wiki" => config_loader.load().await?.wiki_url.to_string(),
        _ => target,
    };

    let opener = match SystemLinkOpener::detect() {
        Ok(opener) => opener,
        Err(e) => {
            error!(url = %url, error = %e, "Failed to open URL");
            return Ok(());
        }
    };

    info!(url = %url, "Opening external link");
    let launcher = LinkLauncher::from_current(Arc::new(opener))?;

    // Wait so the request is not cut off by process exit
    let _ = launcher.launch_logged(url).join().await;
    Ok(())
}
