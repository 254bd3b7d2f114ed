//! External links
//!
//! URLs outside the portal's own routing (the DMS repository and the wiki)
//! are handed to the host platform. Opening is asynchronous and
//! fire-and-forget: every request runs as its own task whose result the
//! caller may await or drop. `launch_logged` reports failures to the
//! tracing subscriber and nowhere else; nothing is retried.

pub mod opener;

pub use opener::{LinkOpener, SystemLinkOpener};

use crate::error::LinkError;
use std::sync::Arc;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tracing::{debug, error};
use url::Url;

/// Parse a URL and check it can be handed to a browser
pub fn validate_url(raw: &str) -> Result<Url, LinkError> {
    let url = Url::parse(raw.trim()).map_err(|e| LinkError::InvalidUrl {
        url: raw.to_string(),
        reason: e.to_string(),
    })?;

    match url.scheme() {
        "http" | "https" => Ok(url),
        scheme => Err(LinkError::UnsupportedScheme {
            url: raw.to_string(),
            scheme: scheme.to_string(),
        }),
    }
}

/// Validate `url` and ask `opener` to open it
pub async fn open_link(opener: &dyn LinkOpener, url: &str) -> Result<(), LinkError> {
    let url = validate_url(url)?;
    opener.open(&url).await
}

/// Like [`open_link`], logging any failure
pub async fn open_and_log(opener: &dyn LinkOpener, url: &str) -> Result<(), LinkError> {
    match open_link(opener, url).await {
        Ok(()) => {
            debug!(url, opener = opener.name(), "opened external link");
            Ok(())
        }
        Err(e) => {
            error!(url, opener = opener.name(), error = %e, "Failed to open URL");
            Err(e)
        }
    }
}

/// A spawned link-open request
///
/// Dropping the task detaches it; the request still runs to completion.
#[derive(Debug)]
pub struct LinkTask {
    url: String,
    handle: JoinHandle<Result<(), LinkError>>,
}

impl LinkTask {
    /// The requested URL
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Whether the request has completed
    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }

    /// Wait for the outcome of the request
    pub async fn join(self) -> Result<(), LinkError> {
        match self.handle.await {
            Ok(result) => result,
            Err(_) => Err(LinkError::Aborted { url: self.url }),
        }
    }
}

/// Spawns link-open requests on a tokio runtime
#[derive(Clone)]
pub struct LinkLauncher {
    opener: Arc<dyn LinkOpener>,
    runtime: Handle,
}

impl LinkLauncher {
    /// Create a launcher spawning onto `runtime`
    pub fn new(opener: Arc<dyn LinkOpener>, runtime: Handle) -> Self {
        Self { opener, runtime }
    }

    /// Create a launcher for the runtime the caller is running on
    pub fn from_current(opener: Arc<dyn LinkOpener>) -> Result<Self, LinkError> {
        let runtime = Handle::try_current().map_err(|_| LinkError::NoRuntime)?;
        Ok(Self::new(opener, runtime))
    }

    /// Spawn a request; the outcome is only visible through the task
    pub fn launch(&self, url: impl Into<String>) -> LinkTask {
        let url = url.into();
        let opener = Arc::clone(&self.opener);
        let target = url.clone();
        let handle = self
            .runtime
            .spawn(async move { open_link(opener.as_ref(), &target).await });
        LinkTask { url, handle }
    }

    /// Spawn a request whose failure is logged
    pub fn launch_logged(&self, url: impl Into<String>) -> LinkTask {
        let url = url.into();
        let opener = Arc::clone(&self.opener);
        let target = url.clone();
        let handle = self
            .runtime
            .spawn(async move { open_and_log(opener.as_ref(), &target).await });
        LinkTask { url, handle }
    }
}

impl std::fmt::Debug for LinkLauncher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LinkLauncher")
            .field("opener", &self.opener.name())
            .finish()
    }
}
