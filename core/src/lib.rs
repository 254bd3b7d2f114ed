//! # EA Portal Core
//!
//! Core library for the Government of Grenada EA Portal client.
//!
//! This library provides the portal's fixed screen routing table, deep-link
//! resolution under the configured URL prefix, stack navigation state, the
//! header model and asynchronous opening of external links.

// Core modules
pub mod config;
pub mod error;
pub mod header;
pub mod links;
pub mod router;

// Re-export commonly used types
pub use config::{Branding, PortalConfig};
pub use error::{ConfigError, Error, LinkError, Result, RouteError};
pub use header::{auth_label, Header, HeaderAction, HeaderControl, Navigator, RegistryNavigator};
pub use links::{LinkLauncher, LinkOpener, LinkTask, SystemLinkOpener};
pub use router::{Linking, NavigationStack, RouteEntry, RouteRegistry};

/// Current version of the ea-portal-core library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize tracing for the library
///
/// Logs go to stderr so command output on stdout stays machine-readable.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();
}

/// Initialize tracing with a specific debug mode
pub fn init_tracing_with_debug(debug: bool) {
    let filter = if debug { "debug" } else { "info" };

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(filter))
        .with_writer(std::io::stderr)
        .init();
}
