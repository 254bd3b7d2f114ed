//! Minimal configuration module for EA Portal core
//!
//! Only exports pure data types. All loading logic is in CLI layer.

pub mod types;

pub use types::{parse_url, Branding, PortalConfig, DEFAULT_SUBTITLE, DEFAULT_TITLE};
