//! Router module for the portal's screens
//!
//! Static route registry, deep-link resolution and stack navigation
//! state for the portal's in-app screens.

pub mod linking;
pub mod navigation;
pub mod registry;
pub mod route;

// Re-export commonly used types
pub use linking::Linking;
pub use navigation::{NavigationStack, DEFAULT_MAX_HISTORY};
pub use registry::{RouteRegistry, RouterResult};
pub use route::{screens, RouteEntry, ROOT_PATH, ROUTE_TABLE};
