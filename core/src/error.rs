//! Error types and handling for EA Portal Core

use std::fmt;
use thiserror::Error;

/// Result type alias for EA Portal operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for EA Portal Core
#[derive(Error, Debug)]
pub enum Error {
    /// Route table and lookup errors
    #[error("Route error: {0}")]
    Route(#[from] RouteError),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// External link errors
    #[error("Link error: {0}")]
    Link(#[from] LinkError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Generic error with message
    #[error("{0}")]
    Generic(String),
}

/// The key a failed route lookup was made with
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteLookup {
    /// Lookup by symbolic screen name
    Name(String),
    /// Lookup by URL path
    Path(String),
}

impl fmt::Display for RouteLookup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RouteLookup::Name(name) => write!(f, "screen '{}'", name),
            RouteLookup::Path(path) => write!(f, "path '{}'", path),
        }
    }
}

/// Route registry errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RouteError {
    #[error("Unknown route: {0}")]
    UnknownRoute(RouteLookup),

    #[error("No routes configured")]
    EmptyTable,

    #[error("Duplicate screen name '{name}'")]
    DuplicateName { name: String },

    #[error("Duplicate path '{path}' (screens '{first}' and '{second}')")]
    DuplicatePath {
        path: String,
        first: String,
        second: String,
    },

    #[error("No route is bound to the root path '/'")]
    MissingRoot,

    #[error("Invalid path '{path}' for screen '{name}': {reason}")]
    InvalidPath {
        name: String,
        path: String,
        reason: &'static str,
    },

    #[error("URL '{url}' is not under any linking prefix")]
    PrefixMismatch { url: String },
}

impl RouteError {
    /// Create an unknown-route error for a screen name
    pub fn unknown_name(name: impl Into<String>) -> Self {
        RouteError::UnknownRoute(RouteLookup::Name(name.into()))
    }

    /// Create an unknown-route error for a path
    pub fn unknown_path(path: impl Into<String>) -> Self {
        RouteError::UnknownRoute(RouteLookup::Path(path.into()))
    }

    /// Whether this error is a lookup miss
    pub fn is_unknown_route(&self) -> bool {
        matches!(self, RouteError::UnknownRoute(_))
    }
}

/// Configuration-specific errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Missing required field: {field}")]
    MissingField { field: String },

    #[error("Invalid value for field '{field}': {value}")]
    InvalidValue { field: String, value: String },

    #[error("File not found: {path}")]
    FileNotFound { path: String },

    #[error("Invalid configuration format")]
    InvalidFormat,
}

/// External link errors
#[derive(Error, Debug)]
pub enum LinkError {
    #[error("Invalid URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("Unsupported URL scheme '{scheme}' in '{url}'")]
    UnsupportedScheme { url: String, scheme: String },

    #[error("No URL opener available: '{program}' not found")]
    OpenerUnavailable { program: String },

    #[error("Failed to launch opener for '{url}': {message}")]
    LaunchFailed { url: String, message: String },

    #[error("Opener for '{url}' exited with status {status}")]
    OpenerFailed { url: String, status: String },

    #[error("No async runtime available to open links")]
    NoRuntime,

    #[error("Link task for '{url}' was aborted")]
    Aborted { url: String },
}

impl From<String> for Error {
    fn from(msg: String) -> Self {
        Error::Generic(msg)
    }
}

impl From<&str> for Error {
    fn from(msg: &str) -> Self {
        Error::Generic(msg.to_string())
    }
}
