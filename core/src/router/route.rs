//! Route definitions and utilities
//!
//! This module defines the route entry type and the portal's static
//! route table.

use crate::error::RouteError;
use serde::Serialize;

/// Symbolic screen names registered by the portal
pub mod screens {
    pub const LANDING: &str = "Landing";
    pub const SERVICES: &str = "ServicesScreen";
    pub const SURVEY_FORM: &str = "SurveyFormScreen";
    pub const ABOUT: &str = "AboutScreen";
}

/// Path of the default/landing destination
pub const ROOT_PATH: &str = "/";

/// The portal's active routes as `(name, path, title)`, in registration order
pub const ROUTE_TABLE: &[(&str, &str, &str)] = &[
    (screens::LANDING, ROOT_PATH, "Home"),
    (screens::SERVICES, "/services", "Services"),
    (screens::SURVEY_FORM, "/survey", "Survey"),
    (screens::ABOUT, "/about", "About"),
];

/// A named association between a screen and a URL path
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RouteEntry {
    /// Unique symbolic identifier for the screen
    pub name: String,
    /// URL path segment bound to the screen
    pub path: String,
    /// Human-readable label
    pub title: String,
}

impl RouteEntry {
    /// Create a new route entry; the title defaults to the name
    pub fn new(name: impl Into<String>, path: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            title: name.clone(),
            name,
            path: path.into(),
        }
    }

    /// Set the human-readable title
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Whether this entry is bound to the root path
    pub fn is_root(&self) -> bool {
        self.path == ROOT_PATH
    }

    /// Check the path is well formed
    pub fn validate(&self) -> Result<(), RouteError> {
        let invalid = |reason| RouteError::InvalidPath {
            name: self.name.clone(),
            path: self.path.clone(),
            reason,
        };

        if self.name.trim().is_empty() {
            return Err(invalid("screen name is empty"));
        }
        if !self.path.starts_with('/') {
            return Err(invalid("path must start with '/'"));
        }
        if self.path.len() > 1 && self.path.ends_with('/') {
            return Err(invalid("path must not end with '/'"));
        }
        if self.path.contains(['?', '#']) {
            return Err(invalid("path must not contain a query or fragment"));
        }
        if self.path.chars().any(char::is_whitespace) {
            return Err(invalid("path must not contain whitespace"));
        }

        Ok(())
    }
}

/// Strip trailing slashes so `/about/` and `/about` compare equal
pub(crate) fn normalize_path(path: &str) -> &str {
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() && !path.is_empty() {
        ROOT_PATH
    } else {
        trimmed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_table_shape() {
        let roots: Vec<_> = ROUTE_TABLE
            .iter()
            .filter(|(_, path, _)| *path == ROOT_PATH)
            .collect();
        assert_eq!(roots.len(), 1);
        assert_eq!(roots[0].0, screens::LANDING);
    }

    #[test]
    fn test_entry_validation() {
        assert!(RouteEntry::new("AboutScreen", "/about").validate().is_ok());
        assert!(RouteEntry::new("Landing", "/").validate().is_ok());

        for bad in ["about", "/about/", "/about?x=1", "/ab out", "/a#b"] {
            let err = RouteEntry::new("AboutScreen", bad).validate().unwrap_err();
            assert!(
                matches!(err, RouteError::InvalidPath { .. }),
                "path {bad:?} should be rejected"
            );
        }

        assert!(RouteEntry::new(" ", "/x").validate().is_err());
    }

    #[test]
    fn test_title_defaults_to_name() {
        let entry = RouteEntry::new("ServicesScreen", "/services");
        assert_eq!(entry.title, "ServicesScreen");
        assert_eq!(entry.with_title("Services").title, "Services");
    }

    #[test]
    fn test_normalize_path() {
        assert_eq!(normalize_path("/about/"), "/about");
        assert_eq!(normalize_path("/about"), "/about");
        assert_eq!(normalize_path("/"), "/");
        assert_eq!(normalize_path("//"), "/");
        assert_eq!(normalize_path(""), "");
    }
}
