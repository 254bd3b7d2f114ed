//! Deep-link resolution between full URLs and registered screens
//!
//! A URL is addressable in-app when it shares the origin of one of the
//! linking prefixes and its path sits under the prefix path.

use super::registry::{RouteRegistry, RouterResult};
use super::route::{RouteEntry, ROOT_PATH};
use crate::config::PortalConfig;
use crate::error::RouteError;
use url::Url;

/// Linking configuration: the prefixes in-app paths live under
#[derive(Debug, Clone)]
pub struct Linking {
    /// The first prefix is used to build outgoing URLs
    prefixes: Vec<Url>,
}

impl Linking {
    /// Create a linking configuration with a primary prefix
    pub fn new(primary: Url) -> Self {
        Self {
            prefixes: vec![primary],
        }
    }

    /// Linking for the configured UI URL prefix
    pub fn from_config(config: &PortalConfig) -> Self {
        Self::new(config.ui_url_prefix.clone())
    }

    /// Accept links under an additional prefix
    pub fn with_prefix(mut self, prefix: Url) -> Self {
        self.prefixes.push(prefix);
        self
    }

    /// All accepted prefixes, primary first
    pub fn prefixes(&self) -> &[Url] {
        &self.prefixes
    }

    /// In-app path for a full URL or bare path, without query or fragment
    pub fn path_for_url(&self, target: &str) -> RouterResult<String> {
        if target.starts_with('/') {
            let end = target.find(['?', '#']).unwrap_or(target.len());
            return Ok(target[..end].to_string());
        }

        let url = Url::parse(target.trim()).map_err(|_| RouteError::PrefixMismatch {
            url: target.to_string(),
        })?;

        self.prefixes
            .iter()
            .filter(|prefix| prefix.origin() == url.origin())
            .find_map(|prefix| strip_base(base_path(prefix), url.path()))
            .ok_or_else(|| RouteError::PrefixMismatch {
                url: target.to_string(),
            })
    }

    /// Registered screen for a full URL or bare path
    pub fn screen_for_url<'r>(
        &self,
        registry: &'r RouteRegistry,
        target: &str,
    ) -> RouterResult<&'r RouteEntry> {
        let path = self.path_for_url(target)?;
        registry.entry_for_path(&path)
    }

    /// Full URL of a registered screen under the primary prefix
    pub fn url_for_screen(&self, registry: &RouteRegistry, name: &str) -> RouterResult<Url> {
        let path = registry.resolve_path(name)?;
        let prefix = &self.prefixes[0];

        let mut url = prefix.clone();
        url.set_path(&format!("{}{}", base_path(prefix), path));
        url.set_query(None);
        url.set_fragment(None);
        Ok(url)
    }
}

/// Prefix path without its trailing slash (`/` becomes empty)
fn base_path(prefix: &Url) -> &str {
    prefix.path().trim_end_matches('/')
}

/// Path below `base`, matching on segment boundaries only
fn strip_base(base: &str, path: &str) -> Option<String> {
    let rest = path.strip_prefix(base)?;
    if rest.is_empty() {
        Some(ROOT_PATH.to_string())
    } else if rest.starts_with('/') {
        Some(rest.to_string())
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::router::route::screens;

    fn linking(prefix: &str) -> Linking {
        Linking::new(Url::parse(prefix).unwrap())
    }

    fn registry() -> RouteRegistry {
        RouteRegistry::portal().unwrap()
    }

    #[test]
    fn test_screen_for_full_url() {
        let registry = registry();
        let linking = linking("https://portal.gov.gd");

        let entry = linking
            .screen_for_url(&registry, "https://portal.gov.gd/about?x=1#top")
            .unwrap();
        assert_eq!(entry.name, screens::ABOUT);

        let entry = linking
            .screen_for_url(&registry, "https://portal.gov.gd")
            .unwrap();
        assert_eq!(entry.name, screens::LANDING);

        let entry = linking
            .screen_for_url(&registry, "https://portal.gov.gd/services/")
            .unwrap();
        assert_eq!(entry.name, screens::SERVICES);
    }

    #[test]
    fn test_screen_for_bare_path() {
        let registry = registry();
        let linking = linking("https://portal.gov.gd");
        let entry = linking.screen_for_url(&registry, "/survey?id=4").unwrap();
        assert_eq!(entry.name, screens::SURVEY_FORM);
    }

    #[test]
    fn test_prefix_with_base_path() {
        let registry = registry();
        let linking = linking("https://gov.gd/ea/");

        let entry = linking
            .screen_for_url(&registry, "https://gov.gd/ea/about")
            .unwrap();
        assert_eq!(entry.name, screens::ABOUT);

        let entry = linking.screen_for_url(&registry, "https://gov.gd/ea").unwrap();
        assert_eq!(entry.name, screens::LANDING);

        // "/eagle" is not below "/ea"
        let err = linking
            .screen_for_url(&registry, "https://gov.gd/eagle/about")
            .unwrap_err();
        assert!(matches!(err, RouteError::PrefixMismatch { .. }));
    }

    #[test]
    fn test_foreign_origin_is_rejected() {
        let registry = registry();
        let linking = linking("https://portal.gov.gd");

        for url in [
            "https://example.com/about",
            "http://portal.gov.gd/about",
            "https://portal.gov.gd:8443/about",
            "not a url",
        ] {
            let err = linking.screen_for_url(&registry, url).unwrap_err();
            assert!(
                matches!(err, RouteError::PrefixMismatch { .. }),
                "{url} should not match"
            );
        }
    }

    #[test]
    fn test_secondary_prefix() {
        let registry = registry();
        let linking = linking("https://portal.gov.gd")
            .with_prefix(Url::parse("http://localhost:8081").unwrap());

        let entry = linking
            .screen_for_url(&registry, "http://localhost:8081/about")
            .unwrap();
        assert_eq!(entry.name, screens::ABOUT);
        assert_eq!(linking.prefixes().len(), 2);
    }

    #[test]
    fn test_unknown_path_under_prefix() {
        let registry = registry();
        let linking = linking("https://portal.gov.gd");
        let err = linking
            .screen_for_url(&registry, "https://portal.gov.gd/maturity")
            .unwrap_err();
        assert!(err.is_unknown_route());
    }

    #[test]
    fn test_url_for_screen_round_trip() {
        let registry = registry();
        for prefix in ["https://portal.gov.gd", "https://gov.gd/ea/"] {
            let linking = linking(prefix);
            for entry in registry.list_routes() {
                let url = linking.url_for_screen(&registry, &entry.name).unwrap();
                let resolved = linking.screen_for_url(&registry, url.as_str()).unwrap();
                assert_eq!(resolved.name, entry.name);
            }
        }
    }

    #[test]
    fn test_url_for_screen_shape() {
        let registry = registry();
        let linking = linking("https://gov.gd/ea");

        let url = linking.url_for_screen(&registry, screens::ABOUT).unwrap();
        assert_eq!(url.as_str(), "https://gov.gd/ea/about");

        let url = linking.url_for_screen(&registry, screens::LANDING).unwrap();
        assert_eq!(url.as_str(), "https://gov.gd/ea/");

        let err = linking.url_for_screen(&registry, "NoSuchScreen").unwrap_err();
        assert!(err.is_unknown_route());
    }
}
