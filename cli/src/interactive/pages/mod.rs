//! Page renderers for the portal's screens
//!
//! Binds each registered screen name to the function that renders it.
//! The route registry itself stays opaque to rendering.

use ea_portal_core::router::screens;
use ea_portal_core::{RouteEntry, RouteRegistry};
use iocraft::prelude::*;
use std::collections::HashMap;

/// Type alias for page render functions
pub type PageRenderer = Box<dyn Fn(&RouteEntry) -> AnyElement<'static> + Send + Sync>;

/// Screen name -> renderer, with a fallback for unbound screens
pub struct PageSet {
    pages: HashMap<String, PageRenderer>,
    fallback_page: Option<PageRenderer>,
}

impl PageSet {
    /// The portal's screens
    pub fn portal() -> Self {
        PageSetBuilder::new()
            .page(screens::LANDING, landing_page)
            .page(screens::SERVICES, services_page)
            .page(screens::SURVEY_FORM, survey_page)
            .page(screens::ABOUT, about_page)
            .build()
    }

    /// Render the page for a route
    pub fn render(&self, entry: &RouteEntry) -> AnyElement<'static> {
        if let Some(page_renderer) = self.pages.get(&entry.name) {
            page_renderer(entry)
        } else if let Some(fallback_renderer) = &self.fallback_page {
            fallback_renderer(entry)
        } else {
            not_found_page(entry)
        }
    }

    /// Registered screens without a page
    pub fn missing<'r>(&self, registry: &'r RouteRegistry) -> Vec<&'r str> {
        registry
            .list_routes()
            .iter()
            .filter(|entry| !self.pages.contains_key(&entry.name))
            .map(|entry| entry.name.as_str())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.pages.len()
    }
}

/// Builder for page sets
pub struct PageSetBuilder {
    pages: HashMap<String, PageRenderer>,
    fallback_page: Option<PageRenderer>,
}

impl PageSetBuilder {
    pub fn new() -> Self {
        Self {
            pages: HashMap::new(),
            fallback_page: None,
        }
    }

    /// Bind a screen name to its renderer
    pub fn page<F>(mut self, name: impl Into<String>, page_renderer: F) -> Self
    where
        F: Fn(&RouteEntry) -> AnyElement<'static> + Send + Sync + 'static,
    {
        self.pages.insert(name.into(), Box::new(page_renderer));
        self
    }

    /// Set a fallback page for unbound screens
    pub fn fallback<F>(mut self, fallback_renderer: F) -> Self
    where
        F: Fn(&RouteEntry) -> AnyElement<'static> + Send + Sync + 'static,
    {
        self.fallback_page = Some(Box::new(fallback_renderer));
        self
    }

    pub fn build(self) -> PageSet {
        PageSet {
            pages: self.pages,
            fallback_page: self.fallback_page,
        }
    }
}

impl Default for PageSetBuilder {
    fn default() -> Self {
        Self::new()
    }
}

fn page_frame(entry: &RouteEntry, lines: &[&str]) -> AnyElement<'static> {
    element! {
        View(
            key: format!("page-{}", entry.name),
            flex_direction: FlexDirection::Column,
            width: 100pct,
            padding_left: 1,
            padding_right: 1,
        ) {
            View(margin_bottom: 1) {
                Text(content: entry.title.clone(), weight: Weight::Bold, color: Color::Cyan)
            }
            #(lines.iter().enumerate().map(|(i, line)| {
                element! {
                    Text(key: format!("line-{}", i), content: *line)
                }
            }).collect::<Vec<_>>())
        }
    }
    .into()
}

fn landing_page(entry: &RouteEntry) -> AnyElement<'static> {
    page_frame(
        entry,
        &[
            "Welcome to the Enterprise Architecture Portal.",
            "Browse government services, read about the programme,",
            "or share your feedback through the survey.",
        ],
    )
}

fn services_page(entry: &RouteEntry) -> AnyElement<'static> {
    page_frame(
        entry,
        &[
            "Government services catalogued by the EA programme.",
            "Documents for each service are kept in the repository [r].",
        ],
    )
}

fn survey_page(entry: &RouteEntry) -> AnyElement<'static> {
    page_frame(
        entry,
        &[
            "Enterprise Architecture maturity survey.",
            "Log in [l] to submit a response on behalf of your ministry.",
        ],
    )
}

fn about_page(entry: &RouteEntry) -> AnyElement<'static> {
    page_frame(
        entry,
        &[
            "The EA Portal is the Government of Grenada's entry point",
            "to its Enterprise Architecture framework and guidance.",
            "Reference material lives on the wiki [w].",
        ],
    )
}

fn not_found_page(entry: &RouteEntry) -> AnyElement<'static> {
    element! {
        View(
            flex_direction: FlexDirection::Column,
            justify_content: JustifyContent::Center,
            align_items: AlignItems::Center,
            width: 100pct,
            padding: 2,
        ) {
            Text(
                content: "Page Not Found",
                weight: Weight::Bold,
                color: Color::Red
            )
            Text(
                content: format!("No page is bound to screen: {}", entry.name)
            )
        }
    }
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_route_has_a_page() {
        let registry = RouteRegistry::portal().unwrap();
        let pages = PageSet::portal();
        assert!(pages.missing(&registry).is_empty());
        assert_eq!(pages.len(), registry.len());
    }

    #[test]
    fn test_missing_pages_are_reported() {
        let registry = RouteRegistry::portal().unwrap();
        let pages = PageSetBuilder::new()
            .page(screens::LANDING, landing_page)
            .fallback(not_found_page)
            .build();

        assert_eq!(
            pages.missing(&registry),
            vec![screens::SERVICES, screens::SURVEY_FORM, screens::ABOUT]
        );
    }
}
