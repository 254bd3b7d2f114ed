//! Route registry
//!
//! Immutable table of named screens and their URL paths. Built once at
//! start-up and shared read-only for the lifetime of the process.

use super::route::{normalize_path, RouteEntry, ROUTE_TABLE};
use crate::error::RouteError;
use std::collections::HashMap;
use tracing::debug;

/// Type alias for router operation results
pub type RouterResult<T> = Result<T, RouteError>;

/// Registry mapping screen names to paths and back
#[derive(Debug, Clone)]
pub struct RouteRegistry {
    /// Entries in registration order
    entries: Vec<RouteEntry>,
    /// Name -> index into `entries`
    by_name: HashMap<String, usize>,
    /// Path -> index into `entries`
    by_path: HashMap<String, usize>,
    /// Index of the entry bound to `/`
    root: usize,
}

impl RouteRegistry {
    /// Build the portal's registry from the static route table
    pub fn portal() -> RouterResult<Self> {
        Self::from_entries(
            ROUTE_TABLE
                .iter()
                .map(|(name, path, title)| RouteEntry::new(*name, *path).with_title(*title)),
        )
    }

    /// Build a registry, checking name/path uniqueness and the single root
    pub fn from_entries(entries: impl IntoIterator<Item = RouteEntry>) -> RouterResult<Self> {
        let entries: Vec<RouteEntry> = entries.into_iter().collect();
        if entries.is_empty() {
            return Err(RouteError::EmptyTable);
        }

        let mut by_name = HashMap::with_capacity(entries.len());
        let mut by_path: HashMap<String, usize> = HashMap::with_capacity(entries.len());

        for (index, entry) in entries.iter().enumerate() {
            entry.validate()?;

            if by_name.insert(entry.name.clone(), index).is_some() {
                return Err(RouteError::DuplicateName {
                    name: entry.name.clone(),
                });
            }

            if let Some(previous) = by_path.insert(entry.path.clone(), index) {
                return Err(RouteError::DuplicatePath {
                    path: entry.path.clone(),
                    first: entries[previous].name.clone(),
                    second: entry.name.clone(),
                });
            }
        }

        // Unique paths guarantee at most one root
        let root = entries
            .iter()
            .position(RouteEntry::is_root)
            .ok_or(RouteError::MissingRoot)?;

        debug!(routes = entries.len(), "route registry built");

        Ok(Self {
            entries,
            by_name,
            by_path,
            root,
        })
    }

    /// Path bound to a screen name
    pub fn resolve_path(&self, name: &str) -> RouterResult<&str> {
        self.get(name)
            .map(|entry| entry.path.as_str())
            .ok_or_else(|| RouteError::unknown_name(name))
    }

    /// Screen name bound to a path; a trailing slash is ignored
    pub fn resolve_screen(&self, path: &str) -> RouterResult<&str> {
        self.entry_for_path(path)
            .map(|entry| entry.name.as_str())
    }

    /// Entry bound to a path; a trailing slash is ignored
    pub fn entry_for_path(&self, path: &str) -> RouterResult<&RouteEntry> {
        self.by_path
            .get(normalize_path(path))
            .map(|&index| &self.entries[index])
            .ok_or_else(|| RouteError::unknown_path(path))
    }

    /// All entries in registration order
    pub fn list_routes(&self) -> &[RouteEntry] {
        &self.entries
    }

    /// Entry for a screen name, if registered
    pub fn get(&self, name: &str) -> Option<&RouteEntry> {
        self.by_name.get(name).map(|&index| &self.entries[index])
    }

    /// Whether a screen name is registered
    pub fn contains(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    /// The landing entry, bound to `/`
    pub fn default_route(&self) -> &RouteEntry {
        &self.entries[self.root]
    }

    /// Number of registered routes
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false for a constructed registry
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
