//! Stack navigation over the route registry
//!
//! Tracks the active screen and the back history the way a stack
//! navigator does. Every screen name is validated against the registry.

use super::registry::{RouteRegistry, RouterResult};
use super::route::RouteEntry;
use crate::error::RouteError;
use std::collections::VecDeque;
use std::sync::Arc;
use tracing::debug;

/// Default number of history entries to keep
pub const DEFAULT_MAX_HISTORY: usize = 50;

/// Active screen plus back history for one navigator
#[derive(Debug, Clone)]
pub struct NavigationStack {
    registry: Arc<RouteRegistry>,
    /// Currently active screen name
    current: String,
    /// Navigation history (most recent first)
    history: VecDeque<String>,
    /// Maximum number of history entries to keep
    max_history: usize,
}

impl NavigationStack {
    /// Start at the registry's default route
    pub fn new(registry: Arc<RouteRegistry>) -> Self {
        let current = registry.default_route().name.clone();
        Self {
            registry,
            current,
            history: VecDeque::new(),
            max_history: DEFAULT_MAX_HISTORY,
        }
    }

    /// Set maximum history size
    pub fn with_max_history(mut self, max_history: usize) -> Self {
        self.max_history = max_history;
        self.history.truncate(max_history);
        self
    }

    /// Navigate to a screen by name
    pub fn navigate(&mut self, name: &str) -> RouterResult<&RouteEntry> {
        if !self.registry.contains(name) {
            return Err(RouteError::unknown_name(name));
        }

        // Add current screen to history if it's different
        if self.current != name {
            let previous = std::mem::replace(&mut self.current, name.to_string());
            self.history.push_front(previous);
            self.history.truncate(self.max_history);
            debug!(screen = name, depth = self.history.len(), "navigated");
        }

        Ok(self.current_entry())
    }

    /// Navigate to the screen bound to a path
    pub fn navigate_path(&mut self, path: &str) -> RouterResult<&RouteEntry> {
        let name = self.registry.resolve_screen(path)?.to_string();
        self.navigate(&name)
    }

    /// Go back to the previous screen in history
    pub fn go_back(&mut self) -> bool {
        match self.history.pop_front() {
            Some(previous) => {
                debug!(screen = %previous, "navigated back");
                self.current = previous;
                true
            }
            None => false,
        }
    }

    /// Check if we can go back
    pub fn can_go_back(&self) -> bool {
        !self.history.is_empty()
    }

    /// Return to the default route and clear history
    pub fn reset(&mut self) {
        self.current = self.registry.default_route().name.clone();
        self.history.clear();
    }

    /// Name of the active screen
    pub fn current(&self) -> &str {
        &self.current
    }

    /// Route entry of the active screen
    pub fn current_entry(&self) -> &RouteEntry {
        // `current` is only ever set to a registered name
        self.registry
            .get(&self.current)
            .unwrap_or_else(|| self.registry.default_route())
    }

    /// Navigation history, most recent first
    pub fn history(&self) -> impl Iterator<Item = &str> {
        self.history.iter().map(String::as_str)
    }

    /// The registry this stack navigates
    pub fn registry(&self) -> &Arc<RouteRegistry> {
        &self.registry
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::router::route::screens;

    fn stack() -> NavigationStack {
        NavigationStack::new(Arc::new(RouteRegistry::portal().unwrap()))
    }

    #[test]
    fn test_starts_at_landing() {
        let stack = stack();
        assert_eq!(stack.current(), screens::LANDING);
        assert_eq!(stack.current_entry().path, "/");
        assert!(!stack.can_go_back());
    }

    #[test]
    fn test_navigate_and_go_back() {
        let mut stack = stack();

        stack.navigate(screens::ABOUT).unwrap();
        stack.navigate(screens::SERVICES).unwrap();
        assert_eq!(stack.current(), screens::SERVICES);
        assert_eq!(
            stack.history().collect::<Vec<_>>(),
            vec![screens::ABOUT, screens::LANDING]
        );

        assert!(stack.go_back());
        assert_eq!(stack.current(), screens::ABOUT);
        assert!(stack.go_back());
        assert_eq!(stack.current(), screens::LANDING);
        assert!(!stack.go_back());
        assert_eq!(stack.current(), screens::LANDING);
    }

    #[test]
    fn test_navigate_to_current_does_not_grow_history() {
        let mut stack = stack();
        stack.navigate(screens::ABOUT).unwrap();
        stack.navigate(screens::ABOUT).unwrap();
        assert_eq!(stack.history().count(), 1);
    }

    #[test]
    fn test_unknown_screen_leaves_state_untouched() {
        let mut stack = stack();
        stack.navigate(screens::ABOUT).unwrap();

        let err = stack.navigate("FrameworkScreen").unwrap_err();
        assert!(err.is_unknown_route());
        assert_eq!(stack.current(), screens::ABOUT);
        assert_eq!(stack.history().count(), 1);
    }

    #[test]
    fn test_navigate_path() {
        let mut stack = stack();
        let entry = stack.navigate_path("/survey").unwrap();
        assert_eq!(entry.name, screens::SURVEY_FORM);
        assert!(stack.navigate_path("/maturity").is_err());
    }

    #[test]
    fn test_history_is_bounded() {
        let mut stack = stack().with_max_history(3);
        for _ in 0..5 {
            stack.navigate(screens::ABOUT).unwrap();
            stack.navigate(screens::SERVICES).unwrap();
        }
        assert_eq!(stack.history().count(), 3);
    }

    #[test]
    fn test_reset() {
        let mut stack = stack();
        stack.navigate(screens::SURVEY_FORM).unwrap();
        stack.reset();
        assert_eq!(stack.current(), screens::LANDING);
        assert!(!stack.can_go_back());
    }
}
