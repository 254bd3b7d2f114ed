//! Portal header model
//!
//! The header shows the portal branding, navigation links to in-app
//! screens, external links to the DMS repository and the wiki, a search
//! button and a login/logout button. Presses are dispatched to an injected
//! [`Navigator`] or to the external link launcher.

use crate::config::PortalConfig;
use crate::links::{LinkLauncher, LinkTask};
use crate::router::{screens, NavigationStack};
use tracing::{debug, warn};
use url::Url;

/// Label of the auth button when logged out
pub const LOGIN_LABEL: &str = "Login";

/// Label of the auth button when logged in
pub const LOGOUT_LABEL: &str = "Logout";

/// Auth button label for the caller-owned login state
pub fn auth_label(is_logged_in: bool) -> &'static str {
    if is_logged_in {
        LOGOUT_LABEL
    } else {
        LOGIN_LABEL
    }
}

/// Interactive controls in the header, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HeaderControl {
    About,
    Repository,
    Wiki,
    Services,
    Search,
    Auth,
}

/// How a control is presented
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlKind {
    /// Link to an in-app screen
    NavLink,
    /// Link opened outside the app
    ExternalLink,
    /// Button
    Button,
}

impl HeaderControl {
    /// All controls in display order
    pub const ALL: [HeaderControl; 6] = [
        HeaderControl::About,
        HeaderControl::Repository,
        HeaderControl::Wiki,
        HeaderControl::Services,
        HeaderControl::Search,
        HeaderControl::Auth,
    ];

    pub fn kind(self) -> ControlKind {
        match self {
            HeaderControl::About | HeaderControl::Services => ControlKind::NavLink,
            HeaderControl::Repository | HeaderControl::Wiki => ControlKind::ExternalLink,
            HeaderControl::Search | HeaderControl::Auth => ControlKind::Button,
        }
    }

    /// Display label; only the auth button depends on login state
    pub fn label(self, is_logged_in: bool) -> &'static str {
        match self {
            HeaderControl::About => "About",
            HeaderControl::Repository => "Repository (DMS)",
            HeaderControl::Wiki => "Wiki",
            HeaderControl::Services => "Services",
            HeaderControl::Search => "SEARCH",
            HeaderControl::Auth => auth_label(is_logged_in),
        }
    }
}

/// Capability the header calls when a navigation control is pressed
pub trait Navigator {
    fn on_about(&mut self);
    fn on_services(&mut self);
    fn on_auth(&mut self);
}

/// What pressing a control does
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeaderAction<'a> {
    About,
    Services,
    Auth,
    Search,
    External(&'a Url),
}

/// A control together with its current label
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderItem {
    pub control: HeaderControl,
    pub kind: ControlKind,
    pub label: &'static str,
}

/// Header state for one render
#[derive(Debug, Clone, Copy)]
pub struct Header<'a> {
    config: &'a PortalConfig,
    is_logged_in: bool,
}

impl<'a> Header<'a> {
    pub fn new(config: &'a PortalConfig, is_logged_in: bool) -> Self {
        Self {
            config,
            is_logged_in,
        }
    }

    pub fn title(&self) -> &'a str {
        &self.config.branding.title
    }

    pub fn subtitle(&self) -> &'a str {
        &self.config.branding.subtitle
    }

    pub fn is_logged_in(&self) -> bool {
        self.is_logged_in
    }

    pub fn auth_label(&self) -> &'static str {
        auth_label(self.is_logged_in)
    }

    /// Controls with their labels, in display order
    pub fn items(&self) -> Vec<HeaderItem> {
        HeaderControl::ALL
            .iter()
            .map(|&control| HeaderItem {
                control,
                kind: control.kind(),
                label: control.label(self.is_logged_in),
            })
            .collect()
    }

    /// The action bound to a control
    pub fn action(&self, control: HeaderControl) -> HeaderAction<'a> {
        match control {
            HeaderControl::About => HeaderAction::About,
            HeaderControl::Services => HeaderAction::Services,
            HeaderControl::Auth => HeaderAction::Auth,
            HeaderControl::Search => HeaderAction::Search,
            HeaderControl::Repository => HeaderAction::External(&self.config.dms_url),
            HeaderControl::Wiki => HeaderAction::External(&self.config.wiki_url),
        }
    }

    /// Dispatch a press; external links return their (logged) task
    pub fn press(
        &self,
        control: HeaderControl,
        navigator: &mut dyn Navigator,
        launcher: &LinkLauncher,
    ) -> Option<LinkTask> {
        match self.action(control) {
            HeaderAction::About => navigator.on_about(),
            HeaderAction::Services => navigator.on_services(),
            HeaderAction::Auth => navigator.on_auth(),
            HeaderAction::Search => debug!("search pressed; no search handler is wired"),
            HeaderAction::External(url) => return Some(launcher.launch_logged(url.as_str())),
        }
        None
    }
}

/// [`Navigator`] over a navigation stack
///
/// About and Services push their screens; auth is forwarded to the
/// caller, which owns the login state.
pub struct RegistryNavigator<'s, F> {
    stack: &'s mut NavigationStack,
    on_auth: F,
}

impl<'s, F: FnMut()> RegistryNavigator<'s, F> {
    pub fn new(stack: &'s mut NavigationStack, on_auth: F) -> Self {
        Self { stack, on_auth }
    }

    fn go(&mut self, screen: &str) {
        if let Err(e) = self.stack.navigate(screen) {
            warn!(screen, error = %e, "header navigation failed");
        }
    }
}

impl<F: FnMut()> Navigator for RegistryNavigator<'_, F> {
    fn on_about(&mut self) {
        self.go(screens::ABOUT);
    }

    fn on_services(&mut self) {
        self.go(screens::SERVICES);
    }

    fn on_auth(&mut self) {
        (self.on_auth)();
    }
}
