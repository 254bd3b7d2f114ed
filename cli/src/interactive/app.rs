//! Interactive portal using iocraft

use crate::interactive::components::PortalHeader;
use crate::interactive::keys::{command_for_key, footer_help, PortalCommand};
use crate::interactive::pages::PageSet;
use anyhow::Result;
use ea_portal_core::{
    Header, HeaderControl, LinkLauncher, NavigationStack, PortalConfig, RegistryNavigator,
    RouteRegistry,
};
use iocraft::prelude::*;
use std::sync::Arc;
use tracing::{debug, warn};

/// Everything the portal UI needs, built once at start-up
#[derive(Clone)]
pub struct PortalContext {
    pub registry: Arc<RouteRegistry>,
    pub config: Arc<PortalConfig>,
    pub launcher: LinkLauncher,
    pub pages: Arc<PageSet>,
}

/// Session state driven by key presses
#[derive(Debug, Clone)]
pub struct PortalSession {
    pub stack: NavigationStack,
    pub is_logged_in: bool,
    pub status: String,
}

impl PortalSession {
    pub fn new(registry: Arc<RouteRegistry>) -> Self {
        Self {
            stack: NavigationStack::new(registry),
            is_logged_in: false,
            status: String::new(),
        }
    }

    /// Apply a command; returns false when the portal should exit
    pub fn apply(&mut self, command: PortalCommand, context: &PortalContext) -> bool {
        match command {
            PortalCommand::Quit => return false,
            PortalCommand::Back => {
                if !self.stack.go_back() {
                    self.status = "Nothing to go back to".to_string();
                }
            }
            PortalCommand::Home => self.stack.reset(),
            PortalCommand::Open(screen) => {
                if let Err(e) = self.stack.navigate(screen) {
                    warn!(screen, error = %e, "navigation failed");
                    self.status = e.to_string();
                }
            }
            PortalCommand::Press(control) => self.press(control, context),
        }
        true
    }

    fn press(&mut self, control: HeaderControl, context: &PortalContext) {
        let header = Header::new(&context.config, self.is_logged_in);
        let mut is_logged_in = self.is_logged_in;

        let task = {
            let mut navigator =
                RegistryNavigator::new(&mut self.stack, || is_logged_in = !is_logged_in);
            header.press(control, &mut navigator, &context.launcher)
        };

        self.is_logged_in = is_logged_in;
        self.status = match (control, task) {
            // Detached: a failed open is only logged
            (_, Some(task)) => format!("Opening {}", task.url()),
            (HeaderControl::Auth, None) if is_logged_in => "Logged in".to_string(),
            (HeaderControl::Auth, None) => "Logged out".to_string(),
            (HeaderControl::Search, None) => "Search is not available yet".to_string(),
            _ => String::new(),
        };
        debug!(?control, screen = self.stack.current(), "header control pressed");
    }
}

/// Interactive mode using iocraft
pub async fn run_portal(context: PortalContext) -> Result<()> {
    let missing = context.pages.missing(&context.registry);
    if !missing.is_empty() {
        warn!(screens = ?missing, "screens without a page will show the fallback");
    }

    // Run the iocraft-based UI
    tokio::task::spawn_blocking(move || {
        smol::block_on(async move {
            element!(PortalApp(context: Some(context))).render_loop().await
        })
    })
    .await??;

    Ok(())
}

#[derive(Default, Props)]
pub struct PortalAppProps {
    pub context: Option<PortalContext>,
}

/// Main portal application component
#[component]
fn PortalApp(mut hooks: Hooks, props: &PortalAppProps) -> impl Into<AnyElement<'static>> {
    let mut system = hooks.use_context_mut::<SystemContext>();
    let should_exit = hooks.use_state(|| false);
    let context = props.context.clone();
    let session = hooks.use_state({
        let registry = context.as_ref().map(|context| context.registry.clone());
        move || registry.map(PortalSession::new)
    });

    // Handle terminal events
    hooks.use_terminal_events({
        let mut should_exit = should_exit;
        let mut session = session;
        let context = context.clone();
        move |event| match event {
            TerminalEvent::Key(KeyEvent { code, kind, .. }) if kind != KeyEventKind::Release => {
                let Some(command) = command_for_key(code) else {
                    return;
                };
                let (Some(context), Some(mut next)) = (&context, session.read().clone()) else {
                    should_exit.set(command == PortalCommand::Quit);
                    return;
                };
                if next.apply(command, context) {
                    session.set(Some(next));
                } else {
                    should_exit.set(true);
                }
            }
            _ => {}
        }
    });

    if should_exit.get() {
        system.exit();
    }

    let current = session.read().clone();
    let (Some(context), Some(current)) = (context, current) else {
        return element! {
            View(padding: 1) {
                Text(content: "Portal is not configured", color: Color::Red)
            }
        };
    };

    let entry = current.stack.current_entry().clone();
    let page = context.pages.render(&entry);
    let footer = if current.stack.can_go_back() {
        footer_help().to_string()
    } else {
        footer_help().replace("[b] back  ", "")
    };

    element! {
        View(
            flex_direction: FlexDirection::Column,
            width: 100pct,
            padding: 1,
        ) {
            PortalHeader(
                config: Some(context.config.clone()),
                is_logged_in: current.is_logged_in,
                active_screen: Some(entry.name.clone()),
            )

            View(margin_bottom: 1, padding_left: 1) {
                Text(content: entry.path.clone(), color: Color::Grey)
            }

            View(key: "page-container", width: 100pct, margin_bottom: 1) {
                #(page)
            }

            View(flex_direction: FlexDirection::Column, padding_left: 1) {
                Text(content: current.status.clone(), color: Color::Yellow)
                Text(content: footer, color: Color::Grey)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use ea_portal_core::router::screens;
    use ea_portal_core::{LinkError, LinkOpener};
    use std::sync::Mutex;
    use url::Url;

    #[derive(Default)]
    struct RecordingOpener(Mutex<Vec<String>>);

    #[async_trait]
    impl LinkOpener for RecordingOpener {
        async fn open(&self, url: &Url) -> Result<(), LinkError> {
            self.0.lock().unwrap().push(url.to_string());
            Ok(())
        }
    }

    fn context(opener: Arc<RecordingOpener>) -> PortalContext {
        PortalContext {
            registry: Arc::new(RouteRegistry::portal().unwrap()),
            config: Arc::new(
                PortalConfig::parse(
                    "https://portal.gov.gd",
                    "https://dms.gov.gd",
                    "https://wiki.gov.gd",
                )
                .unwrap(),
            ),
            launcher: LinkLauncher::from_current(opener).unwrap(),
            pages: Arc::new(PageSet::portal()),
        }
    }

    #[tokio::test]
    async fn test_session_navigation() {
        let context = context(Arc::new(RecordingOpener::default()));
        let mut session = PortalSession::new(context.registry.clone());

        assert!(session.apply(PortalCommand::Press(HeaderControl::About), &context));
        assert_eq!(session.stack.current(), screens::ABOUT);

        assert!(session.apply(PortalCommand::Open(screens::SURVEY_FORM), &context));
        assert_eq!(session.stack.current(), screens::SURVEY_FORM);

        assert!(session.apply(PortalCommand::Back, &context));
        assert_eq!(session.stack.current(), screens::ABOUT);

        assert!(session.apply(PortalCommand::Home, &context));
        assert_eq!(session.stack.current(), screens::LANDING);

        assert!(session.apply(PortalCommand::Back, &context));
        assert_eq!(session.status, "Nothing to go back to");

        assert!(!session.apply(PortalCommand::Quit, &context));
    }

    #[tokio::test]
    async fn test_session_auth_toggle() {
        let context = context(Arc::new(RecordingOpener::default()));
        let mut session = PortalSession::new(context.registry.clone());

        session.apply(PortalCommand::Press(HeaderControl::Auth), &context);
        assert!(session.is_logged_in);
        assert_eq!(session.status, "Logged in");

        session.apply(PortalCommand::Press(HeaderControl::Auth), &context);
        assert!(!session.is_logged_in);
        assert_eq!(session.status, "Logged out");
        assert_eq!(session.stack.current(), screens::LANDING);
    }

    #[tokio::test]
    async fn test_session_external_link() {
        let opener = Arc::new(RecordingOpener::default());
        let context = context(opener.clone());
        let mut session = PortalSession::new(context.registry.clone());

        session.apply(PortalCommand::Press(HeaderControl::Wiki), &context);
        assert_eq!(session.status, "Opening https://wiki.gov.gd/");
        assert_eq!(session.stack.current(), screens::LANDING);

        // Let the detached task run
        for _ in 0..4 {
            tokio::task::yield_now().await;
        }
        assert_eq!(
            opener.0.lock().unwrap().clone(),
            vec!["https://wiki.gov.gd/".to_string()]
        );
    }
}
