//! Key bindings for the interactive portal

use ea_portal_core::router::screens;
use ea_portal_core::HeaderControl;
use iocraft::prelude::*;

/// What a key press asks the portal to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PortalCommand {
    /// Press a header control
    Press(HeaderControl),
    /// Navigate to a screen that has no header control
    Open(&'static str),
    Back,
    Home,
    Quit,
}

/// Key that presses a header control
pub fn key_hint(control: HeaderControl) -> char {
    match control {
        HeaderControl::About => 'a',
        HeaderControl::Repository => 'r',
        HeaderControl::Wiki => 'w',
        HeaderControl::Services => 's',
        HeaderControl::Search => '/',
        HeaderControl::Auth => 'l',
    }
}

/// Map a key to a portal command
pub fn command_for_key(code: KeyCode) -> Option<PortalCommand> {
    match code {
        KeyCode::Char('q') | KeyCode::Esc => Some(PortalCommand::Quit),
        KeyCode::Char('b') | KeyCode::Backspace => Some(PortalCommand::Back),
        KeyCode::Char('h') => Some(PortalCommand::Home),
        KeyCode::Char('v') => Some(PortalCommand::Open(screens::SURVEY_FORM)),
        KeyCode::Char(c) => HeaderControl::ALL
            .iter()
            .find(|&&control| key_hint(control) == c)
            .map(|&control| PortalCommand::Press(control)),
        _ => None,
    }
}

/// One-line help for the footer
pub fn footer_help() -> &'static str {
    "[h] home  [v] survey  [b] back  [q] quit"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_control_has_a_distinct_key() {
        let mut keys: Vec<char> = HeaderControl::ALL.iter().map(|&c| key_hint(c)).collect();
        keys.sort_unstable();
        keys.dedup();
        assert_eq!(keys.len(), HeaderControl::ALL.len());

        for control in HeaderControl::ALL {
            assert_eq!(
                command_for_key(KeyCode::Char(key_hint(control))),
                Some(PortalCommand::Press(control))
            );
        }
    }

    #[test]
    fn test_navigation_keys() {
        assert_eq!(command_for_key(KeyCode::Esc), Some(PortalCommand::Quit));
        assert_eq!(command_for_key(KeyCode::Backspace), Some(PortalCommand::Back));
        assert_eq!(command_for_key(KeyCode::Char('h')), Some(PortalCommand::Home));
        assert_eq!(
            command_for_key(KeyCode::Char('v')),
            Some(PortalCommand::Open(screens::SURVEY_FORM))
        );
        assert_eq!(command_for_key(KeyCode::Char('x')), None);
        assert_eq!(command_for_key(KeyCode::Enter), None);
    }
}
