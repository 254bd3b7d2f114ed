//! Portal header component
//!
//! Flag, branding and the header controls with their key hints.

use crate::interactive::keys::key_hint;
use ea_portal_core::header::ControlKind;
use ea_portal_core::router::screens;
use ea_portal_core::{Header, HeaderControl, PortalConfig};
use iocraft::prelude::*;
use std::sync::Arc;

// Grenada flag in block characters, one color per line
pub const FLAG_LINES: &[&str] = &["▛▀▀▀▀▀▜", "▌ ★ ★ ▐", "▙▄▄▄▄▄▟"];

pub const FLAG_COLORS: &[(u8, u8, u8)] = &[
    (206, 17, 38),  // Red border
    (252, 209, 22), // Gold stars
    (0, 122, 94),  // Green
];

#[derive(Default, Props)]
pub struct PortalHeaderProps {
    pub config: Option<Arc<PortalConfig>>,
    pub is_logged_in: bool,
    /// Screen currently shown, highlighted in the nav links
    pub active_screen: Option<String>,
}

/// Whether a control leads to the active screen
fn is_active(control: HeaderControl, active_screen: Option<&str>) -> bool {
    match control {
        HeaderControl::About => active_screen == Some(screens::ABOUT),
        HeaderControl::Services => active_screen == Some(screens::SERVICES),
        _ => false,
    }
}

/// Header bar: flag and titles on the left, controls on the right
#[component]
pub fn PortalHeader(_hooks: Hooks, props: &PortalHeaderProps) -> impl Into<AnyElement<'static>> {
    let Some(config) = props.config.as_ref() else {
        return element! { View(key: "portal-header-empty") };
    };

    let header = Header::new(config, props.is_logged_in);
    let active_screen = props.active_screen.as_deref();

    element! {
        View(
            key: "portal-header",
            width: 100pct,
            flex_direction: FlexDirection::Row,
            justify_content: JustifyContent::SpaceBetween,
            align_items: AlignItems::Center,
            border_style: BorderStyle::Round,
            border_color: Color::Grey,
            padding_left: 1,
            padding_right: 1,
        ) {
            View(flex_direction: FlexDirection::Row, gap: 1, align_items: AlignItems::Center) {
                View(flex_direction: FlexDirection::Column) {
                    #(FLAG_LINES.iter().enumerate().map(|(i, line)| {
                        let color = FLAG_COLORS.get(i).unwrap_or(&(0, 122, 94));
                        element! {
                            Text(
                                key: format!("flag-{}", i),
                                content: *line,
                                color: Color::Rgb { r: color.0, g: color.1, b: color.2 },
                            )
                        }
                    }).collect::<Vec<_>>())
                }
                View(flex_direction: FlexDirection::Column) {
                    Text(content: header.title(), weight: Weight::Bold)
                    Text(content: header.subtitle(), color: Color::Grey)
                }
            }

            View(flex_direction: FlexDirection::Row, gap: 2, align_items: AlignItems::Center) {
                #(header.items().into_iter().map(|item| {
                    let active = is_active(item.control, active_screen);
                    let color = match item.kind {
                        _ if active => Color::Yellow,
                        ControlKind::NavLink => Color::White,
                        ControlKind::ExternalLink => Color::Cyan,
                        ControlKind::Button => Color::Green,
                    };
                    let weight = if active || item.kind == ControlKind::Button {
                        Weight::Bold
                    } else {
                        Weight::Normal
                    };
                    element! {
                        Text(
                            key: format!("control-{:?}", item.control),
                            content: format!("[{}] {}", key_hint(item.control), item.label),
                            color: color,
                            weight: weight,
                        )
                    }
                }).collect::<Vec<_>>())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flag_has_a_color_per_line() {
        assert_eq!(FLAG_LINES.len(), FLAG_COLORS.len());
    }

    #[test]
    fn test_active_control() {
        assert!(is_active(HeaderControl::About, Some(screens::ABOUT)));
        assert!(!is_active(HeaderControl::About, Some(screens::SERVICES)));
        assert!(is_active(HeaderControl::Services, Some(screens::SERVICES)));
        assert!(!is_active(HeaderControl::Wiki, Some(screens::ABOUT)));
        assert!(!is_active(HeaderControl::Auth, None));
    }
}
