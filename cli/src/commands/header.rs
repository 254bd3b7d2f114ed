//! Header preview command

use crate::config::PortalConfigLoader;
use crate::interactive::components::header::{FLAG_COLORS, FLAG_LINES};
use crate::interactive::keys::key_hint;
use anyhow::Result;
use colored::Colorize;
use ea_portal_core::header::ControlKind;
use ea_portal_core::{Header, HeaderAction, PortalConfig};
use tracing::info;

/// Print the header for the given login state
pub async fn header_command(logged_in: bool, config_loader: PortalConfigLoader) -> Result<()> {
    info!("Rendering portal header");

    let config = config_loader.load().await?;
    for line in render_header(&config, logged_in) {
        println!("{}", line);
    }
    Ok(())
}

/// Header as plain terminal lines
pub fn render_header(config: &PortalConfig, logged_in: bool) -> Vec<String> {
    let header = Header::new(config, logged_in);
    let mut lines = Vec::new();

    for (i, flag) in FLAG_LINES.iter().enumerate() {
        let (r, g, b) = FLAG_COLORS.get(i).copied().unwrap_or((0, 122, 94));
        let text = match i {
            0 => header.title().bold().to_string(),
            1 => header.subtitle().dimmed().to_string(),
            _ => String::new(),
        };
        lines.push(format!("{}  {}", flag.truecolor(r, g, b), text));
    }
    lines.push(String::new());

    for item in header.items() {
        let detail = match header.action(item.control) {
            HeaderAction::External(url) => format!(" -> {}", url),
            _ => String::new(),
        };
        let label = match item.kind {
            ControlKind::NavLink => item.label.normal(),
            ControlKind::ExternalLink => item.label.underline(),
            ControlKind::Button => item.label.bold(),
        };
        lines.push(format!(
            "  [{}] {}{}",
            key_hint(item.control),
            label,
            detail.dimmed()
        ));
    }

    lines
}
