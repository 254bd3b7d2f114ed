//! Route listing command

use anyhow::Result;
use colored::Colorize;
use ea_portal_core::RouteRegistry;
use tracing::info;
use unicode_width::UnicodeWidthStr;

/// Show the registered routes in registration order
pub async fn routes_command(json: bool) -> Result<()> {
    info!("Listing registered routes");

    let registry = RouteRegistry::portal()?;

    if json {
        println!("{}", serde_json::to_string_pretty(registry.list_routes())?);
        return Ok(());
    }

    println!("{}\n", "🧭 Registered Screens".bold());

    let name_width = registry
        .list_routes()
        .iter()
        .map(|entry| entry.name.width())
        .max()
        .unwrap_or(0);

    for entry in registry.list_routes() {
        let padding = " ".repeat(name_width - entry.name.width());
        let marker = if entry.is_root() { " (default)" } else { "" };
        println!(
            "  {}{}  {}  {}{}",
            entry.name.cyan(),
            padding,
            entry.path.green(),
            entry.title,
            marker.dimmed()
        );
    }

    Ok(())
}
