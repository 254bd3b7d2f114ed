//! # ea-portal CLI
//!
//! Command-line interface and terminal front end for the EA Portal.
//!
//! ## Usage
//!
//! - `ea-portal` - Start the interactive portal
//! - `ea-portal routes` - List registered screens
//! - `ea-portal resolve /about` - Resolve a path, URL or screen name
//! - `ea-portal href AboutScreen` - Print the full URL of a screen
//! - `ea-portal header` - Print the header
//! - `ea-portal open wiki` - Open an external link
//!
//! Configuration comes from a config file or from the `UI_URL_PREFIX`,
//! `DMS_URL` and `WIKI_URL` environment variables (a `.env` file is read
//! first).

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::fs::{self, File};
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

mod commands;
mod config;
mod interactive;

use commands::{
    header_command, href_command, interactive_command, open_command, resolve_command,
    routes_command,
};
use config::PortalConfigLoader;

/// ea-portal - Government of Grenada EA Portal
#[derive(Parser)]
#[command(name = "ea-portal")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Screens, links and header of the Government of Grenada EA Portal")]
#[command(long_about = None)]
struct Cli {
    /// Configuration file or directory path
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Prefix in-app paths are served under
    #[arg(long, global = true)]
    ui_url_prefix: Option<String>,

    /// Document-management system URL
    #[arg(long, global = true)]
    dms_url: Option<String>,

    /// Wiki URL
    #[arg(long, global = true)]
    wiki_url: Option<String>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// List registered screens in registration order
    Routes {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// Resolve a path or URL to its screen, or a screen to its path
    Resolve {
        /// `/about`, `https://<prefix>/about` or `AboutScreen`
        target: String,
    },

    /// Print the full URL of a screen
    Href {
        /// Screen name, e.g. `AboutScreen`
        screen: String,
    },

    /// Print the header
    Header {
        /// Render the header for a logged-in user
        #[arg(long)]
        logged_in: bool,
    },

    /// Open an external link (`dms`, `wiki` or a URL)
    Open {
        target: String,
    },
}

/// Build a configuration loader from CLI arguments
fn build_config_loader(cli: &Cli) -> PortalConfigLoader {
    let mut loader = PortalConfigLoader::new();

    if let Some(config_path) = &cli.config {
        loader = loader.with_config_override(config_path.clone());
    }

    if let Some(prefix) = &cli.ui_url_prefix {
        loader = loader.with_ui_url_prefix_override(prefix.clone());
    }

    if let Some(dms_url) = &cli.dms_url {
        loader = loader.with_dms_url_override(dms_url.clone());
    }

    if let Some(wiki_url) = &cli.wiki_url {
        loader = loader.with_wiki_url_override(wiki_url.clone());
    }

    loader
}

/// The full-screen UI owns the terminal, so interactive logs go to a file
fn init_interactive_tracing(filter: EnvFilter) {
    let log_file = dirs::cache_dir()
        .map(|dir| dir.join("ea-portal"))
        .and_then(|dir| fs::create_dir_all(&dir).ok().map(|_| dir.join("ea-portal.log")))
        .and_then(|path| File::options().create(true).append(true).open(path).ok());

    match log_file {
        Some(file) => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_ansi(false)
            .with_writer(Mutex::new(file))
            .init(),
        None => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::sink)
            .init(),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Deployment values may come from a .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    // Initialize tracing
    let from_env = std::env::var_os(EnvFilter::DEFAULT_ENV).is_some();
    if cli.command.is_none() {
        let filter = if from_env {
            EnvFilter::from_default_env()
        } else {
            EnvFilter::new(if cli.verbose { "debug" } else { "info" })
        };
        init_interactive_tracing(filter);
    } else if from_env {
        ea_portal_core::init_tracing();
    } else {
        ea_portal_core::init_tracing_with_debug(cli.verbose);
    }

    // Build configuration loader
    let config_loader = build_config_loader(&cli);

    match cli.command {
        Some(Commands::Routes { json }) => routes_command(json).await,
        Some(Commands::Resolve { target }) => resolve_command(target, config_loader).await,
        Some(Commands::Href { screen }) => href_command(screen, config_loader).await,
        Some(Commands::Header { logged_in }) => header_command(logged_in, config_loader).await,
        Some(Commands::Open { target }) => open_command(target, config_loader).await,
        // Default to interactive mode
        None => interactive_command(config_loader).await,
    }
}
