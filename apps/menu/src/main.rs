//! # Chef's Menu
//!
//! The main binary for the menu-management tool.
//!
//! This application provides:
//! - HTTP REST API server (axum-based)
//! - CLI interface for the home and guest views
//! - Interactive staff shell
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    apps/menu (THE BINARY)                   │
//! │                                                             │
//! │  ┌─────────────┐    ┌─────────────┐    ┌──────────────┐    │
//! │  │   CLI       │    │   HTTP API  │    │    Shell     │    │
//! │  │  (clap)     │    │   (axum)    │    │ (stdin/out)  │    │
//! │  └──────┬──────┘    └──────┬──────┘    └──────┬───────┘    │
//! │         │                  │                  │            │
//! │         └──────────────────┼──────────────────┘            │
//! │                            ▼                               │
//! │                    ┌───────────────┐                       │
//! │                    │   menu-core   │                       │
//! │                    │  (THE LOGIC)  │                       │
//! │                    └───────────────┘                       │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```bash
//! # Start the HTTP server
//! menu server --host 0.0.0.0 --port 8080
//!
//! # One-shot views
//! menu overview
//! menu filter --course Main
//!
//! # Interactive session
//! menu shell --empty
//! ```

use clap::Parser;
use menu::cli;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

// =============================================================================
// APPLICATION ENTRY POINT
// =============================================================================

#[tokio::main]
async fn main() {
    let cli = cli::Cli::parse();

    // MENU_LOG_FORMAT=json enables machine-parseable output.
    let log_format = std::env::var("MENU_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

    let default_filter = if cli.verbose {
        "menu=debug,menu_core=debug,tower_http=debug"
    } else {
        "menu=info,tower_http=debug"
    };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| default_filter.into());

    // Logs go to stderr so they never interleave with rendered menus.
    match log_format.as_str() {
        "json" => {
            tracing_subscriber::registry()
                .with(filter)
                .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
                .init();
        }
        _ => {
            tracing_subscriber::registry()
                .with(filter)
                .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
                .init();
        }
    }

    if !cli.quiet && !cli.json_mode {
        print_banner();
    }

    if let Err(e) = cli::execute(cli).await {
        tracing::error!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Print the startup banner.
fn print_banner() {
    println!(
        r#"
  THE Chef's Menu v{}

  Starters • Mains • Desserts
"#,
        env!("CARGO_PKG_VERSION")
    );
}
