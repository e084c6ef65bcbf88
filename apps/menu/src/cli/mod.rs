//! # Menu CLI Module
//!
//! This module implements the CLI interface for the menu tool.
//!
//! ## Available Commands
//!
//! - `server` - Start the HTTP server
//! - `overview` - Show item count and per-course averages
//! - `filter` - Show the guest view for one course (or All)
//! - `shell` - Interactive staff session: list, add, remove, filter

mod commands;
mod shell;

use crate::config::MenuConfig;
use crate::error::AppError;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub use commands::*;
pub use shell::{Shell, ShellCommand};

// =============================================================================
// CLI STRUCTURE
// =============================================================================

/// Chef's Menu - single-screen menu management.
///
/// The menu lives in memory for the duration of one session.
#[derive(Parser, Debug)]
#[command(name = "menu")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress banner output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Path to a TOML configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Start with an empty menu instead of the demonstration dishes
    #[arg(long, global = true)]
    pub empty: bool,

    /// Output in JSON format (for programmatic access)
    #[arg(long, global = true)]
    pub json_mode: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start HTTP server
    Server {
        /// Host to bind to (overrides config)
        #[arg(short = 'H', long)]
        host: Option<String>,

        /// Port to bind to (overrides config)
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Show item count and average price per course
    Overview,

    /// Show the guest menu for a course
    Filter {
        /// Course to show: All, Starter, Main or Dessert
        #[arg(short = 'C', long, default_value = "All")]
        course: String,
    },

    /// Start an interactive session
    Shell,
}

impl Cli {
    /// Load the configuration file and apply global flag overrides.
    pub fn resolve_config(&self) -> Result<MenuConfig, AppError> {
        let mut config = MenuConfig::load_or_default(self.config.as_deref())?;
        if self.empty {
            config.seed_demo = false;
        }
        Ok(config)
    }
}

// =============================================================================
// COMMAND EXECUTION
// =============================================================================

/// Execute the CLI with parsed arguments.
pub async fn execute(cli: Cli) -> Result<(), AppError> {
    let mut config = cli.resolve_config()?;
    let json_mode = cli.json_mode;

    match cli.command {
        Some(Commands::Server { host, port }) => {
            if let Some(host) = host {
                config.server.host = host;
            }
            if let Some(port) = port {
                config.server.port = port;
            }
            config.validate()?;
            cmd_server(&config).await
        }
        Some(Commands::Overview) => cmd_overview(&config, json_mode),
        Some(Commands::Filter { course }) => cmd_filter(&config, json_mode, &course),
        Some(Commands::Shell) => cmd_shell(&config),
        // No subcommand - show the home screen by default
        None => cmd_overview(&config, json_mode),
    }
}
