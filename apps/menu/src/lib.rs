//! # menu
//!
//! Presentation surfaces for the Chef's Menu core: an HTTP API, a one-shot
//! CLI and an interactive shell. Exposed as a library so integration tests
//! can drive the router and the shell directly.

pub mod api;
pub mod cli;
pub mod config;
pub mod error;

pub use config::MenuConfig;
pub use error::AppError;
