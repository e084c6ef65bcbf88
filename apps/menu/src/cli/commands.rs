//! # CLI Command Implementations
//!
//! This module contains the actual implementations of CLI commands and the
//! text rendering they share with the interactive shell.

use super::shell::Shell;
use crate::api;
use crate::config::MenuConfig;
use crate::error::AppError;
use menu_core::{CourseFilter, MenuError, MenuItem, filter_by_course, overview};
use std::io;

// =============================================================================
// RENDERING
// =============================================================================

/// Render one dish as a card. `position` is one-based.
pub fn render_item(config: &MenuConfig, position: usize, item: &MenuItem) -> String {
    format!(
        "{:>3}. {} ({})\n     {}\n     {}",
        position,
        item.dish_name(),
        item.course(),
        item.description(),
        config.money(&item.formatted_price())
    )
}

/// Render a list of dishes, or a placeholder when there are none.
pub fn render_items(config: &MenuConfig, items: &[MenuItem], empty_message: &str) -> String {
    if items.is_empty() {
        return empty_message.to_string();
    }
    items
        .iter()
        .enumerate()
        .map(|(i, item)| render_item(config, i + 1, item))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Render the home-screen overview of a snapshot.
pub fn render_overview(config: &MenuConfig, snapshot: &[MenuItem]) -> String {
    let summary = overview(snapshot);
    let mut out = String::new();
    out.push_str("Menu Overview\n");
    out.push_str("=============\n");
    out.push_str(&format!("Total menu items: {}\n", summary.total_items));
    out.push('\n');
    out.push_str("Average Prices:\n");
    for avg in &summary.averages {
        out.push_str(&format!(
            "  {}s: {}\n",
            avg.course,
            config.money(&avg.average)
        ));
    }
    out
}

/// Print a value as pretty JSON.
fn print_json(value: &impl serde::Serialize) -> Result<(), AppError> {
    let text = serde_json::to_string_pretty(value)?;
    println!("{}", text);
    Ok(())
}

// =============================================================================
// SERVER COMMAND
// =============================================================================

/// Start the HTTP server.
pub async fn cmd_server(config: &MenuConfig) -> Result<(), AppError> {
    let store = config.initial_store();

    println!("Chef's Menu Server Starting...");
    println!();
    println!("Configuration:");
    println!("  Host:     {}", config.server.host);
    println!("  Port:     {}", config.server.port);
    println!("  Items:    {}", store.len());
    println!();
    println!("Endpoints:");
    println!("  GET    /menu          - List dishes");
    println!("  POST   /menu          - Add a dish");
    println!("  DELETE /menu/{{index}}  - Remove a dish");
    println!("  GET    /menu/filter   - Guest filter");
    println!("  GET    /menu/average  - Course average");
    println!("  GET    /overview      - Menu overview");
    println!("  GET    /health        - Health check");
    println!();
    println!("Press Ctrl+C to stop");
    println!();

    let addr = format!("{}:{}", config.server.host, config.server.port);
    api::run_server(&addr, store).await
}

// =============================================================================
// OVERVIEW COMMAND
// =============================================================================

/// Show item count, per-course averages and the full menu.
pub fn cmd_overview(config: &MenuConfig, json_mode: bool) -> Result<(), AppError> {
    let store = config.initial_store();

    if json_mode {
        let output = serde_json::json!({
            "overview": overview(store.snapshot()),
            "items": api::MenuResponse::from_snapshot(store.snapshot()).items,
        });
        return print_json(&output);
    }

    println!("{}", render_overview(config, store.snapshot()));
    println!(
        "{}",
        render_items(config, store.snapshot(), "No menu items added yet.")
    );
    Ok(())
}

// =============================================================================
// FILTER COMMAND
// =============================================================================

/// Show the guest view for one course.
pub fn cmd_filter(config: &MenuConfig, json_mode: bool, course: &str) -> Result<(), AppError> {
    let selector: CourseFilter = course.parse().map_err(MenuError::from)?;
    let store = config.initial_store();

    if json_mode {
        let response = api::MenuResponse::filtered(store.snapshot(), selector);
        return print_json(&response);
    }

    let items = filter_by_course(store.snapshot(), selector);
    println!("Guest Menu: {}", selector);
    println!("{}", "=".repeat(12 + selector.to_string().len()));
    println!(
        "{}",
        render_items(config, &items, "No menu items to display.")
    );
    Ok(())
}

// =============================================================================
// SHELL COMMAND
// =============================================================================

/// Run an interactive session on stdin/stdout.
pub fn cmd_shell(config: &MenuConfig) -> Result<(), AppError> {
    let stdin = io::stdin();
    let mut shell = Shell::new(config.clone(), stdin.lock(), io::stdout());
    shell.run()
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use menu_core::MenuStore;

    #[test]
    fn item_card_uses_currency_symbol() {
        let config = MenuConfig::default();
        let store = MenuStore::seeded();
        let card = render_item(&config, 1, &store.snapshot()[0]);

        assert!(card.contains("1. Tomato Soup (Starter)"));
        assert!(card.contains("R45.00"));
    }

    #[test]
    fn empty_list_shows_placeholder() {
        let config = MenuConfig::default();
        assert_eq!(
            render_items(&config, &[], "No menu items added yet."),
            "No menu items added yet."
        );
    }

    #[test]
    fn overview_lists_course_averages() {
        let config = MenuConfig::default();
        let text = render_overview(&config, MenuStore::seeded().snapshot());

        assert!(text.contains("Total menu items: 3"));
        assert!(text.contains("Starters: R45.00"));
        assert!(text.contains("Mains: R120.00"));
        assert!(text.contains("Desserts: R55.00"));
    }

    #[test]
    fn filter_rejects_unknown_course() {
        let config = MenuConfig::default();
        let result = cmd_filter(&config, false, "Brunch");
        assert!(matches!(result, Err(AppError::Menu(MenuError::Validation(_)))));
    }

    #[test]
    fn json_mode_commands_succeed() {
        let config = MenuConfig::default();
        assert!(cmd_overview(&config, true).is_ok());
        assert!(cmd_filter(&config, true, "Dessert").is_ok());
    }
}
