//! # Interactive Shell
//!
//! A line-oriented staff session over one in-memory menu. It plays the role
//! of the single-screen app: a home view with the overview, an add form that
//! prompts for each field, removal with a confirmation prompt, and the guest
//! filter.
//!
//! Positions are shown one-based and converted to zero-based core indices.

use super::commands::{render_item, render_items, render_overview};
use crate::config::MenuConfig;
use crate::error::AppError;
use menu_core::{CourseFilter, MenuCandidate, MenuStore, filter_by_course};
use std::io::{BufRead, Write};

const HELP: &str = "\
Commands:
  home             Overview and full menu
  list             Full menu with positions
  add              Add a dish (prompts for each field)
  remove <n>       Remove the dish at position n
  filter [course]  Guest view: All, Starter, Main or Dessert
  overview         Item count and average prices
  help             Show this help
  quit             End the session (the menu is discarded)";

// =============================================================================
// COMMAND PARSING
// =============================================================================

/// One line of shell input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    Home,
    List,
    Add,
    Remove(i64),
    Filter(String),
    Overview,
    Help,
    Quit,
    Empty,
    Invalid(String),
}

impl ShellCommand {
    /// Parse a line of input. Keywords are case-insensitive.
    pub fn parse(line: &str) -> Self {
        let mut words = line.split_whitespace();
        let Some(keyword) = words.next() else {
            return Self::Empty;
        };
        let argument = words.collect::<Vec<_>>().join(" ");

        match keyword.to_ascii_lowercase().as_str() {
            "home" => Self::Home,
            "list" | "ls" => Self::List,
            "add" => Self::Add,
            "remove" | "rm" => match argument.parse::<i64>() {
                Ok(position) => Self::Remove(position),
                Err(_) => Self::Invalid(format!("Usage: remove <n>, got {:?}", argument)),
            },
            "filter" => {
                if argument.is_empty() {
                    Self::Filter("All".to_string())
                } else {
                    Self::Filter(argument)
                }
            }
            "overview" | "stats" => Self::Overview,
            "help" | "?" => Self::Help,
            "quit" | "exit" | "q" => Self::Quit,
            other => Self::Invalid(format!("Unknown command {:?}. Type 'help'.", other)),
        }
    }
}

// =============================================================================
// SHELL
// =============================================================================

/// Interactive session over one menu store.
pub struct Shell<R, W> {
    config: MenuConfig,
    store: MenuStore,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    /// Create a shell whose store is built from the configuration.
    pub fn new(config: MenuConfig, input: R, output: W) -> Self {
        let store = config.initial_store();
        Self {
            config,
            store,
            input,
            output,
        }
    }

    /// The session's menu.
    pub fn store(&self) -> &MenuStore {
        &self.store
    }

    /// The writer the shell renders to.
    pub fn output(&self) -> &W {
        &self.output
    }

    /// Read and execute commands until `quit` or end of input.
    pub fn run(&mut self) -> Result<(), AppError> {
        writeln!(self.output, "THE Chef's Menu. Type 'help' for commands.")?;
        self.show_home()?;

        while let Some(line) = self.prompt("menu> ")? {
            match ShellCommand::parse(&line) {
                ShellCommand::Quit => break,
                command => self.dispatch(command)?,
            }
        }

        tracing::debug!("Shell session ended with {} items", self.store.len());
        self.output.flush()?;
        Ok(())
    }

    fn dispatch(&mut self, command: ShellCommand) -> Result<(), AppError> {
        match command {
            ShellCommand::Home => self.show_home(),
            ShellCommand::List => self.show_list(),
            ShellCommand::Add => self.add_item(),
            ShellCommand::Remove(position) => self.remove_item(position),
            ShellCommand::Filter(selector) => self.show_filter(&selector),
            ShellCommand::Overview => {
                writeln!(
                    self.output,
                    "{}",
                    render_overview(&self.config, self.store.snapshot())
                )?;
                Ok(())
            }
            ShellCommand::Help => {
                writeln!(self.output, "{}", HELP)?;
                Ok(())
            }
            ShellCommand::Invalid(message) => {
                writeln!(self.output, "{}", message)?;
                Ok(())
            }
            ShellCommand::Empty | ShellCommand::Quit => Ok(()),
        }
    }

    /// Write a prompt and read one line. `None` at end of input.
    fn prompt(&mut self, label: &str) -> Result<Option<String>, AppError> {
        write!(self.output, "{}", label)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    fn show_home(&mut self) -> Result<(), AppError> {
        writeln!(
            self.output,
            "{}",
            render_overview(&self.config, self.store.snapshot())
        )?;
        self.show_list()
    }

    fn show_list(&mut self) -> Result<(), AppError> {
        writeln!(
            self.output,
            "{}",
            render_items(
                &self.config,
                self.store.snapshot(),
                "No menu items added yet."
            )
        )?;
        Ok(())
    }

    fn show_filter(&mut self, raw: &str) -> Result<(), AppError> {
        let selector = match raw.parse::<CourseFilter>() {
            Ok(s) => s,
            Err(e) => {
                writeln!(self.output, "Error: {}", e)?;
                return Ok(());
            }
        };

        let items = filter_by_course(self.store.snapshot(), selector);
        writeln!(self.output, "Guest Menu: {}", selector)?;
        writeln!(
            self.output,
            "{}",
            render_items(&self.config, &items, "No menu items to display.")
        )?;
        Ok(())
    }

    fn add_item(&mut self) -> Result<(), AppError> {
        let Some(dish_name) = self.prompt("Dish name: ")? else {
            return self.cancel_add();
        };
        let Some(description) = self.prompt("Description: ")? else {
            return self.cancel_add();
        };
        let Some(course) = self.prompt("Course (Starter/Main/Dessert): ")? else {
            return self.cancel_add();
        };
        let Some(price) = self.prompt("Price: ")? else {
            return self.cancel_add();
        };

        let candidate = MenuCandidate::new(dish_name, description, course, price);
        match self.store.add(&candidate) {
            Ok(snapshot) => {
                let total = snapshot.len();
                if let Some(item) = snapshot.last() {
                    tracing::info!(
                        dish = %item.dish_name(),
                        course = %item.course(),
                        total,
                        "Menu item added"
                    );
                    writeln!(
                        self.output,
                        "Added:\n{}",
                        render_item(&self.config, total, item)
                    )?;
                }
                writeln!(self.output, "Menu now has {} items.", total)?;
            }
            Err(e) => {
                tracing::warn!("Rejected menu item: {}", e);
                writeln!(self.output, "Error: {}. Item not added.", e)?;
            }
        }
        Ok(())
    }

    fn cancel_add(&mut self) -> Result<(), AppError> {
        writeln!(self.output)?;
        writeln!(self.output, "Add cancelled.")?;
        Ok(())
    }

    fn remove_item(&mut self, position: i64) -> Result<(), AppError> {
        let index = position.saturating_sub(1);
        let Some(name) = usize::try_from(index)
            .ok()
            .and_then(|i| self.store.get(i))
            .map(|item| item.dish_name().to_string())
        else {
            writeln!(
                self.output,
                "No item at position {}; the menu has {} items.",
                position,
                self.store.len()
            )?;
            return Ok(());
        };

        let answer = self.prompt(&format!("Remove \"{}\" from menu? [y/N] ", name))?;
        let confirmed = answer
            .as_deref()
            .map(str::trim)
            .is_some_and(|a| a.eq_ignore_ascii_case("y") || a.eq_ignore_ascii_case("yes"));
        if !confirmed {
            writeln!(self.output, "Kept \"{}\".", name)?;
            return Ok(());
        }

        let removed = self.store.remove(index)?;
        tracing::info!(
            dish = %removed.dish_name(),
            index,
            total = self.store.len(),
            "Menu item removed"
        );
        writeln!(
            self.output,
            "Removed \"{}\". Menu now has {} items.",
            removed.dish_name(),
            self.store.len()
        )?;
        Ok(())
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic)]
mod tests {
    use super::*;
    use menu_core::Course;
    use std::io::Cursor;

    fn run_session(input: &str) -> (MenuStore, String) {
        let mut shell = Shell::new(MenuConfig::default(), Cursor::new(input.to_string()), Vec::new());
        shell.run().unwrap();
        let output = String::from_utf8(shell.output().clone()).unwrap();
        (shell.store().clone(), output)
    }

    #[test]
    fn parse_commands() {
        assert_eq!(ShellCommand::parse("  "), ShellCommand::Empty);
        assert_eq!(ShellCommand::parse("LIST"), ShellCommand::List);
        assert_eq!(ShellCommand::parse("rm 2"), ShellCommand::Remove(2));
        assert_eq!(
            ShellCommand::parse("filter"),
            ShellCommand::Filter("All".to_string())
        );
        assert_eq!(
            ShellCommand::parse("filter Main"),
            ShellCommand::Filter("Main".to_string())
        );
        assert!(matches!(ShellCommand::parse("remove x"), ShellCommand::Invalid(_)));
        assert!(matches!(ShellCommand::parse("dance"), ShellCommand::Invalid(_)));
    }

    #[test]
    fn home_screen_shown_on_start() {
        let (store, output) = run_session("quit\n");
        assert_eq!(store.len(), 3);
        assert!(output.contains("Total menu items: 3"));
        assert!(output.contains("Tomato Soup"));
    }

    #[test]
    fn add_prompts_for_each_field() {
        let (store, output) = run_session("add\n Soup \n Nice \nstarter\n45\nquit\n");

        assert_eq!(store.len(), 4);
        let item = &store.snapshot()[3];
        assert_eq!(item.dish_name(), "Soup");
        assert_eq!(item.course(), Course::Starter);
        assert!(output.contains("Menu now has 4 items."));
    }

    #[test]
    fn invalid_add_reports_error_and_keeps_menu() {
        let (store, output) = run_session("add\nSoup\nNice\nMain\nfree\n");

        assert_eq!(store.len(), 3);
        assert!(output.contains("Price must be a valid number"));
        assert!(output.contains("Item not added."));
    }

    #[test]
    fn add_cancelled_at_end_of_input() {
        let (store, output) = run_session("add\nSoup\n");
        assert_eq!(store.len(), 3);
        assert!(output.contains("Add cancelled."));
    }

    #[test]
    fn remove_requires_confirmation() {
        let (store, output) = run_session("remove 1\nn\n");
        assert_eq!(store.len(), 3);
        assert!(output.contains("Kept \"Tomato Soup\"."));

        let (store, output) = run_session("remove 1\ny\n");
        assert_eq!(store.len(), 2);
        assert_eq!(store.snapshot()[0].dish_name(), "Grilled Chicken");
        assert!(output.contains("Removed \"Tomato Soup\"."));
    }

    #[test]
    fn remove_out_of_range_position() {
        let (store, output) = run_session("remove 0\nremove 4\n");
        assert_eq!(store.len(), 3);
        assert!(output.contains("No item at position 0; the menu has 3 items."));
        assert!(output.contains("No item at position 4; the menu has 3 items."));
    }

    #[test]
    fn filter_shows_only_selected_course() {
        let (_, output) = run_session("filter dessert\n");
        let guest = output.split("Guest Menu: Dessert").nth(1).unwrap();

        assert!(guest.contains("Chocolate Brownie"));
        assert!(!guest.contains("Grilled Chicken"));
    }

    #[test]
    fn filter_unknown_course_reports_error() {
        let (_, output) = run_session("filter brunch\n");
        assert!(output.contains("Error: Unknown course"));
    }
}
