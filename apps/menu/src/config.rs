//! # Configuration Module
//!
//! Optional TOML configuration for the menu application.
//!
//! ```toml
//! currency_symbol = "R"
//! seed_demo = true
//!
//! [server]
//! host = "127.0.0.1"
//! port = 8080
//! ```
//!
//! Every key is optional. Command-line flags override file values.

use crate::error::AppError;
use menu_core::MenuStore;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Maximum configuration file size (64 KB).
const MAX_CONFIG_FILE_SIZE: u64 = 64 * 1024;

// =============================================================================
// CONFIG TYPES
// =============================================================================

/// HTTP server settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
        }
    }
}

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MenuConfig {
    /// Symbol prefixed to prices when rendering.
    pub currency_symbol: String,
    /// Start the session with the demonstration dishes.
    pub seed_demo: bool,
    pub server: ServerConfig,
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self {
            currency_symbol: "R".to_string(),
            seed_demo: true,
            server: ServerConfig::default(),
        }
    }
}

impl MenuConfig {
    /// Parse a configuration from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self, AppError> {
        let config: Self =
            toml::from_str(text).map_err(|e| AppError::Config(format!("Invalid TOML: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Load a configuration file.
    pub fn load(path: &Path) -> Result<Self, AppError> {
        let metadata = std::fs::metadata(path).map_err(|e| {
            AppError::Config(format!("Cannot read config '{}': {}", path.display(), e))
        })?;
        if metadata.len() > MAX_CONFIG_FILE_SIZE {
            return Err(AppError::Config(format!(
                "Config file size {} bytes exceeds maximum allowed {} bytes",
                metadata.len(),
                MAX_CONFIG_FILE_SIZE
            )));
        }

        let text = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&text)?;
        tracing::debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Load a configuration file if one was given, otherwise use defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, AppError> {
        match path {
            Some(p) => Self::load(p),
            None => Ok(Self::default()),
        }
    }

    /// Reject settings that can never work.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.server.host.trim().is_empty() {
            return Err(AppError::Config("server.host cannot be empty".to_string()));
        }
        if self.server.port == 0 {
            return Err(AppError::Config("server.port must be non-zero".to_string()));
        }
        Ok(())
    }

    /// Build the session store this configuration asks for.
    #[must_use]
    pub fn initial_store(&self) -> MenuStore {
        if self.seed_demo {
            MenuStore::seeded()
        } else {
            MenuStore::new()
        }
    }

    /// Render a formatted amount with the configured currency symbol.
    #[must_use]
    pub fn money(&self, amount: &str) -> String {
        format!("{}{}", self.currency_symbol, amount)
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn empty_file_uses_defaults() {
        let config = MenuConfig::from_toml_str("").unwrap();
        assert_eq!(config, MenuConfig::default());
        assert_eq!(config.initial_store().len(), 3);
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let config = MenuConfig::from_toml_str("seed_demo = false\n[server]\nport = 9000\n").unwrap();

        assert!(!config.seed_demo);
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.currency_symbol, "R");
        assert!(config.initial_store().is_empty());
    }

    #[test]
    fn unknown_keys_rejected() {
        let result = MenuConfig::from_toml_str("colour = \"green\"\n");
        assert!(matches!(result, Err(AppError::Config(_))));
    }

    #[test]
    fn zero_port_rejected() {
        let result = MenuConfig::from_toml_str("[server]\nport = 0\n");
        assert!(matches!(result, Err(AppError::Config(_))));
    }

    #[test]
    fn load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "currency_symbol = \"$\"").unwrap();

        let config = MenuConfig::load(file.path()).unwrap();
        assert_eq!(config.money("12.50"), "$12.50");
    }

    #[test]
    fn missing_file_is_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = MenuConfig::load(&dir.path().join("absent.toml"));
        assert!(matches!(result, Err(AppError::Config(_))));
    }
}
