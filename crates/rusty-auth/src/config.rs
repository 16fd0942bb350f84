// File: src/config.rs
// Purpose: Configuration parsing from rusty-auth.toml

use crate::navigation::Route;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Default configuration file name
pub const CONFIG_FILE: &str = "rusty-auth.toml";

/// Form configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Config {
    #[serde(default)]
    pub routes: RoutesConfig,

    #[serde(default)]
    pub presenter: PresenterConfig,
}

/// Paths of the application routes
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RoutesConfig {
    /// Login page (default: "/")
    #[serde(default = "default_login")]
    pub login: String,

    /// Signup page (default: "/signup")
    #[serde(default = "default_signup")]
    pub signup: String,

    /// Destination after a successful submission (default: "/product-catalog")
    #[serde(default = "default_catalog")]
    pub catalog: String,
}

/// Error popup configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PresenterConfig {
    #[serde(default = "default_title")]
    pub title: String,
}

// Default values
fn default_login() -> String {
    "/".to_string()
}

fn default_signup() -> String {
    "/signup".to_string()
}

fn default_catalog() -> String {
    "/product-catalog".to_string()
}

fn default_title() -> String {
    "Error".to_string()
}

impl Default for RoutesConfig {
    fn default() -> Self {
        Self {
            login: default_login(),
            signup: default_signup(),
            catalog: default_catalog(),
        }
    }
}

impl Default for PresenterConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
        }
    }
}

impl RoutesConfig {
    /// Configured path of a route
    pub fn path(&self, route: Route) -> &str {
        match route {
            Route::Login => &self.login,
            Route::Signup => &self.signup,
            Route::Catalog => &self.catalog,
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        // If file doesn't exist or is empty, return default config
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;

        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let config = Self::from_toml_str(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", path))?;

        tracing::debug!(?path, "loaded form configuration");
        Ok(config)
    }

    /// Parse configuration from TOML source
    pub fn from_toml_str(source: &str) -> Result<Self> {
        Ok(toml::from_str(source)?)
    }

    /// Load configuration from default path (./rusty-auth.toml)
    pub fn load_default() -> Result<Self> {
        Self::load(CONFIG_FILE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.routes.path(Route::Login), "/");
        assert_eq!(config.routes.path(Route::Signup), "/signup");
        assert_eq!(config.routes.path(Route::Catalog), "/product-catalog");
        assert_eq!(config.presenter.title, "Error");
    }

    #[test]
    fn test_partial_config() {
        let toml = r#"
            [routes]
            catalog = "/shop"
        "#;
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.routes.catalog, "/shop");
        assert_eq!(config.routes.login, "/");
        assert_eq!(config.presenter.title, "Error");
    }

    #[test]
    fn test_load_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load(dir.path().join(CONFIG_FILE)).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[presenter]\ntitle = \"Oops\"").unwrap();

        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.presenter.title, "Oops");
        assert_eq!(config.routes, RoutesConfig::default());
    }

    #[test]
    fn test_load_invalid_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[routes\nlogin = 3").unwrap();

        let err = Config::load(file.path()).unwrap_err();
        assert!(err.to_string().starts_with("Failed to parse config file"));
    }
}
