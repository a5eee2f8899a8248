use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use wardrobe_core::DEFAULT_TABLE;
use wardrobe_store::ConnectionOptions;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid json config: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid toml config: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("config key '{0}' must not be empty")]
    Missing(&'static str),
}

/// Settings read from `config.json` (or a TOML file with the same keys).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub username: String,
    #[serde(default)]
    pub password: String,
    pub database: String,
    #[serde(default = "default_table")]
    pub table: String,
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    /// Guard against same-tick id collisions within a category.
    #[serde(default)]
    pub unique_ticks: bool,
}

fn default_table() -> String {
    DEFAULT_TABLE.to_string()
}

fn default_host() -> String {
    "localhost".to_string()
}

fn default_port() -> u16 {
    3306
}

impl Config {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&content, is_json(path))
    }

    /// Like [`Config::load`], but `None` when the file does not exist.
    pub fn load_optional(path: &Path) -> Result<Option<Self>, ConfigError> {
        if path.exists() {
            Self::load(path).map(Some)
        } else {
            Ok(None)
        }
    }

    pub fn parse(content: &str, json: bool) -> Result<Self, ConfigError> {
        let config: Config = if json {
            serde_json::from_str(content)?
        } else {
            toml::from_str(content)?
        };
        config.check()?;
        Ok(config)
    }

    fn check(&self) -> Result<(), ConfigError> {
        if self.username.is_empty() {
            return Err(ConfigError::Missing("username"));
        }
        if self.database.is_empty() {
            return Err(ConfigError::Missing("database"));
        }
        if self.table.is_empty() {
            return Err(ConfigError::Missing("table"));
        }
        Ok(())
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    pub fn database(&self) -> &str {
        &self.database
    }

    pub fn table(&self) -> &str {
        &self.table
    }

    pub fn connection_options(&self) -> ConnectionOptions {
        ConnectionOptions {
            host: self.host.clone(),
            port: self.port,
            username: self.username.clone(),
            password: self.password.clone(),
            database: self.database.clone(),
            table: self.table.clone(),
        }
    }
}

fn is_json(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_json_with_defaults() {
        let config = Config::parse(
            r#"{"username": "root", "password": "pw", "database": "shop", "table": "Clothes"}"#,
            true,
        )
        .expect("parse json config");

        assert_eq!(config.username(), "root");
        assert_eq!(config.password(), "pw");
        assert_eq!(config.database(), "shop");
        assert_eq!(config.table(), "Clothes");
        assert_eq!(config.host, "localhost");
        assert_eq!(config.port, 3306);
        assert!(!config.unique_ticks);
    }

    #[test]
    fn parses_toml() {
        let config = Config::parse(
            "username = \"app\"\ndatabase = \"shop\"\nport = 3307\nunique_ticks = true\n",
            false,
        )
        .expect("parse toml config");

        let options = config.connection_options();
        assert_eq!(options.port, 3307);
        assert_eq!(options.table, DEFAULT_TABLE);
        assert_eq!(options.password, "");
        assert!(config.unique_ticks);
    }

    #[test]
    fn rejects_empty_required_keys() {
        let err = Config::parse(r#"{"username": "", "database": "shop"}"#, true).unwrap_err();
        assert!(matches!(err, ConfigError::Missing("username")));
    }

    #[test]
    fn detects_json_by_extension() {
        assert!(is_json(Path::new("config.json")));
        assert!(is_json(Path::new("conf/CONFIG.JSON")));
        assert!(!is_json(Path::new("wardrobe.toml")));
    }
}
