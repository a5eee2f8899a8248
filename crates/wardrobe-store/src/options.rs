use serde::{Deserialize, Serialize};
use sqlx::mysql::MySqlConnectOptions;

use wardrobe_core::DEFAULT_TABLE;

use crate::error::{Result, StoreError};

/// Where and as whom to connect, and which table holds the items.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectionOptions {
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: String,
    pub database: String,
    pub table: String,
}

impl Default for ConnectionOptions {
    fn default() -> Self {
        Self {
            host: "localhost".to_string(),
            port: 3306,
            username: String::new(),
            password: String::new(),
            database: String::new(),
            table: DEFAULT_TABLE.to_string(),
        }
    }
}

impl ConnectionOptions {
    /// Database and table names are spliced into DDL, so only plain
    /// identifiers are accepted.
    pub fn validate(&self) -> Result<()> {
        validate_identifier(&self.database)?;
        validate_identifier(&self.table)
    }

    /// Options for the server itself, without selecting a database.
    pub fn server_connect_options(&self) -> MySqlConnectOptions {
        MySqlConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .username(&self.username)
            .password(&self.password)
    }

    pub fn connect_options(&self) -> MySqlConnectOptions {
        self.server_connect_options().database(&self.database)
    }

    /// Connection details safe to log or print.
    pub fn redacted(&self) -> RedactedConnection {
        let auth = if self.password.is_empty() {
            self.username.clone()
        } else {
            format!("{}:***", self.username)
        };
        RedactedConnection {
            engine: "mysql".to_string(),
            user: self.username.clone(),
            host: self.host.clone(),
            port: self.port,
            database: self.database.clone(),
            redacted: format!(
                "mysql://{auth}@{}:{}/{}",
                self.host, self.port, self.database
            ),
        }
    }
}

/// Connection metadata with secrets redacted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RedactedConnection {
    pub engine: String,
    pub user: String,
    pub host: String,
    pub port: u16,
    pub database: String,
    pub redacted: String,
}

/// Accept `name` only if it can be spliced into SQL unquoted: ASCII letters,
/// digits and `_`, at most 64 characters.
pub fn validate_identifier(name: &str) -> Result<()> {
    let plain = !name.is_empty()
        && name.len() <= 64
        && name
            .chars()
            .all(|ch| ch.is_ascii_alphanumeric() || ch == '_');
    if plain {
        Ok(())
    } else {
        Err(StoreError::InvalidIdentifier(name.to_string()))
    }
}
