//! Runtime settings read from the environment (optionally seeded from `.env`).

use crate::error::ConfigError;
use std::net::SocketAddr;

pub const DEFAULT_DATABASE_URL: &str = "postgres://localhost/message_board";
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:5555";
pub const DEFAULT_SCHEMA: &str = "public";
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;
pub const DEFAULT_BODY_LIMIT_BYTES: usize = 64 * 1024;

/// `DATABASE_URL` value selecting the in-process store.
pub const MEMORY_URL: &str = "memory://";

/// Where messages are persisted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StoreBackend {
    Postgres { url: String, max_connections: u32 },
    Memory,
}

#[derive(Clone, Debug)]
pub struct Settings {
    pub backend: StoreBackend,
    /// Schema holding the `messages` table. Plain identifier only.
    pub schema: String,
    pub bind_addr: SocketAddr,
    pub body_limit_bytes: usize,
}

impl Settings {
    /// Read settings from the process environment.
    /// Call `dotenvy::dotenv()` first to pick up `.env`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build settings from any key lookup; unset keys fall back to defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL").unwrap_or_else(|| DEFAULT_DATABASE_URL.into());
        let max_connections = parse_or(
            "DATABASE_MAX_CONNECTIONS",
            lookup("DATABASE_MAX_CONNECTIONS"),
            DEFAULT_MAX_CONNECTIONS,
        )?;
        if max_connections == 0 {
            return Err(ConfigError::InvalidValue {
                key: "DATABASE_MAX_CONNECTIONS",
                value: "0".into(),
            });
        }
        let backend = if database_url.trim() == MEMORY_URL {
            StoreBackend::Memory
        } else {
            StoreBackend::Postgres {
                url: database_url,
                max_connections,
            }
        };

        let schema = lookup("MESSAGE_BOARD_SCHEMA").unwrap_or_else(|| DEFAULT_SCHEMA.into());
        if !is_plain_identifier(&schema) {
            return Err(ConfigError::InvalidSchema(schema));
        }

        let bind_raw = lookup("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.into());
        let bind_addr = bind_raw.parse().map_err(|_| ConfigError::InvalidValue {
            key: "BIND_ADDR",
            value: bind_raw.clone(),
        })?;

        let body_limit_bytes = parse_or(
            "BODY_LIMIT_BYTES",
            lookup("BODY_LIMIT_BYTES"),
            DEFAULT_BODY_LIMIT_BYTES,
        )?;

        Ok(Settings {
            backend,
            schema,
            bind_addr,
            body_limit_bytes,
        })
    }
}

fn parse_or<T: std::str::FromStr>(
    key: &'static str,
    raw: Option<String>,
    default: T,
) -> Result<T, ConfigError> {
    match raw {
        None => Ok(default),
        Some(v) => v.trim().parse().map_err(|_| ConfigError::InvalidValue { key, value: v }),
    }
}

/// Plain SQL identifier: ASCII letters, digits, underscore; not starting with a digit.
fn is_plain_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}
