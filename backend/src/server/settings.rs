//! Process settings loaded via OrthoConfig.
//!
//! Sources, lowest precedence first: defaults, config file, `EMPLOYEES_*`
//! environment variables, command-line flags.

use std::net::{AddrParseError, SocketAddr};
use std::time::Duration;

use ortho_config::OrthoConfig;
use serde::Deserialize;

use employee_records::outbound::persistence::{
    DEFAULT_CONNECTION_TIMEOUT, DEFAULT_MAX_SIZE, NameLookupStyle, ParseNameLookupStyleError,
    PoolConfig,
};

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
/// Conventional variable consulted when `EMPLOYEES_DATABASE_URL` is unset.
const FALLBACK_DATABASE_URL_VAR: &str = "DATABASE_URL";

/// Settings controlling the HTTP listener and the employee store.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "EMPLOYEES")]
pub struct ServerSettings {
    /// Socket address to listen on.
    pub bind_addr: Option<String>,
    /// PostgreSQL URL. Without one the in-memory store is used.
    pub database_url: Option<String>,
    /// Upper bound on pooled connections.
    pub pool_max_size: Option<u32>,
    /// Seconds to wait for a pooled connection.
    pub connection_timeout_secs: Option<u64>,
    /// Leave the schema alone at startup.
    #[ortho_config(default = false)]
    pub skip_migrations: bool,
    /// `query-builder` or `raw-sql`.
    pub name_lookup: Option<String>,
}

impl ServerSettings {
    /// Listener address, defaulting to `0.0.0.0:8080`.
    ///
    /// # Errors
    ///
    /// Returns the parse error for a malformed address.
    pub fn bind_addr(&self) -> Result<SocketAddr, AddrParseError> {
        self.bind_addr.as_deref().unwrap_or(DEFAULT_BIND_ADDR).parse()
    }

    /// Configured database URL, falling back to `DATABASE_URL`. Blank values
    /// count as unset.
    pub fn database_url(&self) -> Option<String> {
        self.database_url
            .clone()
            .or_else(|| std::env::var(FALLBACK_DATABASE_URL_VAR).ok())
            .filter(|url| !url.trim().is_empty())
    }

    pub fn pool_max_size(&self) -> u32 {
        self.pool_max_size.unwrap_or(DEFAULT_MAX_SIZE)
    }

    pub fn connection_timeout(&self) -> Duration {
        self.connection_timeout_secs
            .map_or(DEFAULT_CONNECTION_TIMEOUT, Duration::from_secs)
    }

    pub fn run_migrations(&self) -> bool {
        !self.skip_migrations
    }

    /// # Errors
    ///
    /// Returns [`ParseNameLookupStyleError`] for an unknown style name.
    pub fn name_lookup(&self) -> Result<NameLookupStyle, ParseNameLookupStyleError> {
        self.name_lookup
            .as_deref()
            .map_or(Ok(NameLookupStyle::default()), str::parse)
    }

    /// Pool configuration for `database_url`.
    pub fn pool_config(&self, database_url: impl Into<String>) -> PoolConfig {
        PoolConfig::new(database_url)
            .with_max_size(self.pool_max_size())
            .with_connection_timeout(self.connection_timeout())
    }
}
