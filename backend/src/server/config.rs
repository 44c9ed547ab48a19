//! HTTP server configuration object.

use std::net::SocketAddr;

use employee_records::outbound::persistence::{DbPool, NameLookupStyle};

/// Builder-style configuration for [`super::create_server`].
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) db_pool: Option<DbPool>,
    pub(crate) name_lookup: NameLookupStyle,
}

impl ServerConfig {
    #[must_use]
    pub fn new(bind_addr: SocketAddr) -> Self {
        Self {
            bind_addr,
            db_pool: None,
            name_lookup: NameLookupStyle::default(),
        }
    }

    /// Back the employee API with PostgreSQL instead of the in-memory store.
    #[must_use]
    pub fn with_db_pool(mut self, pool: DbPool) -> Self {
        self.db_pool = Some(pool);
        self
    }

    /// Choose how the Diesel adapter issues name lookups.
    #[must_use]
    pub fn with_name_lookup_style(mut self, style: NameLookupStyle) -> Self {
        self.name_lookup = style;
        self
    }

    #[must_use]
    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
    }

    #[must_use]
    pub fn has_db_pool(&self) -> bool {
        self.db_pool.is_some()
    }
}
