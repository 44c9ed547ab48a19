//! PostgreSQL persistence for employee records.
//!
//! Diesel row structs and the table definition stay private to this module;
//! callers see [`DieselEmployeeRepository`], the pool types, and the
//! migration runner.
//!
//! ```ignore
//! use employee_records::outbound::persistence::{
//!     DbPool, DieselEmployeeRepository, PoolConfig, run_pending_migrations,
//! };
//!
//! run_pending_migrations("postgres://localhost/employees").await?;
//! let pool = DbPool::new(PoolConfig::new("postgres://localhost/employees")).await?;
//! let repository = DieselEmployeeRepository::new(pool);
//! ```

mod diesel_employee_repository;
mod employee_error_mapping;
mod migrations;
mod models;
mod pool;
mod schema;

pub use diesel_employee_repository::{
    DieselEmployeeRepository, NameLookupStyle, ParseNameLookupStyleError,
};
pub use migrations::{MIGRATIONS, MigrationError, run_pending_migrations};
pub use pool::{DEFAULT_CONNECTION_TIMEOUT, DEFAULT_MAX_SIZE, DbPool, PoolConfig, PoolError};
