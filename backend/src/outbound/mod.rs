//! Outbound adapters implementing the employee repository port.
//!
//! - **persistence**: PostgreSQL via Diesel and `diesel-async`.
//! - **memory**: process-local store used without a database.
//!
//! Adapters translate between storage and domain records; they hold no
//! business rules beyond the storage-level email constraint.

pub mod memory;
pub mod persistence;
