//! Diesel table definitions for the PostgreSQL schema.
//!
//! These definitions must match `migrations/` exactly; regenerate with
//! `diesel print-schema` after changing a migration.

diesel::table! {
    /// Employee records.
    ///
    /// `email` carries the `employees_email_key` unique constraint; NULLs
    /// never collide.
    employees (id) {
        /// Primary key assigned by the `BIGSERIAL` sequence.
        id -> Int8,
        first_name -> Varchar,
        last_name -> Varchar,
        email -> Nullable<Varchar>,
    }
}
