//! Data access contract for employee records.
//!
//! Adapters translate between the store and domain records; they never apply
//! business rules. The only rule visible here is the storage-level email
//! uniqueness constraint, surfaced as
//! [`EmployeePersistenceError::DuplicateEmail`].

use async_trait::async_trait;

use crate::domain::{EmailAddress, Employee, EmployeeDetails, EmployeeId, PersonName};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by employee repository adapters.
    pub enum EmployeePersistenceError {
        /// The store cannot be reached (pool checkout, closed connection).
        Connection { message: String } => "employee repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "employee repository query failed: {message}",
        /// The store rejected a write because the email is already taken.
        DuplicateEmail { email: String } => "employee email already exists: {email}",
    }
}

/// Port for employee storage and retrieval.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EmployeeRepository: Send + Sync {
    /// Persist a new record, assigning a fresh id.
    async fn insert(&self, details: &EmployeeDetails)
    -> Result<Employee, EmployeePersistenceError>;

    /// Fetch a record by id.
    async fn find_by_id(&self, id: EmployeeId)
    -> Result<Option<Employee>, EmployeePersistenceError>;

    /// Fetch every record in storage order.
    async fn find_all(&self) -> Result<Vec<Employee>, EmployeePersistenceError>;

    /// Fetch the record with exactly this email.
    async fn find_by_email(
        &self,
        email: &EmailAddress,
    ) -> Result<Option<Employee>, EmployeePersistenceError>;

    /// Replace the stored row with `employee.id()` in place.
    ///
    /// When no row has that id the record is inserted under a freshly
    /// assigned id, which the returned record carries.
    async fn save(&self, employee: &Employee) -> Result<Employee, EmployeePersistenceError>;

    /// Remove the record if present. Missing ids are not an error.
    async fn delete_by_id(&self, id: EmployeeId) -> Result<(), EmployeePersistenceError>;

    /// First record (lowest id) whose first and last names both match
    /// exactly.
    async fn find_by_name(
        &self,
        first_name: &PersonName,
        last_name: &PersonName,
    ) -> Result<Option<Employee>, EmployeePersistenceError>;
}
