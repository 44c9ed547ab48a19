//! Driving port for employee mutations.
//!
//! HTTP handlers call [`EmployeeCommand`] to create, replace and delete
//! records. Outcomes a client can trigger (a taken email) are typed variants
//! of [`EmployeeServiceError`]; store faults are kept apart so the adapter can
//! map them to 5xx responses.

use async_trait::async_trait;

use crate::domain::{Employee, EmployeeDetails, EmployeeId};

use super::{EmployeePersistenceError, define_port_error};

define_port_error! {
    /// Failures reported by the employee use-cases.
    pub enum EmployeeServiceError {
        /// Another employee already uses this email.
        DuplicateEmail { email: String } => "Employee already exists with given email: {email}",
        /// The store could not be reached.
        StoreUnavailable { message: String } => "employee store unavailable: {message}",
        /// The store failed while executing the operation.
        Store { message: String } => "employee store failure: {message}",
    }
}

impl From<EmployeePersistenceError> for EmployeeServiceError {
    fn from(error: EmployeePersistenceError) -> Self {
        match error {
            EmployeePersistenceError::Connection { message } => Self::StoreUnavailable { message },
            EmployeePersistenceError::Query { message } => Self::Store { message },
            EmployeePersistenceError::DuplicateEmail { email } => Self::DuplicateEmail { email },
        }
    }
}

/// Driving port for employee mutations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EmployeeCommand: Send + Sync {
    /// Create a record after checking the email is not already taken.
    ///
    /// # Errors
    ///
    /// [`EmployeeServiceError::DuplicateEmail`] when the email is in use; no
    /// insert is attempted in that case.
    async fn create_employee(
        &self,
        candidate: EmployeeDetails,
    ) -> Result<Employee, EmployeeServiceError>;

    /// Store an already-fetched, already-merged record.
    async fn replace_employee(&self, employee: Employee) -> Result<Employee, EmployeeServiceError>;

    /// Delete by id. Succeeds whether or not the record existed.
    async fn delete_employee(&self, id: EmployeeId) -> Result<(), EmployeeServiceError>;
}
