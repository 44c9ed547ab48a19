//! Employee use-cases.
//!
//! [`EmployeeService`] implements both driving ports on top of any
//! [`EmployeeRepository`]. The email-uniqueness check runs on create only;
//! replace relies on the store's unique constraint, and the check-then-insert
//! on create is not transactional.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, info, warn};

use crate::domain::ports::{
    EmployeeCommand, EmployeePersistenceError, EmployeeQuery, EmployeeRepository,
    EmployeeServiceError,
};
use crate::domain::{Employee, EmployeeDetails, EmployeeId, PersonName};

/// Employee service implementing [`EmployeeCommand`] and [`EmployeeQuery`].
#[derive(Clone)]
pub struct EmployeeService<R> {
    repository: Arc<R>,
}

impl<R> EmployeeService<R> {
    /// Create a service over the given repository.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }
}

fn map_repository_error(error: EmployeePersistenceError) -> EmployeeServiceError {
    match &error {
        EmployeePersistenceError::Connection { message } => {
            warn!(%message, "employee store unavailable");
        }
        EmployeePersistenceError::Query { message } => {
            warn!(%message, "employee store query failed");
        }
        EmployeePersistenceError::DuplicateEmail { email } => {
            debug!(%email, "store rejected duplicate email");
        }
    }
    error.into()
}

#[async_trait]
impl<R> EmployeeCommand for EmployeeService<R>
where
    R: EmployeeRepository,
{
    async fn create_employee(
        &self,
        candidate: EmployeeDetails,
    ) -> Result<Employee, EmployeeServiceError> {
        if let Some(email) = candidate.email.as_ref() {
            let existing = self
                .repository
                .find_by_email(email)
                .await
                .map_err(map_repository_error)?;
            if existing.is_some() {
                debug!(%email, "rejecting create: email already registered");
                return Err(EmployeeServiceError::duplicate_email(email.to_string()));
            }
        }

        let stored = self
            .repository
            .insert(&candidate)
            .await
            .map_err(map_repository_error)?;
        info!(employee_id = %stored.id(), "employee created");
        Ok(stored)
    }

    async fn replace_employee(&self, employee: Employee) -> Result<Employee, EmployeeServiceError> {
        let stored = self
            .repository
            .save(&employee)
            .await
            .map_err(map_repository_error)?;
        info!(employee_id = %stored.id(), "employee replaced");
        Ok(stored)
    }

    async fn delete_employee(&self, id: EmployeeId) -> Result<(), EmployeeServiceError> {
        self.repository
            .delete_by_id(id)
            .await
            .map_err(map_repository_error)?;
        info!(employee_id = %id, "employee deleted");
        Ok(())
    }
}

#[async_trait]
impl<R> EmployeeQuery for EmployeeService<R>
where
    R: EmployeeRepository,
{
    async fn list_employees(&self) -> Result<Vec<Employee>, EmployeeServiceError> {
        self.repository
            .find_all()
            .await
            .map_err(map_repository_error)
    }

    async fn get_employee(&self, id: EmployeeId) -> Result<Option<Employee>, EmployeeServiceError> {
        self.repository
            .find_by_id(id)
            .await
            .map_err(map_repository_error)
    }

    async fn find_employee_by_name(
        &self,
        first_name: &PersonName,
        last_name: &PersonName,
    ) -> Result<Option<Employee>, EmployeeServiceError> {
        self.repository
            .find_by_name(first_name, last_name)
            .await
            .map_err(map_repository_error)
    }
}

#[cfg(test)]
#[path = "employee_service_tests.rs"]
mod tests;
