//! Driving port for employee reads.

use async_trait::async_trait;

use crate::domain::{Employee, EmployeeId, PersonName};

use super::EmployeeServiceError;

/// Read-side use-cases consumed by inbound adapters.
///
/// Absence is never an error here: callers receive `None` and decide how to
/// present it.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EmployeeQuery: Send + Sync {
    /// Every stored employee, unfiltered and unpaginated.
    async fn list_employees(&self) -> Result<Vec<Employee>, EmployeeServiceError>;

    /// The employee with this id, if any.
    async fn get_employee(&self, id: EmployeeId) -> Result<Option<Employee>, EmployeeServiceError>;

    /// The first employee whose names both match exactly.
    async fn find_employee_by_name(
        &self,
        first_name: &PersonName,
        last_name: &PersonName,
    ) -> Result<Option<Employee>, EmployeeServiceError>;
}
