//! Shared HTTP adapter state.
//!
//! Handlers receive this via `web::Data` and depend only on the driving
//! ports, so tests can substitute mocks without any I/O.

use std::sync::Arc;

use crate::domain::ports::{EmployeeCommand, EmployeeQuery};

/// Port implementations used by the employee handlers.
#[derive(Clone)]
pub struct HttpState {
    pub employees: Arc<dyn EmployeeCommand>,
    pub employees_query: Arc<dyn EmployeeQuery>,
}

impl HttpState {
    pub fn new(employees: Arc<dyn EmployeeCommand>, employees_query: Arc<dyn EmployeeQuery>) -> Self {
        Self {
            employees,
            employees_query,
        }
    }

    /// State backed by one value implementing both ports, such as
    /// [`crate::domain::EmployeeService`].
    pub fn from_service<S>(service: Arc<S>) -> Self
    where
        S: EmployeeCommand + EmployeeQuery + 'static,
    {
        Self {
            employees: service.clone(),
            employees_query: service,
        }
    }
}
