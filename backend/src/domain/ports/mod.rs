//! Domain ports for the hexagonal boundary.
//!
//! Driven port: [`EmployeeRepository`] (implemented by outbound adapters).
//! Driving ports: [`EmployeeCommand`] and [`EmployeeQuery`] (consumed by
//! inbound adapters, implemented by [`crate::domain::EmployeeService`]).

mod macros;
pub(crate) use macros::define_port_error;

mod employee_command;
mod employee_query;
mod employee_repository;

#[cfg(test)]
pub use employee_command::MockEmployeeCommand;
pub use employee_command::{EmployeeCommand, EmployeeServiceError};
#[cfg(test)]
pub use employee_query::MockEmployeeQuery;
pub use employee_query::EmployeeQuery;
#[cfg(test)]
pub use employee_repository::MockEmployeeRepository;
pub use employee_repository::{EmployeePersistenceError, EmployeeRepository};
