//! Domain primitives, ports and services.
//!
//! Purpose: define the employee record, its validation rules and the
//! use-cases that enforce email uniqueness. Nothing here depends on HTTP or
//! Diesel; adapters live under `inbound` and `outbound`.
//!
//! Public surface:
//! - Employee, EmployeeDetails, EmployeeId, PersonName, EmailAddress: the
//!   record model.
//! - EmployeeService: implements the driving ports in [`ports`].
//! - Error / ErrorCode: transport-agnostic error payload.
//! - TraceId: request correlation identifier.

pub mod employee;
pub mod employee_service;
pub mod error;
pub mod ports;
pub mod trace_id;

pub use self::employee::{
    EmailAddress, EmailAddressError, Employee, EmployeeDetails, EmployeeId,
    EmployeeValidationError, FIELD_MAX_CHARS, PersonName, PersonNameError,
};
pub use self::employee_service::EmployeeService;
pub use self::error::{Error, ErrorCode};
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
