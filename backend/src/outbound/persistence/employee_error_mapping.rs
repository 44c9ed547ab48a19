//! Translation of pool and Diesel failures into [`EmployeePersistenceError`].

use diesel::result::{DatabaseErrorInformation, DatabaseErrorKind, Error as DieselError};
use tracing::debug;

use crate::domain::ports::EmployeePersistenceError;

use super::pool::PoolError;

/// Name of the unique constraint on `employees.email`.
pub(crate) const EMAIL_UNIQUE_CONSTRAINT: &str = "employees_email_key";

pub(crate) fn map_pool_error(error: PoolError) -> EmployeePersistenceError {
    debug!(%error, "employee pool checkout failed");
    EmployeePersistenceError::connection(error.message())
}

/// Map a Diesel failure. `email` is the address the statement tried to
/// write, reported back when the unique constraint fires.
pub(crate) fn map_diesel_error(
    error: DieselError,
    email: Option<&str>,
) -> EmployeePersistenceError {
    match &error {
        DieselError::DatabaseError(kind, info) => {
            debug!(?kind, message = info.message(), "diesel operation failed");
        }
        _ => debug!(
            error_type = %std::any::type_name_of_val(&error),
            "diesel operation failed"
        ),
    }

    match error {
        DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, info)
            if is_email_constraint(info.as_ref()) =>
        {
            EmployeePersistenceError::duplicate_email(email.unwrap_or_default())
        }
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, _) => {
            EmployeePersistenceError::connection("database connection error")
        }
        DieselError::QueryBuilderError(_) => EmployeePersistenceError::query("database query error"),
        _ => EmployeePersistenceError::query("database error"),
    }
}

fn is_email_constraint(info: &(dyn DatabaseErrorInformation + Send + Sync)) -> bool {
    info.constraint_name() == Some(EMAIL_UNIQUE_CONSTRAINT)
}
