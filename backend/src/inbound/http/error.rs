//! HTTP mapping for domain and service errors.
//!
//! The domain [`Error`] stays transport agnostic; this module decides its
//! status code, redacts internal failures on the wire, and converts
//! [`EmployeeServiceError`] into the shared payload.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use serde_json::json;
use tracing::error;

use crate::domain::ports::EmployeeServiceError;
use crate::domain::{EmployeeValidationError, Error, ErrorCode, TRACE_ID_HEADER};

/// Result alias for HTTP handlers.
pub type ApiResult<T> = Result<T, Error>;

const REDACTED_MESSAGE: &str = "Internal server error";

fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::InvalidRequest => StatusCode::BAD_REQUEST,
        ErrorCode::NotFound => StatusCode::NOT_FOUND,
        ErrorCode::Conflict => StatusCode::CONFLICT,
        ErrorCode::ServiceUnavailable => StatusCode::SERVICE_UNAVAILABLE,
        ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn redact_if_internal(error: &Error) -> Error {
    if error.code() != ErrorCode::InternalError {
        return error.clone();
    }
    let redacted = Error::internal(REDACTED_MESSAGE);
    match error.trace_id() {
        Some(id) => redacted.with_trace_id(id.to_owned()),
        None => redacted,
    }
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        status_for(self.code())
    }

    fn error_response(&self) -> HttpResponse {
        if self.code() == ErrorCode::InternalError {
            error!(message = self.message(), trace_id = ?self.trace_id(), "internal error");
        }
        let mut builder = HttpResponse::build(self.status_code());
        if let Some(id) = self.trace_id() {
            builder.insert_header((TRACE_ID_HEADER, id.to_owned()));
        }
        builder.json(redact_if_internal(self))
    }
}

impl From<EmployeeServiceError> for Error {
    fn from(err: EmployeeServiceError) -> Self {
        match err {
            EmployeeServiceError::DuplicateEmail { email } => Error::conflict(format!(
                "Employee already exists with given email: {email}"
            ))
            .with_details(json!({
                "field": "email",
                "code": "duplicate_email",
                "email": email,
            })),
            EmployeeServiceError::StoreUnavailable { .. } => {
                Error::service_unavailable("employee store is unavailable")
            }
            EmployeeServiceError::Store { message } => Error::internal(message),
        }
    }
}

impl From<EmployeeValidationError> for Error {
    fn from(err: EmployeeValidationError) -> Self {
        use crate::domain::{EmailAddressError as E, PersonNameError as N};

        let code = match err {
            EmployeeValidationError::FirstName(N::Empty)
            | EmployeeValidationError::LastName(N::Empty) => "empty",
            EmployeeValidationError::Email(E::Blank) => "blank",
            EmployeeValidationError::FirstName(N::TooLong { .. })
            | EmployeeValidationError::LastName(N::TooLong { .. })
            | EmployeeValidationError::Email(E::TooLong { .. }) => "too_long",
        };
        Error::invalid_request(err.to_string()).with_details(json!({
            "field": err.field(),
            "code": code,
        }))
    }
}

impl From<actix_web::Error> for Error {
    fn from(err: actix_web::Error) -> Self {
        error!(error = %err, "actix error promoted to domain error");
        Error::internal(REDACTED_MESSAGE)
    }
}
