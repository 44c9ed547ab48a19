//! Employee API handlers.
//!
//! ```text
//! POST   /api/employees            {"firstName":"salla","lastName":"mallesh","email":"salla@gmail.com"}
//! GET    /api/employees
//! GET    /api/employees/lookup?firstName=salla&lastName=mallesh
//! GET    /api/employees/{id}
//! PUT    /api/employees/{id}       {"firstName":"shiva","lastName":"Gudeti","email":null}
//! DELETE /api/employees/{id}
//! ```
//!
//! Absent records answer 404 with an empty body; every other failure uses
//! the shared [`Error`] payload.

use actix_web::{HttpRequest, HttpResponse, delete, get, post, put, web};
use serde::{Deserialize, Serialize};
use tracing::debug;
use utoipa::{IntoParams, ToSchema};

use crate::domain::{
    Employee, EmployeeDetails, EmployeeId, EmployeeValidationError, Error, PersonName,
};
use crate::inbound::http::ApiResult;
use crate::inbound::http::state::HttpState;

/// Plain-text body returned by a successful delete.
pub const DELETED_MESSAGE: &str = "Employee deleted successfully!";

/// Body for create and update. Any `id` sent by the client is ignored.
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeRequest {
    #[schema(example = "salla")]
    pub first_name: String,
    #[schema(example = "mallesh")]
    pub last_name: String,
    #[serde(default)]
    #[schema(example = "salla@gmail.com")]
    pub email: Option<String>,
}

impl TryFrom<EmployeeRequest> for EmployeeDetails {
    type Error = Error;

    fn try_from(value: EmployeeRequest) -> Result<Self, Self::Error> {
        Self::try_from_parts(value.first_name, value.last_name, value.email).map_err(Error::from)
    }
}

/// Query string for `GET /api/employees/lookup`.
#[derive(Debug, Clone, Deserialize, Serialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct LookupParams {
    /// Exact first name.
    pub first_name: String,
    /// Exact last name.
    pub last_name: String,
}

fn not_found() -> HttpResponse {
    HttpResponse::NotFound().finish()
}

/// Register the employee routes and their extractor configuration.
///
/// ```
/// use actix_web::App;
/// use employee_records::inbound::http::employees;
///
/// let _app = App::new().configure(employees::configure);
/// ```
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/employees")
            .app_data(json_config())
            .app_data(query_config())
            .service(create_employee)
            .service(list_employees)
            .service(lookup_employee)
            .service(get_employee)
            .service(update_employee)
            .service(delete_employee),
    );
}

/// Malformed or mistyped JSON bodies become `400 invalid_request`.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req: &HttpRequest| {
        debug!(error = %err, "rejecting employee body");
        Error::invalid_request(format!("invalid request body: {err}")).into()
    })
}

/// Missing or malformed query parameters become `400 invalid_request`.
pub fn query_config() -> web::QueryConfig {
    web::QueryConfig::default().error_handler(|err, _req: &HttpRequest| {
        debug!(error = %err, "rejecting employee query");
        Error::invalid_request(format!("invalid query string: {err}")).into()
    })
}

/// Create an employee.
#[utoipa::path(
    post,
    path = "/api/employees",
    request_body = EmployeeRequest,
    responses(
        (status = 201, description = "Employee created", body = Employee),
        (status = 400, description = "Invalid request", body = Error),
        (status = 409, description = "Email already in use", body = Error),
        (status = 500, description = "Internal server error", body = Error),
        (status = 503, description = "Employee store unavailable", body = Error)
    ),
    tags = ["employees"],
    operation_id = "createEmployee"
)]
#[post("")]
pub async fn create_employee(
    state: web::Data<HttpState>,
    payload: web::Json<EmployeeRequest>,
) -> ApiResult<HttpResponse> {
    let candidate = EmployeeDetails::try_from(payload.into_inner())?;
    let created = state.employees.create_employee(candidate).await?;
    Ok(HttpResponse::Created().json(created))
}

/// List every employee.
#[utoipa::path(
    get,
    path = "/api/employees",
    responses(
        (status = 200, description = "All employees", body = [Employee]),
        (status = 500, description = "Internal server error", body = Error),
        (status = 503, description = "Employee store unavailable", body = Error)
    ),
    tags = ["employees"],
    operation_id = "listEmployees"
)]
#[get("")]
pub async fn list_employees(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<Employee>>> {
    let employees = state.employees_query.list_employees().await?;
    Ok(web::Json(employees))
}

/// Fetch one employee by id.
#[utoipa::path(
    get,
    path = "/api/employees/{id}",
    params(("id" = i64, Path, description = "Employee id")),
    responses(
        (status = 200, description = "Employee", body = Employee),
        (status = 404, description = "No employee with this id"),
        (status = 500, description = "Internal server error", body = Error),
        (status = 503, description = "Employee store unavailable", body = Error)
    ),
    tags = ["employees"],
    operation_id = "getEmployee"
)]
#[get("/{id}")]
pub async fn get_employee(
    state: web::Data<HttpState>,
    path: web::Path<i64>,
) -> ApiResult<HttpResponse> {
    let id = EmployeeId::new(path.into_inner());
    Ok(match state.employees_query.get_employee(id).await? {
        Some(employee) => HttpResponse::Ok().json(employee),
        None => not_found(),
    })
}

/// Replace the editable fields of an existing employee.
///
/// The id comes from the path; an id in the body is ignored.
#[utoipa::path(
    put,
    path = "/api/employees/{id}",
    params(("id" = i64, Path, description = "Employee id")),
    request_body = EmployeeRequest,
    responses(
        (status = 200, description = "Updated employee", body = Employee),
        (status = 400, description = "Invalid request", body = Error),
        (status = 404, description = "No employee with this id"),
        (status = 409, description = "Email already in use", body = Error),
        (status = 500, description = "Internal server error", body = Error),
        (status = 503, description = "Employee store unavailable", body = Error)
    ),
    tags = ["employees"],
    operation_id = "updateEmployee"
)]
#[put("/{id}")]
pub async fn update_employee(
    state: web::Data<HttpState>,
    path: web::Path<i64>,
    payload: web::Json<EmployeeRequest>,
) -> ApiResult<HttpResponse> {
    let id = EmployeeId::new(path.into_inner());
    let changes = EmployeeDetails::try_from(payload.into_inner())?;

    let Some(existing) = state.employees_query.get_employee(id).await? else {
        return Ok(not_found());
    };
    let updated = state
        .employees
        .replace_employee(existing.apply_changes(changes))
        .await?;
    Ok(HttpResponse::Ok().json(updated))
}

/// Delete an employee. Deleting a missing id still succeeds.
#[utoipa::path(
    delete,
    path = "/api/employees/{id}",
    params(("id" = i64, Path, description = "Employee id")),
    responses(
        (status = 200, description = "Deletion confirmation", body = String, content_type = "text/plain"),
        (status = 500, description = "Internal server error", body = Error),
        (status = 503, description = "Employee store unavailable", body = Error)
    ),
    tags = ["employees"],
    operation_id = "deleteEmployee"
)]
#[delete("/{id}")]
pub async fn delete_employee(
    state: web::Data<HttpState>,
    path: web::Path<i64>,
) -> ApiResult<HttpResponse> {
    let id = EmployeeId::new(path.into_inner());
    state.employees.delete_employee(id).await?;
    Ok(HttpResponse::Ok()
        .content_type("text/plain; charset=utf-8")
        .body(DELETED_MESSAGE))
}

/// Find the first employee with exactly this first and last name.
#[utoipa::path(
    get,
    path = "/api/employees/lookup",
    params(LookupParams),
    responses(
        (status = 200, description = "Matching employee", body = Employee),
        (status = 400, description = "Invalid request", body = Error),
        (status = 404, description = "No employee with these names"),
        (status = 500, description = "Internal server error", body = Error),
        (status = 503, description = "Employee store unavailable", body = Error)
    ),
    tags = ["employees"],
    operation_id = "lookupEmployee"
)]
#[get("/lookup")]
pub async fn lookup_employee(
    state: web::Data<HttpState>,
    query: web::Query<LookupParams>,
) -> ApiResult<HttpResponse> {
    let LookupParams {
        first_name,
        last_name,
    } = query.into_inner();
    let first_name =
        PersonName::new(first_name).map_err(EmployeeValidationError::FirstName)?;
    let last_name = PersonName::new(last_name).map_err(EmployeeValidationError::LastName)?;

    let found = state
        .employees_query
        .find_employee_by_name(&first_name, &last_name)
        .await?;
    Ok(match found {
        Some(employee) => HttpResponse::Ok().json(employee),
        None => not_found(),
    })
}

#[cfg(test)]
mod tests;
