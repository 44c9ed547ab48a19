//! OpenAPI document for the employee API.
//!
//! Served by Swagger UI at `/docs` in debug builds, with the raw document at
//! `/api-docs/openapi.json`.

use utoipa::OpenApi;

use crate::domain::{Employee, Error, ErrorCode};
use crate::inbound::http::employees::EmployeeRequest;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Employee records API",
        description = "CRUD access to employee records with unique email addresses."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::employees::create_employee,
        crate::inbound::http::employees::list_employees,
        crate::inbound::http::employees::get_employee,
        crate::inbound::http::employees::update_employee,
        crate::inbound::http::employees::delete_employee,
        crate::inbound::http::employees::lookup_employee,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(Employee, EmployeeRequest, Error, ErrorCode)),
    tags(
        (name = "employees", description = "Employee record management"),
        (name = "health", description = "Readiness and liveness probes")
    )
)]
pub struct ApiDoc;
