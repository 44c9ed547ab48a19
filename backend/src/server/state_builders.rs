//! Wiring of the employee service onto a repository adapter.

use std::sync::Arc;

use actix_web::web;
use tracing::{info, warn};

use employee_records::domain::EmployeeService;
use employee_records::domain::ports::EmployeeRepository;
use employee_records::inbound::http::state::HttpState;
use employee_records::outbound::memory::InMemoryEmployeeRepository;
use employee_records::outbound::persistence::DieselEmployeeRepository;

use super::ServerConfig;

fn state_for<R>(repository: R) -> HttpState
where
    R: EmployeeRepository + 'static,
{
    HttpState::from_service(Arc::new(EmployeeService::new(Arc::new(repository))))
}

/// Build handler state: Diesel when a pool is configured, otherwise the
/// in-memory store.
pub(crate) fn build_http_state(config: &ServerConfig) -> web::Data<HttpState> {
    let state = match &config.db_pool {
        Some(pool) => {
            info!(name_lookup = ?config.name_lookup, "employee store: postgres");
            state_for(
                DieselEmployeeRepository::new(pool.clone())
                    .with_name_lookup_style(config.name_lookup),
            )
        }
        None => {
            warn!("no database configured; employee records will not survive a restart");
            state_for(InMemoryEmployeeRepository::new())
        }
    };
    web::Data::new(state)
}
