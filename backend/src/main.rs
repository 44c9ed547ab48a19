//! Employee records entry-point: loads settings, prepares the store and
//! serves the REST API.

mod server;

use std::io;

use actix_web::web;
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use employee_records::inbound::http::health::HealthState;
use employee_records::outbound::persistence::{DbPool, run_pending_migrations};
use server::{ServerConfig, ServerSettings, create_server};

#[actix_web::main]
async fn main() -> io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = ServerSettings::load().map_err(|e| io::Error::other(e.to_string()))?;
    let config = build_config(&settings).await?;
    info!(
        bind_addr = %config.bind_addr(),
        persistent = config.has_db_pool(),
        "starting employee records service"
    );

    let health_state = web::Data::new(HealthState::new());
    create_server(health_state, config)?.await
}

async fn build_config(settings: &ServerSettings) -> io::Result<ServerConfig> {
    let bind_addr = settings
        .bind_addr()
        .map_err(|e| io::Error::other(format!("invalid bind address: {e}")))?;
    let name_lookup = settings.name_lookup().map_err(io::Error::other)?;
    let config = ServerConfig::new(bind_addr).with_name_lookup_style(name_lookup);

    let Some(database_url) = settings.database_url() else {
        return Ok(config);
    };

    if settings.run_migrations() {
        run_pending_migrations(&database_url)
            .await
            .map_err(io::Error::other)?;
    }
    let pool = DbPool::new(settings.pool_config(database_url))
        .await
        .map_err(io::Error::other)?;
    Ok(config.with_db_pool(pool))
}
