use std::sync::Arc;

use actix_web::{middleware::Logger, web, App, HttpServer};
use anyhow::Context;
use common::db::{establish_connection, ContactRepository, PgContactStore};
use config::Config;
use tracing::info;
use tracing_subscriber::EnvFilter;

mod config;
mod error;
mod handlers;
mod security;

pub struct AppState {
    pub contacts: Arc<dyn ContactRepository>,
}

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env().context("Failed to load configuration")?;

    info!("Starting the contact service");
    let pool = establish_connection(&config.database_url, config.max_connections)
        .await
        .context("Failed to create database pool")?;
    let app_state = web::Data::new(AppState {
        contacts: Arc::new(PgContactStore::new(pool.clone())),
    });

    let address = config.server_address();
    let allowed_origins = config.allowed_origins.clone();
    info!("Starting HTTP server on {}", address);
    let served = HttpServer::new(move || {
        App::new()
            .app_data(app_state.clone())
            .wrap(Logger::default())
            .wrap(security::configure_cors(&allowed_origins))
            .configure(handlers::configure)
    })
    .bind(&address)
    .with_context(|| format!("Failed to bind {}", address))?
    .run()
    .await;

    info!("Closing database pool");
    pool.close().await;

    served.context("HTTP server failed")
}
