use blog_web::error::FrontendError;
use blog_web::logger::initialize as LoggerInitialize;
use blog_web::routes;
use blog_web::state::AppState;

use client_core::config::FrontendConfig;

use std::fs::create_dir_all;

use actix_web::middleware::{DefaultHeaders, Logger};
use actix_web::web::Data;
use actix_web::{App, HttpServer};
use log::info;

#[actix_web::main]
async fn main() -> Result<(), FrontendError> {
    let config = FrontendConfig::from_env()?;

    create_dir_all(&config.log_dir).map_err(|e| {
        FrontendError::frontend(format!(
            "Failed to create log directory {}: {e}",
            config.log_dir.display()
        ))
    })?;

    // Initialize logger FIRST
    LoggerInitialize(&config.log_dir, config.log_level)?;

    info!("Blog web front end starting");
    info!("Log directory: {}", config.log_dir.display());
    info!("API base URL: {}", config.api.base_url);

    let state = Data::new(AppState::new(&config)?);

    info!("Listening on http://{}", config.bind_address);

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .wrap(Logger::new("%r %s %Dms"))
            .wrap(
                DefaultHeaders::new()
                    .add(("X-Frame-Options", "DENY"))
                    .add(("X-Content-Type-Options", "nosniff"))
                    .add(("Referrer-Policy", "same-origin")),
            )
            .configure(routes::configure)
    })
    .bind(&config.bind_address)
    .map_err(|e| FrontendError::frontend(format!("Failed to bind {}: {e}", config.bind_address)))?
    .run()
    .await
    .map_err(|e| FrontendError::frontend(format!("Server error: {e}")))
}
