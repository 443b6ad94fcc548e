use crate::config::AppConfig;
use crate::db::{init_db, Database};
use crate::router::handle;
use crate::state::AppState;
use astra::Server;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

mod config;
mod db;
mod domain;
mod errors;
mod providers;
mod responses;
mod router;
mod services;
mod state;
mod templates;

#[cfg(test)]
mod tests;

fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // 1️⃣ Configuration (.env + process env)
    let cfg = match AppConfig::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            error!("invalid configuration: {e}");
            std::process::exit(1);
        }
    };

    // 2️⃣ Cache database from schema.sql
    let db = Database::new(cfg.database_path.clone());
    if let Err(e) = init_db(&db, &cfg.schema_path) {
        error!("database initialization failed: {e}");
        std::process::exit(1);
    }

    // 3️⃣ Providers, cache and backend client
    let app = match AppState::from_config(&cfg, db) {
        Ok(app) => app,
        Err(e) => {
            error!("failed to build application state: {e}");
            std::process::exit(1);
        }
    };

    let cache = app.properties.cache();
    info!(enabled = cache.is_enabled(), "property cache ready");
    let purged = cache.purge_expired();
    if purged > 0 {
        info!(purged, "dropped expired cache entries");
    }

    // 4️⃣ Start the server
    info!(addr = %cfg.bind_addr, backend = %cfg.backend_api_url, "starting server");
    let server = Server::bind(&cfg.bind_addr).max_workers(cfg.max_workers);

    let result = server.serve(move |req, _info| match handle(req, &app) {
        Ok(resp) => resp,
        Err(err) => {
            warn!(status = err.status(), "request failed: {err}");
            templates::html_error_response(err)
        }
    });

    if let Err(e) = result {
        error!("server ended with error: {e}");
    }

    info!("server shut down cleanly");
}
