use crate::config::Config;
use crate::db::connection::Database;
use crate::db::{ListingStore, MemoryStore, SqliteStore};
use crate::router::{serve, App};
use astra::Server;
use std::sync::Arc;
use tracing::{error, info};

mod boundary;
mod config;
mod db;
mod domain;
mod errors;
mod handlers;
mod logging;
mod payload;
mod responses;
mod router;
mod templates;
mod validation;

#[cfg(test)]
mod tests;

fn main() {
    // Missing .env is fine; real environment variables still apply.
    let _ = dotenvy::dotenv();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            logging::init("info");
            error!("configuration error: {e}");
            std::process::exit(1);
        }
    };
    logging::init(&config.log_filter);

    // Opened once and shared by every worker for the life of the process.
    let store: Arc<dyn ListingStore> = if config.uses_memory_store() {
        info!("using in-memory listing store");
        Arc::new(MemoryStore::new())
    } else {
        match SqliteStore::open(Database::new(config.database_url.clone())) {
            Ok(store) => Arc::new(store),
            Err(e) => {
                error!(path = %config.database_url, "database initialization failed: {e}");
                std::process::exit(1);
            }
        }
    };

    let app = App::new(store, config.max_body_bytes);
    let addr = config.addr();
    info!("starting server at http://{addr}");

    let server = Server::bind(&addr).max_workers(config.max_workers);

    let result = server.serve(move |req, _info| serve(req, &app));

    if let Err(e) = result {
        error!("server ended with error: {e}");
        std::process::exit(1);
    }

    info!("server shut down cleanly");
}
