use crate::api::HttpBackend;
use crate::config::Config;
use crate::responses::error_to_response;
use crate::router::handle;
use crate::state::AppState;
use astra::Server;
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

mod api;
mod config;
mod domain;
mod errors;
mod responses;
mod router;
mod state;
mod templates;


fn main() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("lead_prospector=info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = Config::load();

    // 1️⃣ Backend client
    let backend = match HttpBackend::new(&config.api_base, config.http_timeout) {
        Ok(backend) => backend,
        Err(e) => {
            error!("Backend client initialization failed: {e}");
            std::process::exit(1);
        }
    };
    info!(api_base = backend.base_url(), "using prospecting backend");

    // 2️⃣ One-time loads: situation catalog and community feedback
    let state = AppState::bootstrap(Arc::new(backend));

    // 3️⃣ Start the server
    info!("Starting server at http://{}", config.bind);
    let server = Server::bind(&config.bind).max_workers(config.workers);

    let result = server.serve(move |req, _info| match handle(req, &state) {
        Ok(resp) => resp,
        Err(err) => error_to_response(err),
    });

    if let Err(e) = result {
        error!("Server ended with error: {e}");
    }

    info!("Server shut down cleanly.");
}
