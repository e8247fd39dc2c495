//! Credential registry server.

use std::env;
use std::sync::Arc;

use registry_backend::{app, logging, AppState, Config, JsonFileStore, UserStore, ENDPOINTS};
use tokio::net::TcpListener;

const VERSION: &str = env!("CARGO_PKG_VERSION");

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Handle --version / -V
    let args: Vec<String> = env::args().collect();
    if args.iter().any(|a| a == "--version" || a == "-V") {
        println!("registry-server {}", VERSION);
        return Ok(());
    }

    // Load configuration
    let config = Config::load()
        .map_err(|e| format!("Failed to load configuration: {}", e))?;

    logging::init(&config.logging.level);
    tracing::info!("Starting credential registry {}", VERSION);

    // Initialize store
    let store = JsonFileStore::new(&config.store.path)
        .with_reset_on_corrupt(config.store.reset_on_corrupt);
    store.init().await?;

    if let Some(ref dir) = config.static_files.dir {
        tracing::info!("Serving static files from {}", dir);
    }

    let addr = config.listen_addr();
    let state = Arc::new(AppState::new(config, Arc::new(store)));
    let app = app(state);

    // Start server
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!("Listening on {}", addr);
    for (method, path) in ENDPOINTS {
        tracing::info!("  {:<6} {}", method, path);
    }

    axum::serve(listener, app).await?;

    Ok(())
}
