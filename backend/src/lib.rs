pub mod config;
pub mod error;
pub mod logging;
pub mod routes;
pub mod service;
pub mod store;
pub mod test_util;
pub mod validation;

pub use config::Config;
pub use error::RegistryError;
pub use service::RegistryService;
pub use store::{JsonFileStore, MemoryStore, StoreError, UserStore};

use std::sync::Arc;

use axum::{middleware, Router};
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;

/// Shared application state.
pub struct AppState {
    pub config: Config,
    pub registry: RegistryService,
}

impl AppState {
    pub fn new(config: Config, store: Arc<dyn UserStore>) -> Self {
        Self {
            config,
            registry: RegistryService::new(store),
        }
    }
}

/// Endpoints listed in the startup log.
pub const ENDPOINTS: [(&str, &str); 6] = [
    ("POST", "/api/register"),
    ("POST", "/api/login"),
    ("GET", "/api/users"),
    ("POST", "/api/check-email"),
    ("DELETE", "/api/users/:email"),
    ("DELETE", "/api/users"),
];

/// Build the full application router.
pub fn app(state: Arc<AppState>) -> Router {
    let static_dir = state.config.static_files.dir.clone();

    let mut app = Router::new()
        .nest("/api", routes::router())
        .merge(routes::health::router())
        .with_state(state);

    if let Some(dir) = static_dir {
        app = app.fallback_service(ServeDir::new(dir));
    }

    app.layer(middleware::from_fn(logging::request_logger))
        .layer(CorsLayer::permissive())
}
