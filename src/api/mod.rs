mod handlers;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::config::GeneratorConfig;

pub fn create_router(config: GeneratorConfig) -> Router {
    let api = Router::new()
        .route("/project/generate", post(handlers::generate_project))
        .route("/health", get(handlers::health));

    Router::new()
        .nest("/api", api)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(config)
}
