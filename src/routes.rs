use axum::{
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, services::ServeDir, trace::TraceLayer};

use crate::handlers;
use crate::state::AppState;

pub fn create_routes(state: &AppState) -> Router<AppState> {
    Router::new()
        // Pages
        .route("/", get(handlers::index))
        .route("/blog", get(handlers::blog))
        // Chat proxy
        .route("/chat", post(handlers::chat))
        // Health check
        .route("/api/health", get(handlers::health))
        // Static file serving
        .nest_service("/static", ServeDir::new(&state.settings.static_dir))
}

pub fn create_app(state: AppState) -> Router {
    Router::new()
        .merge(create_routes(&state))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}
