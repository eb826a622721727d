pub mod config;
pub mod error;
pub mod exploration;
pub mod filmography;
pub mod handlers;
pub mod models;
pub mod pathfinding;
pub mod search;
pub mod state;

use axum::{
    Router,
    routing::{get, post},
};
use state::AppState;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

pub fn build_router(app_state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(handlers::health_check))
        .route("/api/people/search", get(handlers::search_people))
        .route("/api/path", get(handlers::find_path))
        .route("/api/explore", get(handlers::explore_person))
        .route("/api/collaborators", get(handlers::get_collaborators))
        .route("/api/movies", get(handlers::get_movies))
        .route("/api/stats", get(handlers::get_stats))
        .route("/api/reload", post(handlers::reload_catalogue))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}
