use crate::handlers;
use crate::state::AppState;
use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/counts", get(handlers::get_counts))
        .route("/:counter", get(handlers::increment))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
