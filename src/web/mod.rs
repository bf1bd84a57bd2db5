//! Web layer -- axum routes, page rendering, and the JSON API.

mod routes;
pub mod state;

use self::state::AppState;
use axum::routing::get;
use axum::Router;
use tower_http::trace::TraceLayer;

/// Build the application router: the tracker page at `/`, the JSON API
/// under `/api/v1`, and a plain 404 fallback.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(routes::index).post(routes::submit))
        .nest("/api/v1", routes::api_routes())
        .fallback(fallback)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn fallback() -> (axum::http::StatusCode, &'static str) {
    (axum::http::StatusCode::NOT_FOUND, "not found")
}
