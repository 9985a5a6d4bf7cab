use super::handlers;
use super::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Create the HTTP router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/", get(handlers::health_check))
        // Sales chat
        .route("/chat", post(handlers::chat))
        // Meeting management
        .route("/meetings", get(handlers::list_meetings))
        .route(
            "/meetings/:meeting_id",
            get(handlers::get_meeting)
                .put(handlers::reschedule_meeting)
                .delete(handlers::cancel_meeting),
        )
        // Request logging and browser clients
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
