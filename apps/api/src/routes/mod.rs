pub mod health;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::state::AppState;
use crate::survey::handlers;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(health::health_handler))
        .route("/health", get(health::health_handler))
        .route("/submit-survey", post(handlers::handle_submit_survey))
        .route("/admin-all", get(handlers::handle_admin_all))
        .route("/dashboard-stats", get(handlers::handle_dashboard_stats))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        // The questionnaire is embedded on third-party pages.
        .layer(CorsLayer::permissive())
}
