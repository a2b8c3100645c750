use axum::Json;
use serde_json::{json, Value};

/// GET / and GET /health
/// Liveness probe for the survey intake service; never touches the database.
pub async fn health_handler() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "service": "survey-api"
    }))
}
