//! Axum route handlers for the survey API.

use std::net::SocketAddr;

use axum::{
    extract::{rejection::JsonRejection, ConnectInfo, State},
    http::HeaderMap,
    Json,
};

use crate::errors::AppError;
use crate::models::survey::SurveyEntryRow;
use crate::state::AppState;
use crate::survey::client_ip::resolve_client_ip;
use crate::survey::store::{self, DashboardStats};
use crate::survey::submission::{SubmitSurveyRequest, SubmitSurveyResponse};

/// POST /submit-survey
///
/// Structural validation happens in the extractor; a rejected payload never
/// reaches the database.
pub async fn handle_submit_survey(
    State(state): State<AppState>,
    connect_info: Option<ConnectInfo<SocketAddr>>,
    headers: HeaderMap,
    payload: Result<Json<SubmitSurveyRequest>, JsonRejection>,
) -> Result<Json<SubmitSurveyResponse>, AppError> {
    let Json(request) = payload?;

    let score = request.resolve_score(state.score_mode())?;
    let ip = if state.config.capture_client_ip {
        resolve_client_ip(&headers, connect_info.map(|ConnectInfo(addr)| addr))
    } else {
        None
    };

    let entry = request.into_new_entry(score, ip);
    let id = store::insert_entry(&state.db, &entry).await?;

    Ok(Json(SubmitSurveyResponse::success(id, score)))
}

/// GET /admin-all
pub async fn handle_admin_all(
    State(state): State<AppState>,
) -> Result<Json<Vec<SurveyEntryRow>>, AppError> {
    Ok(Json(store::list_entries(&state.db).await?))
}

/// GET /dashboard-stats
pub async fn handle_dashboard_stats(
    State(state): State<AppState>,
) -> Result<Json<DashboardStats>, AppError> {
    Ok(Json(store::dashboard_stats(&state.db).await?))
}
