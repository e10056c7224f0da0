use axum::{
    extract::{Json, Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use tracing::{info, instrument, warn};
use validator::Validate;

use crate::api::state::{AlertBoardError, AppState};
use crate::entities::alerts::{AlertListResponse, AlertResponse, AlertsQuery};
use crate::entities::common::ErrorResponse;
use crate::entities::vitals::VitalsRequest;

impl From<AlertBoardError> for ErrorResponse {
    fn from(err: AlertBoardError) -> Self {
        match err {
            AlertBoardError::UnknownAlert(_) => ErrorResponse::not_found("alert"),
        }
    }
}

async fn list(state: &AppState, limit: usize) -> AlertListResponse {
    let view = state.alerts.view(limit).await;

    AlertListResponse {
        alerts: view.active.iter().map(AlertResponse::from).collect(),
        total: view.total,
        dismissed: view.dismissed,
    }
}

/// Generate alerts for a snapshot and publish them as the current set
#[utoipa::path(
    post,
    path = "/api/v1/alerts",
    request_body = VitalsRequest,
    responses(
        (status = 201, description = "Alert set published", body = AlertListResponse),
        (status = 400, description = "Invalid readings", body = ErrorResponse),
    ),
    tag = "alerts"
)]
#[instrument(skip(state, request))]
pub async fn publish_alerts(
    State(state): State<AppState>,
    Json(request): Json<VitalsRequest>,
) -> Result<impl IntoResponse, ErrorResponse> {
    request.validate()?;

    let snapshot = request.into_snapshot(state.clock.now());
    let alerts = state.vitals.generate_alerts(&snapshot).map_err(|e| {
        warn!("Rejected vitals snapshot: {}", e);
        ErrorResponse::from(e)
    })?;

    state.alerts.publish(alerts).await;

    let response = list(&state, state.config.max_display_alerts).await;
    Ok((StatusCode::CREATED, Json(response)))
}

/// Active (undismissed) alerts
#[utoipa::path(
    get,
    path = "/api/v1/alerts",
    params(AlertsQuery),
    responses(
        (status = 200, description = "Active alerts", body = AlertListResponse),
        (status = 400, description = "Invalid limit", body = ErrorResponse),
    ),
    tag = "alerts"
)]
#[instrument(skip(state))]
pub async fn get_alerts(
    State(state): State<AppState>,
    Query(params): Query<AlertsQuery>,
) -> Result<Json<AlertListResponse>, ErrorResponse> {
    params.validate()?;

    let limit = params
        .limit
        .map(|limit| limit as usize)
        .unwrap_or(state.config.max_display_alerts);
    Ok(Json(list(&state, limit).await))
}

/// Dismiss an alert from the current set
#[utoipa::path(
    post,
    path = "/api/v1/alerts/{id}/dismiss",
    params(
        ("id" = u32, Path, description = "Alert id within the current set")
    ),
    responses(
        (status = 200, description = "Alert dismissed", body = AlertListResponse),
        (status = 404, description = "No such alert", body = ErrorResponse),
    ),
    tag = "alerts"
)]
#[instrument(skip(state))]
pub async fn dismiss_alert(
    State(state): State<AppState>,
    Path(id): Path<u32>,
) -> Result<Json<AlertListResponse>, ErrorResponse> {
    state.alerts.dismiss(id).await?;
    info!(id, "Alert dismissed");

    Ok(Json(list(&state, state.config.max_display_alerts).await))
}
