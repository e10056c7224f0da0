use axum::extract::{Json, State};
use tracing::{debug, instrument};
use validator::Validate;

use savior_domain::entities::DeviceStatus;

use crate::api::state::AppState;
use crate::entities::common::ErrorResponse;
use crate::entities::device::{DeviceStatusRequest, DeviceStatusResponse};

/// Battery band and relative sync time for a reported device status
#[utoipa::path(
    post,
    path = "/api/v1/device/status",
    request_body = DeviceStatusRequest,
    responses(
        (status = 200, description = "Device status decorated for display", body = DeviceStatusResponse),
        (status = 400, description = "Invalid device status", body = ErrorResponse),
    ),
    tag = "device"
)]
#[instrument(skip(state, request))]
pub async fn device_status(
    State(state): State<AppState>,
    Json(request): Json<DeviceStatusRequest>,
) -> Result<Json<DeviceStatusResponse>, ErrorResponse> {
    request.validate()?;

    let status = DeviceStatus::from(request);
    debug!(device = %status.device_name, battery = status.battery_level, "Device status reported");

    Ok(Json(DeviceStatusResponse::from_status(&status, state.clock.now())))
}
