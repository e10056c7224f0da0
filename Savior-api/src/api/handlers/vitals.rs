use axum::{
    extract::{Json, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use tracing::{info, instrument, warn};
use validator::Validate;

use savior_domain::entities::{TimeRange, VitalSign};
use savior_domain::testing::MockVitalsGenerator;

use crate::api::state::AppState;
use crate::entities::common::ErrorResponse;
use crate::entities::history::{HistoryPoint, HistoryQuery, HistoryResponse};
use crate::entities::vitals::{
    AssessmentResponse, BloodPressureQuery, CategoryResponse, HeartRateQuery, StressQuery,
    TemperatureQuery, VitalsRequest, ZoneQuery, ZoneResponse,
};

/// Classify every vital sign in a snapshot and generate its alerts
#[utoipa::path(
    post,
    path = "/api/v1/vitals/classify",
    request_body = VitalsRequest,
    responses(
        (status = 200, description = "Snapshot classified", body = AssessmentResponse),
        (status = 400, description = "Invalid readings", body = ErrorResponse),
    ),
    tag = "vitals"
)]
#[instrument(skip(state, request))]
pub async fn classify_vitals(
    State(state): State<AppState>,
    Json(request): Json<VitalsRequest>,
) -> Result<impl IntoResponse, ErrorResponse> {
    request.validate()?;

    let age = request.age.unwrap_or(state.config.default_user_age);
    let snapshot = request.into_snapshot(state.clock.now());

    let assessment = state.vitals.assess(&snapshot, Some(age)).map_err(|e| {
        warn!("Rejected vitals snapshot: {}", e);
        ErrorResponse::from(e)
    })?;

    info!(
        blood_pressure = assessment.blood_pressure.id,
        alerts = assessment.alerts.len(),
        "Vitals classified"
    );

    Ok((StatusCode::OK, Json(AssessmentResponse::from(assessment))))
}

/// Classify a blood pressure reading
#[utoipa::path(
    get,
    path = "/api/v1/classify/blood-pressure",
    params(BloodPressureQuery),
    responses(
        (status = 200, description = "Blood pressure category", body = CategoryResponse),
    ),
    tag = "vitals"
)]
#[instrument(skip(state))]
pub async fn classify_blood_pressure(
    State(state): State<AppState>,
    Query(params): Query<BloodPressureQuery>,
) -> Json<CategoryResponse> {
    Json(state.vitals.classify_blood_pressure(params.systolic, params.diastolic).into())
}

/// Classify a pulse
#[utoipa::path(
    get,
    path = "/api/v1/classify/heart-rate",
    params(HeartRateQuery),
    responses(
        (status = 200, description = "Heart-rate category", body = CategoryResponse),
    ),
    tag = "vitals"
)]
#[instrument(skip(state))]
pub async fn classify_heart_rate(
    State(state): State<AppState>,
    Query(params): Query<HeartRateQuery>,
) -> Json<CategoryResponse> {
    Json(state.vitals.classify_heart_rate(params.bpm).into())
}

/// Classify stress from a device label or a numeric score
#[utoipa::path(
    get,
    path = "/api/v1/classify/stress",
    params(StressQuery),
    responses(
        (status = 200, description = "Stress category", body = CategoryResponse),
        (status = 400, description = "Neither label nor value given", body = ErrorResponse),
    ),
    tag = "vitals"
)]
#[instrument(skip(state))]
pub async fn classify_stress(
    State(state): State<AppState>,
    Query(params): Query<StressQuery>,
) -> Result<Json<CategoryResponse>, ErrorResponse> {
    let category = match (params.label.as_deref(), params.value) {
        (Some(label), _) => state.vitals.classify_stress_by_label(Some(label)),
        (None, Some(value)) if value.is_finite() => state.vitals.classify_stress_by_value(value),
        (None, Some(_)) => return Err(ErrorResponse::bad_request("Stress value must be a finite number")),
        (None, None) => return Err(ErrorResponse::bad_request("Provide either label or value")),
    };

    Ok(Json(category.into()))
}

/// Classify a body temperature
#[utoipa::path(
    get,
    path = "/api/v1/classify/temperature",
    params(TemperatureQuery),
    responses(
        (status = 200, description = "Temperature category", body = CategoryResponse),
        (status = 400, description = "Temperature is not a finite number", body = ErrorResponse),
    ),
    tag = "vitals"
)]
#[instrument(skip(state))]
pub async fn classify_temperature(
    State(state): State<AppState>,
    Query(params): Query<TemperatureQuery>,
) -> Result<Json<CategoryResponse>, ErrorResponse> {
    if !params.celsius.is_finite() {
        return Err(ErrorResponse::bad_request("Temperature must be a finite number"));
    }

    Ok(Json(state.vitals.classify_temperature(params.celsius).into()))
}

/// Heart-rate training zone for a pulse and age
#[utoipa::path(
    get,
    path = "/api/v1/classify/zone",
    params(ZoneQuery),
    responses(
        (status = 200, description = "Training zone", body = ZoneResponse),
        (status = 400, description = "Invalid age", body = ErrorResponse),
    ),
    tag = "vitals"
)]
#[instrument(skip(state))]
pub async fn heart_rate_zone(
    State(state): State<AppState>,
    Query(params): Query<ZoneQuery>,
) -> Result<Json<ZoneResponse>, ErrorResponse> {
    params.validate()?;

    let age = params.age.unwrap_or(state.config.default_user_age);
    Ok(Json((&state.vitals.heart_rate_zone(age, params.bpm)).into()))
}

/// Simulated hourly history for one vital sign
#[utoipa::path(
    get,
    path = "/api/v1/vitals/history",
    params(HistoryQuery),
    responses(
        (status = 200, description = "Simulated series", body = HistoryResponse),
        (status = 400, description = "Unknown range or vital sign", body = ErrorResponse),
    ),
    tag = "vitals"
)]
#[instrument(skip(state))]
pub async fn vitals_history(
    State(state): State<AppState>,
    Query(params): Query<HistoryQuery>,
) -> Result<Json<HistoryResponse>, ErrorResponse> {
    let range = match params.range.as_deref() {
        Some(label) => label.parse::<TimeRange>()?,
        None => TimeRange::default(),
    };
    let vital = match params.vital.as_deref() {
        Some(name) => name.parse::<VitalSign>()?,
        None => VitalSign::HeartRate,
    };

    let mut generator = MockVitalsGenerator::new(params.seed.unwrap_or(0), state.clock.now());
    let points = generator
        .history(range)
        .iter()
        .map(|snapshot| HistoryPoint::from_snapshot(snapshot, vital))
        .collect();

    Ok(Json(HistoryResponse {
        vital: vital.as_str().to_string(),
        unit: vital.unit().to_string(),
        range: range.label().to_string(),
        points,
    }))
}
