use axum::{
    http::{header, HeaderValue, Method},
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    set_header::SetResponseHeaderLayer,
    trace::TraceLayer,
};
use tracing::debug;

use crate::api::handlers::{alerts, device, health, vitals};
use crate::api::state::AppState;
use crate::openapi::configure_swagger_routes;

/// Create the application router
pub fn create_app(state: AppState) -> Router {
    debug!("Creating application router");

    let cors_allow_any = state.config.cors_allow_any;

    // Classification endpoints
    let api_routes = Router::new()
        .route("/vitals/classify", post(vitals::classify_vitals))
        .route("/vitals/history", get(vitals::vitals_history))
        .route("/classify/blood-pressure", get(vitals::classify_blood_pressure))
        .route("/classify/heart-rate", get(vitals::classify_heart_rate))
        .route("/classify/stress", get(vitals::classify_stress))
        .route("/classify/temperature", get(vitals::classify_temperature))
        .route("/classify/zone", get(vitals::heart_rate_zone))
        .route("/alerts", get(alerts::get_alerts).post(alerts::publish_alerts))
        .route("/alerts/:id/dismiss", post(alerts::dismiss_alert))
        .route("/device/status", post(device::device_status));

    debug!("API routes configured");

    let app = Router::new()
        .route("/health", get(health::health_check))
        .nest("/api/v1", api_routes)
        .with_state(state);

    // Configure the Swagger UI using the helper function
    let app = add_swagger_ui(app);
    debug!("Swagger UI merged");

    // Initialize health check service startup time
    health::initialize_server_start_time();

    app.layer(SetResponseHeaderLayer::overriding(
        header::CACHE_CONTROL,
        HeaderValue::from_static("no-store"),
    ))
    .layer(cors_layer(cors_allow_any))
    .layer(TraceLayer::new_for_http())
}

fn cors_layer(allow_any: bool) -> CorsLayer {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE]);

    if allow_any {
        cors.allow_origin(Any)
    } else {
        cors
    }
}

/// Add Swagger UI to the router
pub fn add_swagger_ui(app: Router) -> Router {
    app.merge(configure_swagger_routes())
}
