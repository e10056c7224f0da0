use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Configure Swagger UI endpoints
pub fn configure_swagger_routes() -> SwaggerUi {
    SwaggerUi::new("/api-docs")
        .url("/api-docs/openapi.json", ApiDoc::openapi())
}

// API Documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        // Health endpoints
        crate::api::handlers::health::health_check,

        // Vitals endpoints
        crate::api::handlers::vitals::classify_vitals,
        crate::api::handlers::vitals::vitals_history,
        crate::api::handlers::vitals::classify_blood_pressure,
        crate::api::handlers::vitals::classify_heart_rate,
        crate::api::handlers::vitals::classify_stress,
        crate::api::handlers::vitals::classify_temperature,
        crate::api::handlers::vitals::heart_rate_zone,

        // Alert endpoints
        crate::api::handlers::alerts::publish_alerts,
        crate::api::handlers::alerts::get_alerts,
        crate::api::handlers::alerts::dismiss_alert,

        // Device endpoints
        crate::api::handlers::device::device_status
    ),
    components(
        schemas(
            // Common
            crate::entities::common::ErrorResponse,

            // Vitals
            crate::entities::vitals::VitalsRequest,
            crate::entities::vitals::BloodPressureInput,
            crate::entities::vitals::StressInput,
            crate::entities::vitals::TemperatureInput,
            crate::entities::vitals::HeartRateInput,
            crate::entities::vitals::CategoryResponse,
            crate::entities::vitals::ZoneResponse,
            crate::entities::vitals::AssessmentResponse,
            crate::entities::history::HistoryPoint,
            crate::entities::history::HistoryResponse,

            // Alerts
            crate::entities::alerts::AlertResponse,
            crate::entities::alerts::AlertListResponse,

            // Device
            crate::entities::device::DeviceStatusRequest,
            crate::entities::device::DeviceStatusResponse,

            // Health handlers
            crate::api::handlers::health::HealthResponse,
            crate::api::handlers::health::ComponentStatus,
            crate::api::handlers::health::ComponentHealthStatus
        )
    ),
    tags(
        (name = "health", description = "Health check endpoint"),
        (name = "vitals", description = "Vital sign classification endpoints"),
        (name = "alerts", description = "Alert board endpoints"),
        (name = "device", description = "Wearable device status endpoints")
    ),
    info(
        title = "SAVIOR API",
        version = "0.1.0",
        description = "Classification and alerting for blood pressure, heart rate, stress and body temperature",
        license(
            name = "MIT",
            url = "https://opensource.org/licenses/MIT"
        ),
    ),
    servers(
        (url = "/", description = "Local development server")
    )
)]
pub struct ApiDoc;
