use api_shared::wire::{EmergencyRes, HealthRes};
use api_shared::HealthService;
use axum::response::Json;
use healthassist_core::dashboard::emergency_services;

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Health check response", body = HealthRes)
    )
)]
/// Health check endpoint for the REST API
///
/// Used for monitoring and load balancer health checks.
#[axum::debug_handler]
pub async fn health() -> Json<HealthRes> {
    Json(HealthService::check_health())
}

#[utoipa::path(
    get,
    path = "/emergency",
    responses(
        (status = 200, description = "Emergency phone numbers", body = EmergencyRes)
    )
)]
#[axum::debug_handler]
pub async fn emergency() -> Json<EmergencyRes> {
    Json(EmergencyRes {
        services: emergency_services(),
    })
}
