use api_shared::wire::{SymptomCheckReq, SymptomCheckRes};
use axum::response::Json;
use healthassist_core::matcher;

#[utoipa::path(
    post,
    path = "/symptom-checker",
    request_body = SymptomCheckReq,
    responses(
        (status = 200, description = "Candidate conditions, most likely first", body = SymptomCheckRes),
        (status = 500, description = "Internal server error", body = api_shared::wire::ErrorRes)
    )
)]
/// Check symptoms against the condition catalog
///
/// Free text and ticked symptom labels are evaluated together. The same illness may be
/// returned more than once unless `dedupe` is set. Input that matches nothing yields a single
/// "Unknown Condition" prediction.
#[axum::debug_handler]
pub async fn check_symptoms(Json(req): Json<SymptomCheckReq>) -> Json<SymptomCheckRes> {
    let res = matcher::check_symptoms(&req);
    tracing::debug!(predictions = res.predictions.len(), "symptoms checked");
    Json(res)
}
