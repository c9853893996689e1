use api_shared::wire::{
    CancelClaimRes, ClaimRes, ListClaimsRes, ListClinicsRes, SubmitClaimReq, SubmitClaimRes,
};
use axum::extract::{Path, State};
use axum::response::Json;
use healthassist_core::clinics::all_clinics;
use healthassist_core::constants::CLAIM_SUBMITTED_MESSAGE;

use crate::error::ApiResult;
use crate::state::AppState;

#[utoipa::path(
    get,
    path = "/clinic-queue",
    responses(
        (status = 200, description = "Clinics accepting queue claims", body = ListClinicsRes)
    )
)]
#[axum::debug_handler]
pub async fn list_clinics() -> Json<ListClinicsRes> {
    Json(ListClinicsRes {
        clinics: all_clinics().to_vec(),
    })
}

#[utoipa::path(
    post,
    path = "/clinic-queue",
    request_body = SubmitClaimReq,
    responses(
        (status = 200, description = "Claim queued", body = SubmitClaimRes),
        (status = 400, description = "A required field is missing", body = api_shared::wire::ErrorRes),
        (status = 404, description = "Unknown clinic", body = api_shared::wire::ErrorRes),
        (status = 500, description = "Internal server error", body = api_shared::wire::ErrorRes)
    )
)]
/// Join a clinic's queue
///
/// Assigns a ticket such as `B017` and copies the clinic's wait time into the claim. Tickets
/// are random and may repeat; claim ids never do.
#[axum::debug_handler]
pub async fn submit_claim(
    State(state): State<AppState>,
    Json(req): Json<SubmitClaimReq>,
) -> ApiResult<SubmitClaimRes> {
    let claim = state.claims.submit_claim(req)?;
    Ok(Json(SubmitClaimRes {
        message: CLAIM_SUBMITTED_MESSAGE.to_string(),
        claim,
    }))
}

#[utoipa::path(
    get,
    path = "/clinic-queue/claims",
    responses(
        (status = 200, description = "All claims in submission order", body = ListClaimsRes),
        (status = 500, description = "Internal server error", body = api_shared::wire::ErrorRes)
    )
)]
#[axum::debug_handler]
pub async fn list_claims(State(state): State<AppState>) -> ApiResult<ListClaimsRes> {
    Ok(Json(ListClaimsRes {
        claims: state.claims.list_claims()?,
    }))
}

#[utoipa::path(
    get,
    path = "/clinic-queue/claims/{id}",
    params(("id" = String, Path, description = "Claim id, e.g. `q1`")),
    responses(
        (status = 200, description = "One claim", body = ClaimRes),
        (status = 404, description = "Unknown claim", body = api_shared::wire::ErrorRes)
    )
)]
#[axum::debug_handler]
pub async fn get_claim(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<ClaimRes> {
    Ok(Json(ClaimRes {
        claim: state.claims.get_claim(&id)?,
    }))
}

#[utoipa::path(
    delete,
    path = "/clinic-queue/claims/{id}",
    params(("id" = String, Path, description = "Claim id, e.g. `q1`")),
    responses(
        (status = 200, description = "Claim removed, or nothing to remove", body = CancelClaimRes),
        (status = 500, description = "Internal server error", body = api_shared::wire::ErrorRes)
    )
)]
/// Cancel a queue claim
///
/// Cancelling an unknown id is not an error: the response has `cancelled: false`.
#[axum::debug_handler]
pub async fn cancel_claim(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<CancelClaimRes> {
    let cancelled = state.claims.cancel_claim(&id)?;
    let message = if cancelled {
        "Claim cancelled"
    } else {
        "No claim with that id"
    };
    Ok(Json(CancelClaimRes {
        message: message.to_string(),
        cancelled,
    }))
}
