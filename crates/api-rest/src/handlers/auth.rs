use api_shared::wire::{LoginReq, LoginRes, RegisterReq, RegisterRes};
use axum::extract::State;
use axum::response::Json;

use crate::error::ApiResult;
use crate::state::AppState;

#[utoipa::path(
    post,
    path = "/auth/login",
    request_body = LoginReq,
    responses(
        (status = 200, description = "Logged in", body = LoginRes),
        (status = 401, description = "Invalid email or password", body = api_shared::wire::ErrorRes),
        (status = 500, description = "Internal server error", body = api_shared::wire::ErrorRes)
    )
)]
/// Log a family account in
///
/// Returns the public account details and a mock session token.
#[axum::debug_handler]
pub async fn login(State(state): State<AppState>, Json(req): Json<LoginReq>) -> ApiResult<LoginRes> {
    Ok(Json(state.accounts.login(req)?))
}

#[utoipa::path(
    post,
    path = "/auth/register",
    request_body = RegisterReq,
    responses(
        (status = 200, description = "Account created", body = RegisterRes),
        (status = 400, description = "Missing fields, bad email, or email already registered", body = api_shared::wire::ErrorRes),
        (status = 500, description = "Internal server error", body = api_shared::wire::ErrorRes)
    )
)]
#[axum::debug_handler]
pub async fn register(
    State(state): State<AppState>,
    Json(req): Json<RegisterReq>,
) -> ApiResult<RegisterRes> {
    Ok(Json(state.accounts.register(req)?))
}
