use api_shared::wire::{
    AddAppointmentReq, AddMedicationReq, AddMemberReq, AppointmentFilter, AppointmentRes,
    ListAppointmentsRes, ListMedicationsRes, ListMembersRes, MedicationFilter, MedicationRes,
    MemberRes,
};
use axum::extract::{Path, Query, State};
use axum::response::Json;

use crate::error::ApiResult;
use crate::state::AppState;

// ============================================================================
// FAMILY MEMBERS
// ============================================================================

#[utoipa::path(
    get,
    path = "/family-members",
    responses(
        (status = 200, description = "Family members", body = ListMembersRes),
        (status = 500, description = "Internal server error", body = api_shared::wire::ErrorRes)
    )
)]
#[axum::debug_handler]
pub async fn list_members(State(state): State<AppState>) -> ApiResult<ListMembersRes> {
    Ok(Json(ListMembersRes {
        members: state.dashboard.list_members()?,
    }))
}

#[utoipa::path(
    post,
    path = "/family-members",
    request_body = AddMemberReq,
    responses(
        (status = 200, description = "Member added", body = MemberRes),
        (status = 400, description = "Name or relationship missing", body = api_shared::wire::ErrorRes)
    )
)]
#[axum::debug_handler]
pub async fn add_member(
    State(state): State<AppState>,
    Json(req): Json<AddMemberReq>,
) -> ApiResult<MemberRes> {
    Ok(Json(MemberRes {
        member: state.dashboard.add_member(req)?,
    }))
}

#[utoipa::path(
    get,
    path = "/family-members/{id}",
    params(("id" = String, Path, description = "Member id")),
    responses(
        (status = 200, description = "One family member", body = MemberRes),
        (status = 404, description = "Unknown member", body = api_shared::wire::ErrorRes)
    )
)]
#[axum::debug_handler]
pub async fn get_member(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<MemberRes> {
    Ok(Json(MemberRes {
        member: state.dashboard.get_member(&id)?,
    }))
}

// ============================================================================
// MEDICATIONS
// ============================================================================

#[utoipa::path(
    get,
    path = "/medications",
    params(MedicationFilter),
    responses(
        (status = 200, description = "Medication reminders", body = ListMedicationsRes),
        (status = 500, description = "Internal server error", body = api_shared::wire::ErrorRes)
    )
)]
/// List medication reminders
///
/// With `?pending=true` only medications not yet taken are returned.
#[axum::debug_handler]
pub async fn list_medications(
    State(state): State<AppState>,
    Query(filter): Query<MedicationFilter>,
) -> ApiResult<ListMedicationsRes> {
    let medications = if filter.pending.unwrap_or(false) {
        state.dashboard.pending_medications()?
    } else {
        state.dashboard.list_medications()?
    };
    Ok(Json(ListMedicationsRes { medications }))
}

#[utoipa::path(
    post,
    path = "/medications",
    request_body = AddMedicationReq,
    responses(
        (status = 200, description = "Reminder added", body = MedicationRes),
        (status = 400, description = "Missing field or bad time", body = api_shared::wire::ErrorRes)
    )
)]
#[axum::debug_handler]
pub async fn add_medication(
    State(state): State<AppState>,
    Json(req): Json<AddMedicationReq>,
) -> ApiResult<MedicationRes> {
    Ok(Json(MedicationRes {
        medication: state.dashboard.add_medication(req)?,
    }))
}

#[utoipa::path(
    post,
    path = "/medications/{id}/taken",
    params(("id" = String, Path, description = "Medication id")),
    responses(
        (status = 200, description = "Medication marked as taken", body = MedicationRes),
        (status = 404, description = "Unknown medication", body = api_shared::wire::ErrorRes)
    )
)]
#[axum::debug_handler]
pub async fn mark_medication_taken(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<MedicationRes> {
    Ok(Json(MedicationRes {
        medication: state.dashboard.mark_taken(&id)?,
    }))
}

// ============================================================================
// APPOINTMENTS
// ============================================================================

#[utoipa::path(
    get,
    path = "/appointments",
    params(AppointmentFilter),
    responses(
        (status = 200, description = "Appointments", body = ListAppointmentsRes),
        (status = 500, description = "Internal server error", body = api_shared::wire::ErrorRes)
    )
)]
/// List appointments
///
/// With `?upcoming=true` completed and cancelled appointments are left out.
#[axum::debug_handler]
pub async fn list_appointments(
    State(state): State<AppState>,
    Query(filter): Query<AppointmentFilter>,
) -> ApiResult<ListAppointmentsRes> {
    let appointments = if filter.upcoming.unwrap_or(false) {
        state.dashboard.upcoming_appointments()?
    } else {
        state.dashboard.list_appointments()?
    };
    Ok(Json(ListAppointmentsRes { appointments }))
}

#[utoipa::path(
    post,
    path = "/appointments",
    request_body = AddAppointmentReq,
    responses(
        (status = 200, description = "Appointment booked", body = AppointmentRes),
        (status = 400, description = "Missing field, bad date or bad time", body = api_shared::wire::ErrorRes)
    )
)]
#[axum::debug_handler]
pub async fn add_appointment(
    State(state): State<AppState>,
    Json(req): Json<AddAppointmentReq>,
) -> ApiResult<AppointmentRes> {
    Ok(Json(AppointmentRes {
        appointment: state.dashboard.add_appointment(req)?,
    }))
}
