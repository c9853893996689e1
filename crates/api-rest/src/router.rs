use api_shared::wire::{
    AddAppointmentReq, AddMedicationReq, AddMemberReq, Appointment, AppointmentRes,
    AppointmentStatus, CancelClaimRes, ChatbotReq, ChatbotRes, ClaimRes, ClaimStatus, Clinic,
    ClinicRef, EmergencyRes, EmergencyService, ErrorRes, FamilyMember, HealthInfoReq,
    HealthInfoRes, HealthRes, HealthTopic, ListAppointmentsRes, ListClaimsRes, ListClinicsRes,
    ListMedicationsRes, ListMembersRes, ListTopicsRes, LoginReq, LoginRes, MatchResult,
    Medication, MedicationRes, MemberRes, PublicUser, QueueClaim, RegisterReq, RegisterRes,
    Severity, SubmitClaimReq, SubmitClaimRes, SymptomCheckReq, SymptomCheckRes, TopicRes,
};
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::handlers::{auth, clinic_queue, dashboard, health_info, service, symptoms};
use crate::state::AppState;

#[derive(OpenApi)]
#[openapi(
    paths(
        service::health,
        service::emergency,
        auth::login,
        auth::register,
        symptoms::check_symptoms,
        health_info::chatbot,
        health_info::list_topics,
        health_info::ask_question,
        health_info::get_topic,
        clinic_queue::list_clinics,
        clinic_queue::submit_claim,
        clinic_queue::list_claims,
        clinic_queue::get_claim,
        clinic_queue::cancel_claim,
        dashboard::list_members,
        dashboard::add_member,
        dashboard::get_member,
        dashboard::list_medications,
        dashboard::add_medication,
        dashboard::mark_medication_taken,
        dashboard::list_appointments,
        dashboard::add_appointment,
    ),
    components(schemas(
        HealthRes,
        ErrorRes,
        EmergencyRes,
        EmergencyService,
        LoginReq,
        LoginRes,
        RegisterReq,
        RegisterRes,
        PublicUser,
        SymptomCheckReq,
        SymptomCheckRes,
        MatchResult,
        Severity,
        ChatbotReq,
        ChatbotRes,
        HealthTopic,
        ListTopicsRes,
        TopicRes,
        HealthInfoReq,
        HealthInfoRes,
        Clinic,
        ListClinicsRes,
        QueueClaim,
        ClinicRef,
        ClaimStatus,
        SubmitClaimReq,
        SubmitClaimRes,
        ListClaimsRes,
        ClaimRes,
        CancelClaimRes,
        FamilyMember,
        AddMemberReq,
        ListMembersRes,
        MemberRes,
        Medication,
        AddMedicationReq,
        ListMedicationsRes,
        MedicationRes,
        Appointment,
        AppointmentStatus,
        AddAppointmentReq,
        ListAppointmentsRes,
        AppointmentRes,
    ))
)]
pub struct ApiDoc;

/// Build the HealthAssist REST router over the given state.
///
/// Includes Swagger UI at `/swagger-ui` with the document at `/api-docs/openapi.json`,
/// permissive CORS and per-request tracing.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(service::health))
        .route("/emergency", get(service::emergency))
        .route("/auth/login", post(auth::login))
        .route("/auth/register", post(auth::register))
        .route("/symptom-checker", post(symptoms::check_symptoms))
        .route("/chatbot", post(health_info::chatbot))
        .route(
            "/health-info",
            get(health_info::list_topics).post(health_info::ask_question),
        )
        .route("/health-info/:topic_id", get(health_info::get_topic))
        .route(
            "/clinic-queue",
            get(clinic_queue::list_clinics).post(clinic_queue::submit_claim),
        )
        .route("/clinic-queue/claims", get(clinic_queue::list_claims))
        .route(
            "/clinic-queue/claims/:id",
            get(clinic_queue::get_claim).delete(clinic_queue::cancel_claim),
        )
        .route(
            "/family-members",
            get(dashboard::list_members).post(dashboard::add_member),
        )
        .route("/family-members/:id", get(dashboard::get_member))
        .route(
            "/medications",
            get(dashboard::list_medications).post(dashboard::add_medication),
        )
        .route(
            "/medications/:id/taken",
            post(dashboard::mark_medication_taken),
        )
        .route(
            "/appointments",
            get(dashboard::list_appointments).post(dashboard::add_appointment),
        )
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
