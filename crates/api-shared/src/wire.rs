//! JSON wire types shared by the REST API, the core services, and the CLI.
//!
//! Field names are camelCase on the wire. Request types default every missing field so that
//! absent input reaches validation (and a 400) instead of failing JSON extraction.

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

// ============================================================================
// SYMPTOM CHECKER
// ============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum Severity {
    Low,
    Medium,
    High,
}

/// One candidate condition produced by evaluating symptoms against the condition catalog.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MatchResult {
    pub illness: String,
    pub likelihood: u8,
    pub severity: Severity,
    pub recommendation: String,
    pub seek_medical_attention: bool,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, ToSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct SymptomCheckReq {
    /// Free-text description of the symptoms.
    pub symptoms: Option<String>,
    /// Labels of the symptom checkboxes the user ticked.
    pub selected_symptoms: Vec<String>,
    /// Collapse repeated illnesses, keeping the most likely entry of each.
    pub dedupe: bool,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct SymptomCheckRes {
    pub predictions: Vec<MatchResult>,
}

// ============================================================================
// CHATBOT & HEALTH INFORMATION
// ============================================================================

#[derive(Clone, Debug, Default, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct ChatbotReq {
    pub message: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct ChatbotRes {
    pub response: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct HealthTopic {
    pub id: String,
    pub title: String,
    pub description: String,
    pub content: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct ListTopicsRes {
    pub topics: Vec<HealthTopic>,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct TopicRes {
    pub topic: HealthTopic,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct HealthInfoReq {
    pub question: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct HealthInfoRes {
    pub answer: String,
    pub related_topic: Option<HealthTopic>,
}

// ============================================================================
// CLINIC QUEUE
// ============================================================================

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Clinic {
    pub id: u32,
    pub name: String,
    pub address: String,
    pub phone: String,
    pub wait_time: String,
    pub opening_hours: String,
    pub services: Vec<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct ListClinicsRes {
    pub clinics: Vec<Clinic>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ClaimStatus {
    Waiting,
    Seen,
    Cancelled,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct QueueClaim {
    pub id: String,
    /// Echoed in the form the client sent it.
    pub clinic_id: ClinicRef,
    pub user_id: Option<String>,
    pub name: String,
    pub phone: String,
    pub description: String,
    /// Queue ticket: one of `A`, `B`, `C` followed by three digits.
    pub queue_number: String,
    pub status: ClaimStatus,
    /// Copied from the clinic's advertised wait time.
    pub estimated_time: String,
    /// RFC 3339 timestamp.
    pub created_at: String,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, ToSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct SubmitClaimReq {
    pub clinic_id: Option<ClinicRef>,
    pub name: String,
    pub phone: String,
    pub description: String,
    pub user_id: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct SubmitClaimRes {
    pub message: String,
    pub claim: QueueClaim,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct ListClaimsRes {
    pub claims: Vec<QueueClaim>,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct ClaimRes {
    pub claim: QueueClaim,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct CancelClaimRes {
    pub message: String,
    /// `false` when no claim with the given id existed.
    pub cancelled: bool,
}

/// A clinic id as a client sent it: a JSON number or a string.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(untagged)]
pub enum ClinicRef {
    Number(u64),
    Text(String),
}

impl ClinicRef {
    /// `0` and blank strings count as no clinic at all.
    pub fn is_unset(&self) -> bool {
        match self {
            ClinicRef::Number(n) => *n == 0,
            ClinicRef::Text(s) => s.trim().is_empty(),
        }
    }

    pub fn as_text(&self) -> std::borrow::Cow<'_, str> {
        match self {
            ClinicRef::Number(n) => n.to_string().into(),
            ClinicRef::Text(s) => s.as_str().into(),
        }
    }
}

impl From<u64> for ClinicRef {
    fn from(n: u64) -> Self {
        ClinicRef::Number(n)
    }
}

impl From<&str> for ClinicRef {
    fn from(s: &str) -> Self {
        ClinicRef::Text(s.to_string())
    }
}

// ============================================================================
// ACCOUNTS
// ============================================================================

/// Account details that are safe to return to clients.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PublicUser {
    pub id: String,
    pub email: String,
    pub family_name: String,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct LoginReq {
    pub email: String,
    pub password: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct LoginRes {
    pub user: PublicUser,
    pub token: String,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, ToSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct RegisterReq {
    pub family_name: String,
    pub email: String,
    pub password: String,
    pub phone: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct RegisterRes {
    pub message: String,
    pub user: PublicUser,
}

// ============================================================================
// FAMILY DASHBOARD
// ============================================================================

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FamilyMember {
    pub id: String,
    pub name: String,
    pub age: u32,
    pub relationship: String,
    pub health_status: String,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct AddMemberReq {
    pub name: String,
    pub age: u32,
    pub relationship: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct ListMembersRes {
    pub members: Vec<FamilyMember>,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct MemberRes {
    pub member: FamilyMember,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Medication {
    pub id: String,
    pub name: String,
    pub dosage: String,
    pub frequency: String,
    /// Reminder time of day, `HH:MM`.
    pub time: String,
    pub for_member: String,
    pub taken: bool,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, ToSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct AddMedicationReq {
    pub name: String,
    pub dosage: String,
    pub frequency: String,
    pub time: String,
    pub for_member: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct ListMedicationsRes {
    pub medications: Vec<Medication>,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct MedicationRes {
    pub medication: Medication,
}

#[derive(Clone, Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct MedicationFilter {
    /// Only return medications that have not been taken yet.
    pub pending: Option<bool>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum AppointmentStatus {
    Upcoming,
    Completed,
    Cancelled,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Appointment {
    pub id: String,
    pub title: String,
    /// `YYYY-MM-DD`.
    pub date: String,
    /// `HH:MM`.
    pub time: String,
    pub location: String,
    pub for_member: String,
    pub status: AppointmentStatus,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, ToSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct AddAppointmentReq {
    pub title: String,
    pub date: String,
    pub time: String,
    pub location: String,
    pub for_member: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct ListAppointmentsRes {
    pub appointments: Vec<Appointment>,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct AppointmentRes {
    pub appointment: Appointment,
}

#[derive(Clone, Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct AppointmentFilter {
    /// Only return appointments that are still upcoming.
    pub upcoming: Option<bool>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct EmergencyService {
    pub name: String,
    pub number: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct EmergencyRes {
    pub services: Vec<EmergencyService>,
}

// ============================================================================
// SERVICE
// ============================================================================

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthRes {
    pub ok: bool,
    pub message: String,
}

/// Body returned with every non-2xx response.
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorRes {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn claim_request_keeps_numeric_clinic_id() {
        let req: SubmitClaimReq =
            serde_json::from_str(r#"{"clinicId": 2, "name": "A", "phone": "1", "description": "d"}"#)
                .unwrap();
        assert_eq!(req.clinic_id, Some(ClinicRef::Number(2)));
        assert_eq!(req.clinic_id.unwrap().as_text(), "2");
    }

    #[test]
    fn claim_request_keeps_string_clinic_id() {
        let req: SubmitClaimReq = serde_json::from_str(r#"{"clinicId": "3"}"#).unwrap();
        assert_eq!(req.clinic_id, Some(ClinicRef::Text("3".into())));
        assert!(req.name.is_empty());
    }

    #[test]
    fn clinic_ref_serialises_in_the_form_received() {
        assert_eq!(serde_json::to_value(ClinicRef::Number(2)).unwrap(), serde_json::json!(2));
        assert_eq!(
            serde_json::to_value(ClinicRef::from("2")).unwrap(),
            serde_json::json!("2")
        );
    }

    #[test]
    fn zero_and_blank_clinic_ids_are_unset() {
        assert!(ClinicRef::Number(0).is_unset());
        assert!(ClinicRef::from("  ").is_unset());
        assert!(!ClinicRef::from("0").is_unset());
        assert!(!ClinicRef::Number(1).is_unset());
    }

    #[test]
    fn claim_request_defaults_missing_fields() {
        let req: SubmitClaimReq = serde_json::from_str("{}").unwrap();
        assert!(req.clinic_id.is_none());
        assert!(req.user_id.is_none());
    }

    #[test]
    fn match_result_serialises_camel_case() {
        let result = MatchResult {
            illness: "Common Cold".into(),
            likelihood: 65,
            severity: Severity::Low,
            recommendation: "Rest".into(),
            seek_medical_attention: false,
        };
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["seekMedicalAttention"], false);
        assert_eq!(json["severity"], "Low");
    }

    #[test]
    fn health_info_without_topic_serialises_null() {
        let res = HealthInfoRes {
            answer: "x".into(),
            related_topic: None,
        };
        let json = serde_json::to_value(&res).unwrap();
        assert!(json["relatedTopic"].is_null());
    }

    #[test]
    fn claim_status_is_lowercase() {
        assert_eq!(
            serde_json::to_value(ClaimStatus::Waiting).unwrap(),
            serde_json::json!("waiting")
        );
    }
}
