//! Clinic queue claims.
//!
//! A claim reserves a place in a clinic's walk-in queue. Submission validates the request,
//! resolves the clinic, mints a ticket such as `B017`, and stores the claim in `waiting`
//! state with the clinic's advertised wait time as the estimate.
//!
//! Tickets are drawn at random without checking for collisions, so two waiting claims can
//! share a ticket. Claim ids come from the repository and are always unique.

use std::sync::Arc;

use api_shared::wire::{QueueClaim, SubmitClaimReq};
use chrono::Utc;
use rand::Rng;

use crate::clinics::find_clinic;
use crate::constants::{QUEUE_NUMBER_BOUND, QUEUE_PREFIXES};
use crate::repositories::{ClaimDraft, ClaimRepository};
use crate::validation::require_all;
use crate::{PortalError, PortalResult};

const ALL_FIELDS_REQUIRED: &str = "All fields are required";

/// Mint a queue ticket: one of `A`, `B`, `C` followed by a zero-padded number below 100.
pub fn mint_queue_number<R: Rng>(rng: &mut R) -> String {
    let prefix = QUEUE_PREFIXES[rng.gen_range(0..QUEUE_PREFIXES.len())];
    let number = rng.gen_range(0..QUEUE_NUMBER_BOUND);
    format!("{prefix}{number:03}")
}

#[derive(Clone)]
pub struct ClaimService {
    claims: Arc<dyn ClaimRepository>,
}

impl ClaimService {
    pub fn new(claims: Arc<dyn ClaimRepository>) -> Self {
        Self { claims }
    }

    /// Submit a queue claim using the thread-local RNG for the ticket.
    pub fn submit_claim(&self, req: SubmitClaimReq) -> PortalResult<QueueClaim> {
        self.submit_claim_with_rng(req, &mut rand::thread_rng())
    }

    /// Submit a queue claim.
    ///
    /// # Errors
    ///
    /// - [`PortalError::Validation`] if the clinic id is missing, `0` or blank, or any of name,
    ///   phone and description is blank. Nothing is stored.
    /// - [`PortalError::NotFound`] if the clinic id names no clinic. Nothing is stored.
    /// - [`PortalError::LockPoisoned`] if the claim store is unusable.
    pub fn submit_claim_with_rng<R: Rng>(
        &self,
        req: SubmitClaimReq,
        rng: &mut R,
    ) -> PortalResult<QueueClaim> {
        let clinic_ref = req
            .clinic_id
            .filter(|id| !id.is_unset())
            .ok_or_else(|| PortalError::Validation(ALL_FIELDS_REQUIRED.into()))?;
        let [name, phone, description] = require_all(
            [req.name.as_str(), req.phone.as_str(), req.description.as_str()],
            ALL_FIELDS_REQUIRED,
        )?;

        let clinic = find_clinic(&clinic_ref.as_text())?;

        let claim = self.claims.insert(ClaimDraft {
            clinic_id: clinic_ref,
            user_id: req.user_id.filter(|id| !id.trim().is_empty()),
            name,
            phone,
            description,
            queue_number: mint_queue_number(rng),
            estimated_time: clinic.wait_time.clone(),
            created_at: Utc::now().to_rfc3339(),
        })?;

        tracing::info!(
            claim_id = %claim.id,
            clinic_id = clinic.id,
            queue_number = %claim.queue_number,
            "queue claim submitted"
        );
        Ok(claim)
    }

    pub fn list_claims(&self) -> PortalResult<Vec<QueueClaim>> {
        self.claims.list()
    }

    pub fn get_claim(&self, id: &str) -> PortalResult<QueueClaim> {
        self.claims
            .get(id)?
            .ok_or_else(|| PortalError::NotFound("Claim not found".into()))
    }

    /// Remove a claim. An unknown id is not an error; it returns `false`.
    pub fn cancel_claim(&self, id: &str) -> PortalResult<bool> {
        let removed = self.claims.remove(id)?;
        if removed {
            tracing::info!(claim_id = %id, "queue claim cancelled");
        }
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::memory::InMemoryClaimRepository;
    use api_shared::wire::{ClaimStatus, ClinicRef};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn service() -> ClaimService {
        ClaimService::new(Arc::new(InMemoryClaimRepository::seeded()))
    }

    fn request(clinic_id: &str) -> SubmitClaimReq {
        SubmitClaimReq {
            clinic_id: Some(clinic_id.into()),
            name: "Sipho Nkosi".into(),
            phone: "072 555 0101".into(),
            description: "Chest pain since yesterday".into(),
            user_id: None,
        }
    }

    fn is_ticket(queue_number: &str) -> bool {
        let mut chars = queue_number.chars();
        matches!(chars.next(), Some('A' | 'B' | 'C'))
            && queue_number.len() == 4
            && chars.all(|c| c.is_ascii_digit())
    }

    #[test]
    fn tickets_have_letter_and_three_digits() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..500 {
            let ticket = mint_queue_number(&mut rng);
            assert!(is_ticket(&ticket), "bad ticket {ticket}");
        }
    }

    #[test]
    fn submitted_claim_copies_clinic_wait_time() {
        let service = service();
        let mut rng = StdRng::seed_from_u64(1);
        let claim = service
            .submit_claim_with_rng(request("3"), &mut rng)
            .unwrap();
        assert_eq!(claim.clinic_id, ClinicRef::from("3"));
        assert_eq!(claim.estimated_time, "60 minutes");
        assert_eq!(claim.status, ClaimStatus::Waiting);
        assert!(is_ticket(&claim.queue_number));
        assert!(chrono::DateTime::parse_from_rfc3339(&claim.created_at).is_ok());
    }

    #[test]
    fn unknown_clinic_leaves_claims_untouched() {
        let service = service();
        let before = service.list_claims().unwrap();
        let err = service.submit_claim(request("9")).unwrap_err();
        assert!(matches!(err, PortalError::NotFound(m) if m == "Clinic not found"));
        let err = service.submit_claim(request("0")).unwrap_err();
        assert!(matches!(err, PortalError::NotFound(_)));
        assert_eq!(service.list_claims().unwrap(), before);
    }

    #[test]
    fn missing_fields_are_rejected_all_or_nothing() {
        let service = service();

        let mut missing_clinic = request("1");
        missing_clinic.clinic_id = None;
        let mut zero_clinic = request("1");
        zero_clinic.clinic_id = Some(ClinicRef::Number(0));
        let mut blank_phone = request("1");
        blank_phone.phone = "   ".into();

        for req in [missing_clinic, zero_clinic, blank_phone] {
            let err = service.submit_claim(req).unwrap_err();
            assert!(matches!(err, PortalError::Validation(m) if m == ALL_FIELDS_REQUIRED));
        }
        assert_eq!(service.list_claims().unwrap().len(), 1);
    }

    #[test]
    fn identical_submissions_get_distinct_ids() {
        let service = service();
        let a = service.submit_claim(request("1")).unwrap();
        let b = service.submit_claim(request("1")).unwrap();
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn claim_round_trip() {
        let service = service();
        let claim = service.submit_claim(request("2")).unwrap();

        assert!(service.list_claims().unwrap().contains(&claim));
        assert_eq!(service.get_claim(&claim.id).unwrap(), claim);

        assert!(service.cancel_claim(&claim.id).unwrap());
        assert!(!service.list_claims().unwrap().iter().any(|c| c.id == claim.id));
        assert!(matches!(
            service.get_claim(&claim.id),
            Err(PortalError::NotFound(_))
        ));
        assert!(!service.cancel_claim(&claim.id).unwrap());
    }
}
