//! Storage seams for the portal services.
//!
//! Services hold their stores as `Arc<dyn ...Repository>` so the HTTP layer can hand in the
//! in-memory implementations from [`memory`] (or anything else) without the services knowing.
//! Every mutation that has a precondition (unique ids, unique emails) is checked and applied
//! inside a single call, so two concurrent requests cannot both pass the check.

pub mod memory;

use api_shared::wire::{ClinicRef, PublicUser, QueueClaim};
use healthassist_types::{EmailAddress, NonEmptyText};

use crate::PortalResult;

// ============================================================================
// CLAIMS
// ============================================================================

/// A validated claim awaiting an id from the repository.
#[derive(Clone, Debug)]
pub struct ClaimDraft {
    pub clinic_id: ClinicRef,
    pub user_id: Option<String>,
    pub name: NonEmptyText,
    pub phone: NonEmptyText,
    pub description: NonEmptyText,
    pub queue_number: String,
    pub estimated_time: String,
    pub created_at: String,
}

pub trait ClaimRepository: Send + Sync {
    /// Assign the next `q<n>` id, store the claim in `waiting` state and return it.
    fn insert(&self, draft: ClaimDraft) -> PortalResult<QueueClaim>;

    /// All claims in insertion order.
    fn list(&self) -> PortalResult<Vec<QueueClaim>>;

    fn get(&self, id: &str) -> PortalResult<Option<QueueClaim>>;

    /// Remove a claim. Returns `false` if no claim had that id.
    fn remove(&self, id: &str) -> PortalResult<bool>;
}

// ============================================================================
// USERS
// ============================================================================

/// A stored account, including the password.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UserRecord {
    pub id: String,
    pub email: EmailAddress,
    pub password: String,
    pub family_name: String,
    pub phone: Option<String>,
}

impl UserRecord {
    /// The client-facing view of the account. Never includes the password.
    pub fn public(&self) -> PublicUser {
        PublicUser {
            id: self.id.clone(),
            email: self.email.to_string(),
            family_name: self.family_name.clone(),
        }
    }
}

/// A validated registration awaiting an id from the repository.
#[derive(Clone, Debug)]
pub struct NewUser {
    pub email: EmailAddress,
    /// Stored exactly as submitted.
    pub password: String,
    pub family_name: NonEmptyText,
    pub phone: Option<String>,
}

pub trait UserRepository: Send + Sync {
    fn find_by_email(&self, email: &EmailAddress) -> PortalResult<Option<UserRecord>>;

    /// Store a new account under the next numeric id.
    ///
    /// # Errors
    ///
    /// Returns `PortalError::Validation("Email already registered")` if the email is taken.
    fn insert(&self, user: NewUser) -> PortalResult<UserRecord>;
}
