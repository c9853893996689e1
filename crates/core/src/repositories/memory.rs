//! In-process repositories backed by a `Mutex<Vec<_>>`.
//!
//! State lives only as long as the process. Each lock is held for one read or one mutation.

use std::sync::{Mutex, MutexGuard};

use api_shared::wire::{ClaimStatus, ClinicRef, QueueClaim};
use healthassist_types::EmailAddress;

use super::{ClaimDraft, ClaimRepository, NewUser, UserRecord, UserRepository};
use crate::{PortalError, PortalResult};

fn lock<'a, T>(mutex: &'a Mutex<T>, store: &'static str) -> PortalResult<MutexGuard<'a, T>> {
    mutex.lock().map_err(|_| PortalError::LockPoisoned(store))
}

// ============================================================================
// CLAIMS
// ============================================================================

#[derive(Debug)]
struct ClaimStore {
    claims: Vec<QueueClaim>,
    /// Last number handed out in a `q<n>` id. Never reused, even after removal.
    last_id: u64,
}

#[derive(Debug)]
pub struct InMemoryClaimRepository {
    inner: Mutex<ClaimStore>,
}

impl InMemoryClaimRepository {
    pub fn empty() -> Self {
        Self {
            inner: Mutex::new(ClaimStore {
                claims: Vec::new(),
                last_id: 0,
            }),
        }
    }

    /// Starts with the demo claim `q1`.
    pub fn seeded() -> Self {
        let demo = QueueClaim {
            id: "q1".into(),
            clinic_id: ClinicRef::Number(1),
            user_id: Some("user123".into()),
            name: "John Smith".into(),
            phone: "071 234 5678".into(),
            description: "Persistent cough and fever".into(),
            queue_number: "A001".into(),
            status: ClaimStatus::Waiting,
            estimated_time: "45 minutes".into(),
            created_at: "2023-05-15T08:30:00Z".into(),
        };
        Self {
            inner: Mutex::new(ClaimStore {
                claims: vec![demo],
                last_id: 1,
            }),
        }
    }
}

impl ClaimRepository for InMemoryClaimRepository {
    fn insert(&self, draft: ClaimDraft) -> PortalResult<QueueClaim> {
        let mut store = lock(&self.inner, "claim")?;
        store.last_id += 1;

        let claim = QueueClaim {
            id: format!("q{}", store.last_id),
            clinic_id: draft.clinic_id,
            user_id: draft.user_id,
            name: draft.name.into_inner(),
            phone: draft.phone.into_inner(),
            description: draft.description.into_inner(),
            queue_number: draft.queue_number,
            status: ClaimStatus::Waiting,
            estimated_time: draft.estimated_time,
            created_at: draft.created_at,
        };
        store.claims.push(claim.clone());
        Ok(claim)
    }

    fn list(&self) -> PortalResult<Vec<QueueClaim>> {
        Ok(lock(&self.inner, "claim")?.claims.clone())
    }

    fn get(&self, id: &str) -> PortalResult<Option<QueueClaim>> {
        Ok(lock(&self.inner, "claim")?
            .claims
            .iter()
            .find(|c| c.id == id)
            .cloned())
    }

    fn remove(&self, id: &str) -> PortalResult<bool> {
        let mut store = lock(&self.inner, "claim")?;
        let before = store.claims.len();
        store.claims.retain(|c| c.id != id);
        Ok(store.claims.len() != before)
    }
}

// ============================================================================
// USERS
// ============================================================================

#[derive(Debug)]
pub struct InMemoryUserRepository {
    users: Mutex<Vec<UserRecord>>,
}

impl InMemoryUserRepository {
    pub fn empty() -> Self {
        Self {
            users: Mutex::new(Vec::new()),
        }
    }

    /// Starts with the demo account `family@example.com` / `password123`.
    pub fn seeded() -> PortalResult<Self> {
        let demo = UserRecord {
            id: "1".into(),
            email: EmailAddress::parse("family@example.com")?,
            password: "password123".into(),
            family_name: "Smith Family".into(),
            phone: Some("0712345678".into()),
        };
        Ok(Self {
            users: Mutex::new(vec![demo]),
        })
    }
}

impl UserRepository for InMemoryUserRepository {
    fn find_by_email(&self, email: &EmailAddress) -> PortalResult<Option<UserRecord>> {
        Ok(lock(&self.users, "user")?
            .iter()
            .find(|u| &u.email == email)
            .cloned())
    }

    fn insert(&self, user: NewUser) -> PortalResult<UserRecord> {
        let mut users = lock(&self.users, "user")?;
        if users.iter().any(|u| u.email == user.email) {
            return Err(PortalError::Validation("Email already registered".into()));
        }

        let record = UserRecord {
            id: (users.len() + 1).to_string(),
            email: user.email,
            password: user.password,
            family_name: user.family_name.into_inner(),
            phone: user.phone,
        };
        users.push(record.clone());
        Ok(record)
    }
}
