//! Constants used throughout the HealthAssist core crate.

/// Default REST listen address when `HEALTHASSIST_REST_ADDR` is not set.
pub const DEFAULT_REST_ADDR: &str = "0.0.0.0:3000";

/// Illness name of the synthetic result returned when no catalog rule matches.
pub const UNKNOWN_CONDITION: &str = "Unknown Condition";

/// Likelihood of the synthetic unknown-condition result.
pub const UNKNOWN_CONDITION_LIKELIHOOD: u8 = 30;

/// Letters a queue ticket may start with.
pub const QUEUE_PREFIXES: [char; 3] = ['A', 'B', 'C'];

/// Exclusive upper bound of the numeric part of a queue ticket.
pub const QUEUE_NUMBER_BOUND: u32 = 100;

/// Prefix of the mock session tokens handed out on login.
pub const SESSION_TOKEN_PREFIX: &str = "mock-jwt-token-";

/// Health status given to newly added family members.
pub const DEFAULT_HEALTH_STATUS: &str = "Good";

pub const CLAIM_SUBMITTED_MESSAGE: &str = "Claim submitted successfully";
pub const REGISTRATION_MESSAGE: &str = "Registration successful";
