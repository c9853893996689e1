use healthassist_types::TextError;

/// Errors returned by the portal services.
///
/// Every variant is terminal for the request that produced it; nothing is retried.
#[derive(Debug, thiserror::Error)]
pub enum PortalError {
    /// Missing or malformed required input.
    #[error("{0}")]
    Validation(String),
    /// A referenced clinic, topic, claim, or family record does not exist.
    #[error("{0}")]
    NotFound(String),
    /// Bad credentials.
    #[error("{0}")]
    Auth(String),
    /// In-memory store lock was poisoned by a panicking writer.
    #[error("{0} store lock poisoned")]
    LockPoisoned(&'static str),
    #[error("invalid text: {0}")]
    Text(#[from] TextError),
    #[error("invalid configuration: {0}")]
    Config(String),
}

pub type PortalResult<T> = std::result::Result<T, PortalError>;
