//! Core runtime configuration.
//!
//! Configuration is resolved once at process startup and then passed into the services. Request
//! handling never reads process-wide environment variables.

use crate::{PortalError, PortalResult};

/// Core configuration resolved at startup.
#[derive(Clone, Debug)]
pub struct CoreConfig {
    seed_demo_data: bool,
}

impl CoreConfig {
    pub fn new(seed_demo_data: bool) -> Self {
        Self { seed_demo_data }
    }

    /// Whether the in-memory stores start with the demo account, claim, and family records.
    pub fn seed_demo_data(&self) -> bool {
        self.seed_demo_data
    }
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self::new(true)
    }
}

/// Parse the demo-data seeding flag from an optional string value.
///
/// If `value` is `None` or empty/whitespace, seeding is enabled.
pub fn seed_demo_data_from_env_value(value: Option<String>) -> PortalResult<bool> {
    let value = value
        .map(|v| v.trim().to_ascii_lowercase())
        .filter(|v| !v.is_empty());

    match value.as_deref() {
        None | Some("true" | "1" | "yes" | "on") => Ok(true),
        Some("false" | "0" | "no" | "off") => Ok(false),
        Some(other) => Err(PortalError::Config(format!(
            "HEALTHASSIST_SEED_DEMO_DATA must be a boolean, got {other:?}"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeding_defaults_to_enabled() {
        assert!(seed_demo_data_from_env_value(None).unwrap());
        assert!(seed_demo_data_from_env_value(Some("  ".into())).unwrap());
    }

    #[test]
    fn seeding_parses_booleans() {
        assert!(!seed_demo_data_from_env_value(Some("FALSE".into())).unwrap());
        assert!(!seed_demo_data_from_env_value(Some("0".into())).unwrap());
        assert!(seed_demo_data_from_env_value(Some("yes".into())).unwrap());
    }

    #[test]
    fn seeding_rejects_garbage() {
        let err = seed_demo_data_from_env_value(Some("maybe".into())).unwrap_err();
        assert!(matches!(err, PortalError::Config(_)));
    }
}
