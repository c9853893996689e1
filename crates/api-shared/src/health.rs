use crate::wire::HealthRes;

/// Simple health service used by the REST liveness endpoint
///
/// Provides a standardised way to report that the HealthAssist service is up.
#[derive(Clone, Default)]
pub struct HealthService;

impl HealthService {
    /// Static method to check health without creating an instance
    ///
    /// # Returns
    /// A `HealthRes` indicating the service is healthy.
    pub fn check_health() -> HealthRes {
        HealthRes {
            ok: true,
            message: "HealthAssist is alive".into(),
        }
    }
}
