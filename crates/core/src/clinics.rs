//! Clinic reference data.

use std::sync::LazyLock;

use api_shared::wire::Clinic;

use crate::{PortalError, PortalResult};

fn clinic(
    id: u32,
    name: &str,
    address: &str,
    phone: &str,
    wait_time: &str,
    opening_hours: &str,
    services: [&str; 4],
) -> Clinic {
    Clinic {
        id,
        name: name.to_string(),
        address: address.to_string(),
        phone: phone.to_string(),
        wait_time: wait_time.to_string(),
        opening_hours: opening_hours.to_string(),
        services: services.iter().map(|s| s.to_string()).collect(),
    }
}

static CLINICS: LazyLock<Vec<Clinic>> = LazyLock::new(|| {
    vec![
        clinic(
            1,
            "Soweto Community Clinic",
            "123 Main Road, Soweto",
            "011 123 4567",
            "45 minutes",
            "8:00 - 17:00",
            ["General checkups", "Vaccinations", "TB screening", "HIV testing"],
        ),
        clinic(
            2,
            "Alexandra Health Center",
            "45 Health Street, Alexandra",
            "011 234 5678",
            "30 minutes",
            "7:30 - 16:30",
            [
                "General checkups",
                "Maternal care",
                "Child health",
                "Chronic medications",
            ],
        ),
        clinic(
            3,
            "Diepsloot Primary Healthcare",
            "78 Community Road, Diepsloot",
            "011 345 6789",
            "60 minutes",
            "8:00 - 16:00",
            [
                "General checkups",
                "Emergency care",
                "Family planning",
                "HIV/AIDS services",
            ],
        ),
        clinic(
            4,
            "Tembisa Health Facility",
            "12 Hospital Road, Tembisa",
            "011 456 7890",
            "40 minutes",
            "7:00 - 19:00",
            [
                "General checkups",
                "Chronic disease management",
                "Mental health",
                "Rehabilitation",
            ],
        ),
    ]
});

pub fn all_clinics() -> &'static [Clinic] {
    &CLINICS
}

/// Resolve a clinic id as sent by clients.
///
/// The id may arrive as a JSON number or a string; a leading run of digits is
/// parsed after trimming, so `"2"`, `" 2"` and `"2nd"` all name clinic 2.
///
/// # Errors
///
/// Returns [`PortalError::NotFound`] if the id does not parse or names no clinic.
pub fn find_clinic(raw_id: &str) -> PortalResult<&'static Clinic> {
    let not_found = || PortalError::NotFound("Clinic not found".into());

    let trimmed = raw_id.trim_start();
    let digits_end = trimmed
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(trimmed.len());
    let id: u32 = trimmed[..digits_end].parse().map_err(|_| not_found())?;

    CLINICS.iter().find(|c| c.id == id).ok_or_else(not_found)
}
