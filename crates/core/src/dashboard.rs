//! Family dashboard: members, medication reminders, appointments and emergency numbers.
//!
//! All three collections share one in-memory store. Ids are sequential per collection and
//! start after the demo records when the store is seeded.

use std::sync::{Arc, Mutex, MutexGuard};

use api_shared::wire::{
    AddAppointmentReq, AddMedicationReq, AddMemberReq, Appointment, AppointmentStatus,
    EmergencyService, FamilyMember, Medication,
};

use crate::constants::DEFAULT_HEALTH_STATUS;
use crate::validation::{require_all, validate_date, validate_time};
use crate::{PortalError, PortalResult};

#[derive(Debug, Default)]
struct DashboardData {
    members: Vec<FamilyMember>,
    medications: Vec<Medication>,
    appointments: Vec<Appointment>,
}

fn next_id(len: usize) -> String {
    (len + 1).to_string()
}

fn member(id: &str, name: &str, age: u32, relationship: &str) -> FamilyMember {
    FamilyMember {
        id: id.into(),
        name: name.into(),
        age,
        relationship: relationship.into(),
        health_status: DEFAULT_HEALTH_STATUS.into(),
    }
}

fn medication(
    id: &str,
    name: &str,
    dosage: &str,
    frequency: &str,
    time: &str,
    for_member: &str,
    taken: bool,
) -> Medication {
    Medication {
        id: id.into(),
        name: name.into(),
        dosage: dosage.into(),
        frequency: frequency.into(),
        time: time.into(),
        for_member: for_member.into(),
        taken,
    }
}

fn appointment(
    id: &str,
    title: &str,
    date: &str,
    time: &str,
    location: &str,
    for_member: &str,
    status: AppointmentStatus,
) -> Appointment {
    Appointment {
        id: id.into(),
        title: title.into(),
        date: date.into(),
        time: time.into(),
        location: location.into(),
        for_member: for_member.into(),
        status,
    }
}

impl DashboardData {
    fn demo() -> Self {
        use AppointmentStatus::{Completed, Upcoming};

        Self {
            members: vec![
                member("1", "John Smith", 45, "Self"),
                member("2", "Mary Smith", 42, "Spouse"),
                member("3", "David Smith", 15, "Child"),
                member("4", "Sarah Smith", 12, "Child"),
            ],
            medications: vec![
                medication("1", "Paracetamol", "500mg", "Every 6 hours", "08:00", "John Smith", false),
                medication("2", "Vitamin C", "1000mg", "Once daily", "09:00", "Mary Smith", true),
                medication("3", "Antibiotic", "250mg", "Twice daily", "20:00", "David Smith", false),
            ],
            appointments: vec![
                appointment(
                    "1",
                    "General Checkup",
                    "2023-05-20",
                    "10:30",
                    "Community Clinic, Soweto",
                    "John Smith",
                    Upcoming,
                ),
                appointment(
                    "2",
                    "Vaccination",
                    "2023-05-25",
                    "14:15",
                    "Public Health Center, Johannesburg",
                    "Sarah Smith",
                    Upcoming,
                ),
                appointment(
                    "3",
                    "Dental Checkup",
                    "2023-05-15",
                    "09:00",
                    "Dental Clinic, Pretoria",
                    "Mary Smith",
                    Completed,
                ),
            ],
        }
    }
}

/// Emergency numbers shown on the dashboard.
pub fn emergency_services() -> Vec<EmergencyService> {
    vec![
        EmergencyService {
            name: "Police (SAPS)".into(),
            number: "10111".into(),
        },
        EmergencyService {
            name: "Ambulance".into(),
            number: "10177".into(),
        },
    ]
}

#[derive(Clone, Debug)]
pub struct DashboardService {
    data: Arc<Mutex<DashboardData>>,
}

impl DashboardService {
    pub fn empty() -> Self {
        Self {
            data: Arc::new(Mutex::new(DashboardData::default())),
        }
    }

    /// Starts with the demo family, their medications and appointments.
    pub fn seeded() -> Self {
        Self {
            data: Arc::new(Mutex::new(DashboardData::demo())),
        }
    }

    fn lock(&self) -> PortalResult<MutexGuard<'_, DashboardData>> {
        self.data
            .lock()
            .map_err(|_| PortalError::LockPoisoned("dashboard"))
    }

    // ------------------------------------------------------------------------
    // Family members
    // ------------------------------------------------------------------------

    pub fn list_members(&self) -> PortalResult<Vec<FamilyMember>> {
        Ok(self.lock()?.members.clone())
    }

    pub fn get_member(&self, id: &str) -> PortalResult<FamilyMember> {
        self.lock()?
            .members
            .iter()
            .find(|m| m.id == id)
            .cloned()
            .ok_or_else(|| PortalError::NotFound("Family member not found".into()))
    }

    /// Add a family member. New members start in good health.
    pub fn add_member(&self, req: AddMemberReq) -> PortalResult<FamilyMember> {
        let [name, relationship] = require_all(
            [req.name.as_str(), req.relationship.as_str()],
            "Name and relationship are required",
        )?;

        let mut data = self.lock()?;
        let added = FamilyMember {
            id: next_id(data.members.len()),
            name: name.into_inner(),
            age: req.age,
            relationship: relationship.into_inner(),
            health_status: DEFAULT_HEALTH_STATUS.into(),
        };
        data.members.push(added.clone());
        tracing::info!(member_id = %added.id, "family member added");
        Ok(added)
    }

    // ------------------------------------------------------------------------
    // Medications
    // ------------------------------------------------------------------------

    pub fn list_medications(&self) -> PortalResult<Vec<Medication>> {
        Ok(self.lock()?.medications.clone())
    }

    /// Medications not yet marked as taken.
    pub fn pending_medications(&self) -> PortalResult<Vec<Medication>> {
        Ok(self
            .lock()?
            .medications
            .iter()
            .filter(|m| !m.taken)
            .cloned()
            .collect())
    }

    /// Add a medication reminder. `time` must be `HH:MM`.
    pub fn add_medication(&self, req: AddMedicationReq) -> PortalResult<Medication> {
        let [name, dosage, frequency, time, for_member] = require_all(
            [
                req.name.as_str(),
                req.dosage.as_str(),
                req.frequency.as_str(),
                req.time.as_str(),
                req.for_member.as_str(),
            ],
            "All fields are required",
        )?;
        validate_time(time.as_str())?;

        let mut data = self.lock()?;
        let added = Medication {
            id: next_id(data.medications.len()),
            name: name.into_inner(),
            dosage: dosage.into_inner(),
            frequency: frequency.into_inner(),
            time: time.into_inner(),
            for_member: for_member.into_inner(),
            taken: false,
        };
        data.medications.push(added.clone());
        tracing::info!(medication_id = %added.id, "medication reminder added");
        Ok(added)
    }

    /// Mark a medication as taken. Marking it again changes nothing.
    pub fn mark_taken(&self, id: &str) -> PortalResult<Medication> {
        let mut data = self.lock()?;
        let medication = data
            .medications
            .iter_mut()
            .find(|m| m.id == id)
            .ok_or_else(|| PortalError::NotFound("Medication not found".into()))?;
        medication.taken = true;
        Ok(medication.clone())
    }

    // ------------------------------------------------------------------------
    // Appointments
    // ------------------------------------------------------------------------

    pub fn list_appointments(&self) -> PortalResult<Vec<Appointment>> {
        Ok(self.lock()?.appointments.clone())
    }

    pub fn upcoming_appointments(&self) -> PortalResult<Vec<Appointment>> {
        Ok(self
            .lock()?
            .appointments
            .iter()
            .filter(|a| a.status == AppointmentStatus::Upcoming)
            .cloned()
            .collect())
    }

    /// Book an appointment. `date` must be `YYYY-MM-DD` and `time` `HH:MM`.
    pub fn add_appointment(&self, req: AddAppointmentReq) -> PortalResult<Appointment> {
        let [title, date, time, location, for_member] = require_all(
            [
                req.title.as_str(),
                req.date.as_str(),
                req.time.as_str(),
                req.location.as_str(),
                req.for_member.as_str(),
            ],
            "All fields are required",
        )?;
        validate_date(date.as_str())?;
        validate_time(time.as_str())?;

        let mut data = self.lock()?;
        let added = Appointment {
            id: next_id(data.appointments.len()),
            title: title.into_inner(),
            date: date.into_inner(),
            time: time.into_inner(),
            location: location.into_inner(),
            for_member: for_member.into_inner(),
            status: AppointmentStatus::Upcoming,
        };
        data.appointments.push(added.clone());
        tracing::info!(appointment_id = %added.id, "appointment added");
        Ok(added)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn checkup() -> AddAppointmentReq {
        AddAppointmentReq {
            title: "Eye test".into(),
            date: "2024-02-29".into(),
            time: "11:45".into(),
            location: "Alexandra Health Center".into(),
            for_member: "Sarah Smith".into(),
        }
    }

    #[test]
    fn seeded_dashboard_has_demo_records() {
        let dashboard = DashboardService::seeded();
        assert_eq!(dashboard.list_members().unwrap().len(), 4);
        assert_eq!(dashboard.list_medications().unwrap().len(), 3);
        assert_eq!(dashboard.pending_medications().unwrap().len(), 2);
        assert_eq!(dashboard.upcoming_appointments().unwrap().len(), 2);
    }

    #[test]
    fn empty_dashboard_starts_ids_at_one() {
        let dashboard = DashboardService::empty();
        assert!(dashboard.list_members().unwrap().is_empty());
        let added = dashboard
            .add_member(AddMemberReq {
                name: "Lerato".into(),
                age: 3,
                relationship: "Child".into(),
            })
            .unwrap();
        assert_eq!(added.id, "1");
    }

    #[test]
    fn added_member_is_in_good_health() {
        let dashboard = DashboardService::seeded();
        let added = dashboard
            .add_member(AddMemberReq {
                name: " Grace Smith ".into(),
                age: 70,
                relationship: "Grandmother".into(),
            })
            .unwrap();
        assert_eq!(added.id, "5");
        assert_eq!(added.name, "Grace Smith");
        assert_eq!(added.health_status, DEFAULT_HEALTH_STATUS);
        assert_eq!(dashboard.get_member("5").unwrap(), added);
    }

    #[test]
    fn member_requires_name_and_relationship() {
        let err = DashboardService::seeded()
            .add_member(AddMemberReq {
                name: "Grace".into(),
                age: 70,
                relationship: String::new(),
            })
            .unwrap_err();
        assert!(matches!(err, PortalError::Validation(_)));
    }

    #[test]
    fn unknown_member_is_not_found() {
        assert!(matches!(
            DashboardService::seeded().get_member("42"),
            Err(PortalError::NotFound(_))
        ));
    }

    #[test]
    fn mark_taken_is_idempotent() {
        let dashboard = DashboardService::seeded();
        let first = dashboard.mark_taken("1").unwrap();
        let second = dashboard.mark_taken("1").unwrap();
        assert!(first.taken);
        assert_eq!(first, second);
        assert_eq!(dashboard.pending_medications().unwrap().len(), 1);
        assert!(matches!(
            dashboard.mark_taken("99"),
            Err(PortalError::NotFound(_))
        ));
    }

    #[test]
    fn new_medication_is_pending() {
        let dashboard = DashboardService::seeded();
        let added = dashboard
            .add_medication(AddMedicationReq {
                name: "Metformin".into(),
                dosage: "850mg".into(),
                frequency: "Twice daily".into(),
                time: "07:30".into(),
                for_member: "John Smith".into(),
            })
            .unwrap();
        assert!(!added.taken);
        assert!(dashboard.pending_medications().unwrap().contains(&added));
    }

    #[test]
    fn medication_time_is_checked() {
        let err = DashboardService::seeded()
            .add_medication(AddMedicationReq {
                name: "Metformin".into(),
                dosage: "850mg".into(),
                frequency: "Twice daily".into(),
                time: "half past seven".into(),
                for_member: "John Smith".into(),
            })
            .unwrap_err();
        assert!(matches!(err, PortalError::Validation(_)));
    }

    #[test]
    fn new_appointment_is_upcoming() {
        let dashboard = DashboardService::seeded();
        let added = dashboard.add_appointment(checkup()).unwrap();
        assert_eq!(added.id, "4");
        assert_eq!(added.status, AppointmentStatus::Upcoming);
        assert_eq!(dashboard.upcoming_appointments().unwrap().len(), 3);
    }

    #[test]
    fn appointment_date_and_time_are_checked() {
        let dashboard = DashboardService::seeded();

        let mut bad_date = checkup();
        bad_date.date = "2023-02-30".into();
        let mut bad_time = checkup();
        bad_time.time = "9am".into();

        for req in [bad_date, bad_time] {
            assert!(matches!(
                dashboard.add_appointment(req),
                Err(PortalError::Validation(_))
            ));
        }
        assert_eq!(dashboard.list_appointments().unwrap().len(), 3);
    }

    #[test]
    fn emergency_numbers() {
        let numbers: Vec<String> = emergency_services().into_iter().map(|s| s.number).collect();
        assert_eq!(numbers, vec!["10111", "10177"]);
    }
}
