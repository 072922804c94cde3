//! Records the management screens start with when seeding is enabled.

use chrono::NaiveDate;

use super::{Availability, Caretaker, EntityId, Gender, Patient, PatientStatus};

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

pub fn sample_patients() -> Vec<Patient> {
    vec![
        Patient {
            id: EntityId(1),
            name: "Sarah Johnson".into(),
            age: 67,
            illness: "Post-surgery recovery".into(),
            address: "123 Oak Street, Springfield".into(),
            contact: "+1 (555) 123-4567".into(),
            status: PatientStatus::Stable,
            caretaker: Some("Maria Garcia".into()),
            admission_date: date(2024, 1, 15),
        },
        Patient {
            id: EntityId(2),
            name: "Robert Chen".into(),
            age: 72,
            illness: "Chronic heart condition".into(),
            address: "456 Pine Avenue, Springfield".into(),
            contact: "+1 (555) 234-5678".into(),
            status: PatientStatus::Attention,
            caretaker: Some("David Smith".into()),
            admission_date: date(2024, 2, 3),
        },
        Patient {
            id: EntityId(3),
            name: "Emma Davis".into(),
            age: 58,
            illness: "Stroke rehabilitation".into(),
            address: "789 Maple Drive, Springfield".into(),
            contact: "+1 (555) 345-6789".into(),
            status: PatientStatus::Improving,
            caretaker: Some("Lisa Brown".into()),
            admission_date: date(2024, 2, 20),
        },
    ]
}

pub fn sample_caretakers() -> Vec<Caretaker> {
    vec![
        Caretaker {
            id: EntityId(1),
            name: "Maria Garcia".into(),
            gender: Gender::Female,
            contact: "+1 (555) 111-2222".into(),
            experience: 8,
            availability: Availability::Available,
            rating: 4.8,
            assigned_patients: 3,
            specialization: "Elderly Care".into(),
            join_date: date(2023, 6, 15),
        },
        Caretaker {
            id: EntityId(2),
            name: "David Smith".into(),
            gender: Gender::Male,
            contact: "+1 (555) 222-3333".into(),
            experience: 12,
            availability: Availability::Busy,
            rating: 4.9,
            assigned_patients: 4,
            specialization: "Post-Surgery Care".into(),
            join_date: date(2022, 3, 10),
        },
        Caretaker {
            id: EntityId(3),
            name: "Lisa Brown".into(),
            gender: Gender::Female,
            contact: "+1 (555) 333-4444".into(),
            experience: 6,
            availability: Availability::Available,
            rating: 4.7,
            assigned_patients: 2,
            specialization: "Rehabilitation".into(),
            join_date: date(2023, 11, 20),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_ids_unique() {
        let patients = sample_patients();
        let mut ids: Vec<_> = patients.iter().map(|p| p.id).collect();
        ids.dedup();
        assert_eq!(ids.len(), patients.len());
    }

    #[test]
    fn test_sample_caretakers_match_patient_assignments() {
        let caretakers = sample_caretakers();
        for patient in sample_patients() {
            let name = patient.caretaker.as_deref().unwrap();
            assert!(caretakers.iter().any(|c| c.name == name));
        }
    }
}
