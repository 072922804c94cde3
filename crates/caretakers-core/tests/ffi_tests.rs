//! Tests for the exported CareManager object.

use caretakers_core::{
    open_care_manager, Availability, CareError, FfiCaretakerDraft, FfiPatientDraft, Gender,
    NotificationLevel, PatientStatus,
};

fn patient_draft(name: &str) -> FfiPatientDraft {
    FfiPatientDraft {
        name: name.to_string(),
        age: Some(70),
        illness: "Pneumonia".to_string(),
        address: String::new(),
        contact: "+1 (555) 000-1111".to_string(),
        status: PatientStatus::Attention,
        caretaker: None,
    }
}

#[test]
fn test_default_manager_is_seeded() {
    let manager = open_care_manager(None).unwrap();
    assert_eq!(manager.list_patients().unwrap().len(), 3);
    assert_eq!(manager.list_caretakers().unwrap().len(), 3);
}

#[test]
fn test_add_update_remove_patient() {
    let manager = open_care_manager(Some(r#"{"seedSampleData": false}"#.into())).unwrap();

    let added = manager.add_patient(patient_draft("Ada")).unwrap();
    assert_eq!(added.id, 1);
    assert_eq!(added.admission_date.len(), 10);

    let mut edit = patient_draft("Ada");
    edit.status = PatientStatus::Improving;
    let updated = manager.update_patient(added.id, edit).unwrap();
    assert_eq!(updated.status, PatientStatus::Improving);
    assert_eq!(updated.admission_date, added.admission_date);

    assert!(manager.remove_patient(added.id).unwrap());
    assert!(!manager.remove_patient(added.id).unwrap());
    assert!(manager.list_patients().unwrap().is_empty());

    let notifications = manager.drain_notifications().unwrap();
    assert_eq!(notifications.len(), 3);
    assert!(notifications
        .iter()
        .all(|n| n.level == NotificationLevel::Success));
    assert!(manager.drain_notifications().unwrap().is_empty());
}

#[test]
fn test_invalid_add_leaves_manager_usable() {
    let manager = open_care_manager(Some(r#"{"seedSampleData": false}"#.into())).unwrap();

    let mut draft = patient_draft("");
    draft.age = None;
    let err = manager.add_patient(draft).unwrap_err();
    assert!(matches!(err, CareError::Validation(ref msg) if msg.contains("name, age")));

    // The form was reset, so the next add goes through.
    assert!(manager.add_patient(patient_draft("Ada")).is_ok());
    assert_eq!(manager.list_patients().unwrap().len(), 1);
}

#[test]
fn test_add_past_last_id_is_rejected() {
    let config = r#"{"seedSampleData": false, "firstId": 18446744073709551615}"#;
    let manager = open_care_manager(Some(config.into())).unwrap();

    let added = manager.add_patient(patient_draft("Ada")).unwrap();
    assert_eq!(added.id, u64::MAX);

    for _ in 0..2 {
        let err = manager.add_patient(patient_draft("Grace")).unwrap_err();
        assert!(matches!(err, CareError::InvalidState(ref msg) if msg.contains("ids left")));
    }
    assert_eq!(manager.list_patients().unwrap().len(), 1);
}

#[test]
fn test_update_unknown_caretaker() {
    let manager = open_care_manager(None).unwrap();
    let draft = FfiCaretakerDraft {
        name: "Ghost".into(),
        gender: Gender::Other,
        contact: "n/a".into(),
        experience: Some(1),
        availability: Availability::OffDuty,
        specialization: String::new(),
    };
    let err = manager.update_caretaker(99, draft).unwrap_err();
    assert!(matches!(err, CareError::NotFound(_)));
}

#[test]
fn test_caretaker_search_and_stars() {
    let manager = open_care_manager(None).unwrap();
    let hits = manager.search_caretakers("smith".into()).unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].stars, 4);
    assert_eq!(hits[0].availability, Availability::Busy);
}

#[test]
fn test_bad_config_json() {
    let err = open_care_manager(Some("not json".into())).err().unwrap();
    assert!(matches!(err, CareError::Config(_)));
}
