//! Patient models.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{EntityId, PatientStatus, RequiredFields, ValidationError};
use crate::entity::{Entity, DATE_FORMAT};

/// A patient under care.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Patient {
    pub id: EntityId,
    pub name: String,
    pub age: u32,
    /// Free-text medical condition
    pub illness: String,
    pub address: String,
    pub contact: String,
    pub status: PatientStatus,
    /// Caretaker display name. Not linked to any caretaker id.
    pub caretaker: Option<String>,
    /// Set at creation, never changed
    pub admission_date: NaiveDate,
}

/// Form-side copy of a patient.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct PatientDraft {
    pub name: String,
    pub age: Option<u32>,
    pub illness: String,
    pub address: String,
    pub contact: String,
    pub status: PatientStatus,
    pub caretaker: Option<String>,
}

impl Patient {
    /// Caretaker name for the table, "Unassigned" when none is set.
    pub fn caretaker_display(&self) -> &str {
        match self.assigned_caretaker() {
            Some(name) => name,
            None => "Unassigned",
        }
    }

    /// Caretaker name, ignoring a blank entry.
    pub fn assigned_caretaker(&self) -> Option<&str> {
        self.caretaker
            .as_deref()
            .filter(|name| !name.trim().is_empty())
    }

    pub fn is_assigned(&self) -> bool {
        self.assigned_caretaker().is_some()
    }
}

impl Entity for Patient {
    type Draft = PatientDraft;

    const KIND: &'static str = "Patient";

    fn id(&self) -> EntityId {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn validate(draft: &PatientDraft) -> Result<(), ValidationError> {
        RequiredFields::new()
            .text("name", &draft.name)
            .value("age", &draft.age)
            .text("illness", &draft.illness)
            .finish()
    }

    fn create(id: EntityId, draft: PatientDraft, today: NaiveDate) -> Self {
        Self {
            id,
            name: draft.name,
            age: draft.age.unwrap_or_default(),
            illness: draft.illness,
            address: draft.address,
            contact: draft.contact,
            status: draft.status,
            caretaker: draft.caretaker,
            admission_date: today,
        }
    }

    fn to_draft(&self) -> PatientDraft {
        PatientDraft {
            name: self.name.clone(),
            age: Some(self.age),
            illness: self.illness.clone(),
            address: self.address.clone(),
            contact: self.contact.clone(),
            status: self.status,
            caretaker: self.caretaker.clone(),
        }
    }

    fn apply(&self, draft: PatientDraft) -> Self {
        Self {
            id: self.id,
            name: draft.name,
            age: draft.age.unwrap_or(self.age),
            illness: draft.illness,
            address: draft.address,
            contact: draft.contact,
            status: draft.status,
            caretaker: draft.caretaker,
            admission_date: self.admission_date,
        }
    }

    fn pin_immutable(&mut self, stored: &Self) {
        self.id = stored.id;
        self.admission_date = stored.admission_date;
    }

    fn headers() -> &'static [&'static str] {
        &["Patient", "Age", "Condition", "Status", "Caretaker", "Contact"]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.name.clone(),
            self.age.to_string(),
            self.illness.clone(),
            self.status.to_string(),
            self.caretaker_display().to_string(),
            self.contact.clone(),
        ]
    }

    fn details(&self) -> Vec<(&'static str, String)> {
        let caretaker = self
            .assigned_caretaker()
            .unwrap_or("Not assigned")
            .to_string();
        vec![
            ("Name", self.name.clone()),
            ("Age", format!("{} years", self.age)),
            ("Medical Condition", self.illness.clone()),
            ("Address", self.address.clone()),
            ("Contact", self.contact.clone()),
            ("Status", self.status.to_string()),
            ("Assigned Caretaker", caretaker),
            (
                "Admission Date",
                self.admission_date.format(DATE_FORMAT).to_string(),
            ),
        ]
    }
}
