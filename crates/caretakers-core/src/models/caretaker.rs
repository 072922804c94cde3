//! Caretaker models.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{Availability, EntityId, Gender, RequiredFields, ValidationError};
use crate::entity::{Entity, DATE_FORMAT};

/// Rating given to every new caretaker.
pub const DEFAULT_RATING: f64 = 5.0;

/// Stars shown for a rating.
pub const MAX_STARS: u8 = 5;

/// A caretaker profile.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Caretaker {
    pub id: EntityId,
    pub name: String,
    pub gender: Gender,
    pub contact: String,
    /// Years of experience
    pub experience: u32,
    pub availability: Availability,
    /// Set to [`DEFAULT_RATING`] at creation, never changed afterwards
    pub rating: f64,
    /// Kept as entered; not derived from patient records
    pub assigned_patients: u32,
    pub specialization: String,
    /// Set at creation, never changed
    pub join_date: NaiveDate,
}

/// Form-side copy of a caretaker.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct CaretakerDraft {
    pub name: String,
    pub gender: Gender,
    pub contact: String,
    pub experience: Option<u32>,
    pub availability: Availability,
    pub specialization: String,
}

impl Caretaker {
    /// Filled stars out of [`MAX_STARS`]; partial stars round down.
    pub fn star_rating(&self) -> u8 {
        if !self.rating.is_finite() || self.rating <= 0.0 {
            return 0;
        }
        (self.rating.floor() as u8).min(MAX_STARS)
    }

    /// Rating with one decimal, e.g. "4.8".
    pub fn rating_display(&self) -> String {
        format!("{:.1}", self.rating)
    }

    pub fn is_available(&self) -> bool {
        self.availability == Availability::Available
    }
}

impl Entity for Caretaker {
    type Draft = CaretakerDraft;

    const KIND: &'static str = "Caretaker";

    fn id(&self) -> EntityId {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn validate(draft: &CaretakerDraft) -> Result<(), ValidationError> {
        RequiredFields::new()
            .text("name", &draft.name)
            .text("contact", &draft.contact)
            .value("experience", &draft.experience)
            .finish()
    }

    fn create(id: EntityId, draft: CaretakerDraft, today: NaiveDate) -> Self {
        Self {
            id,
            name: draft.name,
            gender: draft.gender,
            contact: draft.contact,
            experience: draft.experience.unwrap_or_default(),
            availability: draft.availability,
            rating: DEFAULT_RATING,
            assigned_patients: 0,
            specialization: draft.specialization,
            join_date: today,
        }
    }

    fn to_draft(&self) -> CaretakerDraft {
        CaretakerDraft {
            name: self.name.clone(),
            gender: self.gender,
            contact: self.contact.clone(),
            experience: Some(self.experience),
            availability: self.availability,
            specialization: self.specialization.clone(),
        }
    }

    fn apply(&self, draft: CaretakerDraft) -> Self {
        Self {
            name: draft.name,
            gender: draft.gender,
            contact: draft.contact,
            experience: draft.experience.unwrap_or(self.experience),
            availability: draft.availability,
            specialization: draft.specialization,
            ..self.clone()
        }
    }

    fn pin_immutable(&mut self, stored: &Self) {
        self.id = stored.id;
        self.rating = stored.rating;
        self.join_date = stored.join_date;
    }

    fn headers() -> &'static [&'static str] {
        &[
            "Caretaker",
            "Experience",
            "Specialization",
            "Rating",
            "Availability",
            "Assigned Patients",
        ]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.name.clone(),
            format!("{} years", self.experience),
            self.specialization.clone(),
            self.rating_display(),
            self.availability.to_string(),
            self.assigned_patients.to_string(),
        ]
    }

    fn details(&self) -> Vec<(&'static str, String)> {
        vec![
            ("Name", self.name.clone()),
            ("Gender", self.gender.to_string()),
            ("Experience", format!("{} years", self.experience)),
            ("Specialization", self.specialization.clone()),
            ("Contact", self.contact.clone()),
            ("Rating", self.rating_display()),
            ("Availability", self.availability.to_string()),
            ("Assigned Patients", self.assigned_patients.to_string()),
            ("Join Date", self.join_date.format(DATE_FORMAT).to_string()),
        ]
    }
}
