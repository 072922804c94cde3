//! CareTakers Core Library
//!
//! In-memory patient and caretaker management behind the care-management app.
//!
//! # Architecture
//!
//! ```text
//!   Presentation layer (add / edit / view / delete / submit / cancel)
//!                              │
//!              ┌───────────────┴───────────────┐
//!              ▼                               ▼
//!        PatientScreen                   CaretakerScreen
//!     ┌──────────────────┐            ┌──────────────────┐
//!     │ EntityFormCtrl   │            │ EntityFormCtrl   │
//!     │   idle / new /   │            │   idle / new /   │
//!     │   editing / view │            │   editing / view │
//!     │        │ submit  │            │        │ submit  │
//!     │        ▼         │            │        ▼         │
//!     │ EntityStore      │            │ EntityStore      │
//!     │   Vec<Patient>   │            │   Vec<Caretaker> │
//!     └────────┬─────────┘            └────────┬─────────┘
//!              └──────────► Notifier ◄─────────┘
//!                     (toasts, log, FFI queue)
//! ```
//!
//! Screens never share state. A patient's caretaker is a display name only;
//! nothing keeps it in step with the caretaker collection.
//!
//! # Modules
//!
//! - [`models`]: Patient, Caretaker, their drafts and enumerations
//! - [`entity`]: The trait tying a record kind to the store and form
//! - [`store`]: Ordered in-memory collection with monotonic ids
//! - [`form`]: Draft state machine with presence validation
//! - [`screen`]: Store + form + notifier for one record kind
//! - [`notify`]: Notification sinks
//! - [`config`]: Start-up configuration

pub mod config;
pub mod entity;
pub mod form;
pub mod models;
pub mod notify;
pub mod screen;
pub mod store;

// Re-export commonly used types
pub use config::{CareConfig, ConfigError};
pub use entity::Entity;
pub use form::{Commit, EntityFormController, FormError, FormState};
pub use models::{
    Availability, BadgeVariant, Caretaker, CaretakerDraft, EntityId, Gender, Patient,
    PatientDraft, PatientStatus, ValidationError,
};
pub use notify::{LogNotifier, Notification, NotificationLevel, Notifier, QueueNotifier};
pub use screen::{CaretakerScreen, ManagementScreen, PatientScreen, Table, TableRow};
pub use store::{EntityStore, StoreError, StoreResult};

// UniFFI setup - using proc macros
uniffi::setup_scaffolding!();

use std::sync::{Arc, Mutex};

use crate::entity::DATE_FORMAT;

// =========================================================================
// FFI Error Type
// =========================================================================

#[derive(Debug, thiserror::Error, uniffi::Error)]
pub enum CareError {
    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid state: {0}")]
    InvalidState(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Lock poisoned: {0}")]
    Lock(String),
}

impl From<FormError> for CareError {
    fn from(e: FormError) -> Self {
        match e {
            FormError::Validation(v) => {
                CareError::Validation(format!("{} ({})", v, v.missing.join(", ")))
            }
            FormError::NotFound { .. } => CareError::NotFound(e.to_string()),
            FormError::InvalidTransition { .. } | FormError::Store(_) => {
                CareError::InvalidState(e.to_string())
            }
        }
    }
}

impl From<ConfigError> for CareError {
    fn from(e: ConfigError) -> Self {
        CareError::Config(e.to_string())
    }
}

impl<T> From<std::sync::PoisonError<T>> for CareError {
    fn from(e: std::sync::PoisonError<T>) -> Self {
        CareError::Lock(e.to_string())
    }
}

// =========================================================================
// Factory Functions (exported to FFI)
// =========================================================================

/// Create a manager from an optional JSON config; `None` uses the defaults.
#[uniffi::export]
pub fn open_care_manager(config_json: Option<String>) -> Result<Arc<CareManager>, CareError> {
    let config = match config_json {
        Some(json) => CareConfig::from_json(&json)?,
        None => CareConfig::default(),
    };
    Ok(Arc::new(CareManager::new(&config)))
}

/// Create a manager from a JSON config file.
#[uniffi::export]
pub fn open_care_manager_from_path(path: String) -> Result<Arc<CareManager>, CareError> {
    let config = CareConfig::from_path(&path)?;
    Ok(Arc::new(CareManager::new(&config)))
}

// =========================================================================
// Main API Object
// =========================================================================

/// Both management screens behind locks, for FFI hosts.
#[derive(uniffi::Object)]
pub struct CareManager {
    patients: Mutex<PatientScreen<QueueNotifier>>,
    caretakers: Mutex<CaretakerScreen<QueueNotifier>>,
}

impl CareManager {
    pub fn new(config: &CareConfig) -> Self {
        Self {
            patients: Mutex::new(PatientScreen::<QueueNotifier>::from_config(
                config,
                QueueNotifier::new(),
            )),
            caretakers: Mutex::new(CaretakerScreen::<QueueNotifier>::from_config(
                config,
                QueueNotifier::new(),
            )),
        }
    }
}

#[uniffi::export]
impl CareManager {
    // =========================================================================
    // Patient Operations
    // =========================================================================

    /// All patients in insertion order.
    pub fn list_patients(&self) -> Result<Vec<FfiPatient>, CareError> {
        let screen = self.patients.lock()?;
        Ok(screen.list().iter().map(FfiPatient::from).collect())
    }

    /// Patients whose name contains the query.
    pub fn search_patients(&self, query: String) -> Result<Vec<FfiPatient>, CareError> {
        let screen = self.patients.lock()?;
        Ok(screen.search(&query).into_iter().map(FfiPatient::from).collect())
    }

    /// Register a new patient.
    pub fn add_patient(&self, draft: FfiPatientDraft) -> Result<FfiPatient, CareError> {
        let mut screen = self.patients.lock()?;
        let patient = add_record(&mut *screen, draft.into())?;
        Ok(FfiPatient::from(&patient))
    }

    /// Replace a patient's editable fields.
    pub fn update_patient(
        &self,
        id: u64,
        draft: FfiPatientDraft,
    ) -> Result<FfiPatient, CareError> {
        let mut screen = self.patients.lock()?;
        let patient = update_record(&mut *screen, EntityId(id), draft.into())?;
        Ok(FfiPatient::from(&patient))
    }

    /// Delete a patient. Returns false if no such patient exists.
    pub fn remove_patient(&self, id: u64) -> Result<bool, CareError> {
        let mut screen = self.patients.lock()?;
        Ok(screen.delete(EntityId(id)))
    }

    // =========================================================================
    // Caretaker Operations
    // =========================================================================

    /// All caretakers in insertion order.
    pub fn list_caretakers(&self) -> Result<Vec<FfiCaretaker>, CareError> {
        let screen = self.caretakers.lock()?;
        Ok(screen.list().iter().map(FfiCaretaker::from).collect())
    }

    /// Caretakers whose name contains the query.
    pub fn search_caretakers(&self, query: String) -> Result<Vec<FfiCaretaker>, CareError> {
        let screen = self.caretakers.lock()?;
        Ok(screen
            .search(&query)
            .into_iter()
            .map(FfiCaretaker::from)
            .collect())
    }

    /// Register a new caretaker.
    pub fn add_caretaker(&self, draft: FfiCaretakerDraft) -> Result<FfiCaretaker, CareError> {
        let mut screen = self.caretakers.lock()?;
        let caretaker = add_record(&mut *screen, draft.into())?;
        Ok(FfiCaretaker::from(&caretaker))
    }

    /// Replace a caretaker's editable fields.
    pub fn update_caretaker(
        &self,
        id: u64,
        draft: FfiCaretakerDraft,
    ) -> Result<FfiCaretaker, CareError> {
        let mut screen = self.caretakers.lock()?;
        let caretaker = update_record(&mut *screen, EntityId(id), draft.into())?;
        Ok(FfiCaretaker::from(&caretaker))
    }

    /// Delete a caretaker. Returns false if no such caretaker exists.
    pub fn remove_caretaker(&self, id: u64) -> Result<bool, CareError> {
        let mut screen = self.caretakers.lock()?;
        Ok(screen.delete(EntityId(id)))
    }

    // =========================================================================
    // Notifications
    // =========================================================================

    /// Take all notifications raised since the last call, patients first.
    pub fn drain_notifications(&self) -> Result<Vec<FfiNotification>, CareError> {
        let mut drained = self.patients.lock()?.notifier_mut().drain();
        drained.extend(self.caretakers.lock()?.notifier_mut().drain());
        Ok(drained.into_iter().map(FfiNotification::from).collect())
    }
}

/// Run a full add cycle on `screen`, leaving the form idle whatever happens.
fn add_record<E: Entity>(
    screen: &mut ManagementScreen<E, QueueNotifier>,
    draft: E::Draft,
) -> Result<E, CareError> {
    screen.add()?;
    let result = screen.set_draft(draft).and_then(|_| screen.submit());
    match result {
        Ok(Commit::Added(record)) => Ok(record),
        Ok(other) => Err(CareError::InvalidState(format!(
            "unexpected commit {:?}",
            other
        ))),
        Err(e) => {
            screen.cancel()?;
            Err(e.into())
        }
    }
}

/// Run a full edit cycle on `screen`, leaving the form idle whatever happens.
///
/// The screen stays locked from `edit` to `submit`, so the record cannot
/// disappear in between; an absent id fails at `edit` with `NotFound`.
fn update_record<E: Entity>(
    screen: &mut ManagementScreen<E, QueueNotifier>,
    id: EntityId,
    draft: E::Draft,
) -> Result<E, CareError> {
    screen.edit(id)?;
    let result = screen.set_draft(draft).and_then(|_| screen.submit());
    match result {
        Ok(Commit::Updated(record)) => Ok(record),
        Ok(other) => Err(CareError::InvalidState(format!(
            "unexpected commit {:?}",
            other
        ))),
        Err(e) => {
            screen.cancel()?;
            Err(e.into())
        }
    }
}

// =========================================================================
// FFI Types
// =========================================================================

/// FFI-safe patient.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiPatient {
    pub id: u64,
    pub name: String,
    pub age: u32,
    pub illness: String,
    pub address: String,
    pub contact: String,
    pub status: PatientStatus,
    pub status_badge: BadgeVariant,
    pub caretaker: Option<String>,
    pub admission_date: String,
}

impl From<&Patient> for FfiPatient {
    fn from(patient: &Patient) -> Self {
        Self {
            id: patient.id.get(),
            name: patient.name.clone(),
            age: patient.age,
            illness: patient.illness.clone(),
            address: patient.address.clone(),
            contact: patient.contact.clone(),
            status: patient.status,
            status_badge: patient.status.badge(),
            caretaker: patient.caretaker.clone(),
            admission_date: patient.admission_date.format(DATE_FORMAT).to_string(),
        }
    }
}

/// FFI-safe patient form input.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiPatientDraft {
    pub name: String,
    pub age: Option<u32>,
    pub illness: String,
    pub address: String,
    pub contact: String,
    pub status: PatientStatus,
    pub caretaker: Option<String>,
}

impl From<FfiPatientDraft> for PatientDraft {
    fn from(draft: FfiPatientDraft) -> Self {
        PatientDraft {
            name: draft.name,
            age: draft.age,
            illness: draft.illness,
            address: draft.address,
            contact: draft.contact,
            status: draft.status,
            caretaker: draft.caretaker,
        }
    }
}

/// FFI-safe caretaker.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiCaretaker {
    pub id: u64,
    pub name: String,
    pub gender: Gender,
    pub contact: String,
    pub experience: u32,
    pub availability: Availability,
    pub availability_badge: BadgeVariant,
    pub rating: f64,
    pub stars: u8,
    pub assigned_patients: u32,
    pub specialization: String,
    pub join_date: String,
}

impl From<&Caretaker> for FfiCaretaker {
    fn from(caretaker: &Caretaker) -> Self {
        Self {
            id: caretaker.id.get(),
            name: caretaker.name.clone(),
            gender: caretaker.gender,
            contact: caretaker.contact.clone(),
            experience: caretaker.experience,
            availability: caretaker.availability,
            availability_badge: caretaker.availability.badge(),
            rating: caretaker.rating,
            stars: caretaker.star_rating(),
            assigned_patients: caretaker.assigned_patients,
            specialization: caretaker.specialization.clone(),
            join_date: caretaker.join_date.format(DATE_FORMAT).to_string(),
        }
    }
}

/// FFI-safe caretaker form input.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiCaretakerDraft {
    pub name: String,
    pub gender: Gender,
    pub contact: String,
    pub experience: Option<u32>,
    pub availability: Availability,
    pub specialization: String,
}

impl From<FfiCaretakerDraft> for CaretakerDraft {
    fn from(draft: FfiCaretakerDraft) -> Self {
        CaretakerDraft {
            name: draft.name,
            gender: draft.gender,
            contact: draft.contact,
            experience: draft.experience,
            availability: draft.availability,
            specialization: draft.specialization,
        }
    }
}

/// FFI-safe notification.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiNotification {
    pub level: NotificationLevel,
    pub message: String,
}

impl From<Notification> for FfiNotification {
    fn from(notification: Notification) -> Self {
        Self {
            level: notification.level,
            message: notification.message,
        }
    }
}
