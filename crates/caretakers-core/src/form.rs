//! Draft lifecycle for one management screen.
//!
//! ```text
//!            start_new                 submit / cancel
//!   Idle ───────────────▶ DraftingNew ─────────────────▶ Idle
//!   Idle ───────────────▶ Editing(id) ─────────────────▶ Idle
//!            start_edit                submit / cancel
//!   Idle ───────────────▶ Viewing(id) ─────────────────▶ Idle
//!            start_view                close
//! ```
//!
//! A rejected submit leaves both the controller and the store untouched.

use std::fmt;

use chrono::NaiveDate;
use log::{info, warn};
use thiserror::Error;

use crate::entity::Entity;
use crate::models::{EntityId, ValidationError};
use crate::store::{EntityStore, StoreError};

/// Where the form currently is.
#[derive(Debug, Clone, PartialEq)]
pub enum FormState<D> {
    Idle,
    DraftingNew(D),
    Editing { id: EntityId, draft: D },
    Viewing(EntityId),
}

impl<D> FormState<D> {
    pub fn name(&self) -> &'static str {
        match self {
            FormState::Idle => "idle",
            FormState::DraftingNew(_) => "drafting-new",
            FormState::Editing { .. } => "editing",
            FormState::Viewing(_) => "viewing",
        }
    }
}

/// User action routed to the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormAction {
    New,
    Edit,
    View,
    Submit,
    Cancel,
    Close,
    EditDraft,
}

impl fmt::Display for FormAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FormAction::New => "add",
            FormAction::Edit => "edit",
            FormAction::View => "view",
            FormAction::Submit => "submit",
            FormAction::Cancel => "cancel",
            FormAction::Close => "close",
            FormAction::EditDraft => "change the draft",
        };
        f.write_str(name)
    }
}

/// Form errors.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FormError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Cannot {action} while {state}")]
    InvalidTransition {
        state: &'static str,
        action: FormAction,
    },

    #[error("{kind} {id} not found")]
    NotFound { kind: &'static str, id: EntityId },

    #[error(transparent)]
    Store(#[from] StoreError),
}

pub type FormResult<T> = Result<T, FormError>;

/// Outcome of a successful submit.
#[derive(Debug, Clone, PartialEq)]
pub enum Commit<E> {
    /// A new record was stored.
    Added(E),
    /// The edited record was replaced.
    Updated(E),
    /// The edited record was deleted while the form was open; nothing changed.
    Vanished(EntityId),
}

/// Moves drafts between idle, new, editing and viewing, and commits them
/// into an [`EntityStore`].
#[derive(Debug, Clone)]
pub struct EntityFormController<E: Entity> {
    state: FormState<E::Draft>,
}

impl<E: Entity> Default for EntityFormController<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Entity> EntityFormController<E> {
    pub fn new() -> Self {
        Self {
            state: FormState::Idle,
        }
    }

    pub fn state(&self) -> &FormState<E::Draft> {
        &self.state
    }

    pub fn is_idle(&self) -> bool {
        matches!(self.state, FormState::Idle)
    }

    /// Open an empty draft.
    pub fn start_new(&mut self) -> FormResult<()> {
        self.require_idle(FormAction::New)?;
        self.state = FormState::DraftingNew(E::Draft::default());
        Ok(())
    }

    /// Open a draft copied from the stored record `id`.
    pub fn start_edit(&mut self, store: &EntityStore<E>, id: EntityId) -> FormResult<()> {
        self.require_idle(FormAction::Edit)?;
        let record = store.get(id).ok_or(FormError::NotFound { kind: E::KIND, id })?;
        self.state = FormState::Editing {
            id,
            draft: record.to_draft(),
        };
        Ok(())
    }

    /// Show the stored record `id` read-only.
    pub fn start_view(&mut self, store: &EntityStore<E>, id: EntityId) -> FormResult<()> {
        self.require_idle(FormAction::View)?;
        if !store.contains(id) {
            return Err(FormError::NotFound { kind: E::KIND, id });
        }
        self.state = FormState::Viewing(id);
        Ok(())
    }

    pub fn draft(&self) -> Option<&E::Draft> {
        match &self.state {
            FormState::DraftingNew(draft) | FormState::Editing { draft, .. } => Some(draft),
            FormState::Idle | FormState::Viewing(_) => None,
        }
    }

    /// Mutable access to the open draft, for field bindings.
    pub fn draft_mut(&mut self) -> Option<&mut E::Draft> {
        match &mut self.state {
            FormState::DraftingNew(draft) | FormState::Editing { draft, .. } => Some(draft),
            FormState::Idle | FormState::Viewing(_) => None,
        }
    }

    /// Swap the whole open draft.
    pub fn replace_draft(&mut self, draft: E::Draft) -> FormResult<()> {
        let state = self.state.name();
        let slot = self.draft_mut().ok_or(FormError::InvalidTransition {
            state,
            action: FormAction::EditDraft,
        })?;
        *slot = draft;
        Ok(())
    }

    /// Id of the record being edited.
    pub fn editing_id(&self) -> Option<EntityId> {
        match self.state {
            FormState::Editing { id, .. } => Some(id),
            _ => None,
        }
    }

    /// The record being viewed, looked up in `store`.
    pub fn viewing<'s>(&self, store: &'s EntityStore<E>) -> Option<&'s E> {
        match self.state {
            FormState::Viewing(id) => store.get(id),
            _ => None,
        }
    }

    /// Commit the open draft, dating new records today.
    pub fn submit(&mut self, store: &mut EntityStore<E>) -> FormResult<Commit<E>> {
        let today = chrono::Local::now().date_naive();
        self.submit_on(store, today)
    }

    /// Commit the open draft, dating new records `date`.
    pub fn submit_on(&mut self, store: &mut EntityStore<E>, date: NaiveDate) -> FormResult<Commit<E>> {
        let draft = self.draft().ok_or(FormError::InvalidTransition {
            state: self.state.name(),
            action: FormAction::Submit,
        })?;
        if let Err(err) = E::validate(draft) {
            warn!("{} submit rejected, missing {:?}", E::KIND, err.missing);
            return Err(err.into());
        }

        match std::mem::replace(&mut self.state, FormState::Idle) {
            FormState::DraftingNew(draft) => match store.add_on(draft.clone(), date) {
                Ok(record) => {
                    info!("{} {} added", E::KIND, record.id());
                    Ok(Commit::Added(record.clone()))
                }
                Err(err) => {
                    self.state = FormState::DraftingNew(draft);
                    Err(err.into())
                }
            },
            FormState::Editing { id, draft } => {
                let Some(stored) = store.get(id) else {
                    warn!("{} {} vanished while being edited", E::KIND, id);
                    return Ok(Commit::Vanished(id));
                };
                let record = stored.apply(draft);
                store.update(id, record);
                let updated = store
                    .get(id)
                    .cloned()
                    .ok_or(FormError::NotFound { kind: E::KIND, id })?;
                info!("{} {} updated", E::KIND, id);
                Ok(Commit::Updated(updated))
            }
            other => {
                let state = other.name();
                self.state = other;
                Err(FormError::InvalidTransition {
                    state,
                    action: FormAction::Submit,
                })
            }
        }
    }

    /// Discard the open draft. Does nothing when already idle.
    pub fn cancel(&mut self) -> FormResult<()> {
        match self.state {
            FormState::Idle => Ok(()),
            FormState::DraftingNew(_) | FormState::Editing { .. } => {
                self.state = FormState::Idle;
                Ok(())
            }
            FormState::Viewing(_) => Err(self.invalid(FormAction::Cancel)),
        }
    }

    /// Leave the detail view. Does nothing when already idle.
    pub fn close(&mut self) -> FormResult<()> {
        match self.state {
            FormState::Idle => Ok(()),
            FormState::Viewing(_) => {
                self.state = FormState::Idle;
                Ok(())
            }
            FormState::DraftingNew(_) | FormState::Editing { .. } => {
                Err(self.invalid(FormAction::Close))
            }
        }
    }

    /// Drop any view or edit of `id` after it has been deleted.
    pub fn forget(&mut self, id: EntityId) {
        let targets = match self.state {
            FormState::Editing { id: open, .. } | FormState::Viewing(open) => open == id,
            FormState::Idle | FormState::DraftingNew(_) => false,
        };
        if targets {
            self.state = FormState::Idle;
        }
    }

    fn require_idle(&self, action: FormAction) -> FormResult<()> {
        if self.is_idle() {
            Ok(())
        } else {
            Err(self.invalid(action))
        }
    }

    fn invalid(&self, action: FormAction) -> FormError {
        warn!("{} form: cannot {} while {}", E::KIND, action, self.state.name());
        FormError::InvalidTransition {
            state: self.state.name(),
            action,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Caretaker, CaretakerDraft, Patient, PatientDraft, PatientStatus};

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
    }

    fn valid_draft() -> PatientDraft {
        PatientDraft {
            name: "Sarah Johnson".into(),
            age: Some(67),
            illness: "Post-surgery recovery".into(),
            ..Default::default()
        }
    }

    #[test]
    fn test_new_submit_adds_and_returns_to_idle() {
        let mut store = EntityStore::<Patient>::new();
        let mut form = EntityFormController::<Patient>::new();

        form.start_new().unwrap();
        assert_eq!(form.state().name(), "drafting-new");
        form.replace_draft(valid_draft()).unwrap();

        let commit = form.submit_on(&mut store, day()).unwrap();
        assert!(matches!(commit, Commit::Added(ref p) if p.name == "Sarah Johnson"));
        assert!(form.is_idle());
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_rejected_submit_keeps_state() {
        let mut store = EntityStore::<Patient>::new();
        let mut form = EntityFormController::<Patient>::new();

        form.start_new().unwrap();
        form.draft_mut().unwrap().name = "Only a name".into();
        let before = form.state().clone();

        let err = form.submit_on(&mut store, day()).unwrap_err();
        assert!(matches!(err, FormError::Validation(ref v) if v.missing == vec!["age", "illness"]));
        assert_eq!(form.state(), &before);
        assert!(store.is_empty());
    }

    #[test]
    fn test_cancel_discards_draft() {
        let mut store = EntityStore::<Patient>::new();
        let mut form = EntityFormController::<Patient>::new();

        form.start_new().unwrap();
        form.replace_draft(valid_draft()).unwrap();
        form.cancel().unwrap();

        assert!(form.is_idle());
        assert!(matches!(
            form.submit_on(&mut store, day()),
            Err(FormError::InvalidTransition { state: "idle", action: FormAction::Submit })
        ));
        assert!(store.is_empty());
    }

    #[test]
    fn test_edit_copies_record_and_updates() {
        let mut store = EntityStore::<Patient>::new();
        let id = store.add_on(valid_draft(), day()).unwrap().id;
        let mut form = EntityFormController::<Patient>::new();

        form.start_edit(&store, id).unwrap();
        assert_eq!(form.editing_id(), Some(id));
        assert_eq!(form.draft().unwrap().name, "Sarah Johnson");

        form.draft_mut().unwrap().status = PatientStatus::Critical;
        // The store is untouched until submit.
        assert_eq!(store.get(id).unwrap().status, PatientStatus::Stable);

        let commit = form.submit_on(&mut store, day()).unwrap();
        assert!(matches!(commit, Commit::Updated(ref p) if p.status == PatientStatus::Critical));
        assert!(form.is_idle());
    }

    #[test]
    fn test_edit_unknown_id() {
        let store = EntityStore::<Patient>::new();
        let mut form = EntityFormController::<Patient>::new();
        let err = form.start_edit(&store, EntityId(5)).unwrap_err();
        assert_eq!(
            err,
            FormError::NotFound {
                kind: "Patient",
                id: EntityId(5)
            }
        );
        assert!(form.is_idle());
    }

    #[test]
    fn test_edit_of_deleted_record_vanishes() {
        let mut store = EntityStore::<Patient>::new();
        let id = store.add_on(valid_draft(), day()).unwrap().id;
        let mut form = EntityFormController::<Patient>::new();

        form.start_edit(&store, id).unwrap();
        store.remove(id);

        let commit = form.submit_on(&mut store, day()).unwrap();
        assert_eq!(commit, Commit::Vanished(id));
        assert!(form.is_idle());
        assert!(store.is_empty());
    }

    #[test]
    fn test_edit_cancel_discards_changes() {
        let mut store = EntityStore::<Patient>::new();
        let id = store.add_on(valid_draft(), day()).unwrap().id;
        let before = store.list().to_vec();
        let mut form = EntityFormController::<Patient>::new();

        form.start_edit(&store, id).unwrap();
        form.draft_mut().unwrap().status = PatientStatus::Critical;
        form.draft_mut().unwrap().name = "Changed".into();
        form.cancel().unwrap();

        assert!(form.is_idle());
        assert!(form.draft().is_none());
        assert_eq!(store.list(), before.as_slice());

        // A fresh edit starts from the stored record, not the discarded draft.
        form.start_edit(&store, id).unwrap();
        assert_eq!(form.draft().unwrap().status, PatientStatus::Stable);
        assert_eq!(form.draft().unwrap().name, "Sarah Johnson");
    }

    #[test]
    fn test_view_unknown_id() {
        let store = EntityStore::<Patient>::new();
        let mut form = EntityFormController::<Patient>::new();
        assert_eq!(
            form.start_view(&store, EntityId(8)),
            Err(FormError::NotFound {
                kind: "Patient",
                id: EntityId(8)
            })
        );
        assert!(form.is_idle());
        assert!(form.viewing(&store).is_none());
    }

    #[test]
    fn test_exhausted_ids_keep_draft_open() {
        let mut store = EntityStore::<Patient>::starting_at(u64::MAX);
        store.add_on(valid_draft(), day()).unwrap();
        let mut form = EntityFormController::<Patient>::new();

        form.start_new().unwrap();
        form.replace_draft(valid_draft()).unwrap();
        let before = form.state().clone();

        assert_eq!(
            form.submit_on(&mut store, day()),
            Err(FormError::Store(StoreError::IdsExhausted { kind: "Patient" }))
        );
        assert_eq!(form.state(), &before);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_view_and_close() {
        let mut store = EntityStore::<Patient>::new();
        let id = store.add_on(valid_draft(), day()).unwrap().id;
        let mut form = EntityFormController::<Patient>::new();

        form.start_view(&store, id).unwrap();
        assert_eq!(form.viewing(&store).unwrap().id, id);
        assert!(form.draft().is_none());
        assert!(form.cancel().is_err());

        form.close().unwrap();
        assert!(form.is_idle());
        assert!(form.viewing(&store).is_none());
    }

    #[test]
    fn test_actions_require_idle() {
        let mut store = EntityStore::<Patient>::new();
        let id = store.add_on(valid_draft(), day()).unwrap().id;
        let mut form = EntityFormController::<Patient>::new();

        form.start_new().unwrap();
        assert!(matches!(
            form.start_edit(&store, id),
            Err(FormError::InvalidTransition { action: FormAction::Edit, .. })
        ));
        assert!(form.start_view(&store, id).is_err());
        assert!(form.close().is_err());
        assert_eq!(form.state().name(), "drafting-new");
    }

    #[test]
    fn test_replace_draft_requires_open_draft() {
        let mut form = EntityFormController::<Patient>::new();
        assert!(matches!(
            form.replace_draft(valid_draft()),
            Err(FormError::InvalidTransition { action: FormAction::EditDraft, .. })
        ));
    }

    #[test]
    fn test_forget_resets_only_matching_record() {
        let mut store = EntityStore::<Patient>::new();
        let first = store.add_on(valid_draft(), day()).unwrap().id;
        let second = store.add_on(valid_draft(), day()).unwrap().id;
        let mut form = EntityFormController::<Patient>::new();

        form.start_view(&store, first).unwrap();
        form.forget(second);
        assert_eq!(form.state(), &FormState::Viewing(first));
        form.forget(first);
        assert!(form.is_idle());
    }

    #[test]
    fn test_caretaker_without_experience_rejected() {
        let mut store = EntityStore::<Caretaker>::new();
        let mut form = EntityFormController::<Caretaker>::new();

        form.start_new().unwrap();
        form.replace_draft(CaretakerDraft {
            name: "Maria Garcia".into(),
            contact: "+1 (555) 111-2222".into(),
            ..Default::default()
        })
        .unwrap();

        assert!(matches!(
            form.submit_on(&mut store, day()),
            Err(FormError::Validation(_))
        ));
        assert!(store.is_empty());
    }
}
