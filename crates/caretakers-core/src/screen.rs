//! A store and a form controller composed for one entity kind.

use chrono::NaiveDate;
use serde::Serialize;

use crate::config::CareConfig;
use crate::entity::Entity;
use crate::form::{Commit, EntityFormController, FormError, FormResult};
use crate::models::{Caretaker, EntityId, Patient, REQUIRED_FIELDS_MESSAGE};
use crate::notify::{LogNotifier, Notification, Notifier};
use crate::store::EntityStore;

pub type PatientScreen<N = LogNotifier> = ManagementScreen<Patient, N>;
pub type CaretakerScreen<N = LogNotifier> = ManagementScreen<Caretaker, N>;

/// Rendered management table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Table {
    pub headers: Vec<String>,
    pub rows: Vec<TableRow>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableRow {
    pub id: EntityId,
    pub cells: Vec<String>,
}

/// The patient or caretaker management screen.
///
/// Owns its own store; nothing is shared with other screens.
#[derive(Debug)]
pub struct ManagementScreen<E: Entity, N: Notifier = LogNotifier> {
    store: EntityStore<E>,
    form: EntityFormController<E>,
    notifier: N,
}

impl<E: Entity, N: Notifier> ManagementScreen<E, N> {
    pub fn new(store: EntityStore<E>, notifier: N) -> Self {
        Self {
            store,
            form: EntityFormController::new(),
            notifier,
        }
    }

    pub fn store(&self) -> &EntityStore<E> {
        &self.store
    }

    pub fn form(&self) -> &EntityFormController<E> {
        &self.form
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    pub fn notifier_mut(&mut self) -> &mut N {
        &mut self.notifier
    }

    pub fn list(&self) -> &[E] {
        self.store.list()
    }

    pub fn search(&self, query: &str) -> Vec<&E> {
        self.store.search(query)
    }

    /// "Add" button.
    pub fn add(&mut self) -> FormResult<()> {
        self.form.start_new()
    }

    /// "Edit" button on a row.
    pub fn edit(&mut self, id: EntityId) -> FormResult<()> {
        self.form.start_edit(&self.store, id)
    }

    /// "View" button on a row.
    pub fn view(&mut self, id: EntityId) -> FormResult<()> {
        self.form.start_view(&self.store, id)
    }

    pub fn close(&mut self) -> FormResult<()> {
        self.form.close()
    }

    pub fn cancel(&mut self) -> FormResult<()> {
        self.form.cancel()
    }

    pub fn draft_mut(&mut self) -> Option<&mut E::Draft> {
        self.form.draft_mut()
    }

    pub fn set_draft(&mut self, draft: E::Draft) -> FormResult<()> {
        self.form.replace_draft(draft)
    }

    pub fn submit(&mut self) -> FormResult<Commit<E>> {
        let today = chrono::Local::now().date_naive();
        self.submit_on(today)
    }

    /// Commit the open draft and tell the user how it went.
    pub fn submit_on(&mut self, date: NaiveDate) -> FormResult<Commit<E>> {
        let result = self.form.submit_on(&mut self.store, date);
        match &result {
            Ok(Commit::Added(_)) => self
                .notifier
                .notify(Notification::success(format!("{} added successfully!", E::KIND))),
            Ok(Commit::Updated(_)) => self
                .notifier
                .notify(Notification::success(format!("{} updated successfully!", E::KIND))),
            Ok(Commit::Vanished(_)) => {}
            Err(FormError::Validation(_)) => self
                .notifier
                .notify(Notification::error(REQUIRED_FIELDS_MESSAGE)),
            Err(FormError::Store(err)) => {
                self.notifier.notify(Notification::error(err.to_string()))
            }
            Err(_) => {}
        }
        result
    }

    /// "Delete" button on a row. Absent ids change nothing and raise no
    /// notification.
    pub fn delete(&mut self, id: EntityId) -> bool {
        let removed = self.store.remove(id);
        if removed {
            self.form.forget(id);
            self.notifier
                .notify(Notification::success(format!("{} removed successfully!", E::KIND)));
        }
        removed
    }

    /// Current store contents as a table, in store order.
    pub fn table(&self) -> Table {
        Table {
            headers: E::headers().iter().map(|h| h.to_string()).collect(),
            rows: self
                .store
                .list()
                .iter()
                .map(|record| TableRow {
                    id: record.id(),
                    cells: record.cells(),
                })
                .collect(),
        }
    }

    /// Fields of the record being viewed.
    pub fn details(&self) -> Option<Vec<(&'static str, String)>> {
        self.form.viewing(&self.store).map(|record| record.details())
    }
}

impl<N: Notifier> ManagementScreen<Patient, N> {
    pub fn from_config(config: &CareConfig, notifier: N) -> Self {
        Self::new(config.patient_store(), notifier)
    }
}

impl<N: Notifier> ManagementScreen<Caretaker, N> {
    pub fn from_config(config: &CareConfig, notifier: N) -> Self {
        Self::new(config.caretaker_store(), notifier)
    }
}
