//! The seam shared by every managed record kind.

use std::fmt;

use chrono::NaiveDate;

use crate::models::{EntityId, ValidationError};

/// Date format used for creation dates in tables, details and the FFI.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// A record kind that can be held in an [`EntityStore`](crate::store::EntityStore)
/// and edited through an [`EntityFormController`](crate::form::EntityFormController).
pub trait Entity: Clone + fmt::Debug {
    /// In-progress copy edited by the form.
    type Draft: Clone + Default + fmt::Debug;

    /// Display name of the kind, e.g. "Patient".
    const KIND: &'static str;

    fn id(&self) -> EntityId;

    fn name(&self) -> &str;

    /// Presence check run before a draft is committed.
    fn validate(draft: &Self::Draft) -> Result<(), ValidationError>;

    /// Build a fresh record, applying creation-time defaults.
    fn create(id: EntityId, draft: Self::Draft, today: NaiveDate) -> Self;

    /// Editable copy of this record.
    fn to_draft(&self) -> Self::Draft;

    /// Full replacement of the editable fields; identity and creation-time
    /// fields are kept.
    fn apply(&self, draft: Self::Draft) -> Self;

    /// Restore the fields that never change after creation from `stored`.
    fn pin_immutable(&mut self, stored: &Self);

    /// Column headers of the management table.
    fn headers() -> &'static [&'static str];

    /// One table row, aligned with [`Entity::headers`].
    fn cells(&self) -> Vec<String>;

    /// Labelled fields of the detail view.
    fn details(&self) -> Vec<(&'static str, String)>;
}
