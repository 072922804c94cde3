//! Start-up configuration for the management screens.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::{sample_caretakers, sample_patients, Caretaker, Patient};
use crate::store::EntityStore;

/// Configuration errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Cannot read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid config JSON: {0}")]
    Json(#[from] serde_json::Error),
}

pub type ConfigResult<T> = Result<T, ConfigError>;

/// How the screens start.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CareConfig {
    /// Start with the sample patients and caretakers
    pub seed_sample_data: bool,
    /// First id handed out by an empty store
    pub first_id: u64,
}

impl Default for CareConfig {
    fn default() -> Self {
        Self {
            seed_sample_data: true,
            first_id: 1,
        }
    }
}

impl CareConfig {
    /// Parse from a JSON document. Missing keys take their defaults.
    pub fn from_json(json: &str) -> ConfigResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> ConfigResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json(&contents)
    }

    pub fn patient_store(&self) -> EntityStore<Patient> {
        self.store(sample_patients)
    }

    pub fn caretaker_store(&self) -> EntityStore<Caretaker> {
        self.store(sample_caretakers)
    }

    fn store<E: crate::entity::Entity>(&self, samples: fn() -> Vec<E>) -> EntityStore<E> {
        let mut store = EntityStore::starting_at(self.first_id);
        if self.seed_sample_data {
            store.seed(samples());
        }
        store
    }
}
