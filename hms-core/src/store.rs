// File:    store.rs
// Author:  apezoo
// Date:    2025-08-02
//
// Description: Manages the tab-scoped session store behind an explicit repository interface.
//
// License:
// This project is licensed under the terms of the GNU AGPLv3 license.
// See the LICENSE.md file in the project root for full license information.

//! The session-scoped repository.
//!
//! All records live in a string-keyed map of JSON strings. The store is
//! deliberately ephemeral: dropping it (the tab closing) loses everything,
//! and there is no durability, indexing, or transaction support. Callers
//! receive the repository by reference instead of reaching for ambient
//! global state.

use log::debug;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::collections::HashMap;
use thiserror::Error;

/// The entry names used by the seeded store.
pub mod keys {
    /// The fixed administrator account record.
    pub const ADMIN: &str = "admin";
    /// The collection of self-registered user accounts.
    pub const USERS: &str = "users";
    /// The patient record collection.
    pub const PATIENTS: &str = "patients";
    /// The doctor record collection.
    pub const DOCTORS: &str = "doctors";
    /// The appointment collection.
    pub const APPOINTMENTS: &str = "appointments";
    /// The bill collection.
    pub const BILLS: &str = "bills";
    /// Marker recording that the store has been seeded.
    pub const SYSTEM_INITIALIZED: &str = "systemInitialized";
    /// Counter issuing patient IDs.
    pub const PATIENT_IDS: &str = "patientIdCounter";
    /// Counter issuing doctor IDs.
    pub const DOCTOR_IDS: &str = "doctorIdCounter";
    /// Counter issuing appointment IDs.
    pub const APPOINTMENT_IDS: &str = "appointmentIdCounter";
    /// Counter issuing bill IDs.
    pub const BILL_IDS: &str = "billIdCounter";
}

/// Errors raised by repository operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A stored entry could not be decoded into the requested type.
    #[error("entry '{name}' holds malformed data")]
    Decode {
        /// The entry that failed to decode.
        name: String,
        /// The underlying JSON error.
        #[source]
        source: serde_json::Error,
    },
    /// A value could not be encoded for storage.
    #[error("entry '{name}' could not be encoded")]
    Encode {
        /// The entry that failed to encode.
        name: String,
        /// The underlying JSON error.
        #[source]
        source: serde_json::Error,
    },
    /// An ID counter is absent or not numeric.
    #[error("counter '{0}' is missing or not numeric")]
    Counter(String),
}

/// A string-keyed record store scoped to the current session.
///
/// Collections read as empty until first saved; single records read as
/// `None`. Counters hand out consecutive integers starting from whatever
/// value they were seeded with.
pub trait Repository {
    /// Loads an ordered collection of records, empty if never saved.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Decode`] if the stored entry is not a valid
    /// collection of `T`.
    fn load_collection<T: DeserializeOwned>(&self, name: &str) -> Result<Vec<T>, StoreError>;

    /// Replaces a collection wholesale.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Encode`] if the records cannot be serialized.
    fn save_collection<T: Serialize>(
        &mut self,
        name: &str,
        records: &[T],
    ) -> Result<(), StoreError>;

    /// Loads a single record, `None` if absent.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Decode`] if the stored entry is not a valid `T`.
    fn load_record<T: DeserializeOwned>(&self, name: &str) -> Result<Option<T>, StoreError>;

    /// Stores a single record, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Encode`] if the record cannot be serialized.
    fn save_record<T: Serialize>(&mut self, name: &str, record: &T) -> Result<(), StoreError>;

    /// Returns the current value of a counter and advances it by one.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Counter`] if the counter was never seeded or
    /// does not hold an integer.
    fn next_id(&mut self, counter: &str) -> Result<u32, StoreError>;
}

/// The in-memory session store. Lives for the duration of the session and
/// is lost when dropped.
#[derive(Debug, Default)]
pub struct SessionStore {
    entries: HashMap<String, String>,
}

impl SessionStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether an entry of any kind exists under `name`.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Drops every entry, modelling the session ending.
    pub fn clear(&mut self) {
        debug!("Clearing {} session entries.", self.entries.len());
        self.entries.clear();
    }
}

impl Repository for SessionStore {
    fn load_collection<T: DeserializeOwned>(&self, name: &str) -> Result<Vec<T>, StoreError> {
        self.entries.get(name).map_or_else(
            || Ok(Vec::new()),
            |raw| {
                serde_json::from_str(raw).map_err(|source| StoreError::Decode {
                    name: name.to_owned(),
                    source,
                })
            },
        )
    }

    fn save_collection<T: Serialize>(
        &mut self,
        name: &str,
        records: &[T],
    ) -> Result<(), StoreError> {
        let raw = serde_json::to_string(records).map_err(|source| StoreError::Encode {
            name: name.to_owned(),
            source,
        })?;
        self.entries.insert(name.to_owned(), raw);
        Ok(())
    }

    fn load_record<T: DeserializeOwned>(&self, name: &str) -> Result<Option<T>, StoreError> {
        self.entries
            .get(name)
            .map(|raw| {
                serde_json::from_str(raw).map_err(|source| StoreError::Decode {
                    name: name.to_owned(),
                    source,
                })
            })
            .transpose()
    }

    fn save_record<T: Serialize>(&mut self, name: &str, record: &T) -> Result<(), StoreError> {
        let raw = serde_json::to_string(record).map_err(|source| StoreError::Encode {
            name: name.to_owned(),
            source,
        })?;
        self.entries.insert(name.to_owned(), raw);
        Ok(())
    }

    fn next_id(&mut self, counter: &str) -> Result<u32, StoreError> {
        let current: u32 = self
            .entries
            .get(counter)
            .and_then(|raw| raw.parse().ok())
            .ok_or_else(|| StoreError::Counter(counter.to_owned()))?;
        self.entries
            .insert(counter.to_owned(), (current + 1).to_string());
        Ok(current)
    }
}
