//! Calendar event service entry point.
//! Loads and saves the whole event document through the injected key-value
//! store; mutations and import/export live in focused submodules.

use anyhow::Result;

use crate::models::date_key::DateKey;
use crate::models::event::{EventMap, EventRecord};
use crate::services::ids::IdGenerator;
use crate::services::storage::{self, Document, KeyValueStore, EVENTS_KEY};

pub mod crud;
pub mod transfer;

pub use transfer::{ImportError, EXPORT_FILE_NAME};

/// Service for managing dated events stored as a single document.
pub struct EventService<'a> {
    pub(crate) store: &'a dyn KeyValueStore,
    pub(crate) ids: &'a dyn IdGenerator,
}

impl<'a> EventService<'a> {
    /// Create a new EventService over a store and an id source
    pub fn new(store: &'a dyn KeyValueStore, ids: &'a dyn IdGenerator) -> Self {
        Self { store, ids }
    }

    /// Read the persisted event document.
    ///
    /// A missing or corrupt document yields an empty map; only storage
    /// failures are reported as errors.
    pub fn load(&self) -> Result<EventMap> {
        Document::<EventMap>::load(self.store, EVENTS_KEY)
    }

    /// Overwrite the persisted document with `map`.
    pub fn save(&self, map: &EventMap) -> Result<()> {
        storage::save(self.store, EVENTS_KEY, map)
    }

    /// Events on `key` in insertion order, empty when the day has none.
    pub fn list_for_date<'m>(&self, map: &'m EventMap, key: &DateKey) -> &'m [EventRecord] {
        map.list_for_date(key)
    }
}
