//! JSON export and import of the whole event document.
//!
//! Export writes the pretty-printed document exactly as stored. Import is a
//! whole-document replace: the file must hold a JSON object, which then
//! overwrites the stored events verbatim. Nothing is merged and the event
//! shapes inside the object are not validated here; days or records that do
//! not decode are skipped with a warning on the next load.

use std::path::Path;

use anyhow::{Context, Result};
use serde_json::Value;
use thiserror::Error;

use super::EventService;
use crate::models::event::EventMap;
use crate::services::storage::{self, EVENTS_KEY};

/// Suggested file name for exported events.
pub const EXPORT_FILE_NAME: &str = "calendar-events.json";

/// Reasons an import file is rejected. The stored events are left untouched.
#[derive(Debug, Error)]
pub enum ImportError {
    #[error("Invalid JSON file.")]
    InvalidJson(#[source] serde_json::Error),
    #[error("Invalid JSON file: expected an object of dated events.")]
    NotAnObject,
}

impl<'a> EventService<'a> {
    /// Pretty-printed JSON (two-space indent) of `map`, keys in map order.
    pub fn export_snapshot(&self, map: &EventMap) -> Result<String> {
        serde_json::to_string_pretty(map).context("Failed to serialize events for export")
    }

    /// Discard the stored events and persist `document` in their place.
    ///
    /// Only the top-level shape is checked: anything other than a JSON object
    /// is rejected with [`ImportError::NotAnObject`].
    pub fn replace_all(&self, document: &Value) -> Result<()> {
        if !document.is_object() {
            return Err(ImportError::NotAnObject.into());
        }

        storage::save(self.store, EVENTS_KEY, document)?;
        log::info!(
            "Replaced event store with imported document ({} dates)",
            document.as_object().map(|o| o.len()).unwrap_or(0)
        );
        Ok(())
    }

    /// Parse `text` and replace the stored events with it.
    pub fn import_json(&self, text: &str) -> Result<()> {
        let document: Value = serde_json::from_str(text).map_err(ImportError::InvalidJson)?;
        self.replace_all(&document)
    }

    /// Read a whole file and import it.
    pub fn import_from_file(&self, path: &Path) -> Result<()> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read import file {:?}", path))?;
        self.import_json(&text)
    }

    /// Export the currently stored events to `path`.
    pub fn export_to_file(&self, path: &Path) -> Result<()> {
        let map = self.load()?;
        let snapshot = self.export_snapshot(&map)?;
        std::fs::write(path, snapshot)
            .with_context(|| format!("Failed to write export file {:?}", path))?;
        log::info!("Exported {} events to {:?}", map.event_count(), path);
        Ok(())
    }
}
