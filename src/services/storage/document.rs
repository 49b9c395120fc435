use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;

use super::KeyValueStore;

/// Outcome of decoding a stored JSON document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Document<T> {
    Valid(T),
    Corrupt,
}

impl<T: DeserializeOwned + Default> Document<T> {
    /// Decode raw stored text. A missing or empty entry is a valid empty
    /// document; anything that fails to parse is `Corrupt`.
    pub fn decode(raw: Option<&str>) -> Self {
        match raw {
            None | Some("") => Document::Valid(T::default()),
            Some(text) => match serde_json::from_str(text) {
                Ok(value) => Document::Valid(value),
                Err(_) => Document::Corrupt,
            },
        }
    }

    pub fn is_corrupt(&self) -> bool {
        matches!(self, Document::Corrupt)
    }

    /// Collapse a corrupt document into the type's empty default.
    pub fn into_value_or_default(self) -> T {
        match self {
            Document::Valid(value) => value,
            Document::Corrupt => T::default(),
        }
    }

    /// Read and decode `key`. Corruption is logged and recovered here so that
    /// callers only ever see a usable value.
    pub fn load(store: &dyn KeyValueStore, key: &str) -> Result<T> {
        let raw = store
            .get(key)
            .with_context(|| format!("Failed to read '{}' from storage", key))?;

        let document = Self::decode(raw.as_deref());
        if document.is_corrupt() {
            log::warn!("Stored '{}' document is corrupt; treating it as empty", key);
        }

        Ok(document.into_value_or_default())
    }
}

/// Serialize `value` and overwrite `key` with it.
pub(crate) fn save<T: Serialize + ?Sized>(
    store: &dyn KeyValueStore,
    key: &str,
    value: &T,
) -> Result<()> {
    let json = serde_json::to_string(value)
        .with_context(|| format!("Failed to serialize '{}' document", key))?;
    store
        .set(key, &json)
        .with_context(|| format!("Failed to write '{}' to storage", key))
}
