//! Key-value persistence seam.
//!
//! Every persisted document (events, to-dos, title) is stored whole under a
//! single key and rewritten whole on every mutation. Backends implement
//! [`KeyValueStore`]; the SQLite-backed [`Database`](crate::services::database::Database)
//! is used by the application and [`MemoryStore`] by tests and throwaway
//! sessions.

mod document;
mod memory;

pub use document::Document;
pub(crate) use document::save;
pub use memory::MemoryStore;

use anyhow::Result;

/// Key holding the JSON object of dated events.
pub const EVENTS_KEY: &str = "events";
/// Key holding the JSON array of to-do items.
pub const TODOS_KEY: &str = "todos";
/// Key holding the plain-text application title.
pub const TITLE_KEY: &str = "title";

/// Minimal text key-value store.
///
/// `get` returns `Ok(None)` for keys that were never written. Errors are
/// reserved for backend failures; stored text is never interpreted here.
#[cfg_attr(test, mockall::automock)]
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&self, key: &str, value: &str) -> Result<()>;
}
