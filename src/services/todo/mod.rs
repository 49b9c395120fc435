//! To-do list service.
//! The checklist is persisted whole, like the event document.

use anyhow::Result;

use crate::models::todo::{TodoList, TodoRecord};
use crate::services::ids::IdGenerator;
use crate::services::storage::{self, Document, KeyValueStore, TODOS_KEY};

/// Service for the checklist stored under a single key.
pub struct TodoService<'a> {
    store: &'a dyn KeyValueStore,
    ids: &'a dyn IdGenerator,
}

impl<'a> TodoService<'a> {
    pub fn new(store: &'a dyn KeyValueStore, ids: &'a dyn IdGenerator) -> Self {
        Self { store, ids }
    }

    /// Read the checklist; missing or corrupt data yields an empty list.
    pub fn load(&self) -> Result<TodoList> {
        Document::<TodoList>::load(self.store, TODOS_KEY)
    }

    /// Overwrite the stored checklist.
    pub fn save(&self, list: &TodoList) -> Result<()> {
        storage::save(self.store, TODOS_KEY, list)
    }

    /// Append a new, unfinished item. Blank text is ignored.
    pub fn add(&self, list: &mut TodoList, text: &str) -> Option<TodoRecord> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }

        let record = TodoRecord {
            id: self.ids.next_id(),
            text: text.to_string(),
            done: false,
        };
        list.push(record.clone());
        log::debug!("Added to-do {}", record.id);
        Some(record)
    }

    /// Set the completion flag of `id` without reordering.
    pub fn set_done(&self, list: &mut TodoList, id: &str, done: bool) -> bool {
        list.set_done(id, done)
    }

    /// Load, add and save in one step.
    pub fn create(&self, text: &str) -> Result<Option<TodoRecord>> {
        let mut list = self.load()?;
        let record = self.add(&mut list, text);
        if record.is_some() {
            self.save(&list)?;
        }
        Ok(record)
    }

    /// Load, toggle and save in one step.
    pub fn mark(&self, id: &str, done: bool) -> Result<bool> {
        let mut list = self.load()?;
        let changed = self.set_done(&mut list, id, done);
        if changed {
            self.save(&list)?;
        }
        Ok(changed)
    }
}
