// To-do module
// Checklist items shown beside the calendar

use serde::{Deserialize, Serialize};

/// A single checklist item. On the wire this is `{id, text, done}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoRecord {
    pub id: String,
    pub text: String,
    #[serde(default)]
    pub done: bool,
}

/// Checklist in creation order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TodoList {
    items: Vec<TodoRecord>,
}

impl TodoList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn items(&self) -> &[TodoRecord] {
        &self.items
    }

    pub fn get(&self, id: &str) -> Option<&TodoRecord> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Number of items not yet completed.
    pub fn remaining(&self) -> usize {
        self.items.iter().filter(|item| !item.done).count()
    }

    /// Append an item at the end of the list.
    pub fn push(&mut self, record: TodoRecord) {
        self.items.push(record);
    }

    /// Set the completion flag in place. Returns `false` for unknown ids.
    pub fn set_done(&mut self, id: &str, done: bool) -> bool {
        match self.items.iter_mut().find(|item| item.id == id) {
            Some(item) => {
                item.done = done;
                true
            }
            None => false,
        }
    }
}
