//! Id generation for events and to-do items.

use std::cell::Cell;

/// Length of generated random ids.
const RANDOM_ID_LEN: usize = 8;

/// Source of fresh, opaque record ids.
pub trait IdGenerator {
    fn next_id(&self) -> String;
}

/// Short random ids: eight lowercase hex characters taken from a v4 UUID.
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomIdGenerator;

impl IdGenerator for RandomIdGenerator {
    fn next_id(&self) -> String {
        let mut id = uuid::Uuid::new_v4().simple().to_string();
        id.truncate(RANDOM_ID_LEN);
        id
    }
}

/// Deterministic ids `"{prefix}{n}"`, counting up from 1.
#[derive(Debug)]
pub struct SequentialIdGenerator {
    prefix: String,
    counter: Cell<u64>,
}

impl SequentialIdGenerator {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            counter: Cell::new(0),
        }
    }
}

impl Default for SequentialIdGenerator {
    fn default() -> Self {
        Self::new("id-")
    }
}

impl IdGenerator for SequentialIdGenerator {
    fn next_id(&self) -> String {
        let next = self.counter.get() + 1;
        self.counter.set(next);
        format!("{}{}", self.prefix, next)
    }
}
