use super::EventService;
use crate::models::date_key::DateKey;
use crate::models::event::{EventDraft, EventMap, EventRecord};
use anyhow::Result;

impl<'a> EventService<'a> {
    /// Append a new event to `key` with a freshly generated id.
    ///
    /// Returns `None` without touching `map` when the draft has no title.
    pub fn add(&self, map: &mut EventMap, key: DateKey, draft: &EventDraft) -> Option<EventRecord> {
        if !draft.has_title() {
            log::debug!("Ignoring event without a title on {}", key);
            return None;
        }

        let record = EventRecord::from_draft(self.ids.next_id(), draft);
        map.push(key, record.clone());
        log::debug!("Added event {} on {}", record.id, key);
        Some(record)
    }

    /// Replace the fields of event `id` on `key`, keeping its id and position.
    ///
    /// Returns `false` when the event does not exist or the draft has no title.
    pub fn update(&self, map: &mut EventMap, key: &DateKey, id: &str, draft: &EventDraft) -> bool {
        if !draft.has_title() {
            log::debug!("Ignoring update of {} without a title", id);
            return false;
        }

        let updated = map.replace(key, EventRecord::from_draft(id, draft));
        if !updated {
            log::debug!("No event {} on {} to update", id, key);
        }
        updated
    }

    /// Remove event `id` from `key`; the day disappears with its last event.
    pub fn remove(&self, map: &mut EventMap, key: &DateKey, id: &str) -> bool {
        let removed = map.remove(key, id).is_some();
        if !removed {
            log::debug!("No event {} on {} to remove", id, key);
        }
        removed
    }

    /// Load, add and save in one step.
    pub fn create(&self, key: DateKey, draft: &EventDraft) -> Result<Option<EventRecord>> {
        let mut map = self.load()?;
        let record = self.add(&mut map, key, draft);
        if record.is_some() {
            self.save(&map)?;
        }
        Ok(record)
    }

    /// Load, update and save in one step. Returns whether the event existed.
    pub fn edit(&self, key: &DateKey, id: &str, draft: &EventDraft) -> Result<bool> {
        let mut map = self.load()?;
        let updated = self.update(&mut map, key, id, draft);
        if updated {
            self.save(&map)?;
        }
        Ok(updated)
    }

    /// Load, remove and save in one step. Returns whether the event existed.
    pub fn delete(&self, key: &DateKey, id: &str) -> Result<bool> {
        let mut map = self.load()?;
        let removed = self.remove(&mut map, key, id);
        if removed {
            self.save(&map)?;
        }
        Ok(removed)
    }
}
