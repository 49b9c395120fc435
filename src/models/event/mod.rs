// Event module
// Dated event records and the per-day event mapping

use crate::models::date_key::DateKey;
use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use std::fmt;

/// Color used for events that carry no color of their own.
pub const DEFAULT_EVENT_COLOR: &str = "#2563eb";

/// A single event on a calendar day.
///
/// On the wire this is `{id, title, desc?, color?}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventRecord {
    pub id: String,
    pub title: String,
    #[serde(rename = "desc", default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl EventRecord {
    /// Build a record from user-entered fields.
    pub fn from_draft(id: impl Into<String>, draft: &EventDraft) -> Self {
        Self {
            id: id.into(),
            title: draft.title.trim().to_string(),
            description: draft.normalized_description(),
            color: draft.color.clone(),
        }
    }

    /// The color to render, falling back to [`DEFAULT_EVENT_COLOR`].
    pub fn color_or_default(&self) -> &str {
        self.color.as_deref().unwrap_or(DEFAULT_EVENT_COLOR)
    }

    /// Description text, empty when absent.
    pub fn description_text(&self) -> &str {
        self.description.as_deref().unwrap_or("")
    }
}

/// User-entered event fields, as collected by the event dialog.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventDraft {
    pub title: String,
    pub description: String,
    pub color: Option<String>,
}

impl EventDraft {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Default::default()
        }
    }

    /// Set the description
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the color (hex format)
    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// A draft is only storable with a non-blank title.
    pub fn has_title(&self) -> bool {
        !self.title.trim().is_empty()
    }

    fn normalized_description(&self) -> Option<String> {
        let description = self.description.trim();
        if description.is_empty() {
            None
        } else {
            Some(description.to_string())
        }
    }
}

/// Mapping from calendar day to the events on that day.
///
/// Days keep the order in which they were first inserted and events keep
/// their insertion order within a day. A day never maps to an empty list:
/// removing the last event of a day removes the day.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventMap {
    days: Vec<(DateKey, Vec<EventRecord>)>,
}

impl EventMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// Number of days that hold at least one event.
    pub fn day_count(&self) -> usize {
        self.days.len()
    }

    /// Total number of events across all days.
    pub fn event_count(&self) -> usize {
        self.days.iter().map(|(_, events)| events.len()).sum()
    }

    pub fn contains_date(&self, key: &DateKey) -> bool {
        self.position(key).is_some()
    }

    /// Days and their events, in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&DateKey, &[EventRecord])> {
        self.days.iter().map(|(key, events)| (key, events.as_slice()))
    }

    /// Events on `key`, or an empty slice.
    pub fn list_for_date(&self, key: &DateKey) -> &[EventRecord] {
        self.position(key)
            .map(|idx| self.days[idx].1.as_slice())
            .unwrap_or(&[])
    }

    pub fn find(&self, key: &DateKey, id: &str) -> Option<&EventRecord> {
        self.list_for_date(key).iter().find(|event| event.id == id)
    }

    /// Append an event to a day, creating the day when absent.
    pub fn push(&mut self, key: DateKey, record: EventRecord) {
        match self.position(&key) {
            Some(idx) => self.days[idx].1.push(record),
            None => self.days.push((key, vec![record])),
        }
    }

    /// Replace the event with the same id on `key`, keeping its position.
    ///
    /// Returns `false` when no such event exists.
    pub fn replace(&mut self, key: &DateKey, record: EventRecord) -> bool {
        let Some(idx) = self.position(key) else {
            return false;
        };

        match self.days[idx].1.iter_mut().find(|event| event.id == record.id) {
            Some(slot) => {
                *slot = record;
                true
            }
            None => false,
        }
    }

    /// Remove the event `id` from `key`, dropping the day once it is empty.
    pub fn remove(&mut self, key: &DateKey, id: &str) -> Option<EventRecord> {
        let idx = self.position(key)?;
        let events = &mut self.days[idx].1;
        let event_idx = events.iter().position(|event| event.id == id)?;
        let removed = events.remove(event_idx);

        if events.is_empty() {
            self.days.remove(idx);
        }

        Some(removed)
    }

    fn position(&self, key: &DateKey) -> Option<usize> {
        self.days.iter().position(|(day, _)| day == key)
    }
}

impl Serialize for EventMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.days.len()))?;
        for (key, events) in &self.days {
            map.serialize_entry(key, events)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for EventMap {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct EventMapVisitor;

        impl<'de> Visitor<'de> for EventMapVisitor {
            type Value = EventMap;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("an object mapping YYYY-MM-DD dates to event lists")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<EventMap, A::Error> {
                let mut map = EventMap::new();
                while let Some((raw_key, raw_events)) = access.next_entry::<String, Value>()? {
                    let key = match raw_key.parse::<DateKey>() {
                        Ok(key) => key,
                        Err(e) => {
                            log::warn!("Skipping stored events: {}", e);
                            continue;
                        }
                    };
                    let events = decode_day(&key, raw_events);
                    match map.position(&key) {
                        Some(idx) => map.days[idx].1 = events,
                        None => map.days.push((key, events)),
                    }
                }
                // Empty lists can only come from hand-edited or imported files
                map.days.retain(|(_, events)| !events.is_empty());
                Ok(map)
            }
        }

        deserializer.deserialize_map(EventMapVisitor)
    }
}

/// Decode one day's list, keeping every record that has the expected shape.
fn decode_day(key: &DateKey, raw: Value) -> Vec<EventRecord> {
    let Value::Array(items) = raw else {
        log::warn!("Skipping events on {}: expected a list", key);
        return Vec::new();
    };

    items
        .into_iter()
        .filter_map(|item| match serde_json::from_value::<EventRecord>(item) {
            Ok(record) => Some(record),
            Err(e) => {
                log::warn!("Skipping malformed event on {}: {}", key, e);
                None
            }
        })
        .collect()
}
