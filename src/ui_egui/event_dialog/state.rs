use anyhow::Result;

use crate::models::date_key::DateKey;
use crate::models::event::{EventDraft, EventMap, EventRecord, DEFAULT_EVENT_COLOR};
use crate::services::event::EventService;

/// Preset swatches offered by the dialog; new events start on a random one.
pub const PRESET_COLORS: [(&str, &str); 6] = [
    ("Blue", DEFAULT_EVENT_COLOR),
    ("Green", "#10b981"),
    ("Red", "#ef4444"),
    ("Yellow", "#f59e0b"),
    ("Purple", "#8b5cf6"),
    ("Pink", "#ec4899"),
];

/// Pick one of [`PRESET_COLORS`] at random.
pub fn random_preset_color() -> &'static str {
    let byte = uuid::Uuid::new_v4().as_bytes()[0] as usize;
    PRESET_COLORS[byte % PRESET_COLORS.len()].1
}

/// Form fields bound to the dialog widgets
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventFields {
    pub title: String,
    pub description: String,
    pub color: String,
}

impl EventFields {
    fn from_record(record: &EventRecord) -> Self {
        Self {
            title: record.title.clone(),
            description: record.description_text().to_string(),
            color: record.color_or_default().to_string(),
        }
    }

    fn to_draft(&self) -> EventDraft {
        let draft = EventDraft::new(self.title.clone()).description(self.description.clone());
        if self.color.trim().is_empty() {
            draft
        } else {
            draft.color(self.color.trim())
        }
    }
}

/// Lifecycle of the event dialog.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum EventDialogState {
    #[default]
    Closed,
    Adding {
        date: DateKey,
        fields: EventFields,
    },
    Editing {
        date: DateKey,
        id: String,
        fields: EventFields,
    },
}

/// What a submit or delete did to the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DialogOutcome {
    /// Nothing happened; the dialog is in the same state as before.
    Unchanged,
    /// The form was rejected and the dialog stays open.
    Invalid,
    /// An event was added or updated on `date` and the dialog closed.
    Saved { date: DateKey },
    /// An event was removed from `date` and the dialog closed.
    Deleted { date: DateKey },
    /// The event being edited no longer exists; nothing was written and the
    /// dialog closed.
    Missing { date: DateKey },
}

/// Event dialog controller: owns the pending form and drives the store.
#[derive(Debug, Default)]
pub struct EventDialog {
    state: EventDialogState,
    pub error_message: Option<String>,
}

impl EventDialog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &EventDialogState {
        &self.state
    }

    pub fn is_open(&self) -> bool {
        !matches!(self.state, EventDialogState::Closed)
    }

    pub fn is_editing(&self) -> bool {
        matches!(self.state, EventDialogState::Editing { .. })
    }

    pub fn heading(&self) -> &'static str {
        if self.is_editing() {
            "Edit Event"
        } else {
            "Add Event"
        }
    }

    pub fn date(&self) -> Option<DateKey> {
        match &self.state {
            EventDialogState::Closed => None,
            EventDialogState::Adding { date, .. } | EventDialogState::Editing { date, .. } => {
                Some(*date)
            }
        }
    }

    pub fn fields_mut(&mut self) -> Option<&mut EventFields> {
        match &mut self.state {
            EventDialogState::Closed => None,
            EventDialogState::Adding { fields, .. } | EventDialogState::Editing { fields, .. } => {
                Some(fields)
            }
        }
    }

    /// Open an empty form for a new event on `date`.
    pub fn open_add(&mut self, date: DateKey, default_color: impl Into<String>) {
        self.error_message = None;
        self.state = EventDialogState::Adding {
            date,
            fields: EventFields {
                color: default_color.into(),
                ..Default::default()
            },
        };
    }

    /// Open the form pre-filled from event `id` on `date`.
    ///
    /// Returns `false` and stays closed when the event no longer exists.
    pub fn open_edit(&mut self, date: DateKey, id: &str, events: &EventMap) -> bool {
        let Some(record) = events.find(&date, id) else {
            log::warn!("Cannot edit missing event {} on {}", id, date);
            return false;
        };

        self.error_message = None;
        self.state = EventDialogState::Editing {
            date,
            id: record.id.clone(),
            fields: EventFields::from_record(record),
        };
        true
    }

    /// Discard pending edits without touching the store.
    pub fn close(&mut self) {
        self.state = EventDialogState::Closed;
        self.error_message = None;
    }

    /// Add or update the event from the form.
    ///
    /// A blank title keeps the dialog open with an error message. Storage
    /// errors are returned and leave the form intact so the user can retry.
    pub fn submit(&mut self, service: &EventService<'_>) -> Result<DialogOutcome> {
        let outcome = match &self.state {
            EventDialogState::Closed => return Ok(DialogOutcome::Unchanged),
            EventDialogState::Adding { date, fields } => {
                let draft = fields.to_draft();
                if !draft.has_title() {
                    self.error_message = Some("Title is required".to_string());
                    return Ok(DialogOutcome::Invalid);
                }
                service.create(*date, &draft)?;
                DialogOutcome::Saved { date: *date }
            }
            EventDialogState::Editing { date, id, fields } => {
                let draft = fields.to_draft();
                if !draft.has_title() {
                    self.error_message = Some("Title is required".to_string());
                    return Ok(DialogOutcome::Invalid);
                }
                if service.edit(date, id, &draft)? {
                    DialogOutcome::Saved { date: *date }
                } else {
                    log::warn!("Event {} on {} vanished before it was saved", id, date);
                    DialogOutcome::Missing { date: *date }
                }
            }
        };

        self.close();
        Ok(outcome)
    }

    /// Remove the event being edited. Only valid while editing.
    pub fn delete(&mut self, service: &EventService<'_>) -> Result<DialogOutcome> {
        let EventDialogState::Editing { date, id, .. } = &self.state else {
            return Ok(DialogOutcome::Unchanged);
        };

        let date = *date;
        let outcome = if service.delete(&date, id)? {
            DialogOutcome::Deleted { date }
        } else {
            log::warn!("Event {} on {} was already gone", id, date);
            DialogOutcome::Missing { date }
        };
        self.close();
        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::ids::SequentialIdGenerator;
    use crate::services::storage::MemoryStore;

    fn key(s: &str) -> DateKey {
        s.parse().unwrap()
    }

    #[test]
    fn test_starts_closed() {
        let dialog = EventDialog::new();
        assert!(!dialog.is_open());
        assert_eq!(dialog.date(), None);
    }

    #[test]
    fn test_add_flow() {
        let store = MemoryStore::new();
        let ids = SequentialIdGenerator::default();
        let service = EventService::new(&store, &ids);
        let day = key("2024-03-15");

        let mut dialog = EventDialog::new();
        dialog.open_add(day, "#10b981");
        assert_eq!(dialog.heading(), "Add Event");
        {
            let fields = dialog.fields_mut().unwrap();
            assert!(fields.title.is_empty());
            assert_eq!(fields.color, "#10b981");
            fields.title = "Dentist".to_string();
        }

        let outcome = dialog.submit(&service).unwrap();
        assert_eq!(outcome, DialogOutcome::Saved { date: day });
        assert!(!dialog.is_open());

        let map = service.load().unwrap();
        let events = map.list_for_date(&day);
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].title, "Dentist");
        assert_eq!(events[0].color.as_deref(), Some("#10b981"));
    }

    #[test]
    fn test_blank_title_keeps_dialog_open() {
        let store = MemoryStore::new();
        let ids = SequentialIdGenerator::default();
        let service = EventService::new(&store, &ids);

        let mut dialog = EventDialog::new();
        dialog.open_add(key("2024-03-15"), DEFAULT_EVENT_COLOR);
        dialog.fields_mut().unwrap().title = "   ".to_string();

        assert_eq!(dialog.submit(&service).unwrap(), DialogOutcome::Invalid);
        assert!(dialog.is_open());
        assert!(dialog.error_message.is_some());
        assert!(service.load().unwrap().is_empty());
    }

    #[test]
    fn test_edit_prefills_and_updates() {
        let store = MemoryStore::new();
        let ids = SequentialIdGenerator::default();
        let service = EventService::new(&store, &ids);
        let day = key("2024-03-15");
        let record = service
            .create(day, &EventDraft::new("Dentist").description("Bring card"))
            .unwrap()
            .unwrap();

        let mut dialog = EventDialog::new();
        assert!(dialog.open_edit(day, &record.id, &service.load().unwrap()));
        assert_eq!(dialog.heading(), "Edit Event");
        {
            let fields = dialog.fields_mut().unwrap();
            assert_eq!(fields.title, "Dentist");
            assert_eq!(fields.description, "Bring card");
            assert_eq!(fields.color, DEFAULT_EVENT_COLOR);
            fields.title = "Orthodontist".to_string();
        }

        assert_eq!(
            dialog.submit(&service).unwrap(),
            DialogOutcome::Saved { date: day }
        );
        let map = service.load().unwrap();
        let events = map.list_for_date(&day);
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].id, record.id);
        assert_eq!(events[0].title, "Orthodontist");
    }

    #[test]
    fn test_edit_missing_event_stays_closed() {
        let mut dialog = EventDialog::new();
        assert!(!dialog.open_edit(key("2024-03-15"), "ghost", &EventMap::new()));
        assert!(!dialog.is_open());
    }

    #[test]
    fn test_delete_from_edit() {
        let store = MemoryStore::new();
        let ids = SequentialIdGenerator::default();
        let service = EventService::new(&store, &ids);
        let day = key("2024-03-15");
        let record = service.create(day, &EventDraft::new("Dentist")).unwrap().unwrap();

        let mut dialog = EventDialog::new();
        dialog.open_edit(day, &record.id, &service.load().unwrap());
        assert_eq!(
            dialog.delete(&service).unwrap(),
            DialogOutcome::Deleted { date: day }
        );
        assert!(!dialog.is_open());
        assert!(service.load().unwrap().is_empty());
    }

    #[test]
    fn test_event_removed_while_editing_is_reported_missing() {
        let store = MemoryStore::new();
        let ids = SequentialIdGenerator::default();
        let service = EventService::new(&store, &ids);
        let day = key("2024-03-15");
        let record = service.create(day, &EventDraft::new("Dentist")).unwrap().unwrap();

        let mut dialog = EventDialog::new();
        dialog.open_edit(day, &record.id, &service.load().unwrap());
        dialog.fields_mut().unwrap().title = "Orthodontist".to_string();
        assert!(service.delete(&day, &record.id).unwrap());

        assert_eq!(
            dialog.submit(&service).unwrap(),
            DialogOutcome::Missing { date: day }
        );
        assert!(!dialog.is_open());
        assert!(service.load().unwrap().is_empty());

        let other = service.create(day, &EventDraft::new("Gym")).unwrap().unwrap();
        dialog.open_edit(day, &other.id, &service.load().unwrap());
        assert!(service.delete(&day, &other.id).unwrap());
        assert_eq!(
            dialog.delete(&service).unwrap(),
            DialogOutcome::Missing { date: day }
        );
    }

    #[test]
    fn test_delete_while_adding_does_nothing() {
        let store = MemoryStore::new();
        let ids = SequentialIdGenerator::default();
        let service = EventService::new(&store, &ids);

        let mut dialog = EventDialog::new();
        dialog.open_add(key("2024-03-15"), DEFAULT_EVENT_COLOR);
        assert_eq!(dialog.delete(&service).unwrap(), DialogOutcome::Unchanged);
        assert!(dialog.is_open());
    }

    #[test]
    fn test_cancel_discards_edits() {
        let store = MemoryStore::new();
        let ids = SequentialIdGenerator::default();
        let service = EventService::new(&store, &ids);
        let day = key("2024-03-15");
        let record = service.create(day, &EventDraft::new("Dentist")).unwrap().unwrap();

        let mut dialog = EventDialog::new();
        dialog.open_edit(day, &record.id, &service.load().unwrap());
        dialog.fields_mut().unwrap().title = "Changed".to_string();
        dialog.close();

        assert!(!dialog.is_open());
        assert_eq!(service.load().unwrap().list_for_date(&day)[0].title, "Dentist");
    }

    #[test]
    fn test_random_color_is_a_preset() {
        let color = random_preset_color();
        assert!(PRESET_COLORS.iter().any(|(_, hex)| *hex == color));
    }
}
