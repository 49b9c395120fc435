// Integration tests for persistence against a SQLite file
mod fixtures;

use fixtures::{dates, documents, drafts};
use personal_calendar::models::date_key::DateKey;
use personal_calendar::models::event::{EventDraft, DEFAULT_EVENT_COLOR};
use personal_calendar::models::settings::DEFAULT_APP_TITLE;
use personal_calendar::services::database::Database;
use personal_calendar::services::event::{EventService, ImportError};
use personal_calendar::services::ids::SequentialIdGenerator;
use personal_calendar::services::settings::TitleService;
use personal_calendar::services::storage::KeyValueStore;
use personal_calendar::services::todo::TodoService;
use pretty_assertions::assert_eq;
use std::path::Path;
use tempfile::TempDir;

fn open(path: &Path) -> Database {
    let db = Database::new(path.to_str().unwrap()).expect("Failed to create database");
    db.initialize_schema().expect("Failed to initialize schema");
    db
}

#[test]
fn test_app_lifecycle_simulation() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = dir.path().join("calendar.db");
    let ids = SequentialIdGenerator::default();

    // First launch: everything starts empty
    {
        let db = open(&db_path);
        let events = EventService::new(&db, &ids);
        let todos = TodoService::new(&db, &ids);
        let title = TitleService::new(&db);

        assert!(events.load().expect("Failed to load events").is_empty());
        assert!(todos.load().expect("Failed to load todos").is_empty());
        assert_eq!(title.get().expect("Failed to load title").as_str(), DEFAULT_APP_TITLE);

        events
            .create(dates::mar_15_2024(), &drafts::dentist())
            .expect("Failed to create event");
        events
            .create(dates::mar_15_2024(), &drafts::standup())
            .expect("Failed to create event");
        events
            .create(dates::leap_day_2024(), &drafts::party())
            .expect("Failed to create event");
        todos.create("Buy milk").expect("Failed to create todo");
        title.set("Family planner").expect("Failed to save title");
    }

    // Second launch: state survives the reopen
    {
        let db = open(&db_path);
        let events = EventService::new(&db, &ids);
        let todos = TodoService::new(&db, &ids);
        let title = TitleService::new(&db);

        let map = events.load().expect("Failed to load events");
        assert_eq!(map.day_count(), 2);
        let titles: Vec<&str> = map
            .list_for_date(&dates::mar_15_2024())
            .iter()
            .map(|e| e.title.as_str())
            .collect();
        assert_eq!(titles, vec!["Dentist", "Standup"]);

        let list = todos.load().expect("Failed to load todos");
        assert_eq!(list.len(), 1);
        assert_eq!(list.items()[0].text, "Buy milk");
        assert!(!list.items()[0].done);

        assert_eq!(title.get().expect("Failed to load title").as_str(), "Family planner");
    }
}

#[test]
fn test_dentist_scenario_persists_default_color() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let db = open(&dir.path().join("calendar.db"));
    let ids = SequentialIdGenerator::default();
    let service = EventService::new(&db, &ids);
    let day = dates::mar_15_2024();

    let record = service
        .create(day, &EventDraft::new("Dentist"))
        .expect("Failed to create event")
        .expect("Draft with a title should be stored");
    assert_eq!(record.color_or_default(), DEFAULT_EVENT_COLOR);

    let stored = db.get("events").expect("Failed to read events").unwrap();
    let value: serde_json::Value = serde_json::from_str(&stored).unwrap();
    assert_eq!(
        value,
        serde_json::json!({ "2024-03-15": [{ "id": record.id.clone(), "title": "Dentist" }] })
    );

    assert!(service.delete(&day, &record.id).expect("Failed to delete event"));
    assert_eq!(db.get("events").unwrap().as_deref(), Some("{}"));
}

#[test]
fn test_export_import_between_databases() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let ids = SequentialIdGenerator::default();
    let export_path = dir.path().join("calendar-events.json");

    let source = open(&dir.path().join("source.db"));
    let source_events = EventService::new(&source, &ids);
    source_events
        .create(dates::new_years_eve_2025(), &drafts::party())
        .expect("Failed to create event");
    source_events
        .export_to_file(&export_path)
        .expect("Failed to export events");

    let target = open(&dir.path().join("target.db"));
    let target_events = EventService::new(&target, &ids);
    target_events
        .create(dates::mar_15_2024(), &drafts::dentist())
        .expect("Failed to create event");
    target_events
        .import_from_file(&export_path)
        .expect("Failed to import events");

    // Import replaces, it never merges
    assert_eq!(
        target_events.load().unwrap(),
        source_events.load().unwrap()
    );
}

#[test]
fn test_rejected_import_leaves_database_untouched() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let db = open(&dir.path().join("calendar.db"));
    let ids = SequentialIdGenerator::default();
    let service = EventService::new(&db, &ids);
    service
        .create(dates::mar_15_2024(), &drafts::dentist())
        .expect("Failed to create event");
    let before = db.get("events").unwrap();

    for bad in [documents::NOT_JSON, documents::ARRAY] {
        let err = service.import_json(bad).unwrap_err();
        assert!(err.downcast_ref::<ImportError>().is_some());
        assert_eq!(db.get("events").unwrap(), before);
    }

    service
        .import_json(documents::SINGLE_EVENT)
        .expect("Object documents are accepted");
    let map = service.load().unwrap();
    assert_eq!(map.event_count(), 1);
    assert_eq!(
        map.list_for_date(&"2024-01-01".parse().unwrap())[0].title,
        "Hi"
    );
}

#[test]
fn test_corrupt_rows_recover_as_empty() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let db = open(&dir.path().join("calendar.db"));
    let ids = SequentialIdGenerator::default();

    db.set("events", "{broken").unwrap();
    db.set("todos", "42").unwrap();

    assert!(EventService::new(&db, &ids).load().unwrap().is_empty());
    assert!(TodoService::new(&db, &ids).load().unwrap().is_empty());
}

#[test]
fn test_mixed_import_survives_reopen_and_later_save() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = dir.path().join("calendar.db");
    let ids = SequentialIdGenerator::new("new");
    let first_day = DateKey::from_ymd(2024, 1, 1).unwrap();

    {
        let db = open(&db_path);
        let events = EventService::new(&db, &ids);
        events.import_json(documents::MIXED).expect("Object should be accepted");
        events
            .create(dates::mar_15_2024(), &drafts::dentist())
            .expect("Failed to create event");
    }

    let db = open(&db_path);
    let map = EventService::new(&db, &ids).load().expect("Failed to load events");
    assert_eq!(map.list_for_date(&first_day)[0].title, "Hi");
    assert_eq!(map.list_for_date(&dates::mar_15_2024())[0].title, "Dentist");
    assert_eq!(map.event_count(), 2);
}
