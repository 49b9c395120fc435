// Property-based tests for the month grid and the event store
// Checks grid shape and store invariants across random inputs

use chrono::{Datelike, Duration, Weekday};
use personal_calendar::models::date_key::DateKey;
use personal_calendar::models::event::EventDraft;
use personal_calendar::services::event::EventService;
use personal_calendar::services::ids::SequentialIdGenerator;
use personal_calendar::services::storage::MemoryStore;
use personal_calendar::utils::date::{normalize_month, MonthGrid, GRID_CELLS};
use proptest::prelude::*;

proptest! {
    /// Property: the grid is 42 strictly consecutive days starting on a Sunday
    #[test]
    fn prop_grid_is_42_consecutive_days_from_sunday(
        year in 1900..2200i32,
        month in 0..12u32,
    ) {
        let grid = MonthGrid::new(year, month).unwrap();
        let days = grid.days();

        prop_assert_eq!(days.len(), GRID_CELLS);
        prop_assert_eq!(days[0].weekday(), Weekday::Sun);
        for pair in days.windows(2) {
            prop_assert_eq!(pair[1] - pair[0], Duration::days(1));
        }
    }

    /// Property: the first row spans exactly one week and every row starts on Sunday
    #[test]
    fn prop_rows_are_sunday_first_weeks(
        year in 1900..2200i32,
        month in 0..12u32,
    ) {
        let grid = MonthGrid::new(year, month).unwrap();
        let weeks: Vec<_> = grid.weeks().collect();

        prop_assert_eq!(weeks.len(), 6);
        prop_assert_eq!(weeks[0][6] - weeks[0][0], Duration::days(6));
        for week in weeks {
            prop_assert_eq!(week[0].weekday(), Weekday::Sun);
        }
    }

    /// Property: the requested month's first day is always in the first row,
    /// and all of its days are inside the grid
    #[test]
    fn prop_grid_covers_the_whole_month(
        year in 1900..2200i32,
        month in 0..12u32,
    ) {
        let grid = MonthGrid::new(year, month).unwrap();
        let inside: Vec<_> = grid.days().iter().filter(|d| !grid.is_outside(**d)).collect();

        prop_assert!(!inside.is_empty());
        prop_assert_eq!(inside[0].day(), 1);
        prop_assert!(grid.weeks().next().unwrap().contains(inside[0]));
        let next_month = inside[0].checked_add_months(chrono::Months::new(1)).unwrap();
        let month_len = (next_month - *inside[0]).num_days() as usize;
        prop_assert_eq!(inside.len(), month_len);
    }

    /// Property: month overflow is carried into the year
    #[test]
    fn prop_normalized_month_matches_total_months(
        year in 1900..2200i32,
        month in -48..48i32,
    ) {
        let (y, m) = normalize_month(year, month);
        prop_assert!(m < 12);
        prop_assert_eq!(y as i64 * 12 + m as i64, year as i64 * 12 + month as i64);
    }

    /// Property: add grows the day by one, remove restores the original map
    #[test]
    fn prop_add_then_remove_restores_map(
        titles in prop::collection::vec("[a-zA-Z][a-zA-Z ]{0,15}", 0..5),
        new_title in "[a-zA-Z][a-zA-Z ]{0,15}",
        day in 1..=28u32,
    ) {
        let store = MemoryStore::new();
        let ids = SequentialIdGenerator::default();
        let service = EventService::new(&store, &ids);
        let key = DateKey::from_ymd(2024, 3, day).unwrap();

        let mut map = service.load().unwrap();
        for title in &titles {
            service.add(&mut map, key, &EventDraft::new(title.as_str()));
        }
        let before = map.clone();

        let record = service.add(&mut map, key, &EventDraft::new(new_title.as_str())).unwrap();
        prop_assert_eq!(map.list_for_date(&key).len(), titles.len() + 1);
        let last = map.list_for_date(&key).last().unwrap();
        prop_assert_eq!(last, &record);
        prop_assert_eq!(last.title.as_str(), new_title.trim());

        prop_assert!(service.remove(&mut map, &key, &record.id));
        prop_assert_eq!(&map, &before);
        prop_assert_eq!(map.contains_date(&key), !titles.is_empty());
    }

    /// Property: update keeps id, position and length
    #[test]
    fn prop_update_preserves_id_and_position(
        count in 1..6usize,
        target in 0..6usize,
        new_title in "[a-zA-Z][a-zA-Z ]{0,15}",
    ) {
        let target = target % count;
        let store = MemoryStore::new();
        let ids = SequentialIdGenerator::default();
        let service = EventService::new(&store, &ids);
        let key = DateKey::from_ymd(2024, 3, 15).unwrap();

        let mut map = service.load().unwrap();
        for i in 0..count {
            service.add(&mut map, key, &EventDraft::new(format!("Event {}", i)));
        }
        let id = map.list_for_date(&key)[target].id.clone();

        prop_assert!(service.update(&mut map, &key, &id, &EventDraft::new(new_title.as_str())));
        let events = map.list_for_date(&key);
        prop_assert_eq!(events.len(), count);
        prop_assert_eq!(&events[target].id, &id);
        prop_assert_eq!(events[target].title.as_str(), new_title.trim());
    }

    /// Property: a saved map reloads unchanged
    #[test]
    fn prop_save_load_round_trip(
        entries in prop::collection::vec((1..=28u32, "[a-zA-Z][a-zA-Z ]{0,15}"), 0..10),
    ) {
        let store = MemoryStore::new();
        let ids = SequentialIdGenerator::default();
        let service = EventService::new(&store, &ids);

        let mut map = service.load().unwrap();
        for (day, title) in &entries {
            let key = DateKey::from_ymd(2024, 5, *day).unwrap();
            service.add(&mut map, key, &EventDraft::new(title.as_str()));
        }
        service.save(&map).unwrap();

        prop_assert_eq!(service.load().unwrap(), map);
    }
}
