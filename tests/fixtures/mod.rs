// Test fixtures - reusable test data
// Provides consistent test data across all test files

#![allow(dead_code)]

use personal_calendar::models::date_key::DateKey;
use personal_calendar::models::event::EventDraft;

/// Sample dates for testing
pub mod dates {
    use super::*;

    /// Friday, March 15, 2024
    pub fn mar_15_2024() -> DateKey {
        DateKey::from_ymd(2024, 3, 15).unwrap()
    }

    /// Feb 29, 2024 (leap year)
    pub fn leap_day_2024() -> DateKey {
        DateKey::from_ymd(2024, 2, 29).unwrap()
    }

    /// Dec 31, 2025 (New Year's Eve)
    pub fn new_years_eve_2025() -> DateKey {
        DateKey::from_ymd(2025, 12, 31).unwrap()
    }
}

/// Sample event drafts
pub mod drafts {
    use super::*;

    pub fn dentist() -> EventDraft {
        EventDraft::new("Dentist").description("Bring insurance card")
    }

    pub fn standup() -> EventDraft {
        EventDraft::new("Standup").color("#10b981")
    }

    pub fn party() -> EventDraft {
        EventDraft::new("Party").color("#ec4899")
    }
}

/// JSON documents used by import tests
pub mod documents {
    pub const SINGLE_EVENT: &str = r#"{"2024-01-01":[{"id":"x","title":"Hi"}]}"#;
    pub const NOT_JSON: &str = "not-json";
    pub const ARRAY: &str = "[1,2,3]";
    /// One good day alongside an unpadded key and a record without a title
    pub const MIXED: &str = r#"{"2024-01-01":[{"id":"x","title":"Hi"}],"2024-1-5":[{"id":"y","title":"Lost"}],"2024-01-03":[{"id":"z"}]}"#;
}
