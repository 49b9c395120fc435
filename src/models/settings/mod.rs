// Settings module
// User-chosen application title

use chrono::NaiveDate;

/// Title shown when the user has not chosen one.
pub const DEFAULT_APP_TITLE: &str = "Personal Calendar";

/// The application title displayed in the header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppTitle(String);

impl AppTitle {
    /// Interpret user input: surrounding whitespace is dropped and a blank
    /// entry falls back to the default title.
    pub fn from_input(input: &str) -> Self {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            Self::default()
        } else {
            Self(trimmed.to_string())
        }
    }

    /// Interpret a stored value, which may be absent.
    pub fn from_stored(stored: Option<String>) -> Self {
        stored.map(|s| Self::from_input(&s)).unwrap_or_default()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_default(&self) -> bool {
        self.0 == DEFAULT_APP_TITLE
    }

    /// Header line: the title followed by today's long-form date.
    pub fn header(&self, today: NaiveDate) -> String {
        format!("{} — {}", self.0, today.format("%A, %B %-d, %Y"))
    }
}

impl Default for AppTitle {
    fn default() -> Self {
        Self(DEFAULT_APP_TITLE.to_string())
    }
}
