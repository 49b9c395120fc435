// View state module
// The month currently shown in the calendar grid

use crate::models::date_key::SUPPORTED_YEARS;
use crate::utils::date::{shift_month, MonthGrid};
use chrono::{Datelike, Local, NaiveDate};

/// The displayed month. Transient, never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewState {
    year: i32,
    /// Zero-based month (0 = January)
    month: u32,
}

impl ViewState {
    /// The month containing `date`.
    pub fn containing(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month0(),
        }
    }

    /// The month containing today's local date.
    pub fn today() -> Self {
        Self::containing(Local::now().date_naive())
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    /// Zero-based month.
    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn previous(self) -> Self {
        self.shifted(-1)
    }

    pub fn next(self) -> Self {
        self.shifted(1)
    }

    /// Navigation stops at the first and last supported months.
    fn shifted(self, delta: i32) -> Self {
        let (year, month) = shift_month(self.year, self.month, delta);
        if !SUPPORTED_YEARS.contains(&year) {
            return self;
        }
        Self { year, month }
    }

    /// Grid for this month, `None` outside the supported date range.
    pub fn grid(&self) -> Option<MonthGrid> {
        MonthGrid::new(self.year, self.month)
    }
}
