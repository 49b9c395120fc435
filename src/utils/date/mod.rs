// Date utility functions
// Month grid computation and calendar-correct month arithmetic

use chrono::{Datelike, Duration, NaiveDate};

use crate::models::date_key::SUPPORTED_YEARS;

/// Number of cells in a month grid (6 weeks of 7 days).
pub const GRID_CELLS: usize = 42;

/// Number of days in a grid row.
pub const DAYS_PER_WEEK: usize = 7;

/// Carry month overflow into the year.
///
/// `month` is zero-based and may be negative or larger than 11; the result is
/// a `(year, month)` pair with `month` in `0..=11`. Month 12 becomes month 0 of
/// the following year, month -1 becomes month 11 of the previous year.
pub fn normalize_month(year: i32, month: i32) -> (i32, u32) {
    let total = year as i64 * 12 + month as i64;
    let year = total.div_euclid(12) as i32;
    let month = total.rem_euclid(12) as u32;
    (year, month)
}

/// Shift a zero-based `(year, month)` pair by `delta` months.
pub fn shift_month(year: i32, month: u32, delta: i32) -> (i32, u32) {
    normalize_month(year, month as i32 + delta)
}

/// Sunday-first, six-week view of a single month.
///
/// The first cell is the Sunday on or before the first day of the month and
/// the grid always holds [`GRID_CELLS`] consecutive days, so spillover days
/// from the neighbouring months fill the leading and trailing cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthGrid {
    year: i32,
    month: u32,
    days: Vec<NaiveDate>,
}

impl MonthGrid {
    /// Build the grid for a zero-based month.
    ///
    /// Month overflow is normalized first. Returns `None` when the normalized
    /// year lies outside [`SUPPORTED_YEARS`]. Spillover cells of the first and
    /// last supported months may still fall outside that range.
    ///
    /// # Examples
    /// ```
    /// use personal_calendar::utils::date::MonthGrid;
    ///
    /// // March 2024 starts on a Friday, so the grid opens on Sunday Feb 25.
    /// let grid = MonthGrid::new(2024, 2).unwrap();
    /// assert_eq!(grid.days()[0].to_string(), "2024-02-25");
    /// assert_eq!(grid.days().len(), 42);
    /// ```
    pub fn new(year: i32, month: u32) -> Option<Self> {
        let (year, month) = normalize_month(year, month as i32);
        if !SUPPORTED_YEARS.contains(&year) {
            return None;
        }
        let first_of_month = NaiveDate::from_ymd_opt(year, month + 1, 1)?;
        let offset = first_of_month.weekday().num_days_from_sunday() as i64;
        let start = first_of_month.checked_sub_signed(Duration::days(offset))?;

        let mut days = Vec::with_capacity(GRID_CELLS);
        let mut current = start;
        for _ in 0..GRID_CELLS {
            days.push(current);
            current = current.succ_opt()?;
        }

        Some(Self { year, month, days })
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    /// Zero-based month this grid was built for.
    pub fn month(&self) -> u32 {
        self.month
    }

    /// All 42 days in display order.
    pub fn days(&self) -> &[NaiveDate] {
        &self.days
    }

    /// The grid split into six Sunday-first rows.
    pub fn weeks(&self) -> impl Iterator<Item = &[NaiveDate]> {
        self.days.chunks(DAYS_PER_WEEK)
    }

    /// True when `date` belongs to a neighbouring month.
    pub fn is_outside(&self, date: NaiveDate) -> bool {
        date.year() != self.year || date.month0() != self.month
    }

    /// Heading such as "March 2024".
    pub fn label(&self) -> String {
        self.days
            .iter()
            .find(|date| !self.is_outside(**date))
            .map(|date| date.format("%B %Y").to_string())
            .unwrap_or_default()
    }
}

/// Short weekday headings in grid column order.
pub fn weekday_headings() -> [&'static str; DAYS_PER_WEEK] {
    ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"]
}
