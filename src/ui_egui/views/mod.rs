mod month_day_cell;
pub mod month_view;
pub mod palette;

pub use month_view::{MonthView, MonthViewAction};
