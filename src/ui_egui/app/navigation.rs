use super::CalendarApp;
use crate::models::date_key::DateKey;
use crate::models::view_state::ViewState;

impl CalendarApp {
    pub(super) fn navigate_previous(&mut self) {
        self.view = self.view.previous();
    }

    pub(super) fn navigate_next(&mut self) {
        self.view = self.view.next();
    }

    pub(super) fn jump_to_today(&mut self) {
        self.view = ViewState::today();
    }

    /// Show the month containing `date`.
    pub(super) fn jump_to_date(&mut self, date: DateKey) {
        self.view = ViewState::containing(date.date());
    }
}
