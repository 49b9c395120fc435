//! Month grid interaction and the event dialog round trip.

use chrono::Local;

use super::CalendarApp;
use crate::ui_egui::event_dialog::{
    random_preset_color, render_event_dialog, DialogAction, DialogOutcome,
};
use crate::ui_egui::views::{MonthView, MonthViewAction};

impl CalendarApp {
    pub(super) fn render_main_panel(&mut self, ctx: &egui::Context) {
        let mut action = MonthViewAction::None;

        egui::CentralPanel::default().show(ctx, |ui| {
            let Some(grid) = self.view.grid() else {
                ui.label("This month cannot be displayed.");
                return;
            };
            let today = Local::now().date_naive();
            action = MonthView::show(ui, &grid, &self.events, today);
        });

        match action {
            MonthViewAction::None => {}
            MonthViewAction::AddEvent(date) => {
                self.event_dialog.open_add(date, random_preset_color());
            }
            MonthViewAction::EditEvent(date, id) => {
                if !self.event_dialog.open_edit(date, &id, &self.events) {
                    self.toast_manager.warning("That event no longer exists");
                    self.reload();
                }
            }
        }
    }

    pub(super) fn handle_event_dialog(&mut self, ctx: &egui::Context) {
        if !self.event_dialog.is_open() {
            return;
        }

        let result = match render_event_dialog(ctx, &mut self.event_dialog) {
            DialogAction::None => return,
            DialogAction::Cancel => {
                self.event_dialog.close();
                return;
            }
            DialogAction::Save => self.event_dialog.submit(&self.context.event_service()),
            DialogAction::Delete => self.event_dialog.delete(&self.context.event_service()),
        };

        match result {
            Ok(DialogOutcome::Saved { date }) => {
                self.reload();
                self.jump_to_date(date);
                self.toast_manager.success("Event saved");
            }
            Ok(DialogOutcome::Deleted { date }) => {
                self.reload();
                self.jump_to_date(date);
                self.toast_manager.info("Event deleted");
            }
            Ok(DialogOutcome::Missing { date }) => {
                self.reload();
                self.jump_to_date(date);
                self.toast_manager.warning("That event no longer exists");
            }
            Ok(DialogOutcome::Invalid | DialogOutcome::Unchanged) => {}
            Err(e) => {
                log::error!("Failed to save event: {:#}", e);
                self.event_dialog.error_message = Some(format!("Failed to save: {}", e));
                self.toast_manager.error("Failed to save event");
            }
        }
    }
}
