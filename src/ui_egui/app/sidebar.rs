//! To-do side panel.

use super::{CalendarApp, SIDEBAR_DEFAULT_WIDTH};
use egui::RichText;

impl CalendarApp {
    pub(super) fn render_todo_sidebar(&mut self, ctx: &egui::Context) {
        egui::SidePanel::right("todo_sidebar")
            .default_width(SIDEBAR_DEFAULT_WIDTH)
            .min_width(180.0)
            .resizable(true)
            .show(ctx, |ui| {
                ui.add_space(6.0);
                ui.horizontal(|ui| {
                    ui.heading("To-do");
                    if !self.todos.is_empty() {
                        ui.label(
                            RichText::new(format!("{} left", self.todos.remaining()))
                                .small()
                                .weak(),
                        );
                    }
                });
                ui.add_space(6.0);

                self.render_todo_input(ui);

                ui.add_space(6.0);
                ui.separator();

                egui::ScrollArea::vertical().show(ui, |ui| {
                    self.render_todo_items(ui);
                });
            });
    }

    fn render_todo_input(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            let response = ui.add(
                egui::TextEdit::singleline(&mut self.todo_input)
                    .desired_width(ui.available_width() - 50.0)
                    .hint_text("Add a task"),
            );
            let submitted =
                response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));

            if ui.button("Add").clicked() || submitted {
                self.add_todo();
                if submitted {
                    response.request_focus();
                }
            }
        });
    }

    fn render_todo_items(&mut self, ui: &mut egui::Ui) {
        if self.todos.is_empty() {
            ui.label(RichText::new("Nothing to do").italics().weak());
            return;
        }

        let mut toggled: Option<(String, bool)> = None;
        for item in self.todos.items() {
            let mut done = item.done;
            let text = if done {
                RichText::new(&item.text).strikethrough().weak()
            } else {
                RichText::new(&item.text)
            };
            if ui.checkbox(&mut done, text).changed() {
                toggled = Some((item.id.clone(), done));
            }
        }

        if let Some((id, done)) = toggled {
            self.set_todo_done(&id, done);
        }
    }

    fn add_todo(&mut self) {
        match self.context.todo_service().create(&self.todo_input) {
            Ok(Some(_)) => {
                self.todo_input.clear();
                self.reload();
            }
            Ok(None) => {}
            Err(e) => {
                log::error!("Failed to add to-do: {:#}", e);
                self.toast_manager.error("Failed to add to-do");
            }
        }
    }

    fn set_todo_done(&mut self, id: &str, done: bool) {
        match self.context.todo_service().mark(id, done) {
            Ok(_) => self.reload(),
            Err(e) => {
                log::error!("Failed to update to-do {}: {:#}", id, e);
                self.toast_manager.error("Failed to update to-do");
            }
        }
    }
}
