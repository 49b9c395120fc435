//! Top panel: editable title, month navigation and event transfer buttons.

use chrono::Local;
use egui::RichText;

use super::CalendarApp;

/// In-progress edit of the app title.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) struct TitleEditor {
    pub buffer: String,
    focus_requested: bool,
}

/// What to do with the title editor after this frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) enum TitleEditOutcome {
    Editing,
    Commit(String),
    Revert,
}

impl TitleEditor {
    pub fn new(current: &str) -> Self {
        Self {
            buffer: current.to_string(),
            focus_requested: false,
        }
    }

    /// Enter and focus loss both commit; Escape discards the edit.
    pub fn resolve(&self, lost_focus: bool, escape_pressed: bool) -> TitleEditOutcome {
        if escape_pressed {
            TitleEditOutcome::Revert
        } else if lost_focus {
            TitleEditOutcome::Commit(self.buffer.clone())
        } else {
            TitleEditOutcome::Editing
        }
    }
}

impl CalendarApp {
    pub(super) fn render_header(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            ui.add_space(6.0);
            ui.horizontal(|ui| {
                self.render_title(ui);

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui
                        .button("Import")
                        .on_hover_text("Replace all events with a JSON file")
                        .clicked()
                    {
                        self.import_events();
                    }
                    if ui
                        .button("Export")
                        .on_hover_text("Save all events as JSON")
                        .clicked()
                    {
                        self.export_events();
                    }
                });
            });

            ui.add_space(4.0);
            ui.horizontal(|ui| {
                if ui.button("◀").on_hover_text("Previous month").clicked() {
                    self.navigate_previous();
                }
                if ui.button("Today").clicked() {
                    self.jump_to_today();
                }
                if ui.button("▶").on_hover_text("Next month").clicked() {
                    self.navigate_next();
                }

                ui.add_space(12.0);
                let label = self
                    .view
                    .grid()
                    .map(|grid| grid.label())
                    .unwrap_or_default();
                ui.heading(label);
            });
            ui.add_space(6.0);
        });
    }

    fn render_title(&mut self, ui: &mut egui::Ui) {
        let Some(editor) = self.title_editor.as_mut() else {
            let today = Local::now().date_naive();
            ui.label(RichText::new(self.title.header(today)).heading().strong());
            if ui.small_button("✏").on_hover_text("Rename").clicked() {
                self.title_editor = Some(TitleEditor::new(self.title.as_str()));
            }
            return;
        };

        let response = ui.add(
            egui::TextEdit::singleline(&mut editor.buffer)
                .desired_width(280.0)
                .hint_text("Personal Calendar"),
        );
        if !editor.focus_requested {
            response.request_focus();
            editor.focus_requested = true;
        }

        let escape_pressed = ui.input(|i| i.key_pressed(egui::Key::Escape));
        match editor.resolve(response.lost_focus(), escape_pressed) {
            TitleEditOutcome::Editing => {}
            TitleEditOutcome::Revert => {
                self.title_editor = None;
            }
            TitleEditOutcome::Commit(input) => {
                self.title_editor = None;
                self.commit_title(&input);
            }
        }
    }

    fn commit_title(&mut self, input: &str) {
        match self.context.title_service().set(input) {
            Ok(title) => self.title = title,
            Err(e) => {
                log::error!("Failed to save title: {:#}", e);
                self.toast_manager.error("Failed to save title");
            }
        }
    }
}
