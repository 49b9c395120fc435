use egui::{Color32, RichText};

use super::state::{EventDialog, EventFields, PRESET_COLORS};
use crate::ui_egui::views::palette::{parse_color, to_hex};

/// Button pressed in the dialog this frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogAction {
    None,
    Save,
    Cancel,
    Delete,
}

const FORM_LABEL_WIDTH: f32 = 90.0;

pub fn render_event_dialog(ctx: &egui::Context, dialog: &mut EventDialog) -> DialogAction {
    let mut action = DialogAction::None;
    let mut window_open = true;

    let heading = dialog.heading();
    let is_editing = dialog.is_editing();
    let date_label = dialog
        .date()
        .map(|date| date.date().format("%A, %B %-d, %Y").to_string())
        .unwrap_or_default();
    let error_message = dialog.error_message.clone();

    let Some(fields) = dialog.fields_mut() else {
        return DialogAction::None;
    };

    egui::Window::new(heading)
        .open(&mut window_open)
        .collapsible(false)
        .resizable(false)
        .default_width(420.0)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.label(RichText::new(date_label).weak());
            ui.add_space(6.0);

            if let Some(error) = &error_message {
                ui.colored_label(Color32::RED, RichText::new(error).strong());
                ui.add_space(6.0);
            }

            let title_submitted = render_fields(ui, fields);

            ui.add_space(12.0);
            ui.separator();
            ui.add_space(8.0);

            action = render_action_buttons(ui, fields, is_editing);
            if action == DialogAction::None && title_submitted {
                action = DialogAction::Save;
            }
        });

    if !window_open && action == DialogAction::None {
        action = DialogAction::Cancel;
    }

    action
}

/// Returns `true` when Enter was pressed in the title field.
fn render_fields(ui: &mut egui::Ui, fields: &mut EventFields) -> bool {
    let mut title_submitted = false;

    labeled_row(
        ui,
        if fields.title.trim().is_empty() {
            RichText::new("Title:")
                .strong()
                .color(Color32::from_rgb(255, 150, 150))
        } else {
            RichText::new("Title:").strong()
        },
        |ui| {
            let response = ui.add(
                egui::TextEdit::singleline(&mut fields.title)
                    .desired_width(260.0)
                    .hint_text("Event title"),
            );
            title_submitted =
                response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
        },
    );

    labeled_row(ui, "Description:", |ui| {
        ui.add_sized(
            [260.0, 80.0],
            egui::TextEdit::multiline(&mut fields.description),
        );
    });

    labeled_row(ui, "Color:", |ui| {
        ui.add(egui::TextEdit::singleline(&mut fields.color).desired_width(80.0));

        if let Some(mut color) = parse_color(&fields.color) {
            if ui.color_edit_button_srgba(&mut color).changed() {
                fields.color = to_hex(color);
            }
        }
    });

    labeled_row(ui, "Presets:", |ui| {
        ui.horizontal_wrapped(|ui| {
            for (name, hex) in PRESET_COLORS {
                let swatch = parse_color(hex).unwrap_or(Color32::GRAY);
                let selected = fields.color.eq_ignore_ascii_case(hex);
                let text = RichText::new(format!("● {}", name)).color(swatch);
                if ui.selectable_label(selected, text).clicked() {
                    fields.color = hex.to_string();
                }
            }
        });
    });

    title_submitted
}

fn render_action_buttons(ui: &mut egui::Ui, fields: &EventFields, is_editing: bool) -> DialogAction {
    let mut action = DialogAction::None;

    indented_row(ui, |ui| {
        let can_save = !fields.title.trim().is_empty();
        let save_button = egui::Button::new("Save").fill(if can_save {
            Color32::from_rgb(70, 120, 200)
        } else {
            Color32::from_gray(60)
        });

        ui.add_enabled_ui(can_save, |ui| {
            if ui.add(save_button).clicked() {
                action = DialogAction::Save;
            }
        });

        if !can_save {
            ui.label(
                RichText::new("(Title required)")
                    .small()
                    .color(Color32::from_gray(150)),
            );
        }

        if ui.button("Cancel").clicked() {
            action = DialogAction::Cancel;
        }

        if is_editing {
            ui.add_space(20.0);
            if ui
                .button(RichText::new("Delete").color(Color32::RED))
                .clicked()
            {
                action = DialogAction::Delete;
            }
        }
    });

    if ui.input(|i| i.key_pressed(egui::Key::Escape)) {
        action = DialogAction::Cancel;
    }

    action
}

fn labeled_row<F>(ui: &mut egui::Ui, label: impl Into<egui::WidgetText>, add_contents: F)
where
    F: FnOnce(&mut egui::Ui),
{
    ui.horizontal(|ui| {
        render_form_label(ui, label);
        add_contents(ui);
    });
}

fn render_form_label(ui: &mut egui::Ui, label: impl Into<egui::WidgetText>) {
    let text = label.into();
    ui.allocate_ui_with_layout(
        egui::Vec2::new(FORM_LABEL_WIDTH, 24.0),
        egui::Layout::right_to_left(egui::Align::Center),
        move |ui| {
            ui.label(text);
        },
    );
}

fn indented_row<F>(ui: &mut egui::Ui, add_contents: F)
where
    F: FnOnce(&mut egui::Ui),
{
    ui.horizontal(|ui| {
        ui.add_space(FORM_LABEL_WIDTH);
        add_contents(ui);
    });
}
