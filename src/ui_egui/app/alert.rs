//! Blocking alert for errors the user has to acknowledge.
//!
//! While an alert is pending a backdrop covers the window and swallows
//! pointer input until the user presses OK, Enter or Escape.

use egui::{Color32, Context, RichText};

/// Message shown by a pending alert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub title: String,
    pub message: String,
}

#[derive(Debug, Default)]
pub struct AlertDialogState {
    pending: Option<Alert>,
}

impl AlertDialogState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Raise an alert. A newer alert replaces one that is still showing.
    pub fn show(&mut self, title: impl Into<String>, message: impl Into<String>) {
        self.pending = Some(Alert {
            title: title.into(),
            message: message.into(),
        });
    }

    pub fn is_open(&self) -> bool {
        self.pending.is_some()
    }

    pub fn pending(&self) -> Option<&Alert> {
        self.pending.as_ref()
    }

    pub fn dismiss(&mut self) {
        self.pending = None;
    }

    pub fn render(&mut self, ctx: &Context) {
        let Some(alert) = self.pending() else {
            return;
        };

        let screen_rect = ctx.screen_rect();
        egui::Area::new(egui::Id::new("alert_backdrop"))
            .fixed_pos(screen_rect.min)
            .order(egui::Order::Foreground)
            .show(ctx, |ui| {
                ui.painter()
                    .rect_filled(screen_rect, 0.0, Color32::from_black_alpha(120));
                ui.allocate_rect(screen_rect, egui::Sense::click_and_drag());
            });

        let mut dismissed = false;

        // Tooltip order keeps the box above its own backdrop
        egui::Area::new(egui::Id::new("alert_box"))
            .order(egui::Order::Tooltip)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                egui::Frame::window(ui.style()).show(ui, |ui| {
                    ui.set_min_width(300.0);
                    ui.set_max_width(400.0);

                    ui.horizontal(|ui| {
                        ui.label(
                            RichText::new("⚠")
                                .size(24.0)
                                .color(Color32::from_rgb(220, 150, 50)),
                        );
                        ui.vertical(|ui| {
                            ui.label(RichText::new(&alert.title).strong());
                            ui.label(&alert.message);
                        });
                    });

                    ui.add_space(10.0);
                    ui.separator();
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui.button("OK").clicked() {
                            dismissed = true;
                        }
                    });
                });
            });

        if ctx.input(|i| i.key_pressed(egui::Key::Escape) || i.key_pressed(egui::Key::Enter)) {
            dismissed = true;
        }

        if dismissed {
            self.dismiss();
        }
    }
}
