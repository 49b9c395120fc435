use chrono::NaiveDate;
use egui::{Margin, Stroke, Vec2};

use super::palette::CalendarCellPalette;
use crate::models::date_key::DateKey;
use crate::models::event::EventMap;
use crate::utils::date::{weekday_headings, MonthGrid, DAYS_PER_WEEK, GRID_CELLS};

const MIN_ROW_HEIGHT: f32 = 70.0;

/// Action returned from the month view
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MonthViewAction {
    /// No action
    None,
    /// Open the add dialog for a date
    AddEvent(DateKey),
    /// Open the edit dialog for an existing event
    EditEvent(DateKey, String),
}

pub struct MonthView;

impl MonthView {
    pub fn show(
        ui: &mut egui::Ui,
        grid: &MonthGrid,
        events: &EventMap,
        today: NaiveDate,
    ) -> MonthViewAction {
        let mut action = MonthViewAction::None;
        let palette = CalendarCellPalette::from_visuals(ui.visuals());

        let spacing = 2.0;
        let total_spacing = spacing * (DAYS_PER_WEEK as f32 - 1.0);
        let col_width = ((ui.available_width() - total_spacing) / DAYS_PER_WEEK as f32).max(40.0);

        egui::Grid::new("month_header_grid")
            .spacing([spacing, spacing])
            .show(ui, |ui| {
                for name in weekday_headings() {
                    ui.allocate_ui_with_layout(
                        Vec2::new(col_width, 28.0),
                        egui::Layout::centered_and_justified(egui::Direction::TopDown),
                        |ui| {
                            egui::Frame::none()
                                .fill(palette.header_bg)
                                .rounding(egui::Rounding::same(6.0))
                                .stroke(Stroke::new(1.0, palette.border))
                                .inner_margin(Margin::symmetric(4.0, 6.0))
                                .show(ui, |ui| {
                                    ui.label(
                                        egui::RichText::new(name)
                                            .size(13.0)
                                            .color(palette.header_text)
                                            .strong(),
                                    );
                                });
                        },
                    );
                }
                ui.end_row();
            });

        let rows = (GRID_CELLS / DAYS_PER_WEEK) as f32;
        let row_height =
            ((ui.available_height() - spacing * (rows - 1.0)) / rows).max(MIN_ROW_HEIGHT);

        egui::Grid::new("month_grid")
            .spacing([spacing, spacing])
            .show(ui, |ui| {
                for week in grid.weeks() {
                    for &date in week {
                        // Spillover past year 9999 (or before year 0) has no key
                        let Ok(key) = DateKey::try_from(date) else {
                            ui.allocate_exact_size(
                                Vec2::new(col_width, row_height),
                                egui::Sense::hover(),
                            );
                            continue;
                        };
                        let cell_action = Self::render_day_cell(
                            ui,
                            key,
                            grid.is_outside(date),
                            date == today,
                            events.list_for_date(&key),
                            palette,
                            col_width,
                            row_height,
                        );
                        if cell_action != MonthViewAction::None {
                            action = cell_action;
                        }
                    }
                    ui.end_row();
                }
            });

        action
    }
}
