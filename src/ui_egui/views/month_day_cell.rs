//! Day cell rendering for the month view.
//!
//! Renders the date number, the add button and one chip per event, and maps
//! pointer interaction onto a [`MonthViewAction`].

use egui::{Color32, Pos2, Rect, Sense, Stroke, Vec2};

use super::month_view::{MonthView, MonthViewAction};
use super::palette::{event_color, CalendarCellPalette};
use crate::models::date_key::DateKey;
use crate::models::event::EventRecord;

const CHIP_HEIGHT: f32 = 16.0;
const CHIP_SPACING: f32 = 2.0;
const HEADER_HEIGHT: f32 = 22.0;

impl MonthView {
    /// Truncate text to fit within a given pixel width, using binary search
    /// and appending "…" when truncation is needed.
    pub(super) fn truncate_single_line_to_width(
        ui: &egui::Ui,
        text: &str,
        font_id: &egui::FontId,
        color: Color32,
        max_width: f32,
    ) -> String {
        if max_width <= 0.0 {
            return String::new();
        }

        let measure_width = |candidate: &str| {
            let layout_job = egui::text::LayoutJob::simple(
                candidate.to_string(),
                font_id.clone(),
                color,
                f32::INFINITY,
            );
            ui.fonts(|f| f.layout_job(layout_job).size().x)
        };

        if measure_width(text) <= max_width {
            return text.to_string();
        }

        let ellipsis = "…";
        if measure_width(ellipsis) > max_width {
            return String::new();
        }

        let mut char_boundaries: Vec<usize> = text.char_indices().map(|(idx, _)| idx).collect();
        char_boundaries.push(text.len());

        let mut low = 0usize;
        let mut high = char_boundaries.len().saturating_sub(1);

        while low < high {
            let mid = (low + high).div_ceil(2);
            let candidate = format!("{}{}", &text[..char_boundaries[mid]], ellipsis);

            if measure_width(&candidate) <= max_width {
                low = mid;
            } else {
                high = mid.saturating_sub(1);
            }
        }

        if low == 0 {
            ellipsis.to_string()
        } else {
            format!("{}{}", &text[..char_boundaries[low]], ellipsis)
        }
    }

    #[allow(clippy::too_many_arguments)]
    pub(super) fn render_day_cell(
        ui: &mut egui::Ui,
        key: DateKey,
        is_outside: bool,
        is_today: bool,
        events: &[EventRecord],
        palette: CalendarCellPalette,
        col_width: f32,
        row_height: f32,
    ) -> MonthViewAction {
        let (rect, response) =
            ui.allocate_exact_size(Vec2::new(col_width, row_height), Sense::click());

        let bg_color = if is_today {
            palette.today_bg
        } else if is_outside {
            palette.outside_bg
        } else {
            palette.regular_bg
        };
        ui.painter().rect_filled(rect, 2.0, bg_color);

        let border_color = if is_today {
            palette.today_border
        } else {
            palette.border
        };
        ui.painter()
            .rect_stroke(rect, 2.0, Stroke::new(1.0, border_color));

        if response.hovered() {
            ui.painter()
                .rect_stroke(rect, 2.0, Stroke::new(2.0, palette.hover_border));
        }

        let text_color = if is_outside {
            palette.outside_text
        } else {
            palette.text
        };
        ui.painter().text(
            Pos2::new(rect.left() + 5.0, rect.top() + 4.0),
            egui::Align2::LEFT_TOP,
            key.day().to_string(),
            egui::FontId::proportional(14.0),
            text_color,
        );

        // Add button in the top-right corner
        let add_rect = Rect::from_min_size(
            Pos2::new(rect.right() - 20.0, rect.top() + 3.0),
            Vec2::new(16.0, 16.0),
        );
        let pointer_pos = ui.input(|i| i.pointer.hover_pos());
        let add_hovered = pointer_pos.is_some_and(|pos| add_rect.contains(pos));
        if response.hovered() || add_hovered {
            if add_hovered {
                ui.painter()
                    .rect_filled(add_rect, 3.0, palette.hover_border);
                ui.ctx().set_cursor_icon(egui::CursorIcon::PointingHand);
            }
            ui.painter().text(
                add_rect.center(),
                egui::Align2::CENTER_CENTER,
                "+",
                egui::FontId::proportional(14.0),
                text_color,
            );
        }

        let mut hitboxes: Vec<(Rect, &EventRecord)> = Vec::new();
        let mut y_offset = HEADER_HEIGHT;
        let visible = Self::visible_chip_count(row_height, events.len());

        for event in events.iter().take(visible) {
            let chip_rect = Rect::from_min_size(
                Pos2::new(rect.left() + 3.0, rect.top() + y_offset),
                Vec2::new(rect.width() - 6.0, CHIP_HEIGHT),
            );
            let chip_hovered = pointer_pos.is_some_and(|pos| chip_rect.contains(pos));

            if chip_hovered {
                ui.painter()
                    .rect_filled(chip_rect, 3.0, palette.hover_border);
                ui.ctx().set_cursor_icon(egui::CursorIcon::PointingHand);
            }

            let dot = event_color(event.color.as_deref());
            ui.painter().circle_filled(
                Pos2::new(chip_rect.left() + 6.0, chip_rect.center().y),
                4.0,
                dot,
            );

            let font_id = egui::FontId::proportional(11.0);
            let title = Self::truncate_single_line_to_width(
                ui,
                &event.title,
                &font_id,
                palette.text,
                chip_rect.width() - 16.0,
            );
            ui.painter().text(
                Pos2::new(chip_rect.left() + 13.0, chip_rect.center().y),
                egui::Align2::LEFT_CENTER,
                title,
                font_id,
                palette.text,
            );

            hitboxes.push((chip_rect, event));
            y_offset += CHIP_HEIGHT + CHIP_SPACING;
        }

        if events.len() > visible {
            ui.painter().text(
                Pos2::new(rect.left() + 5.0, rect.top() + y_offset),
                egui::Align2::LEFT_TOP,
                format!("+{} more", events.len() - visible),
                egui::FontId::proportional(10.0),
                Color32::GRAY,
            );
        }

        let hovered_event = pointer_pos.and_then(|pos| {
            hitboxes
                .iter()
                .find(|(hit_rect, _)| hit_rect.contains(pos))
                .map(|(_, event)| *event)
        });

        if let Some(event) = hovered_event {
            if !event.description_text().is_empty() {
                response.clone().on_hover_ui_at_pointer(|ui| {
                    ui.label(egui::RichText::new(&event.title).strong());
                    ui.label(event.description_text());
                });
            }
        } else if response.hovered() && !add_hovered {
            response
                .clone()
                .on_hover_text("Double-click to add an event");
        }

        if response.double_clicked() && hovered_event.is_none() {
            return MonthViewAction::AddEvent(key);
        }

        if response.clicked() {
            if add_hovered {
                return MonthViewAction::AddEvent(key);
            }
            if let Some(event) = hovered_event {
                return MonthViewAction::EditEvent(key, event.id.clone());
            }
        }

        MonthViewAction::None
    }

    /// Number of event chips that fit in a cell, reserving a line for the
    /// overflow label when not everything fits.
    pub(super) fn visible_chip_count(row_height: f32, event_count: usize) -> usize {
        let available = (row_height - HEADER_HEIGHT).max(0.0);
        let fit = (available / (CHIP_HEIGHT + CHIP_SPACING)).floor() as usize;
        if event_count <= fit {
            event_count
        } else {
            fit.saturating_sub(1)
        }
    }
}
