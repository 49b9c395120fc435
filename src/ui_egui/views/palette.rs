use egui::Color32;

use crate::models::event::DEFAULT_EVENT_COLOR;

fn with_alpha(color: Color32, alpha: u8) -> Color32 {
    Color32::from_rgba_unmultiplied(color.r(), color.g(), color.b(), alpha)
}

fn blend(a: Color32, b: Color32, t: f32) -> Color32 {
    let t = t.clamp(0.0, 1.0);
    let lerp = |c1: u8, c2: u8| -> u8 { ((c1 as f32 * (1.0 - t)) + (c2 as f32 * t)).round() as u8 };
    Color32::from_rgb(lerp(a.r(), b.r()), lerp(a.g(), b.g()), lerp(a.b(), b.b()))
}

/// Parse a hex color string (`#RRGGBB`, `RRGGBB` or `#RGB`) into a `Color32`.
pub fn parse_color(hex: &str) -> Option<Color32> {
    let hex = hex.trim().trim_start_matches('#');

    match hex.len() {
        6 => {
            let r = u8::from_str_radix(hex.get(0..2)?, 16).ok()?;
            let g = u8::from_str_radix(hex.get(2..4)?, 16).ok()?;
            let b = u8::from_str_radix(hex.get(4..6)?, 16).ok()?;
            Some(Color32::from_rgb(r, g, b))
        }
        3 => {
            let r = u8::from_str_radix(hex.get(0..1)?, 16).ok()? * 17;
            let g = u8::from_str_radix(hex.get(1..2)?, 16).ok()? * 17;
            let b = u8::from_str_radix(hex.get(2..3)?, 16).ok()? * 17;
            Some(Color32::from_rgb(r, g, b))
        }
        _ => None,
    }
}

/// Render a color as lowercase `#rrggbb`.
pub fn to_hex(color: Color32) -> String {
    format!("#{:02x}{:02x}{:02x}", color.r(), color.g(), color.b())
}

/// Color for an event chip, falling back to the default event color.
pub fn event_color(color: Option<&str>) -> Color32 {
    color
        .and_then(parse_color)
        .or_else(|| parse_color(DEFAULT_EVENT_COLOR))
        .unwrap_or(Color32::from_rgb(37, 99, 235))
}

#[derive(Clone, Copy)]
pub(crate) struct CalendarCellPalette {
    pub regular_bg: Color32,
    pub outside_bg: Color32,
    pub today_bg: Color32,
    pub border: Color32,
    pub today_border: Color32,
    pub text: Color32,
    pub outside_text: Color32,
    pub hover_border: Color32,
    pub header_bg: Color32,
    pub header_text: Color32,
}

impl CalendarCellPalette {
    pub fn from_visuals(visuals: &egui::Visuals) -> Self {
        let accent = event_color(None);
        let base = visuals.extreme_bg_color;
        let panel = visuals.panel_fill;
        let text = visuals.text_color();

        Self {
            regular_bg: base,
            outside_bg: blend(base, panel, 0.6),
            today_bg: blend(base, accent, if visuals.dark_mode { 0.25 } else { 0.12 }),
            border: visuals.widgets.noninteractive.bg_stroke.color,
            today_border: accent,
            text,
            outside_text: with_alpha(text, 110),
            hover_border: with_alpha(accent, if visuals.dark_mode { 160 } else { 120 }),
            header_bg: blend(panel, accent, 0.15),
            header_text: text,
        }
    }
}
