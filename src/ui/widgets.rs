//! Basic UI widgets

use macroquad::prelude::*;
use super::{Rect, UiContext};
use crate::prefs::ThemePalette;

/// Colors for a text button in its three interactive states
#[derive(Debug, Clone, Copy)]
pub struct ButtonVisual {
    pub fill: Color,
    pub fill_hover: Color,
    pub text: Color,
}

impl ButtonVisual {
    /// Neutral gray button with themed text
    pub fn neutral(text: Color) -> Self {
        Self {
            fill: Color::new(0.216, 0.255, 0.318, 1.0),
            fill_hover: Color::new(0.28, 0.32, 0.38, 1.0),
            text,
        }
    }

    /// Filled accent button with dark text
    pub fn accent(accent: Color) -> Self {
        Self {
            fill: accent,
            fill_hover: Color::new(
                (accent.r + 0.12).min(1.0),
                (accent.g + 0.12).min(1.0),
                (accent.b + 0.12).min(1.0),
                accent.a,
            ),
            text: Color::new(0.07, 0.09, 0.12, 1.0),
        }
    }
}

/// Draw a text button, returns true if clicked. Disabled buttons draw
/// dimmed and swallow input.
pub fn text_button(
    ctx: &mut UiContext,
    rect: Rect,
    label: &str,
    font_size: f32,
    visual: ButtonVisual,
    enabled: bool,
) -> bool {
    let _id = ctx.next_id();
    let hovered = enabled && ctx.mouse.inside(&rect);
    let fill = if !enabled {
        Color::new(0.13, 0.15, 0.18, 1.0)
    } else if hovered {
        visual.fill_hover
    } else {
        visual.fill
    };
    draw_rounded_rect(rect, 5.0, fill);

    let text_color = if enabled {
        visual.text
    } else {
        Color::new(0.42, 0.45, 0.5, 1.0)
    };
    draw_text_centered(label, &rect, font_size, text_color);

    enabled && ctx.mouse.clicked(&rect)
}

/// Horizontal value slider; returns the new value while dragged
pub fn slider(
    ctx: &mut UiContext,
    rect: Rect,
    value: f32,
    min: f32,
    max: f32,
    step: f32,
    accent: Color,
) -> Option<f32> {
    let id = ctx.next_id();

    if ctx.mouse.clicked(&rect) {
        ctx.start_drag(id);
    }

    let track_h = 6.0;
    let track = Rect::new(rect.x, rect.center_y() - track_h * 0.5, rect.w, track_h);
    draw_rounded_rect(track, 3.0, Color::new(0.216, 0.255, 0.318, 1.0));

    let t = ((value - min) / (max - min)).clamp(0.0, 1.0);
    let filled = Rect::new(track.x, track.y, track.w * t, track.h);
    draw_rounded_rect(filled, 3.0, accent);

    let thumb_x = track.x + track.w * t;
    draw_circle(thumb_x, rect.center_y(), 8.0, accent);

    if ctx.is_dragging(id) && ctx.mouse.left_down {
        let raw = min + (ctx.mouse.x - rect.x) / rect.w * (max - min);
        let stepped = (raw / step).round() * step;
        let next = stepped.clamp(min, max);
        if (next - value).abs() > f32::EPSILON {
            return Some(next);
        }
    }
    None
}

/// Translucent themed panel with border and a soft glow behind it
pub fn draw_glow_panel(rect: Rect, palette: &ThemePalette) {
    let glow = rect.pad(-6.0);
    draw_rounded_rect(glow, 12.0, palette.glow);
    draw_rounded_rect(rect, 8.0, palette.panel);
    draw_rectangle_lines(rect.x, rect.y, rect.w, rect.h, 2.0, palette.border);
}

/// Draw a rounded rectangle (approximated with overlapping rects + corner circles)
pub fn draw_rounded_rect(rect: Rect, r: f32, color: Color) {
    let r = r.min(rect.w * 0.5).min(rect.h * 0.5);
    draw_rectangle(rect.x + r, rect.y, rect.w - r * 2.0, rect.h, color);
    draw_rectangle(rect.x, rect.y + r, rect.w, rect.h - r * 2.0, color);
    draw_circle(rect.x + r, rect.y + r, r, color);
    draw_circle(rect.right() - r, rect.y + r, r, color);
    draw_circle(rect.x + r, rect.bottom() - r, r, color);
    draw_circle(rect.right() - r, rect.bottom() - r, r, color);
}

/// Draw text centered in a rect
pub fn draw_text_centered(text: &str, rect: &Rect, font_size: f32, color: Color) {
    let dims = measure_text(text, None, font_size as u16, 1.0);
    let x = (rect.center_x() - dims.width * 0.5).round();
    let y = (rect.center_y() + dims.height * 0.5).round();
    draw_text(text, x, y, font_size, color);
}

/// Wrap text to fit within a pixel width, preserving explicit newlines.
/// Width is approximated per character to avoid measure_text in a loop.
pub fn wrap_text(text: &str, font_size: f32, max_width: f32) -> Vec<String> {
    let mut lines = Vec::new();
    let char_width = font_size * 0.55;

    for paragraph in text.split('\n') {
        let words: Vec<&str> = paragraph.split_whitespace().collect();
        if words.is_empty() {
            lines.push(String::new());
            continue;
        }
        let mut current = String::new();
        for word in words {
            let candidate = if current.is_empty() {
                word.to_string()
            } else {
                format!("{} {}", current, word)
            };
            if candidate.len() as f32 * char_width <= max_width || current.is_empty() {
                current = candidate;
            } else {
                lines.push(current);
                current = word.to_string();
            }
        }
        if !current.is_empty() {
            lines.push(current);
        }
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_text_preserves_paragraphs() {
        let lines = wrap_text("one two\n\nthree", 16.0, 500.0);
        assert_eq!(lines, vec!["one two", "", "three"]);
    }

    #[test]
    fn test_wrap_text_breaks_long_lines() {
        let lines = wrap_text("aaaa bbbb cccc", 16.0, 50.0);
        assert!(lines.len() > 1);
        // No word is lost
        assert_eq!(lines.join(" "), "aaaa bbbb cccc");
    }
}
