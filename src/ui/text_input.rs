//! Single-line text input for the floor editor form

use macroquad::prelude::*;
use super::{Rect, UiContext};

/// State for a text input field
#[derive(Debug, Clone, Default)]
pub struct TextInputState {
    /// The text content
    pub text: String,
    /// Cursor position (byte index)
    pub cursor: usize,
}

impl TextInputState {
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        Self {
            cursor: text.len(),
            text,
        }
    }

    /// Replace the content and move the cursor to the end
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.cursor = self.text.len();
    }

    fn prev_boundary(&self) -> usize {
        self.text[..self.cursor]
            .char_indices()
            .next_back()
            .map(|(i, _)| i)
            .unwrap_or(0)
    }

    fn next_boundary(&self) -> usize {
        self.text[self.cursor..]
            .chars()
            .next()
            .map(|c| self.cursor + c.len_utf8())
            .unwrap_or(self.text.len())
    }

    /// Feed this frame's keyboard input into the field.
    /// Call only for the focused field.
    pub fn handle_input(&mut self) {
        while let Some(ch) = get_char_pressed() {
            if !ch.is_control() {
                self.text.insert(self.cursor, ch);
                self.cursor += ch.len_utf8();
            }
        }
        if is_key_pressed(KeyCode::Backspace) && self.cursor > 0 {
            let prev = self.prev_boundary();
            self.text.drain(prev..self.cursor);
            self.cursor = prev;
        }
        if is_key_pressed(KeyCode::Delete) && self.cursor < self.text.len() {
            let next = self.next_boundary();
            self.text.drain(self.cursor..next);
        }
        if is_key_pressed(KeyCode::Left) {
            self.cursor = self.prev_boundary();
        }
        if is_key_pressed(KeyCode::Right) && self.cursor < self.text.len() {
            self.cursor = self.next_boundary();
        }
        if is_key_pressed(KeyCode::Home) {
            self.cursor = 0;
        }
        if is_key_pressed(KeyCode::End) {
            self.cursor = self.text.len();
        }
    }
}

/// Draw a text field; returns true when it was clicked (so the form can
/// move focus to it)
pub fn text_input(
    ctx: &mut UiContext,
    rect: Rect,
    state: &TextInputState,
    focused: bool,
    accent: Color,
) -> bool {
    let clicked = ctx.mouse.clicked(&rect);

    draw_rectangle(rect.x, rect.y, rect.w, rect.h, Color::new(0.16, 0.18, 0.22, 1.0));
    let border = if focused {
        accent
    } else {
        Color::new(0.35, 0.38, 0.42, 1.0)
    };
    draw_rectangle_lines(rect.x, rect.y, rect.w, rect.h, 2.0, border);

    let font_size = 16.0;
    let pad = 8.0;
    let avail = rect.w - pad * 2.0;

    // Show the trailing portion when the content overflows the field
    let mut visible_start = 0;
    while visible_start < state.text.len() {
        let width = measure_text(&state.text[visible_start..], None, font_size as u16, 1.0).width;
        if width <= avail {
            break;
        }
        visible_start += state.text[visible_start..]
            .chars()
            .next()
            .map(|c| c.len_utf8())
            .unwrap_or(1);
    }
    let visible = &state.text[visible_start..];
    let text_y = (rect.y + (rect.h + font_size * 0.6) * 0.5).round();
    draw_text(visible, (rect.x + pad).round(), text_y, font_size, WHITE);

    // Blinking cursor
    if focused && (get_time() * 2.0) as i64 % 2 == 0 {
        let upto = state.cursor.max(visible_start) - visible_start;
        let cursor_x = rect.x
            + pad
            + measure_text(&visible[..upto.min(visible.len())], None, font_size as u16, 1.0).width;
        draw_line(
            cursor_x,
            rect.y + 5.0,
            cursor_x,
            rect.bottom() - 5.0,
            1.0,
            WHITE,
        );
    }

    clicked
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_text_moves_cursor_to_end() {
        let mut state = TextInputState::new("abc");
        assert_eq!(state.cursor, 3);
        state.set_text("floor");
        assert_eq!(state.cursor, 5);
    }

    #[test]
    fn test_boundaries_handle_utf8() {
        let state = TextInputState::new("né");
        // Cursor at end; previous boundary is the start of the 2-byte char
        assert_eq!(state.prev_boundary(), 1);
    }
}
