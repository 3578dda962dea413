//! Landing gate
//!
//! The experience starts behind an Enter screen. Browsers refuse autoplay
//! before a user gesture, and the native build keeps the same ritual: no
//! audio or movement until the user steps in.

use macroquad::prelude::*;
use crate::prefs::ThemePalette;
use crate::ui::{draw_glow_panel, text_button, wrap_text, ButtonVisual, Rect, UiContext};

const BLURB: &str = "An immersive audio-visual experience. Each floor features a \
unique electronic track. Please enable audio for the best experience.";

/// Draw the landing screen; returns true when the user enters
pub fn draw_landing(ctx: &mut UiContext, screen: Rect, palette: &ThemePalette) -> bool {
    draw_rectangle(screen.x, screen.y, screen.w, screen.h, palette.backdrop);

    let card = screen.centered(460.0_f32.min(screen.w - 40.0), 260.0);
    draw_glow_panel(card, palette);

    let inner = card.pad(28.0);
    let title = "Synthwave Elevator";
    let title_size = 30.0;
    let title_dims = measure_text(title, None, title_size as u16, 1.0);
    draw_text(
        title,
        (inner.center_x() - title_dims.width * 0.5).round(),
        inner.y + 30.0,
        title_size,
        palette.text,
    );

    let mut y = inner.y + 62.0;
    for line in wrap_text(BLURB, 15.0, inner.w) {
        draw_text(&line, inner.x, y, 15.0, Color::new(0.8, 0.8, 0.85, 1.0));
        y += 20.0;
    }

    let button = Rect::new(inner.center_x() - 70.0, inner.bottom() - 44.0, 140.0, 40.0);
    text_button(
        ctx,
        button,
        "Enter",
        18.0,
        ButtonVisual::accent(palette.accent),
        true,
    )
}
