//! Control panel
//!
//! The cab's command surface: current-floor display with direction arrows
//! and the arrival pulse, the floor button grid, the "Now Playing" readout,
//! and the settings cluster (speed, theme, SFX, floor management). Drawing
//! returns an action for the main loop to dispatch.

use macroquad::prelude::*;
use crate::floor::FloorRegistry;
use crate::prefs::{Preferences, Theme, SPEED_MAX, SPEED_MIN, SPEED_STEP};
use crate::travel::{Direction, TravelSequencer};
use crate::ui::{
    draw_glow_panel, draw_rounded_rect, draw_text_centered, slider, text_button, ButtonVisual,
    Rect, UiContext,
};

/// What the user asked for this frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PanelAction {
    None,
    /// A floor button (or numeric key, routed by the main loop) was pressed
    SelectFloor(i32),
    ToggleSfx,
    SetSpeed(f32),
    SetTheme(Theme),
    ManageFloors,
}

const SECTION_BG: Color = Color::new(0.122, 0.161, 0.216, 1.0);
const SECTION_BORDER: Color = Color::new(0.216, 0.255, 0.318, 1.0);
const LABEL_DIM: Color = Color::new(0.6, 0.6, 0.65, 1.0);
const GRID_COLS: usize = 3;
const BUTTON_H: f32 = 48.0;
const GAP: f32 = 8.0;

pub fn draw_control_panel(
    ctx: &mut UiContext,
    area: Rect,
    registry: &FloorRegistry,
    sequencer: &TravelSequencer,
    prefs: &Preferences,
    now: f64,
) -> PanelAction {
    let palette = prefs.theme.palette();
    let mut action = PanelAction::None;

    let grid_rows = registry.len().div_ceil(GRID_COLS);
    let grid_h = grid_rows as f32 * (BUTTON_H + GAP);
    let panel_h = (40.0 + 120.0 + GAP + grid_h + 56.0 + GAP + 128.0).min(area.h);
    let panel_w = 420.0_f32.min(area.w - 24.0);
    let panel = area.centered(panel_w, panel_h);
    draw_glow_panel(panel, palette);

    let inner = panel.pad(20.0);
    let mut y = inner.y;

    // ── Current floor display ────────────────────────────────────────────
    let display = Rect::new(inner.x, y, inner.w, 120.0);
    draw_section(display);
    draw_text_centered("CURRENT FLOOR", &display.slice_top(28.0), 13.0, LABEL_DIM);

    let level_text = sequencer.current_level().to_string();
    let pulse = if sequencer.just_arrived(now) {
        0.55 + 0.45 * ((now * 6.0).sin() as f32)
    } else {
        1.0
    };
    let number_rect = Rect::new(display.x, display.y + 22.0, display.w, 64.0);
    let mut number_color = palette.text;
    number_color.a *= pulse.max(0.1);
    draw_text_centered(&level_text, &number_rect, 56.0, number_color);

    match sequencer.direction() {
        Direction::Up => draw_arrow_up(
            display.center_x() - 70.0,
            number_rect.center_y(),
            Color::new(0.3, 0.9, 0.4, pulse_blink(now)),
        ),
        Direction::Down => draw_arrow_down(
            display.center_x() + 70.0,
            number_rect.center_y(),
            Color::new(0.95, 0.3, 0.3, pulse_blink(now)),
        ),
        Direction::Idle => {}
    }

    let floor_name = registry
        .get(sequencer.current_level())
        .map_or("Unknown", |f| f.name.as_str());
    let name_rect = Rect::new(display.x, display.bottom() - 30.0, display.w, 24.0);
    draw_text_centered(floor_name, &name_rect, 14.0, LABEL_DIM);
    y = display.bottom() + GAP;

    // ── Floor buttons ────────────────────────────────────────────────────
    let col_w = (inner.w - GAP * (GRID_COLS - 1) as f32) / GRID_COLS as f32;
    for (index, floor) in registry.records().iter().enumerate() {
        let col = index % GRID_COLS;
        let row = index / GRID_COLS;
        let rect = Rect::new(
            inner.x + col as f32 * (col_w + GAP),
            y + row as f32 * (BUTTON_H + GAP),
            col_w,
            BUTTON_H,
        );
        let is_current = floor.level == sequencer.current_level();
        let enabled = !sequencer.is_moving() && !is_current;
        let visual = if is_current {
            ButtonVisual::accent(palette.accent)
        } else {
            ButtonVisual::neutral(palette.text)
        };
        if text_button(ctx, rect, &floor.level.to_string(), 22.0, visual, enabled) {
            action = PanelAction::SelectFloor(floor.level);
        }
    }
    y += grid_h;

    // ── Now playing ──────────────────────────────────────────────────────
    let music = Rect::new(inner.x, y, inner.w, 56.0);
    draw_section(music);
    let track_name = registry
        .get(sequencer.current_level())
        .and_then(|f| f.music.as_ref())
        .map(|m| m.original_name.as_str());
    let audible = track_name.is_some() && !sequencer.is_moving();
    draw_equalizer(music.x + 14.0, music.center_y(), audible, now, palette.text);
    draw_text(
        "Now Playing",
        music.x + 44.0,
        music.y + 24.0,
        15.0,
        WHITE,
    );
    draw_text(
        track_name.unwrap_or("Silence"),
        music.x + 44.0,
        music.y + 42.0,
        13.0,
        LABEL_DIM,
    );
    y = music.bottom() + GAP;

    // ── Settings ─────────────────────────────────────────────────────────
    let settings = Rect::new(inner.x, y, inner.w, inner.bottom() - y);
    draw_section(settings);
    let s = settings.pad(12.0);

    let half_w = (s.w - GAP) * 0.5;
    let manage = Rect::new(s.x, s.y, half_w, 30.0);
    if text_button(ctx, manage, "Manage Floors", 14.0, ButtonVisual::neutral(WHITE), true) {
        action = PanelAction::ManageFloors;
    }
    let sfx_label = if prefs.sfx_enabled { "SFX: On" } else { "SFX: Off" };
    let sfx = Rect::new(s.x + half_w + GAP, s.y, half_w, 30.0);
    if text_button(ctx, sfx, sfx_label, 14.0, ButtonVisual::neutral(WHITE), true) {
        action = PanelAction::ToggleSfx;
    }

    let speed_y = s.y + 42.0;
    draw_text("Speed", s.x, speed_y + 12.0, 13.0, LABEL_DIM);
    let slider_rect = Rect::new(s.x + 52.0, speed_y, s.w - 110.0, 18.0);
    if let Some(value) = slider(
        ctx,
        slider_rect,
        prefs.travel_speed,
        SPEED_MIN,
        SPEED_MAX,
        SPEED_STEP,
        palette.accent,
    ) {
        action = PanelAction::SetSpeed(value);
    }
    draw_text(
        &format!("{:.1}x", prefs.travel_speed),
        slider_rect.right() + 10.0,
        speed_y + 12.0,
        13.0,
        WHITE,
    );

    let theme_y = speed_y + 30.0;
    draw_text("Theme", s.x, theme_y + 18.0, 13.0, LABEL_DIM);
    let theme_rect = Rect::new(s.x + 52.0, theme_y, s.w - 52.0, 26.0);
    if text_button(
        ctx,
        theme_rect,
        prefs.theme.label(),
        14.0,
        ButtonVisual::neutral(palette.text),
        true,
    ) {
        action = PanelAction::SetTheme(prefs.theme.next());
    }

    action
}

fn draw_section(rect: Rect) {
    draw_rounded_rect(rect, 6.0, SECTION_BG);
    draw_rectangle_lines(rect.x, rect.y, rect.w, rect.h, 1.0, SECTION_BORDER);
}

fn pulse_blink(now: f64) -> f32 {
    0.5 + 0.5 * ((now * 8.0).sin() as f32).abs()
}

fn draw_arrow_up(cx: f32, cy: f32, color: Color) {
    draw_triangle(
        vec2(cx, cy - 12.0),
        vec2(cx - 10.0, cy + 8.0),
        vec2(cx + 10.0, cy + 8.0),
        color,
    );
}

fn draw_arrow_down(cx: f32, cy: f32, color: Color) {
    draw_triangle(
        vec2(cx - 10.0, cy - 8.0),
        vec2(cx + 10.0, cy - 8.0),
        vec2(cx, cy + 12.0),
        color,
    );
}

/// Three-bar equalizer, animated while a track is audible
fn draw_equalizer(x: f32, cy: f32, audible: bool, now: f64, color: Color) {
    for i in 0..3 {
        let phase = now * 7.0 + i as f64 * 1.3;
        let h = if audible {
            6.0 + 10.0 * ((phase.sin() * 0.5 + 0.5) as f32)
        } else {
            4.0
        };
        let bx = x + i as f32 * 7.0;
        draw_rectangle(bx, cy - h * 0.5, 4.0, h, color);
    }
}
