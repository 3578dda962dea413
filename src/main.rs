//! NEON-LIFT: a synthwave elevator
//!
//! An audio-visual toy: a simulated elevator traveling between
//! user-curated floors, each with a name, flavor text, optional interior
//! media, and an ambient track. State persists between sessions through a
//! small key-value store; everything else is drawn fresh each frame.

/// Version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

mod app;
mod audio;
mod editor;
mod floor;
mod landing;
mod media;
mod panel;
mod persist;
mod prefs;
mod shaft;
mod storage;
mod travel;
mod ui;
mod viewer;

use macroquad::prelude::*;
use app::{AppState, Screen};
use audio::{SfxBank, SfxCue};
use editor::EditorAction;
use panel::PanelAction;
use persist::{keys, StateStore};
use storage::Storage;
use travel::TravelEvent;
use ui::{MouseState, Rect, UiContext};

fn window_conf() -> Conf {
    Conf {
        window_title: format!("NEON-LIFT v{}", VERSION),
        window_width: 1280,
        window_height: 800,
        window_resizable: true,
        high_dpi: true,
        ..Default::default()
    }
}

/// Where persisted state lives: the platform data directory on native,
/// session-only memory in the browser build
fn data_storage() -> Storage {
    #[cfg(not(target_arch = "wasm32"))]
    {
        let base = dirs::data_dir()
            .map(|dir| dir.join("neon-lift"))
            .unwrap_or_else(|| std::path::PathBuf::from("userdata"));
        Storage::local(base)
    }
    #[cfg(target_arch = "wasm32")]
    {
        Storage::memory()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    // Initialize crash logging FIRST (before any other code)
    #[cfg(not(target_arch = "wasm32"))]
    crashlog::setup!(crashlog::cargo_metadata!().capitalized(), false);

    let store = StateStore::new(data_storage());
    let sfx = SfxBank::load().await;
    let mut app = AppState::load(store, sfx);
    let mut ui_ctx = UiContext::new();

    println!("=== NEON-LIFT v{} ===", VERSION);

    loop {
        let now = get_time();

        // Advance the travel timeline and react to phase boundaries
        for event in app.sequencer.update(now) {
            match event {
                TravelEvent::Departed { level } => {
                    app.sfx.play(SfxCue::Depart, app.prefs.sfx_enabled);
                    app.store.save(keys::CURRENT_FLOOR, &level);
                }
                TravelEvent::Arrived { .. } => {
                    app.sfx.play(SfxCue::Arrive, app.prefs.sfx_enabled);
                }
            }
        }

        // Keep the music and interior audio slots in sync with the cab
        app.update_audio().await;

        let (mouse_x, mouse_y) = mouse_position();
        let mouse = MouseState {
            x: mouse_x,
            y: mouse_y,
            left_down: is_mouse_button_down(MouseButton::Left),
            left_pressed: is_mouse_button_pressed(MouseButton::Left),
            left_released: is_mouse_button_released(MouseButton::Left),
            scroll: mouse_wheel().1,
        };
        ui_ctx.begin_frame(mouse);

        let screen_rect = Rect::new(0.0, 0.0, screen_width(), screen_height());
        let palette = app.prefs.theme.palette();
        clear_background(palette.backdrop);

        match app.screen {
            Screen::Landing => {
                if landing::draw_landing(&mut ui_ctx, screen_rect, palette) {
                    app.sfx.play(SfxCue::Click, app.prefs.sfx_enabled);
                    app.screen = Screen::Cab;
                }
            }
            Screen::Cab => {
                // Numeric shortcuts go straight to the sequencer, but not
                // while the edit dialog is open
                if !app.editor.is_open() {
                    if let Some(level) = pressed_digit() {
                        app.select_floor(level, now);
                    }
                }

                // Block background input while the editor modal is up
                if app.editor.is_open() {
                    ui_ctx.begin_modal();
                }

                let content = screen_rect.pad(16.0);
                let (shaft_area, panel_area) = content.split_h_px(content.w * 0.32);
                let shaft_area =
                    Rect::new(shaft_area.x, shaft_area.y, shaft_area.w - 12.0, shaft_area.h);

                shaft::draw_shaft(
                    shaft_area,
                    &app.registry,
                    &app.sequencer,
                    &mut app.viewer,
                    now,
                    palette,
                );

                let action = panel::draw_control_panel(
                    &mut ui_ctx,
                    panel_area,
                    &app.registry,
                    &app.sequencer,
                    &app.prefs,
                    now,
                );
                match action {
                    PanelAction::SelectFloor(level) => app.select_floor(level, now),
                    PanelAction::ToggleSfx => app.toggle_sfx(),
                    PanelAction::SetSpeed(value) => app.set_speed(value),
                    PanelAction::SetTheme(theme) => app.set_theme(theme),
                    PanelAction::ManageFloors => app.editor.open(),
                    PanelAction::None => {}
                }

                // Editor modal on top, with real input restored
                if app.editor.is_open() {
                    ui_ctx.end_modal();
                    let editor_action =
                        app.editor
                            .draw(&mut ui_ctx, screen_rect, &app.registry, palette, now);
                    match editor_action {
                        EditorAction::Commit(records) => app.commit_floors(records),
                        EditorAction::Close => app.editor.close(),
                        EditorAction::None => {}
                    }
                }
            }
        }

        next_frame().await;
    }
}

/// The digit pressed this frame, if any (top row or keypad)
fn pressed_digit() -> Option<i32> {
    const DIGITS: [(KeyCode, KeyCode, i32); 10] = [
        (KeyCode::Key0, KeyCode::Kp0, 0),
        (KeyCode::Key1, KeyCode::Kp1, 1),
        (KeyCode::Key2, KeyCode::Kp2, 2),
        (KeyCode::Key3, KeyCode::Kp3, 3),
        (KeyCode::Key4, KeyCode::Kp4, 4),
        (KeyCode::Key5, KeyCode::Kp5, 5),
        (KeyCode::Key6, KeyCode::Kp6, 6),
        (KeyCode::Key7, KeyCode::Kp7, 7),
        (KeyCode::Key8, KeyCode::Kp8, 8),
        (KeyCode::Key9, KeyCode::Kp9, 9),
    ];
    for (key, keypad, value) in DIGITS {
        if is_key_pressed(key) || is_key_pressed(keypad) {
            return Some(value);
        }
    }
    None
}
