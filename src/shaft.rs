//! Elevator shaft view
//!
//! Vertical cutaway of the tower: one slot per level with a dashed floor
//! line, and the cab drawn at its interpolated position with sliding doors
//! over the interior content.

use macroquad::prelude::*;
use crate::floor::FloorRegistry;
use crate::prefs::ThemePalette;
use crate::travel::TravelSequencer;
use crate::ui::Rect;
use crate::viewer::ContentViewer;

const SHAFT_BG: Color = Color::new(0.0, 0.0, 0.0, 0.3);
const SHAFT_BORDER: Color = Color::new(0.25, 0.28, 0.33, 1.0);
const LEVEL_LABEL: Color = Color::new(0.42, 0.45, 0.5, 1.0);
const DOOR_FILL: Color = Color::new(0.216, 0.255, 0.318, 1.0);

pub fn draw_shaft(
    rect: Rect,
    registry: &FloorRegistry,
    sequencer: &TravelSequencer,
    viewer: &mut ContentViewer,
    now: f64,
    palette: &ThemePalette,
) {
    draw_rectangle(rect.x, rect.y, rect.w, rect.h, SHAFT_BG);
    draw_rectangle_lines(rect.x, rect.y, rect.w, rect.h, 2.0, SHAFT_BORDER);

    let inner = rect.pad(10.0);
    // The shaft spans levels 0..=max even when intermediate floors are
    // missing, so the cab's linear position stays meaningful
    let total = registry.max_level().map_or(1, |max| max + 1).max(1);
    let slot_h = inner.h / total as f32;

    for level in 0..total {
        let slot_top = inner.bottom() - (level + 1) as f32 * slot_h;
        let label = level.to_string();
        draw_text(&label, inner.x, slot_top + slot_h * 0.5 + 4.0, 14.0, LEVEL_LABEL);
        dashed_line(
            inner.x + 18.0,
            inner.right(),
            slot_top + slot_h,
            Color::new(0.3, 0.33, 0.38, 1.0),
        );
    }

    if registry.is_empty() {
        return;
    }

    // Cab at its interpolated position, one slot tall
    let car_pos = sequencer.car_position(now);
    let car = Rect::new(
        inner.x + 22.0,
        inner.bottom() - (car_pos + 1.0) * slot_h,
        inner.w - 26.0,
        slot_h,
    );

    draw_rectangle(car.x, car.y, car.w, car.h, BLACK);
    viewer.draw_interior(
        car.pad(4.0),
        registry.get(sequencer.current_level()),
        now,
        palette,
    );

    // Sliding doors over the interior
    let progress = sequencer.door_progress(now);
    if progress > 0.0 {
        let leaf_w = car.w * 0.5 * progress;
        draw_rectangle(car.x, car.y, leaf_w, car.h, DOOR_FILL);
        draw_rectangle(car.right() - leaf_w, car.y, leaf_w, car.h, DOOR_FILL);
        draw_line(car.x + leaf_w, car.y, car.x + leaf_w, car.bottom(), 2.0, BLACK);
        draw_line(
            car.right() - leaf_w,
            car.y,
            car.right() - leaf_w,
            car.bottom(),
            2.0,
            BLACK,
        );
    }

    draw_rectangle_lines(car.x, car.y, car.w, car.h, 2.0, palette.border);
}

fn dashed_line(x0: f32, x1: f32, y: f32, color: Color) {
    let mut x = x0;
    while x < x1 {
        let end = (x + 5.0).min(x1);
        draw_line(x, y, end, y, 1.0, color);
        x += 10.0;
    }
}
