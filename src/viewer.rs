//! Content viewer
//!
//! Renders a floor's interior media inside the cab, dispatched by the
//! asset's declared MIME type (see `media::render_mode`). Images decode to
//! a cached texture; audio plays through the interior audio slot and shows
//! its label here; video and documents render as labeled media panels; an
//! unknown type always gets an explicit placeholder, never a blank wall.

use macroquad::prelude::*;
use crate::floor::FloorRecord;
use crate::media::{MediaAsset, RenderMode};
use crate::prefs::ThemePalette;
use crate::ui::Rect;

/// Cab interior renderer with a one-slot image texture cache
pub struct ContentViewer {
    /// Decoded texture for the current image asset, keyed by floor level
    /// and asset name. None in the slot means decoding failed once; the
    /// asset is not retried every frame.
    cached: Option<((i32, String), Option<Texture2D>)>,
}

impl ContentViewer {
    pub fn new() -> Self {
        Self { cached: None }
    }

    /// Draw the interior of the cab for the floor it is resting at (or
    /// headed to). A missing record or absent media degrades to the idle
    /// machine panel.
    pub fn draw_interior(
        &mut self,
        rect: Rect,
        floor: Option<&FloorRecord>,
        now: f64,
        palette: &ThemePalette,
    ) {
        let Some(floor) = floor else {
            draw_idle_panel(rect, now);
            return;
        };
        let Some(asset) = floor.interior.as_ref() else {
            draw_idle_panel(rect, now);
            return;
        };

        match asset.render_mode() {
            RenderMode::Image => self.draw_image(rect, floor.level, asset),
            RenderMode::Video => draw_media_badge(rect, "VIDEO", asset, palette),
            RenderMode::Audio => draw_media_badge(rect, "AUDIO", asset, palette),
            RenderMode::Document => draw_media_badge(rect, "DOCUMENT", asset, palette),
            RenderMode::Unsupported => draw_unsupported(rect, &asset.mime_type),
        }
    }

    fn draw_image(&mut self, rect: Rect, level: i32, asset: &MediaAsset) {
        let key = (level, asset.original_name.clone());
        let cache_hit = self
            .cached
            .as_ref()
            .map_or(false, |(cached_key, _)| *cached_key == key);
        if !cache_hit {
            self.cached = Some((key, decode_texture(asset)));
        }

        match &self.cached {
            Some((_, Some(texture))) => {
                // Scale to fit, preserving aspect ratio
                let (tw, th) = (texture.width(), texture.height());
                if tw <= 0.0 || th <= 0.0 {
                    return;
                }
                let scale = (rect.w / tw).min(rect.h / th).min(1.0);
                let (dw, dh) = (tw * scale, th * scale);
                draw_texture_ex(
                    texture,
                    (rect.center_x() - dw * 0.5).round(),
                    (rect.center_y() - dh * 0.5).round(),
                    WHITE,
                    DrawTextureParams {
                        dest_size: Some(vec2(dw, dh)),
                        ..Default::default()
                    },
                );
            }
            _ => draw_unsupported(rect, &asset.mime_type),
        }
    }
}

fn decode_texture(asset: &MediaAsset) -> Option<Texture2D> {
    let bytes = match asset.decode_payload() {
        Ok(bytes) => bytes,
        Err(e) => {
            eprintln!("Interior '{}' has a bad payload: {}", asset.original_name, e);
            return None;
        }
    };
    match image::load_from_memory(&bytes) {
        Ok(img) => {
            let rgba = img.to_rgba8();
            let (w, h) = (rgba.width(), rgba.height());
            let texture = Texture2D::from_rgba8(w as u16, h as u16, &rgba.into_raw());
            texture.set_filter(FilterMode::Linear);
            Some(texture)
        }
        Err(e) => {
            eprintln!("Interior '{}' failed to decode: {}", asset.original_name, e);
            None
        }
    }
}

/// The empty-cab machine panel with its pulsing status bar
fn draw_idle_panel(rect: Rect, now: f64) {
    let panel = rect.centered(rect.w * 0.5, rect.h * 0.5);
    draw_rectangle(panel.x, panel.y, panel.w, panel.h, Color::new(0.05, 0.07, 0.1, 0.7));
    draw_rectangle_lines(panel.x, panel.y, panel.w, panel.h, 1.0, Color::new(0.35, 0.38, 0.42, 1.0));

    let pulse = ((now * 3.0).sin() * 0.5 + 0.5) as f32;
    let bar = panel.centered(panel.w / 3.0, 4.0);
    draw_rectangle(
        bar.x,
        bar.y,
        bar.w,
        bar.h,
        Color::new(0.65, 0.93, 0.93, 0.3 + 0.7 * pulse),
    );
}

/// Labeled panel for media the cab cannot inline (video, documents) and
/// for audio, whose playback runs through the interior audio slot
fn draw_media_badge(rect: Rect, kind: &str, asset: &MediaAsset, palette: &ThemePalette) {
    let badge_size = 13.0;
    let dims = measure_text(kind, None, badge_size as u16, 1.0);
    draw_text(
        kind,
        (rect.center_x() - dims.width * 0.5).round(),
        (rect.center_y() - 4.0).round(),
        badge_size,
        palette.text,
    );

    let name = truncate_label(&asset.original_name, 22);
    let name_dims = measure_text(&name, None, 11, 1.0);
    draw_text(
        &name,
        (rect.center_x() - name_dims.width * 0.5).round(),
        (rect.center_y() + 12.0).round(),
        11.0,
        Color::new(0.7, 0.7, 0.75, 1.0),
    );
}

fn draw_unsupported(rect: Rect, mime_type: &str) {
    let label = format!("Unsupported file type: {}", mime_type);
    let label = truncate_label(&label, 36);
    let dims = measure_text(&label, None, 12, 1.0);
    draw_text(
        &label,
        (rect.center_x() - dims.width * 0.5).round(),
        rect.center_y().round(),
        12.0,
        Color::new(0.6, 0.6, 0.65, 1.0),
    );
}

fn truncate_label(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let head: String = text.chars().take(max_chars.saturating_sub(1)).collect();
    format!("{}\u{2026}", head)
}
