//! User preferences and theming
//!
//! Settings independent of floor content: the SFX toggle, the travel speed
//! multiplier, and the visual theme. Each slice persists under its own
//! store key on every change.

use macroquad::prelude::Color;
use serde::{Deserialize, Serialize};

/// Speed slider range
pub const SPEED_MIN: f32 = 0.5;
pub const SPEED_MAX: f32 = 3.0;
pub const SPEED_STEP: f32 = 0.1;

/// Visual theme for every drawing surface
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Cyberpunk,
    Outrun,
    Vaporwave,
}

impl Theme {
    pub const ALL: [Theme; 3] = [Theme::Cyberpunk, Theme::Outrun, Theme::Vaporwave];

    pub fn label(&self) -> &'static str {
        match self {
            Theme::Cyberpunk => "Cyberpunk",
            Theme::Outrun => "Outrun",
            Theme::Vaporwave => "Vaporwave",
        }
    }

    /// The next theme in the fixed cycle (for the selector widget)
    pub fn next(&self) -> Theme {
        match self {
            Theme::Cyberpunk => Theme::Outrun,
            Theme::Outrun => Theme::Vaporwave,
            Theme::Vaporwave => Theme::Cyberpunk,
        }
    }

    pub fn palette(&self) -> &'static ThemePalette {
        match self {
            Theme::Cyberpunk => &CYBERPUNK,
            Theme::Outrun => &OUTRUN,
            Theme::Vaporwave => &VAPORWAVE,
        }
    }
}

/// Colors a theme contributes to the panels, shaft, and text
#[derive(Debug, Clone, Copy)]
pub struct ThemePalette {
    /// Page background
    pub backdrop: Color,
    /// Translucent panel fill over the backdrop
    pub panel: Color,
    /// Accent text (floor number, headings)
    pub text: Color,
    /// Filled accent (active buttons, sliders)
    pub accent: Color,
    /// Panel and shaft borders
    pub border: Color,
    /// Soft outer glow behind panels
    pub glow: Color,
}

const CYBERPUNK: ThemePalette = ThemePalette {
    backdrop: Color::new(0.067, 0.094, 0.153, 1.0),
    panel: Color::new(0.0, 0.0, 0.0, 0.5),
    text: Color::new(0.404, 0.910, 0.976, 1.0),
    accent: Color::new(0.024, 0.714, 0.831, 1.0),
    border: Color::new(0.024, 0.714, 0.831, 0.7),
    glow: Color::new(0.0, 1.0, 1.0, 0.25),
};

const OUTRUN: ThemePalette = ThemePalette {
    backdrop: Color::new(0.192, 0.180, 0.506, 1.0),
    panel: Color::new(0.0, 0.0, 0.0, 0.5),
    text: Color::new(0.957, 0.447, 0.714, 1.0),
    accent: Color::new(0.925, 0.282, 0.600, 1.0),
    border: Color::new(0.925, 0.282, 0.600, 0.7),
    glow: Color::new(1.0, 0.0, 1.0, 0.3),
};

const VAPORWAVE: ThemePalette = ThemePalette {
    backdrop: Color::new(0.122, 0.161, 0.216, 1.0),
    panel: Color::new(0.0, 0.0, 0.0, 0.5),
    text: Color::new(0.369, 0.918, 0.831, 1.0),
    accent: Color::new(0.176, 0.831, 0.749, 1.0),
    border: Color::new(0.176, 0.831, 0.749, 0.7),
    glow: Color::new(0.39, 0.78, 0.78, 0.3),
};

/// User-adjustable settings, loaded at startup and saved on every change
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Preferences {
    pub sfx_enabled: bool,
    pub travel_speed: f32,
    pub theme: Theme,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            sfx_enabled: true,
            travel_speed: 1.0,
            theme: Theme::Cyberpunk,
        }
    }
}

/// Clamp a stored or slider-produced multiplier into the legal range.
/// Non-finite values (a corrupted store) fall back to 1.0.
pub fn clamp_speed(value: f32) -> f32 {
    if !value.is_finite() {
        return 1.0;
    }
    value.clamp(SPEED_MIN, SPEED_MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_speed_range() {
        assert_eq!(clamp_speed(0.1), SPEED_MIN);
        assert_eq!(clamp_speed(10.0), SPEED_MAX);
        assert_eq!(clamp_speed(1.5), 1.5);
        assert_eq!(clamp_speed(f32::NAN), 1.0);
    }

    #[test]
    fn test_theme_serde_names() {
        assert_eq!(ron::to_string(&Theme::Cyberpunk).unwrap(), "cyberpunk");
        assert_eq!(ron::from_str::<Theme>("vaporwave").unwrap(), Theme::Vaporwave);
    }

    #[test]
    fn test_theme_cycle_covers_all() {
        let mut theme = Theme::Cyberpunk;
        for _ in 0..Theme::ALL.len() {
            theme = theme.next();
        }
        assert_eq!(theme, Theme::Cyberpunk);
    }
}
