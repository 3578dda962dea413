//! Application state
//!
//! Everything the frame loop owns: the floor registry, the travel
//! sequencer, preferences, the two audio slots, and the modal editor.
//! Mutations that touch a persisted slice save it immediately through the
//! state store; there is no batching or dirty tracking.

use crate::audio::{MusicDirector, SfxBank, SfxCue};
use crate::editor::FloorEditor;
use crate::floor::{default_floors, FloorRecord, FloorRegistry};
use crate::media::RenderMode;
use crate::persist::{keys, StateStore};
use crate::prefs::{clamp_speed, Preferences, Theme};
use crate::travel::TravelSequencer;
use crate::viewer::ContentViewer;

/// Which surface the user is on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// The Enter gate shown before any audio plays
    Landing,
    /// The elevator proper
    Cab,
}

/// Top-level state for the whole app
pub struct AppState {
    pub screen: Screen,
    pub registry: FloorRegistry,
    pub sequencer: TravelSequencer,
    pub prefs: Preferences,
    pub store: StateStore,
    pub sfx: SfxBank,
    /// Ambient floor music slot
    pub music: MusicDirector,
    /// Interior audio-asset slot (separate from the floor music)
    pub interior_audio: MusicDirector,
    pub editor: FloorEditor,
    pub viewer: ContentViewer,
}

impl AppState {
    /// Restore persisted state and assemble the app.
    ///
    /// A stored floor list that fails validation (duplicate levels) is
    /// discarded for the default tower rather than crashing.
    pub fn load(store: StateStore, sfx: SfxBank) -> Self {
        let records: Vec<FloorRecord> = store.load(keys::FLOORS, default_floors());
        let registry = match FloorRegistry::from_records(records) {
            Ok(registry) => registry,
            Err(e) => {
                eprintln!("Stored floors are invalid ({}), using defaults", e);
                FloorRegistry::from_records(default_floors()).unwrap_or_default()
            }
        };

        let current = store.load(keys::CURRENT_FLOOR, 0);
        let prefs = Preferences {
            sfx_enabled: store.load(keys::SFX_ENABLED, true),
            travel_speed: clamp_speed(store.load(keys::TRAVEL_SPEED, 1.0)),
            theme: store.load(keys::THEME, Theme::Cyberpunk),
        };

        Self {
            screen: Screen::Landing,
            registry,
            sequencer: TravelSequencer::new(current),
            prefs,
            store,
            sfx,
            music: MusicDirector::new(),
            interior_audio: MusicDirector::new(),
            editor: FloorEditor::new(),
            viewer: ContentViewer::new(),
        }
    }

    /// Ask the sequencer to travel to `level`; plays the click cue when
    /// the request is accepted. Unknown levels and rejected requests are
    /// silent no-ops.
    pub fn select_floor(&mut self, level: i32, now: f64) {
        if !self.registry.contains(level) {
            return;
        }
        if self.sequencer.request_travel(level, self.prefs.travel_speed, now) {
            self.sfx.play(SfxCue::Click, self.prefs.sfx_enabled);
        }
    }

    /// Replace the registry through its sole mutator and persist the new
    /// list. A rejected list (duplicate levels) is logged and dropped; the
    /// stored list stays as it was.
    pub fn commit_floors(&mut self, records: Vec<FloorRecord>) {
        match self.registry.replace_all(records) {
            Ok(()) => self.store.save(keys::FLOORS, &self.registry.records()),
            Err(e) => eprintln!("Rejected floor list: {}", e),
        }
    }

    pub fn toggle_sfx(&mut self) {
        self.prefs.sfx_enabled = !self.prefs.sfx_enabled;
        self.store.save(keys::SFX_ENABLED, &self.prefs.sfx_enabled);
    }

    pub fn set_speed(&mut self, value: f32) {
        self.prefs.travel_speed = clamp_speed(value);
        self.store.save(keys::TRAVEL_SPEED, &self.prefs.travel_speed);
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.prefs.theme = theme;
        self.store.save(keys::THEME, &self.prefs.theme);
    }

    /// Keep both audio slots in sync with the cab: the current floor's
    /// music while resting, plus its interior asset when that asset is
    /// audio. Everything is silent before Enter and while moving.
    pub async fn update_audio(&mut self) {
        let resting = self.screen == Screen::Cab && !self.sequencer.is_moving();
        let floor = self.registry.get(self.sequencer.current_level());
        let level = self.sequencer.current_level();

        let music = if resting {
            floor.and_then(|f| f.music.as_ref()).map(|m| (level, m))
        } else {
            None
        };
        self.music.update(music).await;

        let interior = if resting {
            floor
                .and_then(|f| f.interior.as_ref())
                .filter(|a| a.render_mode() == RenderMode::Audio)
                .map(|a| (level, a))
        } else {
            None
        };
        self.interior_audio.update(interior).await;
    }
}
