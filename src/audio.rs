//! Sound effects and floor music
//!
//! Three fixed interaction cues (click, depart, arrive) loaded eagerly at
//! startup, plus a music director that mirrors a single shared audio
//! element: at most one floor track plays at a time, looped while the cab
//! rests on a floor that has music, silent while moving. All playback is
//! best-effort; a cue or track that fails to load is logged once and
//! skipped.

use macroquad::audio::{
    load_sound, load_sound_from_bytes, play_sound, stop_sound, PlaySoundParams, Sound,
};
use crate::media::MediaAsset;

/// Interaction sound cues
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SfxCue {
    /// Floor button press
    Click,
    /// Doors closed, cab leaving
    Depart,
    /// Cab stopped at the target floor
    Arrive,
}

const SFX_VOLUME: f32 = 0.5;
const MUSIC_VOLUME: f32 = 0.7;

/// The fixed cue set, loaded from the runtime assets directory
pub struct SfxBank {
    click: Option<Sound>,
    depart: Option<Sound>,
    arrive: Option<Sound>,
}

impl SfxBank {
    /// Eagerly load all cues. A missing or undecodable file leaves that
    /// cue silent; the rest keep working.
    pub async fn load() -> Self {
        Self {
            click: load_cue("assets/runtime/sfx/click.wav").await,
            depart: load_cue("assets/runtime/sfx/depart.wav").await,
            arrive: load_cue("assets/runtime/sfx/arrive.wav").await,
        }
    }

    /// Play a cue if SFX are enabled and the cue loaded
    pub fn play(&self, cue: SfxCue, enabled: bool) {
        if !enabled {
            return;
        }
        let sound = match cue {
            SfxCue::Click => &self.click,
            SfxCue::Depart => &self.depart,
            SfxCue::Arrive => &self.arrive,
        };
        if let Some(sound) = sound {
            play_sound(
                sound,
                PlaySoundParams {
                    looped: false,
                    volume: SFX_VOLUME,
                },
            );
        }
    }
}

async fn load_cue(path: &str) -> Option<Sound> {
    match load_sound(path).await {
        Ok(sound) => Some(sound),
        Err(e) => {
            eprintln!("Failed to load sfx {}: {}", path, e);
            None
        }
    }
}

/// Identifies a floor track: the level it belongs to plus the asset name
type TrackKey = (i32, String);

/// A track the director has settled on. `sound` is None when the payload
/// failed to decode, so a bad track is not retried every frame.
struct TrackSlot {
    key: TrackKey,
    sound: Option<Sound>,
}

/// Keeps one looped audio slot in sync with a desired track.
///
/// One instance backs the ambient floor music, a second one the interior
/// audio asset of the current floor; each mirrors a single shared audio
/// element.
#[derive(Default)]
pub struct MusicDirector {
    current: Option<TrackSlot>,
}

impl MusicDirector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reconcile the playing track against the desired one.
    ///
    /// `desired` is the track that should be audible right now (keyed by
    /// the floor level it belongs to), or None for silence. A changed
    /// track is decoded once and looped; the superseded one is simply
    /// stopped; that is an ignorable condition, not an error.
    pub async fn update(&mut self, desired: Option<(i32, &MediaAsset)>) {
        let desired_key: Option<TrackKey> =
            desired.map(|(level, m)| (level, m.original_name.clone()));

        if self.current.as_ref().map(|slot| &slot.key) == desired_key.as_ref() {
            return;
        }

        if let Some(slot) = self.current.take() {
            if let Some(sound) = slot.sound {
                stop_sound(&sound);
            }
        }

        let (Some(key), Some((_, asset))) = (desired_key, desired) else {
            return;
        };

        let sound = match asset.decode_payload() {
            Ok(bytes) => match load_sound_from_bytes(&bytes).await {
                Ok(sound) => {
                    play_sound(
                        &sound,
                        PlaySoundParams {
                            looped: true,
                            volume: MUSIC_VOLUME,
                        },
                    );
                    Some(sound)
                }
                Err(e) => {
                    eprintln!("Music track '{}' failed to decode: {}", asset.original_name, e);
                    None
                }
            },
            Err(e) => {
                eprintln!("Music track '{}' has a bad payload: {}", asset.original_name, e);
                None
            }
        };
        self.current = Some(TrackSlot { key, sound });
    }

    /// Stop playback and forget the slot
    pub fn stop(&mut self) {
        if let Some(slot) = self.current.take() {
            if let Some(sound) = slot.sound {
                stop_sound(&sound);
            }
        }
    }
}
