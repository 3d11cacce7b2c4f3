//! Sound cues
//!
//! The simulation only raises [`SoundEffect`] events; the browser build plays
//! them through preloaded `<audio>` elements.

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SoundEffect {
    /// Player fires a round
    Shoot,
    /// Player starts reloading
    Reload,
}

impl SoundEffect {
    pub const ALL: [SoundEffect; 2] = [SoundEffect::Shoot, SoundEffect::Reload];

    /// Asset key of the sound file
    pub fn key(&self) -> &'static str {
        match self {
            SoundEffect::Shoot => "sound/shoot.mp3",
            SoundEffect::Reload => "sound/reload.wav",
        }
    }

    /// Playback start offset in seconds (skips lead-in silence)
    pub fn start_offset(&self) -> f64 {
        match self {
            SoundEffect::Shoot => 0.0,
            SoundEffect::Reload => 0.6,
        }
    }
}

/// Per-element volume before the master volume is applied
pub const BASE_VOLUME: f32 = 0.2;

#[cfg(target_arch = "wasm32")]
pub use web::AudioManager;

#[cfg(target_arch = "wasm32")]
mod web {
    use std::collections::HashMap;

    use web_sys::HtmlAudioElement;

    use super::{BASE_VOLUME, SoundEffect};
    use crate::assets::AssetError;

    /// Audio manager for the game
    pub struct AudioManager {
        sounds: HashMap<SoundEffect, HtmlAudioElement>,
        master_volume: f32,
        muted: bool,
    }

    impl AudioManager {
        /// Create one preloading `<audio>` element per effect
        pub fn new(master_volume: f32) -> Result<Self, AssetError> {
            let mut sounds = HashMap::new();
            for effect in SoundEffect::ALL {
                let element = HtmlAudioElement::new_with_src(effect.key()).map_err(|e| {
                    AssetError::Sound {
                        key: effect.key().to_string(),
                        reason: format!("{e:?}"),
                    }
                })?;
                element.set_preload("auto");
                sounds.insert(effect, element);
            }

            let mut manager = Self {
                sounds,
                master_volume: 1.0,
                muted: false,
            };
            manager.set_master_volume(master_volume);
            Ok(manager)
        }

        /// Set master volume (0.0 - 1.0)
        pub fn set_master_volume(&mut self, vol: f32) {
            self.master_volume = vol.clamp(0.0, 1.0);
            self.apply_volume();
        }

        /// Mute/unmute all audio
        pub fn set_muted(&mut self, muted: bool) {
            self.muted = muted;
            self.apply_volume();
        }

        fn effective_volume(&self) -> f32 {
            if self.muted {
                0.0
            } else {
                BASE_VOLUME * self.master_volume
            }
        }

        fn apply_volume(&self) {
            let vol = self.effective_volume() as f64;
            for element in self.sounds.values() {
                element.set_volume(vol);
            }
        }

        /// Restart the effect from its start offset
        pub fn play(&self, effect: SoundEffect) {
            if self.effective_volume() <= 0.0 {
                return;
            }
            let Some(element) = self.sounds.get(&effect) else {
                return;
            };
            element.set_current_time(effect.start_offset());
            // Autoplay may be refused until the first user gesture
            if let Err(e) = element.play() {
                log::warn!("could not play {}: {e:?}", effect.key());
            }
        }
    }
}
