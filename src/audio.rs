//! Audio cue director
//!
//! Turns drained game events into playback requests. The host owns actual
//! playback; nothing here touches an audio device.

use serde::Serialize;

use crate::settings::Settings;
use crate::sim::{GameEvent, ObstacleKind};

/// Sound identities
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SoundEffect {
    /// Looping background track
    Music,
    /// Looping footsteps while on the ground
    Footsteps,
    /// Coin picked up
    CoinPickup,
    /// Stone block appeared
    Goat,
    /// Fallen log appeared
    Lion,
    /// Temple debris appeared
    Dog,
}

impl SoundEffect {
    /// Animal call announcing an obstacle variant
    pub fn for_obstacle(kind: ObstacleKind) -> Self {
        match kind {
            ObstacleKind::StoneBlock => SoundEffect::Goat,
            ObstacleKind::FallenLog => SoundEffect::Lion,
            ObstacleKind::TempleDebris => SoundEffect::Dog,
        }
    }

    /// Mix level before master/channel scaling
    pub fn base_volume(self) -> f32 {
        match self {
            SoundEffect::Music => 0.5,
            SoundEffect::Footsteps => 0.6,
            SoundEffect::CoinPickup => 0.8,
            SoundEffect::Goat | SoundEffect::Lion | SoundEffect::Dog => 0.6,
        }
    }

    pub fn is_music(self) -> bool {
        self == SoundEffect::Music
    }
}

/// What the host should do with a sound
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum CueRequest {
    /// Play once from the start
    Play { effect: SoundEffect, volume: f32 },
    /// Start (or resume) looping
    Loop { effect: SoundEffect, volume: f32 },
    /// Stop a loop
    Stop { effect: SoundEffect },
}

/// Maps events to cues with the current mix applied
#[derive(Debug, Clone)]
pub struct AudioDirector {
    master_volume: f32,
    sfx_volume: f32,
    music_volume: f32,
    muted: bool,
}

impl Default for AudioDirector {
    fn default() -> Self {
        Self::from_settings(&Settings::default())
    }
}

impl AudioDirector {
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            master_volume: settings.master_volume.clamp(0.0, 1.0),
            sfx_volume: settings.sfx_volume.clamp(0.0, 1.0),
            music_volume: settings.music_volume.clamp(0.0, 1.0),
            muted: settings.muted,
        }
    }

    /// Set master volume (0.0 - 1.0)
    pub fn set_master_volume(&mut self, vol: f32) {
        self.master_volume = vol.clamp(0.0, 1.0);
    }

    /// Set SFX volume (0.0 - 1.0)
    pub fn set_sfx_volume(&mut self, vol: f32) {
        self.sfx_volume = vol.clamp(0.0, 1.0);
    }

    /// Set music volume (0.0 - 1.0)
    pub fn set_music_volume(&mut self, vol: f32) {
        self.music_volume = vol.clamp(0.0, 1.0);
    }

    /// Mute/unmute all audio
    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    /// Get effective volume for an effect
    fn effective_volume(&self, effect: SoundEffect) -> f32 {
        if self.muted {
            return 0.0;
        }
        let channel = if effect.is_music() {
            self.music_volume
        } else {
            self.sfx_volume
        };
        effect.base_volume() * self.master_volume * channel
    }

    fn play(&self, effect: SoundEffect, out: &mut Vec<CueRequest>) {
        let volume = self.effective_volume(effect);
        if volume > 0.0 {
            out.push(CueRequest::Play { effect, volume });
        }
    }

    fn start_loop(&self, effect: SoundEffect, out: &mut Vec<CueRequest>) {
        let volume = self.effective_volume(effect);
        if volume > 0.0 {
            out.push(CueRequest::Loop { effect, volume });
        }
    }

    /// Cues for a single event
    pub fn cues_for(&self, event: &GameEvent) -> Vec<CueRequest> {
        let mut out = Vec::new();
        match *event {
            GameEvent::RunStarted => {
                self.start_loop(SoundEffect::Music, &mut out);
                self.start_loop(SoundEffect::Footsteps, &mut out);
            }
            GameEvent::JumpStarted => out.push(CueRequest::Stop {
                effect: SoundEffect::Footsteps,
            }),
            GameEvent::JumpLanded => self.start_loop(SoundEffect::Footsteps, &mut out),
            GameEvent::ObstacleAppeared { subtype } => {
                let effect = SoundEffect::for_obstacle(ObstacleKind::from_index(subtype));
                self.play(effect, &mut out);
            }
            GameEvent::CoinCollected { .. } => self.play(SoundEffect::CoinPickup, &mut out),
            GameEvent::ScoreChanged { .. } => {}
            GameEvent::GameOver => {
                out.push(CueRequest::Stop {
                    effect: SoundEffect::Footsteps,
                });
                out.push(CueRequest::Stop {
                    effect: SoundEffect::Music,
                });
            }
        }
        out
    }

    /// Cues for a batch of drained events, in event order
    pub fn cues(&self, events: &[GameEvent]) -> Vec<CueRequest> {
        events.iter().flat_map(|e| self.cues_for(e)).collect()
    }
}
